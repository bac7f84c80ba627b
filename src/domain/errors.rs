use super::solver_service::SolverError;

/// Errors raised while validating a request or building its model
#[derive(Debug, thiserror::Error)]
pub enum NutritionError {
    /// A domain entity failed its own invariant check
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// A valid constraint that cannot be translated into the model
    #[error("Invalid constraint: {0}")]
    InvalidConstraint(String),

    #[error(transparent)]
    Solver(#[from] SolverError),
}

pub type Result<T> = std::result::Result<T, NutritionError>;
