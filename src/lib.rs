// Domain layer: Business logic and rules
pub mod domain;

// Application layer: Use cases, model building and boundary adapters
pub mod application;

// Solver adapters: Concrete implementations of SolverService
pub mod solver;

pub mod logging;

// Infrastructure layer: External concerns (gRPC, server)
#[cfg(feature = "server")]
pub mod infrastructure;

// Re-export commonly used types
pub use domain::{
    BoundType, Constraint, ConstraintUnit, FoodItem, LpProblem, Nutrient, NutrientValues,
    NutritionError, Objective, ObjectiveSense, OptimalSolution, OptimizationEvent,
    OptimizationObserver, OptimizationRequest, OptimizationResult, PfcRatio, SolutionStatus,
    SolverError, SolverService,
};

pub use application::{build_problem, ModelBuilder, NutritionOptimizer};
pub use solver::GoodLpSolver;

#[cfg(feature = "server")]
pub use infrastructure::{start_server, ServerConfig};
