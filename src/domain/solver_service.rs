// Domain service interface for solving integer programs
// Any LP/MILP backend plugs in behind this trait

use super::models::{LpProblem, SolveOutcome};

/// Error types for the solver service
#[derive(Debug, thiserror::Error)]
pub enum SolverError {
    #[error("Invalid problem: {0}")]
    InvalidProblem(String),

    #[error("Solver execution failed: {0}")]
    ExecutionFailed(String),
}

pub type Result<T> = std::result::Result<T, SolverError>;

/// Domain service interface for optimization solvers
pub trait SolverService: Send + Sync {
    /// Solve an integer program and report status plus variable values
    fn solve(&self, problem: &LpProblem) -> Result<SolveOutcome>;

    /// Validate a problem without solving it
    fn validate(&self, problem: &LpProblem) -> Result<()> {
        let mut errors = Vec::new();
        let num_vars = problem.num_variables();

        if num_vars == 0 {
            errors.push("Problem must have at least one variable".to_string());
        }

        if problem.objective.expression.num_variables() != num_vars {
            errors.push(format!(
                "Objective has {} coefficients but problem has {} variables",
                problem.objective.expression.num_variables(),
                num_vars
            ));
        }

        for constraint in &problem.constraints {
            if constraint.expression.num_variables() != num_vars {
                errors.push(format!(
                    "Constraint '{}' has {} coefficients but problem has {} variables",
                    constraint.name,
                    constraint.expression.num_variables(),
                    num_vars
                ));
            }
        }

        for (i, var) in problem.variables.iter().enumerate() {
            if var.lower_bound > var.upper_bound {
                errors.push(format!(
                    "Variable {} '{}' has lower bound ({}) > upper bound ({})",
                    i, var.name, var.lower_bound, var.upper_bound
                ));
            }
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(SolverError::InvalidProblem(errors.join("; ")))
        }
    }

    /// Get the name of this solver backend
    fn name(&self) -> &str;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::{DecisionVariable, LinearConstraint, LinearExpression, LpObjective};
    use crate::domain::value_objects::{Comparison, ObjectiveSense};

    struct NeverSolves;

    impl SolverService for NeverSolves {
        fn solve(&self, _problem: &LpProblem) -> Result<SolveOutcome> {
            Err(SolverError::ExecutionFailed("not implemented".into()))
        }

        fn name(&self) -> &str {
            "never"
        }
    }

    fn problem(constraint_len: usize, bounds: (f64, f64)) -> LpProblem {
        LpProblem {
            name: "test".into(),
            variables: vec![DecisionVariable::integer("x").with_bounds(bounds.0, bounds.1)],
            objective: LpObjective {
                name: "obj".into(),
                sense: ObjectiveSense::Maximize,
                expression: LinearExpression::zero(1),
            },
            constraints: vec![LinearConstraint::new(
                "c",
                Comparison::LessThanOrEqual,
                LinearExpression::zero(constraint_len),
                1.0,
            )],
        }
    }

    #[test]
    fn validate_accepts_consistent_problem() {
        assert!(NeverSolves.validate(&problem(1, (0.0, 3.0))).is_ok());
    }

    #[test]
    fn validate_reports_every_issue() {
        let err = NeverSolves.validate(&problem(2, (4.0, 3.0))).unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("Constraint 'c' has 2 coefficients"));
        assert!(msg.contains("lower bound (4) > upper bound (3)"));
    }
}
