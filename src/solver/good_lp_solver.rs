// good_lp adapter: translates LpProblem into a good_lp model.
// microlp (pure Rust) by default, COIN-OR CBC with the `cbc` feature.

use std::collections::BTreeMap;

use good_lp::{
    variable, variables, Expression, ResolutionError, Solution as GoodLpSolutionTrait,
    SolverModel, Variable as GoodLpVariable,
};

#[cfg(feature = "cbc")]
use good_lp::solvers::coin_cbc::coin_cbc as backend;
#[cfg(not(feature = "cbc"))]
use good_lp::solvers::microlp::microlp as backend;

use crate::domain::{
    models::{LinearExpression, LpProblem, SolveOutcome},
    solver_service::{Result, SolverService},
    value_objects::{Comparison, ObjectiveSense, SolutionStatus},
};

#[cfg(feature = "cbc")]
const BACKEND_NAME: &str = "COIN-OR CBC";
#[cfg(not(feature = "cbc"))]
const BACKEND_NAME: &str = "microlp";

pub struct GoodLpSolver;

impl GoodLpSolver {
    pub fn new() -> Self {
        Self
    }
}

impl Default for GoodLpSolver {
    fn default() -> Self {
        Self::new()
    }
}

fn to_expression(expression: &LinearExpression, lp_variables: &[GoodLpVariable]) -> Expression {
    let mut expr: Expression = 0.into();
    for (&coeff, &var) in expression.coefficients().iter().zip(lp_variables) {
        if coeff != 0.0 {
            expr += coeff * var;
        }
    }
    expr
}

impl SolverService for GoodLpSolver {
    fn solve(&self, problem: &LpProblem) -> Result<SolveOutcome> {
        self.validate(problem)?;

        let mut vars = variables!();
        let lp_variables: Vec<GoodLpVariable> = problem
            .variables
            .iter()
            .map(|var_def| {
                vars.add(
                    variable()
                        .integer()
                        .min(var_def.lower_bound)
                        .max(var_def.upper_bound)
                        .name(var_def.name.clone()),
                )
            })
            .collect();

        let objective = to_expression(&problem.objective.expression, &lp_variables);
        let unsolved = match problem.objective.sense {
            ObjectiveSense::Maximize => vars.maximise(objective),
            ObjectiveSense::Minimize => vars.minimise(objective),
        };

        let mut lp_model = unsolved.using(backend);
        for constraint in &problem.constraints {
            let lhs = to_expression(&constraint.expression, &lp_variables);
            lp_model = match constraint.comparison {
                Comparison::LessThanOrEqual => lp_model.with(lhs.leq(constraint.bound)),
                Comparison::GreaterThanOrEqual => lp_model.with(lhs.geq(constraint.bound)),
            };
        }

        match lp_model.solve() {
            Ok(sol) => {
                let variable_values: BTreeMap<String, f64> = problem
                    .variables
                    .iter()
                    .zip(&lp_variables)
                    .map(|(var_def, &var)| (var_def.name.clone(), sol.value(var)))
                    .collect();
                Ok(SolveOutcome::optimal(variable_values))
            }
            Err(ResolutionError::Infeasible) => Ok(SolveOutcome::unsolved(SolutionStatus::Infeasible)),
            Err(ResolutionError::Unbounded) => Ok(SolveOutcome::unsolved(SolutionStatus::Unbounded)),
            Err(e) => {
                tracing::warn!(solver = BACKEND_NAME, error = %e, "solver stopped without a result");
                Ok(SolveOutcome::unsolved(SolutionStatus::NotSolved))
            }
        }
    }

    fn name(&self) -> &str {
        BACKEND_NAME
    }
}
