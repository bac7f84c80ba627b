use std::collections::BTreeMap;
use std::ops::{Add, Mul, Sub};

use super::value_objects::{Comparison, ObjectiveSense, SolutionStatus};

/// Integer decision variable: the count of units chosen for one food
#[derive(Debug, Clone, PartialEq)]
pub struct DecisionVariable {
    pub name: String,
    pub lower_bound: f64,
    pub upper_bound: f64,
}

impl DecisionVariable {
    pub fn integer(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            lower_bound: 0.0,
            upper_bound: f64::INFINITY,
        }
    }

    pub fn with_bounds(mut self, lower: f64, upper: f64) -> Self {
        self.lower_bound = lower;
        self.upper_bound = upper;
        self
    }
}

/// Linear combination of the problem's decision variables.
///
/// Coefficients are dense and indexed like `LpProblem::variables`.
#[derive(Debug, Clone, PartialEq)]
pub struct LinearExpression {
    coefficients: Vec<f64>,
}

impl LinearExpression {
    pub fn zero(num_variables: usize) -> Self {
        Self {
            coefficients: vec![0.0; num_variables],
        }
    }

    pub fn from_coefficients(coefficients: Vec<f64>) -> Self {
        Self { coefficients }
    }

    pub fn add_term(&mut self, variable: usize, coefficient: f64) {
        self.coefficients[variable] += coefficient;
    }

    pub fn coefficients(&self) -> &[f64] {
        &self.coefficients
    }

    pub fn num_variables(&self) -> usize {
        self.coefficients.len()
    }

    /// Element-wise combination. The shorter side is padded with zero
    /// coefficients, so no term of either operand is dropped.
    fn zip_with(mut self, rhs: &LinearExpression, op: impl Fn(f64, f64) -> f64) -> Self {
        let len = self.coefficients.len().max(rhs.coefficients.len());
        self.coefficients.resize(len, 0.0);
        for (index, lhs) in self.coefficients.iter_mut().enumerate() {
            let r = rhs.coefficients.get(index).copied().unwrap_or(0.0);
            *lhs = op(*lhs, r);
        }
        self
    }
}

impl Add<&LinearExpression> for LinearExpression {
    type Output = LinearExpression;

    fn add(self, rhs: &LinearExpression) -> Self::Output {
        self.zip_with(rhs, |a, b| a + b)
    }
}

impl Sub<LinearExpression> for LinearExpression {
    type Output = LinearExpression;

    fn sub(self, rhs: LinearExpression) -> Self::Output {
        self.zip_with(&rhs, |a, b| a - b)
    }
}

impl Mul<f64> for &LinearExpression {
    type Output = LinearExpression;

    fn mul(self, factor: f64) -> Self::Output {
        LinearExpression {
            coefficients: self.coefficients.iter().map(|c| c * factor).collect(),
        }
    }
}

/// Objective to minimize or maximize
#[derive(Debug, Clone)]
pub struct LpObjective {
    pub name: String,
    pub sense: ObjectiveSense,
    pub expression: LinearExpression,
}

/// `expression (≤|≥) bound`
#[derive(Debug, Clone)]
pub struct LinearConstraint {
    pub name: String,
    pub comparison: Comparison,
    pub expression: LinearExpression,
    pub bound: f64,
}

impl LinearConstraint {
    pub fn new(
        name: impl Into<String>,
        comparison: Comparison,
        expression: LinearExpression,
        bound: f64,
    ) -> Self {
        Self {
            name: name.into(),
            comparison,
            expression,
            bound,
        }
    }
}

/// Complete integer program handed to a solver
#[derive(Debug, Clone)]
pub struct LpProblem {
    pub name: String,
    pub variables: Vec<DecisionVariable>,
    pub objective: LpObjective,
    pub constraints: Vec<LinearConstraint>,
}

impl LpProblem {
    pub fn num_variables(&self) -> usize {
        self.variables.len()
    }

    pub fn num_constraints(&self) -> usize {
        self.constraints.len()
    }

    pub fn constraint(&self, name: &str) -> Option<&LinearConstraint> {
        self.constraints.iter().find(|c| c.name == name)
    }
}

/// Raw solver answer, keyed by decision variable name
#[derive(Debug, Clone)]
pub struct SolveOutcome {
    pub status: SolutionStatus,
    pub variable_values: BTreeMap<String, f64>,
}

impl SolveOutcome {
    pub fn optimal(variable_values: BTreeMap<String, f64>) -> Self {
        Self {
            status: SolutionStatus::Optimal,
            variable_values,
        }
    }

    pub fn unsolved(status: SolutionStatus) -> Self {
        Self {
            status,
            variable_values: BTreeMap::new(),
        }
    }

    pub fn is_optimal(&self) -> bool {
        self.status == SolutionStatus::Optimal
    }
}
