// Turns foods, one objective and N constraints into an integer program

use std::collections::HashSet;

use crate::domain::{
    Constraint, ConstraintUnit, DecisionVariable, FoodItem, LinearConstraint, LinearExpression,
    LpObjective, LpProblem, NoopObserver, Nutrient, NutritionError, Objective, OptimizationEvent,
    OptimizationObserver, OptimizationRequest, Result, GRAM_CALCULATION_FACTOR,
};
use crate::domain::nutrition::validate_food_list;

/// Total of each nutrient as a linear expression over the intake variables
#[derive(Debug, Clone)]
pub struct NutrientExpressions {
    pub energy: LinearExpression,
    pub protein: LinearExpression,
    pub fat: LinearExpression,
    pub carbohydrates: LinearExpression,
}

impl NutrientExpressions {
    /// `Σ value_per_100g * grams_per_unit / 100 * x_food` for every nutrient
    pub fn from_foods(foods: &[FoodItem]) -> Self {
        let n = foods.len();
        let mut totals = Self {
            energy: LinearExpression::zero(n),
            protein: LinearExpression::zero(n),
            fat: LinearExpression::zero(n),
            carbohydrates: LinearExpression::zero(n),
        };

        for (index, food) in foods.iter().enumerate() {
            for nutrient in Nutrient::ALL {
                let coefficient =
                    food.nutrient(nutrient) * food.grams_per_unit() / GRAM_CALCULATION_FACTOR;
                totals.get_mut(nutrient).add_term(index, coefficient);
            }
        }

        totals
    }

    pub fn get(&self, nutrient: Nutrient) -> &LinearExpression {
        match nutrient {
            Nutrient::Energy => &self.energy,
            Nutrient::Protein => &self.protein,
            Nutrient::Fat => &self.fat,
            Nutrient::Carbohydrates => &self.carbohydrates,
        }
    }

    fn get_mut(&mut self, nutrient: Nutrient) -> &mut LinearExpression {
        match nutrient {
            Nutrient::Energy => &mut self.energy,
            Nutrient::Protein => &mut self.protein,
            Nutrient::Fat => &mut self.fat,
            Nutrient::Carbohydrates => &mut self.carbohydrates,
        }
    }
}

/// Single-use builder; `build` consumes it so expressions never leak into
/// another request.
pub struct ModelBuilder<'a> {
    foods: Vec<FoodItem>,
    objective: Objective,
    constraints: Vec<Constraint>,
    observer: &'a dyn OptimizationObserver,
}

impl<'a> ModelBuilder<'a> {
    pub fn new(foods: Vec<FoodItem>, objective: Objective, constraints: Vec<Constraint>) -> Self {
        Self {
            foods,
            objective,
            constraints,
            observer: &NoopObserver,
        }
    }

    pub fn from_request(request: OptimizationRequest) -> Self {
        let (foods, objective, constraints) = request.into_parts();
        Self::new(foods, objective, constraints)
    }

    pub fn with_observer(mut self, observer: &'a dyn OptimizationObserver) -> Self {
        self.observer = observer;
        self
    }

    /// Build the problem. Returns the foods back so the caller can recompute
    /// totals from the raw food data once solved.
    pub fn build(self) -> Result<(LpProblem, Vec<FoodItem>)> {
        validate_food_list(&self.foods)?;

        let variables = self.intake_variables();
        self.observer.on_event(&OptimizationEvent::VariablesCreated {
            count: variables.len(),
        });

        let totals = NutrientExpressions::from_foods(&self.foods);

        let objective = LpObjective {
            name: self.objective.name(),
            sense: self.objective.sense(),
            expression: totals.get(self.objective.nutrient()).clone(),
        };
        self.observer.on_event(&OptimizationEvent::ObjectiveSet {
            name: objective.name.clone(),
        });

        let mut applied = HashSet::new();
        let mut constraints = Vec::with_capacity(self.constraints.len());
        for constraint in &self.constraints {
            let name = constraint.name();
            if !applied.insert(name.clone()) {
                return Err(NutritionError::InvalidConstraint(format!(
                    "Duplicate constraint: {}. Each (min/max, nutrient, unit) combination may appear only once.",
                    name
                )));
            }

            let linear = translate_constraint(constraint, &totals)?;
            self.observer
                .on_event(&OptimizationEvent::ConstraintApplied { name });
            constraints.push(linear);
        }

        let problem = LpProblem {
            name: objective.name.clone(),
            variables,
            objective,
            constraints,
        };

        Ok((problem, self.foods))
    }

    fn intake_variables(&self) -> Vec<DecisionVariable> {
        self.foods
            .iter()
            .map(|food| {
                DecisionVariable::integer(food.name()).with_bounds(
                    f64::from(food.minimum_intake()),
                    f64::from(food.maximum_intake()),
                )
            })
            .collect()
    }
}

/// Build the integer program for one request
pub fn build_problem(
    foods: Vec<FoodItem>,
    objective: Objective,
    constraints: Vec<Constraint>,
) -> Result<LpProblem> {
    ModelBuilder::new(foods, objective, constraints)
        .build()
        .map(|(problem, _)| problem)
}

fn translate_constraint(
    constraint: &Constraint,
    totals: &NutrientExpressions,
) -> Result<LinearConstraint> {
    let comparison = constraint.bound_type().comparison();
    let nutrient = constraint.nutrient();

    match constraint.unit() {
        ConstraintUnit::Amount | ConstraintUnit::Energy => Ok(LinearConstraint::new(
            constraint.name(),
            comparison,
            totals.get(nutrient).clone(),
            constraint.value(),
        )),
        ConstraintUnit::Ratio => {
            let energy_per_gram = nutrient.energy_per_gram().ok_or_else(|| {
                NutritionError::InvalidConstraint(format!(
                    "Ratio constraints are defined only for protein, fat and carbohydrates, not {}.",
                    nutrient
                ))
            })?;

            // nutrient_energy (≤|≥) total_energy * value / 100, moved to one side
            let nutrient_energy = totals.get(nutrient) * energy_per_gram;
            let energy_share =
                totals.get(Nutrient::Energy) * (constraint.value() / GRAM_CALCULATION_FACTOR);

            Ok(LinearConstraint::new(
                constraint.name(),
                comparison,
                nutrient_energy - energy_share,
                0.0,
            ))
        }
    }
}
