use std::collections::{BTreeMap, HashSet};

use super::errors::{NutritionError, Result};
use super::value_objects::{BoundType, ConstraintUnit, Nutrient, ObjectiveSense, SolutionStatus};

pub const REVIEW_INPUT_MESSAGE: &str =
    "Please review the constraints, the grams per unit, or the intake values.";

/// One value per nutrient
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct NutrientValues {
    pub energy: f64,
    pub protein: f64,
    pub fat: f64,
    pub carbohydrates: f64,
}

impl NutrientValues {
    pub fn new(energy: f64, protein: f64, fat: f64, carbohydrates: f64) -> Self {
        Self {
            energy,
            protein,
            fat,
            carbohydrates,
        }
    }

    pub fn get(&self, nutrient: Nutrient) -> f64 {
        match nutrient {
            Nutrient::Energy => self.energy,
            Nutrient::Protein => self.protein,
            Nutrient::Fat => self.fat,
            Nutrient::Carbohydrates => self.carbohydrates,
        }
    }

    pub fn get_mut(&mut self, nutrient: Nutrient) -> &mut f64 {
        match nutrient {
            Nutrient::Energy => &mut self.energy,
            Nutrient::Protein => &mut self.protein,
            Nutrient::Fat => &mut self.fat,
            Nutrient::Carbohydrates => &mut self.carbohydrates,
        }
    }
}

/// A food with nutrient content per 100 g and integer intake bounds.
#[derive(Debug, Clone, PartialEq)]
pub struct FoodItem {
    name: String,
    nutrients: NutrientValues,
    grams_per_unit: f64,
    minimum_intake: u32,
    maximum_intake: u32,
}

impl FoodItem {
    pub fn new(
        name: impl Into<String>,
        nutrients: NutrientValues,
        grams_per_unit: f64,
        minimum_intake: i64,
        maximum_intake: i64,
    ) -> Result<Self> {
        let name = name.into();

        if name.trim().is_empty() {
            return Err(NutritionError::InvalidInput(
                "Food name must be provided.".to_string(),
            ));
        }

        if Nutrient::ALL
            .iter()
            .any(|&n| !nutrients.get(n).is_finite() || nutrients.get(n) < 0.0)
        {
            return Err(NutritionError::InvalidInput(format!(
                "Invalid values for {}. All nutrient values must be non-negative.",
                name
            )));
        }

        if !grams_per_unit.is_finite() || grams_per_unit <= 0.0 {
            return Err(NutritionError::InvalidInput(format!(
                "Invalid grams per unit for {}. It must be greater than zero.",
                name
            )));
        }

        let (minimum, maximum) = match (
            u32::try_from(minimum_intake),
            u32::try_from(maximum_intake),
        ) {
            (Ok(min), Ok(max)) => (min, max),
            _ => {
                return Err(NutritionError::InvalidInput(format!(
                    "Invalid intake values for {}. Both minimum_intake and maximum_intake must be non-negative.",
                    name
                )))
            }
        };

        if minimum > maximum {
            return Err(NutritionError::InvalidInput(format!(
                "Invalid intake range for {}. Maximum_intake must be greater than minimum_intake.",
                name
            )));
        }

        Ok(Self {
            name,
            nutrients,
            grams_per_unit,
            minimum_intake: minimum,
            maximum_intake: maximum,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn nutrients(&self) -> &NutrientValues {
        &self.nutrients
    }

    pub fn nutrient(&self, nutrient: Nutrient) -> f64 {
        self.nutrients.get(nutrient)
    }

    pub fn grams_per_unit(&self) -> f64 {
        self.grams_per_unit
    }

    pub fn minimum_intake(&self) -> u32 {
        self.minimum_intake
    }

    pub fn maximum_intake(&self) -> u32 {
        self.maximum_intake
    }
}

/// Single optimization target
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Objective {
    sense: ObjectiveSense,
    nutrient: Nutrient,
}

impl Objective {
    pub fn new(sense: ObjectiveSense, nutrient: Nutrient) -> Self {
        Self { sense, nutrient }
    }

    pub fn parse(sense: &str, nutrient: &str) -> Result<Self> {
        Ok(Self::new(sense.parse()?, nutrient.parse()?))
    }

    pub fn sense(&self) -> ObjectiveSense {
        self.sense
    }

    pub fn nutrient(&self) -> Nutrient {
        self.nutrient
    }

    /// Cosmetic objective name, e.g. `maximize_energy`
    pub fn name(&self) -> String {
        format!("{}_{}", self.sense, self.nutrient)
    }
}

/// Bound on a nutrient amount, energy, or energy ratio
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Constraint {
    bound_type: BoundType,
    nutrient: Nutrient,
    unit: ConstraintUnit,
    value: f64,
}

impl Constraint {
    pub fn new(
        bound_type: BoundType,
        nutrient: Nutrient,
        unit: ConstraintUnit,
        value: f64,
    ) -> Result<Self> {
        if !value.is_finite() || value < 0.0 {
            return Err(NutritionError::InvalidInput(format!(
                "Constraint value must be non-negative. Got {}.",
                value
            )));
        }

        Ok(Self {
            bound_type,
            nutrient,
            unit,
            value,
        })
    }

    pub fn parse(bound_type: &str, nutrient: &str, unit: &str, value: f64) -> Result<Self> {
        Self::new(bound_type.parse()?, nutrient.parse()?, unit.parse()?, value)
    }

    pub fn bound_type(&self) -> BoundType {
        self.bound_type
    }

    pub fn nutrient(&self) -> Nutrient {
        self.nutrient
    }

    pub fn unit(&self) -> ConstraintUnit {
        self.unit
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    /// Unique per (bound type, nutrient, unit), e.g. `max_energy_energy`
    pub fn name(&self) -> String {
        format!("{}_{}_{}", self.bound_type, self.nutrient, self.unit)
    }
}

/// A food list is usable when it is non-empty and every name is unique.
/// Solver values and intake are keyed by name.
pub fn validate_food_list(foods: &[FoodItem]) -> Result<()> {
    if foods.is_empty() {
        return Err(NutritionError::InvalidInput(
            "At least one food must be provided.".to_string(),
        ));
    }

    let mut seen = HashSet::new();
    for food in foods {
        if !seen.insert(food.name()) {
            return Err(NutritionError::InvalidInput(format!(
                "Duplicate food name: {}. Food names must be unique.",
                food.name()
            )));
        }
    }

    Ok(())
}

/// Everything one optimization consumes
#[derive(Debug, Clone)]
pub struct OptimizationRequest {
    foods: Vec<FoodItem>,
    objective: Objective,
    constraints: Vec<Constraint>,
}

impl OptimizationRequest {
    pub fn new(
        foods: Vec<FoodItem>,
        objective: Objective,
        constraints: Vec<Constraint>,
    ) -> Result<Self> {
        validate_food_list(&foods)?;

        Ok(Self {
            foods,
            objective,
            constraints,
        })
    }

    pub fn foods(&self) -> &[FoodItem] {
        &self.foods
    }

    pub fn objective(&self) -> Objective {
        self.objective
    }

    pub fn constraints(&self) -> &[Constraint] {
        &self.constraints
    }

    pub fn into_parts(self) -> (Vec<FoodItem>, Objective, Vec<Constraint>) {
        (self.foods, self.objective, self.constraints)
    }
}

/// Share of macro-derived energy, in percent
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PfcRatio {
    pub protein: f64,
    pub fat: f64,
    pub carbohydrates: f64,
}

impl PfcRatio {
    pub fn sum(&self) -> f64 {
        self.protein + self.fat + self.carbohydrates
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct OptimalSolution {
    pub food_intake: BTreeMap<String, u32>,
    pub total_nutrient_values: NutrientValues,
    pub pfc_ratio: PfcRatio,
}

#[derive(Debug, Clone, PartialEq)]
pub enum OptimizationResult {
    Optimal(OptimalSolution),
    Unsolved {
        status: SolutionStatus,
        message: String,
    },
}

impl OptimizationResult {
    pub fn unsolved(status: SolutionStatus) -> Self {
        OptimizationResult::Unsolved {
            status,
            message: REVIEW_INPUT_MESSAGE.to_string(),
        }
    }

    pub fn status(&self) -> SolutionStatus {
        match self {
            OptimizationResult::Optimal(_) => SolutionStatus::Optimal,
            OptimizationResult::Unsolved { status, .. } => *status,
        }
    }

    pub fn solution(&self) -> Option<&OptimalSolution> {
        match self {
            OptimizationResult::Optimal(solution) => Some(solution),
            OptimizationResult::Unsolved { .. } => None,
        }
    }
}
