// Domain value objects representing core business concepts

use std::fmt;
use std::str::FromStr;

use super::errors::NutritionError;

/// Nutrient values are expressed per 100 g of food
pub const GRAM_CALCULATION_FACTOR: f64 = 100.0;

pub const PROTEIN_ENERGY_PER_GRAM: f64 = 4.0;
pub const FAT_ENERGY_PER_GRAM: f64 = 9.0;
pub const CARBOHYDRATES_ENERGY_PER_GRAM: f64 = 4.0;

/// Nutrient tracked for every food
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Nutrient {
    /// Energy in kcal
    Energy,
    /// Protein in grams
    Protein,
    /// Fat in grams
    Fat,
    /// Carbohydrates in grams
    Carbohydrates,
}

impl Nutrient {
    pub const ALL: [Nutrient; 4] = [
        Nutrient::Energy,
        Nutrient::Protein,
        Nutrient::Fat,
        Nutrient::Carbohydrates,
    ];

    /// The energy-yielding macro-nutrients, in PFC order
    pub const MACROS: [Nutrient; 3] = [Nutrient::Protein, Nutrient::Fat, Nutrient::Carbohydrates];

    pub fn as_str(&self) -> &'static str {
        match self {
            Nutrient::Energy => "energy",
            Nutrient::Protein => "protein",
            Nutrient::Fat => "fat",
            Nutrient::Carbohydrates => "carbohydrates",
        }
    }

    /// kcal per gram for the macro-nutrients; energy has no conversion factor
    pub fn energy_per_gram(&self) -> Option<f64> {
        match self {
            Nutrient::Energy => None,
            Nutrient::Protein => Some(PROTEIN_ENERGY_PER_GRAM),
            Nutrient::Fat => Some(FAT_ENERGY_PER_GRAM),
            Nutrient::Carbohydrates => Some(CARBOHYDRATES_ENERGY_PER_GRAM),
        }
    }
}

impl fmt::Display for Nutrient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Nutrient {
    type Err = NutritionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "energy" => Ok(Nutrient::Energy),
            "protein" => Ok(Nutrient::Protein),
            "fat" => Ok(Nutrient::Fat),
            "carbohydrates" => Ok(Nutrient::Carbohydrates),
            other => Err(NutritionError::InvalidInput(format!(
                "Invalid nutritional component: {}. Valid components are {}.",
                other,
                quoted_list(&["energy", "protein", "fat", "carbohydrates"])
            ))),
        }
    }
}

/// Direction of optimization
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ObjectiveSense {
    Minimize,
    Maximize,
}

impl ObjectiveSense {
    pub fn as_str(&self) -> &'static str {
        match self {
            ObjectiveSense::Minimize => "minimize",
            ObjectiveSense::Maximize => "maximize",
        }
    }
}

impl fmt::Display for ObjectiveSense {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ObjectiveSense {
    type Err = NutritionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "minimize" => Ok(ObjectiveSense::Minimize),
            "maximize" => Ok(ObjectiveSense::Maximize),
            other => Err(NutritionError::InvalidInput(format!(
                "Invalid objective sense: {}. Valid values are {}.",
                other,
                quoted_list(&["minimize", "maximize"])
            ))),
        }
    }
}

/// Whether a constraint is an upper or a lower limit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BoundType {
    /// Lower limit (≥)
    Min,
    /// Upper limit (≤)
    Max,
}

impl BoundType {
    pub fn as_str(&self) -> &'static str {
        match self {
            BoundType::Min => "min",
            BoundType::Max => "max",
        }
    }

    pub fn comparison(&self) -> Comparison {
        match self {
            BoundType::Min => Comparison::GreaterThanOrEqual,
            BoundType::Max => Comparison::LessThanOrEqual,
        }
    }
}

impl fmt::Display for BoundType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BoundType {
    type Err = NutritionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "min" => Ok(BoundType::Min),
            "max" => Ok(BoundType::Max),
            other => Err(NutritionError::InvalidInput(format!(
                "Invalid Min/Max value: {}. Valid values are {}.",
                other,
                quoted_list(&["min", "max"])
            ))),
        }
    }
}

/// How a constraint value is interpreted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConstraintUnit {
    /// Grams of the nutrient
    Amount,
    /// kcal of energy
    Energy,
    /// Percentage of total energy contributed by the nutrient
    Ratio,
}

impl ConstraintUnit {
    pub fn as_str(&self) -> &'static str {
        match self {
            ConstraintUnit::Amount => "amount",
            ConstraintUnit::Energy => "energy",
            ConstraintUnit::Ratio => "ratio",
        }
    }
}

impl fmt::Display for ConstraintUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ConstraintUnit {
    type Err = NutritionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "amount" => Ok(ConstraintUnit::Amount),
            "energy" => Ok(ConstraintUnit::Energy),
            "ratio" => Ok(ConstraintUnit::Ratio),
            other => Err(NutritionError::InvalidInput(format!(
                "Invalid unit: {}. Valid units are {}.",
                other,
                quoted_list(&["amount", "energy", "ratio"])
            ))),
        }
    }
}

/// Type of constraint comparison
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Comparison {
    /// Less than or equal (≤)
    LessThanOrEqual,
    /// Greater than or equal (≥)
    GreaterThanOrEqual,
}

/// Status of the optimization solution
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SolutionStatus {
    /// Found optimal solution
    Optimal,
    /// Problem has no feasible solution
    Infeasible,
    /// Objective can be improved infinitely
    Unbounded,
    /// Solver stopped without a conclusive answer
    NotSolved,
}

impl fmt::Display for SolutionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SolutionStatus::Optimal => write!(f, "Optimal"),
            SolutionStatus::Infeasible => write!(f, "Infeasible"),
            SolutionStatus::Unbounded => write!(f, "Unbounded"),
            SolutionStatus::NotSolved => write!(f, "Not Solved"),
        }
    }
}

fn quoted_list(values: &[&str]) -> String {
    let quoted: Vec<String> = values.iter().map(|v| format!("'{}'", v)).collect();
    format!("[{}]", quoted.join(", "))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_every_nutrient_name() {
        for nutrient in Nutrient::ALL {
            assert_eq!(nutrient.as_str().parse::<Nutrient>().unwrap(), nutrient);
        }
    }

    #[test]
    fn unknown_nutrient_lists_valid_components() {
        let err = "invalid_component".parse::<Nutrient>().unwrap_err();
        assert_eq!(
            err.to_string(),
            "Invalid input: Invalid nutritional component: invalid_component. \
             Valid components are ['energy', 'protein', 'fat', 'carbohydrates']."
        );
    }

    #[test]
    fn unknown_sense_bound_and_unit_are_rejected() {
        let sense = "invalid_sense".parse::<ObjectiveSense>().unwrap_err();
        assert!(sense
            .to_string()
            .contains("Valid values are ['minimize', 'maximize']."));

        let bound = "invalid_min_max".parse::<BoundType>().unwrap_err();
        assert!(bound
            .to_string()
            .contains("Invalid Min/Max value: invalid_min_max. Valid values are ['min', 'max']."));

        let unit = "invalid_unit".parse::<ConstraintUnit>().unwrap_err();
        assert!(unit
            .to_string()
            .contains("Invalid unit: invalid_unit. Valid units are ['amount', 'energy', 'ratio']."));
    }

    #[test]
    fn only_macros_have_energy_conversion() {
        assert_eq!(Nutrient::Energy.energy_per_gram(), None);
        assert_eq!(Nutrient::Protein.energy_per_gram(), Some(4.0));
        assert_eq!(Nutrient::Fat.energy_per_gram(), Some(9.0));
        assert_eq!(Nutrient::Carbohydrates.energy_per_gram(), Some(4.0));
    }

    #[test]
    fn bound_type_selects_comparison() {
        assert_eq!(BoundType::Max.comparison(), Comparison::LessThanOrEqual);
        assert_eq!(BoundType::Min.comparison(), Comparison::GreaterThanOrEqual);
    }

    #[test]
    fn not_solved_status_display() {
        assert_eq!(SolutionStatus::NotSolved.to_string(), "Not Solved");
        assert_eq!(SolutionStatus::Optimal.to_string(), "Optimal");
    }
}
