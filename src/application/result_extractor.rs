// Reads solved intake counts back out and recomputes totals from the raw
// food data, independently of the expressions used while solving.

use std::collections::BTreeMap;

use crate::domain::{
    FoodItem, Nutrient, NutrientValues, OptimalSolution, OptimizationResult, PfcRatio, Result,
    SolveOutcome, SolverError, GRAM_CALCULATION_FACTOR,
};

pub fn extract_result(foods: &[FoodItem], outcome: &SolveOutcome) -> Result<OptimizationResult> {
    if !outcome.is_optimal() {
        return Ok(OptimizationResult::unsolved(outcome.status));
    }

    let food_intake = resolve_food_intake(foods, &outcome.variable_values)?;
    let total_nutrient_values = calculate_total_nutrient_values(foods, &food_intake);
    let pfc_ratio = calculate_pfc_ratio(&total_nutrient_values);

    Ok(OptimizationResult::Optimal(OptimalSolution {
        food_intake,
        total_nutrient_values,
        pfc_ratio,
    }))
}

/// Integer unit count per food. Solvers report integers with float noise.
/// An optimal outcome must carry a value for every food.
pub fn resolve_food_intake(
    foods: &[FoodItem],
    variable_values: &BTreeMap<String, f64>,
) -> std::result::Result<BTreeMap<String, u32>, SolverError> {
    foods
        .iter()
        .map(|food| {
            let value = variable_values.get(food.name()).copied().ok_or_else(|| {
                SolverError::ExecutionFailed(format!(
                    "Optimal solution has no value for variable {}",
                    food.name()
                ))
            })?;
            Ok((food.name().to_string(), value.round().max(0.0) as u32))
        })
        .collect()
}

pub fn calculate_total_nutrient_values(
    foods: &[FoodItem],
    food_intake: &BTreeMap<String, u32>,
) -> NutrientValues {
    let mut totals = NutrientValues::default();

    for nutrient in Nutrient::ALL {
        let total: f64 = foods
            .iter()
            .map(|food| {
                let units = food_intake.get(food.name()).copied().unwrap_or(0);
                food.nutrient(nutrient) * food.grams_per_unit() * f64::from(units)
                    / GRAM_CALCULATION_FACTOR
            })
            .sum();
        *totals.get_mut(nutrient) = round_one_decimal(total);
    }

    totals
}

/// Energy implied by the macro composition, not the foods' energy field
pub fn recalculate_total_energy(totals: &NutrientValues) -> f64 {
    Nutrient::MACROS
        .iter()
        .filter_map(|&n| n.energy_per_gram().map(|kcal| totals.get(n) * kcal))
        .sum()
}

pub fn calculate_pfc_ratio(totals: &NutrientValues) -> PfcRatio {
    let total_energy = recalculate_total_energy(totals);
    if total_energy <= 0.0 {
        return PfcRatio::default();
    }

    let ratio = |nutrient: Nutrient| {
        let kcal = nutrient.energy_per_gram().unwrap_or(0.0);
        round_one_decimal(totals.get(nutrient) * kcal / total_energy * GRAM_CALCULATION_FACTOR)
    };

    PfcRatio {
        protein: ratio(Nutrient::Protein),
        fat: ratio(Nutrient::Fat),
        carbohydrates: ratio(Nutrient::Carbohydrates),
    }
}

/// One decimal, half-to-even on the exact binary value. `{:.1}` formats the
/// correctly rounded decimal, so 6.25 gives 6.2 and 0.15 (stored just below)
/// gives 0.1.
fn round_one_decimal(value: f64) -> f64 {
    format!("{:.1}", value).parse().unwrap_or(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{NutritionError, SolutionStatus, REVIEW_INPUT_MESSAGE};

    fn egg() -> FoodItem {
        FoodItem::new(
            "boiled_egg",
            NutrientValues::new(134.0, 12.5, 10.4, 0.3),
            50.0,
            1,
            3,
        )
        .unwrap()
    }

    fn chicken() -> FoodItem {
        FoodItem::new(
            "chicken_fillet",
            NutrientValues::new(121.0, 29.6, 1.0, 0.0),
            50.0,
            3,
            6,
        )
        .unwrap()
    }

    fn outcome(values: &[(&str, f64)]) -> SolveOutcome {
        SolveOutcome::optimal(
            values
                .iter()
                .map(|(name, value)| (name.to_string(), *value))
                .collect(),
        )
    }

    #[test]
    fn intake_is_rounded_to_whole_units() {
        let intake = resolve_food_intake(
            &[egg(), chicken()],
            &outcome(&[("boiled_egg", 1.9999999), ("chicken_fillet", 3.0000001)]).variable_values,
        )
        .unwrap();
        assert_eq!(intake["boiled_egg"], 2);
        assert_eq!(intake["chicken_fillet"], 3);
    }

    #[test]
    fn totals_for_two_eggs() {
        let result = extract_result(&[egg()], &outcome(&[("boiled_egg", 2.0)])).unwrap();
        let solution = result.solution().unwrap();

        assert_eq!(solution.food_intake["boiled_egg"], 2);
        assert_eq!(solution.total_nutrient_values.energy, 134.0);
        assert_eq!(solution.total_nutrient_values.protein, 12.5);
        assert_eq!(solution.total_nutrient_values.fat, 10.4);
        assert_eq!(solution.total_nutrient_values.carbohydrates, 0.3);
    }

    #[test]
    fn single_egg_totals_round_half_to_even() {
        // 6.25 g protein and 0.15 g carbohydrates before rounding
        let intake = BTreeMap::from([("boiled_egg".to_string(), 1)]);
        let totals = calculate_total_nutrient_values(&[egg()], &intake);

        assert_eq!(totals.energy, 67.0);
        assert_eq!(totals.protein, 6.2);
        assert_eq!(totals.fat, 5.2);
        assert_eq!(totals.carbohydrates, 0.1);
    }

    #[test]
    fn rounding_matches_decimal_half_to_even() {
        assert_eq!(round_one_decimal(6.25), 6.2);
        assert_eq!(round_one_decimal(6.35), 6.3);
        assert_eq!(round_one_decimal(0.15), 0.1);
        assert_eq!(round_one_decimal(2.675), 2.7);
        assert_eq!(round_one_decimal(44.4), 44.4);
        assert_eq!(round_one_decimal(0.0), 0.0);
    }

    #[test]
    fn optimal_outcome_missing_a_food_is_an_error() {
        let err = extract_result(&[egg(), chicken()], &outcome(&[("boiled_egg", 2.0)])).unwrap_err();
        match err {
            NutritionError::Solver(SolverError::ExecutionFailed(msg)) => {
                assert!(msg.contains("chicken_fillet"))
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn pfc_ratio_uses_macro_energy() {
        // 12.5*4 = 50, 10.4*9 = 93.6, 0.3*4 = 1.2 -> 144.8 kcal
        let totals = NutrientValues::new(134.0, 12.5, 10.4, 0.3);
        assert!((recalculate_total_energy(&totals) - 144.8).abs() < 1e-9);

        let ratio = calculate_pfc_ratio(&totals);
        assert_eq!(ratio.protein, 34.5);
        assert_eq!(ratio.fat, 64.6);
        assert_eq!(ratio.carbohydrates, 0.8);
        assert!((ratio.sum() - 100.0).abs() <= 0.1 + 1e-9);
    }

    #[test]
    fn zero_macro_energy_gives_zero_ratios() {
        let ratio = calculate_pfc_ratio(&NutrientValues::new(50.0, 0.0, 0.0, 0.0));
        assert_eq!(ratio, PfcRatio::default());
    }

    #[test]
    fn non_optimal_outcome_returns_guidance_only() {
        let result =
            extract_result(&[egg()], &SolveOutcome::unsolved(SolutionStatus::Infeasible)).unwrap();
        assert_eq!(
            result,
            OptimizationResult::Unsolved {
                status: SolutionStatus::Infeasible,
                message: REVIEW_INPUT_MESSAGE.to_string(),
            }
        );
    }
}
