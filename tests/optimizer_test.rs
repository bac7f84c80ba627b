use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use nutriopt::domain::{SolveOutcome, REVIEW_INPUT_MESSAGE};
use nutriopt::{
    Constraint, FoodItem, GoodLpSolver, LpProblem, Nutrient, NutrientValues, NutritionError,
    NutritionOptimizer, Objective, ObjectiveSense, OptimalSolution, OptimizationEvent,
    OptimizationObserver, OptimizationRequest, OptimizationResult, SolutionStatus, SolverError,
    SolverService,
};

fn food(name: &str, values: (f64, f64, f64, f64), grams: f64, min: i64, max: i64) -> FoodItem {
    FoodItem::new(
        name,
        NutrientValues::new(values.0, values.1, values.2, values.3),
        grams,
        min,
        max,
    )
    .unwrap()
}

fn boiled_egg() -> FoodItem {
    food("boiled_egg", (134.0, 12.5, 10.4, 0.3), 50.0, 1, 3)
}

fn chicken_fillet(min: i64, max: i64) -> FoodItem {
    food("chicken_fillet", (121.0, 29.6, 1.0, 0.0), 50.0, min, max)
}

fn rice(min: i64, max: i64) -> FoodItem {
    food("rice", (152.0, 2.8, 1.0, 35.6), 100.0, min, max)
}

fn constraint(min_max: &str, nutrient: &str, unit: &str, value: f64) -> Constraint {
    Constraint::parse(min_max, nutrient, unit, value).unwrap()
}

fn maximize(nutrient: Nutrient) -> Objective {
    Objective::new(ObjectiveSense::Maximize, nutrient)
}

fn optimizer() -> NutritionOptimizer {
    NutritionOptimizer::new(Arc::new(GoodLpSolver::new()))
}

fn solve(foods: Vec<FoodItem>, objective: Objective, constraints: Vec<Constraint>) -> OptimizationResult {
    let request = OptimizationRequest::new(foods, objective, constraints).unwrap();
    optimizer().optimize(request).unwrap()
}

fn expect_optimal(result: &OptimizationResult) -> &OptimalSolution {
    result
        .solution()
        .unwrap_or_else(|| panic!("expected Optimal, got {:?}", result))
}

#[test]
fn single_egg_with_energy_cap_and_fat_ratio() {
    let result = solve(
        vec![boiled_egg()],
        maximize(Nutrient::Energy),
        vec![
            constraint("max", "energy", "energy", 200.0),
            constraint("min", "fat", "ratio", 20.0),
        ],
    );

    let solution = expect_optimal(&result);
    assert_eq!(solution.food_intake["boiled_egg"], 2);
    assert_eq!(solution.total_nutrient_values.energy, 134.0);
}

#[test]
fn infeasible_energy_cap_returns_guidance() {
    let result = solve(
        vec![boiled_egg()],
        maximize(Nutrient::Energy),
        vec![constraint("max", "energy", "energy", 1.0)],
    );

    assert_eq!(
        result,
        OptimizationResult::Unsolved {
            status: SolutionStatus::Infeasible,
            message: REVIEW_INPUT_MESSAGE.to_string(),
        }
    );
}

struct CountingSolver(AtomicUsize);

impl SolverService for CountingSolver {
    fn solve(&self, _problem: &LpProblem) -> Result<SolveOutcome, SolverError> {
        self.0.fetch_add(1, Ordering::SeqCst);
        Ok(SolveOutcome::unsolved(SolutionStatus::NotSolved))
    }

    fn name(&self) -> &str {
        "counting"
    }
}

#[test]
fn ratio_on_energy_fails_before_solving() {
    let solver = Arc::new(CountingSolver(AtomicUsize::new(0)));
    let optimizer = NutritionOptimizer::new(solver.clone());
    let request = OptimizationRequest::new(
        vec![boiled_egg()],
        maximize(Nutrient::Energy),
        vec![constraint("max", "energy", "ratio", 50.0)],
    )
    .unwrap();

    let err = optimizer.optimize(request).unwrap_err();
    assert!(matches!(err, NutritionError::InvalidConstraint(_)));
    assert_eq!(solver.0.load(Ordering::SeqCst), 0);
}

#[test]
fn pinned_bounds_are_hard() {
    let egg = food("boiled_egg", (134.0, 12.5, 10.4, 0.3), 50.0, 2, 2);
    for objective in [
        maximize(Nutrient::Energy),
        Objective::new(ObjectiveSense::Minimize, Nutrient::Protein),
    ] {
        let result = solve(
            vec![egg.clone(), rice(0, 5)],
            objective,
            vec![constraint("max", "energy", "energy", 500.0)],
        );
        assert_eq!(expect_optimal(&result).food_intake["boiled_egg"], 2);
    }
}

#[test]
fn pfc_ratio_sums_to_hundred() {
    let result = solve(
        vec![boiled_egg(), chicken_fillet(0, 4), rice(0, 3)],
        maximize(Nutrient::Protein),
        vec![constraint("max", "energy", "energy", 900.0)],
    );

    let ratio = expect_optimal(&result).pfc_ratio;
    assert!((ratio.sum() - 100.0).abs() <= 0.1 + 1e-9, "sum was {}", ratio.sum());
}

#[test]
fn identical_requests_give_identical_intake() {
    let build = || {
        OptimizationRequest::new(
            vec![boiled_egg(), chicken_fillet(0, 4), rice(0, 3)],
            maximize(Nutrient::Energy),
            vec![
                constraint("max", "energy", "energy", 800.0),
                constraint("min", "protein", "ratio", 25.0),
            ],
        )
        .unwrap()
    };

    let optimizer = optimizer();
    let first = optimizer.optimize(build()).unwrap();
    let second = optimizer.optimize(build()).unwrap();

    assert_eq!(
        expect_optimal(&first).food_intake,
        expect_optimal(&second).food_intake
    );
}

#[test]
fn energy_cap_below_minimum_intake_is_infeasible() {
    // egg at 1 unit (67 kcal) + chicken at 3 units (181.5 kcal)
    let result = solve(
        vec![boiled_egg(), chicken_fillet(3, 6)],
        maximize(Nutrient::Protein),
        vec![constraint("max", "energy", "energy", 248.0)],
    );
    assert_eq!(result.status(), SolutionStatus::Infeasible);
}

#[test]
fn minimize_fat_with_protein_floor() {
    let egg = food("boiled_egg", (134.0, 12.5, 10.4, 0.3), 50.0, 0, 4);
    let result = solve(
        vec![egg, chicken_fillet(0, 4)],
        Objective::new(ObjectiveSense::Minimize, Nutrient::Fat),
        vec![constraint("min", "protein", "amount", 30.0)],
    );

    let solution = expect_optimal(&result);
    assert_eq!(solution.food_intake["chicken_fillet"], 3);
    assert_eq!(solution.food_intake["boiled_egg"], 0);
    assert_eq!(solution.total_nutrient_values.fat, 1.5);
    assert_eq!(solution.total_nutrient_values.protein, 44.4);
}

#[test]
fn fat_ratio_cap_limits_eggs() {
    // 46.8e + 9r <= 0.3 * (67e + 152r)
    let egg = food("boiled_egg", (134.0, 12.5, 10.4, 0.3), 50.0, 0, 3);
    let result = solve(
        vec![egg, rice(0, 2)],
        maximize(Nutrient::Energy),
        vec![constraint("max", "fat", "ratio", 30.0)],
    );

    let solution = expect_optimal(&result);
    assert_eq!(solution.food_intake["boiled_egg"], 2);
    assert_eq!(solution.food_intake["rice"], 2);
    assert_eq!(solution.total_nutrient_values.energy, 438.0);
}

#[derive(Default)]
struct Recorder(Mutex<Vec<OptimizationEvent>>);

impl OptimizationObserver for Recorder {
    fn on_event(&self, event: &OptimizationEvent) {
        self.0.lock().unwrap().push(event.clone());
    }
}

#[test]
fn observer_sees_solve_lifecycle() {
    let recorder = Arc::new(Recorder::default());
    let optimizer = optimizer().with_observer(recorder.clone());
    let request = OptimizationRequest::new(
        vec![boiled_egg()],
        maximize(Nutrient::Energy),
        vec![constraint("max", "energy", "energy", 1.0)],
    )
    .unwrap();

    optimizer.optimize(request).unwrap();

    let events = recorder.0.lock().unwrap();
    assert!(events.contains(&OptimizationEvent::ConstraintApplied {
        name: "max_energy_energy".into()
    }));
    assert!(events.iter().any(|e| matches!(
        e,
        OptimizationEvent::SolveStarted {
            variables: 1,
            constraints: 1,
            ..
        }
    )));
    assert_eq!(
        events.last(),
        Some(&OptimizationEvent::SolveCompleted {
            status: SolutionStatus::Infeasible
        })
    );
}

#[test]
fn prepare_validates_without_solving() {
    let solver = Arc::new(CountingSolver(AtomicUsize::new(0)));
    let optimizer = NutritionOptimizer::new(solver.clone());
    let request = OptimizationRequest::new(
        vec![boiled_egg(), rice(0, 2)],
        maximize(Nutrient::Energy),
        vec![constraint("min", "protein", "ratio", 10.0)],
    )
    .unwrap();

    let problem = optimizer.prepare(request).unwrap();
    assert_eq!(problem.num_variables(), 2);
    assert_eq!(problem.num_constraints(), 1);
    assert_eq!(solver.0.load(Ordering::SeqCst), 0);
}
