use std::sync::Arc;

use super::model_builder::ModelBuilder;
use super::result_extractor::extract_result;
use crate::domain::{
    LpProblem, OptimizationEvent, OptimizationObserver, OptimizationRequest, OptimizationResult,
    Result, SolverService, TracingObserver,
};

/// Use case: build the model for one request, solve it, extract the result
#[derive(Clone)]
pub struct NutritionOptimizer {
    solver: Arc<dyn SolverService>,
    observer: Arc<dyn OptimizationObserver>,
}

impl NutritionOptimizer {
    pub fn new(solver: Arc<dyn SolverService>) -> Self {
        Self {
            solver,
            observer: Arc::new(TracingObserver),
        }
    }

    pub fn with_observer(mut self, observer: Arc<dyn OptimizationObserver>) -> Self {
        self.observer = observer;
        self
    }

    pub fn solver_name(&self) -> &str {
        self.solver.name()
    }

    /// Build and validate the integer program without solving it
    pub fn prepare(&self, request: OptimizationRequest) -> Result<LpProblem> {
        let (problem, _) = ModelBuilder::from_request(request)
            .with_observer(self.observer.as_ref())
            .build()?;
        self.solver.validate(&problem)?;
        Ok(problem)
    }

    pub fn optimize(&self, request: OptimizationRequest) -> Result<OptimizationResult> {
        let (problem, foods) = ModelBuilder::from_request(request)
            .with_observer(self.observer.as_ref())
            .build()?;

        self.observer.on_event(&OptimizationEvent::SolveStarted {
            solver: self.solver.name().to_string(),
            variables: problem.num_variables(),
            constraints: problem.num_constraints(),
        });

        let outcome = self.solver.solve(&problem)?;

        self.observer.on_event(&OptimizationEvent::SolveCompleted {
            status: outcome.status,
        });

        extract_result(&foods, &outcome)
    }
}
