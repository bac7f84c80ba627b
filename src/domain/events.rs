// Structured events published while an optimization runs.
// The core never owns a logger; callers inject an observer.

use super::value_objects::SolutionStatus;

#[derive(Debug, Clone, PartialEq)]
pub enum OptimizationEvent {
    VariablesCreated { count: usize },
    ObjectiveSet { name: String },
    ConstraintApplied { name: String },
    SolveStarted { solver: String, variables: usize, constraints: usize },
    SolveCompleted { status: SolutionStatus },
}

pub trait OptimizationObserver: Send + Sync {
    fn on_event(&self, event: &OptimizationEvent);
}

/// Discards every event
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopObserver;

impl OptimizationObserver for NoopObserver {
    fn on_event(&self, _event: &OptimizationEvent) {}
}

/// Forwards events to `tracing`
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingObserver;

impl OptimizationObserver for TracingObserver {
    fn on_event(&self, event: &OptimizationEvent) {
        match event {
            OptimizationEvent::VariablesCreated { count } => {
                tracing::debug!(count, "food intake variables created");
            }
            OptimizationEvent::ObjectiveSet { name } => {
                tracing::debug!(objective = %name, "objective set");
            }
            OptimizationEvent::ConstraintApplied { name } => {
                tracing::debug!(constraint = %name, "constraint applied");
            }
            OptimizationEvent::SolveStarted {
                solver,
                variables,
                constraints,
            } => {
                tracing::info!(%solver, variables, constraints, "solving optimization problem");
            }
            OptimizationEvent::SolveCompleted { status } => {
                if *status == SolutionStatus::Optimal {
                    tracing::info!(%status, "optimization completed");
                } else {
                    tracing::warn!(%status, "optimization failed");
                }
            }
        }
    }
}
