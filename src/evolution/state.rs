//! Run state of an evolutionary process.

use crate::error::EvolutionError;

/// Lifecycle of a run.
///
/// `Seeded → Running → {Converged, Exhausted}`, with `Cancelled` and
/// `Failed` reachable from any non-terminal state.
#[derive(Debug, Clone, PartialEq)]
pub enum EvolutionState {
    /// Population created, no generation scored yet.
    Seeded,
    Running,
    /// The best score reached the perfect threshold.
    Converged,
    /// The generation cap was reached without converging.
    Exhausted,
    /// Stopped by the owner before reaching a natural end.
    Cancelled,
    /// Stopped by an error inside the generational loop.
    Failed(EvolutionError),
}

impl EvolutionState {
    /// Returns `true` once no further generation will run.
    pub fn is_terminal(&self) -> bool {
        !matches!(self, EvolutionState::Seeded | EvolutionState::Running)
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, EvolutionState::Failed(_))
    }
}
