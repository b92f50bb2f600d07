//! Background evolution with a bounded snapshot handoff.
//!
//! [`PolynomialPopulation`] moves an [`Evolution`] onto a dedicated worker
//! thread. After each scored generation the worker publishes an
//! independent copy of the best genome into a bounded FIFO buffer; when
//! the buffer is full the worker blocks until the consumer takes a
//! snapshot. Consumers poll with [`has_update`](PolynomialPopulation::has_update)
//! and [`get_update`](PolynomialPopulation::get_update) without blocking.
//!
//! Dropping the population (or calling [`stop`](PolynomialPopulation::stop))
//! clears the shared running flag, drops the receiving end so a blocked
//! publish returns immediately, and joins the worker.

use super::config::EvolutionConfig;
use super::runner::Evolution;
use super::state::EvolutionState;
use crate::assertion::AssertionGroup;
use crate::error::EvolutionError;
use crate::polynomial::Polynomial;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::mpsc::{self, Receiver, SyncSender, TryRecvError};
use std::sync::{Arc, Mutex, PoisonError};
use std::thread::{self, JoinHandle};
use tracing::{debug, error, info, warn};

const WORKER_NAME: &str = "poly-evolve-worker";

/// State shared between the owner and the worker thread.
#[derive(Debug)]
struct Shared {
    running: AtomicBool,
    generation: AtomicUsize,
    state: Mutex<EvolutionState>,
}

impl Shared {
    fn new() -> Self {
        Self {
            running: AtomicBool::new(true),
            generation: AtomicUsize::new(0),
            state: Mutex::new(EvolutionState::Seeded),
        }
    }

    fn state(&self) -> EvolutionState {
        self.state.lock().unwrap_or_else(PoisonError::into_inner).clone()
    }

    fn set_state(&self, state: EvolutionState) {
        *self.state.lock().unwrap_or_else(PoisonError::into_inner) = state;
    }
}

/// An evolving population running on a background thread.
///
/// # Usage
///
/// ```
/// use poly_evolve::assertion::{Assertion, AssertionGroup, Comparison};
/// use poly_evolve::evolution::{EvolutionConfig, PolynomialPopulation};
/// use poly_evolve::polynomial::Polynomial;
///
/// let positive = Assertion::builder()
///     .reference(Polynomial::from_pairs([(0.0, 0.0)]))
///     .range(0.0, 1.0)
///     .comparison(Comparison::Greater)
///     .build()
///     .unwrap();
/// let config = EvolutionConfig::default()
///     .with_population_size(50)
///     .with_max_generations(10)
///     .with_seed(7);
///
/// let mut population =
///     PolynomialPopulation::spawn(AssertionGroup::new().with(positive), config).unwrap();
///
/// let mut latest = None;
/// while let Some(best) = population.wait_update() {
///     latest = Some(best);
/// }
/// assert!(latest.is_some());
/// assert!(!population.is_running());
/// ```
pub struct PolynomialPopulation {
    shared: Arc<Shared>,
    receiver: Option<Receiver<Polynomial>>,
    pending: Option<Polynomial>,
    worker: Option<JoinHandle<()>>,
}

impl PolynomialPopulation {
    /// Seeds a population and starts evolving it on a new worker thread.
    pub fn spawn(assertions: AssertionGroup, config: EvolutionConfig) -> Result<Self, EvolutionError> {
        let capacity = config.buffer_capacity;
        let evolution = Evolution::new(assertions, config)?;

        let (sender, receiver) = mpsc::sync_channel(capacity);
        let shared = Arc::new(Shared::new());
        let worker_shared = Arc::clone(&shared);

        let worker = thread::Builder::new()
            .name(WORKER_NAME.to_string())
            .spawn(move || evolve(evolution, sender, worker_shared))
            .map_err(|e| EvolutionError::Spawn(e.to_string()))?;

        info!(buffer_capacity = capacity, "evolution worker started");

        Ok(Self {
            shared,
            receiver: Some(receiver),
            pending: None,
            worker: Some(worker),
        })
    }

    /// Returns `true` if a published snapshot is waiting.
    pub fn has_update(&mut self) -> bool {
        if self.pending.is_some() {
            return true;
        }
        self.pending = self.try_receive();
        self.pending.is_some()
    }

    /// Takes the oldest waiting snapshot without blocking.
    pub fn get_update(&mut self) -> Option<Polynomial> {
        self.pending.take().or_else(|| self.try_receive())
    }

    /// Takes the oldest snapshot, blocking until one is published.
    ///
    /// Returns `None` once the worker has finished and every snapshot it
    /// published has been taken.
    pub fn wait_update(&mut self) -> Option<Polynomial> {
        if let Some(genome) = self.pending.take() {
            return Some(genome);
        }
        self.receiver.as_ref()?.recv().ok()
    }

    /// Returns `false` once the worker has reached a terminal state.
    ///
    /// Snapshots published before termination stay available.
    pub fn is_running(&self) -> bool {
        !self.shared.state().is_terminal()
    }

    pub fn state(&self) -> EvolutionState {
        self.shared.state()
    }

    /// Number of completed mating steps.
    pub fn generation(&self) -> usize {
        self.shared.generation.load(Ordering::Acquire)
    }

    /// Cancels the worker, waits for it to exit and returns its final state.
    ///
    /// Snapshots not yet taken are discarded.
    pub fn stop(mut self) -> EvolutionState {
        self.shutdown();
        self.shared.state()
    }

    fn try_receive(&self) -> Option<Polynomial> {
        match self.receiver.as_ref()?.try_recv() {
            Ok(genome) => Some(genome),
            Err(TryRecvError::Empty | TryRecvError::Disconnected) => None,
        }
    }

    fn shutdown(&mut self) {
        self.shared.running.store(false, Ordering::Release);
        self.pending = None;
        // Unblocks a worker waiting on a full buffer.
        drop(self.receiver.take());

        if let Some(worker) = self.worker.take() {
            if worker.join().is_err() {
                error!("evolution worker panicked");
                self.shared.set_state(EvolutionState::Failed(EvolutionError::WorkerPanicked));
            }
        }
    }
}

impl Drop for PolynomialPopulation {
    fn drop(&mut self) {
        self.shutdown();
    }
}

impl std::fmt::Debug for PolynomialPopulation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PolynomialPopulation")
            .field("state", &self.shared.state())
            .field("generation", &self.generation())
            .field("has_pending", &self.pending.is_some())
            .finish()
    }
}

/// Worker loop: step, publish, repeat until terminal or cancelled.
fn evolve(mut evolution: Evolution, sender: SyncSender<Polynomial>, shared: Arc<Shared>) {
    shared.set_state(EvolutionState::Running);

    while evolution.is_running() {
        if !shared.running.load(Ordering::Acquire) {
            evolution.cancel();
            break;
        }

        let report = match evolution.step() {
            Ok(report) => report,
            Err(err) => {
                warn!(error = %err, "evolution worker stopping");
                break;
            }
        };
        shared.generation.store(evolution.generation(), Ordering::Release);

        if sender.send(report.best).is_err() {
            debug!(generation = report.generation, "snapshot receiver dropped");
            evolution.cancel();
            break;
        }
    }

    let state = evolution.state().clone();
    debug!(generation = evolution.generation(), ?state, "evolution worker exiting");
    // Published after the last send so a terminal state implies every
    // snapshot is already in the buffer.
    shared.set_state(state);
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assertion::{Assertion, Comparison, Mode};
    use std::time::{Duration, Instant};

    fn positive_on_unit() -> AssertionGroup {
        AssertionGroup::new().with(
            Assertion::builder()
                .reference(Polynomial::from_pairs([(0.0, 0.0)]))
                .range(0.0, 1.0)
                .comparison(Comparison::Greater)
                .build()
                .unwrap(),
        )
    }

    fn flat_derivative() -> AssertionGroup {
        AssertionGroup::new().with(
            Assertion::builder()
                .reference(Polynomial::from_pairs([(0.0, 0.0)]))
                .range(-1.0, 1.0)
                .modes(Mode::Derivative, Mode::Function)
                .build()
                .unwrap(),
        )
    }

    fn config() -> EvolutionConfig {
        EvolutionConfig::default()
            .with_population_size(20)
            .with_seed(42)
    }

    fn wait_until_finished(population: &PolynomialPopulation) {
        let deadline = Instant::now() + Duration::from_secs(30);
        while population.is_running() {
            assert!(Instant::now() < deadline, "worker did not finish");
            thread::sleep(Duration::from_millis(1));
        }
    }

    #[test]
    fn test_spawn_rejects_empty_group() {
        let err = PolynomialPopulation::spawn(AssertionGroup::new(), config()).err();
        assert_eq!(err, Some(EvolutionError::EmptyAssertionGroup));
    }

    #[test]
    fn test_converged_publishes_single_snapshot() {
        let config = config().with_perfect_threshold(0.0);
        let mut population = PolynomialPopulation::spawn(positive_on_unit(), config).unwrap();

        wait_until_finished(&population);
        assert_eq!(population.state(), EvolutionState::Converged);
        assert_eq!(population.generation(), 0);

        assert!(population.has_update());
        assert!(population.has_update());
        assert!(population.get_update().is_some());
        assert!(!population.has_update());
        assert!(population.get_update().is_none());
        assert!(population.wait_update().is_none());
    }

    #[test]
    fn test_exhausted_publishes_every_generation() {
        let config = config().with_max_generations(3).with_perfect_threshold(2.0);
        let mut population = PolynomialPopulation::spawn(flat_derivative(), config).unwrap();

        let mut snapshots = Vec::new();
        while let Some(best) = population.wait_update() {
            snapshots.push(best);
        }
        assert_eq!(snapshots.len(), 3);
        assert_eq!(population.state(), EvolutionState::Exhausted);
        assert_eq!(population.generation(), 3);
        assert!(!population.is_running());
    }

    #[test]
    fn test_snapshots_are_independent_copies() {
        let config = config().with_max_generations(2).with_perfect_threshold(2.0);
        let mut population = PolynomialPopulation::spawn(flat_derivative(), config).unwrap();

        let mut first = population.wait_update().unwrap();
        let before = first.clone();
        first.components_mut()[0].coefficient = 1234.0;
        assert_ne!(first, before);

        let second = population.wait_update().unwrap();
        assert!(second.components().iter().all(|t| t.coefficient != 1234.0));
    }

    #[test]
    fn test_stop_with_full_buffer_does_not_deadlock() {
        let config = config()
            .with_max_generations(1_000_000)
            .with_perfect_threshold(2.0)
            .with_buffer_capacity(1);
        let mut population = PolynomialPopulation::spawn(flat_derivative(), config).unwrap();

        // Let the worker fill the buffer and block on the next publish.
        assert!(population.wait_update().is_some());
        thread::sleep(Duration::from_millis(20));

        assert_eq!(population.stop(), EvolutionState::Cancelled);
    }

    #[test]
    fn test_drop_while_running() {
        let config = config()
            .with_max_generations(1_000_000)
            .with_perfect_threshold(2.0)
            .with_buffer_capacity(2);
        let population = PolynomialPopulation::spawn(flat_derivative(), config).unwrap();
        thread::sleep(Duration::from_millis(5));
        drop(population);
    }

    #[test]
    fn test_stop_after_finish_keeps_state() {
        let config = config().with_perfect_threshold(0.0);
        let population = PolynomialPopulation::spawn(positive_on_unit(), config).unwrap();
        wait_until_finished(&population);
        assert_eq!(population.stop(), EvolutionState::Converged);
    }
}
