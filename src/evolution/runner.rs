//! Generational loop execution.
//!
//! [`Evolution`] runs the complete evolutionary process on the calling
//! thread: score → publish best → check convergence → select → crossover
//! → mutate → replace. [`PolynomialPopulation`](super::PolynomialPopulation)
//! drives the same engine from a background worker.

use super::config::EvolutionConfig;
use super::operators;
use super::selection::RouletteWheel;
use super::state::EvolutionState;
use crate::assertion::AssertionGroup;
use crate::error::EvolutionError;
use crate::polynomial::Polynomial;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::{debug, error, info, trace};

/// Summary of one scored generation.
#[derive(Debug, Clone, PartialEq)]
pub struct GenerationReport {
    /// Index of the scored generation (0 for the seeded population).
    pub generation: usize,

    /// Independent copy of the best genome of this generation.
    pub best: Polynomial,

    pub best_score: f64,
    pub worst_score: f64,
    pub mean_score: f64,
}

/// Result of [`Evolution::run`].
#[derive(Debug, Clone)]
pub struct EvolutionResult {
    /// Terminal state of the run.
    pub state: EvolutionState,

    /// Number of completed mating steps.
    pub generations: usize,

    /// Report of the last scored generation, if any.
    pub last: Option<GenerationReport>,

    /// Best score of every scored generation, in order.
    pub score_history: Vec<f64>,
}

/// A population of polynomial genomes evolving against an
/// [`AssertionGroup`].
///
/// The population has a fixed size; each mating step builds a complete
/// replacement generation and swaps it in. All randomness comes from one
/// `StdRng` seeded from [`EvolutionConfig::seed`], so a fixed seed
/// reproduces the run exactly.
///
/// # Usage
///
/// ```
/// use poly_evolve::assertion::{Assertion, AssertionGroup, Comparison};
/// use poly_evolve::evolution::{Evolution, EvolutionConfig, EvolutionState};
/// use poly_evolve::polynomial::Polynomial;
///
/// let positive = Assertion::builder()
///     .reference(Polynomial::from_pairs([(0.0, 0.0)]))
///     .range(0.0, 1.0)
///     .comparison(Comparison::Greater)
///     .build()
///     .unwrap();
/// let group = AssertionGroup::new().with(positive);
/// let config = EvolutionConfig::default()
///     .with_population_size(50)
///     .with_max_generations(20)
///     .with_seed(42);
///
/// let mut evolution = Evolution::new(group, config).unwrap();
/// let result = evolution.run(|_| true);
/// assert!(matches!(result.state, EvolutionState::Converged | EvolutionState::Exhausted));
/// assert!(result.generations <= 20);
/// ```
pub struct Evolution {
    config: EvolutionConfig,
    assertions: AssertionGroup,
    population: Vec<Polynomial>,
    generation: usize,
    state: EvolutionState,
    rng: StdRng,
}

impl Evolution {
    /// Validates the configuration and seeds the initial population.
    pub fn new(assertions: AssertionGroup, config: EvolutionConfig) -> Result<Self, EvolutionError> {
        config.validate()?;
        if assertions.is_empty() {
            return Err(EvolutionError::EmptyAssertionGroup);
        }

        let seed = config.seed.unwrap_or_else(rand::random);
        let mut rng = StdRng::seed_from_u64(seed);
        let population: Vec<Polynomial> = (0..config.population_size)
            .map(|_| operators::initialize(&config, &mut rng))
            .collect();

        debug!(
            seed,
            population_size = config.population_size,
            assertions = assertions.len(),
            "seeded population"
        );

        Ok(Self {
            config,
            assertions,
            population,
            generation: 0,
            state: EvolutionState::Seeded,
            rng,
        })
    }

    pub fn config(&self) -> &EvolutionConfig {
        &self.config
    }

    pub fn assertions(&self) -> &AssertionGroup {
        &self.assertions
    }

    /// The current generation's genomes.
    pub fn population(&self) -> &[Polynomial] {
        &self.population
    }

    /// Number of completed mating steps.
    pub fn generation(&self) -> usize {
        self.generation
    }

    pub fn state(&self) -> &EvolutionState {
        &self.state
    }

    pub fn is_running(&self) -> bool {
        !self.state.is_terminal()
    }

    /// Stops the run unless it already reached a terminal state.
    pub fn cancel(&mut self) {
        if !self.state.is_terminal() {
            info!(generation = self.generation, "evolution cancelled");
            self.state = EvolutionState::Cancelled;
        }
    }

    /// Runs one generation.
    ///
    /// Scores every genome and reports the best. Unless the best score
    /// reaches the perfect threshold, a full replacement generation is
    /// bred and the generation counter advances by one.
    ///
    /// Errors move the run to [`EvolutionState::Failed`]. Calling `step`
    /// after the run has ended returns [`EvolutionError::Finished`].
    pub fn step(&mut self) -> Result<GenerationReport, EvolutionError> {
        if self.state.is_terminal() {
            return Err(EvolutionError::Finished);
        }
        self.state = EvolutionState::Running;

        match self.advance() {
            Ok(report) => Ok(report),
            Err(err) => {
                error!(generation = self.generation, error = %err, "evolution failed");
                self.state = EvolutionState::Failed(err.clone());
                Err(err)
            }
        }
    }

    /// Steps until a terminal state is reached.
    ///
    /// `on_generation` sees every report; returning `false` cancels the
    /// run after that generation.
    pub fn run<F>(&mut self, mut on_generation: F) -> EvolutionResult
    where
        F: FnMut(&GenerationReport) -> bool,
    {
        let mut score_history = Vec::new();
        let mut last = None;

        while self.is_running() {
            let Ok(report) = self.step() else {
                break;
            };
            score_history.push(report.best_score);
            let keep_going = on_generation(&report);
            last = Some(report);
            if !keep_going {
                self.cancel();
            }
        }

        EvolutionResult {
            state: self.state.clone(),
            generations: self.generation,
            last,
            score_history,
        }
    }

    fn advance(&mut self) -> Result<GenerationReport, EvolutionError> {
        let scores = self.score_population();
        let (best_idx, best_score, worst_score) = extremes(&scores)?;
        let mean_score = scores.iter().sum::<f64>() / scores.len() as f64;

        let report = GenerationReport {
            generation: self.generation,
            best: self.population[best_idx].clone(),
            best_score,
            worst_score,
            mean_score,
        };
        debug!(
            generation = self.generation,
            best_score,
            worst_score,
            best = %report.best,
            "scored generation"
        );
        trace!("{}", self.assertions.assertion_string(&report.best));

        if best_score >= self.config.perfect_threshold {
            info!(generation = self.generation, best_score, "evolution converged");
            self.state = EvolutionState::Converged;
            return Ok(report);
        }

        let wheel = RouletteWheel::from_scores(&scores, best_score, worst_score)?;
        let (lo, hi) = self.config.coefficient_range;
        let mut next_gen = Vec::with_capacity(self.config.population_size);
        for _ in 0..self.config.population_size {
            let a = wheel.select(&mut self.rng)?;
            let b = wheel.select(&mut self.rng)?;
            let mut child = operators::crossover(&self.population[a], &self.population[b], &mut self.rng);
            operators::mutate(&mut child, self.config.mutation_rate, (lo, hi), &mut self.rng);
            next_gen.push(child);
        }

        self.population = next_gen;
        self.generation += 1;

        if self.generation >= self.config.max_generations {
            info!(generation = self.generation, best_score, "generation cap reached");
            self.state = EvolutionState::Exhausted;
        }
        Ok(report)
    }

    #[cfg(feature = "parallel")]
    fn score_population(&self) -> Vec<f64> {
        use rayon::prelude::*;

        if self.config.parallel {
            self.population
                .par_iter()
                .map(|genome| self.assertions.apply_to(genome))
                .collect()
        } else {
            self.score_sequential()
        }
    }

    #[cfg(not(feature = "parallel"))]
    fn score_population(&self) -> Vec<f64> {
        self.score_sequential()
    }

    fn score_sequential(&self) -> Vec<f64> {
        self.population
            .iter()
            .map(|genome| self.assertions.apply_to(genome))
            .collect()
    }
}

/// Index of the first best score, the best score, and the worst score.
fn extremes(scores: &[f64]) -> Result<(usize, f64, f64), EvolutionError> {
    let mut iter = scores.iter().copied().enumerate();
    let Some((_, first)) = iter.next() else {
        return Err(EvolutionError::DegenerateWeights { len: 0, sum: 0.0 });
    };

    let (mut best_idx, mut best, mut worst) = (0, first, first);
    for (i, score) in iter {
        if score > best {
            best = score;
            best_idx = i;
        }
        if score < worst {
            worst = score;
        }
    }
    Ok((best_idx, best, worst))
}

// ============================================================================
// Tests
// ============================================================================
