//! Error types for poly-evolve.
//!
//! Construction-time problems (configuration, assertions) are reported
//! synchronously. Problems detected inside the generational loop stop the
//! run and are surfaced through [`EvolutionState::Failed`](crate::evolution::EvolutionState::Failed).

use thiserror::Error;

/// Invalid [`EvolutionConfig`](crate::evolution::EvolutionConfig) values.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ConfigError {
    #[error("population_size must be at least 1")]
    EmptyPopulation,

    #[error("max_generations must be at least 1")]
    ZeroGenerations,

    #[error("buffer_capacity must be at least 1")]
    ZeroBufferCapacity,

    #[error("coefficient range [{lo}, {hi}) must be finite and non-empty")]
    InvalidCoefficientRange { lo: f64, hi: f64 },

    #[error("mutation_rate must lie in [0, 1], got {0}")]
    InvalidMutationRate(f64),

    #[error("perfect_threshold must be finite, got {0}")]
    NonFiniteThreshold(f64),
}

/// Invalid [`Assertion`](crate::assertion::Assertion) parameters.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum AssertionError {
    /// The parameter range yields no samples.
    #[error("parameter range [{range_in}, {range_out}] produces no samples")]
    EmptyRange { range_in: f64, range_out: f64 },

    #[error("parameter range end {range_out} is below its start {range_in}")]
    InvertedRange { range_in: f64, range_out: f64 },

    /// The parameter range is too wide to sample in reasonable time.
    #[error("parameter range needs {samples} samples, at most {max} are allowed")]
    TooManySamples { samples: usize, max: usize },

    #[error("parameter range [{range_in}, {range_out}] is not finite")]
    NonFiniteRange { range_in: f64, range_out: f64 },

    #[error("score weight must be finite and non-negative, got {0}")]
    InvalidWeight(f64),

    #[error("assertion has no right-hand reference polynomial")]
    MissingReference,
}

/// Failures of the evolutionary process.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum EvolutionError {
    #[error("invalid configuration: {0}")]
    Config(#[from] ConfigError),

    /// Fitness is undefined without at least one assertion.
    #[error("assertion group is empty")]
    EmptyAssertionGroup,

    /// The mating pool cannot be sampled (empty, or weights not summing to
    /// a finite positive value).
    #[error("selection weights are degenerate (len {len}, sum {sum})")]
    DegenerateWeights { len: usize, sum: f64 },

    /// The cumulative-weight walk ran past the end of the pool.
    #[error("roulette walk exhausted the mating pool")]
    SelectionExhausted,

    /// `step` was called after the run reached a terminal state.
    #[error("evolution already finished")]
    Finished,

    #[error("failed to spawn evolution worker: {0}")]
    Spawn(String),

    #[error("evolution worker panicked")]
    WorkerPanicked,
}
