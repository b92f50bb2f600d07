//! Evolution configuration.
//!
//! [`EvolutionConfig`] holds all parameters that control the generational
//! loop and the handoff to consumers.

use crate::error::ConfigError;

/// Configuration for polynomial evolution.
///
/// # Defaults
///
/// ```
/// use poly_evolve::evolution::EvolutionConfig;
///
/// let config = EvolutionConfig::default();
/// assert_eq!(config.population_size, 1000);
/// assert_eq!(config.max_generations, 500);
/// assert_eq!(config.buffer_capacity, 100);
/// ```
///
/// # Builder Pattern
///
/// ```
/// use poly_evolve::evolution::EvolutionConfig;
///
/// let config = EvolutionConfig::default()
///     .with_population_size(200)
///     .with_max_generations(1000)
///     .with_mutation_rate(0.2)
///     .with_perfect_threshold(0.95)
///     .with_seed(42);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EvolutionConfig {
    /// Number of genomes per generation. Fixed for the whole run.
    pub population_size: usize,

    /// Maximum number of mating steps before the run is exhausted.
    pub max_generations: usize,

    /// Probability that an offspring receives a coefficient mutation (0.0–1.0).
    pub mutation_rate: f64,

    /// Best score at or above which the run has converged.
    pub perfect_threshold: f64,

    /// Highest exponent of seeded genomes.
    ///
    /// Each seeded genome has `degree + 1` terms with exponents
    /// `0, 1, ..., degree`.
    pub degree: usize,

    /// Half-open range `[lo, hi)` for seeded and mutated coefficients.
    pub coefficient_range: (f64, f64),

    /// Number of published snapshots the handoff buffer holds before the
    /// worker blocks.
    pub buffer_capacity: usize,

    /// Whether to score genomes in parallel using rayon.
    ///
    /// Only takes effect with the `parallel` feature. Scoring consumes no
    /// randomness, so results are identical either way.
    pub parallel: bool,

    /// Random seed for reproducibility.
    ///
    /// `None` uses a random seed.
    pub seed: Option<u64>,
}

impl Default for EvolutionConfig {
    fn default() -> Self {
        Self {
            population_size: 1000,
            max_generations: 500,
            mutation_rate: 0.1,
            perfect_threshold: 1.0,
            degree: 4,
            coefficient_range: (-10.0, 10.0),
            buffer_capacity: 100,
            parallel: false,
            seed: None,
        }
    }
}

impl EvolutionConfig {
    /// Sets the population size.
    pub fn with_population_size(mut self, n: usize) -> Self {
        self.population_size = n;
        self
    }

    /// Sets the maximum number of generations.
    pub fn with_max_generations(mut self, n: usize) -> Self {
        self.max_generations = n;
        self
    }

    /// Sets the mutation rate.
    pub fn with_mutation_rate(mut self, rate: f64) -> Self {
        self.mutation_rate = rate.clamp(0.0, 1.0);
        self
    }

    /// Sets the convergence threshold.
    pub fn with_perfect_threshold(mut self, threshold: f64) -> Self {
        self.perfect_threshold = threshold;
        self
    }

    /// Sets the degree of seeded genomes.
    pub fn with_degree(mut self, degree: usize) -> Self {
        self.degree = degree;
        self
    }

    /// Sets the coefficient sampling range.
    pub fn with_coefficient_range(mut self, lo: f64, hi: f64) -> Self {
        self.coefficient_range = (lo, hi);
        self
    }

    /// Sets the handoff buffer capacity.
    pub fn with_buffer_capacity(mut self, capacity: usize) -> Self {
        self.buffer_capacity = capacity;
        self
    }

    /// Enables or disables parallel scoring.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Sets the random seed for reproducibility.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.population_size == 0 {
            return Err(ConfigError::EmptyPopulation);
        }
        if self.max_generations == 0 {
            return Err(ConfigError::ZeroGenerations);
        }
        if self.buffer_capacity == 0 {
            return Err(ConfigError::ZeroBufferCapacity);
        }
        if !(0.0..=1.0).contains(&self.mutation_rate) {
            return Err(ConfigError::InvalidMutationRate(self.mutation_rate));
        }
        let (lo, hi) = self.coefficient_range;
        if !(lo.is_finite() && hi.is_finite() && lo < hi) {
            return Err(ConfigError::InvalidCoefficientRange { lo, hi });
        }
        if !self.perfect_threshold.is_finite() {
            return Err(ConfigError::NonFiniteThreshold(self.perfect_threshold));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = EvolutionConfig::default();
        assert_eq!(config.population_size, 1000);
        assert_eq!(config.max_generations, 500);
        assert!((config.mutation_rate - 0.1).abs() < 1e-10);
        assert!((config.perfect_threshold - 1.0).abs() < 1e-10);
        assert_eq!(config.degree, 4);
        assert_eq!(config.coefficient_range, (-10.0, 10.0));
        assert_eq!(config.buffer_capacity, 100);
        assert!(!config.parallel);
        assert!(config.seed.is_none());
    }

    #[test]
    fn test_builder_pattern() {
        let config = EvolutionConfig::default()
            .with_population_size(50)
            .with_max_generations(20)
            .with_mutation_rate(0.3)
            .with_perfect_threshold(0.9)
            .with_degree(2)
            .with_coefficient_range(-1.0, 1.0)
            .with_buffer_capacity(4)
            .with_parallel(true)
            .with_seed(7);

        assert_eq!(config.population_size, 50);
        assert_eq!(config.max_generations, 20);
        assert!((config.mutation_rate - 0.3).abs() < 1e-10);
        assert!((config.perfect_threshold - 0.9).abs() < 1e-10);
        assert_eq!(config.degree, 2);
        assert_eq!(config.coefficient_range, (-1.0, 1.0));
        assert_eq!(config.buffer_capacity, 4);
        assert!(config.parallel);
        assert_eq!(config.seed, Some(7));
    }

    #[test]
    fn test_clamp_mutation_rate() {
        assert_eq!(EvolutionConfig::default().with_mutation_rate(2.0).mutation_rate, 1.0);
        assert_eq!(EvolutionConfig::default().with_mutation_rate(-0.5).mutation_rate, 0.0);
    }

    #[test]
    fn test_validate_ok() {
        assert!(EvolutionConfig::default().validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        let cases = [
            (
                EvolutionConfig::default().with_population_size(0),
                ConfigError::EmptyPopulation,
            ),
            (
                EvolutionConfig::default().with_max_generations(0),
                ConfigError::ZeroGenerations,
            ),
            (
                EvolutionConfig::default().with_buffer_capacity(0),
                ConfigError::ZeroBufferCapacity,
            ),
            (
                EvolutionConfig::default().with_coefficient_range(1.0, 1.0),
                ConfigError::InvalidCoefficientRange { lo: 1.0, hi: 1.0 },
            ),
            (
                EvolutionConfig::default().with_perfect_threshold(f64::INFINITY),
                ConfigError::NonFiniteThreshold(f64::INFINITY),
            ),
        ];
        for (config, expected) in cases {
            assert_eq!(config.validate(), Err(expected));
        }
    }

    #[test]
    fn test_validate_rejects_out_of_range_mutation_rate() {
        let config = EvolutionConfig {
            mutation_rate: 1.5,
            ..EvolutionConfig::default()
        };
        assert_eq!(config.validate(), Err(ConfigError::InvalidMutationRate(1.5)));
    }

    #[test]
    fn test_validate_rejects_nan_range() {
        let config = EvolutionConfig::default().with_coefficient_range(f64::NAN, 1.0);
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidCoefficientRange { .. })
        ));
    }
}
