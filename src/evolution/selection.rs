//! Fitness-proportionate parent selection.
//!
//! Raw scores are remapped linearly from `[worst, best]` onto
//! `[MIN_WEIGHT, MAX_WEIGHT]` before the wheel is spun, so even the worst
//! genome keeps a small chance of mating.
//!
//! # References
//!
//! - Goldberg (1989), *Genetic Algorithms in Search, Optimization, and
//!   Machine Learning*, ch. 1 (roulette wheel selection)

use crate::error::EvolutionError;
use rand::Rng;

/// Weight assigned to the worst genome.
pub const MIN_WEIGHT: f64 = 1.0;

/// Weight assigned to the best genome.
pub const MAX_WEIGHT: f64 = 1000.0;

/// Added to `best` when every score is equal, keeping the remap defined.
const FLAT_SCORE_NUDGE: f64 = 0.1;

/// A roulette wheel over one generation's scores.
#[derive(Debug, Clone)]
pub struct RouletteWheel {
    weights: Vec<f64>,
    total: f64,
}

impl RouletteWheel {
    /// Builds the wheel from raw scores and their extremes.
    ///
    /// Fails when the pool is empty or the weights do not sum to a finite
    /// positive value (e.g. NaN scores).
    pub fn from_scores(scores: &[f64], best: f64, worst: f64) -> Result<Self, EvolutionError> {
        let best = if best == worst { best + FLAT_SCORE_NUDGE } else { best };
        let span = best - worst;

        let weights: Vec<f64> = scores
            .iter()
            .map(|&s| MIN_WEIGHT + (MAX_WEIGHT - MIN_WEIGHT) * ((s - worst) / span))
            .collect();
        Self::from_weights(weights)
    }

    /// Builds the wheel from precomputed weights.
    pub fn from_weights(weights: Vec<f64>) -> Result<Self, EvolutionError> {
        let total: f64 = weights.iter().sum();
        let malformed = weights.iter().any(|w| !w.is_finite() || *w < 0.0);
        if weights.is_empty() || malformed || !total.is_finite() || total <= 0.0 {
            return Err(EvolutionError::DegenerateWeights {
                len: weights.len(),
                sum: total,
            });
        }
        Ok(Self { weights, total })
    }

    pub fn weights(&self) -> &[f64] {
        &self.weights
    }

    pub fn total(&self) -> f64 {
        self.total
    }

    /// Spins the wheel once.
    ///
    /// Draws a threshold in `[0, total)` and returns the first index whose
    /// cumulative weight exceeds it. Draws are independent, so the same
    /// index may be returned twice in a row.
    ///
    /// # Complexity
    /// O(n) per selection (linear scan)
    pub fn select<R: Rng>(&self, rng: &mut R) -> Result<usize, EvolutionError> {
        let threshold = rng.random_range(0.0..self.total);
        let mut cumulative = 0.0;
        for (i, &w) in self.weights.iter().enumerate() {
            cumulative += w;
            if cumulative > threshold {
                return Ok(i);
            }
        }
        Err(EvolutionError::SelectionExhausted)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_remap_endpoints() {
        let wheel = RouletteWheel::from_scores(&[0.2, 0.6, 1.0], 1.0, 0.2).unwrap();
        let w = wheel.weights();
        assert_eq!(w[0], MIN_WEIGHT);
        assert!((w[1] - 500.5).abs() < 1e-9);
        assert_eq!(w[2], MAX_WEIGHT);
    }

    #[test]
    fn test_flat_scores_are_uniform() {
        let wheel = RouletteWheel::from_scores(&[0.5, 0.5, 0.5, 0.5], 0.5, 0.5).unwrap();
        assert!(wheel.weights().iter().all(|&w| w == MIN_WEIGHT));

        let mut rng = StdRng::seed_from_u64(42);
        let mut counts = [0u32; 4];
        for _ in 0..10_000 {
            counts[wheel.select(&mut rng).unwrap()] += 1;
        }
        for &c in &counts {
            assert!(c > 2000, "expected roughly uniform, got {counts:?}");
        }
    }

    #[test]
    fn test_roulette_favors_best() {
        let wheel = RouletteWheel::from_scores(&[0.0, 0.5, 1.0, 0.25], 1.0, 0.0).unwrap();
        let mut rng = StdRng::seed_from_u64(42);

        let mut counts = [0u32; 4];
        let n = 10_000;
        for _ in 0..n {
            counts[wheel.select(&mut rng).unwrap()] += 1;
        }
        assert!(counts[2] > counts[1]);
        assert!(counts[1] > counts[3]);
        assert!(counts[3] > counts[0]);
    }

    #[test]
    fn test_single_entry() {
        let wheel = RouletteWheel::from_scores(&[0.3], 0.3, 0.3).unwrap();
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..10 {
            assert_eq!(wheel.select(&mut rng).unwrap(), 0);
        }
    }

    #[test]
    fn test_empty_pool_is_degenerate() {
        let err = RouletteWheel::from_scores(&[], 0.0, 0.0).unwrap_err();
        assert!(matches!(err, EvolutionError::DegenerateWeights { len: 0, .. }));
    }

    #[test]
    fn test_zero_and_nan_weights_are_degenerate() {
        assert!(RouletteWheel::from_weights(vec![0.0, 0.0]).is_err());
        assert!(RouletteWheel::from_weights(vec![1.0, f64::NAN]).is_err());
        assert!(RouletteWheel::from_scores(&[f64::NAN, 0.5], 0.5, 0.0).is_err());
    }

    #[test]
    fn test_zero_weight_entry_never_selected() {
        let wheel = RouletteWheel::from_weights(vec![0.0, 1.0, 0.0]).unwrap();
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..1000 {
            assert_eq!(wheel.select(&mut rng).unwrap(), 1);
        }
    }
}
