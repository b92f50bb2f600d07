//! Genetic operators for polynomial genomes.
//!
//! # Operators
//!
//! - [`initialize`]: random genome with exponents `0..=degree`
//! - [`crossover`]: per-position three-way choice (parent A, parent B, average)
//! - [`mutate`]: resample one coefficient; exponents are never touched

use super::config::EvolutionConfig;
use crate::polynomial::Polynomial;
use rand::Rng;

/// Creates a random genome.
///
/// The genome has `degree + 1` terms; term `i` has exponent `i` and a
/// coefficient drawn uniformly from `coefficient_range`.
pub fn initialize<R: Rng>(config: &EvolutionConfig, rng: &mut R) -> Polynomial {
    let (lo, hi) = config.coefficient_range;
    let mut genome = Polynomial::new();
    for exponent in 0..=config.degree {
        genome.add_component(rng.random_range(lo..hi), exponent as f64);
    }
    genome
}

/// Produces one offspring by walking both parents in lock-step.
///
/// At every position one of three outcomes is drawn uniformly: the term
/// of `parent_a`, the term of `parent_b`, or their element-wise average.
/// The walk stops at the end of the shorter parent, so the child has
/// `min(parent_a.len(), parent_b.len())` terms.
///
/// # Complexity
/// O(n) time, O(n) space
pub fn crossover<R: Rng>(parent_a: &Polynomial, parent_b: &Polynomial, rng: &mut R) -> Polynomial {
    let mut child = Polynomial::new();
    for (&a, &b) in parent_a.components().iter().zip(parent_b.components()) {
        let term = match rng.random_range(0..3u8) {
            0 => a,
            1 => b,
            _ => a.midpoint(b),
        };
        child.push_term(term);
    }
    child
}

/// With probability `rate`, replaces the coefficient of one uniformly
/// chosen term with a fresh value from `range`.
///
/// Returns `true` when a coefficient was replaced. Empty genomes are left
/// untouched.
pub fn mutate<R: Rng>(genome: &mut Polynomial, rate: f64, range: (f64, f64), rng: &mut R) -> bool {
    if !rng.random_bool(rate) || genome.is_empty() {
        return false;
    }
    let idx = rng.random_range(0..genome.len());
    genome.components_mut()[idx].coefficient = rng.random_range(range.0..range.1);
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn rng() -> StdRng {
        StdRng::seed_from_u64(42)
    }

    #[test]
    fn test_initialize_shape() {
        let config = EvolutionConfig::default().with_degree(4);
        let mut rng = rng();
        for _ in 0..100 {
            let genome = initialize(&config, &mut rng);
            assert_eq!(genome.len(), 5);
            for (i, term) in genome.components().iter().enumerate() {
                assert_eq!(term.exponent, i as f64);
                assert!(term.coefficient >= -10.0 && term.coefficient < 10.0);
            }
        }
    }

    #[test]
    fn test_crossover_takes_parent_or_average() {
        let a = Polynomial::from_pairs([(1.0, 0.0), (2.0, 1.0), (3.0, 2.0)]);
        let b = Polynomial::from_pairs([(5.0, 0.0), (6.0, 1.0), (7.0, 2.0)]);
        let mut rng = rng();

        let mut seen = [0usize; 3];
        for _ in 0..300 {
            let child = crossover(&a, &b, &mut rng);
            assert_eq!(child.len(), 3);
            for (i, term) in child.components().iter().enumerate() {
                let ta = a.components()[i];
                let tb = b.components()[i];
                if *term == ta {
                    seen[0] += 1;
                } else if *term == tb {
                    seen[1] += 1;
                } else {
                    assert_eq!(*term, ta.midpoint(tb));
                    seen[2] += 1;
                }
            }
        }
        // 900 draws over three outcomes
        for &count in &seen {
            assert!(count > 200, "expected roughly uniform choices, got {seen:?}");
        }
    }

    #[test]
    fn test_crossover_stops_at_shorter_parent() {
        let long = Polynomial::from_pairs([(1.0, 0.0), (1.0, 1.0), (1.0, 2.0), (1.0, 3.0)]);
        let short = Polynomial::from_pairs([(2.0, 0.0), (2.0, 1.0)]);
        let mut rng = rng();

        assert_eq!(crossover(&long, &short, &mut rng).len(), 2);
        assert_eq!(crossover(&short, &long, &mut rng).len(), 2);
        assert!(crossover(&long, &Polynomial::new(), &mut rng).is_empty());
    }

    #[test]
    fn test_self_mating_reproduces_parent() {
        let parent = Polynomial::from_pairs([(1.5, 0.0), (-2.5, 1.0)]);
        let mut rng = rng();
        let child = crossover(&parent, &parent, &mut rng);
        assert_eq!(child.components(), parent.components());
    }

    #[test]
    fn test_mutate_changes_single_coefficient() {
        let original = Polynomial::from_pairs([(0.5, 0.0), (0.5, 1.0), (0.5, 2.0)]);
        let mut rng = rng();

        for _ in 0..100 {
            let mut genome = original.clone();
            assert!(mutate(&mut genome, 1.0, (-10.0, 10.0), &mut rng));

            let changed: Vec<usize> = genome
                .components()
                .iter()
                .zip(original.components())
                .enumerate()
                .filter(|(_, (m, o))| m.coefficient != o.coefficient)
                .map(|(i, _)| i)
                .collect();
            assert!(changed.len() <= 1);
            for (m, o) in genome.components().iter().zip(original.components()) {
                assert_eq!(m.exponent, o.exponent);
            }
        }
    }

    #[test]
    fn test_mutate_rate_zero_is_noop() {
        let mut genome = Polynomial::from_pairs([(1.0, 0.0), (2.0, 1.0)]);
        let before = genome.clone();
        let mut rng = rng();
        for _ in 0..100 {
            assert!(!mutate(&mut genome, 0.0, (-10.0, 10.0), &mut rng));
        }
        assert_eq!(genome, before);
    }

    #[test]
    fn test_mutate_empty_genome() {
        let mut genome = Polynomial::new();
        let mut rng = rng();
        assert!(!mutate(&mut genome, 1.0, (-10.0, 10.0), &mut rng));
        assert!(genome.components().is_empty());
    }
}
