//! Evolutionary search for polynomials that satisfy comparative assertions.
//!
//! A population of polynomial genomes is evolved until the best genome
//! satisfies a group of assertions of the form "the function (or its
//! derivative) compares to a reference polynomial over a parameter range".
//!
//! - **Polynomial**: Genome model with evaluation, derivative evaluation,
//!   formula rendering and a plotting capability.
//! - **Assertion**: Sampled comparisons against a reference polynomial,
//!   grouped into a single fitness function.
//! - **Evolution**: Roulette selection, three-way crossover and coefficient
//!   mutation over a fixed-size population, either on the calling thread
//!   or on a worker that hands snapshots of the best genome to a consumer.
//!
//! # Example
//!
//! ```
//! use poly_evolve::assertion::{Assertion, AssertionGroup, Comparison, Mode};
//! use poly_evolve::evolution::{Evolution, EvolutionConfig};
//! use poly_evolve::polynomial::Polynomial;
//!
//! // df(t) < 2t + 2 and df(t) > 2t - 2 on [-10, 10]
//! let upper = Polynomial::from_pairs([(2.0, 1.0), (2.0, 0.0)]);
//! let lower = Polynomial::from_pairs([(2.0, 1.0), (-2.0, 0.0)]);
//! let group = AssertionGroup::new()
//!     .with(
//!         Assertion::builder()
//!             .reference(upper)
//!             .range(-10.0, 10.0)
//!             .comparison(Comparison::Less)
//!             .modes(Mode::Derivative, Mode::Function)
//!             .build()
//!             .unwrap(),
//!     )
//!     .with(
//!         Assertion::builder()
//!             .reference(lower)
//!             .range(-10.0, 10.0)
//!             .comparison(Comparison::Greater)
//!             .modes(Mode::Derivative, Mode::Function)
//!             .build()
//!             .unwrap(),
//!     );
//!
//! let config = EvolutionConfig::default()
//!     .with_population_size(40)
//!     .with_max_generations(5)
//!     .with_seed(1);
//! let result = Evolution::new(group, config).unwrap().run(|_| true);
//! let best = result.last.unwrap().best;
//! println!("{best}");
//! ```

pub mod assertion;
pub mod error;
pub mod evolution;
pub mod polynomial;
