//! Polynomial evolution engine.
//!
//! A fixed-size population of polynomial genomes is scored against an
//! [`AssertionGroup`](crate::assertion::AssertionGroup), parents are drawn
//! by fitness-proportionate selection, and offspring are produced by
//! three-way crossover followed by coefficient mutation.
//!
//! # Key Types
//!
//! - [`EvolutionConfig`]: Population, generation, mutation and handoff parameters
//! - [`Evolution`]: Runs the generational loop on the calling thread
//! - [`PolynomialPopulation`]: Runs the loop on a worker thread and hands
//!   snapshots of the best genome to a consumer
//! - [`EvolutionState`]: Lifecycle of a run
//!
//! # Submodules
//!
//! - [`operators`]: Initialization, crossover and mutation
//! - [`selection`]: Roulette wheel over remapped scores
//!
//! # References
//!
//! - Holland (1975), *Adaptation in Natural and Artificial Systems*
//! - Goldberg (1989), *Genetic Algorithms in Search, Optimization, and Machine Learning*

mod config;
pub mod operators;
mod population;
mod runner;
pub mod selection;
mod state;

pub use config::EvolutionConfig;
pub use population::PolynomialPopulation;
pub use runner::{Evolution, EvolutionResult, GenerationReport};
pub use state::EvolutionState;
