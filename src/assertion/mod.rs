//! Comparative fitness assertions.
//!
//! An [`Assertion`] compares a candidate polynomial (function or
//! derivative) against a fixed reference polynomial at evenly spaced
//! samples over a parameter interval. An [`AssertionGroup`] averages the
//! scores of its members into a single fitness value.
//!
//! # Key Types
//!
//! - [`Comparison`]: the relational operator (`==`, `!=`, `>`, ...)
//! - [`Mode`]: compare function values or derivative values
//! - [`Assertion`] / [`AssertionBuilder`]: one validated constraint
//! - [`AssertionGroup`]: the fitness function used by the engine

mod check;
mod group;
mod types;

pub use check::{Assertion, AssertionBuilder, MAX_SAMPLES};
pub use group::AssertionGroup;
pub use types::{Comparison, Mode};
