//! Polynomial genome model.
//!
//! A [`Polynomial`] is an ordered sequence of [`Term`]s, each a
//! `(coefficient, exponent)` pair. It is both the candidate solution that
//! the evolutionary engine breeds and the reference data that assertions
//! compare against.
//!
//! # Key Types
//!
//! - [`Polynomial`]: evaluation, derivative evaluation, formula rendering
//! - [`Term`]: one coefficient/exponent pair
//! - [`PlotData`]: drawing capability shared with [`PolyLineData`]
//! - [`PlotSurface`]: the consumer-side drawing sink

mod format;
mod genome;
mod plot;
pub(crate) mod sampling;

pub use genome::{Polynomial, Term};
pub use plot::{ColorA, PlotData, PlotSurface, PolyLineData};
