//! A single comparative assertion.

use super::types::{Comparison, Mode};
use crate::error::AssertionError;
use crate::polynomial::sampling::{sample_count, sample_param};
use crate::polynomial::Polynomial;

/// Largest sample count an assertion accepts, i.e. a range at most
/// 10 000 units wide.
pub const MAX_SAMPLES: usize = 1_000_000;

/// One comparative constraint between a candidate and a reference
/// polynomial.
///
/// `apply_to` samples `round((range_out − range_in) × 100)` evenly spaced
/// parameters across `[range_in, range_out]`, evaluates both sides in
/// their [`Mode`], and returns the satisfied fraction scaled by
/// `score_weight`.
///
/// Assertions are validated on construction, so every instance has
/// between 1 and [`MAX_SAMPLES`] samples and a reference polynomial.
///
/// # Examples
///
/// ```
/// use poly_evolve::assertion::{Assertion, Comparison, Mode};
/// use poly_evolve::polynomial::Polynomial;
///
/// let band_top = Polynomial::from_pairs([(2.0, 1.0), (2.0, 0.0)]);
/// let assertion = Assertion::builder()
///     .reference(band_top)
///     .range(-10.0, 10.0)
///     .comparison(Comparison::Less)
///     .modes(Mode::Derivative, Mode::Function)
///     .build()
///     .unwrap();
///
/// let candidate = Polynomial::from_pairs([(1.0, 2.0)]);
/// assert_eq!(assertion.apply_to(&candidate), 1.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "AssertionBuilder"))]
pub struct Assertion {
    range_in: f64,
    range_out: f64,
    score_weight: f64,
    comparison: Comparison,
    lhs_mode: Mode,
    rhs_mode: Mode,
    reference: Polynomial,
}

impl Assertion {
    pub fn builder() -> AssertionBuilder {
        AssertionBuilder::default()
    }

    pub fn range_in(&self) -> f64 {
        self.range_in
    }

    pub fn range_out(&self) -> f64 {
        self.range_out
    }

    pub fn score_weight(&self) -> f64 {
        self.score_weight
    }

    pub fn comparison(&self) -> Comparison {
        self.comparison
    }

    pub fn lhs_mode(&self) -> Mode {
        self.lhs_mode
    }

    pub fn rhs_mode(&self) -> Mode {
        self.rhs_mode
    }

    pub fn reference(&self) -> &Polynomial {
        &self.reference
    }

    /// Number of samples, `round((range_out − range_in) × 100)`.
    pub fn sample_count(&self) -> usize {
        sample_count(self.range_in, self.range_out)
    }

    /// Scores `lhs` against this assertion.
    ///
    /// A sample is satisfied when both sides are finite and the comparison
    /// holds. The result lies in `[0, score_weight]`.
    pub fn apply_to(&self, lhs: &Polynomial) -> f64 {
        let samples = self.sample_count();
        if samples == 0 {
            return 0.0;
        }

        let satisfied = (0..samples)
            .filter(|&i| {
                let t = sample_param(self.range_in, self.range_out, i, samples);
                let lhs_value = self.lhs_mode.evaluate(lhs, t);
                let rhs_value = self.rhs_mode.evaluate(&self.reference, t);
                lhs_value.is_finite()
                    && rhs_value.is_finite()
                    && self.comparison.holds(lhs_value, rhs_value)
            })
            .count();

        satisfied as f64 / samples as f64 * self.score_weight
    }

    /// Diagnostic one-liner describing the assertion applied to `lhs`.
    pub fn assertion_string(&self, lhs: &Polynomial) -> String {
        format!(
            "Assert: {}   {}   {}\tIn range: [ {}, {} ]\tScore: {}",
            self.lhs_mode.formula(lhs),
            self.comparison.symbol(),
            self.rhs_mode.formula(&self.reference),
            self.range_in,
            self.range_out,
            self.apply_to(lhs)
        )
    }
}

/// Builder for [`Assertion`].
///
/// Defaults: range `[0, 0]` (must be set), weight `1.0`,
/// [`Comparison::Equal`], both modes [`Mode::Function`], no reference.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct AssertionBuilder {
    range_in: f64,
    range_out: f64,
    score_weight: f64,
    comparison: Comparison,
    lhs_mode: Mode,
    rhs_mode: Mode,
    reference: Option<Polynomial>,
}

impl Default for AssertionBuilder {
    fn default() -> Self {
        Self {
            range_in: 0.0,
            range_out: 0.0,
            score_weight: 1.0,
            comparison: Comparison::default(),
            lhs_mode: Mode::default(),
            rhs_mode: Mode::default(),
            reference: None,
        }
    }
}

impl AssertionBuilder {
    /// Sets the right-hand reference polynomial.
    pub fn reference(mut self, reference: Polynomial) -> Self {
        self.reference = Some(reference);
        self
    }

    /// Sets the sampled parameter range.
    pub fn range(mut self, range_in: f64, range_out: f64) -> Self {
        self.range_in = range_in;
        self.range_out = range_out;
        self
    }

    pub fn weight(mut self, weight: f64) -> Self {
        self.score_weight = weight;
        self
    }

    pub fn comparison(mut self, comparison: Comparison) -> Self {
        self.comparison = comparison;
        self
    }

    /// Sets the left-hand (candidate) and right-hand (reference) modes.
    pub fn modes(mut self, lhs: Mode, rhs: Mode) -> Self {
        self.lhs_mode = lhs;
        self.rhs_mode = rhs;
        self
    }

    /// Validates the parameters and builds the assertion.
    pub fn build(self) -> Result<Assertion, AssertionError> {
        let (range_in, range_out) = (self.range_in, self.range_out);
        if !range_in.is_finite() || !range_out.is_finite() {
            return Err(AssertionError::NonFiniteRange {
                range_in,
                range_out,
            });
        }
        if range_out < range_in {
            return Err(AssertionError::InvertedRange {
                range_in,
                range_out,
            });
        }
        let samples = sample_count(range_in, range_out);
        if samples == 0 {
            return Err(AssertionError::EmptyRange {
                range_in,
                range_out,
            });
        }
        if samples > MAX_SAMPLES {
            return Err(AssertionError::TooManySamples {
                samples,
                max: MAX_SAMPLES,
            });
        }
        if !self.score_weight.is_finite() || self.score_weight < 0.0 {
            return Err(AssertionError::InvalidWeight(self.score_weight));
        }
        let reference = self.reference.ok_or(AssertionError::MissingReference)?;

        Ok(Assertion {
            range_in,
            range_out,
            score_weight: self.score_weight,
            comparison: self.comparison,
            lhs_mode: self.lhs_mode,
            rhs_mode: self.rhs_mode,
            reference,
        })
    }
}

impl TryFrom<AssertionBuilder> for Assertion {
    type Error = AssertionError;

    fn try_from(builder: AssertionBuilder) -> Result<Self, Self::Error> {
        builder.build()
    }
}
