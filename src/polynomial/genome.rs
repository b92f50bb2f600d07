//! The polynomial genome.

use super::format::render_terms;
use super::plot::ColorA;
use super::sampling;
use std::fmt;

/// One `coefficient · t^exponent` component of a [`Polynomial`].
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Term {
    pub coefficient: f64,
    pub exponent: f64,
}

impl Term {
    pub fn new(coefficient: f64, exponent: f64) -> Self {
        Self {
            coefficient,
            exponent,
        }
    }

    /// Element-wise average of two terms.
    pub fn midpoint(self, other: Term) -> Term {
        Term {
            coefficient: (self.coefficient + other.coefficient) / 2.0,
            exponent: (self.exponent + other.exponent) / 2.0,
        }
    }

    /// The term of the first derivative, `(c·e)·t^(e−1)`.
    pub fn derivative(self) -> Term {
        Term {
            coefficient: self.coefficient * self.exponent,
            exponent: self.exponent - 1.0,
        }
    }
}

/// A candidate polynomial: an ordered list of [`Term`]s.
///
/// Term order is preserved exactly as added. It determines how two
/// parents line up during crossover and how the formula string reads.
///
/// The draw fields (range, flags, color, stroke weight) are presentation
/// data for consumers that plot the polynomial; they play no part in
/// evaluation or evolution.
///
/// # Examples
///
/// ```
/// use poly_evolve::polynomial::Polynomial;
///
/// let mut p = Polynomial::new();
/// p.add_component(1.0, 2.0);
/// p.add_component(-2.0, 0.0);
///
/// assert_eq!(p.value(3.0), 7.0);
/// assert_eq!(p.derivative_value(3.0), 6.0);
/// assert_eq!(p.formula_string(), "f(t) = 1t^2 - 2");
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Polynomial {
    terms: Vec<Term>,
    draw_range_in: f64,
    draw_range_out: f64,
    draw_formula: bool,
    draw_derivative: bool,
    color: ColorA,
    stroke_weight: f64,
}

impl Default for Polynomial {
    fn default() -> Self {
        Self {
            terms: Vec::new(),
            draw_range_in: 0.0,
            draw_range_out: 1.0,
            draw_formula: true,
            draw_derivative: true,
            color: ColorA::WHITE,
            stroke_weight: 3.0,
        }
    }
}

impl Polynomial {
    /// Creates an empty polynomial with default draw parameters.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a polynomial from `(coefficient, exponent)` pairs.
    pub fn from_pairs<I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (f64, f64)>,
    {
        let mut p = Self::new();
        for (coefficient, exponent) in pairs {
            p.add_component(coefficient, exponent);
        }
        p
    }

    /// Appends a component. No sorting or merging takes place.
    pub fn add_component(&mut self, coefficient: f64, exponent: f64) {
        self.terms.push(Term::new(coefficient, exponent));
    }

    pub(crate) fn push_term(&mut self, term: Term) {
        self.terms.push(term);
    }

    pub fn components(&self) -> &[Term] {
        &self.terms
    }

    pub fn components_mut(&mut self) -> &mut [Term] {
        &mut self.terms
    }

    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// Computes `Σ c·t^e`.
    ///
    /// Uses `powf`, so `0^0` evaluates to `1`.
    pub fn value(&self, t: f64) -> f64 {
        self.terms
            .iter()
            .map(|term| term.coefficient * t.powf(term.exponent))
            .sum()
    }

    /// Computes `Σ (c·e)·t^(e−1)`.
    ///
    /// Terms whose derivative coefficient is zero (constants, zero
    /// coefficients) contribute nothing, so a constant term never
    /// introduces `t^-1` at `t = 0`. Fractional exponents at negative `t`
    /// still yield NaN.
    pub fn derivative_value(&self, t: f64) -> f64 {
        self.derivative_terms()
            .map(|term| term.coefficient * t.powf(term.exponent))
            .sum()
    }

    /// Returns the formula, e.g. `f(t) = 3t^2 - 2t + 1`.
    pub fn formula_string(&self) -> String {
        render_terms("f(t)", self.terms.iter().copied())
    }

    /// Returns the derivative formula, e.g. `df(t) = 6t - 2`.
    pub fn derivative_formula_string(&self) -> String {
        render_terms("df(t)", self.derivative_terms())
    }

    fn derivative_terms(&self) -> impl Iterator<Item = Term> + '_ {
        self.terms
            .iter()
            .map(|term| term.derivative())
            .filter(|term| term.coefficient != 0.0)
    }

    /// Sets all presentation fields at once.
    pub fn set_draw_parameters(
        &mut self,
        range_in: f64,
        range_out: f64,
        draw_formula: bool,
        draw_derivative: bool,
        color: ColorA,
        stroke_weight: f64,
    ) {
        self.draw_range_in = range_in;
        self.draw_range_out = range_out;
        self.draw_formula = draw_formula;
        self.draw_derivative = draw_derivative;
        self.color = color;
        self.stroke_weight = stroke_weight;
    }

    /// Builder form of [`set_draw_parameters`](Self::set_draw_parameters)
    /// for the range only.
    pub fn with_draw_range(mut self, range_in: f64, range_out: f64) -> Self {
        self.draw_range_in = range_in;
        self.draw_range_out = range_out;
        self
    }

    pub fn draw_range(&self) -> (f64, f64) {
        (self.draw_range_in, self.draw_range_out)
    }

    pub fn draws_formula(&self) -> bool {
        self.draw_formula
    }

    pub fn draws_derivative(&self) -> bool {
        self.draw_derivative
    }

    /// Number of plotted samples, `round((out − in) × 100)`.
    pub fn draw_samples(&self) -> usize {
        sampling::sample_count(self.draw_range_in, self.draw_range_out)
    }

    pub(crate) fn color(&self) -> ColorA {
        self.color
    }

    pub(crate) fn set_color(&mut self, color: ColorA) {
        self.color = color;
    }

    pub(crate) fn stroke(&self) -> f64 {
        self.stroke_weight
    }

    pub(crate) fn set_stroke(&mut self, weight: f64) {
        self.stroke_weight = weight;
    }
}

impl fmt::Display for Polynomial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.formula_string())
    }
}
