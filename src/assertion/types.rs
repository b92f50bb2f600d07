//! Comparison operators and evaluation modes.

use crate::polynomial::Polynomial;

/// Relational operator applied to each sample.
///
/// Equality is exact floating-point equality; no tolerance is applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Comparison {
    #[default]
    Equal,
    NotEqual,
    Greater,
    Less,
    GreaterEqual,
    LessEqual,
}

impl Comparison {
    pub fn symbol(self) -> &'static str {
        match self {
            Comparison::Equal => "==",
            Comparison::NotEqual => "!=",
            Comparison::Greater => ">",
            Comparison::Less => "<",
            Comparison::GreaterEqual => ">=",
            Comparison::LessEqual => "<=",
        }
    }

    /// Returns `lhs <op> rhs`.
    #[allow(clippy::float_cmp)]
    pub fn holds(self, lhs: f64, rhs: f64) -> bool {
        match self {
            Comparison::Equal => lhs == rhs,
            Comparison::NotEqual => lhs != rhs,
            Comparison::Greater => lhs > rhs,
            Comparison::Less => lhs < rhs,
            Comparison::GreaterEqual => lhs >= rhs,
            Comparison::LessEqual => lhs <= rhs,
        }
    }
}

/// Which curve of a polynomial a side of the assertion reads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Mode {
    #[default]
    Function,
    Derivative,
}

impl Mode {
    pub fn symbol(self) -> &'static str {
        match self {
            Mode::Function => "f",
            Mode::Derivative => "df",
        }
    }

    pub fn evaluate(self, polynomial: &Polynomial, t: f64) -> f64 {
        match self {
            Mode::Function => polynomial.value(t),
            Mode::Derivative => polynomial.derivative_value(t),
        }
    }

    pub fn formula(self, polynomial: &Polynomial) -> String {
        match self {
            Mode::Function => polynomial.formula_string(),
            Mode::Derivative => polynomial.derivative_formula_string(),
        }
    }
}
