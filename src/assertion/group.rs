//! Averaged groups of assertions.

use super::check::Assertion;
use crate::polynomial::Polynomial;

/// An ordered collection of [`Assertion`]s scored as their mean.
///
/// This is the fitness function of the evolutionary engine. An empty
/// group scores `0.0`.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AssertionGroup {
    assertions: Vec<Assertion>,
}

impl AssertionGroup {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, assertion: Assertion) {
        self.assertions.push(assertion);
    }

    /// Chainable form of [`add`](Self::add).
    pub fn with(mut self, assertion: Assertion) -> Self {
        self.add(assertion);
        self
    }

    pub fn len(&self) -> usize {
        self.assertions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.assertions.is_empty()
    }

    pub fn clear(&mut self) {
        self.assertions.clear();
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Assertion> {
        self.assertions.iter()
    }

    /// Mean score of all member assertions applied to `lhs`.
    pub fn apply_to(&self, lhs: &Polynomial) -> f64 {
        if self.assertions.is_empty() {
            return 0.0;
        }
        let total: f64 = self.assertions.iter().map(|a| a.apply_to(lhs)).sum();
        total / self.assertions.len() as f64
    }

    /// One diagnostic line per assertion.
    pub fn assertion_string(&self, lhs: &Polynomial) -> String {
        self.assertions
            .iter()
            .map(|a| a.assertion_string(lhs) + "\n")
            .collect()
    }
}

impl FromIterator<Assertion> for AssertionGroup {
    fn from_iter<T: IntoIterator<Item = Assertion>>(iter: T) -> Self {
        Self {
            assertions: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a AssertionGroup {
    type Item = &'a Assertion;
    type IntoIter = std::slice::Iter<'a, Assertion>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
