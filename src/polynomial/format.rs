//! Human-readable formula rendering.

use super::genome::Term;
use std::fmt::Write;

/// Significant digits used for coefficients and exponents.
const SIGNIFICANT_DIGITS: i32 = 5;

/// Formats `value` with [`SIGNIFICANT_DIGITS`] significant digits,
/// trimming trailing zeros.
///
/// Decimal exponents below -4 or at least [`SIGNIFICANT_DIGITS`] switch to
/// exponent notation, e.g. `1e+300` or `-2.5e-07`.
pub(crate) fn format_number(value: f64) -> String {
    if value == 0.0 {
        return "0".into();
    }
    if !value.is_finite() {
        return value.to_string();
    }

    // The exponent after rounding to the kept digits.
    let scientific = format!("{:.*e}", (SIGNIFICANT_DIGITS - 1) as usize, value);
    let (mantissa, exponent) = match scientific.split_once('e') {
        Some((m, e)) => (m, e.parse::<i32>().unwrap_or(0)),
        None => (scientific.as_str(), 0),
    };

    if exponent < -4 || exponent >= SIGNIFICANT_DIGITS {
        let sign = if exponent < 0 { '-' } else { '+' };
        return format!("{}e{sign}{:02}", trim_fraction(mantissa), exponent.abs());
    }

    let decimals = (SIGNIFICANT_DIGITS - 1 - exponent).max(0) as usize;
    trim_fraction(&format!("{value:.decimals$}")).to_string()
}

fn trim_fraction(s: &str) -> &str {
    if s.contains('.') {
        s.trim_end_matches('0').trim_end_matches('.')
    } else {
        s
    }
}

/// Renders `label = term term ...` with signed joins.
///
/// The first term carries a bare `-` when negative and no prefix
/// otherwise; later terms are joined with ` + ` or ` - `.
pub(crate) fn render_terms<I>(label: &str, terms: I) -> String
where
    I: IntoIterator<Item = Term>,
{
    let mut out = format!("{label} = ");
    let mut first = true;

    for term in terms {
        let negative = term.coefficient < 0.0;
        match (first, negative) {
            (true, true) => out.push('-'),
            (true, false) => {}
            (false, true) => out.push_str(" - "),
            (false, false) => out.push_str(" + "),
        }
        out.push_str(&format_number(term.coefficient.abs()));

        if term.exponent == 1.0 {
            out.push('t');
        } else if term.exponent != 0.0 {
            // Writing to a String cannot fail.
            let _ = write!(out, "t^{}", format_number(term.exponent));
        }
        first = false;
    }

    if first {
        out.push('0');
    }
    out
}
