//! Evenly spaced parameter sampling, shared by plotting and scoring.

/// Samples taken per unit of parameter range.
pub(crate) const SAMPLES_PER_UNIT: f64 = 100.0;

/// `round((range_out − range_in) × 100)`.
///
/// Empty, inverted and non-finite ranges yield 0. Very wide ranges
/// saturate at `usize::MAX`.
pub(crate) fn sample_count(range_in: f64, range_out: f64) -> usize {
    let width = range_out - range_in;
    if width.is_finite() && width > 0.0 {
        (width * SAMPLES_PER_UNIT).round() as usize
    } else {
        0
    }
}

/// Parameter of sample `i` out of `samples` spread over
/// `[range_in, range_out]`, both ends included.
///
/// A single sample sits at `range_in`.
pub(crate) fn sample_param(range_in: f64, range_out: f64, i: usize, samples: usize) -> f64 {
    if samples <= 1 {
        return range_in;
    }
    range_in + (range_out - range_in) * i as f64 / (samples - 1) as f64
}
