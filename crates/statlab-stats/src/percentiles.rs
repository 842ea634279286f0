/// Computes a percentile from sorted data by linear interpolation.
///
/// The rank of percentile `p` is `p * (n - 1)`. When the rank falls between
/// two order statistics the result is interpolated between them, which is the
/// "linear" (R-7) method used by most spreadsheet software.
///
/// # Arguments
///
/// * `sorted_values` - Values sorted in ascending order
/// * `p` - The percentile as a fraction, clamped to `0.0..=1.0`
///
/// # Returns
///
/// The interpolated value. Returns `f64::NAN` if the input is empty or `p` is `NaN`.
///
/// # Examples
///
/// ```
/// use statlab_stats::percentiles::percentile;
///
/// let values = [1.0, 2.0, 3.0, 4.0];
/// assert_eq!(percentile(&values, 0.0), 1.0);
/// assert_eq!(percentile(&values, 0.5), 2.5);
/// assert_eq!(percentile(&values, 0.25), 1.75);
/// assert_eq!(percentile(&values, 1.0), 4.0);
/// ```
#[expect(
    clippy::cast_sign_loss,
    clippy::cast_possible_truncation,
    clippy::cast_precision_loss
)]
#[must_use]
pub fn percentile(sorted_values: &[f64], p: f64) -> f64 {
    debug_assert!(
        sorted_values.is_sorted_by(|a, b| a <= b),
        "values must be sorted in ascending order"
    );

    if sorted_values.is_empty() || p.is_nan() {
        return f64::NAN;
    }

    let rank = p.clamp(0.0, 1.0) * (sorted_values.len() - 1) as f64;
    let lower = rank.floor();
    let upper = rank.ceil();
    let lo = sorted_values[lower as usize];
    if lower == upper {
        return lo;
    }
    let hi = sorted_values[upper as usize];
    let weight = rank - lower;
    // `hi - lo` can overflow for finite values, so the neighbours are weighted directly.
    // Rounding may push the sum just past `hi`, which would break Q1 <= Q2 <= Q3
    (lo * (1.0 - weight) + hi * weight).clamp(lo, hi)
}
