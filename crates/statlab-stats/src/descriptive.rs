use std::fmt;

use serde::Serialize;

use crate::sample::Sample;

/// Summary measures of a sample.
///
/// Besides the usual measures of location and dispersion, this carries the
/// Sturges class count and the class width used to build the grouped
/// frequency distribution.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BasicStats {
    /// The number of values.
    pub n: usize,
    /// The minimum value.
    pub min: f64,
    /// The maximum value.
    pub max: f64,
    /// `max - min`.
    pub range: f64,
    /// Number of classes by Sturges' rule.
    pub class_count: usize,
    /// Width (amplitude) of each class.
    pub class_width: f64,
    /// The arithmetic mean.
    pub mean: f64,
    /// The population variance (divided by `n`).
    pub variance: f64,
    /// The population standard deviation.
    pub std_dev: f64,
    /// `std_dev / mean * 100`, or `None` when the mean is zero.
    pub coefficient_of_variation: Option<f64>,
    /// Whether every value is a whole number.
    pub all_integers: bool,
}

impl BasicStats {
    /// Computes summary measures of a sample.
    ///
    /// # Examples
    ///
    /// ```
    /// # use statlab_stats::{descriptive::BasicStats, sample::Sample};
    /// let sample = Sample::from_values([1.0, 2.0, 3.0, 4.0, 5.0]).unwrap();
    /// let stats = BasicStats::from_sample(&sample);
    /// assert_eq!(stats.mean, 3.0);
    /// assert_eq!(stats.variance, 2.0);
    /// assert_eq!(stats.class_count, 4);
    /// assert_eq!(stats.class_width, 1.0);
    /// ```
    #[expect(clippy::cast_precision_loss)]
    #[must_use]
    pub fn from_sample(sample: &Sample) -> Self {
        let values = sample.values();
        let n = values.len();
        let min = values.iter().copied().fold(f64::INFINITY, f64::min);
        let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        let range = max - min;
        let class_count = sturges_class_count(n);
        let all_integers = values.iter().all(|v| *v == v.floor());
        let class_width = class_width(range, class_count, all_integers);

        // Rounding in the sum can put the mean outside [min, max] for constant data
        let mean = (values.iter().sum::<f64>() / n as f64).clamp(min, max);
        let variance = values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / n as f64;
        let std_dev = variance.sqrt();

        Self {
            n,
            min,
            max,
            range,
            class_count,
            class_width,
            mean,
            variance,
            std_dev,
            coefficient_of_variation: coefficient_of_variation(std_dev, mean),
            all_integers,
        }
    }

    /// Interpretation of the coefficient of variation, if it is defined.
    #[must_use]
    pub fn dispersion_level(&self) -> Option<DispersionLevel> {
        self.coefficient_of_variation
            .map(DispersionLevel::from_coefficient_of_variation)
    }
}

/// Number of classes by Sturges' rule: `ceil(1 + 3.322 * log10(n))`.
///
/// Returns 1 for `n <= 1`.
///
/// # Examples
///
/// ```
/// use statlab_stats::descriptive::sturges_class_count;
///
/// assert_eq!(sturges_class_count(1), 1);
/// assert_eq!(sturges_class_count(10), 5);
/// assert_eq!(sturges_class_count(100), 8);
/// ```
#[expect(
    clippy::cast_precision_loss,
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss
)]
#[must_use]
pub fn sturges_class_count(n: usize) -> usize {
    if n <= 1 {
        return 1;
    }
    (1.0 + 3.322 * (n as f64).log10()).ceil() as usize
}

/// Width of each class for a given range and class count.
///
/// Integer data gets a whole-number width (rounded up); other data gets a
/// width rounded to two decimal places. A zero range yields a zero width.
///
/// # Examples
///
/// ```
/// use statlab_stats::descriptive::class_width;
///
/// assert_eq!(class_width(9.0, 5, true), 2.0);
/// assert_eq!(class_width(1.0, 3, false), 0.33);
/// assert_eq!(class_width(0.0, 3, true), 0.0);
/// ```
#[expect(clippy::cast_precision_loss)]
#[must_use]
pub fn class_width(range: f64, class_count: usize, all_integers: bool) -> f64 {
    let raw = range / class_count.max(1) as f64;
    if all_integers {
        raw.ceil()
    } else {
        (raw * 100.0).round() / 100.0
    }
}

/// Coefficient of variation as a percentage of the mean.
///
/// Undefined (`None`) when the mean is zero.
#[must_use]
pub fn coefficient_of_variation(std_dev: f64, mean: f64) -> Option<f64> {
    (mean != 0.0).then(|| std_dev / mean * 100.0)
}

/// How representative the mean is, judged by the coefficient of variation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DispersionLevel {
    /// CV below 15 %.
    Low,
    /// CV from 15 % to 35 % inclusive.
    Moderate,
    /// CV above 35 %.
    High,
}

impl fmt::Display for DispersionLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self.to_str(), f)
    }
}

impl DispersionLevel {
    /// Classifies a coefficient of variation given in percent.
    ///
    /// # Examples
    ///
    /// ```
    /// use statlab_stats::descriptive::DispersionLevel;
    ///
    /// assert_eq!(DispersionLevel::from_coefficient_of_variation(14.9), DispersionLevel::Low);
    /// assert_eq!(DispersionLevel::from_coefficient_of_variation(35.0), DispersionLevel::Moderate);
    /// assert_eq!(DispersionLevel::from_coefficient_of_variation(35.1), DispersionLevel::High);
    /// ```
    #[must_use]
    pub fn from_coefficient_of_variation(cv: f64) -> Self {
        if cv < 15.0 {
            Self::Low
        } else if cv <= 35.0 {
            Self::Moderate
        } else {
            Self::High
        }
    }

    #[must_use]
    pub fn to_str(self) -> &'static str {
        match self {
            Self::Low => "low dispersion",
            Self::Moderate => "moderate dispersion",
            Self::High => "high dispersion",
        }
    }

    /// A short sentence explaining what the level means for the mean.
    #[must_use]
    pub fn description(self) -> &'static str {
        match self {
            Self::Low => "the mean is highly representative of the data",
            Self::Moderate => "the mean is acceptably representative; keep the spread in mind",
            Self::High => "the mean is not very representative; the data are widely spread",
        }
    }
}
