//! Safe-threshold analysis of a measurement series.
//!
//! Given a series such as river depths and a safe height, this summarizes the
//! series and estimates how risky it is by the share of measurements above
//! the threshold.

use std::fmt;

use serde::Serialize;

use crate::{descriptive::BasicStats, sample::Sample};

/// Risk tier derived from the share of values above a threshold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskLevel {
    /// No value exceeds the threshold.
    Low,
    /// Some values exceed it, but no more than 20 %.
    Moderate,
    /// More than 20 % of the values exceed it.
    High,
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self.to_str(), f)
    }
}

impl RiskLevel {
    /// Percentage of exceeding values above which the risk is high.
    pub const HIGH_RISK_PERCENTAGE: f64 = 20.0;

    /// Classifies the percentage of values above the threshold.
    ///
    /// # Examples
    ///
    /// ```
    /// use statlab_stats::threshold::RiskLevel;
    ///
    /// assert_eq!(RiskLevel::from_exceeding_percentage(0.0), RiskLevel::Low);
    /// assert_eq!(RiskLevel::from_exceeding_percentage(20.0), RiskLevel::Moderate);
    /// assert_eq!(RiskLevel::from_exceeding_percentage(33.3), RiskLevel::High);
    /// ```
    #[must_use]
    pub fn from_exceeding_percentage(percentage: f64) -> Self {
        if percentage > Self::HIGH_RISK_PERCENTAGE {
            Self::High
        } else if percentage > 0.0 {
            Self::Moderate
        } else {
            Self::Low
        }
    }

    #[must_use]
    pub fn to_str(self) -> &'static str {
        match self {
            Self::Low => "low risk",
            Self::Moderate => "moderate risk",
            Self::High => "high risk",
        }
    }

    /// Recommendation shown alongside the tier.
    #[must_use]
    pub fn advice(self) -> &'static str {
        match self {
            Self::Low => "all measured points are within the safe limit",
            Self::Moderate => "some points exceed the safe limit; proceed with extreme caution",
            Self::High => "a significant share of points exceeds the safe limit; do not cross",
        }
    }
}

/// Summary of a measurement series against a safe threshold.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ThresholdAnalysis {
    /// Summary measures of the series.
    pub stats: BasicStats,
    /// The safe threshold.
    pub threshold: f64,
    /// Number of values strictly above the threshold.
    pub exceeding: usize,
    /// `exceeding / n * 100`.
    pub exceeding_percentage: f64,
    pub risk: RiskLevel,
}

impl ThresholdAnalysis {
    /// Analyzes `sample` against `threshold`.
    ///
    /// A `NaN` threshold is exceeded by no value.
    ///
    /// # Examples
    ///
    /// ```
    /// # use statlab_stats::{sample::Sample, threshold::{RiskLevel, ThresholdAnalysis}};
    /// let depths = Sample::from_values([3.0, 4.0, 12.0]).unwrap();
    /// let analysis = ThresholdAnalysis::new(&depths, 10.0);
    /// assert_eq!(analysis.exceeding, 1);
    /// assert_eq!(analysis.risk, RiskLevel::High);
    /// ```
    #[expect(clippy::cast_precision_loss)]
    #[must_use]
    pub fn new(sample: &Sample, threshold: f64) -> Self {
        let stats = BasicStats::from_sample(sample);
        let exceeding = sample.values().iter().filter(|v| **v > threshold).count();
        let exceeding_percentage = exceeding as f64 / sample.n() as f64 * 100.0;
        tracing::debug!(
            threshold,
            exceeding,
            exceeding_percentage,
            "threshold analysis computed"
        );

        Self {
            stats,
            threshold,
            exceeding,
            exceeding_percentage,
            risk: RiskLevel::from_exceeding_percentage(exceeding_percentage),
        }
    }

    /// Whether a single measurement is above the threshold.
    #[must_use]
    pub fn exceeds(&self, value: f64) -> bool {
        value > self.threshold
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    fn analyze(values: &[f64], threshold: f64) -> ThresholdAnalysis {
        ThresholdAnalysis::new(
            &Sample::from_values(values.iter().copied()).unwrap(),
            threshold,
        )
    }

    #[test]
    fn test_one_third_exceeding_is_high_risk() {
        let analysis = analyze(&[3.0, 4.0, 12.0], 10.0);
        assert_eq!(analysis.exceeding, 1);
        assert_relative_eq!(analysis.exceeding_percentage, 100.0 / 3.0);
        assert_eq!(analysis.risk, RiskLevel::High);
        assert_relative_eq!(analysis.stats.mean, 19.0 / 3.0);
        assert_eq!(analysis.stats.range, 9.0);
    }

    #[test]
    fn test_value_on_threshold_does_not_exceed() {
        let analysis = analyze(&[1.0, 2.0, 10.0], 10.0);
        assert_eq!(analysis.exceeding, 0);
        assert_eq!(analysis.risk, RiskLevel::Low);
        assert!(!analysis.exceeds(10.0));
        assert!(analysis.exceeds(10.5));
    }

    #[test]
    fn test_moderate_risk() {
        let values = (1..=10).map(f64::from).collect::<Vec<_>>();
        let analysis = analyze(&values, 8.5);
        assert_eq!(analysis.exceeding, 2);
        assert_relative_eq!(analysis.exceeding_percentage, 20.0);
        assert_eq!(analysis.risk, RiskLevel::Moderate);
    }

    #[test]
    fn test_nan_threshold_counts_nothing() {
        let analysis = analyze(&[1.0, 2.0], f64::NAN);
        assert_eq!(analysis.exceeding, 0);
        assert_eq!(analysis.risk, RiskLevel::Low);
    }

    #[test]
    fn test_risk_levels_are_ordered() {
        assert!(RiskLevel::Low < RiskLevel::Moderate);
        assert!(RiskLevel::Moderate < RiskLevel::High);
    }
}
