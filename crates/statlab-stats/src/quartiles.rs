//! Quartiles, Tukey fences and outlier classification.
//!
//! One engine serves both the standard analysis (moderate/extreme outliers)
//! and the box-plot view (normal values and whisker endpoints).

use std::fmt;

use serde::Serialize;

use crate::{percentiles::percentile, sample::Sample};

/// Multiple of the IQR between a quartile and its inner fence.
pub const INNER_FENCE_FACTOR: f64 = 1.5;
/// Multiple of the IQR between a quartile and its outer fence.
pub const OUTER_FENCE_FACTOR: f64 = 3.0;

/// Tukey's inner and outer fences around the quartile box.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Fences {
    pub inner_lower: f64,
    pub inner_upper: f64,
    pub outer_lower: f64,
    pub outer_upper: f64,
}

impl Fences {
    /// Builds the fences for the given first and third quartiles.
    ///
    /// # Examples
    ///
    /// ```
    /// use statlab_stats::quartiles::Fences;
    ///
    /// let fences = Fences::new(2.0, 4.0);
    /// assert_eq!(fences.inner_lower, -1.0);
    /// assert_eq!(fences.inner_upper, 7.0);
    /// assert_eq!(fences.outer_lower, -4.0);
    /// assert_eq!(fences.outer_upper, 10.0);
    /// ```
    #[must_use]
    pub fn new(q1: f64, q3: f64) -> Self {
        let iqr = q3 - q1;
        Self {
            inner_lower: q1 - INNER_FENCE_FACTOR * iqr,
            inner_upper: q3 + INNER_FENCE_FACTOR * iqr,
            outer_lower: q1 - OUTER_FENCE_FACTOR * iqr,
            outer_upper: q3 + OUTER_FENCE_FACTOR * iqr,
        }
    }

    /// Classifies a value against the fences.
    ///
    /// Values on an inner fence are normal; values on an outer fence are
    /// moderate outliers.
    #[must_use]
    pub fn classify(&self, value: f64) -> OutlierClass {
        if value < self.outer_lower || value > self.outer_upper {
            OutlierClass::Extreme
        } else if value < self.inner_lower || value > self.inner_upper {
            OutlierClass::Moderate
        } else {
            OutlierClass::Normal
        }
    }
}

/// Where a value falls relative to the fences.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum OutlierClass {
    /// Within the inner fences.
    Normal,
    /// Between an inner and an outer fence.
    Moderate,
    /// Beyond an outer fence.
    Extreme,
}

impl fmt::Display for OutlierClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            OutlierClass::Normal => "normal",
            OutlierClass::Moderate => "moderate outlier",
            OutlierClass::Extreme => "extreme outlier",
        };
        fmt::Display::fmt(s, f)
    }
}

/// Quartiles of a sample together with its outlier analysis.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Quartiles {
    pub q1: f64,
    pub q2: f64,
    pub q3: f64,
    /// Interquartile range, `q3 - q1`.
    pub iqr: f64,
    #[serde(flatten)]
    pub fences: Fences,
    /// Smallest value within the inner fences, or `q1` if there is none.
    pub whisker_lower: f64,
    /// Largest value within the inner fences, or `q3` if there is none.
    pub whisker_upper: f64,
    /// Values within the inner fences, ascending.
    pub normal: Vec<f64>,
    /// Values between the inner and outer fences, ascending.
    pub moderate_outliers: Vec<f64>,
    /// Values beyond the outer fences, ascending.
    pub extreme_outliers: Vec<f64>,
}

impl Quartiles {
    /// Computes quartiles and outliers of a sample.
    ///
    /// # Examples
    ///
    /// ```
    /// # use statlab_stats::{quartiles::Quartiles, sample::Sample};
    /// let sample = Sample::from_values([1.0, 2.0, 3.0, 4.0, 100.0]).unwrap();
    /// let quartiles = Quartiles::from_sample(&sample);
    /// assert_eq!((quartiles.q1, quartiles.q2, quartiles.q3), (2.0, 3.0, 4.0));
    /// assert_eq!(quartiles.extreme_outliers, [100.0]);
    /// assert_eq!(quartiles.whisker_upper, 4.0);
    /// ```
    #[must_use]
    pub fn from_sample(sample: &Sample) -> Self {
        let sorted = sample.sorted();
        let q1 = percentile(sorted, 0.25);
        let q2 = percentile(sorted, 0.5);
        let q3 = percentile(sorted, 0.75);
        let fences = Fences::new(q1, q3);

        let mut normal = vec![];
        let mut moderate_outliers = vec![];
        let mut extreme_outliers = vec![];
        for &value in sorted {
            match fences.classify(value) {
                OutlierClass::Normal => normal.push(value),
                OutlierClass::Moderate => moderate_outliers.push(value),
                OutlierClass::Extreme => extreme_outliers.push(value),
            }
        }

        // `sorted` is ascending, so the normal values are too
        let whisker_lower = normal.first().copied().unwrap_or(q1);
        let whisker_upper = normal.last().copied().unwrap_or(q3);

        Self {
            q1,
            q2,
            q3,
            iqr: q3 - q1,
            fences,
            whisker_lower,
            whisker_upper,
            normal,
            moderate_outliers,
            extreme_outliers,
        }
    }

    /// Computes quartiles from pre-sorted values.
    ///
    /// Returns `None` if `sorted_values` holds no finite value.
    #[must_use]
    pub fn from_sorted(sorted_values: &[f64]) -> Option<Self> {
        Sample::from_values(sorted_values.iter().copied()).map(|sample| Self::from_sample(&sample))
    }

    /// Counts of normal, moderate and extreme values.
    #[must_use]
    pub fn outlier_summary(&self) -> OutlierSummary {
        OutlierSummary {
            normal: self.normal.len(),
            moderate: self.moderate_outliers.len(),
            extreme: self.extreme_outliers.len(),
        }
    }
}

/// How many values fall into each outlier class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct OutlierSummary {
    pub normal: usize,
    pub moderate: usize,
    pub extreme: usize,
}

impl OutlierSummary {
    #[must_use]
    pub fn total(&self) -> usize {
        self.normal + self.moderate + self.extreme
    }

    /// Number of moderate and extreme outliers together.
    #[must_use]
    pub fn outliers(&self) -> usize {
        self.moderate + self.extreme
    }

    #[must_use]
    pub fn count(&self, class: OutlierClass) -> usize {
        match class {
            OutlierClass::Normal => self.normal,
            OutlierClass::Moderate => self.moderate,
            OutlierClass::Extreme => self.extreme,
        }
    }

    /// Share of the sample in the given class, in percent.
    #[expect(clippy::cast_precision_loss)]
    #[must_use]
    pub fn percentage(&self, class: OutlierClass) -> f64 {
        let total = self.total();
        if total == 0 {
            0.0
        } else {
            self.count(class) as f64 / total as f64 * 100.0
        }
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;
    use proptest::prelude::*;

    use super::*;

    fn quartiles_of(values: &[f64]) -> Quartiles {
        Quartiles::from_sample(&Sample::from_values(values.iter().copied()).unwrap())
    }

    #[test]
    fn test_one_to_five() {
        let q = quartiles_of(&[1.0, 2.0, 3.0, 4.0, 5.0]);
        assert_eq!(q.q1, 2.0);
        assert_eq!(q.q2, 3.0);
        assert_eq!(q.q3, 4.0);
        assert_eq!(q.iqr, 2.0);
        assert!(q.moderate_outliers.is_empty());
        assert!(q.extreme_outliers.is_empty());
        assert_eq!(q.whisker_lower, 1.0);
        assert_eq!(q.whisker_upper, 5.0);
    }

    #[test]
    fn test_constant_sample() {
        let q = quartiles_of(&[10.0, 10.0, 10.0, 10.0]);
        assert_eq!((q.q1, q.q2, q.q3), (10.0, 10.0, 10.0));
        assert_eq!(q.iqr, 0.0);
        assert_eq!(q.outlier_summary().outliers(), 0);
        assert_eq!(q.normal.len(), 4);
    }

    #[test]
    fn test_extreme_outlier() {
        let q = quartiles_of(&[1.0, 2.0, 3.0, 4.0, 100.0]);
        assert_eq!(q.q1, 2.0);
        assert_eq!(q.q3, 4.0);
        assert_eq!(q.fences.outer_upper, 10.0);
        assert_eq!(q.extreme_outliers, [100.0]);
        assert!(q.moderate_outliers.is_empty());
        assert_eq!(q.normal, [1.0, 2.0, 3.0, 4.0]);
    }

    #[test]
    fn test_moderate_outlier_and_boundaries() {
        // Q1 = 2, Q3 = 4: inner fences [-1, 7], outer fences [-4, 10]
        let fences = Fences::new(2.0, 4.0);
        assert_eq!(fences.classify(7.0), OutlierClass::Normal);
        assert_eq!(fences.classify(7.5), OutlierClass::Moderate);
        assert_eq!(fences.classify(10.0), OutlierClass::Moderate);
        assert_eq!(fences.classify(10.5), OutlierClass::Extreme);
        assert_eq!(fences.classify(-1.0), OutlierClass::Normal);
        assert_eq!(fences.classify(-4.0), OutlierClass::Moderate);
        assert_eq!(fences.classify(-4.5), OutlierClass::Extreme);
    }

    #[test]
    fn test_both_tails() {
        let q = quartiles_of(&[-50.0, -8.0, 1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 16.0, 60.0]);
        // rank 2.5 and 7.5 in 11 values; inner fences [-6, 14], outer [-13.5, 21.5]
        assert_relative_eq!(q.q1, 1.5);
        assert_relative_eq!(q.q3, 6.5);
        assert_eq!(q.moderate_outliers, [-8.0, 16.0]);
        assert_eq!(q.extreme_outliers, [-50.0, 60.0]);
        assert_eq!(q.whisker_lower, 1.0);
        assert_eq!(q.whisker_upper, 7.0);
    }

    #[test]
    fn test_single_value() {
        let q = quartiles_of(&[3.0]);
        assert_eq!((q.q1, q.q2, q.q3, q.iqr), (3.0, 3.0, 3.0, 0.0));
        assert_eq!(q.normal, [3.0]);
    }

    #[test]
    fn test_extreme_span_median() {
        let q = quartiles_of(&[-1e308, 1e308]);
        assert_eq!(q.q2, 0.0);
        assert!(q.q1 < q.q2 && q.q2 < q.q3);
        assert_eq!(q.outlier_summary().normal, 2);
    }

    #[test]
    fn test_outlier_summary_percentages() {
        let q = quartiles_of(&[1.0, 2.0, 3.0, 4.0, 100.0]);
        let summary = q.outlier_summary();
        assert_eq!(summary.total(), 5);
        assert_eq!(summary.count(OutlierClass::Extreme), 1);
        assert_relative_eq!(summary.percentage(OutlierClass::Normal), 80.0);
        assert_relative_eq!(summary.percentage(OutlierClass::Extreme), 20.0);
        assert_relative_eq!(summary.percentage(OutlierClass::Moderate), 0.0);
    }

    #[test]
    fn test_from_sorted_rejects_empty() {
        assert!(Quartiles::from_sorted(&[]).is_none());
        assert_eq!(Quartiles::from_sorted(&[1.0, 2.0]).unwrap().q2, 1.5);
    }

    proptest! {
        #[test]
        fn quartiles_are_ordered(data in proptest::collection::vec(-1e9_f64..1e9, 1..=200)) {
            let q = quartiles_of(&data);
            prop_assert!(q.q1 <= q.q2 && q.q2 <= q.q3);
            prop_assert!(q.iqr >= 0.0);
        }

        #[test]
        fn every_value_is_classified_once(data in proptest::collection::vec(-1e6_f64..1e6, 1..=200)) {
            let q = quartiles_of(&data);
            prop_assert_eq!(q.outlier_summary().total(), data.len());
            for value in &q.moderate_outliers {
                prop_assert!(!q.extreme_outliers.contains(value));
                prop_assert!(!q.normal.contains(value));
            }
            for value in &q.extreme_outliers {
                prop_assert!(!q.normal.contains(value));
            }
        }

        #[test]
        fn whiskers_lie_within_inner_fences(data in proptest::collection::vec(-1e6_f64..1e6, 1..=200)) {
            let q = quartiles_of(&data);
            prop_assert!(q.fences.inner_lower <= q.whisker_lower);
            prop_assert!(q.whisker_upper <= q.fences.inner_upper);
        }
    }
}
