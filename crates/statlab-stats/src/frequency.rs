use serde::Serialize;

use crate::{descriptive::BasicStats, sample::Sample};

/// A grouped frequency distribution with equal-width classes.
///
/// Classes start at the sample minimum and are `class_width` wide. Every
/// class is half-open `[lower, upper)` except the last, which is closed so
/// that the maximum is always counted.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FrequencyDistribution {
    /// The classes in ascending order.
    pub classes: Vec<FrequencyClass>,
}

/// A single class of a grouped frequency distribution.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FrequencyClass {
    /// Inclusive lower bound.
    pub lower_bound: f64,
    /// Upper bound; exclusive unless this is the last class.
    pub upper_bound: f64,
    pub is_last_class: bool,
    /// Class mark, the middle of the bounds.
    pub midpoint: f64,
    /// Absolute frequency `f`.
    pub frequency: usize,
    /// Relative frequency `f / n`.
    pub relative_frequency: f64,
    /// Cumulative frequency `F` up to and including this class.
    pub cumulative_frequency: usize,
    /// Cumulative relative frequency `F / n`.
    pub cumulative_relative_frequency: f64,
}

impl FrequencyClass {
    /// Whether `value` belongs to this class.
    #[must_use]
    pub fn contains(&self, value: f64) -> bool {
        if self.is_last_class {
            self.lower_bound <= value && value <= self.upper_bound
        } else {
            self.lower_bound <= value && value < self.upper_bound
        }
    }

    /// Angle of this class's sector in a pie chart, in degrees.
    #[must_use]
    pub fn sector_degrees(&self) -> f64 {
        360.0 * self.relative_frequency
    }
}

impl FrequencyDistribution {
    /// Builds the distribution of `sample` using the class count and width in `stats`.
    ///
    /// If the class width is zero (all values equal, or a width that rounds
    /// to zero) or not finite (a range too wide for `f64`), a single class
    /// `[min, max]` holds every value.
    ///
    /// # Examples
    ///
    /// ```
    /// # use statlab_stats::{descriptive::BasicStats, frequency::FrequencyDistribution, sample::Sample};
    /// let sample = Sample::from_values((1..=10).map(f64::from)).unwrap();
    /// let stats = BasicStats::from_sample(&sample);
    /// let dist = FrequencyDistribution::new(&sample, &stats);
    ///
    /// assert_eq!(dist.classes.len(), 5);
    /// assert_eq!(dist.total_frequency(), 10);
    /// let last = dist.classes.last().unwrap();
    /// assert!(last.contains(10.0));
    /// assert_eq!(last.cumulative_relative_frequency, 1.0);
    /// ```
    #[expect(clippy::cast_precision_loss)]
    #[must_use]
    pub fn new(sample: &Sample, stats: &BasicStats) -> Self {
        let sorted = sample.sorted();
        let min = sample.min();
        let max = sample.max();
        let width = stats.class_width;

        let bounds = if width > 0.0 && width.is_finite() {
            let k = stats.class_count;
            (0..k)
                .map(|i| {
                    // Bounds are recomputed from `min` to avoid accumulating rounding errors
                    let lower = min + i as f64 * width;
                    let mut upper = min + (i + 1) as f64 * width;
                    if i == k - 1 {
                        // A width rounded to hundredths may stop short of the maximum
                        upper = upper.max(max);
                    }
                    (lower, upper)
                })
                .collect::<Vec<_>>()
        } else {
            vec![(min, max)]
        };

        let n = sorted.len() as f64;
        let last = bounds.len() - 1;
        let mut cumulative_frequency = 0;
        let classes = bounds
            .into_iter()
            .enumerate()
            .map(|(i, (lower_bound, upper_bound))| {
                let is_last_class = i == last;
                let start = sorted.partition_point(|v| *v < lower_bound);
                let end = if is_last_class {
                    sorted.partition_point(|v| *v <= upper_bound)
                } else {
                    sorted.partition_point(|v| *v < upper_bound)
                };
                let frequency = end.saturating_sub(start);
                cumulative_frequency += frequency;
                FrequencyClass {
                    lower_bound,
                    upper_bound,
                    is_last_class,
                    midpoint: f64::midpoint(lower_bound, upper_bound),
                    frequency,
                    relative_frequency: frequency as f64 / n,
                    cumulative_frequency,
                    cumulative_relative_frequency: cumulative_frequency as f64 / n,
                }
            })
            .collect();

        Self { classes }
    }

    /// Sum of all class frequencies; equals the sample size.
    #[must_use]
    pub fn total_frequency(&self) -> usize {
        self.classes.iter().map(|class| class.frequency).sum()
    }

    /// Index of the class containing `value`, if any.
    #[must_use]
    pub fn class_index_of(&self, value: f64) -> Option<usize> {
        self.classes.iter().position(|class| class.contains(value))
    }
}

/// One row of an ungrouped frequency table: a distinct value and its counts.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ValueFrequency {
    pub value: f64,
    pub frequency: usize,
    pub relative_frequency: f64,
    pub cumulative_frequency: usize,
    pub cumulative_relative_frequency: f64,
}

/// Builds the ungrouped frequency table of a sorted sample.
///
/// One row is produced per distinct value, in ascending order.
///
/// # Examples
///
/// ```
/// use statlab_stats::frequency::value_frequencies;
///
/// let rows = value_frequencies(&[1.0, 1.0, 2.0, 5.0]);
/// assert_eq!(rows.len(), 3);
/// assert_eq!(rows[0].frequency, 2);
/// assert_eq!(rows[0].relative_frequency, 0.5);
/// assert_eq!(rows[2].cumulative_frequency, 4);
/// ```
#[expect(clippy::cast_precision_loss)]
#[must_use]
pub fn value_frequencies(sorted_values: &[f64]) -> Vec<ValueFrequency> {
    debug_assert!(
        sorted_values.is_sorted_by(|a, b| a <= b),
        "values must be sorted in ascending order"
    );

    let n = sorted_values.len() as f64;
    let mut cumulative_frequency = 0;
    sorted_values
        .chunk_by(|a, b| a == b)
        .map(|run| {
            let frequency = run.len();
            cumulative_frequency += frequency;
            ValueFrequency {
                value: run[0],
                frequency,
                relative_frequency: frequency as f64 / n,
                cumulative_frequency,
                cumulative_relative_frequency: cumulative_frequency as f64 / n,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;
    use proptest::prelude::*;

    use super::*;

    fn distribution_of(values: &[f64]) -> FrequencyDistribution {
        let sample = Sample::from_values(values.iter().copied()).unwrap();
        let stats = BasicStats::from_sample(&sample);
        FrequencyDistribution::new(&sample, &stats)
    }

    #[test]
    fn test_one_to_ten() {
        let values = (1..=10).map(f64::from).collect::<Vec<_>>();
        let dist = distribution_of(&values);

        // k = 5, width = ceil(9 / 5) = 2
        let bounds = dist
            .classes
            .iter()
            .map(|c| (c.lower_bound, c.upper_bound))
            .collect::<Vec<_>>();
        assert_eq!(
            bounds,
            [(1.0, 3.0), (3.0, 5.0), (5.0, 7.0), (7.0, 9.0), (9.0, 11.0)]
        );
        let frequencies = dist.classes.iter().map(|c| c.frequency).collect::<Vec<_>>();
        assert_eq!(frequencies, [2, 2, 2, 2, 2]);
        assert!(dist.classes[4].is_last_class);
        assert!(dist.classes[4].contains(10.0));
        assert_eq!(dist.class_index_of(10.0), Some(4));
        assert_eq!(dist.classes[0].midpoint, 2.0);
    }

    #[test]
    fn test_maximum_on_last_upper_bound() {
        // k = 4, width = ceil(4 / 4) = 1, last class [4, 5]
        let dist = distribution_of(&[1.0, 2.0, 3.0, 4.0, 5.0]);
        assert_eq!(dist.classes.len(), 4);
        let last = dist.classes.last().unwrap();
        assert_eq!((last.lower_bound, last.upper_bound), (4.0, 5.0));
        assert_eq!(last.frequency, 2);
        assert_eq!(dist.total_frequency(), 5);
    }

    #[test]
    fn test_half_open_boundaries() {
        let dist = distribution_of(&[1.0, 2.0, 3.0, 4.0, 5.0]);
        // Class [1, 2) does not count 2
        assert_eq!(dist.classes[0].frequency, 1);
        assert!(!dist.classes[0].contains(2.0));
        assert!(dist.classes[1].contains(2.0));
    }

    #[test]
    fn test_constant_sample_is_single_class() {
        let dist = distribution_of(&[10.0, 10.0, 10.0, 10.0]);
        assert_eq!(dist.classes.len(), 1);
        let class = &dist.classes[0];
        assert_eq!((class.lower_bound, class.upper_bound), (10.0, 10.0));
        assert!(class.is_last_class);
        assert_eq!(class.frequency, 4);
        assert_eq!(class.relative_frequency, 1.0);
    }

    #[test]
    fn test_overflowing_range_is_single_class() {
        let dist = distribution_of(&[-1e308, 0.0, 1e308]);
        assert_eq!(dist.classes.len(), 1);
        let class = &dist.classes[0];
        assert_eq!((class.lower_bound, class.upper_bound), (-1e308, 1e308));
        assert_eq!(class.midpoint, 0.0);
        assert_eq!(class.frequency, 3);
    }

    #[test]
    fn test_rounded_width_still_covers_maximum() {
        // range 1, k = 3: width rounds to 0.33 and 3 * 0.33 < 1
        let dist = distribution_of(&[0.0, 0.5, 1.0]);
        assert_eq!(dist.classes.len(), 3);
        assert_eq!(dist.classes[2].upper_bound, 1.0);
        assert_eq!(dist.total_frequency(), 3);
    }

    #[test]
    fn test_cumulative_frequencies() {
        let dist = distribution_of(&[1.0, 1.0, 1.0, 2.0, 9.0, 10.0]);
        let mut running = 0;
        for class in &dist.classes {
            running += class.frequency;
            assert_eq!(class.cumulative_frequency, running);
        }
        assert_eq!(dist.classes.last().unwrap().cumulative_frequency, 6);
        assert_eq!(
            dist.classes.last().unwrap().cumulative_relative_frequency,
            1.0
        );
    }

    #[test]
    fn test_sector_degrees_sum_to_full_circle() {
        let dist = distribution_of(&[3.0, 7.0, 7.0, 8.0, 12.0, 15.0, 21.0]);
        let total = dist
            .classes
            .iter()
            .map(FrequencyClass::sector_degrees)
            .sum::<f64>();
        assert_relative_eq!(total, 360.0, epsilon = 1e-9);
    }

    #[test]
    fn test_value_frequencies() {
        let rows = value_frequencies(&[2.0, 2.0, 2.0, 3.5, 7.0, 7.0]);
        let values = rows.iter().map(|r| r.value).collect::<Vec<_>>();
        assert_eq!(values, [2.0, 3.5, 7.0]);
        let frequencies = rows.iter().map(|r| r.frequency).collect::<Vec<_>>();
        assert_eq!(frequencies, [3, 1, 2]);
        assert_relative_eq!(rows[0].relative_frequency, 0.5);
        assert_eq!(rows[1].cumulative_frequency, 4);
        assert_eq!(rows[2].cumulative_relative_frequency, 1.0);
    }

    #[test]
    fn test_value_frequencies_empty() {
        assert!(value_frequencies(&[]).is_empty());
    }

    fn any_sample() -> impl Strategy<Value = Vec<f64>> {
        prop_oneof![
            proptest::collection::vec(-1e6_f64..1e6, 1..=300),
            proptest::collection::vec((-1000_i32..1000).prop_map(f64::from), 1..=300),
            proptest::collection::vec((0_i32..500).prop_map(|v| f64::from(v) / 100.0), 1..=300),
        ]
    }

    proptest! {
        #[test]
        fn frequencies_sum_to_sample_size(data in any_sample()) {
            let dist = distribution_of(&data);
            prop_assert_eq!(dist.total_frequency(), data.len());
            prop_assert_eq!(dist.classes.last().unwrap().cumulative_frequency, data.len());
        }

        #[test]
        fn every_value_in_exactly_one_class(data in any_sample()) {
            let dist = distribution_of(&data);
            for value in &data {
                let hits = dist.classes.iter().filter(|c| c.contains(*value)).count();
                prop_assert_eq!(hits, 1, "value {} in {} classes", value, hits);
            }
        }

        #[test]
        fn recomputation_is_bit_identical(data in any_sample()) {
            prop_assert_eq!(distribution_of(&data), distribution_of(&data));
        }
    }
}
