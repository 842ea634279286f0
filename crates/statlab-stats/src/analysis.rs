use serde::Serialize;

use crate::{
    descriptive::BasicStats,
    frequency::{FrequencyDistribution, ValueFrequency, value_frequencies},
    quartiles::Quartiles,
    sample::{Sample, SampleError},
};

/// The full descriptive analysis of a sample.
///
/// Each run produces a fresh value; nothing is shared with earlier runs.
///
/// # Examples
///
/// ```
/// use statlab_stats::analysis::Analysis;
///
/// let analysis = Analysis::from_input("1, 2, 3, 4, 5").unwrap();
/// assert_eq!(analysis.basic.mean, 3.0);
/// assert_eq!(analysis.quartiles.iqr, 2.0);
/// assert_eq!(analysis.frequency.total_frequency(), 5);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Analysis {
    /// The parsed sample.
    pub sample: Sample,
    /// Location and dispersion measures.
    pub basic: BasicStats,
    /// Quartiles, fences and outliers.
    pub quartiles: Quartiles,
    /// Grouped frequency distribution.
    pub frequency: FrequencyDistribution,
}

impl Analysis {
    /// Parses `input` and analyzes the resulting sample.
    ///
    /// # Errors
    ///
    /// Returns an error if the input is blank or contains no valid number.
    pub fn from_input(input: &str) -> Result<Self, SampleError> {
        Sample::parse(input).map(Self::from_sample)
    }

    #[must_use]
    pub fn from_sample(sample: Sample) -> Self {
        let basic = BasicStats::from_sample(&sample);
        let quartiles = Quartiles::from_sample(&sample);
        let frequency = FrequencyDistribution::new(&sample, &basic);
        tracing::debug!(
            n = basic.n,
            classes = frequency.classes.len(),
            outliers = quartiles.outlier_summary().outliers(),
            "sample analyzed"
        );
        Self {
            sample,
            basic,
            quartiles,
            frequency,
        }
    }

    /// Ungrouped frequency table, one row per distinct value.
    #[must_use]
    pub fn value_frequencies(&self) -> Vec<ValueFrequency> {
        value_frequencies(self.sample.sorted())
    }
}

/// Quartile and outlier analysis for drawing a box plot.
///
/// Runs independently of [`Analysis`], so the two can hold different samples.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BoxplotAnalysis {
    pub sample: Sample,
    pub quartiles: Quartiles,
}

impl BoxplotAnalysis {
    /// Parses `input` and computes its box plot.
    ///
    /// # Errors
    ///
    /// Returns an error if the input is blank or contains no valid number.
    pub fn from_input(input: &str) -> Result<Self, SampleError> {
        Sample::parse(input).map(Self::from_sample)
    }

    #[must_use]
    pub fn from_sample(sample: Sample) -> Self {
        let quartiles = Quartiles::from_sample(&sample);
        Self { sample, quartiles }
    }
}
