//! Descriptive statistics for small numeric samples.
//!
//! This crate turns free-form numeric text into a sample and summarizes it:
//!
//! - **Samples**: Tokenize and parse raw input, dropping anything non-numeric
//! - **Summary measures**: Mean, population variance, standard deviation, CV and Sturges classes
//! - **Percentiles**: Linear-interpolation percentiles of sorted data
//! - **Quartiles**: Q1/Q2/Q3, Tukey fences, outlier classes and whiskers
//! - **Frequency tables**: Grouped and ungrouped frequency distributions
//! - **Threshold analysis**: Share of measurements above a safe limit and its risk tier
//!
//! # Modules
//!
//! - [`sample`]: Input parsing and the [`Sample`](sample::Sample) type
//! - [`descriptive`]: Location and dispersion measures
//! - [`percentiles`]: Percentile computation
//! - [`quartiles`]: Quartiles and outlier classification
//! - [`frequency`]: Frequency distributions
//! - [`threshold`]: Threshold and risk analysis
//! - [`analysis`]: Complete analysis pipelines combining the above
//!
//! # Examples
//!
//! ## Analyzing raw input
//!
//! ```
//! use statlab_stats::analysis::Analysis;
//!
//! let analysis = Analysis::from_input("1, 2, 3, 4, 100").unwrap();
//! assert_eq!(analysis.basic.n, 5);
//! assert_eq!(analysis.quartiles.q3, 4.0);
//! assert_eq!(analysis.quartiles.extreme_outliers, [100.0]);
//! ```
//!
//! ## Computing a percentile
//!
//! ```
//! use statlab_stats::percentiles::percentile;
//!
//! let values = [10.0, 20.0, 30.0, 40.0];
//! assert_eq!(percentile(&values, 0.5), 25.0);
//! ```
//!
//! ## Checking a safe threshold
//!
//! ```
//! use statlab_stats::{sample::Sample, threshold::{RiskLevel, ThresholdAnalysis}};
//!
//! let depths = Sample::parse("3 4 12").unwrap();
//! let analysis = ThresholdAnalysis::new(&depths, 10.0);
//! assert_eq!(analysis.risk, RiskLevel::High);
//! ```

pub mod analysis;
pub mod descriptive;
pub mod frequency;
pub mod percentiles;
pub mod quartiles;
pub mod sample;
pub mod threshold;
