//! Text formatting shared by the report commands.
//!
//! Summary measures are shown with 2 decimals; quartiles, fences and relative
//! frequencies with 4.

use std::io::{self, Write};

use statlab_stats::{descriptive::DispersionLevel, frequency::FrequencyClass};

pub(crate) const SUMMARY_DECIMALS: usize = 2;
pub(crate) const DETAIL_DECIMALS: usize = 4;

/// Writes a title underlined with `=`.
pub(crate) fn write_title<W>(w: &mut W, title: &str) -> io::Result<()>
where
    W: Write,
{
    writeln!(w, "{title}")?;
    writeln!(w, "{}", "=".repeat(title.chars().count()))
}

/// Writes a blank line and a section heading.
pub(crate) fn write_section<W>(w: &mut W, heading: &str) -> io::Result<()>
where
    W: Write,
{
    writeln!(w)?;
    writeln!(w, "{heading}:")
}

/// Writes a `label: value` line with the label padded to a fixed width.
pub(crate) fn write_field<W>(w: &mut W, label: &str, value: &str) -> io::Result<()>
where
    W: Write,
{
    writeln!(w, "  {label:<24} {value:>14}")
}

pub(crate) fn write_separator<W>(w: &mut W, width: usize) -> io::Result<()>
where
    W: Write,
{
    writeln!(w, "  {}", "-".repeat(width))
}

pub(crate) fn summary(value: f64) -> String {
    format!("{value:.SUMMARY_DECIMALS$}")
}

pub(crate) fn detail(value: f64) -> String {
    format!("{value:.DETAIL_DECIMALS$}")
}

pub(crate) fn percent(value: f64) -> String {
    format!("{value:.SUMMARY_DECIMALS$}%")
}

/// Formats the coefficient of variation, or `N/A` when the mean is zero.
pub(crate) fn coefficient_of_variation(cv: Option<f64>) -> String {
    cv.map_or_else(|| "N/A".to_string(), percent)
}

/// Describes a dispersion level, or explains why there is none.
pub(crate) fn dispersion(level: Option<DispersionLevel>) -> String {
    match level {
        Some(level) => format!("{level}: {}", level.description()),
        None => "undefined (mean is zero)".to_string(),
    }
}

/// Formats a class as `[a, b)`, or `[a, b]` for the closed last class.
pub(crate) fn interval(class: &FrequencyClass) -> String {
    let close = if class.is_last_class { ']' } else { ')' };
    format!(
        "[{}, {}{close}",
        summary(class.lower_bound),
        summary(class.upper_bound)
    )
}

/// Formats a list of values, or `none` if it is empty.
pub(crate) fn value_list(values: &[f64]) -> String {
    if values.is_empty() {
        return "none".to_string();
    }
    values
        .iter()
        .map(|v| summary(*v))
        .collect::<Vec<_>>()
        .join(", ")
}
