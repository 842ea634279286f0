use std::io::{self, Write};

use clap::Args;
use serde::Serialize;
use statlab_stats::{
    analysis::Analysis,
    descriptive::BasicStats,
    frequency::{FrequencyDistribution, ValueFrequency},
    quartiles::Quartiles,
};

use crate::{
    input::SampleInputArg,
    output::OutputArg,
    table::{self, write_field, write_section, write_separator, write_title},
};

#[derive(Debug, Clone, Args)]
pub(crate) struct AnalyzeArg {
    #[clap(flatten)]
    input: SampleInputArg,
    #[clap(flatten)]
    output: OutputArg,
}

#[derive(Debug, Serialize)]
struct AnalyzeReport<'a> {
    #[serde(flatten)]
    analysis: &'a Analysis,
    value_frequencies: Vec<ValueFrequency>,
}

pub(crate) fn run(arg: &AnalyzeArg) -> anyhow::Result<()> {
    let analysis = Analysis::from_sample(arg.input.read_sample()?);
    let report = AnalyzeReport {
        analysis: &analysis,
        value_frequencies: analysis.value_frequencies(),
    };
    arg.output.emit(&report, |w| write_report(w, &report))
}

fn write_report<W>(w: &mut W, report: &AnalyzeReport<'_>) -> io::Result<()>
where
    W: Write,
{
    let analysis = report.analysis;
    write_title(w, "Descriptive Statistics")?;
    write_summary(w, &analysis.basic)?;
    write_quartiles(w, &analysis.quartiles)?;
    write_frequency_table(w, &analysis.frequency)?;
    write_value_table(w, &report.value_frequencies)
}

fn write_summary<W>(w: &mut W, stats: &BasicStats) -> io::Result<()>
where
    W: Write,
{
    write_section(w, "Summary")?;
    write_field(w, "Values (n)", &stats.n.to_string())?;
    write_field(w, "Minimum", &table::summary(stats.min))?;
    write_field(w, "Maximum", &table::summary(stats.max))?;
    write_field(w, "Range", &table::summary(stats.range))?;
    write_field(w, "Classes (k)", &stats.class_count.to_string())?;
    write_field(w, "Class width", &table::summary(stats.class_width))?;
    write_field(w, "Mean", &table::summary(stats.mean))?;
    write_field(w, "Variance", &table::summary(stats.variance))?;
    write_field(w, "Standard deviation", &table::summary(stats.std_dev))?;
    write_field(
        w,
        "Coefficient of variation",
        &table::coefficient_of_variation(stats.coefficient_of_variation),
    )?;
    writeln!(w, "  {}", table::dispersion(stats.dispersion_level()))
}

fn write_quartiles<W>(w: &mut W, quartiles: &Quartiles) -> io::Result<()>
where
    W: Write,
{
    let fences = &quartiles.fences;
    write_section(w, "Quartiles")?;
    write_field(w, "Q1", &table::detail(quartiles.q1))?;
    write_field(w, "Q2 (median)", &table::detail(quartiles.q2))?;
    write_field(w, "Q3", &table::detail(quartiles.q3))?;
    write_field(w, "IQR", &table::detail(quartiles.iqr))?;
    write_field(w, "Inner lower fence", &table::detail(fences.inner_lower))?;
    write_field(w, "Inner upper fence", &table::detail(fences.inner_upper))?;
    write_field(w, "Outer lower fence", &table::detail(fences.outer_lower))?;
    write_field(w, "Outer upper fence", &table::detail(fences.outer_upper))?;
    writeln!(
        w,
        "  Moderate outliers: {}",
        table::value_list(&quartiles.moderate_outliers)
    )?;
    writeln!(
        w,
        "  Extreme outliers:  {}",
        table::value_list(&quartiles.extreme_outliers)
    )
}

fn write_frequency_table<W>(w: &mut W, frequency: &FrequencyDistribution) -> io::Result<()>
where
    W: Write,
{
    write_section(w, "Grouped frequency distribution")?;
    writeln!(
        w,
        "  {:<22} {:>10} {:>6} {:>8} {:>6} {:>8} {:>9}",
        "Interval", "Midpoint", "f", "fr", "F", "Fr", "Degrees"
    )?;
    write_separator(w, 75)?;
    for class in &frequency.classes {
        writeln!(
            w,
            "  {:<22} {:>10} {:>6} {:>8} {:>6} {:>8} {:>9}",
            table::interval(class),
            table::summary(class.midpoint),
            class.frequency,
            table::detail(class.relative_frequency),
            class.cumulative_frequency,
            table::detail(class.cumulative_relative_frequency),
            table::summary(class.sector_degrees()),
        )?;
    }
    write_separator(w, 75)?;
    writeln!(w, "  {:<22} {:>10} {:>6}", "Total", "", frequency.total_frequency())
}

fn write_value_table<W>(w: &mut W, rows: &[ValueFrequency]) -> io::Result<()>
where
    W: Write,
{
    write_section(w, "Ungrouped frequency distribution")?;
    writeln!(
        w,
        "  {:>12} {:>6} {:>8} {:>6} {:>8}",
        "Value", "f", "fr", "F", "Fr"
    )?;
    write_separator(w, 44)?;
    for row in rows {
        writeln!(
            w,
            "  {:>12} {:>6} {:>8} {:>6} {:>8}",
            table::summary(row.value),
            row.frequency,
            table::detail(row.relative_frequency),
            row.cumulative_frequency,
            table::detail(row.cumulative_relative_frequency),
        )?;
    }
    Ok(())
}
