use std::io::{self, Write};

use clap::Args;
use statlab_stats::{
    analysis::BoxplotAnalysis,
    quartiles::{INNER_FENCE_FACTOR, OUTER_FENCE_FACTOR, OutlierClass},
};

use crate::{
    input::SampleInputArg,
    output::OutputArg,
    table::{self, write_field, write_section, write_title},
};

#[derive(Debug, Clone, Args)]
pub(crate) struct BoxplotArg {
    #[clap(flatten)]
    input: SampleInputArg,
    #[clap(flatten)]
    output: OutputArg,
}

pub(crate) fn run(arg: &BoxplotArg) -> anyhow::Result<()> {
    let boxplot = BoxplotAnalysis::from_sample(arg.input.read_sample()?);
    arg.output.emit(&boxplot, |w| write_report(w, &boxplot))
}

fn write_report<W>(w: &mut W, boxplot: &BoxplotAnalysis) -> io::Result<()>
where
    W: Write,
{
    let quartiles = &boxplot.quartiles;
    let fences = &quartiles.fences;
    let summary = quartiles.outlier_summary();

    write_title(w, "Box Plot Analysis")?;

    write_section(w, "Quartiles")?;
    write_field(w, "Values (n)", &boxplot.sample.n().to_string())?;
    write_field(w, "Q1", &table::detail(quartiles.q1))?;
    write_field(w, "Q2 (median)", &table::detail(quartiles.q2))?;
    write_field(w, "Q3", &table::detail(quartiles.q3))?;
    write_field(w, "IQR", &table::detail(quartiles.iqr))?;
    write_field(
        w,
        &format!("{INNER_FENCE_FACTOR} x IQR"),
        &table::detail(INNER_FENCE_FACTOR * quartiles.iqr),
    )?;
    write_field(
        w,
        &format!("{OUTER_FENCE_FACTOR} x IQR"),
        &table::detail(OUTER_FENCE_FACTOR * quartiles.iqr),
    )?;

    write_section(w, "Fences")?;
    write_field(w, "Outer lower", &table::detail(fences.outer_lower))?;
    write_field(w, "Inner lower", &table::detail(fences.inner_lower))?;
    write_field(w, "Inner upper", &table::detail(fences.inner_upper))?;
    write_field(w, "Outer upper", &table::detail(fences.outer_upper))?;

    write_section(w, "Whiskers")?;
    write_field(w, "Lower", &table::detail(quartiles.whisker_lower))?;
    write_field(w, "Upper", &table::detail(quartiles.whisker_upper))?;

    write_section(w, "Classification")?;
    writeln!(w, "  {:<18} {:>6} {:>9}  Values", "Class", "Count", "Share")?;
    let classes = [
        (OutlierClass::Normal, &quartiles.normal),
        (OutlierClass::Moderate, &quartiles.moderate_outliers),
        (OutlierClass::Extreme, &quartiles.extreme_outliers),
    ];
    for (class, values) in classes {
        writeln!(
            w,
            "  {:<18} {:>6} {:>9}  {}",
            class.to_string(),
            summary.count(class),
            table::percent(summary.percentage(class)),
            table::value_list(values),
        )?;
    }
    Ok(())
}
