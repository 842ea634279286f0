use std::io::{self, Write};

use clap::Args;
use statlab_stats::threshold::ThresholdAnalysis;

use crate::{
    input::SampleInputArg,
    output::OutputArg,
    table::{self, write_field, write_section, write_title},
};

#[derive(Debug, Clone, Args)]
pub(crate) struct ThresholdArg {
    /// Safe threshold; values strictly above it count as exceeding
    #[arg(long, value_parser = parse_finite)]
    safe_height: f64,
    #[clap(flatten)]
    input: SampleInputArg,
    #[clap(flatten)]
    output: OutputArg,
}

fn parse_finite(s: &str) -> Result<f64, String> {
    let value = s.parse::<f64>().map_err(|e| e.to_string())?;
    if value.is_finite() {
        Ok(value)
    } else {
        Err(format!("{s} is not a finite number"))
    }
}

pub(crate) fn run(arg: &ThresholdArg) -> anyhow::Result<()> {
    let sample = arg.input.read_sample()?;
    let analysis = ThresholdAnalysis::new(&sample, arg.safe_height);
    arg.output.emit(&analysis, |w| write_report(w, &analysis))
}

fn write_report<W>(w: &mut W, analysis: &ThresholdAnalysis) -> io::Result<()>
where
    W: Write,
{
    let stats = &analysis.stats;
    write_title(w, "Threshold Analysis")?;

    write_section(w, "Measurements")?;
    write_field(w, "Points (n)", &stats.n.to_string())?;
    write_field(w, "Mean", &table::summary(stats.mean))?;
    write_field(w, "Standard deviation", &table::summary(stats.std_dev))?;
    write_field(
        w,
        "Coefficient of variation",
        &table::coefficient_of_variation(stats.coefficient_of_variation),
    )?;
    writeln!(w, "  {}", table::dispersion(stats.dispersion_level()))?;
    write_field(
        w,
        "Range",
        &format!("{} to {}", table::summary(stats.min), table::summary(stats.max)),
    )?;

    write_section(w, "Risk")?;
    write_field(w, "Safe threshold", &table::summary(analysis.threshold))?;
    write_field(
        w,
        "Points above threshold",
        &format!("{} of {}", analysis.exceeding, stats.n),
    )?;
    write_field(
        w,
        "Share above threshold",
        &table::percent(analysis.exceeding_percentage),
    )?;
    writeln!(w, "  {}: {}", analysis.risk, analysis.risk.advice())
}

#[cfg(test)]
mod tests {
    use clap::Parser;
    use statlab_stats::sample::Sample;

    use super::*;

    #[derive(Debug, Parser)]
    struct TestCli {
        #[clap(flatten)]
        arg: ThresholdArg,
    }

    #[test]
    fn test_report() {
        let sample = Sample::parse("3 4 12").unwrap();
        let analysis = ThresholdAnalysis::new(&sample, 10.0);
        let mut buf = Vec::new();
        write_report(&mut buf, &analysis).unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert!(text.contains("1 of 3"));
        assert!(text.contains("33.33%"));
        assert!(text.contains("high risk: "));
    }

    #[test]
    fn test_rejects_non_finite_threshold() {
        assert!(TestCli::try_parse_from(["statlab", "--safe-height", "inf", "1 2"]).is_err());
        assert!(TestCli::try_parse_from(["statlab", "--safe-height", "NaN", "1 2"]).is_err());
        let cli = TestCli::try_parse_from(["statlab", "--safe-height", "1.5", "1 2"]).unwrap();
        assert_eq!(cli.arg.safe_height, 1.5);
        assert_eq!(cli.arg.input.data.as_deref(), Some("1 2"));
    }

    #[test]
    fn test_requires_threshold() {
        assert!(TestCli::try_parse_from(["statlab", "1 2"]).is_err());
    }
}
