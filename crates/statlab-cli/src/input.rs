use std::{
    fs,
    io::{self, IsTerminal as _},
    path::PathBuf,
};

use anyhow::Context;
use clap::Args;
use statlab_stats::sample::Sample;

/// Where the raw numbers of a sample come from.
#[derive(Debug, Clone, Default, Args)]
pub(crate) struct SampleInputArg {
    /// Numbers separated by commas, spaces or newlines (read from stdin if omitted)
    #[arg(allow_hyphen_values = true)]
    pub data: Option<String>,

    /// Read the numbers from a file
    #[arg(short, long, conflicts_with = "data")]
    pub file: Option<PathBuf>,
}

impl SampleInputArg {
    /// Returns the raw text given on the command line or in `--file`, if any.
    pub fn read_given(&self) -> anyhow::Result<Option<String>> {
        if let Some(data) = &self.data {
            tracing::debug!(source = "argument", "reading sample input");
            return Ok(Some(data.clone()));
        }
        if let Some(path) = &self.file {
            tracing::debug!(source = %path.display(), "reading sample input");
            let text = fs::read_to_string(path)
                .with_context(|| format!("Failed to read data file: {}", path.display()))?;
            return Ok(Some(text));
        }
        Ok(None)
    }

    /// Returns the raw text, falling back to stdin.
    pub fn read(&self) -> anyhow::Result<String> {
        if let Some(text) = self.read_given()? {
            return Ok(text);
        }
        let stdin = io::stdin();
        if stdin.is_terminal() {
            eprintln!("Reading numbers from stdin (end with Ctrl-D)...");
        }
        tracing::debug!(source = "stdin", "reading sample input");
        io::read_to_string(stdin.lock()).context("Failed to read data from stdin")
    }

    /// Reads and parses the sample.
    pub fn read_sample(&self) -> anyhow::Result<Sample> {
        let text = self.read()?;
        let sample = Sample::parse(&text).context("Invalid sample data")?;
        tracing::info!(n = sample.n(), "sample loaded");
        Ok(sample)
    }
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use super::*;

    #[derive(Debug, Parser)]
    struct TestCli {
        #[clap(flatten)]
        input: SampleInputArg,
    }

    #[test]
    fn test_leading_negative_data() {
        let cli = TestCli::try_parse_from(["statlab", "-50 -8 1 2"]).unwrap();
        assert_eq!(cli.input.data.as_deref(), Some("-50 -8 1 2"));
        assert_eq!(
            Sample::parse(&cli.input.read().unwrap()).unwrap().min(),
            -50.0
        );
    }

    #[test]
    fn test_file_flag_is_still_a_flag() {
        let cli = TestCli::try_parse_from(["statlab", "-f", "depths.txt"]).unwrap();
        assert_eq!(cli.input.data, None);
        assert_eq!(cli.input.file, Some(PathBuf::from("depths.txt")));
    }

    #[test]
    fn test_data_and_file_conflict() {
        assert!(TestCli::try_parse_from(["statlab", "1 2", "--file", "depths.txt"]).is_err());
    }
}
