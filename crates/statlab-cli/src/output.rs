use std::{
    fmt,
    fs::File,
    io::{self, BufWriter, StdoutLock, Write},
    path::{Path, PathBuf},
};

use anyhow::Context;
use clap::Args;

/// Report format and destination shared by the reporting commands.
#[derive(Debug, Clone, Default, Args)]
pub(crate) struct OutputArg {
    /// Print the results as JSON instead of text tables
    #[arg(long)]
    pub json: bool,

    /// Write the report to this file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

impl OutputArg {
    /// Writes `report` as pretty JSON, or as text using `write_text`.
    pub fn emit<T, F>(&self, report: &T, write_text: F) -> anyhow::Result<()>
    where
        T: serde::Serialize,
        F: FnOnce(&mut ReportSink) -> io::Result<()>,
    {
        let mut sink = ReportSink::open(self.output.as_deref())?;
        tracing::debug!(destination = %sink, json = self.json, "writing report");

        if self.json {
            serde_json::to_writer_pretty(&mut sink, report)
                .with_context(|| format!("Failed to write JSON to {sink}"))?;
            writeln!(sink).with_context(|| format!("Failed to write JSON to {sink}"))?;
        } else {
            write_text(&mut sink).with_context(|| format!("Failed to write report to {sink}"))?;
        }
        sink.flush()
            .with_context(|| format!("Failed to flush output to {sink}"))
    }
}

/// Where a report is written: locked stdout or a buffered file.
#[derive(Debug)]
pub(crate) enum ReportSink {
    Stdout(StdoutLock<'static>),
    File {
        writer: BufWriter<File>,
        path: PathBuf,
    },
}

impl ReportSink {
    fn open(path: Option<&Path>) -> anyhow::Result<Self> {
        let Some(path) = path else {
            return Ok(Self::Stdout(io::stdout().lock()));
        };
        let file = File::create(path)
            .with_context(|| format!("Failed to create output file: {}", path.display()))?;
        Ok(Self::File {
            writer: BufWriter::new(file),
            path: path.to_owned(),
        })
    }
}

impl fmt::Display for ReportSink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Stdout(_) => f.write_str("stdout"),
            Self::File { path, .. } => fmt::Display::fmt(&path.display(), f),
        }
    }
}

impl Write for ReportSink {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        match self {
            Self::Stdout(writer) => writer.write(buf),
            Self::File { writer, .. } => writer.write(buf),
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        match self {
            Self::Stdout(writer) => writer.flush(),
            Self::File { writer, .. } => writer.flush(),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::{env, fs, process};

    use super::*;

    fn temp_path(name: &str) -> PathBuf {
        env::temp_dir().join(format!("statlab-{}-{name}", process::id()))
    }

    #[test]
    fn test_json_to_file() {
        let path = temp_path("report.json");
        let arg = OutputArg {
            json: true,
            output: Some(path.clone()),
        };
        arg.emit(&[1.5, 2.0], |_| unreachable!()).unwrap();
        let text = fs::read_to_string(&path).unwrap();
        fs::remove_file(&path).unwrap();
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(value, serde_json::json!([1.5, 2.0]));
        assert!(text.ends_with('\n'));
    }

    #[test]
    fn test_text_to_file() {
        let path = temp_path("report.txt");
        let arg = OutputArg {
            json: false,
            output: Some(path.clone()),
        };
        arg.emit(&(), |w| writeln!(w, "Summary:")).unwrap();
        let text = fs::read_to_string(&path).unwrap();
        fs::remove_file(&path).unwrap();
        assert_eq!(text, "Summary:\n");
    }

    #[test]
    fn test_missing_directory_is_reported() {
        let arg = OutputArg {
            json: false,
            output: Some(temp_path("missing").join("report.txt")),
        };
        let err = arg.emit(&(), |_| Ok(())).unwrap_err();
        assert!(err.to_string().starts_with("Failed to create output file"));
    }
}
