use clap::{Parser, Subcommand};

use self::{analyze::AnalyzeArg, boxplot::BoxplotArg, threshold::ThresholdArg, view::ViewArg};

mod analyze;
mod boxplot;
mod threshold;
mod view;

#[derive(Debug, Clone, Parser)]
#[command(author, version, about, long_about = None)]
pub struct CommandArgs {
    /// What mode to run the program in
    #[command(subcommand)]
    mode: Mode,
}

#[derive(Debug, Clone, Subcommand)]
enum Mode {
    /// Summary measures, quartiles, outliers and frequency tables
    Analyze(#[clap(flatten)] AnalyzeArg),
    /// Box plot analysis with fences, whiskers and outlier classes
    Boxplot(#[clap(flatten)] BoxplotArg),
    /// Compare measurements against a safe threshold
    Threshold(#[clap(flatten)] ThresholdArg),
    /// Interactive dashboard
    View(#[clap(flatten)] ViewArg),
}

pub fn run() -> anyhow::Result<()> {
    let args = CommandArgs::parse();
    tracing::debug!(mode = ?args.mode, "dispatching command");
    match args.mode {
        Mode::Analyze(arg) => analyze::run(&arg)?,
        Mode::Boxplot(arg) => boxplot::run(&arg)?,
        Mode::Threshold(arg) => threshold::run(&arg)?,
        Mode::View(arg) => view::run(&arg)?,
    }
    Ok(())
}
