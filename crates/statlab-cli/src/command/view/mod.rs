use clap::Args;

use crate::{input::SampleInputArg, tui};

use self::app::ViewApp;

mod app;
mod widgets;

#[derive(Debug, Clone, Args)]
pub(crate) struct ViewArg {
    #[clap(flatten)]
    input: SampleInputArg,
}

pub(crate) fn run(arg: &ViewArg) -> anyhow::Result<()> {
    // stdin is left alone here: the terminal belongs to the dashboard
    let mut app = match arg.input.read_given()? {
        Some(text) => ViewApp::with_input(&text),
        None => ViewApp::new(),
    };
    tui::run(&mut app)
}
