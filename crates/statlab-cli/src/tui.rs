//! Minimal terminal runner for event-driven dashboards.

use crossterm::event::{self, Event};
use ratatui::Frame;

/// A full-screen application driven by terminal events.
pub(crate) trait App {
    /// Returns whether the application should exit.
    fn should_exit(&self) -> bool;

    /// Handles a terminal event (key input, resize, etc.).
    fn handle_event(&mut self, event: &Event);

    /// Draws the whole screen.
    fn draw(&self, frame: &mut Frame);
}

/// Runs `app` in the alternate screen until it asks to exit.
///
/// The screen is redrawn after every event, so nothing is drawn while the
/// application waits for input.
pub(crate) fn run<A>(app: &mut A) -> anyhow::Result<()>
where
    A: App,
{
    ratatui::run(|terminal| {
        while !app.should_exit() {
            terminal.draw(|frame| app.draw(frame))?;
            let event = event::read()?;
            app.handle_event(&event);
        }
        Ok(())
    })
}
