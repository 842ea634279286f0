use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::{
    Frame,
    layout::{Constraint, Layout, Position},
};
use statlab_stats::{analysis::Analysis, sample::tokenize};

use crate::tui::App;

use super::widgets::{
    BoxplotView, DataLine, FrequencyView, HelpLine, OgiveView, StatusLine, SummaryView, TabBar,
    placeholder,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub(super) enum Tab {
    #[default]
    Summary,
    Frequency,
    Ogive,
    Boxplot,
}

impl Tab {
    pub(super) const ALL: [Tab; 4] = [Tab::Summary, Tab::Frequency, Tab::Ogive, Tab::Boxplot];

    pub(super) fn title(self) -> &'static str {
        match self {
            Tab::Summary => "Summary",
            Tab::Frequency => "Frequency",
            Tab::Ogive => "Ogive",
            Tab::Boxplot => "Box plot",
        }
    }

    pub(super) fn index(self) -> usize {
        self as usize
    }

    fn next(self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    fn previous(self) -> Self {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

/// Y axis of the ogive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub(super) enum OgiveScale {
    #[default]
    Absolute,
    Relative,
}

impl OgiveScale {
    fn toggled(self) -> Self {
        match self {
            OgiveScale::Absolute => OgiveScale::Relative,
            OgiveScale::Relative => OgiveScale::Absolute,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(super) enum Status {
    Info(String),
    Error(String),
}

/// Interactive dashboard state.
///
/// The committed data line and its analysis only change together, on a
/// successful submission or a clear.
#[derive(Debug, Default)]
pub(crate) struct ViewApp {
    data: String,
    editor: Option<String>,
    analysis: Option<Analysis>,
    tab: Tab,
    ogive_scale: OgiveScale,
    status: Option<Status>,
    should_exit: bool,
}

impl ViewApp {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Starts with `text` already submitted; newlines are folded into one line.
    pub(crate) fn with_input(text: &str) -> Self {
        let mut app = Self::new();
        app.submit(tokenize(text).collect::<Vec<_>>().join(" "));
        app
    }

    fn submit(&mut self, text: String) {
        match Analysis::from_input(&text) {
            Ok(analysis) => {
                tracing::debug!(n = analysis.basic.n, "dashboard data updated");
                self.status = Some(Status::Info(format!(
                    "Analyzed {} values",
                    analysis.basic.n
                )));
                self.analysis = Some(analysis);
                self.data = text;
                self.editor = None;
            }
            Err(e) => {
                // Previous results stay on screen; the rejected text stays editable
                self.status = Some(Status::Error(format!("Error: {e}")));
                self.editor = Some(text);
            }
        }
    }

    fn clear(&mut self) {
        self.data.clear();
        self.analysis = None;
        self.status = Some(Status::Info("Cleared".to_string()));
    }

    fn handle_key(&mut self, key: &KeyEvent) {
        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => self.should_exit = true,
            KeyCode::Char('e') => {
                self.editor = Some(self.data.clone());
                self.status = None;
            }
            KeyCode::Char('c') => self.clear(),
            KeyCode::Char('r') => self.ogive_scale = self.ogive_scale.toggled(),
            KeyCode::Tab | KeyCode::Right => self.tab = self.tab.next(),
            KeyCode::BackTab | KeyCode::Left => self.tab = self.tab.previous(),
            _ => {}
        }
    }

    fn handle_editor_key(&mut self, key: &KeyEvent) {
        let Some(editor) = &mut self.editor else {
            return;
        };
        match key.code {
            KeyCode::Enter => {
                let text = editor.clone();
                self.submit(text);
            }
            KeyCode::Esc => {
                self.editor = None;
                self.status = None;
            }
            KeyCode::Backspace => {
                editor.pop();
            }
            KeyCode::Char(c) => editor.push(c),
            _ => {}
        }
    }
}

impl App for ViewApp {
    fn should_exit(&self) -> bool {
        self.should_exit
    }

    fn handle_event(&mut self, event: &Event) {
        let Event::Key(key) = event else {
            return;
        };
        if key.kind != KeyEventKind::Press {
            return;
        }
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            self.should_exit = true;
        } else if self.editor.is_some() {
            self.handle_editor_key(key);
        } else {
            self.handle_key(key);
        }
    }

    fn draw(&self, frame: &mut Frame) {
        let [tabs_area, data_area, body_area, status_area, help_area] = Layout::vertical([
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Fill(1),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .areas(frame.area());

        let data_line = DataLine {
            text: self.editor.as_deref().unwrap_or(&self.data),
            editing: self.editor.is_some(),
        };
        if let Some(position) = data_line.cursor_position(data_area) {
            frame.set_cursor_position(Position::from(position));
        }

        frame.render_widget(TabBar { selected: self.tab }, tabs_area);
        frame.render_widget(data_line, data_area);

        match &self.analysis {
            None => frame.render_widget(placeholder(), body_area),
            Some(analysis) => match self.tab {
                Tab::Summary => frame.render_widget(SummaryView { analysis }, body_area),
                Tab::Frequency => frame.render_widget(
                    FrequencyView {
                        frequency: &analysis.frequency,
                    },
                    body_area,
                ),
                Tab::Ogive => frame.render_widget(
                    OgiveView {
                        frequency: &analysis.frequency,
                        n: analysis.basic.n,
                        scale: self.ogive_scale,
                    },
                    body_area,
                ),
                Tab::Boxplot => frame.render_widget(
                    BoxplotView {
                        sample: &analysis.sample,
                        quartiles: &analysis.quartiles,
                    },
                    body_area,
                ),
            },
        }

        frame.render_widget(
            StatusLine {
                status: self.status.as_ref(),
            },
            status_area,
        );
        frame.render_widget(
            HelpLine {
                editing: self.editor.is_some(),
            },
            help_area,
        );
    }
}
