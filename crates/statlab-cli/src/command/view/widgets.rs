use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    symbols::Marker,
    text::{Line, Span, Text},
    widgets::{
        Axis, Bar, BarChart, Block, Chart, Dataset, GraphType, Paragraph, Row, Table, Tabs,
        Widget, Wrap,
        canvas::{Canvas, Line as CanvasLine, Points, Rectangle},
    },
};
use statlab_stats::{
    analysis::Analysis, frequency::FrequencyDistribution, quartiles::Quartiles, sample::Sample,
};

use crate::table;

use super::app::{OgiveScale, Status, Tab};

const INNER_FENCE_COLOR: Color = Color::Blue;
const OUTER_FENCE_COLOR: Color = Color::Magenta;
const MODERATE_COLOR: Color = Color::Yellow;
const EXTREME_COLOR: Color = Color::Red;

/// Axis bounds around `[lo, hi]` with a small margin, never zero-width.
fn padded_bounds(lo: f64, hi: f64) -> [f64; 2] {
    let span = hi - lo;
    let pad = if span > 0.0 {
        span * 0.05
    } else {
        lo.abs().max(1.0) * 0.1
    };
    [lo - pad, hi + pad]
}

fn axis_labels(bounds: [f64; 2], decimals: usize) -> [String; 3] {
    [
        format!("{:.decimals$}", bounds[0]),
        format!("{:.decimals$}", f64::midpoint(bounds[0], bounds[1])),
        format!("{:.decimals$}", bounds[1]),
    ]
}

pub(super) fn placeholder() -> Paragraph<'static> {
    Paragraph::new(vec![
        Line::raw(""),
        Line::raw("No data."),
        Line::raw("Press e and enter numbers separated by commas or spaces."),
    ])
    .centered()
    .block(Block::bordered())
}

pub(super) struct TabBar {
    pub selected: Tab,
}

impl Widget for TabBar {
    fn render(self, area: Rect, buf: &mut Buffer)
    where
        Self: Sized,
    {
        Tabs::new(Tab::ALL.map(Tab::title))
            .select(self.selected.index())
            .highlight_style(
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            )
            .block(Block::bordered().title("statlab"))
            .render(area, buf);
    }
}

pub(super) struct DataLine<'a> {
    pub text: &'a str,
    pub editing: bool,
}

impl DataLine<'_> {
    /// Columns hidden on the left so the end of the text stays visible.
    fn scroll_offset(&self, area: Rect) -> u16 {
        let inner_width = area.width.saturating_sub(2);
        let text_width = u16::try_from(self.text.chars().count()).unwrap_or(u16::MAX);
        text_width.saturating_sub(inner_width.saturating_sub(1))
    }

    /// Terminal cursor position while editing.
    pub fn cursor_position(&self, area: Rect) -> Option<(u16, u16)> {
        if !self.editing {
            return None;
        }
        let text_width = u16::try_from(self.text.chars().count()).unwrap_or(u16::MAX);
        let visible = text_width - self.scroll_offset(area);
        Some((area.x + 1 + visible, area.y + 1))
    }
}

impl Widget for DataLine<'_> {
    fn render(self, area: Rect, buf: &mut Buffer)
    where
        Self: Sized,
    {
        let (title, border_style) = if self.editing {
            ("Data (editing)", Style::default().fg(Color::Yellow))
        } else {
            ("Data", Style::default())
        };
        let line = if self.text.is_empty() && !self.editing {
            Line::styled("(empty)", Style::default().fg(Color::DarkGray))
        } else {
            Line::raw(self.text)
        };
        Paragraph::new(line)
            .scroll((0, self.scroll_offset(area)))
            .block(Block::bordered().title(title).border_style(border_style))
            .render(area, buf);
    }
}

pub(super) struct SummaryView<'a> {
    pub analysis: &'a Analysis,
}

impl Widget for SummaryView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer)
    where
        Self: Sized,
    {
        let [stats_area, quartiles_area] =
            Layout::horizontal([Constraint::Percentage(50), Constraint::Percentage(50)])
                .areas(area);

        let stats = &self.analysis.basic;
        let stats_text = vec![
            Line::raw(format!("  n:           {:>12}", stats.n)),
            Line::raw(format!("  Min:         {:>12}", table::summary(stats.min))),
            Line::raw(format!("  Max:         {:>12}", table::summary(stats.max))),
            Line::raw(format!("  Range:       {:>12}", table::summary(stats.range))),
            Line::raw(format!("  Classes (k): {:>12}", stats.class_count)),
            Line::raw(format!(
                "  Class width: {:>12}",
                table::summary(stats.class_width)
            )),
            Line::raw(format!("  Mean:        {:>12}", table::summary(stats.mean))),
            Line::raw(format!(
                "  Variance:    {:>12}",
                table::summary(stats.variance)
            )),
            Line::raw(format!("  Std dev:     {:>12}", table::summary(stats.std_dev))),
            Line::raw(format!(
                "  CV:          {:>12}",
                table::coefficient_of_variation(stats.coefficient_of_variation)
            )),
            Line::raw(""),
            Line::raw(format!("  {}", table::dispersion(stats.dispersion_level()))),
        ];

        let quartiles = &self.analysis.quartiles;
        let fences = &quartiles.fences;
        let outliers = quartiles.outlier_summary();
        let quartiles_text = vec![
            Line::raw(format!("  Q1:          {:>12}", table::detail(quartiles.q1))),
            Line::raw(format!("  Q2:          {:>12}", table::detail(quartiles.q2))),
            Line::raw(format!("  Q3:          {:>12}", table::detail(quartiles.q3))),
            Line::raw(format!("  IQR:         {:>12}", table::detail(quartiles.iqr))),
            Line::raw(format!(
                "  Inner fences: [{}, {}]",
                table::detail(fences.inner_lower),
                table::detail(fences.inner_upper)
            )),
            Line::raw(format!(
                "  Outer fences: [{}, {}]",
                table::detail(fences.outer_lower),
                table::detail(fences.outer_upper)
            )),
            Line::raw(format!(
                "  Whiskers:     [{}, {}]",
                table::detail(quartiles.whisker_lower),
                table::detail(quartiles.whisker_upper)
            )),
            Line::raw(""),
            Line::from(vec![
                Span::styled(
                    format!("  Moderate ({}): ", outliers.moderate),
                    Style::default().fg(MODERATE_COLOR),
                ),
                Span::raw(table::value_list(&quartiles.moderate_outliers)),
            ]),
            Line::from(vec![
                Span::styled(
                    format!("  Extreme ({}):  ", outliers.extreme),
                    Style::default().fg(EXTREME_COLOR),
                ),
                Span::raw(table::value_list(&quartiles.extreme_outliers)),
            ]),
        ];

        Paragraph::new(stats_text)
            .wrap(Wrap { trim: false })
            .block(Block::bordered().title("Summary"))
            .render(stats_area, buf);
        Paragraph::new(quartiles_text)
            .wrap(Wrap { trim: false })
            .block(Block::bordered().title("Quartiles"))
            .render(quartiles_area, buf);
    }
}

pub(super) struct FrequencyView<'a> {
    pub frequency: &'a FrequencyDistribution,
}

impl Widget for FrequencyView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer)
    where
        Self: Sized,
    {
        let [table_area, chart_area] =
            Layout::vertical([Constraint::Fill(1), Constraint::Fill(1)]).areas(area);

        let header = Row::new(["Interval", "Midpoint", "f", "fr", "F", "Fr", "Degrees"])
            .style(Style::default().add_modifier(Modifier::BOLD));
        let rows = self.frequency.classes.iter().map(|class| {
            Row::new([
                table::interval(class),
                table::summary(class.midpoint),
                class.frequency.to_string(),
                table::detail(class.relative_frequency),
                class.cumulative_frequency.to_string(),
                table::detail(class.cumulative_relative_frequency),
                table::summary(class.sector_degrees()),
            ])
        });
        let widths = [
            Constraint::Length(24),
            Constraint::Length(10),
            Constraint::Length(6),
            Constraint::Length(8),
            Constraint::Length(6),
            Constraint::Length(8),
            Constraint::Length(8),
        ];
        Table::new(rows, widths)
            .header(header)
            .block(Block::bordered().title("Frequency distribution"))
            .render(table_area, buf);

        let class_count = u16::try_from(self.frequency.classes.len()).unwrap_or(u16::MAX);
        let bar_width = (chart_area.width.saturating_sub(2) / class_count.max(1))
            .saturating_sub(1)
            .clamp(1, 12);
        let bars = self
            .frequency
            .classes
            .iter()
            .map(|class| {
                Bar::with_label(
                    table::summary(class.midpoint),
                    u64::try_from(class.frequency).unwrap_or(u64::MAX),
                )
                .text_value(class.frequency.to_string())
            })
            .collect::<Vec<_>>();
        BarChart::new(bars)
            .block(Block::bordered().title("Histogram (class midpoints)"))
            .bar_width(bar_width)
            .bar_gap(1)
            .bar_style(Style::default().fg(Color::Cyan))
            .render(chart_area, buf);
    }
}

pub(super) struct OgiveView<'a> {
    pub frequency: &'a FrequencyDistribution,
    pub n: usize,
    pub scale: OgiveScale,
}

impl Widget for OgiveView<'_> {
    #[expect(clippy::cast_precision_loss)]
    fn render(self, area: Rect, buf: &mut Buffer)
    where
        Self: Sized,
    {
        let classes = &self.frequency.classes;
        let (Some(first), Some(last)) = (classes.first(), classes.last()) else {
            return;
        };

        let (title, y_max, y_decimals) = match self.scale {
            OgiveScale::Absolute => ("Cumulative frequency (F)", self.n as f64, 0),
            OgiveScale::Relative => ("Cumulative relative frequency (Fr)", 1.0, 2),
        };
        let points = std::iter::once((first.lower_bound, 0.0))
            .chain(classes.iter().map(|class| {
                let y = match self.scale {
                    OgiveScale::Absolute => class.cumulative_frequency as f64,
                    OgiveScale::Relative => class.cumulative_relative_frequency,
                };
                (class.upper_bound, y)
            }))
            .collect::<Vec<_>>();

        let x_bounds = padded_bounds(first.lower_bound, last.upper_bound);
        let y_bounds = [0.0, y_max];
        let dataset = Dataset::default()
            .marker(Marker::Braille)
            .graph_type(GraphType::Line)
            .style(Style::default().fg(Color::Cyan))
            .data(&points);
        let chart = Chart::new(vec![dataset])
            .block(
                Block::bordered()
                    .title(format!("Ogive: {title}"))
                    .title_bottom("r: toggle absolute/relative"),
            )
            .x_axis(
                Axis::default()
                    .title("Upper bound")
                    .bounds(x_bounds)
                    .labels(axis_labels(x_bounds, 2)),
            )
            .y_axis(
                Axis::default()
                    .bounds(y_bounds)
                    .labels(axis_labels(y_bounds, y_decimals)),
            );
        chart.render(area, buf);
    }
}

pub(super) struct BoxplotView<'a> {
    pub sample: &'a Sample,
    pub quartiles: &'a Quartiles,
}

impl Widget for BoxplotView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer)
    where
        Self: Sized,
    {
        let [canvas_area, legend_area] =
            Layout::vertical([Constraint::Fill(1), Constraint::Length(4)]).areas(area);

        let q = self.quartiles;
        let fences = &q.fences;
        let lo = self.sample.min().min(fences.inner_lower);
        let hi = self.sample.max().max(fences.inner_upper);
        let x_bounds = padded_bounds(lo, hi);
        let in_view = |x: f64| x_bounds[0] <= x && x <= x_bounds[1];

        let moderate = q
            .moderate_outliers
            .iter()
            .map(|v| (*v, 5.0))
            .collect::<Vec<_>>();
        let extreme = q
            .extreme_outliers
            .iter()
            .map(|v| (*v, 5.0))
            .collect::<Vec<_>>();

        let canvas = Canvas::default()
            .block(Block::bordered().title("Box plot"))
            .marker(Marker::Braille)
            .x_bounds(x_bounds)
            .y_bounds([0.0, 10.0])
            .paint(|ctx| {
                for x in [fences.outer_lower, fences.outer_upper] {
                    if in_view(x) {
                        ctx.draw(&CanvasLine::new(x, 1.0, x, 9.0, OUTER_FENCE_COLOR));
                    }
                }
                for x in [fences.inner_lower, fences.inner_upper] {
                    ctx.draw(&CanvasLine::new(x, 2.0, x, 8.0, INNER_FENCE_COLOR));
                }

                ctx.draw(&CanvasLine::new(q.whisker_lower, 5.0, q.q1, 5.0, Color::White));
                ctx.draw(&CanvasLine::new(q.q3, 5.0, q.whisker_upper, 5.0, Color::White));
                for x in [q.whisker_lower, q.whisker_upper] {
                    ctx.draw(&CanvasLine::new(x, 4.0, x, 6.0, Color::White));
                }

                ctx.draw(&Rectangle {
                    x: q.q1,
                    y: 3.0,
                    width: q.iqr,
                    height: 4.0,
                    color: Color::Cyan,
                });
                ctx.draw(&CanvasLine::new(q.q2, 3.0, q.q2, 7.0, Color::Yellow));

                ctx.draw(&Points {
                    coords: &moderate,
                    color: MODERATE_COLOR,
                });
                ctx.draw(&Points {
                    coords: &extreme,
                    color: EXTREME_COLOR,
                });
            });
        canvas.render(canvas_area, buf);

        let legend = vec![
            Line::raw(format!(
                "  Box: Q1 {} to Q3 {}, median {}   Whiskers: {} to {}",
                table::detail(q.q1),
                table::detail(q.q3),
                table::detail(q.q2),
                table::detail(q.whisker_lower),
                table::detail(q.whisker_upper),
            )),
            Line::from(vec![
                Span::styled("  | inner fences  ", Style::default().fg(INNER_FENCE_COLOR)),
                Span::styled("| outer fences  ", Style::default().fg(OUTER_FENCE_COLOR)),
                Span::styled(
                    format!("* moderate ({})  ", q.moderate_outliers.len()),
                    Style::default().fg(MODERATE_COLOR),
                ),
                Span::styled(
                    format!("* extreme ({})", q.extreme_outliers.len()),
                    Style::default().fg(EXTREME_COLOR),
                ),
            ]),
        ];
        Paragraph::new(legend)
            .block(Block::bordered())
            .render(legend_area, buf);
    }
}

pub(super) struct StatusLine<'a> {
    pub status: Option<&'a Status>,
}

impl Widget for StatusLine<'_> {
    fn render(self, area: Rect, buf: &mut Buffer)
    where
        Self: Sized,
    {
        let line = match self.status {
            Some(Status::Info(message)) => {
                Line::styled(message.as_str(), Style::default().fg(Color::Green))
            }
            Some(Status::Error(message)) => {
                Line::styled(message.as_str(), Style::default().fg(Color::Red))
            }
            None => Line::default(),
        };
        line.render(area, buf);
    }
}

pub(super) struct HelpLine {
    pub editing: bool,
}

impl Widget for HelpLine {
    fn render(self, area: Rect, buf: &mut Buffer)
    where
        Self: Sized,
    {
        let help = if self.editing {
            "Enter: Submit | Esc: Cancel"
        } else {
            "e: Edit | c: Clear | Tab/←/→: Switch tab | r: Ogive scale | q/Esc: Quit"
        };
        Text::from(help)
            .style(Style::default().fg(Color::DarkGray))
            .centered()
            .render(area, buf);
    }
}
