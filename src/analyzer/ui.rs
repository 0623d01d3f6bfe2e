//! Rendering of the analysis tab

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    symbols,
    text::{Line, Span},
    widgets::{Axis, Block, Borders, Chart, Dataset, GraphType, Paragraph, Tabs, Wrap},
    Frame,
};

use crate::analyzer::app::{AnalysisApp, Field, ResultArea};

const TAB_TITLES: [&str; 1] = ["Cost Analysis"];

impl AnalysisApp {
    /// Render the UI
    pub fn render(&self, f: &mut Frame) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Tabs
                Constraint::Min(12),   // Analysis tab
                Constraint::Length(3), // Footer
            ])
            .split(f.area());

        self.render_tabs(f, chunks[0]);
        self.render_analysis_tab(f, chunks[1]);
        self.render_footer(f, chunks[2]);
    }

    fn render_tabs(&self, f: &mut Frame, area: Rect) {
        let last_update = self
            .last_update
            .map(|t| t.format("%H:%M:%S").to_string())
            .unwrap_or_else(|| "initial example".to_string());

        let tabs = Tabs::new(TAB_TITLES.to_vec())
            .select(0)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(Line::from(vec![
                        Span::styled(
                            " Network Cost Analyzer ",
                            Style::default()
                                .fg(Color::Cyan)
                                .add_modifier(Modifier::BOLD),
                        ),
                        Span::raw("| Plot: "),
                        Span::styled(last_update, Style::default().fg(Color::Green)),
                        Span::raw(" "),
                    ])),
            )
            .highlight_style(
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            );

        f.render_widget(tabs, area);
    }

    fn render_analysis_tab(&self, f: &mut Frame, area: Rect) {
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(5), // Parameter inputs
                Constraint::Min(7),    // Chart and side panel
            ])
            .split(area);

        self.render_inputs(f, rows[0]);

        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(65), Constraint::Percentage(35)])
            .split(rows[1]);

        self.render_chart(f, columns[0]);

        let side = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(5), // Plot controls
                Constraint::Min(7),    // Result area
            ])
            .split(columns[1]);

        self.render_controls(f, side[0]);
        self.render_result(f, side[1]);
    }

    fn render_inputs(&self, f: &mut Frame, area: Rect) {
        let lines = vec![
            self.field_line(
                Field::X,
                &format!("Cybercafe rate x ({}/hour): ", self.currency),
            ),
            self.field_line(Field::Y, "Network speed y (GB/s):     "),
            self.field_line(Field::Z, "Download size z (GB):       "),
        ];

        let paragraph = Paragraph::new(lines).block(
            Block::default()
                .borders(Borders::ALL)
                .title("Parameters"),
        );
        f.render_widget(paragraph, area);
    }

    fn render_controls(&self, f: &mut Frame, area: Rect) {
        let mut variable_line = vec![Span::raw("Variable: ")];
        variable_line.push(Span::styled(
            format!("< {} >", self.variable.label()),
            focus_style(self.focus == Field::Variable),
        ));

        let mut range_line = vec![Span::raw("Range: ")];
        range_line.extend(self.field_spans(Field::Start));
        range_line.push(Span::raw(" to "));
        range_line.extend(self.field_spans(Field::End));

        let generate = Span::styled(
            "[ Generate ]",
            focus_style(self.focus == Field::Generate).add_modifier(Modifier::BOLD),
        );

        let paragraph = Paragraph::new(vec![
            Line::from(variable_line),
            Line::from(range_line),
            Line::from(generate),
        ])
        .block(Block::default().borders(Borders::ALL).title("Plot"));
        f.render_widget(paragraph, area);
    }

    fn render_chart(&self, f: &mut Frame, area: Rect) {
        let block = Block::default()
            .borders(Borders::ALL)
            .title("Cost curves");

        let (x_min, x_max) = match (self.sweep.samples.first(), self.sweep.samples.last()) {
            (Some(&first), Some(&last)) if first < last => (first, last),
            _ => {
                let paragraph = Paragraph::new(Span::styled(
                    "No data to plot",
                    Style::default().fg(Color::DarkGray),
                ))
                .block(block);
                f.render_widget(paragraph, area);
                return;
            }
        };

        let (y_min, y_max) = padded_bounds(self.sweep.cost_bounds().unwrap_or((0.0, 1.0)));

        let school_points = self.sweep.school_points();
        let bar_points = self.sweep.bar_points();

        let datasets = vec![
            Dataset::default()
                .name("School network")
                .marker(symbols::Marker::Braille)
                .graph_type(GraphType::Line)
                .style(Style::default().fg(Color::Cyan))
                .data(&school_points),
            Dataset::default()
                .name("Cybercafe")
                .marker(symbols::Marker::Dot)
                .graph_type(GraphType::Scatter)
                .style(Style::default().fg(Color::Magenta))
                .data(&bar_points),
        ];

        let chart = Chart::new(datasets)
            .block(block)
            .hidden_legend_constraints((Constraint::Ratio(1, 2), Constraint::Ratio(1, 2)))
            .x_axis(
                Axis::default()
                    .title(self.sweep.variable.axis_label(&self.currency))
                    .style(Style::default().fg(Color::Gray))
                    .bounds([x_min, x_max])
                    .labels(axis_labels(x_min, x_max)),
            )
            .y_axis(
                Axis::default()
                    .title(format!("Cost ({})", self.currency))
                    .style(Style::default().fg(Color::Gray))
                    .bounds([y_min, y_max])
                    .labels(axis_labels(y_min, y_max)),
            );

        f.render_widget(chart, area);
    }

    fn render_result(&self, f: &mut Frame, area: Rect) {
        let content: Vec<Line> = match &self.result {
            ResultArea::Empty => vec![Line::from(Span::styled(
                "Press Enter to generate curves for the current parameters",
                Style::default().fg(Color::DarkGray),
            ))],
            ResultArea::Summary(lines) => lines
                .iter()
                .enumerate()
                .map(|(idx, line)| {
                    if idx == 0 {
                        Line::from(Span::styled(
                            line.clone(),
                            Style::default().add_modifier(Modifier::BOLD),
                        ))
                    } else {
                        Line::from(line.clone())
                    }
                })
                .collect(),
            ResultArea::Warning(message) => vec![Line::from(Span::styled(
                message.clone(),
                Style::default().fg(Color::Red),
            ))],
        };

        let paragraph = Paragraph::new(content)
            .wrap(Wrap { trim: true })
            .block(Block::default().borders(Borders::ALL).title("Result"));
        f.render_widget(paragraph, area);
    }

    fn render_footer(&self, f: &mut Frame, area: Rect) {
        let help = Line::from(Span::styled(
            "Tab/↑↓ move | ←→ or 1-3 variable | Enter/g generate | q/Esc quit",
            Style::default().fg(Color::DarkGray),
        ));
        let paragraph = Paragraph::new(help).block(Block::default().borders(Borders::ALL));
        f.render_widget(paragraph, area);
    }

    fn field_line(&self, field: Field, label: &str) -> Line<'static> {
        let mut spans = vec![Span::raw(label.to_string())];
        spans.extend(self.field_spans(field));
        Line::from(spans)
    }

    fn field_spans(&self, field: Field) -> Vec<Span<'static>> {
        let text = self.field_text(field).unwrap_or_default().to_string();
        let focused = self.focus == field;
        let mut spans = vec![Span::styled(format!("[{}", text), focus_style(focused))];
        if focused {
            spans.push(Span::styled("▏", Style::default().fg(Color::Yellow)));
        }
        spans.push(Span::styled("]", focus_style(focused)));
        spans
    }
}

fn focus_style(focused: bool) -> Style {
    if focused {
        Style::default().fg(Color::Black).bg(Color::Yellow)
    } else {
        Style::default().fg(Color::White)
    }
}

/// Widen cost bounds by 5% so the curves do not sit on the chart border
fn padded_bounds((lo, hi): (f64, f64)) -> (f64, f64) {
    let span = hi - lo;
    let pad = if span > 0.0 {
        span * 0.05
    } else {
        (lo.abs() * 0.1).max(1.0)
    };
    (lo - pad, hi + pad)
}

fn axis_labels(lo: f64, hi: f64) -> Vec<Span<'static>> {
    let mid = (lo + hi) / 2.0;
    [lo, mid, hi]
        .iter()
        .map(|v| Span::raw(format_tick(*v)))
        .collect()
}

fn format_tick(value: f64) -> String {
    if value.abs() >= 100.0 {
        format!("{:.0}", value)
    } else {
        format!("{:.2}", value)
    }
}
