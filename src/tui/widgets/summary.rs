// Summary widget: aggregate metrics over the currently visible subset.

use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use crate::tui::ViewState;
use crate::view;

/// Render the summary metrics into the given area.
pub fn render(frame: &mut Frame, area: Rect, state: &ViewState) {
    let filter = state.filter_set();
    let visible = view::filter_records(&state.players, &state.drafted, &filter);
    let summary = view::summarize(&visible);

    let top_line = match &summary.top {
        Some((name, score)) => format!("{name} ({score:.1})"),
        None => "--".to_string(),
    };
    let avg_line = if summary.count == 0 {
        "--".to_string()
    } else {
        format!("{:.1}", summary.mean_score)
    };

    let lines = vec![
        metric_line("Players", format!("{}", summary.count)),
        metric_line("Avg FPPG", avg_line),
        metric_line("Top", top_line),
        metric_line("Drafted", format!("{}", state.drafted.len())),
    ];

    let paragraph = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .title("Summary"),
    );
    frame.render_widget(paragraph, area);
}

fn metric_line(label: &str, value: String) -> Line<'static> {
    Line::from(vec![
        Span::styled(
            format!(" {label:<9}"),
            Style::default().fg(Color::DarkGray),
        ),
        Span::styled(value, Style::default().fg(Color::White).add_modifier(Modifier::BOLD)),
    ])
}
