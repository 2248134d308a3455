// Status bar widget: data-source indicator, counts, and last refresh time.

use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use crate::protocol::DataStatus;
use crate::tui::ViewState;

/// Render the status bar into the given area.
///
/// Layout: [source indicator] [player counts] [last refresh] [message]
pub fn render(frame: &mut Frame, area: Rect, state: &ViewState) {
    let mut spans = Vec::new();

    let (dot, dot_color) = source_indicator(&state.data_status);
    spans.push(Span::styled(format!(" {dot} "), Style::default().fg(dot_color)));
    spans.push(Span::styled(
        status_label(state),
        Style::default().fg(Color::White),
    ));

    spans.push(Span::styled(" | ", Style::default().fg(Color::Gray)));
    spans.push(Span::styled(
        format!(
            "{} players, {} drafted",
            state.players.len(),
            state.drafted.len()
        ),
        Style::default().fg(Color::White),
    ));

    if let Some(refreshed) = state.last_refresh {
        spans.push(Span::styled(" | ", Style::default().fg(Color::Gray)));
        spans.push(Span::styled(
            format!("updated {}", refreshed.format("%H:%M:%S")),
            Style::default().fg(Color::Gray),
        ));
    }

    if let Some(ref message) = state.status_message {
        spans.push(Span::styled(" | ", Style::default().fg(Color::Gray)));
        spans.push(Span::styled(
            message.clone(),
            Style::default().fg(Color::Cyan),
        ));
    }

    let paragraph =
        Paragraph::new(Line::from(spans)).style(Style::default().bg(Color::Black));
    frame.render_widget(paragraph, area);
}

/// Return the source dot character and its color.
pub fn source_indicator(status: &DataStatus) -> (&'static str, Color) {
    match status {
        DataStatus::Live { .. } => ("●", Color::Green),
        DataStatus::Sample => ("●", Color::Yellow),
        DataStatus::Failed => ("●", Color::Red),
        DataStatus::NotLoaded => ("○", Color::DarkGray),
    }
}

fn status_label(state: &ViewState) -> String {
    if state.loading {
        "loading...".to_string()
    } else {
        state.data_status.label().to_string()
    }
}
