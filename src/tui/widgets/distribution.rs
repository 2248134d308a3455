// Distribution widget: FPPG by position over the visible subset.
//
// One row per position with a gauge bar scaled to the best position mean,
// plus count and min-max range.

use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, List, ListItem, Paragraph};
use ratatui::Frame;

use crate::tui::ViewState;
use crate::view::{self, PositionBucket};

const BAR_WIDTH: usize = 10;

/// Render the per-position FPPG distribution into the given area.
pub fn render(frame: &mut Frame, area: Rect, state: &ViewState) {
    let filter = state.filter_set();
    let visible = view::filter_records(&state.players, &state.drafted, &filter);
    let buckets = view::position_breakdown(&visible);

    let block = Block::default()
        .borders(Borders::ALL)
        .title("FPPG by Position");

    if buckets.is_empty() {
        let paragraph = Paragraph::new("  No distribution data.")
            .style(Style::default().fg(Color::DarkGray))
            .block(block);
        frame.render_widget(paragraph, area);
        return;
    }

    let max_mean = buckets
        .iter()
        .map(|b| b.mean_score)
        .fold(f64::NEG_INFINITY, f64::max);

    let items: Vec<ListItem> = buckets
        .iter()
        .map(|bucket| format_bucket(bucket, max_mean))
        .collect();

    let list = List::new(items).block(block);
    frame.render_widget(list, area);
}

/// Format one bucket as a ListItem with a visual gauge.
fn format_bucket<'a>(bucket: &PositionBucket, max_mean: f64) -> ListItem<'a> {
    let bar = mean_bar(bucket.mean_score, max_mean);
    let spans = vec![
        Span::styled(
            format!(" {:>3} ", bucket.position.display_str()),
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
        ),
        Span::styled(bar, Style::default().fg(Color::Green)),
        Span::styled(
            format!(" {:>5.1}", bucket.mean_score),
            Style::default().fg(Color::White),
        ),
        Span::styled(
            format!(" ({:>2}) {:.1}-{:.1}", bucket.count, bucket.min_score, bucket.max_score),
            Style::default().fg(Color::DarkGray),
        ),
    ];
    ListItem::new(Line::from(spans))
}

/// Gauge bar scaled so the highest position mean fills the bar.
pub fn mean_bar(mean: f64, max_mean: f64) -> String {
    let filled = if max_mean > 0.0 && mean > 0.0 {
        ((mean / max_mean) * BAR_WIDTH as f64).round() as usize
    } else {
        0
    };
    let filled = filled.min(BAR_WIDTH);
    format!("[{}{}]", "#".repeat(filled), "-".repeat(BAR_WIDTH - filled))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
