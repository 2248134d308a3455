// Screen layout: panel arrangement and sizing.
//
// Divides the terminal area into fixed zones for the draft dashboard:
//
// +--------------------------------------------------+
// | Status Bar (1 row)                                |
// +-------------------------+------------------------+
// | Rankings (62%)           | Sidebar (38%)          |
// |                          | +- Summary (25%) -----+|
// |                          | +- Drafted (40%) -----+|
// |                          | +- Distribution (35%)-+|
// +-------------------------+------------------------+
// | Help Bar (1 row)                                  |
// +--------------------------------------------------+

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Resolved screen areas for each dashboard zone.
#[derive(Debug, Clone)]
pub struct AppLayout {
    /// Top row: data-source status, counts, last refresh.
    pub status_bar: Rect,
    /// Left side: the ranked player table.
    pub rankings: Rect,
    /// Sidebar top: summary metrics.
    pub summary: Rect,
    /// Sidebar middle: the draft tracker.
    pub drafted: Rect,
    /// Sidebar bottom: FPPG distribution by position.
    pub distribution: Rect,
    /// Bottom row: keyboard shortcut hints.
    pub help_bar: Rect,
}

/// Build the dashboard layout from the available terminal area.
pub fn build_layout(area: Rect) -> AppLayout {
    // Vertical: status(1) | middle(fill) | help(1)
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // status bar
            Constraint::Min(10),   // middle section (rankings + sidebar)
            Constraint::Length(1), // help bar
        ])
        .split(area);

    let status_bar = vertical[0];
    let middle = vertical[1];
    let help_bar = vertical[2];

    // Horizontal: rankings (62%) | sidebar (38%)
    let horizontal = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(62), Constraint::Percentage(38)])
        .split(middle);

    let rankings = horizontal[0];
    let sidebar = horizontal[1];

    // Sidebar vertical: summary (25%) | drafted (40%) | distribution (35%)
    let sidebar_sections = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage(25),
            Constraint::Percentage(40),
            Constraint::Percentage(35),
        ])
        .split(sidebar);

    AppLayout {
        status_bar,
        rankings,
        summary: sidebar_sections[0],
        drafted: sidebar_sections[1],
        distribution: sidebar_sections[2],
        help_bar,
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    /// A reasonable terminal size for testing.
    fn test_area() -> Rect {
        Rect::new(0, 0, 160, 50)
    }

    #[test]
    fn layout_all_rects_nonzero() {
        let layout = build_layout(test_area());
        let rects = [
            ("status_bar", layout.status_bar),
            ("rankings", layout.rankings),
            ("summary", layout.summary),
            ("drafted", layout.drafted),
            ("distribution", layout.distribution),
            ("help_bar", layout.help_bar),
        ];
        for (name, rect) in &rects {
            assert!(
                rect.width > 0 && rect.height > 0,
                "{} has zero area: {:?}",
                name,
                rect
            );
        }
    }

    #[test]
    fn layout_bars_are_single_rows() {
        let layout = build_layout(test_area());
        assert_eq!(layout.status_bar.height, 1);
        assert_eq!(layout.help_bar.height, 1);
    }

    #[test]
    fn layout_rankings_wider_than_sidebar() {
        let layout = build_layout(test_area());
        assert!(layout.rankings.width > layout.summary.width);
    }

    #[test]
    fn layout_sidebar_sections_stack_vertically() {
        let layout = build_layout(test_area());
        assert!(layout.summary.y < layout.drafted.y);
        assert!(layout.drafted.y < layout.distribution.y);
    }

    #[test]
    fn layout_fits_within_area() {
        let area = test_area();
        let layout = build_layout(area);
        let all_rects = [
            layout.status_bar,
            layout.rankings,
            layout.summary,
            layout.drafted,
            layout.distribution,
            layout.help_bar,
        ];
        for rect in &all_rects {
            assert!(rect.x + rect.width <= area.width, "rect {rect:?} exceeds width");
            assert!(rect.y + rect.height <= area.height, "rect {rect:?} exceeds height");
        }
    }

    #[test]
    fn layout_small_terminal_still_valid() {
        let area = Rect::new(0, 0, 40, 16);
        let layout = build_layout(area);
        let rects = [
            layout.status_bar,
            layout.rankings,
            layout.summary,
            layout.drafted,
            layout.distribution,
            layout.help_bar,
        ];
        for rect in &rects {
            assert!(
                rect.width > 0 && rect.height > 0,
                "small terminal: rect {rect:?} has zero area"
            );
        }
    }
}
