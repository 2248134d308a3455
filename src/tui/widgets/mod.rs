// TUI widget modules for each dashboard panel.

pub mod distribution;
pub mod drafted;
pub mod rankings;
pub mod status_bar;
pub mod summary;

use ratatui::style::{Color, Style};

/// Border style for a panel, highlighted when it has keyboard focus.
pub fn focused_border_style(focused: bool, base: Style) -> Style {
    if focused {
        base.fg(Color::Cyan)
    } else {
        base
    }
}
