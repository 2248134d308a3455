// Draft tracker widget: the list of drafted players with undraft selection.

use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Block, Borders, List, ListItem, ListState, Paragraph};
use ratatui::Frame;

use crate::tui::ViewState;

use super::focused_border_style;

/// Render the draft tracker into the given area.
///
/// When `focused` is true, the border is highlighted and the selected entry
/// can be undrafted with Enter/'d'.
pub fn render(frame: &mut Frame, area: Rect, state: &ViewState, focused: bool) {
    let border = focused_border_style(focused, Style::default());
    let title = format!("Drafted ({})", state.drafted.len());
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border)
        .title(title);

    if state.drafted.is_empty() {
        let paragraph = Paragraph::new("  No players drafted yet.")
            .style(Style::default().fg(Color::DarkGray))
            .block(block);
        frame.render_widget(paragraph, area);
        return;
    }

    let items: Vec<ListItem> = state
        .drafted
        .names()
        .map(|name| ListItem::new(format!(" {name}")))
        .collect();

    let list = List::new(items)
        .block(block)
        .highlight_style(
            Style::default()
                .bg(Color::DarkGray)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol(">");

    let mut list_state = ListState::default();
    if focused {
        list_state.select(Some(state.drafted_selected));
    }
    frame.render_stateful_widget(list, area, &mut list_state);
}
