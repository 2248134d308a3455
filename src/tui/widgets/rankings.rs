// Rankings widget: the filterable table of undrafted players, sorted
// descending by fantasy score.
//
// Columns: rank, name, team, position, GP, per-game stats, FPPG, Total.
// Filtered by position_filter and filter_text from ViewState; drafted
// players never appear.

use ratatui::layout::{Constraint, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Borders, Cell, Paragraph, Row, Table, TableState};
use ratatui::Frame;

use crate::protocol::DataStatus;
use crate::stats::PlayerRecord;
use crate::tui::ViewState;
use crate::view;

use super::focused_border_style;

/// Render the rankings table into the given area.
pub fn render(frame: &mut Frame, area: Rect, state: &ViewState, focused: bool) {
    let border = focused_border_style(focused, Style::default());
    let block = Block::default().borders(Borders::ALL).border_style(border);

    if state.loading {
        let paragraph = Paragraph::new("  Loading player data...")
            .style(Style::default().fg(Color::Yellow))
            .block(block.title("Rankings"));
        frame.render_widget(paragraph, area);
        return;
    }

    if state.players.is_empty() {
        let message = match state.data_status {
            DataStatus::Failed => "  No data available. Press 'r' to retry.",
            _ => "  No data loaded yet. Press 'r' to refresh.",
        };
        let paragraph = Paragraph::new(message)
            .style(Style::default().fg(Color::DarkGray))
            .block(block.title("Rankings"));
        frame.render_widget(paragraph, area);
        return;
    }

    let filter = state.filter_set();
    let filtered = view::filter_records(&state.players, &state.drafted, &filter);

    if filtered.is_empty() {
        let paragraph = Paragraph::new("  No players match the current filters.")
            .style(Style::default().fg(Color::DarkGray))
            .block(block.title(build_title(state, 0)));
        frame.render_widget(paragraph, area);
        return;
    }

    let header = Row::new(vec![
        Cell::from("#"),
        Cell::from("Player"),
        Cell::from("Team"),
        Cell::from("Pos"),
        Cell::from("GP"),
        Cell::from("PTS"),
        Cell::from("REB"),
        Cell::from("AST"),
        Cell::from("STL"),
        Cell::from("BLK"),
        Cell::from("TO"),
        Cell::from("FPPG"),
        Cell::from("Total"),
    ])
    .style(
        Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::BOLD),
    );

    let rows: Vec<Row> = filtered
        .iter()
        .enumerate()
        .map(|(i, p)| player_row(i, p))
        .collect();

    let widths = [
        Constraint::Length(4),
        Constraint::Min(16),
        Constraint::Length(5),
        Constraint::Length(4),
        Constraint::Length(4),
        Constraint::Length(5),
        Constraint::Length(5),
        Constraint::Length(5),
        Constraint::Length(5),
        Constraint::Length(5),
        Constraint::Length(5),
        Constraint::Length(6),
        Constraint::Length(7),
    ];

    let table = Table::new(rows, widths)
        .header(header)
        .block(block.title(build_title(state, filtered.len())))
        .row_highlight_style(
            Style::default()
                .bg(Color::DarkGray)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol(">> ");

    let mut table_state = TableState::default().with_selected(Some(state.selected));
    frame.render_stateful_widget(table, area, &mut table_state);
}

fn player_row<'a>(index: usize, p: &'a PlayerRecord) -> Row<'a> {
    Row::new(vec![
        Cell::from(format!("{}", index + 1)),
        Cell::from(p.name.as_str()),
        Cell::from(p.team.as_str()),
        Cell::from(p.position.display_str()),
        Cell::from(format!("{}", p.games_played)),
        Cell::from(format!("{:.1}", p.points)),
        Cell::from(format!("{:.1}", p.rebounds)),
        Cell::from(format!("{:.1}", p.assists)),
        Cell::from(format!("{:.1}", p.steals)),
        Cell::from(format!("{:.1}", p.blocks)),
        Cell::from(format!("{:.1}", p.turnovers)),
        Cell::from(format!("{:.2}", p.fantasy_score)),
        Cell::from(format!("{:.1}", p.season_total)),
    ])
}

/// Build the title with filter info and the visible row count.
fn build_title(state: &ViewState, filtered_count: usize) -> Line<'static> {
    let mut title = String::from("Rankings");
    if let Some(ref pos) = state.position_filter {
        title.push_str(&format!(" [{}]", pos.display_str()));
    }
    if !state.filter_text.is_empty() {
        title.push_str(&format!(" \"{}\"", state.filter_text));
    }
    title.push_str(&format!(" ({})", filtered_count));
    Line::from(title)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stats::position::Position;

    fn record(name: &str, pos: Position, score: f64) -> PlayerRecord {
        PlayerRecord {
            name: name.to_string(),
            team: "TST".to_string(),
            position: pos,
            games_played: 60,
            points: 20.0,
            rebounds: 5.0,
            assists: 5.0,
            steals: 1.0,
            blocks: 1.0,
            turnovers: 2.0,
            fantasy_score: score,
            season_total: score * 60.0,
        }
    }

    #[test]
    fn render_does_not_panic_with_defaults() {
        let backend = ratatui::backend::TestBackend::new(100, 30);
        let mut terminal = ratatui::Terminal::new(backend).unwrap();
        let state = ViewState::default();
        terminal
            .draw(|frame| render(frame, frame.area(), &state, true))
            .unwrap();
    }

    #[test]
    fn render_does_not_panic_with_players() {
        let backend = ratatui::backend::TestBackend::new(100, 30);
        let mut terminal = ratatui::Terminal::new(backend).unwrap();
        let mut state = ViewState::default();
        state.players = vec![
            record("Player A", Position::Center, 40.0),
            record("Player B", Position::PointGuard, 35.0),
        ];
        terminal
            .draw(|frame| render(frame, frame.area(), &state, false))
            .unwrap();
    }

    #[test]
    fn render_does_not_panic_when_loading() {
        let backend = ratatui::backend::TestBackend::new(100, 30);
        let mut terminal = ratatui::Terminal::new(backend).unwrap();
        let mut state = ViewState::default();
        state.loading = true;
        terminal
            .draw(|frame| render(frame, frame.area(), &state, false))
            .unwrap();
    }

    #[test]
    fn render_does_not_panic_when_all_filtered_out() {
        let backend = ratatui::backend::TestBackend::new(100, 30);
        let mut terminal = ratatui::Terminal::new(backend).unwrap();
        let mut state = ViewState::default();
        state.players = vec![record("Player A", Position::Center, 40.0)];
        state.filter_text = "no such player".to_string();
        terminal
            .draw(|frame| render(frame, frame.area(), &state, false))
            .unwrap();
    }

    #[test]
    fn title_reflects_filters_and_count() {
        let mut state = ViewState::default();
        state.position_filter = Some(Position::Center);
        state.filter_text = "jok".to_string();
        let title = build_title(&state, 3);
        let text: String = title.spans.iter().map(|s| s.content.clone()).collect();
        assert_eq!(text, "Rankings [C] \"jok\" (3)");
    }

    #[test]
    fn title_plain_when_unfiltered() {
        let state = ViewState::default();
        let title = build_title(&state, 25);
        let text: String = title.spans.iter().map(|s| s.content.clone()).collect();
        assert_eq!(text, "Rankings (25)");
    }
}
