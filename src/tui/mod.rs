// TUI dashboard: layout, input handling, and widget rendering.
//
// The TUI owns a `ViewState` that mirrors relevant parts of the application
// state. The app orchestrator pushes `UiUpdate` messages over an mpsc
// channel; the TUI applies them to `ViewState` and re-renders at ~30 fps.

pub mod input;
pub mod layout;
pub mod widgets;

use std::time::Duration;

use chrono::{DateTime, Local};
use crossterm::event::{Event, EventStream, KeyCode, KeyModifiers};
use futures_util::StreamExt;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;
use tokio::sync::mpsc;

use crate::draft::DraftBoard;
use crate::export::ExportFormat;
use crate::protocol::{DataStatus, UiUpdate, UserCommand};
use crate::stats::position::Position;
use crate::stats::PlayerRecord;
use crate::view::{self, FilterSet};

use layout::build_layout;

// ---------------------------------------------------------------------------
// PanelFocus
// ---------------------------------------------------------------------------

/// Which panel receives selection keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelFocus {
    Rankings,
    Drafted,
}

// ---------------------------------------------------------------------------
// ViewState
// ---------------------------------------------------------------------------

/// TUI-local state that mirrors the application state for rendering.
///
/// Updated incrementally via `UiUpdate` messages from the app orchestrator.
/// Filters, selection, and the export-format choice are purely local.
pub struct ViewState {
    /// The normalized ranking table (full, unfiltered).
    pub players: Vec<PlayerRecord>,
    /// Mirror of the draft board.
    pub drafted: DraftBoard,
    /// Qualitative status of the loaded dataset.
    pub data_status: DataStatus,
    /// When the dataset was last replaced.
    pub last_refresh: Option<DateTime<Local>>,
    /// Whether a refresh is in flight.
    pub loading: bool,
    /// Current name-search text.
    pub filter_text: String,
    /// Whether the search input is capturing keystrokes.
    pub filter_mode: bool,
    /// Position filter; `None` means all positions.
    pub position_filter: Option<Position>,
    /// Selected row in the rankings table (index into the filtered view).
    pub selected: usize,
    /// Selected row in the drafted panel.
    pub drafted_selected: usize,
    /// Which panel receives selection keys.
    pub focus: PanelFocus,
    /// Export format for the next export action.
    pub export_format: ExportFormat,
    /// Transient status-line message (export results, errors).
    pub status_message: Option<String>,
    /// Whether the quit confirmation prompt is active.
    pub confirm_quit: bool,
}

impl Default for ViewState {
    fn default() -> Self {
        ViewState {
            players: Vec::new(),
            drafted: DraftBoard::new(),
            data_status: DataStatus::NotLoaded,
            last_refresh: None,
            loading: false,
            filter_text: String::new(),
            filter_mode: false,
            position_filter: None,
            selected: 0,
            drafted_selected: 0,
            focus: PanelFocus::Rankings,
            export_format: ExportFormat::Csv,
            status_message: None,
            confirm_quit: false,
        }
    }
}

impl ViewState {
    /// The active filters as a `FilterSet` for the view functions.
    pub fn filter_set(&self) -> FilterSet {
        FilterSet {
            position: self.position_filter,
            search: self.filter_text.clone(),
        }
    }

    /// Number of rows in the filtered rankings view.
    pub fn visible_len(&self) -> usize {
        view::filter_records(&self.players, &self.drafted, &self.filter_set()).len()
    }

    /// Name of the player at the current rankings selection, if any.
    pub fn selected_player(&self) -> Option<String> {
        view::filter_records(&self.players, &self.drafted, &self.filter_set())
            .get(self.selected)
            .map(|r| r.name.clone())
    }

    /// Name of the drafted player at the drafted-panel selection, if any.
    pub fn selected_drafted(&self) -> Option<String> {
        self.drafted
            .names()
            .nth(self.drafted_selected)
            .map(str::to_string)
    }

    /// Keep both selections inside their lists after the data changes.
    pub fn clamp_selections(&mut self) {
        let visible = self.visible_len();
        if visible == 0 {
            self.selected = 0;
        } else if self.selected >= visible {
            self.selected = visible - 1;
        }

        let drafted = self.drafted.len();
        if drafted == 0 {
            self.drafted_selected = 0;
        } else if self.drafted_selected >= drafted {
            self.drafted_selected = drafted - 1;
        }
    }
}

// ---------------------------------------------------------------------------
// UiUpdate processing
// ---------------------------------------------------------------------------

/// Apply a single UiUpdate to the ViewState.
pub fn apply_ui_update(state: &mut ViewState, update: UiUpdate) {
    match update {
        UiUpdate::Loading => {
            state.loading = true;
        }
        UiUpdate::Dataset(snapshot) => {
            state.players = snapshot.players;
            state.data_status = snapshot.status;
            state.last_refresh = snapshot.last_refresh;
            state.loading = false;
            state.clamp_selections();
        }
        UiUpdate::DraftChanged(board) => {
            state.drafted = board;
            state.clamp_selections();
        }
        UiUpdate::ExportCompleted(path) => {
            state.status_message = Some(format!("Exported {}", path.display()));
        }
        UiUpdate::ExportFailed(message) => {
            state.status_message = Some(format!("Export failed: {message}"));
        }
    }
}

// ---------------------------------------------------------------------------
// Frame rendering
// ---------------------------------------------------------------------------

/// Render the complete dashboard frame.
fn render_frame(frame: &mut Frame, state: &ViewState) {
    let layout = build_layout(frame.area());

    widgets::status_bar::render(frame, layout.status_bar, state);
    widgets::rankings::render(frame, layout.rankings, state, state.focus == PanelFocus::Rankings);
    widgets::summary::render(frame, layout.summary, state);
    widgets::drafted::render(frame, layout.drafted, state, state.focus == PanelFocus::Drafted);
    widgets::distribution::render(frame, layout.distribution, state);
    render_help_bar(frame, layout.help_bar, state);
}

fn render_help_bar(frame: &mut Frame, area: ratatui::layout::Rect, state: &ViewState) {
    let text = if state.confirm_quit {
        " Quit? y:Yes  n:No".to_string()
    } else if state.filter_mode {
        format!(" Search: {}_  (Enter:Apply  Esc:Clear)", state.filter_text)
    } else {
        format!(
            " q:Quit | r:Refresh | /:Search | p:Pos | d:Draft/Undraft | Tab:Panel | c:Clear | e:Format({}) | x:Export",
            state.export_format.label()
        )
    };
    let paragraph = Paragraph::new(Line::from(vec![Span::styled(
        text,
        Style::default().fg(Color::White).add_modifier(Modifier::DIM),
    )]))
    .style(Style::default().bg(Color::DarkGray));
    frame.render_widget(paragraph, area);
}

// ---------------------------------------------------------------------------
// Main TUI loop
// ---------------------------------------------------------------------------

/// Run the TUI event loop.
///
/// This is the main entry point for the terminal UI. It:
/// 1. Initializes the terminal (enters raw mode, enables alternate screen).
/// 2. Installs a panic hook to restore the terminal on crash.
/// 3. Runs an async select loop: UI updates, keyboard input, render ticks.
/// 4. Restores the terminal on clean exit.
pub async fn run(
    mut ui_rx: mpsc::Receiver<UiUpdate>,
    cmd_tx: mpsc::Sender<UserCommand>,
) -> anyhow::Result<()> {
    let mut terminal = ratatui::init();

    // Restore the terminal on crash; chain the original hook after ours.
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = ratatui::restore();
        original_hook(panic_info);
    }));

    let mut view_state = ViewState::default();
    let mut event_stream = EventStream::new();

    // ~30 fps render tick.
    let mut render_tick = tokio::time::interval(Duration::from_millis(33));
    render_tick.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Skip);

    loop {
        tokio::select! {
            // UI updates from the app orchestrator
            update = ui_rx.recv() => {
                match update {
                    Some(ui_update) => {
                        apply_ui_update(&mut view_state, ui_update);
                    }
                    None => {
                        // Channel closed: app is shutting down
                        break;
                    }
                }
            }

            // Keyboard input
            maybe_event = event_stream.next() => {
                match maybe_event {
                    Some(Ok(Event::Key(key_event))) => {
                        // Ctrl+C always quits immediately (escape hatch).
                        if key_event.code == KeyCode::Char('c')
                            && key_event.modifiers.contains(KeyModifiers::CONTROL)
                        {
                            let _ = cmd_tx.send(UserCommand::Quit).await;
                            break;
                        }
                        if let Some(cmd) = input::handle_key(key_event, &mut view_state) {
                            let is_quit = matches!(cmd, UserCommand::Quit);
                            let _ = cmd_tx.send(cmd).await;
                            if is_quit {
                                break;
                            }
                        }
                    }
                    Some(Ok(_)) => {
                        // Mouse events, resize events, etc. -- ignore
                    }
                    Some(Err(_)) | None => {
                        // Input error or stream ended
                        break;
                    }
                }
            }

            // Render tick
            _ = render_tick.tick() => {
                terminal.draw(|frame| render_frame(frame, &view_state))?;
            }
        }
    }

    ratatui::restore();

    Ok(())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
