// Application state and orchestration logic.
//
// The central loop that owns the dataset and draft board, performs the
// initial load, and processes user commands from the TUI. All mutable
// state has a single writer: this task.

use std::path::Path;

use chrono::{DateTime, Local};
use tokio::sync::mpsc;
use tracing::{info, warn};

use crate::config::Config;
use crate::draft::DraftBoard;
use crate::espn::client::{DataSource, StatsClient};
use crate::export;
use crate::protocol::{DataStatus, DatasetSnapshot, UiUpdate, UserCommand};
use crate::stats::{normalize, PlayerRecord};
use crate::view;

// ---------------------------------------------------------------------------
// AppState
// ---------------------------------------------------------------------------

/// The complete application state.
pub struct AppState {
    pub config: Config,
    pub client: StatsClient,
    /// The normalized ranking table, replaced wholesale on each refresh.
    pub players: Vec<PlayerRecord>,
    /// Session-scoped draft tracking; preserved across refreshes.
    pub draft: DraftBoard,
    pub status: DataStatus,
    pub last_refresh: Option<DateTime<Local>>,
}

impl AppState {
    pub fn new(config: Config, client: StatsClient) -> Self {
        AppState {
            config,
            client,
            players: Vec::new(),
            draft: DraftBoard::new(),
            status: DataStatus::NotLoaded,
            last_refresh: None,
        }
    }
}

// ---------------------------------------------------------------------------
// Orchestrator loop
// ---------------------------------------------------------------------------

/// Run the app orchestrator: perform the initial load, then process user
/// commands until `Quit` arrives or the command channel closes.
pub async fn run(
    mut cmd_rx: mpsc::Receiver<UserCommand>,
    ui_tx: mpsc::Sender<UiUpdate>,
    mut state: AppState,
) -> anyhow::Result<()> {
    // Initial load so the dashboard never starts on an empty table.
    refresh(&mut state, &ui_tx).await;

    while let Some(cmd) = cmd_rx.recv().await {
        match cmd {
            UserCommand::Refresh => {
                refresh(&mut state, &ui_tx).await;
            }
            UserCommand::Draft(name) => {
                if state.draft.mark(&name) {
                    info!(player = %name, "marked drafted");
                }
                send_draft_changed(&state, &ui_tx).await;
            }
            UserCommand::Undraft(name) => {
                if state.draft.unmark(&name) {
                    info!(player = %name, "unmarked drafted");
                }
                send_draft_changed(&state, &ui_tx).await;
            }
            UserCommand::ClearDrafted => {
                info!(count = state.draft.len(), "cleared draft board");
                state.draft.clear();
                send_draft_changed(&state, &ui_tx).await;
            }
            UserCommand::Export { format, filter } => {
                let visible = view::filter_records(&state.players, &state.draft, &filter);
                let dir = state.config.export.dir.clone();
                match export::write_export(Path::new(&dir), format, &visible) {
                    Ok(path) => {
                        info!(path = %path.display(), rows = visible.len(), "export written");
                        let _ = ui_tx.send(UiUpdate::ExportCompleted(path)).await;
                    }
                    Err(e) => {
                        warn!("export failed: {e}");
                        let _ = ui_tx.send(UiUpdate::ExportFailed(e.to_string())).await;
                    }
                }
            }
            UserCommand::Quit => {
                info!("quit command received");
                break;
            }
        }
    }

    Ok(())
}

/// Re-fetch player data through the fallback chain, normalize it, and
/// replace the dataset. The draft board is untouched.
async fn refresh(state: &mut AppState, ui_tx: &mpsc::Sender<UiUpdate>) {
    let _ = ui_tx.send(UiUpdate::Loading).await;

    info!(season = state.config.resolved_season(), "refreshing player data");
    let outcome = state.client.fetch_players().await;
    let players = normalize::normalize(&outcome.players, &state.config.scoring);

    state.status = if players.is_empty() {
        warn!("fetch produced zero usable records");
        DataStatus::Failed
    } else {
        match outcome.source {
            DataSource::Live { endpoint } => DataStatus::Live { endpoint },
            DataSource::Sample => DataStatus::Sample,
        }
    };
    state.players = players;
    state.last_refresh = Some(Local::now());

    info!(
        count = state.players.len(),
        status = state.status.label(),
        "dataset replaced"
    );

    let _ = ui_tx
        .send(UiUpdate::Dataset(Box::new(DatasetSnapshot {
            players: state.players.clone(),
            status: state.status.clone(),
            last_refresh: state.last_refresh,
        })))
        .await;
}

async fn send_draft_changed(state: &AppState, ui_tx: &mpsc::Sender<UiUpdate>) {
    let _ = ui_tx.send(UiUpdate::DraftChanged(state.draft.clone())).await;
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
