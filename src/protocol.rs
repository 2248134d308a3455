// Message types exchanged between the TUI and the app orchestrator.
//
// The TUI translates key presses into `UserCommand`s; the orchestrator
// owns all mutable state and pushes `UiUpdate`s back for rendering.

use std::path::PathBuf;

use chrono::{DateTime, Local};

use crate::draft::DraftBoard;
use crate::export::ExportFormat;
use crate::stats::PlayerRecord;
use crate::view::FilterSet;

// ---------------------------------------------------------------------------
// Data status
// ---------------------------------------------------------------------------

/// Qualitative status of the loaded dataset, shown in the status bar.
#[derive(Debug, Clone, PartialEq)]
pub enum DataStatus {
    /// No load has completed yet.
    NotLoaded,
    /// A provider endpoint supplied the data.
    Live { endpoint: String },
    /// All endpoints failed; the built-in sample set is loaded.
    Sample,
    /// The fetch produced zero usable records even after the fallback.
    Failed,
}

impl DataStatus {
    pub fn label(&self) -> &'static str {
        match self {
            DataStatus::NotLoaded => "not loaded",
            DataStatus::Live { .. } => "live data",
            DataStatus::Sample => "sample data",
            DataStatus::Failed => "fetch failed",
        }
    }
}

// ---------------------------------------------------------------------------
// Commands and updates
// ---------------------------------------------------------------------------

/// Commands sent from the TUI to the app orchestrator.
#[derive(Debug, Clone, PartialEq)]
pub enum UserCommand {
    /// Re-fetch player data and replace the dataset wholesale.
    Refresh,
    /// Mark a player as drafted.
    Draft(String),
    /// Remove a player from the draft board.
    Undraft(String),
    /// Clear the entire draft board.
    ClearDrafted,
    /// Export the currently visible subset under the given filters.
    Export {
        format: ExportFormat,
        filter: FilterSet,
    },
    /// Shut down the application.
    Quit,
}

/// A full dataset replacement pushed after a refresh completes.
#[derive(Debug, Clone, PartialEq)]
pub struct DatasetSnapshot {
    pub players: Vec<PlayerRecord>,
    pub status: DataStatus,
    pub last_refresh: Option<DateTime<Local>>,
}

/// Updates pushed from the app orchestrator to the TUI.
#[derive(Debug, Clone, PartialEq)]
pub enum UiUpdate {
    /// A refresh is in flight.
    Loading,
    /// The dataset was replaced.
    Dataset(Box<DatasetSnapshot>),
    /// The draft board changed.
    DraftChanged(DraftBoard),
    /// An export file was written.
    ExportCompleted(PathBuf),
    /// An export attempt failed.
    ExportFailed(String),
}
