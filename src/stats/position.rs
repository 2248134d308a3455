// Basketball position taxonomy used for filtering and the distribution panel.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The five NBA positions plus an `Unknown` sentinel for players whose
/// position the provider did not report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Position {
    PointGuard,
    ShootingGuard,
    SmallForward,
    PowerForward,
    Center,
    Unknown,
}

/// The known positions in display order. `Unknown` is deliberately excluded:
/// it is never offered as a filter choice, only shown when data forces it.
pub const KNOWN_POSITIONS: &[Position] = &[
    Position::PointGuard,
    Position::ShootingGuard,
    Position::SmallForward,
    Position::PowerForward,
    Position::Center,
];

impl Position {
    /// Parse a provider position abbreviation. Anything unrecognized maps to
    /// `Unknown` rather than failing; one odd record must not abort a batch.
    pub fn from_abbrev(s: &str) -> Self {
        match s.trim().to_uppercase().as_str() {
            "PG" => Position::PointGuard,
            "SG" => Position::ShootingGuard,
            "SF" => Position::SmallForward,
            "PF" => Position::PowerForward,
            "C" => Position::Center,
            // ESPN sometimes reports generic guard/forward; fold them onto
            // the nearest concrete slot the way the draft tools expect.
            "G" => Position::PointGuard,
            "F" => Position::SmallForward,
            _ => Position::Unknown,
        }
    }

    /// Map an ESPN numeric position id (1..=5) to a Position.
    pub fn from_espn_id(id: u64) -> Self {
        match id {
            1 => Position::PointGuard,
            2 => Position::ShootingGuard,
            3 => Position::SmallForward,
            4 => Position::PowerForward,
            5 => Position::Center,
            _ => Position::Unknown,
        }
    }

    /// Return the display string for this position.
    pub fn display_str(&self) -> &'static str {
        match self {
            Position::PointGuard => "PG",
            Position::ShootingGuard => "SG",
            Position::SmallForward => "SF",
            Position::PowerForward => "PF",
            Position::Center => "C",
            Position::Unknown => "UNK",
        }
    }

    /// Deterministic ordering index for the distribution panel.
    pub fn sort_order(&self) -> u8 {
        match self {
            Position::PointGuard => 0,
            Position::ShootingGuard => 1,
            Position::SmallForward => 2,
            Position::PowerForward => 3,
            Position::Center => 4,
            Position::Unknown => 5,
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_str())
    }
}
