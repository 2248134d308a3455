// Player statistics: position taxonomy, fantasy scoring, and the
// normalization step that turns raw provider entries into the uniform
// per-game ranking table.

pub mod normalize;
pub mod position;
pub mod sample;
pub mod scoring;

use serde::{Deserialize, Serialize};

use position::Position;

/// One row of the normalized ranking table: a single player's per-game
/// season line plus the derived fantasy score.
///
/// All stat fields are per-game averages (season totals divided by games
/// played), rounded to one decimal place for display. `fantasy_score` is
/// computed from the unrounded per-game values and rounded to two decimals.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerRecord {
    pub name: String,
    /// Team abbreviation, or "UNK" when the provider did not report one.
    pub team: String,
    pub position: Position,
    pub games_played: u32,
    pub points: f64,
    pub rebounds: f64,
    pub assists: f64,
    pub steals: f64,
    pub blocks: f64,
    pub turnovers: f64,
    /// Fantasy points per game (FPPG), rounded to 2 decimals.
    pub fantasy_score: f64,
    /// Season fantasy total: FPPG x games played, rounded to 1 decimal.
    pub season_total: f64,
}
