// Normalization: heterogeneous raw entries into the uniform ranking table.
//
// Pure and total: malformed fields have already been defaulted during
// extraction, rows with no games played are dropped here, and the result
// is sorted descending by fantasy score with a stable sort so equal scores
// keep their source order.

use tracing::warn;

use crate::espn::extract::RawPlayer;
use crate::stats::position::Position;
use crate::stats::scoring::{round1, ScoringWeights};
use crate::stats::PlayerRecord;

/// Convert raw season-total entries into per-game `PlayerRecord`s, compute
/// the fantasy score for each, and sort the table descending by score.
///
/// Rows with zero games played are excluded before scoring. The fantasy
/// score is computed from the unrounded per-game averages; the stored
/// per-game values are rounded to one decimal for display.
pub fn normalize(raw: &[RawPlayer], weights: &ScoringWeights) -> Vec<PlayerRecord> {
    let mut records: Vec<PlayerRecord> = raw
        .iter()
        .filter_map(|entry| normalize_entry(entry, weights))
        .collect();

    // Stable sort: ties keep their original relative order.
    records.sort_by(|a, b| {
        b.fantasy_score
            .partial_cmp(&a.fantasy_score)
            .unwrap_or(std::cmp::Ordering::Equal)
    });

    records
}

fn normalize_entry(raw: &RawPlayer, weights: &ScoringWeights) -> Option<PlayerRecord> {
    if !raw.games_played.is_finite() || raw.games_played < 1.0 {
        return None;
    }
    let gp = raw.games_played;

    let per_game = |total: f64| if total.is_finite() { total / gp } else { 0.0 };

    let pts = per_game(raw.points);
    let reb = per_game(raw.rebounds);
    let ast = per_game(raw.assists);
    let stl = per_game(raw.steals);
    let blk = per_game(raw.blocks);
    let to = per_game(raw.turnovers);

    let fantasy_score = weights.score(pts, reb, ast, stl, blk, to);
    if !fantasy_score.is_finite() {
        warn!("skipping '{}': non-finite fantasy score", raw.name);
        return None;
    }

    let name = raw.name.trim();
    let team = raw.team.trim();

    Some(PlayerRecord {
        name: if name.is_empty() { "Unknown".to_string() } else { name.to_string() },
        team: if team.is_empty() { "UNK".to_string() } else { team.to_string() },
        position: Position::from_abbrev(&raw.position),
        games_played: gp.round() as u32,
        points: round1(pts),
        rebounds: round1(reb),
        assists: round1(ast),
        steals: round1(stl),
        blocks: round1(blk),
        turnovers: round1(to),
        fantasy_score,
        season_total: round1(fantasy_score * gp),
    })
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(name: &str, gp: f64, pts: f64, reb: f64, ast: f64, stl: f64, blk: f64, to: f64) -> RawPlayer {
        RawPlayer {
            name: name.to_string(),
            team: "TST".to_string(),
            position: "PG".to_string(),
            games_played: gp,
            points: pts,
            rebounds: reb,
            assists: ast,
            steals: stl,
            blocks: blk,
            turnovers: to,
        }
    }

    #[test]
    fn per_game_division_and_score() {
        // 10 games: 250 pts, 100 reb, 50 ast, 20 stl, 10 blk, 30 to
        // per game: 25 / 10 / 5 / 2 / 1 / 3 -> FPPG 50.5
        let records = normalize(
            &[raw("Test", 10.0, 250.0, 100.0, 50.0, 20.0, 10.0, 30.0)],
            &ScoringWeights::default(),
        );
        assert_eq!(records.len(), 1);
        let r = &records[0];
        assert_eq!(r.games_played, 10);
        assert_eq!(r.points, 25.0);
        assert_eq!(r.rebounds, 10.0);
        assert_eq!(r.assists, 5.0);
        assert_eq!(r.steals, 2.0);
        assert_eq!(r.blocks, 1.0);
        assert_eq!(r.turnovers, 3.0);
        assert!((r.fantasy_score - 50.5).abs() < f64::EPSILON);
        assert!((r.season_total - 505.0).abs() < f64::EPSILON);
    }

    #[test]
    fn zero_games_excluded() {
        let records = normalize(
            &[
                raw("Played", 50.0, 1000.0, 0.0, 0.0, 0.0, 0.0, 0.0),
                raw("Benched", 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0),
            ],
            &ScoringWeights::default(),
        );
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].name, "Played");
    }

    #[test]
    fn fractional_games_below_one_excluded() {
        let records = normalize(
            &[raw("Ghost", 0.5, 10.0, 0.0, 0.0, 0.0, 0.0, 0.0)],
            &ScoringWeights::default(),
        );
        assert!(records.is_empty());
    }

    #[test]
    fn sorted_descending_by_score() {
        let records = normalize(
            &[
                raw("Low", 10.0, 100.0, 0.0, 0.0, 0.0, 0.0, 0.0),
                raw("High", 10.0, 300.0, 0.0, 0.0, 0.0, 0.0, 0.0),
                raw("Mid", 10.0, 200.0, 0.0, 0.0, 0.0, 0.0, 0.0),
            ],
            &ScoringWeights::default(),
        );
        let names: Vec<&str> = records.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["High", "Mid", "Low"]);
    }

    #[test]
    fn equal_scores_keep_source_order() {
        let records = normalize(
            &[
                raw("First", 10.0, 200.0, 0.0, 0.0, 0.0, 0.0, 0.0),
                raw("Second", 10.0, 200.0, 0.0, 0.0, 0.0, 0.0, 0.0),
                raw("Third", 10.0, 200.0, 0.0, 0.0, 0.0, 0.0, 0.0),
            ],
            &ScoringWeights::default(),
        );
        let names: Vec<&str> = records.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["First", "Second", "Third"]);
    }

    #[test]
    fn blank_identity_fields_defaulted() {
        let mut entry = raw("  ", 10.0, 100.0, 0.0, 0.0, 0.0, 0.0, 0.0);
        entry.team = String::new();
        entry.position = "??".to_string();
        let records = normalize(&[entry], &ScoringWeights::default());
        assert_eq!(records[0].name, "Unknown");
        assert_eq!(records[0].team, "UNK");
        assert_eq!(records[0].position, Position::Unknown);
    }

    #[test]
    fn names_and_teams_trimmed() {
        let mut entry = raw("  Trae Young  ", 10.0, 100.0, 0.0, 0.0, 0.0, 0.0, 0.0);
        entry.team = " ATL ".to_string();
        let records = normalize(&[entry], &ScoringWeights::default());
        assert_eq!(records[0].name, "Trae Young");
        assert_eq!(records[0].team, "ATL");
    }

    #[test]
    fn per_game_values_rounded_one_decimal() {
        // 1234 points over 63 games = 19.587... -> 19.6
        let records = normalize(
            &[raw("Rounder", 63.0, 1234.0, 0.0, 0.0, 0.0, 0.0, 0.0)],
            &ScoringWeights::default(),
        );
        assert_eq!(records[0].points, 19.6);
    }

    #[test]
    fn score_computed_from_unrounded_per_game() {
        // 1234 / 63 = 19.5873...; FPPG rounds the raw value (19.59), not
        // the display-rounded 19.6.
        let records = normalize(
            &[raw("Rounder", 63.0, 1234.0, 0.0, 0.0, 0.0, 0.0, 0.0)],
            &ScoringWeights::default(),
        );
        assert!((records[0].fantasy_score - 19.59).abs() < f64::EPSILON);
    }

    #[test]
    fn non_finite_totals_default_to_zero() {
        let records = normalize(
            &[raw("Weird", 10.0, f64::NAN, f64::INFINITY, 0.0, 0.0, 0.0, 0.0)],
            &ScoringWeights::default(),
        );
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].points, 0.0);
        assert_eq!(records[0].rebounds, 0.0);
        assert_eq!(records[0].fantasy_score, 0.0);
    }

    #[test]
    fn empty_input_yields_empty_table() {
        assert!(normalize(&[], &ScoringWeights::default()).is_empty());
    }

    #[test]
    fn sample_dataset_normalizes_fully() {
        let records = normalize(&crate::stats::sample::sample_players(), &ScoringWeights::default());
        assert_eq!(records.len(), 25);
        // Doncic's line scores highest in the sample set (64.15 FPPG).
        assert_eq!(records[0].name, "Luka Doncic");
        assert!((records[0].fantasy_score - 64.15).abs() < 0.01);
        // Sorted descending throughout.
        for pair in records.windows(2) {
            assert!(pair[0].fantasy_score >= pair[1].fantasy_score);
        }
    }
}
