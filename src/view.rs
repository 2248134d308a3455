// Pure view functions over the ranking table: filtering, summary metrics,
// and the per-position breakdown. Shared by the TUI widgets and the
// exporter so the exported rows always match what is on screen.

use crate::draft::DraftBoard;
use crate::stats::position::{Position, KNOWN_POSITIONS};
use crate::stats::PlayerRecord;

// ---------------------------------------------------------------------------
// Filtering
// ---------------------------------------------------------------------------

/// The active view filters: an optional position and a name search string.
/// An empty filter set shows every non-drafted player.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterSet {
    pub position: Option<Position>,
    pub search: String,
}

/// Apply draft exclusion, position filter, and case-insensitive name
/// substring search. Input order is preserved, so the result stays sorted
/// the way the dataset is sorted.
pub fn filter_records<'a>(
    records: &'a [PlayerRecord],
    draft: &DraftBoard,
    filter: &FilterSet,
) -> Vec<&'a PlayerRecord> {
    let needle = filter.search.to_lowercase();

    records
        .iter()
        .filter(|r| !draft.is_drafted(&r.name))
        .filter(|r| filter.position.map_or(true, |pos| r.position == pos))
        .filter(|r| needle.is_empty() || r.name.to_lowercase().contains(&needle))
        .collect()
}

// ---------------------------------------------------------------------------
// Summary metrics
// ---------------------------------------------------------------------------

/// Aggregates over the currently visible subset.
#[derive(Debug, Clone, PartialEq)]
pub struct Summary {
    pub count: usize,
    /// Mean fantasy score, 0.0 when the subset is empty.
    pub mean_score: f64,
    /// Highest-ranked visible player (name, score).
    pub top: Option<(String, f64)>,
}

pub fn summarize(records: &[&PlayerRecord]) -> Summary {
    let count = records.len();
    let mean_score = if count == 0 {
        0.0
    } else {
        records.iter().map(|r| r.fantasy_score).sum::<f64>() / count as f64
    };
    let top = records
        .first()
        .map(|r| (r.name.clone(), r.fantasy_score));

    Summary {
        count,
        mean_score,
        top,
    }
}

// ---------------------------------------------------------------------------
// Position breakdown
// ---------------------------------------------------------------------------

/// Score distribution for one position over the visible subset.
#[derive(Debug, Clone, PartialEq)]
pub struct PositionBucket {
    pub position: Position,
    pub count: usize,
    pub mean_score: f64,
    pub min_score: f64,
    pub max_score: f64,
}

/// Per-position buckets in fixed display order. Positions with no visible
/// players are omitted; an `Unknown` bucket appears only when the data
/// contains unknown-position rows.
pub fn position_breakdown(records: &[&PlayerRecord]) -> Vec<PositionBucket> {
    let mut buckets = Vec::new();

    let mut order: Vec<Position> = KNOWN_POSITIONS.to_vec();
    order.push(Position::Unknown);

    for pos in order {
        let scores: Vec<f64> = records
            .iter()
            .filter(|r| r.position == pos)
            .map(|r| r.fantasy_score)
            .collect();
        if scores.is_empty() {
            continue;
        }

        let count = scores.len();
        let mean_score = scores.iter().sum::<f64>() / count as f64;
        let min_score = scores.iter().cloned().fold(f64::INFINITY, f64::min);
        let max_score = scores.iter().cloned().fold(f64::NEG_INFINITY, f64::max);

        buckets.push(PositionBucket {
            position: pos,
            count,
            mean_score,
            min_score,
            max_score,
        });
    }

    buckets
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

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

    fn sample_table() -> Vec<PlayerRecord> {
        vec![
            record("LeBron James", Position::SmallForward, 55.0),
            record("Stephen Curry", Position::PointGuard, 50.0),
            record("Nikola Jokic", Position::Center, 48.0),
            record("James Harden", Position::PointGuard, 40.0),
        ]
    }

    #[test]
    fn no_filters_returns_everything() {
        let table = sample_table();
        let visible = filter_records(&table, &DraftBoard::new(), &FilterSet::default());
        assert_eq!(visible.len(), 4);
    }

    #[test]
    fn position_filter_single_position() {
        let table = sample_table();
        let filter = FilterSet {
            position: Some(Position::PointGuard),
            search: String::new(),
        };
        let visible = filter_records(&table, &DraftBoard::new(), &filter);
        assert_eq!(visible.len(), 2);
        assert!(visible.iter().all(|r| r.position == Position::PointGuard));
    }

    #[test]
    fn search_is_case_insensitive_substring() {
        let table = sample_table();
        let filter = FilterSet {
            position: None,
            search: "jam".to_string(),
        };
        let visible = filter_records(&table, &DraftBoard::new(), &filter);
        // "jam" matches both "LeBron James" and "James Harden".
        assert_eq!(visible.len(), 2);
        assert_eq!(visible[0].name, "LeBron James");
        assert_eq!(visible[1].name, "James Harden");
    }

    #[test]
    fn drafted_players_excluded() {
        let table = sample_table();
        let mut board = DraftBoard::new();
        board.mark("Stephen Curry");
        let visible = filter_records(&table, &board, &FilterSet::default());
        assert_eq!(visible.len(), 3);
        assert!(!visible.iter().any(|r| r.name == "Stephen Curry"));
    }

    #[test]
    fn unmark_restores_player() {
        let table = sample_table();
        let mut board = DraftBoard::new();
        board.mark("Stephen Curry");
        board.unmark("Stephen Curry");
        let visible = filter_records(&table, &board, &FilterSet::default());
        assert_eq!(visible.len(), 4);
    }

    #[test]
    fn filters_compose() {
        let table = sample_table();
        let mut board = DraftBoard::new();
        board.mark("James Harden");
        let filter = FilterSet {
            position: Some(Position::PointGuard),
            search: "e".to_string(),
        };
        let visible = filter_records(&table, &board, &filter);
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].name, "Stephen Curry");
    }

    #[test]
    fn filter_preserves_order() {
        let table = sample_table();
        let visible = filter_records(&table, &DraftBoard::new(), &FilterSet::default());
        let names: Vec<&str> = visible.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(
            names,
            vec!["LeBron James", "Stephen Curry", "Nikola Jokic", "James Harden"]
        );
    }

    #[test]
    fn summarize_basic() {
        let table = sample_table();
        let visible = filter_records(&table, &DraftBoard::new(), &FilterSet::default());
        let summary = summarize(&visible);
        assert_eq!(summary.count, 4);
        assert!((summary.mean_score - 48.25).abs() < 1e-9);
        assert_eq!(summary.top, Some(("LeBron James".to_string(), 55.0)));
    }

    #[test]
    fn summarize_empty() {
        let summary = summarize(&[]);
        assert_eq!(summary.count, 0);
        assert_eq!(summary.mean_score, 0.0);
        assert!(summary.top.is_none());
    }

    #[test]
    fn breakdown_groups_and_orders() {
        let table = sample_table();
        let visible = filter_records(&table, &DraftBoard::new(), &FilterSet::default());
        let buckets = position_breakdown(&visible);

        // PG, SF, C present; display order is PG before SF before C.
        assert_eq!(buckets.len(), 3);
        assert_eq!(buckets[0].position, Position::PointGuard);
        assert_eq!(buckets[0].count, 2);
        assert!((buckets[0].mean_score - 45.0).abs() < 1e-9);
        assert_eq!(buckets[0].min_score, 40.0);
        assert_eq!(buckets[0].max_score, 50.0);
        assert_eq!(buckets[1].position, Position::SmallForward);
        assert_eq!(buckets[2].position, Position::Center);
    }

    #[test]
    fn breakdown_includes_unknown_only_when_present() {
        let mut table = sample_table();
        let visible = filter_records(&table, &DraftBoard::new(), &FilterSet::default());
        assert!(position_breakdown(&visible)
            .iter()
            .all(|b| b.position != Position::Unknown));

        table.push(record("Mystery Man", Position::Unknown, 10.0));
        let visible = filter_records(&table, &DraftBoard::new(), &FilterSet::default());
        let buckets = position_breakdown(&visible);
        assert_eq!(buckets.last().unwrap().position, Position::Unknown);
    }

    #[test]
    fn breakdown_empty_input() {
        assert!(position_breakdown(&[]).is_empty());
    }
}
