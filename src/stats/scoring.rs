// ESPN Points fantasy scoring: a fixed linear combination of the six
// per-game stat categories.

use serde::{Deserialize, Serialize};

/// Per-category multipliers for the fantasy score.
///
/// Defaults are the ESPN Points weights:
/// PTS x 1.0, REB x 1.2, AST x 1.5, STL x 3.0, BLK x 3.0, TO x -1.0.
/// Deserialized from the `[scoring]` table in settings.toml when present.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringWeights {
    pub points: f64,
    pub rebounds: f64,
    pub assists: f64,
    pub steals: f64,
    pub blocks: f64,
    pub turnovers: f64,
}

impl Default for ScoringWeights {
    fn default() -> Self {
        ScoringWeights {
            points: 1.0,
            rebounds: 1.2,
            assists: 1.5,
            steals: 3.0,
            blocks: 3.0,
            turnovers: -1.0,
        }
    }
}

impl ScoringWeights {
    /// Compute fantasy points from six per-game stat values, rounded to
    /// 2 decimals. Pure: the same inputs always produce the same score.
    pub fn score(&self, pts: f64, reb: f64, ast: f64, stl: f64, blk: f64, to: f64) -> f64 {
        round2(
            pts * self.points
                + reb * self.rebounds
                + ast * self.assists
                + stl * self.steals
                + blk * self.blocks
                + to * self.turnovers,
        )
    }

    /// True when every weight is a finite number.
    pub fn all_finite(&self) -> bool {
        [
            self.points,
            self.rebounds,
            self.assists,
            self.steals,
            self.blocks,
            self.turnovers,
        ]
        .iter()
        .all(|w| w.is_finite())
    }
}

/// Round to 1 decimal place (displayed per-game averages).
pub(crate) fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Round to 2 decimal places (fantasy score).
pub(crate) fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_weights_are_espn_points() {
        let w = ScoringWeights::default();
        assert!((w.points - 1.0).abs() < f64::EPSILON);
        assert!((w.rebounds - 1.2).abs() < f64::EPSILON);
        assert!((w.assists - 1.5).abs() < f64::EPSILON);
        assert!((w.steals - 3.0).abs() < f64::EPSILON);
        assert!((w.blocks - 3.0).abs() < f64::EPSILON);
        assert!((w.turnovers + 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn score_exact_formula() {
        // 25 + 10*1.2 + 5*1.5 + 2*3 + 1*3 - 3 = 50.5
        let w = ScoringWeights::default();
        let score = w.score(25.0, 10.0, 5.0, 2.0, 1.0, 3.0);
        assert!((score - 50.5).abs() < f64::EPSILON);
    }

    #[test]
    fn score_all_zero_inputs() {
        let w = ScoringWeights::default();
        assert_eq!(w.score(0.0, 0.0, 0.0, 0.0, 0.0, 0.0), 0.0);
    }

    #[test]
    fn score_turnovers_subtract() {
        let w = ScoringWeights::default();
        let clean = w.score(20.0, 5.0, 5.0, 1.0, 1.0, 0.0);
        let sloppy = w.score(20.0, 5.0, 5.0, 1.0, 1.0, 4.0);
        assert!((clean - sloppy - 4.0).abs() < 1e-9);
    }

    #[test]
    fn score_is_deterministic() {
        let w = ScoringWeights::default();
        let a = w.score(27.3, 7.1, 8.9, 1.3, 0.6, 3.5);
        let b = w.score(27.3, 7.1, 8.9, 1.3, 0.6, 3.5);
        assert_eq!(a, b);
    }

    #[test]
    fn score_rounds_to_two_decimals() {
        let w = ScoringWeights::default();
        // 10.123 * 1.0 = 10.123 -> 10.12
        let score = w.score(10.123, 0.0, 0.0, 0.0, 0.0, 0.0);
        assert!((score - 10.12).abs() < f64::EPSILON);
    }

    #[test]
    fn custom_weights_respected() {
        let w = ScoringWeights {
            points: 2.0,
            rebounds: 0.0,
            assists: 0.0,
            steals: 0.0,
            blocks: 0.0,
            turnovers: 0.0,
        };
        assert_eq!(w.score(10.0, 99.0, 99.0, 99.0, 99.0, 99.0), 20.0);
    }

    #[test]
    fn all_finite_detects_bad_weight() {
        let mut w = ScoringWeights::default();
        assert!(w.all_finite());
        w.blocks = f64::NAN;
        assert!(!w.all_finite());
        w.blocks = f64::INFINITY;
        assert!(!w.all_finite());
    }

    #[test]
    fn rounding_helpers() {
        assert_eq!(round1(12.34), 12.3);
        assert_eq!(round1(12.36), 12.4);
        assert_eq!(round2(12.346), 12.35);
        assert_eq!(round2(12.344), 12.34);
    }
}
