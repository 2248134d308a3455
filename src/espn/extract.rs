// Tolerant extraction of player entries from ESPN JSON responses.
//
// The three candidate endpoints return differently shaped payloads: the
// fantasy endpoint wraps each player in an entry with a `player` object and
// a numeric-keyed stats map, while the sports-core endpoints return athlete
// objects with nested `statistics.seasons`. Extraction never fails: missing
// or malformed fields are defaulted and a bad entry is skipped with a
// warning rather than aborting the batch.

use serde_json::Value;
use tracing::warn;

// ---------------------------------------------------------------------------
// RawPlayer
// ---------------------------------------------------------------------------

/// One player entry as pulled from a provider response: season totals plus
/// identity fields. Totals are converted to per-game averages by the
/// normalizer; this type stays as close to the wire as possible.
#[derive(Debug, Clone, PartialEq)]
pub struct RawPlayer {
    pub name: String,
    pub team: String,
    pub position: String,
    pub games_played: f64,
    pub points: f64,
    pub rebounds: f64,
    pub assists: f64,
    pub steals: f64,
    pub blocks: f64,
    pub turnovers: f64,
}

// ---------------------------------------------------------------------------
// Entry-list detection
// ---------------------------------------------------------------------------

/// Extract all player entries from a response body.
///
/// Recognizes the list under `athletes`, `items`, or `players` (whichever
/// the responding endpoint uses). An unrecognized body yields an empty vec,
/// which the fetch chain treats as "no usable entries, try the next source".
pub fn extract_players(body: &Value) -> Vec<RawPlayer> {
    let Some(entries) = entry_list(body) else {
        warn!("no athletes/items/players list found in response");
        return Vec::new();
    };

    entries.iter().filter_map(extract_entry).collect()
}

fn entry_list(body: &Value) -> Option<&Vec<Value>> {
    for key in ["athletes", "items", "players"] {
        if let Some(list) = body.get(key).and_then(Value::as_array) {
            return Some(list);
        }
    }
    None
}

// ---------------------------------------------------------------------------
// Per-entry extraction
// ---------------------------------------------------------------------------

/// Extract a single entry, dispatching on its shape.
fn extract_entry(entry: &Value) -> Option<RawPlayer> {
    if !entry.is_object() {
        warn!("skipping non-object player entry");
        return None;
    }
    if entry.get("player").is_some() {
        extract_fantasy_entry(entry)
    } else {
        extract_athlete_entry(entry)
    }
}

/// Fantasy-endpoint shape: `{ "player": { fullName, proTeamId,
/// defaultPositionId }, "stats": [ { statSourceId, stats: { "0": gp, ... } } ] }`.
///
/// The numeric stat keys follow ESPN's fantasy basketball mapping:
/// 0 = games played, 1 = points, 2 = rebounds, 3 = assists, 4 = steals,
/// 5 = blocks, 6 = turnovers.
fn extract_fantasy_entry(entry: &Value) -> Option<RawPlayer> {
    let player = entry.get("player")?;

    let name = string_field(player, &["fullName", "displayName", "name"])
        .unwrap_or("Unknown")
        .to_string();
    let team = player
        .get("proTeamId")
        .and_then(Value::as_u64)
        .map(team_abbreviation)
        .unwrap_or("UNK")
        .to_string();
    let position = player
        .get("defaultPositionId")
        .and_then(Value::as_u64)
        .map(position_abbreviation)
        .unwrap_or("UNK")
        .to_string();

    // Season totals live in the stat entry with statSourceId 0.
    let season_stats = entry
        .get("stats")
        .and_then(Value::as_array)
        .and_then(|stats| {
            stats.iter().find(|s| {
                s.get("statSourceId").and_then(Value::as_u64) == Some(0)
            })
        })
        .and_then(|s| s.get("stats"))?;

    Some(RawPlayer {
        name,
        team,
        position,
        games_played: num_field(season_stats, "0"),
        points: num_field(season_stats, "1"),
        rebounds: num_field(season_stats, "2"),
        assists: num_field(season_stats, "3"),
        steals: num_field(season_stats, "4"),
        blocks: num_field(season_stats, "5"),
        turnovers: num_field(season_stats, "6"),
    })
}

/// Sports-core shape: `{ displayName, team: { abbreviation | id },
/// position: { abbreviation | id }, statistics: { seasons: [ { stats: {
/// gamesPlayed, points, ... } } ] } }`. Stats may be absent entirely, in
/// which case every total defaults to zero (and the normalizer drops the
/// row for having no games played).
fn extract_athlete_entry(entry: &Value) -> Option<RawPlayer> {
    let name = string_field(entry, &["displayName", "fullName", "name"])
        .unwrap_or("Unknown")
        .to_string();

    let team = entry
        .get("team")
        .and_then(|t| {
            t.get("abbreviation")
                .and_then(Value::as_str)
                .map(str::to_string)
                .or_else(|| {
                    t.get("id")
                        .and_then(Value::as_u64)
                        .map(|id| team_abbreviation(id).to_string())
                })
        })
        .unwrap_or_else(|| "UNK".to_string());

    let position = entry
        .get("position")
        .and_then(|p| {
            p.get("abbreviation")
                .and_then(Value::as_str)
                .map(str::to_string)
                .or_else(|| {
                    p.get("id")
                        .and_then(Value::as_u64)
                        .map(|id| position_abbreviation(id).to_string())
                })
        })
        .unwrap_or_else(|| "UNK".to_string());

    // Most recent season's stats block, when present.
    let season_stats = entry
        .get("statistics")
        .and_then(|s| s.get("seasons"))
        .and_then(Value::as_array)
        .and_then(|seasons| seasons.last())
        .and_then(|season| season.get("stats"));

    let stats = match season_stats {
        Some(stats) => RawPlayer {
            name,
            team,
            position,
            games_played: num_field(stats, "gamesPlayed"),
            points: num_field(stats, "points"),
            rebounds: num_field(stats, "rebounds"),
            assists: num_field(stats, "assists"),
            steals: num_field(stats, "steals"),
            blocks: num_field(stats, "blocks"),
            turnovers: num_field(stats, "turnovers"),
        },
        None => RawPlayer {
            name,
            team,
            position,
            games_played: 0.0,
            points: 0.0,
            rebounds: 0.0,
            assists: 0.0,
            steals: 0.0,
            blocks: 0.0,
            turnovers: 0.0,
        },
    };

    Some(stats)
}

// ---------------------------------------------------------------------------
// Field helpers
// ---------------------------------------------------------------------------

/// Return the first present non-empty string value among the given keys.
fn string_field<'a>(value: &'a Value, keys: &[&str]) -> Option<&'a str> {
    keys.iter().find_map(|key| {
        value
            .get(key)
            .and_then(Value::as_str)
            .filter(|s| !s.is_empty())
    })
}

/// Numeric field with a zero default. Non-numeric values default rather
/// than reject: one bad field never drops the record.
fn num_field(value: &Value, key: &str) -> f64 {
    value.get(key).and_then(Value::as_f64).unwrap_or(0.0)
}

/// ESPN team id to abbreviation mapping.
pub(crate) fn team_abbreviation(id: u64) -> &'static str {
    match id {
        1 => "ATL",
        2 => "BOS",
        3 => "BKN",
        4 => "CHA",
        5 => "CHI",
        6 => "CLE",
        7 => "DAL",
        8 => "DEN",
        9 => "DET",
        10 => "GSW",
        11 => "HOU",
        12 => "IND",
        13 => "LAC",
        14 => "LAL",
        15 => "MEM",
        16 => "MIA",
        17 => "MIL",
        18 => "MIN",
        19 => "NO",
        20 => "NY",
        21 => "OKC",
        22 => "ORL",
        23 => "PHI",
        24 => "PHX",
        25 => "POR",
        26 => "SAC",
        27 => "SA",
        28 => "TOR",
        29 => "UTA",
        30 => "WSH",
        _ => "UNK",
    }
}

/// ESPN position id to abbreviation mapping.
pub(crate) fn position_abbreviation(id: u64) -> &'static str {
    match id {
        1 => "PG",
        2 => "SG",
        3 => "SF",
        4 => "PF",
        5 => "C",
        _ => "UNK",
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
