// Built-in sample dataset used when every provider endpoint fails.
//
// Season-total lines for 25 well-known players, so the rest of the system
// always has non-empty input to rank, filter, and export.

use crate::espn::extract::RawPlayer;

/// Raw tuple form: (name, team, position, gp, pts, reb, ast, stl, blk, to).
type SampleLine = (&'static str, &'static str, &'static str, f64, f64, f64, f64, f64, f64, f64);

const SAMPLE_LINES: &[SampleLine] = &[
    ("Nikola Jokic", "DEN", "C", 70.0, 2100.0, 700.0, 600.0, 100.0, 50.0, 200.0),
    ("Luka Doncic", "DAL", "PG", 65.0, 2200.0, 600.0, 700.0, 120.0, 30.0, 250.0),
    ("Joel Embiid", "PHI", "C", 60.0, 2000.0, 800.0, 300.0, 80.0, 120.0, 180.0),
    ("Giannis Antetokounmpo", "MIL", "PF", 68.0, 1900.0, 750.0, 400.0, 90.0, 80.0, 220.0),
    ("Jayson Tatum", "BOS", "SF", 72.0, 1800.0, 500.0, 350.0, 100.0, 60.0, 200.0),
    ("Stephen Curry", "GSW", "PG", 58.0, 1600.0, 300.0, 400.0, 80.0, 20.0, 180.0),
    ("LeBron James", "LAL", "SF", 55.0, 1400.0, 400.0, 450.0, 70.0, 40.0, 200.0),
    ("Kevin Durant", "PHX", "SF", 62.0, 1700.0, 450.0, 300.0, 60.0, 80.0, 190.0),
    ("Damian Lillard", "MIL", "PG", 60.0, 1500.0, 250.0, 500.0, 70.0, 15.0, 200.0),
    ("Anthony Davis", "LAL", "PF", 65.0, 1600.0, 700.0, 200.0, 80.0, 150.0, 180.0),
    ("Jimmy Butler", "MIA", "SF", 58.0, 1200.0, 400.0, 350.0, 100.0, 30.0, 150.0),
    ("Kawhi Leonard", "LAC", "SF", 50.0, 1100.0, 350.0, 250.0, 80.0, 40.0, 120.0),
    ("Paul George", "LAC", "SF", 55.0, 1300.0, 400.0, 300.0, 90.0, 50.0, 160.0),
    ("Russell Westbrook", "LAC", "PG", 52.0, 1000.0, 400.0, 500.0, 80.0, 20.0, 200.0),
    ("Kyrie Irving", "DAL", "PG", 48.0, 1200.0, 200.0, 400.0, 60.0, 15.0, 150.0),
    ("Devin Booker", "PHX", "SG", 65.0, 1500.0, 300.0, 350.0, 70.0, 25.0, 180.0),
    ("Bradley Beal", "PHX", "SG", 60.0, 1400.0, 250.0, 300.0, 60.0, 20.0, 170.0),
    ("Donovan Mitchell", "CLE", "SG", 68.0, 1600.0, 300.0, 400.0, 80.0, 30.0, 190.0),
    ("Trae Young", "ATL", "PG", 70.0, 1500.0, 250.0, 600.0, 70.0, 10.0, 250.0),
    ("Ja Morant", "MEM", "PG", 45.0, 1000.0, 200.0, 400.0, 50.0, 15.0, 150.0),
    ("Zion Williamson", "NO", "PF", 40.0, 900.0, 300.0, 200.0, 40.0, 30.0, 120.0),
    ("Karl-Anthony Towns", "MIN", "C", 65.0, 1500.0, 600.0, 300.0, 60.0, 80.0, 180.0),
    ("Rudy Gobert", "MIN", "C", 70.0, 800.0, 800.0, 100.0, 50.0, 120.0, 100.0),
    ("Bam Adebayo", "MIA", "C", 68.0, 1200.0, 600.0, 300.0, 80.0, 100.0, 150.0),
    ("Pascal Siakam", "IND", "PF", 70.0, 1400.0, 500.0, 350.0, 70.0, 60.0, 160.0),
];

/// Build the sample dataset as raw player entries, ready for normalization.
pub fn sample_players() -> Vec<RawPlayer> {
    SAMPLE_LINES
        .iter()
        .map(|&(name, team, position, gp, pts, reb, ast, stl, blk, to)| RawPlayer {
            name: name.to_string(),
            team: team.to_string(),
            position: position.to_string(),
            games_played: gp,
            points: pts,
            rebounds: reb,
            assists: ast,
            steals: stl,
            blocks: blk,
            turnovers: to,
        })
        .collect()
}
