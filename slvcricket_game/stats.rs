//! Aggregate figures derived from the current batting card.
//!
//! Everything here is a pure function of the player list and is recomputed
//! on every call.

use serde::Serialize;

use crate::models::player::Player;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchSummary {
    pub total_runs: u64,
    pub total_balls: u64,
    pub run_rate: String,
    pub player_count: usize,
    pub active_players: Vec<Player>,
    pub out_players: Vec<Player>,
    pub top_scorer: Option<Player>,
}

impl MatchSummary {
    pub fn from_players(players: &[Player]) -> Self {
        let total_runs = total_runs(players);
        let total_balls = total_balls(players);
        let (out_players, active_players): (Vec<Player>, Vec<Player>) =
            players.iter().cloned().partition(|p| p.is_out);

        Self {
            total_runs,
            total_balls,
            run_rate: run_rate(total_runs, total_balls),
            player_count: players.len(),
            active_players,
            out_players,
            top_scorer: top_scorer(players).cloned(),
        }
    }
}

pub fn total_runs(players: &[Player]) -> u64 {
    players.iter().map(|p| u64::from(p.runs)).sum()
}

pub fn total_balls(players: &[Player]) -> u64 {
    players.iter().map(|p| u64::from(p.balls)).sum()
}

/// Runs per six-ball over, with two decimals.
pub fn run_rate(runs: u64, balls: u64) -> String {
    if balls == 0 {
        return "0.00".to_string();
    }
    to_fixed(runs as f64 / balls as f64 * 6.0, 2)
}

/// Runs per hundred balls, with one decimal.
pub fn strike_rate(runs: u32, balls: u32) -> String {
    if balls == 0 {
        return "0.0".to_string();
    }
    to_fixed(f64::from(runs) / f64::from(balls) * 100.0, 1)
}

/// Highest run scorer; on a tie the earliest player in the list wins.
pub fn top_scorer(players: &[Player]) -> Option<&Player> {
    players
        .iter()
        .reduce(|top, p| if p.runs > top.runs { p } else { top })
}

// Halves round away from zero, so 6.25 becomes "6.3".
fn to_fixed(value: f64, decimals: u32) -> String {
    let factor = 10f64.powi(decimals as i32);
    let rounded = (value * factor).round() / factor;
    format!("{:.*}", decimals as usize, rounded)
}
