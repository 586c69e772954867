//! Scoreboard: read-only display snapshot built from a Match.

use crate::models::game::{Match, DARTS_PER_TURN};
use crate::models::player::Player;
use serde::Serialize;

/// Placeholder for a turn slot that has not been thrown yet.
pub const EMPTY_SLOT: &str = "--";

/// One player's panel.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct PlayerBoard {
    pub name: String,
    pub score: u32,
    pub average: f64,
    pub wins: u32,
    pub is_active: bool,
    pub is_winner: bool,
    /// Always 3 entries: thrown labels, padded with `EMPTY_SLOT`.
    pub slots: Vec<String>,
    /// Checkout hint; only filled for the active player.
    pub checkout: String,
}

/// One point of the average chart. `None` where a player has no turn at that index yet.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct AverageRow {
    pub round: usize,
    pub player_1: Option<f64>,
    pub player_2: Option<f64>,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Scoreboard {
    /// e.g. "501 (DO)".
    pub mode_label: String,
    pub round: u32,
    pub players: [PlayerBoard; 2],
    pub turn_over: bool,
    pub winner_name: Option<String>,
    pub averages: Vec<AverageRow>,
}

impl Scoreboard {
    /// Build the snapshot from the current match state.
    pub fn from_match(m: &Match) -> Self {
        let board = |idx: usize| -> PlayerBoard {
            let p = &m.players[idx];
            let is_active = m.current_player == idx && !m.is_finished();
            PlayerBoard {
                name: p.name.clone(),
                score: p.score,
                average: p.average(),
                wins: p.stats.wins,
                is_active,
                is_winner: m.winner == Some(idx),
                slots: slots(p),
                checkout: if is_active { m.checkout_hint().to_string() } else { String::new() },
            }
        };
        let mode_label = if m.double_out {
            format!("{} (DO)", m.mode.starting_score())
        } else {
            m.mode.starting_score().to_string()
        };
        Self {
            mode_label,
            round: m.round,
            players: [board(0), board(1)],
            turn_over: m.is_turn_over(),
            winner_name: m.winner.map(|w| m.players[w].name.clone()),
            averages: average_rows(&m.players[0], &m.players[1]),
        }
    }
}

fn slots(p: &Player) -> Vec<String> {
    (0..DARTS_PER_TURN)
        .map(|i| {
            p.current_turn
                .get(i)
                .map(|d| d.label.clone())
                .unwrap_or_else(|| EMPTY_SLOT.to_string())
        })
        .collect()
}

fn average_rows(p1: &Player, p2: &Player) -> Vec<AverageRow> {
    let len = p1.stats.history.len().max(p2.stats.history.len());
    (0..len)
        .map(|i| AverageRow {
            round: i + 1,
            player_1: p1.stats.history.get(i).copied(),
            player_2: p2.stats.history.get(i).copied(),
        })
        .collect()
}
