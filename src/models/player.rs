//! Player and PlayerStats data structures.

use crate::models::throw::DartThrow;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a player.
pub type PlayerId = Uuid;

/// Cumulative match statistics for one player.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct PlayerStats {
    pub total_points: u32,
    pub total_darts: u32,
    /// 3-dart average snapshot taken at the end of each turn.
    pub history: Vec<f64>,
    pub wins: u32,
}

impl PlayerStats {
    /// 3-dart average: `(points / darts) * 3`, or 0 before the first dart.
    pub fn average(&self) -> f64 {
        if self.total_darts == 0 {
            return 0.0;
        }
        (self.total_points as f64 / self.total_darts as f64) * 3.0
    }

    /// Count one dart; a bust dart scores nothing.
    pub fn record_dart(&mut self, points: u32) {
        self.total_points += points;
        self.total_darts += 1;
    }

    /// Push the current average onto the history (turn boundary).
    pub fn close_turn(&mut self) {
        let avg = self.average();
        self.history.push(avg);
    }

    /// Record a leg win for this player.
    pub fn add_win(&mut self) {
        self.wins += 1;
    }

    /// Zero points, darts and history. Wins survive.
    pub fn clear_scoring(&mut self) {
        self.total_points = 0;
        self.total_darts = 0;
        self.history.clear();
    }
}

/// A player in the match.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub id: PlayerId,
    pub name: String,
    /// Remaining score. Only confirmed-legal throws lower it.
    pub score: u32,
    pub stats: PlayerStats,
    /// Darts thrown in the current turn (max 3).
    pub current_turn: Vec<DartThrow>,
}

impl Player {
    /// Create a player at `starting_score` with fresh stats.
    pub fn new(name: impl Into<String>, starting_score: u32) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            score: starting_score,
            stats: PlayerStats::default(),
            current_turn: Vec::new(),
        }
    }

    /// 3-dart average over the whole match so far.
    pub fn average(&self) -> f64 {
        self.stats.average()
    }

    /// Most recent dart of the current turn, if any.
    pub fn last_throw(&self) -> Option<&DartThrow> {
        self.current_turn.last()
    }

    /// Back to `starting_score` with an empty turn. Stats are left alone.
    pub fn reset_leg(&mut self, starting_score: u32) {
        self.score = starting_score;
        self.current_turn.clear();
    }
}
