//! Match state for a two-player countdown game (301/501).

use crate::models::player::Player;
use crate::models::throw::Multiplier;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a match.
pub type MatchId = Uuid;

/// Number of darts in a full turn.
pub const DARTS_PER_TURN: usize = 3;

pub const DEFAULT_PLAYER_1: &str = "Player 1";
pub const DEFAULT_PLAYER_2: &str = "Player 2";

/// Errors that can occur during match operations. The match is left untouched.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum MatchError {
    /// A winner is set; only reset or a new start are allowed.
    MatchFinished,
    /// The current turn already has 3 darts or ended in a bust.
    TurnOver,
    /// Next player requested while the current turn still has darts to throw.
    TurnInProgress,
    /// Segment does not exist on the board (e.g. 21, or triple bull).
    InvalidSegment { base: u8, multiplier: Multiplier },
    /// Multiplier outside 1-3.
    InvalidMultiplier(u8),
}

impl std::fmt::Display for MatchError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MatchError::MatchFinished => write!(f, "Match is over; reset or start a new match"),
            MatchError::TurnOver => write!(f, "Turn is over; advance to the next player"),
            MatchError::TurnInProgress => write!(f, "Current turn is not over yet"),
            MatchError::InvalidSegment { base, multiplier } => {
                write!(f, "No such segment: {} x{}", base, multiplier.factor())
            }
            MatchError::InvalidMultiplier(m) => write!(f, "Multiplier must be 1, 2 or 3 (got {})", m),
        }
    }
}

impl std::error::Error for MatchError {}

/// Starting score. Serialized as the plain number.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub enum GameMode {
    ThreeOhOne,
    #[default]
    FiveOhOne,
}

impl GameMode {
    /// Points each player starts the leg on.
    pub fn starting_score(self) -> u32 {
        match self {
            GameMode::ThreeOhOne => 301,
            GameMode::FiveOhOne => 501,
        }
    }
}

impl TryFrom<u32> for GameMode {
    type Error = String;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        match value {
            301 => Ok(GameMode::ThreeOhOne),
            501 => Ok(GameMode::FiveOhOne),
            other => Err(format!("mode must be 301 or 501 (got {})", other)),
        }
    }
}

impl From<GameMode> for u32 {
    fn from(mode: GameMode) -> Self {
        mode.starting_score()
    }
}

/// What a leg reset does with running statistics.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResetPolicy {
    /// Points, darts and average history carry over into the next leg.
    #[default]
    RetainStats,
    /// Points, darts and history start again from zero. Win counts are kept.
    ClearStats,
}

/// Result of one registered dart, for feedback (sounds, banners).
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ThrowOutcome {
    Hit,
    Bust,
    Win,
}

/// Full match state: settings, both players, turn pointer and winner.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Match {
    pub id: MatchId,
    pub mode: GameMode,
    pub double_out: bool,
    #[serde(default)]
    pub reset_policy: ResetPolicy,
    /// Index (0 or 1) of the player on turn.
    pub current_player: usize,
    pub players: [Player; 2],
    /// Index of the winning player once the leg is checked out.
    pub winner: Option<usize>,
    /// Starts at 1; bumped each time play returns to player 0.
    pub round: u32,
}

impl Match {
    /// Fresh match with both players at the mode's starting score. Blank names get placeholders.
    pub fn new(mode: GameMode, double_out: bool, player_1: &str, player_2: &str) -> Self {
        Self::with_policy(mode, double_out, player_1, player_2, ResetPolicy::default())
    }

    /// Same as [`Match::new`] with an explicit reset policy.
    pub fn with_policy(
        mode: GameMode,
        double_out: bool,
        player_1: &str,
        player_2: &str,
        reset_policy: ResetPolicy,
    ) -> Self {
        let start = mode.starting_score();
        Self {
            id: Uuid::new_v4(),
            mode,
            double_out,
            reset_policy,
            current_player: 0,
            players: [
                Player::new(name_or(player_1, DEFAULT_PLAYER_1), start),
                Player::new(name_or(player_2, DEFAULT_PLAYER_2), start),
            ],
            winner: None,
            round: 1,
        }
    }

    /// Player on turn.
    pub fn current(&self) -> &Player {
        &self.players[self.current_player]
    }

    /// Mutable reference to the player on turn.
    pub fn current_mut(&mut self) -> &mut Player {
        &mut self.players[self.current_player]
    }

    /// True once a winner is set.
    pub fn is_finished(&self) -> bool {
        self.winner.is_some()
    }

    /// True once the player on turn may not throw again: 3 darts, a bust, or a winner.
    pub fn is_turn_over(&self) -> bool {
        if self.winner.is_some() {
            return true;
        }
        let player = self.current();
        player.current_turn.len() >= DARTS_PER_TURN
            || player.last_throw().is_some_and(|t| t.is_bust)
    }

    /// Checkout hint for the player on turn; empty once the match is won.
    pub fn checkout_hint(&self) -> &'static str {
        if self.is_finished() {
            return "";
        }
        crate::logic::checkout_suggestion(self.current().score)
    }
}

fn name_or(name: &str, fallback: &str) -> String {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        fallback.to_string()
    } else {
        trimmed.to_string()
    }
}
