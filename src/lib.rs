//! Dart match scorer: library with models and match logic (301/501, optional double out).

pub mod logic;
pub mod models;

pub use logic::{
    advance_turn, checkout_suggestion, register_throw, reset_match, start_match,
    start_match_with_policy, Feedback, LogFeedback,
};
pub use models::{
    is_valid_segment, segment_label, AverageRow, DartThrow, GameMode, Match, MatchError, MatchId,
    Multiplier, Player, PlayerBoard, PlayerId, PlayerStats, ResetPolicy, Scoreboard, ThrowOutcome,
    BULL, BUST_LABEL, DARTS_PER_TURN, DEFAULT_PLAYER_1, DEFAULT_PLAYER_2, EMPTY_SLOT,
};
