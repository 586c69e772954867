//! Data structures for a dart match: players, throws, match state, scoreboard.

mod game;
mod player;
mod scoreboard;
mod throw;

pub use game::{
    GameMode, Match, MatchError, MatchId, ResetPolicy, ThrowOutcome, DARTS_PER_TURN,
    DEFAULT_PLAYER_1, DEFAULT_PLAYER_2,
};
pub use player::{Player, PlayerId, PlayerStats};
pub use scoreboard::{AverageRow, PlayerBoard, Scoreboard, EMPTY_SLOT};
pub use throw::{is_valid_segment, segment_label, DartThrow, Multiplier, BULL, BUST_LABEL};
