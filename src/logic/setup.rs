//! Setup phase: create a match ready for player 1's first dart.

use crate::models::{GameMode, Match, ResetPolicy};

/// Start a match: both players at the mode's score, fresh stats, round 1, player 1 on turn.
pub fn start_match(mode: GameMode, double_out: bool, player_1: &str, player_2: &str) -> Match {
    start_match_with_policy(mode, double_out, player_1, player_2, ResetPolicy::default())
}

/// Same as [`start_match`] with an explicit reset policy.
pub fn start_match_with_policy(
    mode: GameMode,
    double_out: bool,
    player_1: &str,
    player_2: &str,
    reset_policy: ResetPolicy,
) -> Match {
    let game = Match::with_policy(mode, double_out, player_1, player_2, reset_policy);
    log::info!(
        "Match {} started: {} vs {} ({}{})",
        game.id,
        game.players[0].name,
        game.players[1].name,
        mode.starting_score(),
        if double_out { ", double out" } else { "" }
    );
    game
}
