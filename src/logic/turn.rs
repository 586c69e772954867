//! Turn rotation and leg reset.

use crate::models::{Match, MatchError, ResetPolicy};

/// Pass play to the other player. Only allowed once the current turn is over and nobody has won.
///
/// Clears the outgoing player's turn darts; `round` goes up when play returns to player 1.
pub fn advance_turn(game: &mut Match) -> Result<(), MatchError> {
    if game.is_finished() {
        return Err(MatchError::MatchFinished);
    }
    if !game.is_turn_over() {
        return Err(MatchError::TurnInProgress);
    }
    game.current_mut().current_turn.clear();
    if game.current_player == 1 {
        game.current_player = 0;
        game.round += 1;
    } else {
        game.current_player = 1;
    }
    log::debug!(
        "Match {}: {} to throw (round {})",
        game.id,
        game.current().name,
        game.round
    );
    Ok(())
}

/// Start a new leg with the same settings and players: scores back to the mode, no winner,
/// round 1, player 1 on turn. Stats follow the match's [`ResetPolicy`].
pub fn reset_match(game: &mut Match) {
    let start = game.mode.starting_score();
    let policy = game.reset_policy;
    for p in game.players.iter_mut() {
        p.reset_leg(start);
        if policy == ResetPolicy::ClearStats {
            p.stats.clear_scoring();
        }
    }
    game.winner = None;
    game.round = 1;
    game.current_player = 0;
    log::info!("Match {} reset to {}", game.id, start);
}
