//! Registering darts: bust, checkout and turn-closing rules.

use crate::models::{
    is_valid_segment, segment_label, DartThrow, Match, MatchError, Multiplier, ThrowOutcome,
    DARTS_PER_TURN,
};

/// How a dart resolves against the remaining score.
enum Resolution {
    Bust,
    Win,
    Continue(u32),
}

/// Decide bust / win / continue for a dart worth `dart_score` against `remaining`.
///
/// Checked in order: below zero busts; exactly zero wins unless double-out wants a double;
/// exactly one busts under double-out since no double can finish it.
fn resolve(remaining: u32, dart_score: u32, multiplier: Multiplier, double_out: bool) -> Resolution {
    match remaining.checked_sub(dart_score) {
        None => Resolution::Bust,
        Some(0) if double_out && !multiplier.is_double() => Resolution::Bust,
        Some(0) => Resolution::Win,
        Some(1) if double_out => Resolution::Bust,
        Some(left) => Resolution::Continue(left),
    }
}

/// Register one dart for the player on turn.
///
/// On a bust the remaining score stays where the turn started and the turn ends. On a win the
/// match freezes with `winner` set. The third legal dart closes the turn; play does not pass to
/// the other player until [`crate::advance_turn`] is called. An empty `label` is replaced by the
/// board label for the segment.
pub fn register_throw(
    game: &mut Match,
    base: u8,
    multiplier: Multiplier,
    label: &str,
) -> Result<ThrowOutcome, MatchError> {
    if game.is_finished() {
        return Err(MatchError::MatchFinished);
    }
    if game.is_turn_over() {
        return Err(MatchError::TurnOver);
    }
    if !is_valid_segment(base, multiplier) {
        return Err(MatchError::InvalidSegment { base, multiplier });
    }

    let double_out = game.double_out;
    let index = game.current_player;
    let player = game.current_mut();
    let dart_score = base as u32 * multiplier.factor();
    let label = if label.trim().is_empty() {
        segment_label(base, multiplier)
    } else {
        label.trim().to_string()
    };

    let outcome = match resolve(player.score, dart_score, multiplier, double_out) {
        Resolution::Bust => {
            player.current_turn.push(DartThrow::bust(base, multiplier));
            player.stats.record_dart(0);
            player.stats.close_turn();
            log::debug!("{} busts on {} (stays at {})", player.name, label, player.score);
            ThrowOutcome::Bust
        }
        Resolution::Win => {
            player.current_turn.push(DartThrow::hit(base, multiplier, label));
            player.score = 0;
            player.stats.record_dart(dart_score);
            player.stats.close_turn();
            player.stats.add_win();
            log::info!("{} checks out", player.name);
            ThrowOutcome::Win
        }
        Resolution::Continue(left) => {
            player.current_turn.push(DartThrow::hit(base, multiplier, label));
            player.score = left;
            player.stats.record_dart(dart_score);
            if player.current_turn.len() == DARTS_PER_TURN {
                player.stats.close_turn();
            }
            log::debug!("{} scores {} ({} left)", player.name, dart_score, left);
            ThrowOutcome::Hit
        }
    };

    if outcome == ThrowOutcome::Win {
        game.winner = Some(index);
    }
    Ok(outcome)
}
