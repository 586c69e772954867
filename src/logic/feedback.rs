//! Feedback port: how callers react to a dart (sound, flash, log line).
//!
//! The engine only returns a [`ThrowOutcome`]; whoever drives the match decides what to trigger.

use crate::models::{Player, ThrowOutcome};

pub trait Feedback {
    fn on_outcome(&self, player: &Player, outcome: ThrowOutcome);
}

/// Writes one log line per dart.
#[derive(Clone, Copy, Debug, Default)]
pub struct LogFeedback;

impl Feedback for LogFeedback {
    fn on_outcome(&self, player: &Player, outcome: ThrowOutcome) {
        match outcome {
            ThrowOutcome::Hit => log::info!("hit: {} on {}", player.name, player.score),
            ThrowOutcome::Bust => log::info!("bust: {} stays on {}", player.name, player.score),
            ThrowOutcome::Win => log::info!("game shot: {} wins", player.name),
        }
    }
}
