//! Match business logic: setup, throws, turn rotation, checkout hints.

mod checkout;
mod feedback;
mod setup;
mod throws;
mod turn;

pub use checkout::checkout_suggestion;
pub use feedback::{Feedback, LogFeedback};
pub use setup::{start_match, start_match_with_policy};
pub use throws::register_throw;
pub use turn::{advance_turn, reset_match};
