//! Integration tests for the display snapshot, feedback port and JSON shape.

use dart_match_web::{
    advance_turn, register_throw, start_match, Feedback, GameMode, Match, Multiplier, Player,
    Scoreboard, ThrowOutcome, EMPTY_SLOT,
};
use std::cell::RefCell;

fn match_with_turns() -> Match {
    let mut m = start_match(GameMode::FiveOhOne, true, "Ann", "Bob");
    for _ in 0..3 {
        register_throw(&mut m, 20, Multiplier::Triple, "T20").unwrap();
    }
    advance_turn(&mut m).unwrap();
    register_throw(&mut m, 19, Multiplier::Triple, "T19").unwrap();
    m
}

#[test]
fn slots_are_padded_to_three() {
    let board = Scoreboard::from_match(&match_with_turns());
    assert_eq!(board.players[1].slots, vec!["T19", EMPTY_SLOT, EMPTY_SLOT]);
    // Player 1's darts were cleared when the turn passed.
    assert_eq!(board.players[0].slots, vec![EMPTY_SLOT; 3]);
}

#[test]
fn active_player_and_checkout() {
    let mut m = match_with_turns();
    m.players[1].score = 40;
    let board = Scoreboard::from_match(&m);
    assert!(board.players[1].is_active);
    assert!(!board.players[0].is_active);
    assert_eq!(board.players[1].checkout, "D20");
    assert_eq!(board.players[0].checkout, "");
    assert_eq!(board.mode_label, "501 (DO)");
    assert_eq!(board.round, 1);
    assert!(!board.turn_over);
    assert_eq!(board.winner_name, None);
}

#[test]
fn averages_table_pads_missing_turns() {
    let mut m = match_with_turns();
    register_throw(&mut m, 1, Multiplier::Single, "1").unwrap();
    register_throw(&mut m, 1, Multiplier::Single, "1").unwrap();
    advance_turn(&mut m).unwrap();
    for _ in 0..3 {
        register_throw(&mut m, 20, Multiplier::Single, "20").unwrap();
    }
    let board = Scoreboard::from_match(&m);
    assert_eq!(board.averages.len(), 2);
    assert_eq!(board.averages[0].round, 1);
    assert_eq!(board.averages[0].player_1, Some(180.0));
    assert_eq!(board.averages[0].player_2, Some(59.0));
    assert_eq!(board.averages[1].player_1, Some(120.0));
    assert_eq!(board.averages[1].player_2, None);
}

#[test]
fn winner_banner() {
    let mut m = start_match(GameMode::ThreeOhOne, false, "Ann", "Bob");
    m.players[0].score = 20;
    register_throw(&mut m, 20, Multiplier::Single, "20").unwrap();
    let board = Scoreboard::from_match(&m);
    assert_eq!(board.mode_label, "301");
    assert_eq!(board.winner_name.as_deref(), Some("Ann"));
    assert!(board.players[0].is_winner);
    assert!(!board.players[0].is_active);
    assert_eq!(board.players[0].checkout, "");
    assert!(board.turn_over);
    assert_eq!(board.players[0].wins, 1);
}

#[derive(Default)]
struct Recorder {
    seen: RefCell<Vec<(String, ThrowOutcome)>>,
}

impl Feedback for Recorder {
    fn on_outcome(&self, player: &Player, outcome: ThrowOutcome) {
        self.seen.borrow_mut().push((player.name.clone(), outcome));
    }
}

#[test]
fn caller_forwards_outcomes_to_feedback() {
    let recorder = Recorder::default();
    let mut m = start_match(GameMode::FiveOhOne, true, "Ann", "Bob");
    m.players[0].score = 40;
    for (base, multiplier) in [(10, Multiplier::Single), (20, Multiplier::Triple), (15, Multiplier::Double)] {
        let outcome = register_throw(&mut m, base, multiplier, "").unwrap();
        recorder.on_outcome(m.current(), outcome);
        if m.is_turn_over() {
            break;
        }
    }
    let seen = recorder.seen.borrow();
    assert_eq!(
        *seen,
        vec![
            ("Ann".to_string(), ThrowOutcome::Hit),
            ("Ann".to_string(), ThrowOutcome::Bust),
        ]
    );
}

#[test]
fn json_shape() {
    let m = start_match(GameMode::ThreeOhOne, true, "Ann", "Bob");
    let v = serde_json::to_value(&m).unwrap();
    assert_eq!(v["mode"], 301);
    assert_eq!(v["double_out"], true);
    assert_eq!(v["reset_policy"], "retain_stats");
    assert_eq!(v["winner"], serde_json::Value::Null);
    assert_eq!(serde_json::to_value(ThrowOutcome::Bust).unwrap(), "bust");

    let back: Match = serde_json::from_value(v).unwrap();
    assert_eq!(back, m);
    assert!(serde_json::from_str::<GameMode>("401").is_err());
    assert_eq!(serde_json::from_str::<Multiplier>("2").unwrap(), Multiplier::Double);
    assert!(serde_json::from_str::<Multiplier>("4").is_err());
}
