//! Checkout hints: standard finishes from 170 down to 2.

/// Remaining score → suggested finish. Advisory only; the engine never enforces it.
const CHECKOUTS: &[(u32, &str)] = &[
    (170, "T20 T20 BULL"),
    (167, "T20 T19 BULL"),
    (164, "T20 T18 BULL"),
    (161, "T20 T17 BULL"),
    (160, "T20 T20 D20"),
    (158, "T20 T20 D19"),
    (156, "T20 T20 D18"),
    (150, "T20 T18 D18"),
    (140, "T20 T16 D16"),
    (130, "T20 T18 D8"),
    (121, "T20 T11 D14"),
    (120, "T20 20 D20"),
    (110, "T20 10 D20"),
    (100, "T20 D20"),
    (90, "T18 D18"),
    (80, "T16 D16"),
    (70, "T18 D8"),
    (60, "20 D20"),
    (50, "10 D20"),
    (40, "D20"),
    (36, "D18"),
    (32, "D16"),
    (20, "D10"),
    (10, "D5"),
    (4, "D2"),
    (2, "D1"),
];

/// Suggested finish for `score`, or `""` when the table has none (e.g. 169, or above 170).
pub fn checkout_suggestion(score: u32) -> &'static str {
    CHECKOUTS
        .iter()
        .find(|(s, _)| *s == score)
        .map(|(_, hint)| *hint)
        .unwrap_or("")
}
