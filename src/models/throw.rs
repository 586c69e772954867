//! DartThrow and Multiplier: a single recorded dart.

use serde::{Deserialize, Serialize};

/// Label recorded in place of the real one when a dart busts.
pub const BUST_LABEL: &str = "BUST";

/// Base value of the bullseye (single bull 25, double bull 50).
pub const BULL: u8 = 25;

/// Ring the dart landed in. Serialized as 1, 2 or 3.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum Multiplier {
    #[default]
    Single,
    Double,
    Triple,
}

impl Multiplier {
    /// Numeric multiplier: 1, 2 or 3.
    pub fn factor(self) -> u32 {
        match self {
            Multiplier::Single => 1,
            Multiplier::Double => 2,
            Multiplier::Triple => 3,
        }
    }

    /// True for the double ring, double bull included.
    pub fn is_double(self) -> bool {
        self == Multiplier::Double
    }
}

impl TryFrom<u8> for Multiplier {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(Multiplier::Single),
            2 => Ok(Multiplier::Double),
            3 => Ok(Multiplier::Triple),
            other => Err(format!("multiplier must be 1, 2 or 3 (got {})", other)),
        }
    }
}

impl From<Multiplier> for u8 {
    fn from(m: Multiplier) -> Self {
        m.factor() as u8
    }
}

/// True for a segment that exists on the board: 1-20, single bull or double bull.
pub fn is_valid_segment(base: u8, multiplier: Multiplier) -> bool {
    match base {
        1..=20 => true,
        BULL => multiplier != Multiplier::Triple,
        _ => false,
    }
}

/// Board label for a segment: "20", "D20", "T20", "25", "BULL".
pub fn segment_label(base: u8, multiplier: Multiplier) -> String {
    match (base, multiplier) {
        (BULL, Multiplier::Double) => "BULL".to_string(),
        (b, Multiplier::Single) => b.to_string(),
        (b, Multiplier::Double) => format!("D{}", b),
        (b, Multiplier::Triple) => format!("T{}", b),
    }
}

/// One dart. Never mutated after it is pushed onto a turn.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct DartThrow {
    pub base: u8,
    pub multiplier: Multiplier,
    /// Points credited: `base * multiplier`, or 0 for a bust.
    pub score: u32,
    pub label: String,
    pub is_bust: bool,
}

impl DartThrow {
    /// A legal dart credited with `base * multiplier`.
    pub fn hit(base: u8, multiplier: Multiplier, label: impl Into<String>) -> Self {
        Self {
            base,
            multiplier,
            score: base as u32 * multiplier.factor(),
            label: label.into(),
            is_bust: false,
        }
    }

    /// A busting dart: scores 0 and carries the bust label.
    pub fn bust(base: u8, multiplier: Multiplier) -> Self {
        Self {
            base,
            multiplier,
            score: 0,
            label: BUST_LABEL.to_string(),
            is_bust: true,
        }
    }
}
