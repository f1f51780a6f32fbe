use std::fmt;

use serde::{Deserialize, Serialize};

/// Opaque player identity. Only ever compared for equality.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Player(pub u8);

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "player {}", self.0)
    }
}

/// The forward axis of a piece, fixed for the lifetime of the piece.
///
/// Rows are numbered top to bottom, so `Up` walks towards row 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Up,
    Down,
}

impl Direction {
    /// Signed step along `y`: `-1` for [`Direction::Up`], `+1` for [`Direction::Down`].
    #[inline]
    pub const fn sign(self) -> i32 {
        match self {
            Direction::Up => -1,
            Direction::Down => 1,
        }
    }
}
