use std::collections::BTreeSet;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::chess::piece::PieceKind;
use crate::core::coord::Coord;

/// Annotation carried by a [`MoveOption`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum MoveExtra {
    #[default]
    Plain,
    /// Captures a piece beside the (empty) target cell.
    EnPassantCapture { captured_at: Coord },
    /// The moving piece turns into `into`.
    Promotion { into: PieceKind },
}

/// A candidate move for one piece.
///
/// `captures` may name cells other than `target`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveOption {
    pub target: Coord,
    pub captures: BTreeSet<Coord>,
    pub extra: MoveExtra,
}

impl MoveOption {
    /// A non-capturing move.
    pub fn to(target: Coord) -> Self {
        Self {
            target,
            captures: BTreeSet::new(),
            extra: MoveExtra::Plain,
        }
    }

    /// A move that captures the occupant of its own target.
    pub fn capture(target: Coord) -> Self {
        Self {
            target,
            captures: BTreeSet::from([target]),
            extra: MoveExtra::Plain,
        }
    }

    pub fn en_passant(target: Coord, captured_at: Coord) -> Self {
        Self {
            target,
            captures: BTreeSet::from([captured_at]),
            extra: MoveExtra::EnPassantCapture { captured_at },
        }
    }

    /// Same target and captures, tagged as a promotion.
    pub fn promoted(&self, into: PieceKind) -> Self {
        Self {
            target: self.target,
            captures: self.captures.clone(),
            extra: MoveExtra::Promotion { into },
        }
    }

    #[inline]
    pub fn is_capture(&self) -> bool {
        !self.captures.is_empty()
    }

    #[inline]
    pub fn is_en_passant(&self) -> bool {
        matches!(self.extra, MoveExtra::EnPassantCapture { .. })
    }

    #[inline]
    pub fn promotion(&self) -> Option<PieceKind> {
        match self.extra {
            MoveExtra::Promotion { into } => Some(into),
            _ => None,
        }
    }
}

impl fmt::Display for MoveOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.target)?;
        if self.is_capture() {
            let caps: Vec<String> = self.captures.iter().map(Coord::to_string).collect();
            write!(f, " x[{}]", caps.join(" "))?;
        }
        match self.extra {
            MoveExtra::Plain => Ok(()),
            MoveExtra::EnPassantCapture { .. } => write!(f, " e.p."),
            MoveExtra::Promotion { into } => write!(f, " ={}", into.letter()),
        }
    }
}
