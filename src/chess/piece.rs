use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::core::coord::Coord;
use crate::core::player::{Direction, Player};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PieceKind {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

impl PieceKind {
    pub const ALL: [PieceKind; 6] = [
        PieceKind::Pawn,
        PieceKind::Knight,
        PieceKind::Bishop,
        PieceKind::Rook,
        PieceKind::Queen,
        PieceKind::King,
    ];

    /// Upper-case layout letter.
    pub fn letter(self) -> char {
        match self {
            PieceKind::Pawn => 'P',
            PieceKind::Knight => 'N',
            PieceKind::Bishop => 'B',
            PieceKind::Rook => 'R',
            PieceKind::Queen => 'Q',
            PieceKind::King => 'K',
        }
    }

    /// Case-insensitive inverse of [`PieceKind::letter`].
    pub fn from_letter(c: char) -> Option<Self> {
        PieceKind::ALL
            .into_iter()
            .find(|k| k.letter() == c.to_ascii_uppercase())
    }

    /// Unit directions for sliding pieces.
    #[inline]
    pub fn slide_dirs(self) -> &'static [Coord] {
        use PieceKind::*;
        match self {
            Queen => &QUEEN_DIRS,
            Rook => &ROOK_DIRS,
            Bishop => &BISHOP_DIRS,
            _ => &[],
        }
    }
}

impl fmt::Display for PieceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            PieceKind::Pawn => "pawn",
            PieceKind::Knight => "knight",
            PieceKind::Bishop => "bishop",
            PieceKind::Rook => "rook",
            PieceKind::Queen => "queen",
            PieceKind::King => "king",
        };
        f.write_str(name)
    }
}

/// Accepts the full lower-case name or the single layout letter.
impl FromStr for PieceKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let mut chars = s.chars();
        if let (Some(c), None) = (chars.next(), chars.next()) {
            return PieceKind::from_letter(c).ok_or_else(|| format!("unknown piece letter {c:?}"));
        }
        PieceKind::ALL
            .into_iter()
            .find(|k| k.to_string().eq_ignore_ascii_case(s))
            .ok_or_else(|| format!("unknown piece kind {s:?}"))
    }
}

pub const ROOK_DIRS: [Coord; 4] = [
    Coord { x: 1, y: 0 },
    Coord { x: -1, y: 0 },
    Coord { x: 0, y: 1 },
    Coord { x: 0, y: -1 },
];

pub const BISHOP_DIRS: [Coord; 4] = [
    Coord { x: 1, y: 1 },
    Coord { x: 1, y: -1 },
    Coord { x: -1, y: 1 },
    Coord { x: -1, y: -1 },
];

pub const QUEEN_DIRS: [Coord; 8] = [
    Coord { x: 1, y: 0 },
    Coord { x: -1, y: 0 },
    Coord { x: 0, y: 1 },
    Coord { x: 0, y: -1 },
    Coord { x: 1, y: 1 },
    Coord { x: 1, y: -1 },
    Coord { x: -1, y: 1 },
    Coord { x: -1, y: -1 },
];

pub const KNIGHT_DELTAS: [Coord; 8] = [
    Coord { x: -2, y: -1 },
    Coord { x: -2, y: 1 },
    Coord { x: -1, y: -2 },
    Coord { x: -1, y: 2 },
    Coord { x: 1, y: -2 },
    Coord { x: 1, y: 2 },
    Coord { x: 2, y: -1 },
    Coord { x: 2, y: 1 },
];

/// Per-piece move history, written by the engine after every turn.
///
/// Rules only read it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MoveHistory {
    /// Where the piece stood before its most recent move.
    pub last_position: Option<Coord>,
    /// Turns elapsed since the piece last moved. `None` until it moves once.
    pub moved_turns_ago: Option<u32>,
}

impl MoveHistory {
    /// True iff the piece moved this turn or the one before.
    #[inline]
    pub fn moved_recently(&self) -> bool {
        matches!(self.moved_turns_ago, Some(0..=1))
    }
}

/// A piece standing on a board.
///
/// Every piece carries a forward [`Direction`]; only pawns use it today.
/// `promotions` lists, in order, the kinds a pawn may turn into on an
/// extreme cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Piece {
    pub kind: PieceKind,
    pub player: Player,
    pub direction: Direction,
    pub promotions: Vec<PieceKind>,
    pub history: MoveHistory,
}

impl Piece {
    pub fn new(kind: PieceKind, player: Player, direction: Direction) -> Self {
        Self {
            kind,
            player,
            direction,
            promotions: Vec::new(),
            history: MoveHistory::default(),
        }
    }

    pub fn pawn(player: Player, direction: Direction, promotions: Vec<PieceKind>) -> Self {
        Self::new(PieceKind::Pawn, player, direction).with_promotions(promotions)
    }

    pub fn with_promotions(mut self, promotions: Vec<PieceKind>) -> Self {
        self.promotions = promotions;
        self
    }

    pub fn with_history(mut self, history: MoveHistory) -> Self {
        self.history = history;
        self
    }

    #[inline]
    pub fn is_opponent_of(&self, player: Player) -> bool {
        self.player != player
    }

    /// Layout letter: upper case for player 0, lower case otherwise.
    pub fn symbol(&self) -> char {
        let c = self.kind.letter();
        if self.player == Player(0) {
            c
        } else {
            c.to_ascii_lowercase()
        }
    }
}
