//! Move rules for the classical pieces: sliding riders and single-step leapers.
//!
//! These are pseudo-legal: a move that leaves the own king attacked is still
//! offered.

use crate::board::PieceView;
use crate::chess::piece::{PieceKind, KNIGHT_DELTAS};
use crate::core::coord::{Coord, KING_STEPS};

use super::move_option::MoveOption;
use super::MoveRule;

/// Slides along each direction until blocked; captures an opposing blocker.
#[derive(Debug, Clone, Copy)]
pub struct RiderRule {
    dirs: &'static [Coord],
}

impl RiderRule {
    pub fn new(dirs: &'static [Coord]) -> Self {
        Self { dirs }
    }

    pub fn for_kind(kind: PieceKind) -> Self {
        Self::new(kind.slide_dirs())
    }
}

impl MoveRule for RiderRule {
    fn compute_move_options(&self, piece: &PieceView<'_>) -> Vec<MoveOption> {
        let board = piece.board();
        let mut out = Vec::new();

        for &dir in self.dirs {
            let mut ray = board.walk_until_blocked(piece.position(), dir);
            out.extend(ray.by_ref().map(MoveOption::to));
            if let Some(blocker) = ray.blocker() {
                if is_opponent_at(piece, blocker) {
                    out.push(MoveOption::capture(blocker));
                }
            }
        }
        out
    }
}

/// Jumps to fixed offsets; captures an opposing occupant.
#[derive(Debug, Clone, Copy)]
pub struct LeaperRule {
    deltas: &'static [Coord],
}

impl LeaperRule {
    pub fn new(deltas: &'static [Coord]) -> Self {
        Self { deltas }
    }

    pub fn knight() -> Self {
        Self::new(&KNIGHT_DELTAS)
    }

    pub fn king() -> Self {
        Self::new(&KING_STEPS)
    }
}

impl MoveRule for LeaperRule {
    fn compute_move_options(&self, piece: &PieceView<'_>) -> Vec<MoveOption> {
        let board = piece.board();
        self.deltas
            .iter()
            .map(|&d| piece.position() + d)
            .filter(|&to| board.is_in_board(to))
            .filter_map(|to| match board.piece_at(to) {
                None => Some(MoveOption::to(to)),
                Some(_) if is_opponent_at(piece, to) => Some(MoveOption::capture(to)),
                Some(_) => None,
            })
            .collect()
    }
}

fn is_opponent_at(piece: &PieceView<'_>, at: Coord) -> bool {
    piece
        .board()
        .piece_at(at)
        .is_some_and(|p| p.is_opponent_of(piece.player()))
}
