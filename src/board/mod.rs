//! Board occupancy over an arbitrary [`Geometry`].
//!
//! The board is the only owner of pieces. Rules read it through
//! [`Board::piece_view`], the blocked-path walk and plain lookups; only the
//! engine mutates it.

pub mod geometry;

use crate::chess::piece::{MoveHistory, Piece, PieceKind};
use crate::core::coord::Coord;
use crate::core::player::{Direction, Player};

pub use geometry::Geometry;

#[derive(Clone, Debug)]
pub struct Board {
    geometry: Geometry,
    cells: Vec<Option<Piece>>,
}

/// A board cell together with its occupant.
#[derive(Clone, Copy, Debug)]
pub struct Square<'a> {
    pub coord: Coord,
    pub piece: Option<&'a Piece>,
}

impl Board {
    /// An empty board.
    pub fn new(geometry: Geometry) -> Self {
        let cells = vec![None; geometry.len()];
        Self { geometry, cells }
    }

    #[inline]
    pub fn geometry(&self) -> &Geometry {
        &self.geometry
    }

    #[inline]
    pub fn is_in_board(&self, coord: Coord) -> bool {
        self.geometry.contains(coord)
    }

    pub fn piece_at(&self, coord: Coord) -> Option<&Piece> {
        self.geometry
            .index_of(coord)
            .and_then(|i| self.cells[i].as_ref())
    }

    #[inline]
    pub fn is_occupied(&self, coord: Coord) -> bool {
        self.piece_at(coord).is_some()
    }

    /// Puts `piece` on `coord`, returning the previous occupant.
    ///
    /// Returns the piece back as `Err` if `coord` is not on the board.
    pub fn place(&mut self, coord: Coord, piece: Piece) -> Result<Option<Piece>, Piece> {
        match self.geometry.index_of(coord) {
            Some(i) => Ok(self.cells[i].replace(piece)),
            None => Err(piece),
        }
    }

    /// Removes and returns the occupant of `coord`.
    pub fn take(&mut self, coord: Coord) -> Option<Piece> {
        self.geometry
            .index_of(coord)
            .and_then(|i| self.cells[i].take())
    }

    /// Every cell in board order.
    pub fn squares(&self) -> impl Iterator<Item = Square<'_>> + '_ {
        self.geometry
            .coords()
            .iter()
            .zip(&self.cells)
            .map(|(&coord, piece)| Square {
                coord,
                piece: piece.as_ref(),
            })
    }

    /// Occupied cells in board order.
    pub fn pieces(&self) -> impl Iterator<Item = (Coord, &Piece)> + '_ {
        self.squares().filter_map(|sq| sq.piece.map(|p| (sq.coord, p)))
    }

    pub fn piece_view(&self, coord: Coord) -> Option<PieceView<'_>> {
        let piece = self.piece_at(coord)?;
        Some(PieceView {
            board: self,
            position: coord,
            piece,
        })
    }

    /// Walks from `start` by `step`, yielding empty cells until the first
    /// off-board or occupied cell.
    pub fn walk_until_blocked(&self, start: Coord, step: Coord) -> Ray<'_> {
        Ray {
            board: self,
            next: start + step,
            step,
            blocker: None,
            done: step == Coord::ORIGIN,
        }
    }

    /// Applies `f` to the history of every piece on the board.
    pub fn for_each_history_mut(&mut self, mut f: impl FnMut(&mut MoveHistory)) {
        for piece in self.cells.iter_mut().flatten() {
            f(&mut piece.history);
        }
    }

    /// One text line per row, using layout letters (`.` empty, `#` hole).
    pub fn render(&self) -> String {
        let coords = self.geometry.coords();
        let (Some(min_x), Some(max_x)) = (
            coords.iter().map(|c| c.x).min(),
            coords.iter().map(|c| c.x).max(),
        ) else {
            return String::new();
        };
        let min_y = coords[0].y;
        let max_y = coords[coords.len() - 1].y;

        let mut out = String::new();
        for y in min_y..=max_y {
            for x in min_x..=max_x {
                let c = Coord::new(x, y);
                let ch = match self.geometry.index_of(c) {
                    None => '#',
                    Some(i) => self.cells[i].as_ref().map_or('.', Piece::symbol),
                };
                out.push(ch);
            }
            out.push('\n');
        }
        out
    }
}

/// Lazy blocked-path walk produced by [`Board::walk_until_blocked`].
#[derive(Clone, Debug)]
pub struct Ray<'a> {
    board: &'a Board,
    next: Coord,
    step: Coord,
    blocker: Option<Coord>,
    done: bool,
}

impl Ray<'_> {
    /// The occupied cell that stopped the walk, once it has stopped.
    ///
    /// `None` while the walk is still running or when it ran off the board.
    pub fn blocker(&self) -> Option<Coord> {
        self.blocker
    }
}

impl Iterator for Ray<'_> {
    type Item = Coord;

    fn next(&mut self) -> Option<Coord> {
        if self.done {
            return None;
        }
        let cur = self.next;
        if !self.board.is_in_board(cur) {
            self.done = true;
            return None;
        }
        if self.board.is_occupied(cur) {
            self.blocker = Some(cur);
            self.done = true;
            return None;
        }
        self.next = cur + self.step;
        Some(cur)
    }
}

/// Read-only capability surface of a piece standing on a board.
#[derive(Clone, Copy, Debug)]
pub struct PieceView<'a> {
    board: &'a Board,
    position: Coord,
    piece: &'a Piece,
}

impl<'a> PieceView<'a> {
    #[inline]
    pub fn board(&self) -> &'a Board {
        self.board
    }

    #[inline]
    pub fn position(&self) -> Coord {
        self.position
    }

    #[inline]
    pub fn piece(&self) -> &'a Piece {
        self.piece
    }

    #[inline]
    pub fn kind(&self) -> PieceKind {
        self.piece.kind
    }

    #[inline]
    pub fn player(&self) -> Player {
        self.piece.player
    }

    #[inline]
    pub fn direction(&self) -> Direction {
        self.piece.direction
    }

    #[inline]
    pub fn promotions(&self) -> &'a [PieceKind] {
        &self.piece.promotions
    }

    #[inline]
    pub fn last_position(&self) -> Option<Coord> {
        self.piece.history.last_position
    }

    /// True iff the piece moved this turn or the one before.
    #[inline]
    pub fn moved_recently(&self) -> bool {
        self.piece.history.moved_recently()
    }
}
