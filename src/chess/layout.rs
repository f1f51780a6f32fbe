use crate::board::{Board, Geometry};
use crate::chess::piece::{Piece, PieceKind};
use crate::core::coord::Coord;
use crate::core::player::{Direction, Player};
use crate::error::Error;

/// A side taking part in a layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Side {
    pub player: Player,
    pub direction: Direction,
}

/// Text description of a starting position.
///
/// One string per row, top row first. Tokens:
///
/// - `.` an empty cell
/// - `#` a hole (no cell)
/// - `P N B R Q K` a piece of the first side, lower case for the second side
///
/// Rows may have different lengths; whitespace is ignored.
#[derive(Debug, Clone)]
pub struct BoardLayout {
    rows: Vec<String>,
    sides: [Side; 2],
    promotions: Vec<PieceKind>,
}

impl BoardLayout {
    pub fn new<S: Into<String>>(rows: impl IntoIterator<Item = S>, sides: [Side; 2]) -> Self {
        Self {
            rows: rows.into_iter().map(Into::into).collect(),
            sides,
            promotions: Vec::new(),
        }
    }

    /// Promotion kinds given to every pawn.
    pub fn with_promotions(mut self, promotions: Vec<PieceKind>) -> Self {
        self.promotions = promotions;
        self
    }

    pub fn sides(&self) -> &[Side; 2] {
        &self.sides
    }

    pub fn build(&self) -> Result<Board, Error> {
        let mut cells: Vec<(Coord, Option<Piece>)> = Vec::new();

        for (y, row) in self.rows.iter().enumerate() {
            let tokens = row.chars().filter(|c| !c.is_whitespace());
            for (x, token) in tokens.enumerate() {
                let coord = Coord::new(x as i32, y as i32);
                match token {
                    '#' => {}
                    '.' => cells.push((coord, None)),
                    c => {
                        let kind = PieceKind::from_letter(c).ok_or(Error::UnknownCellToken {
                            row: y,
                            column: x,
                            token: c,
                        })?;
                        let side = if c.is_ascii_uppercase() {
                            self.sides[0]
                        } else {
                            self.sides[1]
                        };
                        cells.push((coord, Some(self.piece(kind, side))));
                    }
                }
            }
        }

        if cells.is_empty() {
            return Err(Error::InvalidConfig {
                reason: "layout has no cells".to_string(),
            });
        }

        let mut board = Board::new(Geometry::from_coords(cells.iter().map(|(c, _)| *c)));
        for (coord, piece) in cells {
            if let Some(piece) = piece {
                // Every coordinate came from the geometry above.
                let _ = board.place(coord, piece);
            }
        }
        Ok(board)
    }

    fn piece(&self, kind: PieceKind, side: Side) -> Piece {
        let piece = Piece::new(kind, side.player, side.direction);
        if kind == PieceKind::Pawn {
            piece.with_promotions(self.promotions.clone())
        } else {
            piece
        }
    }
}
