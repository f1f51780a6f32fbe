//! Move rule for the directional pawn.
//!
//! The pawn steps one cell along `(0, d)` or `(-d, 0)`, where `d` is the sign
//! of its [`Direction`](crate::core::player::Direction). It captures on
//! `(+1, d)`, `(-1, d)` and `(-d, -d)`. When such a diagonal cell is empty it
//! may still capture an opposing pawn standing directly above or below that
//! cell, provided the pawn just arrived from the cell on the other side.
//! Moves ending on the extreme cell of their column or row are replaced by
//! one option per promotion kind.
//!
//! The rule is a pure query over the board and piece history.

use log::trace;

use crate::board::{Board, PieceView};
use crate::chess::piece::PieceKind;
use crate::core::coord::Coord;

use super::move_option::MoveOption;
use super::MoveRule;

#[derive(Debug, Clone, Copy, Default)]
pub struct PawnRule;

impl MoveRule for PawnRule {
    fn compute_move_options(&self, piece: &PieceView<'_>) -> Vec<MoveOption> {
        compute_move_options(piece)
    }
}

/// All move options of the pawn at `piece`, in generation order.
pub fn compute_move_options(piece: &PieceView<'_>) -> Vec<MoveOption> {
    let mut options = forward_moves(piece);
    options.extend(diagonal_captures(piece));
    let options = expand_promotions(piece, options);
    trace!(
        "pawn at {} ({}): {} option(s)",
        piece.position(),
        piece.player(),
        options.len()
    );
    options
}

/// Non-capturing steps: at most one along each forward axis.
pub fn forward_moves(piece: &PieceView<'_>) -> Vec<MoveOption> {
    let board = piece.board();
    let d = piece.direction().sign();

    [Coord::new(0, d), Coord::new(-d, 0)]
        .into_iter()
        .filter_map(|step| board.walk_until_blocked(piece.position(), step).next())
        .filter(|&target| !board.is_occupied(target))
        .map(MoveOption::to)
        .collect()
}

/// Captures on the three diagonal offsets, including the perpendicular
/// special capture when the diagonal cell is empty.
pub fn diagonal_captures(piece: &PieceView<'_>) -> Vec<MoveOption> {
    let board = piece.board();
    let d = piece.direction().sign();
    let from = piece.position();
    let mut out = Vec::new();

    let targets = [from.offset(1, d), from.offset(-1, d), from.offset(-d, -d)];
    for target in targets.into_iter().filter(|&t| board.is_in_board(t)) {
        match board.piece_at(target) {
            Some(occupant) if occupant.is_opponent_of(piece.player()) => {
                out.push(MoveOption::capture(target));
            }
            Some(_) => {}
            None => perpendicular_captures(piece, board, target, &mut out),
        }
    }

    trace!("pawn at {from}: {} diagonal capture(s)", out.len());
    out
}

fn perpendicular_captures(
    piece: &PieceView<'_>,
    board: &Board,
    target: Coord,
    out: &mut Vec<MoveOption>,
) {
    let neighbours = [target.offset(0, 1), target.offset(0, -1)];
    if !neighbours.iter().all(|&c| board.is_in_board(c)) {
        return;
    }

    for (i, &at) in neighbours.iter().enumerate() {
        let opposite = neighbours[1 - i];
        let Some(victim) = board.piece_view(at) else {
            continue;
        };
        if victim.kind() == piece.kind()
            && victim.piece().is_opponent_of(piece.player())
            && victim.last_position() == Some(opposite)
            && victim.moved_recently()
        {
            out.push(MoveOption::en_passant(target, at));
        }
    }
}

/// Replaces every option that ends on an extreme cell with one option per
/// promotion kind. Untouched options keep their order and come first; the
/// promoted copies follow in the order of the options they replace.
pub fn expand_promotions(piece: &PieceView<'_>, options: Vec<MoveOption>) -> Vec<MoveOption> {
    let promotions = piece.promotions();
    let (extreme, mut out): (Vec<MoveOption>, Vec<MoveOption>) = options
        .into_iter()
        .partition(|option| is_extreme_cell(piece, option.target));

    for option in &extreme {
        out.extend(promotions.iter().map(|&kind| option.promoted(kind)));
    }
    out
}

/// True iff no cell lies further forward in `target`'s column, or further
/// along the lateral axis in `target`'s row.
pub fn is_extreme_cell(piece: &PieceView<'_>, target: Coord) -> bool {
    let coords = piece.board().geometry().coords();
    let d = piece.direction().sign();

    let last_in_column = coords
        .iter()
        .filter(|c| c.x == target.x)
        .max_by_key(|c| c.y * d);
    let last_in_row = coords
        .iter()
        .filter(|c| c.y == target.y)
        .max_by_key(|c| -c.x * d);

    last_in_column == Some(&target) || last_in_row == Some(&target)
}

/// Promotion kinds a pawn may choose, in their usual order.
pub const DEFAULT_PROMOTIONS: [PieceKind; 4] = [
    PieceKind::Bishop,
    PieceKind::Rook,
    PieceKind::Queen,
    PieceKind::Knight,
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Geometry;
    use crate::chess::piece::{MoveHistory, Piece};
    use crate::core::player::{Direction, Player};
    use crate::rules::move_option::MoveExtra;

    const WHITE: Player = Player(0);
    const BLACK: Player = Player(1);

    fn pawn(player: Player, direction: Direction) -> Piece {
        Piece::pawn(player, direction, Vec::new())
    }

    fn options_at(board: &Board, at: Coord) -> Vec<MoveOption> {
        compute_move_options(&board.piece_view(at).unwrap())
    }

    #[test]
    fn down_pawn_steps_forward_and_sideways() {
        let mut board = Board::new(Geometry::rectangle(8, 8));
        board.place(Coord::new(3, 3), pawn(BLACK, Direction::Down)).unwrap();

        let targets: Vec<Coord> = options_at(&board, Coord::new(3, 3))
            .iter()
            .map(|o| o.target)
            .collect();
        assert_eq!(targets, vec![Coord::new(3, 4), Coord::new(2, 3)]);
    }

    #[test]
    fn occupied_forward_cell_is_skipped_but_lateral_survives() {
        let mut board = Board::new(Geometry::rectangle(8, 8));
        board.place(Coord::new(3, 3), pawn(WHITE, Direction::Up)).unwrap();
        board.place(Coord::new(3, 2), pawn(BLACK, Direction::Down)).unwrap();

        let view = board.piece_view(Coord::new(3, 3)).unwrap();
        assert_eq!(forward_moves(&view), vec![MoveOption::to(Coord::new(4, 3))]);
    }

    #[test]
    fn third_capture_offset_points_backwards_sideways() {
        let mut board = Board::new(Geometry::rectangle(8, 8));
        board.place(Coord::new(3, 3), pawn(WHITE, Direction::Up)).unwrap();
        // (-d, -d) with d = -1 is (+1, +1).
        board
            .place(Coord::new(4, 4), Piece::new(PieceKind::Knight, BLACK, Direction::Down))
            .unwrap();

        let view = board.piece_view(Coord::new(3, 3)).unwrap();
        assert_eq!(diagonal_captures(&view), vec![MoveOption::capture(Coord::new(4, 4))]);
    }

    #[test]
    fn perpendicular_capture_needs_both_neighbours_on_board() {
        // The white pawn at (4,1) came from off-board row -1, the only cell
        // that would pair with it for target (4,0), whose neighbour (4,-1) is missing.
        let mut board = Board::new(Geometry::rectangle(8, 8));
        board.place(Coord::new(5, 1), pawn(BLACK, Direction::Down)).unwrap();
        board
            .place(
                Coord::new(4, 1),
                pawn(WHITE, Direction::Up).with_history(MoveHistory {
                    last_position: Some(Coord::new(4, -1)),
                    moved_turns_ago: Some(0),
                }),
            )
            .unwrap();
        // (-d, -d) with d = +1 is (-1, -1): target (4,0).
        let view = board.piece_view(Coord::new(5, 1)).unwrap();
        assert!(diagonal_captures(&view).iter().all(|o| !o.is_en_passant()));
    }

    #[test]
    fn perpendicular_capture_ignores_other_kinds() {
        let mut board = Board::new(Geometry::rectangle(8, 8));
        board.place(Coord::new(3, 4), pawn(WHITE, Direction::Up)).unwrap();
        board
            .place(
                Coord::new(4, 4),
                Piece::new(PieceKind::Rook, BLACK, Direction::Down).with_history(MoveHistory {
                    last_position: Some(Coord::new(4, 2)),
                    moved_turns_ago: Some(0),
                }),
            )
            .unwrap();

        let view = board.piece_view(Coord::new(3, 4)).unwrap();
        assert!(diagonal_captures(&view).is_empty());
    }

    #[test]
    fn extreme_cell_uses_direction_for_columns_and_rows() {
        let mut board = Board::new(Geometry::from_row_lengths(&[3, 5, 5]));
        board.place(Coord::new(1, 1), pawn(WHITE, Direction::Up)).unwrap();
        board.place(Coord::new(2, 2), pawn(BLACK, Direction::Down)).unwrap();

        let up = board.piece_view(Coord::new(1, 1)).unwrap();
        assert!(is_extreme_cell(&up, Coord::new(1, 0)));
        // Column 4 starts at row 1.
        assert!(is_extreme_cell(&up, Coord::new(4, 1)));
        // Lateral axis for an up pawn is +x: the last cell of row 2 is (4,2).
        assert!(is_extreme_cell(&up, Coord::new(4, 2)));
        assert!(!is_extreme_cell(&up, Coord::new(2, 2)));

        let down = board.piece_view(Coord::new(2, 2)).unwrap();
        assert!(is_extreme_cell(&down, Coord::new(3, 2)));
        assert!(is_extreme_cell(&down, Coord::new(0, 1)));
        assert!(!is_extreme_cell(&down, Coord::new(1, 1)));
    }

    #[test]
    fn expansion_appends_promoted_copies_after_untouched_options() {
        let mut board = Board::new(Geometry::rectangle(4, 4));
        board
            .place(
                Coord::new(1, 1),
                Piece::pawn(WHITE, Direction::Up, vec![PieceKind::Queen, PieceKind::Knight]),
            )
            .unwrap();
        let view = board.piece_view(Coord::new(1, 1)).unwrap();

        let plain = MoveOption::to(Coord::new(2, 1));
        let edge = MoveOption::to(Coord::new(1, 0));
        let out = expand_promotions(&view, vec![edge.clone(), plain.clone()]);

        assert_eq!(
            out,
            vec![
                plain,
                edge.promoted(PieceKind::Queen),
                edge.promoted(PieceKind::Knight),
            ]
        );
        assert!(out
            .iter()
            .all(|o| o.target != edge.target || matches!(o.extra, MoveExtra::Promotion { .. })));
    }
}
