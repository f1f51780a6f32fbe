use diagonal_chess::board::{Board, Geometry};
use diagonal_chess::chess::piece::{MoveHistory, Piece, PieceKind};
use diagonal_chess::core::coord::Coord;
use diagonal_chess::core::player::{Direction, Player};
use diagonal_chess::game::Game;
use diagonal_chess::rules::move_option::MoveOption;
use diagonal_chess::rules::pawn::diagonal_captures;

const WHITE: Player = Player(0);
const BLACK: Player = Player(1);

const HUNTER: Coord = Coord { x: 3, y: 4 };
const TARGET: Coord = Coord { x: 4, y: 3 };
const BELOW: Coord = Coord { x: 4, y: 4 };
const ABOVE: Coord = Coord { x: 4, y: 2 };

/// White up-pawn on (3,4) eyeing the empty diagonal (4,3), with `victim`
/// placed on `victim_at`.
fn setup(victim_at: Coord, victim: Piece) -> Board {
    let mut board = Board::new(Geometry::rectangle(8, 8));
    board
        .place(HUNTER, Piece::pawn(WHITE, Direction::Up, Vec::new()))
        .unwrap();
    board.place(victim_at, victim).unwrap();
    board
}

fn black_pawn(history: MoveHistory) -> Piece {
    Piece::pawn(BLACK, Direction::Down, Vec::new()).with_history(history)
}

fn special_captures(board: &Board) -> Vec<MoveOption> {
    let view = board.piece_view(HUNTER).unwrap();
    diagonal_captures(&view)
        .into_iter()
        .filter(|o| o.target == TARGET && o.is_en_passant())
        .collect()
}

#[test]
fn upper_neighbour_that_came_from_below_is_capturable() {
    let board = setup(
        ABOVE,
        black_pawn(MoveHistory {
            last_position: Some(BELOW),
            moved_turns_ago: Some(1),
        }),
    );
    assert_eq!(special_captures(&board), vec![MoveOption::en_passant(TARGET, ABOVE)]);
}

#[test]
fn stale_or_unmoved_history_does_not_qualify() {
    for moved_turns_ago in [None, Some(2), Some(7)] {
        let board = setup(
            BELOW,
            black_pawn(MoveHistory {
                last_position: Some(ABOVE),
                moved_turns_ago,
            }),
        );
        assert!(special_captures(&board).is_empty(), "{moved_turns_ago:?}");
    }
}

#[test]
fn last_position_must_be_the_opposite_neighbour() {
    for last in [None, Some(TARGET), Some(BELOW), Some(Coord::new(5, 2))] {
        let board = setup(
            BELOW,
            black_pawn(MoveHistory {
                last_position: last,
                moved_turns_ago: Some(0),
            }),
        );
        assert!(special_captures(&board).is_empty(), "{last:?}");
    }
}

#[test]
fn own_pawns_and_other_kinds_are_never_captured() {
    let history = MoveHistory {
        last_position: Some(ABOVE),
        moved_turns_ago: Some(0),
    };
    let own = Piece::pawn(WHITE, Direction::Up, Vec::new()).with_history(history);
    assert!(special_captures(&setup(BELOW, own)).is_empty());

    let queen = Piece::new(PieceKind::Queen, BLACK, Direction::Down).with_history(history);
    assert!(special_captures(&setup(BELOW, queen)).is_empty());
}

#[test]
fn missing_neighbour_cell_disables_the_capture() {
    // Same setup with the upper neighbour (4,2) punched out of the board.
    let cells = Geometry::rectangle(8, 8)
        .coords()
        .iter()
        .copied()
        .filter(|&c| c != ABOVE)
        .collect::<Vec<_>>();
    let mut board = Board::new(Geometry::from_coords(cells));
    board
        .place(HUNTER, Piece::pawn(WHITE, Direction::Up, Vec::new()))
        .unwrap();
    board
        .place(
            BELOW,
            black_pawn(MoveHistory {
                last_position: Some(ABOVE),
                moved_turns_ago: Some(0),
            }),
        )
        .unwrap();
    assert!(special_captures(&board).is_empty());
}

#[test]
fn capture_window_closes_as_the_engine_ticks_history() {
    let mut board = setup(
        BELOW,
        black_pawn(MoveHistory {
            last_position: Some(ABOVE),
            moved_turns_ago: Some(0),
        }),
    );
    let white_rook = Coord::new(0, 7);
    let black_rook = Coord::new(7, 0);
    board
        .place(white_rook, Piece::new(PieceKind::Rook, WHITE, Direction::Up))
        .unwrap();
    board
        .place(black_rook, Piece::new(PieceKind::Rook, BLACK, Direction::Down))
        .unwrap();
    let mut game = Game::new(board, vec!["white".into(), "black".into()]);

    let ep = MoveOption::en_passant(TARGET, BELOW);
    assert!(game.move_options(HUNTER).contains(&ep));

    // Two quiet rook moves: the victim's counter goes 0 -> 1 -> 2.
    game.apply(white_rook, &MoveOption::to(Coord::new(1, 7))).unwrap();
    assert_eq!(
        game.board().piece_at(BELOW).unwrap().history.moved_turns_ago,
        Some(1)
    );
    game.apply(black_rook, &MoveOption::to(Coord::new(6, 0))).unwrap();
    assert_eq!(
        game.board().piece_at(BELOW).unwrap().history.moved_turns_ago,
        Some(2)
    );
    assert!(!game.move_options(HUNTER).contains(&ep));
}

#[test]
fn applying_the_special_capture_removes_the_neighbour() {
    let board = setup(
        BELOW,
        black_pawn(MoveHistory {
            last_position: Some(ABOVE),
            moved_turns_ago: Some(1),
        }),
    );
    let mut game = Game::new(board, vec!["white".into(), "black".into()]);

    let applied = game
        .apply(HUNTER, &MoveOption::en_passant(TARGET, BELOW))
        .unwrap();
    assert_eq!(applied.captured.len(), 1);
    assert_eq!(applied.captured[0].0, BELOW);
    assert!(game.board().piece_at(BELOW).is_none());
    assert_eq!(game.board().piece_at(TARGET).unwrap().player, WHITE);
    assert!(game.board().piece_at(HUNTER).is_none());
}
