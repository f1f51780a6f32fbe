use std::thread;

use diagonal_chess::chess::config::GameConfig;
use diagonal_chess::core::coord::Coord;
use diagonal_chess::rules::move_option::MoveOption;
use diagonal_chess::rules::RuleRegistry;

#[test]
fn parallel_readers_agree_with_a_sequential_pass() {
    let board = GameConfig::diagonal().build_board().unwrap();
    let rules = RuleRegistry::standard();

    let cells: Vec<Coord> = board.pieces().map(|(c, _)| c).collect();
    let expected: Vec<Vec<MoveOption>> = cells
        .iter()
        .map(|&c| rules.move_options(&board, c))
        .collect();

    let (cells, rules, board) = (&cells, &rules, &board);
    let results: Vec<Vec<Vec<MoveOption>>> = thread::scope(|s| {
        let handles: Vec<_> = (0..4)
            .map(|_| {
                s.spawn(move || {
                    cells
                        .iter()
                        .map(|&c| rules.move_options(board, c))
                        .collect::<Vec<_>>()
                })
            })
            .collect();
        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });

    for r in results {
        assert_eq!(r, expected);
    }
}
