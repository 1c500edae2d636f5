//! End-to-end rule checks: opening moves, forced captures, chains, and
//! counter consistency over long sequences of play.

use checkers_core::{Board, Color, Game, Square, generate_moves, valid_moves};

fn sq(row: u8, col: u8) -> Square {
    Square::new(row, col).unwrap()
}

// ── Opening position ──────────────────────────────────────────────────────────

#[test]
fn interior_front_row_pieces_have_two_steps() {
    let board = Board::starting_position();
    for (row, col) in [(5, 2), (5, 4), (5, 6), (2, 1), (2, 3), (2, 5)] {
        let piece = board.piece_at(sq(row, col)).unwrap();
        let moves = valid_moves(&board, piece);
        assert_eq!(moves.len(), 2, "piece at ({row},{col})");
        assert!(moves.iter().all(|mv| !mv.is_capture()));
        let forward = piece.color().forward();
        for dest in moves.destinations() {
            assert_eq!(dest.row() as i8, row as i8 + forward);
        }
    }
}

#[test]
fn edge_front_row_pieces_have_one_step() {
    let board = Board::starting_position();
    for (row, col) in [(5, 0), (2, 7)] {
        let piece = board.piece_at(sq(row, col)).unwrap();
        assert_eq!(valid_moves(&board, piece).len(), 1, "piece at ({row},{col})");
    }
}

// ── Captures ──────────────────────────────────────────────────────────────────

#[test]
fn adjacent_capture_is_the_only_move() {
    let mut board = Board::empty();
    let white = board.set_piece(sq(3, 4), Color::White, false).unwrap();
    let red = board.set_piece(sq(4, 5), Color::Red, false).unwrap();

    let moves = valid_moves(&board, white);
    assert_eq!(moves.len(), 1);
    let mv = moves.get(sq(5, 6)).expect("capture landing on (5,6)");
    assert_eq!(mv.captured(), &[red]);
}

#[test]
fn longest_chain_is_the_only_move() {
    let mut board = Board::empty();
    let red = board.set_piece(sq(6, 1), Color::Red, false).unwrap();
    let first = board.set_piece(sq(5, 2), Color::White, false).unwrap();
    let second = board.set_piece(sq(3, 4), Color::White, false).unwrap();
    // Jumping this one would leave the board.
    board.set_piece(sq(5, 0), Color::White, false).unwrap();

    let moves = valid_moves(&board, red);
    assert_eq!(moves.len(), 1);
    assert_eq!(moves.captures_for(sq(2, 5)), Some(&[first, second][..]));

    let next = board.make_move(moves.get(sq(2, 5)).unwrap());
    assert_eq!(next.pieces_left(Color::White), 1);
    next.validate().unwrap();
}

#[test]
fn king_captures_backward_from_the_start() {
    let mut board = Board::empty();
    let king = board.set_piece(sq(2, 3), Color::Red, true).unwrap();
    let white = board.set_piece(sq(3, 4), Color::White, false).unwrap();

    let moves = valid_moves(&board, king);
    assert_eq!(moves.len(), 1);
    assert_eq!(moves.captures_for(sq(4, 5)), Some(&[white][..]));
}

#[test]
fn chain_ending_on_crowning_row_promotes() {
    let mut board = Board::empty();
    let red = board.set_piece(sq(4, 1), Color::Red, false).unwrap();
    board.set_piece(sq(3, 2), Color::White, false).unwrap();
    board.set_piece(sq(1, 4), Color::White, false).unwrap();

    let moves = valid_moves(&board, red);
    let mv = moves.get(sq(0, 5)).expect("double jump to the crowning row");
    let next = board.make_move(mv);

    let crowned = next.piece_at(sq(0, 5)).unwrap();
    assert!(crowned.is_king());
    assert_eq!(next.kings(Color::Red), 1);
    assert_eq!(next.winner(), Some(Color::Red));
    next.validate().unwrap();
}

// ── Forced-capture invariant and counters over play ───────────────────────────

/// Play `plies` half-moves choosing moves by a fixed stride, checking the
/// forced-capture rule and the board counters after every move.
fn play_out(seed: usize, plies: usize) {
    let mut board = Board::starting_position();
    let mut side = Color::Red;

    for ply in 0..plies {
        if board.winner().is_some() {
            break;
        }

        for piece in board.pieces_of(side) {
            let moves = valid_moves(&board, piece);
            let longest = moves.iter().map(|mv| mv.captured().len()).max().unwrap_or(0);
            assert!(
                moves.iter().all(|mv| mv.captured().len() == longest),
                "mixed capture lengths for {piece:?}: {moves:?}"
            );
            for mv in &moves {
                assert!(board.is_empty(mv.to()), "{mv:?} lands on a piece");
            }
        }

        let moves = generate_moves(&board, side);
        if moves.is_empty() {
            break;
        }
        let pick = (seed + ply * 7) % moves.len();
        let before = board;
        board = board.make_move(&moves[pick]);

        assert_eq!(
            before.pieces_left(!side) - board.pieces_left(!side),
            moves[pick].captured().len() as u8
        );
        board
            .validate()
            .unwrap_or_else(|e| panic!("seed {seed} ply {ply}: {e}\n{}", board.pretty()));
        side = !side;
    }
}

#[test]
fn counters_stay_consistent_during_play() {
    for seed in 0..16 {
        play_out(seed, 200);
    }
}

// ── Game controller ───────────────────────────────────────────────────────────

#[test]
fn game_alternates_turns_through_selection() {
    let mut game = Game::new();
    assert!(game.select(sq(5, 4)));
    assert!(!game.select(sq(4, 5)));
    assert_eq!(game.turn(), Color::White);

    assert!(game.select(sq(2, 5)));
    assert!(!game.select(sq(3, 6)));
    assert_eq!(game.turn(), Color::Red);
    game.board().validate().unwrap();
}
