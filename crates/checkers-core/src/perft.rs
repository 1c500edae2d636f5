//! Perft (performance test) for move generation correctness verification.

use crate::board::Board;
use crate::color::Color;
use crate::movegen::generate_moves;

/// Count the leaf positions reachable in `depth` plies with `side` to move first.
///
/// Depth 0 returns 1 (the current position). Depth 1 returns the number
/// of legal moves without building successor boards.
pub fn perft(board: &Board, side: Color, depth: usize) -> u64 {
    if depth == 0 {
        return 1;
    }

    let moves = generate_moves(board, side);

    if depth == 1 {
        return moves.len() as u64;
    }

    moves
        .iter()
        .map(|mv| perft(&board.make_move(mv), !side, depth - 1))
        .sum()
}

/// Run perft with a per-move breakdown (useful for debugging).
///
/// Returns `(move, node_count)` pairs in generation order.
pub fn divide(board: &Board, side: Color, depth: usize) -> Vec<(String, u64)> {
    generate_moves(board, side)
        .iter()
        .map(|mv| {
            let count = if depth <= 1 {
                1
            } else {
                perft(&board.make_move(mv), !side, depth - 1)
            };
            (mv.to_string(), count)
        })
        .collect()
}
