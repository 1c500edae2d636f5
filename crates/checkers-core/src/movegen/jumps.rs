//! Capture-chain exploration.

use crate::board::Board;
use crate::checkers_move::{Captures, Move};
use crate::color::Color;
use crate::piece::Piece;
use crate::square::Square;

use super::DIAGONALS;

/// Try to jump from `at` in direction `(d_row, d_col)`.
///
/// Succeeds when the adjacent square holds an opponent piece that has not
/// already been jumped in this chain and the square beyond it is on the
/// board and empty. Returns the jumped piece and the landing square.
pub(super) fn jump(
    board: &Board,
    color: Color,
    at: Square,
    d_row: i8,
    d_col: i8,
    captured: &[Piece],
) -> Option<(Piece, Square)> {
    let over = at.offset(d_row, d_col)?;
    let jumped = board.piece_at(over)?;
    if jumped.color() == color || captured.contains(&jumped) {
        return None;
    }
    let landing = over.offset(d_row, d_col)?;
    board.is_empty(landing).then_some((jumped, landing))
}

/// Every continuation of a capture chain that has reached `at`.
///
/// Each further jump yields a move to its landing square carrying its own
/// copy of the capture list, followed by the continuations from there.
/// Jumped pieces stay on the board until the move is played, so they block
/// re-crossing; the chain ends once no direction offers a jump.
pub(super) fn continue_chain(
    board: &Board,
    color: Color,
    origin: Square,
    at: Square,
    captured: &Captures,
) -> Vec<Move> {
    let mut found = Vec::new();
    for (d_row, d_col) in DIAGONALS {
        let Some((jumped, landing)) = jump(board, color, at, d_row, d_col, captured) else {
            continue;
        };
        let mut extended = captured.clone();
        extended.push(jumped);
        found.push(Move::with_captures(origin, landing, extended.clone()));
        found.extend(continue_chain(board, color, origin, landing, &extended));
    }
    found
}
