//! Static material evaluation.
//!
//! Scores are always from White's perspective: positive means White is
//! ahead, negative means Red is ahead.

use checkers_core::{Board, Color};

/// Value of any live piece, man or king.
pub const PIECE_VALUE: i32 = 1;

/// Extra value of a king on top of [`PIECE_VALUE`].
pub const KING_BONUS: i32 = 2;

/// Score of a position whose side to move has no legal move and so loses.
///
/// Larger in magnitude than any material balance the board can hold.
pub const WIN_SCORE: i32 = 1_000;

/// Evaluate `board` as `(pieces_white - pieces_red) + 2 * (kings_white - kings_red)`.
pub fn evaluate(board: &Board) -> i32 {
    let pieces = board.pieces_left(Color::White) as i32 - board.pieces_left(Color::Red) as i32;
    let kings = board.kings(Color::White) as i32 - board.kings(Color::Red) as i32;
    pieces * PIECE_VALUE + kings * KING_BONUS
}

/// Score of a position in which `side` is to move but cannot.
pub fn blocked_score(side: Color) -> i32 {
    match side {
        Color::White => -WIN_SCORE,
        Color::Red => WIN_SCORE,
    }
}
