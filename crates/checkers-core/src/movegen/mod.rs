//! Legal move generation.
//!
//! Moves are generated per piece. A man steps or jumps forward on its first
//! segment; once it has jumped, the chain may continue in any diagonal
//! direction. Kings use all four diagonals throughout. Among the candidates
//! of one piece, only the longest capture chains survive; plain steps are
//! offered only when that piece has no capture at all.

mod jumps;

use smallvec::smallvec;

use crate::board::Board;
use crate::checkers_move::{Captures, Move};
use crate::color::Color;
use crate::piece::Piece;
use crate::square::Square;

use self::jumps::{continue_chain, jump};

/// Diagonal directions as `(d_row, d_col)`, upward ones first.
pub(crate) const DIAGONALS: [(i8, i8); 4] = [(-1, -1), (-1, 1), (1, -1), (1, 1)];

/// The legal moves of one piece, keyed by destination square.
///
/// Destinations are unique and kept in discovery order, which makes search
/// tie-breaking reproducible.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidMoves {
    moves: Vec<Move>,
}

impl ValidMoves {
    /// Create an empty set.
    pub fn new() -> ValidMoves {
        ValidMoves { moves: Vec::new() }
    }

    /// Add a candidate. If the destination is already known, the longer
    /// capture list wins; on a tie the earlier candidate is kept.
    fn insert(&mut self, mv: Move) {
        match self.moves.iter_mut().find(|known| known.to() == mv.to()) {
            Some(known) if mv.captured().len() > known.captured().len() => *known = mv,
            Some(_) => {}
            None => self.moves.push(mv),
        }
    }

    /// Drop every candidate shorter than the longest capture chain.
    fn retain_longest_captures(&mut self) {
        let longest = self
            .moves
            .iter()
            .map(|mv| mv.captured().len())
            .max()
            .unwrap_or(0);
        if longest > 0 {
            self.moves.retain(|mv| mv.captured().len() == longest);
        }
    }

    /// Return the move landing on `dest`, if any.
    pub fn get(&self, dest: Square) -> Option<&Move> {
        self.moves.iter().find(|mv| mv.to() == dest)
    }

    /// Return the pieces captured on the way to `dest`, if `dest` is reachable.
    pub fn captures_for(&self, dest: Square) -> Option<&[Piece]> {
        self.get(dest).map(Move::captured)
    }

    /// Return `true` if `dest` is a legal destination.
    pub fn contains(&self, dest: Square) -> bool {
        self.get(dest).is_some()
    }

    /// Iterate over destination squares in discovery order.
    pub fn destinations(&self) -> impl Iterator<Item = Square> + '_ {
        self.moves.iter().map(Move::to)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.moves.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }

    #[inline]
    pub fn as_slice(&self) -> &[Move] {
        &self.moves
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Move> {
        self.moves.iter()
    }
}

impl<'a> IntoIterator for &'a ValidMoves {
    type Item = &'a Move;
    type IntoIter = std::slice::Iter<'a, Move>;
    fn into_iter(self) -> Self::IntoIter {
        self.moves.iter()
    }
}

impl IntoIterator for ValidMoves {
    type Item = Move;
    type IntoIter = std::vec::IntoIter<Move>;
    fn into_iter(self) -> Self::IntoIter {
        self.moves.into_iter()
    }
}

/// Generate every legal move of `piece` on `board`.
pub fn valid_moves(board: &Board, piece: Piece) -> ValidMoves {
    let from = piece.square();
    let color = piece.color();
    let mut moves = ValidMoves::new();

    let first_segment = DIAGONALS
        .into_iter()
        .filter(|&(d_row, _)| piece.is_king() || d_row == color.forward());

    for (d_row, d_col) in first_segment {
        let Some(next) = from.offset(d_row, d_col) else {
            continue;
        };
        if board.is_empty(next) {
            moves.insert(Move::step(from, next));
            continue;
        }
        if let Some((jumped, landing)) = jump(board, color, from, d_row, d_col, &[]) {
            let captured: Captures = smallvec![jumped];
            moves.insert(Move::with_captures(from, landing, captured.clone()));
            for mv in continue_chain(board, color, from, landing, &captured) {
                moves.insert(mv);
            }
        }
    }

    moves.retain_longest_captures();
    moves
}

/// Generate every legal move of every piece of `color`, in row-major piece order.
pub fn generate_moves(board: &Board, color: Color) -> Vec<Move> {
    board
        .pieces_of(color)
        .flat_map(|piece| valid_moves(board, piece))
        .collect()
}

/// Return `true` if `color` has at least one legal move.
pub fn has_legal_move(board: &Board, color: Color) -> bool {
    board
        .pieces_of(color)
        .any(|piece| !valid_moves(board, piece).is_empty())
}
