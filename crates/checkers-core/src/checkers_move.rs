//! A single checkers move: one step, or one complete capture chain.

use std::fmt;

use smallvec::SmallVec;

use crate::piece::Piece;
use crate::square::Square;

/// Pieces jumped by one move, in the order they were captured.
///
/// Chains rarely exceed four jumps, so the common case stays inline.
pub type Captures = SmallVec<[Piece; 4]>;

/// A move from one square to another, with the opponent pieces it captures.
///
/// A multi-jump chain is a single `Move`: `to` is the final landing square
/// and `captured` lists every jumped piece. An empty capture list means a
/// plain diagonal step.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Move {
    from: Square,
    to: Square,
    captured: Captures,
}

impl Move {
    /// Create a non-capturing step.
    pub fn step(from: Square, to: Square) -> Move {
        Move {
            from,
            to,
            captured: Captures::new(),
        }
    }

    /// Create a move that captures `captured` on the way to `to`.
    pub fn with_captures(from: Square, to: Square, captured: Captures) -> Move {
        Move { from, to, captured }
    }

    #[inline]
    pub fn from(&self) -> Square {
        self.from
    }

    #[inline]
    pub fn to(&self) -> Square {
        self.to
    }

    #[inline]
    pub fn captured(&self) -> &[Piece] {
        &self.captured
    }

    /// Return `true` if this move jumps at least one piece.
    #[inline]
    pub fn is_capture(&self) -> bool {
        !self.captured.is_empty()
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sep = if self.is_capture() { 'x' } else { '-' };
        write!(f, "{}{}{}", self.from, sep, self.to)
    }
}

impl fmt::Debug for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Move({self}")?;
        if self.is_capture() {
            write!(f, " {:?}", self.captured.as_slice())?;
        }
        write!(f, ")")
    }
}
