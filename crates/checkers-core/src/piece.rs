//! A checkers piece and the square it stands on.

use std::fmt;

use crate::color::Color;
use crate::square::Square;

/// A piece on the board.
///
/// A piece is identified by its position: at any instant no two pieces
/// share a square, so two `Piece` values compare equal exactly when they
/// describe the same man (or king) on the same square.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    square: Square,
    color: Color,
    king: bool,
}

impl Piece {
    /// Create an uncrowned piece.
    #[inline]
    pub const fn new(square: Square, color: Color) -> Piece {
        Piece {
            square,
            color,
            king: false,
        }
    }

    /// Create a crowned piece.
    #[inline]
    pub const fn new_king(square: Square, color: Color) -> Piece {
        Piece {
            square,
            color,
            king: true,
        }
    }

    #[inline]
    pub const fn square(self) -> Square {
        self.square
    }

    #[inline]
    pub const fn row(self) -> u8 {
        self.square.row()
    }

    #[inline]
    pub const fn col(self) -> u8 {
        self.square.col()
    }

    #[inline]
    pub const fn color(self) -> Color {
        self.color
    }

    #[inline]
    pub const fn is_king(self) -> bool {
        self.king
    }

    /// Move the piece to `square`, keeping color and rank.
    #[inline]
    pub(crate) fn relocate(&mut self, square: Square) {
        self.square = square;
    }

    /// Crown the piece. Returns `true` if it was not already a king.
    #[inline]
    pub(crate) fn crown(&mut self) -> bool {
        !std::mem::replace(&mut self.king, true)
    }

    /// Single-character board symbol: `r`/`w` for men, `R`/`W` for kings.
    pub fn symbol(self) -> char {
        let c = match self.color {
            Color::Red => 'r',
            Color::White => 'w',
        };
        if self.king { c.to_ascii_uppercase() } else { c }
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

impl fmt::Debug for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}@{}", self.symbol(), self.square)
    }
}
