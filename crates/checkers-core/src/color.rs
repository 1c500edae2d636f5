//! Checkers piece colors.

use std::fmt;
use std::ops::Not;

/// A side in the game.
///
/// Red starts on rows 5..=7 and advances toward row 0; White starts on
/// rows 0..=2 and advances toward row 7. Scores are reported from White's
/// point of view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Color {
    Red = 0,
    White = 1,
}

impl Color {
    /// Total number of colors.
    pub const COUNT: usize = 2;

    /// All colors in index order.
    pub const ALL: [Color; 2] = [Color::Red, Color::White];

    /// Return the index (0 for Red, 1 for White).
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Return the opposite color.
    #[inline]
    pub const fn flip(self) -> Color {
        match self {
            Color::Red => Color::White,
            Color::White => Color::Red,
        }
    }

    /// Row delta of a forward step for an uncrowned piece of this color.
    #[inline]
    pub const fn forward(self) -> i8 {
        match self {
            Color::Red => -1,
            Color::White => 1,
        }
    }

    /// The row on which a piece of this color is crowned.
    #[inline]
    pub const fn crowning_row(self) -> u8 {
        match self {
            Color::Red => 0,
            Color::White => 7,
        }
    }

    /// Parse a lowercase or capitalized color name.
    pub fn from_name(name: &str) -> Option<Color> {
        match name.to_ascii_lowercase().as_str() {
            "red" | "r" => Some(Color::Red),
            "white" | "w" => Some(Color::White),
            _ => None,
        }
    }
}

impl Not for Color {
    type Output = Color;

    #[inline]
    fn not(self) -> Color {
        self.flip()
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::Red => write!(f, "red"),
            Color::White => write!(f, "white"),
        }
    }
}
