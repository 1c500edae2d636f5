//! Error types for board construction and validation.

use crate::color::Color;
use crate::square::Square;

/// Errors from placing pieces on, or validating, a [`Board`](crate::board::Board).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BoardError {
    /// A piece was placed on a square that already holds one.
    #[error("square {square} is already occupied")]
    Occupied {
        /// The contested square.
        square: Square,
    },
    /// The live-piece counter disagrees with the grid.
    #[error("{color} piece counter is {counted}, board holds {found}")]
    PieceCountMismatch {
        color: Color,
        counted: u8,
        found: u8,
    },
    /// The king counter disagrees with the grid.
    #[error("{color} king counter is {counted}, board holds {found}")]
    KingCountMismatch {
        color: Color,
        counted: u8,
        found: u8,
    },
}
