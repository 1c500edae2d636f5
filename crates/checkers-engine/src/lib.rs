//! Evaluation and game-tree search for checkers.

pub mod eval;
pub mod search;

pub use eval::evaluate;
pub use search::{SearchResult, search, search_exhaustive};
