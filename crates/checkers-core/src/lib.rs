//! Core checkers types: board representation, move generation, and game rules.

mod board;
mod checkers_move;
mod color;
mod error;
mod game;
mod movegen;
mod perft;
mod piece;
mod square;

pub use board::{Board, PIECES_PER_SIDE, PrettyBoard};
pub use checkers_move::{Captures, Move};
pub use color::Color;
pub use error::BoardError;
pub use game::Game;
pub use movegen::{ValidMoves, generate_moves, has_legal_move, valid_moves};
pub use perft::{divide, perft};
pub use piece::Piece;
pub use square::{BOARD_SIZE, Square};
