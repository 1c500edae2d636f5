//! Turn tracking and square selection for an interactive game.

use tracing::debug;

use crate::board::Board;
use crate::checkers_move::Move;
use crate::color::Color;
use crate::movegen::{ValidMoves, generate_moves, has_legal_move, valid_moves};
use crate::piece::Piece;
use crate::square::Square;

/// A game in progress: the board, whose turn it is, and the current selection.
///
/// Red moves first. A human player drives the game by selecting squares;
/// a computer player installs whole successor boards via [`Game::ai_move`].
#[derive(Debug, Clone)]
pub struct Game {
    board: Board,
    turn: Color,
    selected: Option<Piece>,
    valid_moves: ValidMoves,
}

impl Game {
    /// Start a new game from the opening setup.
    pub fn new() -> Game {
        Game::from_board(Board::starting_position(), Color::Red)
    }

    /// Start a game from an arbitrary position.
    pub fn from_board(board: Board, turn: Color) -> Game {
        Game {
            board,
            turn,
            selected: None,
            valid_moves: ValidMoves::new(),
        }
    }

    /// Reset to the opening setup with Red to move.
    pub fn reset(&mut self) {
        *self = Game::new();
    }

    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Replace the board wholesale. The turn is left unchanged.
    pub fn set_board(&mut self, board: Board) {
        self.board = board;
        self.clear_selection();
    }

    /// Install a successor board chosen by the engine and pass the turn.
    pub fn ai_move(&mut self, board: Board) {
        self.set_board(board);
        self.change_turn();
    }

    #[inline]
    pub fn turn(&self) -> Color {
        self.turn
    }

    #[inline]
    pub fn selected(&self) -> Option<Piece> {
        self.selected
    }

    /// Destinations of the currently selected piece.
    #[inline]
    pub fn valid_moves(&self) -> &ValidMoves {
        &self.valid_moves
    }

    /// Every legal move of the side to move.
    pub fn legal_moves(&self) -> Vec<Move> {
        generate_moves(&self.board, self.turn)
    }

    /// Handle a click on `square`.
    ///
    /// With a piece selected, a click on one of its destinations plays the
    /// move and passes the turn. Any other click drops the selection and
    /// then tries to select the clicked square. Returns `true` if a piece
    /// of the side to move is selected afterwards.
    pub fn select(&mut self, square: Square) -> bool {
        if self.selected.is_some() {
            if self.try_move(square) {
                return false;
            }
            self.clear_selection();
        }

        match self.board.piece_at(square) {
            Some(piece) if piece.color() == self.turn => {
                self.valid_moves = valid_moves(&self.board, piece);
                self.selected = Some(piece);
                debug!(%square, destinations = self.valid_moves.len(), "piece selected");
                true
            }
            _ => false,
        }
    }

    /// The winner, if the game is over.
    ///
    /// A side with no pieces loses, and so does a side to move that has no
    /// legal move.
    pub fn winner(&self) -> Option<Color> {
        self.board.winner().or_else(|| {
            if has_legal_move(&self.board, self.turn) {
                None
            } else {
                Some(!self.turn)
            }
        })
    }

    fn try_move(&mut self, dest: Square) -> bool {
        let Some(piece) = self.selected else {
            return false;
        };
        if !self.board.is_empty(dest) {
            return false;
        }
        let Some(mv) = self.valid_moves.get(dest) else {
            return false;
        };

        debug!(mv = %mv, captured = mv.captured().len(), "move played");
        let captured = mv.captured().to_vec();
        self.board.apply_move(piece, dest);
        self.board.remove_captured(&captured);
        self.clear_selection();
        self.change_turn();
        true
    }

    fn clear_selection(&mut self) {
        self.selected = None;
        self.valid_moves = ValidMoves::new();
    }

    fn change_turn(&mut self) {
        self.turn = !self.turn;
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}
