//! The checkers board: an 8x8 grid of pieces plus material counters.

use std::fmt;

use crate::checkers_move::Move;
use crate::color::Color;
use crate::error::BoardError;
use crate::piece::Piece;
use crate::square::{BOARD_SIZE, Square};

/// Number of men each side starts with.
pub const PIECES_PER_SIDE: u8 = 12;

/// Complete game position.
///
/// `Board` is a plain `Copy` value: cloning it for a search branch is a flat
/// copy with no heap traffic, so sibling branches never share state.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Board {
    /// Square contents, indexed by [`Square::index()`].
    squares: [Option<Piece>; Square::COUNT],
    /// Live pieces per side, indexed by [`Color::index()`].
    pieces_left: [u8; Color::COUNT],
    /// Live kings per side, indexed by [`Color::index()`].
    kings: [u8; Color::COUNT],
}

impl Board {
    /// Return a board with no pieces.
    pub const fn empty() -> Board {
        Board {
            squares: [None; Square::COUNT],
            pieces_left: [0; Color::COUNT],
            kings: [0; Color::COUNT],
        }
    }

    /// Return the standard opening setup: twelve men per side on the dark
    /// squares of each side's three back rows.
    pub fn starting_position() -> Board {
        let mut board = Board::empty();
        for sq in Square::all().filter(|sq| sq.is_dark()) {
            let color = match sq.row() {
                0..=2 => Color::White,
                5..=7 => Color::Red,
                _ => continue,
            };
            board.squares[sq.index()] = Some(Piece::new(sq, color));
            board.pieces_left[color.index()] += 1;
        }
        board
    }

    /// Put a piece on an empty square, keeping the counters in step.
    pub fn set_piece(&mut self, square: Square, color: Color, king: bool) -> Result<Piece, BoardError> {
        if self.squares[square.index()].is_some() {
            return Err(BoardError::Occupied { square });
        }
        let piece = if king {
            Piece::new_king(square, color)
        } else {
            Piece::new(square, color)
        };
        self.squares[square.index()] = Some(piece);
        self.pieces_left[color.index()] += 1;
        if king {
            self.kings[color.index()] += 1;
        }
        Ok(piece)
    }

    /// Return the piece on `square`, if any.
    #[inline]
    pub fn piece_at(&self, square: Square) -> Option<Piece> {
        self.squares[square.index()]
    }

    /// Return `true` if `square` holds no piece.
    #[inline]
    pub fn is_empty(&self, square: Square) -> bool {
        self.squares[square.index()].is_none()
    }

    /// Number of live pieces (men and kings) for `color`.
    #[inline]
    pub fn pieces_left(&self, color: Color) -> u8 {
        self.pieces_left[color.index()]
    }

    /// Number of live kings for `color`.
    #[inline]
    pub fn kings(&self, color: Color) -> u8 {
        self.kings[color.index()]
    }

    /// Iterate over the pieces of `color` in row-major order.
    pub fn pieces_of(&self, color: Color) -> impl Iterator<Item = Piece> + '_ {
        self.squares
            .iter()
            .flatten()
            .copied()
            .filter(move |piece| piece.color() == color)
    }

    /// Move `piece` to `dest`, vacating its origin.
    ///
    /// The piece is looked up on this board by its square, so a `Piece`
    /// taken from another copy of the position works as well. Reaching the
    /// crowning row promotes a man and bumps the king counter; a king
    /// returning to that row is not counted again.
    ///
    /// Returns the piece as it stands after the move, or `None` if the origin
    /// square was empty.
    pub fn apply_move(&mut self, piece: Piece, dest: Square) -> Option<Piece> {
        let mut moved = self.squares[piece.square().index()].take()?;
        debug_assert!(self.is_empty(dest), "destination {dest} is occupied");

        moved.relocate(dest);
        if dest.row() == moved.color().crowning_row() && moved.crown() {
            self.kings[moved.color().index()] += 1;
        }
        self.squares[dest.index()] = Some(moved);
        Some(moved)
    }

    /// Take captured pieces off the board.
    ///
    /// Squares that are already empty are skipped, so the counters only ever
    /// reflect pieces that were actually removed.
    pub fn remove_captured(&mut self, pieces: &[Piece]) {
        for piece in pieces {
            if let Some(removed) = self.squares[piece.square().index()].take() {
                let color = removed.color().index();
                self.pieces_left[color] -= 1;
                if removed.is_king() {
                    self.kings[color] -= 1;
                }
            }
        }
    }

    /// Return the successor position after `mv`, leaving `self` untouched.
    pub fn make_move(&self, mv: &Move) -> Board {
        let mut next = *self;
        if let Some(piece) = next.piece_at(mv.from()) {
            next.apply_move(piece, mv.to());
            next.remove_captured(mv.captured());
        }
        next
    }

    /// Return the winning color once the other side has no pieces left.
    ///
    /// A side that still has pieces but no legal move is not reported here;
    /// see [`Game::winner`](crate::game::Game::winner).
    pub fn winner(&self) -> Option<Color> {
        if self.pieces_left(Color::Red) == 0 {
            Some(Color::White)
        } else if self.pieces_left(Color::White) == 0 {
            Some(Color::Red)
        } else {
            None
        }
    }

    /// Recount the grid and check it against the cached counters.
    pub fn validate(&self) -> Result<(), BoardError> {
        for color in Color::ALL {
            let mut found = 0u8;
            let mut found_kings = 0u8;
            for piece in self.pieces_of(color) {
                found += 1;
                if piece.is_king() {
                    found_kings += 1;
                }
            }

            let counted = self.pieces_left(color);
            if counted != found {
                return Err(BoardError::PieceCountMismatch { color, counted, found });
            }
            let counted = self.kings(color);
            if counted != found_kings {
                return Err(BoardError::KingCountMismatch {
                    color,
                    counted,
                    found: found_kings,
                });
            }
        }
        Ok(())
    }

    /// Return a pretty-printable wrapper for this board.
    pub fn pretty(&self) -> PrettyBoard<'_> {
        PrettyBoard(self)
    }

    fn row_string(&self, row: u8) -> String {
        (0..BOARD_SIZE)
            .filter_map(|col| Square::new(row, col))
            .map(|sq| self.piece_at(sq).map_or('.', Piece::symbol))
            .collect()
    }
}

impl Default for Board {
    fn default() -> Self {
        Board::starting_position()
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rows: Vec<String> = (0..BOARD_SIZE).map(|row| self.row_string(row)).collect();
        write!(f, "Board(\"{}\")", rows.join("/"))
    }
}

/// Wrapper for pretty-printing a board as an 8x8 grid with row and column labels.
pub struct PrettyBoard<'a>(&'a Board);

impl fmt::Display for PrettyBoard<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "   0 1 2 3 4 5 6 7")?;
        for row in 0..BOARD_SIZE {
            write!(f, "{row} ")?;
            for c in self.0.row_string(row).chars() {
                write!(f, " {c}")?;
            }
            if row + 1 < BOARD_SIZE {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}
