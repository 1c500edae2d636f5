//! Game-tree search over successor boards.
//!
//! White maximizes and Red minimizes the [`evaluate`](crate::evaluate)
//! score. Every node works on its own copy of the board: a child is built
//! with [`Board::make_move`], so siblings never observe each other's moves.

pub mod alphabeta;
pub mod minimax;

use checkers_core::{Board, Color, Move};
use tracing::debug;

/// Score bound larger than any reachable evaluation.
pub const INF: i32 = 100_000;

/// Result of a completed search.
#[derive(Debug, Clone)]
pub struct SearchResult {
    /// Score of the position from White's perspective.
    pub score: i32,
    /// Best move for the side to move, if it had any to search.
    pub best_move: Option<Move>,
    /// The board after `best_move`, ready to be installed by the caller.
    pub successor: Option<Board>,
    /// Total nodes visited.
    pub nodes: u64,
    /// Depth searched, in plies.
    pub depth: u8,
}

/// Score and chosen child of one search node.
#[derive(Debug, Clone)]
pub(crate) struct Node {
    pub score: i32,
    pub best: Option<(Move, Board)>,
}

impl Node {
    fn leaf(score: i32) -> Node {
        Node { score, best: None }
    }
}

/// Counters threaded through a search.
#[derive(Debug, Default)]
pub(crate) struct SearchContext {
    pub nodes: u64,
}

/// Return `true` if `score` beats the running best for `side`.
///
/// Only a strict improvement replaces the running best, so among equally
/// scored moves the first in generation order is kept.
#[inline]
fn improves(side: Color, score: i32, best: i32) -> bool {
    match side {
        Color::White => score > best,
        Color::Red => score < best,
    }
}

/// Starting value of the running best for `side`.
#[inline]
fn worst_for(side: Color) -> i32 {
    match side {
        Color::White => -INF,
        Color::Red => INF,
    }
}

/// Search `depth` plies with alpha-beta pruning, `side` to move.
pub fn search(board: &Board, depth: u8, side: Color) -> SearchResult {
    debug!(depth, %side, "alpha-beta search started");
    let mut ctx = SearchContext::default();
    let node = alphabeta::alpha_beta(board, depth, -INF, INF, side, &mut ctx);
    finish(node, ctx, depth)
}

/// Search `depth` plies visiting every node, `side` to move.
///
/// Returns the same score and choice as [`search`]; kept as a reference
/// for testing the pruning.
pub fn search_exhaustive(board: &Board, depth: u8, side: Color) -> SearchResult {
    debug!(depth, %side, "minimax search started");
    let mut ctx = SearchContext::default();
    let node = minimax::minimax(board, depth, side, &mut ctx);
    finish(node, ctx, depth)
}

fn finish(node: Node, ctx: SearchContext, depth: u8) -> SearchResult {
    let (best_move, successor) = match node.best {
        Some((mv, board)) => (Some(mv), Some(board)),
        None => (None, None),
    };
    debug!(
        score = node.score,
        nodes = ctx.nodes,
        best = ?best_move,
        "search finished"
    );
    SearchResult {
        score: node.score,
        best_move,
        successor,
        nodes: ctx.nodes,
        depth,
    }
}

#[cfg(test)]
mod tests {
    use checkers_core::{Board, Color, Square, generate_moves};

    use super::*;
    use crate::eval::{WIN_SCORE, evaluate};

    fn sq(row: u8, col: u8) -> Square {
        Square::new(row, col).unwrap()
    }

    #[test]
    fn depth_1_returns_legal_move() {
        let board = Board::starting_position();
        let result = search(&board, 1, Color::Red);
        let best = result.best_move.expect("should find a move at depth 1");
        assert!(generate_moves(&board, Color::Red).contains(&best));
        assert_eq!(result.successor, Some(board.make_move(&best)));
    }

    #[test]
    fn depth_0_is_static_eval() {
        let board = Board::starting_position();
        let result = search(&board, 0, Color::White);
        assert_eq!(result.score, evaluate(&board));
        assert!(result.best_move.is_none());
        assert!(result.successor.is_none());
        assert_eq!(result.nodes, 1);
    }

    #[test]
    fn white_takes_free_piece() {
        let mut board = Board::empty();
        board.set_piece(sq(3, 4), Color::White, false).unwrap();
        board.set_piece(sq(4, 5), Color::Red, false).unwrap();
        board.set_piece(sq(7, 0), Color::Red, false).unwrap();

        let result = search(&board, 1, Color::White);
        let best = result.best_move.unwrap();
        assert_eq!(best.to(), sq(5, 6));
        assert_eq!(result.score, 0);
    }

    #[test]
    fn red_avoids_losing_a_piece() {
        // Red man on (4,3) may step to (3,2) or (3,4). Stepping to (3,4)
        // walks into White's jump from (2,5) to (4,3).
        let mut board = Board::empty();
        board.set_piece(sq(4, 3), Color::Red, false).unwrap();
        board.set_piece(sq(7, 6), Color::Red, false).unwrap();
        board.set_piece(sq(2, 5), Color::White, false).unwrap();
        board.set_piece(sq(0, 1), Color::White, false).unwrap();

        let result = search(&board, 2, Color::Red);
        let best = result.best_move.unwrap();
        assert_ne!(best.to(), sq(3, 4), "walked into a capture");
        assert_eq!(result.score, 0);
    }

    #[test]
    fn terminal_board_is_not_expanded() {
        let mut board = Board::empty();
        board.set_piece(sq(3, 4), Color::White, false).unwrap();
        let result = search(&board, 3, Color::White);
        assert_eq!(result.score, 1);
        assert!(result.best_move.is_none());
        assert_eq!(result.nodes, 1);
    }

    #[test]
    fn blocked_side_scores_as_loss() {
        let mut board = Board::empty();
        board.set_piece(sq(0, 1), Color::Red, false).unwrap();
        board.set_piece(sq(5, 4), Color::White, false).unwrap();

        let result = search(&board, 2, Color::Red);
        assert_eq!(result.score, WIN_SCORE);
        assert!(result.best_move.is_none());
    }

    #[test]
    fn search_does_not_mutate_input() {
        let board = Board::starting_position();
        let before = board;
        search(&board, 3, Color::Red);
        search_exhaustive(&board, 3, Color::White);
        assert_eq!(board, before);
    }

    #[test]
    fn pruning_visits_fewer_nodes() {
        let board = Board::starting_position();
        let pruned = search(&board, 4, Color::Red);
        let full = search_exhaustive(&board, 4, Color::Red);
        assert_eq!(pruned.score, full.score);
        assert!(pruned.nodes <= full.nodes);
    }

    #[test]
    fn improves_is_strict() {
        assert!(improves(Color::White, 2, 1));
        assert!(!improves(Color::White, 1, 1));
        assert!(improves(Color::Red, 0, 1));
        assert!(!improves(Color::Red, 1, 1));
        assert_eq!(worst_for(Color::White), -INF);
        assert_eq!(worst_for(Color::Red), INF);
    }
}
