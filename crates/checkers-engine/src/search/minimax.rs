//! Plain minimax without pruning.

use checkers_core::{Board, Color, generate_moves};

use crate::eval::{blocked_score, evaluate};
use crate::search::{Node, SearchContext, improves, worst_for};

/// Full-width minimax from `board` with `side` to move.
pub(crate) fn minimax(board: &Board, depth: u8, side: Color, ctx: &mut SearchContext) -> Node {
    ctx.nodes += 1;

    if depth == 0 || board.winner().is_some() {
        return Node::leaf(evaluate(board));
    }

    let moves = generate_moves(board, side);
    if moves.is_empty() {
        return Node::leaf(blocked_score(side));
    }

    let mut best = Node::leaf(worst_for(side));
    for mv in moves {
        let child = board.make_move(&mv);
        let score = minimax(&child, depth - 1, !side, ctx).score;
        if improves(side, score, best.score) {
            best = Node {
                score,
                best: Some((mv, child)),
            };
        }
    }
    best
}
