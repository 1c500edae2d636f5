//! Minimax with alpha-beta pruning.

use checkers_core::{Board, Color, generate_moves};

use crate::eval::{blocked_score, evaluate};
use crate::search::{Node, SearchContext, improves, worst_for};

/// Alpha-beta search from `board` with `side` to move.
///
/// `alpha` is the score White is already guaranteed, `beta` the score Red
/// is already guaranteed. A node stops exploring its children once
/// `beta <= alpha`, since the other side will never let play reach it.
/// Called with the full window `(-INF, INF)` it returns the exact minimax
/// score and the same best child as a full minimax search.
pub(crate) fn alpha_beta(
    board: &Board,
    depth: u8,
    mut alpha: i32,
    mut beta: i32,
    side: Color,
    ctx: &mut SearchContext,
) -> Node {
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
        let score = alpha_beta(&child, depth - 1, alpha, beta, !side, ctx).score;

        if improves(side, score, best.score) {
            best = Node {
                score,
                best: Some((mv, child)),
            };
        }

        match side {
            Color::White => alpha = alpha.max(score),
            Color::Red => beta = beta.min(score),
        }
        if beta <= alpha {
            break;
        }
    }

    best
}
