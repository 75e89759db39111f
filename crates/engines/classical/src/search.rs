//! Negamax search with alpha-beta pruning

use std::time::Instant;

use chess_core::{Color, GameState, Move, SearchResult};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::eval::{score_board, CHECKMATE, STALEMATE};
use crate::ordering::order_moves;

/// Search depth per side, in plies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    pub white_depth: u8,
    pub black_depth: u8,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            white_depth: 4,
            black_depth: 3,
        }
    }
}

impl SearchConfig {
    pub fn depth_for(&self, color: Color) -> u8 {
        match color {
            Color::White => self.white_depth,
            Color::Black => self.black_depth,
        }
    }
}

/// Per-search bookkeeping threaded through the recursion.
#[derive(Debug, Clone)]
pub struct SearchContext {
    /// Depth the root call was made with; the best move is only recorded there.
    pub root_depth: u8,
    pub best_move: Option<Move>,
    pub nodes: u64,
}

impl SearchContext {
    pub fn new(root_depth: u8) -> Self {
        Self {
            root_depth,
            best_move: None,
            nodes: 0,
        }
    }
}

/// Searches the position and returns the best move with its score.
///
/// # Arguments
/// * `state` - The position to search; a private copy is searched
/// * `valid_moves` - Legal moves of `state`, as returned by `get_valid_moves`
/// * `config` - Per-side depth; the side to move picks its own
///
/// # Returns
/// `SearchResult` whose `best_move` is `None` when the list is empty or no
/// move scored above the mated bound. Callers fall back to a random move then.
pub fn find_best_move(
    state: &GameState,
    valid_moves: &[Move],
    config: &SearchConfig,
) -> SearchResult {
    let side = state.side_to_move();
    let depth = config.depth_for(side);
    if valid_moves.is_empty() || depth == 0 {
        return SearchResult::none(depth);
    }

    let start = Instant::now();
    let mut tmp = state.clone();
    let mut moves = valid_moves.to_vec();
    order_moves(&mut moves, &tmp);

    let mut ctx = SearchContext::new(depth);
    let score = find_move_negamax_alpha_beta(
        &mut tmp,
        &moves,
        depth,
        -CHECKMATE,
        CHECKMATE,
        side.multiplier(),
        &mut ctx,
    );

    info!(
        side = ?side,
        depth,
        nodes = ctx.nodes,
        score,
        best = %ctx.best_move.map(|m| m.to_string()).unwrap_or_else(|| "none".into()),
        elapsed = ?start.elapsed(),
        "search finished"
    );

    SearchResult {
        best_move: ctx.best_move,
        score,
        depth,
        nodes: ctx.nodes,
    }
}

/// Recursive negamax search with alpha-beta pruning.
///
/// `valid_moves` must already be ordered. Scores are from the perspective of
/// the side to move; `turn_multiplier` is +1 when that is White. Every move
/// applied here is undone before returning, cutoffs included.
pub fn find_move_negamax_alpha_beta(
    state: &mut GameState,
    valid_moves: &[Move],
    depth: u8,
    mut alpha: i32,
    beta: i32,
    turn_multiplier: i32,
    ctx: &mut SearchContext,
) -> i32 {
    ctx.nodes += 1;
    if depth == 0 {
        return turn_multiplier * score_board(state);
    }

    if valid_moves.is_empty() && depth < ctx.root_depth {
        let king = state.king_location(state.side_to_move());
        return if state.square_under_attack(king) {
            -CHECKMATE
        } else {
            STALEMATE
        };
    }

    let mut best = -CHECKMATE;
    for &mv in valid_moves {
        state.make_move(mv);
        // Leaves never look at their move list
        let next_moves = if depth > 1 {
            let mut next = state.get_valid_moves();
            order_moves(&mut next, state);
            next
        } else {
            Vec::new()
        };
        let score = -find_move_negamax_alpha_beta(
            state,
            &next_moves,
            depth - 1,
            -beta,
            -alpha,
            -turn_multiplier,
            ctx,
        );
        if score > best {
            best = score;
            if depth == ctx.root_depth {
                ctx.best_move = Some(mv);
                debug!(%mv, score, "new best root move");
            }
        }
        state.undo_move();

        alpha = alpha.max(best);
        if beta <= alpha {
            break;
        }
    }

    best
}

#[cfg(test)]
#[path = "search_tests.rs"]
mod search_tests;
