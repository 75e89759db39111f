//! Move ordering heuristics for alpha-beta.

use std::cmp::Reverse;

use chess_core::{GameState, Move, PieceKind};

use crate::eval::piece_value;

/// Heuristic desirability of `mv` in `state` (the position before the move).
/// Only affects search order, never the searched value.
pub fn move_score(mv: &Move, state: &GameState) -> i32 {
    let moved = piece_value(mv.piece_moved.kind);
    let mut score = 0;

    match mv.piece_captured {
        Some(captured) => score += 10 * piece_value(captured.kind) - moved,
        None => {
            // Likely hangs the piece
            if state.square_under_attack(mv.end) {
                score -= moved;
            }
            // Escapes an attack
            if state.square_under_attack(mv.start) {
                score += moved / 2;
            }
            // Twice the Manhattan distance from the centre point
            let dist = (7 - 2 * mv.end.row as i32).abs() + (7 - 2 * mv.end.col as i32).abs();
            score += (14 - dist) * 5;
        }
    }

    if mv.is_pawn_promotion {
        score += piece_value(PieceKind::Queen) - piece_value(PieceKind::Pawn);
    }

    score
}

/// Sort `moves` best-first. Ties keep generation order.
pub fn order_moves(moves: &mut [Move], state: &GameState) {
    moves.sort_by_cached_key(|mv| Reverse(move_score(mv, state)));
}

#[cfg(test)]
#[path = "ordering_tests.rs"]
mod ordering_tests;
