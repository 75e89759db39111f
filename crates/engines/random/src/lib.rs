//! Random Move Chess Engine
//!
//! Picks uniformly among the legal moves it is handed. Used as the fallback
//! when search records no best move, and as a baseline opponent.

use chess_core::{Engine, GameState, Move, SearchResult};
use rand::seq::SliceRandom;
use rand::{thread_rng, Rng};

#[cfg(test)]
mod lib_tests;

/// Uniformly random move, `None` only for an empty list.
pub fn find_random_move(valid_moves: &[Move]) -> Option<Move> {
    find_random_move_with(valid_moves, &mut thread_rng())
}

/// Same as [`find_random_move`] with a caller-supplied generator, for
/// reproducible games.
pub fn find_random_move_with<R: Rng + ?Sized>(valid_moves: &[Move], rng: &mut R) -> Option<Move> {
    valid_moves.choose(rng).copied()
}

/// A chess engine that plays random legal moves.
#[derive(Debug, Clone, Default)]
pub struct RandomEngine {
    nodes: u64,
}

impl RandomEngine {
    pub fn new() -> Self {
        Self { nodes: 0 }
    }
}

impl Engine for RandomEngine {
    fn search(&mut self, _state: &GameState, valid_moves: &[Move]) -> SearchResult {
        self.nodes = 1;

        SearchResult {
            best_move: find_random_move(valid_moves),
            score: 0,
            depth: 1,
            nodes: self.nodes,
        }
    }

    fn name(&self) -> &str {
        "Random v1.0"
    }

    fn new_game(&mut self) {
        self.nodes = 0;
    }
}
