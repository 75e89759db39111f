//! Classical Chess Engine
//!
//! Negamax with alpha-beta pruning over a mailbox board, evaluated by material
//! and piece-square tables. Each side searches to its own depth.

mod eval;
mod handoff;
mod ordering;
mod search;

use chess_core::{Engine, GameState, Move, SearchResult};

/// Classical chess engine using negamax with alpha-beta pruning.
///
/// This engine uses:
/// - Negamax search with alpha-beta pruning
/// - Material plus piece-square evaluation
/// - Capture/threat/centre move ordering at every node
#[derive(Debug, Clone, Default)]
pub struct NegamaxEngine {
    config: SearchConfig,
    /// Node counter for statistics
    nodes: u64,
}

impl NegamaxEngine {
    pub fn new(config: SearchConfig) -> Self {
        Self { config, nodes: 0 }
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Nodes visited by the most recent search.
    pub fn nodes(&self) -> u64 {
        self.nodes
    }
}

impl Engine for NegamaxEngine {
    fn search(&mut self, state: &GameState, valid_moves: &[Move]) -> SearchResult {
        let result = find_best_move(state, valid_moves, &self.config);
        self.nodes = result.nodes;
        result
    }

    fn name(&self) -> &str {
        "Negamax v1.0"
    }

    fn new_game(&mut self) {
        self.nodes = 0;
    }
}

pub use eval::{piece_value, position_bonus, score_board, CHECKMATE, STALEMATE};
pub use handoff::{spawn_search, SearchHandle};
pub use ordering::{move_score, order_moves};
pub use search::{find_best_move, find_move_negamax_alpha_beta, SearchConfig, SearchContext};
