pub mod board;
pub mod error;
pub mod movegen;
pub mod perft;
pub mod types;

// Re-export core game logic (not engine-specific)
pub use board::*;
pub use error::FenError;
pub use movegen::*;
pub use perft::{perft, perft_divide};
pub use types::*;

// =============================================================================
// Engine trait: implemented by the negamax and random engines
// =============================================================================

/// Result of a search operation
#[derive(Debug, Clone, Copy)]
pub struct SearchResult {
    /// The move chosen at the root (None if nothing was chosen)
    pub best_move: Option<Move>,
    /// Score in centipawns from the side to move's perspective
    pub score: i32,
    /// Depth searched, in plies
    pub depth: u8,
    /// Number of nodes visited
    pub nodes: u64,
}

impl SearchResult {
    /// Result for a position with nothing to search.
    pub fn none(depth: u8) -> Self {
        Self {
            best_move: None,
            score: 0,
            depth,
            nodes: 0,
        }
    }
}

/// Trait that all move pickers implement.
///
/// The caller passes the position together with the legal moves it already
/// generated for it; the two must agree.
pub trait Engine: Send {
    /// Choose a move for the side to move.
    ///
    /// # Arguments
    /// * `state` - The current position. Engines work on their own copy.
    /// * `valid_moves` - Output of `get_valid_moves` for `state`
    ///
    /// # Returns
    /// SearchResult whose `best_move` is `None` when no move was chosen
    fn search(&mut self, state: &GameState, valid_moves: &[Move]) -> SearchResult;

    /// Returns the engine's display name
    fn name(&self) -> &str;

    /// Reset internal state for a new game
    fn new_game(&mut self) {}
}
