//! Game Runner
//!
//! Plays engine-vs-engine games through the core's public operations:
//! - Generates legal moves, lets the side to move choose, applies the move
//! - Falls back to a random legal move when search comes back empty
//! - Flags checkmate and stalemate on the state when the game ends
//!
//! # Usage
//!
//! ```bash
//! # Default depths (White 4, Black 3) from the start position
//! cargo run -p game_runner --bin chess-runner
//!
//! # From a config file, with a JSON summary
//! cargo run -p game_runner --bin chess-runner -- --config game.toml --json
//! ```

mod config;
mod runner;

pub use config::*;
pub use runner::*;
