//! Game runner: plays one game through the public move operations

use std::fmt;

use chess_core::{Color, Engine, GameState, Move};
use classical_engine::{spawn_search, SearchConfig};
use rand::rngs::StdRng;
use rand::SeedableRng;
use random_engine::find_random_move_with;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::config::{ConfigError, GameConfig, PlayerKind};

/// How a game ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GameOutcome {
    WhiteWins,
    BlackWins,
    Stalemate,
    MaxPliesReached,
}

impl fmt::Display for GameOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            GameOutcome::WhiteWins => "1-0 (checkmate)",
            GameOutcome::BlackWins => "0-1 (checkmate)",
            GameOutcome::Stalemate => "1/2-1/2 (stalemate)",
            GameOutcome::MaxPliesReached => "* (ply limit)",
        };
        f.write_str(s)
    }
}

/// Report of a finished game
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSummary {
    pub outcome: GameOutcome,
    pub plies: usize,
    /// Moves in long algebraic notation
    pub moves: Vec<String>,
    pub final_fen: String,
}

impl fmt::Display for GameSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Result: {} after {} plies", self.outcome, self.plies)?;
        writeln!(f, "Moves: {}", self.moves.join(" "))?;
        write!(f, "Final position: {}", self.final_fen)
    }
}

/// A move picker for one colour.
pub enum Player {
    /// Negamax search on a worker thread, handed back through a single-slot channel
    Negamax(SearchConfig),
    /// Uniform choice from the runner's seeded generator
    Random,
    /// Any engine searched inline
    Engine(Box<dyn Engine>),
}

impl Player {
    fn from_kind(kind: PlayerKind, search: SearchConfig) -> Self {
        match kind {
            PlayerKind::Negamax => Player::Negamax(search),
            PlayerKind::Random => Player::Random,
        }
    }

    fn name(&self) -> &str {
        match self {
            Player::Negamax(_) => "Negamax",
            Player::Random => "Random",
            Player::Engine(engine) => engine.name(),
        }
    }

    fn pick(
        &mut self,
        state: &GameState,
        valid_moves: &[Move],
        rng: &mut StdRng,
    ) -> Option<Move> {
        match self {
            Player::Negamax(config) => {
                let handle = spawn_search(state.clone(), valid_moves.to_vec(), *config);
                handle.wait().and_then(|r| r.best_move)
            }
            Player::Random => find_random_move_with(valid_moves, rng),
            Player::Engine(engine) => engine.search(state, valid_moves).best_move,
        }
    }
}

/// Runs a single game between two players
pub struct GameRunner {
    state: GameState,
    white: Player,
    black: Player,
    max_plies: u32,
    rng: StdRng,
}

impl GameRunner {
    pub fn new(config: &GameConfig) -> Result<Self, ConfigError> {
        let state = match &config.fen {
            Some(fen) => GameState::from_fen(fen)?,
            None => GameState::new(),
        };
        Ok(Self::with_players(
            state,
            Player::from_kind(config.white, config.search),
            Player::from_kind(config.black, config.search),
            config.max_plies,
            config.seed,
        ))
    }

    pub fn with_players(
        state: GameState,
        white: Player,
        black: Player,
        max_plies: u32,
        seed: Option<u64>,
    ) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self {
            state,
            white,
            black,
            max_plies,
            rng,
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Play until mate, stalemate or the ply limit.
    ///
    /// On an empty move list the terminal flag on the state is set before
    /// returning, the way an interactive front end would.
    pub fn play(&mut self) -> GameSummary {
        if let Player::Engine(engine) = &mut self.white {
            engine.new_game();
        }
        if let Player::Engine(engine) = &mut self.black {
            engine.new_game();
        }
        info!(
            white = self.white.name(),
            black = self.black.name(),
            fen = %self.state.fen(),
            "game started"
        );

        let mut plies = 0u32;
        let outcome = loop {
            let moves = self.state.get_valid_moves();
            if moves.is_empty() {
                if self.state.in_check {
                    self.state.check_mate = true;
                    break match self.state.side_to_move() {
                        Color::White => GameOutcome::BlackWins,
                        Color::Black => GameOutcome::WhiteWins,
                    };
                }
                self.state.stale_mate = true;
                break GameOutcome::Stalemate;
            }
            if plies >= self.max_plies {
                break GameOutcome::MaxPliesReached;
            }

            let mv = self.choose_move(&moves);
            self.state.make_move(mv);
            plies += 1;
            debug!(ply = plies, %mv, "\n{}", self.state);
        };

        let summary = GameSummary {
            outcome,
            plies: self.state.move_log().len(),
            moves: self.state.move_log().map(|m| m.to_string()).collect(),
            final_fen: self.state.fen(),
        };
        info!(outcome = %summary.outcome, plies = summary.plies, "game finished");
        summary
    }

    /// The side to move's choice, or a uniformly random legal move when the
    /// player comes back empty-handed. `moves` must not be empty.
    fn choose_move(&mut self, moves: &[Move]) -> Move {
        let player = match self.state.side_to_move() {
            Color::White => &mut self.white,
            Color::Black => &mut self.black,
        };
        if let Some(mv) = player.pick(&self.state, moves, &mut self.rng) {
            return mv;
        }
        warn!(
            player = player.name(),
            "no move found by search, playing a random one"
        );
        find_random_move_with(moves, &mut self.rng)
            .expect("play checks for an empty move list")
    }
}

/// Take back up to `plies` moves, stopping early at the start of the log.
/// A front end undoes one ply against a human and two when the engine has
/// already replied. Returns how many were undone.
pub fn undo_turn(state: &mut GameState, plies: usize) -> usize {
    let mut undone = 0;
    while undone < plies && state.undo_move().is_some() {
        undone += 1;
    }
    undone
}

#[cfg(test)]
#[path = "runner_tests.rs"]
mod runner_tests;
