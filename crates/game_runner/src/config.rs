//! Game configuration, loaded from TOML

use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use chess_core::FenError;
use classical_engine::SearchConfig;
use serde::{Deserialize, Serialize};

/// Who picks the moves for one colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlayerKind {
    #[default]
    Negamax,
    Random,
}

impl FromStr for PlayerKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "negamax" | "classical" => Ok(PlayerKind::Negamax),
            "random" => Ok(PlayerKind::Random),
            other => Err(format!("unknown player '{other}' (expected negamax or random)")),
        }
    }
}

impl fmt::Display for PlayerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlayerKind::Negamax => write!(f, "negamax"),
            PlayerKind::Random => write!(f, "random"),
        }
    }
}

/// Configuration for a single game
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub white: PlayerKind,
    pub black: PlayerKind,
    /// Per-side search depth for negamax players
    pub search: SearchConfig,
    /// Plies played before the game is stopped undecided
    pub max_plies: u32,
    /// Starting position; the standard one when unset
    pub fen: Option<String>,
    /// Seed for the random player and the fallback move
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            white: PlayerKind::Negamax,
            black: PlayerKind::Negamax,
            search: SearchConfig::default(),
            max_plies: 200,
            fen: None,
            seed: None,
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid config: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("invalid starting position: {0}")]
    Fen(#[from] FenError),
}

impl GameConfig {
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(s)?)
    }

    /// Load config from a TOML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&contents)
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod config_tests;
