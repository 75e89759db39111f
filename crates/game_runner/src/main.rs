//! chess-runner CLI
//!
//! Play one engine-vs-engine game and print the result.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use game_runner::{GameConfig, GameRunner, PlayerKind};
use tracing_subscriber::EnvFilter;

/// Flags override values from the config file.
#[derive(Debug, Parser)]
#[command(name = "chess-runner", version, about = "Play a negamax chess game headlessly")]
struct Cli {
    /// TOML game config
    #[arg(long)]
    config: Option<PathBuf>,
    /// Player for White: negamax or random
    #[arg(long)]
    white: Option<PlayerKind>,
    /// Player for Black: negamax or random
    #[arg(long)]
    black: Option<PlayerKind>,
    #[arg(long)]
    white_depth: Option<u8>,
    #[arg(long)]
    black_depth: Option<u8>,
    /// Stop undecided after this many plies
    #[arg(long)]
    max_plies: Option<u32>,
    /// Starting position in FEN
    #[arg(long)]
    fen: Option<String>,
    /// Seed for random choices
    #[arg(long)]
    seed: Option<u64>,
    /// Print the summary as JSON
    #[arg(long)]
    json: bool,
}

impl Cli {
    fn apply(&self, config: &mut GameConfig) {
        if let Some(kind) = self.white {
            config.white = kind;
        }
        if let Some(kind) = self.black {
            config.black = kind;
        }
        if let Some(depth) = self.white_depth {
            config.search.white_depth = depth;
        }
        if let Some(depth) = self.black_depth {
            config.search.black_depth = depth;
        }
        if let Some(plies) = self.max_plies {
            config.max_plies = plies;
        }
        if let Some(fen) = &self.fen {
            config.fen = Some(fen.clone());
        }
        if let Some(seed) = self.seed {
            config.seed = Some(seed);
        }
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let mut config = match &cli.config {
        Some(path) => GameConfig::load(path)
            .with_context(|| format!("loading config from {}", path.display()))?,
        None => GameConfig::default(),
    };
    cli.apply(&mut config);

    let mut runner = GameRunner::new(&config).context("setting up the game")?;
    let summary = runner.play();

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else {
        println!("{}", runner.state());
        println!();
        println!("{summary}");
    }
    Ok(())
}
