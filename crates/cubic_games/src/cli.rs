//! Command-line interface for cubic_games.

use clap::Parser;
use cubic_games::{ConfigOverrides, Mode, OutputFormat};

/// Cubic Games - 3x3x3 tic-tac-toe against a random agent
#[derive(Parser, Debug)]
#[command(name = "cubic_games")]
#[command(about = "Play 3x3x3 tic-tac-toe in the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML match config. Defaults apply when omitted.
    #[arg(short, long)]
    pub config: Option<std::path::PathBuf>,

    /// Who plays: a human against the random agent, or two random agents
    #[arg(short, long, value_enum)]
    pub mode: Option<Mode>,

    /// Number of games to play
    #[arg(short = 'n', long)]
    pub games: Option<u32>,

    /// RNG seed for seat shuffling and random agents
    #[arg(long)]
    pub seed: Option<u64>,

    /// Do not print the board after each move
    #[arg(short, long)]
    pub quiet: bool,

    /// Summary output format
    #[arg(long, value_enum)]
    pub format: Option<OutputFormat>,
}

impl Cli {
    /// The flags that take precedence over the config file.
    pub fn overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            mode: self.mode,
            games: self.games,
            seed: self.seed,
            format: self.format,
            quiet: self.quiet,
        }
    }
}
