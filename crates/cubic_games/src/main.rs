//! Cubic Games - play 3x3x3 tic-tac-toe from the terminal.

#![warn(missing_docs)]

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use cli::Cli;
use cubic_games::{Agent, Driver, HumanAgent, MatchConfig, Mode, OutputFormat, RandomAgent};
use rand::seq::SliceRandom;
use rand::{RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = load_config(&cli)?;
    run(config)
}

/// Reads the config file, if any, then applies command-line overrides.
#[instrument(skip(cli))]
fn load_config(cli: &Cli) -> Result<MatchConfig> {
    let config = MatchConfig::load(cli.config.as_deref(), &cli.overrides())
        .context("Loading match configuration")?;
    Ok(config)
}

/// Seats the agents and plays the configured games.
#[instrument(skip(config), fields(mode = %config.mode()))]
fn run(config: MatchConfig) -> Result<()> {
    let seed = config.seed().unwrap_or_else(rand::random);
    info!(seed, "Seeding match");
    let mut rng = ChaCha8Rng::seed_from_u64(seed);

    let mut agents: [Box<dyn Agent>; 2] = match config.mode() {
        Mode::HumanVsRandom => {
            let mut agents: [Box<dyn Agent>; 2] = [
                Box::new(HumanAgent::stdio("Human")),
                Box::new(RandomAgent::new("Machine", rng.next_u64())),
            ];
            agents.shuffle(&mut rng);
            println!(
                "{} is player 1 (x), {} is player 2 (o)",
                agents[0].name(),
                agents[1].name()
            );
            println!("==== Starting Human vs Machine Game ====\n");
            agents
        }
        Mode::RandomVsRandom => {
            println!("==== Starting Machine vs Machine Game ====\n");
            [
                Box::new(RandomAgent::new("Machine 1", rng.next_u64())),
                Box::new(RandomAgent::new("Machine 2", rng.next_u64())),
            ]
        }
    };

    let stdout = std::io::stdout();
    let mut driver = Driver::new(*config.render(), stdout.lock());
    let summary = driver.play_series(&mut agents, *config.games())?;

    match config.format() {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&summary)?),
        OutputFormat::Text if *config.games() > 1 => println!("{summary}"),
        OutputFormat::Text => {}
    }
    Ok(())
}
