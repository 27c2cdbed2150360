//! Agents, driver loop and configuration for 3x3x3 tic-tac-toe.
//!
//! # Architecture
//!
//! - **Agents**: a random agent and a human at the terminal
//! - **Driver**: seats two agents at an engine and plays games
//! - **Config**: TOML match settings
//!
//! # Example
//!
//! ```
//! use cubic_games::{Agent, Driver, RandomAgent};
//!
//! # fn main() -> anyhow::Result<()> {
//! let mut agents: [Box<dyn Agent>; 2] = [
//!     Box::new(RandomAgent::new("alpha", 1)),
//!     Box::new(RandomAgent::new("beta", 2)),
//! ];
//! let mut driver = Driver::new(false, Vec::new());
//! let summary = driver.play_series(&mut agents, 3)?;
//! assert_eq!(*summary.games(), 3);
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod agents;
mod config;
mod driver;

pub use agents::{Agent, HumanAgent, PROMPT, RandomAgent};
pub use config::{ConfigError, ConfigOverrides, MatchConfig, Mode, OutputFormat};
pub use driver::{Driver, GameOutcome, GameReport, Summary};
