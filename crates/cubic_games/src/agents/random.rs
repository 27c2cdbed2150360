//! Agent that picks uniformly among the legal moves.

use super::Agent;
use anyhow::Result;
use cubic_tictactoe::{Action, Board, legal_actions};
use rand::SeedableRng;
use rand::seq::SliceRandom;
use rand_chacha::ChaCha8Rng;
use tracing::{debug, instrument};

/// Uniform random agent with a seeded, reproducible RNG.
#[derive(Debug, Clone)]
pub struct RandomAgent {
    name: String,
    rng: ChaCha8Rng,
}

impl RandomAgent {
    /// Creates a random agent; the same seed replays the same choices.
    #[instrument(skip(name))]
    pub fn new(name: impl Into<String>, seed: u64) -> Self {
        Self {
            name: name.into(),
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }
}

impl Agent for RandomAgent {
    #[instrument(skip_all, fields(agent = %self.name))]
    fn act(&mut self, board: &Board) -> Result<Option<Action>> {
        let legal = legal_actions(board);
        let Some(&action) = legal.choose(&mut self.rng) else {
            anyhow::bail!("No legal moves available");
        };
        debug!(%action, options = legal.len(), "Random agent chose move");
        Ok(Some(action))
    }

    fn name(&self) -> &str {
        &self.name
    }
}
