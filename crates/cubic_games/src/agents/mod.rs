//! Agent trait and implementations.

mod human;
mod random;

pub use human::{HumanAgent, PROMPT};
pub use random::RandomAgent;

use anyhow::Result;
use cubic_tictactoe::{Action, Board};

/// Something that picks moves for one seat.
pub trait Agent {
    /// Chooses the next move for `board`.
    ///
    /// Returns `None` when the agent wants to stop playing.
    fn act(&mut self, board: &Board) -> Result<Option<Action>>;

    /// Returns the agent's display name.
    fn name(&self) -> &str;
}
