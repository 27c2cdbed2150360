//! Reinforcement-learning style environment interface.
//!
//! Engines stay clean and readable; this module does the minimal glue:
//! the observation encoding, the environment metadata and the trait
//! drivers program against.

use super::action::{Action, MoveError};
use super::engine::{Engine, StepOutcome};
use super::types::{Board, SIZE};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Board cells shifted into `0..=2`: player two is 0, empty is 1,
/// player one is 2.
pub type Observation = [[[u8; SIZE]; SIZE]; SIZE];

/// Encodes a board as an observation.
pub fn observe(board: &Board) -> Observation {
    board
        .cells()
        .map(|block| block.map(|row| row.map(|cell| (cell.token() + 1) as u8)))
}

/// Static description of an environment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnvSpec {
    /// Stable identifier, e.g. `cubic-tictactoe-v0`.
    pub id: String,
    /// Number of choices along each action coordinate.
    pub action_dims: Vec<usize>,
    /// Shape of the observation array.
    pub observation_shape: Vec<usize>,
    /// Smallest and largest observation value.
    pub observation_range: (u8, u8),
    /// Smallest and largest reward.
    pub reward_range: (f32, f32),
}

/// Identifier of the cube environment.
pub const CUBE_ENV_ID: &str = "cubic-tictactoe-v0";

/// An environment that drivers can reset, step and render.
pub trait Environment {
    /// Action type accepted by `step`.
    type Action;
    /// Observation type produced by `reset` and `step`.
    type Observation;
    /// Error returned for rejected actions.
    type Error: std::error::Error;

    /// Metadata describing the action and observation spaces.
    fn spec(&self) -> EnvSpec;

    /// Returns to the initial state.
    fn reset(&mut self) -> Self::Observation;

    /// Applies one action.
    fn step(&mut self, action: Self::Action) -> Result<StepOutcome, Self::Error>;

    /// Actions that are legal right now.
    fn legal_actions(&self) -> Vec<Self::Action>;

    /// Human-readable rendering of the current state.
    fn render(&self) -> String;
}

impl Environment for Engine {
    type Action = Action;
    type Observation = Observation;
    type Error = MoveError;

    fn spec(&self) -> EnvSpec {
        EnvSpec {
            id: CUBE_ENV_ID.to_string(),
            action_dims: vec![SIZE; 3],
            observation_shape: vec![SIZE; 3],
            observation_range: (0, 2),
            reward_range: (0.0, 1.0),
        }
    }

    #[instrument(skip(self))]
    fn reset(&mut self) -> Observation {
        observe(&Engine::reset(self))
    }

    fn step(&mut self, action: Action) -> Result<StepOutcome, MoveError> {
        Engine::step(self, action)
    }

    fn legal_actions(&self) -> Vec<Action> {
        Engine::legal_actions(self)
    }

    fn render(&self) -> String {
        Engine::render(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Cell, Player};

    #[test]
    fn test_observation_shift() {
        let mut board = Board::new();
        board.set(Action::at(0, 0, 0), Cell::Occupied(Player::One));
        board.set(Action::at(2, 1, 0), Cell::Occupied(Player::Two));

        let obs = observe(&board);
        assert_eq!(obs[0][0][0], 2);
        assert_eq!(obs[2][1][0], 0);
        assert_eq!(obs[1][1][1], 1);
    }

    #[test]
    fn test_reset_observation_is_all_empty() {
        let mut engine = Engine::new();
        let obs = Environment::reset(&mut engine);
        assert!(obs.iter().flatten().flatten().all(|&v| v == 1));
    }

    #[test]
    fn test_spec_describes_cube() {
        let spec = Engine::new().spec();
        assert_eq!(spec.id, CUBE_ENV_ID);
        assert_eq!(spec.action_dims, vec![3, 3, 3]);
        assert_eq!(spec.observation_range, (0, 2));
    }
}
