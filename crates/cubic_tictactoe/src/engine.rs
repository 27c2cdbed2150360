//! Game engine for 3x3x3 tic-tac-toe.
//!
//! The engine owns the [`GameState`] and is the only thing that mutates it.
//! Callers see the board through shared references or owned snapshots.

use super::action::{Action, MoveError};
use super::env::{Observation, observe};
use super::invariants::{CubeInvariants, InvariantSet};
use super::rules;
use super::types::{Board, CELLS, GameState, GameStatus, Player};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

/// Diagnostic details attached to each step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StepInfo {
    /// Player who made the move.
    pub mover: Player,
    /// Round count after the move.
    pub round: usize,
    /// Status after the move.
    pub status: GameStatus,
}

/// Result of a successful [`Engine::step`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StepOutcome {
    /// Board after the move, in the shifted observation encoding.
    pub observation: Observation,
    /// 1.0 if the move won the game, else 0.0.
    pub reward: f32,
    /// True if the game ended on this move.
    pub done: bool,
    /// Auxiliary information.
    pub info: StepInfo,
}

/// 3x3x3 tic-tac-toe engine.
///
/// State machine: `InProgress` until a move completes a line (`Won`) or
/// fills the 27th cell (`Draw`). Terminal states reject further moves.
#[derive(Debug, Clone, Default)]
pub struct Engine {
    state: GameState,
}

impl Engine {
    /// Creates a new game with player one to move.
    #[instrument]
    pub fn new() -> Self {
        Self {
            state: GameState::new(),
        }
    }

    /// Rebuilds a game by playing `actions` in order from the start.
    #[instrument]
    pub fn replay(actions: &[Action]) -> Result<Self, MoveError> {
        let mut engine = Self::new();
        for &action in actions {
            engine.step(action)?;
        }
        Ok(engine)
    }

    /// Resets to the initial state and returns the empty board.
    #[instrument(skip(self))]
    pub fn reset(&mut self) -> Board {
        self.state = GameState::new();
        debug!("Game reset");
        self.state.board().clone()
    }

    /// Plays `action` for the player to move.
    ///
    /// Rejects the move, leaving the state untouched, if the game is over,
    /// the cell is occupied, or (in debug builds) the resulting state
    /// breaks a game invariant.
    #[instrument(skip(self), fields(round = self.state.round(), mover = ?self.state.to_move()))]
    pub fn step(&mut self, action: Action) -> Result<StepOutcome, MoveError> {
        if self.state.status().is_terminal() {
            return Err(MoveError::GameOver);
        }
        if !self.state.board().is_empty(action) {
            return Err(MoveError::CellOccupied(action));
        }

        let mover = self.state.to_move();
        let mut next = self.state.clone();
        next.apply_move(action, mover);

        let won = rules::check_win(next.board(), action, mover);
        let done = won || next.round() == CELLS;
        if won {
            next.set_status(GameStatus::Won(mover));
        } else if done {
            next.set_status(GameStatus::Draw);
        }

        #[cfg(debug_assertions)]
        verify(&next)?;

        self.state = next;
        if won {
            info!(%action, ?mover, round = self.state.round(), "Game won");
        } else if done {
            info!(round = self.state.round(), "Game drawn");
        } else {
            debug!(%action, "Move applied");
        }

        Ok(StepOutcome {
            observation: observe(self.state.board()),
            reward: if won { 1.0 } else { 0.0 },
            done,
            info: StepInfo {
                mover,
                round: self.state.round(),
                status: self.state.status(),
            },
        })
    }

    /// Verifies the game invariants against the current state.
    #[instrument(skip(self))]
    pub fn check_invariants(&self) -> Result<(), MoveError> {
        verify(&self.state)
    }

    /// Every empty cell on the current board.
    pub fn legal_actions(&self) -> Vec<Action> {
        rules::legal_actions(self.state.board())
    }

    /// Renders the board as text.
    pub fn render(&self) -> String {
        self.state.board().to_string()
    }

    /// Returns the current game state.
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        self.state.board()
    }

    /// Returns the player to move.
    pub fn to_move(&self) -> Player {
        self.state.to_move()
    }

    /// Number of moves played so far.
    pub fn round(&self) -> usize {
        self.state.round()
    }

    /// Returns the game status.
    pub fn status(&self) -> GameStatus {
        self.state.status()
    }

    /// Returns the move history.
    pub fn history(&self) -> &[Action] {
        self.state.history()
    }

    /// Returns true once the game has been won or drawn.
    pub fn is_done(&self) -> bool {
        self.state.status().is_terminal()
    }
}

fn verify(state: &GameState) -> Result<(), MoveError> {
    CubeInvariants::check_all(state).map_err(|violations| {
        let descriptions = violations
            .iter()
            .map(|v| v.description.as_str())
            .collect::<Vec<_>>()
            .join("; ");
        MoveError::InvariantViolation(format!("Postcondition failed: {}", descriptions))
    })
}
