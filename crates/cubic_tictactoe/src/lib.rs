//! Pure 3x3x3 tic-tac-toe game logic.
//!
//! Two players alternate placing tokens on a cube of 27 cells. A player
//! wins by filling any of the 49 winning lines; a full board with no
//! completed line is a draw.
//!
//! # Example
//!
//! ```
//! use cubic_tictactoe::{Action, Engine, GameStatus, Player};
//!
//! # fn main() -> Result<(), cubic_tictactoe::MoveError> {
//! let mut engine = Engine::new();
//! engine.reset();
//! for (block, row, col) in [(0, 0, 0), (1, 0, 0), (0, 0, 1), (1, 0, 1), (0, 0, 2)] {
//!     engine.step(Action::new(block, row, col)?)?;
//! }
//! assert_eq!(engine.status(), GameStatus::Won(Player::One));
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod engine;
mod env;
mod types;

pub mod invariants;
pub mod rules;

pub use action::{Action, MoveError, ParseActionError};
pub use engine::{Engine, StepInfo, StepOutcome};
pub use env::{CUBE_ENV_ID, EnvSpec, Environment, Observation, observe};
pub use rules::{Line, all_lines, check_win, is_full, legal_actions, lines_through};
pub use types::{Board, CELLS, Cell, GameState, GameStatus, Player, SIZE};
