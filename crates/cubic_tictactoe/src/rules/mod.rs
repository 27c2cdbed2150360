//! Game rules for 3x3x3 tic-tac-toe.
//!
//! This module contains pure functions for evaluating game state
//! according to the rules. Rules are separated from board storage
//! so the engine and the invariant checks can share them.

pub mod legal;
pub mod win;

pub use legal::{is_full, legal_actions};
pub use win::{all_lines, check_win, lines_through, Line};
