//! Legal move enumeration.

use super::super::{Action, Board};
use tracing::instrument;

/// Every empty cell, in block, then row, then column order.
///
/// Pure function of the board; calling it twice yields the same sequence.
#[instrument(skip(board))]
pub fn legal_actions(board: &Board) -> Vec<Action> {
    Action::all().filter(|&action| board.is_empty(action)).collect()
}

/// Checks if the board is full (all cells occupied).
///
/// A full board with no winner is a draw.
#[instrument(skip(board))]
pub fn is_full(board: &Board) -> bool {
    Action::all().all(|action| !board.is_empty(action))
}
