//! Monotonic board invariant: cells never change once set.

use super::super::{Board, Cell, GameState, Player};
use super::Invariant;

/// Invariant: Board cells are monotonic (never overwritten).
///
/// Replaying the history onto an empty board, alternating from player one,
/// must never hit an occupied cell and must reproduce the current board.
pub struct MonotonicBoardInvariant;

impl Invariant<GameState> for MonotonicBoardInvariant {
    fn holds(state: &GameState) -> bool {
        let mut reconstructed = Board::new();
        let mut player = Player::One;

        for &action in state.history() {
            if !reconstructed.is_empty(action) {
                return false;
            }
            reconstructed.set(action, Cell::Occupied(player));
            player = player.opponent();
        }

        reconstructed == *state.board()
    }

    fn description() -> &'static str {
        "Board cells are monotonic (never overwritten)"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Action;

    #[test]
    fn test_empty_game_holds() {
        assert!(MonotonicBoardInvariant::holds(&GameState::new()));
    }

    #[test]
    fn test_moves_hold() {
        let mut state = GameState::new();
        state.apply_move(Action::at(0, 1, 2), Player::One);
        state.apply_move(Action::at(2, 1, 0), Player::Two);
        assert!(MonotonicBoardInvariant::holds(&state));
    }

    #[test]
    fn test_overwritten_cell_violates() {
        let mut state = GameState::new();
        state.apply_move(Action::at(1, 1, 1), Player::One);
        state
            .board_mut()
            .set(Action::at(1, 1, 1), Cell::Occupied(Player::Two));
        assert!(!MonotonicBoardInvariant::holds(&state));
    }

    #[test]
    fn test_repeated_history_violates() {
        let mut state = GameState::new();
        state.apply_move(Action::at(1, 1, 1), Player::One);
        state.apply_move(Action::at(1, 1, 1), Player::Two);
        assert!(!MonotonicBoardInvariant::holds(&state));
    }
}
