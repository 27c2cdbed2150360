//! Alternating turn invariant: player one, player two, player one, ...

use super::super::{GameState, Player};
use super::Invariant;

/// Invariant: Players alternate turns.
///
/// Player one has made either as many moves as player two or one more,
/// and the player to move follows from the round parity.
pub struct AlternatingTurnInvariant;

impl Invariant<GameState> for AlternatingTurnInvariant {
    fn holds(state: &GameState) -> bool {
        let ones = state.board().count(Player::One);
        let twos = state.board().count(Player::Two);
        if ones != twos && ones != twos + 1 {
            return false;
        }

        let expected_next = if state.round() % 2 == 0 {
            Player::One
        } else {
            Player::Two
        };

        state.to_move() == expected_next
    }

    fn description() -> &'static str {
        "Players alternate turns (one, two, one, ...)"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Action, Cell};

    #[test]
    fn test_empty_game_holds() {
        let state = GameState::new();
        assert!(AlternatingTurnInvariant::holds(&state));
        assert_eq!(state.to_move(), Player::One);
    }

    #[test]
    fn test_alternating_sequence_holds() {
        let mut state = GameState::new();
        let mut player = Player::One;
        for action in Action::all().take(5) {
            state.apply_move(action, player);
            player = player.opponent();
        }
        assert!(AlternatingTurnInvariant::holds(&state));
        assert_eq!(state.to_move(), Player::Two);
    }

    #[test]
    fn test_same_player_twice_violates() {
        let mut state = GameState::new();
        state.apply_move(Action::at(0, 0, 0), Player::One);
        state
            .board_mut()
            .set(Action::at(0, 0, 1), Cell::Occupied(Player::One));
        assert!(!AlternatingTurnInvariant::holds(&state));
    }
}
