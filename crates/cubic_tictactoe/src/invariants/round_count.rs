//! Round count invariant: history length matches occupied cells.

use super::super::{GameState, types::CELLS};
use super::Invariant;

/// Invariant: the round count equals the number of occupied cells.
///
/// Every move in history corresponds to exactly one occupied cell,
/// and no more than 27 moves are ever recorded.
pub struct RoundCountInvariant;

impl Invariant<GameState> for RoundCountInvariant {
    fn holds(state: &GameState) -> bool {
        state.round() <= CELLS && state.round() == state.board().filled()
    }

    fn description() -> &'static str {
        "Round count matches number of occupied cells"
    }
}
