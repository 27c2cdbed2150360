//! Core domain types for 3x3x3 tic-tac-toe.

use super::action::Action;
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::instrument;

/// Edge length of the cube.
pub const SIZE: usize = 3;

/// Number of cells on the board.
pub const CELLS: usize = SIZE * SIZE * SIZE;

/// Player in the game.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::EnumIter,
)]
pub enum Player {
    /// First player, drawn as `x`.
    One,
    /// Second player, drawn as `o`.
    Two,
}

impl Player {
    /// Returns the opponent player.
    pub fn opponent(self) -> Self {
        match self {
            Player::One => Player::Two,
            Player::Two => Player::One,
        }
    }

    /// Seat number, 1 or 2.
    pub fn number(self) -> u8 {
        match self {
            Player::One => 1,
            Player::Two => 2,
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "player {} ({})", self.number(), Cell::Occupied(*self).symbol())
    }
}

/// A cell of the cube.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Cell {
    /// Unoccupied cell.
    #[default]
    Empty,
    /// Cell holding a player's token.
    Occupied(Player),
}

impl Cell {
    /// Display glyph: `-` for empty, `x` for player one, `o` for player two.
    pub fn symbol(self) -> char {
        match self {
            Cell::Empty => '-',
            Cell::Occupied(Player::One) => 'x',
            Cell::Occupied(Player::Two) => 'o',
        }
    }

    /// Signed token: 0 for empty, 1 for player one, -1 for player two.
    pub fn token(self) -> i8 {
        match self {
            Cell::Empty => 0,
            Cell::Occupied(Player::One) => 1,
            Cell::Occupied(Player::Two) => -1,
        }
    }
}

/// 3x3x3 board, indexed as `[block][row][col]`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Board {
    cells: [[[Cell; SIZE]; SIZE]; SIZE],
}

impl Board {
    /// Creates a new empty board.
    #[instrument]
    pub fn new() -> Self {
        Self {
            cells: [[[Cell::Empty; SIZE]; SIZE]; SIZE],
        }
    }

    /// Gets the cell at the given coordinates.
    pub fn get(&self, action: Action) -> Cell {
        self.cells[action.block()][action.row()][action.col()]
    }

    /// Sets the cell at the given coordinates.
    ///
    /// Unchecked: overwriting an occupied cell is the caller's problem.
    /// The engine only writes cells it has verified are empty.
    pub fn set(&mut self, action: Action, cell: Cell) {
        self.cells[action.block()][action.row()][action.col()] = cell;
    }

    /// Checks if a cell is empty.
    pub fn is_empty(&self, action: Action) -> bool {
        self.get(action) == Cell::Empty
    }

    /// Number of occupied cells.
    pub fn filled(&self) -> usize {
        self.iter().filter(|(_, cell)| *cell != Cell::Empty).count()
    }

    /// Number of cells held by `player`.
    pub fn count(&self, player: Player) -> usize {
        self.iter()
            .filter(|(_, cell)| *cell == Cell::Occupied(player))
            .count()
    }

    /// Iterates cells with their coordinates in block, row, column order.
    pub fn iter(&self) -> impl Iterator<Item = (Action, Cell)> + '_ {
        Action::all().map(move |action| (action, self.get(action)))
    }

    /// Raw cell array.
    pub fn cells(&self) -> &[[[Cell; SIZE]; SIZE]; SIZE] {
        &self.cells
    }
}

/// Text grid: one line per row, the three blocks side by side.
impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..SIZE {
            for block in 0..SIZE {
                for col in 0..SIZE {
                    write!(f, "{} ", self.cells[block][row][col].symbol())?;
                }
                f.write_str("   ")?;
            }
            f.write_str("\n")?;
        }
        Ok(())
    }
}

/// Current status of the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameStatus {
    /// Game is ongoing.
    InProgress,
    /// Game ended in a win.
    Won(Player),
    /// Game ended in a draw.
    Draw,
}

impl GameStatus {
    /// Returns true once the game has been won or drawn.
    pub fn is_terminal(self) -> bool {
        !matches!(self, GameStatus::InProgress)
    }

    /// Returns the winner if there is one.
    pub fn winner(self) -> Option<Player> {
        match self {
            GameStatus::Won(player) => Some(player),
            _ => None,
        }
    }
}

impl fmt::Display for GameStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameStatus::InProgress => write!(f, "In progress"),
            GameStatus::Won(player) => write!(f, "Won by {}", player),
            GameStatus::Draw => write!(f, "Draw"),
        }
    }
}

/// Complete game state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    /// The board.
    board: Board,
    /// Current player to move.
    to_move: Player,
    /// Game status.
    status: GameStatus,
    /// Move history, in play order.
    history: Vec<Action>,
}

impl GameState {
    /// Creates a new game with player one to move.
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            to_move: Player::One,
            status: GameStatus::InProgress,
            history: Vec::with_capacity(CELLS),
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the player to move.
    pub fn to_move(&self) -> Player {
        self.to_move
    }

    /// Returns the game status.
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Returns the move history.
    pub fn history(&self) -> &[Action] {
        &self.history
    }

    /// Number of moves played so far (0..=27).
    pub fn round(&self) -> usize {
        self.history.len()
    }

    /// Applies a move (unchecked - use `Engine::step` for validation).
    pub(crate) fn apply_move(&mut self, action: Action, player: Player) {
        self.board.set(action, Cell::Occupied(player));
        self.history.push(action);
        self.to_move = player.opponent();
    }

    /// Sets the game status.
    pub(crate) fn set_status(&mut self, status: GameStatus) {
        self.status = status;
    }

    #[cfg(test)]
    pub(crate) fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_board_is_empty() {
        let board = Board::new();
        assert_eq!(board.filled(), 0);
        assert!(board.iter().all(|(_, cell)| cell == Cell::Empty));
        assert_eq!(board.iter().count(), CELLS);
    }

    #[test]
    fn test_symbols() {
        assert_eq!(Cell::Empty.symbol(), '-');
        assert_eq!(Cell::Occupied(Player::One).symbol(), 'x');
        assert_eq!(Cell::Occupied(Player::Two).symbol(), 'o');
    }

    #[test]
    fn test_opponent_alternates() {
        use strum::IntoEnumIterator;
        for player in Player::iter() {
            assert_ne!(player.opponent(), player);
            assert_eq!(player.opponent().opponent(), player);
        }
        assert_eq!(Player::One.opponent(), Player::Two);
    }

    #[test]
    fn test_render_layout() {
        let mut board = Board::new();
        board.set(Action::at(0, 0, 0), Cell::Occupied(Player::One));
        board.set(Action::at(1, 0, 2), Cell::Occupied(Player::Two));
        board.set(Action::at(2, 2, 1), Cell::Occupied(Player::One));

        let expected = "x - -    - - o    - - -    \n\
                        - - -    - - -    - - -    \n\
                        - - -    - - -    - x -    \n";
        assert_eq!(board.to_string(), expected);
    }

    #[test]
    fn test_apply_move_advances_turn() {
        let mut state = GameState::new();
        state.apply_move(Action::at(1, 1, 1), Player::One);
        assert_eq!(state.to_move(), Player::Two);
        assert_eq!(state.round(), 1);
        assert_eq!(state.board().get(Action::at(1, 1, 1)), Cell::Occupied(Player::One));
    }
}
