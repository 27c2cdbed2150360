//! Actions for 3x3x3 tic-tac-toe.
//!
//! An action names one cell by block, row and column. Coordinates are
//! checked on construction, so every `Action` value is in bounds.

use super::types::SIZE;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use tracing::instrument;

/// A cell coordinate: block, row, column, each in `0..=2`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "[u8; 3]", into = "[u8; 3]")]
pub struct Action {
    block: u8,
    row: u8,
    col: u8,
}

impl Action {
    /// Creates an action, rejecting coordinates outside `0..=2`.
    #[instrument]
    pub fn new(block: u8, row: u8, col: u8) -> Result<Self, MoveError> {
        let limit = SIZE as u8;
        if block >= limit || row >= limit || col >= limit {
            return Err(MoveError::OutOfBounds { block, row, col });
        }
        Ok(Self { block, row, col })
    }

    /// In-crate constructor for coordinates known to be in range.
    pub(crate) const fn at(block: u8, row: u8, col: u8) -> Self {
        Self { block, row, col }
    }

    /// Block index (the first coordinate).
    pub fn block(self) -> usize {
        self.block as usize
    }

    /// Row index within the block.
    pub fn row(self) -> usize {
        self.row as usize
    }

    /// Column index within the row.
    pub fn col(self) -> usize {
        self.col as usize
    }

    /// Coordinates as an array.
    pub fn coords(self) -> [u8; 3] {
        [self.block, self.row, self.col]
    }

    /// Flat index `0..27` in block, row, column order.
    pub fn index(self) -> usize {
        (self.block() * SIZE + self.row()) * SIZE + self.col()
    }

    /// Inverse of [`Action::index`].
    pub fn from_index(index: usize) -> Option<Self> {
        if index >= SIZE * SIZE * SIZE {
            return None;
        }
        let block = index / (SIZE * SIZE);
        let row = (index / SIZE) % SIZE;
        let col = index % SIZE;
        Some(Self::at(block as u8, row as u8, col as u8))
    }

    /// Every cell, in block, then row, then column order.
    pub fn all() -> impl Iterator<Item = Action> {
        (0..SIZE * SIZE * SIZE).filter_map(Self::from_index)
    }
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}{}", self.block, self.row, self.col)
    }
}

impl TryFrom<[u8; 3]> for Action {
    type Error = MoveError;

    fn try_from([block, row, col]: [u8; 3]) -> Result<Self, Self::Error> {
        Self::new(block, row, col)
    }
}

impl From<Action> for [u8; 3] {
    fn from(action: Action) -> Self {
        action.coords()
    }
}

/// Parses the three-digit form used at the prompt, e.g. `"012"`.
impl FromStr for Action {
    type Err = ParseActionError;

    #[instrument]
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.chars().count() != 3 {
            return Err(ParseActionError::InvalidFormat(trimmed.to_string()));
        }

        let mut digits = [0u8; 3];
        for (slot, ch) in digits.iter_mut().zip(trimmed.chars()) {
            let digit = ch
                .to_digit(10)
                .ok_or_else(|| ParseActionError::InvalidFormat(trimmed.to_string()))?;
            *slot = digit as u8;
        }

        let [block, row, col] = digits;
        Action::new(block, row, col).map_err(|_| ParseActionError::OutOfRange(trimmed.to_string()))
    }
}

/// Error that can occur when validating or applying a move.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// A coordinate is outside `0..=2`.
    #[display("Coordinates ({}, {}, {}) are off the board", block, row, col)]
    OutOfBounds {
        /// Requested block.
        block: u8,
        /// Requested row.
        row: u8,
        /// Requested column.
        col: u8,
    },

    /// The cell is already occupied.
    #[display("Cell {} is already occupied", _0)]
    CellOccupied(Action),

    /// The game is already over.
    #[display("Game is already over")]
    GameOver,

    /// An invariant was violated (postcondition failure).
    #[display("Invariant violation: {}", _0)]
    InvariantViolation(String),
}

impl std::error::Error for MoveError {}

/// Error parsing typed coordinates.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum ParseActionError {
    /// Not exactly three digits.
    #[display("Invalid input: '{}'", _0)]
    InvalidFormat(#[error(not(source))] String),

    /// Three digits, but one of them is above 2.
    #[display("Illegal position: '{}'", _0)]
    OutOfRange(#[error(not(source))] String),
}
