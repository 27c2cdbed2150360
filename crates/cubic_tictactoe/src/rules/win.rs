//! Win detection for 3x3x3 tic-tac-toe.
//!
//! The cube has 49 winning lines: 27 axis-aligned lines (columns, rows and
//! pillars), 18 diagonals lying in a plane and 4 body diagonals. A move can
//! only complete a line that passes through it, so [`check_win`] looks at
//! no more than 13 lines per call.

use super::super::{Action, Board, Cell, Player};
use tracing::{instrument, trace};

/// Three collinear cells.
pub type Line = [Action; 3];

/// Builds a line from a coordinate function of the step index.
fn line(at: impl Fn(u8) -> (u8, u8, u8)) -> Line {
    [0, 1, 2].map(|i| {
        let (block, row, col) = at(i);
        Action::at(block, row, col)
    })
}

/// The winning lines that pass through `action`.
///
/// Yields between 7 and 13 lines: every cell sits on its column, row and
/// pillar; the plane and body diagonals depend on where the cell is.
pub fn lines_through(action: Action) -> impl Iterator<Item = Line> {
    let b = action.block() as u8;
    let r = action.row() as u8;
    let c = action.col() as u8;

    let candidates: [Option<Line>; 13] = [
        // Column within the block
        Some(line(|i| (b, r, i))),
        // Row within the block
        Some(line(|i| (b, i, c))),
        // Pillar across blocks
        Some(line(|i| (i, r, c))),
        // Diagonals within the block
        (r == c).then(|| line(|i| (b, i, i))),
        (r + c == 2).then(|| line(|i| (b, i, 2 - i))),
        // Diagonals on the side face (column fixed)
        (b == r).then(|| line(|i| (i, i, c))),
        (b + r == 2).then(|| line(|i| (i, 2 - i, c))),
        // Diagonals on the top face (row fixed)
        (c == b).then(|| line(|i| (i, r, i))),
        (c + b == 2).then(|| line(|i| (i, r, 2 - i))),
        // Body diagonals
        (b == r && r == c).then(|| line(|i| (i, i, i))),
        (b == r && b + c == 2).then(|| line(|i| (i, i, 2 - i))),
        (b == c && b + r == 2).then(|| line(|i| (i, 2 - i, i))),
        (r == c && b + r == 2).then(|| line(|i| (2 - i, i, i))),
    ];

    candidates.into_iter().flatten()
}

/// Checks whether `last_move` completed a line for `mover`.
///
/// Only lines through the just-played cell are examined. A line wins when
/// all three of its cells hold `mover`'s token.
#[instrument(skip(board))]
pub fn check_win(board: &Board, last_move: Action, mover: Player) -> bool {
    let token = Cell::Occupied(mover);
    lines_through(last_move).any(|cells| {
        let complete = cells.iter().all(|&cell| board.get(cell) == token);
        if complete {
            trace!(?cells, "Line completed");
        }
        complete
    })
}

/// All 49 winning lines of the cube.
///
/// Generated from the 13 line directions, independently of
/// [`lines_through`]. Each line appears once.
pub fn all_lines() -> Vec<Line> {
    let mut lines = Vec::with_capacity(49);
    for direction in directions() {
        for start in Action::all() {
            let origin = [start.block(), start.row(), start.col()].map(|v| v as i8);
            let cells = [0i8, 1, 2].map(|step| {
                let mut point = [0i8; 3];
                for axis in 0..3 {
                    point[axis] = origin[axis] + step * direction[axis];
                }
                point
            });
            if cells.iter().flatten().all(|v| (0..3).contains(v)) {
                lines.push(cells.map(|[b, r, c]| Action::at(b as u8, r as u8, c as u8)));
            }
        }
    }
    lines
}

/// The 13 directions whose first non-zero component is positive.
fn directions() -> Vec<[i8; 3]> {
    let mut dirs = Vec::with_capacity(13);
    for db in -1i8..=1 {
        for dr in -1i8..=1 {
            for dc in -1i8..=1 {
                let d = [db, dr, dc];
                if d.iter().find(|&&v| v != 0).is_some_and(|&v| v > 0) {
                    dirs.push(d);
                }
            }
        }
    }
    dirs
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn sorted(mut cells: Line) -> Line {
        cells.sort();
        cells
    }

    #[test]
    fn test_forty_nine_distinct_lines() {
        let lines = all_lines();
        assert_eq!(lines.len(), 49);
        let unique: HashSet<Line> = lines.into_iter().map(sorted).collect();
        assert_eq!(unique.len(), 49);
    }

    #[test]
    fn test_lines_through_match_enumeration() {
        let lines: Vec<Line> = all_lines().into_iter().map(sorted).collect();
        for action in Action::all() {
            let expected: HashSet<Line> = lines
                .iter()
                .copied()
                .filter(|cells| cells.contains(&action))
                .collect();
            let actual: HashSet<Line> = lines_through(action).map(sorted).collect();
            assert_eq!(actual, expected, "lines through {action}");
        }
    }

    #[test]
    fn test_centre_has_thirteen_lines() {
        assert_eq!(lines_through(Action::at(1, 1, 1)).count(), 13);
        assert_eq!(lines_through(Action::at(0, 0, 0)).count(), 7);
        assert_eq!(lines_through(Action::at(0, 0, 1)).count(), 4);
    }

    #[test]
    fn test_no_win_empty_board() {
        let board = Board::new();
        assert!(!check_win(&board, Action::at(1, 1, 1), Player::One));
    }

    #[test]
    fn test_win_block_row() {
        let mut board = Board::new();
        for col in 0..3 {
            board.set(Action::at(0, 0, col), Cell::Occupied(Player::One));
        }
        assert!(check_win(&board, Action::at(0, 0, 2), Player::One));
        assert!(!check_win(&board, Action::at(0, 0, 2), Player::Two));
    }

    #[test]
    fn test_win_body_diagonal() {
        let mut board = Board::new();
        for i in 0..3 {
            board.set(Action::at(2 - i, i, i), Cell::Occupied(Player::Two));
        }
        assert!(check_win(&board, Action::at(0, 2, 2), Player::Two));
    }

    #[test]
    fn test_mixed_line_does_not_win() {
        let mut board = Board::new();
        board.set(Action::at(0, 0, 0), Cell::Occupied(Player::One));
        board.set(Action::at(0, 0, 1), Cell::Occupied(Player::Two));
        board.set(Action::at(0, 0, 2), Cell::Occupied(Player::One));
        assert!(!check_win(&board, Action::at(0, 0, 2), Player::One));
    }
}
