//! Win detection logic for tic-tac-toe.

use crate::types::{Board, Cell, Coord, GRID_SIZE, Player};
use tracing::instrument;

/// Checks if there is a winner on the board.
///
/// Scans all rows, then all columns, then the two main diagonals; a line
/// wins for a player iff every cell on it holds that player's mark. Each
/// line check short-circuits on the first empty or mismatched cell, with
/// results identical to a full scan.
///
/// A board holding two complete lines for different players cannot be
/// reached through play; if handed one anyway, the first winner in the scan
/// order above is returned.
#[instrument]
pub fn winner(board: &Board) -> Option<Player> {
    for row in 0..GRID_SIZE {
        if let Some(player) = line_owner(board, (0..GRID_SIZE).map(|col| Coord::new(col, row))) {
            return Some(player);
        }
    }

    for col in 0..GRID_SIZE {
        if let Some(player) = line_owner(board, (0..GRID_SIZE).map(|row| Coord::new(col, row))) {
            return Some(player);
        }
    }

    if let Some(player) = line_owner(board, (0..GRID_SIZE).map(|i| Coord::new(i, i))) {
        return Some(player);
    }

    line_owner(board, (0..GRID_SIZE).map(|i| Coord::new(i, GRID_SIZE - 1 - i)))
}

/// Returns the player owning every cell of `line`, if any.
fn line_owner(board: &Board, line: impl Iterator<Item = Coord>) -> Option<Player> {
    let mut owner = None;
    for coord in line {
        match board.get(coord) {
            Some(Cell::Occupied(player)) => match owner {
                None => owner = Some(player),
                Some(first) if first == player => {}
                Some(_) => return None,
            },
            // An empty cell never wins a line.
            _ => return None,
        }
    }
    owner
}
