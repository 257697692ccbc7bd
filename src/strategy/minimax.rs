//! Exhaustive negamax computer opponent.

use super::{Strategy, StrategyError};
use crate::types::{Board, CELL_COUNT, Cell, Coord, GRID_SIZE, Player};
use tracing::{debug, instrument};

/// Score below every reachable outcome, so any legal move replaces it.
const SENTINEL: i8 = -2;

/// Searches the full remaining game tree and plays the best-scoring move.
///
/// The board is normalized to a flat array of `+1` (own marks), `-1`
/// (opponent marks) and `0` (empty), which makes the search symmetric for
/// either player. At most `9!` leaf evaluations from an empty grid, so the
/// search runs synchronously with no pruning.
///
/// Ties keep the first-encountered move in row-major scan order. Combined
/// with the undiscounted scoring this means that in a position which is
/// already lost against optimal play, every move scores `-1` and the first
/// empty cell is played.
#[derive(Debug, Clone, Copy, Default)]
pub struct MinimaxStrategy;

impl MinimaxStrategy {
    /// Creates a new minimax strategy.
    pub fn new() -> Self {
        Self
    }
}

impl Strategy for MinimaxStrategy {
    #[instrument(skip(self, board))]
    fn choose_move(&mut self, board: &Board, mark: Player) -> Result<Coord, StrategyError> {
        let flat = flatten(board, mark);
        let (score, index) = negamax(flat, 1);
        let index = index.ok_or(StrategyError::NoMovesAvailable)?;
        let coord = Coord::from_index(index);
        debug!(%coord, score, %mark, "minimax chose cell");
        Ok(coord)
    }

    fn name(&self) -> &'static str {
        "Minimax"
    }
}

/// Squashes the grid into a flat array with the searching player as `+1`,
/// the opponent as `-1` and empty cells as `0`.
fn flatten(board: &Board, mark: Player) -> [i8; CELL_COUNT] {
    let mut flat = [0_i8; CELL_COUNT];
    for (index, cell) in board.cells().iter().enumerate() {
        flat[index] = match cell {
            Cell::Empty => 0,
            Cell::Occupied(player) if *player == mark => 1,
            Cell::Occupied(_) => -1,
        };
    }
    flat
}

/// Recursively scores the board for `side` (`1` or `-1`), returning the
/// best score and the move achieving it.
///
/// Terminal positions score `line_winner * side`: `+1` when the side to
/// move already stands on a won board, `-1` when the opponent does, `0`
/// for a full board with no winner (reported with no move; callers must
/// not invoke the search on a full board expecting one).
fn negamax(board: [i8; CELL_COUNT], side: i8) -> (i8, Option<usize>) {
    let won = line_winner(&board);
    if won != 0 {
        return (won * side, None);
    }

    let mut best_score = SENTINEL;
    let mut best_move = None;
    for index in 0..CELL_COUNT {
        if board[index] != 0 {
            continue;
        }
        let mut next = board;
        next[index] = side;
        let (reply, _) = negamax(next, -side);
        // Strict comparison keeps the first-encountered move on ties.
        if -reply > best_score {
            best_score = -reply;
            best_move = Some(index);
        }
    }

    if best_move.is_none() {
        // No empty cell and no winner: a draw.
        return (0, None);
    }
    (best_score, best_move)
}

/// Winner over the flat board: `1` or `-1` for a complete line, `0` otherwise.
fn line_winner(board: &[i8; CELL_COUNT]) -> i8 {
    let at = |col: usize, row: usize| board[row * GRID_SIZE + col];

    for row in 0..GRID_SIZE {
        let first = at(0, row);
        if first != 0 && (1..GRID_SIZE).all(|col| at(col, row) == first) {
            return first;
        }
    }

    for col in 0..GRID_SIZE {
        let first = at(col, 0);
        if first != 0 && (1..GRID_SIZE).all(|row| at(col, row) == first) {
            return first;
        }
    }

    let first = at(0, 0);
    if first != 0 && (1..GRID_SIZE).all(|i| at(i, i) == first) {
        return first;
    }

    let first = at(0, GRID_SIZE - 1);
    if first != 0 && (1..GRID_SIZE).all(|i| at(i, GRID_SIZE - 1 - i) == first) {
        return first;
    }

    0
}
