//! Core domain types for tic-tac-toe.

use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};

/// Number of cells along each side of the grid.
pub const GRID_SIZE: usize = 3;

/// Total number of cells on the board.
pub(crate) const CELL_COUNT: usize = GRID_SIZE * GRID_SIZE;

/// Player in the game.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display,
)]
pub enum Player {
    /// Player X (goes first).
    X,
    /// Player O (goes second).
    O,
}

impl Player {
    /// Returns the opponent player.
    pub fn opponent(self) -> Self {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }
}

/// A cell on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    /// Empty cell.
    Empty,
    /// Cell occupied by a player.
    Occupied(Player),
}

/// A board coordinate: zero-based column and row, each in `[0, GRID_SIZE)`.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display,
)]
#[display("({col}, {row})")]
pub struct Coord {
    /// Column, counted from the left.
    pub col: usize,
    /// Row, counted from the top.
    pub row: usize,
}

impl Coord {
    /// Creates a coordinate. Bounds are checked at the point of use.
    pub fn new(col: usize, row: usize) -> Self {
        Self { col, row }
    }

    /// True if both components fall inside the grid.
    pub fn in_bounds(self) -> bool {
        self.col < GRID_SIZE && self.row < GRID_SIZE
    }

    /// Row-major index into the backing array.
    pub(crate) fn index(self) -> usize {
        self.row * GRID_SIZE + self.col
    }

    /// Inverse of [`Coord::index`].
    pub(crate) fn from_index(index: usize) -> Self {
        Self {
            col: index % GRID_SIZE,
            row: index / GRID_SIZE,
        }
    }
}

/// Errors that can occur when mutating or querying the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum BoardError {
    /// Coordinate falls outside the grid.
    #[display("coordinate {} is outside the grid", _0)]
    OutOfBounds(#[error(not(source))] Coord),
    /// Target cell already holds a mark.
    #[display("cell {} is already occupied", _0)]
    Occupied(#[error(not(source))] Coord),
}

/// 3x3 tic-tac-toe board.
///
/// Cells are stored in row-major order and addressed by [`Coord`]. The board
/// is exclusively owned by the [`Game`](crate::Game) controller; strategies
/// only ever see a shared reference.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    /// Cells in row-major order.
    cells: [Cell; CELL_COUNT],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self {
            cells: [Cell::Empty; CELL_COUNT],
        }
    }

    /// Sets every cell back to empty.
    pub fn reset(&mut self) {
        self.cells = [Cell::Empty; CELL_COUNT];
    }

    /// Gets the cell at the given coordinate, `None` when out of range.
    pub fn get(&self, coord: Coord) -> Option<Cell> {
        coord
            .in_bounds()
            .then(|| self.cells[coord.index()])
    }

    /// Validating form of [`Board::get`].
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::OutOfBounds`] when the coordinate falls outside
    /// the grid.
    pub fn cell(&self, coord: Coord) -> Result<Cell, BoardError> {
        self.get(coord).ok_or(BoardError::OutOfBounds(coord))
    }

    /// Places a mark for `player` at `coord`.
    ///
    /// A rejected placement leaves the board untouched.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::OutOfBounds`] for coordinates outside the grid
    /// and [`BoardError::Occupied`] when the target cell is not empty.
    pub fn place(&mut self, coord: Coord, player: Player) -> Result<(), BoardError> {
        match self.cell(coord)? {
            Cell::Empty => {
                self.cells[coord.index()] = Cell::Occupied(player);
                Ok(())
            }
            Cell::Occupied(_) => Err(BoardError::Occupied(coord)),
        }
    }

    /// Checks if the cell at a coordinate is empty. Out-of-range is not empty.
    pub fn is_empty(&self, coord: Coord) -> bool {
        matches!(self.get(coord), Some(Cell::Empty))
    }

    /// All empty coordinates, in row-major order.
    ///
    /// The order is deterministic: search enumeration and minimax tie-breaks
    /// depend on it.
    pub fn empty_cells(&self) -> Vec<Coord> {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, cell)| **cell == Cell::Empty)
            .map(|(index, _)| Coord::from_index(index))
            .collect()
    }

    /// True iff no cell is empty.
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|cell| *cell != Cell::Empty)
    }

    /// Returns all cells as a slice, row-major.
    pub fn cells(&self) -> &[Cell; CELL_COUNT] {
        &self.cells
    }

    /// Formats the board as a human-readable string.
    pub fn display(&self) -> String {
        let mut result = String::new();
        for row in 0..GRID_SIZE {
            for col in 0..GRID_SIZE {
                let symbol = match self.cells[Coord::new(col, row).index()] {
                    Cell::Empty => ".".to_string(),
                    Cell::Occupied(player) => player.to_string(),
                };
                result.push_str(&symbol);
                if col < GRID_SIZE - 1 {
                    result.push('|');
                }
            }
            if row < GRID_SIZE - 1 {
                result.push_str("\n-+-+-\n");
            }
        }
        result
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
