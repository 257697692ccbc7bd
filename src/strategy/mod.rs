//! Computer opponent strategies.
//!
//! Strategies are invoked by the [`Game`](crate::Game) controller once per
//! turn: they receive a shared view of the board and the mark they play,
//! and return the coordinate to place. The controller performs the actual
//! mutation, keeping the board single-writer.

mod minimax;
mod random;

pub use minimax::MinimaxStrategy;
pub use random::RandomStrategy;

use crate::types::{Board, Coord, Player};
use derive_more::{Display, Error};

/// Errors that can occur when a strategy is asked for a move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum StrategyError {
    /// The board has no empty cell left. The controller never invokes a
    /// strategy in this situation; hitting it is a caller bug.
    #[display("no moves available on a full board")]
    NoMovesAvailable,
}

/// Trait for computer opponents that can choose moves.
pub trait Strategy: Send + std::fmt::Debug {
    /// Chooses the next move for `mark` on `board`.
    ///
    /// # Errors
    ///
    /// Returns [`StrategyError::NoMovesAvailable`] when the board is full.
    fn choose_move(&mut self, board: &Board, mark: Player) -> Result<Coord, StrategyError>;

    /// Returns the strategy's display name.
    fn name(&self) -> &'static str;
}
