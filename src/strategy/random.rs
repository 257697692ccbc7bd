//! Uniform-random computer opponent.

use super::{Strategy, StrategyError};
use crate::types::{Board, Coord, Player};
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use tracing::{debug, instrument};

/// Picks uniformly at random among the empty cells.
///
/// Very unlikely to win against anyone paying attention.
#[derive(Debug)]
pub struct RandomStrategy {
    rng: StdRng,
}

impl RandomStrategy {
    /// Creates a strategy seeded from system entropy.
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// Creates a strategy with a fixed seed, for reproducible play.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomStrategy {
    fn default() -> Self {
        Self::new()
    }
}

impl Strategy for RandomStrategy {
    #[instrument(skip(self, board))]
    fn choose_move(&mut self, board: &Board, mark: Player) -> Result<Coord, StrategyError> {
        let open = board.empty_cells();
        let coord = open
            .choose(&mut self.rng)
            .copied()
            .ok_or(StrategyError::NoMovesAvailable)?;
        debug!(%coord, %mark, "random strategy chose cell");
        Ok(coord)
    }

    fn name(&self) -> &'static str {
        "Random"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_board_has_no_moves() {
        let mut board = Board::new();
        for index in 0..9 {
            board
                .place(Coord::from_index(index), Player::X)
                .expect("valid move");
        }
        let mut strategy = RandomStrategy::with_seed(1);
        assert_eq!(
            strategy.choose_move(&board, Player::O),
            Err(StrategyError::NoMovesAvailable)
        );
    }

    #[test]
    fn test_only_empty_cells_chosen() {
        let mut board = Board::new();
        board.place(Coord::new(0, 0), Player::X).expect("valid move");
        board.place(Coord::new(1, 1), Player::O).expect("valid move");
        let mut strategy = RandomStrategy::with_seed(7);
        for _ in 0..100 {
            let coord = strategy.choose_move(&board, Player::O).expect("open cells");
            assert!(board.is_empty(coord));
        }
    }

    #[test]
    fn test_choices_spread_uniformly() {
        // Three open cells, many trials: each should be hit close to 1/3
        // of the time.
        let mut board = Board::new();
        for index in 0..6 {
            let player = if index % 2 == 0 { Player::X } else { Player::O };
            board
                .place(Coord::from_index(index), player)
                .expect("valid move");
        }
        let open = board.empty_cells();
        assert_eq!(open.len(), 3);

        let mut strategy = RandomStrategy::with_seed(42);
        let trials = 3_000;
        let mut counts = [0_usize; 3];
        for _ in 0..trials {
            let coord = strategy.choose_move(&board, Player::X).expect("open cells");
            let slot = open
                .iter()
                .position(|c| *c == coord)
                .expect("chosen cell is open");
            counts[slot] += 1;
        }

        for count in counts {
            assert!(
                (800..=1_200).contains(&count),
                "counts {counts:?} deviate too far from uniform"
            );
        }
    }
}
