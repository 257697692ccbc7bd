//! Draw detection logic for tic-tac-toe.

use super::win::winner;
use crate::types::{Board, Cell};
use tracing::instrument;

/// Checks if the board is full (all cells occupied).
#[instrument]
pub fn is_full(board: &Board) -> bool {
    board.cells().iter().all(|cell| *cell != Cell::Empty)
}

/// Checks if the game is drawn: a full board with no winner.
#[instrument]
pub fn is_draw(board: &Board) -> bool {
    is_full(board) && winner(board).is_none()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Coord, Player};

    #[test]
    fn test_empty_board_not_full() {
        let board = Board::new();
        assert!(!is_full(&board));
        assert!(!is_draw(&board));
    }

    #[test]
    fn test_partial_board_not_full() {
        let mut board = Board::new();
        board.place(Coord::new(1, 1), Player::X).expect("valid move");
        assert!(!is_full(&board));
    }

    #[test]
    fn test_draw_detection() {
        // X O X
        // O O X
        // X X O
        let mut board = Board::new();
        let marks = [
            Player::X,
            Player::O,
            Player::X,
            Player::O,
            Player::O,
            Player::X,
            Player::X,
            Player::X,
            Player::O,
        ];
        for (index, player) in marks.iter().enumerate() {
            board
                .place(Coord::new(index % 3, index / 3), *player)
                .expect("valid move");
        }
        assert!(is_full(&board));
        assert!(is_draw(&board));
    }

    #[test]
    fn test_not_draw_if_winner() {
        let mut board = Board::new();
        for col in 0..3 {
            board.place(Coord::new(col, 0), Player::X).expect("valid move");
        }
        for col in 0..2 {
            board.place(Coord::new(col, 1), Player::O).expect("valid move");
        }
        for index in [(2, 1), (0, 2), (1, 2), (2, 2)] {
            board
                .place(Coord::new(index.0, index.1), Player::O)
                .expect("valid move");
        }
        assert!(is_full(&board));
        assert!(!is_draw(&board));
    }
}
