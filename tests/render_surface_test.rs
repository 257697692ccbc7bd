//! Tests for the read-back surface the rendering layer consumes.

use tictactoe_core::{Cell, Coord, GRID_SIZE, Game, GameState, Player};

#[test]
fn test_cell_accessor_covers_the_grid() {
    let mut game = Game::new();
    game.handle_move(Coord::new(1, 2));

    for row in 0..GRID_SIZE {
        for col in 0..GRID_SIZE {
            let cell = game.cell(Coord::new(col, row)).expect("in range");
            if (col, row) == (1, 2) {
                assert_eq!(cell, Cell::Occupied(Player::X));
            } else {
                assert_eq!(cell, Cell::Empty);
            }
        }
    }
    assert_eq!(game.cell(Coord::new(GRID_SIZE, 0)), None);
}

#[test]
fn test_status_line_follows_the_game() {
    let mut game = Game::new();
    assert_eq!(game.status_message(), "Player 1 Turn");

    game.handle_move(Coord::new(0, 0));
    assert_eq!(game.status_message(), "Player 2 Turn");

    for coord in [(1, 1), (0, 1), (1, 0), (0, 2)] {
        game.handle_move(Coord::new(coord.0, coord.1));
    }
    assert_eq!(game.state(), GameState::XWins);
    assert_eq!(game.status_message(), "Player 1 Wins! Press R.");

    game.restart();
    assert_eq!(game.status_message(), "Player 1 Turn");
}

#[test]
fn test_board_display_renders_marks() {
    let mut game = Game::new();
    game.handle_move(Coord::new(0, 0));
    game.handle_move(Coord::new(1, 1));
    let text = game.board().display();
    assert!(text.starts_with('X'));
    assert!(text.contains('O'));
}
