//! Pure tic-tac-toe game logic with pluggable computer opponents.
//!
//! This library contains the complete core of a two-player 3x3 grid game:
//! board storage, win and draw detection, two computer opponents, and the
//! turn controller state machine. Rendering and input belong to an external
//! layer that feeds the controller cell coordinates and reads back cell
//! states and a status line.
//!
//! # Architecture
//!
//! - **Types**: [`Board`], [`Cell`], [`Coord`], [`Player`] - the data model
//! - **Rules**: [`winner`], [`is_draw`] - pure evaluation of a board snapshot
//! - **Strategy**: [`RandomStrategy`], [`MinimaxStrategy`] - computer opponents
//! - **Game**: [`Game`] - the turn controller driving everything above
//!
//! # Example
//!
//! ```
//! use tictactoe_core::{Coord, Game, GameState, Opponent};
//!
//! let mut game = Game::new();
//! game.set_opponent(Opponent::Minimax);
//!
//! // X plays the top-left corner; O replies before control returns.
//! game.handle_move(Coord::new(0, 0));
//! assert_eq!(game.state(), GameState::XTurn);
//! assert_eq!(game.history().len(), 2);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod game;
mod rules;
mod strategy;
mod types;

// Crate-level exports - turn controller
pub use game::{Game, GameState, Opponent};

// Crate-level exports - rule evaluation
pub use rules::{is_draw, is_full, winner};

// Crate-level exports - computer opponents
pub use strategy::{MinimaxStrategy, RandomStrategy, Strategy, StrategyError};

// Crate-level exports - core types
pub use types::{Board, BoardError, Cell, Coord, GRID_SIZE, Player};
