//! Game rules for tic-tac-toe.
//!
//! This module contains pure functions for evaluating a board snapshot
//! according to tic-tac-toe rules. Rules are separated from board storage
//! so the controller and the strategies can share them.

pub mod draw;
pub mod win;

pub use draw::{is_draw, is_full};
pub use win::winner;
