//! Turn controller for tic-tac-toe.
//!
//! [`Game`] owns the board, tracks whose turn it is, applies human and
//! computer moves, and re-evaluates the terminal status after every
//! placement. The rendering layer drives it with cell coordinates and reads
//! back cell states and a status line; invalid input is silently ignored.

use crate::rules;
use crate::strategy::{MinimaxStrategy, RandomStrategy, Strategy};
use crate::types::{Board, Cell, Coord, Player};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument, warn};

/// The states the game can be in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameState {
    /// Player X is placing a mark.
    XTurn,
    /// Player O is placing a mark (instant when a computer opponent is set).
    OTurn,
    /// All cells filled with no winner.
    Draw,
    /// X completed a line.
    XWins,
    /// O completed a line.
    OWins,
}

impl GameState {
    /// True for `Draw`, `XWins` and `OWins`; no move leaves these states
    /// short of an explicit restart.
    pub fn is_terminal(self) -> bool {
        matches!(self, GameState::Draw | GameState::XWins | GameState::OWins)
    }

    /// The player to move, `None` once the game is over.
    pub fn to_move(self) -> Option<Player> {
        match self {
            GameState::XTurn => Some(Player::X),
            GameState::OTurn => Some(Player::O),
            _ => None,
        }
    }

    /// The winner, if the game ended with one.
    pub fn winner(self) -> Option<Player> {
        match self {
            GameState::XWins => Some(Player::X),
            GameState::OWins => Some(Player::O),
            _ => None,
        }
    }
}

/// Opponent configuration for the O side.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumIter,
)]
pub enum Opponent {
    /// Two humans alternate at the same board.
    #[default]
    Human,
    /// O is played by [`RandomStrategy`].
    Random,
    /// O is played by [`MinimaxStrategy`].
    Minimax,
}

/// The turn controller: board, current state and opponent configuration.
#[derive(Debug)]
pub struct Game {
    board: Board,
    state: GameState,
    opponent: Opponent,
    ai: Option<Box<dyn Strategy>>,
    history: Vec<Coord>,
}

impl Game {
    /// Creates a new game: empty board, X to move, human opponent.
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            state: GameState::XTurn,
            opponent: Opponent::Human,
            ai: None,
            history: Vec::new(),
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the current state.
    pub fn state(&self) -> GameState {
        self.state
    }

    /// Returns the configured opponent mode.
    pub fn opponent(&self) -> Opponent {
        self.opponent
    }

    /// Returns the coordinates played this game, in order.
    pub fn history(&self) -> &[Coord] {
        &self.history
    }

    /// Cell accessor for the rendering layer; `None` when out of range.
    pub fn cell(&self, coord: Coord) -> Option<Cell> {
        self.board.get(coord)
    }

    /// Human-readable status line for the rendering layer.
    pub fn status_message(&self) -> &'static str {
        match self.state {
            GameState::XTurn => "Player 1 Turn",
            GameState::OTurn => "Player 2 Turn",
            GameState::XWins => "Player 1 Wins! Press R.",
            GameState::OWins => "Player 2 Wins! Press R.",
            GameState::Draw => "Draw! Press R.",
        }
    }

    /// Resets the board and returns the turn to X.
    ///
    /// The opponent configuration survives a restart.
    #[instrument(skip(self))]
    pub fn restart(&mut self) {
        self.board.reset();
        self.history.clear();
        self.state = GameState::XTurn;
        debug!("game restarted");
    }

    /// Selects who plays O.
    ///
    /// Allowed at any time; takes effect the next time O's turn is entered
    /// by a move. A swap made while O's turn is pending leaves that move to
    /// the human.
    #[instrument(skip(self), fields(state = ?self.state))]
    pub fn set_opponent(&mut self, opponent: Opponent) {
        self.ai = match opponent {
            Opponent::Human => None,
            Opponent::Random => Some(Box::new(RandomStrategy::new())),
            Opponent::Minimax => Some(Box::new(MinimaxStrategy::new())),
        };
        self.opponent = opponent;
        debug!(%opponent, "opponent configured");
    }

    /// Attempts a move for the player whose turn it is.
    ///
    /// Moves in a terminal state, out-of-range coordinates and occupied
    /// cells are silently ignored: no state change, nothing surfaced to the
    /// caller. After a legal X placement with a computer opponent
    /// configured, O's reply is applied before this method returns.
    #[instrument(skip(self), fields(state = ?self.state))]
    pub fn handle_move(&mut self, coord: Coord) {
        let Some(player) = self.state.to_move() else {
            debug!(%coord, "move ignored: game is over");
            return;
        };
        if self.board.place(coord, player).is_err() {
            debug!(%coord, "move ignored: cell unavailable");
            return;
        }
        self.history.push(coord);
        self.advance_from(player);

        if self.state == GameState::OTurn {
            self.computer_reply();
        }
    }

    /// Passes the turn to the other player, then re-evaluates the board.
    fn advance_from(&mut self, player: Player) {
        self.state = match player.opponent() {
            Player::X => GameState::XTurn,
            Player::O => GameState::OTurn,
        };
        self.evaluate();
    }

    /// Tests for either player winning or a draw and updates the state.
    fn evaluate(&mut self) {
        if let Some(player) = rules::winner(&self.board) {
            self.state = match player {
                Player::X => GameState::XWins,
                Player::O => GameState::OWins,
            };
        } else if self.board.is_full() {
            self.state = GameState::Draw;
        }
    }

    /// Lets the configured strategy take O's turn.
    fn computer_reply(&mut self) {
        let Some(ai) = self.ai.as_mut() else {
            return;
        };
        match ai.choose_move(&self.board, Player::O) {
            Ok(coord) => {
                if self.board.place(coord, Player::O).is_err() {
                    // Strategies only propose empty cells; this is a bug in
                    // the strategy, not the caller.
                    warn!(%coord, "strategy proposed an unavailable cell");
                    return;
                }
                self.history.push(coord);
                self.advance_from(Player::O);
            }
            Err(err) => warn!(%err, "strategy failed to choose a move"),
        }
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}
