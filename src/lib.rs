//! Tic-tac-toe with move history and time travel.
//!
//! The game logic is an immutable state value plus a pure reducer:
//! [`GameState::apply`] consumes an [`Action`] and returns the next state,
//! with the player to move and the game status derived rather than stored.
//! The terminal view under [`tui`] renders the board and the move list and
//! feeds user input back through the reducer.
//!
//! # Example
//!
//! ```
//! use tictactoe_rewind::{Action, GameState};
//!
//! let state = GameState::new()
//!     .apply(Action::MoveAt(0))
//!     .apply(Action::MoveAt(4));
//! assert_eq!(state.status_line(), "Next player: X");
//!
//! // Time travel: view the start, then branch with a different move.
//! let state = state.apply(Action::JumpTo(0)).apply(Action::MoveAt(8));
//! assert_eq!(state.history().len(), 2);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod cli;
pub mod game;
pub mod tui;

pub use game::{
    Action, Board, Cell, Coordinate, GameState, GameStatus, History, MoveRecord, Player, Win,
};
