//! Pure game logic: board types, rules, history, and the reducer.

pub mod history;
pub mod reducer;
pub mod rules;
pub mod types;

pub use history::{History, MoveRecord};
pub use reducer::{Action, GameState, GameStatus};
pub use rules::{Win, check};
pub use types::{Board, Cell, Coordinate, Player};
