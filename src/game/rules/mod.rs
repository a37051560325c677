//! Game rules for tic-tac-toe.
//!
//! Pure functions for evaluating board state. Rules are separated from
//! board storage so the reducer and the tests can compose them freely.

pub mod draw;
pub mod win;

pub use draw::is_full;
pub use win::{Win, check};
