//! Win detection logic for tic-tac-toe.

use crate::game::types::{Board, Cell, Player};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// The 8 winning lines: 3 rows, 3 columns, 2 diagonals.
///
/// The scan order matters: when a (malformed) board carries more than one
/// complete line, the first match in this order is reported.
pub const LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8], // Rows
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8], // Columns
    [0, 4, 8],
    [2, 4, 6], // Diagonals
];

/// A decided game: the winner and the line that won it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Win {
    /// The player with three in a row.
    pub player: Player,
    /// Board indices of the winning line.
    pub line: [usize; 3],
}

impl Win {
    /// Checks whether a cell index lies on the winning line.
    pub fn contains(&self, idx: usize) -> bool {
        self.line.contains(&idx)
    }
}

/// Checks the board for a winner.
///
/// Returns the winner and winning line if any line holds three identical
/// marks, `None` otherwise.
#[instrument]
pub fn check(board: &Board) -> Option<Win> {
    for line in LINES {
        let [a, b, c] = line;
        let cell = board.get(a);
        if cell != Some(Cell::Empty)
            && cell == board.get(b)
            && cell == board.get(c)
            && let Some(Cell::Occupied(player)) = cell
        {
            return Some(Win { player, line });
        }
    }
    None
}
