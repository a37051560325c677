//! Core domain types for tic-tac-toe.

use serde::{Deserialize, Serialize};

/// Player in the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display)]
pub enum Player {
    /// Player X (goes first).
    X,
    /// Player O (goes second).
    O,
}

impl Player {
    /// Returns the opponent player.
    pub fn opponent(self) -> Self {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }
}

/// A cell on the tic-tac-toe board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    /// Empty cell.
    Empty,
    /// Cell occupied by a player.
    Occupied(Player),
}

/// 3x3 tic-tac-toe board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    /// Cells in row-major order (index = row * 3 + column).
    cells: [Cell; 9],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self {
            cells: [Cell::Empty; 9],
        }
    }

    /// Gets the cell at the given index (0-8).
    pub fn get(&self, idx: usize) -> Option<Cell> {
        self.cells.get(idx).copied()
    }

    /// Checks if a cell is empty.
    pub fn is_empty(&self, idx: usize) -> bool {
        matches!(self.get(idx), Some(Cell::Empty))
    }

    /// Returns a copy of this board with the player's mark placed at `idx`.
    ///
    /// Returns the board unchanged if `idx` is out of bounds.
    pub fn with_mark(mut self, idx: usize, player: Player) -> Self {
        if idx < 9 {
            self.cells[idx] = Cell::Occupied(player);
        }
        self
    }

    /// Returns all cells as a slice.
    pub fn cells(&self) -> &[Cell; 9] {
        &self.cells
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in 0..3 {
            for col in 0..3 {
                let idx = row * 3 + col;
                match self.cells[idx] {
                    Cell::Empty => write!(f, "{}", idx + 1)?,
                    Cell::Occupied(p) => write!(f, "{p}")?,
                }
                if col < 2 {
                    write!(f, "|")?;
                }
            }
            if row < 2 {
                writeln!(f)?;
                writeln!(f, "-+-+-")?;
            }
        }
        Ok(())
    }
}

/// 1-indexed (row, column) of a placed mark, for display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, derive_more::Display)]
#[display("({row}, {column})")]
pub struct Coordinate {
    /// Row, 1-3 from the top.
    pub row: usize,
    /// Column, 1-3 from the left.
    pub column: usize,
}

impl Coordinate {
    /// Derives the display coordinate from a board index (0-8).
    pub fn from_index(idx: usize) -> Self {
        Self {
            row: idx / 3 + 1,
            column: idx % 3 + 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opponent_flips() {
        assert_eq!(Player::X.opponent(), Player::O);
        assert_eq!(Player::O.opponent(), Player::X);
    }

    #[test]
    fn test_new_board_empty() {
        let board = Board::new();
        assert!((0..9).all(|i| board.is_empty(i)));
    }

    #[test]
    fn test_with_mark_places() {
        let board = Board::new().with_mark(4, Player::X);
        assert_eq!(board.get(4), Some(Cell::Occupied(Player::X)));
        assert!(board.is_empty(0));
    }

    #[test]
    fn test_with_mark_out_of_bounds_unchanged() {
        let board = Board::new().with_mark(9, Player::X);
        assert_eq!(board, Board::new());
    }

    #[test]
    fn test_coordinate_from_index() {
        assert_eq!(Coordinate::from_index(0), Coordinate { row: 1, column: 1 });
        assert_eq!(Coordinate::from_index(4), Coordinate { row: 2, column: 2 });
        assert_eq!(Coordinate::from_index(8), Coordinate { row: 3, column: 3 });
    }

    #[test]
    fn test_board_display() {
        let board = Board::new().with_mark(0, Player::X).with_mark(4, Player::O);
        assert_eq!(board.to_string(), "X|2|3\n-+-+-\n4|O|6\n-+-+-\n7|8|9");
    }
}
