//! Move history with time travel.
//!
//! Every accepted move appends a snapshot of the board after the move.
//! Jumping to an earlier step never discards anything; making a move from
//! an earlier step discards the records beyond it first, branching the
//! game from that point.

use crate::game::types::{Board, Coordinate};
use serde::{Deserialize, Serialize};

/// One point in the game's timeline: the board after a move, plus the
/// display coordinate of the move that produced it.
///
/// The initial record is the empty board and has no coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveRecord {
    board: Board,
    coordinate: Option<Coordinate>,
}

impl MoveRecord {
    /// The record every history starts with: empty board, no move yet.
    pub fn initial() -> Self {
        Self {
            board: Board::new(),
            coordinate: None,
        }
    }

    /// Creates a record for a move that produced `board` by playing at
    /// board index `idx`.
    pub fn after_move(board: Board, idx: usize) -> Self {
        Self {
            board,
            coordinate: Some(Coordinate::from_index(idx)),
        }
    }

    /// The board as of this record.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The coordinate of the move that produced this record, if any.
    pub fn coordinate(&self) -> Option<Coordinate> {
        self.coordinate
    }
}

/// Ordered list of move records, starting at the empty board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct History {
    records: Vec<MoveRecord>,
}

impl History {
    /// Creates a history holding only the initial empty-board record.
    pub fn new() -> Self {
        Self {
            records: vec![MoveRecord::initial()],
        }
    }

    /// Number of records, always at least 1.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Always false; the initial record is never removed.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// The record at `step`, if in range.
    pub fn get(&self, step: usize) -> Option<&MoveRecord> {
        self.records.get(step)
    }

    /// Iterates over all records in order.
    pub fn iter(&self) -> impl Iterator<Item = &MoveRecord> {
        self.records.iter()
    }

    /// Drops every record beyond `step`, then appends `record`.
    ///
    /// This is the branch-from-the-past operation: a move made while
    /// viewing step `k` rewrites the future from `k+1` on.
    pub fn branch(&mut self, step: usize, record: MoveRecord) {
        self.records.truncate(step + 1);
        self.records.push(record);
    }
}

impl Default for History {
    fn default() -> Self {
        Self::new()
    }
}
