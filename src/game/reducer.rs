//! The game state machine as an explicit state value plus a pure reducer.
//!
//! `GameState` is immutable from the outside: the only way to advance the
//! game is [`GameState::apply`], which consumes an [`Action`] and returns
//! the next state. Invalid actions (occupied cell, decided game,
//! out-of-range step) return the state unchanged rather than an error,
//! matching the click-is-ignored behavior of the interactive surface.
//!
//! The player to move and the game status are derived on demand, never
//! stored. Step parity alone determines whose turn it is, so the two can
//! never disagree.

use crate::game::history::{History, MoveRecord};
use crate::game::rules::{Win, check, is_full};
use crate::game::types::{Board, Player};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// An event consumed by the reducer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Action {
    /// Place the current player's mark at a board index (0-8).
    MoveAt(usize),
    /// View a past step of the history.
    JumpTo(usize),
    /// Discard everything and start over.
    NewGame,
}

/// Current status of the game, derived from the viewed board and step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    /// Game is ongoing.
    InProgress,
    /// Game ended in a win.
    Won(Win),
    /// Game ended in a draw.
    Draw,
}

/// Complete game state: the move history and the step currently viewed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    history: History,
    step: usize,
}

impl GameState {
    /// Creates a fresh game: empty board, X to move.
    pub fn new() -> Self {
        Self {
            history: History::new(),
            step: 0,
        }
    }

    /// Returns the move history.
    pub fn history(&self) -> &History {
        &self.history
    }

    /// The step currently viewed.
    pub fn step(&self) -> usize {
        self.step
    }

    /// The board as of the viewed step.
    pub fn board(&self) -> &Board {
        self.history
            .get(self.step)
            .expect("step always indexes a live record")
            .board()
    }

    /// The player who moves next, derived from step parity: X on even
    /// steps, O on odd.
    pub fn next_player(&self) -> Player {
        if self.step % 2 == 0 { Player::X } else { Player::O }
    }

    /// The winner on the viewed board, if any.
    pub fn winner(&self) -> Option<Win> {
        check(self.board())
    }

    /// Derives the status of the viewed step.
    ///
    /// A draw is reported only when the viewed board is full (step 9, as
    /// the board at step `k` holds exactly `k` marks); viewing an earlier
    /// step of a drawn game shows it as still in progress, because play
    /// could branch from there.
    pub fn status(&self) -> GameStatus {
        if let Some(win) = self.winner() {
            GameStatus::Won(win)
        } else if is_full(self.board()) {
            GameStatus::Draw
        } else {
            GameStatus::InProgress
        }
    }

    /// Applies an action, returning the next state.
    ///
    /// Invalid actions return the state unchanged.
    #[instrument(skip(self), fields(step = self.step))]
    pub fn apply(self, action: Action) -> Self {
        match action {
            Action::MoveAt(idx) => self.move_at(idx),
            Action::JumpTo(step) => self.jump_to(step),
            Action::NewGame => {
                debug!("starting new game");
                Self::new()
            }
        }
    }

    fn move_at(mut self, idx: usize) -> Self {
        if self.status() != GameStatus::InProgress || !self.board().is_empty(idx) {
            debug!(idx, "ignoring move");
            return self;
        }
        let player = self.next_player();
        let board = self.board().with_mark(idx, player);
        self.history
            .branch(self.step, MoveRecord::after_move(board, idx));
        self.step = self.history.len() - 1;
        debug!(idx, %player, step = self.step, "placed mark");
        self
    }

    fn jump_to(mut self, step: usize) -> Self {
        if step >= self.history.len() {
            debug!(step, "ignoring jump outside history");
            return self;
        }
        debug!(step, "jumped");
        self.step = step;
        self
    }

    /// The status line shown above the move list.
    pub fn status_line(&self) -> String {
        match self.status() {
            GameStatus::Won(win) => format!("Winner: {}", win.player),
            GameStatus::Draw => "Draw!".to_string(),
            GameStatus::InProgress => format!("Next player: {}", self.next_player()),
        }
    }

    /// The label of history entry `step`, or `None` when out of range.
    pub fn move_label(&self, step: usize) -> Option<String> {
        let record = self.history.get(step)?;
        Some(match record.coordinate() {
            None => "Go to game start".to_string(),
            Some(coord) => format!("Go to move #{step} {coord}"),
        })
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}
