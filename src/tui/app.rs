//! Application state: the game plus view-only concerns.

use crate::game::{Action, GameState};
use crate::tui::input;
use crossterm::event::{KeyCode, MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::Rect;
use ratatui::widgets::ListState;
use tracing::debug;

/// Which pane receives arrow keys and Enter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    /// The 3x3 board grid.
    Board,
    /// The move-history list.
    History,
}

/// Screen rectangles recorded during the last draw, for mouse hit testing.
#[derive(Debug, Clone, Copy, Default)]
pub struct ScreenAreas {
    /// One rectangle per board cell, row-major.
    pub cells: [Rect; 9],
    /// The history list area inside its border.
    pub history_inner: Rect,
}

/// Main application state.
pub struct App {
    state: GameState,
    cursor: usize,
    focus: Focus,
    list_state: ListState,
    areas: ScreenAreas,
}

impl App {
    /// Creates a new application with a fresh game, cursor on the center
    /// cell.
    pub fn new() -> Self {
        let mut list_state = ListState::default();
        list_state.select(Some(0));
        Self {
            state: GameState::new(),
            cursor: 4,
            focus: Focus::Board,
            list_state,
            areas: ScreenAreas::default(),
        }
    }

    /// The current game state.
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// The board cursor as a cell index (0-8).
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// The focused pane.
    pub fn focus(&self) -> Focus {
        self.focus
    }

    /// Mutable access to the history-list widget state.
    pub fn list_state_mut(&mut self) -> &mut ListState {
        &mut self.list_state
    }

    /// Records the screen areas computed during a draw.
    pub fn set_areas(&mut self, areas: ScreenAreas) {
        self.areas = areas;
    }

    /// Runs an action through the reducer and re-syncs the list selection
    /// to the step now viewed.
    pub fn dispatch(&mut self, action: Action) {
        debug!(?action, "dispatch");
        self.state = std::mem::take(&mut self.state).apply(action);
        self.list_state.select(Some(self.state.step()));
    }

    /// Handles a key press (quit keys are handled by the event loop).
    pub fn handle_key(&mut self, key: KeyCode) {
        match key {
            KeyCode::Tab | KeyCode::BackTab => self.toggle_focus(),
            KeyCode::Char('r') => self.dispatch(Action::NewGame),
            KeyCode::Char(c @ '1'..='9') => {
                let idx = c as usize - '1' as usize;
                self.cursor = idx;
                self.focus = Focus::Board;
                self.dispatch(Action::MoveAt(idx));
            }
            KeyCode::Up | KeyCode::Down | KeyCode::Left | KeyCode::Right => match self.focus {
                Focus::Board => self.cursor = input::move_cursor(self.cursor, key),
                Focus::History => self.move_selection(key),
            },
            KeyCode::Enter | KeyCode::Char(' ') => match self.focus {
                Focus::Board => self.dispatch(Action::MoveAt(self.cursor)),
                Focus::History => {
                    if let Some(step) = self.list_state.selected() {
                        self.dispatch(Action::JumpTo(step));
                    }
                }
            },
            _ => {}
        }
    }

    /// Handles a mouse event: click to play or jump, motion to move the
    /// cursor.
    pub fn handle_mouse(&mut self, mouse: MouseEvent) {
        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                if let Some(idx) = input::cell_at(mouse.column, mouse.row, &self.areas.cells) {
                    self.cursor = idx;
                    self.focus = Focus::Board;
                    self.dispatch(Action::MoveAt(idx));
                } else if let Some(step) = input::history_row_at(
                    mouse.column,
                    mouse.row,
                    self.areas.history_inner,
                    self.list_state.offset(),
                    self.state.history().len(),
                ) {
                    self.focus = Focus::History;
                    self.dispatch(Action::JumpTo(step));
                }
            }
            MouseEventKind::Moved => {
                if let Some(idx) = input::cell_at(mouse.column, mouse.row, &self.areas.cells) {
                    self.cursor = idx;
                }
            }
            _ => {}
        }
    }

    fn toggle_focus(&mut self) {
        self.focus = match self.focus {
            Focus::Board => {
                self.list_state.select(Some(self.state.step()));
                Focus::History
            }
            Focus::History => Focus::Board,
        };
    }

    fn move_selection(&mut self, key: KeyCode) {
        let len = self.state.history().len();
        let selected = self.list_state.selected().unwrap_or(0);
        let next = match key {
            KeyCode::Up => selected.saturating_sub(1),
            KeyCode::Down => (selected + 1).min(len - 1),
            _ => selected,
        };
        self.list_state.select(Some(next));
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}
