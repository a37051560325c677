//! Keyboard cursor movement and mouse hit testing.

use crossterm::event::KeyCode;
use ratatui::layout::Rect;

/// Moves the board cursor (a cell index, 0-8) based on arrow keys.
///
/// The cursor stops at the board edges.
pub fn move_cursor(cursor: usize, key: KeyCode) -> usize {
    let (row, col) = (cursor / 3, cursor % 3);
    let (row, col) = match key {
        KeyCode::Up => (row.saturating_sub(1), col),
        KeyCode::Down => ((row + 1).min(2), col),
        KeyCode::Left => (row, col.saturating_sub(1)),
        KeyCode::Right => (row, (col + 1).min(2)),
        _ => (row, col),
    };
    row * 3 + col
}

/// Finds the board cell under a screen position, if any.
///
/// `cells` holds the screen rectangle of each cell as of the last draw.
pub fn cell_at(x: u16, y: u16, cells: &[Rect; 9]) -> Option<usize> {
    cells.iter().position(|rect| contains(*rect, x, y))
}

/// Finds the history-list row under a screen position, if any.
///
/// `inner` is the list area inside its border, `offset` the list's
/// scroll offset, `len` the number of real entries.
pub fn history_row_at(x: u16, y: u16, inner: Rect, offset: usize, len: usize) -> Option<usize> {
    if !contains(inner, x, y) {
        return None;
    }
    let row = (y - inner.y) as usize + offset;
    (row < len).then_some(row)
}

fn contains(rect: Rect, x: u16, y: u16) -> bool {
    x >= rect.x && x < rect.x + rect.width && y >= rect.y && y < rect.y + rect.height
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cursor_moves_within_grid() {
        assert_eq!(move_cursor(4, KeyCode::Up), 1);
        assert_eq!(move_cursor(4, KeyCode::Down), 7);
        assert_eq!(move_cursor(4, KeyCode::Left), 3);
        assert_eq!(move_cursor(4, KeyCode::Right), 5);
    }

    #[test]
    fn test_cursor_stops_at_edges() {
        assert_eq!(move_cursor(0, KeyCode::Up), 0);
        assert_eq!(move_cursor(0, KeyCode::Left), 0);
        assert_eq!(move_cursor(8, KeyCode::Down), 8);
        assert_eq!(move_cursor(8, KeyCode::Right), 8);
    }

    #[test]
    fn test_cursor_ignores_other_keys() {
        assert_eq!(move_cursor(4, KeyCode::Enter), 4);
    }

    #[test]
    fn test_cell_hit_testing() {
        let mut cells = [Rect::default(); 9];
        for (i, rect) in cells.iter_mut().enumerate() {
            let (row, col) = (i / 3, i % 3);
            *rect = Rect::new(col as u16 * 4, row as u16 * 2, 4, 2);
        }
        assert_eq!(cell_at(0, 0, &cells), Some(0));
        assert_eq!(cell_at(5, 3, &cells), Some(4));
        assert_eq!(cell_at(11, 5, &cells), Some(8));
        assert_eq!(cell_at(30, 30, &cells), None);
    }

    #[test]
    fn test_history_row_hit_testing() {
        let inner = Rect::new(10, 5, 20, 8);
        assert_eq!(history_row_at(12, 5, inner, 0, 10), Some(0));
        assert_eq!(history_row_at(12, 8, inner, 0, 10), Some(3));
        assert_eq!(history_row_at(12, 8, inner, 2, 10), Some(5));
        // Below the last real entry.
        assert_eq!(history_row_at(12, 9, inner, 0, 3), None);
        // Outside the list entirely.
        assert_eq!(history_row_at(9, 5, inner, 0, 10), None);
    }
}
