//! Screen layout: filter bar, caption, table, status line.

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Computed areas for one frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AppLayout {
    /// Sex filter buttons (left part of the top bar).
    pub filter_bar: Rect,
    /// Search input (right part of the top bar).
    pub search_input: Rect,
    /// Caption line with the joined selected names.
    pub caption: Rect,
    /// The people table.
    pub table: Rect,
    /// Bottom status line with counts and key hints.
    pub status: Rect,
}

/// Split the frame vertically into top bar / caption / table / status,
/// then the top bar horizontally into filter buttons and search input.
pub fn compute_layout(area: Rect) -> AppLayout {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // top bar (bordered)
            Constraint::Length(1), // caption
            Constraint::Min(3),    // table
            Constraint::Length(1), // status
        ])
        .split(area);

    let top = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(24), Constraint::Min(10)])
        .split(rows[0]);

    AppLayout {
        filter_bar: top[0],
        search_input: top[1],
        caption: rows[1],
        table: rows[2],
        status: rows[3],
    }
}
