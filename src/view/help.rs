//! Help overlay listing keyboard shortcuts.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Widget},
};

/// Keyboard shortcuts shown in the overlay, in display order.
const BINDINGS: &[(&str, &str)] = &[
    ("j/k, ↓/↑", "move cursor"),
    ("g/G", "first/last row"),
    ("Enter/Space", "select or unselect person"),
    ("/", "search by name"),
    ("Esc", "cancel search (clears query)"),
    ("a/m/f", "sex filter: all/male/female"),
    ("n/s/b", "sort by name/sex/born"),
    ("o", "toggle sort order"),
    ("r", "reset filters and sort"),
    ("?", "toggle this help"),
    ("q", "quit"),
];

/// Render the help overlay centered in the given area.
///
/// Clears the area underneath so the table does not bleed through.
pub fn render_help_overlay(area: Rect, buf: &mut Buffer) {
    let overlay = centered_rect(area, 44, (BINDINGS.len() + 2) as u16);

    let lines: Vec<Line> = BINDINGS
        .iter()
        .map(|(keys, action)| {
            Line::from(vec![
                Span::styled(
                    format!("{keys:>12}"),
                    Style::default().add_modifier(Modifier::BOLD),
                ),
                Span::raw("  "),
                Span::raw(*action),
            ])
        })
        .collect();

    Clear.render(overlay, buf);
    Paragraph::new(lines)
        .block(Block::default().borders(Borders::ALL).title("Help"))
        .render(overlay, buf);
}

/// Center a fixed-size rect within the area, clamped to its bounds.
fn centered_rect(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}
