//! Filter bar widgets: sex filter buttons and the search input.

use crate::state::{FocusPane, SexFilter, ViewState};
use crate::view::styles::TableStyles;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

/// Sex filter button row widget.
///
/// Renders the three mutually-exclusive filter buttons with the active
/// one highlighted, styled as a row of buttons.
pub struct SexFilterBar<'a> {
    view: &'a ViewState,
    styles: &'a TableStyles,
}

impl<'a> SexFilterBar<'a> {
    /// Create a new SexFilterBar widget.
    pub fn new(view: &'a ViewState, styles: &'a TableStyles) -> Self {
        Self { view, styles }
    }

    fn button(&self, label: &'static str, filter: SexFilter) -> Span<'a> {
        if self.view.sex_filter == filter {
            Span::styled(label, self.styles.active_filter())
        } else {
            Span::raw(label)
        }
    }
}

impl Widget for SexFilterBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let line = Line::from(vec![
            self.button("[all]", SexFilter::All),
            Span::raw(" "),
            self.button("[m]", SexFilter::Male),
            Span::raw(" "),
            self.button("[f]", SexFilter::Female),
        ]);

        Paragraph::new(line)
            .block(Block::default().borders(Borders::ALL).title("Sex"))
            .render(area, buf);
    }
}

/// Search input widget.
///
/// Shows the current query; while the search input has focus a block
/// cursor is appended and the border title signals typing mode.
pub struct SearchInput<'a> {
    view: &'a ViewState,
    focus: FocusPane,
}

impl<'a> SearchInput<'a> {
    /// Create a new SearchInput widget.
    pub fn new(view: &'a ViewState, focus: FocusPane) -> Self {
        Self { view, focus }
    }
}

impl Widget for SearchInput<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let (title, spans) = match self.focus {
            FocusPane::Search => (
                "Search (typing)",
                vec![
                    Span::raw(self.view.query.clone()),
                    Span::styled(
                        " ",
                        Style::default()
                            .bg(Color::White)
                            .fg(Color::Black)
                            .add_modifier(Modifier::BOLD),
                    ),
                ],
            ),
            FocusPane::Table => ("Search", vec![Span::raw(self.view.query.clone())]),
        };

        Paragraph::new(Line::from(spans))
            .block(Block::default().borders(Borders::ALL).title(title))
            .render(area, buf);
    }
}
