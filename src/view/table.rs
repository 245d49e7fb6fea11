//! People table widget.
//!
//! Renders the visible rows with a selection marker column, highlighted
//! selected rows, a reverse-video cursor row, and sort markers on the
//! active column header.

use crate::model::PersonRecord;
use crate::state::{SelectionSet, SortField, SortOrder, ViewState};
use crate::view::styles::TableStyles;
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Rect},
    text::Text,
    widgets::{Block, Borders, Cell, Row, Table, Widget},
};

/// Marker shown in the first column for selected rows.
const SELECTED_MARKER: &str = "✓";

/// The people table.
pub struct PeopleTable<'a> {
    visible: &'a [&'a PersonRecord],
    selection: &'a SelectionSet,
    view: &'a ViewState,
    cursor: usize,
    styles: &'a TableStyles,
}

impl<'a> PeopleTable<'a> {
    /// Create a new PeopleTable widget over the computed visible list.
    pub fn new(
        visible: &'a [&'a PersonRecord],
        selection: &'a SelectionSet,
        view: &'a ViewState,
        cursor: usize,
        styles: &'a TableStyles,
    ) -> Self {
        Self {
            visible,
            selection,
            view,
            cursor,
            styles,
        }
    }

    /// Column header with an order marker when this field drives the sort.
    fn header_cell(&self, label: &str, field: SortField) -> Cell<'a> {
        if self.view.sort_field == field {
            let marker = match self.view.sort_order {
                SortOrder::Asc => "▲",
                SortOrder::Desc => "▼",
            };
            Cell::from(Text::from(format!("{label} {marker}"))).style(self.styles.active_header())
        } else {
            Cell::from(Text::from(label.to_string())).style(self.styles.header())
        }
    }
}

impl Widget for PeopleTable<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let header = Row::new(vec![
            Cell::from(" "),
            self.header_cell("name", SortField::Name),
            self.header_cell("sex", SortField::Sex),
            self.header_cell("born", SortField::Born),
        ]);

        let rows = self.visible.iter().enumerate().map(|(index, person)| {
            let marker = if self.selection.is_selected(person) {
                SELECTED_MARKER
            } else {
                " "
            };
            let row = Row::new(vec![
                Cell::from(marker),
                Cell::from(person.name.clone()),
                Cell::from(person.sex.code()),
                Cell::from(person.born.to_string()),
            ]);

            // Cursor styling wins over selection styling on the same row.
            if index == self.cursor {
                row.style(self.styles.cursor_row())
            } else if self.selection.is_selected(person) {
                row.style(self.styles.selected_row())
            } else {
                row
            }
        });

        // Wide enough for the header plus the sort order marker
        let widths = [
            Constraint::Length(1),
            Constraint::Min(20),
            Constraint::Length(6),
            Constraint::Length(6),
        ];

        Table::new(rows, widths)
            .header(header)
            .block(Block::default().borders(Borders::ALL).title("People"))
            .render(area, buf);
    }
}
