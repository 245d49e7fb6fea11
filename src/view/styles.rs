//! Table and control styling configuration.
//!
//! Provides distinct styles for selected rows, the cursor row, the active
//! sort column, and the active sex-filter button.

use ratatui::style::{Color, Modifier, Style};

// ===== ColorConfig =====

/// Whether styling may use colors at all.
///
/// Either the `--no-color` flag or a set `NO_COLOR` environment variable
/// (any value) turns colors off; otherwise they are on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorConfig {
    enabled: bool,
}

impl ColorConfig {
    /// Resolve the color setting from the CLI flag and the environment.
    pub fn from_env_and_args(no_color_flag: bool) -> Self {
        Self {
            enabled: !no_color_flag && std::env::var("NO_COLOR").is_err(),
        }
    }

    /// True when colored styles should be produced.
    pub fn colors_enabled(self) -> bool {
        self.enabled
    }
}

// ===== TableStyles =====

/// Styling for the people table and the filter bar.
///
/// - Selected rows: yellow background
/// - Cursor row: reverse video
/// - Active sort header and active filter button: red/bold
#[derive(Debug, Clone)]
pub struct TableStyles {
    header_style: Style,
    active_header_style: Style,
    selected_row_style: Style,
    cursor_row_style: Style,
    active_filter_style: Style,
    caption_style: Style,
}

impl TableStyles {
    /// Create styles honoring the color configuration.
    ///
    /// With colors disabled only modifiers (bold, reversed) are used so
    /// the UI stays legible on monochrome terminals.
    pub fn with_color_config(config: ColorConfig) -> Self {
        if config.colors_enabled() {
            Self {
                header_style: Style::default().add_modifier(Modifier::BOLD),
                active_header_style: Style::default()
                    .fg(Color::Red)
                    .add_modifier(Modifier::BOLD),
                selected_row_style: Style::default().bg(Color::Yellow).fg(Color::Black),
                cursor_row_style: Style::default().add_modifier(Modifier::REVERSED),
                active_filter_style: Style::default()
                    .fg(Color::Blue)
                    .add_modifier(Modifier::BOLD),
                caption_style: Style::default().fg(Color::Gray),
            }
        } else {
            Self {
                header_style: Style::default().add_modifier(Modifier::BOLD),
                active_header_style: Style::default().add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
                selected_row_style: Style::default().add_modifier(Modifier::BOLD),
                cursor_row_style: Style::default().add_modifier(Modifier::REVERSED),
                active_filter_style: Style::default().add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
                caption_style: Style::default(),
            }
        }
    }

    /// Style for inactive column headers.
    pub fn header(&self) -> Style {
        self.header_style
    }

    /// Style for the active sort column header.
    pub fn active_header(&self) -> Style {
        self.active_header_style
    }

    /// Style for rows in the selection set.
    pub fn selected_row(&self) -> Style {
        self.selected_row_style
    }

    /// Style for the cursor row.
    pub fn cursor_row(&self) -> Style {
        self.cursor_row_style
    }

    /// Style for the active sex-filter button.
    pub fn active_filter(&self) -> Style {
        self.active_filter_style
    }

    /// Style for the caption line.
    pub fn caption(&self) -> Style {
        self.caption_style
    }
}

impl Default for TableStyles {
    fn default() -> Self {
        Self::with_color_config(ColorConfig::from_env_and_args(false))
    }
}
