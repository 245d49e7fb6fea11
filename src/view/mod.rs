//! TUI rendering and terminal management (impure shell)

mod controls;
mod help;
mod layout;
mod styles;
mod table;

pub use controls::{SearchInput, SexFilterBar};
pub use help::render_help_overlay;
pub use layout::{compute_layout, AppLayout};
pub use styles::{ColorConfig, TableStyles};
pub use table::PeopleTable;

use crate::config::KeyBindings;
use crate::model::{KeyAction, PersonStore};
use crate::state::{AppState, FocusPane, ViewState};
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    ExecutableCommand,
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, Stdout};
use thiserror::Error;
use tracing::info;

/// Errors that can occur during TUI operations
#[derive(Debug, Error)]
pub enum TuiError {
    /// IO error during terminal operations
    #[error("Terminal IO error: {0}")]
    Io(#[from] io::Error),
}

impl From<TuiError> for crate::model::AppError {
    fn from(err: TuiError) -> Self {
        match err {
            TuiError::Io(io) => crate::model::AppError::Terminal(io),
        }
    }
}

/// Main TUI application
///
/// Generic over backend to support testing with TestBackend
pub struct TuiApp<B>
where
    B: ratatui::backend::Backend,
{
    terminal: Terminal<B>,
    app_state: AppState,
    key_bindings: KeyBindings,
    styles: TableStyles,
}

/// Run the TUI over a loaded store with an initial view state.
///
/// Sets up the terminal in raw mode with an alternate screen, runs the
/// event loop until the user quits, and restores the terminal on all
/// paths, including errors.
pub fn run(store: PersonStore, view: ViewState, colors: ColorConfig) -> Result<(), TuiError> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    stdout.execute(EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend)?;

    let mut app = TuiApp {
        terminal,
        app_state: AppState::with_view(store, view),
        key_bindings: KeyBindings::default(),
        styles: TableStyles::with_color_config(colors),
    };

    let result = app.event_loop();
    restore_terminal();
    result
}

/// Restore the terminal to cooked mode; best-effort on shutdown.
fn restore_terminal() {
    let _ = disable_raw_mode();
    let _ = io::stdout().execute(LeaveAlternateScreen);
}

impl TuiApp<CrosstermBackend<Stdout>> {
    /// Run the main event loop.
    ///
    /// Returns when user quits (q or Ctrl+C). The dataset is static, so
    /// the loop blocks on input events and redraws only after handling
    /// one; idle the app consumes no CPU.
    fn event_loop(&mut self) -> Result<(), TuiError> {
        self.draw()?;

        loop {
            match event::read()? {
                Event::Key(key) => {
                    if self.handle_key(key) {
                        info!("User quit");
                        return Ok(());
                    }
                    self.draw()?;
                }
                Event::Resize(_, _) => {
                    self.draw()?;
                }
                _ => {}
            }
        }
    }
}

impl<B> TuiApp<B>
where
    B: ratatui::backend::Backend,
{
    /// Create an app over an arbitrary backend (used by tests).
    pub fn with_backend(terminal: Terminal<B>, app_state: AppState, styles: TableStyles) -> Self {
        Self {
            terminal,
            app_state,
            key_bindings: KeyBindings::default(),
            styles,
        }
    }

    /// The current application state.
    pub fn state(&self) -> &AppState {
        &self.app_state
    }

    /// Access the backing terminal (used by integration tests).
    pub fn terminal(&self) -> &Terminal<B> {
        &self.terminal
    }

    /// Handle a single keyboard event.
    ///
    /// Returns true if app should quit. While the search input has focus,
    /// printable keys edit the query; everything else routes through the
    /// configurable bindings.
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        // Key repeats and releases (Windows terminals) are not input
        if key.kind != KeyEventKind::Press {
            return false;
        }

        // Ctrl+C always quits, regardless of focus or bindings
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            return true;
        }

        if self.app_state.focus == FocusPane::Search {
            return self.handle_search_key(key);
        }

        let action = self.key_bindings.get(key).or_else(|| {
            // Terminals disagree on whether shifted printables carry the
            // SHIFT modifier; retry the lookup without it.
            if let KeyCode::Char(_) = key.code {
                let mut without_shift = key;
                without_shift.modifiers = key.modifiers.difference(KeyModifiers::SHIFT);
                self.key_bindings.get(without_shift)
            } else {
                None
            }
        });

        match action {
            Some(action) => self.app_state.apply(action),
            None => false,
        }
    }

    /// Handle a keystroke while the search input has focus.
    fn handle_search_key(&mut self, key: KeyEvent) -> bool {
        match key.code {
            // Only plain (optionally shifted) characters edit the query
            KeyCode::Char(ch)
                if key.modifiers.difference(KeyModifiers::SHIFT) == KeyModifiers::NONE =>
            {
                self.app_state.handle_search_char(ch)
            }
            KeyCode::Backspace => self.app_state.handle_search_backspace(),
            KeyCode::Enter => {
                self.app_state.apply(KeyAction::SubmitSearch);
            }
            KeyCode::Esc => {
                self.app_state.apply(KeyAction::CancelSearch);
            }
            _ => {}
        }
        false
    }

    /// Render one frame from the current state.
    pub fn draw(&mut self) -> Result<(), TuiError> {
        let Self {
            terminal,
            app_state,
            styles,
            ..
        } = self;

        let visible = app_state.visible();
        let caption = app_state.caption();

        terminal.draw(|frame| {
            let layout = compute_layout(frame.area());

            frame.render_widget(SexFilterBar::new(&app_state.view, styles), layout.filter_bar);
            frame.render_widget(
                SearchInput::new(&app_state.view, app_state.focus),
                layout.search_input,
            );

            frame.render_widget(
                ratatui::widgets::Paragraph::new(caption.as_str()).style(styles.caption()),
                layout.caption,
            );

            frame.render_widget(
                PeopleTable::new(
                    &visible,
                    &app_state.selection,
                    &app_state.view,
                    app_state.cursor,
                    styles,
                ),
                layout.table,
            );

            let status = format!(
                "{}/{} people | selected {} | / search a/m/f sex n/s/b sort r reset ? help q quit",
                visible.len(),
                app_state.store().len(),
                app_state.selection.len(),
            );
            frame.render_widget(ratatui::widgets::Paragraph::new(status), layout.status);

            if app_state.help_visible {
                render_help_overlay(frame.area(), frame.buffer_mut());
            }
        })?;

        Ok(())
    }
}
