//! TUI rendering and terminal management (impure shell).
//!
//! Rendering is a read-only projection of [`AppState`]; all state
//! changes flow through the pure transitions in `state` and the fetch
//! outcomes delivered by the worker channel.

mod card;
mod styles;

pub use card::{card_lines, truncate_to_width, CARD_HEIGHT, NO_IMAGE_PLACEHOLDER};
pub use styles::{ColorConfig, UiStyles};

use crate::api::{spawn_fetch, CatalogClient};
use crate::config::{KeyBindings, ResolvedConfig};
use crate::model::{AppError, KeyAction};
use crate::state::{query_input, AppState, FetchOutcome, FetchRequest};
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyModifiers},
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    ExecutableCommand,
};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    layout::{Constraint, Layout, Position, Rect},
    text::Line,
    widgets::{Block, Paragraph},
    Frame, Terminal,
};
use std::io::{self, Stdout};
use std::sync::mpsc::{self, Receiver, Sender};
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info};
use unicode_width::UnicodeWidthStr;

/// How long the event loop waits for input before polling the fetch
/// channel.
const TIMER_INTERVAL: Duration = Duration::from_millis(100);

/// Main TUI application.
///
/// Generic over backend to support testing with `TestBackend`.
pub struct TuiApp<B>
where
    B: Backend,
{
    terminal: Terminal<B>,
    state: AppState,
    client: Arc<dyn CatalogClient>,
    config: ResolvedConfig,
    styles: UiStyles,
    key_bindings: KeyBindings,
    outcome_tx: Sender<FetchOutcome>,
    outcome_rx: Receiver<FetchOutcome>,
}

impl TuiApp<CrosstermBackend<Stdout>> {
    /// Create and initialize a new TUI application on stdout.
    ///
    /// Sets up the terminal in raw mode with the alternate screen.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Terminal` if the terminal cannot be set up.
    pub fn new(
        client: Arc<dyn CatalogClient>,
        config: ResolvedConfig,
        styles: UiStyles,
    ) -> Result<Self, AppError> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        stdout.execute(EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        let terminal = Terminal::new(backend)?;
        Ok(Self::with_terminal(terminal, client, config, styles))
    }
}

impl<B> TuiApp<B>
where
    B: Backend,
{
    /// Create an application around an existing terminal.
    ///
    /// Used directly by tests with `ratatui::backend::TestBackend`.
    pub fn with_terminal(
        terminal: Terminal<B>,
        client: Arc<dyn CatalogClient>,
        config: ResolvedConfig,
        styles: UiStyles,
    ) -> Self {
        let (outcome_tx, outcome_rx) = mpsc::channel();
        Self {
            terminal,
            state: AppState::new(),
            client,
            config,
            styles,
            key_bindings: KeyBindings::default(),
            outcome_tx,
            outcome_rx,
        }
    }

    /// Immutable view of the application state.
    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Mutable access to the application state.
    pub fn state_mut(&mut self) -> &mut AppState {
        &mut self.state
    }

    /// The underlying terminal (tests inspect the backend buffer).
    pub fn terminal(&self) -> &Terminal<B> {
        &self.terminal
    }

    /// Submit the current query as a new search.
    ///
    /// No-op for empty or whitespace-only queries.
    pub fn submit_search(&mut self) {
        if let Some(request) = self.state.begin_search() {
            info!(query = %request.query, "search submitted");
            self.dispatch(request);
        }
    }

    /// Request the next page if the load-more affordance is available.
    pub fn load_more(&mut self) {
        if let Some(request) = self.state.begin_load_more() {
            info!(query = %request.query, page = request.page, "loading more");
            self.dispatch(request);
        }
    }

    fn dispatch(&self, request: FetchRequest) {
        spawn_fetch(
            Arc::clone(&self.client),
            request,
            self.outcome_tx.clone(),
        );
    }

    /// Apply all fetch outcomes waiting on the channel.
    ///
    /// Returns true if any outcome was applied (a redraw is needed).
    pub fn poll_outcomes(&mut self) -> bool {
        let mut applied = false;
        while let Ok(outcome) = self.outcome_rx.try_recv() {
            debug!(
                page = outcome.request.page,
                ok = outcome.result.is_ok(),
                "fetch outcome applied"
            );
            self.state.apply_outcome(outcome);
            applied = true;
        }
        applied
    }

    /// Handle a single keyboard event.
    ///
    /// Returns true if the app should quit.
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        // Ctrl+C always quits, even if rebound.
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            return true;
        }

        if let Some(action) = self.key_bindings.get(key) {
            let columns = self.config.columns.max(1) as isize;
            match action {
                KeyAction::Quit => return true,
                KeyAction::SubmitSearch => self.submit_search(),
                KeyAction::LoadMore => self.load_more(),
                KeyAction::ClearQuery => query_input::clear(&mut self.state),
                KeyAction::SelectUp => self.state.move_selection(-columns),
                KeyAction::SelectDown => self.state.move_selection(columns),
                KeyAction::SelectLeft => self.state.move_selection(-1),
                KeyAction::SelectRight => self.state.move_selection(1),
                KeyAction::SelectFirst => self.state.select_first(),
                KeyAction::SelectLast => self.state.select_last(),
            }
            return false;
        }

        // Unbound keys edit the query input.
        match key.code {
            KeyCode::Char(ch)
                if !key.modifiers.contains(KeyModifiers::CONTROL)
                    && !key.modifiers.contains(KeyModifiers::ALT) =>
            {
                query_input::push_char(&mut self.state, ch);
            }
            KeyCode::Backspace => query_input::backspace(&mut self.state),
            _ => {}
        }
        false
    }

    /// Render the current state to the terminal.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Terminal` on backend I/O failure.
    pub fn draw(&mut self) -> Result<(), AppError> {
        let state = &self.state;
        let config = &self.config;
        let styles = &self.styles;
        self.terminal
            .draw(|frame| render(frame, state, config, styles))?;
        Ok(())
    }

    /// Run the main event loop.
    ///
    /// Returns when the user quits (Esc or Ctrl+C). Event-driven:
    /// redraws on user input and on completed fetches; idle ticks only
    /// poll the outcome channel.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Terminal` on terminal I/O failure.
    pub fn run(&mut self) -> Result<(), AppError> {
        self.draw()?;

        loop {
            if event::poll(TIMER_INTERVAL)? {
                match event::read()? {
                    Event::Key(key) => {
                        if self.handle_key(key) {
                            return Ok(());
                        }
                        self.draw()?;
                    }
                    Event::Resize(_, _) => {
                        self.draw()?;
                    }
                    _ => {}
                }
                continue;
            }

            // Timer tick: apply completed fetches, if any.
            if self.poll_outcomes() {
                self.draw()?;
            }
        }
    }
}

/// Run the application against stdout, restoring the terminal on exit.
///
/// `initial_query`, when provided, is submitted immediately so the
/// first page is already loading when the UI appears.
///
/// # Errors
///
/// Returns `AppError::Terminal` on terminal setup or I/O failure.
pub fn run_with_client(
    client: Arc<dyn CatalogClient>,
    config: ResolvedConfig,
    styles: UiStyles,
    initial_query: Option<String>,
) -> Result<(), AppError> {
    let mut app = TuiApp::new(client, config, styles)?;

    if let Some(query) = initial_query {
        app.state_mut().query = query;
        app.submit_search();
    }

    let result = app.run();

    // Restore the terminal even when the loop failed.
    let restore: Result<(), io::Error> = (|| {
        disable_raw_mode()?;
        io::stdout().execute(LeaveAlternateScreen)?;
        Ok(())
    })();

    result.and(restore.map_err(AppError::Terminal))
}

// ===== Rendering =====

fn render(frame: &mut Frame, state: &AppState, config: &ResolvedConfig, styles: &UiStyles) {
    let [input_area, status_area, grid_area, footer_area] = Layout::vertical([
        Constraint::Length(3),
        Constraint::Length(1),
        Constraint::Min(0),
        Constraint::Length(1),
    ])
    .areas(frame.area());

    render_input(frame, input_area, state);
    render_status(frame, status_area, state, styles);
    render_grid(frame, grid_area, state, config, styles);
    render_footer(frame, footer_area, state, styles);
}

fn render_input(frame: &mut Frame, area: Rect, state: &AppState) {
    let input = Paragraph::new(state.query.as_str())
        .block(Block::bordered().title("Search books by title"));
    frame.render_widget(input, area);

    // Place the cursor after the query text, clamped to the box.
    let text_width = state.query.as_str().width() as u16;
    let max_x = area.x + area.width.saturating_sub(2);
    frame.set_cursor_position(Position::new(
        (area.x + 1 + text_width).min(max_x),
        area.y + 1,
    ));
}

fn render_status(frame: &mut Frame, area: Rect, state: &AppState, styles: &UiStyles) {
    let line = if state.loading() {
        Line::styled("Loading...", styles.status)
    } else if let Some(error) = state.error() {
        Line::styled(error.to_string(), styles.error)
    } else if !state.books().is_empty() {
        Line::styled(
            format!(
                "{} result{} · page {}",
                state.books().len(),
                if state.books().len() == 1 { "" } else { "s" },
                state.page()
            ),
            styles.status,
        )
    } else {
        Line::raw("")
    };
    frame.render_widget(Paragraph::new(line).centered(), area);
}

fn render_grid(
    frame: &mut Frame,
    area: Rect,
    state: &AppState,
    config: &ResolvedConfig,
    styles: &UiStyles,
) {
    let books = state.books();

    if books.is_empty() {
        if !state.loading() && state.error().is_none() {
            let placeholder = Paragraph::new(Line::styled(
                "No results yet - try a search.",
                styles.placeholder,
            ))
            .centered();
            frame.render_widget(placeholder, area);
        }
        return;
    }

    let columns = config.columns.max(1);
    let card_width = area.width / columns;
    if card_width < 4 || area.height < CARD_HEIGHT {
        return; // Terminal too small for even one card.
    }

    let visible_rows = (area.height / CARD_HEIGHT).max(1) as usize;
    let selected_row = state.selected() / columns as usize;
    // Window the grid so the selected card is always on screen.
    let first_row = selected_row.saturating_sub(visible_rows - 1);

    for row in 0..visible_rows {
        for col in 0..columns as usize {
            let index = (first_row + row) * columns as usize + col;
            let Some(book) = books.get(index) else {
                return;
            };

            let card_area = Rect {
                x: area.x + col as u16 * card_width,
                y: area.y + row as u16 * CARD_HEIGHT,
                width: card_width,
                height: CARD_HEIGHT,
            };

            let block = if index == state.selected() {
                Block::bordered().border_style(styles.selected_border)
            } else {
                Block::bordered()
            };
            let lines = card_lines(book, &config.covers_url, card_width.saturating_sub(2), styles);
            frame.render_widget(Paragraph::new(lines).block(block), card_area);
        }
    }
}

fn render_footer(frame: &mut Frame, area: Rect, state: &AppState, styles: &UiStyles) {
    let mut hints = vec!["Enter: search".to_string()];
    if state.can_load_more() {
        hints.push(format!("Ctrl+N: load more (page {})", state.page() + 1));
    }
    hints.push("↑↓←→: select".to_string());
    hints.push("Esc: quit".to_string());

    let footer = Paragraph::new(Line::styled(hints.join("  ·  "), styles.hint));
    frame.render_widget(footer, area);
}
