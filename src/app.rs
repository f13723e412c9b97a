//! App state and core application logic
//!
//! Owns the selection cascade and the terminal-side state around it:
//! keyboard focus, the card cursor and the loading indicator.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::api::LoadError;
use crate::controller::{Cascade, LoadRequest, SelectionEvent};
use crate::models::{Catalog, EpisodeData};
use crate::ui::Dropdown;

// =============================================================================
// Focus
// =============================================================================

/// Which part of the screen receives navigation keys
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    #[default]
    Drama,
    Season,
    Episode,
    Lines,
}

impl Focus {
    pub fn next(self) -> Self {
        match self {
            Focus::Drama => Focus::Season,
            Focus::Season => Focus::Episode,
            Focus::Episode => Focus::Lines,
            Focus::Lines => Focus::Drama,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            Focus::Drama => Focus::Lines,
            Focus::Season => Focus::Drama,
            Focus::Episode => Focus::Season,
            Focus::Lines => Focus::Episode,
        }
    }
}

// =============================================================================
// Loading State
// =============================================================================

/// Loading state for async operations
#[derive(Debug, Clone, PartialEq, Default)]
pub enum LoadingState {
    /// Idle - no loading in progress
    #[default]
    Idle,
    /// Loading with optional message
    Loading(Option<String>),
}

impl LoadingState {
    pub fn is_loading(&self) -> bool {
        matches!(self, LoadingState::Loading(_))
    }

    pub fn message(&self) -> Option<&str> {
        match self {
            LoadingState::Loading(Some(msg)) => Some(msg),
            _ => None,
        }
    }
}

// =============================================================================
// Card Cursor
// =============================================================================

/// Cursor over the card list
#[derive(Debug, Clone, Default)]
pub struct ListState {
    /// Currently selected index
    pub selected: usize,
    /// First card drawn
    pub offset: usize,
    /// Total number of items
    pub len: usize,
}

impl ListState {
    pub fn new(len: usize) -> Self {
        Self {
            selected: 0,
            offset: 0,
            len,
        }
    }

    /// Move selection up
    pub fn up(&mut self) {
        if self.selected > 0 {
            self.selected -= 1;
            if self.selected < self.offset {
                self.offset = self.selected;
            }
        }
    }

    /// Move selection down
    pub fn down(&mut self) {
        if self.len > 0 && self.selected < self.len - 1 {
            self.selected += 1;
        }
    }

    /// Move selection up by a page
    pub fn page_up(&mut self, page_size: usize) {
        self.selected = self.selected.saturating_sub(page_size);
        if self.selected < self.offset {
            self.offset = self.selected;
        }
    }

    /// Move selection down by a page
    pub fn page_down(&mut self, page_size: usize) {
        self.selected = (self.selected + page_size).min(self.len.saturating_sub(1));
    }

    pub fn first(&mut self) {
        self.selected = 0;
        self.offset = 0;
    }

    pub fn last(&mut self) {
        self.selected = self.len.saturating_sub(1);
    }
}

// =============================================================================
// Main Application State
// =============================================================================

/// Main application state
#[derive(Debug)]
pub struct App {
    /// Whether the app is running
    pub running: bool,
    /// Keyboard focus
    pub focus: Focus,
    /// Selectors, catalog and episode view
    pub cascade: Cascade<Dropdown>,
    /// Cursor over the current cards
    pub lines: ListState,
    /// Loading indicator
    pub loading: LoadingState,
}

impl Default for App {
    fn default() -> Self {
        Self {
            running: true,
            focus: Focus::default(),
            cascade: Cascade::new(
                Dropdown::new("Drama"),
                Dropdown::new("Season"),
                Dropdown::new("Episode"),
            ),
            lines: ListState::default(),
            loading: LoadingState::Loading(Some("Loading catalog...".into())),
        }
    }
}

impl App {
    /// Create a new App instance
    pub fn new() -> Self {
        Self::default()
    }

    /// Quit the application
    pub fn quit(&mut self) {
        self.running = false;
    }

    // -------------------------------------------------------------------------
    // Cascade Plumbing
    // -------------------------------------------------------------------------

    /// Install the catalog load outcome, returning the first episode fetch
    pub fn install_catalog(&mut self, result: Result<Catalog, LoadError>) -> Option<LoadRequest> {
        let request = self.cascade.install_catalog(result);
        self.after_request(request.as_ref());
        request
    }

    /// Run a selection change through the cascade
    pub fn change(&mut self, event: SelectionEvent) -> Option<LoadRequest> {
        let request = self.cascade.handle(event);
        self.after_request(request.as_ref());
        request
    }

    /// Deliver an episode fetch outcome; stale outcomes are ignored
    pub fn apply_episode(&mut self, id: u64, result: Result<EpisodeData, LoadError>) -> bool {
        let applied = self.cascade.apply_episode(id, result);
        if applied {
            self.loading = LoadingState::Idle;
            self.reset_cursor();
        }
        applied
    }

    fn after_request(&mut self, request: Option<&LoadRequest>) {
        match request {
            Some(_) => {
                self.loading = LoadingState::Loading(Some("Loading episode...".into()));
            }
            None => {
                self.loading = LoadingState::Idle;
                self.reset_cursor();
            }
        }
    }

    fn reset_cursor(&mut self) {
        self.lines = ListState::new(self.cascade.view().cards().len());
    }

    /// Mark a catalog retry as started.
    ///
    /// Returns false while any load is in flight, so a catalog install can
    /// never land on top of choices made after it.
    pub fn retry_catalog(&mut self) -> bool {
        if self.loading.is_loading() {
            return false;
        }
        self.loading = LoadingState::Loading(Some("Loading catalog...".into()));
        true
    }

    /// Toggle the card under the cursor
    pub fn toggle_current(&mut self) -> bool {
        self.cascade.view_mut().toggle(self.lines.selected).is_some()
    }

    // -------------------------------------------------------------------------
    // Keyboard Event Handling
    // -------------------------------------------------------------------------

    /// Handle keyboard event, returns the selection change it caused, if any
    pub fn handle_key(&mut self, key: KeyEvent) -> Option<SelectionEvent> {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.quit();
            return None;
        }

        match key.code {
            KeyCode::Char('q') => {
                self.quit();
                return None;
            }
            KeyCode::Tab => {
                self.focus = self.focus.next();
                return None;
            }
            KeyCode::BackTab => {
                self.focus = self.focus.prev();
                return None;
            }
            KeyCode::Char('r') => {
                // Reload the current episode
                return Some(SelectionEvent::EpisodeChanged);
            }
            _ => {}
        }

        match self.focus {
            Focus::Drama => {
                Self::cycle(self.cascade.drama_widget_mut(), key)
                    .then_some(SelectionEvent::DramaChanged)
            }
            Focus::Season => {
                Self::cycle(self.cascade.season_widget_mut(), key)
                    .then_some(SelectionEvent::SeasonChanged)
            }
            Focus::Episode => {
                Self::cycle(self.cascade.episode_widget_mut(), key)
                    .then_some(SelectionEvent::EpisodeChanged)
            }
            Focus::Lines => {
                self.handle_lines_key(key);
                None
            }
        }
    }

    /// Move a dropdown with the arrow keys, returns true if its value changed
    fn cycle(dropdown: &mut Dropdown, key: KeyEvent) -> bool {
        match key.code {
            KeyCode::Left | KeyCode::Up | KeyCode::Char('h') | KeyCode::Char('k') => dropdown.prev(),
            KeyCode::Right | KeyCode::Down | KeyCode::Char('l') | KeyCode::Char('j') => {
                dropdown.next()
            }
            _ => false,
        }
    }

    fn handle_lines_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => self.lines.up(),
            KeyCode::Down | KeyCode::Char('j') => self.lines.down(),
            KeyCode::PageUp => self.lines.page_up(5),
            KeyCode::PageDown => self.lines.page_down(5),
            KeyCode::Home => self.lines.first(),
            KeyCode::End => self.lines.last(),
            KeyCode::Enter | KeyCode::Char(' ') => {
                self.toggle_current();
            }
            _ => {}
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
