//! Terminal UI components
//!
//! Built with ratatui. Keyboard-first: three selectors across the top,
//! the episode header, the card list, and a status bar.

pub mod cards;
pub mod selector;
pub mod theme;

pub use selector::Dropdown;
pub use theme::Theme;

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph},
    Frame,
};

use crate::app::{App, Focus};

/// Main render function
pub fn render(frame: &mut Frame, app: &mut App) {
    let area = frame.area();

    frame.render_widget(Clear, area);
    frame.render_widget(Block::default().style(Theme::text()), area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Selectors
            Constraint::Min(3),    // Episode
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    render_selectors(frame, chunks[0], app);
    render_episode(frame, chunks[1], app);
    render_status_bar(frame, chunks[2], app);
}

fn render_selectors(frame: &mut Frame, area: Rect, app: &App) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(50),
            Constraint::Percentage(25),
            Constraint::Percentage(25),
        ])
        .split(area);

    let cascade = &app.cascade;
    cascade
        .drama_widget()
        .render(frame, columns[0], app.focus == Focus::Drama);
    cascade
        .season_widget()
        .render(frame, columns[1], app.focus == Focus::Season);
    cascade
        .episode_widget()
        .render(frame, columns[2], app.focus == Focus::Episode);
}

fn render_episode(frame: &mut Frame, area: Rect, app: &mut App) {
    let header = app.cascade.view().header().to_string();
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(if app.focus == Focus::Lines {
            Theme::border_focused()
        } else {
            Theme::border()
        })
        .title(Span::styled(format!(" {} ", header), Theme::title()));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let focused = app.focus == Focus::Lines;
    let App { cascade, lines, .. } = app;
    cards::render(frame, inner, cascade.view(), lines, focused);
}

fn render_status_bar(frame: &mut Frame, area: Rect, app: &App) {
    let mut spans = Vec::new();
    if let Some(msg) = app.loading.message() {
        spans.push(Span::styled(format!(" ⟳ {} ", msg), Theme::loading()));
        spans.push(Span::raw("│"));
    }
    for (key, desc) in [
        ("tab", "focus"),
        ("←→", "change"),
        ("↵", "reveal"),
        ("r", "reload"),
        ("q", "quit"),
    ] {
        spans.push(Span::styled(format!(" {} ", key), Theme::keybind()));
        spans.push(Span::styled(desc, Theme::dimmed()));
    }

    let status = Paragraph::new(Line::from(spans)).style(Theme::status_bar());
    frame.render_widget(status, area);
}
