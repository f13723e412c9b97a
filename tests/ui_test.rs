//! UI rendering tests
//!
//! Renders the full screen into a TestBackend and checks what the user
//! would see: selectors, episode header, cards and the empty state.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{backend::TestBackend, Terminal};

use dramalines::api::LoadError;
use dramalines::app::{App, Focus};
use dramalines::models::{Catalog, EpisodeData, LineItem};
use dramalines::ui::{self, Theme};
use dramalines::view::{EMPTY_MESSAGE, HINT_HIDE, HINT_REVEAL};

// =============================================================================
// Helpers
// =============================================================================

fn test_terminal(width: u16, height: u16) -> Terminal<TestBackend> {
    Terminal::new(TestBackend::new(width, height)).unwrap()
}

/// Draw the app and return the screen, one string per row
fn draw(terminal: &mut Terminal<TestBackend>, app: &mut App) -> Vec<String> {
    terminal.draw(|frame| ui::render(frame, app)).unwrap();
    let buffer = terminal.backend().buffer();
    let area = buffer.area;
    (0..area.height)
        .map(|y| {
            (0..area.width)
                .map(|x| buffer[(x, y)].symbol().to_string())
                .collect::<String>()
        })
        .collect()
}

/// Screen text with wide-glyph padding removed
fn compact(rows: &[String]) -> String {
    rows.iter()
        .map(|r| r.replace(' ', ""))
        .collect::<Vec<_>>()
        .join("\n")
}

fn screen_contains(rows: &[String], needle: &str) -> bool {
    rows.iter().any(|r| r.contains(needle))
}

fn catalog() -> Catalog {
    serde_yaml::from_str(
        r#"
dramas:
  - id: hanami
    name: Under the Cherry Trees
    seasons:
      - season: 1
        episodes:
          - { episode: 1, file: data/episodes/hanami-s1e1.yaml }
"#,
    )
    .unwrap()
}

fn pilot() -> EpisodeData {
    EpisodeData {
        title: Some("Pilot".into()),
        items: vec![LineItem {
            jp: Some("こんにちは".into()),
            en: Some("Hello".into()),
        }],
    }
}

fn loaded_app() -> App {
    let mut app = App::new();
    let request = app.install_catalog(Ok(catalog())).unwrap();
    assert!(app.apply_episode(request.id, Ok(pilot())));
    app
}

// =============================================================================
// Rendering Tests
// =============================================================================

#[test]
fn test_loading_indicator_before_catalog() {
    let mut terminal = test_terminal(80, 24);
    let mut app = App::new();
    let rows = draw(&mut terminal, &mut app);

    assert!(screen_contains(&rows, "Loading catalog..."));
    assert!(screen_contains(&rows, "Select an episode (0 lines)"));
}

#[test]
fn test_episode_header_and_collapsed_card() {
    let mut terminal = test_terminal(80, 24);
    let mut app = loaded_app();
    let rows = draw(&mut terminal, &mut app);

    assert!(screen_contains(&rows, "DRAMA"));
    assert!(screen_contains(&rows, "Under the Cherry Trees"));
    assert!(screen_contains(&rows, "Season 1"));
    assert!(screen_contains(&rows, "Episode 1"));
    assert!(screen_contains(&rows, "Episode: Pilot (1 lines)"));
    assert!(compact(&rows).contains("こんにちは"));
    assert!(screen_contains(&rows, HINT_REVEAL));
    assert!(!screen_contains(&rows, "Hello"));
}

#[test]
fn test_revealed_card_shows_translation() {
    let mut terminal = test_terminal(80, 24);
    let mut app = loaded_app();
    app.focus = Focus::Lines;
    app.handle_key(KeyEvent::new(KeyCode::Enter, KeyModifiers::empty()));

    let rows = draw(&mut terminal, &mut app);
    assert!(screen_contains(&rows, "Hello"));
    assert!(screen_contains(&rows, HINT_HIDE));

    app.handle_key(KeyEvent::new(KeyCode::Enter, KeyModifiers::empty()));
    let rows = draw(&mut terminal, &mut app);
    assert!(!screen_contains(&rows, "Hello"));
}

#[test]
fn test_revealed_translation_visible_when_hint_wraps() {
    // 22 columns leave 18 inside a card, so the hide hint wraps to two rows
    let mut terminal = test_terminal(22, 12);
    let mut app = App::new();
    let request = app.install_catalog(Ok(catalog())).unwrap();
    app.apply_episode(
        request.id,
        Ok(EpisodeData {
            title: Some("Pilot".into()),
            items: vec![LineItem {
                jp: Some("hi".into()),
                en: Some("Hello".into()),
            }],
        }),
    );
    app.focus = Focus::Lines;
    app.handle_key(KeyEvent::new(KeyCode::Enter, KeyModifiers::empty()));

    let rows = draw(&mut terminal, &mut app);
    assert!(screen_contains(&rows, "Click to hide"));
    assert!(screen_contains(&rows, "English"));
    assert!(screen_contains(&rows, "Hello"), "translation cut off:\n{}", rows.join("\n"));
}

#[test]
fn test_failed_catalog_renders_empty_state() {
    let mut terminal = test_terminal(80, 24);
    let mut app = App::new();
    assert!(app.install_catalog(Err(LoadError::Status(500))).is_none());

    let rows = draw(&mut terminal, &mut app);
    assert!(screen_contains(&rows, "Select an episode (0 lines)"));
    assert!(screen_contains(&rows, EMPTY_MESSAGE));
    assert!(!screen_contains(&rows, "Loading"));
}

#[test]
fn test_empty_episode_renders_empty_message() {
    let mut terminal = test_terminal(80, 24);
    let mut app = App::new();
    let request = app.install_catalog(Ok(catalog())).unwrap();
    app.apply_episode(
        request.id,
        Ok(EpisodeData {
            title: Some("Silence".into()),
            items: vec![],
        }),
    );

    let rows = draw(&mut terminal, &mut app);
    assert!(screen_contains(&rows, "Episode: Silence (0 lines)"));
    assert!(screen_contains(&rows, EMPTY_MESSAGE));
}

#[test]
fn test_many_cards_scroll_with_cursor() {
    let mut terminal = test_terminal(60, 16);
    let mut app = App::new();
    let request = app.install_catalog(Ok(catalog())).unwrap();
    app.apply_episode(
        request.id,
        Ok(EpisodeData {
            title: Some("Long".into()),
            items: (1..=10)
                .map(|i| LineItem {
                    jp: Some(format!("line-{:02}", i)),
                    en: Some(format!("translation-{:02}", i)),
                })
                .collect(),
        }),
    );

    let rows = draw(&mut terminal, &mut app);
    assert!(screen_contains(&rows, "line-01"));
    assert!(!screen_contains(&rows, "line-10"));

    app.focus = Focus::Lines;
    app.handle_key(KeyEvent::new(KeyCode::End, KeyModifiers::empty()));
    let rows = draw(&mut terminal, &mut app);
    assert!(screen_contains(&rows, "line-10"));
    assert!(!screen_contains(&rows, "line-01"));
}

#[test]
fn test_screen_uses_base_text_style() {
    let mut terminal = test_terminal(80, 24);
    let mut app = App::new();
    draw(&mut terminal, &mut app);

    // Blank cell inside the drama selector, right of its placeholder
    let cell = &terminal.backend().buffer()[(30, 1)];
    assert_eq!(cell.fg, Theme::TEXT);
    assert_eq!(cell.bg, Theme::BACKGROUND);
}

#[test]
fn test_renders_at_small_and_large_sizes() {
    for (w, h) in [(40, 10), (200, 50)] {
        let mut terminal = test_terminal(w, h);
        let mut app = loaded_app();
        let rows = draw(&mut terminal, &mut app);
        assert_eq!(rows.len(), h as usize);
    }
}
