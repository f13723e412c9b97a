//! Line card list
//!
//! Draws the current episode's cards top to bottom, keeping the card under
//! the cursor on screen. A collapsed card shows the original line and the
//! reveal hint; a revealed card adds the translation below the hint.

use ratatui::{
    prelude::*,
    widgets::{Block, BorderType, Borders, Paragraph, Wrap},
};

use crate::app::ListState;
use crate::view::{EpisodeView, LineCard, EMPTY_MESSAGE};
use crate::ui::Theme;

/// Text rows of a card: original, hint, then the translation once revealed
fn card_lines(card: &LineCard) -> Vec<Line<'_>> {
    let mut lines = vec![
        Line::from(Span::styled(card.original(), Theme::original())),
        Line::from(Span::styled(card.hint(), Theme::hint())),
    ];
    if let Some(translation) = card.visible_translation() {
        lines.push(Line::from(Span::styled(translation, Theme::translation())));
    }
    lines
}

/// Total rows a card occupies, borders included.
///
/// Measured with the same word wrapping the card is drawn with.
pub fn card_height(card: &LineCard, width: u16) -> u16 {
    let inner = width.saturating_sub(2).max(1);
    let rows = Paragraph::new(card_lines(card))
        .wrap(Wrap { trim: false })
        .line_count(inner);
    u16::try_from(rows).unwrap_or(u16::MAX).saturating_add(2)
}

/// Scroll `list.offset` so the selected card fits in `height` rows
fn adjust_offset(list: &mut ListState, heights: &[u16], height: u16) {
    if list.selected < list.offset {
        list.offset = list.selected;
    }
    while list.offset < list.selected {
        let used: u16 = heights[list.offset..=list.selected].iter().sum();
        if used <= height {
            break;
        }
        list.offset += 1;
    }
}

/// Render the card list, or the empty-state message
pub fn render(frame: &mut Frame, area: Rect, view: &EpisodeView, list: &mut ListState, focused: bool) {
    let cards = view.cards();
    if cards.is_empty() {
        let empty = Paragraph::new(vec![Line::from(""), Line::from(EMPTY_MESSAGE)])
            .style(Theme::dimmed())
            .alignment(Alignment::Center);
        frame.render_widget(empty, area);
        return;
    }

    list.len = cards.len();
    list.selected = list.selected.min(cards.len() - 1);

    let heights: Vec<u16> = cards.iter().map(|c| card_height(c, area.width)).collect();
    adjust_offset(list, &heights, area.height);

    let bottom = area.y + area.height;
    let mut y = area.y;
    for (i, card) in cards.iter().enumerate().skip(list.offset) {
        if y >= bottom {
            break;
        }
        let rect = Rect {
            x: area.x,
            y,
            width: area.width,
            height: heights[i].min(bottom - y),
        };
        render_card(frame, rect, i, card, focused && i == list.selected);
        y = y.saturating_add(heights[i]);
    }
}

fn render_card(frame: &mut Frame, area: Rect, index: usize, card: &LineCard, active: bool) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(if active {
            Theme::border_focused()
        } else {
            Theme::border()
        })
        .title(Span::styled(format!(" {} ", index + 1), Theme::dimmed()))
        .style(Theme::card());

    let para = Paragraph::new(card_lines(card))
        .block(block)
        .wrap(Wrap { trim: false });
    frame.render_widget(para, area);
}
