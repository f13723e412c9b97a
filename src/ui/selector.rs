//! Dropdown selector
//!
//! Terminal stand-in for a single-choice select box. Cycles through its
//! options with the arrow keys and implements [`SelectionWidget`] so the
//! cascade can repopulate it.

use ratatui::{
    prelude::*,
    widgets::{Block, BorderType, Borders, Paragraph},
};

use crate::selection::{SelectOption, SelectionWidget};
use crate::ui::Theme;

/// Selector state
#[derive(Debug, Clone, Default)]
pub struct Dropdown {
    title: String,
    options: Vec<SelectOption>,
    selected: usize,
}

impl Dropdown {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Self::default()
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn options(&self) -> &[SelectOption] {
        &self.options
    }

    pub fn selected_index(&self) -> usize {
        self.selected
    }

    /// Label of the selected option
    pub fn selected_label(&self) -> Option<&str> {
        self.options.get(self.selected).map(|o| o.label.as_str())
    }

    /// Select the next option, returns true if the value changed
    pub fn next(&mut self) -> bool {
        if self.selected + 1 < self.options.len() {
            self.selected += 1;
            true
        } else {
            false
        }
    }

    /// Select the previous option, returns true if the value changed
    pub fn prev(&mut self) -> bool {
        if self.selected > 0 {
            self.selected -= 1;
            true
        } else {
            false
        }
    }

    /// Select the option with the given value, returns true if the value changed
    pub fn select_value(&mut self, value: &str) -> bool {
        match self.options.iter().position(|o| o.value == value) {
            Some(idx) if idx != self.selected => {
                self.selected = idx;
                true
            }
            _ => false,
        }
    }

    /// Render the selector
    pub fn render(&self, frame: &mut Frame, area: Rect, focused: bool) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(if focused {
                Theme::border_focused()
            } else {
                Theme::border()
            })
            .title(Span::styled(
                format!(" {} ", self.title.to_uppercase()),
                Theme::title(),
            ));

        let line = match self.selected_label() {
            Some(label) => {
                let arrow = |active: bool| {
                    if active {
                        Theme::selector_arrow()
                    } else {
                        Theme::dimmed()
                    }
                };
                Line::from(vec![
                    Span::styled("◂ ", arrow(self.selected > 0)),
                    Span::styled(label.to_string(), Theme::selector_value()),
                    Span::styled(" ▸", arrow(self.selected + 1 < self.options.len())),
                    Span::styled(
                        format!("  {}/{}", self.selected + 1, self.options.len()),
                        Theme::dimmed(),
                    ),
                ])
            }
            None => Line::from(Span::styled("—", Theme::dimmed())),
        };

        frame.render_widget(Paragraph::new(line).block(block), area);
    }
}

impl SelectionWidget for Dropdown {
    /// Replacing the options selects the first one, like a native select box
    fn set_options(&mut self, options: Vec<SelectOption>) {
        self.options = options;
        self.selected = 0;
    }

    fn selected_value(&self) -> Option<&str> {
        self.options.get(self.selected).map(|o| o.value.as_str())
    }
}
