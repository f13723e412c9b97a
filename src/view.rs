//! Episode view model
//!
//! A pure projection of loaded episode data into a header and a list of
//! reveal-on-demand line cards. The view is rebuilt whole on every load;
//! card reveal state never survives a rebuild.

use std::fmt;

use crate::models::{EpisodeData, LineItem};

/// Header title when no episode is loaded
pub const PLACEHOLDER_TITLE: &str = "Select an episode";

/// Body message when there are no lines to show
pub const EMPTY_MESSAGE: &str = "No lines found for this episode.";

/// Hint on a collapsed card
pub const HINT_REVEAL: &str = "Click to reveal English";

/// Hint on a revealed card
pub const HINT_HIDE: &str = "Click to hide English";

// =============================================================================
// Header
// =============================================================================

/// Episode title and line count
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Header {
    pub title: String,
    pub line_count: usize,
}

impl Header {
    /// Neutral header shown when nothing is loaded
    pub fn placeholder() -> Self {
        Self {
            title: PLACEHOLDER_TITLE.to_string(),
            line_count: 0,
        }
    }

    fn for_episode(data: &EpisodeData) -> Self {
        let title = data
            .title()
            .map(|t| format!("Episode: {}", t))
            .unwrap_or_else(|| PLACEHOLDER_TITLE.to_string());
        Self {
            title,
            line_count: data.items.len(),
        }
    }

    /// Line count as displayed
    pub fn count_label(&self) -> String {
        format!("{} lines", self.line_count)
    }
}

impl Default for Header {
    fn default() -> Self {
        Self::placeholder()
    }
}

impl fmt::Display for Header {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.title, self.count_label())
    }
}

// =============================================================================
// Line Card
// =============================================================================

/// One original/translation pair with its own reveal state
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineCard {
    original: String,
    translation: String,
    revealed: bool,
}

impl LineCard {
    /// Build a collapsed card
    pub fn new(original: impl Into<String>, translation: impl Into<String>) -> Self {
        Self {
            original: original.into(),
            translation: translation.into(),
            revealed: false,
        }
    }

    pub fn original(&self) -> &str {
        &self.original
    }

    /// Translated text regardless of reveal state
    pub fn translation(&self) -> &str {
        &self.translation
    }

    /// Translated text if the card is revealed
    pub fn visible_translation(&self) -> Option<&str> {
        self.revealed.then_some(self.translation.as_str())
    }

    pub fn is_revealed(&self) -> bool {
        self.revealed
    }

    pub fn hint(&self) -> &'static str {
        if self.revealed {
            HINT_HIDE
        } else {
            HINT_REVEAL
        }
    }

    /// Flip reveal state, returning the new state
    pub fn toggle(&mut self) -> bool {
        self.revealed = !self.revealed;
        self.revealed
    }
}

impl From<&LineItem> for LineCard {
    fn from(item: &LineItem) -> Self {
        LineCard::new(item.original(), item.translation())
    }
}

// =============================================================================
// Episode View
// =============================================================================

/// Body of the view
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Body {
    /// Empty-state message
    #[default]
    Empty,
    /// One card per line item, in order
    Cards(Vec<LineCard>),
}

/// Header plus body for the current episode
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct EpisodeView {
    header: Header,
    body: Body,
}

impl EpisodeView {
    /// Neutral header and empty body
    pub fn empty() -> Self {
        Self::default()
    }

    /// Project episode data into a fresh view
    pub fn render(data: Option<&EpisodeData>) -> Self {
        let Some(data) = data else {
            return Self::empty();
        };

        let body = if data.items.is_empty() {
            Body::Empty
        } else {
            Body::Cards(data.items.iter().map(LineCard::from).collect())
        };

        Self {
            header: Header::for_episode(data),
            body,
        }
    }

    pub fn header(&self) -> &Header {
        &self.header
    }

    pub fn body(&self) -> &Body {
        &self.body
    }

    /// Cards in display order; empty in the empty state
    pub fn cards(&self) -> &[LineCard] {
        match &self.body {
            Body::Empty => &[],
            Body::Cards(cards) => cards.as_slice(),
        }
    }

    /// Whether the body shows the empty-state message
    pub fn is_empty(&self) -> bool {
        matches!(self.body, Body::Empty)
    }

    /// Toggle the card at `index`; returns its new state, `None` if out of range
    pub fn toggle(&mut self, index: usize) -> Option<bool> {
        match &mut self.body {
            Body::Empty => None,
            Body::Cards(cards) => cards.get_mut(index).map(LineCard::toggle),
        }
    }
}
