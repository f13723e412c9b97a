//! Data structures for dramalines
//!
//! Contains the shared models organized by payload:
//! - **Catalog**: dramas, their seasons, and per-episode data references
//! - **Episode data**: the title and line items of a single episode

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;

// =============================================================================
// Catalog Models
// =============================================================================

/// Top-level description of every drama the viewer can show
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Catalog {
    #[serde(default)]
    pub dramas: Vec<Drama>,
}

impl Catalog {
    /// A catalog is only usable when it lists at least one drama
    pub fn is_empty(&self) -> bool {
        self.dramas.is_empty()
    }

    /// Check key uniqueness at every level.
    ///
    /// Returns a description of the first violation found.
    pub fn validate(&self) -> Result<(), String> {
        let mut ids = HashSet::new();
        for drama in &self.dramas {
            if !ids.insert(drama.id.as_str()) {
                return Err(format!("duplicate drama id '{}'", drama.id));
            }

            let mut seasons = HashSet::new();
            for season in &drama.seasons {
                if !seasons.insert(season.season) {
                    return Err(format!(
                        "duplicate season {} in drama '{}'",
                        season.season, drama.id
                    ));
                }

                let mut episodes = HashSet::new();
                for episode in &season.episodes {
                    if !episodes.insert(episode.episode) {
                        return Err(format!(
                            "duplicate episode {} in season {} of drama '{}'",
                            episode.episode, season.season, drama.id
                        ));
                    }
                }
            }
        }
        Ok(())
    }

    /// Total number of episodes across all dramas
    pub fn episode_count(&self) -> usize {
        self.dramas
            .iter()
            .flat_map(|d| &d.seasons)
            .map(|s| s.episodes.len())
            .sum()
    }
}

/// A show with its ordered seasons
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Drama {
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub seasons: Vec<Season>,
}

impl Drama {
    /// Display name, falling back to the id for unnamed entries
    pub fn display_name(&self) -> &str {
        if self.name.is_empty() {
            &self.id
        } else {
            &self.name
        }
    }
}

impl fmt::Display for Drama {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// One season of a drama
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Season {
    pub season: u32,
    #[serde(default)]
    pub episodes: Vec<Episode>,
}

impl fmt::Display for Season {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Season {}", self.season)
    }
}

/// One episode entry; the line data itself lives behind `file`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Episode {
    pub episode: u32,
    #[serde(default)]
    pub file: Option<String>,
}

impl Episode {
    /// Reference to the episode data, if one is set
    pub fn reference(&self) -> Option<&str> {
        self.file.as_deref().map(str::trim).filter(|f| !f.is_empty())
    }
}

impl fmt::Display for Episode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Episode {}", self.episode)
    }
}

// =============================================================================
// Episode Data Models
// =============================================================================

/// Payload behind an episode's `file` reference
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EpisodeData {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub items: Vec<LineItem>,
}

impl EpisodeData {
    /// Title if present and non-blank
    pub fn title(&self) -> Option<&str> {
        self.title.as_deref().filter(|t| !t.trim().is_empty())
    }
}

/// An original/translated text pair
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineItem {
    #[serde(default)]
    pub jp: Option<String>,
    #[serde(default)]
    pub en: Option<String>,
}

impl LineItem {
    /// Original-language text, empty when missing
    pub fn original(&self) -> &str {
        self.jp.as_deref().unwrap_or_default()
    }

    /// Translated text, empty when missing
    pub fn translation(&self) -> &str {
        self.en.as_deref().unwrap_or_default()
    }
}
