//! Selection derivation
//!
//! Turns raw selector values into the effective drama, season and episode.
//! Each level independently falls back to the first entry of its sequence
//! when the raw value is absent or matches nothing, and is `None` only when
//! the parent is missing or has no entries.

use crate::models::{Catalog, Drama, Episode, Season};

// =============================================================================
// Options and Widgets
// =============================================================================

/// One entry of a selector's option list
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectOption {
    /// Natural key of the entry
    pub value: String,
    /// Human-readable label
    pub label: String,
}

impl SelectOption {
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
        }
    }
}

/// A single-choice selector the cascade can drive.
///
/// Change notification is not part of the trait: the front end reports
/// changes to [`crate::controller::Cascade::handle`].
pub trait SelectionWidget {
    /// Replace the full option list
    fn set_options(&mut self, options: Vec<SelectOption>);

    /// Value of the currently selected option, if any
    fn selected_value(&self) -> Option<&str>;
}

/// Catalog entries that can appear in a selector
pub trait Selectable {
    /// Natural key used as option value
    fn key(&self) -> String;

    /// Label shown to the user
    fn label(&self) -> String;

    /// Whether a raw selector value names this entry
    fn matches(&self, raw: &str) -> bool;
}

impl Selectable for Drama {
    fn key(&self) -> String {
        self.id.clone()
    }

    fn label(&self) -> String {
        self.display_name().to_string()
    }

    fn matches(&self, raw: &str) -> bool {
        self.id == raw
    }
}

impl Selectable for Season {
    fn key(&self) -> String {
        self.season.to_string()
    }

    fn label(&self) -> String {
        self.to_string()
    }

    fn matches(&self, raw: &str) -> bool {
        raw.trim().parse::<u32>().ok() == Some(self.season)
    }
}

impl Selectable for Episode {
    fn key(&self) -> String {
        self.episode.to_string()
    }

    fn label(&self) -> String {
        self.to_string()
    }

    fn matches(&self, raw: &str) -> bool {
        raw.trim().parse::<u32>().ok() == Some(self.episode)
    }
}

/// Build the option list for a sequence of entries
pub fn options_for<T: Selectable>(entries: &[T]) -> Vec<SelectOption> {
    entries
        .iter()
        .map(|e| SelectOption::new(e.key(), e.label()))
        .collect()
}

/// Find the entry named by `raw`, else the first entry
pub fn pick<'a, T: Selectable>(entries: &'a [T], raw: Option<&str>) -> Option<&'a T> {
    raw.and_then(|raw| entries.iter().find(|e| e.matches(raw)))
        .or_else(|| entries.first())
}

// =============================================================================
// Per-level Derivation
// =============================================================================

/// Effective drama for a raw drama value
pub fn select_drama<'a>(catalog: Option<&'a Catalog>, raw: Option<&str>) -> Option<&'a Drama> {
    catalog.and_then(|c| pick(&c.dramas, raw))
}

/// Effective season of `drama` for a raw season value
pub fn select_season<'a>(drama: Option<&'a Drama>, raw: Option<&str>) -> Option<&'a Season> {
    drama.and_then(|d| pick(&d.seasons, raw))
}

/// Effective episode of `season` for a raw episode value
pub fn select_episode<'a>(season: Option<&'a Season>, raw: Option<&str>) -> Option<&'a Episode> {
    season.and_then(|s| pick(&s.episodes, raw))
}

/// Option list for the drama selector
pub fn drama_options(catalog: Option<&Catalog>) -> Vec<SelectOption> {
    catalog.map(|c| options_for(&c.dramas)).unwrap_or_default()
}

/// Option list for the season selector
pub fn season_options(drama: Option<&Drama>) -> Vec<SelectOption> {
    drama.map(|d| options_for(&d.seasons)).unwrap_or_default()
}

/// Option list for the episode selector
pub fn episode_options(season: Option<&Season>) -> Vec<SelectOption> {
    season.map(|s| options_for(&s.episodes)).unwrap_or_default()
}

// =============================================================================
// Full Selection
// =============================================================================

/// Effective drama, season and episode, derived together
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Selection<'a> {
    pub drama: Option<&'a Drama>,
    pub season: Option<&'a Season>,
    pub episode: Option<&'a Episode>,
}

impl<'a> Selection<'a> {
    /// Derive all three levels from raw values
    pub fn derive(
        catalog: Option<&'a Catalog>,
        drama: Option<&str>,
        season: Option<&str>,
        episode: Option<&str>,
    ) -> Self {
        let drama = select_drama(catalog, drama);
        let season = select_season(drama, season);
        let episode = select_episode(season, episode);
        Self {
            drama,
            season,
            episode,
        }
    }

    /// Data reference of the effective episode
    pub fn reference(&self) -> Option<&'a str> {
        self.episode.and_then(Episode::reference)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> Catalog {
        serde_yaml::from_str(
            r#"
dramas:
  - id: d1
    name: Show A
    seasons:
      - season: 1
        episodes:
          - { episode: 1, file: a/1-1.yaml }
          - { episode: 2, file: a/1-2.yaml }
      - season: 3
        episodes:
          - { episode: 7, file: a/3-7.yaml }
  - id: d2
    name: Show B
    seasons: []
"#,
        )
        .unwrap()
    }

    #[test]
    fn test_exact_match_at_every_level() {
        let catalog = catalog();
        let sel = Selection::derive(Some(&catalog), Some("d1"), Some("3"), Some("7"));
        assert_eq!(sel.drama.unwrap().id, "d1");
        assert_eq!(sel.season.unwrap().season, 3);
        assert_eq!(sel.episode.unwrap().episode, 7);
        assert_eq!(sel.reference(), Some("a/3-7.yaml"));
    }

    #[test]
    fn test_unknown_values_fall_back_to_first() {
        let catalog = catalog();
        let sel = Selection::derive(Some(&catalog), Some("nope"), Some("9"), Some("x"));
        assert_eq!(sel.drama.unwrap().id, "d1");
        assert_eq!(sel.season.unwrap().season, 1);
        assert_eq!(sel.episode.unwrap().episode, 1);
    }

    #[test]
    fn test_absent_values_fall_back_to_first() {
        let catalog = catalog();
        let sel = Selection::derive(Some(&catalog), None, None, None);
        assert_eq!(sel.reference(), Some("a/1-1.yaml"));
    }

    #[test]
    fn test_numeric_keys_tolerate_whitespace() {
        let catalog = catalog();
        let sel = Selection::derive(Some(&catalog), Some("d1"), Some(" 1 "), Some("2"));
        assert_eq!(sel.episode.unwrap().episode, 2);
    }

    #[test]
    fn test_missing_parent_gives_none() {
        let catalog = catalog();
        assert_eq!(Selection::derive(None, Some("d1"), None, None), Selection::default());

        let sel = Selection::derive(Some(&catalog), Some("d2"), Some("1"), Some("1"));
        assert_eq!(sel.drama.unwrap().id, "d2");
        assert!(sel.season.is_none());
        assert!(sel.episode.is_none());
        assert!(sel.reference().is_none());
    }

    #[test]
    fn test_option_lists() {
        let catalog = catalog();
        assert_eq!(
            drama_options(Some(&catalog)),
            vec![
                SelectOption::new("d1", "Show A"),
                SelectOption::new("d2", "Show B")
            ]
        );

        let drama = select_drama(Some(&catalog), Some("d1"));
        assert_eq!(
            season_options(drama),
            vec![
                SelectOption::new("1", "Season 1"),
                SelectOption::new("3", "Season 3")
            ]
        );

        let season = select_season(drama, Some("1"));
        assert_eq!(
            episode_options(season),
            vec![
                SelectOption::new("1", "Episode 1"),
                SelectOption::new("2", "Episode 2")
            ]
        );

        assert!(drama_options(None).is_empty());
        assert!(season_options(select_drama(Some(&catalog), Some("d2"))).is_empty());
    }
}
