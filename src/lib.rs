//! dramalines - terminal viewer for episodic dialogue transcripts
//!
//! A catalog lists dramas, their seasons and episodes. Picking an episode
//! loads its line items, each shown as a card with the original text and a
//! translation hidden until revealed.
//!
//! # Modules
//!
//! - `models` - Catalog and episode payload structures
//! - `api` - Loader for catalog and episode data (HTTP or local directory)
//! - `selection` - First-entry fallback selection and selector options
//! - `view` - Episode header and line cards
//! - `controller` - Drama/season/episode cascade with request sequencing
//! - `ui` - TUI components
//! - `app` - Terminal-side state: focus, card cursor, loading indicator

pub mod api;
pub mod app;
pub mod cli;
pub mod commands;
pub mod config;
pub mod controller;
pub mod logging;
pub mod models;
pub mod selection;
pub mod ui;
pub mod view;

// Re-export commonly used types
pub use models::{Catalog, Drama, Episode, EpisodeData, LineItem, Season};

pub use api::{DataClient, LoadError};
pub use app::App;
pub use controller::{Cascade, LoadRequest, SelectionEvent};
pub use selection::{SelectOption, Selection, SelectionWidget};
pub use view::{EpisodeView, Header, LineCard};
