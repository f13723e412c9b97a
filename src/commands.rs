//! CLI Command Handlers
//!
//! Each handler takes its CLI args, the configured client and Output,
//! and returns an ExitCode.

use std::fmt::Write as _;

use crate::api::DataClient;
use crate::cli::{CatalogCmd, EpisodeLines, ExitCode, LineOutput, LinesCmd, Output};
use crate::models::Catalog;
use crate::selection::Selection;
use crate::view::{EpisodeView, EMPTY_MESSAGE};

// =============================================================================
// Catalog Command
// =============================================================================

pub async fn catalog_cmd(cmd: CatalogCmd, client: &DataClient, output: &Output) -> ExitCode {
    output.info(format!("Loading catalog from {}", client.base()));

    let mut catalog = match client.load_catalog().await {
        Ok(catalog) => catalog,
        Err(e) => {
            return output.error(format!("Catalog load failed: {}", e), ExitCode::LoadFailed)
        }
    };

    if let Some(id) = cmd.drama.as_deref() {
        catalog.dramas.retain(|d| d.id == id);
        if catalog.dramas.is_empty() {
            return output.error(format!("No drama with id '{}'", id), ExitCode::InvalidArgs);
        }
    }

    if let Err(e) = output.print(&catalog, format_catalog) {
        return output.error(format!("Failed to serialize: {}", e), ExitCode::Error);
    }
    ExitCode::Success
}

/// Indented tree of dramas, seasons and episodes
pub fn format_catalog(catalog: &Catalog) -> String {
    let mut out = String::new();
    if catalog.is_empty() {
        out.push_str("No dramas in catalog.\n");
        return out;
    }

    for drama in &catalog.dramas {
        let _ = writeln!(out, "{} [{}]", drama.display_name(), drama.id);
        for season in &drama.seasons {
            let _ = writeln!(out, "  {}", season);
            for episode in &season.episodes {
                match episode.reference() {
                    Some(file) => {
                        let _ = writeln!(out, "    {}  {}", episode, file);
                    }
                    None => {
                        let _ = writeln!(out, "    {}  (no data)", episode);
                    }
                }
            }
        }
    }
    out
}

// =============================================================================
// Lines Command
// =============================================================================

pub async fn lines_cmd(cmd: LinesCmd, client: &DataClient, output: &Output) -> ExitCode {
    let catalog = match client.load_catalog().await {
        Ok(catalog) => catalog,
        Err(e) => {
            return output.error(format!("Catalog load failed: {}", e), ExitCode::LoadFailed)
        }
    };

    let selection = Selection::derive(
        Some(&catalog),
        cmd.drama.as_deref(),
        cmd.season.as_deref(),
        cmd.episode.as_deref(),
    );
    let (Some(drama), Some(season), Some(episode)) =
        (selection.drama, selection.season, selection.episode)
    else {
        return output.error("Catalog has no episode to show", ExitCode::LoadFailed);
    };

    output.info(format!("{} / {} / {}", drama.display_name(), season, episode));

    let view = match selection.reference() {
        Some(reference) => match client.load_episode(reference).await {
            Ok(data) => EpisodeView::render(Some(&data)),
            Err(e) => {
                return output.error(format!("Episode load failed: {}", e), ExitCode::LoadFailed)
            }
        },
        None => EpisodeView::empty(),
    };

    let lines = EpisodeLines {
        drama: drama.id.clone(),
        season: season.season,
        episode: episode.episode,
        header: view.header().to_string(),
        lines: view
            .cards()
            .iter()
            .map(|card| LineOutput {
                original: card.original().to_string(),
                translation: cmd.reveal.then(|| card.translation().to_string()),
            })
            .collect(),
    };

    if let Err(e) = output.print(&lines, format_lines) {
        return output.error(format!("Failed to serialize: {}", e), ExitCode::Error);
    }
    ExitCode::Success
}

/// Header line followed by numbered cards
pub fn format_lines(lines: &EpisodeLines) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", lines.header);
    if lines.lines.is_empty() {
        let _ = writeln!(out, "\n{}", EMPTY_MESSAGE);
        return out;
    }

    let width = lines.lines.len().to_string().len();
    for (i, line) in lines.lines.iter().enumerate() {
        let _ = writeln!(out, "\n{:>width$}. {}", i + 1, line.original, width = width);
        if let Some(translation) = &line.translation {
            let _ = writeln!(out, "{:>width$}  {}", "", translation, width = width);
        }
    }
    out
}
