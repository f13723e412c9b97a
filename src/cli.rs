//! CLI - Command Line Interface for dramalines
//!
//! Every lookup the TUI does is scriptable. Output is JSON when `--json` is
//! given or stdout is not a terminal.
//!
//! # Examples
//!
//! ```bash
//! # Browse the catalog
//! dramalines --base https://example.com/drama catalog
//!
//! # Print an episode with translations revealed
//! dramalines lines --drama d1 --season 1 --episode 3 --reveal
//! ```

use clap::{Args, Parser, Subcommand};
use serde::{Deserialize, Serialize};
use std::io::IsTerminal;
use std::path::PathBuf;

// =============================================================================
// Exit Codes
// =============================================================================

/// Exit codes for CLI operations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Success
    Success = 0,
    /// General error
    Error = 1,
    /// Invalid arguments or configuration
    InvalidArgs = 2,
    /// Catalog or episode could not be loaded
    LoadFailed = 3,
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> i32 {
        code as i32
    }
}

impl From<ExitCode> for std::process::ExitCode {
    fn from(code: ExitCode) -> std::process::ExitCode {
        std::process::ExitCode::from(code as u8)
    }
}

// =============================================================================
// Main CLI Structure
// =============================================================================

/// dramalines - episodic transcript viewer
///
/// Run without arguments to launch the interactive TUI.
#[derive(Parser, Debug)]
#[command(
    name = "dramalines",
    version,
    about = "Terminal viewer for episodic dialogue transcripts",
    long_about = "Pick a drama, season and episode, then reveal each line's \
                  translation on demand.\n\n\
                  Run without arguments to launch the interactive TUI.\n\
                  Use subcommands for scripting.",
    after_help = "EXAMPLES:\n\
                  dramalines                                  Launch interactive TUI\n\
                  dramalines --base ./site catalog            List dramas in a local site\n\
                  dramalines lines -D d1 -s 1 -e 2 --reveal   Print an episode"
)]
pub struct Cli {
    /// Output format as JSON (default for non-TTY)
    #[arg(long, short = 'j', global = true)]
    pub json: bool,

    /// Suppress non-essential output
    #[arg(long, short = 'q', global = true)]
    pub quiet: bool,

    /// Data location: HTTP(S) base URL or local directory
    #[arg(long, short = 'b', global = true)]
    pub base: Option<String>,

    /// Catalog reference relative to the base
    #[arg(long, global = true)]
    pub catalog: Option<String>,

    /// Path to config file
    #[arg(long, short = 'c', global = true)]
    pub config: Option<PathBuf>,

    /// Subcommand to run (omit for TUI mode)
    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Cli {
    /// Check if running in CLI mode (has subcommand)
    pub fn is_cli_mode(&self) -> bool {
        self.command.is_some()
    }

    /// Check if JSON output should be used
    pub fn should_json(&self) -> bool {
        self.json || !std::io::stdout().is_terminal()
    }
}

// =============================================================================
// Subcommands
// =============================================================================

#[derive(Subcommand, Debug)]
pub enum Command {
    /// List dramas, seasons and episodes
    #[command(visible_alias = "ls")]
    Catalog(CatalogCmd),

    /// Print the lines of an episode
    #[command(visible_alias = "l")]
    Lines(LinesCmd),
}

/// List the catalog
#[derive(Args, Debug)]
pub struct CatalogCmd {
    /// Only show this drama
    #[arg(long, short = 'D')]
    pub drama: Option<String>,
}

/// Print an episode's lines
///
/// Unknown or omitted values fall back to the first entry at that level.
#[derive(Args, Debug)]
pub struct LinesCmd {
    /// Drama id
    #[arg(long, short = 'D')]
    pub drama: Option<String>,

    /// Season number
    #[arg(long, short = 's')]
    pub season: Option<String>,

    /// Episode number
    #[arg(long, short = 'e')]
    pub episode: Option<String>,

    /// Show translations
    #[arg(long, short = 'r')]
    pub reveal: bool,
}

// =============================================================================
// JSON Output Types
// =============================================================================

/// Generic JSON output wrapper with status
#[derive(Debug, Serialize, Deserialize)]
pub struct JsonOutput<T: Serialize> {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(skip_serializing_if = "is_zero")]
    pub exit_code: i32,
}

fn is_zero(n: &i32) -> bool {
    *n == 0
}

impl<T: Serialize> JsonOutput<T> {
    /// Create success output with data
    pub fn success(data: T) -> Self {
        Self {
            data: Some(data),
            error: None,
            exit_code: 0,
        }
    }
}

impl JsonOutput<()> {
    /// Create error output (no data)
    pub fn error_msg(msg: impl Into<String>, code: ExitCode) -> Self {
        Self {
            data: None,
            error: Some(msg.into()),
            exit_code: code.into(),
        }
    }
}

/// Resolved episode as printed by `lines`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EpisodeLines {
    pub drama: String,
    pub season: u32,
    pub episode: u32,
    pub header: String,
    pub lines: Vec<LineOutput>,
}

/// One card as printed by `lines`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineOutput {
    pub original: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub translation: Option<String>,
}

// =============================================================================
// Output Helper
// =============================================================================

/// Output helper for consistent formatting
pub struct Output {
    pub json: bool,
    pub quiet: bool,
}

impl Output {
    pub fn new(cli: &Cli) -> Self {
        Self {
            json: cli.should_json(),
            quiet: cli.quiet,
        }
    }

    /// Print success data; `text` renders the human-readable form
    pub fn print<T: Serialize>(&self, data: &T, text: impl FnOnce(&T) -> String) -> anyhow::Result<()> {
        if self.json {
            let output = JsonOutput::success(data);
            println!("{}", serde_json::to_string_pretty(&output)?);
        } else {
            print!("{}", text(data));
        }
        Ok(())
    }

    /// Print error and return exit code
    pub fn error(&self, msg: impl Into<String>, code: ExitCode) -> ExitCode {
        let msg = msg.into();
        if self.json {
            let output = JsonOutput::error_msg(&msg, code);
            if let Ok(json) = serde_json::to_string_pretty(&output) {
                eprintln!("{}", json);
            }
        } else if !self.quiet {
            eprintln!("Error: {}", msg);
        }
        code
    }

    /// Print info message (suppressed in quiet mode)
    pub fn info(&self, msg: impl std::fmt::Display) {
        if !self.quiet && !self.json {
            eprintln!("{}", msg);
        }
    }
}

// =============================================================================
// Tests
// =============================================================================
