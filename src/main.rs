//! dramalines - terminal viewer for episodic dialogue transcripts
//!
//! Pick a drama, season and episode; each line of the episode shows its
//! original text, with the translation revealed on demand.
//!
//! # Usage
//!
//! ```bash
//! # Launch interactive TUI against a local site directory
//! dramalines --base ./site
//!
//! # CLI mode (for scripting)
//! dramalines --base https://example.com/drama catalog
//! dramalines lines --drama d1 --season 1 --episode 2 --reveal --json
//! ```

use std::io::{stdout, Stdout};
use std::time::Duration;

use anyhow::Result;
use clap::Parser;
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tokio::sync::mpsc;
use tracing::{error, info};

use dramalines::api::{DataClient, LoadError};
use dramalines::app::App;
use dramalines::cli::{Cli, Command, ExitCode, Output};
use dramalines::commands;
use dramalines::config::Config;
use dramalines::controller::{LoadRequest, SelectionEvent};
use dramalines::logging;
use dramalines::models::{Catalog, EpisodeData};
use dramalines::ui;

/// Terminal type alias for convenience
type Tui = Terminal<CrosstermBackend<Stdout>>;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => match Config::load_from(path) {
            Ok(config) => config,
            Err(e) => {
                let code = Output::new(&cli).error(format!("{:#}", e), ExitCode::InvalidArgs);
                std::process::exit(code.into());
            }
        },
        None => Config::load(),
    };

    let _guard = logging::init(config.log_filter.as_deref());
    info!(version = env!("CARGO_PKG_VERSION"), "starting");

    let client = match config.client(cli.base.as_deref(), cli.catalog.as_deref()) {
        Ok(client) => client,
        Err(e) => {
            let code = Output::new(&cli).error(e.to_string(), ExitCode::InvalidArgs);
            std::process::exit(code.into());
        }
    };

    if cli.is_cli_mode() {
        // CLI mode: execute command and exit
        let exit_code = run_cli(cli, &client).await;
        std::process::exit(exit_code.into());
    } else {
        // TUI mode: launch interactive interface
        run_tui(client).await
    }
}

/// Run CLI command and return exit code
async fn run_cli(cli: Cli, client: &DataClient) -> ExitCode {
    let output = Output::new(&cli);

    match cli.command {
        Some(Command::Catalog(cmd)) => commands::catalog_cmd(cmd, client, &output).await,
        Some(Command::Lines(cmd)) => commands::lines_cmd(cmd, client, &output).await,
        None => ExitCode::Success,
    }
}

// =============================================================================
// TUI Mode
// =============================================================================

/// Completed background load
enum Loaded {
    Catalog(Result<Catalog, LoadError>),
    Episode(u64, Result<EpisodeData, LoadError>),
}

/// Initialize the terminal for TUI mode
fn init_terminal() -> Result<Tui> {
    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend)?;
    Ok(terminal)
}

/// Restore terminal to normal state
fn restore_terminal(terminal: &mut Tui) -> Result<()> {
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    Ok(())
}

/// Run interactive TUI
async fn run_tui(client: DataClient) -> Result<()> {
    let mut terminal = init_terminal()?;
    let mut app = App::new();

    let result = run_event_loop(&mut terminal, &mut app, client).await;

    // Always restore terminal, even on error
    restore_terminal(&mut terminal)?;

    if let Err(e) = &result {
        error!("event loop failed: {:#}", e);
    }
    result
}

fn spawn_catalog(client: &DataClient, tx: &mpsc::UnboundedSender<Loaded>) {
    let client = client.clone();
    let tx = tx.clone();
    tokio::spawn(async move {
        let result = client.load_catalog().await;
        let _ = tx.send(Loaded::Catalog(result));
    });
}

fn spawn_episode(client: &DataClient, tx: &mpsc::UnboundedSender<Loaded>, request: Option<LoadRequest>) {
    let Some(LoadRequest { id, reference }) = request else {
        return;
    };
    let client = client.clone();
    let tx = tx.clone();
    tokio::spawn(async move {
        let result = client.load_episode(&reference).await;
        let _ = tx.send(Loaded::Episode(id, result));
    });
}

/// Main event loop - handles input, applies finished loads, renders UI
async fn run_event_loop(terminal: &mut Tui, app: &mut App, client: DataClient) -> Result<()> {
    const TICK_RATE: Duration = Duration::from_millis(100);

    let (tx, mut rx) = mpsc::unbounded_channel();
    spawn_catalog(&client, &tx);

    while app.running {
        terminal.draw(|frame| ui::render(frame, app))?;

        // Poll for events with timeout so finished loads are picked up
        if event::poll(TICK_RATE)? {
            if let Event::Key(key) = event::read()? {
                // Only handle key press events (ignore releases on Windows)
                if key.kind == KeyEventKind::Press {
                    match app.handle_key(key) {
                        // Reload without a catalog retries the catalog
                        Some(SelectionEvent::EpisodeChanged) if app.cascade.catalog().is_none() => {
                            if app.retry_catalog() {
                                spawn_catalog(&client, &tx);
                            }
                        }
                        Some(change) => {
                            let request = app.change(change);
                            spawn_episode(&client, &tx, request);
                        }
                        None => {}
                    }
                }
            }
        }

        while let Ok(loaded) = rx.try_recv() {
            match loaded {
                Loaded::Catalog(result) => {
                    let request = app.install_catalog(result);
                    spawn_episode(&client, &tx, request);
                }
                Loaded::Episode(id, result) => {
                    app.apply_episode(id, result);
                }
            }
        }
    }

    Ok(())
}
