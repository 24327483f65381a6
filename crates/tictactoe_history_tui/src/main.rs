//! Tic-tac-toe with time travel, in the terminal.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod app;
mod cli;
mod config;
mod input;
mod terminal;
mod ui;

use anyhow::{Context, Result};
use app::{App, Flow};
use clap::Parser;
use cli::Cli;
use config::TuiConfig;
use crossterm::event::{self, Event};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{self, Stdout};
use terminal::TerminalGuard;
use tracing::{debug, error, info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let mut config = TuiConfig::load_or_default(&cli.config)?;
    if let Some(log_file) = cli.log_file {
        config = config.with_log_file(log_file);
    }
    let colors = config.mark_colors()?;

    init_logging(&config)?;
    info!(config = %cli.config.display(), "Starting tic-tac-toe TUI");

    let guard = TerminalGuard::enter(io::stdout())?;
    let mut terminal = Terminal::new(CrosstermBackend::new(io::stdout()))?;

    let mut app = App::new(colors);
    let res = run_app(&mut terminal, &mut app);
    drop(guard);

    if let Err(err) = res {
        error!(error = ?err, "Game loop error");
        eprintln!("Error: {:?}", err);
    }

    info!(
        moves = app.view().history_len - 1,
        status = %app.view().status,
        "Session ended"
    );
    Ok(())
}

/// Sends logs to a file so they never draw over the UI.
fn init_logging(config: &TuiConfig) -> Result<()> {
    let log_file = std::fs::File::create(config.log_file())
        .with_context(|| format!("Failed to create log file {}", config.log_file().display()))?;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config.log_filter())),
        )
        .with_writer(std::sync::Arc::new(log_file))
        .with_ansi(false)
        .try_init(); // Don't panic if already initialized
    Ok(())
}

/// Draws, waits for a key, applies it; until the user quits.
#[instrument(skip_all)]
fn run_app(terminal: &mut Terminal<CrosstermBackend<Stdout>>, app: &mut App) -> Result<()> {
    loop {
        terminal.draw(|f| ui::draw(f, app))?;

        match event::read()? {
            Event::Key(key) => {
                let Some(intent) = input::intent_for(key) else {
                    continue;
                };
                if app.apply(intent) == Flow::Quit {
                    return Ok(());
                }
            }
            Event::Resize(width, height) => debug!(width, height, "Terminal resized"),
            _ => {}
        }
    }
}
