//! Tic-tac-toe terminal UI.

#![warn(missing_docs)]

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use cli::Cli;
use crossterm::event::{self, Event, KeyEventKind};
use ratatui::DefaultTerminal;
use std::path::Path;
use std::sync::Mutex;
use tictactoe_tui::{Action, App, Palette, TuiConfig, render};
use tracing::{error, info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let loaded = TuiConfig::load(&cli.config)
        .with_context(|| format!("Failed to load {}", cli.config.display()))?;
    let from_file = loaded.is_some();
    let mut config = loaded.unwrap_or_default();
    if let Some(log_file) = cli.log_file {
        config = config.with_log_file(log_file);
    }

    init_tracing(config.log_file(), config.log_level())?;
    if from_file {
        info!(path = %cli.config.display(), "Config loaded");
    } else {
        info!(path = %cli.config.display(), "Config file not found, using defaults");
    }
    info!(config = ?config, "Starting tic-tac-toe TUI");

    let palette = config.theme().palette()?;

    let mut terminal = ratatui::init();
    let result = run_app(&mut terminal, App::new(), &palette);
    ratatui::restore();

    if let Err(e) = &result {
        error!(error = %e, "TUI exited with error");
    }
    info!("Shutting down");
    result
}

/// Sends logs to `path`; `RUST_LOG` takes precedence over `level`.
fn init_tracing(path: &Path, level: &str) -> Result<()> {
    let file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("Failed to open log file {}", path.display()))?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level)),
        )
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();
    Ok(())
}

/// Draw, wait for a key, repeat until the app asks to quit.
#[instrument(skip_all)]
fn run_app(terminal: &mut DefaultTerminal, mut app: App, palette: &Palette) -> Result<()> {
    loop {
        terminal.draw(|f| render(f, &app, palette))?;

        if let Event::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press
            && app.handle_key(key) == Action::Quit
        {
            return Ok(());
        }
    }
}
