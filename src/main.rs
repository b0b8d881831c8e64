//! SmartDoc Builder - generate medical forms from the terminal
//!
//! A Ratatui-based TUI that builds a prompt from the chosen form type and
//! tone, then shows either a built-in sample (demo mode) or a form generated
//! by a chat-completion API.

mod app;
mod catalog;
mod config;
mod controller;
mod export;
mod generation;
mod platform;
mod prompt;
mod state;
mod ui;

use anyhow::Result;
use app::App;
use config::AppConfig;
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::fs::{self, OpenOptions};
use std::io;
use std::sync::Mutex;
use std::time::Duration;
use tracing_subscriber::{fmt::writer::BoxMakeWriter, layer::SubscriberExt, util::SubscriberInitExt};

const LOG_FILE: &str = "smartdoc.log";

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging (to a file: stderr belongs to the terminal UI)
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "smartdoc=info".into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .with_ansi(false)
                .with_writer(log_writer()),
        )
        .init();

    let (config, config_error) = match AppConfig::load() {
        Ok(config) => (config, None),
        Err(err) => {
            tracing::warn!("Failed to load config, using defaults: {err:#}");
            (AppConfig::default(), Some(format!("Failed to load config: {err}")))
        }
    };

    let client = generation::client_from_config(&config);
    tracing::info!("Starting with {}", client.describe());

    let mut app = App::new(&config, client);
    if let Some(message) = config_error {
        app.push_error(message);
    }

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_app(&mut terminal, &mut app).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    // Handle any errors
    if let Err(err) = result {
        tracing::error!("Exiting on error: {err:#}");
        eprintln!("Error: {err:?}");
        std::process::exit(1);
    }

    Ok(())
}

/// Writer for the log file, or a sink when no data dir is available
fn log_writer() -> BoxMakeWriter {
    let file = AppConfig::log_dir().and_then(|dir| {
        fs::create_dir_all(&dir).ok()?;
        OpenOptions::new()
            .create(true)
            .append(true)
            .open(dir.join(LOG_FILE))
            .ok()
    });

    match file {
        Some(file) => BoxMakeWriter::new(Mutex::new(file)),
        None => BoxMakeWriter::new(io::sink),
    }
}

async fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
) -> Result<()> {
    let poll_duration = Duration::from_millis(100);

    loop {
        // Draw the UI
        terminal.draw(|frame| ui::draw(frame, app))?;

        // A trigger was accepted on the last key press: the "generating"
        // frame is now on screen, so serve it before reading more input
        if app.has_pending_trigger() {
            app.run_pending_trigger().await;
            continue;
        }

        // Handle crossterm events
        if event::poll(poll_duration)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    app.handle_key(key)?;
                }
                Event::Resize(_width, _height) => {
                    // Layout is recalculated on next draw
                }
                _ => {}
            }
        }

        // Check if app wants to quit
        if app.should_quit() {
            return Ok(());
        }
    }
}
