//! PIN Code TUI - Terminal PIN entry form
//!
//! Collects a PIN one character per box, auto-advancing between boxes, and
//! shows the joined code once every box is filled.

use std::io;
use std::panic;
use std::time::Duration;

use anyhow::Result;
use clap::Parser;
use crossterm::{
    event::{DisableBracketedPaste, EnableBracketedPaste},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use pincode_tui::app::{App, ConfigStore, EventHandler, TuiConfig};
use pincode_tui::cli::Cli;
use ratatui::prelude::*;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Tick rate for the header clock
const TICK_RATE: Duration = Duration::from_millis(250);

/// Application entry point with panic handling for terminal restoration
#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set up panic hook to restore terminal on crash
    let original_hook = panic::take_hook();
    panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen, DisableBracketedPaste);
        original_hook(panic_info);
    }));

    // Logs go to stderr so they stay off the alternate screen
    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(io::stderr))
        .with(
            EnvFilter::from_default_env()
                .add_directive("pincode_tui=info".parse()?)
                .add_directive("pincode_core=info".parse()?),
        )
        .init();

    let (config, store) = cli.resolve_config();
    tracing::info!(
        count = config.default_count,
        rule = %config.default_rule,
        "starting PIN form"
    );

    let result = run_app(&config, store).await;

    if let Err(e) = &result {
        tracing::error!("Application error: {}", e);
    }

    result
}

/// Main application runner
async fn run_app(config: &TuiConfig, store: Option<ConfigStore>) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableBracketedPaste)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create app and run event loop
    let mut events = EventHandler::new(TICK_RATE);
    let mut app = App::new(config, events.sender()).with_store(store);
    let result = app.run(&mut terminal, &mut events).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableBracketedPaste
    )?;
    terminal.show_cursor()?;

    result
}
