//! Login TUI - terminal sign-in prompt
//!
//! A Ratatui-based form that collects an email and password, validates them,
//! and prints the accepted credentials to stdout as JSON.

mod app;
mod config;
mod platform;
mod sink;
mod state;
mod ui;

use anyhow::Result;
use app::App;
use config::TuiConfig;
use crossterm::{
    event::{self, DisableBracketedPaste, EnableBracketedPaste, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use sink::CollectingSink;
use std::io::{self, Write};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "login_tui=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let config = TuiConfig::load().unwrap_or_else(|err| {
        tracing::warn!("Ignoring unreadable config: {err:?}");
        TuiConfig::default()
    });

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableBracketedPaste)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(config, CollectingSink::new());
    let result = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableBracketedPaste
    )?;
    terminal.show_cursor()?;

    // Handle any errors
    if let Err(err) = result {
        eprintln!("Error: {err:?}");
        std::process::exit(1);
    }

    // Nothing accepted before the user backed out
    if app.was_cancelled() && app.form.sink().is_empty() {
        std::process::exit(1);
    }

    emit_credentials(app.form.sink_mut())
}

fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App<CollectingSink>,
) -> Result<()> {
    loop {
        terminal.draw(|frame| ui::draw(frame, app))?;

        if event::poll(std::time::Duration::from_millis(100))? {
            match event::read()? {
                Event::Key(key) => app.handle_key(key)?,
                Event::Paste(text) => app.handle_paste(&text),
                Event::Resize(_width, _height) => {
                    // Layout is recomputed on next draw
                }
                _ => {}
            }
        }

        if app.should_quit() {
            return Ok(());
        }
    }
}

/// Write each accepted submission to stdout as one JSON object per line
fn emit_credentials(sink: &mut CollectingSink) -> Result<()> {
    let mut out = io::stdout().lock();
    for credentials in sink.drain() {
        serde_json::to_writer(&mut out, &credentials)?;
        writeln!(out)?;
    }
    out.flush()?;
    Ok(())
}
