//! Terminal UI for spielplatz that lets users browse and filter playgrounds in Mainz.
//!
//! Logging is only enabled when stderr is redirected, e.g.
//! `RUST_LOG=debug spielplatz-tui 2>spielplatz.log`, so log lines never draw
//! over the terminal UI.

mod app;
mod input;
mod ui;

use std::{
    io::{self, IsTerminal},
    sync::Arc,
    time::Duration as StdDuration,
};

use anyhow::Result;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event as CEvent},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use reqwest::Client;
use spielplatz_core::service::PlaygroundService;
use spielplatz_provider_overpass as overpass;

use crate::app::App;
use crate::input::Action;

#[tokio::main]
async fn main() -> Result<()> {
    if logs_to_stderr(io::stderr().is_terminal()) {
        pretty_env_logger::init();
    }

    // HTTP + service setup
    let client = Client::builder().user_agent("spielplatz/0.1").build()?;
    let service = Arc::new(PlaygroundService::new(overpass::source(client)));

    // App state
    let app = App::new(service);

    // Terminal init
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run event loop
    let res = run(&mut terminal, app).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    res
}

async fn run(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, mut app: App) -> Result<()> {
    load(terminal, &mut app).await?;

    loop {
        // Draw current UI
        terminal.draw(|frame| ui::draw(frame, &app))?;

        // Poll for input (non-blocking, small timeout to keep CPU low)
        if event::poll(StdDuration::from_millis(100))?
            && let CEvent::Key(key) = event::read()?
        {
            match input::handle_key_event(key, &mut app) {
                Action::Quit => break,
                Action::None => {}
                Action::Reload => load(terminal, &mut app).await?,
            }
        }
    }

    Ok(())
}

// stderr shares the screen with the UI unless it is redirected.
const fn logs_to_stderr(stderr_is_terminal: bool) -> bool {
    !stderr_is_terminal
}

// Run the ingestion pipeline and publish the snapshot only if it succeeds.
async fn load(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
) -> Result<()> {
    app.is_loading = true;
    app.error_message = None;
    terminal.draw(|frame| ui::draw(frame, app))?;

    log::info!("loading playgrounds");
    let res = app.service.ingest().await;

    app.is_loading = false;
    match res {
        Ok(snapshot) => {
            log::info!("loaded {} playgrounds", snapshot.len());
            app.set_snapshot(snapshot);
        }
        Err(err) => {
            log::error!("loading playgrounds failed: {err}");
            app.error_message = Some(format!("Playgrounds could not be loaded: {err}"));
        }
    }

    Ok(())
}
