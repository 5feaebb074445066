//! Terminal setup and teardown
//!
//! This module handles initializing and restoring the terminal state,
//! including setting up the panic hook to restore the terminal on crash.

use anyhow::Result;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, Stdout};
use std::panic;
use std::time::Instant;
use tracing::info;

use crate::config::Settings;
use crate::error::JobdeskError;
use crate::models::DashboardData;

use super::app::App;
use super::event::EventHandler;
use super::handler::handle_event;

/// Type alias for our terminal
pub type Tui = Terminal<CrosstermBackend<Stdout>>;

/// Initialize the terminal for TUI mode
pub fn init_terminal() -> Result<Tui> {
    let original_hook = panic::take_hook();
    panic::set_hook(Box::new(move |panic_info| {
        let _ = restore_terminal_impl();
        original_hook(panic_info);
    }));

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    // Mouse capture lets the wheel scroll the tutorial page
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;

    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend)?;

    Ok(terminal)
}

/// Restore the terminal to its original state
pub fn restore_terminal() -> Result<()> {
    restore_terminal_impl()?;
    Ok(())
}

fn restore_terminal_impl() -> Result<()> {
    disable_raw_mode()?;
    execute!(io::stdout(), DisableMouseCapture, LeaveAlternateScreen)?;
    Ok(())
}

/// Run the TUI application, optionally opening straight into the tutorial
pub fn run_tui(settings: &Settings, data: &DashboardData, start_in_tutorial: bool) -> Result<()> {
    let mut terminal = init_terminal()?;
    let result = run_loop(&mut terminal, settings, data, start_in_tutorial);
    restore_terminal()?;
    result
}

fn run_loop(
    terminal: &mut Tui,
    settings: &Settings,
    data: &DashboardData,
    start_in_tutorial: bool,
) -> Result<()> {
    let size = terminal.size()?;
    let mut app = App::new(settings, data, (size.width, size.height));
    if start_in_tutorial {
        app.open_tutorial(Instant::now());
    }
    info!(width = size.width, height = size.height, "tui started");

    let events = EventHandler::default();

    loop {
        terminal.draw(|frame| {
            super::views::render(frame, &app);
        })?;

        let event = events
            .next()
            .map_err(|_| JobdeskError::Tui("terminal event thread stopped".into()))?;
        handle_event(&mut app, event, Instant::now())?;

        if app.should_quit {
            break;
        }
    }

    app.close_tutorial();
    info!("tui exited");
    Ok(())
}
