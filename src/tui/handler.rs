//! Event handler for the TUI
//!
//! Routes keyboard and mouse events to the appropriate handlers
//! based on the current application state.

use std::time::Instant;

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseEvent, MouseEventKind};

use super::app::{ActiveDialog, ActiveScreen, App};
use super::event::Event;
use crate::models::Entity;
use crate::navigation::NavRequest;

/// Rows moved per wheel notch
const WHEEL_ROWS: i32 = 2;
/// Rows moved per PageUp/PageDown
const PAGE_ROWS: i32 = 10;

/// Handle an incoming event
pub fn handle_event(app: &mut App, event: Event, now: Instant) -> Result<()> {
    match event {
        Event::Key(key) => handle_key_event(app, key, now),
        Event::Mouse(mouse) => {
            handle_mouse_event(app, mouse);
            Ok(())
        }
        Event::Resize(width, height) => {
            app.resize(width, height);
            Ok(())
        }
        Event::Tick => {
            app.tick(now);
            Ok(())
        }
    }
}

/// Handle a key event
fn handle_key_event(app: &mut App, key: KeyEvent, now: Instant) -> Result<()> {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        app.quit();
        return Ok(());
    }

    if app.has_dialog() {
        return handle_dialog_key(app, key);
    }

    match key.code {
        KeyCode::Char('q') | KeyCode::Char('Q') => {
            app.quit();
            return Ok(());
        }
        KeyCode::Char('?') => {
            app.open_dialog(ActiveDialog::Help);
            return Ok(());
        }
        _ => {}
    }

    match app.active_screen {
        ActiveScreen::Dashboard => handle_dashboard_key(app, key, now),
        ActiveScreen::Tutorial => handle_tutorial_key(app, key, now),
    }
    Ok(())
}

/// Handle keys when a dialog is active
fn handle_dialog_key(app: &mut App, key: KeyEvent) -> Result<()> {
    match app.active_dialog {
        ActiveDialog::Help => {
            if matches!(
                key.code,
                KeyCode::Esc | KeyCode::Enter | KeyCode::Char('?') | KeyCode::Char('q')
            ) {
                app.close_dialog();
            }
        }
        ActiveDialog::None => {}
    }
    Ok(())
}

fn handle_dashboard_key(app: &mut App, key: KeyEvent, now: Instant) {
    match key.code {
        KeyCode::Char('t') | KeyCode::Enter => app.open_tutorial(now),
        KeyCode::Char('1') => app.navigate(NavRequest::NavigateTo(Entity::Quotes), now),
        KeyCode::Char('2') => app.navigate(NavRequest::NavigateTo(Entity::Jobs), now),
        KeyCode::Char('3') => app.navigate(NavRequest::NavigateTo(Entity::Invoices), now),
        KeyCode::Esc => app.clear_status(),
        _ => {}
    }
}

fn handle_tutorial_key(app: &mut App, key: KeyEvent, now: Instant) {
    let Some(screen) = app.tutorial.as_ref() else {
        return;
    };
    let consent_open = screen.session.is_info_dialog_open();
    let step_open = screen.session.is_step_dialog_open();

    if consent_open {
        match key.code {
            KeyCode::Enter | KeyCode::Char('y') => {
                app.start_tour(now);
                return;
            }
            KeyCode::Esc | KeyCode::Char('n') => {
                app.decline_tour();
                return;
            }
            _ => {}
        }
    } else if step_open {
        match key.code {
            KeyCode::Right | KeyCode::Enter | KeyCode::Char('n') | KeyCode::Char('l') => {
                app.next_step(now);
                return;
            }
            KeyCode::Left | KeyCode::Char('b') | KeyCode::Char('h') => {
                app.prev_step(now);
                return;
            }
            KeyCode::Esc | KeyCode::Char('x') => {
                app.skip_tour(now);
                return;
            }
            _ => {}
        }
    }

    match key.code {
        KeyCode::Char('s') => app.save_job(now),
        KeyCode::Char('c') => app.cancel_job(now),
        KeyCode::Char('r') => app.restart_tour(now),
        // Leaving the form with nothing open is the same as Cancel
        KeyCode::Esc => app.cancel_job(now),
        KeyCode::Char('j') | KeyCode::Down => app.scroll_page(1),
        KeyCode::Char('k') | KeyCode::Up => app.scroll_page(-1),
        KeyCode::PageDown => app.scroll_page(PAGE_ROWS),
        KeyCode::PageUp => app.scroll_page(-PAGE_ROWS),
        KeyCode::Home => app.scroll_page(i32::MIN / 2),
        KeyCode::End => app.scroll_page(i32::MAX / 2),
        _ => {}
    }
}

fn handle_mouse_event(app: &mut App, mouse: MouseEvent) {
    if app.active_screen != ActiveScreen::Tutorial || app.has_dialog() {
        return;
    }
    match mouse.kind {
        MouseEventKind::ScrollDown => app.scroll_page(WHEEL_ROWS),
        MouseEventKind::ScrollUp => app.scroll_page(-WHEEL_ROWS),
        _ => {}
    }
}
