//! Tutorial screen
//!
//! Draws the job form, then the spotlight for the current step, then
//! whichever tour dialog is open.

use ratatui::{layout::Rect, Frame};

use crate::tour::{PageSurface, Position};
use crate::tui::app::App;
use crate::tui::dialogs;
use crate::tui::widgets::Spotlight;

pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let Some(screen) = app.tutorial.as_ref() else {
        return;
    };
    let session = &screen.session;

    screen.page.render(area, frame.buffer_mut());

    // The overlay lives in page coordinates; the cutout follows the current scroll
    if let (Some(overlay), Some((step, count))) = (session.highlight(), session.progress()) {
        let cutout = screen.page.viewport().to_client(overlay);
        let caption = format!(" {}/{} ", step, count);
        let position = session
            .current_step()
            .map(|s| s.position)
            .unwrap_or(Position::Bottom);
        frame.render_widget(Spotlight::new(cutout).caption(&caption, position), area);
    }

    if session.is_info_dialog_open() {
        dialogs::tour_intro::render(frame, area);
    }
    if session.is_step_dialog_open() {
        dialogs::tour_step::render(frame, session, area);
    }
}
