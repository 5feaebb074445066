//! TUI Views module
//!
//! The two screens, the status bar, and the top-level render that stacks
//! dialogs and toasts over them.

pub mod dashboard;
pub mod status_bar;
pub mod tutorial;

use ratatui::Frame;

use super::app::{ActiveDialog, ActiveScreen, App};
use super::dialogs;
use super::layout::AppLayout;
use super::widgets::{notification_area, NotificationWidget};

/// Render the entire application
pub fn render(frame: &mut Frame, app: &App) {
    let layout = AppLayout::new(frame.area());

    match app.active_screen {
        ActiveScreen::Dashboard => dashboard::render(frame, app, layout.main),
        ActiveScreen::Tutorial => tutorial::render(frame, app, layout.main),
    }

    status_bar::render(frame, app, layout.status_bar);

    if let Some(notification) = app.notifications.current() {
        frame.render_widget(
            NotificationWidget::new(notification),
            notification_area(layout.main),
        );
    }

    match app.active_dialog {
        ActiveDialog::Help => dialogs::help::render(frame, app),
        ActiveDialog::None => {}
    }
}


#[cfg(test)]
mod tests {
    use super::test_support::{draw, screen_text};
    use crate::config::Settings;
    use crate::models::DashboardData;
    use crate::tui::app::{ActiveDialog, App};
    use std::time::Instant;

    #[test]
    fn test_help_overlay_drawn_over_screen() {
        let settings = Settings::default();
        let data = DashboardData::sample();
        let mut app = App::new(&settings, &data, (100, 40));
        app.open_dialog(ActiveDialog::Help);
        let text = screen_text(&draw(&app));
        assert!(text.contains("Help"));
        assert!(text.contains("Open the guided tutorial"));
    }

    #[test]
    fn test_toast_drawn_top_right() {
        let settings = Settings::default();
        let data = DashboardData::sample();
        let mut app = App::new(&settings, &data, (100, 40));
        let now = Instant::now();
        app.open_tutorial(now);
        app.save_job(now);
        let text = screen_text(&draw(&app));
        assert!(text.contains("Job saved"));
    }
}
