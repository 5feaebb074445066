//! Application state for the TUI
//!
//! The App struct holds all state needed for rendering and handling events.
//! Screens never switch themselves: they hand back a [`NavRequest`] and
//! [`App::navigate`] decides what happens next.

use std::time::Instant;

use ratatui::layout::Rect;
use tracing::info;

use crate::config::Settings;
use crate::models::{DashboardData, SampleJobForm};
use crate::navigation::NavRequest;
use crate::tour::{TourConfig, TourState, TutorialSession, TOUR_STEPS};

use super::layout::AppLayout;
use super::page::JobFormPage;
use super::widgets::{Notification, NotificationQueue};

/// Which screen is currently shown
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ActiveScreen {
    #[default]
    Dashboard,
    Tutorial,
}

/// Currently active dialog (if any)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ActiveDialog {
    #[default]
    None,
    Help,
}

/// The tutorial screen: the hosted job form and the tour running over it
pub struct TutorialScreen {
    pub session: TutorialSession,
    pub page: JobFormPage,
}

impl TutorialScreen {
    pub fn new(config: TourConfig, width: u16, height: u16) -> Self {
        Self {
            session: TutorialSession::new(&TOUR_STEPS, config),
            page: JobFormPage::new(SampleJobForm::sample(), width, height),
        }
    }
}

/// Main application state
pub struct App<'a> {
    /// Application settings
    pub settings: &'a Settings,

    /// What the dashboard shows
    pub data: &'a DashboardData,

    /// Whether the app should quit
    pub should_quit: bool,

    pub active_screen: ActiveScreen,

    pub active_dialog: ActiveDialog,

    /// Status message to display
    pub status_message: Option<String>,

    pub notifications: NotificationQueue,

    /// Present only while the tutorial screen is mounted
    pub tutorial: Option<TutorialScreen>,

    /// Full terminal size
    pub terminal_size: (u16, u16),
}

impl<'a> App<'a> {
    pub fn new(settings: &'a Settings, data: &'a DashboardData, terminal_size: (u16, u16)) -> Self {
        Self {
            settings,
            data,
            should_quit: false,
            active_screen: ActiveScreen::Dashboard,
            active_dialog: ActiveDialog::None,
            status_message: None,
            notifications: NotificationQueue::new(),
            tutorial: None,
            terminal_size,
        }
    }

    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    pub fn open_dialog(&mut self, dialog: ActiveDialog) {
        self.active_dialog = dialog;
    }

    pub fn close_dialog(&mut self) {
        self.active_dialog = ActiveDialog::None;
    }

    pub fn has_dialog(&self) -> bool {
        self.active_dialog != ActiveDialog::None
    }

    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
    }

    pub fn clear_status(&mut self) {
        self.status_message = None;
    }

    /// Size of the area screens draw into, below which sits the status bar
    pub fn main_area(&self) -> Rect {
        let (width, height) = self.terminal_size;
        AppLayout::new(Rect::new(0, 0, width, height)).main
    }

    // ----- screens -----

    /// Mount the tutorial screen. The consent dialog shows immediately.
    pub fn open_tutorial(&mut self, now: Instant) {
        if self.tutorial.is_some() {
            return;
        }
        let area = self.main_area();
        let mut screen = TutorialScreen::new(
            TourConfig::from(&self.settings.tour),
            area.width,
            area.height,
        );
        screen.session.mount(now);
        self.tutorial = Some(screen);
        self.active_screen = ActiveScreen::Tutorial;
        self.clear_status();
        info!("opened tutorial");
    }

    /// Unmount the tutorial screen and go back to the dashboard
    pub fn close_tutorial(&mut self) {
        if let Some(mut screen) = self.tutorial.take() {
            screen.session.unmount();
        }
        self.active_screen = ActiveScreen::Dashboard;
    }

    /// Act on a navigation request from either screen
    pub fn navigate(&mut self, request: NavRequest, now: Instant) {
        info!(?request, "navigation requested");
        match request {
            NavRequest::SaveSuccess => {
                self.close_tutorial();
                self.notifications
                    .push(Notification::success("Job saved", now));
            }
            NavRequest::Cancel => {
                self.close_tutorial();
                self.notifications
                    .push(Notification::info("Job discarded", now));
            }
            NavRequest::ExitTutorial => {
                self.close_tutorial();
                self.notifications.push(Notification::info(
                    "Tutorial skipped. Press t to take it again.",
                    now,
                ));
            }
            NavRequest::NavigateTo(entity) => {
                self.set_status(format!(
                    "{} list is not available in this preview",
                    entity.label()
                ));
            }
        }
    }

    // ----- tour actions -----

    /// "Start Learning" on the consent dialog
    pub fn start_tour(&mut self, now: Instant) {
        if let Some(screen) = self.tutorial.as_mut() {
            screen.session.start(&mut screen.page, now);
        }
    }

    /// Close the consent dialog without touring
    pub fn decline_tour(&mut self) {
        let Some(screen) = self.tutorial.as_mut() else {
            return;
        };
        if screen.session.state() == TourState::AwaitingConsent {
            screen.session.decline();
            self.status_message =
                Some("Tour dismissed. Press r to start it, s to save, c to cancel.".into());
        }
    }

    pub fn next_step(&mut self, now: Instant) {
        let Some(screen) = self.tutorial.as_mut() else {
            return;
        };
        let was_running = screen.session.is_running();
        screen.session.next(&mut screen.page, now);
        if was_running && screen.session.state() == TourState::Completed {
            self.notifications.push(Notification::success(
                "Tutorial complete. Save or cancel the job when you're ready.",
                now,
            ));
        }
    }

    pub fn prev_step(&mut self, now: Instant) {
        if let Some(screen) = self.tutorial.as_mut() {
            screen.session.back(&mut screen.page, now);
        }
    }

    pub fn restart_tour(&mut self, now: Instant) {
        if let Some(screen) = self.tutorial.as_mut() {
            screen.session.restart(&mut screen.page, now);
            self.status_message = None;
        }
    }

    pub fn skip_tour(&mut self, now: Instant) {
        let request = self
            .tutorial
            .as_mut()
            .and_then(|screen| screen.session.skip());
        if let Some(request) = request {
            self.navigate(request, now);
        }
    }

    pub fn save_job(&mut self, now: Instant) {
        let request = self.tutorial.as_mut().map(|screen| screen.session.save());
        if let Some(request) = request {
            self.navigate(request, now);
        }
    }

    pub fn cancel_job(&mut self, now: Instant) {
        let request = self.tutorial.as_mut().map(|screen| screen.session.cancel());
        if let Some(request) = request {
            self.navigate(request, now);
        }
    }

    // ----- page events -----

    /// Scroll the tutorial page by hand
    pub fn scroll_page(&mut self, delta: i32) {
        if let Some(screen) = self.tutorial.as_mut() {
            if screen.page.scroll_by(delta) {
                screen.session.on_scroll(&screen.page);
            }
        }
    }

    pub fn resize(&mut self, width: u16, height: u16) {
        self.terminal_size = (width, height);
        let area = self.main_area();
        if let Some(screen) = self.tutorial.as_mut() {
            if screen.page.set_viewport(area.width, area.height) {
                screen.session.on_resize(&screen.page);
            }
        }
    }

    /// Advance animations and fire due timers
    pub fn tick(&mut self, now: Instant) {
        self.notifications.prune(now);
        if let Some(screen) = self.tutorial.as_mut() {
            if screen.page.animate() {
                screen.session.on_scroll(&screen.page);
            }
            screen.session.tick(now, &mut screen.page);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Entity;
    use crate::tour::PageSurface;
    use std::time::Duration;

    fn app<'a>(settings: &'a Settings, data: &'a DashboardData) -> App<'a> {
        App::new(settings, data, (100, 21))
    }

    /// Run ticks until the page stops animating and timers have settled
    fn settle(app: &mut App, mut now: Instant) -> Instant {
        for _ in 0..40 {
            now += Duration::from_millis(50);
            app.tick(now);
        }
        now
    }

    #[test]
    fn test_open_tutorial_shows_consent() {
        let settings = Settings::default();
        let data = DashboardData::sample();
        let mut app = app(&settings, &data);
        app.open_tutorial(Instant::now());

        assert_eq!(app.active_screen, ActiveScreen::Tutorial);
        let screen = app.tutorial.as_ref().unwrap();
        assert!(screen.session.is_info_dialog_open());
        assert_eq!(screen.session.state(), TourState::AwaitingConsent);
        // Page fills the terminal minus the status bar
        assert_eq!(screen.page.viewport().height, 20);
    }

    #[test]
    fn test_tour_auto_starts_after_delay() {
        let settings = Settings::default();
        let data = DashboardData::sample();
        let mut app = app(&settings, &data);
        let now = Instant::now();
        app.open_tutorial(now);

        app.tick(now + Duration::from_millis(999));
        assert!(!app.tutorial.as_ref().unwrap().session.is_running());

        app.tick(now + Duration::from_millis(1000));
        let session = &app.tutorial.as_ref().unwrap().session;
        assert_eq!(session.state(), TourState::Running(0));
        assert!(!session.is_info_dialog_open());
    }

    #[test]
    fn test_walk_through_and_finish() {
        let settings = Settings::default();
        let data = DashboardData::sample();
        let mut app = app(&settings, &data);
        let mut now = Instant::now();
        app.open_tutorial(now);
        app.start_tour(now);

        for expected in 1..6 {
            app.next_step(now);
            now = settle(&mut app, now);
            let session = &app.tutorial.as_ref().unwrap().session;
            assert_eq!(session.step_index(), Some(expected));
        }
        app.next_step(now);
        let session = &app.tutorial.as_ref().unwrap().session;
        assert_eq!(session.state(), TourState::Completed);
        assert!(!session.is_step_dialog_open());
        assert_eq!(app.notifications.len(), 1);
        assert_eq!(app.active_screen, ActiveScreen::Tutorial);
    }

    #[test]
    fn test_auto_scroll_brings_save_button_into_view() {
        let settings = Settings::default();
        let data = DashboardData::sample();
        let mut app = app(&settings, &data);
        let now = Instant::now();
        app.open_tutorial(now);
        app.start_tour(now);
        for _ in 0..5 {
            app.next_step(now);
        }
        settle(&mut app, now);

        let screen = app.tutorial.as_ref().unwrap();
        assert!(screen.page.scroll_y() > 0);
        let highlight = screen.session.highlight().unwrap();
        let anchor = screen.page.anchor(crate::tour::TargetKey::SaveButton).unwrap();
        assert_eq!(highlight, anchor.inflate(1));
    }

    #[test]
    fn test_skip_returns_to_dashboard() {
        let settings = Settings::default();
        let data = DashboardData::sample();
        let mut app = app(&settings, &data);
        let now = Instant::now();
        app.open_tutorial(now);
        app.start_tour(now);
        app.next_step(now);

        app.skip_tour(now);
        assert_eq!(app.active_screen, ActiveScreen::Dashboard);
        assert!(app.tutorial.is_none());
        assert_eq!(app.notifications.len(), 1);

        // A second skip has nothing to act on
        app.skip_tour(now);
        assert_eq!(app.notifications.len(), 1);
    }

    #[test]
    fn test_save_and_cancel_leave_tutorial() {
        let settings = Settings::default();
        let data = DashboardData::sample();
        let mut app = app(&settings, &data);
        let now = Instant::now();

        app.open_tutorial(now);
        app.save_job(now);
        assert_eq!(app.active_screen, ActiveScreen::Dashboard);
        assert_eq!(app.notifications.current().unwrap().message, "Job saved");

        app.open_tutorial(now);
        app.start_tour(now);
        app.cancel_job(now);
        assert!(app.tutorial.is_none());
        assert_eq!(app.notifications.len(), 2);
    }

    #[test]
    fn test_decline_then_restart() {
        let settings = Settings::default();
        let data = DashboardData::sample();
        let mut app = app(&settings, &data);
        let now = Instant::now();
        app.open_tutorial(now);
        app.decline_tour();
        assert!(app.status_message.is_some());

        // The auto-start timer was cancelled with the dialog
        app.tick(now + Duration::from_secs(5));
        let session = &app.tutorial.as_ref().unwrap().session;
        assert_eq!(session.state(), TourState::Dormant);

        app.restart_tour(now);
        let session = &app.tutorial.as_ref().unwrap().session;
        assert_eq!(session.state(), TourState::Running(0));
        assert!(app.status_message.is_none());
    }

    #[test]
    fn test_dashboard_navigation_is_inert() {
        let settings = Settings::default();
        let data = DashboardData::sample();
        let mut app = app(&settings, &data);
        app.navigate(NavRequest::NavigateTo(Entity::Invoices), Instant::now());
        assert_eq!(app.active_screen, ActiveScreen::Dashboard);
        assert_eq!(
            app.status_message.as_deref(),
            Some("Invoices list is not available in this preview")
        );
    }

    #[test]
    fn test_resize_and_scroll_move_highlight() {
        let settings = Settings::default();
        let data = DashboardData::sample();
        let mut app = app(&settings, &data);
        let now = Instant::now();
        app.open_tutorial(now);
        app.start_tour(now);
        app.next_step(now);
        app.next_step(now);
        settle(&mut app, now);

        let before = app.tutorial.as_ref().unwrap().session.highlight().unwrap();
        app.resize(60, 21);
        let after = app.tutorial.as_ref().unwrap().session.highlight().unwrap();
        assert!(after.width < before.width);

        let scroll_before = app.tutorial.as_ref().unwrap().page.scroll_y();
        app.scroll_page(1);
        let screen = app.tutorial.as_ref().unwrap();
        assert_eq!(screen.page.scroll_y(), scroll_before + 1);
        // Overlay is kept in page coordinates, so scrolling doesn't move it
        assert_eq!(screen.session.highlight().unwrap(), after);
    }

    #[test]
    fn test_close_tutorial_drops_timers() {
        let settings = Settings::default();
        let data = DashboardData::sample();
        let mut app = app(&settings, &data);
        let now = Instant::now();
        app.open_tutorial(now);
        app.close_tutorial();
        app.tick(now + Duration::from_secs(2));
        assert!(app.tutorial.is_none());
        assert_eq!(app.active_screen, ActiveScreen::Dashboard);
    }
}
