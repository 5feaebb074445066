//! Guided tour session
//!
//! A `TutorialSession` runs one pass of the tour over a page:
//!
//! ```text
//! Dormant ──mount──▶ AwaitingConsent ──start / auto-start──▶ Running(0)
//!                                                             │  ▲
//!                                                        next │  │ back
//!                                                             ▼  │
//!                                                         Running(i) ──finish──▶ Completed
//! ```
//!
//! `skip`, `save` and `cancel` drop back to `Dormant` from anywhere and hand a
//! [`NavRequest`] to the caller. Nothing survives `unmount`; a new mount starts
//! a fresh session.
//!
//! The session never touches the screen directly. It measures targets and
//! requests scrolling through a [`PageSurface`], and owns two kinds of
//! deferred work: the auto-start timer and the post-scroll re-measure. Scroll
//! and resize notifications are only honoured while a [`Subscription`] is held,
//! which is exactly while the tour is running.

use std::time::{Duration, Instant};

use tracing::{debug, trace};

use super::geometry::{centered_scroll_top, is_comfortably_visible, overlay_rect, PageRect, Viewport};
use super::steps::{GuideStep, TargetKey};
use super::timers::{TimerId, Timers};
use crate::config::TourSettings;
use crate::navigation::NavRequest;

/// What the tour needs from the screen hosting it
pub trait PageSurface {
    /// Current scroll offset and size of the visible area
    fn viewport(&self) -> Viewport;

    /// Where `target` currently sits, relative to the viewport's top-left.
    /// `None` when the target isn't on the page.
    fn bounding_client_rect(&self, target: TargetKey) -> Option<PageRect>;

    /// Begin a smooth scroll so the viewport's top lands on `top`
    fn scroll_to(&mut self, top: i32);
}

/// Resolve a step's symbolic target on the page as it is right now
pub fn resolve_target(key: &str, surface: &dyn PageSurface) -> Option<PageRect> {
    TargetKey::from_key(key).and_then(|target| surface.bounding_client_rect(target))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TourState {
    Dormant,
    AwaitingConsent,
    Running(usize),
    Completed,
}

/// Page notifications the tour can listen to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageEvent {
    Scroll,
    Resize,
}

/// Scroll/resize listener registration, held only while running
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Subscription {
    events: &'static [PageEvent],
}

impl Subscription {
    fn page_geometry() -> Self {
        Self {
            events: &[PageEvent::Scroll, PageEvent::Resize],
        }
    }

    pub fn covers(&self, event: PageEvent) -> bool {
        self.events.contains(&event)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TourTimer {
    AutoStart,
    Remeasure { step: usize },
}

/// Timings and sizes the session works with
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TourConfig {
    pub auto_start: bool,
    pub auto_start_delay: Duration,
    pub scroll_settle: Duration,
    pub padding: i32,
    pub reserved_bottom: i32,
}

impl From<&TourSettings> for TourConfig {
    fn from(settings: &TourSettings) -> Self {
        Self {
            auto_start: settings.auto_start,
            auto_start_delay: settings.auto_start_delay(),
            scroll_settle: settings.scroll_settle(),
            padding: i32::from(settings.highlight_padding),
            reserved_bottom: i32::from(settings.reserved_bottom),
        }
    }
}

impl Default for TourConfig {
    fn default() -> Self {
        Self::from(&TourSettings::default())
    }
}

pub struct TutorialSession {
    steps: &'static [GuideStep],
    config: TourConfig,
    state: TourState,
    info_dialog_open: bool,
    step_dialog_open: bool,
    overlay: Option<PageRect>,
    timers: Timers<TourTimer>,
    auto_start_timer: Option<TimerId>,
    remeasure_timer: Option<TimerId>,
    listeners: Option<Subscription>,
    mounted: bool,
}

impl TutorialSession {
    pub fn new(steps: &'static [GuideStep], config: TourConfig) -> Self {
        Self {
            steps,
            config,
            state: TourState::Dormant,
            info_dialog_open: false,
            step_dialog_open: false,
            overlay: None,
            timers: Timers::new(),
            auto_start_timer: None,
            remeasure_timer: None,
            listeners: None,
            mounted: false,
        }
    }

    // ----- lifecycle -----

    /// Show the consent dialog and arm the auto-start timer
    pub fn mount(&mut self, now: Instant) {
        if self.mounted {
            return;
        }
        self.mounted = true;
        self.state = TourState::AwaitingConsent;
        self.info_dialog_open = true;
        self.step_dialog_open = false;
        self.overlay = None;
        if self.config.auto_start && !self.steps.is_empty() {
            self.auto_start_timer = Some(self.timers.schedule(
                TourTimer::AutoStart,
                self.config.auto_start_delay,
                now,
            ));
        }
        debug!(steps = self.steps.len(), "tutorial mounted");
    }

    /// Tear down every timer and listener. Later timer firings are ignored.
    pub fn unmount(&mut self) {
        if !self.mounted {
            return;
        }
        self.stop();
        self.mounted = false;
        debug!("tutorial unmounted");
    }

    // ----- consent -----

    /// "Start Learning" on the consent dialog
    pub fn start(&mut self, surface: &mut dyn PageSurface, now: Instant) {
        if self.state != TourState::AwaitingConsent {
            return;
        }
        self.cancel_auto_start();
        self.info_dialog_open = false;
        debug!("tour started from consent dialog");
        self.enter_step(0, surface, now);
    }

    /// Close the consent dialog without starting
    pub fn decline(&mut self) {
        if self.state != TourState::AwaitingConsent {
            return;
        }
        self.cancel_auto_start();
        self.info_dialog_open = false;
        self.state = TourState::Dormant;
        debug!("tour declined");
    }

    // ----- stepping -----

    /// Next, or Finish on the last step
    pub fn next(&mut self, surface: &mut dyn PageSurface, now: Instant) {
        if let TourState::Running(index) = self.state {
            self.advance_to(index + 1, surface, now);
        }
    }

    pub fn back(&mut self, surface: &mut dyn PageSurface, now: Instant) {
        if let TourState::Running(index) = self.state {
            if index > 0 {
                self.enter_step(index - 1, surface, now);
            }
        }
    }

    /// Jump to `index` while running. Anything at or past the end completes the tour.
    pub fn advance_to(&mut self, index: usize, surface: &mut dyn PageSurface, now: Instant) {
        if !matches!(self.state, TourState::Running(_)) {
            return;
        }
        if index >= self.steps.len() {
            self.complete();
        } else {
            self.enter_step(index, surface, now);
        }
    }

    /// Run the tour again from the first step
    pub fn restart(&mut self, surface: &mut dyn PageSurface, now: Instant) {
        if !self.mounted || self.steps.is_empty() {
            return;
        }
        if matches!(self.state, TourState::Dormant | TourState::Completed) {
            debug!("tour restarted");
            self.enter_step(0, surface, now);
        }
    }

    // ----- leaving -----

    /// Skip/Exit while running
    pub fn skip(&mut self) -> Option<NavRequest> {
        if !matches!(self.state, TourState::Running(_)) {
            return None;
        }
        debug!("tour skipped");
        self.stop();
        Some(NavRequest::ExitTutorial)
    }

    /// Save on the hosted form, whatever the tour is doing
    pub fn save(&mut self) -> NavRequest {
        self.stop();
        NavRequest::SaveSuccess
    }

    /// Cancel on the hosted form, whatever the tour is doing
    pub fn cancel(&mut self) -> NavRequest {
        self.stop();
        NavRequest::Cancel
    }

    // ----- page events -----

    pub fn on_scroll(&mut self, surface: &dyn PageSurface) {
        self.on_page_event(PageEvent::Scroll, surface);
    }

    pub fn on_resize(&mut self, surface: &dyn PageSurface) {
        self.on_page_event(PageEvent::Resize, surface);
    }

    fn on_page_event(&mut self, event: PageEvent, surface: &dyn PageSurface) {
        if !self.listens_for(event) {
            return;
        }
        self.recompute_overlay(surface);
    }

    /// Fire due timers
    pub fn tick(&mut self, now: Instant, surface: &mut dyn PageSurface) {
        if !self.mounted {
            return;
        }
        for (id, timer) in self.timers.take_due(now) {
            match timer {
                TourTimer::AutoStart => {
                    if self.auto_start_timer != Some(id) {
                        continue;
                    }
                    self.auto_start_timer = None;
                    if self.state == TourState::AwaitingConsent {
                        debug!("tour auto-started");
                        self.info_dialog_open = false;
                        self.enter_step(0, surface, now);
                    }
                }
                TourTimer::Remeasure { step } => {
                    if self.remeasure_timer != Some(id) {
                        continue;
                    }
                    self.remeasure_timer = None;
                    if self.state == TourState::Running(step) {
                        trace!(step, "re-measuring after scroll");
                        self.recompute_overlay(surface);
                    }
                }
            }
        }
    }

    // ----- queries -----

    pub fn state(&self) -> TourState {
        self.state
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    pub fn is_running(&self) -> bool {
        matches!(self.state, TourState::Running(_))
    }

    pub fn step_index(&self) -> Option<usize> {
        match self.state {
            TourState::Running(index) => Some(index),
            _ => None,
        }
    }

    pub fn current_step(&self) -> Option<&GuideStep> {
        self.step_index().and_then(|i| self.steps.get(i))
    }

    pub fn step_count(&self) -> usize {
        self.steps.len()
    }

    pub fn steps(&self) -> &'static [GuideStep] {
        self.steps
    }

    pub fn is_info_dialog_open(&self) -> bool {
        self.info_dialog_open
    }

    pub fn is_step_dialog_open(&self) -> bool {
        self.step_dialog_open
    }

    /// Last measured overlay in page coordinates
    pub fn overlay(&self) -> Option<PageRect> {
        self.overlay
    }

    /// The overlay, but only while the current step spotlights its target
    pub fn highlight(&self) -> Option<PageRect> {
        self.current_step()
            .filter(|step| step.action)
            .and(self.overlay)
    }

    /// `(step, count)` with the step 1-indexed, for display
    pub fn progress(&self) -> Option<(usize, usize)> {
        self.step_index().map(|i| (i + 1, self.steps.len()))
    }

    pub fn progress_ratio(&self) -> f64 {
        match self.progress() {
            Some((step, count)) if count > 0 => step as f64 / count as f64,
            _ => 0.0,
        }
    }

    pub fn can_go_back(&self) -> bool {
        matches!(self.state, TourState::Running(i) if i > 0)
    }

    pub fn is_last_step(&self) -> bool {
        matches!(self.state, TourState::Running(i) if i + 1 == self.steps.len())
    }

    /// Label for the forward control
    pub fn forward_label(&self) -> &'static str {
        if self.is_last_step() {
            "Finish"
        } else {
            "Next"
        }
    }

    pub fn listens_for(&self, event: PageEvent) -> bool {
        self.mounted && self.listeners.is_some_and(|s| s.covers(event))
    }

    pub fn pending_timers(&self) -> usize {
        self.timers.len()
    }

    pub fn next_deadline(&self) -> Option<Instant> {
        self.timers.next_deadline()
    }

    // ----- internals -----

    fn enter_step(&mut self, index: usize, surface: &mut dyn PageSurface, now: Instant) {
        self.state = TourState::Running(index);
        self.step_dialog_open = true;
        if self.listeners.is_none() {
            self.listeners = Some(Subscription::page_geometry());
        }
        if let Some(id) = self.remeasure_timer.take() {
            self.timers.cancel(id);
        }

        let Some(step) = self.steps.get(index) else {
            return;
        };
        debug!(step = index, id = step.id, "entering tour step");

        self.recompute_overlay(surface);

        let Some(client) = resolve_target(step.target, surface) else {
            return;
        };
        let viewport = surface.viewport();
        if !is_comfortably_visible(client, &viewport, self.config.reserved_bottom) {
            let top = centered_scroll_top(client, &viewport);
            trace!(step = index, top, "scrolling target into view");
            surface.scroll_to(top);
            self.remeasure_timer = Some(self.timers.schedule(
                TourTimer::Remeasure { step: index },
                self.config.scroll_settle,
                now,
            ));
        }
    }

    fn recompute_overlay(&mut self, surface: &dyn PageSurface) {
        let steps = self.steps;
        let Some(step) = self.step_index().and_then(|i| steps.get(i)) else {
            return;
        };
        match resolve_target(step.target, surface) {
            Some(client) => {
                self.overlay = Some(overlay_rect(client, &surface.viewport(), self.config.padding));
            }
            None => trace!(anchor = step.target, "tour target not on page"),
        }
    }

    fn complete(&mut self) {
        debug!("tour completed");
        self.state = TourState::Completed;
        self.step_dialog_open = false;
        self.listeners = None;
        if let Some(id) = self.remeasure_timer.take() {
            self.timers.cancel(id);
        }
    }

    fn cancel_auto_start(&mut self) {
        if let Some(id) = self.auto_start_timer.take() {
            self.timers.cancel(id);
        }
    }

    fn stop(&mut self) {
        self.state = TourState::Dormant;
        self.info_dialog_open = false;
        self.step_dialog_open = false;
        self.listeners = None;
        self.timers.cancel_all();
        self.auto_start_timer = None;
        self.remeasure_timer = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tour::steps::{Position, TOUR_STEPS};
    use std::collections::HashMap;

    /// A page whose targets sit at fixed page positions
    struct FakePage {
        scroll_y: i32,
        width: i32,
        height: i32,
        anchors: HashMap<TargetKey, PageRect>,
        scroll_requests: Vec<i32>,
        measurements: std::cell::Cell<usize>,
    }

    impl FakePage {
        fn new(height: i32) -> Self {
            let mut anchors = HashMap::new();
            anchors.insert(TargetKey::JobHeader, PageRect::new(2, 0, 76, 3));
            anchors.insert(TargetKey::CustomerField, PageRect::new(2, 4, 76, 3));
            anchors.insert(TargetKey::SiteField, PageRect::new(2, 8, 76, 3));
            anchors.insert(TargetKey::JobTypeField, PageRect::new(2, 12, 76, 3));
            anchors.insert(TargetKey::DescriptionField, PageRect::new(2, 16, 76, 7));
            anchors.insert(TargetKey::SaveButton, PageRect::new(2, 40, 14, 3));
            Self {
                scroll_y: 0,
                width: 80,
                height,
                anchors,
                scroll_requests: Vec::new(),
                measurements: std::cell::Cell::new(0),
            }
        }

        /// Jump straight to the requested scroll, as if the animation finished
        fn settle(&mut self) {
            if let Some(&top) = self.scroll_requests.last() {
                self.scroll_y = top;
            }
        }
    }

    impl PageSurface for FakePage {
        fn viewport(&self) -> Viewport {
            Viewport::new(0, self.scroll_y, self.width, self.height)
        }

        fn bounding_client_rect(&self, target: TargetKey) -> Option<PageRect> {
            self.measurements.set(self.measurements.get() + 1);
            self.anchors
                .get(&target)
                .map(|r| r.translate(0, -self.scroll_y))
        }

        fn scroll_to(&mut self, top: i32) {
            self.scroll_requests.push(top);
        }
    }

    fn config() -> TourConfig {
        TourConfig {
            auto_start: true,
            auto_start_delay: Duration::from_millis(1000),
            scroll_settle: Duration::from_millis(400),
            padding: 1,
            reserved_bottom: 11,
        }
    }

    fn running_session(page: &mut FakePage, now: Instant) -> TutorialSession {
        let mut session = TutorialSession::new(&TOUR_STEPS, config());
        session.mount(now);
        session.start(page, now);
        session
    }

    #[test]
    fn test_mount_awaits_consent() {
        let now = Instant::now();
        let mut session = TutorialSession::new(&TOUR_STEPS, config());
        assert_eq!(session.state(), TourState::Dormant);

        session.mount(now);
        assert_eq!(session.state(), TourState::AwaitingConsent);
        assert!(session.is_info_dialog_open());
        assert!(!session.is_step_dialog_open());
        assert_eq!(session.pending_timers(), 1);
    }

    #[test]
    fn test_explicit_start() {
        let now = Instant::now();
        let mut page = FakePage::new(40);
        let session = running_session(&mut page, now);

        assert_eq!(session.state(), TourState::Running(0));
        assert!(!session.is_info_dialog_open());
        assert!(session.is_step_dialog_open());
        assert_eq!(session.progress(), Some((1, 6)));
    }

    #[test]
    fn test_auto_start_after_delay() {
        let now = Instant::now();
        let mut page = FakePage::new(40);
        let mut session = TutorialSession::new(&TOUR_STEPS, config());
        session.mount(now);

        session.tick(now + Duration::from_millis(999), &mut page);
        assert_eq!(session.state(), TourState::AwaitingConsent);

        session.tick(now + Duration::from_millis(1000), &mut page);
        assert_eq!(session.state(), TourState::Running(0));
        assert!(!session.is_info_dialog_open());
        assert!(session.is_step_dialog_open());
    }

    #[test]
    fn test_explicit_start_then_timer_does_not_restart() {
        let now = Instant::now();
        let mut page = FakePage::new(40);
        let mut session = running_session(&mut page, now);
        session.next(&mut page, now);
        session.next(&mut page, now);

        session.tick(now + Duration::from_secs(2), &mut page);
        assert_eq!(session.state(), TourState::Running(2));
    }

    #[test]
    fn test_decline_cancels_auto_start() {
        let now = Instant::now();
        let mut page = FakePage::new(40);
        let mut session = TutorialSession::new(&TOUR_STEPS, config());
        session.mount(now);
        session.decline();

        assert_eq!(session.state(), TourState::Dormant);
        assert!(!session.is_info_dialog_open());
        session.tick(now + Duration::from_secs(2), &mut page);
        assert_eq!(session.state(), TourState::Dormant);
    }

    #[test]
    fn test_auto_start_disabled() {
        let now = Instant::now();
        let mut page = FakePage::new(40);
        let mut session = TutorialSession::new(
            &TOUR_STEPS,
            TourConfig {
                auto_start: false,
                ..config()
            },
        );
        session.mount(now);
        assert_eq!(session.pending_timers(), 0);
        session.tick(now + Duration::from_secs(5), &mut page);
        assert_eq!(session.state(), TourState::AwaitingConsent);
    }

    #[test]
    fn test_next_five_times_reaches_last_then_completes() {
        let now = Instant::now();
        let mut page = FakePage::new(40);
        let mut session = running_session(&mut page, now);

        for _ in 0..5 {
            session.next(&mut page, now);
        }
        assert_eq!(session.state(), TourState::Running(5));
        assert!(session.is_last_step());
        assert_eq!(session.forward_label(), "Finish");

        session.next(&mut page, now);
        assert_eq!(session.state(), TourState::Completed);
        assert!(!session.is_step_dialog_open());
        assert!(!session.listens_for(PageEvent::Scroll));
    }

    #[test]
    fn test_back_and_next_move_by_one() {
        let now = Instant::now();
        let mut page = FakePage::new(40);
        let mut session = running_session(&mut page, now);

        assert!(!session.can_go_back());
        session.back(&mut page, now);
        assert_eq!(session.step_index(), Some(0));

        session.next(&mut page, now);
        session.next(&mut page, now);
        assert_eq!(session.step_index(), Some(2));
        assert!(session.can_go_back());
        assert_eq!(session.forward_label(), "Next");

        session.back(&mut page, now);
        assert_eq!(session.step_index(), Some(1));
    }

    #[test]
    fn test_index_never_leaves_range() {
        let now = Instant::now();
        let mut page = FakePage::new(40);
        let mut session = running_session(&mut page, now);

        // A mix of forward and backward presses, including past both ends
        let presses = [false, false, true, true, true, false, false, false, false, false, true];
        for forward in presses {
            if forward {
                session.next(&mut page, now);
            } else {
                session.back(&mut page, now);
            }
            if let Some(i) = session.step_index() {
                assert!(i < session.step_count());
            }
        }
    }

    #[test]
    fn test_advance_past_end_completes() {
        let now = Instant::now();
        let mut page = FakePage::new(40);
        let mut session = running_session(&mut page, now);

        session.advance_to(3, &mut page, now);
        assert_eq!(session.state(), TourState::Running(3));
        session.advance_to(6, &mut page, now);
        assert_eq!(session.state(), TourState::Completed);
    }

    #[test]
    fn test_skip_from_every_step() {
        let now = Instant::now();
        for target in 0..TOUR_STEPS.len() {
            let mut page = FakePage::new(40);
            let mut session = running_session(&mut page, now);
            session.advance_to(target, &mut page, now);

            let mut exits = 0;
            if session.skip() == Some(NavRequest::ExitTutorial) {
                exits += 1;
            }
            // A second skip has nothing to exit from
            if session.skip().is_some() {
                exits += 1;
            }
            assert_eq!(exits, 1);
            assert_eq!(session.state(), TourState::Dormant);
            assert_eq!(session.pending_timers(), 0);
            assert!(!session.listens_for(PageEvent::Resize));
        }
    }

    #[test]
    fn test_save_from_any_state() {
        let now = Instant::now();
        let mut page = FakePage::new(40);

        let mut awaiting = TutorialSession::new(&TOUR_STEPS, config());
        awaiting.mount(now);

        let mut running = running_session(&mut page, now);
        running.next(&mut page, now);

        let mut completed = running_session(&mut page, now);
        completed.advance_to(6, &mut page, now);

        for session in [&mut awaiting, &mut running, &mut completed] {
            assert_eq!(session.save(), NavRequest::SaveSuccess);
            assert_eq!(session.state(), TourState::Dormant);
            assert!(!session.is_info_dialog_open());
            assert!(!session.is_step_dialog_open());
            assert_eq!(session.pending_timers(), 0);
        }

        // Auto-start must not resurrect a saved session
        awaiting.tick(now + Duration::from_secs(2), &mut page);
        assert_eq!(awaiting.state(), TourState::Dormant);
    }

    #[test]
    fn test_cancel_returns_cancel() {
        let now = Instant::now();
        let mut page = FakePage::new(40);
        let mut session = running_session(&mut page, now);
        assert_eq!(session.cancel(), NavRequest::Cancel);
        assert_eq!(session.state(), TourState::Dormant);
    }

    #[test]
    fn test_overlay_is_padded_page_rect() {
        let now = Instant::now();
        let mut page = FakePage::new(40);
        let mut session = running_session(&mut page, now);

        session.next(&mut page, now);
        // Customer field at page (2, 4, 76, 3), padding 1
        assert_eq!(session.overlay(), Some(PageRect::new(1, 3, 78, 5)));
        assert_eq!(session.highlight(), session.overlay());
    }

    #[test]
    fn test_non_action_step_has_no_highlight() {
        let now = Instant::now();
        let mut page = FakePage::new(40);
        let session = running_session(&mut page, now);

        assert!(!TOUR_STEPS[0].action);
        assert!(session.overlay().is_some());
        assert_eq!(session.highlight(), None);
    }

    #[test]
    fn test_offscreen_target_scrolls_and_remeasures() {
        let now = Instant::now();
        let mut page = FakePage::new(30);
        let mut session = running_session(&mut page, now);
        assert!(page.scroll_requests.is_empty());

        session.advance_to(5, &mut page, now);
        // Save button at page row 40..43, centre 41, viewport 30 high
        assert_eq!(page.scroll_requests, vec![26]);
        assert_eq!(session.overlay(), Some(PageRect::new(1, 39, 16, 5)));

        page.settle();
        let before = page.measurements.get();
        session.tick(now + Duration::from_millis(400), &mut page);
        assert!(page.measurements.get() > before);
        // Same page position after the scroll, so the overlay doesn't move
        assert_eq!(session.overlay(), Some(PageRect::new(1, 39, 16, 5)));
    }

    #[test]
    fn test_target_in_reserved_band_scrolls() {
        let now = Instant::now();
        // Description ends at row 23; with 30 rows and 11 reserved the zone is 0..19
        let mut page = FakePage::new(30);
        let mut session = running_session(&mut page, now);
        session.advance_to(4, &mut page, now);
        assert_eq!(page.scroll_requests.len(), 1);
    }

    #[test]
    fn test_step_change_supersedes_pending_remeasure() {
        let now = Instant::now();
        let mut page = FakePage::new(30);
        let mut session = running_session(&mut page, now);

        session.advance_to(5, &mut page, now);
        assert_eq!(session.pending_timers(), 1);

        // Moving back to a visible step before the scroll settles drops the re-measure
        session.advance_to(1, &mut page, now);
        assert_eq!(session.pending_timers(), 0);
    }

    #[test]
    fn test_scroll_and_resize_recompute_while_running() {
        let now = Instant::now();
        let mut page = FakePage::new(40);
        let mut session = running_session(&mut page, now);
        session.next(&mut page, now);
        assert!(session.listens_for(PageEvent::Scroll));

        // The page reflows so the customer field moves down
        page.anchors
            .insert(TargetKey::CustomerField, PageRect::new(2, 6, 76, 3));
        session.on_resize(&page);
        assert_eq!(session.overlay(), Some(PageRect::new(1, 5, 78, 5)));

        page.scroll_y = 3;
        session.on_scroll(&page);
        assert_eq!(session.overlay(), Some(PageRect::new(1, 5, 78, 5)));
    }

    #[test]
    fn test_events_ignored_while_dormant() {
        let now = Instant::now();
        let mut page = FakePage::new(40);
        let mut session = TutorialSession::new(&TOUR_STEPS, config());
        session.mount(now);
        session.decline();

        let before = page.measurements.get();
        session.on_scroll(&page);
        session.on_resize(&page);
        assert_eq!(page.measurements.get(), before);
        assert_eq!(session.overlay(), None);
    }

    #[test]
    fn test_missing_target_keeps_previous_overlay() {
        static STEPS: [GuideStep; 2] = [
            GuideStep {
                id: "customer",
                title: "Customer",
                description: "",
                target: "customer-field",
                position: Position::Bottom,
                action: true,
            },
            GuideStep {
                id: "ghost",
                title: "Ghost",
                description: "",
                target: "no-such-anchor",
                position: Position::Bottom,
                action: true,
            },
        ];
        let now = Instant::now();
        let mut page = FakePage::new(40);
        let mut session = TutorialSession::new(&STEPS, config());
        session.mount(now);
        session.start(&mut page, now);
        let first = session.overlay();
        assert!(first.is_some());

        session.next(&mut page, now);
        assert_eq!(session.state(), TourState::Running(1));
        assert_eq!(session.overlay(), first);
        assert!(page.scroll_requests.is_empty());
    }

    #[test]
    fn test_timer_after_unmount_is_ignored() {
        let now = Instant::now();
        let mut page = FakePage::new(30);
        let mut session = running_session(&mut page, now);
        session.advance_to(5, &mut page, now);
        let overlay = session.overlay();

        session.unmount();
        assert!(!session.is_mounted());
        assert_eq!(session.pending_timers(), 0);

        page.anchors
            .insert(TargetKey::SaveButton, PageRect::new(0, 0, 1, 1));
        let before = page.measurements.get();
        session.tick(now + Duration::from_secs(10), &mut page);
        session.on_scroll(&page);
        assert_eq!(page.measurements.get(), before);
        assert_eq!(session.overlay(), overlay);
    }

    #[test]
    fn test_unmount_cancels_auto_start() {
        let now = Instant::now();
        let mut page = FakePage::new(40);
        let mut session = TutorialSession::new(&TOUR_STEPS, config());
        session.mount(now);
        session.unmount();

        session.tick(now + Duration::from_secs(2), &mut page);
        assert_eq!(session.state(), TourState::Dormant);
    }

    #[test]
    fn test_restart_after_completion() {
        let now = Instant::now();
        let mut page = FakePage::new(40);
        let mut session = running_session(&mut page, now);
        session.advance_to(6, &mut page, now);
        assert_eq!(session.state(), TourState::Completed);

        session.restart(&mut page, now);
        assert_eq!(session.state(), TourState::Running(0));
        assert!(session.is_step_dialog_open());
    }

    #[test]
    fn test_progress_ratio() {
        let now = Instant::now();
        let mut page = FakePage::new(40);
        let mut session = running_session(&mut page, now);
        session.advance_to(2, &mut page, now);
        assert!((session.progress_ratio() - 0.5).abs() < f64::EPSILON);
    }
}
