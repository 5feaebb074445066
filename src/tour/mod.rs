//! Guided tour engine
//!
//! Host-agnostic: the tour measures and scrolls the page through the
//! [`PageSurface`] trait, so the same session drives the terminal screen and
//! the test doubles.

pub mod geometry;
pub mod session;
pub mod steps;
pub mod timers;

pub use geometry::{PageRect, Viewport};
pub use session::{
    resolve_target, PageEvent, PageSurface, Subscription, TourConfig, TourState,
    TutorialSession,
};
pub use steps::{GuideStep, Position, TargetKey, TOUR_STEPS};
pub use timers::{TimerId, Timers};
