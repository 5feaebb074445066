//! Reusable widgets for the TUI

pub mod notification;
pub mod pie_chart;
pub mod spotlight;

pub use notification::{
    notification_area, Notification, NotificationKind, NotificationQueue, NotificationWidget,
};
pub use pie_chart::{rgb_color, PieChart};
pub use spotlight::{caption_origin, Spotlight};
