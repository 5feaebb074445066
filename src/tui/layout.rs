//! Layout definitions for the TUI
//!
//! Screen regions for the dashboard and the tutorial, plus the helpers the
//! dialogs use to place themselves.

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Height of the step dialog, kept in sync with the tour's reserved bottom band
pub const STEP_DIALOG_HEIGHT: u16 = 10;
pub const STEP_DIALOG_WIDTH: u16 = 52;

/// Layout regions shared by every screen
pub struct AppLayout {
    /// Main content area
    pub main: Rect,
    /// Status bar at the bottom
    pub status_bar: Rect,
}

impl AppLayout {
    pub fn new(area: Rect) -> Self {
        let vertical = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(3),    // Main area
                Constraint::Length(1), // Status bar
            ])
            .split(area);

        Self {
            main: vertical[0],
            status_bar: vertical[1],
        }
    }
}

/// Layout for the dashboard screen
pub struct DashboardLayout {
    pub header: Rect,
    /// One card per metric
    pub metrics: [Rect; 3],
    /// One panel per breakdown
    pub charts: [Rect; 3],
    pub follow_ups: Rect,
}

impl DashboardLayout {
    pub fn new(area: Rect, follow_up_count: usize) -> Self {
        let follow_up_height = u16::try_from(follow_up_count)
            .unwrap_or(u16::MAX)
            .saturating_mul(2)
            .saturating_add(2);

        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),                // Header
                Constraint::Length(4),                // Metric cards
                Constraint::Min(8),                   // Charts
                Constraint::Length(follow_up_height), // Follow-ups
            ])
            .split(area);

        Self {
            header: rows[0],
            metrics: thirds(rows[1]),
            charts: thirds(rows[2]),
            follow_ups: rows[3],
        }
    }
}

fn thirds(area: Rect) -> [Rect; 3] {
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
        ])
        .split(area);
    [cols[0], cols[1], cols[2]]
}

/// Split a chart panel into the pie and its legend
pub fn chart_split(area: Rect, legend_rows: u16) -> (Rect, Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(3), Constraint::Length(legend_rows)])
        .split(area);
    (chunks[0], chunks[1])
}

/// The step dialog sits in the bottom-right corner with a one-cell margin
pub fn step_dialog_area(area: Rect) -> Rect {
    let width = STEP_DIALOG_WIDTH.min(area.width.saturating_sub(2));
    let height = STEP_DIALOG_HEIGHT.min(area.height);
    let x = area.right().saturating_sub(width + 1).max(area.x);
    let y = area.bottom().saturating_sub(height);
    Rect::new(x, y, width, height)
}

/// Create a centered rect for dialogs
pub fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

/// Create a fixed-size centered rect for dialogs
pub fn centered_rect_fixed(width: u16, height: u16, r: Rect) -> Rect {
    let x = r.x + (r.width.saturating_sub(width)) / 2;
    let y = r.y + (r.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width.min(r.width), height.min(r.height))
}
