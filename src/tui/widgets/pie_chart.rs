//! Pie chart widget
//!
//! Rasterises a breakdown into terminal cells. A cell is roughly twice as
//! tall as it is wide, so horizontal distances are halved to keep the pie
//! round. Slices run clockwise from twelve o'clock in bucket order.

use std::f64::consts::TAU;

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    widgets::Widget,
};

use crate::models::{Breakdown, Rgb};

/// Labels sit at this fraction of the radius
const LABEL_RADIUS: f64 = 0.6;

pub fn rgb_color(rgb: Rgb) -> Color {
    Color::Rgb(rgb.r, rgb.g, rgb.b)
}

/// Fraction of a full turn, clockwise from straight up, for an offset from the centre
fn clockwise_fraction(dx: f64, dy: f64) -> f64 {
    let angle = dx.atan2(-dy);
    let angle = if angle < 0.0 { angle + TAU } else { angle };
    angle / TAU
}

pub struct PieChart<'a> {
    breakdown: &'a Breakdown,
}

impl<'a> PieChart<'a> {
    pub fn new(breakdown: &'a Breakdown) -> Self {
        Self { breakdown }
    }
}

impl Widget for PieChart<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.is_empty() {
            return;
        }

        let slices = self.breakdown.slices();
        if self.breakdown.total() == 0 {
            let text = "No data";
            let x = area.x + area.width.saturating_sub(text.len() as u16) / 2;
            buf.set_string(
                x,
                area.y + area.height / 2,
                text,
                Style::default().fg(Color::DarkGray),
            );
            return;
        }

        let radius = (f64::from(area.height) / 2.0).min(f64::from(area.width) / 4.0);
        let cx = f64::from(area.x) + f64::from(area.width) / 2.0;
        let cy = f64::from(area.y) + f64::from(area.height) / 2.0;

        // Running end of each slice as a fraction of the turn
        let mut end = 0.0;
        let bands: Vec<(f64, Color)> = slices
            .iter()
            .map(|slice| {
                end += slice.share;
                (end, rgb_color(slice.bucket.color))
            })
            .collect();

        for y in area.top()..area.bottom() {
            for x in area.left()..area.right() {
                let dx = (f64::from(x) + 0.5 - cx) / 2.0;
                let dy = f64::from(y) + 0.5 - cy;
                if dx * dx + dy * dy > radius * radius {
                    continue;
                }
                let fraction = clockwise_fraction(dx, dy);
                let color = bands
                    .iter()
                    .find(|(end, _)| fraction < *end)
                    .or(bands.last())
                    .map(|(_, color)| *color);
                if let (Some(color), Some(cell)) = (color, buf.cell_mut((x, y))) {
                    cell.set_symbol("█");
                    cell.set_fg(color);
                }
            }
        }

        let mut start = 0.0;
        for slice in &slices {
            let mid = start + slice.share / 2.0;
            start += slice.share;
            let Some(label) = &slice.label else {
                continue;
            };
            let label_width = label.chars().count() as u16;
            if label_width > area.width {
                continue;
            }
            let angle = mid * TAU;
            let lx = cx + angle.sin() * radius * LABEL_RADIUS * 2.0 - f64::from(label_width) / 2.0;
            let ly = cy - angle.cos() * radius * LABEL_RADIUS;

            let max_x = f64::from(area.right() - label_width);
            let x = lx.round().clamp(f64::from(area.left()), max_x) as u16;
            let y = ly
                .floor()
                .clamp(f64::from(area.top()), f64::from(area.bottom() - 1)) as u16;
            buf.set_string(
                x,
                y,
                label,
                Style::default()
                    .fg(Color::Black)
                    .bg(rgb_color(slice.bucket.color))
                    .add_modifier(Modifier::BOLD),
            );
        }
    }
}
