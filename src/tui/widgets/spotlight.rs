//! Spotlight overlay
//!
//! Dims every cell of the viewport except a rectangular cutout, then draws a
//! frame on the cutout's edge. The cutout is given in viewport-relative
//! cells and may hang partly off screen; only the visible part is drawn.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    widgets::Widget,
};

use crate::tour::{PageRect, Position};

pub struct Spotlight<'a> {
    cutout: PageRect,
    caption: Option<(&'a str, Position)>,
}

impl<'a> Spotlight<'a> {
    pub fn new(cutout: PageRect) -> Self {
        Self {
            cutout,
            caption: None,
        }
    }

    /// A short tag placed beside the cutout on the given side
    pub fn caption(mut self, text: &'a str, position: Position) -> Self {
        self.caption = Some((text, position));
        self
    }
}

/// Where a caption of `len` cells starts, relative to the viewport
pub fn caption_origin(cutout: PageRect, position: Position, len: i32) -> (i32, i32) {
    match position {
        Position::Top => (cutout.x + 1, cutout.y - 1),
        Position::Bottom => (cutout.x + 1, cutout.bottom()),
        Position::Left => (cutout.x - len - 1, cutout.y + cutout.height / 2),
        Position::Right => (cutout.right() + 1, cutout.y + cutout.height / 2),
    }
}

impl Widget for Spotlight<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let cut = self.cutout;
        let dim = Style::default()
            .fg(Color::DarkGray)
            .add_modifier(Modifier::DIM);
        let frame = Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD);

        for row in 0..area.height {
            for col in 0..area.width {
                let (x, y) = (i32::from(col), i32::from(row));
                let Some(cell) = buf.cell_mut((area.x + col, area.y + row)) else {
                    continue;
                };
                if !cut.contains_point(x, y) {
                    cell.set_style(dim);
                    continue;
                }

                let top = y == cut.y;
                let bottom = y == cut.bottom() - 1;
                let left = x == cut.x;
                let right = x == cut.right() - 1;
                let symbol = match (top, bottom, left, right) {
                    (true, _, true, _) => "┌",
                    (true, _, _, true) => "┐",
                    (_, true, true, _) => "└",
                    (_, true, _, true) => "┘",
                    (true, _, _, _) | (_, true, _, _) => "─",
                    (_, _, true, _) | (_, _, _, true) => "│",
                    _ => continue,
                };
                cell.set_symbol(symbol);
                cell.set_style(frame);
            }
        }

        if let Some((text, position)) = self.caption {
            let len = text.chars().count() as i32;
            let (x, y) = caption_origin(cut, position, len);
            let fits = x >= 0
                && y >= 0
                && x + len <= i32::from(area.width)
                && y < i32::from(area.height);
            if fits {
                buf.set_string(
                    area.x + x as u16,
                    area.y + y as u16,
                    text,
                    Style::default()
                        .fg(Color::Black)
                        .bg(Color::Yellow)
                        .add_modifier(Modifier::BOLD),
                );
            }
        }
    }
}
