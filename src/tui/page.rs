//! The scrollable job form hosted by the tutorial
//!
//! The form is laid out on a page taller than most terminals. The page keeps
//! its own scroll offset, animates scroll requests a few rows per tick, and
//! answers the tour's measurement questions in viewport-relative cells.

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget, Wrap},
};

use crate::models::SampleJobForm;
use crate::tour::{PageRect, PageSurface, TargetKey, Viewport};

const MARGIN: i32 = 2;
const MIN_INNER_WIDTH: i32 = 20;

pub struct JobFormPage {
    form: SampleJobForm,
    width: i32,
    height: i32,
    scroll_y: i32,
    scroll_goal: Option<i32>,
    anchors: Vec<(TargetKey, PageRect)>,
    notes: PageRect,
    content_width: i32,
    content_height: i32,
}

impl JobFormPage {
    pub fn new(form: SampleJobForm, width: u16, height: u16) -> Self {
        let mut page = Self {
            form,
            width: i32::from(width),
            height: i32::from(height),
            scroll_y: 0,
            scroll_goal: None,
            anchors: Vec::new(),
            notes: PageRect::default(),
            content_width: 0,
            content_height: 0,
        };
        page.relayout();
        page
    }

    /// Resize the viewport. Returns whether anything changed.
    pub fn set_viewport(&mut self, width: u16, height: u16) -> bool {
        let (width, height) = (i32::from(width), i32::from(height));
        if width == self.width && height == self.height {
            return false;
        }
        self.width = width;
        self.height = height;
        self.relayout();
        self.scroll_y = self.scroll_y.clamp(0, self.max_scroll());
        self.scroll_goal = self.scroll_goal.map(|g| g.clamp(0, self.max_scroll()));
        true
    }

    fn relayout(&mut self) {
        let inner = (self.width - 2 * MARGIN).max(MIN_INNER_WIDTH);
        let narrow = inner.min(36);

        self.anchors = vec![
            (TargetKey::JobHeader, PageRect::new(MARGIN, 0, inner, 3)),
            (TargetKey::CustomerField, PageRect::new(MARGIN, 4, inner, 3)),
            (TargetKey::SiteField, PageRect::new(MARGIN, 8, inner, 3)),
            (TargetKey::JobTypeField, PageRect::new(MARGIN, 12, narrow, 3)),
            (TargetKey::DescriptionField, PageRect::new(MARGIN, 16, inner, 7)),
            (TargetKey::SaveButton, PageRect::new(MARGIN, 24, 14, 3)),
            (TargetKey::CancelButton, PageRect::new(MARGIN + 16, 24, 14, 3)),
        ];
        self.notes = PageRect::new(MARGIN, 28, inner, 6);
        // Narrow viewports keep the minimum form width and clip on the right
        self.content_width = self
            .anchors
            .iter()
            .map(|(_, rect)| rect.right())
            .chain([self.notes.right(), self.width])
            .max()
            .unwrap_or(self.width);
        self.content_height = self.notes.bottom();
    }

    /// Where `target` sits on the page
    pub fn anchor(&self, target: TargetKey) -> Option<PageRect> {
        self.anchors
            .iter()
            .find(|(key, _)| *key == target)
            .map(|(_, rect)| *rect)
    }

    pub fn scroll_y(&self) -> i32 {
        self.scroll_y
    }

    pub fn content_width(&self) -> i32 {
        self.content_width
    }

    pub fn content_height(&self) -> i32 {
        self.content_height
    }

    pub fn max_scroll(&self) -> i32 {
        (self.content_height - self.height).max(0)
    }

    pub fn is_scrolling(&self) -> bool {
        self.scroll_goal.is_some()
    }

    /// Manual scroll. Abandons any animation in flight. Returns whether the offset moved.
    pub fn scroll_by(&mut self, delta: i32) -> bool {
        self.scroll_goal = None;
        let next = (self.scroll_y + delta).clamp(0, self.max_scroll());
        let moved = next != self.scroll_y;
        self.scroll_y = next;
        moved
    }

    /// Advance a smooth scroll by one frame. Returns whether the offset moved.
    pub fn animate(&mut self) -> bool {
        let Some(goal) = self.scroll_goal else {
            return false;
        };
        let distance = goal - self.scroll_y;
        if distance == 0 {
            self.scroll_goal = None;
            return false;
        }
        let step = (distance.abs() / 3).max(1) * distance.signum();
        self.scroll_y += step;
        if self.scroll_y == goal {
            self.scroll_goal = None;
        }
        true
    }

    /// Draw the visible slice of the page into `area`
    pub fn render(&self, area: Rect, buf: &mut Buffer) {
        let page_width = u16::try_from(self.content_width.max(0)).unwrap_or(u16::MAX);
        let page_height = u16::try_from(self.content_height.max(0)).unwrap_or(u16::MAX);
        let mut page = Buffer::empty(Rect::new(0, 0, page_width, page_height));
        self.render_page(&mut page);

        for row in 0..area.height {
            let page_row = self.scroll_y + i32::from(row);
            let Ok(page_row) = u16::try_from(page_row) else {
                continue;
            };
            if page_row >= page_height {
                break;
            }
            for col in 0..area.width.min(page_width) {
                let Some(src) = page.cell((col, page_row)) else {
                    continue;
                };
                if let Some(dst) = buf.cell_mut((area.x + col, area.y + row)) {
                    *dst = src.clone();
                }
            }
        }
    }

    fn render_page(&self, buf: &mut Buffer) {
        let label_style = Style::default().fg(Color::Cyan);
        let value_style = Style::default().fg(Color::White);

        if let Some(rect) = self.anchor(TargetKey::JobHeader) {
            Paragraph::new(vec![
                Line::from(Span::styled(
                    "New Job",
                    Style::default()
                        .fg(Color::Cyan)
                        .add_modifier(Modifier::BOLD),
                )),
                Line::from(Span::styled(
                    "Sample job - fields are read-only during the tutorial",
                    Style::default().fg(Color::DarkGray),
                )),
            ])
            .block(Block::default().borders(Borders::BOTTOM))
            .render(to_rect(rect), buf);
        }

        let fields = [
            (TargetKey::CustomerField, " Customer ", self.form.customer.as_str()),
            (TargetKey::SiteField, " Site ", self.form.site.as_str()),
            (TargetKey::JobTypeField, " Job Type ", self.form.job_type.as_str()),
        ];
        for (key, label, value) in fields {
            if let Some(rect) = self.anchor(key) {
                Paragraph::new(Span::styled(value, value_style))
                    .block(
                        Block::default()
                            .title(label)
                            .title_style(label_style)
                            .borders(Borders::ALL),
                    )
                    .render(to_rect(rect), buf);
            }
        }

        if let Some(rect) = self.anchor(TargetKey::DescriptionField) {
            Paragraph::new(Span::styled(self.form.description.as_str(), value_style))
                .wrap(Wrap { trim: true })
                .block(
                    Block::default()
                        .title(" Description ")
                        .title_style(label_style)
                        .borders(Borders::ALL),
                )
                .render(to_rect(rect), buf);
        }

        let buttons = [
            (TargetKey::SaveButton, "Save Job", Color::Green),
            (TargetKey::CancelButton, "Cancel", Color::Red),
        ];
        for (key, caption, color) in buttons {
            if let Some(rect) = self.anchor(key) {
                Paragraph::new(Span::styled(
                    caption,
                    Style::default().fg(color).add_modifier(Modifier::BOLD),
                ))
                .alignment(Alignment::Center)
                .block(
                    Block::default()
                        .borders(Borders::ALL)
                        .border_style(Style::default().fg(color)),
                )
                .render(to_rect(rect), buf);
            }
        }

        Paragraph::new(vec![
            Line::from("Saved jobs appear on the dashboard under Scheduled."),
            Line::from("From there you can quote, assign a crew and invoice"),
            Line::from("when the work is done."),
        ])
        .style(Style::default().fg(Color::DarkGray))
        .block(
            Block::default()
                .title(" What happens next ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::DarkGray)),
        )
        .render(to_rect(self.notes), buf);
    }
}

impl PageSurface for JobFormPage {
    fn viewport(&self) -> Viewport {
        Viewport::new(0, self.scroll_y, self.width, self.height)
    }

    fn bounding_client_rect(&self, target: TargetKey) -> Option<PageRect> {
        self.anchor(target).map(|rect| rect.translate(0, -self.scroll_y))
    }

    fn scroll_to(&mut self, top: i32) {
        self.scroll_goal = Some(top.clamp(0, self.max_scroll()));
    }
}

/// Page rectangles are never negative once laid out
fn to_rect(rect: PageRect) -> Rect {
    let clamp = |v: i32| u16::try_from(v.max(0)).unwrap_or(u16::MAX);
    Rect::new(
        clamp(rect.x),
        clamp(rect.y),
        clamp(rect.width),
        clamp(rect.height),
    )
}
