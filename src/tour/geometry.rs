//! Highlight geometry
//!
//! Two coordinate spaces are in play. Client coordinates are relative to the
//! top-left of the visible viewport; page coordinates are relative to the top
//! of the scrollable content. `page = client + scroll`.

/// An axis-aligned rectangle. Which space it lives in depends on where it came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PageRect {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl PageRect {
    pub const fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub const fn right(&self) -> i32 {
        self.x + self.width
    }

    pub const fn bottom(&self) -> i32 {
        self.y + self.height
    }

    pub const fn center_y(&self) -> i32 {
        self.y + self.height / 2
    }

    /// Grow outward by `padding` on every side
    pub const fn inflate(&self, padding: i32) -> Self {
        Self::new(
            self.x - padding,
            self.y - padding,
            self.width + 2 * padding,
            self.height + 2 * padding,
        )
    }

    pub const fn translate(&self, dx: i32, dy: i32) -> Self {
        Self::new(self.x + dx, self.y + dy, self.width, self.height)
    }

    /// Whether `other` lies entirely inside `self`
    pub const fn contains_rect(&self, other: &PageRect) -> bool {
        other.x >= self.x
            && other.y >= self.y
            && other.right() <= self.right()
            && other.bottom() <= self.bottom()
    }

    pub const fn contains_point(&self, x: i32, y: i32) -> bool {
        x >= self.x && x < self.right() && y >= self.y && y < self.bottom()
    }
}

/// The visible window onto the page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Viewport {
    pub scroll_x: i32,
    pub scroll_y: i32,
    pub width: i32,
    pub height: i32,
}

impl Viewport {
    pub const fn new(scroll_x: i32, scroll_y: i32, width: i32, height: i32) -> Self {
        Self {
            scroll_x,
            scroll_y,
            width,
            height,
        }
    }

    pub const fn to_page(&self, client: PageRect) -> PageRect {
        client.translate(self.scroll_x, self.scroll_y)
    }

    pub const fn to_client(&self, page: PageRect) -> PageRect {
        page.translate(-self.scroll_x, -self.scroll_y)
    }

    /// The part of the viewport not covered by the reserved bottom band
    pub fn comfort_zone(&self, reserved_bottom: i32) -> PageRect {
        PageRect::new(0, 0, self.width, (self.height - reserved_bottom).max(0))
    }
}

/// Overlay rectangle in page coordinates for a target measured in client coordinates
pub fn overlay_rect(client: PageRect, viewport: &Viewport, padding: i32) -> PageRect {
    viewport.to_page(client).inflate(padding)
}

/// Whether the target sits fully inside the viewport, clear of the reserved band
pub fn is_comfortably_visible(client: PageRect, viewport: &Viewport, reserved_bottom: i32) -> bool {
    viewport.comfort_zone(reserved_bottom).contains_rect(&client)
}

/// Scroll offset that puts the target's vertical centre in the middle of the viewport
pub fn centered_scroll_top(client: PageRect, viewport: &Viewport) -> i32 {
    let page = viewport.to_page(client);
    (page.center_y() - viewport.height / 2).max(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inflate() {
        let rect = PageRect::new(10, 20, 100, 30);
        assert_eq!(rect.inflate(8), PageRect::new(2, 12, 116, 46));
        assert_eq!(rect.inflate(0), rect);
    }

    #[test]
    fn test_overlay_uses_page_coordinates() {
        let viewport = Viewport::new(0, 250, 800, 600);
        let client = PageRect::new(40, 100, 300, 48);
        let overlay = overlay_rect(client, &viewport, 8);
        assert_eq!(overlay, PageRect::new(32, 342, 316, 64));

        // Rendering subtracts the scroll offset at the time of drawing
        let later = Viewport::new(0, 300, 800, 600);
        assert_eq!(later.to_client(overlay), PageRect::new(32, 42, 316, 64));
    }

    #[test]
    fn test_comfortably_visible() {
        let viewport = Viewport::new(0, 0, 80, 40);
        assert!(is_comfortably_visible(PageRect::new(2, 5, 70, 3), &viewport, 11));
        // Overlaps the reserved band
        assert!(!is_comfortably_visible(PageRect::new(2, 28, 70, 3), &viewport, 11));
        // Partly above the viewport
        assert!(!is_comfortably_visible(PageRect::new(2, -1, 70, 3), &viewport, 11));
        // Exactly touching the band edge still fits
        assert!(is_comfortably_visible(PageRect::new(2, 26, 70, 3), &viewport, 11));
    }

    #[test]
    fn test_reserved_band_larger_than_viewport() {
        let viewport = Viewport::new(0, 0, 80, 8);
        assert_eq!(viewport.comfort_zone(11).height, 0);
        assert!(!is_comfortably_visible(PageRect::new(0, 0, 10, 1), &viewport, 11));
    }

    #[test]
    fn test_centered_scroll_top() {
        let viewport = Viewport::new(0, 0, 80, 30);
        // Target at page rows 40..44, centre 42
        assert_eq!(centered_scroll_top(PageRect::new(0, 40, 10, 4), &viewport), 27);

        // Measured after scrolling, same page position
        let scrolled = Viewport::new(0, 20, 80, 30);
        assert_eq!(centered_scroll_top(PageRect::new(0, 20, 10, 4), &scrolled), 27);

        // Never scrolls above the top of the page
        assert_eq!(centered_scroll_top(PageRect::new(0, 2, 10, 2), &viewport), 0);
    }

    #[test]
    fn test_contains_point() {
        let rect = PageRect::new(1, 1, 3, 2);
        assert!(rect.contains_point(1, 1));
        assert!(rect.contains_point(3, 2));
        assert!(!rect.contains_point(4, 1));
        assert!(!rect.contains_point(1, 3));
    }
}
