#![forbid(unsafe_code)]

//! Vertical scroll state.
//!
//! `view_y` is the document y shown at the top edge of the viewport. It
//! always stays in `[0, max_scroll]`, where `max_scroll` is the content
//! height minus the viewport height (never negative).

/// A vertically scrolling window onto the page stack.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    view_y: f32,
    width: f32,
    height: f32,
}

impl Viewport {
    /// A viewport of the given size scrolled to the top.
    #[must_use]
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            view_y: 0.0,
            width,
            height,
        }
    }

    /// Scroll offset.
    #[inline]
    #[must_use]
    pub fn view_y(&self) -> f32 {
        self.view_y
    }

    /// Visible width.
    #[inline]
    #[must_use]
    pub fn width(&self) -> f32 {
        self.width
    }

    /// Visible height.
    #[inline]
    #[must_use]
    pub fn height(&self) -> f32 {
        self.height
    }

    /// Largest scroll offset for content of the given height.
    #[must_use]
    pub fn max_scroll(&self, content_height: f32) -> f32 {
        (content_height - self.height).max(0.0)
    }

    /// Scroll by `delta` and clamp.
    pub fn scroll(&mut self, delta: f32, content_height: f32) {
        self.view_y = clamp(self.view_y + delta, self.max_scroll(content_height));
    }

    /// Adjust so a caret with its baseline at document y `baseline` stays
    /// at least `margin` away from the top and bottom edges.
    pub fn follow(&mut self, baseline: f32, margin: f32, content_height: f32) {
        if baseline < self.view_y + margin {
            self.view_y = baseline - margin;
        }
        if baseline > self.view_y + self.height - margin {
            self.view_y = baseline - self.height + margin;
        }
        self.view_y = clamp(self.view_y, self.max_scroll(content_height));
    }

    /// Change the visible size and re-clamp.
    pub fn resize(&mut self, width: f32, height: f32, content_height: f32) {
        self.width = width;
        self.height = height;
        self.view_y = clamp(self.view_y, self.max_scroll(content_height));
    }
}

fn clamp(view_y: f32, max: f32) -> f32 {
    view_y.max(0.0).min(max)
}
