#![forbid(unsafe_code)]

//! Geometric primitives.
//!
//! All coordinates are logical pixels with the origin at the top-left and
//! `y` growing downwards, matching canvas conventions.

/// A point in pixel space.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    /// Create a new point.
    #[inline]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Return this point shifted by `(dx, dy)`.
    #[inline]
    #[must_use]
    pub fn offset(self, dx: f32, dy: f32) -> Self {
        Self::new(self.x + dx, self.y + dy)
    }
}

/// An axis-aligned rectangle used for page bounds, highlights, and hit testing.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rect {
    /// Left edge.
    pub x: f32,
    /// Top edge.
    pub y: f32,
    /// Width in pixels.
    pub width: f32,
    /// Height in pixels.
    pub height: f32,
}

impl Rect {
    /// Create a new rectangle.
    #[inline]
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Create a rectangle at the origin with the given size.
    #[inline]
    pub const fn from_size(width: f32, height: f32) -> Self {
        Self::new(0.0, 0.0, width, height)
    }

    /// Create a rectangle from its four edges.
    ///
    /// Edges given in the wrong order produce a zero-sized rectangle.
    #[inline]
    pub fn from_edges(left: f32, top: f32, right: f32, bottom: f32) -> Self {
        Self::new(left, top, (right - left).max(0.0), (bottom - top).max(0.0))
    }

    /// Left edge. Alias for `self.x`.
    #[inline]
    pub const fn left(&self) -> f32 {
        self.x
    }

    /// Top edge. Alias for `self.y`.
    #[inline]
    pub const fn top(&self) -> f32 {
        self.y
    }

    /// Right edge.
    #[inline]
    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    /// Bottom edge.
    #[inline]
    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    /// Horizontal center.
    #[inline]
    pub fn center_x(&self) -> f32 {
        self.x + self.width * 0.5
    }

    /// Check if the rectangle has zero area.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }

    /// Check if a point lies inside the rectangle. All four edges are inclusive.
    #[inline]
    pub fn contains(&self, x: f32, y: f32) -> bool {
        x >= self.x && x <= self.right() && y >= self.y && y <= self.bottom()
    }

    /// Return this rectangle moved by `(dx, dy)`.
    #[inline]
    #[must_use]
    pub fn translate(&self, dx: f32, dy: f32) -> Rect {
        Rect::new(self.x + dx, self.y + dy, self.width, self.height)
    }

    /// Shrink the rectangle by `amount` on every side.
    ///
    /// Never produces a negative size.
    #[must_use]
    pub fn inset(&self, amount: f32) -> Rect {
        Rect::new(
            self.x + amount,
            self.y + amount,
            (self.width - amount * 2.0).max(0.0),
            (self.height - amount * 2.0).max(0.0),
        )
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    // Whole-pixel values keep the arithmetic exact.
    fn rect() -> impl Strategy<Value = Rect> {
        (-500i16..500, -500i16..500, 0i16..400, 0i16..400)
            .prop_map(|(x, y, w, h)| Rect::new(x.into(), y.into(), w.into(), h.into()))
    }

    proptest! {
        #[test]
        fn translate_moves_containment(
            r in rect(),
            dx in -300i16..300,
            dy in -300i16..300,
            px in -900i16..900,
            py in -900i16..900,
        ) {
            let (dx, dy, px, py) = (f32::from(dx), f32::from(dy), f32::from(px), f32::from(py));
            let moved = r.translate(dx, dy);
            prop_assert_eq!((moved.width, moved.height), (r.width, r.height));
            prop_assert_eq!(r.contains(px, py), moved.contains(px + dx, py + dy));
        }

        #[test]
        fn inset_stays_inside(r in rect(), amount in 0i16..100) {
            let amount = f32::from(amount);
            let inner = r.inset(amount);
            prop_assert!(inner.width >= 0.0 && inner.height >= 0.0);
            if amount * 2.0 <= r.width.min(r.height) {
                prop_assert!(r.contains(inner.left(), inner.top()));
                prop_assert!(r.contains(inner.right(), inner.bottom()));
            }
        }
    }
}
