#![forbid(unsafe_code)]

//! One layout unit.

use folio_core::geometry::Rect;
use folio_text::{Font, FontMetrics, LINE_BREAK, TextMeasure};

/// A single grapheme-sized unit of the document.
///
/// `width` is fixed at construction. `x` and `baseline` are written by
/// layout and are only meaningful after the owning [`Layout`](crate::Layout)
/// has been built. `select` mirrors the editor's selection range and is
/// recomputed whenever anchor or focus moves.
#[derive(Debug, Clone, PartialEq)]
pub struct Character {
    value: String,
    width: f32,
    x: f32,
    baseline: f32,
    select: bool,
}

impl Character {
    /// Create a unit with a pre-measured width.
    #[must_use]
    pub fn new(value: impl Into<String>, width: f32) -> Self {
        debug_assert!(
            width.is_finite() && width >= 0.0,
            "measured width must be finite and non-negative, got {width}"
        );
        Self {
            value: value.into(),
            width,
            x: 0.0,
            baseline: 0.0,
            select: false,
        }
    }

    /// Create a unit and measure it with `measure`.
    ///
    /// Line breaks are measured as a space so a selected break still has a
    /// visible highlight.
    pub fn measured<M: TextMeasure + ?Sized>(value: &str, font: &Font, measure: &mut M) -> Self {
        let sample = if value == LINE_BREAK { " " } else { value };
        let width = measure.measure(font, sample);
        Self::new(value, width)
    }

    /// A line-break marker.
    pub fn line_break(width: f32) -> Self {
        Self::new(LINE_BREAK, width)
    }

    /// The grapheme this unit stands for.
    #[inline]
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Measured width in pixels.
    #[inline]
    #[must_use]
    pub fn width(&self) -> f32 {
        self.width
    }

    /// Left edge within the owning row.
    #[inline]
    #[must_use]
    pub fn x(&self) -> f32 {
        self.x
    }

    /// Baseline inherited from the owning row.
    #[inline]
    #[must_use]
    pub fn baseline(&self) -> f32 {
        self.baseline
    }

    /// Right edge within the owning row.
    #[inline]
    #[must_use]
    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    /// Horizontal center.
    #[inline]
    #[must_use]
    pub fn center(&self) -> f32 {
        self.x + self.width * 0.5
    }

    /// Whether this unit is a line-break marker.
    #[inline]
    #[must_use]
    pub fn is_line_break(&self) -> bool {
        self.value == LINE_BREAK
    }

    /// Whether this unit lies inside the current selection.
    #[inline]
    #[must_use]
    pub fn is_selected(&self) -> bool {
        self.select
    }

    /// Set the selection flag.
    #[inline]
    pub fn set_selected(&mut self, select: bool) {
        self.select = select;
    }

    /// Glyph box: from `height` above the baseline down to the baseline.
    #[must_use]
    pub fn bound(&self, metrics: &FontMetrics) -> Rect {
        Rect::new(
            self.x,
            self.baseline - metrics.height,
            self.width,
            metrics.height,
        )
    }

    pub(crate) fn place(&mut self, x: f32, baseline: f32) {
        self.x = x;
        self.baseline = baseline;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_text::MonospaceMeasure;

    #[test]
    fn new_is_unplaced_and_unselected() {
        let c = Character::new("a", 12.0);
        assert_eq!(c.value(), "a");
        assert_eq!(c.width(), 12.0);
        assert_eq!(c.x(), 0.0);
        assert_eq!(c.baseline(), 0.0);
        assert!(!c.is_selected());
        assert!(!c.is_line_break());
    }

    #[test]
    fn place_sets_geometry() {
        let mut c = Character::new("a", 10.0);
        c.place(30.0, 24.0);
        assert_eq!(c.x(), 30.0);
        assert_eq!(c.right(), 40.0);
        assert_eq!(c.center(), 35.0);
        assert_eq!(c.baseline(), 24.0);
    }

    #[test]
    fn bound_spans_font_height() {
        let mut c = Character::new("a", 10.0);
        c.place(5.0, 40.0);
        let metrics = FontMetrics::new(&Font::new("mono", 20.0), 1.5);
        assert_eq!(c.bound(&metrics), Rect::new(5.0, 20.0, 10.0, 20.0));
    }

    #[test]
    fn measured_uses_font() {
        let mut m = MonospaceMeasure::new(0.5);
        let c = Character::measured("测", &Font::new("mono", 20.0), &mut m);
        assert_eq!(c.width(), 20.0);
    }

    #[test]
    fn line_break_measures_as_space() {
        let mut m = MonospaceMeasure::new(0.5);
        let c = Character::measured("\n", &Font::new("mono", 20.0), &mut m);
        assert!(c.is_line_break());
        assert_eq!(c.width(), 10.0);
    }

    #[test]
    fn selection_flag_toggles() {
        let mut c = Character::line_break(0.0);
        c.set_selected(true);
        assert!(c.is_selected());
        c.set_selected(false);
        assert!(!c.is_selected());
    }
}
