#![forbid(unsafe_code)]

//! Drawing backend contract.

use folio_core::geometry::Rect;
use folio_text::{Font, TextMeasure};

use crate::color::Color;

/// A 2-D drawing surface the editor paints onto.
///
/// Coordinates are in pixels and pass through the current translation.
/// `save`/`restore` scope translations; a `restore` without a matching
/// `save` is ignored.
pub trait Renderer: TextMeasure {
    /// Fill `rect` with `color`.
    fn draw_rectangle(&mut self, rect: Rect, color: Color);

    /// Draw `text` with its left edge at `x`, sitting on `baseline`.
    fn draw_text(&mut self, font: &Font, text: &str, x: f32, baseline: f32, color: Color);

    /// Shift subsequent drawing by `(dx, dy)`.
    fn translate(&mut self, dx: f32, dy: f32);

    /// Push the current translation.
    fn save(&mut self);

    /// Pop the translation pushed by the matching [`save`](Renderer::save).
    fn restore(&mut self);

    /// Run `f` between a `save` and a `restore`.
    fn scoped<F>(&mut self, f: F)
    where
        Self: Sized,
        F: FnOnce(&mut Self),
    {
        self.save();
        f(self);
        self.restore();
    }
}

impl<R: Renderer + ?Sized> Renderer for &mut R {
    #[inline]
    fn draw_rectangle(&mut self, rect: Rect, color: Color) {
        (**self).draw_rectangle(rect, color);
    }

    #[inline]
    fn draw_text(&mut self, font: &Font, text: &str, x: f32, baseline: f32, color: Color) {
        (**self).draw_text(font, text, x, baseline, color);
    }

    #[inline]
    fn translate(&mut self, dx: f32, dy: f32) {
        (**self).translate(dx, dy);
    }

    #[inline]
    fn save(&mut self) {
        (**self).save();
    }

    #[inline]
    fn restore(&mut self) {
        (**self).restore();
    }
}
