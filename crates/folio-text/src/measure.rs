#![forbid(unsafe_code)]

//! Font-metric provider contract.
//!
//! Layout asks a [`TextMeasure`] for the pixel width of every unit it places.
//! Implementations must be pure: the same (font, text) always yields the
//! same finite, non-negative width. A backend that cannot measure has broken
//! that contract, and the editor does not try to recover from it.

use crate::font::Font;
use crate::grapheme::display_width;
use crate::width_cache::WidthCache;

/// Measures the advance width of text in a font.
pub trait TextMeasure {
    /// Pixel width of `text` rendered in `font`.
    fn measure(&mut self, font: &Font, text: &str) -> f32;
}

impl<T: TextMeasure + ?Sized> TextMeasure for &mut T {
    #[inline]
    fn measure(&mut self, font: &Font, text: &str) -> f32 {
        (**self).measure(font, text)
    }
}

impl<T: TextMeasure + ?Sized> TextMeasure for Box<T> {
    #[inline]
    fn measure(&mut self, font: &Font, text: &str) -> f32 {
        (**self).measure(font, text)
    }
}

/// Monospace measurer: every display cell advances `advance × font.size`.
///
/// Wide (CJK) clusters take two cells. Useful for headless backends and
/// deterministic tests.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MonospaceMeasure {
    advance: f32,
}

impl MonospaceMeasure {
    /// Typical advance of a monospace face relative to its size.
    pub const DEFAULT_ADVANCE: f32 = 0.6;

    /// Create a measurer with the given per-cell advance ratio.
    #[must_use]
    pub const fn new(advance: f32) -> Self {
        Self { advance }
    }

    /// Per-cell advance ratio.
    #[must_use]
    pub const fn advance(&self) -> f32 {
        self.advance
    }
}

impl Default for MonospaceMeasure {
    fn default() -> Self {
        Self::new(Self::DEFAULT_ADVANCE)
    }
}

impl TextMeasure for MonospaceMeasure {
    fn measure(&mut self, font: &Font, text: &str) -> f32 {
        display_width(text) as f32 * font.size * self.advance
    }
}

/// Wraps a measurer with an LRU [`WidthCache`].
#[derive(Debug)]
pub struct CachedMeasure<M> {
    inner: M,
    cache: WidthCache,
}

impl<M: TextMeasure> CachedMeasure<M> {
    /// Wrap `inner` with a default-capacity cache.
    #[must_use]
    pub fn new(inner: M) -> Self {
        Self::with_cache(inner, WidthCache::default())
    }

    /// Wrap `inner` with the given cache.
    #[must_use]
    pub fn with_cache(inner: M, cache: WidthCache) -> Self {
        Self { inner, cache }
    }

    /// The cache, for statistics.
    #[must_use]
    pub fn cache(&self) -> &WidthCache {
        &self.cache
    }

    /// The wrapped measurer.
    #[must_use]
    pub fn inner(&self) -> &M {
        &self.inner
    }

    /// Unwrap into the inner measurer, dropping the cache.
    #[must_use]
    pub fn into_inner(self) -> M {
        self.inner
    }
}

impl<M: TextMeasure> TextMeasure for CachedMeasure<M> {
    fn measure(&mut self, font: &Font, text: &str) -> f32 {
        let inner = &mut self.inner;
        self.cache
            .width_or_insert(font, text, |font, text| inner.measure(font, text))
    }
}
