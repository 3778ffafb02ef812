#![forbid(unsafe_code)]

//! Font identity and vertical metrics.

use std::hash::{Hash, Hasher};

/// Default ratio of line height to font height.
pub const DEFAULT_LINE_SPACING: f32 = 1.2;

/// A font: family name plus pixel size.
///
/// The size doubles as the font height used for baselines and hit bands.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Font {
    /// Family name, e.g. `"courier"`.
    pub family: String,
    /// Pixel size.
    pub size: f32,
}

impl Font {
    /// Create a new font.
    #[must_use]
    pub fn new(family: impl Into<String>, size: f32) -> Self {
        Self {
            family: family.into(),
            size,
        }
    }

    /// Font height in pixels.
    #[inline]
    #[must_use]
    pub fn height(&self) -> f32 {
        self.size
    }

    /// CSS shorthand for canvas backends, e.g. `"30px courier"`.
    #[must_use]
    pub fn css(&self) -> String {
        format!("{}px {}", self.size, self.family)
    }
}

impl Default for Font {
    fn default() -> Self {
        Self::new("courier", 30.0)
    }
}

// Sizes are compared bitwise so equal fonts always hash equal.
impl PartialEq for Font {
    fn eq(&self, other: &Self) -> bool {
        self.family == other.family && self.size.to_bits() == other.size.to_bits()
    }
}

impl Eq for Font {}

impl Hash for Font {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.family.hash(state);
        self.size.to_bits().hash(state);
    }
}

/// Vertical metrics derived from a font.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FontMetrics {
    /// Glyph height (ascent from baseline).
    pub height: f32,
    /// Distance between successive baselines.
    pub line_height: f32,
}

impl FontMetrics {
    /// Derive metrics for `font` with the given line spacing multiplier.
    #[must_use]
    pub fn new(font: &Font, line_spacing: f32) -> Self {
        Self {
            height: font.height(),
            line_height: font.height() * line_spacing,
        }
    }

    /// Offset from the baseline up to the row's midline.
    #[inline]
    #[must_use]
    pub fn midline_offset(&self) -> f32 {
        self.height * 0.5
    }
}

impl From<&Font> for FontMetrics {
    fn from(font: &Font) -> Self {
        Self::new(font, DEFAULT_LINE_SPACING)
    }
}
