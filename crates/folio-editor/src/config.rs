#![forbid(unsafe_code)]

//! Editor configuration.
//!
//! [`EditorConfig`] is validated once, when the editor is created. After
//! that every operation is infallible.
//!
//! # Example
//! ```
//! use folio_editor::EditorConfig;
//! use folio_text::Font;
//!
//! let config = EditorConfig::default()
//!     .with_font(Font::new("courier", 20.0))
//!     .with_line_spacing(1.5)
//!     .with_viewport(800.0, 600.0);
//! assert!(config.validate().is_ok());
//! ```

use std::fmt;

use folio_layout::PageGeometry;
use folio_text::{DEFAULT_LINE_SPACING, Font, FontMetrics};

/// Reasons a configuration is rejected.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// Page width or height is not a positive finite number.
    PageSize { width: f32, height: f32 },
    /// Padding leaves no room for content.
    NoContentArea { padding: f32 },
    /// Gap or margin is negative or not finite.
    Spacing { name: &'static str, value: f32 },
    /// Font size is not a positive finite number.
    FontSize(f32),
    /// Line spacing below 1.0 would overlap rows.
    LineSpacing(f32),
    /// Viewport dimensions are negative or not finite.
    Viewport { width: f32, height: f32 },
    /// Caret width is negative or not finite.
    CaretWidth(f32),
    /// Configuration text could not be parsed.
    Parse(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::PageSize { width, height } => {
                write!(f, "page size must be positive, got {width}x{height}")
            }
            Self::NoContentArea { padding } => {
                write!(f, "padding {padding} leaves no content area")
            }
            Self::Spacing { name, value } => {
                write!(f, "{name} must be a non-negative number, got {value}")
            }
            Self::FontSize(size) => write!(f, "font size must be positive, got {size}"),
            Self::LineSpacing(spacing) => {
                write!(f, "line spacing must be at least 1.0, got {spacing}")
            }
            Self::Viewport { width, height } => {
                write!(f, "viewport must be non-negative, got {width}x{height}")
            }
            Self::CaretWidth(width) => {
                write!(f, "caret width must be non-negative, got {width}")
            }
            Self::Parse(message) => write!(f, "invalid configuration: {message}"),
        }
    }
}

impl std::error::Error for ConfigError {}

/// Configuration for an [`Editor`](crate::Editor).
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct EditorConfig {
    /// Font for all text.
    pub font: Font,
    /// Baseline distance as a multiple of the font height.
    pub line_spacing: f32,
    /// Page size, padding, and stacking.
    pub page: PageGeometry,
    /// Visible width in pixels.
    pub viewport_width: f32,
    /// Visible height in pixels.
    pub viewport_height: f32,
    /// Width of the caret bar.
    pub caret_width: f32,
    /// Draw baselines, midlines, and character centers.
    pub debug_overlay: bool,
}

impl Default for EditorConfig {
    fn default() -> Self {
        let page = PageGeometry::default();
        Self {
            font: Font::default(),
            line_spacing: DEFAULT_LINE_SPACING,
            viewport_width: page.width + 2.0 * page.margin,
            viewport_height: page.height + 2.0 * page.margin,
            page,
            caret_width: 3.0,
            debug_overlay: false,
        }
    }
}

impl EditorConfig {
    /// Set the font.
    #[must_use]
    pub fn with_font(mut self, font: Font) -> Self {
        self.font = font;
        self
    }

    /// Set the line spacing multiplier.
    #[must_use]
    pub fn with_line_spacing(mut self, spacing: f32) -> Self {
        self.line_spacing = spacing;
        self
    }

    /// Set the page geometry.
    #[must_use]
    pub fn with_page(mut self, page: PageGeometry) -> Self {
        self.page = page;
        self
    }

    /// Set the viewport size.
    #[must_use]
    pub fn with_viewport(mut self, width: f32, height: f32) -> Self {
        self.viewport_width = width;
        self.viewport_height = height;
        self
    }

    /// Set the caret width.
    #[must_use]
    pub fn with_caret_width(mut self, width: f32) -> Self {
        self.caret_width = width;
        self
    }

    /// Enable or disable the debug overlay.
    #[must_use]
    pub fn with_debug_overlay(mut self, enabled: bool) -> Self {
        self.debug_overlay = enabled;
        self
    }

    /// Vertical metrics for the configured font.
    #[must_use]
    pub fn metrics(&self) -> FontMetrics {
        FontMetrics::new(&self.font, self.line_spacing)
    }

    /// Check every field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let page = &self.page;
        if !positive(page.width) || !positive(page.height) {
            return Err(ConfigError::PageSize {
                width: page.width,
                height: page.height,
            });
        }
        if !page.padding.is_finite()
            || page.padding < 0.0
            || page.content_width() <= 0.0
            || page.content_height() <= 0.0
        {
            return Err(ConfigError::NoContentArea {
                padding: page.padding,
            });
        }
        for (name, value) in [("gap", page.gap), ("margin", page.margin)] {
            if !non_negative(value) {
                return Err(ConfigError::Spacing { name, value });
            }
        }
        if !positive(self.font.size) {
            return Err(ConfigError::FontSize(self.font.size));
        }
        if !self.line_spacing.is_finite() || self.line_spacing < 1.0 {
            return Err(ConfigError::LineSpacing(self.line_spacing));
        }
        if !non_negative(self.viewport_width) || !non_negative(self.viewport_height) {
            return Err(ConfigError::Viewport {
                width: self.viewport_width,
                height: self.viewport_height,
            });
        }
        if !non_negative(self.caret_width) {
            return Err(ConfigError::CaretWidth(self.caret_width));
        }
        Ok(())
    }

    /// Parse and validate a JSON configuration. Missing fields take their
    /// default values.
    #[cfg(feature = "serde")]
    pub fn from_json_str(text: &str) -> Result<Self, ConfigError> {
        let config: Self =
            serde_json::from_str(text).map_err(|e| ConfigError::Parse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize to pretty JSON.
    #[cfg(feature = "serde")]
    pub fn to_json_string(&self) -> Result<String, ConfigError> {
        serde_json::to_string_pretty(self).map_err(|e| ConfigError::Parse(e.to_string()))
    }
}

fn positive(value: f32) -> bool {
    value.is_finite() && value > 0.0
}

fn non_negative(value: f32) -> bool {
    value.is_finite() && value >= 0.0
}
