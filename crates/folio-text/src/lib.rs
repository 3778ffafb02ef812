#![forbid(unsafe_code)]

//! Text primitives for folio.
//!
//! This crate provides the measurement side of layout:
//! - [`Font`] / [`FontMetrics`] - font identity and vertical metrics
//! - [`TextMeasure`] - the font-metric provider contract
//! - [`MonospaceMeasure`] - deterministic cell-based measurer
//! - [`WidthCache`] / [`CachedMeasure`] - LRU cache keyed by (font, text)
//! - [`units`] - split text into layout units (grapheme clusters)
//!
//! # Example
//! ```
//! use folio_text::{CachedMeasure, Font, MonospaceMeasure, TextMeasure};
//!
//! let font = Font::new("courier", 20.0);
//! let mut measure = CachedMeasure::new(MonospaceMeasure::new(0.5));
//!
//! assert_eq!(measure.measure(&font, "a"), 10.0);
//! assert_eq!(measure.measure(&font, "测"), 20.0);
//! assert_eq!(measure.measure(&font, "a"), 10.0);
//! assert_eq!(measure.cache().stats().hits, 1);
//! ```

pub mod font;
pub mod grapheme;
pub mod measure;
pub mod width_cache;

pub use font::{DEFAULT_LINE_SPACING, Font, FontMetrics};
pub use grapheme::{LINE_BREAK, display_width, grapheme_count, is_line_break, units};
pub use measure::{CachedMeasure, MonospaceMeasure, TextMeasure};
pub use width_cache::{CacheStats, DEFAULT_CACHE_CAPACITY, WidthCache};
