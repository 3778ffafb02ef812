#![forbid(unsafe_code)]

//! Document layout for folio.
//!
//! This crate turns a flat run of [`Character`]s into pages of wrapped rows
//! and maps between the two ways of naming a caret position:
//!
//! - [`Layout`] - the page stack, rebuilt from scratch after every edit
//! - [`Page`] - a fixed-size box of rows; spills into a successor when full
//! - [`Row`] - one wrapped line sharing a baseline
//! - [`Location`] - (page, row, offset) address of a caret stop
//! - [`nearest`] - the nearest-match rule shared by hit testing and
//!   vertical navigation
//!
//! # Example
//! ```
//! use folio_layout::{Character, Layout, Location, PageGeometry};
//! use folio_text::{Font, FontMetrics};
//!
//! let font = Font::new("mono", 20.0);
//! let metrics = FontMetrics::new(&font, 1.5);
//! let mut doc: Vec<Character> = "ab\ncd"
//!     .chars()
//!     .map(|c| Character::new(c.to_string(), 10.0))
//!     .collect();
//!
//! let layout = Layout::build(&mut doc, PageGeometry::default(), metrics);
//! assert_eq!(layout.page_count(), 1);
//! assert_eq!(layout.page(0).rows().len(), 2);
//! assert_eq!(layout.location_from_offset(3), Location::new(0, 1, 0));
//! assert_eq!(layout.offset_from_location(Location::new(0, 1, 2)), 5);
//! ```

pub mod character;
pub mod engine;
pub mod location;
pub mod page;
pub mod row;
pub mod util;

pub use character::Character;
pub use engine::{Layout, PageGeometry};
pub use location::{Location, RowLocation};
pub use page::Page;
pub use row::Row;
pub use util::nearest;
