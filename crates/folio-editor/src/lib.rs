#![forbid(unsafe_code)]

//! The folio editing controller.
//!
//! - [`Editor`] - document, layout, caret, selection and viewport in one
//!   application-owned value
//! - [`EditorConfig`] - validated construction parameters
//! - [`InputAdapter`] - host events to [`Command`](folio_core::Command)s
//!
//! # Example
//! ```
//! use folio_editor::{Editor, EditorConfig};
//! use folio_text::{Font, MonospaceMeasure};
//!
//! let config = EditorConfig::default().with_font(Font::new("mono", 20.0));
//! let mut editor = Editor::new(config, MonospaceMeasure::new(0.5)).unwrap();
//!
//! editor.insert("ab\ncd");
//! editor.caret_move_up();
//! assert_eq!(editor.focus(), 2);
//!
//! editor.anchor_capture();
//! editor.seek_to_begin();
//! assert_eq!(editor.selection(), "ab");
//! ```

pub mod caret;
pub mod config;
pub mod document;
pub mod editor;
pub mod input;
pub mod paint;
pub mod viewport;

pub use caret::Caret;
pub use config::{ConfigError, EditorConfig};
pub use document::Document;
pub use editor::{CARET_DESCENT, Editor};
pub use input::{Commands, InputAdapter};
pub use viewport::Viewport;
