#![forbid(unsafe_code)]

//! Folio public facade crate.
//!
//! Re-exports the editing controller and the types an application needs to
//! drive it, plus a top-level error type and a prelude.
//!
//! # Example
//! ```
//! use folio::prelude::*;
//!
//! let mut editor = Editor::new(EditorConfig::default(), MonospaceMeasure::default())?;
//! editor.insert("hello\nworld");
//!
//! let mut canvas = RecordingRenderer::new();
//! editor.render(&mut canvas);
//! assert_eq!(canvas.text(), "helloworld");
//! # Ok::<(), folio::Error>(())
//! ```

use std::fmt;

#[cfg(feature = "logging")]
pub mod logging;

// --- Core re-exports -------------------------------------------------------

pub use folio_core::{
    Command, InputEvent, KeyCode, KeyEvent, KeyEventKind, Modifiers, MouseButton, MouseEvent,
    MouseEventKind, Point, Rect,
};

// --- Text re-exports -------------------------------------------------------

pub use folio_text::{CachedMeasure, Font, FontMetrics, MonospaceMeasure, TextMeasure, WidthCache};

// --- Layout re-exports -----------------------------------------------------

pub use folio_layout::{Character, Layout, Location, Page, PageGeometry, Row, RowLocation};

// --- Render re-exports -----------------------------------------------------

pub use folio_render::{Color, DrawOp, RecordingRenderer, Renderer};

// --- Editor re-exports -----------------------------------------------------

pub use folio_editor::{
    Commands, ConfigError, Document, Editor, EditorConfig, InputAdapter, Viewport,
};

// --- Errors ---------------------------------------------------------------

/// Top-level error type for folio apps.
#[derive(Debug)]
pub enum Error {
    /// I/O failure while loading configuration or writing output.
    Io(std::io::Error),
    /// Invalid or unparsable configuration.
    Config(ConfigError),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(err) => write!(f, "{err}"),
            Self::Config(err) => write!(f, "invalid configuration: {err}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            Self::Config(err) => Some(err),
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<ConfigError> for Error {
    fn from(err: ConfigError) -> Self {
        Self::Config(err)
    }
}

/// Standard result type for folio APIs.
pub type Result<T> = std::result::Result<T, Error>;

/// Read and validate a JSON editor configuration file.
///
/// Missing fields take their default values.
#[cfg(feature = "serde")]
pub fn load_config(path: impl AsRef<std::path::Path>) -> Result<EditorConfig> {
    let path = path.as_ref();
    let text = std::fs::read_to_string(path)?;
    let config = EditorConfig::from_json_str(&text)?;
    tracing::info!(path = %path.display(), "loaded editor config");
    Ok(config)
}

// --- Prelude --------------------------------------------------------------

pub mod prelude {
    pub use crate::{
        Color, Command, Editor, EditorConfig, Error, Font, InputAdapter, InputEvent, Location,
        MonospaceMeasure, PageGeometry, Rect, RecordingRenderer, Renderer, Result, TextMeasure,
    };

    pub use crate::{core, editor, layout, render, text};
}

pub use folio_core as core;
pub use folio_editor as editor;
pub use folio_layout as layout;
pub use folio_render as render;
pub use folio_text as text;
