#![forbid(unsafe_code)]

//! Rendering for folio.
//!
//! The editor paints through the [`Renderer`] trait: filled rectangles,
//! text runs on a baseline, and a translation stack. Any backend that can
//! also measure text (see [`folio_text::TextMeasure`]) can host the editor.
//!
//! [`RecordingRenderer`] is a headless backend that records every call in
//! absolute coordinates, for tests and batch tools.

pub mod backend;
pub mod color;
pub mod recording;

pub use backend::Renderer;
pub use color::Color;
pub use recording::{DrawOp, RecordingRenderer};
