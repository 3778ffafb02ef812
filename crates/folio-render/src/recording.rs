#![forbid(unsafe_code)]

//! Headless recording backend.
//!
//! [`RecordingRenderer`] keeps every draw call as a [`DrawOp`] with the
//! translation already applied, so assertions can be written against the
//! final on-screen positions.

use folio_core::geometry::{Point, Rect};
use folio_text::{Font, MonospaceMeasure, TextMeasure};
use smallvec::SmallVec;

use crate::backend::Renderer;
use crate::color::Color;

/// One recorded draw call in absolute coordinates.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawOp {
    /// A filled rectangle.
    Rectangle { rect: Rect, color: Color },
    /// A text run.
    Text {
        font: Font,
        text: String,
        x: f32,
        baseline: f32,
        color: Color,
    },
}

impl DrawOp {
    /// Paint color of the call.
    #[must_use]
    pub fn color(&self) -> Color {
        match self {
            Self::Rectangle { color, .. } | Self::Text { color, .. } => *color,
        }
    }
}

/// A [`Renderer`] that records calls instead of rasterizing them.
///
/// Measurement is delegated to `M`, a [`MonospaceMeasure`] by default.
#[derive(Debug, Clone)]
pub struct RecordingRenderer<M = MonospaceMeasure> {
    measure: M,
    ops: Vec<DrawOp>,
    offset: Point,
    saved: SmallVec<[Point; 4]>,
}

impl RecordingRenderer<MonospaceMeasure> {
    /// A recorder that measures with the default monospace advance.
    #[must_use]
    pub fn new() -> Self {
        Self::with_measure(MonospaceMeasure::default())
    }
}

impl Default for RecordingRenderer<MonospaceMeasure> {
    fn default() -> Self {
        Self::new()
    }
}

impl<M: TextMeasure> RecordingRenderer<M> {
    /// A recorder that measures with `measure`.
    #[must_use]
    pub fn with_measure(measure: M) -> Self {
        Self {
            measure,
            ops: Vec::new(),
            offset: Point::default(),
            saved: SmallVec::new(),
        }
    }

    /// Recorded calls in order.
    #[must_use]
    pub fn ops(&self) -> &[DrawOp] {
        &self.ops
    }

    /// Take the recorded calls, leaving the recorder empty.
    pub fn take_ops(&mut self) -> Vec<DrawOp> {
        std::mem::take(&mut self.ops)
    }

    /// Forget recorded calls and reset the transform stack.
    pub fn clear(&mut self) {
        self.ops.clear();
        self.offset = Point::default();
        self.saved.clear();
    }

    /// Current translation.
    #[must_use]
    pub fn offset(&self) -> Point {
        self.offset
    }

    /// Number of unmatched `save` calls.
    #[must_use]
    pub fn depth(&self) -> usize {
        self.saved.len()
    }

    /// Recorded rectangles of the given color.
    pub fn rectangles(&self, color: Color) -> impl Iterator<Item = Rect> + '_ {
        self.ops.iter().filter_map(move |op| match op {
            DrawOp::Rectangle { rect, color: c } if *c == color => Some(*rect),
            _ => None,
        })
    }

    /// Concatenation of every recorded text run.
    #[must_use]
    pub fn text(&self) -> String {
        self.ops
            .iter()
            .filter_map(|op| match op {
                DrawOp::Text { text, .. } => Some(text.as_str()),
                DrawOp::Rectangle { .. } => None,
            })
            .collect()
    }

    /// The measurer.
    #[must_use]
    pub fn measurer(&self) -> &M {
        &self.measure
    }
}

impl<M: TextMeasure> TextMeasure for RecordingRenderer<M> {
    fn measure(&mut self, font: &Font, text: &str) -> f32 {
        self.measure.measure(font, text)
    }
}

impl<M: TextMeasure> Renderer for RecordingRenderer<M> {
    fn draw_rectangle(&mut self, rect: Rect, color: Color) {
        let rect = rect.translate(self.offset.x, self.offset.y);
        self.ops.push(DrawOp::Rectangle { rect, color });
    }

    fn draw_text(&mut self, font: &Font, text: &str, x: f32, baseline: f32, color: Color) {
        self.ops.push(DrawOp::Text {
            font: font.clone(),
            text: text.to_owned(),
            x: x + self.offset.x,
            baseline: baseline + self.offset.y,
            color,
        });
    }

    fn translate(&mut self, dx: f32, dy: f32) {
        self.offset = self.offset.offset(dx, dy);
    }

    fn save(&mut self) {
        self.saved.push(self.offset);
    }

    fn restore(&mut self) {
        match self.saved.pop() {
            Some(offset) => self.offset = offset,
            None => {
                #[cfg(feature = "tracing")]
                tracing::warn!("restore without matching save");
            }
        }
    }
}
