#![forbid(unsafe_code)]

//! The editing controller.
//!
//! [`Editor`] owns the document, the current layout, the caret and the
//! viewport. Every mutation rebuilds the layout from scratch and then
//! re-derives the caret location from the linear focus. Navigation works
//! the other way round: it computes a target [`Location`] in the current
//! layout and derives the linear focus from it, so the caret can sit on
//! either side of a soft wrap.
//!
//! All operations are infallible. Moves and deletes at the document
//! boundaries are no-ops.

use folio_core::Command;
use folio_core::geometry::Rect;
use folio_layout::{Character, Layout, Location, Row};
use folio_render::Renderer;
use folio_text::{FontMetrics, TextMeasure, units};

use crate::caret::Caret;
use crate::config::{ConfigError, EditorConfig};
use crate::document::Document;
use crate::paint;
use crate::viewport::Viewport;

/// Distance the caret bar extends below the baseline.
pub const CARET_DESCENT: f32 = 4.0;

/// A paginated text editor.
///
/// `M` measures every inserted unit; wrap it in
/// [`CachedMeasure`](folio_text::CachedMeasure) when measuring is costly.
#[derive(Debug)]
pub struct Editor<M> {
    config: EditorConfig,
    metrics: FontMetrics,
    measure: M,
    document: Document,
    layout: Layout,
    caret: Caret,
    viewport: Viewport,
}

impl<M: TextMeasure> Editor<M> {
    /// Create an empty editor.
    pub fn new(config: EditorConfig, measure: M) -> Result<Self, ConfigError> {
        config.validate()?;
        let metrics = config.metrics();
        let mut document = Document::new();
        let layout = Layout::build(document.characters_mut(), config.page, metrics);
        let viewport = Viewport::new(config.viewport_width, config.viewport_height);
        tracing::debug!(
            font = %config.font.css(),
            line_height = metrics.line_height,
            "editor created"
        );
        Ok(Self {
            config,
            metrics,
            measure,
            document,
            layout,
            caret: Caret::default(),
            viewport,
        })
    }

    // ------------------------------------------------------------------
    // Queries
    // ------------------------------------------------------------------

    /// The configuration the editor was created with.
    #[must_use]
    pub fn config(&self) -> &EditorConfig {
        &self.config
    }

    /// Vertical font metrics.
    #[must_use]
    pub fn metrics(&self) -> &FontMetrics {
        &self.metrics
    }

    /// The document, including its selection.
    #[must_use]
    pub fn document(&self) -> &Document {
        &self.document
    }

    /// The document's characters with their current placement.
    #[must_use]
    pub fn characters(&self) -> &[Character] {
        self.document.characters()
    }

    /// The whole document as text.
    #[must_use]
    pub fn text(&self) -> String {
        self.document.text()
    }

    /// Linear length of the document.
    #[must_use]
    pub fn len(&self) -> usize {
        self.document.len()
    }

    /// Whether the document is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.document.is_empty()
    }

    /// Anchor offset.
    #[must_use]
    pub fn anchor(&self) -> usize {
        self.document.anchor()
    }

    /// Focus offset.
    #[must_use]
    pub fn focus(&self) -> usize {
        self.document.focus()
    }

    /// Whether focus changes extend the selection.
    #[must_use]
    pub fn is_capturing(&self) -> bool {
        self.document.is_capturing()
    }

    /// Caret location in the current layout.
    #[must_use]
    pub fn location(&self) -> Location {
        self.caret.location()
    }

    /// Column remembered across vertical moves.
    #[must_use]
    pub fn column(&self) -> Option<f32> {
        self.caret.column()
    }

    /// The current page stack.
    #[must_use]
    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    /// The viewport.
    #[must_use]
    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    /// Scroll offset.
    #[must_use]
    pub fn view_y(&self) -> f32 {
        self.viewport.view_y()
    }

    /// Height of the page stack including margins.
    #[must_use]
    pub fn content_height(&self) -> f32 {
        self.layout.content_height()
    }

    /// Caret bar in document coordinates.
    #[must_use]
    pub fn caret_rect(&self) -> Rect {
        let point = self
            .layout
            .caret_point(self.caret.location(), self.document.characters());
        Rect::new(
            point.x,
            point.y + CARET_DESCENT - self.metrics.height,
            self.config.caret_width,
            self.metrics.height,
        )
    }

    /// Selected text; empty when the selection is collapsed.
    #[must_use]
    pub fn selection(&self) -> String {
        self.document.selection()
    }

    /// The measurer.
    #[must_use]
    pub fn measurer(&self) -> &M {
        &self.measure
    }

    // ------------------------------------------------------------------
    // Editing
    // ------------------------------------------------------------------

    /// Replace the selection with `text` and put the caret after it.
    pub fn insert(&mut self, text: &str) {
        let _span = tracing::trace_span!("folio.editor.insert", bytes = text.len()).entered();
        let characters = self.characters_for(text);
        self.document.replace_selection(characters);
        self.relayout();
        self.caret.forget_column();
        self.caret_to_focus();
    }

    /// Remove the selected characters.
    pub fn erase(&mut self) {
        let _span = tracing::trace_span!("folio.editor.erase").entered();
        if !self.document.erase_selection() {
            tracing::trace!("erase with collapsed selection");
            return;
        }
        self.relayout();
        self.caret.forget_column();
        self.caret_to_focus();
    }

    /// Erase the selection, or the character before the caret.
    pub fn delete_backward(&mut self) {
        let _span = tracing::trace_span!("folio.editor.delete_backward").entered();
        if self.document.is_collapsed() {
            let focus = self.document.focus();
            if focus == 0 {
                tracing::trace!("delete_backward at document start");
                return;
            }
            self.extend_selection_to(focus - 1);
        }
        self.erase();
    }

    /// Erase the selection, or the character after the caret.
    pub fn delete_forward(&mut self) {
        let _span = tracing::trace_span!("folio.editor.delete_forward").entered();
        if self.document.is_collapsed() {
            let focus = self.document.focus();
            if focus >= self.document.len() {
                tracing::trace!("delete_forward at document end");
                return;
            }
            self.extend_selection_to(focus + 1);
        }
        self.erase();
    }

    /// Hold the anchor so caret moves extend the selection.
    pub fn anchor_capture(&mut self) {
        let _span = tracing::trace_span!("folio.editor.anchor_capture").entered();
        self.document.anchor_capture();
    }

    /// Let the anchor follow the caret again.
    pub fn anchor_release(&mut self) {
        let _span = tracing::trace_span!("folio.editor.anchor_release").entered();
        self.document.anchor_release();
    }

    // ------------------------------------------------------------------
    // Navigation
    // ------------------------------------------------------------------

    /// Move one stop left, wrapping to the end of the previous row.
    pub fn caret_move_left(&mut self) {
        let _span = tracing::trace_span!("folio.editor.move_left").entered();
        self.caret.forget_column();
        if self.resolve_selection(false) {
            return;
        }
        let here = self.caret.location();
        let target = if here.offset > 0 {
            here.with_offset(here.offset - 1)
        } else if let Some((page, row)) = self.layout.previous_row(here) {
            let row_start = Location::new(page, row, 0);
            row_start.with_offset(self.row_len(row_start))
        } else {
            tracing::trace!("move_left at document start");
            here
        };
        self.focus_location(target);
    }

    /// Move one stop right, wrapping to the start of the next row.
    pub fn caret_move_right(&mut self) {
        let _span = tracing::trace_span!("folio.editor.move_right").entered();
        self.caret.forget_column();
        if self.resolve_selection(true) {
            return;
        }
        let here = self.caret.location();
        let target = if here.offset < self.row_len(here) {
            here.with_offset(here.offset + 1)
        } else if let Some((page, row)) = self.layout.next_row(here) {
            Location::new(page, row, 0)
        } else {
            tracing::trace!("move_right at document end");
            here
        };
        self.focus_location(target);
    }

    /// Move to the nearest stop on the row above.
    pub fn caret_move_up(&mut self) {
        let _span = tracing::trace_span!("folio.editor.move_up").entered();
        self.move_vertically(true);
    }

    /// Move to the nearest stop on the row below.
    pub fn caret_move_down(&mut self) {
        let _span = tracing::trace_span!("folio.editor.move_down").entered();
        self.move_vertically(false);
    }

    /// Move the focus to linear `offset`; the anchor follows unless
    /// capturing. Offsets past the end are clamped.
    pub fn set_focus(&mut self, offset: usize) {
        let _span = tracing::trace_span!("folio.editor.set_focus", offset).entered();
        self.caret.forget_column();
        self.document.set_focus(offset);
        self.caret_to_focus();
    }

    /// Put the caret at the start of the document.
    pub fn seek_to_begin(&mut self) {
        let _span = tracing::trace_span!("folio.editor.seek_to_begin").entered();
        self.caret.forget_column();
        self.document.set_focus(0);
        self.caret_to_focus();
    }

    /// Put the caret at the end of the document.
    pub fn seek_to_end(&mut self) {
        let _span = tracing::trace_span!("folio.editor.seek_to_end").entered();
        self.caret.forget_column();
        self.document.set_focus(self.document.len());
        self.caret_to_focus();
    }

    /// Move the caret to the stop nearest a viewport point.
    ///
    /// Returns `false` when the point is not over any page.
    pub fn focus_by(&mut self, x: f32, y: f32) -> bool {
        let _span = tracing::trace_span!("folio.editor.focus_by", x, y).entered();
        let hit = self.layout.hit_test(
            x,
            y + self.viewport.view_y(),
            self.document.characters(),
        );
        match hit {
            Some(location) => {
                self.caret.forget_column();
                self.focus_location(location);
                true
            }
            None => {
                tracing::trace!("pointer outside every page");
                false
            }
        }
    }

    /// Scroll the viewport by `delta` pixels.
    pub fn scroll(&mut self, delta: f32) {
        let _span = tracing::trace_span!("folio.editor.scroll", delta).entered();
        self.viewport.scroll(delta, self.layout.content_height());
    }

    /// Change the viewport size.
    pub fn resize(&mut self, width: f32, height: f32) {
        let _span = tracing::trace_span!("folio.editor.resize", width, height).entered();
        self.viewport
            .resize(width, height, self.layout.content_height());
    }

    /// Run one command.
    pub fn apply(&mut self, command: Command) {
        match command {
            Command::Insert(text) => self.insert(&text),
            Command::Erase => self.erase(),
            Command::DeleteBackward => self.delete_backward(),
            Command::DeleteForward => self.delete_forward(),
            Command::AnchorCapture => self.anchor_capture(),
            Command::AnchorRelease => self.anchor_release(),
            Command::MoveLeft => self.caret_move_left(),
            Command::MoveRight => self.caret_move_right(),
            Command::MoveUp => self.caret_move_up(),
            Command::MoveDown => self.caret_move_down(),
            Command::SeekToBegin => self.seek_to_begin(),
            Command::SeekToEnd => self.seek_to_end(),
            Command::FocusAt { x, y } => {
                self.focus_by(x, y);
            }
            Command::Scroll(delta) => self.scroll(delta),
        }
    }

    /// Run every command in order.
    pub fn apply_all(&mut self, commands: impl IntoIterator<Item = Command>) {
        for command in commands {
            self.apply(command);
        }
    }

    /// Paint the visible state onto `renderer`.
    pub fn render<R: Renderer + ?Sized>(&self, renderer: &mut R) {
        let _span = tracing::trace_span!("folio.editor.render").entered();
        paint::paint(self, renderer);
    }

    // ------------------------------------------------------------------
    // Internals
    // ------------------------------------------------------------------

    fn characters_for(&mut self, text: &str) -> Vec<Character> {
        let font = &self.config.font;
        let measure = &mut self.measure;
        units(text)
            .map(|unit| Character::measured(unit, font, &mut *measure))
            .collect()
    }

    fn relayout(&mut self) {
        self.layout = Layout::build(self.document.characters_mut(), self.config.page, self.metrics);
    }

    fn row_len(&self, location: Location) -> usize {
        self.layout.row_at(location).map_or(0, Row::len)
    }

    /// Move focus by one unit while holding the anchor, then restore the
    /// previous capture state.
    fn extend_selection_to(&mut self, offset: usize) {
        let capturing = self.document.is_capturing();
        self.document.anchor_capture();
        self.document.set_focus(offset);
        self.document.set_capturing(capturing);
    }

    /// Collapse a non-captured selection to one of its edges.
    fn resolve_selection(&mut self, forward: bool) -> bool {
        if self.document.is_capturing() || self.document.is_collapsed() {
            return false;
        }
        let range = self.document.range();
        self.caret.forget_column();
        self.document
            .set_focus(if forward { range.end } else { range.start });
        self.caret_to_focus();
        true
    }

    fn move_vertically(&mut self, up: bool) {
        if self.resolve_selection(!up) {
            return;
        }
        let here = self.caret.location();
        let layout = &self.layout;
        let doc = self.document.characters();
        let x = self.caret.column_or(|| layout.caret_x(here, doc));

        let neighbour = if up {
            layout.previous_row(here)
        } else {
            layout.next_row(here)
        };
        let target = match neighbour {
            Some((page, row)) => {
                let start = Location::new(page, row, 0);
                let offset = layout.row_at(start).map_or(0, |r| r.offset_near(x, doc));
                start.with_offset(offset)
            }
            None if up => {
                tracing::trace!("move_up on first row");
                here.with_offset(0)
            }
            None => {
                tracing::trace!("move_down on last row");
                here.with_offset(self.row_len(here))
            }
        };
        self.focus_location(target);
    }

    /// Place the caret at `location` and derive the focus from it.
    fn focus_location(&mut self, location: Location) {
        self.caret_to(location);
        self.document
            .set_focus(self.layout.offset_from_location(location));
    }

    /// Place the caret at the location of the current focus.
    fn caret_to_focus(&mut self) {
        let location = self.layout.location_from_offset(self.document.focus());
        self.caret_to(location);
    }

    fn caret_to(&mut self, location: Location) {
        self.caret.set_location(location);
        let baseline = self
            .layout
            .caret_point(location, self.document.characters())
            .y;
        self.viewport.follow(
            baseline,
            self.metrics.line_height,
            self.layout.content_height(),
        );
    }
}
