#![forbid(unsafe_code)]

//! Fixed-size pages.

use folio_core::geometry::{Point, Rect};
use folio_text::FontMetrics;

use crate::character::Character;
use crate::engine::PageGeometry;
use crate::location::RowLocation;
use crate::row::Row;
use crate::util::nearest;

/// Outcome of placing one character on a page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Placement {
    /// The character was placed.
    Placed,
    /// The page is full. `carry` holds the character index that still
    /// needs placing on the next page; a line break that overflowed has
    /// already been recorded on its row and carries nothing.
    Overflow { carry: Option<usize> },
}

/// A fixed-size box holding rows of characters.
///
/// Row baselines and character x positions are in content coordinates:
/// `(0, 0)` is the top-left corner of the padded content area. A page
/// always holds at least one row.
#[derive(Debug, Clone, PartialEq)]
pub struct Page {
    index: usize,
    origin: Point,
    bound: Rect,
    padding: f32,
    rows: Vec<Row>,
    cursor_x: f32,
    cursor_baseline: f32,
}

impl Page {
    pub(crate) fn new(
        index: usize,
        origin: Point,
        geometry: &PageGeometry,
        metrics: &FontMetrics,
        start: usize,
    ) -> Self {
        let baseline = metrics.height;
        Self {
            index,
            origin,
            bound: Rect::from_size(geometry.width, geometry.height),
            padding: geometry.padding,
            rows: vec![Row::new(baseline, start)],
            cursor_x: 0.0,
            cursor_baseline: baseline,
        }
    }

    /// Position of the page in the page stack.
    #[inline]
    #[must_use]
    pub fn index(&self) -> usize {
        self.index
    }

    /// Top-left corner in document coordinates.
    #[inline]
    #[must_use]
    pub fn origin(&self) -> Point {
        self.origin
    }

    /// Page box relative to its own origin.
    #[inline]
    #[must_use]
    pub fn bound(&self) -> Rect {
        self.bound
    }

    /// Page box in document coordinates.
    #[must_use]
    pub fn rect(&self) -> Rect {
        self.bound.translate(self.origin.x, self.origin.y)
    }

    /// Inner padding on every side.
    #[inline]
    #[must_use]
    pub fn padding(&self) -> f32 {
        self.padding
    }

    /// Width available to rows.
    #[inline]
    #[must_use]
    pub fn content_width(&self) -> f32 {
        self.bound.width - 2.0 * self.padding
    }

    /// Height available to rows.
    #[inline]
    #[must_use]
    pub fn content_height(&self) -> f32 {
        self.bound.height - 2.0 * self.padding
    }

    /// Document-space point of the content area's top-left corner.
    #[must_use]
    pub fn content_origin(&self) -> Point {
        self.origin.offset(self.padding, self.padding)
    }

    /// The rows of this page. Never empty.
    #[inline]
    #[must_use]
    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    /// Row by index.
    #[inline]
    #[must_use]
    pub fn row(&self, index: usize) -> Option<&Row> {
        self.rows.get(index)
    }

    /// Index of the last row.
    #[inline]
    #[must_use]
    pub fn last_row_index(&self) -> usize {
        self.rows.len() - 1
    }

    /// Linear extent of all rows.
    #[must_use]
    pub fn span(&self) -> usize {
        self.rows.iter().map(Row::span).sum()
    }

    /// Place the character at document index `index`.
    pub(crate) fn add(
        &mut self,
        index: usize,
        character: &mut Character,
        metrics: &FontMetrics,
    ) -> Placement {
        let limit = self.content_height();

        if character.is_line_break() {
            character.place(self.cursor_x, self.cursor_baseline);
            self.current_row().close_with_linebreak();
            return if self.open_row(index + 1, metrics, limit) {
                Placement::Placed
            } else {
                Placement::Overflow { carry: None }
            };
        }

        let width = character.width();
        let row_is_empty = self.rows.last().is_none_or(Row::is_empty);
        if !row_is_empty
            && self.cursor_x + width > self.content_width()
            && !self.open_row(index, metrics, limit)
        {
            return Placement::Overflow { carry: Some(index) };
        }

        character.place(self.cursor_x, self.cursor_baseline);
        self.current_row().push(width);
        self.cursor_x += width;
        Placement::Placed
    }

    /// Start a new row at document index `start`. Returns `false` when the
    /// next baseline would fall below the content area.
    fn open_row(&mut self, start: usize, metrics: &FontMetrics, limit: f32) -> bool {
        let baseline = self.cursor_baseline + metrics.line_height;
        if baseline > limit {
            return false;
        }
        self.cursor_x = 0.0;
        self.cursor_baseline = baseline;
        self.rows.push(Row::new(baseline, start));
        true
    }

    fn current_row(&mut self) -> &mut Row {
        let last = self.rows.len() - 1;
        &mut self.rows[last]
    }

    /// Map a document-space point to a caret stop on this page.
    ///
    /// Returns `None` when the point lies outside the page box. Points above
    /// the first row snap to the document-order start of the page; points
    /// below the last row snap to its end. Otherwise the row whose midline
    /// is nearest wins and the offset is the nearest caret stop in it.
    #[must_use]
    pub fn hit_test(
        &self,
        x: f32,
        y: f32,
        doc: &[Character],
        metrics: &FontMetrics,
    ) -> Option<RowLocation> {
        let local_x = x - self.origin.x;
        let local_y = y - self.origin.y;
        if !self.bound.contains(local_x, local_y) {
            return None;
        }

        let x = local_x - self.padding;
        let y = local_y - self.padding;

        let first = &self.rows[0];
        if y < first.baseline() - metrics.height {
            return Some(RowLocation::new(0, 0));
        }

        let last_index = self.last_row_index();
        let last = &self.rows[last_index];
        if y > last.baseline() {
            return Some(RowLocation::new(last_index, last.len()));
        }

        let midlines: Vec<f32> = self
            .rows
            .iter()
            .map(|row| row.baseline() - metrics.midline_offset())
            .collect();
        let row = nearest(&midlines, y);
        Some(RowLocation::new(row, self.rows[row].offset_near(x, doc)))
    }
}
