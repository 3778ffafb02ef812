#![forbid(unsafe_code)]

//! Pagination and offset mapping.
//!
//! [`Layout::build`] reflows the whole document into pages on every call.
//! There is no incremental path: the editor throws the previous layout away
//! after each edit and builds a fresh one.

use folio_core::geometry::Point;
use folio_text::FontMetrics;

use crate::character::Character;
use crate::location::Location;
use crate::page::{Page, Placement};
use crate::row::Row;

/// Size and stacking of pages.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct PageGeometry {
    /// Page width in pixels.
    pub width: f32,
    /// Page height in pixels.
    pub height: f32,
    /// Inner padding on every side.
    pub padding: f32,
    /// Vertical gap between consecutive pages.
    pub gap: f32,
    /// Outer margin around the page stack.
    pub margin: f32,
}

impl PageGeometry {
    /// Document-space origin of page `index`.
    #[must_use]
    pub fn origin_of(&self, index: usize) -> Point {
        Point::new(
            self.margin,
            self.margin + (self.height + self.gap) * index as f32,
        )
    }

    /// Width available to rows.
    #[must_use]
    pub fn content_width(&self) -> f32 {
        self.width - 2.0 * self.padding
    }

    /// Height available to rows.
    #[must_use]
    pub fn content_height(&self) -> f32 {
        self.height - 2.0 * self.padding
    }

    /// Height of a stack of `pages` pages including both outer margins.
    #[must_use]
    pub fn stack_height(&self, pages: usize) -> f32 {
        let pages = pages.max(1) as f32;
        2.0 * self.margin + self.height + (self.height + self.gap) * (pages - 1.0)
    }
}

impl Default for PageGeometry {
    fn default() -> Self {
        Self {
            width: 500.0,
            height: 600.0,
            padding: 40.0,
            gap: 20.0,
            margin: 40.0,
        }
    }
}

/// The page stack for one version of the document.
#[derive(Debug, Clone, PartialEq)]
pub struct Layout {
    pages: Vec<Page>,
    geometry: PageGeometry,
    metrics: FontMetrics,
}

impl Layout {
    /// Place every character of `doc` and build the page stack.
    ///
    /// Writes `x` and `baseline` into each character. An empty document
    /// yields one page with one empty row.
    pub fn build(doc: &mut [Character], geometry: PageGeometry, metrics: FontMetrics) -> Self {
        let mut pages = Vec::new();
        let mut page = Page::new(0, geometry.origin_of(0), &geometry, &metrics, 0);

        let mut index = 0;
        while index < doc.len() {
            match page.add(index, &mut doc[index], &metrics) {
                Placement::Placed => index += 1,
                Placement::Overflow { carry } => {
                    let next = pages.len() + 1;
                    let start = carry.unwrap_or(index + 1);
                    tracing::debug!(page = next, start, "page overflow");
                    let successor =
                        Page::new(next, geometry.origin_of(next), &geometry, &metrics, start);
                    pages.push(std::mem::replace(&mut page, successor));
                    if carry.is_none() {
                        index += 1;
                    }
                }
            }
        }
        pages.push(page);

        let layout = Self {
            pages,
            geometry,
            metrics,
        };
        tracing::debug!(
            pages = layout.pages.len(),
            rows = layout.rows().count(),
            characters = doc.len(),
            "relayout"
        );
        layout
    }

    /// All pages in order. Never empty.
    #[inline]
    #[must_use]
    pub fn pages(&self) -> &[Page] {
        &self.pages
    }

    /// Page by index.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of range.
    #[inline]
    #[must_use]
    pub fn page(&self, index: usize) -> &Page {
        &self.pages[index]
    }

    /// Number of pages.
    #[inline]
    #[must_use]
    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    /// Geometry the layout was built with.
    #[inline]
    #[must_use]
    pub fn geometry(&self) -> &PageGeometry {
        &self.geometry
    }

    /// Font metrics the layout was built with.
    #[inline]
    #[must_use]
    pub fn metrics(&self) -> &FontMetrics {
        &self.metrics
    }

    /// Every row in document order with its page and row index.
    pub fn rows(&self) -> impl Iterator<Item = (usize, usize, &Row)> + '_ {
        self.pages
            .iter()
            .enumerate()
            .flat_map(|(p, page)| page.rows().iter().enumerate().map(move |(r, row)| (p, r, row)))
    }

    /// The row a location points into.
    #[must_use]
    pub fn row_at(&self, location: Location) -> Option<&Row> {
        self.pages.get(location.page)?.row(location.row)
    }

    /// Linear length of the laid-out document.
    #[must_use]
    pub fn len(&self) -> usize {
        self.pages.iter().map(Page::span).sum()
    }

    /// Whether the laid-out document is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// First caret stop of the document.
    #[must_use]
    pub fn start(&self) -> Location {
        Location::default()
    }

    /// Last caret stop of the document.
    #[must_use]
    pub fn end(&self) -> Location {
        let page = self.pages.len() - 1;
        let last = &self.pages[page];
        let row = last.last_row_index();
        Location::new(page, row, last.rows()[row].len())
    }

    /// Location of linear offset `n`.
    ///
    /// An offset that sits between a row's last character and its line
    /// break resolves to the end of that row. Offsets past the end clamp to
    /// [`Layout::end`].
    #[must_use]
    pub fn location_from_offset(&self, n: usize) -> Location {
        let mut before = 0;
        for (page, row, r) in self.rows() {
            let end = before + r.len();
            if end >= n {
                return Location::new(page, row, n.saturating_sub(before));
            }
            before = end + usize::from(r.has_linebreak());
        }
        self.end()
    }

    /// Linear offset of `location`.
    ///
    /// The offset is clamped to the row's length. A location past the last
    /// row maps to the document length.
    #[must_use]
    pub fn offset_from_location(&self, location: Location) -> usize {
        let mut before = 0;
        for (page, row, r) in self.rows() {
            if (page, row) == (location.page, location.row) {
                return before + location.offset.min(r.len());
            }
            before += r.span();
        }
        before
    }

    /// The row preceding `location`'s row in document order.
    #[must_use]
    pub fn previous_row(&self, location: Location) -> Option<(usize, usize)> {
        if location.row > 0 {
            Some((location.page, location.row - 1))
        } else if location.page > 0 {
            let page = location.page - 1;
            Some((page, self.pages[page].last_row_index()))
        } else {
            None
        }
    }

    /// The row following `location`'s row in document order.
    #[must_use]
    pub fn next_row(&self, location: Location) -> Option<(usize, usize)> {
        let page = self.pages.get(location.page)?;
        if location.row < page.last_row_index() {
            Some((location.page, location.row + 1))
        } else if location.page + 1 < self.pages.len() {
            Some((location.page + 1, 0))
        } else {
            None
        }
    }

    /// Map a document-space point to a caret stop.
    ///
    /// Returns `None` for points in the margins or the gaps between pages.
    #[must_use]
    pub fn hit_test(&self, x: f32, y: f32, doc: &[Character]) -> Option<Location> {
        self.pages.iter().find_map(|page| {
            page.hit_test(x, y, doc, &self.metrics)
                .map(|local| Location::from_row(page.index(), local))
        })
    }

    /// Caret x within its row, in content coordinates.
    #[must_use]
    pub fn caret_x(&self, location: Location, doc: &[Character]) -> f32 {
        self.row_at(location)
            .map_or(0.0, |row| row.x_by(location.offset, doc))
    }

    /// Document-space point at the caret's x on its row's baseline.
    #[must_use]
    pub fn caret_point(&self, location: Location, doc: &[Character]) -> Point {
        let Some(page) = self.pages.get(location.page) else {
            return Point::default();
        };
        let baseline = page.row(location.row).map_or(0.0, Row::baseline);
        page.content_origin()
            .offset(self.caret_x(location, doc), baseline)
    }

    /// Height of the whole page stack including margins.
    #[must_use]
    pub fn content_height(&self) -> f32 {
        self.geometry.stack_height(self.pages.len())
    }
}
