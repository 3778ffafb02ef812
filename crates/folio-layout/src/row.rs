#![forbid(unsafe_code)]

//! Wrapped lines.
//!
//! A [`Row`] does not own its characters. It records the contiguous range
//! of document indices it covers and is queried against the document slice
//! it was built from. Characters of a row are always contiguous in the
//! document; a trailing line-break marker, when present, sits at index
//! [`Row::end`].

use std::ops::Range;

use crate::character::Character;

/// One horizontal line of characters sharing a baseline.
#[derive(Debug, Clone, PartialEq)]
pub struct Row {
    baseline: f32,
    start: usize,
    len: usize,
    advance: f32,
    linebreak: bool,
}

impl Row {
    pub(crate) fn new(baseline: f32, start: usize) -> Self {
        Self {
            baseline,
            start,
            len: 0,
            advance: 0.0,
            linebreak: false,
        }
    }

    /// Baseline in page content coordinates.
    #[inline]
    #[must_use]
    pub fn baseline(&self) -> f32 {
        self.baseline
    }

    /// Number of glyph characters. The line-break marker is not counted.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the row has no glyph characters.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Document index of the first character.
    #[inline]
    #[must_use]
    pub fn start(&self) -> usize {
        self.start
    }

    /// Document index one past the last glyph character.
    #[inline]
    #[must_use]
    pub fn end(&self) -> usize {
        self.start + self.len
    }

    /// Document range of the glyph characters.
    #[inline]
    #[must_use]
    pub fn range(&self) -> Range<usize> {
        self.start..self.end()
    }

    /// Whether the row ends with a line break.
    #[inline]
    #[must_use]
    pub fn has_linebreak(&self) -> bool {
        self.linebreak
    }

    /// Linear extent of the row: its characters plus any line break.
    #[inline]
    #[must_use]
    pub fn span(&self) -> usize {
        self.len + usize::from(self.linebreak)
    }

    /// Total advance of the glyph characters.
    #[inline]
    #[must_use]
    pub fn width(&self) -> f32 {
        self.advance
    }

    /// The glyph characters of this row.
    #[must_use]
    pub fn characters<'a>(&self, doc: &'a [Character]) -> &'a [Character] {
        &doc[self.range()]
    }

    /// The line-break marker, if the row ends with one.
    #[must_use]
    pub fn linebreak<'a>(&self, doc: &'a [Character]) -> Option<&'a Character> {
        if self.linebreak {
            doc.get(self.end())
        } else {
            None
        }
    }

    /// Caret x for a stop within this row.
    ///
    /// Offsets past the last character land on the right edge of the row.
    /// An empty row always reports `0`.
    #[must_use]
    pub fn x_by(&self, offset: usize, doc: &[Character]) -> f32 {
        let chars = self.characters(doc);
        match chars.get(offset) {
            Some(c) => c.x(),
            None => chars.last().map_or(0.0, Character::right),
        }
    }

    /// Caret stop closest to `x`.
    ///
    /// Candidate stops are the left edge of every character plus the right
    /// edge of the last one.
    #[must_use]
    pub fn offset_near(&self, x: f32, doc: &[Character]) -> usize {
        let chars = self.characters(doc);
        let Some(last) = chars.last() else {
            return 0;
        };
        let mut stops: Vec<f32> = chars.iter().map(Character::x).collect();
        stops.push(last.right());
        crate::util::nearest(&stops, x)
    }

    pub(crate) fn push(&mut self, width: f32) {
        self.len += 1;
        self.advance += width;
    }

    pub(crate) fn close_with_linebreak(&mut self) {
        self.linebreak = true;
    }
}
