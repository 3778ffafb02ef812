#![forbid(unsafe_code)]

//! Document content and selection.
//!
//! The character sequence is the single source of truth for content.
//! Anchor and focus are linear offsets in `[0, len]`; the per-character
//! `select` flags are a cache rebuilt whenever either end moves.

use std::ops::Range;

use folio_layout::Character;

/// Characters plus a selection.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Document {
    characters: Vec<Character>,
    anchor: usize,
    focus: usize,
    capturing: bool,
}

impl Document {
    /// An empty document with a collapsed selection at 0.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of characters, line breaks included.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.characters.len()
    }

    /// Whether the document has no characters.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.characters.is_empty()
    }

    /// All characters in order.
    #[inline]
    #[must_use]
    pub fn characters(&self) -> &[Character] {
        &self.characters
    }

    /// Mutable characters, for layout to write positions into.
    #[inline]
    pub fn characters_mut(&mut self) -> &mut [Character] {
        &mut self.characters
    }

    /// The whole document as text.
    #[must_use]
    pub fn text(&self) -> String {
        self.characters.iter().map(Character::value).collect()
    }

    /// Fixed end of the selection.
    #[inline]
    #[must_use]
    pub fn anchor(&self) -> usize {
        self.anchor
    }

    /// Moving end of the selection, where the caret is.
    #[inline]
    #[must_use]
    pub fn focus(&self) -> usize {
        self.focus
    }

    /// Whether focus changes currently extend the selection.
    #[inline]
    #[must_use]
    pub fn is_capturing(&self) -> bool {
        self.capturing
    }

    /// Whether anchor and focus coincide.
    #[inline]
    #[must_use]
    pub fn is_collapsed(&self) -> bool {
        self.anchor == self.focus
    }

    /// Ordered selection range.
    #[must_use]
    pub fn range(&self) -> Range<usize> {
        self.anchor.min(self.focus)..self.anchor.max(self.focus)
    }

    /// Text inside the selection; empty when collapsed.
    #[must_use]
    pub fn selection(&self) -> String {
        self.characters[self.range()]
            .iter()
            .map(Character::value)
            .collect()
    }

    /// Hold the anchor: later focus changes extend the selection.
    pub fn anchor_capture(&mut self) {
        self.capturing = true;
    }

    /// Stop holding the anchor: later focus changes collapse the selection.
    pub fn anchor_release(&mut self) {
        self.capturing = false;
    }

    /// Restore a capture state saved with [`Document::is_capturing`].
    pub fn set_capturing(&mut self, capturing: bool) {
        self.capturing = capturing;
    }

    /// Move the focus. The anchor follows unless capturing.
    ///
    /// Offsets past the end are clamped.
    pub fn set_focus(&mut self, offset: usize) {
        self.focus = offset.min(self.len());
        if !self.capturing {
            self.anchor = self.focus;
        }
        self.refresh_selection();
    }

    /// Replace the selection with `characters` and collapse after them.
    ///
    /// Returns the new focus.
    pub fn replace_selection(&mut self, characters: impl IntoIterator<Item = Character>) -> usize {
        let range = self.range();
        let begin = range.start;
        let before = self.len();
        self.characters.splice(range.clone(), characters);
        let inserted = self.len() + range.len() - before;
        self.collapse(begin + inserted);
        self.focus
    }

    /// Remove the selected characters and collapse at the start of the
    /// range. Returns `false` when the selection was already collapsed.
    pub fn erase_selection(&mut self) -> bool {
        if self.is_collapsed() {
            return false;
        }
        let range = self.range();
        let begin = range.start;
        self.characters.drain(range);
        self.collapse(begin);
        true
    }

    fn collapse(&mut self, offset: usize) {
        self.focus = offset.min(self.len());
        self.anchor = self.focus;
        self.refresh_selection();
    }

    fn refresh_selection(&mut self) {
        let range = self.range();
        for (i, c) in self.characters.iter_mut().enumerate() {
            c.set_selected(range.contains(&i));
        }
    }
}
