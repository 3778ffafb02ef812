#![forbid(unsafe_code)]

//! Caret position and column memory.

use folio_layout::Location;

/// Where the caret is drawn, plus the x column remembered across
/// consecutive vertical moves.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Caret {
    location: Location,
    column: Option<f32>,
}

impl Caret {
    /// Current location.
    #[inline]
    #[must_use]
    pub fn location(&self) -> Location {
        self.location
    }

    /// Remembered column, if the last move was vertical.
    #[inline]
    #[must_use]
    pub fn column(&self) -> Option<f32> {
        self.column
    }

    pub(crate) fn set_location(&mut self, location: Location) {
        self.location = location;
    }

    /// Remembered column, or `compute` stored as the new one.
    pub(crate) fn column_or(&mut self, compute: impl FnOnce() -> f32) -> f32 {
        *self.column.get_or_insert_with(compute)
    }

    pub(crate) fn forget_column(&mut self) {
        self.column = None;
    }
}
