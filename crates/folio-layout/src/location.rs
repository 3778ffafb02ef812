#![forbid(unsafe_code)]

//! Caret addresses.
//!
//! A [`Location`] names a caret stop by its place in the page structure.
//! `offset == row.len()` means "after the last character of the row, before
//! any line break". Locations are only valid for the layout they were
//! derived from; the editor re-derives them from the linear focus after
//! every relayout.

/// Hierarchical caret address: page, row within the page, offset within the row.
///
/// Ordered lexicographically, which is document order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Location {
    pub page: usize,
    pub row: usize,
    pub offset: usize,
}

impl Location {
    /// Create a new location.
    #[inline]
    #[must_use]
    pub const fn new(page: usize, row: usize, offset: usize) -> Self {
        Self { page, row, offset }
    }

    /// Lift a page-local address into a full location.
    #[inline]
    #[must_use]
    pub const fn from_row(page: usize, local: RowLocation) -> Self {
        Self::new(page, local.row, local.offset)
    }

    /// The page-local part of this address.
    #[inline]
    #[must_use]
    pub const fn row_location(&self) -> RowLocation {
        RowLocation::new(self.row, self.offset)
    }

    /// Same row, different offset.
    #[inline]
    #[must_use]
    pub const fn with_offset(self, offset: usize) -> Self {
        Self::new(self.page, self.row, offset)
    }
}

/// Page-local caret address: row within a page and offset within the row.
///
/// This is the flat address used inside a single page, e.g. as the result
/// of [`Page::hit_test`](crate::Page::hit_test).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RowLocation {
    pub row: usize,
    pub offset: usize,
}

impl RowLocation {
    /// Create a new page-local location.
    #[inline]
    #[must_use]
    pub const fn new(row: usize, offset: usize) -> Self {
        Self { row, offset }
    }
}
