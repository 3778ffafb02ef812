#![forbid(unsafe_code)]

//! Editor commands.
//!
//! A [`Command`] is the unit of work the editor core accepts. The input
//! adapter produces them from raw events; scripts and tests can build them
//! directly. Every variant maps to exactly one public editor operation.

/// A single editor operation.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Command {
    /// Replace the selection (or insert at the caret) with text.
    Insert(String),
    /// Remove the selected range. No-op when the selection is collapsed.
    Erase,
    /// Backspace.
    DeleteBackward,
    /// Forward delete.
    DeleteForward,
    /// Hold the anchor so focus changes extend the selection.
    AnchorCapture,
    /// Let the anchor follow the focus again.
    AnchorRelease,
    /// Move the caret one unit left.
    MoveLeft,
    /// Move the caret one unit right.
    MoveRight,
    /// Move the caret one row up, keeping its column.
    MoveUp,
    /// Move the caret one row down, keeping its column.
    MoveDown,
    /// Move the caret to the start of the document.
    SeekToBegin,
    /// Move the caret to the end of the document.
    SeekToEnd,
    /// Place the caret at a viewport point (device pixels).
    FocusAt { x: f32, y: f32 },
    /// Scroll the viewport vertically by a pixel delta.
    Scroll(f32),
}

impl Command {
    /// Whether this command can change document content.
    #[must_use]
    pub const fn is_edit(&self) -> bool {
        matches!(
            self,
            Self::Insert(_) | Self::Erase | Self::DeleteBackward | Self::DeleteForward
        )
    }

    /// Whether this command keeps the vertical column memory alive.
    #[must_use]
    pub const fn is_vertical_move(&self) -> bool {
        matches!(self, Self::MoveUp | Self::MoveDown)
    }
}
