#![forbid(unsafe_code)]

//! Host input vocabulary.
//!
//! A host (browser canvas, native window, test script) reports what the
//! user did as [`InputEvent`]s. Only the input adapter looks at these; the
//! editor itself consumes [`Command`](crate::Command)s.
//!
//! Pointer coordinates are host pixels relative to the editor surface. The
//! adapter scales them by the device pixel ratio.

use bitflags::bitflags;

/// Something the user did.
#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    Key(KeyEvent),
    /// Committed text typed outside an IME composition.
    Text(String),
    /// The IME opened a composition.
    CompositionStart,
    /// The IME's preedit text changed.
    CompositionUpdate(String),
    /// The IME committed `text` and closed the composition.
    CompositionEnd(String),
    Paste(String),
    /// The host has already copied the selection to the clipboard.
    Cut,
    Mouse(MouseEvent),
}

/// Keys the editor distinguishes. Printable keys arrive as
/// [`InputEvent::Text`]; `Char` exists so hosts can forward everything.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyCode {
    Char(char),
    Enter,
    Escape,
    Tab,
    Backspace,
    Delete,
    Home,
    End,
    Left,
    Right,
    Up,
    Down,
    /// Either shift key on its own; selection capture follows it.
    Shift,
}

/// Press, auto-repeat or release.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum KeyEventKind {
    #[default]
    Press,
    Repeat,
    Release,
}

bitflags! {
    /// Modifier keys held during a key event.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct Modifiers: u8 {
        const NONE  = 0;
        const SHIFT = 1 << 0;
        const ALT   = 1 << 1;
        const CTRL  = 1 << 2;
        const SUPER = 1 << 3;
    }
}

/// A key transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyEvent {
    pub code: KeyCode,
    pub modifiers: Modifiers,
    pub kind: KeyEventKind,
}

impl KeyEvent {
    /// `code` pressed with no modifiers.
    #[must_use]
    pub const fn new(code: KeyCode) -> Self {
        Self {
            code,
            modifiers: Modifiers::NONE,
            kind: KeyEventKind::Press,
        }
    }

    /// `code` released with no modifiers.
    #[must_use]
    pub const fn release(code: KeyCode) -> Self {
        Self::new(code).with_kind(KeyEventKind::Release)
    }

    #[must_use]
    pub const fn with_modifiers(mut self, modifiers: Modifiers) -> Self {
        self.modifiers = modifiers;
        self
    }

    #[must_use]
    pub const fn with_kind(mut self, kind: KeyEventKind) -> Self {
        self.kind = kind;
        self
    }

    /// Press or repeat.
    #[must_use]
    pub const fn is_down(&self) -> bool {
        !matches!(self.kind, KeyEventKind::Release)
    }
}

/// Pointer buttons.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseButton {
    Left,
    Middle,
    Right,
}

/// What the pointer did.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MouseEventKind {
    Down(MouseButton),
    Up(MouseButton),
    /// Motion, with or without a button held.
    Moved,
    /// Vertical wheel travel in host pixels; positive scrolls down.
    Wheel { delta: f32 },
}

/// A pointer event at a surface position.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MouseEvent {
    pub kind: MouseEventKind,
    pub x: f32,
    pub y: f32,
}

impl MouseEvent {
    #[must_use]
    pub const fn new(kind: MouseEventKind, x: f32, y: f32) -> Self {
        Self { kind, x, y }
    }
}
