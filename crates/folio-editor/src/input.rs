#![forbid(unsafe_code)]

//! Translating host input into editor commands.
//!
//! The adapter is the only place that knows about raw events. It tracks
//! the shift key, the primary pointer button and IME composition, and
//! emits at most three [`Command`]s per event.
//!
//! | Event                      | Commands                                        |
//! |----------------------------|-------------------------------------------------|
//! | Shift press / release      | `AnchorCapture` / `AnchorRelease`               |
//! | Enter                      | `Insert("\n")`                                  |
//! | Backspace / Delete         | `DeleteBackward` / `DeleteForward`              |
//! | Arrows                     | `MoveLeft` / `MoveRight` / `MoveUp` / `MoveDown`|
//! | Ctrl+Home / Ctrl+End       | `SeekToBegin` / `SeekToEnd`                     |
//! | Text, paste, IME commit    | `Insert(text)`                                  |
//! | Cut                        | `Erase`                                         |
//! | Pointer down (left)        | `AnchorRelease` (unless shift), `FocusAt`, `AnchorCapture` |
//! | Pointer move while down    | `FocusAt`                                       |
//! | Pointer up (left)          | `AnchorRelease` (unless shift)                  |
//! | Wheel                      | `Scroll`                                        |
//!
//! While an IME composition is active, text input and editing keys are
//! swallowed; the committed text arrives with the composition end.

use folio_core::{
    Command, InputEvent, KeyCode, KeyEvent, Modifiers, MouseButton, MouseEvent, MouseEventKind,
};
use smallvec::{SmallVec, smallvec};

/// Commands produced by one input event.
pub type Commands = SmallVec<[Command; 3]>;

/// Stateful translator from [`InputEvent`]s to [`Command`]s.
#[derive(Debug, Clone, PartialEq)]
pub struct InputAdapter {
    scale: f32,
    shift: bool,
    button: bool,
    composing: bool,
}

impl Default for InputAdapter {
    fn default() -> Self {
        Self::new()
    }
}

impl InputAdapter {
    /// An adapter with a device pixel ratio of 1.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            scale: 1.0,
            shift: false,
            button: false,
            composing: false,
        }
    }

    /// Set the device pixel ratio applied to pointer coordinates and
    /// wheel deltas.
    #[must_use]
    pub const fn with_scale(mut self, scale: f32) -> Self {
        self.scale = scale;
        self
    }

    /// Device pixel ratio.
    #[must_use]
    pub const fn scale(&self) -> f32 {
        self.scale
    }

    /// Whether shift is held.
    #[must_use]
    pub const fn is_shift_down(&self) -> bool {
        self.shift
    }

    /// Whether the primary pointer button is held.
    #[must_use]
    pub const fn is_pointer_down(&self) -> bool {
        self.button
    }

    /// Whether an IME composition is in progress.
    #[must_use]
    pub const fn is_composing(&self) -> bool {
        self.composing
    }

    /// Translate one event.
    pub fn handle(&mut self, event: &InputEvent) -> Commands {
        match event {
            InputEvent::Key(key) => self.key(key),
            InputEvent::Text(text) => {
                if self.composing {
                    Commands::new()
                } else {
                    insert(text)
                }
            }
            InputEvent::CompositionStart => {
                self.composing = true;
                Commands::new()
            }
            InputEvent::CompositionUpdate(_) => Commands::new(),
            InputEvent::CompositionEnd(text) => {
                self.composing = false;
                insert(text)
            }
            InputEvent::Paste(text) => insert(text),
            InputEvent::Cut => smallvec![Command::Erase],
            InputEvent::Mouse(mouse) => self.mouse(mouse),
        }
    }

    fn key(&mut self, key: &KeyEvent) -> Commands {
        if key.code == KeyCode::Shift {
            self.shift = key.is_down();
            return if self.shift {
                smallvec![Command::AnchorCapture]
            } else {
                smallvec![Command::AnchorRelease]
            };
        }
        if !key.is_down() || self.composing {
            return Commands::new();
        }

        let ctrl = key.modifiers.contains(Modifiers::CTRL);
        let command = match key.code {
            KeyCode::Enter => Command::Insert("\n".to_owned()),
            KeyCode::Backspace => Command::DeleteBackward,
            KeyCode::Delete => Command::DeleteForward,
            KeyCode::Left => Command::MoveLeft,
            KeyCode::Right => Command::MoveRight,
            KeyCode::Up => Command::MoveUp,
            KeyCode::Down => Command::MoveDown,
            KeyCode::Home if ctrl => Command::SeekToBegin,
            KeyCode::End if ctrl => Command::SeekToEnd,
            _ => return Commands::new(),
        };
        smallvec![command]
    }

    fn mouse(&mut self, mouse: &MouseEvent) -> Commands {
        let (x, y) = (mouse.x * self.scale, mouse.y * self.scale);
        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                self.button = true;
                let mut commands = Commands::new();
                if !self.shift {
                    commands.push(Command::AnchorRelease);
                }
                commands.push(Command::FocusAt { x, y });
                commands.push(Command::AnchorCapture);
                commands
            }
            MouseEventKind::Moved if self.button => smallvec![Command::FocusAt { x, y }],
            MouseEventKind::Up(MouseButton::Left) => {
                self.button = false;
                if self.shift {
                    Commands::new()
                } else {
                    smallvec![Command::AnchorRelease]
                }
            }
            MouseEventKind::Wheel { delta } => smallvec![Command::Scroll(delta * self.scale)],
            MouseEventKind::Down(_) | MouseEventKind::Up(_) | MouseEventKind::Moved => {
                Commands::new()
            }
        }
    }
}

fn insert(text: &str) -> Commands {
    if text.is_empty() {
        Commands::new()
    } else {
        smallvec![Command::Insert(text.to_owned())]
    }
}
