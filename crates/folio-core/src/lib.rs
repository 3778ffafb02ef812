#![forbid(unsafe_code)]

//! Core: geometry, input events, and the editor command vocabulary.

pub mod command;
pub mod event;
pub mod geometry;

pub use command::Command;
pub use event::{
    InputEvent, KeyCode, KeyEvent, KeyEventKind, Modifiers, MouseButton, MouseEvent, MouseEventKind,
};
pub use geometry::{Point, Rect};
