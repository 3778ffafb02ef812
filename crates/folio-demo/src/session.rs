#![forbid(unsafe_code)]

//! The scripted session the demo plays back.
//!
//! The script stands in for a host: it feeds keyboard, pointer and
//! clipboard events through an [`InputAdapter`] and paints every frame into
//! a [`RecordingRenderer`].

use std::fmt::{self, Write as _};

use folio::prelude::*;
use folio::{
    Character, KeyCode, KeyEvent, Modifiers, MouseButton, MouseEvent, MouseEventKind, Point,
};

use crate::cli::Opts;

/// A named step of the script.
#[derive(Debug, Clone)]
pub struct Step {
    pub label: &'static str,
    pub events: Vec<InputEvent>,
}

impl Step {
    fn new(label: &'static str, events: impl IntoIterator<Item = InputEvent>) -> Self {
        Self {
            label,
            events: events.into_iter().collect(),
        }
    }
}

/// Editor state captured after a step.
#[derive(Debug, Clone, PartialEq)]
pub struct Frame {
    pub label: &'static str,
    pub location: Location,
    pub anchor: usize,
    pub focus: usize,
    pub view_y: f32,
    pub pages: usize,
    pub draw_calls: usize,
}

impl fmt::Display for Frame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:<22} caret p{} r{} o{}  sel {}..{}  view_y {:>7.1}  pages {}  draws {}",
            self.label,
            self.location.page,
            self.location.row,
            self.location.offset,
            self.anchor,
            self.focus,
            self.view_y,
            self.pages,
            self.draw_calls,
        )
    }
}

/// Build the editor configuration from the command line.
pub fn config(opts: &Opts) -> folio::Result<EditorConfig> {
    let mut config = match &opts.config {
        Some(path) => folio::load_config(path)?,
        None => EditorConfig::default(),
    };
    if let Some((width, height)) = opts.viewport {
        config = config.with_viewport(width, height);
    }
    if opts.debug_overlay {
        config = config.with_debug_overlay(true);
    }
    config.validate()?;
    Ok(config)
}

/// The demo script for a document whose first page content starts at
/// `content` (document coordinates).
pub fn script(text: &str, content: Point, line_height: f32) -> Vec<Step> {
    let key = |code| InputEvent::Key(KeyEvent::new(code));
    let ctrl = |code| InputEvent::Key(KeyEvent::new(code).with_modifiers(Modifiers::CTRL));
    let mouse = |kind, x, y| InputEvent::Mouse(MouseEvent::new(kind, x, y));
    let first_row = content.y + line_height * 0.5;

    vec![
        Step::new("type", [InputEvent::Paste(text.to_owned())]),
        Step::new("seek to begin", [ctrl(KeyCode::Home)]),
        Step::new("down twice", [key(KeyCode::Down), key(KeyCode::Down)]),
        Step::new("right three", std::iter::repeat_n(key(KeyCode::Right), 3)),
        Step::new("up (column kept)", [key(KeyCode::Up)]),
        Step::new("shift select", [
            key(KeyCode::Shift),
            key(KeyCode::Right),
            key(KeyCode::Right),
            key(KeyCode::Right),
            InputEvent::Key(KeyEvent::release(KeyCode::Shift)),
        ]),
        Step::new("cut", [InputEvent::Cut]),
        Step::new("compose", [
            InputEvent::CompositionStart,
            InputEvent::CompositionUpdate("ni".into()),
            InputEvent::CompositionEnd("你".into()),
        ]),
        Step::new("click and drag", [
            mouse(MouseEventKind::Down(MouseButton::Left), content.x + 1.0, first_row),
            mouse(MouseEventKind::Moved, content.x + 60.0, first_row),
            mouse(MouseEventKind::Up(MouseButton::Left), content.x + 60.0, first_row),
        ]),
        Step::new("type over selection", [InputEvent::Text("Hello".into())]),
        Step::new("seek to end", [ctrl(KeyCode::End)]),
        Step::new("new paragraph", [
            key(KeyCode::Enter),
            InputEvent::Text("The end.".into()),
        ]),
        Step::new("wheel up", [mouse(MouseEventKind::Wheel { delta: -120.0 }, 0.0, 0.0)]),
        Step::new("backspace", [key(KeyCode::Backspace)]),
    ]
}

/// Play `steps` against `editor`, painting after each one.
pub fn play<M: TextMeasure>(
    editor: &mut Editor<M>,
    input: &mut InputAdapter,
    steps: &[Step],
) -> Vec<Frame> {
    let mut canvas = RecordingRenderer::new();
    let mut frames = Vec::with_capacity(steps.len());
    for step in steps {
        let _span = tracing::info_span!("folio.demo.step", label = step.label).entered();
        for event in &step.events {
            editor.apply_all(input.handle(event));
        }
        canvas.clear();
        editor.render(&mut canvas);
        let location = editor.location();
        tracing::debug!(
            page = location.page,
            row = location.row,
            offset = location.offset,
            "step done"
        );
        frames.push(Frame {
            label: step.label,
            location,
            anchor: editor.anchor(),
            focus: editor.focus(),
            view_y: editor.view_y(),
            pages: editor.layout().page_count(),
            draw_calls: canvas.ops().len(),
        });
    }
    frames
}

/// Row-by-row dump of the final layout.
pub fn dump_layout<M: TextMeasure>(editor: &Editor<M>) -> String {
    let doc = editor.characters();
    let mut out = String::new();
    for page in editor.layout().pages() {
        let origin = page.origin();
        let _ = writeln!(out, "page {} at ({}, {})", page.index(), origin.x, origin.y);
        for (i, row) in page.rows().iter().enumerate() {
            let text: String = row.characters(doc).iter().map(Character::value).collect();
            let mark = if row.has_linebreak() { "\u{21b5}" } else { "" };
            let _ = writeln!(out, "  {i:>2} @{:>6.1} | {text}{mark}", row.baseline());
        }
    }
    out
}
