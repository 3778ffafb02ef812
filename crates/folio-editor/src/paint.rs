#![forbid(unsafe_code)]

//! Painting the editor onto a [`Renderer`].
//!
//! Order: viewport background, then for each page its white box, selection
//! highlights, glyphs and (optionally) the debug overlay, then the caret.
//! Everything below the background is shifted up by `view_y`.

use folio_core::geometry::Rect;
use folio_layout::{Character, Page};
use folio_render::{Color, Renderer};
use folio_text::{FontMetrics, TextMeasure};

use crate::editor::Editor;

/// Viewport background.
pub const BACKGROUND: Color = Color::hex(0xececec);
/// Page fill.
pub const PAGE: Color = Color::WHITE;
/// Selection highlight.
pub const SELECTION: Color = Color::hex(0xa8cdf3);
/// Glyphs.
pub const TEXT: Color = Color::BLACK;
/// Caret bar.
pub const CARET: Color = Color::BLACK;
/// Debug overlay lines.
pub const OVERLAY: Color = Color::RED;

pub(crate) fn paint<M, R>(editor: &Editor<M>, renderer: &mut R)
where
    M: TextMeasure,
    R: Renderer + ?Sized,
{
    let viewport = editor.viewport();
    renderer.save();
    renderer.draw_rectangle(
        Rect::from_size(viewport.width(), viewport.height()),
        BACKGROUND,
    );
    renderer.translate(0.0, -viewport.view_y());

    for page in editor.layout().pages() {
        paint_page(editor, page, renderer);
    }

    renderer.draw_rectangle(editor.caret_rect(), CARET);
    renderer.restore();
}

fn paint_page<M, R>(editor: &Editor<M>, page: &Page, renderer: &mut R)
where
    M: TextMeasure,
    R: Renderer + ?Sized,
{
    let doc = editor.characters();
    let metrics = editor.metrics();
    let config = editor.config();

    renderer.save();
    let origin = page.origin();
    renderer.translate(origin.x, origin.y);
    renderer.draw_rectangle(page.bound(), PAGE);
    renderer.translate(page.padding(), page.padding());

    for row in page.rows() {
        let glyphs = row.characters(doc);
        let highlighted = glyphs
            .iter()
            .chain(row.linebreak(doc))
            .filter(|c| c.is_selected());
        for c in highlighted {
            renderer.draw_rectangle(c.bound(metrics), SELECTION);
        }
        for c in glyphs {
            renderer.draw_text(&config.font, c.value(), c.x(), c.baseline(), TEXT);
        }
        if config.debug_overlay && !glyphs.is_empty() {
            paint_overlay(glyphs, row.baseline(), row.width(), metrics, renderer);
        }
    }

    renderer.restore();
}

fn paint_overlay<R: Renderer + ?Sized>(
    glyphs: &[Character],
    baseline: f32,
    width: f32,
    metrics: &FontMetrics,
    renderer: &mut R,
) {
    renderer.draw_rectangle(Rect::new(0.0, baseline, width, 1.0), OVERLAY);
    let midline = baseline - metrics.midline_offset();
    renderer.draw_rectangle(Rect::new(0.0, midline, width, 1.0), OVERLAY);
    for c in glyphs {
        renderer.draw_rectangle(
            Rect::new(c.center(), baseline - metrics.height, 1.0, metrics.height),
            OVERLAY,
        );
    }
}
