#![forbid(unsafe_code)]

//! Translation stack behaviour of the recording backend.

use folio_core::geometry::{Point, Rect};
use folio_render::{Color, DrawOp, RecordingRenderer, Renderer};
use proptest::prelude::*;

fn paint_page(renderer: &mut dyn Renderer, origin: Point) {
    renderer.save();
    renderer.translate(origin.x, origin.y);
    renderer.draw_rectangle(Rect::from_size(100.0, 50.0), Color::WHITE);
    renderer.restore();
}

#[test]
fn dyn_renderer_paints_pages_at_their_origin() {
    let mut recorder = RecordingRenderer::new();
    recorder.translate(0.0, -30.0);
    paint_page(&mut recorder, Point::new(40.0, 40.0));
    paint_page(&mut recorder, Point::new(40.0, 110.0));

    let rects: Vec<Rect> = recorder.rectangles(Color::WHITE).collect();
    assert_eq!(rects, vec![
        Rect::new(40.0, 10.0, 100.0, 50.0),
        Rect::new(40.0, 80.0, 100.0, 50.0),
    ]);
    assert_eq!(recorder.offset(), Point::new(0.0, -30.0));
}

#[test]
fn clear_resets_everything() {
    let mut recorder = RecordingRenderer::new();
    recorder.save();
    recorder.translate(1.0, 1.0);
    recorder.draw_rectangle(Rect::from_size(1.0, 1.0), Color::BLACK);
    recorder.clear();
    assert!(recorder.ops().is_empty());
    assert_eq!(recorder.depth(), 0);
    assert_eq!(recorder.offset(), Point::default());
}

proptest! {
    #[test]
    fn balanced_nesting_returns_to_start(
        shifts in proptest::collection::vec((-500i16..500, -500i16..500), 0..16)
    ) {
        let mut recorder = RecordingRenderer::new();
        for (dx, dy) in &shifts {
            recorder.save();
            recorder.translate(f32::from(*dx), f32::from(*dy));
        }
        recorder.draw_rectangle(Rect::from_size(1.0, 1.0), Color::RED);
        for _ in &shifts {
            recorder.restore();
        }
        prop_assert_eq!(recorder.offset(), Point::default());
        prop_assert_eq!(recorder.depth(), 0);

        let (sx, sy) = shifts
            .iter()
            .fold((0.0f32, 0.0f32), |(x, y), (dx, dy)| (x + f32::from(*dx), y + f32::from(*dy)));
        match &recorder.ops()[0] {
            DrawOp::Rectangle { rect, .. } => {
                prop_assert_eq!(rect.x, sx);
                prop_assert_eq!(rect.y, sy);
            }
            DrawOp::Text { .. } => prop_assert!(false, "expected a rectangle"),
        }
    }
}
