#![forbid(unsafe_code)]

//! End-to-end editing scenarios against a deterministic monospace measurer.
//!
//! Geometry: 20px font at 1.5 spacing (line height 30), default pages
//! (500x600, padding 40, gap 20, margin 40). Every ASCII unit is 10px wide,
//! so a row holds 42 of them and a page holds 17 rows.

use folio_editor::{Editor, EditorConfig};
use folio_layout::{Character, Location};
use folio_text::{Font, MonospaceMeasure};
use proptest::prelude::*;

fn config() -> EditorConfig {
    EditorConfig::default()
        .with_font(Font::new("mono", 20.0))
        .with_line_spacing(1.5)
}

fn editor() -> Editor<MonospaceMeasure> {
    Editor::new(config(), MonospaceMeasure::new(0.5)).expect("valid config")
}

fn editor_with(text: &str) -> Editor<MonospaceMeasure> {
    let mut e = editor();
    e.insert(text);
    e
}

fn row_text(e: &Editor<MonospaceMeasure>, page: usize, row: usize) -> String {
    e.layout().page(page).rows()[row]
        .characters(e.characters())
        .iter()
        .map(Character::value)
        .collect()
}

fn select(e: &mut Editor<MonospaceMeasure>, anchor: usize, focus: usize) {
    e.set_focus(anchor);
    e.anchor_capture();
    e.set_focus(focus);
    e.anchor_release();
}

// ----------------------------------------------------------------------
// Document & selection
// ----------------------------------------------------------------------

#[test]
fn insert_into_empty_document_builds_two_rows() {
    let e = editor_with("ab\ncd");
    let page = e.layout().page(0);
    assert_eq!(page.rows().len(), 2);
    assert_eq!(row_text(&e, 0, 0), "ab");
    assert!(page.rows()[0].has_linebreak());
    assert_eq!(row_text(&e, 0, 1), "cd");
    assert!(!page.rows()[1].has_linebreak());
    assert_eq!(e.len(), 5);
    assert_eq!(e.layout().len(), 5);
    assert_eq!(e.focus(), 5);
    assert_eq!(e.location(), Location::new(0, 1, 2));
}

#[test]
fn insert_replaces_selection() {
    let mut e = editor_with("hello world");
    select(&mut e, 0, 5);
    e.insert("goodbye");
    assert_eq!(e.text(), "goodbye world");
    assert_eq!(e.focus(), 7);
    assert_eq!(e.anchor(), 7);
}

#[test]
fn grapheme_clusters_are_single_units() {
    let e = editor_with("e\u{301}测\r\nx");
    assert_eq!(e.len(), 4);
    assert_eq!(e.characters()[1].width(), 20.0);
    assert!(e.characters()[2].is_line_break());
}

#[test]
fn delete_backward_and_forward_remove_one_unit() {
    let mut e = editor_with("abc");
    e.set_focus(2);
    e.delete_backward();
    assert_eq!(e.text(), "ac");
    assert_eq!(e.focus(), 1);
    e.delete_forward();
    assert_eq!(e.text(), "a");
    assert_eq!(e.focus(), 1);
}

#[test]
fn delete_backward_joins_lines() {
    let mut e = editor_with("ab\ncd");
    e.set_focus(3);
    e.delete_backward();
    assert_eq!(e.text(), "abcd");
    assert_eq!(e.layout().page(0).rows().len(), 1);
}

#[test]
fn delete_with_selection_erases_it() {
    let mut e = editor_with("abcdef");
    select(&mut e, 1, 4);
    e.delete_forward();
    assert_eq!(e.text(), "aef");
    assert_eq!(e.focus(), 1);
}

#[test]
fn boundary_deletes_are_noops() {
    let mut e = editor_with("abc");
    e.set_focus(0);
    e.delete_backward();
    assert_eq!(e.text(), "abc");
    e.seek_to_end();
    e.delete_forward();
    assert_eq!(e.text(), "abc");
    assert_eq!(e.focus(), 3);
}

#[test]
fn delete_keeps_capture_state() {
    let mut e = editor_with("abc");
    e.anchor_capture();
    e.delete_backward();
    assert_eq!(e.text(), "ab");
    assert!(e.is_capturing());
}

#[test]
fn selection_flags_track_anchor_and_focus() {
    let mut e = editor_with("abcdef");
    select(&mut e, 4, 2);
    let flags: Vec<bool> = e.characters().iter().map(Character::is_selected).collect();
    assert_eq!(flags, vec![false, false, true, true, false, false]);
    assert_eq!(e.selection(), "cd");
    e.caret_move_right();
    assert!(e.characters().iter().all(|c| !c.is_selected()));
}

// ----------------------------------------------------------------------
// Navigation
// ----------------------------------------------------------------------

#[test]
fn move_down_from_row_end_uses_end_x() {
    let mut e = editor_with("abcd\nxy");
    e.set_focus(4);
    assert_eq!(e.location(), Location::new(0, 0, 4));
    assert_eq!(e.column(), None);
    e.caret_move_down();
    // row0 end x = 40; row1 stops 0, 10, 20
    assert_eq!(e.location(), Location::new(0, 1, 2));
    assert_eq!(e.focus(), 7);
}

#[test]
fn move_down_picks_nearest_stop() {
    let mut e = editor_with("ab\nwxyz");
    e.set_focus(2);
    e.caret_move_down();
    assert_eq!(e.location(), Location::new(0, 1, 2));
    assert_eq!(e.focus(), 5);
}

#[test]
fn column_memory_survives_short_rows() {
    let mut e = editor_with("abcdef\nx\nabcdef");
    e.set_focus(5);
    e.caret_move_down();
    assert_eq!(e.location(), Location::new(0, 1, 1));
    assert_eq!(e.column(), Some(50.0));
    e.caret_move_down();
    assert_eq!(e.location(), Location::new(0, 2, 5));
    e.caret_move_up();
    e.caret_move_up();
    assert_eq!(e.location(), Location::new(0, 0, 5));
}

#[test]
fn horizontal_move_forgets_column() {
    let mut e = editor_with("abcdef\nx\nabcdef");
    e.set_focus(5);
    e.caret_move_down();
    e.caret_move_left();
    assert_eq!(e.column(), None);
    e.caret_move_down();
    assert_eq!(e.location(), Location::new(0, 2, 0));
}

#[test]
fn vertical_moves_clamp_at_document_edges() {
    let mut e = editor_with("abc\ndef");
    e.set_focus(2);
    e.caret_move_up();
    assert_eq!(e.location(), Location::new(0, 0, 0));
    e.set_focus(5);
    e.caret_move_down();
    assert_eq!(e.location(), Location::new(0, 1, 3));
    assert_eq!(e.focus(), 7);
}

#[test]
fn left_and_right_cross_line_breaks() {
    let mut e = editor_with("ab\ncd");
    e.set_focus(3);
    assert_eq!(e.location(), Location::new(0, 1, 0));
    e.caret_move_left();
    assert_eq!(e.location(), Location::new(0, 0, 2));
    assert_eq!(e.focus(), 2);
    e.caret_move_right();
    assert_eq!(e.location(), Location::new(0, 1, 0));
    assert_eq!(e.focus(), 3);
}

#[test]
fn left_and_right_clamp_at_document_edges() {
    let mut e = editor_with("ab");
    e.caret_move_right();
    assert_eq!(e.focus(), 2);
    e.seek_to_begin();
    e.caret_move_left();
    assert_eq!(e.focus(), 0);
    assert_eq!(e.location(), Location::new(0, 0, 0));
}

#[test]
fn moves_resolve_selection_to_its_edges() {
    let mut e = editor_with("abcdef");
    select(&mut e, 1, 4);
    e.caret_move_left();
    assert_eq!((e.anchor(), e.focus()), (1, 1));

    select(&mut e, 4, 1);
    e.caret_move_right();
    assert_eq!((e.anchor(), e.focus()), (4, 4));

    select(&mut e, 2, 5);
    e.caret_move_up();
    assert_eq!((e.anchor(), e.focus()), (2, 2));

    select(&mut e, 5, 2);
    e.caret_move_down();
    assert_eq!((e.anchor(), e.focus()), (5, 5));
}

#[test]
fn capture_extends_through_moves() {
    let mut e = editor_with("ab\ncd");
    e.seek_to_begin();
    e.anchor_capture();
    e.caret_move_down();
    e.caret_move_right();
    assert_eq!(e.anchor(), 0);
    assert_eq!(e.selection(), "ab\nc");
    assert!(e.characters()[2].is_selected());
}

#[test]
fn navigation_crosses_pages() {
    let text = (0..20).map(|i| format!("r{i:02}")).collect::<Vec<_>>().join("\n");
    let mut e = editor_with(&text);
    assert_eq!(e.layout().page_count(), 2);

    let first_on_second_page = e
        .layout()
        .offset_from_location(Location::new(1, 0, 0));
    e.set_focus(first_on_second_page);
    assert_eq!(e.location(), Location::new(1, 0, 0));

    e.caret_move_left();
    assert_eq!(e.location(), Location::new(0, 16, 3));
    e.caret_move_right();
    assert_eq!(e.location(), Location::new(1, 0, 0));

    e.caret_move_up();
    assert_eq!(e.location(), Location::new(0, 16, 0));
    e.caret_move_down();
    assert_eq!(e.location(), Location::new(1, 0, 0));
}

// ----------------------------------------------------------------------
// Hit testing & viewport
// ----------------------------------------------------------------------

#[test]
fn focus_by_snaps_above_first_row_and_below_last_row() {
    let mut e = editor_with("ab\ncd");
    // page box starts at y 40, first row top at 80
    assert!(e.focus_by(200.0, 60.0));
    assert_eq!(e.location(), Location::new(0, 0, 0));
    assert!(e.focus_by(85.0, 500.0));
    assert_eq!(e.location(), Location::new(0, 1, 2));
    assert_eq!(e.focus(), 5);
}

#[test]
fn focus_by_picks_row_and_offset() {
    let mut e = editor_with("abcd\nwxyz");
    // second row midline: 80 + 50 - 10 = 120; x 80 + 21 is nearest stop 2
    assert!(e.focus_by(101.0, 120.0));
    assert_eq!(e.location(), Location::new(0, 1, 2));
    assert_eq!(e.focus(), 7);
}

#[test]
fn focus_by_outside_pages_is_ignored() {
    let mut e = editor_with("abc");
    assert!(!e.focus_by(5.0, 5.0));
    assert_eq!(e.focus(), 3);
}

#[test]
fn focus_by_accounts_for_scroll() {
    let text = "line\n".repeat(40);
    let mut e = editor_with(&text);
    e.seek_to_begin();
    e.scroll(-1.0e6);
    e.scroll(660.0);
    assert_eq!(e.view_y(), 660.0);
    // viewport y 40 is document y 700: inside the second page box, above
    // its first row at 720
    assert!(e.focus_by(100.0, 40.0));
    assert_eq!(e.location().page, 1);
    assert_eq!(e.location().row, 0);
}

#[test]
fn viewport_follows_caret() {
    let text = "line\n".repeat(40);
    let mut e = editor_with(&text);
    let caret = e.caret_rect();
    assert!(e.view_y() > 0.0);
    assert!(caret.bottom() - e.view_y() <= e.viewport().height());

    // first baseline 100, kept one line height below the top edge
    e.seek_to_begin();
    assert_eq!(e.view_y(), 70.0);
}

#[test]
fn scroll_is_clamped_to_content() {
    let text = "line\n".repeat(40);
    let mut e = editor_with(&text);
    e.scroll(1.0e6);
    assert_eq!(e.view_y(), e.content_height() - e.viewport().height());
    e.scroll(-1.0e6);
    assert_eq!(e.view_y(), 0.0);
}

#[test]
fn short_document_never_scrolls() {
    let mut e = editor_with("abc");
    e.scroll(500.0);
    assert_eq!(e.view_y(), 0.0);
}

// ----------------------------------------------------------------------
// Properties
// ----------------------------------------------------------------------

fn text() -> impl Strategy<Value = String> {
    proptest::collection::vec(
        prop_oneof![
            6 => Just("a"),
            2 => Just(" "),
            2 => Just("\n"),
            1 => Just("测"),
        ],
        0..200,
    )
    .prop_map(|parts| parts.concat())
}

proptest! {
    #[test]
    fn insert_grows_document(initial in text(), added in text(), at in 0usize..400) {
        let mut e = editor_with(&initial);
        let k = at.min(e.len());
        e.set_focus(k);
        let before = e.len();
        let added_len = folio_text::grapheme_count(&added);

        e.insert(&added);

        prop_assert_eq!(e.len(), before + added_len);
        prop_assert_eq!(e.focus(), k + added_len);
        prop_assert_eq!(e.anchor(), e.focus());

        let chars = e.characters();
        for i in k..(k + added_len).saturating_sub(1) {
            let (a, b) = (&chars[i], &chars[i + 1]);
            if a.is_line_break() {
                prop_assert_eq!(b.x(), 0.0);
            } else {
                prop_assert!(b.x() == a.right() || b.x() == 0.0);
            }
        }
    }

    #[test]
    fn erase_shrinks_document(initial in text(), a in 0usize..400, b in 0usize..400) {
        let mut e = editor_with(&initial);
        let len = e.len();
        let (begin, end) = (a.min(b).min(len), a.max(b).min(len));
        select(&mut e, begin, end);

        e.erase();

        prop_assert_eq!(e.len(), len - (end - begin));
        prop_assert_eq!(e.focus(), begin);
        prop_assert_eq!(e.anchor(), begin);
    }

    #[test]
    fn caret_location_matches_focus(initial in text(), moves in proptest::collection::vec(0u8..4, 0..40)) {
        let mut e = editor_with(&initial);
        for m in moves {
            match m {
                0 => e.caret_move_left(),
                1 => e.caret_move_right(),
                2 => e.caret_move_up(),
                _ => e.caret_move_down(),
            }
            prop_assert_eq!(e.layout().offset_from_location(e.location()), e.focus());
            prop_assert!(e.view_y() >= 0.0);
            prop_assert!(e.view_y() <= e.viewport().max_scroll(e.content_height()));
        }
    }
}
