//! End-to-end interaction tests driving [`App`] with synthetic key and mouse
//! events, the way the event loop in `main.rs` does.

use std::fs;
use std::io::Cursor;
use std::path::PathBuf;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use image::{DynamicImage, ImageOutputFormat, Rgb as ImgRgb, RgbImage};

use tile_puzzle::app::App;
use tile_puzzle::input::{PointerEvent, PointerKind};
use tile_puzzle::term::{FrameBuffer, Viewport};
use tile_puzzle::types::{Mode, Position, PuzzleAction, TileId};

const VP: Viewport = Viewport {
    width: 80,
    height: 40,
};

fn id(n: u8) -> TileId {
    TileId::new(n).unwrap()
}

fn pos(n: u8) -> Position {
    Position::new(n).unwrap()
}

fn key(app: &mut App, code: KeyCode) {
    app.handle_key(KeyEvent::new(code, KeyModifiers::NONE));
}

fn type_str(app: &mut App, s: &str) {
    for ch in s.chars() {
        key(app, KeyCode::Char(ch));
    }
}

fn slot_center(app: &App, p: u8) -> (u16, u16) {
    let r = app.view().layout(VP).slots[p as usize];
    (r.x + r.w / 2, r.y + r.h / 2)
}

fn pointer(app: &mut App, kind: PointerKind, (x, y): (u16, u16)) {
    app.handle_pointer(PointerEvent { kind, x, y }, VP);
}

fn drag(app: &mut App, from: u8, to: u8) {
    let a = slot_center(app, from);
    let b = slot_center(app, to);
    pointer(app, PointerKind::Press, a);
    pointer(app, PointerKind::Move, b);
    pointer(app, PointerKind::Release, b);
}

fn click_button(app: &mut App, action: PuzzleAction) {
    let layout = app.view().layout(VP);
    let (_, r) = layout
        .buttons
        .iter()
        .find(|(a, _)| *a == action)
        .copied()
        .unwrap();
    pointer(app, PointerKind::Press, (r.x + 1, r.y));
    pointer(app, PointerKind::Release, (r.x + 1, r.y));
}

fn render(app: &mut App) -> FrameBuffer {
    let mut fb = FrameBuffer::new(VP.width, VP.height);
    app.render_into(VP, &mut fb);
    fb
}

fn temp_file(name: &str, bytes: &[u8]) -> PathBuf {
    let path = std::env::temp_dir().join(format!("tile-puzzle-{}-{}", std::process::id(), name));
    fs::write(&path, bytes).unwrap();
    path
}

fn png_bytes() -> Vec<u8> {
    let img = RgbImage::from_fn(30, 30, |x, y| ImgRgb([(x * 8) as u8, (y * 8) as u8, 128]));
    let mut out = Cursor::new(Vec::new());
    DynamicImage::ImageRgb8(img)
        .write_to(&mut out, ImageOutputFormat::Png)
        .unwrap();
    out.into_inner()
}

#[test]
fn drag_and_drop_swaps_tiles() {
    let mut app = App::new(Some(1));
    drag(&mut app, 0, 1);

    let puzzle = app.session().puzzle();
    assert_eq!(puzzle.position_of(id(1)), pos(1));
    assert_eq!(puzzle.position_of(id(2)), pos(0));
    assert_eq!(app.session().dragging(), None);
    assert_eq!(app.session().bounce().map(|b| b.tile), Some(id(1)));
    assert!(!app.session().solved_notice());
}

#[test]
fn bounce_clears_after_ticks() {
    let mut app = App::new(Some(1));
    drag(&mut app, 4, 8);
    assert!(app.session().bounce().is_some());

    for _ in 0..12 {
        app.tick(16);
    }
    assert!(app.session().bounce().is_some());
    app.tick(16);
    assert!(app.session().bounce().is_none());
}

#[test]
fn click_without_movement_is_not_a_drop() {
    let mut app = App::new(Some(1));
    drag(&mut app, 0, 1);
    let before = app.session().puzzle().clone();

    let c = slot_center(&app, 3);
    pointer(&mut app, PointerKind::Press, c);
    assert_eq!(app.session().dragging(), Some(id(4)));
    pointer(&mut app, PointerKind::Release, c);

    assert_eq!(app.session().puzzle(), &before);
    assert_eq!(app.session().dragging(), None);
}

#[test]
fn release_outside_grid_cancels_drag() {
    let mut app = App::new(Some(1));
    let c = slot_center(&app, 2);
    pointer(&mut app, PointerKind::Press, c);
    pointer(&mut app, PointerKind::Move, (0, 39));
    pointer(&mut app, PointerKind::Release, (0, 39));

    assert!(app.session().puzzle().is_solved());
    assert_eq!(app.session().dragging(), None);
    assert!(app.session().bounce().is_none());
}

#[test]
fn solving_raises_notice_until_acknowledged() {
    let mut app = App::new(Some(1));
    drag(&mut app, 0, 1);
    drag(&mut app, 1, 0);

    assert!(app.session().puzzle().is_solved());
    assert!(app.session().solved_notice());
    assert!(render(&mut app).text().contains("Done !"));

    // Board ignores drags while the notice is up.
    let c = slot_center(&app, 5);
    pointer(&mut app, PointerKind::Press, c);
    assert!(!app.session().solved_notice());
    assert_eq!(app.session().dragging(), None);

    drag(&mut app, 0, 1);
    drag(&mut app, 1, 0);
    assert!(app.session().solved_notice());
    key(&mut app, KeyCode::Char('x'));
    assert!(!app.session().solved_notice());
    assert!(!render(&mut app).text().contains("Done !"));
}

#[test]
fn dropping_on_own_slot_checks_solved() {
    let mut app = App::new(Some(1));
    let c = slot_center(&app, 6);
    pointer(&mut app, PointerKind::Press, c);
    pointer(&mut app, PointerKind::Move, (c.0 + 1, c.1));
    pointer(&mut app, PointerKind::Release, c);

    assert!(app.session().puzzle().is_solved());
    assert!(app.session().solved_notice());
}

#[test]
fn shuffle_button_rearranges_without_notice() {
    let mut app = App::new(Some(3));
    let mut saw_unsolved = false;
    for _ in 0..5 {
        click_button(&mut app, PuzzleAction::Shuffle);
        assert!(app.session().puzzle().is_permutation());
        assert!(!app.session().solved_notice());
        saw_unsolved |= !app.session().puzzle().is_solved();
    }
    assert!(saw_unsolved);

    key(&mut app, KeyCode::Char('r'));
    assert!(app.session().puzzle().is_solved());
    assert!(!app.session().solved_notice());
}

#[test]
fn review_mode_blocks_drags() {
    let mut app = App::new(Some(1));
    key(&mut app, KeyCode::Char('v'));
    assert_eq!(app.session().mode(), Mode::Review);
    assert!(render(&mut app).text().contains("image here"));

    drag(&mut app, 0, 1);
    assert!(app.session().puzzle().is_solved());

    click_button(&mut app, PuzzleAction::ToggleReview);
    assert_eq!(app.session().mode(), Mode::Arrange);
    drag(&mut app, 0, 1);
    assert!(!app.session().puzzle().is_solved());
}

#[test]
fn upload_rejects_non_image() {
    let good = temp_file("kept.png", &png_bytes());
    let bad = temp_file("notes.txt", b"definitely not pixels");
    let mut app = App::new(Some(1));
    app.load_image(&good).unwrap();
    drag(&mut app, 0, 1);
    let before = app.session().puzzle().clone();
    let name = app.session().reference().map(|r| r.name().to_string());
    assert!(name.as_deref().unwrap().ends_with("kept.png"));

    click_button(&mut app, PuzzleAction::Upload);
    assert_eq!(app.prompt(), Some(""));
    type_str(&mut app, &bad.display().to_string());
    key(&mut app, KeyCode::Enter);

    assert_eq!(app.prompt(), None);
    assert_eq!(app.session().reference().map(|r| r.name().to_string()), name);
    assert_eq!(app.session().puzzle(), &before);
    assert!(render(&mut app).text().contains("kept.png"));

    assert!(app.load_image(&bad).is_err());
    assert_eq!(app.session().reference().map(|r| r.name().to_string()), name);
    let _ = fs::remove_file(good);
    let _ = fs::remove_file(bad);
}

#[test]
fn upload_png_resets_and_paints_tiles() {
    let path = temp_file("grad.png", &png_bytes());
    let mut app = App::new(Some(1));
    click_button(&mut app, PuzzleAction::Shuffle);

    key(&mut app, KeyCode::Char('u'));
    type_str(&mut app, &path.display().to_string());
    key(&mut app, KeyCode::Enter);

    assert!(app.session().reference().is_some());
    assert!(app.session().puzzle().is_solved());
    assert!(!app.session().solved_notice());

    let fb = render(&mut app);
    let (x, y) = slot_center(&app, 0);
    assert_eq!(fb.get(x, y).unwrap().ch, '▀');
    assert!(fb.text().contains("grad.png"));
    let _ = fs::remove_file(path);
}

#[test]
fn prompt_swallows_quit_key() {
    let mut app = App::new(Some(1));
    key(&mut app, KeyCode::Char('u'));
    type_str(&mut app, "q");
    assert!(!app.should_quit());
    assert_eq!(app.prompt(), Some("q"));
    assert!(render(&mut app).text().contains("q_"));

    // Pointer input is ignored while typing.
    drag(&mut app, 0, 1);
    assert!(app.session().puzzle().is_solved());

    key(&mut app, KeyCode::Esc);
    assert_eq!(app.prompt(), None);
    key(&mut app, KeyCode::Char('q'));
    assert!(app.should_quit());
}

#[test]
fn ctrl_c_quits_from_prompt() {
    let mut app = App::new(Some(1));
    key(&mut app, KeyCode::Char('u'));
    app.handle_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
    assert!(app.should_quit());
}

#[test]
fn fingerprint_follows_visible_state() {
    let mut app = App::new(Some(1));
    let start = app.fingerprint();
    assert_eq!(app.fingerprint(), start);

    key(&mut app, KeyCode::Char('u'));
    let opened = app.fingerprint();
    assert_ne!(opened, start);
    type_str(&mut app, "a");
    assert_ne!(app.fingerprint(), opened);
    key(&mut app, KeyCode::Esc);
    assert_eq!(app.fingerprint(), start);
}
