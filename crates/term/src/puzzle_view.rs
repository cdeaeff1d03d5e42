//! PuzzleView: maps a `PuzzleSnapshot` into a terminal framebuffer.
//!
//! This module is pure (no I/O). Layout is computed from the viewport alone, so
//! the same [`Layout`] drives both drawing and pointer hit-testing.

use crate::art::{ArtSize, TileArt};
use crate::core::PuzzleSnapshot;
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::{Mode, Position, PuzzleAction, TileId, GRID_SIZE, TILE_COUNT};

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rect {
    pub x: u16,
    pub y: u16,
    pub w: u16,
    pub h: u16,
}

impl Rect {
    pub const fn new(x: u16, y: u16, w: u16, h: u16) -> Self {
        Self { x, y, w, h }
    }

    pub fn contains(&self, x: u16, y: u16) -> bool {
        x >= self.x
            && y >= self.y
            && (x - self.x) < self.w
            && (y - self.y) < self.h
    }
}

/// What sits under a pointer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Hit {
    Slot(Position),
    Button(PuzzleAction),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnchorY {
    Center,
    Top,
}

/// Screen geometry for one viewport.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Layout {
    pub buttons: [(PuzzleAction, Rect); 4],
    /// Board including its border.
    pub frame: Rect,
    /// Area inside the border and padding: the review image fills this.
    pub canvas: Rect,
    /// Slot rectangles indexed by position.
    pub slots: [Rect; TILE_COUNT],
    pub status_y: u16,
}

impl Layout {
    pub fn art_size(&self) -> ArtSize {
        ArtSize {
            tile_w: self.slots[0].w,
            tile_h: self.slots[0].h,
            full_w: self.canvas.w,
            full_h: self.canvas.h,
        }
    }
}

/// Extra scene state layered over the snapshot.
#[derive(Debug, Clone, Copy, Default)]
pub struct Scene<'a> {
    pub art: Option<&'a TileArt>,
    /// Upload prompt text while the picker is open.
    pub prompt: Option<&'a str>,
}

const PAGE_BG: Rgb = Rgb::new(15, 15, 15);
const BOARD_BG: Rgb = Rgb::new(55, 64, 83);
const BOARD_BORDER: Rgb = Rgb::new(255, 192, 203);
const SLOT_BG: Rgb = Rgb::new(255, 255, 255);
const FALLBACK_BG: Rgb = Rgb::new(40, 60, 230);
const WHITE: Rgb = Rgb::new(255, 255, 255);

/// Toolbar, 3x3 board, status line and overlays.
pub struct PuzzleView {
    /// Preferred tile width in terminal columns.
    tile_w: u16,
    /// Preferred tile height in terminal rows.
    tile_h: u16,
    gap_x: u16,
    gap_y: u16,
    pad: u16,
    anchor_y: AnchorY,
}

impl Default for PuzzleView {
    fn default() -> Self {
        // 2:1 columns to rows looks square in most terminal fonts.
        Self {
            tile_w: 14,
            tile_h: 7,
            gap_x: 2,
            gap_y: 1,
            pad: 1,
            anchor_y: AnchorY::Center,
        }
    }
}

impl PuzzleView {
    pub fn new(tile_w: u16, tile_h: u16) -> Self {
        Self {
            tile_w: tile_w.max(1),
            tile_h: tile_h.max(1),
            ..Self::default()
        }
    }

    pub fn with_anchor_y(mut self, anchor_y: AnchorY) -> Self {
        self.anchor_y = anchor_y;
        self
    }

    /// Geometry for `viewport`. Tiles shrink (down to one cell) when the
    /// preferred size does not fit.
    pub fn layout(&self, viewport: Viewport) -> Layout {
        let n = GRID_SIZE as u16;
        let chrome_w = 2 + 2 * self.pad + (n - 1) * self.gap_x;
        // toolbar + blank + border + blank + status
        let chrome_h = 4 + 2 + 2 * self.pad + (n - 1) * self.gap_y;

        let fit_w = viewport.width.saturating_sub(chrome_w) / n;
        let fit_h = viewport.height.saturating_sub(chrome_h) / n;
        let tile_w = self.tile_w.min(fit_w).max(1);
        let tile_h = self.tile_h.min(fit_h).max(1);

        let canvas_w = n * tile_w + (n - 1) * self.gap_x;
        let canvas_h = n * tile_h + (n - 1) * self.gap_y;
        let frame_w = canvas_w + 2 * self.pad + 2;
        let frame_h = canvas_h + 2 * self.pad + 2;
        let total_h = frame_h + 4;

        let top = match self.anchor_y {
            AnchorY::Center => viewport.height.saturating_sub(total_h) / 2,
            AnchorY::Top => 0,
        };
        let frame = Rect::new(
            viewport.width.saturating_sub(frame_w) / 2,
            top + 2,
            frame_w,
            frame_h,
        );
        let canvas = Rect::new(
            frame.x + 1 + self.pad,
            frame.y + 1 + self.pad,
            canvas_w,
            canvas_h,
        );

        let mut slots = [Rect::default(); TILE_COUNT];
        for p in Position::all() {
            slots[p.index()] = Rect::new(
                canvas.x + p.col() as u16 * (tile_w + self.gap_x),
                canvas.y + p.row() as u16 * (tile_h + self.gap_y),
                tile_w,
                tile_h,
            );
        }

        Layout {
            buttons: toolbar(viewport.width, top),
            frame,
            canvas,
            slots,
            status_y: frame.y + frame.h + 1,
        }
    }

    /// Map a terminal cell to the button or slot under it.
    pub fn hit_test(&self, viewport: Viewport, x: u16, y: u16) -> Option<Hit> {
        let layout = self.layout(viewport);
        if let Some((action, _)) = layout.buttons.iter().find(|(_, r)| r.contains(x, y)) {
            return Some(Hit::Button(*action));
        }
        Position::all()
            .find(|p| layout.slots[p.index()].contains(x, y))
            .map(Hit::Slot)
    }

    /// Render the snapshot into an existing framebuffer.
    pub fn render_into(&self, snap: &PuzzleSnapshot, viewport: Viewport, fb: &mut FrameBuffer) {
        self.render_scene_into(snap, &Scene::default(), viewport, fb);
    }

    pub fn render_scene_into(
        &self,
        snap: &PuzzleSnapshot,
        scene: &Scene<'_>,
        viewport: Viewport,
        fb: &mut FrameBuffer,
    ) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(CellStyle::new(WHITE, PAGE_BG).into_cell(' '));

        let layout = self.layout(viewport);
        self.draw_toolbar(fb, &layout);

        let board = CellStyle::new(BOARD_BORDER, BOARD_BG);
        let f = layout.frame;
        fb.fill_rect(f.x, f.y, f.w, f.h, ' ', board);
        draw_border(fb, f, CellStyle::new(BOARD_BORDER, PAGE_BG));

        match snap.mode {
            Mode::Arrange => {
                for p in Position::all() {
                    let id = snap.slots[p.index()];
                    self.draw_slot(fb, &layout, p, id, snap, scene.art);
                }
            }
            Mode::Review => self.draw_review(fb, &layout, scene.art),
        }

        self.draw_status(fb, &layout, snap, scene.art, viewport);

        if snap.solved_notice {
            draw_dialog(fb, f, &["Done !", "", "press any key"]);
        }
        if let Some(text) = scene.prompt {
            let width = f.w.saturating_sub(6).max(8) as usize;
            let shown = tail(text, width.saturating_sub(1));
            let line = format!("{shown}_");
            draw_dialog(fb, f, &["Image path:", line.as_str(), "Enter load · Esc cancel"]);
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &PuzzleSnapshot, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, viewport, &mut fb);
        fb
    }

    pub fn render_scene(
        &self,
        snap: &PuzzleSnapshot,
        scene: &Scene<'_>,
        viewport: Viewport,
    ) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_scene_into(snap, scene, viewport, &mut fb);
        fb
    }

    fn draw_toolbar(&self, fb: &mut FrameBuffer, layout: &Layout) {
        for (action, r) in layout.buttons.iter() {
            let style = match action {
                PuzzleAction::Upload => CellStyle::new(Rgb::new(20, 20, 20), Rgb::new(235, 235, 235)),
                PuzzleAction::Shuffle => CellStyle::new(WHITE, Rgb::new(41, 41, 209)),
                PuzzleAction::Reset | PuzzleAction::ToggleReview => {
                    CellStyle::new(WHITE, Rgb::new(128, 128, 128))
                }
            }
            .bold();
            fb.fill_rect(r.x, r.y, r.w, r.h, ' ', style);
            fb.put_str(r.x + 1, r.y, action.label(), style);
        }
    }

    fn draw_slot(
        &self,
        fb: &mut FrameBuffer,
        layout: &Layout,
        p: Position,
        id: TileId,
        snap: &PuzzleSnapshot,
        art: Option<&TileArt>,
    ) {
        let slot = layout.slots[p.index()];
        fb.fill_rect(slot.x, slot.y, slot.w, slot.h, ' ', CellStyle::new(SLOT_BG, SLOT_BG));

        // Bouncing tiles are drawn lifted by a row.
        let mut r = slot;
        if snap.bouncing == Some(id) {
            r.y = r.y.saturating_sub(1);
        }
        // Half transparent over the white slot while in motion.
        let fade: u8 = if snap.dragging == Some(id) { 128 } else { 0 };

        match art.and_then(|a| a.tile(id)) {
            Some(grid) => {
                for dy in 0..r.h {
                    for dx in 0..r.w {
                        let top = grid.get(dx, dy * 2).unwrap_or([0, 0, 0]);
                        let bottom = grid.get(dx, dy * 2 + 1).unwrap_or(top);
                        fb.put_pixel_pair(
                            r.x + dx,
                            r.y + dy,
                            Rgb::from_array(top).blend(SLOT_BG, fade),
                            Rgb::from_array(bottom).blend(SLOT_BG, fade),
                        );
                    }
                }
            }
            None => {
                let bg = FALLBACK_BG.blend(SLOT_BG, fade);
                let style = CellStyle::new(WHITE, bg).bold();
                fb.fill_rect(r.x, r.y, r.w, r.h, ' ', style);
                let label = (b'0' + id.get()) as char;
                fb.put_char(r.x + r.w / 2, r.y + r.h / 2, label, style);
            }
        }
    }

    fn draw_review(&self, fb: &mut FrameBuffer, layout: &Layout, art: Option<&TileArt>) {
        let c = layout.canvas;
        match art {
            Some(art) => {
                let full = art.full();
                for dy in 0..c.h {
                    for dx in 0..c.w {
                        let top = full.get(dx, dy * 2).unwrap_or([0, 0, 0]);
                        let bottom = full.get(dx, dy * 2 + 1).unwrap_or(top);
                        fb.put_pixel_pair(
                            c.x + dx,
                            c.y + dy,
                            Rgb::from_array(top),
                            Rgb::from_array(bottom),
                        );
                    }
                }
            }
            None => {
                let text = "image here";
                let style = CellStyle::new(Rgb::new(200, 200, 200), BOARD_BG);
                let x = c.x + c.w.saturating_sub(text.chars().count() as u16) / 2;
                fb.put_str(x, c.y + c.h / 2, text, style);
            }
        }
    }

    fn draw_status(
        &self,
        fb: &mut FrameBuffer,
        layout: &Layout,
        snap: &PuzzleSnapshot,
        art: Option<&TileArt>,
        viewport: Viewport,
    ) {
        let mode = match snap.mode {
            Mode::Arrange => "ARRANGE",
            Mode::Review => "REVIEW",
        };
        let image = match art {
            Some(art) => art.name(),
            None if snap.has_reference => "image",
            None => "no image",
        };
        let line = format!("{mode} · {image} · drag tiles to swap · q quit");
        let style = CellStyle::new(Rgb::new(150, 150, 150), PAGE_BG);
        let x = viewport.width.saturating_sub(line.chars().count() as u16) / 2;
        fb.put_str(x, layout.status_y, &line, style);
    }
}

/// Toolbar buttons centered on row `y`, two columns apart.
fn toolbar(width: u16, y: u16) -> [(PuzzleAction, Rect); 4] {
    let widths = PuzzleAction::ALL.map(|a| a.label().chars().count() as u16 + 2);
    let total: u16 = widths.iter().sum::<u16>() + 2 * (widths.len() as u16 - 1);
    let mut x = width.saturating_sub(total) / 2;

    let mut out = [(PuzzleAction::Upload, Rect::default()); 4];
    for (i, action) in PuzzleAction::ALL.iter().enumerate() {
        out[i] = (*action, Rect::new(x, y, widths[i], 1));
        x = x.saturating_add(widths[i] + 2);
    }
    out
}

fn draw_border(fb: &mut FrameBuffer, r: Rect, style: CellStyle) {
    if r.w < 2 || r.h < 2 {
        return;
    }
    let (x, y, w, h) = (r.x, r.y, r.w, r.h);

    fb.put_char(x, y, '╭', style);
    fb.put_char(x + w - 1, y, '╮', style);
    fb.put_char(x, y + h - 1, '╰', style);
    fb.put_char(x + w - 1, y + h - 1, '╯', style);

    for dx in 1..w - 1 {
        fb.put_char(x + dx, y, '─', style);
        fb.put_char(x + dx, y + h - 1, '─', style);
    }
    for dy in 1..h - 1 {
        fb.put_char(x, y + dy, '│', style);
        fb.put_char(x + w - 1, y + dy, '│', style);
    }
}

/// Boxed, centered lines over `area`.
fn draw_dialog(fb: &mut FrameBuffer, area: Rect, lines: &[&str]) {
    let inner_w = lines.iter().map(|l| l.chars().count()).max().unwrap_or(0) as u16;
    let w = inner_w + 4;
    let h = lines.len() as u16 + 2;
    let x = area.x + area.w.saturating_sub(w) / 2;
    let y = area.y + area.h.saturating_sub(h) / 2;

    let body = CellStyle::new(WHITE, Rgb::new(0, 0, 0)).bold();
    fb.fill_rect(x, y, w, h, ' ', body);
    draw_border(fb, Rect::new(x, y, w, h), body);
    for (i, line) in lines.iter().enumerate() {
        let lx = x + 2 + inner_w.saturating_sub(line.chars().count() as u16) / 2;
        fb.put_str(lx, y + 1 + i as u16, line, body);
    }
}

/// Last `max` characters of `s`.
fn tail(s: &str, max: usize) -> &str {
    let count = s.chars().count();
    if count <= max {
        return s;
    }
    let skip = count - max;
    match s.char_indices().nth(skip) {
        Some((i, _)) => &s[i..],
        None => "",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rect_contains_edges() {
        let r = Rect::new(2, 3, 4, 2);
        assert!(r.contains(2, 3));
        assert!(r.contains(5, 4));
        assert!(!r.contains(6, 4));
        assert!(!r.contains(1, 3));
        assert!(!r.contains(2, 5));
    }

    #[test]
    fn tail_keeps_end_of_path() {
        assert_eq!(tail("short", 10), "short");
        assert_eq!(tail("/very/long/path.png", 8), "path.png");
    }

    #[test]
    fn toolbar_buttons_do_not_overlap() {
        let buttons = toolbar(80, 0);
        for pair in buttons.windows(2) {
            assert!(pair[0].1.x + pair[0].1.w < pair[1].1.x);
        }
    }
}
