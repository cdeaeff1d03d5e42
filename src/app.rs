//! Top-level UI state and event routing.
//!
//! [`App`] owns the puzzle session together with the bits of state that only
//! exist in the terminal front end: the upload prompt, the in-progress pointer
//! gesture, and the sampled tile art. It is I/O free apart from reading image
//! files, so the whole interaction flow can be driven from tests.

use std::path::Path;

use crossterm::event::KeyEvent;
use log::{debug, warn};

use crate::engine::{ActionEffect, PuzzleSession};
use crate::image::{load_reference, ImageLoadError, ReferenceImage};
use crate::input::{handle_key_event, should_quit, PathPrompt, PointerEvent, PointerKind, PromptOutcome};
use crate::term::{FrameBuffer, Hit, PuzzleView, Scene, TileArt, Viewport};
use crate::types::{Mode, Position, PuzzleAction};

/// A press that has not been released yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Gesture {
    origin: Position,
    moved: bool,
}

pub struct App {
    session: PuzzleSession<ReferenceImage>,
    view: PuzzleView,
    prompt: Option<PathPrompt>,
    gesture: Option<Gesture>,
    art: Option<(u64, TileArt)>,
    image_generation: u64,
    quit: bool,
}

impl App {
    pub fn new(seed: Option<u64>) -> Self {
        Self::with_view(seed, PuzzleView::default())
    }

    pub fn with_view(seed: Option<u64>, view: PuzzleView) -> Self {
        Self {
            session: PuzzleSession::new(seed),
            view,
            prompt: None,
            gesture: None,
            art: None,
            image_generation: 0,
            quit: false,
        }
    }

    pub fn session(&self) -> &PuzzleSession<ReferenceImage> {
        &self.session
    }

    pub fn view(&self) -> &PuzzleView {
        &self.view
    }

    pub fn prompt(&self) -> Option<&str> {
        self.prompt.as_ref().map(PathPrompt::text)
    }

    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// Load `path` as the new reference image and reset the arrangement.
    ///
    /// On any error the current image and arrangement are left untouched.
    pub fn load_image(&mut self, path: &Path) -> Result<(), ImageLoadError> {
        let image = load_reference(path)?;
        self.session.upload(image);
        self.gesture = None;
        self.image_generation += 1;
        Ok(())
    }

    fn try_load_image(&mut self, path: &Path) {
        if let Err(err) = self.load_image(path) {
            warn!("upload rejected ({}): {}", err.code(), err);
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        if let Some(prompt) = self.prompt.as_mut() {
            if is_interrupt(key) {
                self.quit = true;
                return;
            }
            match prompt.handle_key(key) {
                PromptOutcome::Editing => {}
                PromptOutcome::Cancel => self.prompt = None,
                PromptOutcome::Submit(path) => {
                    self.prompt = None;
                    self.try_load_image(Path::new(&path));
                }
            }
            return;
        }

        if should_quit(key) {
            self.quit = true;
            return;
        }

        if self.session.solved_notice() {
            self.session.acknowledge();
            return;
        }

        if let Some(action) = handle_key_event(key) {
            self.apply_action(action);
        }
    }

    pub fn handle_pointer(&mut self, ev: PointerEvent, viewport: Viewport) {
        if self.prompt.is_some() {
            return;
        }
        if self.session.solved_notice() {
            if ev.kind == PointerKind::Press {
                self.session.acknowledge();
            }
            return;
        }

        let hit = self.view.hit_test(viewport, ev.x, ev.y);
        match ev.kind {
            PointerKind::Press => match hit {
                Some(Hit::Button(action)) => self.apply_action(action),
                Some(Hit::Slot(p)) if self.session.mode() == Mode::Arrange => {
                    if let Some(id) = self.session.puzzle().tile_at(p) {
                        self.session.drag_start(id);
                        self.gesture = Some(Gesture {
                            origin: p,
                            moved: false,
                        });
                    }
                }
                _ => {}
            },
            PointerKind::Move => {
                if let Some(g) = self.gesture.as_mut() {
                    g.moved = true;
                }
            }
            PointerKind::Release => {
                let gesture = self.gesture.take();
                match (hit, gesture) {
                    // A click without movement is not a drop.
                    (Some(Hit::Slot(p)), Some(g)) if p == g.origin && !g.moved => {
                        self.session.cancel_drag();
                    }
                    (Some(Hit::Slot(p)), _) => {
                        let outcome = self.session.drop_on(p);
                        debug!("drop on {}: {:?}", p.get(), outcome);
                    }
                    _ => self.session.cancel_drag(),
                }
            }
        }
    }

    fn apply_action(&mut self, action: PuzzleAction) {
        self.gesture = None;
        if self.session.apply_action(action) == ActionEffect::OpenPicker {
            self.session.cancel_drag();
            self.prompt = Some(PathPrompt::new());
        }
    }

    pub fn tick(&mut self, elapsed_ms: u32) {
        self.session.tick(elapsed_ms);
    }

    /// Changes whenever the next frame would look different.
    pub fn fingerprint(&self) -> u64 {
        let mut h = self.session.snapshot().fingerprint();
        let mut feed = |b: u8| {
            h ^= b as u64;
            h = h.wrapping_mul(0x100000001b3);
        };
        for b in self.image_generation.to_le_bytes() {
            feed(b);
        }
        match self.prompt.as_ref() {
            Some(prompt) => {
                feed(1);
                for b in prompt.text().bytes() {
                    feed(b);
                }
            }
            None => feed(0),
        }
        h
    }

    /// Draw the current state, resampling tile art if the image or layout
    /// changed since the last frame.
    pub fn render_into(&mut self, viewport: Viewport, fb: &mut FrameBuffer) {
        let size = self.view.layout(viewport).art_size();
        TileArt::refresh(
            &mut self.art,
            self.session.reference(),
            self.image_generation,
            size,
        );

        let snap = self.session.snapshot();
        let scene = Scene {
            art: self.art.as_ref().map(|(_, art)| art),
            prompt: self.prompt(),
        };
        self.view.render_scene_into(&snap, &scene, viewport, fb);
    }
}

fn is_interrupt(key: KeyEvent) -> bool {
    use crossterm::event::{KeyCode, KeyModifiers};
    key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL)
}
