//! Puzzle session - the single mutable UI state object
//!
//! Owns the arrangement, the drag cursor, the display mode, the transient bounce
//! highlight, the solved notice, and the reference image payload. Every
//! mutation goes through one of the methods below; front ends never touch the
//! puzzle set directly.

use log::{debug, info};
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::core::{PuzzleSet, PuzzleSnapshot, SwapOutcome};
use crate::types::{Mode, Position, PuzzleAction, TileId, BOUNCE_MS};

/// Highlight left behind by a swap.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bounce {
    pub tile: TileId,
    pub remaining_ms: u32,
}

/// What a toolbar action asks of the front end.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionEffect {
    /// State already updated; just redraw.
    Applied,
    /// The front end should open its file picker. Nothing changed yet.
    OpenPicker,
}

/// Interactive puzzle state.
///
/// `R` is the reference image payload. The session never looks inside it; it
/// only tracks whether one is present and resets the arrangement when a new one
/// arrives.
#[derive(Debug, Clone)]
pub struct PuzzleSession<R> {
    set: PuzzleSet,
    rng: StdRng,
    mode: Mode,
    dragging: Option<TileId>,
    bounce: Option<Bounce>,
    solved_notice: bool,
    reference: Option<R>,
}

impl<R> PuzzleSession<R> {
    /// Start solved. A seed makes shuffles reproducible; otherwise the RNG is
    /// seeded from OS entropy.
    pub fn new(seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self {
            set: PuzzleSet::new(),
            rng,
            mode: Mode::Arrange,
            dragging: None,
            bounce: None,
            solved_notice: false,
            reference: None,
        }
    }

    pub fn puzzle(&self) -> &PuzzleSet {
        &self.set
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn dragging(&self) -> Option<TileId> {
        self.dragging
    }

    pub fn bounce(&self) -> Option<Bounce> {
        self.bounce
    }

    pub fn solved_notice(&self) -> bool {
        self.solved_notice
    }

    pub fn reference(&self) -> Option<&R> {
        self.reference.as_ref()
    }

    /// Whether drags are currently accepted.
    pub fn interactive(&self) -> bool {
        self.mode == Mode::Arrange && !self.solved_notice
    }

    pub fn shuffle(&mut self) {
        self.set.shuffle_with(&mut self.rng);
        info!("shuffle");
    }

    pub fn reset(&mut self) {
        self.set.reset();
        self.dragging = None;
        info!("reset");
    }

    /// Flip arrange/review. The arrangement is untouched; an in-flight drag is
    /// abandoned since review mode has no tiles to drop on.
    pub fn toggle_review(&mut self) {
        self.mode = self.mode.toggled();
        self.dragging = None;
        info!("mode -> {}", self.mode.as_str());
    }

    /// Record `id` as the tile in motion.
    pub fn drag_start(&mut self, id: TileId) {
        if !self.interactive() {
            debug!("drag of tile {} ignored", id.get());
            return;
        }
        self.dragging = Some(id);
    }

    /// Untyped variant of [`PuzzleSession::drag_start`]; unknown ids are ignored.
    pub fn drag_start_raw(&mut self, id: u8) {
        if let Some(id) = TileId::new(id) {
            self.drag_start(id);
        }
    }

    /// Abandon the drag, e.g. the pointer was released outside the grid.
    pub fn cancel_drag(&mut self) {
        self.dragging = None;
    }

    /// Drop the tile in motion on `target`.
    ///
    /// With nothing in motion this is a no-op. A real swap starts the bounce
    /// highlight for the dragged tile and raises the solved notice when the
    /// arrangement is now solved.
    pub fn drop_on(&mut self, target: Position) -> SwapOutcome {
        if !self.interactive() {
            self.dragging = None;
            return SwapOutcome::NOOP;
        }

        let outcome = self.set.swap(self.dragging.take(), target);
        if let Some(tile) = outcome.touched {
            self.bounce = Some(Bounce {
                tile,
                remaining_ms: BOUNCE_MS,
            });
        }
        if outcome.solved {
            info!("solved");
            self.solved_notice = true;
        }
        outcome
    }

    /// Untyped variant of [`PuzzleSession::drop_on`]; out-of-range slots are a
    /// no-op that still ends the drag.
    pub fn drop_on_raw(&mut self, target: u8) -> SwapOutcome {
        match Position::new(target) {
            Some(target) => self.drop_on(target),
            None => {
                self.dragging = None;
                SwapOutcome::NOOP
            }
        }
    }

    /// Advance the bounce countdown. Safe to call after the highlight is gone.
    pub fn tick(&mut self, elapsed_ms: u32) {
        if let Some(bounce) = self.bounce.as_mut() {
            bounce.remaining_ms = bounce.remaining_ms.saturating_sub(elapsed_ms);
            if bounce.remaining_ms == 0 {
                self.bounce = None;
            }
        }
    }

    /// Dismiss the solved notice.
    pub fn acknowledge(&mut self) {
        self.solved_notice = false;
    }

    /// Install a new reference image and start over from solved order.
    pub fn upload(&mut self, reference: R) {
        self.reference = Some(reference);
        self.reset();
    }

    /// Apply a toolbar action.
    pub fn apply_action(&mut self, action: PuzzleAction) -> ActionEffect {
        match action {
            PuzzleAction::Upload => return ActionEffect::OpenPicker,
            PuzzleAction::Shuffle => self.shuffle(),
            PuzzleAction::Reset => self.reset(),
            PuzzleAction::ToggleReview => self.toggle_review(),
        }
        ActionEffect::Applied
    }

    pub fn snapshot(&self) -> PuzzleSnapshot {
        let mut snap = PuzzleSnapshot::default();
        self.snapshot_into(&mut snap);
        snap
    }

    pub fn snapshot_into(&self, snap: &mut PuzzleSnapshot) {
        snap.copy_arrangement(&self.set);
        snap.mode = self.mode;
        snap.dragging = self.dragging;
        snap.bouncing = self.bounce.map(|b| b.tile);
        snap.solved_notice = self.solved_notice;
        snap.has_reference = self.reference.is_some();
    }
}

impl<R> Default for PuzzleSession<R> {
    fn default() -> Self {
        Self::new(None)
    }
}
