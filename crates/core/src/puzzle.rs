//! Puzzle set - the tile-to-position assignment
//!
//! Tiles are stored in id order and never move in storage; every operation
//! rewrites `position` fields only. This keeps the shuffle a plain Fisher-Yates
//! over storage slots and makes the permutation invariant easy to check.

use log::debug;
use rand::Rng;

use crate::shuffle::shuffle_positions;
use crate::types::{Position, TileId, TILE_COUNT};

/// One puzzle piece.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Tile {
    pub id: TileId,
    pub position: Position,
}

impl Tile {
    /// A tile sitting in its home slot.
    pub fn home(id: TileId) -> Self {
        Self {
            id,
            position: id.home(),
        }
    }

    pub fn is_home(&self) -> bool {
        self.position == self.id.home()
    }
}

/// Result of a drop.
///
/// `touched` is the short-lived annotation used to drive visual feedback for
/// this specific swap (the dragged tile). It is `None` for a no-op.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SwapOutcome {
    pub solved: bool,
    pub touched: Option<TileId>,
}

impl SwapOutcome {
    pub const NOOP: SwapOutcome = SwapOutcome {
        solved: false,
        touched: None,
    };

    pub fn is_noop(&self) -> bool {
        self.touched.is_none()
    }
}

/// Exactly nine tiles whose positions form a permutation of 0..=8.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PuzzleSet {
    tiles: [Tile; TILE_COUNT],
}

impl PuzzleSet {
    /// Solved order: tile `k + 1` at position `k`.
    pub fn new() -> Self {
        let mut tiles = [Tile::home(TileId::MIN); TILE_COUNT];
        for (slot, id) in tiles.iter_mut().zip(TileId::all()) {
            *slot = Tile::home(id);
        }
        Self { tiles }
    }

    /// Alias of [`PuzzleSet::new`].
    pub fn initialize() -> Self {
        Self::new()
    }

    /// Discard the current arrangement.
    pub fn reset(&mut self) {
        for tile in self.tiles.iter_mut() {
            tile.position = tile.id.home();
        }
    }

    /// Permute positions uniformly at random.
    ///
    /// Does not check or report solved state, even if the draw happens to
    /// produce the solved arrangement.
    pub fn shuffle_with<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        shuffle_positions(&mut self.tiles, rng);
        debug!("shuffled: {:?}", self.slots_raw());
    }

    /// Move `dragged` onto `target`, sending the displaced tile to the dragged
    /// tile's former slot.
    ///
    /// A drop with no tile in motion is a no-op and never reports solved.
    /// Dropping a tile onto its own slot swaps it with itself: nothing moves,
    /// but the solved check still runs.
    pub fn swap(&mut self, dragged: Option<TileId>, target: Position) -> SwapOutcome {
        let Some(dragged) = dragged else {
            debug!("drop on {} ignored: nothing in motion", target.get());
            return SwapOutcome::NOOP;
        };

        let dragged_index = dragged.index();
        let Some(target_index) = self.tiles.iter().position(|t| t.position == target) else {
            // Unreachable while the permutation invariant holds.
            return SwapOutcome::NOOP;
        };

        let from = self.tiles[dragged_index].position;
        self.tiles[dragged_index].position = target;
        self.tiles[target_index].position = from;

        debug!(
            "tile {} {} -> {}, tile {} -> {}",
            dragged.get(),
            from.get(),
            target.get(),
            self.tiles[target_index].id.get(),
            from.get()
        );

        SwapOutcome {
            solved: self.is_solved(),
            touched: Some(dragged),
        }
    }

    /// Untyped entry point for event payloads that may be missing or out of
    /// range. Anything malformed is a no-op.
    pub fn swap_raw(&mut self, dragged_id: Option<u8>, target_position: u8) -> SwapOutcome {
        let dragged = dragged_id.and_then(TileId::new);
        match (dragged, Position::new(target_position)) {
            (Some(id), Some(target)) => self.swap(Some(id), target),
            _ => SwapOutcome::NOOP,
        }
    }

    pub fn is_solved(&self) -> bool {
        self.tiles.iter().all(Tile::is_home)
    }

    pub fn tiles(&self) -> &[Tile; TILE_COUNT] {
        &self.tiles
    }

    pub fn position_of(&self, id: TileId) -> Position {
        self.tiles[id.index()].position
    }

    pub fn tile_at(&self, position: Position) -> Option<TileId> {
        self.tiles
            .iter()
            .find(|t| t.position == position)
            .map(|t| t.id)
    }

    /// Tiles sorted by position, the order in which slots are rendered.
    pub fn ordered(&self) -> [Tile; TILE_COUNT] {
        let mut out = self.tiles;
        out.sort_unstable_by_key(|t| t.position);
        out
    }

    /// `slots[k]` is the tile currently at position `k`.
    pub fn slots(&self) -> [TileId; TILE_COUNT] {
        self.ordered().map(|t| t.id)
    }

    fn slots_raw(&self) -> [u8; TILE_COUNT] {
        let mut out = [0u8; TILE_COUNT];
        for (k, id) in self.slots().iter().enumerate() {
            out[k] = id.get();
        }
        out
    }

    /// Positions in storage (id) order.
    pub fn positions(&self) -> [u8; TILE_COUNT] {
        let mut out = [0u8; TILE_COUNT];
        for (i, tile) in self.tiles.iter().enumerate() {
            out[i] = tile.position.get();
        }
        out
    }

    /// True when positions are a permutation of 0..=8.
    pub fn is_permutation(&self) -> bool {
        let mut seen = [false; TILE_COUNT];
        for tile in self.tiles.iter() {
            let i = tile.position.index();
            if seen[i] {
                return false;
            }
            seen[i] = true;
        }
        seen.iter().all(|&s| s)
    }
}

impl Default for PuzzleSet {
    fn default() -> Self {
        Self::new()
    }
}
