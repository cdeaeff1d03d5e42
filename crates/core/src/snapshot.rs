use crate::puzzle::PuzzleSet;
use crate::types::{Mode, TileId, TILE_COUNT};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PuzzleSnapshot {
    /// `slots[k]` is the tile at position `k`.
    pub slots: [TileId; TILE_COUNT],
    pub mode: Mode,
    /// Tile currently in motion, if a drag is in progress.
    pub dragging: Option<TileId>,
    /// Tile highlighted by the most recent swap.
    pub bouncing: Option<TileId>,
    pub solved_notice: bool,
    pub has_reference: bool,
}

impl PuzzleSnapshot {
    pub fn from_set(set: &PuzzleSet) -> Self {
        Self {
            slots: set.slots(),
            ..Self::default()
        }
    }

    /// Refresh the arrangement in place, leaving the session flags alone.
    pub fn copy_arrangement(&mut self, set: &PuzzleSet) {
        self.slots = set.slots();
    }

    pub fn is_solved(&self) -> bool {
        self.slots
            .iter()
            .enumerate()
            .all(|(k, id)| id.index() == k)
    }

    /// Stable fingerprint for render throttling.
    pub fn fingerprint(&self) -> u64 {
        let mut h: u64 = 0xcbf29ce484222325;
        let mut feed = |b: u8| {
            h ^= b as u64;
            h = h.wrapping_mul(0x100000001b3);
        };
        for id in self.slots.iter() {
            feed(id.get());
        }
        feed(self.mode as u8);
        feed(self.dragging.map_or(0, TileId::get));
        feed(self.bouncing.map_or(0, TileId::get));
        feed(self.solved_notice as u8);
        feed(self.has_reference as u8);
        h
    }
}

impl Default for PuzzleSnapshot {
    fn default() -> Self {
        let mut slots = [TileId::MIN; TILE_COUNT];
        for (slot, id) in slots.iter_mut().zip(TileId::all()) {
            *slot = id;
        }
        Self {
            slots,
            mode: Mode::Arrange,
            dragging: None,
            bouncing: None,
            solved_notice: false,
            has_reference: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Position;

    #[test]
    fn default_snapshot_is_solved() {
        let snap = PuzzleSnapshot::default();
        assert!(snap.is_solved());
        assert_eq!(snap.mode, Mode::Arrange);
    }

    #[test]
    fn fingerprint_tracks_arrangement() {
        let mut set = PuzzleSet::new();
        let before = PuzzleSnapshot::from_set(&set).fingerprint();

        set.swap(TileId::new(3), Position::new(0).unwrap());
        let mut snap = PuzzleSnapshot::default();
        snap.copy_arrangement(&set);

        assert!(!snap.is_solved());
        assert_ne!(snap.fingerprint(), before);
    }

    #[test]
    fn fingerprint_tracks_mode() {
        let arrange = PuzzleSnapshot::default();
        let review = PuzzleSnapshot {
            mode: Mode::Review,
            ..arrange
        };
        assert_ne!(arrange.fingerprint(), review.fingerprint());
    }
}
