//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (arrangement logic, session state, terminal rendering).
//!
//! # Grid Dimensions
//!
//! The puzzle is a fixed 3x3 grid:
//!
//! - **Columns/rows**: 3 (slots are indexed row-major)
//! - **Tiles**: 9, with ids 1-9
//! - **Positions**: 0-8, where position `k` is row `k / 3`, column `k % 3`
//!
//! # Timing Constants
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `TICK_MS` | 16 | Event loop tick (~60 FPS) |
//! | `BOUNCE_MS` | 200 | Highlight duration for a tile after a swap |
//!
//! # Examples
//!
//! ```
//! use tile_puzzle_types::{Position, PuzzleAction, TileId, GRID_SIZE, TILE_COUNT};
//!
//! let id = TileId::new(5).unwrap();
//! assert_eq!(id.home(), Position::new(4).unwrap());
//! assert_eq!(id.home().row(), 1);
//! assert_eq!(id.home().col(), 1);
//!
//! assert_eq!(TileId::new(0), None);
//! assert_eq!(Position::new(9), None);
//!
//! assert_eq!(PuzzleAction::from_str("shuffle"), Some(PuzzleAction::Shuffle));
//!
//! assert_eq!(GRID_SIZE, 3);
//! assert_eq!(TILE_COUNT, 9);
//! ```

/// Grid side length (3 columns, 3 rows)
pub const GRID_SIZE: u8 = 3;

/// Number of tiles (and slots) in the puzzle
pub const TILE_COUNT: usize = (GRID_SIZE as usize) * (GRID_SIZE as usize);

/// Fixed event loop tick in milliseconds (16ms ≈ 60 FPS)
pub const TICK_MS: u32 = 16;

/// How long a tile stays highlighted after it was dropped.
pub const BOUNCE_MS: u32 = 200;

/// Identity of a tile, 1-9.
///
/// The id determines which ninth of the reference image the tile shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TileId(u8);

impl TileId {
    pub const MIN: TileId = TileId(1);
    pub const MAX: TileId = TileId(TILE_COUNT as u8);

    /// Returns `None` outside 1..=9.
    pub const fn new(id: u8) -> Option<Self> {
        if id >= 1 && id as usize <= TILE_COUNT {
            Some(Self(id))
        } else {
            None
        }
    }

    pub const fn get(self) -> u8 {
        self.0
    }

    /// Zero-based index, also the slot this tile occupies when solved.
    pub const fn index(self) -> usize {
        (self.0 - 1) as usize
    }

    /// The position this tile must occupy for the puzzle to be solved.
    pub const fn home(self) -> Position {
        Position(self.0 - 1)
    }

    /// All ids in ascending order.
    pub fn all() -> impl Iterator<Item = TileId> {
        (1..=TILE_COUNT as u8).map(TileId)
    }
}

/// A grid slot, 0-8, row-major over 3 columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Position(u8);

impl Position {
    /// Returns `None` outside 0..=8.
    pub const fn new(position: u8) -> Option<Self> {
        if (position as usize) < TILE_COUNT {
            Some(Self(position))
        } else {
            None
        }
    }

    pub const fn from_row_col(row: u8, col: u8) -> Option<Self> {
        if row < GRID_SIZE && col < GRID_SIZE {
            Some(Self(row * GRID_SIZE + col))
        } else {
            None
        }
    }

    pub const fn get(self) -> u8 {
        self.0
    }

    pub const fn index(self) -> usize {
        self.0 as usize
    }

    pub const fn row(self) -> u8 {
        self.0 / GRID_SIZE
    }

    pub const fn col(self) -> u8 {
        self.0 % GRID_SIZE
    }

    /// All positions in ascending order.
    pub fn all() -> impl Iterator<Item = Position> {
        (0..TILE_COUNT as u8).map(Position)
    }
}

/// Display mode of the puzzle.
///
/// Toggling between modes never touches the arrangement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Mode {
    /// Tiles shown individually and draggable.
    #[default]
    Arrange,
    /// Full reference image shown; no tile interaction.
    Review,
}

impl Mode {
    pub fn toggled(self) -> Self {
        match self {
            Mode::Arrange => Mode::Review,
            Mode::Review => Mode::Arrange,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Mode::Arrange => "arrange",
            Mode::Review => "review",
        }
    }
}

/// Toolbar actions
///
/// These are the user-facing buttons. Tile moves are not actions; they go
/// through the drag-and-drop entry points of the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PuzzleAction {
    /// Open the upload prompt to pick a reference image
    Upload,
    /// Permute tile positions uniformly at random
    Shuffle,
    /// Return every tile to its home position
    Reset,
    /// Flip between arrange and review mode
    ToggleReview,
}

impl PuzzleAction {
    /// Toolbar order, left to right.
    pub const ALL: [PuzzleAction; 4] = [
        PuzzleAction::Upload,
        PuzzleAction::Shuffle,
        PuzzleAction::Reset,
        PuzzleAction::ToggleReview,
    ];

    /// Parse action from string
    ///
    /// # Examples
    ///
    /// ```
    /// use tile_puzzle_types::PuzzleAction;
    ///
    /// assert_eq!(PuzzleAction::from_str("Reset"), Some(PuzzleAction::Reset));
    /// assert_eq!(PuzzleAction::from_str("toggleReview"), Some(PuzzleAction::ToggleReview));
    /// assert_eq!(PuzzleAction::from_str("undo"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "upload" => Some(PuzzleAction::Upload),
            "shuffle" => Some(PuzzleAction::Shuffle),
            "reset" => Some(PuzzleAction::Reset),
            "togglereview" | "review" => Some(PuzzleAction::ToggleReview),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            PuzzleAction::Upload => "upload",
            PuzzleAction::Shuffle => "shuffle",
            PuzzleAction::Reset => "reset",
            PuzzleAction::ToggleReview => "toggleReview",
        }
    }

    /// Button caption shown in the toolbar.
    pub fn label(&self) -> &'static str {
        match self {
            PuzzleAction::Upload => "Upload Image",
            PuzzleAction::Shuffle => "Shuffle",
            PuzzleAction::Reset => "Reset",
            PuzzleAction::ToggleReview => "Review",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tile_id_bounds() {
        assert!(TileId::new(0).is_none());
        assert!(TileId::new(10).is_none());
        assert_eq!(TileId::all().count(), TILE_COUNT);
        assert_eq!(TileId::new(9).unwrap().home().get(), 8);
    }

    #[test]
    fn position_row_col_round_trip() {
        for p in Position::all() {
            assert_eq!(Position::from_row_col(p.row(), p.col()), Some(p));
        }
        assert_eq!(Position::from_row_col(3, 0), None);
        assert_eq!(Position::from_row_col(0, 3), None);
    }

    #[test]
    fn mode_toggle_is_involution() {
        assert_eq!(Mode::default(), Mode::Arrange);
        assert_eq!(Mode::Arrange.toggled(), Mode::Review);
        assert_eq!(Mode::Arrange.toggled().toggled(), Mode::Arrange);
    }

    #[test]
    fn bounce_matches_feedback_delay() {
        assert_eq!(BOUNCE_MS, 200);
    }
}
