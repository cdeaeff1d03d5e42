//! Core arrangement logic - pure, deterministic, and testable
//!
//! This crate owns the mapping of tile identity to grid position and the three
//! operations that mutate it. It has **no dependencies** on UI, terminal, or image
//! handling, making it:
//!
//! - **Deterministic**: shuffles are driven by a caller-supplied RNG
//! - **Total**: malformed input (unknown id, missing drag, bad slot) is a no-op
//! - **Portable**: can run behind any front end (terminal, GUI, headless tests)
//!
//! # Module Structure
//!
//! - [`puzzle`]: 9-tile puzzle set, swap-on-drop and the solved predicate
//! - [`shuffle`]: Fisher-Yates over the `position` field
//! - [`snapshot`]: copyable view of the arrangement for renderers
//!
//! # Rules
//!
//! - Tile ids 1-9 are fixed; positions 0-8 are always a permutation
//! - The puzzle is solved iff every tile sits at `position == id - 1`
//! - Only `swap` reports solved state; `shuffle` never does
//!
//! # Example
//!
//! ```
//! use tile_puzzle_core::PuzzleSet;
//! use tile_puzzle_types::{Position, TileId};
//!
//! let mut set = PuzzleSet::new();
//! assert!(set.is_solved());
//!
//! let one = TileId::new(1).unwrap();
//! let outcome = set.swap(Some(one), Position::new(1).unwrap());
//! assert!(!outcome.solved);
//! assert_eq!(set.position_of(one).get(), 1);
//! assert_eq!(set.position_of(TileId::new(2).unwrap()).get(), 0);
//! ```

pub mod puzzle;
pub mod shuffle;
pub mod snapshot;

pub use tile_puzzle_types as types;

pub use puzzle::{PuzzleSet, SwapOutcome, Tile};
pub use shuffle::shuffle_positions;
pub use snapshot::PuzzleSnapshot;
