//! Puzzle engine - the interactive state machine around the arrangement.
//!
//! [`PuzzleSession`] is the explicit state object a front end owns. Pointer and
//! button events call into it; it answers with a [`PuzzleSnapshot`] to render.
//!
//! Two externally visible modes:
//!
//! - **Arrange**: tiles shown individually, drag-and-drop enabled
//! - **Review**: the uncut reference image, no tile interaction
//!
//! [`PuzzleSnapshot`]: tile_puzzle_core::PuzzleSnapshot

pub mod session;

pub use tile_puzzle_core as core;
pub use tile_puzzle_types as types;

pub use session::{ActionEffect, Bounce, PuzzleSession};
