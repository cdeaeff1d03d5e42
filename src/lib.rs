//! Tile puzzle (workspace facade crate).
//!
//! Re-exports the workspace crates under short module names and hosts the
//! pieces that only the terminal binary needs: command line configuration and
//! the top-level [`app::App`] that routes terminal events into the session.

pub use tile_puzzle_core as core;
pub use tile_puzzle_engine as engine;
pub use tile_puzzle_image as image;
pub use tile_puzzle_input as input;
pub use tile_puzzle_term as term;
pub use tile_puzzle_types as types;

pub mod app;
pub mod config;
