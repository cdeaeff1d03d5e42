//! Reference image module - loading and slicing the picture behind the tiles.
//!
//! The arrangement logic never sees pixels. This crate turns a file into a
//! [`ReferenceImage`] and samples it into small pixel grids sized for whatever
//! surface the front end draws on (terminal cells in this workspace).
//!
//! # Loading
//!
//! Content is sniffed rather than trusted by extension: a file whose bytes are
//! not a recognised image format is rejected with
//! [`ImageLoadError::NotAnImage`], and callers leave their current reference
//! image and arrangement untouched.
//!
//! # Slicing
//!
//! Tile `id` shows row `(id - 1) / 3`, column `(id - 1) % 3` of the image, each
//! cut a third of the width and height.

pub mod error;
pub mod reference;

pub use tile_puzzle_types as types;

pub use error::ImageLoadError;
pub use reference::{load_reference, PixelGrid, ReferenceImage};
