//! Terminal presentation shell.
//!
//! A small rendering layer. It avoids widget/layout libraries and
//! renders into a framebuffer that is diffed and flushed to the terminal.
//!
//! - [`PuzzleView`] lays out the toolbar, the 3x3 board and overlays, and
//!   hit-tests pointer coordinates against the same layout
//! - [`TileArt`] caches the reference image sampled to the current tile size
//! - [`TerminalRenderer`] owns terminal modes and writes frames
//!
//! Tiles with an image are drawn with upper half blocks, two pixels per cell.
//! Without one they fall back to a solid tile labelled with its id.

pub mod art;
pub mod fb;
pub mod puzzle_view;
pub mod redraw;
pub mod renderer;

pub use tile_puzzle_core as core;
pub use tile_puzzle_types as types;

pub use art::{ArtSize, TileArt};
pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use puzzle_view::{AnchorY, Hit, Layout, PuzzleView, Rect, Scene, Viewport};
pub use redraw::RedrawGate;
pub use renderer::{encode_diff_into, encode_full_into, for_each_changed_run, TerminalRenderer};
