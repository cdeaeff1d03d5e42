//! Terminal input module (engine-facing).
//!
//! This module is intentionally independent of any UI framework beyond
//! `crossterm`'s event types. It maps key events into
//! [`crate::types::PuzzleAction`], normalises mouse events into pointer
//! gestures for drag-and-drop, and provides the small line editor used as the
//! upload file picker.

pub mod map;
pub mod pointer;
pub mod prompt;

pub use tile_puzzle_types as types;

pub use map::{handle_key_event, should_quit};
pub use pointer::{pointer_event, PointerEvent, PointerKind};
pub use prompt::{PathPrompt, PromptOutcome};
