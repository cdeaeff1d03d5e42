//! Mouse events reduced to the three gestures drag-and-drop needs.

use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerKind {
    /// Left button pressed: a drag may start here.
    Press,
    /// Pointer moved with the left button held.
    Move,
    /// Left button released: drop here.
    Release,
}

/// A left-button gesture at terminal cell `(x, y)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PointerEvent {
    pub kind: PointerKind,
    pub x: u16,
    pub y: u16,
}

/// Returns `None` for anything other than the left button (scroll, right click,
/// plain moves).
pub fn pointer_event(ev: MouseEvent) -> Option<PointerEvent> {
    let kind = match ev.kind {
        MouseEventKind::Down(MouseButton::Left) => PointerKind::Press,
        MouseEventKind::Drag(MouseButton::Left) => PointerKind::Move,
        MouseEventKind::Up(MouseButton::Left) => PointerKind::Release,
        _ => return None,
    };
    Some(PointerEvent {
        kind,
        x: ev.column,
        y: ev.row,
    })
}
