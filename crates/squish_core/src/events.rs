//! Pointer event types
//!
//! Interaction drivers only care about a handful of pointer transitions, so
//! the event vocabulary stays deliberately small. Hover is modeled with
//! enter/leave; presses with down/up; `Cancel` covers platform pointer
//! cancellation (e.g. a touch stolen by a scroll gesture) and is handled by
//! drivers exactly like a leave-while-pressed.

/// The kind of pointer transition an event describes
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PointerKind {
    /// Pointer entered the element's bounds
    Enter,
    /// Pointer left the element's bounds
    Leave,
    /// Primary button / touch went down inside the element
    Down,
    /// Primary button / touch released inside the element
    Up,
    /// The platform cancelled the pointer sequence
    Cancel,
}

/// A pointer event targeted at a single element
///
/// Position and button are carried for consumers that need them (hit testing,
/// multi-button handling); the interaction drivers dispatch on `kind` alone.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointerEvent {
    pub kind: PointerKind,
    pub x: f32,
    pub y: f32,
    pub button: u8,
}

impl PointerEvent {
    /// Create an event of the given kind at the origin
    pub fn new(kind: PointerKind) -> Self {
        Self {
            kind,
            x: 0.0,
            y: 0.0,
            button: 0,
        }
    }

    /// Create an event of the given kind at a position
    pub fn at(kind: PointerKind, x: f32, y: f32) -> Self {
        Self {
            kind,
            x,
            y,
            button: 0,
        }
    }

    pub fn enter() -> Self {
        Self::new(PointerKind::Enter)
    }

    pub fn leave() -> Self {
        Self::new(PointerKind::Leave)
    }

    pub fn down() -> Self {
        Self::new(PointerKind::Down)
    }

    pub fn up() -> Self {
        Self::new(PointerKind::Up)
    }

    pub fn cancel() -> Self {
        Self::new(PointerKind::Cancel)
    }
}
