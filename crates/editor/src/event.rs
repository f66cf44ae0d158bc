//! Pointer event types
//!
//! The editor is driven by a plain pointer event stream; it does not care
//! which windowing or UI layer produced the events.

/// Pointer button types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerButton {
    Left,
    Middle,
    Right,
    Other(u8),
}

/// Pointer events fed to the editor session
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerEvent {
    /// Pointer button pressed
    Down { x: f32, y: f32, button: PointerButton },
    /// Pointer moved
    Move { x: f32, y: f32 },
    /// Pointer button released
    Up,
}
