//! Pointer events executed on scene objects

use glam::Vec2;

/// Pointer button identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PointerButton {
    #[default]
    Left,
    Right,
    Middle,
}

/// Kinds of event the pointer executes on a scene object
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PointerEventKind {
    /// Object entered the hovered set
    Enter,
    /// Object left the hovered set
    Exit,
    /// Button pressed while hovered
    Down,
    /// Sent right after `Down`
    Click,
    /// Button released on a selected object
    Up,
    /// Sent right after `Up`
    Deselect,
    /// Pointer moved (or stayed) over a hovered object
    Move,
}

/// Data attached to every executed pointer event
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PointerEventData {
    /// Screen-space pointer position
    pub position: Vec2,
    /// Button of the most recent press/release
    pub button: PointerButton,
}
