//! Per-frame pointer input snapshot

use glam::Vec2;

use super::events::PointerButton;

/// Button flags with edge detection
///
/// `started` and `released` are edges: they are set on the frame the
/// transition happens and cleared once the snapshot has been delivered. Both
/// can be set in the same frame when a press and release land between two
/// ticks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ButtonFlags {
    /// Pressed this frame (edge)
    pub started: bool,
    /// Released this frame (edge)
    pub released: bool,
    /// Held down (level)
    pub is_pressed: bool,
}

impl ButtonFlags {
    /// Record a press transition
    pub fn press(&mut self) {
        self.started = true;
        self.is_pressed = true;
    }

    /// Record a release transition
    pub fn release(&mut self) {
        self.released = true;
        self.is_pressed = false;
    }

    /// Clear edges, keep the level
    pub fn clear_edges(&mut self) {
        self.started = false;
        self.released = false;
    }
}

/// Input snapshot handed to receivers once per tick
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PointerSnapshot {
    /// Speed-scaled pointer movement this frame
    pub delta: Vec2,
    /// Raw scroll this frame
    pub scroll: Vec2,
    /// Pointer position after clamping
    pub position: Vec2,
    pub primary: ButtonFlags,
    pub secondary: ButtonFlags,
    pub tertiary: ButtonFlags,
}

impl PointerSnapshot {
    /// Creates an empty snapshot
    pub fn new() -> Self {
        Self::default()
    }

    pub fn button(&self, button: PointerButton) -> &ButtonFlags {
        match button {
            PointerButton::Left => &self.primary,
            PointerButton::Right => &self.secondary,
            PointerButton::Middle => &self.tertiary,
        }
    }

    pub fn button_mut(&mut self, button: PointerButton) -> &mut ButtonFlags {
        match button {
            PointerButton::Left => &mut self.primary,
            PointerButton::Right => &mut self.secondary,
            PointerButton::Middle => &mut self.tertiary,
        }
    }

    /// Clear edge flags for all buttons after delivery
    pub fn clear_edges(&mut self) {
        self.primary.clear_edges();
        self.secondary.clear_edges();
        self.tertiary.clear_edges();
    }
}
