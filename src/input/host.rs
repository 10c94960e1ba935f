//! Interfaces to the host engine
//!
//! The input core never talks to devices or scene graphs directly. Hosts
//! implement these traits; see [`crate::host`] for in-memory implementations.
//!
//! Host handles are shared between several consumers on one thread, so
//! [`PlayerInput`] and [`InputSystem`] take `&self` and are passed around as
//! `Rc<dyn _>`. Implementations use interior mutability.

use glam::Vec2;

use super::action::{
    ActionId, ActionMapId, ButtonControl, ControlScheme, DeviceNotification, PlayerNotification,
};
use super::channel::Subscription;
use super::events::{PointerEventData, PointerEventKind};

/// Action maps and action values owned by one operator
pub trait PlayerInput {
    /// Looks up an action map by name
    fn find_action_map(&self, name: &str) -> Option<ActionMapId>;

    /// Enables or disables every action in a map
    fn set_action_map_enabled(&self, map: ActionMapId, enabled: bool);

    fn is_action_map_enabled(&self, map: ActionMapId) -> bool;

    /// Looks up an action by name across all maps
    fn find_action(&self, name: &str) -> Option<ActionId>;

    /// Current 2D value of an action; zero for unknown or disabled actions
    fn read_vec2(&self, action: ActionId) -> Vec2;

    fn current_control_scheme(&self) -> ControlScheme;

    /// Opens a subscription to action-triggered and controls-changed notifications
    fn subscribe(&self) -> Subscription<PlayerNotification>;
}

/// Global device layer shared by all operators
pub trait InputSystem {
    /// Polls devices and publishes everything that happened since the last poll
    fn update(&self);

    fn subscribe_any_button(&self) -> Subscription<ButtonControl>;

    fn subscribe_device_changes(&self) -> Subscription<DeviceNotification>;
}

/// UI scene graph the pointer moves over
///
/// `H` is the host's object handle. Handles are owned by the host; the pointer
/// only keeps copies of them between frames.
pub trait UiScene<H> {
    /// Maps a pointer-overlay position to screen space
    fn local_to_screen(&self, local: Vec2) -> Vec2;

    /// Maps a pointer-overlay position to normalized viewport space
    fn local_to_viewport(&self, local: Vec2) -> Vec2;

    /// Every object under `screen_pos`, front to back
    fn raycast_all(&self, screen_pos: Vec2) -> Vec<H>;

    /// Runs the handler for `kind` on `target`
    fn execute(&mut self, target: &H, kind: PointerEventKind, data: &PointerEventData);

    /// Whether `target` still exists
    fn is_alive(&self, _target: &H) -> bool {
        true
    }

    /// Shows or hides the rendered pointer
    fn set_pointer_visible(&mut self, _visible: bool) {}
}
