//! Host-side action vocabulary
//!
//! Identifiers and notifications exchanged with the host input system. The
//! host owns the actual action maps; these types only name things.

use std::fmt;

/// Handle to a named action inside a player's action asset
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ActionId(pub u32);

/// Handle to a named group of actions that are enabled together
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ActionMapId(pub u32);

/// Phase of an action, as reported by the host when the action triggers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ActionPhase {
    /// The action's map is disabled
    Disabled,
    /// Enabled and idle
    #[default]
    Waiting,
    /// A control started actuating the action
    Started,
    /// The action's interaction completed
    Performed,
    /// Actuation stopped
    Canceled,
}

/// A single action-triggered notification
#[derive(Debug, Clone, PartialEq)]
pub struct ActionEvent {
    pub action: ActionId,
    /// Action name, used for dispatch by name
    pub name: String,
    pub map: ActionMapId,
    pub phase: ActionPhase,
}

/// Device family currently driving a player
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum ControlScheme {
    #[default]
    KeyboardMouse,
    Gamepad,
    /// Any scheme this crate has no special handling for
    Other(String),
}

impl ControlScheme {
    /// Host-facing scheme name
    pub fn name(&self) -> &str {
        match self {
            Self::KeyboardMouse => "Keyboard&Mouse",
            Self::Gamepad => "Gamepad",
            Self::Other(name) => name,
        }
    }

    /// Parses a host scheme name
    pub fn from_name(name: &str) -> Self {
        match name {
            "Keyboard&Mouse" => Self::KeyboardMouse,
            "Gamepad" => Self::Gamepad,
            other => Self::Other(other.to_string()),
        }
    }

    pub fn is_gamepad(&self) -> bool {
        matches!(self, Self::Gamepad)
    }
}

impl fmt::Display for ControlScheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Notifications published by a player's input
#[derive(Debug, Clone, PartialEq)]
pub enum PlayerNotification {
    ActionTriggered(ActionEvent),
    ControlsChanged(ControlScheme),
}

/// A physical device known to the host
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct InputDevice {
    pub id: u32,
    pub name: String,
}

impl InputDevice {
    pub fn new(id: u32, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}

/// What happened to a device
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DeviceChange {
    Added,
    Removed,
    Disconnected,
    Reconnected,
    Enabled,
    Disabled,
    ConfigurationChanged,
}

/// Device change notification from the global input system
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeviceNotification {
    pub device: InputDevice,
    pub change: DeviceChange,
}

/// A button control that was pressed on any device
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ButtonControl {
    pub device: InputDevice,
    /// Control path, e.g. `<Mouse>/leftButton`
    pub path: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_control_scheme_names_round_trip_known_schemes() {
        assert_eq!(
            ControlScheme::from_name("Keyboard&Mouse"),
            ControlScheme::KeyboardMouse
        );
        assert_eq!(ControlScheme::from_name("Gamepad"), ControlScheme::Gamepad);
        assert_eq!(ControlScheme::Gamepad.to_string(), "Gamepad");
    }

    #[test]
    fn test_unknown_scheme_is_kept_verbatim() {
        let scheme = ControlScheme::from_name("Touch");
        assert_eq!(scheme, ControlScheme::Other("Touch".to_string()));
        assert_eq!(scheme.name(), "Touch");
        assert!(!scheme.is_gamepad());
    }
}
