//! In-memory action system
//!
//! Implements [`PlayerInput`] and [`InputSystem`] without any device. A driver
//! (tests, health checks, the winit adapter) stages values and phase changes;
//! nothing becomes visible to consumers until [`InputSystem::update`], the same
//! way a host input system defers callbacks to its poll.

use std::cell::RefCell;

use glam::Vec2;
use tracing::{debug, trace};

use crate::config::PointerActions;
use crate::input::{
    ActionEvent, ActionId, ActionMapId, ActionPhase, Broadcaster, ButtonControl, ControlScheme,
    DeviceChange, DeviceNotification, InputDevice, InputSystem, PlayerInput, PlayerNotification,
    Subscription,
};

/// How an action turns staged input into its per-frame value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionKind {
    /// Pressed/released; value is 1.0 on x while held
    Button,
    /// Holds the last staged value (sticks)
    Value,
    /// Sums everything staged since the previous poll (mouse motion, wheel)
    Delta,
}

#[derive(Debug)]
struct MapEntry {
    name: String,
    enabled: bool,
}

#[derive(Debug)]
struct ActionEntry {
    name: String,
    map: ActionMapId,
    kind: ActionKind,
    value: Vec2,
    staged: Vec2,
    pressed: bool,
}

#[derive(Debug)]
enum Queued {
    Phase(ActionId, ActionPhase),
    /// Published even though the action's map has been disabled since
    Cancel(ActionId),
    Scheme(ControlScheme),
    Device(DeviceNotification),
    AnyButton(ButtonControl),
}

enum Outgoing {
    Player(PlayerNotification),
    Device(DeviceNotification),
    AnyButton(ButtonControl),
}

#[derive(Debug, Default)]
struct State {
    maps: Vec<MapEntry>,
    actions: Vec<ActionEntry>,
    scheme: ControlScheme,
    queue: Vec<Queued>,
}

impl State {
    fn action_index(&self, name: &str) -> Option<usize> {
        self.actions.iter().position(|a| a.name == name)
    }

    fn map_enabled(&self, map: ActionMapId) -> bool {
        self.maps
            .get(map.0 as usize)
            .is_some_and(|entry| entry.enabled)
    }
}

/// Scriptable player input plus global input system
pub struct VirtualInput {
    state: RefCell<State>,
    player: Broadcaster<PlayerNotification>,
    any_button: Broadcaster<ButtonControl>,
    devices: Broadcaster<DeviceNotification>,
}

impl VirtualInput {
    /// Creates an input with no maps or actions
    pub fn new() -> Self {
        Self {
            state: RefCell::new(State::default()),
            player: Broadcaster::new(),
            any_button: Broadcaster::new(),
            devices: Broadcaster::new(),
        }
    }

    /// Input with an enabled `UI` map holding the actions a pointer needs
    pub fn for_pointer(actions: &PointerActions) -> Self {
        let input = Self::new();
        let map = input.add_action_map("UI", true);
        input.add_action(map, &actions.delta, ActionKind::Delta);
        input.add_action(map, &actions.scroll, ActionKind::Delta);
        input.add_action(map, &actions.select, ActionKind::Button);
        input.add_action(map, &actions.select_alternate, ActionKind::Button);
        input.add_action(map, &actions.select_tertiary, ActionKind::Button);
        input
    }

    pub fn add_action_map(&self, name: &str, enabled: bool) -> ActionMapId {
        let mut state = self.state.borrow_mut();
        state.maps.push(MapEntry {
            name: name.to_string(),
            enabled,
        });
        ActionMapId(state.maps.len() as u32 - 1)
    }

    pub fn add_action(&self, map: ActionMapId, name: &str, kind: ActionKind) -> ActionId {
        let mut state = self.state.borrow_mut();
        state.actions.push(ActionEntry {
            name: name.to_string(),
            map,
            kind,
            value: Vec2::ZERO,
            staged: Vec2::ZERO,
            pressed: false,
        });
        ActionId(state.actions.len() as u32 - 1)
    }

    /// Stages an absolute value; replaces anything staged for a delta action
    pub fn set_value(&self, action: &str, value: Vec2) {
        let mut state = self.state.borrow_mut();
        if let Some(index) = state.action_index(action) {
            state.actions[index].staged = value;
        }
    }

    /// Adds to the staged value of a delta action
    pub fn add_delta(&self, action: &str, delta: Vec2) {
        let mut state = self.state.borrow_mut();
        if let Some(index) = state.action_index(action) {
            state.actions[index].staged += delta;
        }
    }

    /// Queues a press: `Started` then `Performed` on the next poll
    ///
    /// Pressing an action that is already held, or whose map is disabled,
    /// does nothing.
    pub fn press(&self, action: &str) {
        let mut state = self.state.borrow_mut();
        let Some(index) = state.action_index(action) else {
            return;
        };
        if state.actions[index].pressed || !state.map_enabled(state.actions[index].map) {
            return;
        }
        state.actions[index].pressed = true;
        let id = ActionId(index as u32);
        state.queue.push(Queued::Phase(id, ActionPhase::Started));
        state.queue.push(Queued::Phase(id, ActionPhase::Performed));
    }

    /// Queues a release: `Canceled` on the next poll
    pub fn release(&self, action: &str) {
        let mut state = self.state.borrow_mut();
        let Some(index) = state.action_index(action) else {
            return;
        };
        if !state.actions[index].pressed {
            return;
        }
        state.actions[index].pressed = false;
        state
            .queue
            .push(Queued::Phase(ActionId(index as u32), ActionPhase::Canceled));
    }

    pub fn is_pressed(&self, action: &str) -> bool {
        let state = self.state.borrow();
        state
            .action_index(action)
            .is_some_and(|index| state.actions[index].pressed)
    }

    /// Queues a control scheme switch
    pub fn set_control_scheme(&self, scheme: ControlScheme) {
        self.state.borrow_mut().queue.push(Queued::Scheme(scheme));
    }

    /// Queues a device change notification
    pub fn change_device(&self, device: InputDevice, change: DeviceChange) {
        self.state
            .borrow_mut()
            .queue
            .push(Queued::Device(DeviceNotification { device, change }));
    }

    /// Queues an any-button-press notification
    pub fn report_button_press(&self, control: ButtonControl) {
        self.state
            .borrow_mut()
            .queue
            .push(Queued::AnyButton(control));
    }

    fn event_for(state: &State, action: ActionId, phase: ActionPhase) -> Option<ActionEvent> {
        let entry = state.actions.get(action.0 as usize)?;
        Some(ActionEvent {
            action,
            name: entry.name.clone(),
            map: entry.map,
            phase,
        })
    }
}

impl Default for VirtualInput {
    fn default() -> Self {
        Self::new()
    }
}

impl InputSystem for VirtualInput {
    fn update(&self) {
        let outgoing = {
            let mut state = self.state.borrow_mut();

            for action in &mut state.actions {
                match action.kind {
                    ActionKind::Button => {
                        action.value = if action.pressed { Vec2::X } else { Vec2::ZERO };
                    }
                    ActionKind::Value => action.value = action.staged,
                    ActionKind::Delta => {
                        action.value = action.staged;
                        action.staged = Vec2::ZERO;
                    }
                }
            }

            let queue = std::mem::take(&mut state.queue);
            let mut outgoing = Vec::with_capacity(queue.len());
            for item in queue {
                match item {
                    Queued::Phase(action, phase) => {
                        let Some(event) = Self::event_for(&state, action, phase) else {
                            continue;
                        };
                        if state.map_enabled(event.map) {
                            outgoing.push(Outgoing::Player(PlayerNotification::ActionTriggered(
                                event,
                            )));
                        } else {
                            trace!(action = %event.name, "Dropped action on disabled map");
                        }
                    }
                    Queued::Cancel(action) => {
                        if let Some(event) = Self::event_for(&state, action, ActionPhase::Canceled) {
                            outgoing.push(Outgoing::Player(PlayerNotification::ActionTriggered(
                                event,
                            )));
                        }
                    }
                    Queued::Scheme(scheme) => {
                        debug!(scheme = %scheme, "Control scheme changed");
                        state.scheme = scheme.clone();
                        outgoing.push(Outgoing::Player(PlayerNotification::ControlsChanged(
                            scheme,
                        )));
                    }
                    Queued::Device(notification) => outgoing.push(Outgoing::Device(notification)),
                    Queued::AnyButton(control) => outgoing.push(Outgoing::AnyButton(control)),
                }
            }
            outgoing
        };

        for item in outgoing {
            match item {
                Outgoing::Player(notification) => {
                    self.player.publish(notification);
                }
                Outgoing::Device(notification) => {
                    self.devices.publish(notification);
                }
                Outgoing::AnyButton(control) => {
                    self.any_button.publish(control);
                }
            }
        }
    }

    fn subscribe_any_button(&self) -> Subscription<ButtonControl> {
        self.any_button.subscribe()
    }

    fn subscribe_device_changes(&self) -> Subscription<DeviceNotification> {
        self.devices.subscribe()
    }
}

impl PlayerInput for VirtualInput {
    fn find_action_map(&self, name: &str) -> Option<ActionMapId> {
        self.state
            .borrow()
            .maps
            .iter()
            .position(|m| m.name == name)
            .map(|index| ActionMapId(index as u32))
    }

    fn set_action_map_enabled(&self, map: ActionMapId, enabled: bool) {
        let mut state = self.state.borrow_mut();
        let Some(entry) = state.maps.get_mut(map.0 as usize) else {
            return;
        };
        entry.enabled = enabled;

        if !enabled {
            // Held actions are canceled; a press nobody has seen yet is just dropped
            let held: Vec<ActionId> = state
                .actions
                .iter()
                .enumerate()
                .filter(|(_, a)| a.map == map && a.pressed)
                .map(|(index, _)| ActionId(index as u32))
                .collect();

            for id in held {
                let started_pending = state
                    .queue
                    .iter()
                    .any(|q| matches!(q, Queued::Phase(a, ActionPhase::Started) if *a == id));
                state
                    .queue
                    .retain(|q| !matches!(q, Queued::Phase(a, _) if *a == id));
                if !started_pending {
                    state.queue.push(Queued::Cancel(id));
                }
            }

            for action in state.actions.iter_mut().filter(|a| a.map == map) {
                action.pressed = false;
                action.value = Vec2::ZERO;
                action.staged = Vec2::ZERO;
            }
        }
    }

    fn is_action_map_enabled(&self, map: ActionMapId) -> bool {
        self.state.borrow().map_enabled(map)
    }

    fn find_action(&self, name: &str) -> Option<ActionId> {
        self.state
            .borrow()
            .action_index(name)
            .map(|index| ActionId(index as u32))
    }

    fn read_vec2(&self, action: ActionId) -> Vec2 {
        let state = self.state.borrow();
        match state.actions.get(action.0 as usize) {
            Some(entry) if state.map_enabled(entry.map) => entry.value,
            _ => Vec2::ZERO,
        }
    }

    fn current_control_scheme(&self) -> ControlScheme {
        self.state.borrow().scheme.clone()
    }

    fn subscribe(&self) -> Subscription<PlayerNotification> {
        self.player.subscribe()
    }
}
