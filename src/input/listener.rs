//! Action map listener
//!
//! Gates one named action map and forwards the player's notifications to an
//! [`ActionMapHandler`] once per tick.

use std::rc::Rc;

use tracing::{debug, info};

use super::action::{ActionEvent, ActionMapId, ControlScheme, PlayerNotification};
use super::channel::Subscription;
use super::host::PlayerInput;
use super::tick::{TickGroup, Tickable};
use crate::error::{InputError, Result};

/// Hooks a listener forwards to
///
/// All methods default to no-ops so handlers only implement what they use.
pub trait ActionMapHandler {
    /// Called for every action-triggered notification
    fn on_action_triggered(&mut self, _event: &ActionEvent) {}

    /// Called when the player's control scheme changes, and once at init
    fn on_controls_changed(&mut self, _scheme: &ControlScheme) {}

    /// Called every tick after notifications have been forwarded
    fn on_tick(&mut self, _delta: f32) {}
}

/// Listens to one action map of one player
pub struct ActionMapListener<L> {
    input: Rc<dyn PlayerInput>,
    map: ActionMapId,
    map_name: String,
    subscription: Option<Subscription<PlayerNotification>>,
    control_scheme: ControlScheme,
    handler: L,
}

impl<L: ActionMapHandler> ActionMapListener<L> {
    /// Binds to `map_name` and starts listening
    ///
    /// The map is enabled or disabled according to `enable`; the handler sees
    /// the current control scheme before anything else.
    pub fn init(
        input: Rc<dyn PlayerInput>,
        map_name: &str,
        enable: bool,
        mut handler: L,
    ) -> Result<Self> {
        let map = input
            .find_action_map(map_name)
            .ok_or_else(|| InputError::ActionMapNotFound(map_name.to_string()))?;

        let control_scheme = input.current_control_scheme();
        handler.on_controls_changed(&control_scheme);

        input.set_action_map_enabled(map, enable);
        let subscription = input.subscribe();

        info!(map = map_name, enabled = enable, "Action map listener initialized");

        Ok(Self {
            input,
            map,
            map_name: map_name.to_string(),
            subscription: Some(subscription),
            control_scheme,
            handler,
        })
    }

    /// Enables or disables the action map without touching the subscription
    pub fn set_map_enabled(&mut self, enabled: bool) {
        self.input.set_action_map_enabled(self.map, enabled);
    }

    pub fn is_map_enabled(&self) -> bool {
        self.input.is_action_map_enabled(self.map)
    }

    /// Resumes listening and enables the map
    pub fn on_enable(&mut self) {
        self.input.set_action_map_enabled(self.map, true);
        if self.subscription.is_none() {
            self.subscription = Some(self.input.subscribe());
            debug!(map = %self.map_name, "Action map listener enabled");
        }
    }

    /// Stops listening and disables the map
    ///
    /// Safe to call more than once.
    pub fn on_disable(&mut self) {
        if self.subscription.take().is_some() {
            debug!(map = %self.map_name, "Action map listener disabled");
        }
        self.input.set_action_map_enabled(self.map, false);
    }

    pub fn is_listening(&self) -> bool {
        self.subscription.is_some()
    }

    pub fn current_control_scheme(&self) -> &ControlScheme {
        &self.control_scheme
    }

    pub fn handler(&self) -> &L {
        &self.handler
    }

    fn forward_notifications(&mut self) {
        let Some(subscription) = &self.subscription else {
            return;
        };
        let pending: Vec<PlayerNotification> = subscription.drain().collect();

        for notification in pending {
            match notification {
                PlayerNotification::ActionTriggered(event) => {
                    self.handler.on_action_triggered(&event);
                }
                PlayerNotification::ControlsChanged(scheme) => {
                    self.control_scheme = scheme;
                    self.handler.on_controls_changed(&self.control_scheme);
                }
            }
        }
    }
}

impl<L: ActionMapHandler> Tickable for ActionMapListener<L> {
    fn tick_group(&self) -> TickGroup {
        TickGroup::InputTransmission
    }

    fn tick(&mut self, delta: f32) {
        self.forward_notifications();
        self.handler.on_tick(delta);
    }
}
