//! Simulated on-screen pointer
//!
//! Translates an operator's device deltas into a pointer that lives inside an
//! overlay rectangle, resolves what it hovers and selects in a [`UiScene`], and
//! buffers a [`PointerSnapshot`] for registered receivers.
//!
//! # Frame
//!
//! ```text
//! notifications → button down/up     (against last frame's hovered set)
//! Delta × speed × dt → position      (clamped to bounds)
//! raycast → hovered diff             (Enter for new, Exit for gone)
//! Move on every hovered object
//! transmit snapshot → clear edges
//! ```

use std::rc::Rc;

use glam::Vec2;
use tracing::{debug, info, trace};

use super::action::{ActionEvent, ActionId, ActionPhase, ControlScheme, PlayerNotification};
use super::channel::Subscription;
use super::events::{PointerButton, PointerEventData, PointerEventKind};
use super::host::{PlayerInput, UiScene};
use super::receiver::{InputReceiver, ReceiverId, ReceiverList};
use super::snapshot::PointerSnapshot;
use crate::config::PointerConfig;
use crate::error::{InputError, Result};

/// Pointer driven by one operator's input, hovering over one UI scene
pub struct SimulatedPointer<H> {
    input: Rc<dyn PlayerInput>,
    scene: Box<dyn UiScene<H>>,
    subscription: Option<Subscription<PlayerNotification>>,
    config: PointerConfig,
    delta_action: ActionId,
    scroll_action: ActionId,
    control_scheme: ControlScheme,
    /// Overlay-local position
    position: Vec2,
    visible: bool,
    event_data: PointerEventData,
    hovered: Vec<H>,
    selected: Vec<H>,
    snapshot: PointerSnapshot,
    receivers: ReceiverList<PointerSnapshot>,
}

impl<H: Clone + PartialEq> SimulatedPointer<H> {
    /// Binds a pointer to a player's input and a scene
    ///
    /// Fails if the configured delta or scroll action does not exist.
    pub fn new(
        input: Rc<dyn PlayerInput>,
        scene: Box<dyn UiScene<H>>,
        config: PointerConfig,
    ) -> Result<Self> {
        let delta_action = input
            .find_action(&config.actions.delta)
            .ok_or_else(|| InputError::ActionNotFound(config.actions.delta.clone()))?;
        let scroll_action = input
            .find_action(&config.actions.scroll)
            .ok_or_else(|| InputError::ActionNotFound(config.actions.scroll.clone()))?;

        let subscription = input.subscribe();
        let control_scheme = input.current_control_scheme();
        let position = config.bounds.center();

        info!(
            scheme = %control_scheme,
            bounds = ?config.bounds,
            "Simulated pointer initialized"
        );

        Ok(Self {
            input,
            scene,
            subscription: Some(subscription),
            config,
            delta_action,
            scroll_action,
            control_scheme,
            position,
            visible: true,
            event_data: PointerEventData::default(),
            hovered: Vec::new(),
            selected: Vec::new(),
            snapshot: PointerSnapshot::new(),
            receivers: ReceiverList::new(),
        })
    }

    /// Runs one full frame: [`update`](Self::update) then [`transmit`](Self::transmit)
    pub fn frame(&mut self, delta_time: f32) {
        self.update(delta_time);
        self.transmit(delta_time);
    }

    /// Moves the pointer and resolves hover state for this frame
    pub fn update(&mut self, delta_time: f32) {
        self.process_notifications();

        let device_delta = self.input.read_vec2(self.delta_action);
        self.snapshot.scroll = self.input.read_vec2(self.scroll_action);

        let mut increase = device_delta * (self.speed() * delta_time);
        if !increase.is_finite() {
            increase = Vec2::ZERO;
        }
        self.snapshot.delta = increase;
        self.position = self.config.bounds.clamp(self.position + increase);
        self.snapshot.position = self.position;

        self.prune_dead();
        self.event_data.position = self.scene.local_to_screen(self.position);
        let hits = self.scene.raycast_all(self.event_data.position);
        self.resolve_hovered(hits);

        for obj in &self.hovered {
            self.scene
                .execute(obj, PointerEventKind::Move, &self.event_data);
        }
    }

    /// Delivers the buffered snapshot to every receiver, then clears edge flags
    pub fn transmit(&mut self, delta_time: f32) {
        self.receivers.deliver(&self.snapshot, delta_time);
        self.snapshot.clear_edges();
    }

    /// Handles an action-triggered notification
    ///
    /// Only the three select actions are of interest; `Started` presses and
    /// `Canceled` releases. Every other action or phase is ignored.
    pub fn handle_action(&mut self, event: &ActionEvent) {
        let Some(button) = self.button_for_action(&event.name) else {
            return;
        };

        match event.phase {
            ActionPhase::Started => self.pointer_down(button),
            ActionPhase::Canceled => self.pointer_up(button),
            _ => {}
        }
    }

    /// Switches the speed profile to match the active device family
    pub fn on_controls_changed(&mut self, scheme: ControlScheme) {
        if scheme != self.control_scheme {
            debug!(from = %self.control_scheme, to = %scheme, "Pointer control scheme changed");
        }
        self.control_scheme = scheme;
    }

    pub fn register_receiver(&mut self, receiver: Box<dyn InputReceiver<PointerSnapshot>>) -> ReceiverId {
        self.receivers.register(receiver)
    }

    /// Returns false if the receiver was not registered
    pub fn unregister_receiver(&mut self, id: ReceiverId) -> bool {
        self.receivers.unregister(id)
    }

    pub fn receiver_count(&self) -> usize {
        self.receivers.len()
    }

    pub fn set_pointer_visible(&mut self, visible: bool) {
        self.visible = visible;
        self.scene.set_pointer_visible(visible);
    }

    pub fn is_pointer_visible(&self) -> bool {
        self.visible
    }

    /// Overlay-local pointer position
    pub fn position(&self) -> Vec2 {
        self.position
    }

    /// Warps the pointer, keeping it inside the bounds
    pub fn set_position(&mut self, position: Vec2) {
        self.position = self.config.bounds.clamp(position);
    }

    /// Pointer position in normalized viewport space, for world raycasts
    pub fn pointer_pos_for_viewport_raycast(&self) -> Vec2 {
        self.scene.local_to_viewport(self.position)
    }

    pub fn control_scheme(&self) -> &ControlScheme {
        &self.control_scheme
    }

    /// Objects currently under the pointer, in hit-test order
    pub fn hovered(&self) -> &[H] {
        &self.hovered
    }

    /// Objects pressed and not yet released
    pub fn selected(&self) -> &[H] {
        &self.selected
    }

    /// Snapshot as it will be delivered on the next transmit
    pub fn snapshot(&self) -> &PointerSnapshot {
        &self.snapshot
    }

    /// Stops listening to the player's notifications
    ///
    /// Safe to call more than once.
    pub fn teardown(&mut self) {
        if self.subscription.take().is_some() {
            debug!("Simulated pointer unsubscribed from player input");
        }
    }

    fn process_notifications(&mut self) {
        let Some(subscription) = &self.subscription else {
            return;
        };
        let pending: Vec<PlayerNotification> = subscription.drain().collect();

        for notification in pending {
            match notification {
                PlayerNotification::ActionTriggered(event) => self.handle_action(&event),
                PlayerNotification::ControlsChanged(scheme) => self.on_controls_changed(scheme),
            }
        }
    }

    fn speed(&self) -> f32 {
        if self.control_scheme.is_gamepad() {
            self.config.speed_gamepad
        } else {
            self.config.speed_mouse_keyboard
        }
    }

    fn button_for_action(&self, name: &str) -> Option<PointerButton> {
        let actions = &self.config.actions;
        if name == actions.select {
            Some(PointerButton::Left)
        } else if name == actions.select_alternate {
            Some(PointerButton::Right)
        } else if name == actions.select_tertiary {
            Some(PointerButton::Middle)
        } else {
            None
        }
    }

    /// Replaces the hovered set with `hits`, emitting enter/exit transitions
    fn resolve_hovered(&mut self, hits: Vec<H>) {
        let mut current: Vec<H> = Vec::with_capacity(hits.len());
        for hit in hits {
            if !current.contains(&hit) {
                current.push(hit);
            }
        }

        for obj in &current {
            if !self.hovered.contains(obj) {
                self.scene
                    .execute(obj, PointerEventKind::Enter, &self.event_data);
            }
        }

        for obj in &self.hovered {
            if !current.contains(obj) {
                self.scene
                    .execute(obj, PointerEventKind::Exit, &self.event_data);
            }
        }

        if current.len() != self.hovered.len() {
            trace!(count = current.len(), "Hovered set changed size");
        }
        self.hovered = current;
    }

    fn pointer_down(&mut self, button: PointerButton) {
        self.event_data.button = button;
        self.snapshot.button_mut(button).press();
        self.prune_dead();

        debug!(?button, hovered = self.hovered.len(), "Pointer down");

        for obj in &self.hovered {
            self.scene
                .execute(obj, PointerEventKind::Down, &self.event_data);
            self.scene
                .execute(obj, PointerEventKind::Click, &self.event_data);
            if !self.selected.contains(obj) {
                self.selected.push(obj.clone());
            }
        }
    }

    fn pointer_up(&mut self, button: PointerButton) {
        self.event_data.button = button;
        self.snapshot.button_mut(button).release();
        self.prune_dead();

        debug!(?button, selected = self.selected.len(), "Pointer up");

        for obj in &self.selected {
            self.scene.execute(obj, PointerEventKind::Up, &self.event_data);
            self.scene
                .execute(obj, PointerEventKind::Deselect, &self.event_data);
        }
        self.selected.clear();
    }

    /// Drops handles the scene no longer knows about
    fn prune_dead(&mut self) {
        let scene = &self.scene;
        self.hovered.retain(|obj| scene.is_alive(obj));
        self.selected.retain(|obj| scene.is_alive(obj));
    }
}
