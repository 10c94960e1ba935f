//! Raw input collection from winit events

use std::collections::HashMap;
use std::rc::Rc;

use glam::Vec2;
use tracing::info;
use winit::event::{DeviceEvent, DeviceId, ElementState, MouseButton, MouseScrollDelta, WindowEvent};
use winit::keyboard::PhysicalKey;

use crate::config::PointerActions;
use crate::host::VirtualInput;
use crate::input::{ButtonControl, DeviceChange, InputDevice};

/// Pixels per scroll line for wheels that report line deltas
const SCROLL_LINE_PIXELS: f32 = 20.0;

/// Feeds winit window and device events into a [`VirtualInput`]
///
/// Mouse motion drives the delta action, the wheel drives scroll, and the three
/// mouse buttons drive the select actions. Every winit device belongs to the
/// keyboard & mouse scheme.
pub struct WinitInput {
    input: Rc<VirtualInput>,
    actions: PointerActions,
    devices: HashMap<DeviceId, InputDevice>,
}

impl WinitInput {
    /// Creates a collector with a fresh pointer action map
    pub fn new(actions: PointerActions) -> Self {
        Self {
            input: Rc::new(VirtualInput::for_pointer(&actions)),
            actions,
            devices: HashMap::new(),
        }
    }

    /// Shared handle to the backing input, usable as player input and input system
    pub fn input(&self) -> Rc<VirtualInput> {
        Rc::clone(&self.input)
    }

    /// Handle a winit window event
    pub fn handle_window_event(&mut self, event: &WindowEvent) {
        match event {
            WindowEvent::MouseInput {
                device_id,
                state,
                button,
            } => self.mouse_button(*device_id, *state, *button),

            WindowEvent::MouseWheel {
                device_id, delta, ..
            } => self.scroll(*device_id, *delta),

            WindowEvent::KeyboardInput {
                device_id, event, ..
            } => self.key(*device_id, event.state, event.repeat, event.physical_key),

            // Held buttons would otherwise stay pressed until focus returns
            WindowEvent::Focused(false) => self.release_selects(),

            _ => {}
        }
    }

    /// Handle a raw device event
    pub fn handle_device_event(&mut self, device_id: DeviceId, event: &DeviceEvent) {
        if let DeviceEvent::MouseMotion { delta } = event {
            self.mouse_motion(device_id, *delta);
        }
    }

    fn mouse_button(&mut self, device_id: DeviceId, state: ElementState, button: MouseButton) {
        let device = self.device(device_id, "Mouse");
        let Some((action, path)) = self.select_action(button) else {
            return;
        };

        match state {
            ElementState::Pressed => {
                self.input.press(&action);
                self.input.report_button_press(ButtonControl {
                    device,
                    path: path.to_string(),
                });
            }
            ElementState::Released => self.input.release(&action),
        }
    }

    fn scroll(&mut self, device_id: DeviceId, delta: MouseScrollDelta) {
        self.device(device_id, "Mouse");
        let pixel_delta = match delta {
            MouseScrollDelta::LineDelta(x, y) => Vec2::new(x, y) * SCROLL_LINE_PIXELS,
            MouseScrollDelta::PixelDelta(pos) => Vec2::new(pos.x as f32, pos.y as f32),
        };
        self.input.add_delta(&self.actions.scroll, pixel_delta);
    }

    /// Keys only feed the any-button listener, once per physical press
    fn key(&mut self, device_id: DeviceId, state: ElementState, repeat: bool, key: PhysicalKey) {
        let device = self.device(device_id, "Keyboard");
        if state == ElementState::Pressed && !repeat {
            self.input.report_button_press(ButtonControl {
                device,
                path: format!("<Keyboard>/{:?}", key),
            });
        }
    }

    fn release_selects(&self) {
        for action in [
            &self.actions.select,
            &self.actions.select_alternate,
            &self.actions.select_tertiary,
        ] {
            self.input.release(action);
        }
    }

    fn mouse_motion(&mut self, device_id: DeviceId, (dx, dy): (f64, f64)) {
        self.device(device_id, "Mouse");
        self.input
            .add_delta(&self.actions.delta, Vec2::new(dx as f32, dy as f32));
    }

    fn select_action(&self, button: MouseButton) -> Option<(String, &'static str)> {
        match button {
            MouseButton::Left => Some((self.actions.select.clone(), "<Mouse>/leftButton")),
            MouseButton::Right => Some((
                self.actions.select_alternate.clone(),
                "<Mouse>/rightButton",
            )),
            MouseButton::Middle => Some((
                self.actions.select_tertiary.clone(),
                "<Mouse>/middleButton",
            )),
            _ => None,
        }
    }

    /// Looks up a device, announcing it as added the first time it is seen
    fn device(&mut self, id: DeviceId, kind: &str) -> InputDevice {
        if let Some(device) = self.devices.get(&id) {
            return device.clone();
        }

        let device = InputDevice::new(self.devices.len() as u32, kind);
        info!(device = %device.name, id = device.id, "New input device");
        self.input.change_device(device.clone(), DeviceChange::Added);
        self.devices.insert(id, device.clone());
        device
    }
}
