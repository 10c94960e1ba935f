//! Process-wide input module
//!
//! Owns the input router, the operator → pointer registry, and the global
//! any-button / device-change notifications.

use std::fmt;
use std::rc::Rc;

use indexmap::IndexMap;
use tracing::{debug, info};

use super::action::{ButtonControl, DeviceNotification};
use super::channel::Subscription;
use super::host::InputSystem;
use super::pointer::SimulatedPointer;
use super::router::InputRouter;
use super::tick::{TickGroup, Tickable};

/// Logical player index
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct OperatorId(pub u32);

impl fmt::Display for OperatorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "operator#{}", self.0)
    }
}

type ButtonListener = Box<dyn FnMut(&ButtonControl)>;
type DeviceListener = Box<dyn FnMut(&DeviceNotification)>;

/// Registry and per-frame driver for every operator's pointer
pub struct InputModule<H> {
    router: Option<InputRouter>,
    pointers: IndexMap<OperatorId, SimulatedPointer<H>>,
    any_button: Option<Subscription<ButtonControl>>,
    device_changes: Option<Subscription<DeviceNotification>>,
    button_listeners: Vec<ButtonListener>,
    device_listeners: Vec<DeviceListener>,
}

impl<H: Clone + PartialEq> InputModule<H> {
    /// Creates the router and subscribes to global notifications
    pub fn load(system: Rc<dyn InputSystem>) -> Self {
        let any_button = system.subscribe_any_button();
        let device_changes = system.subscribe_device_changes();

        info!("Input module loaded");

        Self {
            router: Some(InputRouter::new(system)),
            pointers: IndexMap::new(),
            any_button: Some(any_button),
            device_changes: Some(device_changes),
            button_listeners: Vec::new(),
            device_listeners: Vec::new(),
        }
    }

    /// Sets or replaces the pointer for `operator`
    ///
    /// Returns the pointer that was replaced, if any. A replaced pointer keeps
    /// its position in tick order.
    pub fn register_pointer(
        &mut self,
        operator: OperatorId,
        pointer: SimulatedPointer<H>,
    ) -> Option<SimulatedPointer<H>> {
        let previous = self.pointers.insert(operator, pointer);
        if previous.is_some() {
            debug!(%operator, "Replaced operator pointer");
        } else {
            debug!(%operator, "Registered operator pointer");
        }
        previous
    }

    /// Removes the pointer for `operator`; unknown operators are ignored
    pub fn unregister_pointer(&mut self, operator: OperatorId) -> Option<SimulatedPointer<H>> {
        let removed = self.pointers.shift_remove(&operator);
        if removed.is_some() {
            debug!(%operator, "Unregistered operator pointer");
        }
        removed
    }

    pub fn pointer(&self, operator: OperatorId) -> Option<&SimulatedPointer<H>> {
        self.pointers.get(&operator)
    }

    pub fn pointer_mut(&mut self, operator: OperatorId) -> Option<&mut SimulatedPointer<H>> {
        self.pointers.get_mut(&operator)
    }

    /// Registered operators in tick order
    pub fn operators(&self) -> impl Iterator<Item = OperatorId> + '_ {
        self.pointers.keys().copied()
    }

    pub fn pointer_count(&self) -> usize {
        self.pointers.len()
    }

    /// Called with every control pressed on any device, e.g. to switch schemes
    pub fn on_any_button_pressed(&mut self, listener: impl FnMut(&ButtonControl) + 'static) {
        self.button_listeners.push(Box::new(listener));
    }

    /// Called with every device change
    pub fn on_device_changed(&mut self, listener: impl FnMut(&DeviceNotification) + 'static) {
        self.device_listeners.push(Box::new(listener));
    }

    /// Polls the host, then runs the transmission tick
    pub fn run_frame(&mut self, delta: f32) {
        if let Some(router) = &mut self.router {
            router.tick(delta);
        }
        self.tick(delta);
    }

    /// Mutable access to the router, for an external scheduler
    pub fn router_mut(&mut self) -> Option<&mut InputRouter> {
        self.router.as_mut()
    }

    pub fn is_loaded(&self) -> bool {
        self.router.is_some()
    }

    /// Drops the router and global subscriptions
    ///
    /// Registered pointers stay registered but no longer receive global
    /// notifications through this module. Safe to call more than once.
    pub fn shutdown(&mut self) {
        let was_loaded = self.router.take().is_some();
        self.any_button = None;
        self.device_changes = None;
        if was_loaded {
            info!("Input module shut down");
        }
    }

    fn forward_global_notifications(&mut self) {
        if let Some(subscription) = &self.any_button {
            for control in subscription.drain() {
                for listener in &mut self.button_listeners {
                    listener(&control);
                }
            }
        }

        if let Some(subscription) = &self.device_changes {
            for notification in subscription.drain() {
                debug!(
                    device = %notification.device.name,
                    change = ?notification.change,
                    "Input device changed"
                );
                for listener in &mut self.device_listeners {
                    listener(&notification);
                }
            }
        }
    }
}

impl<H: Clone + PartialEq> Tickable for InputModule<H> {
    fn tick_group(&self) -> TickGroup {
        TickGroup::InputTransmission
    }

    fn tick(&mut self, delta: f32) {
        self.forward_global_notifications();

        for pointer in self.pointers.values_mut() {
            pointer.frame(delta);
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use glam::Vec2;

    use super::*;
    use crate::config::PointerConfig;
    use crate::host::{RectScene, VirtualInput, WidgetId};
    use crate::input::{DeviceChange, InputDevice, PointerSnapshot};

    fn pointer_for(input: &Rc<VirtualInput>) -> SimulatedPointer<WidgetId> {
        let scene = RectScene::centered(Vec2::new(100.0, 100.0));
        SimulatedPointer::new(input.clone(), Box::new(scene), PointerConfig::default())
            .expect("pointer actions exist")
    }

    fn counting_pointer(
        input: &Rc<VirtualInput>,
        count: &Rc<RefCell<u32>>,
    ) -> SimulatedPointer<WidgetId> {
        let mut pointer = pointer_for(input);
        let count = Rc::clone(count);
        pointer.register_receiver(Box::new(move |_: &PointerSnapshot, _: f32| {
            *count.borrow_mut() += 1;
        }));
        pointer
    }

    fn module(input: &Rc<VirtualInput>) -> InputModule<WidgetId> {
        InputModule::load(input.clone())
    }

    #[test]
    fn test_unknown_operator_is_none() {
        let input = Rc::new(VirtualInput::for_pointer(&Default::default()));
        let mut module = module(&input);

        assert!(module.pointer(OperatorId(3)).is_none());
        assert!(module.pointer_mut(OperatorId(3)).is_none());
        assert!(module.unregister_pointer(OperatorId(3)).is_none());
    }

    #[test]
    fn test_register_replaces_existing_operator() {
        let input = Rc::new(VirtualInput::for_pointer(&Default::default()));
        let mut module = module(&input);
        let old_count = Rc::new(RefCell::new(0));
        let new_count = Rc::new(RefCell::new(0));

        assert!(
            module
                .register_pointer(OperatorId(0), counting_pointer(&input, &old_count))
                .is_none()
        );
        let replaced = module.register_pointer(OperatorId(0), counting_pointer(&input, &new_count));
        assert!(replaced.is_some());
        drop(replaced);

        module.run_frame(0.016);

        assert_eq!(module.pointer_count(), 1);
        assert_eq!(*old_count.borrow(), 0);
        assert_eq!(*new_count.borrow(), 1);
    }

    #[test]
    fn test_tick_drives_every_registered_pointer_once() {
        let input = Rc::new(VirtualInput::for_pointer(&Default::default()));
        let mut module = module(&input);
        let a = Rc::new(RefCell::new(0));
        let b = Rc::new(RefCell::new(0));
        module.register_pointer(OperatorId(1), counting_pointer(&input, &a));
        module.register_pointer(OperatorId(0), counting_pointer(&input, &b));

        module.run_frame(0.016);
        module.run_frame(0.016);

        assert_eq!(*a.borrow(), 2);
        assert_eq!(*b.borrow(), 2);
        assert_eq!(
            module.operators().collect::<Vec<_>>(),
            vec![OperatorId(1), OperatorId(0)]
        );

        module.unregister_pointer(OperatorId(1));
        module.run_frame(0.016);
        assert_eq!(*a.borrow(), 2);
        assert_eq!(*b.borrow(), 3);
    }

    #[test]
    fn test_global_notifications_reach_listeners() {
        let input = Rc::new(VirtualInput::for_pointer(&Default::default()));
        let mut module = module(&input);
        let seen = Rc::new(RefCell::new(Vec::new()));

        let sink = Rc::clone(&seen);
        module.on_device_changed(move |n| sink.borrow_mut().push(format!("{:?}", n.change)));
        let sink = Rc::clone(&seen);
        module.on_any_button_pressed(move |c| sink.borrow_mut().push(c.path.clone()));

        let mouse = InputDevice::new(1, "Mouse");
        input.change_device(mouse.clone(), DeviceChange::Added);
        input.report_button_press(ButtonControl {
            device: mouse,
            path: "<Mouse>/leftButton".to_string(),
        });
        module.run_frame(0.016);

        assert_eq!(
            *seen.borrow(),
            vec!["<Mouse>/leftButton".to_string(), "Added".to_string()]
        );
    }

    #[test]
    fn test_shutdown_is_idempotent_and_stops_polling() {
        let input = Rc::new(VirtualInput::for_pointer(&Default::default()));
        let mut module = module(&input);
        let seen = Rc::new(RefCell::new(0));
        let sink = Rc::clone(&seen);
        module.on_device_changed(move |_| *sink.borrow_mut() += 1);

        module.shutdown();
        module.shutdown();
        assert!(!module.is_loaded());

        input.change_device(InputDevice::new(1, "Mouse"), DeviceChange::Removed);
        module.run_frame(0.016);
        assert_eq!(*seen.borrow(), 0);
    }
}
