//! Input module wiring: router ordering, operator registry and listeners

use std::cell::RefCell;
use std::rc::Rc;

use glam::Vec2;
use sim_pointer::config::PointerConfig;
use sim_pointer::error::InputError;
use sim_pointer::host::{RectScene, VirtualInput, WidgetId};
use sim_pointer::input::{
    ActionEvent, ActionMapHandler, ActionMapListener, ActionPhase, ControlScheme, DeviceChange,
    InputDevice, InputModule, OperatorId, Rect, SimulatedPointer, TickGroup, Tickable,
};

#[derive(Default)]
struct SchemeWatcher {
    schemes: Vec<ControlScheme>,
    phases: Vec<(String, ActionPhase)>,
    ticks: u32,
}

impl ActionMapHandler for SchemeWatcher {
    fn on_action_triggered(&mut self, event: &ActionEvent) {
        self.phases.push((event.name.clone(), event.phase));
    }

    fn on_controls_changed(&mut self, scheme: &ControlScheme) {
        self.schemes.push(scheme.clone());
    }

    fn on_tick(&mut self, _delta: f32) {
        self.ticks += 1;
    }
}

fn pointer_on(input: &Rc<VirtualInput>, bounds: Rect) -> SimulatedPointer<WidgetId> {
    let config = PointerConfig {
        speed_mouse_keyboard: 1.0,
        speed_gamepad: 4.0,
        bounds,
        ..PointerConfig::default()
    };
    let scene = RectScene::centered(Vec2::new(100.0, 100.0));
    SimulatedPointer::new(input.clone(), Box::new(scene), config).expect("pointer actions exist")
}

#[test]
fn test_poll_runs_before_transmission() {
    let input = Rc::new(VirtualInput::for_pointer(&Default::default()));
    let mut module: InputModule<WidgetId> = InputModule::load(input.clone());
    let mut listener =
        ActionMapListener::init(input.clone(), "UI", true, SchemeWatcher::default())
            .expect("UI map exists");

    let router_group = module.router_mut().expect("loaded").tick_group();
    assert!(router_group < module.tick_group());
    assert_eq!(listener.tick_group(), TickGroup::InputTransmission);

    // A press staged before the frame is visible to both consumers in that frame
    input.press("Select");
    module.run_frame(0.1);
    listener.tick(0.1);

    assert_eq!(
        listener.handler().phases,
        vec![
            ("Select".to_string(), ActionPhase::Started),
            ("Select".to_string(), ActionPhase::Performed),
        ]
    );
    assert_eq!(listener.handler().ticks, 1);
    assert_eq!(module.router_mut().map(|r| r.poll_count()), Some(1));
}

#[test]
fn test_scheme_switch_reaches_pointers_and_listeners() {
    let input = Rc::new(VirtualInput::for_pointer(&Default::default()));
    let mut module = InputModule::load(input.clone());
    let mut listener =
        ActionMapListener::init(input.clone(), "UI", true, SchemeWatcher::default())
            .expect("UI map exists");
    module.register_pointer(OperatorId(0), pointer_on(&input, Rect::centered(100.0, 100.0)));

    input.set_control_scheme(ControlScheme::Gamepad);
    input.add_delta("Delta", Vec2::new(2.0, 0.0));
    module.run_frame(1.0);
    listener.tick(1.0);

    let pointer = module.pointer(OperatorId(0)).expect("registered");
    assert_eq!(pointer.control_scheme(), &ControlScheme::Gamepad);
    assert_eq!(pointer.position(), Vec2::new(8.0, 0.0));
    assert_eq!(
        listener.handler().schemes,
        vec![ControlScheme::KeyboardMouse, ControlScheme::Gamepad]
    );
    assert_eq!(listener.current_control_scheme(), &ControlScheme::Gamepad);
}

#[test]
fn test_operators_share_input_but_keep_their_own_state() {
    let input = Rc::new(VirtualInput::for_pointer(&Default::default()));
    let mut module = InputModule::load(input.clone());
    module.register_pointer(OperatorId(0), pointer_on(&input, Rect::centered(100.0, 100.0)));
    module.register_pointer(OperatorId(1), pointer_on(&input, Rect::centered(10.0, 10.0)));

    input.add_delta("Delta", Vec2::new(20.0, 0.0));
    module.run_frame(1.0);

    let wide = module.pointer(OperatorId(0)).expect("registered");
    let narrow = module.pointer(OperatorId(1)).expect("registered");
    assert_eq!(wide.position(), Vec2::new(20.0, 0.0));
    assert_eq!(narrow.position(), Vec2::new(5.0, 0.0));
    assert!(module.pointer(OperatorId(2)).is_none());

    if let Some(pointer) = module.pointer_mut(OperatorId(1)) {
        pointer.set_position(Vec2::new(-50.0, 50.0));
    }
    assert_eq!(
        module.pointer(OperatorId(1)).map(|p| p.position()),
        Some(Vec2::new(-5.0, 5.0))
    );
}

#[test]
fn test_device_changes_are_forwarded_in_order() {
    let input = Rc::new(VirtualInput::for_pointer(&Default::default()));
    let mut module: InputModule<WidgetId> = InputModule::load(input.clone());
    let seen = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&seen);
    module.on_device_changed(move |n| sink.borrow_mut().push((n.device.id, n.change)));

    let pad = InputDevice::new(7, "Gamepad");
    input.change_device(pad.clone(), DeviceChange::Added);
    input.change_device(pad.clone(), DeviceChange::Disconnected);
    module.run_frame(0.016);
    input.change_device(pad, DeviceChange::Reconnected);
    module.run_frame(0.016);

    assert_eq!(
        *seen.borrow(),
        vec![
            (7, DeviceChange::Added),
            (7, DeviceChange::Disconnected),
            (7, DeviceChange::Reconnected),
        ]
    );
}

#[test]
fn test_listener_for_missing_map_fails() {
    let input = Rc::new(VirtualInput::for_pointer(&Default::default()));
    let result = ActionMapListener::init(input, "Gameplay", true, SchemeWatcher::default());

    assert!(matches!(result, Err(InputError::ActionMapNotFound(name)) if name == "Gameplay"));
}

#[test]
fn test_disabled_listener_map_silences_pointer_buttons() {
    let input = Rc::new(VirtualInput::for_pointer(&Default::default()));
    let mut module = InputModule::load(input.clone());
    let mut listener =
        ActionMapListener::init(input.clone(), "UI", true, SchemeWatcher::default())
            .expect("UI map exists");
    module.register_pointer(OperatorId(0), pointer_on(&input, Rect::centered(100.0, 100.0)));

    listener.on_disable();
    input.press("Select");
    input.add_delta("Delta", Vec2::new(10.0, 0.0));
    module.run_frame(1.0);

    let pointer = module.pointer(OperatorId(0)).expect("registered");
    assert!(!pointer.snapshot().primary.is_pressed);
    assert_eq!(pointer.position(), Vec2::ZERO);
    assert!(!listener.is_map_enabled());
}
