//! Frame-by-frame pointer behavior through the public API

use std::cell::RefCell;
use std::rc::Rc;

use glam::Vec2;
use sim_pointer::config::PointerConfig;
use sim_pointer::host::{ExecutedEvent, RectScene, VirtualInput, WidgetId};
use sim_pointer::input::{
    ActionMapHandler, ActionMapListener, ButtonFlags, InputModule, OperatorId, PointerEventKind,
    PointerSnapshot, Rect, SimulatedPointer,
};

struct Rig {
    input: Rc<VirtualInput>,
    scene: RectScene,
    module: InputModule<WidgetId>,
    snapshots: Rc<RefCell<Vec<PointerSnapshot>>>,
}

const OPERATOR: OperatorId = OperatorId(0);

/// 100x100 screen, overlay origin at its center, one pixel per unit of delta
fn rig() -> Rig {
    let config = PointerConfig {
        speed_mouse_keyboard: 1.0,
        bounds: Rect::centered(100.0, 100.0),
        ..PointerConfig::default()
    };
    let input = Rc::new(VirtualInput::for_pointer(&config.actions));
    let scene = RectScene::centered(Vec2::new(100.0, 100.0));
    let mut module = InputModule::load(input.clone());

    let mut pointer = SimulatedPointer::new(input.clone(), Box::new(scene.clone()), config)
        .expect("pointer actions exist");
    let snapshots = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&snapshots);
    pointer.register_receiver(Box::new(move |snapshot: &PointerSnapshot, _: f32| {
        sink.borrow_mut().push(*snapshot);
    }));
    module.register_pointer(OPERATOR, pointer);

    Rig {
        input,
        scene,
        module,
        snapshots,
    }
}

fn count(events: &[ExecutedEvent], target: WidgetId, kind: PointerEventKind) -> usize {
    events
        .iter()
        .filter(|e| e.target == target && e.kind == kind)
        .count()
}

fn pointer(rig: &Rig) -> &SimulatedPointer<WidgetId> {
    rig.module.pointer(OPERATOR).expect("registered")
}

#[test]
fn test_leaving_widget_fires_one_exit() {
    let mut rig = rig();
    let button = rig
        .scene
        .add_widget("button", Rect::new(45.0, 45.0, 10.0, 10.0), 0);

    rig.module.run_frame(1.0);
    assert_eq!(pointer(&rig).hovered(), &[button]);

    rig.input.add_delta("Delta", Vec2::new(30.0, 0.0));
    for _ in 0..3 {
        rig.module.run_frame(1.0);
    }

    let events = rig.scene.events();
    assert_eq!(count(&events, button, PointerEventKind::Enter), 1);
    assert_eq!(count(&events, button, PointerEventKind::Exit), 1);
    assert!(pointer(&rig).hovered().is_empty());

    let exit_index = events
        .iter()
        .position(|e| e.kind == PointerEventKind::Exit)
        .expect("exit fired");
    assert!(
        events[exit_index..]
            .iter()
            .all(|e| e.kind != PointerEventKind::Move)
    );
}

#[test]
fn test_press_clicks_each_hovered_widget_once() {
    let mut rig = rig();
    let panel = rig
        .scene
        .add_widget("panel", Rect::new(0.0, 0.0, 100.0, 100.0), 0);
    let button = rig
        .scene
        .add_widget("button", Rect::new(40.0, 40.0, 20.0, 20.0), 1);
    rig.module.run_frame(1.0);
    rig.scene.take_events();

    rig.input.press("Select");
    rig.input.press("SelectAlternate");
    rig.module.run_frame(1.0);

    let events = rig.scene.events();
    for target in [panel, button] {
        assert_eq!(count(&events, target, PointerEventKind::Down), 2);
        assert_eq!(count(&events, target, PointerEventKind::Click), 2);
    }
    assert_eq!(pointer(&rig).selected(), &[button, panel]);

    rig.input.release("Select");
    rig.module.run_frame(1.0);
    let events = rig.scene.take_events();
    assert_eq!(count(&events, button, PointerEventKind::Up), 1);
    assert_eq!(count(&events, panel, PointerEventKind::Deselect), 1);
    assert!(pointer(&rig).selected().is_empty());
}

#[test]
fn test_edge_flags_last_one_frame() {
    let mut rig = rig();

    rig.input.press("Select");
    rig.module.run_frame(1.0);
    rig.module.run_frame(1.0);
    rig.input.release("Select");
    rig.module.run_frame(1.0);
    rig.module.run_frame(1.0);

    let primaries: Vec<ButtonFlags> = rig.snapshots.borrow().iter().map(|s| s.primary).collect();
    assert_eq!(
        primaries,
        vec![
            ButtonFlags {
                started: true,
                released: false,
                is_pressed: true
            },
            ButtonFlags {
                started: false,
                released: false,
                is_pressed: true
            },
            ButtonFlags {
                started: false,
                released: true,
                is_pressed: false
            },
            ButtonFlags::default(),
        ]
    );
}

#[test]
fn test_position_stays_in_bounds_for_any_delta() {
    let mut rig = rig();
    let bounds = Rect::centered(100.0, 100.0);

    for delta in [
        Vec2::new(1.0e12, 0.0),
        Vec2::new(-3.0e38, 3.0e38),
        Vec2::new(f32::NAN, 1.0),
        Vec2::new(f32::NEG_INFINITY, f32::INFINITY),
        Vec2::new(-7.5, 12.25),
    ] {
        rig.input.add_delta("Delta", delta);
        rig.module.run_frame(1.0);
        let position = pointer(&rig).position();
        assert!(bounds.contains(position), "{position:?} escaped for {delta:?}");
    }
}

#[test]
fn test_scroll_is_reported_for_one_frame() {
    let mut rig = rig();

    rig.input.add_delta("Scroll", Vec2::new(0.0, -40.0));
    rig.module.run_frame(1.0);
    rig.module.run_frame(1.0);

    let snapshots = rig.snapshots.borrow();
    assert_eq!(snapshots[0].scroll, Vec2::new(0.0, -40.0));
    assert_eq!(snapshots[1].scroll, Vec2::ZERO);
}

#[test]
fn test_replacing_operator_pointer_avoids_duplicate_delivery() {
    let mut rig = rig();
    let replacement = SimulatedPointer::new(
        rig.input.clone(),
        Box::new(rig.scene.clone()),
        PointerConfig::default(),
    )
    .expect("pointer actions exist");

    let previous = rig.module.register_pointer(OPERATOR, replacement);
    assert!(previous.is_some());
    drop(previous);

    rig.module.run_frame(1.0);
    assert!(rig.snapshots.borrow().is_empty());
    assert_eq!(rig.module.pointer_count(), 1);
}

struct Inert;

impl ActionMapHandler for Inert {}

#[test]
fn test_disabling_map_while_held_releases_selection() {
    let mut rig = rig();
    let button = rig
        .scene
        .add_widget("button", Rect::new(45.0, 45.0, 10.0, 10.0), 0);
    let mut listener =
        ActionMapListener::init(rig.input.clone(), "UI", true, Inert).expect("UI map exists");

    rig.module.run_frame(1.0);
    rig.input.press("Select");
    rig.module.run_frame(1.0);
    assert_eq!(pointer(&rig).selected(), &[button]);

    listener.on_disable();
    for _ in 0..3 {
        rig.module.run_frame(1.0);
    }
    listener.on_enable();
    for _ in 0..3 {
        rig.module.run_frame(1.0);
    }

    assert!(pointer(&rig).selected().is_empty());
    assert_eq!(pointer(&rig).snapshot().primary, ButtonFlags::default());
    assert!(!rig.input.is_pressed("Select"));

    let events = rig.scene.events();
    assert_eq!(count(&events, button, PointerEventKind::Up), 1);
    assert_eq!(count(&events, button, PointerEventKind::Deselect), 1);
    let released: Vec<bool> = rig.snapshots.borrow().iter().map(|s| s.primary.released).collect();
    assert_eq!(released.iter().filter(|r| **r).count(), 1);
}
