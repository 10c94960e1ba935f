//! Simulated pointer health check

use std::rc::Rc;

use glam::Vec2;

use crate::config::PointerConfig;
use crate::health::check::{CheckResult, SystemCheck};
use crate::host::{RectScene, VirtualInput, WidgetId};
use crate::input::{InputSystem, PointerEventKind, Rect, SimulatedPointer};

/// Drives a pointer through a scripted hover and click over a single widget
pub struct PointerCheck;

impl PointerCheck {
    pub fn new() -> Self {
        Self
    }
}

impl Default for PointerCheck {
    fn default() -> Self {
        Self::new()
    }
}

fn kinds_for(scene: &RectScene, target: WidgetId) -> Vec<PointerEventKind> {
    scene
        .take_events()
        .into_iter()
        .filter(|e| e.target == target)
        .map(|e| e.kind)
        .collect()
}

impl SystemCheck for PointerCheck {
    fn name(&self) -> &'static str {
        "Simulated Pointer"
    }

    fn description(&self) -> Option<&'static str> {
        Some("Validates pointer motion, hover resolution and selection")
    }

    fn check(&self) -> CheckResult {
        let mut details = Vec::new();

        let config = PointerConfig {
            speed_mouse_keyboard: 1.0,
            bounds: Rect::centered(200.0, 200.0),
            ..PointerConfig::default()
        };
        let input = Rc::new(VirtualInput::for_pointer(&config.actions));
        let scene = RectScene::centered(Vec2::new(200.0, 200.0));
        let target = scene.add_widget("target", Rect::new(140.0, 90.0, 20.0, 20.0), 0);
        let actions = config.actions.clone();

        let mut pointer = match SimulatedPointer::new(input.clone(), Box::new(scene.clone()), config)
        {
            Ok(pointer) => pointer,
            Err(e) => {
                return CheckResult::fail("Pointer construction failed")
                    .with_details(format!("  ✗ {}", e));
            }
        };
        details.push("  ✓ Pointer bound to action input".to_string());

        // Frame 1: resting at the overlay origin, nothing under the pointer
        input.update();
        pointer.frame(1.0);
        if !pointer.hovered().is_empty() {
            details.push("  ✗ Pointer hovers at rest".to_string());
            return CheckResult::fail("Hover resolution failed").with_details(details.join("\n"));
        }

        // Frame 2: move onto the target
        input.add_delta(&actions.delta, Vec2::new(50.0, 0.0));
        input.update();
        pointer.frame(1.0);
        if pointer.position() != Vec2::new(50.0, 0.0) {
            details.push(format!("  ✗ Unexpected position {:?}", pointer.position()));
            return CheckResult::fail("Pointer motion failed").with_details(details.join("\n"));
        }
        if kinds_for(&scene, target) != [PointerEventKind::Enter, PointerEventKind::Move] {
            details.push("  ✗ Missing enter on target".to_string());
            return CheckResult::fail("Hover resolution failed").with_details(details.join("\n"));
        }
        details.push("  ✓ Motion and enter".to_string());

        // Frame 3 and 4: press then release the primary button
        input.press(&actions.select);
        input.update();
        pointer.frame(1.0);
        input.release(&actions.select);
        input.update();
        pointer.frame(1.0);

        let kinds = kinds_for(&scene, target);
        let expected = [
            PointerEventKind::Down,
            PointerEventKind::Click,
            PointerEventKind::Move,
            PointerEventKind::Up,
            PointerEventKind::Deselect,
            PointerEventKind::Move,
        ];
        if kinds != expected || !pointer.selected().is_empty() {
            details.push(format!("  ✗ Click sequence {:?}", kinds));
            return CheckResult::fail("Selection failed").with_details(details.join("\n"));
        }
        details.push("  ✓ Down, click, up and deselect".to_string());

        // Frame 5: clamp far outside and leave the target
        input.add_delta(&actions.delta, Vec2::new(1.0e9, 1.0e9));
        input.update();
        pointer.frame(1.0);
        if pointer.position() != Vec2::new(100.0, 100.0)
            || kinds_for(&scene, target) != [PointerEventKind::Exit]
        {
            details.push("  ✗ Clamp or exit failed".to_string());
            return CheckResult::fail("Pointer bounds failed").with_details(details.join("\n"));
        }
        details.push("  ✓ Clamped to bounds and exit".to_string());

        pointer.teardown();
        CheckResult::pass("Pointer interaction operational").with_details(details.join("\n"))
    }
}
