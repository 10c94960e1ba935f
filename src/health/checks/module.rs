//! Input module health check

use std::cell::Cell;
use std::rc::Rc;

use glam::Vec2;

use crate::config::PointerConfig;
use crate::error::Result;
use crate::health::check::{CheckResult, SystemCheck};
use crate::host::{RectScene, VirtualInput, WidgetId};
use crate::input::{InputModule, OperatorId, PointerSnapshot, SimulatedPointer};

/// Checks operator registration, replacement, and that each frame drives every
/// pointer once
pub struct ModuleCheck {
    operators: u32,
}

impl ModuleCheck {
    pub fn new() -> Self {
        Self { operators: 4 }
    }

    /// Check with a custom number of operators
    pub fn with_operators(operators: u32) -> Self {
        Self { operators }
    }
}

impl Default for ModuleCheck {
    fn default() -> Self {
        Self::new()
    }
}

fn build_pointer(input: &Rc<VirtualInput>) -> Result<SimulatedPointer<WidgetId>> {
    let scene = RectScene::centered(Vec2::new(100.0, 100.0));
    SimulatedPointer::new(input.clone(), Box::new(scene), PointerConfig::default())
}

impl SystemCheck for ModuleCheck {
    fn name(&self) -> &'static str {
        "Input Module"
    }

    fn description(&self) -> Option<&'static str> {
        Some("Validates operator registry and per-frame pointer updates")
    }

    fn check(&self) -> CheckResult {
        let mut details = Vec::new();
        let input = Rc::new(VirtualInput::for_pointer(&Default::default()));
        let mut module: InputModule<WidgetId> = InputModule::load(input.clone());
        let frames = Rc::new(Cell::new(0u32));

        for index in 0..self.operators {
            let mut pointer = match build_pointer(&input) {
                Ok(pointer) => pointer,
                Err(e) => {
                    return CheckResult::fail("Pointer construction failed")
                        .with_details(format!("  ✗ {}", e));
                }
            };
            let frames = Rc::clone(&frames);
            pointer.register_receiver(Box::new(move |_: &PointerSnapshot, _: f32| {
                frames.set(frames.get() + 1);
            }));
            module.register_pointer(OperatorId(index), pointer);
        }
        details.push(format!("  ✓ Registered {} operators", module.pointer_count()));

        module.run_frame(0.016);
        if frames.get() != self.operators {
            details.push(format!(
                "  ✗ {} snapshots for {} operators",
                frames.get(),
                self.operators
            ));
            return CheckResult::fail("Frame dispatch failed").with_details(details.join("\n"));
        }
        details.push("  ✓ One snapshot per operator per frame".to_string());

        if self.operators > 0 {
            let silent = match build_pointer(&input) {
                Ok(pointer) => pointer,
                Err(e) => {
                    return CheckResult::fail("Pointer construction failed")
                        .with_details(format!("  ✗ {}", e));
                }
            };
            let replaced = module.register_pointer(OperatorId(0), silent);
            drop(replaced);

            frames.set(0);
            module.run_frame(0.016);
            if frames.get() != self.operators - 1 || module.pointer_count() != self.operators as usize
            {
                details.push("  ✗ Replaced pointer still receives frames".to_string());
                return CheckResult::fail("Operator replacement failed")
                    .with_details(details.join("\n"));
            }
            details.push("  ✓ Re-registering an operator replaces its pointer".to_string());
        }

        if module.pointer(OperatorId(self.operators)).is_some() {
            details.push("  ✗ Unregistered operator resolved".to_string());
            return CheckResult::fail("Registry lookup failed").with_details(details.join("\n"));
        }
        details.push("  ✓ Unknown operator resolves to none".to_string());

        module.shutdown();
        if module.is_loaded() {
            return CheckResult::fail("Shutdown failed").with_details(details.join("\n"));
        }

        let result = if self.operators == 0 {
            CheckResult::warn("No operators registered")
        } else {
            CheckResult::pass(format!("{} operators driven", self.operators))
        };
        result.with_details(details.join("\n"))
    }
}
