//! Per-frame host input poll

use std::rc::Rc;

use tracing::trace;

use super::host::InputSystem;
use super::tick::{TickGroup, Tickable};

/// Polls the host input system exactly once per tick, ahead of every consumer
pub struct InputRouter {
    system: Rc<dyn InputSystem>,
    polls: u64,
}

impl InputRouter {
    pub fn new(system: Rc<dyn InputSystem>) -> Self {
        Self { system, polls: 0 }
    }

    /// Number of polls performed so far
    pub fn poll_count(&self) -> u64 {
        self.polls
    }
}

impl Tickable for InputRouter {
    fn tick_group(&self) -> TickGroup {
        TickGroup::Input
    }

    fn tick(&mut self, _delta: f32) {
        self.system.update();
        self.polls += 1;
        trace!(poll = self.polls, "Input system polled");
    }
}
