//! Frame scheduling hooks
//!
//! The scheduler itself lives outside this crate. Components only declare which
//! group they tick in; a scheduler runs every `Input` tickable before any
//! `InputTransmission` tickable.

/// Ordered tick phases, earliest first
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum TickGroup {
    /// Host device polling
    Input,
    /// Consumers that read polled input and hand it on
    InputTransmission,
}

/// Something that is called once per frame by an external scheduler
pub trait Tickable {
    /// Phase this tickable runs in
    fn tick_group(&self) -> TickGroup;

    /// Advance by one frame
    ///
    /// # Arguments
    /// * `delta` - Seconds elapsed since the previous frame
    fn tick(&mut self, delta: f32);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_input_runs_before_transmission() {
        let mut groups = vec![TickGroup::InputTransmission, TickGroup::Input];
        groups.sort();
        assert_eq!(groups, vec![TickGroup::Input, TickGroup::InputTransmission]);
    }
}
