//! Input receiver trait and per-pointer receiver list

/// Consumer of per-tick input snapshots
///
/// Receivers are called synchronously during transmission and must not block.
pub trait InputReceiver<T> {
    /// Handle this frame's input
    ///
    /// # Arguments
    /// * `input` - The snapshot for this frame
    /// * `delta` - Seconds elapsed since the previous frame
    fn receive_input(&mut self, input: &T, delta: f32);
}

impl<T, F> InputReceiver<T> for F
where
    F: FnMut(&T, f32),
{
    fn receive_input(&mut self, input: &T, delta: f32) {
        self(input, delta)
    }
}

/// Token returned on registration, used to unregister
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ReceiverId(u64);

/// Ordered receiver list; insertion order is delivery order
///
/// The same consumer may be registered more than once and then receives the
/// snapshot once per registration.
pub struct ReceiverList<T> {
    receivers: Vec<(ReceiverId, Box<dyn InputReceiver<T>>)>,
    next_id: u64,
}

impl<T> ReceiverList<T> {
    pub fn new() -> Self {
        Self {
            receivers: Vec::new(),
            next_id: 0,
        }
    }

    pub fn register(&mut self, receiver: Box<dyn InputReceiver<T>>) -> ReceiverId {
        let id = ReceiverId(self.next_id);
        self.next_id += 1;
        self.receivers.push((id, receiver));
        id
    }

    /// Removes a receiver; returns false if the id is unknown
    pub fn unregister(&mut self, id: ReceiverId) -> bool {
        match self.receivers.iter().position(|(rid, _)| *rid == id) {
            Some(index) => {
                self.receivers.remove(index);
                true
            }
            None => false,
        }
    }

    /// Hands `input` to every receiver in registration order
    pub fn deliver(&mut self, input: &T, delta: f32) {
        for (_, receiver) in &mut self.receivers {
            receiver.receive_input(input, delta);
        }
    }

    pub fn len(&self) -> usize {
        self.receivers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.receivers.is_empty()
    }
}

impl<T> Default for ReceiverList<T> {
    fn default() -> Self {
        Self::new()
    }
}
