//! Explicit notification channels
//!
//! Hosts publish notifications through a [`Broadcaster`]; consumers hold a
//! [`Subscription`] and drain it during their tick. Dropping the subscription
//! unsubscribes: the broadcaster prunes closed channels on the next publish.

use std::cell::RefCell;
use std::sync::mpsc::{self, Receiver, Sender, TryIter};

/// Fan-out publisher for single-threaded hosts
pub struct Broadcaster<T> {
    senders: RefCell<Vec<Sender<T>>>,
}

impl<T: Clone> Broadcaster<T> {
    /// Creates a broadcaster with no subscribers
    pub fn new() -> Self {
        Self {
            senders: RefCell::new(Vec::new()),
        }
    }

    /// Opens a new subscription that receives every later publish
    pub fn subscribe(&self) -> Subscription<T> {
        let (sender, receiver) = mpsc::channel();
        self.senders.borrow_mut().push(sender);
        Subscription { receiver }
    }

    /// Sends `value` to every live subscription
    ///
    /// Returns the number of subscriptions that received it.
    pub fn publish(&self, value: T) -> usize {
        let mut senders = self.senders.borrow_mut();
        senders.retain(|sender| sender.send(value.clone()).is_ok());
        senders.len()
    }

    /// Number of subscriptions still considered open
    ///
    /// Dropped subscriptions are only noticed on the next publish.
    pub fn subscriber_count(&self) -> usize {
        self.senders.borrow().len()
    }
}

impl<T: Clone> Default for Broadcaster<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Receiving end of a [`Broadcaster`]
pub struct Subscription<T> {
    receiver: Receiver<T>,
}

impl<T> Subscription<T> {
    /// Iterates over everything published since the last drain, without blocking
    pub fn drain(&self) -> TryIter<'_, T> {
        self.receiver.try_iter()
    }
}
