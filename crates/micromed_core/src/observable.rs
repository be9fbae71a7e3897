//! Single-value observable used for reactive screen state.
//!
//! # Responsibility
//! - Publish the latest value on every write.
//! - Let any number of subscribers re-read the latest value on change.
//!
//! # Invariants
//! - Writes are synchronous: `get()` right after `set()` returns the new value.
//! - Every write notifies subscribers, even when the value is unchanged.
//! - Writes never fail, with or without live subscribers.

use std::sync::Arc;
use tokio::sync::watch;

/// Cloneable handle over a `tokio::sync::watch` channel.
///
/// Clones share the same value; the channel lives as long as any handle.
#[derive(Debug)]
pub struct Observable<T> {
    sender: Arc<watch::Sender<T>>,
}

impl<T> Clone for Observable<T> {
    fn clone(&self) -> Self {
        Self {
            sender: Arc::clone(&self.sender),
        }
    }
}

impl<T: Clone> Observable<T> {
    pub fn new(initial: T) -> Self {
        let (sender, _) = watch::channel(initial);
        Self {
            sender: Arc::new(sender),
        }
    }

    /// Returns a clone of the latest value.
    pub fn get(&self) -> T {
        self.sender.borrow().clone()
    }

    /// Replaces the value and notifies subscribers.
    pub fn set(&self, value: T) {
        self.sender.send_replace(value);
    }

    /// Mutates the value in place under the channel lock and notifies.
    ///
    /// Returns whatever the closure returns. Other writers wait until the
    /// closure finishes, so side effects inside it are ordered with the value.
    pub fn update<R: Default>(&self, f: impl FnOnce(&mut T) -> R) -> R {
        let mut output = R::default();
        self.sender.send_modify(|value| output = f(value));
        output
    }

    /// Opens a subscription that starts at the current value.
    pub fn subscribe(&self) -> Subscription<T> {
        Subscription {
            receiver: self.sender.subscribe(),
        }
    }

    pub fn subscriber_count(&self) -> usize {
        self.sender.receiver_count()
    }
}

/// Receiving side of an [`Observable`].
#[derive(Debug)]
pub struct Subscription<T> {
    receiver: watch::Receiver<T>,
}

impl<T: Clone> Subscription<T> {
    /// Returns the latest value and marks it as seen.
    pub fn current(&mut self) -> T {
        self.receiver.borrow_and_update().clone()
    }

    /// Whether a write happened since the last `current()`/`changed()`.
    pub fn has_changed(&self) -> bool {
        self.receiver.has_changed().unwrap_or(false)
    }

    /// Waits for the next write and returns the value it published.
    ///
    /// Returns `None` once every [`Observable`] handle has been dropped.
    pub async fn changed(&mut self) -> Option<T> {
        self.receiver.changed().await.ok()?;
        Some(self.receiver.borrow_and_update().clone())
    }
}
