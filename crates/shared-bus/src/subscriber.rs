//! # Event Subscriber
//!
//! Defines the subscription side of the bus.
//!
//! Each subscription holds at most `capacity` pending messages. The
//! underlying broadcast ring may be larger (tokio rounds it up to a power of
//! two), so the bound is enforced here: a message with `capacity` or more
//! newer messages queued behind it is dropped on receipt.

use crate::events::{BusMessage, Topic};
use std::collections::HashMap;
use std::sync::{Arc, RwLock};
use thiserror::Error;
use tokio::sync::broadcast;
use tracing::debug;

/// Errors from subscription operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SubscriptionError {
    /// The bus was closed.
    #[error("Event bus closed")]
    Closed,
}

/// A subscription handle for receiving messages on one topic.
///
/// When dropped, the subscription is automatically cleaned up.
pub struct Subscription {
    /// The broadcast receiver.
    receiver: broadcast::Receiver<BusMessage>,

    /// Topic this subscription listens on.
    topic: Topic,

    /// Pending messages kept before the oldest are dropped.
    capacity: usize,

    /// Reference to subscription tracking (for cleanup).
    subscriptions: Arc<RwLock<HashMap<Topic, usize>>>,
}

impl Subscription {
    pub(crate) fn new(
        receiver: broadcast::Receiver<BusMessage>,
        topic: Topic,
        capacity: usize,
        subscriptions: Arc<RwLock<HashMap<Topic, usize>>>,
    ) -> Self {
        Self {
            receiver,
            topic,
            capacity,
            subscriptions,
        }
    }

    /// Receive the next message.
    ///
    /// # Returns
    ///
    /// - `Some(message)` - The next message on this topic
    /// - `None` - The channel was closed (bus dropped)
    ///
    /// Messages pushed out of the queue while this subscriber lagged are
    /// skipped.
    pub async fn recv(&mut self) -> Option<BusMessage> {
        loop {
            match self.receiver.recv().await {
                Ok(message) => {
                    if self.within_depth() {
                        return Some(message);
                    }
                }
                Err(broadcast::error::RecvError::Closed) => return None,
                Err(broadcast::error::RecvError::Lagged(count)) => {
                    debug!(topic = %self.topic, lagged = count, "Subscriber lagged, messages dropped");
                }
            }
        }
    }

    /// Try to receive the next message without blocking.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(message))` - A message was available
    /// - `Ok(None)` - No message available (would block)
    /// - `Err(SubscriptionError::Closed)` - The channel was closed
    pub fn try_recv(&mut self) -> Result<Option<BusMessage>, SubscriptionError> {
        loop {
            match self.receiver.try_recv() {
                Ok(message) => {
                    if self.within_depth() {
                        return Ok(Some(message));
                    }
                }
                Err(broadcast::error::TryRecvError::Empty) => return Ok(None),
                Err(broadcast::error::TryRecvError::Closed) => {
                    return Err(SubscriptionError::Closed)
                }
                Err(broadcast::error::TryRecvError::Lagged(_)) => continue,
            }
        }
    }

    /// Get the topic of this subscription.
    #[must_use]
    pub fn topic(&self) -> Topic {
        self.topic
    }

    /// Get the number of pending messages this subscription keeps.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Whether the message just taken was still inside the queue depth.
    ///
    /// `len()` counts what is queued behind it; at `capacity` or more it
    /// would already have been evicted from a queue of that depth.
    fn within_depth(&self) -> bool {
        let behind = self.receiver.len();
        if behind < self.capacity {
            return true;
        }
        debug!(topic = %self.topic, behind, capacity = self.capacity, "Over queue depth, oldest message dropped");
        false
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        let Ok(mut subs) = self.subscriptions.write() else {
            return;
        };
        if let Some(count) = subs.get_mut(&self.topic) {
            *count = count.saturating_sub(1);
            if *count == 0 {
                subs.remove(&self.topic);
            }
        }
        debug!(topic = %self.topic, "Subscription dropped");
    }
}
