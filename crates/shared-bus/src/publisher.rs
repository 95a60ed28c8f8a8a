//! # Event Publisher
//!
//! Defines the publishing side of the bus.

use crate::events::{BusMessage, Topic};
use crate::subscriber::Subscription;
use crate::DEFAULT_CHANNEL_CAPACITY;
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, RwLock};
use tokio::sync::broadcast;
use tracing::debug;

/// Trait for publishing messages to the bus.
///
/// Publishing is fire-and-forget: the caller learns how many subscribers
/// the message reached, nothing about delivery.
#[async_trait]
pub trait EventPublisher: Send + Sync {
    /// Publish a message on its topic.
    ///
    /// # Returns
    ///
    /// The number of active subscribers that received the message.
    async fn publish(&self, message: BusMessage) -> usize;

    /// Get the total number of messages published.
    fn messages_published(&self) -> u64;
}

/// In-memory implementation of the bus.
///
/// One `tokio::sync::broadcast` channel per topic, so a backlog on one
/// topic never evicts messages queued on the other.
pub struct InMemoryEventBus {
    /// Broadcast sender per topic.
    senders: HashMap<Topic, broadcast::Sender<BusMessage>>,

    /// Active subscription count by topic.
    subscriptions: Arc<RwLock<HashMap<Topic, usize>>>,

    /// Total messages published.
    messages_published: AtomicU64,

    /// Per-topic channel capacity.
    capacity: usize,
}

impl InMemoryEventBus {
    /// Create a new bus with default capacity.
    #[must_use]
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CHANNEL_CAPACITY)
    }

    /// Create a new bus with the given per-topic capacity.
    ///
    /// Every subscription keeps at most `capacity` pending messages. A
    /// capacity of zero is raised to one; broadcast channels cannot be
    /// empty.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        let senders = Topic::ALL
            .into_iter()
            .map(|topic| (topic, broadcast::channel(capacity).0))
            .collect();

        Self {
            senders,
            subscriptions: Arc::new(RwLock::new(HashMap::new())),
            messages_published: AtomicU64::new(0),
            capacity,
        }
    }

    /// Subscribe to every message published on `topic`.
    ///
    /// Only messages published after this call are observed.
    #[must_use]
    pub fn subscribe(&self, topic: Topic) -> Subscription {
        let receiver = self.sender(topic).subscribe();

        if let Ok(mut subs) = self.subscriptions.write() {
            *subs.entry(topic).or_insert(0) += 1;
        }

        debug!(topic = %topic, "New subscription created");

        Subscription::new(receiver, topic, self.capacity, self.subscriptions.clone())
    }

    /// Get the number of live receivers across all topics.
    #[must_use]
    pub fn subscriber_count(&self) -> usize {
        self.senders.values().map(broadcast::Sender::receiver_count).sum()
    }

    /// Get the number of live subscriptions on one topic.
    #[must_use]
    pub fn subscription_count(&self, topic: Topic) -> usize {
        self.subscriptions
            .read()
            .ok()
            .and_then(|subs| subs.get(&topic).copied())
            .unwrap_or(0)
    }

    /// Get the per-topic channel capacity.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    fn sender(&self, topic: Topic) -> &broadcast::Sender<BusMessage> {
        // Every topic gets a sender in `with_capacity`.
        &self.senders[&topic]
    }
}

impl Default for InMemoryEventBus {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl EventPublisher for InMemoryEventBus {
    async fn publish(&self, message: BusMessage) -> usize {
        let topic = message.topic();

        // Always increment counter (message was attempted)
        self.messages_published.fetch_add(1, Ordering::Relaxed);

        match self.sender(topic).send(message) {
            Ok(receiver_count) => {
                debug!(topic = %topic, receivers = receiver_count, "Message published");
                receiver_count
            }
            Err(e) => {
                // Fire-and-forget: an unheard message is not a fault.
                debug!(topic = %topic, error = %e, "Message dropped (no receivers)");
                0
            }
        }
    }

    fn messages_published(&self) -> u64 {
        self.messages_published.load(Ordering::Relaxed)
    }
}
