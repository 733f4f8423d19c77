//! Configuration change events
//!
//! This module defines the change event emitted after successful writes,
//! the publisher port the provider fans events out through, and an
//! in-process broadcast implementation.

use tokio::sync::broadcast;
use tracing::{debug, warn};

/// Configuration change event for notification
#[derive(Clone, Debug)]
pub struct ConfigurationChangeEvent {
    /// Category whose stored state changed
    pub category: String,
    /// Timestamp of the change
    pub timestamp: i64,
}

impl ConfigurationChangeEvent {
    /// Create a new change event stamped with the current time
    pub fn new(category: &str) -> Self {
        Self {
            category: category.to_string(),
            timestamp: chrono::Utc::now().timestamp_millis(),
        }
    }
}

/// Change-notification port for the provider.
///
/// Delivery is best-effort; implementations handle their own failures
/// rather than failing the operation that raised the event.
pub trait EventPublisher: Send + Sync {
    fn publish(&self, event: ConfigurationChangeEvent);
}

/// Broadcast-channel publisher for in-process subscribers
pub struct BroadcastEventPublisher {
    event_sender: broadcast::Sender<ConfigurationChangeEvent>,
}

impl Default for BroadcastEventPublisher {
    fn default() -> Self {
        Self::new()
    }
}

impl BroadcastEventPublisher {
    /// Default channel capacity for configuration change events
    const DEFAULT_CHANNEL_CAPACITY: usize = 1024;

    pub fn new() -> Self {
        Self::with_capacity(Self::DEFAULT_CHANNEL_CAPACITY)
    }

    /// Create a publisher with custom channel capacity
    pub fn with_capacity(capacity: usize) -> Self {
        let (event_sender, _) = broadcast::channel(capacity);
        Self { event_sender }
    }

    /// Subscribe to configuration change events
    pub fn subscribe(&self) -> broadcast::Receiver<ConfigurationChangeEvent> {
        self.event_sender.subscribe()
    }

    /// Get the number of active event subscribers
    pub fn subscriber_count(&self) -> usize {
        self.event_sender.receiver_count()
    }
}

impl EventPublisher for BroadcastEventPublisher {
    fn publish(&self, event: ConfigurationChangeEvent) {
        debug!("Configuration change notification: {}", event.category);

        if let Err(e) = self.event_sender.send(event) {
            warn!("Failed to broadcast configuration change event: {}", e);
        }
    }
}
