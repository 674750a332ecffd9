use serde_json::Value;
use std::collections::HashMap;
use std::fmt;
use std::sync::{Arc, PoisonError, RwLock};
use tracing::debug;

/// Callback invoked with the parsed payload of a webhook
pub type EventHandler = Arc<dyn Fn(&Value) + Send + Sync>;

/// Event-name keyed list of webhook subscribers
///
/// Cloning the registry shares the underlying subscriber table. Subscribing
/// takes the write lock; dispatch only holds the read lock long enough to
/// copy the handler list, so handlers may themselves subscribe.
#[derive(Clone, Default)]
pub struct SubscriberRegistry {
    subscribers: Arc<RwLock<HashMap<String, Vec<EventHandler>>>>,
}

impl SubscriberRegistry {
    /// Creates an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `handler` for `event`
    ///
    /// Handlers of the same event run in the order they were registered.
    pub fn subscribe<F>(&self, event: impl Into<String>, handler: F)
    where
        F: Fn(&Value) + Send + Sync + 'static,
    {
        let event = event.into();
        debug!("Subscribing handler to {}", event);
        self.subscribers
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .entry(event)
            .or_default()
            .push(Arc::new(handler));
    }

    /// Invokes every handler of `event` once with `payload`
    ///
    /// Returns how many handlers ran.
    pub fn dispatch(&self, event: &str, payload: &Value) -> usize {
        let handlers: Vec<EventHandler> = self
            .subscribers
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(event)
            .cloned()
            .unwrap_or_default();

        for handler in &handlers {
            handler(payload);
        }
        handlers.len()
    }

    /// Number of handlers registered for `event`
    pub fn subscriber_count(&self, event: &str) -> usize {
        self.subscribers
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(event)
            .map_or(0, Vec::len)
    }

    /// Removes every handler of `event`, returning how many were removed
    pub fn unsubscribe_all(&self, event: &str) -> usize {
        self.subscribers
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .remove(event)
            .map_or(0, |handlers| handlers.len())
    }
}

impl fmt::Debug for SubscriberRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let subscribers = self
            .subscribers
            .read()
            .unwrap_or_else(PoisonError::into_inner);
        let mut counts: Vec<(&String, usize)> =
            subscribers.iter().map(|(k, v)| (k, v.len())).collect();
        counts.sort();
        f.debug_struct("SubscriberRegistry")
            .field("subscribers", &counts)
            .finish()
    }
}
