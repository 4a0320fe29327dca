//! Auth state change hub.
//!
//! ARCHITECTURE
//! ============
//! In-process stand-in for the provider SDK's auth event stream: the
//! sign-in, signup, and sign-out flows emit into the hub, and the app
//! shell subscribes for its lifetime. Dropping the subscription
//! deregisters the listener, so a torn-down shell cannot be called again.
//! Delivery is synchronous, which keeps auth transitions serialized on
//! the single-threaded event loop.

#[cfg(test)]
#[path = "events_test.rs"]
mod events_test;

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError, Weak};

use crate::net::types::ProviderSession;

/// Auth state transitions announced by the provider flows.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AuthEvent {
    /// A session was established.
    SignedIn { session: ProviderSession },
    /// The session ended.
    SignedOut,
    /// The access token was rotated; the shell ignores this.
    TokenRefreshed { session: ProviderSession },
}

type Listener = Arc<dyn Fn(&AuthEvent) + Send + Sync>;

#[derive(Default)]
struct Hub {
    next_id: u64,
    listeners: HashMap<u64, Listener>,
}

/// Shared auth event channel. Cheap to clone; provided via context.
#[derive(Clone, Default)]
pub struct AuthEvents {
    hub: Arc<Mutex<Hub>>,
}

impl AuthEvents {
    fn lock(&self) -> MutexGuard<'_, Hub> {
        self.hub.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Register a listener. The returned subscription deregisters it on
    /// drop; hold it for as long as events should be delivered.
    #[must_use]
    pub fn subscribe(&self, listener: Listener) -> AuthSubscription {
        let mut hub = self.lock();
        let id = hub.next_id;
        hub.next_id += 1;
        hub.listeners.insert(id, listener);
        AuthSubscription { id, hub: Arc::downgrade(&self.hub) }
    }

    /// Deliver an event to every live listener in subscription order.
    pub fn emit(&self, event: &AuthEvent) {
        // Snapshot outside the lock so a listener may subscribe or drop
        // its subscription while handling the event.
        let listeners: Vec<Listener> = {
            let hub = self.lock();
            let mut entries: Vec<_> = hub.listeners.iter().map(|(id, l)| (*id, Arc::clone(l))).collect();
            entries.sort_unstable_by_key(|(id, _)| *id);
            entries.into_iter().map(|(_, listener)| listener).collect()
        };
        for listener in listeners {
            listener(event);
        }
    }

    #[cfg(test)]
    fn listener_count(&self) -> usize {
        self.lock().listeners.len()
    }
}

/// Scoped registration handle; dropping it removes the listener.
pub struct AuthSubscription {
    id: u64,
    hub: Weak<Mutex<Hub>>,
}

impl Drop for AuthSubscription {
    fn drop(&mut self) {
        if let Some(hub) = self.hub.upgrade() {
            let mut hub = hub.lock().unwrap_or_else(PoisonError::into_inner);
            hub.listeners.remove(&self.id);
        }
    }
}
