//! The authentication provider seam.
//!
//! Providers report state changes by pushing [`AuthEvent`]s into crossbeam
//! senders registered through [`AuthProvider::on_auth_state_change`]. The
//! registration is handed back as a [`Subscription`] guard; dropping it
//! removes the listener, so a torn-down consumer can never be called again.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, Weak};

use crossbeam::channel::Sender;

use super::{AuthError, AuthEvent, Credentials, ProviderSession};

/// External authentication service consumed by the session manager.
pub trait AuthProvider: Send + Sync {
    /// Returns the currently active session, if any.
    fn get_session(&self) -> Result<Option<ProviderSession>, AuthError>;

    /// Verifies credentials. On success the provider also emits
    /// [`AuthEvent::SignedIn`] to its listeners.
    fn sign_in_with_password(&self, credentials: &Credentials)
        -> Result<ProviderSession, AuthError>;

    /// Ends the active session. On success the provider also emits
    /// [`AuthEvent::SignedOut`] to its listeners.
    fn sign_out(&self) -> Result<(), AuthError>;

    /// Registers a listener for sign-in/sign-out events.
    fn on_auth_state_change(&self, listener: Sender<AuthEvent>) -> Subscription;
}

type Listener = (u64, Sender<AuthEvent>);

#[derive(Debug, Default)]
struct RegistryInner {
    next_id: AtomicU64,
    listeners: Mutex<Vec<Listener>>,
}

impl RegistryInner {
    fn listeners(&self) -> MutexGuard<'_, Vec<Listener>> {
        // A panicking listener owner must not take event delivery down with it
        match self.listeners.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        }
    }
}

/// Listener bookkeeping shared by provider implementations.
#[derive(Debug, Clone, Default)]
pub struct ListenerRegistry {
    inner: Arc<RegistryInner>,
}

impl ListenerRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a listener and returns the guard that removes it again.
    pub fn register(&self, listener: Sender<AuthEvent>) -> Subscription {
        let id = self.inner.next_id.fetch_add(1, Ordering::Relaxed);
        self.inner.listeners().push((id, listener));
        tracing::debug!(event = "auth.listener.registered", listener_id = id);
        Subscription {
            id,
            registry: Arc::downgrade(&self.inner),
        }
    }

    /// Delivers `event` to every live listener.
    ///
    /// Listeners whose receiving end is gone are pruned. Returns the number of
    /// listeners that received the event.
    pub fn emit(&self, event: &AuthEvent) -> usize {
        let mut listeners = self.inner.listeners();
        listeners.retain(|(_, tx)| tx.send(event.clone()).is_ok());
        tracing::debug!(
            event = "auth.listener.emitted",
            auth_event = event.name(),
            delivered = listeners.len()
        );
        listeners.len()
    }

    pub fn listener_count(&self) -> usize {
        self.inner.listeners().len()
    }
}

/// Registration handle returned by [`AuthProvider::on_auth_state_change`].
///
/// The listener stays registered for exactly as long as this value lives.
#[derive(Debug)]
#[must_use = "dropping a Subscription unregisters the listener immediately"]
pub struct Subscription {
    id: u64,
    registry: Weak<RegistryInner>,
}

impl Subscription {
    pub fn id(&self) -> u64 {
        self.id
    }

    /// Unregisters the listener now.
    pub fn unsubscribe(self) {
        drop(self);
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(inner) = self.registry.upgrade() {
            inner.listeners().retain(|(id, _)| *id != self.id);
            tracing::debug!(event = "auth.listener.unregistered", listener_id = self.id);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossbeam::channel::unbounded;

    #[test]
    fn test_register_and_emit() {
        let registry = ListenerRegistry::new();
        let (tx, rx) = unbounded();
        let _sub = registry.register(tx);

        assert_eq!(registry.emit(&AuthEvent::SignedOut), 1);
        assert_eq!(rx.try_recv().ok(), Some(AuthEvent::SignedOut));
    }

    #[test]
    fn test_dropping_subscription_unregisters() {
        let registry = ListenerRegistry::new();
        let (tx, rx) = unbounded();
        let sub = registry.register(tx);
        assert_eq!(registry.listener_count(), 1);

        sub.unsubscribe();
        assert_eq!(registry.listener_count(), 0);
        assert_eq!(registry.emit(&AuthEvent::SignedOut), 0);
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn test_only_own_listener_removed() {
        let registry = ListenerRegistry::new();
        let (tx_a, rx_a) = unbounded();
        let (tx_b, rx_b) = unbounded();
        let sub_a = registry.register(tx_a);
        let _sub_b = registry.register(tx_b);
        assert_ne!(sub_a.id(), _sub_b.id());

        drop(sub_a);
        registry.emit(&AuthEvent::SignedOut);
        assert!(rx_a.try_recv().is_err());
        assert_eq!(rx_b.try_recv().ok(), Some(AuthEvent::SignedOut));
    }

    #[test]
    fn test_emit_prunes_closed_receivers() {
        let registry = ListenerRegistry::new();
        let (tx, rx) = unbounded();
        let _sub = registry.register(tx);
        drop(rx);

        assert_eq!(registry.emit(&AuthEvent::SignedOut), 0);
        assert_eq!(registry.listener_count(), 0);
    }

    #[test]
    fn test_subscription_outliving_registry_is_harmless() {
        let registry = ListenerRegistry::new();
        let (tx, _rx) = unbounded();
        let sub = registry.register(tx);
        drop(registry);
        drop(sub);
    }
}
