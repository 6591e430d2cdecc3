//! Client-side session lifecycle.
//!
//! [`SessionManager`] holds the application's single authentication state and
//! keeps it in sync with the provider's event stream.
//!
//! # State machine
//!
//! ```text
//!                 SignedIn(user)
//!   Unauthenticated ───────────────► Authenticated(user)
//!         ▲                                  │
//!         └───────────── SignedOut ──────────┘
//! ```
//!
//! Besides a successful [`SessionManager::initialize`], provider events are the
//! only way the state changes. `login` and `logout` take `&self`: they submit
//! the request and leave the transition to the event that follows.
//!
//! # Threading
//!
//! Events arrive on a crossbeam channel and are applied by
//! [`SessionManager::pump_events`], called from the UI loop. All mutation
//! therefore happens on the thread that owns the manager.

use std::sync::Arc;
use std::time::{Duration, Instant};

use crossbeam::channel::{unbounded, Receiver};

use super::provider::{AuthProvider, Subscription};
use super::{AuthError, AuthEvent, Credentials, ProviderSession, UserIdentity};
use crate::notify::Notify;

/// How long a successful login/logout may wait for its provider event before
/// a warning is raised.
pub const DEFAULT_EVENT_GRACE: Duration = Duration::from_secs(5);

pub const SIGNED_IN_MESSAGE: &str = "Successfully signed in!";
pub const SIGNED_OUT_MESSAGE: &str = "Signed out";
pub const LOGOUT_FAILED_MESSAGE: &str = "Error signing out";
pub const STALLED_MESSAGE: &str = "Still waiting for the authentication provider";

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SessionState {
    #[default]
    Unauthenticated,
    Authenticated(UserIdentity),
}

impl SessionState {
    pub fn is_authenticated(&self) -> bool {
        matches!(self, SessionState::Authenticated(_))
    }

    pub fn user(&self) -> Option<&UserIdentity> {
        match self {
            SessionState::Authenticated(user) => Some(user),
            SessionState::Unauthenticated => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Expected {
    SignIn,
    SignOut,
}

#[derive(Debug)]
struct Awaiting {
    expected: Expected,
    since: Instant,
    warned: bool,
}

pub struct SessionManager {
    provider: Arc<dyn AuthProvider>,
    state: SessionState,
    loading: bool,
    subscription: Option<Subscription>,
    events: Option<Receiver<AuthEvent>>,
    awaiting: Option<Awaiting>,
    event_grace: Duration,
}

impl SessionManager {
    pub fn new(provider: Arc<dyn AuthProvider>) -> Self {
        Self {
            provider,
            state: SessionState::Unauthenticated,
            loading: true,
            subscription: None,
            events: None,
            awaiting: None,
            event_grace: DEFAULT_EVENT_GRACE,
        }
    }

    pub fn with_event_grace(mut self, grace: Duration) -> Self {
        self.event_grace = grace;
        self
    }

    /// Shared handle to the provider, for running calls off the UI thread.
    pub fn provider(&self) -> Arc<dyn AuthProvider> {
        Arc::clone(&self.provider)
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn is_authenticated(&self) -> bool {
        self.state.is_authenticated()
    }

    pub fn user(&self) -> Option<&UserIdentity> {
        self.state.user()
    }

    /// `true` until the initial session query has completed.
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn is_subscribed(&self) -> bool {
        self.subscription.is_some()
    }

    /// Queries the provider for an existing session, blocking the caller.
    pub fn initialize(&mut self) {
        let result = self.provider.get_session();
        self.finish_initialize(result);
    }

    /// Applies the result of the initial session query.
    ///
    /// An empty session or a provider error leaves the state untouched, which
    /// is `Unauthenticated` unless an event already signed the user in. No
    /// retry is attempted.
    pub fn finish_initialize(&mut self, result: Result<Option<ProviderSession>, AuthError>) {
        match result {
            Ok(Some(session)) => {
                tracing::info!(
                    event = "auth.session.initialize_restored",
                    email = %session.user.email
                );
                self.state = SessionState::Authenticated(session.user);
            }
            Ok(None) => {
                tracing::info!(event = "auth.session.initialize_empty");
            }
            Err(err) => {
                tracing::warn!(event = "auth.session.initialize_failed", error = %err);
            }
        }
        self.loading = false;
    }

    /// Starts listening to provider events. Calling it again is a no-op.
    pub fn subscribe(&mut self) {
        if self.subscription.is_some() {
            return;
        }
        let (tx, rx) = unbounded();
        let subscription = self.provider.on_auth_state_change(tx);
        tracing::debug!(event = "auth.session.subscribed", listener_id = subscription.id());
        self.subscription = Some(subscription);
        self.events = Some(rx);
    }

    /// Stops listening. Events already queued are discarded with the channel.
    pub fn unsubscribe(&mut self) {
        if let Some(subscription) = self.subscription.take() {
            tracing::debug!(event = "auth.session.unsubscribed", listener_id = subscription.id());
        }
        self.events = None;
    }

    /// Applies every provider event delivered since the last call.
    ///
    /// Returns the number of events applied.
    pub fn pump_events(&mut self, notifier: &mut impl Notify) -> usize {
        let Some(events) = self.events.as_ref() else {
            return 0;
        };
        let pending: Vec<AuthEvent> = events.try_iter().collect();
        let count = pending.len();
        for event in pending {
            self.apply_event(event, notifier);
        }
        count
    }

    fn apply_event(&mut self, event: AuthEvent, notifier: &mut impl Notify) {
        tracing::info!(event = "auth.session.event_received", auth_event = event.name());
        match event {
            AuthEvent::SignedIn(session) => {
                self.state = SessionState::Authenticated(session.user);
                self.settle(Expected::SignIn);
                notifier.success(SIGNED_IN_MESSAGE);
            }
            AuthEvent::SignedOut => {
                self.state = SessionState::Unauthenticated;
                self.settle(Expected::SignOut);
                notifier.info(SIGNED_OUT_MESSAGE);
            }
        }
    }

    /// Submits credentials to the provider. Never touches local state.
    pub fn login(&self, credentials: &Credentials) -> Result<(), AuthError> {
        self.provider.sign_in_with_password(credentials).map(|_| ())
    }

    /// Requests sign-out from the provider. Never touches local state.
    pub fn logout(&self) -> Result<(), AuthError> {
        self.provider.sign_out()
    }

    /// Surfaces the outcome of a login request.
    ///
    /// A failure produces exactly one error notification with the provider's
    /// message. Returns whether the request succeeded.
    pub fn report_login(
        &mut self,
        result: Result<(), AuthError>,
        notifier: &mut impl Notify,
    ) -> bool {
        match result {
            Ok(()) => {
                if !self.is_authenticated() {
                    self.expect(Expected::SignIn);
                }
                true
            }
            Err(err) => {
                tracing::warn!(event = "auth.session.login_failed", error = %err);
                notifier.error(err.message());
                false
            }
        }
    }

    /// Surfaces the outcome of a logout request.
    pub fn report_logout(
        &mut self,
        result: Result<(), AuthError>,
        notifier: &mut impl Notify,
    ) -> bool {
        match result {
            Ok(()) => {
                if self.is_authenticated() {
                    self.expect(Expected::SignOut);
                }
                true
            }
            Err(err) => {
                tracing::warn!(event = "auth.session.logout_failed", error = %err);
                notifier.error(LOGOUT_FAILED_MESSAGE);
                false
            }
        }
    }

    /// Warns once when a confirmed login/logout has not been followed by its
    /// provider event within the grace period. State is left as it is.
    pub fn check_stalled(&mut self, now: Instant, notifier: &mut impl Notify) -> bool {
        let grace = self.event_grace;
        let Some(awaiting) = self.awaiting.as_mut() else {
            return false;
        };
        if awaiting.warned || now.saturating_duration_since(awaiting.since) < grace {
            return false;
        }
        awaiting.warned = true;
        tracing::warn!(
            event = "auth.session.event_stalled",
            expected = ?awaiting.expected,
            waited_ms = now.saturating_duration_since(awaiting.since).as_millis() as u64
        );
        notifier.info(STALLED_MESSAGE);
        true
    }

    pub fn is_awaiting_event(&self) -> bool {
        self.awaiting.is_some()
    }

    fn expect(&mut self, expected: Expected) {
        self.awaiting = Some(Awaiting {
            expected,
            since: Instant::now(),
            warned: false,
        });
    }

    fn settle(&mut self, received: Expected) {
        if self.awaiting.as_ref().map(|a| a.expected) == Some(received) {
            self.awaiting = None;
        }
    }
}
