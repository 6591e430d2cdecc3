//! Local demo provider.
//!
//! Verifies credentials against a configured account list and keeps the
//! active session in a JSON file, so a restart picks the session up again the
//! way a browser client restores it from local storage.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::thread;
use std::time::Duration;

use chrono::Utc;
use crossbeam::channel::Sender;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::provider::{AuthProvider, ListenerRegistry, Subscription};
use super::{AuthError, AuthEvent, Credentials, ProviderSession, UserIdentity};

pub const DEFAULT_SESSION_TTL_MINUTES: i64 = 60;

/// A login accepted by the local provider.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DemoAccount {
    pub email: String,
    pub password: String,
}

impl DemoAccount {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }
}

impl Default for DemoAccount {
    fn default() -> Self {
        Self::new("demo@socialboost.app", "socialboost")
    }
}

pub struct LocalProvider {
    accounts: Vec<(DemoAccount, Uuid)>,
    session_path: PathBuf,
    session_ttl: chrono::Duration,
    latency: Duration,
    listeners: ListenerRegistry,
}

impl LocalProvider {
    pub fn new(accounts: Vec<DemoAccount>, session_path: impl Into<PathBuf>) -> Self {
        Self {
            accounts: accounts.into_iter().map(|a| (a, Uuid::new_v4())).collect(),
            session_path: session_path.into(),
            session_ttl: chrono::Duration::minutes(DEFAULT_SESSION_TTL_MINUTES),
            latency: Duration::ZERO,
            listeners: ListenerRegistry::new(),
        }
    }

    pub fn with_session_ttl_minutes(mut self, minutes: i64) -> Self {
        self.session_ttl = chrono::Duration::minutes(minutes);
        self
    }

    /// Delay applied to every provider call, to make loading states visible.
    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = latency;
        self
    }

    pub fn session_path(&self) -> &Path {
        &self.session_path
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.listener_count()
    }

    fn simulate_latency(&self) {
        if !self.latency.is_zero() {
            thread::sleep(self.latency);
        }
    }

    fn read_session(&self) -> Result<Option<ProviderSession>, AuthError> {
        match fs::read_to_string(&self.session_path) {
            Ok(content) => Ok(Some(serde_json::from_str(&content)?)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn write_session(&self, session: &ProviderSession) -> Result<(), AuthError> {
        if let Some(parent) = self.session_path.parent() {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(session)?;
        fs::write(&self.session_path, json)?;
        Ok(())
    }

    fn clear_session(&self) -> Result<(), AuthError> {
        match fs::remove_file(&self.session_path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }

    fn find_account(&self, credentials: &Credentials) -> Option<&(DemoAccount, Uuid)> {
        let email = credentials.email.trim();
        self.accounts.iter().find(|(account, _)| {
            account.email.eq_ignore_ascii_case(email) && account.password == credentials.password
        })
    }
}

impl AuthProvider for LocalProvider {
    fn get_session(&self) -> Result<Option<ProviderSession>, AuthError> {
        self.simulate_latency();
        let Some(session) = self.read_session()? else {
            return Ok(None);
        };
        if session.is_expired(Utc::now()) {
            tracing::info!(
                event = "auth.provider.session_expired",
                email = %session.user.email,
                expired_at = %session.expires_at
            );
            self.clear_session()?;
            return Ok(None);
        }
        Ok(Some(session))
    }

    fn sign_in_with_password(
        &self,
        credentials: &Credentials,
    ) -> Result<ProviderSession, AuthError> {
        self.simulate_latency();
        if credentials.email.trim().is_empty() || credentials.password.is_empty() {
            return Err(AuthError::new("Email and password are required"));
        }

        let Some((account, id)) = self.find_account(credentials) else {
            tracing::warn!(
                event = "auth.provider.sign_in_rejected",
                email = %credentials.email.trim()
            );
            return Err(AuthError::new("Invalid login credentials"));
        };

        let session = ProviderSession {
            user: UserIdentity {
                id: *id,
                email: account.email.clone(),
            },
            access_token: Uuid::new_v4().simple().to_string(),
            expires_at: Utc::now() + self.session_ttl,
        };
        self.write_session(&session)?;
        tracing::info!(
            event = "auth.provider.sign_in_completed",
            email = %session.user.email,
            expires_at = %session.expires_at
        );

        self.listeners.emit(&AuthEvent::SignedIn(session.clone()));
        Ok(session)
    }

    fn sign_out(&self) -> Result<(), AuthError> {
        self.simulate_latency();
        self.clear_session()?;
        tracing::info!(event = "auth.provider.sign_out_completed");
        self.listeners.emit(&AuthEvent::SignedOut);
        Ok(())
    }

    fn on_auth_state_change(&self, listener: Sender<AuthEvent>) -> Subscription {
        self.listeners.register(listener)
    }
}
