//! Authentication: provider seam, session lifecycle and the shared types
//! that flow between them.
//!
//! The provider owns credential verification and the session record. The
//! application only consumes it: it asks for the current session, submits
//! credentials, requests sign-out and listens for [`AuthEvent`]s.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub mod local;
pub mod provider;
pub mod session;

pub use local::{DemoAccount, LocalProvider};
pub use provider::{AuthProvider, ListenerRegistry, Subscription};
pub use session::{SessionManager, SessionState};

/// Identity record handed out by the provider. Passed through untouched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserIdentity {
    pub id: Uuid,
    pub email: String,
}

/// The provider's view of an active session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProviderSession {
    pub user: UserIdentity,
    pub access_token: String,
    pub expires_at: DateTime<Utc>,
}

impl ProviderSession {
    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        self.expires_at <= now
    }
}

/// Email/password pair submitted to the provider.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

impl Credentials {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Events delivered by the provider's state-change stream.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthEvent {
    SignedIn(ProviderSession),
    SignedOut,
}

impl AuthEvent {
    pub fn name(&self) -> &'static str {
        match self {
            AuthEvent::SignedIn(_) => "SIGNED_IN",
            AuthEvent::SignedOut => "SIGNED_OUT",
        }
    }
}

/// Any failure reported by the authentication provider.
///
/// Bad credentials, I/O trouble and unknown provider failures all land here;
/// callers only ever show the message.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct AuthError {
    message: String,
}

impl AuthError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl From<std::io::Error> for AuthError {
    fn from(err: std::io::Error) -> Self {
        Self::new(format!("Session storage error: {err}"))
    }
}

impl From<serde_json::Error> for AuthError {
    fn from(err: serde_json::Error) -> Self {
        Self::new(format!("Session data is unreadable: {err}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    #[test]
    fn test_credentials_debug_redacts_password() {
        let creds = Credentials::new("demo@socialboost.app", "hunter22");
        let rendered = format!("{:?}", creds);
        assert!(rendered.contains("demo@socialboost.app"));
        assert!(!rendered.contains("hunter22"));
    }

    #[test]
    fn test_session_expiry() {
        let now = Utc::now();
        let session = ProviderSession {
            user: UserIdentity {
                id: Uuid::new_v4(),
                email: "a@b.c".into(),
            },
            access_token: "token".into(),
            expires_at: now + Duration::minutes(5),
        };
        assert!(!session.is_expired(now));
        assert!(session.is_expired(now + Duration::minutes(5)));
    }

    #[test]
    fn test_auth_error_displays_provider_message() {
        let err = AuthError::new("Invalid login credentials");
        assert_eq!(err.to_string(), "Invalid login credentials");
        assert_eq!(err.message(), "Invalid login credentials");
    }
}
