//! Background execution of authentication provider calls
//!
//! Provider calls may block (disk, network, artificial latency), so they run on
//! worker threads and report back through a channel that the UI loop polls.
//!
//! # Architecture
//!
//! Workers only run the provider call; the outcome is applied by the UI loop.
//!
//! # Usage
//!
//! ```no_run
//! use std::sync::Arc;
//! use socialboost::async_task::{AuthRequest, TaskManager};
//! use socialboost::auth::{AuthProvider, LocalProvider};
//!
//! let provider: Arc<dyn AuthProvider> = Arc::new(LocalProvider::new(vec![], "session.json"));
//! let mut tm = TaskManager::new();
//!
//! // Spawn the initial session lookup
//! tm.spawn_request(provider, AuthRequest::LoadSession);
//!
//! // Poll for completion in your event loop
//! if let Some(outcome) = tm.try_recv() {
//!     println!("{:?}", outcome);
//! }
//! ```

use std::sync::Arc;
use std::thread;

use crossbeam::channel::{unbounded, Receiver, Sender};

use crate::auth::{AuthError, AuthProvider, Credentials, ProviderSession};

/// Provider calls that can be performed in the background
#[derive(Debug, Clone)]
pub enum AuthRequest {
    LoadSession,
    Login(Credentials),
    Logout,
}

impl AuthRequest {
    fn execute(self, provider: &dyn AuthProvider) -> AuthOutcome {
        match self {
            AuthRequest::LoadSession => AuthOutcome::SessionLoaded(provider.get_session()),
            AuthRequest::Login(credentials) => AuthOutcome::LoggedIn(
                provider.sign_in_with_password(&credentials).map(|_| ()),
            ),
            AuthRequest::Logout => AuthOutcome::LoggedOut(provider.sign_out()),
        }
    }
}

/// Result of a background provider call
#[derive(Debug, Clone, PartialEq)]
pub enum AuthOutcome {
    SessionLoaded(Result<Option<ProviderSession>, AuthError>),
    LoggedIn(Result<(), AuthError>),
    LoggedOut(Result<(), AuthError>),
}

/// Task manager for background provider calls
///
/// Handles spawning, tracking, and receiving results from background tasks
pub struct TaskManager {
    sender: Sender<AuthOutcome>,
    receiver: Receiver<AuthOutcome>,
    pending: usize,
}

impl TaskManager {
    /// Create a new task manager
    pub fn new() -> Self {
        let (sender, receiver) = unbounded();
        Self {
            sender,
            receiver,
            pending: 0,
        }
    }

    /// Spawn a background provider call
    ///
    /// Returns immediately; the outcome can be polled with `try_recv()`
    pub fn spawn_request(&mut self, provider: Arc<dyn AuthProvider>, request: AuthRequest) {
        self.pending += 1;
        let sender = self.sender.clone();
        tracing::debug!(event = "task.auth.spawned", request = ?request);

        thread::spawn(move || {
            let outcome = request.execute(provider.as_ref());

            // Send outcome back to main thread
            let _ = sender.send(outcome);
        });
    }

    /// Check if there's a completed call
    ///
    /// Returns `Some(outcome)` if a call completed, `None` if nothing is
    /// pending or all calls are still running
    pub fn try_recv(&mut self) -> Option<AuthOutcome> {
        if self.pending == 0 {
            return None;
        }

        match self.receiver.try_recv() {
            Ok(outcome) => {
                self.pending -= 1;
                Some(outcome)
            }
            Err(_) => None,
        }
    }

    /// Get number of pending calls
    pub fn pending_count(&self) -> usize {
        self.pending
    }

    /// Check if any calls are currently pending
    pub fn has_pending(&self) -> bool {
        self.pending > 0
    }
}

impl Default for TaskManager {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::{DemoAccount, LocalProvider};
    use std::time::{Duration, Instant};
    use tempfile::TempDir;

    fn provider(dir: &TempDir) -> Arc<dyn AuthProvider> {
        Arc::new(LocalProvider::new(
            vec![DemoAccount::default()],
            dir.path().join("session.json"),
        ))
    }

    fn wait_for(tm: &mut TaskManager) -> Option<AuthOutcome> {
        let deadline = Instant::now() + Duration::from_secs(5);
        while Instant::now() < deadline {
            if let Some(outcome) = tm.try_recv() {
                return Some(outcome);
            }
            std::thread::sleep(Duration::from_millis(5));
        }
        None
    }

    #[test]
    fn test_task_manager_creation() {
        let mut tm = TaskManager::new();
        assert_eq!(tm.pending_count(), 0);
        assert!(!tm.has_pending());
        assert!(tm.try_recv().is_none());
    }

    #[test]
    fn test_spawn_request() {
        let dir = TempDir::new().unwrap();
        let mut tm = TaskManager::new();
        tm.spawn_request(provider(&dir), AuthRequest::LoadSession);
        assert_eq!(tm.pending_count(), 1);
        assert!(tm.has_pending());
    }

    #[test]
    fn test_load_session_completes() {
        let dir = TempDir::new().unwrap();
        let mut tm = TaskManager::new();
        tm.spawn_request(provider(&dir), AuthRequest::LoadSession);

        assert_eq!(wait_for(&mut tm), Some(AuthOutcome::SessionLoaded(Ok(None))));
        assert_eq!(tm.pending_count(), 0);
    }

    #[test]
    fn test_login_failure_is_reported() {
        let dir = TempDir::new().unwrap();
        let mut tm = TaskManager::new();
        tm.spawn_request(
            provider(&dir),
            AuthRequest::Login(Credentials::new("demo@socialboost.app", "wrong")),
        );

        assert_eq!(
            wait_for(&mut tm),
            Some(AuthOutcome::LoggedIn(Err(AuthError::new(
                "Invalid login credentials"
            ))))
        );
    }
}
