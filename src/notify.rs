//! Toast notifications and the status symbols used throughout the UI.

use std::collections::VecDeque;
use std::time::{Duration, Instant};

/// Success indicator (✓)
pub const SUCCESS: &str = "✓";

/// Error indicator (✗)
pub const ERROR: &str = "✗";

/// Information indicator (ℹ)
pub const INFO: &str = "ℹ";

/// Default time a toast stays on screen.
pub const DEFAULT_TOAST_TTL: Duration = Duration::from_millis(3000);

const DEFAULT_CAPACITY: usize = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Success,
    Error,
    Info,
}

impl Severity {
    pub fn symbol(self) -> &'static str {
        match self {
            Severity::Success => SUCCESS,
            Severity::Error => ERROR,
            Severity::Info => INFO,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Toast {
    pub severity: Severity,
    pub message: String,
    pub created_at: Instant,
}

impl Toast {
    pub fn text(&self) -> String {
        format!("{} {}", self.severity.symbol(), self.message)
    }
}

/// Anything that can show a user-visible notification.
pub trait Notify {
    fn notify(&mut self, severity: Severity, message: String);

    fn success(&mut self, message: &str) {
        self.notify(Severity::Success, message.to_string());
    }

    fn error(&mut self, message: &str) {
        self.notify(Severity::Error, message.to_string());
    }

    fn info(&mut self, message: &str) {
        self.notify(Severity::Info, message.to_string());
    }
}

/// Bounded queue of toasts, newest last.
#[derive(Debug)]
pub struct Toasts {
    items: VecDeque<Toast>,
    ttl: Duration,
    capacity: usize,
}

impl Toasts {
    pub fn new(ttl: Duration) -> Self {
        Self {
            items: VecDeque::new(),
            ttl,
            capacity: DEFAULT_CAPACITY,
        }
    }

    pub fn with_capacity(mut self, capacity: usize) -> Self {
        self.capacity = capacity.max(1);
        self
    }

    pub fn push_at(&mut self, severity: Severity, message: String, now: Instant) {
        while self.items.len() >= self.capacity {
            self.items.pop_front();
        }
        self.items.push_back(Toast {
            severity,
            message,
            created_at: now,
        });
    }

    /// Drops every toast older than the configured TTL.
    pub fn prune(&mut self, now: Instant) {
        let ttl = self.ttl;
        self.items
            .retain(|t| now.saturating_duration_since(t.created_at) < ttl);
    }

    pub fn iter(&self) -> impl Iterator<Item = &Toast> {
        self.items.iter()
    }

    pub fn latest(&self) -> Option<&Toast> {
        self.items.back()
    }

    pub fn count(&self, severity: Severity) -> usize {
        self.items.iter().filter(|t| t.severity == severity).count()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }
}

impl Default for Toasts {
    fn default() -> Self {
        Self::new(DEFAULT_TOAST_TTL)
    }
}

impl Notify for Toasts {
    fn notify(&mut self, severity: Severity, message: String) {
        tracing::debug!(event = "ui.toast.shown", severity = ?severity, message = %message);
        self.push_at(severity, message, Instant::now());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_notify_helpers_set_severity() {
        let mut toasts = Toasts::default();
        toasts.success("saved");
        toasts.error("failed");
        toasts.info("fyi");
        assert_eq!(toasts.count(Severity::Success), 1);
        assert_eq!(toasts.count(Severity::Error), 1);
        assert_eq!(toasts.count(Severity::Info), 1);
        assert_eq!(toasts.latest().map(|t| t.text()), Some("ℹ fyi".to_string()));
    }

    #[test]
    fn test_prune_removes_expired() {
        let mut toasts = Toasts::new(Duration::from_millis(100));
        let start = Instant::now();
        toasts.push_at(Severity::Info, "old".into(), start);
        toasts.push_at(Severity::Info, "new".into(), start + Duration::from_millis(80));

        toasts.prune(start + Duration::from_millis(120));
        assert_eq!(toasts.len(), 1);
        assert_eq!(toasts.latest().map(|t| t.message.as_str()), Some("new"));

        toasts.prune(start + Duration::from_millis(500));
        assert!(toasts.is_empty());
    }

    #[test]
    fn test_capacity_drops_oldest() {
        let mut toasts = Toasts::default().with_capacity(2);
        let now = Instant::now();
        toasts.push_at(Severity::Info, "a".into(), now);
        toasts.push_at(Severity::Info, "b".into(), now);
        toasts.push_at(Severity::Info, "c".into(), now);
        let messages: Vec<_> = toasts.iter().map(|t| t.message.clone()).collect();
        assert_eq!(messages, vec!["b", "c"]);
    }
}
