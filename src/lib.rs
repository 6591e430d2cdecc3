// Library for testable modules
pub mod analytics;
pub mod async_task;
pub mod auth;
pub mod config;
pub mod data;
pub mod key_handler;
pub mod logging;
pub mod notify;
pub mod pages;
pub mod render_context;
pub mod route;
pub mod screen;
pub mod state;
pub mod ui_utils;

// Re-export main types used in tests
pub use auth::{AuthError, AuthEvent, Credentials, ProviderSession, UserIdentity};
pub use auth::{LocalProvider, SessionManager, SessionState};
pub use data::{Automation, AutomationStatus, Platform, Store};
pub use notify::{Notify, Severity, Toasts};
pub use route::{Route, Router};
