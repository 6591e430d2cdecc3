//! Page state modules for the SocialBoost TUI.
//!
//! Each screen keeps its own state struct so it can be unit tested without a
//! terminal. The session itself lives in [`crate::auth::SessionManager`], not
//! here.
//!
//! # Architecture
//!
//! ```text
//! App
//! ├── LoginState          - Credential form and in-flight flag
//! ├── NotificationsState  - Header bell panel
//! ├── DashboardState      - Activity list and chart period
//! ├── AutomationsState    - Automation list, filter, search, create form
//! ├── AnalyticsState      - Chart filters and generated series
//! └── SettingsState       - Profile, security, billing, notifications, connections
//! ```

mod analytics;
mod automations;
mod dashboard;
mod login;
mod notifications;
mod settings;

pub use analytics::AnalyticsState;
pub use automations::{AutomationForm, AutomationsState, FormError, FormField, StatusFilter};
pub use dashboard::DashboardState;
pub use login::{LoginField, LoginState};
pub use notifications::NotificationsState;
pub use settings::{
    SettingsState, SettingsTab, PASSWORD_FIELDS, PREF_ROWS, PROFILE_FIELDS,
};
