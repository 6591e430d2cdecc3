//! Application configuration and on-disk locations.
//!
//! Configuration is read from `$SOCIALBOOST_CONFIG` when set, otherwise from
//! `<config_dir>/socialboost/config.toml`. A missing file means defaults; every
//! key is optional. The merged result is validated before use.
//!
//! ```toml
//! [ui]
//! tick_rate_ms = 100
//! toast_ttl_ms = 3000
//! start_route = "/login"
//!
//! [auth]
//! event_grace_ms = 5000
//!
//! [provider]
//! session_ttl_minutes = 60
//! latency_ms = 400
//! accounts = [{ email = "demo@socialboost.app", password = "socialboost" }]
//!
//! [logging]
//! level = "info"
//! ```

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::auth::DemoAccount;
use crate::route::Route;

pub const CONFIG_ENV_VAR: &str = "SOCIALBOOST_CONFIG";
const APP_DIR: &str = "socialboost";
const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to parse config file '{path}': {message}")]
    Parse { path: String, message: String },

    #[error("Invalid configuration: {message}")]
    Invalid { message: String },

    #[error("IO error reading config: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },

    #[error("Could not determine the user {kind} directory; set $HOME")]
    MissingDirectory { kind: &'static str },
}

fn invalid(message: impl Into<String>) -> ConfigError {
    ConfigError::Invalid {
        message: message.into(),
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    pub tick_rate_ms: u64,
    pub toast_ttl_ms: u64,
    pub start_route: String,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            tick_rate_ms: 100,
            toast_ttl_ms: 3000,
            start_route: Route::Login.path().to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AuthConfig {
    pub event_grace_ms: u64,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            event_grace_ms: 5000,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProviderConfig {
    pub accounts: Vec<DemoAccount>,
    pub session_ttl_minutes: i64,
    pub latency_ms: u64,
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            accounts: vec![DemoAccount::default()],
            session_ttl_minutes: 60,
            latency_ms: 0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    /// Overrides the default `<data_dir>/socialboost.log`.
    pub file: Option<PathBuf>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".into(),
            file: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub ui: UiConfig,
    pub auth: AuthConfig,
    pub provider: ProviderConfig,
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Loads the configuration for `paths`, honouring `$SOCIALBOOST_CONFIG`.
    pub fn load(paths: &AppPaths) -> Result<Self, ConfigError> {
        let path = std::env::var_os(CONFIG_ENV_VAR)
            .map(PathBuf::from)
            .unwrap_or_else(|| paths.config_file());
        Self::load_or_default(&path)
    }

    /// Reads `path`, falling back to defaults when it does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        match fs::read_to_string(path) {
            Ok(content) => Self::parse(&content, path),
            Err(e) if e.kind() == ErrorKind::NotFound => {
                let config = Self::default();
                config.validate()?;
                Ok(config)
            }
            Err(e) => Err(e.into()),
        }
    }

    fn parse(content: &str, path: &Path) -> Result<Self, ConfigError> {
        let config: AppConfig = toml::from_str(content).map_err(|e| ConfigError::Parse {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.ui.tick_rate_ms == 0 {
            return Err(invalid("ui.tick_rate_ms must be greater than 0"));
        }
        if self.ui.toast_ttl_ms == 0 {
            return Err(invalid("ui.toast_ttl_ms must be greater than 0"));
        }
        if Route::from_path(&self.ui.start_route).is_none() {
            return Err(invalid(format!(
                "ui.start_route '{}' is not a known route",
                self.ui.start_route
            )));
        }
        if self.provider.accounts.is_empty() {
            return Err(invalid("provider.accounts must list at least one account"));
        }
        for account in &self.provider.accounts {
            if !account.email.contains('@') {
                return Err(invalid(format!(
                    "provider account '{}' is not an email address",
                    account.email
                )));
            }
            if account.password.is_empty() {
                return Err(invalid(format!(
                    "provider account '{}' has an empty password",
                    account.email
                )));
            }
        }
        if self.provider.session_ttl_minutes <= 0 {
            return Err(invalid("provider.session_ttl_minutes must be positive"));
        }
        if !LOG_LEVELS.contains(&self.logging.level.to_ascii_lowercase().as_str()) {
            return Err(invalid(format!(
                "logging.level '{}' must be one of {}",
                self.logging.level,
                LOG_LEVELS.join(", ")
            )));
        }
        Ok(())
    }

    pub fn start_route(&self) -> Route {
        Route::from_path(&self.ui.start_route).unwrap_or(Route::Login)
    }

    pub fn tick_rate(&self) -> Duration {
        Duration::from_millis(self.ui.tick_rate_ms)
    }

    pub fn toast_ttl(&self) -> Duration {
        Duration::from_millis(self.ui.toast_ttl_ms)
    }

    pub fn event_grace(&self) -> Duration {
        Duration::from_millis(self.auth.event_grace_ms)
    }

    pub fn provider_latency(&self) -> Duration {
        Duration::from_millis(self.provider.latency_ms)
    }
}

/// Centralized path construction for config and data files.
///
/// Use `resolve()` in production code and `from_dir()` in tests.
#[derive(Debug, Clone)]
pub struct AppPaths {
    config_dir: PathBuf,
    data_dir: PathBuf,
}

impl AppPaths {
    pub fn resolve() -> Result<Self, ConfigError> {
        let config = dirs::config_dir().ok_or(ConfigError::MissingDirectory { kind: "config" })?;
        let data = dirs::data_local_dir().ok_or(ConfigError::MissingDirectory { kind: "data" })?;
        Ok(Self {
            config_dir: config.join(APP_DIR),
            data_dir: data.join(APP_DIR),
        })
    }

    /// Create paths from an explicit base directory. Use in tests.
    pub fn from_dir(base: impl AsRef<Path>) -> Self {
        let base = base.as_ref();
        Self {
            config_dir: base.join("config"),
            data_dir: base.join("data"),
        }
    }

    pub fn config_dir(&self) -> &Path {
        &self.config_dir
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    pub fn config_file(&self) -> PathBuf {
        self.config_dir.join("config.toml")
    }

    pub fn session_file(&self) -> PathBuf {
        self.data_dir.join("session.json")
    }

    pub fn log_file(&self) -> PathBuf {
        self.data_dir.join("socialboost.log")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_defaults_are_valid() {
        let config = AppConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.start_route(), Route::Login);
        assert_eq!(config.toast_ttl(), Duration::from_millis(3000));
        assert_eq!(config.provider.accounts, vec![DemoAccount::default()]);
    }

    #[test]
    fn test_missing_file_yields_defaults() {
        let dir = TempDir::new().unwrap();
        let config = AppConfig::load_or_default(&dir.path().join("absent.toml")).unwrap();
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn test_partial_file_keeps_other_defaults() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(
            &path,
            "[ui]\nstart_route = \"/analytics\"\n\n[provider]\nlatency_ms = 250\n",
        )
        .unwrap();

        let config = AppConfig::load_or_default(&path).unwrap();
        assert_eq!(config.start_route(), Route::Analytics);
        assert_eq!(config.provider_latency(), Duration::from_millis(250));
        assert_eq!(config.ui.tick_rate_ms, 100);
        assert_eq!(config.provider.accounts.len(), 1);
    }

    #[test]
    fn test_accounts_from_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(
            &path,
            "[provider]\naccounts = [{ email = \"ops@example.com\", password = \"s3cret\" }]\n",
        )
        .unwrap();

        let config = AppConfig::load_or_default(&path).unwrap();
        assert_eq!(
            config.provider.accounts,
            vec![DemoAccount::new("ops@example.com", "s3cret")]
        );
    }

    #[test]
    fn test_parse_error_names_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "[ui\n").unwrap();

        let err = AppConfig::load_or_default(&path).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
        assert!(err.to_string().contains("config.toml"));
    }

    #[test]
    fn test_unknown_start_route_rejected() {
        let mut config = AppConfig::default();
        config.ui.start_route = "/reports".into();
        assert!(matches!(config.validate(), Err(ConfigError::Invalid { .. })));
    }

    #[test]
    fn test_bad_account_rejected() {
        let mut config = AppConfig::default();
        config.provider.accounts = vec![DemoAccount::new("not-an-email", "pw")];
        assert!(config.validate().is_err());

        config.provider.accounts = vec![];
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_zero_tick_rate_rejected() {
        let mut config = AppConfig::default();
        config.ui.tick_rate_ms = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_unknown_log_level_rejected() {
        let mut config = AppConfig::default();
        config.logging.level = "verbose".into();
        assert!(config.validate().is_err());
        config.logging.level = "DEBUG".into();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_paths_from_dir() {
        let paths = AppPaths::from_dir("/tmp/sb");
        assert_eq!(paths.config_file(), PathBuf::from("/tmp/sb/config/config.toml"));
        assert_eq!(paths.session_file(), PathBuf::from("/tmp/sb/data/session.json"));
        assert_eq!(paths.log_file(), PathBuf::from("/tmp/sb/data/socialboost.log"));
    }
}
