//! File-based structured logging.
//!
//! The terminal belongs to the UI, so log output goes to a file. Events use a
//! stable dotted `event` field (`auth.session.login_failed`, ...) plus
//! structured fields. `RUST_LOG` takes precedence over the configured level.

use std::fs::{self, OpenOptions};
use std::path::Path;
use std::sync::Mutex;

use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

#[derive(Debug, thiserror::Error)]
pub enum LoggingError {
    #[error("failed to open log file '{path}': {source}")]
    Open {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid log filter '{filter}': {message}")]
    Filter { filter: String, message: String },

    #[error("logging is already initialized for this process")]
    AlreadyInitialized,
}

/// Installs the global subscriber writing to `path` at `level`.
///
/// # Errors
/// - the log file or its directory cannot be created
/// - `level` is not a valid filter directive
/// - a global subscriber is already installed
pub fn init_logging(level: &str, path: &Path) -> Result<(), LoggingError> {
    let open_err = |source| LoggingError::Open {
        path: path.display().to_string(),
        source,
    };
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(open_err)?;
    }
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(open_err)?;

    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(level).map_err(|e| LoggingError::Filter {
            filter: level.to_string(),
            message: e.to_string(),
        })?,
    };

    let layer = fmt::layer()
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(false);

    tracing_subscriber::registry()
        .with(filter)
        .with(layer)
        .try_init()
        .map_err(|_| LoggingError::AlreadyInitialized)?;

    tracing::info!(
        event = "app.logging.initialized",
        level = level,
        path = %path.display(),
        version = env!("CARGO_PKG_VERSION")
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_init_creates_file_and_rejects_second_init() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("logs").join("socialboost.log");

        init_logging("info", &path).unwrap();
        assert!(path.exists());

        let err = init_logging("info", &path).unwrap_err();
        assert!(matches!(err, LoggingError::AlreadyInitialized));
    }

    #[test]
    fn test_unwritable_location_is_reported() {
        let dir = TempDir::new().unwrap();
        let blocker = dir.path().join("blocker");
        fs::write(&blocker, "file, not a directory").unwrap();

        let err = init_logging("info", &blocker.join("app.log")).unwrap_err();
        assert!(matches!(err, LoggingError::Open { .. }));
    }
}
