//! Database configuration and path resolution.

use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::error::{Error, Result};

/// File name of the park database inside the data directory.
pub const DEFAULT_DATABASE_FILE: &str = "park.db";

/// Default busy timeout for lock contention.
pub const DEFAULT_BUSY_TIMEOUT: Duration = Duration::from_millis(5000);

/// Parameters for opening the park database.
///
/// # Examples
///
/// ```
/// use rvpark::database::DatabaseConfig;
/// use std::time::Duration;
///
/// let config = DatabaseConfig::new("/tmp/park.db")
///     .with_busy_timeout(Duration::from_millis(250));
/// assert!(config.auto_create);
/// assert_eq!(config.busy_timeout, Duration::from_millis(250));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatabaseConfig {
    /// Path to the database file.
    pub path: PathBuf,
    /// How long a connection waits on a locked database.
    pub busy_timeout: Duration,
    /// Whether to create the file and its directory when missing.
    pub auto_create: bool,
    /// Whether connections are opened read-only.
    pub read_only: bool,
}

impl DatabaseConfig {
    /// Creates a configuration with a 5s busy timeout, auto-create on and
    /// read-write access.
    #[must_use]
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            busy_timeout: DEFAULT_BUSY_TIMEOUT,
            auto_create: true,
            read_only: false,
        }
    }

    /// Sets the busy timeout.
    #[must_use]
    pub fn with_busy_timeout(mut self, timeout: Duration) -> Self {
        self.busy_timeout = timeout;
        self
    }

    /// Refuses to create a missing database file.
    #[must_use]
    pub fn without_auto_create(mut self) -> Self {
        self.auto_create = false;
        self
    }

    /// Opens connections read-only. Implies no auto-create.
    #[must_use]
    pub fn read_only(mut self) -> Self {
        self.read_only = true;
        self.auto_create = false;
        self
    }
}

/// Returns `~/.rvpark`.
///
/// # Errors
///
/// Returns an error if the home directory cannot be determined.
pub fn default_data_dir() -> Result<PathBuf> {
    home::home_dir()
        .map(|home| home.join(".rvpark"))
        .ok_or_else(|| Error::validation("home_directory", "Cannot determine home directory"))
}

/// Resolves the data directory.
///
/// The resolution order is:
/// 1. `explicit`, when given
/// 2. `$RVPARK_DATA_DIR`
/// 3. `~/.rvpark`
///
/// # Errors
///
/// Returns an error if the home directory is needed but cannot be found.
pub fn resolve_data_dir(explicit: Option<&Path>) -> Result<PathBuf> {
    if let Some(dir) = explicit {
        return Ok(dir.to_path_buf());
    }
    match std::env::var("RVPARK_DATA_DIR") {
        Ok(dir) if !dir.is_empty() => Ok(PathBuf::from(dir)),
        _ => default_data_dir(),
    }
}

/// Resolves the default database path, `<data dir>/park.db`.
///
/// # Errors
///
/// Returns an error if the home directory is needed but cannot be found.
pub fn resolve_database_path() -> Result<PathBuf> {
    Ok(resolve_data_dir(None)?.join(DEFAULT_DATABASE_FILE))
}
