//! Configuration schema definitions.
//!
//! Every field is optional so layers (file, environment, programmatic) can
//! be merged field by field; the accessor methods supply the defaults.

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::database::{DatabaseConfig, DEFAULT_DATABASE_FILE};

/// Default busy timeout in milliseconds.
pub const DEFAULT_BUSY_TIMEOUT_MS: u64 = 5000;

/// Default error log file name inside the data directory.
pub const DEFAULT_ERROR_LOG_FILE: &str = "crm_errors.log";

/// Complete configuration structure.
///
/// # Examples
///
/// ```
/// use rvpark::config::{BookingConfig, Config};
/// use std::path::Path;
///
/// let config = Config {
///     busy_timeout_ms: Some(250),
///     booking: Some(BookingConfig { reject_overlaps: Some(true) }),
///     ..Default::default()
/// };
/// assert!(config.reject_overlaps());
/// assert_eq!(
///     config.database_path(Path::new("/srv/park")),
///     Path::new("/srv/park/park.db")
/// );
/// ```
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Database file; relative paths are resolved against the data directory.
    pub database_file: Option<PathBuf>,

    /// How long to wait on a locked database, in milliseconds.
    pub busy_timeout_ms: Option<u64>,

    /// Error log file; relative paths are resolved against the data directory.
    pub error_log: Option<PathBuf>,

    /// Booking rules.
    pub booking: Option<BookingConfig>,
}

/// Booking rules.
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct BookingConfig {
    /// Refuse a reservation whose site is already held for an overlapping
    /// stay. Off unless set.
    pub reject_overlaps: Option<bool>,
}

fn resolve_in(data_dir: &Path, path: Option<&Path>, default: &str) -> PathBuf {
    match path {
        Some(path) if path.is_absolute() => path.to_path_buf(),
        Some(path) => data_dir.join(path),
        None => data_dir.join(default),
    }
}

impl Config {
    /// Absolute path of the database file.
    #[must_use]
    pub fn database_path(&self, data_dir: &Path) -> PathBuf {
        resolve_in(data_dir, self.database_file.as_deref(), DEFAULT_DATABASE_FILE)
    }

    /// Absolute path of the error log.
    #[must_use]
    pub fn error_log_path(&self, data_dir: &Path) -> PathBuf {
        resolve_in(data_dir, self.error_log.as_deref(), DEFAULT_ERROR_LOG_FILE)
    }

    /// Busy timeout, defaulting to 5 seconds.
    #[must_use]
    pub fn busy_timeout(&self) -> Duration {
        Duration::from_millis(self.busy_timeout_ms.unwrap_or(DEFAULT_BUSY_TIMEOUT_MS))
    }

    /// Whether overlapping bookings are refused.
    #[must_use]
    pub fn reject_overlaps(&self) -> bool {
        self.booking
            .as_ref()
            .and_then(|booking| booking.reject_overlaps)
            .unwrap_or(false)
    }

    /// Database connection parameters for this configuration.
    #[must_use]
    pub fn database_config(&self, data_dir: &Path) -> DatabaseConfig {
        DatabaseConfig::new(self.database_path(data_dir)).with_busy_timeout(self.busy_timeout())
    }

    /// Overlays `other` onto `self`: every field set in `other` wins.
    pub fn merge(&mut self, other: &Self) {
        if other.database_file.is_some() {
            self.database_file.clone_from(&other.database_file);
        }
        if other.busy_timeout_ms.is_some() {
            self.busy_timeout_ms = other.busy_timeout_ms;
        }
        if other.error_log.is_some() {
            self.error_log.clone_from(&other.error_log);
        }
        if let Some(booking) = &other.booking {
            let target = self.booking.get_or_insert_with(BookingConfig::default);
            if booking.reject_overlaps.is_some() {
                target.reject_overlaps = booking.reject_overlaps;
            }
        }
    }
}
