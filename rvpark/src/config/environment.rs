//! Environment variable handling for configuration overrides.
//!
//! Recognized variables:
//!
//! - `RVPARK_DATABASE_FILE`
//! - `RVPARK_BUSY_TIMEOUT_MS`
//! - `RVPARK_ERROR_LOG`
//! - `RVPARK_REJECT_OVERLAPS`

use std::env;
use std::path::PathBuf;

use crate::config::schema::{BookingConfig, Config};
use crate::error::{Error, Result};

/// Handles environment variable overrides for configuration.
///
/// # Examples
///
/// ```no_run
/// use rvpark::config::{Config, EnvironmentConfig};
///
/// let mut config = Config::default();
/// EnvironmentConfig::apply_overrides(&mut config).unwrap();
/// ```
pub struct EnvironmentConfig;

impl EnvironmentConfig {
    /// Apply environment variable overrides to config.
    ///
    /// # Errors
    ///
    /// Returns an error if a variable is set to an unparsable value.
    pub fn apply_overrides(config: &mut Config) -> Result<()> {
        if let Ok(path) = env::var("RVPARK_DATABASE_FILE") {
            config.database_file = Some(PathBuf::from(path));
        }

        if let Ok(ms) = env::var("RVPARK_BUSY_TIMEOUT_MS") {
            config.busy_timeout_ms = Some(ms.parse().map_err(|_| {
                Error::validation("RVPARK_BUSY_TIMEOUT_MS", "Must be a positive integer")
            })?);
        }

        if let Ok(path) = env::var("RVPARK_ERROR_LOG") {
            config.error_log = Some(PathBuf::from(path));
        }

        if let Ok(val) = env::var("RVPARK_REJECT_OVERLAPS") {
            let reject = Self::parse_bool("RVPARK_REJECT_OVERLAPS", &val)?;
            config
                .booking
                .get_or_insert_with(BookingConfig::default)
                .reject_overlaps = Some(reject);
        }

        Ok(())
    }

    /// Parse a boolean value from a string.
    ///
    /// Accepts: true/1/yes/on for true, false/0/no/off for false (case-insensitive).
    pub(crate) fn parse_bool(field: &str, s: &str) -> Result<bool> {
        match s.to_lowercase().as_str() {
            "true" | "1" | "yes" | "on" => Ok(true),
            "false" | "0" | "no" | "off" => Ok(false),
            _ => Err(Error::validation(
                field,
                format!("Invalid boolean value: '{s}' (expected true/false/1/0/yes/no/on/off)"),
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    const VARS: [&str; 4] = [
        "RVPARK_DATABASE_FILE",
        "RVPARK_BUSY_TIMEOUT_MS",
        "RVPARK_ERROR_LOG",
        "RVPARK_REJECT_OVERLAPS",
    ];

    fn clear_env() {
        for var in VARS {
            env::remove_var(var);
        }
    }

    #[test]
    fn test_parse_bool_variants() {
        for value in ["true", "TRUE", "1", "yes", "On"] {
            assert!(EnvironmentConfig::parse_bool("test", value).unwrap());
        }
        for value in ["false", "0", "NO", "off"] {
            assert!(!EnvironmentConfig::parse_bool("test", value).unwrap());
        }
        assert!(EnvironmentConfig::parse_bool("test", "maybe").is_err());
    }

    #[test]
    #[serial]
    fn test_no_env_leaves_config_alone() {
        clear_env();
        let mut config = Config::default();
        EnvironmentConfig::apply_overrides(&mut config).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    #[serial]
    fn test_env_overrides() {
        clear_env();
        env::set_var("RVPARK_DATABASE_FILE", "env.db");
        env::set_var("RVPARK_BUSY_TIMEOUT_MS", "1200");
        env::set_var("RVPARK_ERROR_LOG", "/tmp/errors.log");
        env::set_var("RVPARK_REJECT_OVERLAPS", "yes");

        let mut config = Config::default();
        EnvironmentConfig::apply_overrides(&mut config).unwrap();
        clear_env();

        assert_eq!(config.database_file, Some(PathBuf::from("env.db")));
        assert_eq!(config.busy_timeout_ms, Some(1200));
        assert_eq!(config.error_log, Some(PathBuf::from("/tmp/errors.log")));
        assert!(config.reject_overlaps());
    }

    #[test]
    #[serial]
    fn test_invalid_timeout() {
        clear_env();
        env::set_var("RVPARK_BUSY_TIMEOUT_MS", "soon");
        let result = EnvironmentConfig::apply_overrides(&mut Config::default());
        clear_env();

        let err = result.unwrap_err();
        assert!(err.to_string().contains("RVPARK_BUSY_TIMEOUT_MS"));
    }
}
