//! Configuration validation.

use crate::config::schema::Config;
use crate::error::{Error, Result};

/// Checks a merged configuration before it is used.
///
/// # Examples
///
/// ```
/// use rvpark::config::{Config, ConfigValidator};
///
/// ConfigValidator::validate(&Config::default()).unwrap();
///
/// let zero = Config { busy_timeout_ms: Some(0), ..Default::default() };
/// assert!(ConfigValidator::validate(&zero).is_err());
/// ```
pub struct ConfigValidator;

impl ConfigValidator {
    /// Validate a complete configuration.
    ///
    /// # Errors
    ///
    /// Returns a validation error for an empty path or a zero timeout.
    pub fn validate(config: &Config) -> Result<()> {
        if let Some(path) = &config.database_file {
            if path.as_os_str().is_empty() {
                return Err(Error::validation(
                    "database_file",
                    "Database file cannot be empty",
                ));
            }
        }

        if let Some(path) = &config.error_log {
            if path.as_os_str().is_empty() {
                return Err(Error::validation("error_log", "Error log path cannot be empty"));
            }
        }

        if config.busy_timeout_ms == Some(0) {
            return Err(Error::validation(
                "busy_timeout_ms",
                "Timeout must be greater than 0",
            ));
        }

        Ok(())
    }
}
