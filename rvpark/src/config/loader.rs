//! Configuration file loading.
//!
//! There is a single configuration file, `config.yaml` in the data
//! directory. A missing file is not an error.

use std::fs;
use std::path::{Path, PathBuf};

use crate::config::schema::Config;
use crate::error::{Error, Result};

/// Name of the configuration file inside the data directory.
pub const CONFIG_FILE_NAME: &str = "config.yaml";

/// Loads configuration files.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Path of the configuration file for `data_dir`.
    #[must_use]
    pub fn config_path(data_dir: &Path) -> PathBuf {
        data_dir.join(CONFIG_FILE_NAME)
    }

    /// Loads `<data_dir>/config.yaml` if it exists.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn load_from_data_dir(data_dir: &Path) -> Result<Option<Config>> {
        let path = Self::config_path(data_dir);
        if !path.exists() {
            return Ok(None);
        }
        Self::load_file(&path).map(Some)
    }

    /// Load and parse a YAML configuration file.
    ///
    /// An empty file yields the default configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or the YAML is invalid.
    pub fn load_file(path: &Path) -> Result<Config> {
        let contents = fs::read_to_string(path)?;
        if contents.trim().is_empty() {
            return Ok(Config::default());
        }

        serde_yaml::from_str(&contents).map_err(|e| {
            Error::validation(path.display().to_string(), format!("Invalid YAML: {e}"))
        })
    }
}
