//! Layered configuration assembly.

use std::path::{Path, PathBuf};

use crate::config::environment::EnvironmentConfig;
use crate::config::loader::ConfigLoader;
use crate::config::schema::Config;
use crate::config::validator::ConfigValidator;
use crate::database::resolve_data_dir;
use crate::error::Result;

/// Builds a [`Config`] from the file, environment and programmatic layers.
///
/// # Examples
///
/// ```
/// use rvpark::config::{Config, ConfigBuilder};
///
/// let config = ConfigBuilder::new()
///     .skip_files()
///     .skip_env()
///     .with_config(Config { busy_timeout_ms: Some(50), ..Default::default() })
///     .build()
///     .unwrap();
/// assert_eq!(config.busy_timeout_ms, Some(50));
/// ```
#[derive(Debug, Default)]
pub struct ConfigBuilder {
    data_dir: Option<PathBuf>,
    skip_files: bool,
    skip_env: bool,
    overrides: Option<Config>,
}

impl ConfigBuilder {
    /// Creates a builder that reads every layer.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Reads `config.yaml` from `dir` instead of the resolved data directory.
    #[must_use]
    pub fn with_data_dir(mut self, dir: impl AsRef<Path>) -> Self {
        self.data_dir = Some(dir.as_ref().to_path_buf());
        self
    }

    /// Ignores the configuration file.
    #[must_use]
    pub fn skip_files(mut self) -> Self {
        self.skip_files = true;
        self
    }

    /// Ignores `RVPARK_*` environment variables.
    #[must_use]
    pub fn skip_env(mut self) -> Self {
        self.skip_env = true;
        self
    }

    /// Applies `config` on top of every other layer.
    #[must_use]
    pub fn with_config(mut self, config: Config) -> Self {
        self.overrides = Some(config);
        self
    }

    /// Merges the layers, lowest precedence first, and validates the result.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be parsed, an environment value
    /// is invalid, or the merged configuration fails validation.
    pub fn build(self) -> Result<Config> {
        let mut config = Config::default();

        if !self.skip_files {
            let data_dir = resolve_data_dir(self.data_dir.as_deref())?;
            if let Some(file) = ConfigLoader::load_from_data_dir(&data_dir)? {
                config.merge(&file);
            }
        }

        if !self.skip_env {
            EnvironmentConfig::apply_overrides(&mut config)?;
        }

        if let Some(overrides) = &self.overrides {
            config.merge(overrides);
        }

        ConfigValidator::validate(&config)?;
        Ok(config)
    }
}
