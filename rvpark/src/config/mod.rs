//! Configuration system for rvpark.
//!
//! Configuration is merged from several layers. From highest to lowest
//! precedence:
//!
//! 1. Programmatic overrides (via `ConfigBuilder::with_config`), which is
//!    where command-line flags land
//! 2. Environment variables (`RVPARK_*`)
//! 3. `<data_dir>/config.yaml`
//! 4. Built-in defaults
//!
//! # Examples
//!
//! ```no_run
//! use rvpark::config::ConfigBuilder;
//! use std::path::Path;
//!
//! let config = ConfigBuilder::new()
//!     .with_data_dir(Path::new("/srv/park"))
//!     .build()
//!     .unwrap();
//! println!("database: {}", config.database_path(Path::new("/srv/park")).display());
//! ```

pub mod builder;
pub mod environment;
pub mod loader;
pub mod schema;
pub mod validator;

#[cfg(test)]
mod proptests;

pub use builder::ConfigBuilder;
pub use environment::EnvironmentConfig;
pub use loader::{ConfigLoader, CONFIG_FILE_NAME};
pub use schema::{
    BookingConfig, Config, DEFAULT_BUSY_TIMEOUT_MS, DEFAULT_ERROR_LOG_FILE,
};
pub use validator::ConfigValidator;
