//! Init command implementation.
//!
//! This module implements the `init` command for explicitly initializing
//! the rvpark data directory and database.

use std::fs;

use clap::Args;

use rvpark::config::{ConfigLoader, DEFAULT_BUSY_TIMEOUT_MS, DEFAULT_ERROR_LOG_FILE};
use rvpark::database::{Database, DEFAULT_DATABASE_FILE};

use crate::error::CliError;
use crate::utils::{load_configuration, GlobalOptions};

/// Initialize the data directory and database.
#[derive(Args)]
pub struct InitCommand {
    /// Also write a default configuration file
    #[arg(long)]
    pub with_config: bool,

    /// Preview actions without executing
    #[arg(long)]
    pub dry_run: bool,
}

fn default_config_yaml() -> String {
    format!(
        "# rvpark configuration\n\
         database_file: {DEFAULT_DATABASE_FILE}\n\
         busy_timeout_ms: {DEFAULT_BUSY_TIMEOUT_MS}\n\
         error_log: {DEFAULT_ERROR_LOG_FILE}\n\
         booking:\n  reject_overlaps: false\n"
    )
}

impl InitCommand {
    /// Execute the init command.
    ///
    /// An existing database is opened and verified, never replaced. An
    /// existing configuration file is never overwritten.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let (data_dir, config) = load_configuration(global)?;
        let db_path = config.database_path(&data_dir);
        let config_path = ConfigLoader::config_path(&data_dir);

        if self.dry_run {
            println!("Dry-run mode: no changes will be made");
            println!();
            println!("Would initialize rvpark in: {}", data_dir.display());
            if data_dir.exists() {
                println!("  - Data directory already exists: {}", data_dir.display());
            } else {
                println!("  - Create data directory: {}", data_dir.display());
            }
            if db_path.exists() {
                println!("  - Verify existing database: {}", db_path.display());
            } else {
                println!("  - Create database: {}", db_path.display());
            }
            if self.with_config {
                if config_path.exists() {
                    println!(
                        "  - Configuration file already exists (will not overwrite): {}",
                        config_path.display()
                    );
                } else {
                    println!("  - Create configuration file: {}", config_path.display());
                }
            }
            return Ok(());
        }

        let data_dir_created = !data_dir.exists();
        let database_created = !db_path.exists();
        fs::create_dir_all(&data_dir)?;
        Database::open(config.database_config(&data_dir))?;

        println!("Initialized rvpark in: {}", data_dir.display());
        if data_dir_created {
            println!("  - Created data directory");
        }
        if database_created {
            println!("  - Created database");
        } else {
            println!("  - Database already exists");
        }

        if self.with_config {
            if config_path.exists() {
                println!("  - Configuration file already exists (not overwritten)");
            } else {
                fs::write(&config_path, default_config_yaml())?;
                println!("  - Created default configuration file");
            }
        }

        global.logger.info(&format!("Database: {}", db_path.display()));
        Ok(())
    }
}
