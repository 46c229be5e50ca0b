//! Common test utilities for CLI integration tests.
//!
//! This module provides shared helpers for CLI testing, including:
//! - Test environment setup with temporary directories
//! - Command builder helpers for common patterns
//! - Seeding helpers that parse the ids commands print

use assert_cmd::Command;
use chrono::{Days, Local};
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Environment variables that would leak host configuration into tests.
const RVPARK_ENV_VARS: [&str; 6] = [
    "RVPARK_DATA_DIR",
    "RVPARK_DATABASE_FILE",
    "RVPARK_BUSY_TIMEOUT_MS",
    "RVPARK_ERROR_LOG",
    "RVPARK_REJECT_OVERLAPS",
    "RVPARK_LOG_MODE",
];

/// Test environment with isolated data directory.
///
/// This struct provides an isolated test environment with:
/// - A temporary directory for test files
/// - A separate data directory for the rvpark database
/// - Helper methods for common CLI operations
pub struct TestEnv {
    /// Temporary directory (kept alive for the duration of the test)
    #[allow(dead_code)]
    temp_dir: TempDir,
    /// Path to the temporary directory
    pub temp_path: PathBuf,
    /// Path to the rvpark data directory
    pub data_dir: PathBuf,
}

#[allow(dead_code)]
impl TestEnv {
    /// Create a new test environment.
    ///
    /// The data directory path is not created; rvpark creates it.
    pub fn new() -> Self {
        let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
        let temp_path = temp_dir.path().to_path_buf();
        let data_dir = temp_path.join("rvpark-data");

        Self {
            temp_dir,
            temp_path,
            data_dir,
        }
    }

    /// Get a bare command builder with a clean `RVPARK_*` environment.
    pub fn command_bare(&self) -> Command {
        let mut cmd = Command::cargo_bin("rvpark").expect("Failed to find rvpark binary");
        for var in RVPARK_ENV_VARS {
            cmd.env_remove(var);
        }
        cmd
    }

    /// Get a command builder with the data directory pre-configured.
    pub fn command(&self) -> Command {
        let mut cmd = self.command_bare();
        cmd.arg("--data-dir").arg(&self.data_dir);
        cmd
    }

    /// Get the temp path.
    pub fn path(&self) -> &Path {
        &self.temp_path
    }

    /// Path of the default error log.
    pub fn error_log_path(&self) -> PathBuf {
        self.data_dir.join("crm_errors.log")
    }

    /// Contents of the error log, or an empty string.
    pub fn error_log(&self) -> String {
        std::fs::read_to_string(self.error_log_path()).unwrap_or_default()
    }

    /// Run a command that must succeed and return its stdout.
    ///
    /// # Panics
    /// Panics if the command fails.
    pub fn run(&self, args: &[&str]) -> String {
        let output = self
            .command()
            .args(args)
            .output()
            .expect("Failed to run rvpark");

        assert!(
            output.status.success(),
            "rvpark {args:?} failed: {}",
            String::from_utf8_lossy(&output.stderr)
        );

        String::from_utf8(output.stdout).expect("Invalid UTF-8 in output")
    }

    /// Run a command that prints a single id and return it.
    pub fn run_id(&self, args: &[&str]) -> i64 {
        parse_id(&self.run(args))
    }

    /// Add a customer and return its id.
    pub fn add_customer(&self, first_name: &str, last_name: &str) -> i64 {
        self.run_id(&["add-customer", first_name, last_name])
    }

    /// Add an active site and return its id.
    pub fn add_site(&self, number: &str, daily_rate: &str) -> i64 {
        self.run_id(&["add-site", number, "Full Hookup", daily_rate])
    }

    /// Book a site and return `(reservation_id, invoice_id)`.
    pub fn reserve(&self, customer_id: i64, site_id: i64, check_in: &str, check_out: &str) -> (i64, i64) {
        let output = self.run(&[
            "reserve",
            &customer_id.to_string(),
            &site_id.to_string(),
            check_in,
            check_out,
        ]);
        let mut ids = output.split_whitespace().map(parse_id);
        (
            ids.next().expect("missing reservation id"),
            ids.next().expect("missing invoice id"),
        )
    }

    /// Add a facility and return its id.
    pub fn add_facility(&self, name: &str) -> i64 {
        self.run_id(&["add-facility", name, "Restroom"])
    }
}

/// Parse a single id from command output.
#[allow(dead_code)]
pub fn parse_id(output: &str) -> i64 {
    output
        .trim()
        .parse()
        .unwrap_or_else(|_| panic!("Output is not an id: {output:?}"))
}

/// A `YYYY-MM-DD` date `offset` days from today.
#[allow(dead_code)]
pub fn days_from_today(offset: u64) -> String {
    (Local::now().date_naive() + Days::new(offset))
        .format("%Y-%m-%d")
        .to_string()
}

/// A `YYYY-MM-DD` date `offset` days before today.
#[allow(dead_code)]
pub fn days_ago(offset: u64) -> String {
    (Local::now().date_naive() - Days::new(offset))
        .format("%Y-%m-%d")
        .to_string()
}
