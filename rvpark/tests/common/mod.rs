//! Common test utilities for integration tests.
//!
//! This module provides a disposable park (database, error log and a
//! service pinned to a fixed day) plus small seeding helpers.

pub mod database;

use std::path::PathBuf;

use chrono::NaiveDate;
use tempfile::TempDir;

use rvpark::model::{NewCustomer, NewSite};
use rvpark::{CrmService, Database, DatabaseConfig, ErrorLog, ErrorTranslator, FixedClock};

/// The day every test park believes it is.
#[allow(dead_code)]
pub fn today() -> NaiveDate {
    date(2025, 5, 18)
}

/// Shorthand for a calendar date.
#[allow(dead_code)]
pub fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

/// A park living in its own temporary directory.
///
/// Everything is removed when the value is dropped.
#[allow(dead_code)]
pub struct TestPark {
    pub dir: TempDir,
    pub service: CrmService,
}

#[allow(dead_code)]
impl TestPark {
    /// Creates an empty park with overlap checking off.
    pub fn new() -> Self {
        Self::with_reject_overlaps(false)
    }

    /// Creates an empty park with the given overlap policy.
    pub fn with_reject_overlaps(reject: bool) -> Self {
        let dir = tempfile::tempdir().unwrap();
        let db = Database::open(DatabaseConfig::new(dir.path().join("park.db"))).unwrap();
        let log = ErrorLog::new(dir.path().join("crm_errors.log"));
        let service = CrmService::new(db, ErrorTranslator::new(log))
            .with_clock(FixedClock::new(today()))
            .with_reject_overlaps(reject);
        Self { dir, service }
    }

    pub fn db(&self) -> &Database {
        self.service.database()
    }

    pub fn error_log_path(&self) -> PathBuf {
        self.dir.path().join("crm_errors.log")
    }

    /// Contents of the error log, or an empty string if nothing was logged.
    pub fn error_log(&self) -> String {
        std::fs::read_to_string(self.error_log_path()).unwrap_or_default()
    }

    /// Adds a customer through the workflow and returns its id.
    pub fn customer(&self, first_name: &str, last_name: &str) -> i64 {
        self.service
            .create_customer(&NewCustomer::new(first_name, last_name))
            .into_success()
            .unwrap()
            .customer_id
    }

    /// Adds an active site and returns its id.
    pub fn site(&self, number: &str, daily_rate: f64) -> i64 {
        self.service
            .add_site(&NewSite::new(number, "Full Hookup", daily_rate))
            .into_success()
            .unwrap()
            .site_id
    }

    /// Adds an inactive site and returns its id.
    pub fn inactive_site(&self, number: &str, daily_rate: f64) -> i64 {
        self.service
            .add_site(&NewSite::new(number, "Full Hookup", daily_rate).active(false))
            .into_success()
            .unwrap()
            .site_id
    }

    /// Number of rows in `table`.
    pub fn count(&self, table: &str) -> i64 {
        database::count_rows(self.db(), table)
    }
}
