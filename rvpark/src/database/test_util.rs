//! Shared test utilities for database unit tests.

use chrono::NaiveDate;
use tempfile::{tempdir, TempDir};

use crate::database::{Database, DatabaseConfig};
use crate::model::{NewCustomer, NewFacility, NewSite};

/// Creates a database in a fresh temporary directory.
///
/// The directory is returned alongside so it lives as long as the test.
///
/// # Panics
///
/// Panics if the temporary directory or database cannot be created.
#[must_use]
pub fn create_test_database() -> (TempDir, Database) {
    let dir = tempdir().unwrap();
    let db = Database::open(DatabaseConfig::new(dir.path().join("park.db"))).unwrap();
    (dir, db)
}

/// Shorthand for a calendar date.
///
/// # Panics
///
/// Panics on an impossible date.
#[must_use]
pub fn day(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

/// Inserts a customer with the given first name and returns its id.
///
/// # Panics
///
/// Panics if the insert fails.
#[must_use]
pub fn seed_customer(db: &Database, first_name: &str) -> i64 {
    let customer = NewCustomer::new(first_name, "Tester");
    db.with_connection(|conn| Database::insert_customer(conn, &customer))
        .unwrap()
}

/// Inserts a site and returns its id.
///
/// # Panics
///
/// Panics if the insert fails.
#[must_use]
pub fn seed_site(db: &Database, number: &str, daily_rate: f64, is_active: bool) -> i64 {
    let site = NewSite::new(number, "Full Hookup", daily_rate).active(is_active);
    db.with_connection(|conn| Database::insert_site(conn, &site))
        .unwrap()
}

/// Inserts a facility and returns its id.
///
/// # Panics
///
/// Panics if the insert fails.
#[must_use]
pub fn seed_facility(db: &Database, name: &str) -> i64 {
    let facility = NewFacility::new(name, "Restroom");
    db.with_connection(|conn| Database::insert_facility(conn, &facility))
        .unwrap()
}
