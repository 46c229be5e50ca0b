//! Integration tests for opening, initializing and reopening the store.

mod common;

use std::path::Path;

use common::database::{count_rows, table_names};
use rvpark::database::{Database, DatabaseConfig};
use rvpark::model::{NewCustomer, NewSite};
use rvpark::{Error, ErrorKind};
use tempfile::TempDir;

fn open(path: &Path) -> Database {
    Database::open(DatabaseConfig::new(path)).unwrap()
}

#[test]
fn test_open_creates_every_table() {
    let dir = TempDir::new().unwrap();
    let db = open(&dir.path().join("nested/data/park.db"));

    assert_eq!(
        table_names(&db),
        [
            "assets",
            "customers",
            "facilities",
            "invoices",
            "maintenance_logs",
            "maintenance_requests",
            "maintenance_schedules",
            "metadata",
            "payments",
            "reservations",
            "rv_sites",
        ]
    );
}

#[test]
fn test_rows_survive_reopen() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("park.db");

    let customer_id = {
        let db = open(&path);
        db.with_connection(|conn| {
            Database::insert_site(conn, &NewSite::new("A1", "Full Hookup", 50.0))?;
            Database::insert_customer(conn, &NewCustomer::new("John", "Doe"))
        })
        .unwrap()
    };

    let db = open(&path);
    let customer = db
        .with_connection(|conn| Database::get_customer(conn, customer_id))
        .unwrap()
        .unwrap();
    assert_eq!(customer.full_name(), "John Doe");
    assert_eq!(count_rows(&db, "rv_sites"), 1);
}

#[test]
fn test_newer_schema_version_rejected() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("park.db");
    {
        let db = open(&path);
        db.with_connection(|conn| {
            conn.execute(
                "UPDATE metadata SET value = '7' WHERE key = 'schema_version'",
                [],
            )?;
            Ok(())
        })
        .unwrap();
    }

    let err = Database::open(DatabaseConfig::new(&path)).unwrap_err();
    assert!(matches!(
        err,
        Error::UnsupportedSchemaVersion {
            expected: 1,
            found: 7
        }
    ));
}

#[test]
fn test_missing_file_without_auto_create() {
    let dir = TempDir::new().unwrap();

    let err = Database::open(DatabaseConfig::new(dir.path().join("absent.db")).without_auto_create())
        .unwrap_err();

    assert_eq!(err.kind(), ErrorKind::Connection);
    assert!(!dir.path().join("absent.db").exists());
}

#[test]
fn test_failed_transaction_leaves_no_rows() {
    let dir = TempDir::new().unwrap();
    let db = open(&dir.path().join("park.db"));

    let result: rvpark::Result<()> = db.with_transaction("Failed to add customer", |tx| {
        Database::insert_customer(tx, &NewCustomer::new("John", "Doe"))?;
        Err(Error::not_found("anything"))
    });

    assert!(result.is_err());
    assert_eq!(count_rows(&db, "customers"), 0);
}

#[test]
fn test_separate_handles_see_each_others_writes() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("park.db");
    let writer = open(&path);
    let reader = writer.clone();

    writer
        .with_connection(|conn| Database::insert_customer(conn, &NewCustomer::new("Ann", "Lee")))
        .unwrap();

    assert_eq!(count_rows(&reader, "customers"), 1);
}
