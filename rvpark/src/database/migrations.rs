//! Database schema management and migrations.
//!
//! This module handles schema initialization and version checking. A fresh
//! file gets every table; an existing one must carry the version this
//! build understands.

use rusqlite::Connection;

use crate::error::{Error, Result};

use super::maintenance_schema::{MAINTENANCE_INDICES, MAINTENANCE_TABLES};
use super::schema::{
    CREATE_METADATA_TABLE, CRM_INDICES, CRM_TABLES, CURRENT_SCHEMA_VERSION,
    INSERT_SCHEMA_VERSION, SELECT_SCHEMA_VERSION,
};

fn execute_all(conn: &Connection, statements: &[&str]) -> Result<()> {
    for sql in statements {
        conn.execute(sql, [])?;
    }
    Ok(())
}

/// Creates the customer, site, reservation, invoice and payment tables.
///
/// Idempotent: every statement is `IF NOT EXISTS`.
///
/// # Errors
///
/// Returns an error if any SQL statement fails to execute.
pub fn initialize_crm_schema(conn: &Connection) -> Result<()> {
    execute_all(conn, &CRM_TABLES)?;
    execute_all(conn, &CRM_INDICES)
}

/// Creates the facility, asset and maintenance tables.
///
/// The maintenance request table references `customers`, so the CRM schema
/// should exist first when foreign keys are enforced.
///
/// # Errors
///
/// Returns an error if any SQL statement fails to execute.
pub fn initialize_maintenance_schema(conn: &Connection) -> Result<()> {
    execute_all(conn, &MAINTENANCE_TABLES)?;
    execute_all(conn, &MAINTENANCE_INDICES)
}

/// Initializes the full database schema and records its version.
///
/// # Errors
///
/// Returns an error if any SQL statement fails to execute.
///
/// # Examples
///
/// ```
/// use rusqlite::Connection;
/// use rvpark::database::migrations::{get_schema_version, initialize_schema};
///
/// let conn = Connection::open_in_memory().unwrap();
/// initialize_schema(&conn).unwrap();
/// assert_eq!(get_schema_version(&conn).unwrap(), 1);
/// ```
pub fn initialize_schema(conn: &Connection) -> Result<()> {
    conn.execute(CREATE_METADATA_TABLE, [])?;
    initialize_crm_schema(conn)?;
    initialize_maintenance_schema(conn)?;
    conn.execute(INSERT_SCHEMA_VERSION, [CURRENT_SCHEMA_VERSION])?;
    Ok(())
}

/// Gets the current schema version from the database.
///
/// # Errors
///
/// Returns an error if the query fails for reasons other than a missing
/// metadata table or row.
///
/// # Returns
///
/// - `Ok(0)` if the metadata table doesn't exist or has no version
/// - `Ok(version)` if a version is found
pub fn get_schema_version(conn: &Connection) -> Result<i32> {
    match conn.query_row(SELECT_SCHEMA_VERSION, [], |row| {
        let value: String = row.get(0)?;
        value.parse::<i32>().map_err(|e| {
            rusqlite::Error::FromSqlConversionFailure(0, rusqlite::types::Type::Text, Box::new(e))
        })
    }) {
        Ok(version) => Ok(version),
        Err(rusqlite::Error::QueryReturnedNoRows) => Ok(0),
        Err(rusqlite::Error::SqliteFailure(ref failure, _))
            if failure.code == rusqlite::ErrorCode::Unknown =>
        {
            // "no such table: metadata"
            Ok(0)
        }
        Err(e) => Err(e.into()),
    }
}

/// Checks schema compatibility and initializes a fresh database.
///
/// # Errors
///
/// Returns [`Error::UnsupportedSchemaVersion`] when the stored version is
/// not the one this build writes, or any error from initialization.
pub fn check_schema_compatibility(conn: &Connection) -> Result<()> {
    let version = get_schema_version(conn)?;

    if version == 0 {
        log::debug!("initializing schema version {CURRENT_SCHEMA_VERSION}");
        return initialize_schema(conn);
    }

    if version != CURRENT_SCHEMA_VERSION {
        return Err(Error::UnsupportedSchemaVersion {
            expected: CURRENT_SCHEMA_VERSION,
            found: version,
        });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_connection() -> Connection {
        let conn = Connection::open_in_memory().unwrap();
        conn.execute_batch("PRAGMA foreign_keys = ON").unwrap();
        conn
    }

    fn table_count(conn: &Connection) -> i32 {
        conn.query_row(
            "SELECT COUNT(*) FROM sqlite_master WHERE type = 'table' AND name NOT LIKE 'sqlite_%'",
            [],
            |row| row.get(0),
        )
        .unwrap()
    }

    #[test]
    fn test_initialize_schema() {
        let conn = create_test_connection();
        initialize_schema(&conn).unwrap();

        assert_eq!(get_schema_version(&conn).unwrap(), CURRENT_SCHEMA_VERSION);
        // metadata + 5 CRM + 5 maintenance
        assert_eq!(table_count(&conn), 11);

        let count: i32 = conn
            .query_row("SELECT COUNT(*) FROM rv_sites", [], |row| row.get(0))
            .unwrap();
        assert_eq!(count, 0);
    }

    #[test]
    fn test_initialize_is_idempotent() {
        let conn = create_test_connection();
        initialize_crm_schema(&conn).unwrap();
        initialize_crm_schema(&conn).unwrap();
        initialize_maintenance_schema(&conn).unwrap();
        initialize_maintenance_schema(&conn).unwrap();
        assert_eq!(table_count(&conn), 10);
    }

    #[test]
    fn test_get_schema_version_uninitialized() {
        let conn = create_test_connection();
        assert_eq!(get_schema_version(&conn).unwrap(), 0);
    }

    #[test]
    fn test_check_schema_compatibility_fresh_database() {
        let conn = create_test_connection();
        check_schema_compatibility(&conn).unwrap();
        assert_eq!(get_schema_version(&conn).unwrap(), CURRENT_SCHEMA_VERSION);

        // Second check on an initialized store is a no-op
        check_schema_compatibility(&conn).unwrap();
    }

    #[test]
    fn test_check_schema_compatibility_newer_version() {
        let conn = create_test_connection();
        initialize_schema(&conn).unwrap();
        conn.execute(
            "UPDATE metadata SET value = '999' WHERE key = 'schema_version'",
            [],
        )
        .unwrap();

        let err = check_schema_compatibility(&conn).unwrap_err();
        assert!(matches!(
            err,
            Error::UnsupportedSchemaVersion {
                expected: CURRENT_SCHEMA_VERSION,
                found: 999
            }
        ));
    }

    #[test]
    fn test_reservation_date_check_constraint() {
        let conn = create_test_connection();
        initialize_schema(&conn).unwrap();
        conn.execute_batch(
            "INSERT INTO customers (first_name, last_name) VALUES ('A', 'B');
             INSERT INTO rv_sites (site_number, site_type, daily_rate) VALUES ('A1', 'Full', 50.0);",
        )
        .unwrap();

        let result = conn.execute(
            "INSERT INTO reservations (customer_id, site_id, check_in_date, check_out_date, status, total_amount)
             VALUES (1, 1, '2025-06-05', '2025-06-01', 'Confirmed', 0)",
            [],
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_maintenance_target_check_constraint() {
        let conn = create_test_connection();
        initialize_schema(&conn).unwrap();

        let result = conn.execute(
            "INSERT INTO maintenance_requests (request_date, priority, status, description)
             VALUES ('2025-06-01', 'High', 'Open', 'Leak')",
            [],
        );
        let err = result.unwrap_err();
        assert!(err.to_string().contains("CHECK constraint failed"));
    }

    #[test]
    fn test_schema_creates_indices() {
        let conn = create_test_connection();
        initialize_schema(&conn).unwrap();

        let index_count: i32 = conn
            .query_row(
                "SELECT COUNT(*) FROM sqlite_master WHERE type = 'index' AND name LIKE 'idx_%'",
                [],
                |row| row.get(0),
            )
            .unwrap();
        assert_eq!(index_count, 5);
    }
}
