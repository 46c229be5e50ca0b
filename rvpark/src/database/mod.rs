//! SQLite storage for the park.
//!
//! [`Database`] is a lightweight handle holding only configuration; each
//! call opens a scoped connection with foreign keys enforced. Data-access
//! functions are associated functions taking a borrowed connection, so the
//! same function serves a one-off read and a multi-statement transaction.
//!
//! # Examples
//!
//! ```no_run
//! use rvpark::database::{Database, DatabaseConfig};
//! use rvpark::model::NewCustomer;
//!
//! let db = Database::open(DatabaseConfig::new("/tmp/park.db")).unwrap();
//! let customer = NewCustomer::new("John", "Doe");
//! let id = db
//!     .with_connection(|conn| Database::insert_customer(conn, &customer))
//!     .unwrap();
//! let stored = db.with_connection(|conn| Database::get_customer(conn, id)).unwrap();
//! assert!(stored.is_some());
//! ```

mod config;
mod connection;
mod crm;
mod maintenance;
pub mod maintenance_schema;
pub mod migrations;
pub mod schema;

#[cfg(test)]
pub(crate) mod test_util;

pub use config::{
    default_data_dir, resolve_data_dir, resolve_database_path, DatabaseConfig,
    DEFAULT_BUSY_TIMEOUT, DEFAULT_DATABASE_FILE,
};
pub use connection::Database;

pub use migrations::{
    check_schema_compatibility, get_schema_version, initialize_crm_schema,
    initialize_maintenance_schema, initialize_schema,
};
