//! Scoped database connections.
//!
//! [`Database`] holds only configuration. Every operation opens its own
//! connection, applies the per-connection pragmas, runs, and drops the
//! connection again, on success and on failure alike.

use rusqlite::{Connection, OpenFlags, Transaction, TransactionBehavior};

use crate::error::{store_error, Error, Result};

use super::config::DatabaseConfig;

/// Handle to the park database.
///
/// # Examples
///
/// ```no_run
/// use rvpark::database::{Database, DatabaseConfig};
///
/// let db = Database::open(DatabaseConfig::new("/tmp/park.db")).unwrap();
/// let sites = db.with_connection(|conn| Database::list_sites(conn)).unwrap();
/// println!("{} sites", sites.len());
/// ```
#[derive(Debug, Clone)]
pub struct Database {
    config: DatabaseConfig,
}

impl Database {
    /// Opens the database, creating and initializing it when needed.
    ///
    /// This will:
    /// - Create the parent directory if `auto_create` is enabled
    /// - Switch a writable database to WAL journaling
    /// - Initialize a fresh schema or verify an existing one's version
    ///
    /// The connection used for these checks is closed before returning.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Connection`] if the file cannot be opened, or a
    /// schema error if the stored version is unsupported.
    pub fn open(config: DatabaseConfig) -> Result<Self> {
        if config.auto_create && !config.path.exists() {
            if let Some(parent) = config.path.parent() {
                if !parent.as_os_str().is_empty() {
                    std::fs::create_dir_all(parent)?;
                }
            }
        }

        let db = Self { config };
        let conn = db.connect()?;
        if !db.config.read_only {
            let _: String = conn
                .query_row("PRAGMA journal_mode = WAL", [], |row| row.get(0))
                .map_err(store_error("Failed to configure database"))?;
        }
        super::migrations::check_schema_compatibility(&conn)?;
        log::debug!("opened database at {}", db.config.path.display());

        Ok(db)
    }

    /// Returns the configuration this handle was opened with.
    #[must_use]
    pub const fn config(&self) -> &DatabaseConfig {
        &self.config
    }

    /// Opens a fresh connection with foreign keys enforced and the busy
    /// timeout applied.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Connection`] if the database cannot be opened.
    pub fn connect(&self) -> Result<Connection> {
        let flags = if self.config.read_only {
            OpenFlags::SQLITE_OPEN_READ_ONLY | OpenFlags::SQLITE_OPEN_NO_MUTEX
        } else if self.config.auto_create {
            OpenFlags::SQLITE_OPEN_READ_WRITE
                | OpenFlags::SQLITE_OPEN_CREATE
                | OpenFlags::SQLITE_OPEN_NO_MUTEX
        } else {
            OpenFlags::SQLITE_OPEN_READ_WRITE | OpenFlags::SQLITE_OPEN_NO_MUTEX
        };

        let conn = Connection::open_with_flags(&self.config.path, flags).map_err(|err| {
            Error::Connection {
                message: format!("{}: {err}", self.config.path.display()),
            }
        })?;
        conn.execute_batch("PRAGMA foreign_keys = ON")
            .map_err(store_error("Failed to configure database"))?;
        conn.busy_timeout(self.config.busy_timeout)
            .map_err(store_error("Failed to configure database"))?;

        Ok(conn)
    }

    /// Runs `f` on a connection scoped to this call.
    ///
    /// # Errors
    ///
    /// Returns any error from connecting or from `f`.
    pub fn with_connection<T, F>(&self, f: F) -> Result<T>
    where
        F: FnOnce(&Connection) -> Result<T>,
    {
        let conn = self.connect()?;
        f(&conn)
    }

    /// Runs `f` inside an immediate transaction on a scoped connection.
    ///
    /// The transaction commits only if `f` succeeds; otherwise it is rolled
    /// back when dropped. `operation` names the work for error messages.
    ///
    /// # Errors
    ///
    /// Returns any error from connecting, from `f`, or from commit.
    pub fn with_transaction<T, F>(&self, operation: &'static str, f: F) -> Result<T>
    where
        F: FnOnce(&Transaction<'_>) -> Result<T>,
    {
        let mut conn = self.connect()?;
        let tx = conn
            .transaction_with_behavior(TransactionBehavior::Immediate)
            .map_err(store_error(operation))?;
        let value = f(&tx)?;
        tx.commit().map_err(store_error(operation))?;
        Ok(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use tempfile::tempdir;

    #[test]
    fn test_database_open() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("park.db");

        let db = Database::open(DatabaseConfig::new(&path)).unwrap();
        assert!(path.exists());

        let journal_mode: String = db
            .with_connection(|conn| {
                Ok(conn.query_row("PRAGMA journal_mode", [], |row| row.get(0))?)
            })
            .unwrap();
        assert_eq!(journal_mode.to_lowercase(), "wal");
    }

    #[test]
    fn test_database_auto_create_directory() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("subdir").join("park.db");

        let _db = Database::open(DatabaseConfig::new(&path)).unwrap();
        assert!(path.exists());
    }

    #[test]
    fn test_connections_enforce_foreign_keys() {
        let dir = tempdir().unwrap();
        let db = Database::open(DatabaseConfig::new(dir.path().join("park.db"))).unwrap();

        let enabled: i64 = db
            .with_connection(|conn| Ok(conn.query_row("PRAGMA foreign_keys", [], |row| row.get(0))?))
            .unwrap();
        assert_eq!(enabled, 1);
    }

    #[test]
    fn test_missing_file_without_auto_create() {
        let dir = tempdir().unwrap();
        let config = DatabaseConfig::new(dir.path().join("absent.db")).without_auto_create();

        let err = Database::open(config).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Connection);
    }

    #[test]
    fn test_read_only_rejects_writes() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("park.db");
        Database::open(DatabaseConfig::new(&path)).unwrap();

        let db = Database::open(DatabaseConfig::new(&path).read_only()).unwrap();
        let result = db.with_connection(|conn| {
            conn.execute("CREATE TABLE scratch (id INTEGER)", [])?;
            Ok(())
        });
        assert!(result.is_err());
    }

    #[test]
    fn test_transaction_rolls_back_on_error() {
        let dir = tempdir().unwrap();
        let db = Database::open(DatabaseConfig::new(dir.path().join("park.db"))).unwrap();

        let result: Result<()> = db.with_transaction("Failed to seed", |tx| {
            tx.execute(
                "INSERT INTO rv_sites (site_number, site_type, daily_rate) VALUES ('A1', 'Full', 40.0)",
                [],
            )?;
            Err(Error::not_found("anything"))
        });
        assert!(result.is_err());

        let count: i64 = db
            .with_connection(|conn| Ok(conn.query_row("SELECT COUNT(*) FROM rv_sites", [], |row| row.get(0))?))
            .unwrap();
        assert_eq!(count, 0);
    }
}
