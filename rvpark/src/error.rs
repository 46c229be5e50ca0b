//! Error types for the rvpark library.
//!
//! This module provides the error hierarchy for all operations in the
//! rvpark library, using `thiserror` for ergonomic error handling. Every
//! error maps onto a small closed set of [`ErrorKind`]s so callers can
//! branch on the kind of failure instead of parsing message text.

use std::fmt;

use rusqlite::ErrorCode;
use thiserror::Error;

/// Result type alias for operations that may fail with an rvpark error.
///
/// # Examples
///
/// ```
/// use rvpark::{Error, Result};
///
/// fn example_operation() -> Result<i64> {
///     Ok(42)
/// }
/// ```
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for the rvpark library.
#[derive(Debug, Error)]
pub enum Error {
    /// A field-level validation rule was violated.
    #[error("validation error for '{field}': {message}")]
    Validation {
        /// The field that failed validation.
        field: String,
        /// A description of the validation failure.
        message: String,
    },

    /// A referenced record does not exist.
    #[error("not found: {resource}")]
    NotFound {
        /// The resource that was not found.
        resource: String,
    },

    /// The store rejected a write because of a constraint.
    #[error("{operation}: {message}")]
    Constraint {
        /// The operation that was attempted.
        operation: String,
        /// The store's message describing the violated constraint.
        message: String,
    },

    /// The requested site is already booked for an overlapping range.
    #[error("booking conflict: {details}")]
    BookingConflict {
        /// Details about the conflicting booking.
        details: String,
    },

    /// The store could not be reached or refused the connection.
    #[error("database connection failed: {message}")]
    Connection {
        /// The reason the connection failed.
        message: String,
    },

    /// A store failure that is neither a constraint nor a connection problem.
    #[error("{operation}: {source}")]
    Store {
        /// The operation that was attempted.
        operation: String,
        /// The underlying store error.
        #[source]
        source: rusqlite::Error,
    },

    /// A database error outside of a named data-access operation.
    #[error("database error: {0}")]
    Database(#[from] rusqlite::Error),

    /// A configuration file could not be parsed.
    #[error("configuration error: {0}")]
    Configuration(#[from] serde_yaml::Error),

    /// An I/O error occurred.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// An unsupported schema version was encountered.
    #[error("unsupported schema version: expected {expected}, found {found}")]
    UnsupportedSchemaVersion {
        /// The expected schema version.
        expected: i32,
        /// The schema version found in the database.
        found: i32,
    },
}

/// Closed classification of [`Error`] values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Input failed a field-level rule.
    Validation,
    /// A referenced record does not exist.
    NotFound,
    /// The store rejected a write.
    Constraint,
    /// The store is unreachable.
    Connection,
    /// Anything else: I/O, configuration, unclassified store failures.
    Internal,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Validation => write!(f, "validation"),
            Self::NotFound => write!(f, "not-found"),
            Self::Constraint => write!(f, "constraint"),
            Self::Connection => write!(f, "connection"),
            Self::Internal => write!(f, "internal"),
        }
    }
}

impl Error {
    /// Creates a validation error for the given field.
    ///
    /// # Examples
    ///
    /// ```
    /// use rvpark::{Error, ErrorKind};
    ///
    /// let err = Error::validation("email", "Invalid email format");
    /// assert_eq!(err.kind(), ErrorKind::Validation);
    /// assert!(err.to_string().contains("Invalid email format"));
    /// ```
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Validation {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Creates a not-found error for the given resource description.
    pub fn not_found(resource: impl Into<String>) -> Self {
        Self::NotFound {
            resource: resource.into(),
        }
    }

    /// Wraps a store error raised while performing `operation`.
    ///
    /// Constraint violations become [`Error::Constraint`] carrying the
    /// store's own message, failures to open or reach the database become
    /// [`Error::Connection`], and everything else is kept as
    /// [`Error::Store`]. Lock contention (busy or locked) is a store error,
    /// not a connection failure.
    #[must_use]
    pub fn from_store(operation: &str, err: rusqlite::Error) -> Self {
        match &err {
            rusqlite::Error::SqliteFailure(failure, message) => match failure.code {
                ErrorCode::ConstraintViolation => Self::Constraint {
                    operation: operation.to_string(),
                    message: message.clone().unwrap_or_else(|| failure.to_string()),
                },
                ErrorCode::CannotOpen
                | ErrorCode::NotADatabase
                | ErrorCode::PermissionDenied => Self::Connection {
                    message: format!("{operation}: {err}"),
                },
                _ => Self::Store {
                    operation: operation.to_string(),
                    source: err,
                },
            },
            _ => Self::Store {
                operation: operation.to_string(),
                source: err,
            },
        }
    }

    /// Returns the closed classification of this error.
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Validation { .. } => ErrorKind::Validation,
            Self::NotFound { .. } => ErrorKind::NotFound,
            Self::Constraint { .. } | Self::BookingConflict { .. } => ErrorKind::Constraint,
            Self::Connection { .. } => ErrorKind::Connection,
            Self::Store { .. }
            | Self::Database(_)
            | Self::Configuration(_)
            | Self::Io(_)
            | Self::UnsupportedSchemaVersion { .. } => ErrorKind::Internal,
        }
    }
}

/// Returns a closure that wraps store errors for the named operation.
///
/// Intended for `map_err` on rusqlite results inside the data-access layer.
pub(crate) fn store_error(operation: &'static str) -> impl Fn(rusqlite::Error) -> Error {
    move |err| Error::from_store(operation, err)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rusqlite::Connection;

    #[test]
    fn test_validation_error() {
        let err = Error::validation("first_name", "must be non-empty");
        let display = format!("{err}");
        assert!(display.contains("validation error"));
        assert!(display.contains("first_name"));
        assert!(display.contains("must be non-empty"));
        assert_eq!(err.kind(), ErrorKind::Validation);
    }

    #[test]
    fn test_not_found_error() {
        let err = Error::not_found("site 99");
        assert_eq!(format!("{err}"), "not found: site 99");
        assert_eq!(err.kind(), ErrorKind::NotFound);
    }

    #[test]
    fn test_booking_conflict_is_constraint() {
        let err = Error::BookingConflict {
            details: "site 1 is booked".to_string(),
        };
        assert!(format!("{err}").contains("booking conflict"));
        assert_eq!(err.kind(), ErrorKind::Constraint);
    }

    #[test]
    fn test_from_store_unique_violation() {
        let conn = Connection::open_in_memory().unwrap();
        conn.execute_batch("CREATE TABLE t (email TEXT UNIQUE); INSERT INTO t VALUES ('a@b.c');")
            .unwrap();
        let raw = conn
            .execute("INSERT INTO t VALUES ('a@b.c')", [])
            .unwrap_err();

        let err = Error::from_store("Failed to add customer", raw);
        assert_eq!(err.kind(), ErrorKind::Constraint);
        let display = err.to_string();
        assert!(display.starts_with("Failed to add customer: "));
        assert!(display.contains("UNIQUE constraint failed"));
    }

    #[test]
    fn test_from_store_other_failure() {
        let conn = Connection::open_in_memory().unwrap();
        let raw = conn.execute("SELECT * FROM missing_table", []).unwrap_err();

        let err = Error::from_store("Failed to retrieve customer", raw);
        assert_eq!(err.kind(), ErrorKind::Internal);
        assert!(err.to_string().contains("Failed to retrieve customer"));
    }

    #[test]
    fn test_from_store_lock_contention_is_not_connection() {
        for code in [rusqlite::ffi::SQLITE_BUSY, rusqlite::ffi::SQLITE_LOCKED] {
            let raw = rusqlite::Error::SqliteFailure(rusqlite::ffi::Error::new(code), None);
            let err = Error::from_store("Failed to create reservation", raw);
            assert!(matches!(err, Error::Store { .. }), "{err:?}");
            assert_eq!(err.kind(), ErrorKind::Internal);
        }
    }

    #[test]
    fn test_from_store_query_returned_no_rows() {
        let err = Error::from_store("Failed to look up site", rusqlite::Error::QueryReturnedNoRows);
        assert!(matches!(err, Error::Store { .. }));
    }

    #[test]
    fn test_connection_error_kind() {
        let err = Error::Connection {
            message: "unable to open database file".to_string(),
        };
        assert!(err.to_string().contains("database connection failed"));
        assert_eq!(err.kind(), ErrorKind::Connection);
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: Error = io_err.into();
        assert!(format!("{err}").contains("I/O error"));
        assert_eq!(err.kind(), ErrorKind::Internal);
    }

    #[test]
    fn test_unsupported_schema_version_error() {
        let err = Error::UnsupportedSchemaVersion {
            expected: 1,
            found: 2,
        };
        let display = format!("{err}");
        assert!(display.contains("expected 1"));
        assert!(display.contains("found 2"));
    }

    #[test]
    fn test_error_kind_display() {
        assert_eq!(ErrorKind::Validation.to_string(), "validation");
        assert_eq!(ErrorKind::NotFound.to_string(), "not-found");
        assert_eq!(ErrorKind::Connection.to_string(), "connection");
    }
}
