//! Uniform results for the workflow layer.
//!
//! Every public workflow call returns an [`Outcome`]: either a success
//! payload or an error message, never a raw [`Error`]. The
//! [`ErrorTranslator`] is the single place where failures are turned into
//! messages and written to the error log.
//!
//! Serialized, an outcome is a flat object tagged by `status`:
//!
//! ```text
//! {"status":"success","customer_id":1}
//! {"status":"error","message":"Failed to create customer: Invalid email format"}
//! ```

use std::fmt;

use serde::Serialize;

use crate::error::{Error, ErrorKind};
use crate::logging::ErrorSink;
use crate::model::{Customer, Invoice, Reservation, Site};

/// Result of a workflow operation.
///
/// # Examples
///
/// ```
/// use rvpark::{CustomerCreated, Outcome};
///
/// let outcome = Outcome::Success(CustomerCreated { customer_id: 7 });
/// let json = serde_json::to_string(&outcome).unwrap();
/// assert_eq!(json, r#"{"status":"success","customer_id":7}"#);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum Outcome<T> {
    /// The operation completed.
    Success(T),
    /// The operation failed; nothing further was written.
    Error {
        /// `"<context>: <reason>"`.
        message: String,
        /// Classification of the failure, for callers that branch on it.
        #[serde(skip)]
        kind: ErrorKind,
    },
}

impl<T> Outcome<T> {
    /// Whether this is a success.
    #[must_use]
    pub const fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    /// The success payload, if any.
    #[must_use]
    pub const fn success(&self) -> Option<&T> {
        match self {
            Self::Success(value) => Some(value),
            Self::Error { .. } => None,
        }
    }

    /// Consumes the outcome, returning the success payload if any.
    #[must_use]
    pub fn into_success(self) -> Option<T> {
        match self {
            Self::Success(value) => Some(value),
            Self::Error { .. } => None,
        }
    }

    /// The error message, if any.
    #[must_use]
    pub fn error_message(&self) -> Option<&str> {
        match self {
            Self::Success(_) => None,
            Self::Error { message, .. } => Some(message),
        }
    }

    /// The error classification, if any.
    #[must_use]
    pub const fn error_kind(&self) -> Option<ErrorKind> {
        match self {
            Self::Success(_) => None,
            Self::Error { kind, .. } => Some(*kind),
        }
    }
}

/// Payload of a successful `create_customer`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CustomerCreated {
    /// The new customer's id.
    pub customer_id: i64,
}

/// Payload of a successful `create_reservation`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ReservationCreated {
    /// The new reservation's id.
    pub reservation_id: i64,
    /// The id of the invoice raised for it.
    pub invoice_id: i64,
}

/// Payload of a successful `record_payment`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PaymentRecorded {
    /// The new payment's id.
    pub payment_id: i64,
}

/// Payload of a successful `get_available_sites`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AvailableSites {
    /// Bookable sites, in store order.
    pub sites: Vec<Site>,
}

/// Payload of a successful `add_site`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SiteCreated {
    /// The new site's id.
    pub site_id: i64,
}

/// Payload of a successful `list_sites`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SiteList {
    /// Every site, active or not.
    pub sites: Vec<Site>,
}

/// Payload of a successful `get_customer`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CustomerRecord {
    /// The stored customer.
    pub customer: Customer,
}

/// Payload of a successful `get_reservation`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReservationRecord {
    /// The stored reservation.
    pub reservation: Reservation,
}

/// Payload of a successful `get_invoice`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InvoiceRecord {
    /// The stored invoice.
    pub invoice: Invoice,
}

/// Turns failures into [`Outcome::Error`] values and records them.
///
/// The message is `"<context>: <reason>"`, where the reason for a
/// validation failure is the bare rule message and for anything else the
/// error's display text. Recording is best effort: a sink failure is
/// reported through `log::warn!` and never changes the outcome.
pub struct ErrorTranslator {
    sink: Box<dyn ErrorSink>,
}

impl fmt::Debug for ErrorTranslator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ErrorTranslator").finish_non_exhaustive()
    }
}

impl ErrorTranslator {
    /// Creates a translator that records failures to `sink`.
    #[must_use]
    pub fn new(sink: impl ErrorSink + 'static) -> Self {
        Self {
            sink: Box::new(sink),
        }
    }

    /// Converts one failure into an error outcome, recording it first.
    pub fn handle_error<T>(&self, context: &str, err: &Error) -> Outcome<T> {
        let reason = match err {
            Error::Validation { message, .. } => message.clone(),
            other => other.to_string(),
        };

        if let Err(sink_err) = self.sink.record(context, &reason) {
            log::warn!("could not record error for '{context}': {sink_err}");
        }

        Outcome::Error {
            message: format!("{context}: {reason}"),
            kind: err.kind(),
        }
    }

    /// Wraps `result` as an outcome, translating any error under `context`.
    pub fn translate<T>(&self, context: &str, result: Result<T, Error>) -> Outcome<T> {
        match result {
            Ok(value) => Outcome::Success(value),
            Err(err) => self.handle_error(context, &err),
        }
    }
}
