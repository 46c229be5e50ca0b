#![deny(missing_docs, unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

//! # rvpark
//!
//! A library for keeping an RV park's records: customers, campsites,
//! reservations, invoices and payments, plus facilities, assets and their
//! maintenance history, all in a local SQLite database.
//!
//! ## Core Types
//!
//! - [`CrmService`]: the booking and billing workflows
//! - [`Database`]: scoped connections and the data-access operations
//! - [`Outcome`] and [`ErrorTranslator`]: uniform success/error results
//! - [`Error`], [`ErrorKind`] and [`Result`]: error handling types
//! - [`Logger`], [`ErrorLog`] and [`ErrorSink`]: logging infrastructure
//!
//! ## Examples
//!
//! ```no_run
//! use chrono::NaiveDate;
//! use rvpark::model::{NewCustomer, NewSite};
//! use rvpark::{CrmService, Database, DatabaseConfig, ErrorLog, ErrorTranslator, FixedClock};
//!
//! let db = Database::open(DatabaseConfig::new("/tmp/park.db")).unwrap();
//! let service = CrmService::new(db, ErrorTranslator::new(ErrorLog::new("/tmp/crm_errors.log")))
//!     .with_clock(FixedClock::new(NaiveDate::from_ymd_opt(2025, 5, 18).unwrap()));
//!
//! let customer = service
//!     .create_customer(&NewCustomer::new("John", "Doe"))
//!     .into_success()
//!     .unwrap();
//! let site = service
//!     .add_site(&NewSite::new("A1", "Full Hookup", 50.0))
//!     .into_success()
//!     .unwrap();
//!
//! let booked = service.create_reservation(
//!     customer.customer_id,
//!     site.site_id,
//!     "2025-06-01",
//!     "2025-06-05",
//! );
//! assert!(booked.is_success());
//! ```

pub mod clock;
pub mod config;
pub mod database;
pub mod error;
pub mod logging;
pub mod model;
pub mod outcome;
pub mod service;
pub mod validation;

// Re-export key types at crate root for convenience
pub use clock::{Clock, FixedClock, SystemClock};
pub use config::{Config, ConfigBuilder};
pub use database::{Database, DatabaseConfig};
pub use error::{Error, ErrorKind, Result};
pub use logging::{init_logger, ErrorLog, ErrorSink, LogLevel, Logger};
pub use outcome::{
    AvailableSites, CustomerCreated, CustomerRecord, ErrorTranslator, InvoiceRecord, Outcome,
    PaymentRecorded, ReservationCreated, ReservationRecord, SiteCreated, SiteList,
};
pub use service::CrmService;
