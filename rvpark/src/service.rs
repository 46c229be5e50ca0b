//! The workflow layer: one method per business action.
//!
//! Each action validates first, then does its reads and writes on a single
//! scoped connection (multi-statement actions inside one immediate
//! transaction), and finally hands any failure to the [`ErrorTranslator`].
//! Callers only ever see an [`Outcome`].

use std::fmt;
use std::path::Path;

use chrono::NaiveDate;

use crate::clock::{Clock, SystemClock};
use crate::config::Config;
use crate::database::Database;
use crate::error::{Error, Result};
use crate::logging::ErrorLog;
use crate::model::{
    NewCustomer, NewInvoice, NewPayment, NewReservation, NewSite, ReservationStatus,
};
use crate::outcome::{
    AvailableSites, CustomerCreated, CustomerRecord, ErrorTranslator, InvoiceRecord, Outcome,
    PaymentRecorded, ReservationCreated, ReservationRecord, SiteCreated, SiteList,
};
use crate::validation;

/// Customer, booking and billing workflows over one database.
///
/// # Examples
///
/// ```no_run
/// use rvpark::{CrmService, Database, DatabaseConfig, ErrorLog, ErrorTranslator};
/// use rvpark::model::NewCustomer;
///
/// let db = Database::open(DatabaseConfig::new("/tmp/park.db")).unwrap();
/// let service = CrmService::new(db, ErrorTranslator::new(ErrorLog::new("/tmp/crm_errors.log")));
///
/// let outcome = service.create_customer(&NewCustomer::new("John", "Doe"));
/// assert!(outcome.is_success());
/// ```
pub struct CrmService {
    db: Database,
    translator: ErrorTranslator,
    clock: Box<dyn Clock>,
    reject_overlaps: bool,
}

impl fmt::Debug for CrmService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CrmService")
            .field("db", &self.db)
            .field("reject_overlaps", &self.reject_overlaps)
            .finish_non_exhaustive()
    }
}

impl CrmService {
    /// Creates a service using the system clock and no overlap check.
    #[must_use]
    pub fn new(db: Database, translator: ErrorTranslator) -> Self {
        Self {
            db,
            translator,
            clock: Box::new(SystemClock),
            reject_overlaps: false,
        }
    }

    /// Opens the configured database and error log under `data_dir`.
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be opened.
    pub fn from_config(config: &Config, data_dir: &Path) -> Result<Self> {
        let db = Database::open(config.database_config(data_dir))?;
        let translator = ErrorTranslator::new(ErrorLog::new(config.error_log_path(data_dir)));
        Ok(Self::new(db, translator).with_reject_overlaps(config.reject_overlaps()))
    }

    /// Replaces the clock used for "today".
    #[must_use]
    pub fn with_clock(mut self, clock: impl Clock + 'static) -> Self {
        self.clock = Box::new(clock);
        self
    }

    /// Refuses bookings whose site is already held for an overlapping stay.
    #[must_use]
    pub fn with_reject_overlaps(mut self, reject: bool) -> Self {
        self.reject_overlaps = reject;
        self
    }

    /// The underlying database handle.
    #[must_use]
    pub const fn database(&self) -> &Database {
        &self.db
    }

    /// Today, according to this service's clock.
    #[must_use]
    pub fn today(&self) -> NaiveDate {
        self.clock.today()
    }

    /// Validates and stores a new customer.
    pub fn create_customer(&self, customer: &NewCustomer) -> Outcome<CustomerCreated> {
        let result = validation::validate_customer(customer).and_then(|()| {
            self.db
                .with_connection(|conn| Database::insert_customer(conn, customer))
        });
        let outcome = self.translator.translate(
            "Failed to create customer",
            result.map(|customer_id| CustomerCreated { customer_id }),
        );
        if let Outcome::Success(created) = &outcome {
            log::debug!("created customer {}", created.customer_id);
        }
        outcome
    }

    /// Books a site and raises its invoice.
    ///
    /// The stay is priced at the site's daily rate times the number of
    /// nights. The reservation starts `Confirmed`; the invoice is issued
    /// today, due a week later, and starts `Pending`. Both rows are written
    /// in one transaction, so a failure leaves neither.
    pub fn create_reservation(
        &self,
        customer_id: i64,
        site_id: i64,
        check_in_date: &str,
        check_out_date: &str,
    ) -> Outcome<ReservationCreated> {
        let result = self.try_create_reservation(customer_id, site_id, check_in_date, check_out_date);
        self.translator
            .translate("Failed to create reservation", result)
    }

    #[allow(clippy::cast_precision_loss)]
    fn try_create_reservation(
        &self,
        customer_id: i64,
        site_id: i64,
        check_in_date: &str,
        check_out_date: &str,
    ) -> Result<ReservationCreated> {
        let today = self.today();
        let dates = validation::validate_reservation(
            customer_id,
            site_id,
            check_in_date,
            check_out_date,
            today,
        )?;

        self.db.with_transaction("Failed to create reservation", |tx| {
            let daily_rate = Database::site_daily_rate(tx, site_id)?
                .ok_or_else(|| Error::not_found(format!("site {site_id}")))?;

            if self.reject_overlaps && Database::has_overlapping_booking(tx, site_id, &dates)? {
                return Err(Error::BookingConflict {
                    details: format!("site {site_id} is already booked during {dates}"),
                });
            }

            let total_amount = daily_rate * dates.nights() as f64;
            let reservation_id = Database::insert_reservation(
                tx,
                &NewReservation {
                    customer_id,
                    site_id,
                    dates,
                    status: ReservationStatus::Confirmed,
                    total_amount,
                },
            )?;

            let invoice =
                NewInvoice::for_reservation(reservation_id, customer_id, total_amount, today);
            let invoice_id = Database::insert_invoice(tx, &invoice)?;

            log::debug!(
                "booked site {site_id} for {dates}: reservation {reservation_id}, invoice {invoice_id}, total {total_amount:.2}"
            );
            Ok(ReservationCreated {
                reservation_id,
                invoice_id,
            })
        })
    }

    /// Records a payment dated today and marks its invoice `Paid`.
    ///
    /// The invoice is marked paid whatever the amount; partial payments are
    /// not tracked.
    pub fn record_payment(
        &self,
        invoice_id: i64,
        customer_id: i64,
        amount: f64,
        payment_method: &str,
    ) -> Outcome<PaymentRecorded> {
        let result = self.try_record_payment(invoice_id, customer_id, amount, payment_method);
        self.translator.translate("Failed to record payment", result)
    }

    fn try_record_payment(
        &self,
        invoice_id: i64,
        customer_id: i64,
        amount: f64,
        payment_method: &str,
    ) -> Result<PaymentRecorded> {
        let payment_method =
            validation::validate_payment(invoice_id, customer_id, amount, payment_method)?;
        let payment = NewPayment {
            invoice_id,
            customer_id,
            payment_date: self.today(),
            amount,
            payment_method,
        };

        self.db.with_transaction("Failed to record payment", |tx| {
            let payment_id = Database::insert_payment(tx, &payment)?;
            Database::mark_invoice_paid(tx, invoice_id)?;
            log::debug!("payment {payment_id} settles invoice {invoice_id}");
            Ok(PaymentRecorded { payment_id })
        })
    }

    /// Lists active sites free for the whole stay.
    pub fn get_available_sites(
        &self,
        check_in_date: &str,
        check_out_date: &str,
    ) -> Outcome<AvailableSites> {
        let result = validation::validate_date_range(check_in_date, check_out_date, self.today())
            .and_then(|dates| {
                self.db
                    .with_connection(|conn| Database::available_sites(conn, &dates))
            })
            .map(|sites| AvailableSites { sites });
        self.translator
            .translate("Failed to retrieve available sites", result)
    }

    /// Validates and stores a new campsite.
    pub fn add_site(&self, site: &NewSite) -> Outcome<SiteCreated> {
        let result = validation::validate_site(site)
            .and_then(|()| self.db.with_connection(|conn| Database::insert_site(conn, site)))
            .map(|site_id| SiteCreated { site_id });
        self.translator.translate("Failed to add site", result)
    }

    /// Lists every campsite.
    pub fn list_sites(&self) -> Outcome<SiteList> {
        let result = self
            .db
            .with_connection(|conn| Database::list_sites(conn))
            .map(|sites| SiteList { sites });
        self.translator.translate("Failed to list sites", result)
    }

    /// Fetches one customer.
    pub fn get_customer(&self, customer_id: i64) -> Outcome<CustomerRecord> {
        let result = self
            .db
            .with_connection(|conn| Database::get_customer(conn, customer_id))
            .and_then(|found| found.ok_or_else(|| Error::not_found(format!("customer {customer_id}"))))
            .map(|customer| CustomerRecord { customer });
        self.translator.translate("Failed to retrieve customer", result)
    }

    /// Fetches one reservation.
    pub fn get_reservation(&self, reservation_id: i64) -> Outcome<ReservationRecord> {
        let result = self
            .db
            .with_connection(|conn| Database::get_reservation(conn, reservation_id))
            .and_then(|found| {
                found.ok_or_else(|| Error::not_found(format!("reservation {reservation_id}")))
            })
            .map(|reservation| ReservationRecord { reservation });
        self.translator
            .translate("Failed to retrieve reservation", result)
    }

    /// Fetches one invoice.
    pub fn get_invoice(&self, invoice_id: i64) -> Outcome<InvoiceRecord> {
        let result = self
            .db
            .with_connection(|conn| Database::get_invoice(conn, invoice_id))
            .and_then(|found| found.ok_or_else(|| Error::not_found(format!("invoice {invoice_id}"))))
            .map(|invoice| InvoiceRecord { invoice });
        self.translator.translate("Failed to retrieve invoice", result)
    }
}
