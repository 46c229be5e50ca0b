//! Data access for customers, sites, reservations, invoices and payments.
//!
//! Every function takes a borrowed [`Connection`] so callers decide the
//! scope: a one-off [`Database::with_connection`] or a shared
//! [`Database::with_transaction`]. Nothing here validates input; that is
//! the caller's job. Store failures are wrapped with the name of the
//! operation that was attempted.

use rusqlite::{params, Connection, OptionalExtension, Row};

use crate::error::{store_error, Result};
use crate::model::{
    Customer, DateRange, Invoice, InvoiceStatus, NewCustomer, NewInvoice, NewPayment,
    NewReservation, NewSite, Payment, PaymentMethod, Reservation, ReservationStatus, Site,
};

use super::connection::Database;

const INSERT_CUSTOMER: &str = r"
    INSERT INTO customers (first_name, last_name, email, phone, address)
    VALUES (?1, ?2, ?3, ?4, ?5)
";

const SELECT_CUSTOMER: &str = r"
    SELECT customer_id, first_name, last_name, email, phone, address, created_at
    FROM customers
    WHERE customer_id = ?1
";

const INSERT_SITE: &str = r"
    INSERT INTO rv_sites (site_number, site_type, daily_rate, is_active, description)
    VALUES (?1, ?2, ?3, ?4, ?5)
";

const SITE_COLUMNS: &str =
    "SELECT site_id, site_number, site_type, daily_rate, is_active, description FROM rv_sites";

const SELECT_DAILY_RATE: &str = "SELECT daily_rate FROM rv_sites WHERE site_id = ?1";

const INSERT_RESERVATION: &str = r"
    INSERT INTO reservations
    (customer_id, site_id, check_in_date, check_out_date, status, total_amount)
    VALUES (?1, ?2, ?3, ?4, ?5, ?6)
";

const SELECT_RESERVATION: &str = r"
    SELECT reservation_id, customer_id, site_id, check_in_date, check_out_date,
           status, total_amount, created_at
    FROM reservations
    WHERE reservation_id = ?1
";

// Only Confirmed and Checked-in reservations hold a site. Bounds compare
// inclusively: checking in on another stay's check-out day conflicts.
// ?1 = requested check-in, ?2 = requested check-out
const SELECT_AVAILABLE_SITES: &str = r"
    SELECT site_id, site_number, site_type, daily_rate, is_active, description
    FROM rv_sites
    WHERE is_active = 1
    AND site_id NOT IN (
        SELECT site_id
        FROM reservations
        WHERE status IN ('Confirmed', 'Checked-in')
        AND check_in_date <= ?2 AND check_out_date >= ?1
    )
";

// Same rule as SELECT_AVAILABLE_SITES, for one site
const COUNT_OVERLAPPING: &str = r"
    SELECT COUNT(*)
    FROM reservations
    WHERE site_id = ?1
    AND status IN ('Confirmed', 'Checked-in')
    AND check_in_date <= ?3 AND check_out_date >= ?2
";

const INSERT_INVOICE: &str = r"
    INSERT INTO invoices
    (reservation_id, customer_id, issue_date, due_date, total_amount, status)
    VALUES (?1, ?2, ?3, ?4, ?5, ?6)
";

const SELECT_INVOICE: &str = r"
    SELECT invoice_id, reservation_id, customer_id, issue_date, due_date,
           total_amount, status, created_at
    FROM invoices
    WHERE invoice_id = ?1
";

const MARK_INVOICE_PAID: &str = "UPDATE invoices SET status = 'Paid' WHERE invoice_id = ?1";

const INSERT_PAYMENT: &str = r"
    INSERT INTO payments (invoice_id, customer_id, payment_date, amount, payment_method)
    VALUES (?1, ?2, ?3, ?4, ?5)
";

const SELECT_PAYMENT: &str = r"
    SELECT payment_id, invoice_id, customer_id, payment_date, amount, payment_method, created_at
    FROM payments
    WHERE payment_id = ?1
";

fn customer_from_row(row: &Row<'_>) -> rusqlite::Result<Customer> {
    Ok(Customer {
        id: row.get(0)?,
        first_name: row.get(1)?,
        last_name: row.get(2)?,
        email: row.get(3)?,
        phone: row.get(4)?,
        address: row.get(5)?,
        created_at: row.get(6)?,
    })
}

fn site_from_row(row: &Row<'_>) -> rusqlite::Result<Site> {
    Ok(Site {
        id: row.get(0)?,
        site_number: row.get(1)?,
        site_type: row.get(2)?,
        daily_rate: row.get(3)?,
        is_active: row.get(4)?,
        description: row.get(5)?,
    })
}

fn reservation_from_row(row: &Row<'_>) -> rusqlite::Result<Reservation> {
    Ok(Reservation {
        id: row.get(0)?,
        customer_id: row.get(1)?,
        site_id: row.get(2)?,
        check_in_date: row.get(3)?,
        check_out_date: row.get(4)?,
        status: ReservationStatus::from(row.get::<_, String>(5)?),
        total_amount: row.get(6)?,
        created_at: row.get(7)?,
    })
}

fn invoice_from_row(row: &Row<'_>) -> rusqlite::Result<Invoice> {
    Ok(Invoice {
        id: row.get(0)?,
        reservation_id: row.get(1)?,
        customer_id: row.get(2)?,
        issue_date: row.get(3)?,
        due_date: row.get(4)?,
        total_amount: row.get(5)?,
        status: InvoiceStatus::from(row.get::<_, String>(6)?),
        created_at: row.get(7)?,
    })
}

fn payment_from_row(row: &Row<'_>) -> rusqlite::Result<Payment> {
    let method: String = row.get(5)?;
    let payment_method = method.parse::<PaymentMethod>().map_err(|e| {
        rusqlite::Error::FromSqlConversionFailure(5, rusqlite::types::Type::Text, Box::new(e))
    })?;

    Ok(Payment {
        id: row.get(0)?,
        invoice_id: row.get(1)?,
        customer_id: row.get(2)?,
        payment_date: row.get(3)?,
        amount: row.get(4)?,
        payment_method,
        created_at: row.get(6)?,
    })
}

impl Database {
    /// Inserts a customer and returns its new id.
    ///
    /// # Errors
    ///
    /// Returns a constraint error naming `customers.email` when the email is
    /// already taken.
    pub fn insert_customer(conn: &Connection, customer: &NewCustomer) -> Result<i64> {
        conn.execute(
            INSERT_CUSTOMER,
            params![
                customer.first_name,
                customer.last_name,
                customer.email,
                customer.phone,
                customer.address,
            ],
        )
        .map_err(store_error("Failed to add customer"))?;
        Ok(conn.last_insert_rowid())
    }

    /// Fetches a customer by id.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails; a missing row is `Ok(None)`.
    pub fn get_customer(conn: &Connection, customer_id: i64) -> Result<Option<Customer>> {
        conn.query_row(SELECT_CUSTOMER, [customer_id], customer_from_row)
            .optional()
            .map_err(store_error("Failed to retrieve customer"))
    }

    /// Inserts a campsite and returns its new id.
    ///
    /// # Errors
    ///
    /// Returns a constraint error when the site number is already in use.
    pub fn insert_site(conn: &Connection, site: &NewSite) -> Result<i64> {
        conn.execute(
            INSERT_SITE,
            params![
                site.site_number,
                site.site_type,
                site.daily_rate,
                site.is_active,
                site.description,
            ],
        )
        .map_err(store_error("Failed to add site"))?;
        Ok(conn.last_insert_rowid())
    }

    /// Fetches a campsite by id.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails; a missing row is `Ok(None)`.
    pub fn get_site(conn: &Connection, site_id: i64) -> Result<Option<Site>> {
        conn.query_row(
            &format!("{SITE_COLUMNS} WHERE site_id = ?1"),
            [site_id],
            site_from_row,
        )
        .optional()
        .map_err(store_error("Failed to retrieve site"))
    }

    /// Lists every campsite, active or not, by id.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn list_sites(conn: &Connection) -> Result<Vec<Site>> {
        let mut stmt = conn
            .prepare(&format!("{SITE_COLUMNS} ORDER BY site_id"))
            .map_err(store_error("Failed to list sites"))?;
        let sites = stmt
            .query_map([], site_from_row)
            .and_then(|rows| rows.collect::<rusqlite::Result<Vec<_>>>())
            .map_err(store_error("Failed to list sites"))?;
        Ok(sites)
    }

    /// Looks up a site's nightly rate. `None` means no such site.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn site_daily_rate(conn: &Connection, site_id: i64) -> Result<Option<f64>> {
        conn.query_row(SELECT_DAILY_RATE, [site_id], |row| row.get(0))
            .optional()
            .map_err(store_error("Failed to retrieve site rate"))
    }

    /// Inserts a reservation and returns its new id.
    ///
    /// # Errors
    ///
    /// Returns a constraint error when the customer or site does not exist.
    pub fn insert_reservation(conn: &Connection, reservation: &NewReservation) -> Result<i64> {
        conn.execute(
            INSERT_RESERVATION,
            params![
                reservation.customer_id,
                reservation.site_id,
                reservation.dates.check_in(),
                reservation.dates.check_out(),
                reservation.status.as_str(),
                reservation.total_amount,
            ],
        )
        .map_err(store_error("Failed to add reservation"))?;
        Ok(conn.last_insert_rowid())
    }

    /// Fetches a reservation by id.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails; a missing row is `Ok(None)`.
    pub fn get_reservation(conn: &Connection, reservation_id: i64) -> Result<Option<Reservation>> {
        conn.query_row(SELECT_RESERVATION, [reservation_id], reservation_from_row)
            .optional()
            .map_err(store_error("Failed to retrieve reservation"))
    }

    /// Lists active sites with no holding reservation overlapping `dates`.
    ///
    /// A reservation holds its site while `Confirmed` or `Checked-in`.
    /// Rows come back in the store's natural order.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn available_sites(conn: &Connection, dates: &DateRange) -> Result<Vec<Site>> {
        let mut stmt = conn
            .prepare(SELECT_AVAILABLE_SITES)
            .map_err(store_error("Failed to retrieve available sites"))?;
        let sites = stmt
            .query_map(params![dates.check_in(), dates.check_out()], site_from_row)
            .and_then(|rows| rows.collect::<rusqlite::Result<Vec<_>>>())
            .map_err(store_error("Failed to retrieve available sites"))?;
        Ok(sites)
    }

    /// Whether `site_id` already has a holding reservation overlapping
    /// `dates`, by the same rule as [`Database::available_sites`].
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn has_overlapping_booking(
        conn: &Connection,
        site_id: i64,
        dates: &DateRange,
    ) -> Result<bool> {
        let count: i64 = conn
            .query_row(
                COUNT_OVERLAPPING,
                params![site_id, dates.check_in(), dates.check_out()],
                |row| row.get(0),
            )
            .map_err(store_error("Failed to check site availability"))?;
        Ok(count > 0)
    }

    /// Inserts an invoice and returns its new id.
    ///
    /// # Errors
    ///
    /// Returns a constraint error when the reservation or customer does not
    /// exist.
    pub fn insert_invoice(conn: &Connection, invoice: &NewInvoice) -> Result<i64> {
        conn.execute(
            INSERT_INVOICE,
            params![
                invoice.reservation_id,
                invoice.customer_id,
                invoice.issue_date,
                invoice.due_date,
                invoice.total_amount,
                invoice.status.as_str(),
            ],
        )
        .map_err(store_error("Failed to add invoice"))?;
        Ok(conn.last_insert_rowid())
    }

    /// Fetches an invoice by id.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails; a missing row is `Ok(None)`.
    pub fn get_invoice(conn: &Connection, invoice_id: i64) -> Result<Option<Invoice>> {
        conn.query_row(SELECT_INVOICE, [invoice_id], invoice_from_row)
            .optional()
            .map_err(store_error("Failed to retrieve invoice"))
    }

    /// Sets an invoice's status to `Paid`, whatever it was before.
    ///
    /// Returns whether a row was updated.
    ///
    /// # Errors
    ///
    /// Returns an error if the update fails.
    pub fn mark_invoice_paid(conn: &Connection, invoice_id: i64) -> Result<bool> {
        let updated = conn
            .execute(MARK_INVOICE_PAID, [invoice_id])
            .map_err(store_error("Failed to update invoice status"))?;
        Ok(updated > 0)
    }

    /// Inserts a payment and returns its new id.
    ///
    /// # Errors
    ///
    /// Returns a constraint error when the invoice or customer does not
    /// exist.
    pub fn insert_payment(conn: &Connection, payment: &NewPayment) -> Result<i64> {
        conn.execute(
            INSERT_PAYMENT,
            params![
                payment.invoice_id,
                payment.customer_id,
                payment.payment_date,
                payment.amount,
                payment.payment_method.as_str(),
            ],
        )
        .map_err(store_error("Failed to add payment"))?;
        Ok(conn.last_insert_rowid())
    }

    /// Fetches a payment by id.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails or the stored method is not one
    /// of the accepted spellings; a missing row is `Ok(None)`.
    pub fn get_payment(conn: &Connection, payment_id: i64) -> Result<Option<Payment>> {
        conn.query_row(SELECT_PAYMENT, [payment_id], payment_from_row)
            .optional()
            .map_err(store_error("Failed to retrieve payment"))
    }
}
