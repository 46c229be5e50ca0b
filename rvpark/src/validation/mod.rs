//! Field-level validation for everything written to the store.
//!
//! Validators are pure: they look only at the values they are given and
//! never touch the database. Anything that depends on the current day takes
//! it as a parameter. Each failure is an [`Error::Validation`] naming the
//! offending field with a human-readable message.
//!
//! # Examples
//!
//! ```
//! use chrono::NaiveDate;
//! use rvpark::validation::validate_date_range;
//!
//! let today = NaiveDate::from_ymd_opt(2025, 5, 18).unwrap();
//! let stay = validate_date_range("2025-06-01", "2025-06-05", today).unwrap();
//! assert_eq!(stay.nights(), 4);
//!
//! let err = validate_date_range("2025-05-01", "2025-05-05", today).unwrap_err();
//! assert!(err.to_string().contains("Check-in date cannot be in the past"));
//! ```

use std::sync::OnceLock;

use chrono::NaiveDate;
use regex::Regex;

use crate::error::{Error, Result};
use crate::model::{
    DateRange, MaintenanceTarget, NewAsset, NewCustomer, NewFacility, NewMaintenanceLog,
    NewMaintenanceRequest, NewMaintenanceSchedule, NewSite, PaymentMethod, DATE_FORMAT,
};

#[cfg(test)]
mod proptests;

// Compiled once; a pattern that fails to compile matches nothing.
fn email_pattern() -> Option<&'static Regex> {
    static PATTERN: OnceLock<Option<Regex>> = OnceLock::new();
    PATTERN
        .get_or_init(|| Regex::new(r"^[^@]+@[^@]+\.[^@]+").ok())
        .as_ref()
}

fn phone_pattern() -> Option<&'static Regex> {
    static PATTERN: OnceLock<Option<Regex>> = OnceLock::new();
    PATTERN
        .get_or_init(|| Regex::new(r"^\+?\d{10,15}$").ok())
        .as_ref()
}

fn matches(pattern: Option<&Regex>, value: &str) -> bool {
    pattern.is_some_and(|re| re.is_match(value))
}

fn require_text(field: &str, value: &str, message: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(Error::validation(field, message));
    }
    Ok(())
}

fn require_id(field: &str, id: i64, message: &str) -> Result<()> {
    if id <= 0 {
        return Err(Error::validation(field, message));
    }
    Ok(())
}

/// Checks an optional email address.
///
/// Absent and empty values are accepted; anything else must look like
/// `local@domain.tld`.
///
/// # Errors
///
/// Returns a validation error with message `"Invalid email format"`.
pub fn validate_email(email: Option<&str>) -> Result<()> {
    match email {
        Some(email) if !email.is_empty() && !matches(email_pattern(), email) => {
            Err(Error::validation("email", "Invalid email format"))
        }
        _ => Ok(()),
    }
}

/// Checks an optional phone number: 10 to 15 digits with an optional
/// leading `+`.
///
/// # Errors
///
/// Returns a validation error with message `"Invalid phone number format"`.
pub fn validate_phone(phone: Option<&str>) -> Result<()> {
    match phone {
        Some(phone) if !phone.is_empty() && !matches(phone_pattern(), phone) => {
            Err(Error::validation("phone", "Invalid phone number format"))
        }
        _ => Ok(()),
    }
}

/// Checks a customer before it is created.
///
/// Names are checked first, then email, then phone; the first failure wins.
///
/// # Errors
///
/// Returns a validation error for a blank name or a malformed contact field.
pub fn validate_customer(customer: &NewCustomer) -> Result<()> {
    require_text(
        "first_name",
        &customer.first_name,
        "First name is required and must be a non-empty string",
    )?;
    require_text(
        "last_name",
        &customer.last_name,
        "Last name is required and must be a non-empty string",
    )?;
    validate_email(customer.email.as_deref())?;
    validate_phone(customer.phone.as_deref())
}

/// Parses a `YYYY-MM-DD` date.
///
/// # Errors
///
/// Returns a validation error with message
/// `"Dates must be in YYYY-MM-DD format"`.
pub fn parse_date(field: &str, value: &str) -> Result<NaiveDate> {
    let invalid = || Error::validation(field, "Dates must be in YYYY-MM-DD format");
    // chrono's %Y tolerates a sign or leading whitespace
    if !value.as_bytes().first().is_some_and(u8::is_ascii_digit) {
        return Err(invalid());
    }
    NaiveDate::parse_from_str(value, DATE_FORMAT).map_err(|_| invalid())
}

/// Parses and checks a stay, returning it as a [`DateRange`].
///
/// Both dates must parse, check-out must be strictly after check-in, and
/// check-in must not be before `today`. Checks run in that order.
///
/// # Errors
///
/// Returns a validation error describing the first rule broken.
pub fn validate_date_range(check_in: &str, check_out: &str, today: NaiveDate) -> Result<DateRange> {
    let check_in = parse_date("check_in_date", check_in)?;
    let check_out = parse_date("check_out_date", check_out)?;
    let range = DateRange::new(check_in, check_out)?;

    if range.check_in() < today {
        return Err(Error::validation(
            "check_in_date",
            "Check-in date cannot be in the past",
        ));
    }

    Ok(range)
}

/// Checks a reservation request and returns its parsed stay.
///
/// # Errors
///
/// Returns a validation error for a non-positive id or a bad date range.
pub fn validate_reservation(
    customer_id: i64,
    site_id: i64,
    check_in: &str,
    check_out: &str,
    today: NaiveDate,
) -> Result<DateRange> {
    require_id("customer_id", customer_id, "Invalid customer ID")?;
    require_id("site_id", site_id, "Invalid site ID")?;
    validate_date_range(check_in, check_out, today)
}

/// Checks a payment and returns the parsed payment method.
///
/// # Errors
///
/// Returns a validation error for a non-positive id, a non-positive or
/// non-finite amount, or a method outside the accepted set.
pub fn validate_payment(
    invoice_id: i64,
    customer_id: i64,
    amount: f64,
    payment_method: &str,
) -> Result<PaymentMethod> {
    require_id("invoice_id", invoice_id, "Invalid invoice ID")?;
    require_id("customer_id", customer_id, "Invalid customer ID")?;
    if !(amount.is_finite() && amount > 0.0) {
        return Err(Error::validation(
            "amount",
            "Amount must be a positive number",
        ));
    }
    payment_method.parse()
}

/// Checks a campsite before it is added.
///
/// # Errors
///
/// Returns a validation error for a blank number or type, or a rate that is
/// not a positive number.
pub fn validate_site(site: &NewSite) -> Result<()> {
    require_text("site_number", &site.site_number, "Site number is required")?;
    require_text("site_type", &site.site_type, "Site type is required")?;
    if !(site.daily_rate.is_finite() && site.daily_rate > 0.0) {
        return Err(Error::validation(
            "daily_rate",
            "Daily rate must be a positive number",
        ));
    }
    Ok(())
}

/// Checks a facility before it is added.
///
/// # Errors
///
/// Returns a validation error for a blank name or type.
pub fn validate_facility(facility: &NewFacility) -> Result<()> {
    require_text(
        "facility_name",
        &facility.facility_name,
        "Facility name is required",
    )?;
    require_text(
        "facility_type",
        &facility.facility_type,
        "Facility type is required",
    )
}

/// Checks an asset before it is added.
///
/// # Errors
///
/// Returns a validation error for a bad facility id or a blank name or type.
pub fn validate_asset(asset: &NewAsset) -> Result<()> {
    require_id("facility_id", asset.facility_id, "Invalid facility ID")?;
    require_text("asset_name", &asset.asset_name, "Asset name is required")?;
    require_text("asset_type", &asset.asset_type, "Asset type is required")
}

/// Checks that every id named by a maintenance target is positive.
///
/// # Errors
///
/// Returns a validation error for a non-positive facility or asset id.
pub fn validate_target(target: &MaintenanceTarget) -> Result<()> {
    if let Some(id) = target.facility_id() {
        require_id("facility_id", id, "Invalid facility ID")?;
    }
    if let Some(id) = target.asset_id() {
        require_id("asset_id", id, "Invalid asset ID")?;
    }
    Ok(())
}

/// Checks a maintenance request before it is filed.
///
/// # Errors
///
/// Returns a validation error for a bad target or reporter id, or blank
/// text fields.
pub fn validate_maintenance_request(request: &NewMaintenanceRequest) -> Result<()> {
    validate_target(&request.target)?;
    if let Some(id) = request.customer_id {
        require_id("customer_id", id, "Invalid customer ID")?;
    }
    require_text("priority", &request.priority, "Priority is required")?;
    require_text("status", &request.status, "Status is required")?;
    require_text(
        "description",
        &request.description,
        "Description is required",
    )
}

/// Checks a maintenance schedule before it is created.
///
/// # Errors
///
/// Returns a validation error for a bad target or blank text fields.
pub fn validate_maintenance_schedule(schedule: &NewMaintenanceSchedule) -> Result<()> {
    validate_target(&schedule.target)?;
    require_text("task_name", &schedule.task_name, "Task name is required")?;
    require_text("frequency", &schedule.frequency, "Frequency is required")?;
    require_text("status", &schedule.status, "Status is required")
}

/// Checks a maintenance log entry before it is written.
///
/// # Errors
///
/// Returns a validation error for a bad id or a blank performer.
pub fn validate_maintenance_log(entry: &NewMaintenanceLog) -> Result<()> {
    validate_target(&entry.target)?;
    if let Some(id) = entry.request_id {
        require_id("request_id", id, "Invalid request ID")?;
    }
    if let Some(id) = entry.schedule_id {
        require_id("schedule_id", id, "Invalid schedule ID")?;
    }
    require_text(
        "performed_by",
        &entry.performed_by,
        "Performed by is required",
    )
}
