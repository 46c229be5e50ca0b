use std::fmt;

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// The date format used at every boundary: `YYYY-MM-DD`.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// A stay from check-in to check-out.
///
/// A `DateRange` always covers at least one night: check-out is strictly
/// after check-in.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use rvpark::model::DateRange;
///
/// let check_in = NaiveDate::from_ymd_opt(2025, 6, 1).unwrap();
/// let check_out = NaiveDate::from_ymd_opt(2025, 6, 5).unwrap();
/// let stay = DateRange::new(check_in, check_out).unwrap();
/// assert_eq!(stay.nights(), 4);
///
/// assert!(DateRange::new(check_out, check_in).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct DateRange {
    check_in: NaiveDate,
    check_out: NaiveDate,
}

impl DateRange {
    /// Creates a range, rejecting check-out on or before check-in.
    ///
    /// # Errors
    ///
    /// Returns a validation error if `check_out <= check_in`.
    pub fn new(check_in: NaiveDate, check_out: NaiveDate) -> Result<Self> {
        if check_in >= check_out {
            return Err(Error::validation(
                "check_out_date",
                "Check-out date must be after check-in date",
            ));
        }
        Ok(Self {
            check_in,
            check_out,
        })
    }

    /// Returns the check-in date.
    #[must_use]
    pub const fn check_in(&self) -> NaiveDate {
        self.check_in
    }

    /// Returns the check-out date.
    #[must_use]
    pub const fn check_out(&self) -> NaiveDate {
        self.check_out
    }

    /// Returns the number of nights, always at least one.
    #[must_use]
    pub fn nights(&self) -> i64 {
        (self.check_out - self.check_in).num_days()
    }
}

impl fmt::Display for DateRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}..{}",
            self.check_in.format(DATE_FORMAT),
            self.check_out.format(DATE_FORMAT)
        )
    }
}

/// Lifecycle state of a reservation.
///
/// The set is open: statuses written by other tools are preserved verbatim
/// in [`ReservationStatus::Other`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ReservationStatus {
    /// Booked and holding the site.
    Confirmed,
    /// Guest has arrived.
    CheckedIn,
    /// Any other status string.
    Other(String),
}

impl ReservationStatus {
    /// Returns the stored string form.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Confirmed => "Confirmed",
            Self::CheckedIn => "Checked-in",
            Self::Other(status) => status,
        }
    }
}

impl From<String> for ReservationStatus {
    fn from(value: String) -> Self {
        match value.as_str() {
            "Confirmed" => Self::Confirmed,
            "Checked-in" => Self::CheckedIn,
            _ => Self::Other(value),
        }
    }
}

impl From<ReservationStatus> for String {
    fn from(value: ReservationStatus) -> Self {
        match value {
            ReservationStatus::Other(status) => status,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for ReservationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A reservation about to be inserted.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewReservation {
    /// The booking customer.
    pub customer_id: i64,
    /// The booked site.
    pub site_id: i64,
    /// The stay.
    pub dates: DateRange,
    /// Initial status.
    pub status: ReservationStatus,
    /// Price of the whole stay.
    pub total_amount: f64,
}

/// A stored reservation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Reservation {
    /// Store-assigned identifier.
    pub id: i64,
    /// The booking customer.
    pub customer_id: i64,
    /// The booked site.
    pub site_id: i64,
    /// Arrival day.
    pub check_in_date: NaiveDate,
    /// Departure day.
    pub check_out_date: NaiveDate,
    /// Current status.
    pub status: ReservationStatus,
    /// Price of the whole stay.
    pub total_amount: f64,
    /// When the row was written, as recorded by the store.
    pub created_at: Option<NaiveDateTime>,
}
