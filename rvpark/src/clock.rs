//! Calendar-day source for the workflow layer.
//!
//! Validation of check-in dates and the invoice issue/due dates all depend
//! on "today". The workflow asks a [`Clock`] instead of reading the system
//! time directly so tests can pin the date.

use chrono::{Local, NaiveDate};

/// Supplies the current calendar day.
pub trait Clock {
    /// Returns today's date in the caller's local time zone.
    fn today(&self) -> NaiveDate;
}

/// Reads the local system clock, truncated to the calendar day.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}

/// A clock pinned to a fixed day.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use rvpark::{Clock, FixedClock};
///
/// let day = NaiveDate::from_ymd_opt(2025, 5, 18).unwrap();
/// assert_eq!(FixedClock::new(day).today(), day);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(NaiveDate);

impl FixedClock {
    /// Creates a clock that always reports `day`.
    #[must_use]
    pub const fn new(day: NaiveDate) -> Self {
        Self(day)
    }
}

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_system_clock_matches_local_date() {
        let before = Local::now().date_naive();
        let today = SystemClock.today();
        let after = Local::now().date_naive();
        assert!(today >= before && today <= after);
    }
}
