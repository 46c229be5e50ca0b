use std::fmt;
use std::str::FromStr;

use chrono::{Days, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::error::Error;

/// Days between an invoice's issue date and its due date.
pub const INVOICE_DUE_DAYS: u64 = 7;

/// Payment state of an invoice.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum InvoiceStatus {
    /// Issued and awaiting payment.
    Pending,
    /// A payment has been recorded against it.
    Paid,
    /// Any other status string.
    Other(String),
}

impl InvoiceStatus {
    /// Returns the stored string form.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Pending => "Pending",
            Self::Paid => "Paid",
            Self::Other(status) => status,
        }
    }
}

impl From<String> for InvoiceStatus {
    fn from(value: String) -> Self {
        match value.as_str() {
            "Pending" => Self::Pending,
            "Paid" => Self::Paid,
            _ => Self::Other(value),
        }
    }
}

impl From<InvoiceStatus> for String {
    fn from(value: InvoiceStatus) -> Self {
        match value {
            InvoiceStatus::Other(status) => status,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for InvoiceStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An invoice about to be inserted.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewInvoice {
    /// The reservation being billed.
    pub reservation_id: i64,
    /// The billed customer.
    pub customer_id: i64,
    /// Day the invoice was issued.
    pub issue_date: NaiveDate,
    /// Day payment is due.
    pub due_date: NaiveDate,
    /// Amount owed.
    pub total_amount: f64,
    /// Initial status.
    pub status: InvoiceStatus,
}

impl NewInvoice {
    /// Builds the pending invoice for a freshly booked reservation.
    ///
    /// The due date is always [`INVOICE_DUE_DAYS`] after `issue_date`.
    ///
    /// # Examples
    ///
    /// ```
    /// use chrono::NaiveDate;
    /// use rvpark::model::{InvoiceStatus, NewInvoice};
    ///
    /// let issued = NaiveDate::from_ymd_opt(2025, 5, 18).unwrap();
    /// let invoice = NewInvoice::for_reservation(7, 3, 200.0, issued);
    /// assert_eq!(invoice.due_date, NaiveDate::from_ymd_opt(2025, 5, 25).unwrap());
    /// assert_eq!(invoice.status, InvoiceStatus::Pending);
    /// ```
    #[must_use]
    pub fn for_reservation(
        reservation_id: i64,
        customer_id: i64,
        total_amount: f64,
        issue_date: NaiveDate,
    ) -> Self {
        Self {
            reservation_id,
            customer_id,
            issue_date,
            due_date: issue_date + Days::new(INVOICE_DUE_DAYS),
            total_amount,
            status: InvoiceStatus::Pending,
        }
    }
}

/// A stored invoice.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Invoice {
    /// Store-assigned identifier.
    pub id: i64,
    /// The reservation being billed.
    pub reservation_id: i64,
    /// The billed customer.
    pub customer_id: i64,
    /// Day the invoice was issued.
    pub issue_date: NaiveDate,
    /// Day payment is due.
    pub due_date: NaiveDate,
    /// Amount owed.
    pub total_amount: f64,
    /// Current status.
    pub status: InvoiceStatus,
    /// When the row was written, as recorded by the store.
    pub created_at: Option<NaiveDateTime>,
}

/// Accepted ways to pay.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PaymentMethod {
    /// Cash at the office.
    Cash,
    /// Card payment.
    #[serde(rename = "Credit Card")]
    CreditCard,
    /// Paper check.
    Check,
}

impl PaymentMethod {
    /// All accepted methods.
    pub const ALL: [Self; 3] = [Self::Cash, Self::CreditCard, Self::Check];

    /// Returns the stored string form.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Cash => "Cash",
            Self::CreditCard => "Credit Card",
            Self::Check => "Check",
        }
    }
}

impl FromStr for PaymentMethod {
    type Err = Error;

    /// Parses the exact stored spelling; anything else is rejected.
    ///
    /// # Examples
    ///
    /// ```
    /// use rvpark::model::PaymentMethod;
    ///
    /// assert_eq!("Credit Card".parse::<PaymentMethod>().unwrap(), PaymentMethod::CreditCard);
    /// assert!("Bitcoin".parse::<PaymentMethod>().is_err());
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|method| method.as_str() == s)
            .ok_or_else(|| Error::validation("payment_method", "Invalid payment method"))
    }
}

impl fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A payment about to be recorded.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewPayment {
    /// The invoice being paid.
    pub invoice_id: i64,
    /// The paying customer.
    pub customer_id: i64,
    /// Day the payment was received.
    pub payment_date: NaiveDate,
    /// Amount received.
    pub amount: f64,
    /// How it was paid.
    pub payment_method: PaymentMethod,
}

/// A stored payment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Payment {
    /// Store-assigned identifier.
    pub id: i64,
    /// The invoice that was paid.
    pub invoice_id: i64,
    /// The paying customer.
    pub customer_id: i64,
    /// Day the payment was received.
    pub payment_date: NaiveDate,
    /// Amount received.
    pub amount: f64,
    /// How it was paid.
    pub payment_method: PaymentMethod,
    /// When the row was written, as recorded by the store.
    pub created_at: Option<NaiveDateTime>,
}
