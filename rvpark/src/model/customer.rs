use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// A customer about to be created.
///
/// # Examples
///
/// ```
/// use rvpark::model::NewCustomer;
///
/// let customer = NewCustomer::new("John", "Doe")
///     .with_email("john.doe@example.com")
///     .with_phone("+12345678901");
/// assert_eq!(customer.email.as_deref(), Some("john.doe@example.com"));
/// assert!(customer.address.is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewCustomer {
    /// Given name.
    pub first_name: String,
    /// Family name.
    pub last_name: String,
    /// Contact email, unique across customers when present.
    pub email: Option<String>,
    /// Contact phone number.
    pub phone: Option<String>,
    /// Postal address.
    pub address: Option<String>,
}

impl NewCustomer {
    /// Creates a customer with only the required name fields set.
    #[must_use]
    pub fn new(first_name: impl Into<String>, last_name: impl Into<String>) -> Self {
        Self {
            first_name: first_name.into(),
            last_name: last_name.into(),
            email: None,
            phone: None,
            address: None,
        }
    }

    /// Sets the email address.
    #[must_use]
    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    /// Sets the phone number.
    #[must_use]
    pub fn with_phone(mut self, phone: impl Into<String>) -> Self {
        self.phone = Some(phone.into());
        self
    }

    /// Sets the postal address.
    #[must_use]
    pub fn with_address(mut self, address: impl Into<String>) -> Self {
        self.address = Some(address.into());
        self
    }
}

/// A stored customer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Customer {
    /// Store-assigned identifier.
    pub id: i64,
    /// Given name.
    pub first_name: String,
    /// Family name.
    pub last_name: String,
    /// Contact email.
    pub email: Option<String>,
    /// Contact phone number.
    pub phone: Option<String>,
    /// Postal address.
    pub address: Option<String>,
    /// When the row was written, as recorded by the store.
    pub created_at: Option<NaiveDateTime>,
}

impl Customer {
    /// Returns "First Last".
    #[must_use]
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}
