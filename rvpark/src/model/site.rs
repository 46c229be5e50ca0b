use serde::{Deserialize, Serialize};

/// A campsite about to be added to the park.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewSite {
    /// Unique site label, e.g. "A12".
    pub site_number: String,
    /// Hookup or layout type, e.g. "Full Hookup".
    pub site_type: String,
    /// Price per night.
    pub daily_rate: f64,
    /// Whether the site can be booked.
    pub is_active: bool,
    /// Free-form description.
    pub description: Option<String>,
}

impl NewSite {
    /// Creates an active site without a description.
    #[must_use]
    pub fn new(site_number: impl Into<String>, site_type: impl Into<String>, daily_rate: f64) -> Self {
        Self {
            site_number: site_number.into(),
            site_type: site_type.into(),
            daily_rate,
            is_active: true,
            description: None,
        }
    }

    /// Marks the site active or inactive.
    #[must_use]
    pub fn active(mut self, is_active: bool) -> Self {
        self.is_active = is_active;
        self
    }

    /// Sets the description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

/// A stored campsite.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Site {
    /// Store-assigned identifier.
    pub id: i64,
    /// Unique site label.
    pub site_number: String,
    /// Hookup or layout type.
    pub site_type: String,
    /// Price per night.
    pub daily_rate: f64,
    /// Whether the site can be booked.
    pub is_active: bool,
    /// Free-form description.
    pub description: Option<String>,
}
