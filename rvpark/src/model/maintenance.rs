use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// What a maintenance row is about: a facility, an asset, or both.
///
/// Every maintenance request, schedule and log entry must name at least
/// one of the two; "neither" has no representation here and is also
/// rejected by the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MaintenanceTarget {
    /// A whole facility, e.g. the bath house.
    Facility(i64),
    /// A single asset, e.g. one water heater.
    Asset(i64),
    /// An asset within a named facility.
    FacilityAsset {
        /// The facility.
        facility_id: i64,
        /// The asset.
        asset_id: i64,
    },
}

impl MaintenanceTarget {
    /// Rebuilds a target from its two nullable columns.
    ///
    /// Returns `None` when both are absent.
    ///
    /// # Examples
    ///
    /// ```
    /// use rvpark::model::MaintenanceTarget;
    ///
    /// assert_eq!(
    ///     MaintenanceTarget::from_columns(Some(2), None),
    ///     Some(MaintenanceTarget::Facility(2))
    /// );
    /// assert_eq!(MaintenanceTarget::from_columns(None, None), None);
    /// ```
    #[must_use]
    pub const fn from_columns(facility_id: Option<i64>, asset_id: Option<i64>) -> Option<Self> {
        match (facility_id, asset_id) {
            (Some(facility_id), Some(asset_id)) => Some(Self::FacilityAsset {
                facility_id,
                asset_id,
            }),
            (Some(facility_id), None) => Some(Self::Facility(facility_id)),
            (None, Some(asset_id)) => Some(Self::Asset(asset_id)),
            (None, None) => None,
        }
    }

    /// The facility column value.
    #[must_use]
    pub const fn facility_id(&self) -> Option<i64> {
        match self {
            Self::Facility(id) | Self::FacilityAsset { facility_id: id, .. } => Some(*id),
            Self::Asset(_) => None,
        }
    }

    /// The asset column value.
    #[must_use]
    pub const fn asset_id(&self) -> Option<i64> {
        match self {
            Self::Asset(id) | Self::FacilityAsset { asset_id: id, .. } => Some(*id),
            Self::Facility(_) => None,
        }
    }
}

/// A facility about to be added.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewFacility {
    /// Display name.
    pub facility_name: String,
    /// Kind of facility, e.g. "Restroom".
    pub facility_type: String,
    /// Where it is in the park.
    pub location: Option<String>,
    /// Whether it is in service.
    pub is_active: bool,
    /// Free-form description.
    pub description: Option<String>,
}

impl NewFacility {
    /// Creates an active facility with no location or description.
    #[must_use]
    pub fn new(facility_name: impl Into<String>, facility_type: impl Into<String>) -> Self {
        Self {
            facility_name: facility_name.into(),
            facility_type: facility_type.into(),
            location: None,
            is_active: true,
            description: None,
        }
    }

    /// Sets the location.
    #[must_use]
    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }
}

/// A stored facility.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Facility {
    /// Store-assigned identifier.
    pub id: i64,
    /// Display name.
    pub facility_name: String,
    /// Kind of facility.
    pub facility_type: String,
    /// Where it is in the park.
    pub location: Option<String>,
    /// Whether it is in service.
    pub is_active: bool,
    /// Free-form description.
    pub description: Option<String>,
    /// When the row was written, as recorded by the store.
    pub created_at: Option<NaiveDateTime>,
}

/// An asset about to be added to a facility.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewAsset {
    /// Owning facility.
    pub facility_id: i64,
    /// Display name.
    pub asset_name: String,
    /// Kind of asset, e.g. "Water Heater".
    pub asset_type: String,
    /// Manufacturer serial number.
    pub serial_number: Option<String>,
    /// Day it was bought.
    pub purchase_date: Option<NaiveDate>,
    /// Whether it is in service.
    pub is_active: bool,
    /// Free-form description.
    pub description: Option<String>,
}

impl NewAsset {
    /// Creates an active asset with no optional details.
    #[must_use]
    pub fn new(facility_id: i64, asset_name: impl Into<String>, asset_type: impl Into<String>) -> Self {
        Self {
            facility_id,
            asset_name: asset_name.into(),
            asset_type: asset_type.into(),
            serial_number: None,
            purchase_date: None,
            is_active: true,
            description: None,
        }
    }
}

/// A stored asset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Asset {
    /// Store-assigned identifier.
    pub id: i64,
    /// Owning facility.
    pub facility_id: i64,
    /// Display name.
    pub asset_name: String,
    /// Kind of asset.
    pub asset_type: String,
    /// Manufacturer serial number.
    pub serial_number: Option<String>,
    /// Day it was bought.
    pub purchase_date: Option<NaiveDate>,
    /// Whether it is in service.
    pub is_active: bool,
    /// Free-form description.
    pub description: Option<String>,
    /// When the row was written, as recorded by the store.
    pub created_at: Option<NaiveDateTime>,
}

/// A repair or service request about to be filed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewMaintenanceRequest {
    /// What needs attention.
    pub target: MaintenanceTarget,
    /// Customer who reported it, if any.
    pub customer_id: Option<i64>,
    /// Day it was reported.
    pub request_date: NaiveDate,
    /// Urgency label, e.g. "High".
    pub priority: String,
    /// Workflow state, e.g. "Open".
    pub status: String,
    /// What is wrong.
    pub description: String,
}

/// A stored maintenance request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MaintenanceRequest {
    /// Store-assigned identifier.
    pub id: i64,
    /// What needs attention.
    pub target: MaintenanceTarget,
    /// Customer who reported it, if any.
    pub customer_id: Option<i64>,
    /// Day it was reported.
    pub request_date: NaiveDate,
    /// Urgency label.
    pub priority: String,
    /// Workflow state.
    pub status: String,
    /// What is wrong.
    pub description: String,
    /// When the row was written, as recorded by the store.
    pub created_at: Option<NaiveDateTime>,
}

/// Recurring upkeep about to be scheduled.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewMaintenanceSchedule {
    /// What the task applies to.
    pub target: MaintenanceTarget,
    /// Short task name, e.g. "Flush water heater".
    pub task_name: String,
    /// Recurrence label, e.g. "Monthly".
    pub frequency: String,
    /// Next day the task is due.
    pub next_due_date: NaiveDate,
    /// Workflow state, e.g. "Scheduled".
    pub status: String,
    /// Free-form description.
    pub description: Option<String>,
}

/// A stored maintenance schedule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MaintenanceSchedule {
    /// Store-assigned identifier.
    pub id: i64,
    /// What the task applies to.
    pub target: MaintenanceTarget,
    /// Short task name.
    pub task_name: String,
    /// Recurrence label.
    pub frequency: String,
    /// Next day the task is due.
    pub next_due_date: NaiveDate,
    /// Workflow state.
    pub status: String,
    /// Free-form description.
    pub description: Option<String>,
    /// When the row was written, as recorded by the store.
    pub created_at: Option<NaiveDateTime>,
}

/// A record of completed maintenance work.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewMaintenanceLog {
    /// The request this work resolved, if any.
    pub request_id: Option<i64>,
    /// The schedule this work fulfilled, if any.
    pub schedule_id: Option<i64>,
    /// What was worked on.
    pub target: MaintenanceTarget,
    /// Day the work was finished.
    pub completion_date: NaiveDate,
    /// Who did it.
    pub performed_by: String,
    /// Free-form notes.
    pub notes: Option<String>,
}

/// A stored maintenance log entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MaintenanceLog {
    /// Store-assigned identifier.
    pub id: i64,
    /// The request this work resolved, if any.
    pub request_id: Option<i64>,
    /// The schedule this work fulfilled, if any.
    pub schedule_id: Option<i64>,
    /// What was worked on.
    pub target: MaintenanceTarget,
    /// Day the work was finished.
    pub completion_date: NaiveDate,
    /// Who did it.
    pub performed_by: String,
    /// Free-form notes.
    pub notes: Option<String>,
    /// When the row was written, as recorded by the store.
    pub created_at: Option<NaiveDateTime>,
}
