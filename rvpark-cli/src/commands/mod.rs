//! CLI command implementations.
//!
//! - `init`: Create the data directory, database and optional config
//! - `add-customer` / `show-customer`: Customer records
//! - `add-site` / `list-sites`: Campsites
//! - `reserve` / `show-reservation` / `available`: Bookings
//! - `show-invoice` / `pay`: Billing
//! - `add-facility` / `add-asset`: Facilities and their equipment
//! - `request-maintenance` / `schedule-maintenance` / `log-maintenance` /
//!   `list-maintenance`: Maintenance records

pub mod billing;
pub mod booking;
pub mod customer;
pub mod init;
pub mod maintenance;
pub mod site;

pub use billing::{PayCommand, ShowInvoiceCommand};
pub use booking::{AvailableCommand, ReserveCommand, ShowReservationCommand};
pub use customer::{AddCustomerCommand, ShowCustomerCommand};
pub use init::InitCommand;
pub use maintenance::{
    AddAssetCommand, AddFacilityCommand, ListMaintenanceCommand, LogMaintenanceCommand,
    RequestMaintenanceCommand, ScheduleMaintenanceCommand,
};
pub use site::{AddSiteCommand, ListSitesCommand};
