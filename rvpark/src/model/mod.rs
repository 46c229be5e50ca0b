//! Record types for the park's customers, sites, bookings, billing and
//! maintenance.
//!
//! `New*` types describe a row about to be inserted; the unprefixed types
//! are rows read back from the store, identity included.

mod billing;
mod booking;
mod customer;
mod maintenance;
mod site;

pub use billing::{
    Invoice, InvoiceStatus, NewInvoice, NewPayment, Payment, PaymentMethod, INVOICE_DUE_DAYS,
};
pub use booking::{DateRange, NewReservation, Reservation, ReservationStatus, DATE_FORMAT};
pub use customer::{Customer, NewCustomer};
pub use maintenance::{
    Asset, Facility, MaintenanceLog, MaintenanceRequest, MaintenanceSchedule, MaintenanceTarget,
    NewAsset, NewFacility, NewMaintenanceLog, NewMaintenanceRequest, NewMaintenanceSchedule,
};
pub use site::{NewSite, Site};
