//! CLI structure and command definitions.
//!
//! This module defines the main CLI structure using clap's derive macros,
//! including global options and subcommands.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::commands::{
    AddAssetCommand, AddCustomerCommand, AddFacilityCommand, AddSiteCommand, AvailableCommand,
    InitCommand, ListMaintenanceCommand, ListSitesCommand, LogMaintenanceCommand, PayCommand,
    RequestMaintenanceCommand, ReserveCommand, ScheduleMaintenanceCommand, ShowCustomerCommand,
    ShowInvoiceCommand, ShowReservationCommand,
};

/// Command-line tool for RV park customer, booking and maintenance records.
#[derive(Parser)]
#[command(name = "rvpark")]
#[command(version, about = "Keep RV park customer, booking, billing and maintenance records", long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(long, global = true, conflicts_with = "quiet")]
    pub verbose: bool,

    /// Suppress non-essential output
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Print results as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Override the data directory location
    #[arg(long, value_name = "PATH", global = true)]
    pub data_dir: Option<PathBuf>,

    /// Override the busy timeout (in milliseconds)
    #[arg(long, value_name = "MS", global = true)]
    pub busy_timeout_ms: Option<u64>,

    /// Refuse bookings that overlap an existing stay on the same site
    #[arg(long, global = true)]
    pub reject_overlaps: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Available CLI commands.
#[derive(Subcommand)]
pub enum Command {
    /// Initialize the data directory and database
    Init(InitCommand),

    /// Add a customer
    AddCustomer(AddCustomerCommand),

    /// Show one customer
    ShowCustomer(ShowCustomerCommand),

    /// Add a campsite
    AddSite(AddSiteCommand),

    /// List every campsite
    ListSites(ListSitesCommand),

    /// Book a site and raise its invoice
    Reserve(ReserveCommand),

    /// Show one reservation
    ShowReservation(ShowReservationCommand),

    /// Show one invoice
    ShowInvoice(ShowInvoiceCommand),

    /// Record a payment against an invoice
    Pay(PayCommand),

    /// List sites free for a whole stay
    Available(AvailableCommand),

    /// Add a facility
    AddFacility(AddFacilityCommand),

    /// Add an asset to a facility
    AddAsset(AddAssetCommand),

    /// File a maintenance request
    RequestMaintenance(RequestMaintenanceCommand),

    /// Schedule recurring upkeep
    ScheduleMaintenance(ScheduleMaintenanceCommand),

    /// Record completed maintenance work
    LogMaintenance(LogMaintenanceCommand),

    /// Show open requests and due schedules
    ListMaintenance(ListMaintenanceCommand),
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_maintenance_target_required() {
        let result = Cli::try_parse_from(["rvpark", "request-maintenance", "Leaking faucet"]);
        assert!(result.is_err());

        let parsed = Cli::try_parse_from([
            "rvpark",
            "request-maintenance",
            "--asset",
            "3",
            "Leaking faucet",
        ]);
        assert!(parsed.is_ok());
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from(["rvpark", "list-sites", "--json", "--data-dir", "/tmp/p"])
            .unwrap();
        assert!(cli.json);
        assert_eq!(cli.data_dir, Some(PathBuf::from("/tmp/p")));
    }
}
