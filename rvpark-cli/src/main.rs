//! Main entry point for the rvpark CLI.
//!
//! This is the command-line interface for the rvpark record keeper. It
//! provides commands for customers, campsites, reservations, invoices and
//! payments, and for facility maintenance.

mod cli;
mod commands;
mod error;
mod utils;

use clap::Parser;
use cli::Cli;
use utils::GlobalOptions;

fn main() {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Initialize logging based on verbosity
    let logger = rvpark::init_logger(cli.verbose, cli.quiet);

    let global = GlobalOptions {
        logger,
        json: cli.json,
        data_dir: cli.data_dir,
        busy_timeout_ms: cli.busy_timeout_ms,
        reject_overlaps: cli.reject_overlaps,
    };

    // Execute the command
    let result = match cli.command {
        cli::Command::Init(cmd) => cmd.execute(&global),
        cli::Command::AddCustomer(cmd) => cmd.execute(&global),
        cli::Command::ShowCustomer(cmd) => cmd.execute(&global),
        cli::Command::AddSite(cmd) => cmd.execute(&global),
        cli::Command::ListSites(cmd) => cmd.execute(&global),
        cli::Command::Reserve(cmd) => cmd.execute(&global),
        cli::Command::ShowReservation(cmd) => cmd.execute(&global),
        cli::Command::ShowInvoice(cmd) => cmd.execute(&global),
        cli::Command::Pay(cmd) => cmd.execute(&global),
        cli::Command::Available(cmd) => cmd.execute(&global),
        cli::Command::AddFacility(cmd) => cmd.execute(&global),
        cli::Command::AddAsset(cmd) => cmd.execute(&global),
        cli::Command::RequestMaintenance(cmd) => cmd.execute(&global),
        cli::Command::ScheduleMaintenance(cmd) => cmd.execute(&global),
        cli::Command::LogMaintenance(cmd) => cmd.execute(&global),
        cli::Command::ListMaintenance(cmd) => cmd.execute(&global),
    };

    // Handle errors and set exit code
    match result {
        Ok(()) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(e.exit_code());
        }
    }
}
