//! Booking commands: `reserve`, `show-reservation` and `available`.

use clap::Args;

use crate::commands::site::print_sites;
use crate::error::CliError;
use crate::utils::{emit, format_date, GlobalOptions, OutputFormat, Park};

/// Book a site and raise its invoice.
#[derive(Args)]
pub struct ReserveCommand {
    /// Booking customer id
    pub customer_id: i64,

    /// Site id
    pub site_id: i64,

    /// Arrival day (YYYY-MM-DD)
    pub check_in: String,

    /// Departure day (YYYY-MM-DD)
    pub check_out: String,
}

impl ReserveCommand {
    /// Execute the reserve command.
    ///
    /// Prints the reservation id and the invoice id on one line.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let park = Park::open(global)?;

        let outcome = park.service.create_reservation(
            self.customer_id,
            self.site_id,
            &self.check_in,
            &self.check_out,
        );
        emit(global, outcome, |created| {
            println!("{} {}", created.reservation_id, created.invoice_id);
        })
    }
}

/// Show one reservation.
#[derive(Args)]
pub struct ShowReservationCommand {
    /// Reservation id
    pub reservation_id: i64,
}

impl ShowReservationCommand {
    /// Execute the show-reservation command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let park = Park::open(global)?;

        emit(
            global,
            park.service.get_reservation(self.reservation_id),
            |record| {
                let reservation = &record.reservation;
                println!("Reservation: {}", reservation.id);
                println!("  Customer:  {}", reservation.customer_id);
                println!("  Site:      {}", reservation.site_id);
                println!("  Check-in:  {}", format_date(reservation.check_in_date));
                println!("  Check-out: {}", format_date(reservation.check_out_date));
                println!("  Status:    {}", reservation.status);
                println!("  Total:     {:.2}", reservation.total_amount);
            },
        )
    }
}

/// List active sites free for a whole stay.
#[derive(Args)]
pub struct AvailableCommand {
    /// Arrival day (YYYY-MM-DD)
    pub check_in: String,

    /// Departure day (YYYY-MM-DD)
    pub check_out: String,

    /// Output format
    #[arg(long, value_enum, default_value = "table", ignore_case = true)]
    pub format: OutputFormat,
}

impl AvailableCommand {
    /// Execute the available command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let park = Park::open(global)?;

        let outcome = park
            .service
            .get_available_sites(&self.check_in, &self.check_out);
        if global.json {
            return emit(global, outcome, |_| {});
        }

        match outcome {
            rvpark::Outcome::Success(available) => print_sites(&available.sites, self.format),
            failed => emit(global, failed, |_| {}),
        }
    }
}
