//! Billing commands: `show-invoice` and `pay`.

use clap::Args;

use crate::error::CliError;
use crate::utils::{emit, format_date, GlobalOptions, Park};

/// Show one invoice.
#[derive(Args)]
pub struct ShowInvoiceCommand {
    /// Invoice id
    pub invoice_id: i64,
}

impl ShowInvoiceCommand {
    /// Execute the show-invoice command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let park = Park::open(global)?;

        emit(global, park.service.get_invoice(self.invoice_id), |record| {
            let invoice = &record.invoice;
            println!("Invoice: {}", invoice.id);
            println!("  Reservation: {}", invoice.reservation_id);
            println!("  Customer:    {}", invoice.customer_id);
            println!("  Issued:      {}", format_date(invoice.issue_date));
            println!("  Due:         {}", format_date(invoice.due_date));
            println!("  Total:       {:.2}", invoice.total_amount);
            println!("  Status:      {}", invoice.status);
        })
    }
}

/// Record a payment against an invoice.
#[derive(Args)]
pub struct PayCommand {
    /// Invoice id
    pub invoice_id: i64,

    /// Paying customer id
    pub customer_id: i64,

    /// Amount received
    #[arg(allow_negative_numbers = true)]
    pub amount: f64,

    /// Payment method: Cash, "Credit Card" or Check
    #[arg(long, default_value = "Cash")]
    pub method: String,
}

impl PayCommand {
    /// Execute the pay command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let park = Park::open(global)?;

        let outcome =
            park.service
                .record_payment(self.invoice_id, self.customer_id, self.amount, &self.method);
        emit(global, outcome, |recorded| {
            println!("{}", recorded.payment_id);
        })
    }
}
