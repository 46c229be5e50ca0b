//! Customer commands: `add-customer` and `show-customer`.

use clap::Args;

use rvpark::model::NewCustomer;

use crate::error::CliError;
use crate::utils::{emit, or_dash, GlobalOptions, Park};

/// Add a customer.
#[derive(Args)]
pub struct AddCustomerCommand {
    /// Given name
    pub first_name: String,

    /// Family name
    pub last_name: String,

    /// Contact email (must be unique)
    #[arg(long)]
    pub email: Option<String>,

    /// Contact phone, 10 to 15 digits with optional leading +
    #[arg(long)]
    pub phone: Option<String>,

    /// Postal address
    #[arg(long)]
    pub address: Option<String>,
}

impl AddCustomerCommand {
    /// Execute the add-customer command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let park = Park::open(global)?;

        let customer = NewCustomer {
            first_name: self.first_name,
            last_name: self.last_name,
            email: self.email,
            phone: self.phone,
            address: self.address,
        };

        emit(global, park.service.create_customer(&customer), |created| {
            println!("{}", created.customer_id);
        })
    }
}

/// Show one customer.
#[derive(Args)]
pub struct ShowCustomerCommand {
    /// Customer id
    pub customer_id: i64,
}

impl ShowCustomerCommand {
    /// Execute the show-customer command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let park = Park::open(global)?;

        emit(global, park.service.get_customer(self.customer_id), |record| {
            let customer = &record.customer;
            println!("Customer: {}", customer.id);
            println!("  Name:    {}", customer.full_name());
            println!("  Email:   {}", or_dash(customer.email.as_deref()));
            println!("  Phone:   {}", or_dash(customer.phone.as_deref()));
            println!("  Address: {}", or_dash(customer.address.as_deref()));
        })
    }
}
