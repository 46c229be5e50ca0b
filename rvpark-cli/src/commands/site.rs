//! Site commands: `add-site` and `list-sites`.

use clap::Args;

use rvpark::model::{NewSite, Site};

use crate::error::CliError;
use crate::utils::{
    emit, or_dash, write_csv, write_json, write_table, GlobalOptions, OutputFormat, Park,
};

/// Column headers for site listings.
pub const SITE_HEADERS: [&str; 6] = [
    "site_id",
    "site_number",
    "site_type",
    "daily_rate",
    "is_active",
    "description",
];

/// Add a campsite.
#[derive(Args)]
pub struct AddSiteCommand {
    /// Unique site label, e.g. A12
    pub site_number: String,

    /// Hookup or layout type, e.g. "Full Hookup"
    pub site_type: String,

    /// Price per night
    pub daily_rate: f64,

    /// Add the site as not bookable
    #[arg(long)]
    pub inactive: bool,

    /// Free-form description
    #[arg(long)]
    pub description: Option<String>,
}

impl AddSiteCommand {
    /// Execute the add-site command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let park = Park::open(global)?;

        let site = NewSite {
            site_number: self.site_number,
            site_type: self.site_type,
            daily_rate: self.daily_rate,
            is_active: !self.inactive,
            description: self.description,
        };

        emit(global, park.service.add_site(&site), |created| {
            println!("{}", created.site_id);
        })
    }
}

/// List every campsite.
#[derive(Args)]
pub struct ListSitesCommand {
    /// Output format
    #[arg(long, value_enum, default_value = "table", ignore_case = true)]
    pub format: OutputFormat,
}

impl ListSitesCommand {
    /// Execute the list-sites command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let park = Park::open(global)?;
        let format = if global.json {
            OutputFormat::Json
        } else {
            self.format
        };

        match park.service.list_sites() {
            rvpark::Outcome::Success(list) => print_sites(&list.sites, format),
            failed => emit(global, failed, |_| {}),
        }
    }
}

/// Print sites in the requested format.
pub fn print_sites(sites: &[Site], format: OutputFormat) -> Result<(), CliError> {
    match format {
        OutputFormat::Json => write_json(sites),
        OutputFormat::Table => write_table(&SITE_HEADERS, &site_rows(sites, |d| or_dash(d))),
        OutputFormat::Csv => write_csv(
            &SITE_HEADERS,
            &site_rows(sites, |d| d.unwrap_or_default().to_string()),
        ),
    }
}

fn site_rows(sites: &[Site], missing: impl Fn(Option<&str>) -> String) -> Vec<Vec<String>> {
    sites
        .iter()
        .map(|site| {
            vec![
                site.id.to_string(),
                site.site_number.clone(),
                site.site_type.clone(),
                format!("{:.2}", site.daily_rate),
                site.is_active.to_string(),
                missing(site.description.as_deref()),
            ]
        })
        .collect()
}
