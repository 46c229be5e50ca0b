//! Facility, asset and maintenance commands.
//!
//! These go straight to the data-access layer; failures are still
//! translated and written to the error log like every workflow call.

use clap::{ArgGroup, Args};
use serde::Serialize;

use rvpark::model::{
    MaintenanceRequest, MaintenanceSchedule, MaintenanceTarget, NewAsset, NewFacility,
    NewMaintenanceLog, NewMaintenanceRequest, NewMaintenanceSchedule,
};
use rvpark::{validation, Database, Error, Result};

use crate::error::CliError;
use crate::utils::{
    date_or_today, emit, format_date, or_dash, write_json, write_table, GlobalOptions,
    OutputFormat, Park,
};

/// Facility or asset a maintenance record is about. At least one is required.
#[derive(Args)]
#[command(group(
    ArgGroup::new("target")
        .required(true)
        .multiple(true)
        .args(["facility", "asset"])
))]
pub struct TargetArgs {
    /// Facility id
    #[arg(long, value_name = "ID")]
    pub facility: Option<i64>,

    /// Asset id
    #[arg(long, value_name = "ID")]
    pub asset: Option<i64>,
}

impl TargetArgs {
    fn target(&self) -> Result<MaintenanceTarget> {
        MaintenanceTarget::from_columns(self.facility, self.asset)
            .ok_or_else(|| Error::validation("target", "A facility or asset is required"))
    }
}

#[derive(Debug, Serialize)]
struct FacilityCreated {
    facility_id: i64,
}

#[derive(Debug, Serialize)]
struct AssetCreated {
    asset_id: i64,
}

#[derive(Debug, Serialize)]
struct RequestFiled {
    request_id: i64,
}

#[derive(Debug, Serialize)]
struct ScheduleCreated {
    schedule_id: i64,
}

#[derive(Debug, Serialize)]
struct LogRecorded {
    log_id: i64,
}

#[derive(Debug, Serialize)]
struct MaintenanceOverview {
    open_requests: Vec<MaintenanceRequest>,
    due_schedules: Vec<MaintenanceSchedule>,
}

/// Add a facility.
#[derive(Args)]
pub struct AddFacilityCommand {
    /// Display name
    pub name: String,

    /// Kind of facility, e.g. Restroom
    pub facility_type: String,

    /// Where it is in the park
    #[arg(long)]
    pub location: Option<String>,

    /// Free-form description
    #[arg(long)]
    pub description: Option<String>,

    /// Add the facility as out of service
    #[arg(long)]
    pub inactive: bool,
}

impl AddFacilityCommand {
    /// Execute the add-facility command.
    pub fn execute(self, global: &GlobalOptions) -> std::result::Result<(), CliError> {
        let park = Park::open(global)?;

        let facility = NewFacility {
            facility_name: self.name,
            facility_type: self.facility_type,
            location: self.location,
            is_active: !self.inactive,
            description: self.description,
        };
        let result = validation::validate_facility(&facility).and_then(|()| {
            park.database()
                .with_connection(|conn| Database::insert_facility(conn, &facility))
        });

        let outcome = park.translator().translate(
            "Failed to create facility",
            result.map(|facility_id| FacilityCreated { facility_id }),
        );
        emit(global, outcome, |created| println!("{}", created.facility_id))
    }
}

/// Add an asset to a facility.
#[derive(Args)]
pub struct AddAssetCommand {
    /// Owning facility id
    pub facility_id: i64,

    /// Display name
    pub name: String,

    /// Kind of asset, e.g. "Water Heater"
    pub asset_type: String,

    /// Manufacturer serial number
    #[arg(long)]
    pub serial_number: Option<String>,

    /// Day it was bought (YYYY-MM-DD)
    #[arg(long, value_name = "DATE")]
    pub purchase_date: Option<String>,

    /// Free-form description
    #[arg(long)]
    pub description: Option<String>,
}

impl AddAssetCommand {
    /// Execute the add-asset command.
    pub fn execute(self, global: &GlobalOptions) -> std::result::Result<(), CliError> {
        let park = Park::open(global)?;

        let result = self
            .purchase_date
            .as_deref()
            .map(|date| validation::parse_date("purchase_date", date))
            .transpose()
            .and_then(|purchase_date| {
                let asset = NewAsset {
                    facility_id: self.facility_id,
                    asset_name: self.name,
                    asset_type: self.asset_type,
                    serial_number: self.serial_number,
                    purchase_date,
                    is_active: true,
                    description: self.description,
                };
                validation::validate_asset(&asset)?;
                park.database()
                    .with_connection(|conn| Database::insert_asset(conn, &asset))
            });

        let outcome = park.translator().translate(
            "Failed to create asset",
            result.map(|asset_id| AssetCreated { asset_id }),
        );
        emit(global, outcome, |created| println!("{}", created.asset_id))
    }
}

/// File a maintenance request.
#[derive(Args)]
pub struct RequestMaintenanceCommand {
    #[command(flatten)]
    pub target: TargetArgs,

    /// What is wrong
    pub description: String,

    /// Reporting customer id
    #[arg(long, value_name = "ID")]
    pub customer: Option<i64>,

    /// Urgency label
    #[arg(long, default_value = "Medium")]
    pub priority: String,

    /// Day it was reported (YYYY-MM-DD, default today)
    #[arg(long, value_name = "DATE")]
    pub date: Option<String>,
}

impl RequestMaintenanceCommand {
    /// Execute the request-maintenance command.
    pub fn execute(self, global: &GlobalOptions) -> std::result::Result<(), CliError> {
        let park = Park::open(global)?;
        let request_date = date_or_today("request_date", self.date.as_deref())?;

        let result = self.target.target().and_then(|target| {
            let request = NewMaintenanceRequest {
                target,
                customer_id: self.customer,
                request_date,
                priority: self.priority,
                status: "Open".to_string(),
                description: self.description,
            };
            validation::validate_maintenance_request(&request)?;
            park.database()
                .with_connection(|conn| Database::insert_maintenance_request(conn, &request))
        });

        let outcome = park.translator().translate(
            "Failed to file maintenance request",
            result.map(|request_id| RequestFiled { request_id }),
        );
        emit(global, outcome, |filed| println!("{}", filed.request_id))
    }
}

/// Schedule recurring upkeep.
#[derive(Args)]
pub struct ScheduleMaintenanceCommand {
    #[command(flatten)]
    pub target: TargetArgs,

    /// Short task name
    pub task_name: String,

    /// Recurrence label, e.g. Monthly
    pub frequency: String,

    /// Next day the task is due (YYYY-MM-DD)
    #[arg(long, value_name = "DATE")]
    pub due: String,

    /// Free-form description
    #[arg(long)]
    pub description: Option<String>,
}

impl ScheduleMaintenanceCommand {
    /// Execute the schedule-maintenance command.
    pub fn execute(self, global: &GlobalOptions) -> std::result::Result<(), CliError> {
        let park = Park::open(global)?;

        let result = self.target.target().and_then(|target| {
            let schedule = NewMaintenanceSchedule {
                target,
                task_name: self.task_name,
                frequency: self.frequency,
                next_due_date: validation::parse_date("next_due_date", &self.due)?,
                status: "Scheduled".to_string(),
                description: self.description,
            };
            validation::validate_maintenance_schedule(&schedule)?;
            park.database()
                .with_connection(|conn| Database::insert_maintenance_schedule(conn, &schedule))
        });

        let outcome = park.translator().translate(
            "Failed to schedule maintenance",
            result.map(|schedule_id| ScheduleCreated { schedule_id }),
        );
        emit(global, outcome, |created| println!("{}", created.schedule_id))
    }
}

/// Record completed maintenance work.
#[derive(Args)]
pub struct LogMaintenanceCommand {
    #[command(flatten)]
    pub target: TargetArgs,

    /// Who did the work
    pub performed_by: String,

    /// Request this work resolved
    #[arg(long, value_name = "ID")]
    pub request: Option<i64>,

    /// Schedule this work fulfilled
    #[arg(long, value_name = "ID")]
    pub schedule: Option<i64>,

    /// Day the work was finished (YYYY-MM-DD, default today)
    #[arg(long, value_name = "DATE")]
    pub date: Option<String>,

    /// Free-form notes
    #[arg(long)]
    pub notes: Option<String>,

    /// Mark the resolved request Completed
    #[arg(long, requires = "request")]
    pub complete_request: bool,
}

impl LogMaintenanceCommand {
    /// Execute the log-maintenance command.
    pub fn execute(self, global: &GlobalOptions) -> std::result::Result<(), CliError> {
        let park = Park::open(global)?;
        let completion_date = date_or_today("completion_date", self.date.as_deref())?;
        let complete_request = self.complete_request;

        let result = self.target.target().and_then(|target| {
            let entry = NewMaintenanceLog {
                request_id: self.request,
                schedule_id: self.schedule,
                target,
                completion_date,
                performed_by: self.performed_by,
                notes: self.notes,
            };
            validation::validate_maintenance_log(&entry)?;
            park.database()
                .with_transaction("Failed to add maintenance log", |tx| {
                    let log_id = Database::insert_maintenance_log(tx, &entry)?;
                    if let (true, Some(request_id)) = (complete_request, entry.request_id) {
                        Database::update_maintenance_request_status(tx, request_id, "Completed")?;
                    }
                    Ok(log_id)
                })
        });

        let outcome = park.translator().translate(
            "Failed to log maintenance",
            result.map(|log_id| LogRecorded { log_id }),
        );
        emit(global, outcome, |recorded| println!("{}", recorded.log_id))
    }
}

/// Show open requests and schedules that are due.
#[derive(Args)]
pub struct ListMaintenanceCommand {
    /// Include schedules due on or before this day (YYYY-MM-DD, default today)
    #[arg(long, value_name = "DATE")]
    pub due_by: Option<String>,

    /// Output format (csv is not supported here)
    #[arg(long, value_enum, default_value = "table", ignore_case = true)]
    pub format: OutputFormat,
}

impl ListMaintenanceCommand {
    /// Execute the list-maintenance command.
    pub fn execute(self, global: &GlobalOptions) -> std::result::Result<(), CliError> {
        if self.format == OutputFormat::Csv {
            return Err(CliError::InvalidArguments(
                "list-maintenance supports table and json output".to_string(),
            ));
        }

        let park = Park::open(global)?;
        let due_by = date_or_today("due_by", self.due_by.as_deref())?;

        let result = park.database().with_connection(|conn| {
            Ok(MaintenanceOverview {
                open_requests: Database::list_open_maintenance_requests(conn)?,
                due_schedules: Database::list_due_maintenance_schedules(conn, due_by)?,
            })
        });
        let outcome = park.translator().translate("Failed to list maintenance", result);

        if global.json {
            return emit(global, outcome, |_| {});
        }
        match outcome {
            rvpark::Outcome::Success(overview) => match self.format {
                OutputFormat::Json => write_json(&overview),
                _ => print_overview(&overview),
            },
            failed => emit(global, failed, |_| {}),
        }
    }
}

fn print_overview(overview: &MaintenanceOverview) -> std::result::Result<(), CliError> {
    println!("Open requests:");
    let rows: Vec<Vec<String>> = overview
        .open_requests
        .iter()
        .map(|request| {
            vec![
                request.id.to_string(),
                format_date(request.request_date),
                or_dash(request.target.facility_id()),
                or_dash(request.target.asset_id()),
                request.priority.clone(),
                request.status.clone(),
                request.description.clone(),
            ]
        })
        .collect();
    write_table(
        &["request_id", "request_date", "facility", "asset", "priority", "status", "description"],
        &rows,
    )?;

    println!();
    println!("Due schedules:");
    let rows: Vec<Vec<String>> = overview
        .due_schedules
        .iter()
        .map(|schedule| {
            vec![
                schedule.id.to_string(),
                format_date(schedule.next_due_date),
                or_dash(schedule.target.facility_id()),
                or_dash(schedule.target.asset_id()),
                schedule.task_name.clone(),
                schedule.frequency.clone(),
                schedule.status.clone(),
            ]
        })
        .collect();
    write_table(
        &["schedule_id", "next_due_date", "facility", "asset", "task_name", "frequency", "status"],
        &rows,
    )
}
