//! Utility functions for CLI operations.
//!
//! This module provides common helpers used across CLI commands: data
//! directory and configuration resolution, opening the park, and printing
//! outcomes and record lists.

use std::io::Write;
use std::path::PathBuf;

use chrono::{Local, NaiveDate};
use clap::ValueEnum;
use serde::Serialize;

use rvpark::config::BookingConfig;
use rvpark::database::resolve_data_dir;
use rvpark::model::DATE_FORMAT;
use rvpark::{
    validation, Config, ConfigBuilder, CrmService, Database, ErrorLog, ErrorTranslator, Logger,
    Outcome,
};

use crate::error::CliError;

/// Global CLI options shared across all commands.
#[derive(Debug, Clone)]
pub struct GlobalOptions {
    /// Diagnostic output to stderr.
    pub logger: Logger,

    /// Print outcomes as JSON.
    pub json: bool,

    /// Override the data directory location.
    pub data_dir: Option<PathBuf>,

    /// Override the busy timeout (in milliseconds).
    pub busy_timeout_ms: Option<u64>,

    /// Refuse overlapping bookings regardless of configuration.
    pub reject_overlaps: bool,
}

/// Output format for list commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Tab-separated table (human-readable)
    Table,
    /// JSON array
    Json,
    /// CSV with a header row
    Csv,
}

/// Resolve the data directory from global options.
///
/// Priority: `--data-dir`, then `RVPARK_DATA_DIR`, then `~/.rvpark`.
pub fn data_dir(global: &GlobalOptions) -> Result<PathBuf, CliError> {
    resolve_data_dir(global.data_dir.as_deref()).map_err(|e| CliError::Config(e.to_string()))
}

/// Load layered configuration.
///
/// Configuration is merged from multiple sources with precedence:
/// 1. Global options (highest priority)
/// 2. Environment variables
/// 3. `config.yaml` in the data directory
/// 4. Built-in defaults (lowest priority)
pub fn load_configuration(global: &GlobalOptions) -> Result<(PathBuf, Config), CliError> {
    let data_dir = data_dir(global)?;

    let overrides = Config {
        busy_timeout_ms: global.busy_timeout_ms,
        booking: global.reject_overlaps.then_some(BookingConfig {
            reject_overlaps: Some(true),
        }),
        ..Config::default()
    };

    let config = ConfigBuilder::new()
        .with_data_dir(&data_dir)
        .with_config(overrides)
        .build()
        .map_err(|e| CliError::Config(e.to_string()))?;

    Ok((data_dir, config))
}

/// An opened park: configuration, database and workflow service.
pub struct Park {
    /// The resolved configuration.
    pub config: Config,
    /// The resolved data directory.
    pub data_dir: PathBuf,
    /// The workflow service over the park database.
    pub service: CrmService,
}

impl Park {
    /// Resolve configuration and open the database, creating it if needed.
    pub fn open(global: &GlobalOptions) -> Result<Self, CliError> {
        let (data_dir, config) = load_configuration(global)?;
        global
            .logger
            .debug(&format!("Using data directory: {}", data_dir.display()));

        let service = CrmService::from_config(&config, &data_dir)?;
        Ok(Self {
            config,
            data_dir,
            service,
        })
    }

    /// The park database.
    pub fn database(&self) -> &Database {
        self.service.database()
    }

    /// A translator writing to the configured error log.
    pub fn translator(&self) -> ErrorTranslator {
        ErrorTranslator::new(ErrorLog::new(self.config.error_log_path(&self.data_dir)))
    }
}

/// Print an outcome and turn an error outcome into a [`CliError`].
///
/// With `--json` the serialized outcome is printed as-is; otherwise
/// `human` renders the success payload.
pub fn emit<T, F>(global: &GlobalOptions, outcome: Outcome<T>, human: F) -> Result<(), CliError>
where
    T: Serialize,
    F: FnOnce(&T),
{
    if global.json {
        println!("{}", serde_json::to_string(&outcome)?);
    }

    match outcome {
        Outcome::Success(value) => {
            if !global.json {
                human(&value);
            }
            Ok(())
        }
        Outcome::Error { message, kind } => Err(CliError::Failed { message, kind }),
    }
}

/// Parse an optional `YYYY-MM-DD` argument, defaulting to today.
pub fn date_or_today(field: &str, value: Option<&str>) -> Result<NaiveDate, CliError> {
    match value {
        Some(value) => Ok(validation::parse_date(field, value)?),
        None => Ok(Local::now().date_naive()),
    }
}

/// Format a date the way it is accepted on the command line.
pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

/// Write `rows` as a tab-separated table with an uppercase header.
pub fn write_table(headers: &[&str], rows: &[Vec<String>]) -> Result<(), CliError> {
    let stdout = std::io::stdout();
    let mut handle = stdout.lock();

    let header_line = headers
        .iter()
        .map(|s| s.to_uppercase())
        .collect::<Vec<_>>()
        .join("\t");
    writeln!(handle, "{header_line}")?;

    for row in rows {
        writeln!(handle, "{}", row.join("\t"))?;
    }

    Ok(())
}

/// Write `rows` as CSV with a header row.
pub fn write_csv(headers: &[&str], rows: &[Vec<String>]) -> Result<(), CliError> {
    let stdout = std::io::stdout();
    let mut writer = csv::Writer::from_writer(stdout.lock());

    writer.write_record(headers)?;
    for row in rows {
        writer.write_record(row)?;
    }
    writer.flush()?;

    Ok(())
}

/// Write `value` as pretty-printed JSON.
pub fn write_json<T: Serialize + ?Sized>(value: &T) -> Result<(), CliError> {
    let stdout = std::io::stdout();
    let mut handle = stdout.lock();

    serde_json::to_writer_pretty(&mut handle, value)?;
    writeln!(handle)?;

    Ok(())
}

/// Render an optional value for table output.
pub fn or_dash<T: ToString>(value: Option<T>) -> String {
    value.map_or_else(|| "-".to_string(), |v| v.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_date_or_today_parses_explicit_date() {
        let date = date_or_today("request_date", Some("2025-06-01")).unwrap();
        assert_eq!(format_date(date), "2025-06-01");
    }

    #[test]
    fn test_date_or_today_rejects_bad_format() {
        let err = date_or_today("request_date", Some("June 1")).unwrap_err();
        assert_eq!(err.exit_code(), 1);
    }

    #[test]
    fn test_or_dash() {
        assert_eq!(or_dash(Some(4)), "4");
        assert_eq!(or_dash::<i64>(None), "-");
    }
}
