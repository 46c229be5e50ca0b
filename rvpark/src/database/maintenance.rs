//! Data access for facilities, assets and maintenance tracking.

use chrono::NaiveDate;
use rusqlite::{params, Connection, OptionalExtension, Row};

use crate::error::{store_error, Result};
use crate::model::{
    Asset, Facility, MaintenanceLog, MaintenanceRequest, MaintenanceSchedule, MaintenanceTarget,
    NewAsset, NewFacility, NewMaintenanceLog, NewMaintenanceRequest, NewMaintenanceSchedule,
};

use super::connection::Database;

const INSERT_FACILITY: &str = r"
    INSERT INTO facilities (facility_name, facility_type, location, is_active, description)
    VALUES (?1, ?2, ?3, ?4, ?5)
";

const FACILITY_COLUMNS: &str = r"
    SELECT facility_id, facility_name, facility_type, location, is_active, description, created_at
    FROM facilities
";

const INSERT_ASSET: &str = r"
    INSERT INTO assets
    (facility_id, asset_name, asset_type, serial_number, purchase_date, is_active, description)
    VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)
";

const SELECT_ASSET: &str = r"
    SELECT asset_id, facility_id, asset_name, asset_type, serial_number, purchase_date,
           is_active, description, created_at
    FROM assets
    WHERE asset_id = ?1
";

const INSERT_REQUEST: &str = r"
    INSERT INTO maintenance_requests
    (facility_id, asset_id, customer_id, request_date, priority, status, description)
    VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)
";

const REQUEST_COLUMNS: &str = r"
    SELECT request_id, facility_id, asset_id, customer_id, request_date, priority, status,
           description, created_at
    FROM maintenance_requests
";

const UPDATE_REQUEST_STATUS: &str =
    "UPDATE maintenance_requests SET status = ?2 WHERE request_id = ?1";

const INSERT_SCHEDULE: &str = r"
    INSERT INTO maintenance_schedules
    (facility_id, asset_id, task_name, frequency, next_due_date, status, description)
    VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)
";

const SELECT_DUE_SCHEDULES: &str = r"
    SELECT schedule_id, facility_id, asset_id, task_name, frequency, next_due_date, status,
           description, created_at
    FROM maintenance_schedules
    WHERE next_due_date <= ?1
    ORDER BY next_due_date, schedule_id
";

const INSERT_LOG: &str = r"
    INSERT INTO maintenance_logs
    (request_id, schedule_id, facility_id, asset_id, completion_date, performed_by, notes)
    VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)
";

const SELECT_LOG: &str = r"
    SELECT log_id, request_id, schedule_id, facility_id, asset_id, completion_date,
           performed_by, notes, created_at
    FROM maintenance_logs
    WHERE log_id = ?1
";

/// Statuses that mean a request needs no further work.
const CLOSED_REQUEST_STATUSES: &str = "('Completed', 'Cancelled')";

// The CHECK constraint guarantees at least one of the two columns is set.
fn target_from_row(row: &Row<'_>, facility_col: usize, asset_col: usize) -> rusqlite::Result<MaintenanceTarget> {
    let facility_id: Option<i64> = row.get(facility_col)?;
    let asset_id: Option<i64> = row.get(asset_col)?;
    MaintenanceTarget::from_columns(facility_id, asset_id).ok_or_else(|| {
        rusqlite::Error::InvalidColumnType(
            facility_col,
            "facility_id".to_string(),
            rusqlite::types::Type::Null,
        )
    })
}

fn facility_from_row(row: &Row<'_>) -> rusqlite::Result<Facility> {
    Ok(Facility {
        id: row.get(0)?,
        facility_name: row.get(1)?,
        facility_type: row.get(2)?,
        location: row.get(3)?,
        is_active: row.get(4)?,
        description: row.get(5)?,
        created_at: row.get(6)?,
    })
}

fn asset_from_row(row: &Row<'_>) -> rusqlite::Result<Asset> {
    Ok(Asset {
        id: row.get(0)?,
        facility_id: row.get(1)?,
        asset_name: row.get(2)?,
        asset_type: row.get(3)?,
        serial_number: row.get(4)?,
        purchase_date: row.get(5)?,
        is_active: row.get(6)?,
        description: row.get(7)?,
        created_at: row.get(8)?,
    })
}

fn request_from_row(row: &Row<'_>) -> rusqlite::Result<MaintenanceRequest> {
    Ok(MaintenanceRequest {
        id: row.get(0)?,
        target: target_from_row(row, 1, 2)?,
        customer_id: row.get(3)?,
        request_date: row.get(4)?,
        priority: row.get(5)?,
        status: row.get(6)?,
        description: row.get(7)?,
        created_at: row.get(8)?,
    })
}

fn schedule_from_row(row: &Row<'_>) -> rusqlite::Result<MaintenanceSchedule> {
    Ok(MaintenanceSchedule {
        id: row.get(0)?,
        target: target_from_row(row, 1, 2)?,
        task_name: row.get(3)?,
        frequency: row.get(4)?,
        next_due_date: row.get(5)?,
        status: row.get(6)?,
        description: row.get(7)?,
        created_at: row.get(8)?,
    })
}

fn log_from_row(row: &Row<'_>) -> rusqlite::Result<MaintenanceLog> {
    Ok(MaintenanceLog {
        id: row.get(0)?,
        request_id: row.get(1)?,
        schedule_id: row.get(2)?,
        target: target_from_row(row, 3, 4)?,
        completion_date: row.get(5)?,
        performed_by: row.get(6)?,
        notes: row.get(7)?,
        created_at: row.get(8)?,
    })
}

impl Database {
    /// Inserts a facility and returns its new id.
    ///
    /// # Errors
    ///
    /// Returns an error if the insert fails.
    pub fn insert_facility(conn: &Connection, facility: &NewFacility) -> Result<i64> {
        conn.execute(
            INSERT_FACILITY,
            params![
                facility.facility_name,
                facility.facility_type,
                facility.location,
                facility.is_active,
                facility.description,
            ],
        )
        .map_err(store_error("Failed to add facility"))?;
        Ok(conn.last_insert_rowid())
    }

    /// Fetches a facility by id.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails; a missing row is `Ok(None)`.
    pub fn get_facility(conn: &Connection, facility_id: i64) -> Result<Option<Facility>> {
        conn.query_row(
            &format!("{FACILITY_COLUMNS} WHERE facility_id = ?1"),
            [facility_id],
            facility_from_row,
        )
        .optional()
        .map_err(store_error("Failed to retrieve facility"))
    }

    /// Lists every facility by id.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn list_facilities(conn: &Connection) -> Result<Vec<Facility>> {
        let mut stmt = conn
            .prepare(&format!("{FACILITY_COLUMNS} ORDER BY facility_id"))
            .map_err(store_error("Failed to list facilities"))?;
        let facilities = stmt
            .query_map([], facility_from_row)
            .and_then(|rows| rows.collect::<rusqlite::Result<Vec<_>>>())
            .map_err(store_error("Failed to list facilities"))?;
        Ok(facilities)
    }

    /// Inserts an asset and returns its new id.
    ///
    /// # Errors
    ///
    /// Returns a constraint error when the owning facility does not exist.
    pub fn insert_asset(conn: &Connection, asset: &NewAsset) -> Result<i64> {
        conn.execute(
            INSERT_ASSET,
            params![
                asset.facility_id,
                asset.asset_name,
                asset.asset_type,
                asset.serial_number,
                asset.purchase_date,
                asset.is_active,
                asset.description,
            ],
        )
        .map_err(store_error("Failed to add asset"))?;
        Ok(conn.last_insert_rowid())
    }

    /// Fetches an asset by id.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails; a missing row is `Ok(None)`.
    pub fn get_asset(conn: &Connection, asset_id: i64) -> Result<Option<Asset>> {
        conn.query_row(SELECT_ASSET, [asset_id], asset_from_row)
            .optional()
            .map_err(store_error("Failed to retrieve asset"))
    }

    /// Files a maintenance request and returns its new id.
    ///
    /// # Errors
    ///
    /// Returns a constraint error when a referenced row does not exist.
    pub fn insert_maintenance_request(
        conn: &Connection,
        request: &NewMaintenanceRequest,
    ) -> Result<i64> {
        conn.execute(
            INSERT_REQUEST,
            params![
                request.target.facility_id(),
                request.target.asset_id(),
                request.customer_id,
                request.request_date,
                request.priority,
                request.status,
                request.description,
            ],
        )
        .map_err(store_error("Failed to add maintenance request"))?;
        Ok(conn.last_insert_rowid())
    }

    /// Fetches a maintenance request by id.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails; a missing row is `Ok(None)`.
    pub fn get_maintenance_request(
        conn: &Connection,
        request_id: i64,
    ) -> Result<Option<MaintenanceRequest>> {
        conn.query_row(
            &format!("{REQUEST_COLUMNS} WHERE request_id = ?1"),
            [request_id],
            request_from_row,
        )
        .optional()
        .map_err(store_error("Failed to retrieve maintenance request"))
    }

    /// Lists requests that are neither `Completed` nor `Cancelled`, oldest
    /// first.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn list_open_maintenance_requests(conn: &Connection) -> Result<Vec<MaintenanceRequest>> {
        let sql = format!(
            "{REQUEST_COLUMNS} WHERE status NOT IN {CLOSED_REQUEST_STATUSES} \
             ORDER BY request_date, request_id"
        );
        let mut stmt = conn
            .prepare(&sql)
            .map_err(store_error("Failed to list maintenance requests"))?;
        let requests = stmt
            .query_map([], request_from_row)
            .and_then(|rows| rows.collect::<rusqlite::Result<Vec<_>>>())
            .map_err(store_error("Failed to list maintenance requests"))?;
        Ok(requests)
    }

    /// Moves a request to a new status. Returns whether a row was updated.
    ///
    /// # Errors
    ///
    /// Returns an error if the update fails.
    pub fn update_maintenance_request_status(
        conn: &Connection,
        request_id: i64,
        status: &str,
    ) -> Result<bool> {
        let updated = conn
            .execute(UPDATE_REQUEST_STATUS, params![request_id, status])
            .map_err(store_error("Failed to update maintenance request"))?;
        Ok(updated > 0)
    }

    /// Creates a maintenance schedule and returns its new id.
    ///
    /// # Errors
    ///
    /// Returns a constraint error when a referenced row does not exist.
    pub fn insert_maintenance_schedule(
        conn: &Connection,
        schedule: &NewMaintenanceSchedule,
    ) -> Result<i64> {
        conn.execute(
            INSERT_SCHEDULE,
            params![
                schedule.target.facility_id(),
                schedule.target.asset_id(),
                schedule.task_name,
                schedule.frequency,
                schedule.next_due_date,
                schedule.status,
                schedule.description,
            ],
        )
        .map_err(store_error("Failed to add maintenance schedule"))?;
        Ok(conn.last_insert_rowid())
    }

    /// Lists schedules due on or before `on_or_before`, soonest first.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn list_due_maintenance_schedules(
        conn: &Connection,
        on_or_before: NaiveDate,
    ) -> Result<Vec<MaintenanceSchedule>> {
        let mut stmt = conn
            .prepare(SELECT_DUE_SCHEDULES)
            .map_err(store_error("Failed to list maintenance schedules"))?;
        let schedules = stmt
            .query_map([on_or_before], schedule_from_row)
            .and_then(|rows| rows.collect::<rusqlite::Result<Vec<_>>>())
            .map_err(store_error("Failed to list maintenance schedules"))?;
        Ok(schedules)
    }

    /// Records completed maintenance work and returns the new log id.
    ///
    /// # Errors
    ///
    /// Returns a constraint error when a referenced row does not exist.
    pub fn insert_maintenance_log(conn: &Connection, entry: &NewMaintenanceLog) -> Result<i64> {
        conn.execute(
            INSERT_LOG,
            params![
                entry.request_id,
                entry.schedule_id,
                entry.target.facility_id(),
                entry.target.asset_id(),
                entry.completion_date,
                entry.performed_by,
                entry.notes,
            ],
        )
        .map_err(store_error("Failed to add maintenance log"))?;
        Ok(conn.last_insert_rowid())
    }

    /// Fetches a maintenance log entry by id.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails; a missing row is `Ok(None)`.
    pub fn get_maintenance_log(conn: &Connection, log_id: i64) -> Result<Option<MaintenanceLog>> {
        conn.query_row(SELECT_LOG, [log_id], log_from_row)
            .optional()
            .map_err(store_error("Failed to retrieve maintenance log"))
    }
}
