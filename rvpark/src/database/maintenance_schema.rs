//! SQL table definitions for facilities, assets and maintenance tracking.
//!
//! Requests, schedules and log entries each concern a facility, an asset,
//! or both; a CHECK constraint rejects rows naming neither.

/// Park facilities such as restrooms or the laundry.
pub const CREATE_FACILITIES_TABLE: &str = r"
    CREATE TABLE IF NOT EXISTS facilities (
        facility_id INTEGER PRIMARY KEY AUTOINCREMENT,
        facility_name TEXT NOT NULL,
        facility_type TEXT NOT NULL,
        location TEXT,
        is_active INTEGER NOT NULL DEFAULT 1,
        description TEXT,
        created_at TIMESTAMP DEFAULT CURRENT_TIMESTAMP
    )";

/// Equipment belonging to a facility.
pub const CREATE_ASSETS_TABLE: &str = r"
    CREATE TABLE IF NOT EXISTS assets (
        asset_id INTEGER PRIMARY KEY AUTOINCREMENT,
        facility_id INTEGER NOT NULL,
        asset_name TEXT NOT NULL,
        asset_type TEXT NOT NULL,
        serial_number TEXT,
        purchase_date DATE,
        is_active INTEGER NOT NULL DEFAULT 1,
        description TEXT,
        created_at TIMESTAMP DEFAULT CURRENT_TIMESTAMP,
        FOREIGN KEY (facility_id) REFERENCES facilities(facility_id)
    )";

/// Reported problems awaiting work.
pub const CREATE_MAINTENANCE_REQUESTS_TABLE: &str = r"
    CREATE TABLE IF NOT EXISTS maintenance_requests (
        request_id INTEGER PRIMARY KEY AUTOINCREMENT,
        facility_id INTEGER,
        asset_id INTEGER,
        customer_id INTEGER,
        request_date DATE NOT NULL,
        priority TEXT NOT NULL,
        status TEXT NOT NULL,
        description TEXT NOT NULL,
        created_at TIMESTAMP DEFAULT CURRENT_TIMESTAMP,
        FOREIGN KEY (facility_id) REFERENCES facilities(facility_id),
        FOREIGN KEY (asset_id) REFERENCES assets(asset_id),
        FOREIGN KEY (customer_id) REFERENCES customers(customer_id),
        CHECK (facility_id IS NOT NULL OR asset_id IS NOT NULL)
    )";

/// Recurring upkeep tasks.
pub const CREATE_MAINTENANCE_SCHEDULES_TABLE: &str = r"
    CREATE TABLE IF NOT EXISTS maintenance_schedules (
        schedule_id INTEGER PRIMARY KEY AUTOINCREMENT,
        facility_id INTEGER,
        asset_id INTEGER,
        task_name TEXT NOT NULL,
        frequency TEXT NOT NULL,
        next_due_date DATE NOT NULL,
        status TEXT NOT NULL,
        description TEXT,
        created_at TIMESTAMP DEFAULT CURRENT_TIMESTAMP,
        FOREIGN KEY (facility_id) REFERENCES facilities(facility_id),
        FOREIGN KEY (asset_id) REFERENCES assets(asset_id),
        CHECK (facility_id IS NOT NULL OR asset_id IS NOT NULL)
    )";

/// Completed work, optionally tied to the request or schedule it closed.
pub const CREATE_MAINTENANCE_LOGS_TABLE: &str = r"
    CREATE TABLE IF NOT EXISTS maintenance_logs (
        log_id INTEGER PRIMARY KEY AUTOINCREMENT,
        request_id INTEGER,
        schedule_id INTEGER,
        facility_id INTEGER,
        asset_id INTEGER,
        completion_date DATE NOT NULL,
        performed_by TEXT NOT NULL,
        notes TEXT,
        created_at TIMESTAMP DEFAULT CURRENT_TIMESTAMP,
        FOREIGN KEY (request_id) REFERENCES maintenance_requests(request_id),
        FOREIGN KEY (schedule_id) REFERENCES maintenance_schedules(schedule_id),
        FOREIGN KEY (facility_id) REFERENCES facilities(facility_id),
        FOREIGN KEY (asset_id) REFERENCES assets(asset_id),
        CHECK (facility_id IS NOT NULL OR asset_id IS NOT NULL)
    )";

/// Speeds up the open-request listing.
pub const CREATE_REQUEST_STATUS_INDEX: &str =
    "CREATE INDEX IF NOT EXISTS idx_maintenance_requests_status ON maintenance_requests(status)";

/// Speeds up the due-schedule listing.
pub const CREATE_SCHEDULE_DUE_INDEX: &str =
    "CREATE INDEX IF NOT EXISTS idx_maintenance_schedules_due ON maintenance_schedules(next_due_date)";

/// Maintenance tables in creation order.
pub const MAINTENANCE_TABLES: [&str; 5] = [
    CREATE_FACILITIES_TABLE,
    CREATE_ASSETS_TABLE,
    CREATE_MAINTENANCE_REQUESTS_TABLE,
    CREATE_MAINTENANCE_SCHEDULES_TABLE,
    CREATE_MAINTENANCE_LOGS_TABLE,
];

/// Maintenance indices.
pub const MAINTENANCE_INDICES: [&str; 2] = [CREATE_REQUEST_STATUS_INDEX, CREATE_SCHEDULE_DUE_INDEX];
