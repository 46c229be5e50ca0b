//! SQL table definitions for the CRM side of the store.
//!
//! Customers, campsites, reservations, invoices and payments, plus the
//! metadata table that records the schema version. Maintenance tables live
//! in [`super::maintenance_schema`].

/// Current schema version for the database.
///
/// This version is stored in the metadata table and is used to ensure
/// compatibility between the database and the application.
pub const CURRENT_SCHEMA_VERSION: i32 = 1;

/// SQL statement to create the metadata table.
pub const CREATE_METADATA_TABLE: &str = r"
    CREATE TABLE IF NOT EXISTS metadata (
        key TEXT PRIMARY KEY NOT NULL,
        value TEXT NOT NULL
    )";

/// Customers. Email is unique when present.
pub const CREATE_CUSTOMERS_TABLE: &str = r"
    CREATE TABLE IF NOT EXISTS customers (
        customer_id INTEGER PRIMARY KEY AUTOINCREMENT,
        first_name TEXT NOT NULL,
        last_name TEXT NOT NULL,
        email TEXT UNIQUE,
        phone TEXT,
        address TEXT,
        created_at TIMESTAMP DEFAULT CURRENT_TIMESTAMP
    )";

/// Campsites and their nightly rates.
pub const CREATE_SITES_TABLE: &str = r"
    CREATE TABLE IF NOT EXISTS rv_sites (
        site_id INTEGER PRIMARY KEY AUTOINCREMENT,
        site_number TEXT NOT NULL UNIQUE,
        site_type TEXT NOT NULL,
        daily_rate REAL NOT NULL,
        is_active INTEGER NOT NULL DEFAULT 1,
        description TEXT
    )";

/// Reservations. The CHECK keeps every stay at least one night long.
pub const CREATE_RESERVATIONS_TABLE: &str = r"
    CREATE TABLE IF NOT EXISTS reservations (
        reservation_id INTEGER PRIMARY KEY AUTOINCREMENT,
        customer_id INTEGER NOT NULL,
        site_id INTEGER NOT NULL,
        check_in_date DATE NOT NULL,
        check_out_date DATE NOT NULL,
        status TEXT NOT NULL,
        total_amount REAL NOT NULL,
        created_at TIMESTAMP DEFAULT CURRENT_TIMESTAMP,
        FOREIGN KEY (customer_id) REFERENCES customers(customer_id),
        FOREIGN KEY (site_id) REFERENCES rv_sites(site_id),
        CHECK (check_out_date > check_in_date)
    )";

/// Invoices, one per reservation as written by the booking workflow.
pub const CREATE_INVOICES_TABLE: &str = r"
    CREATE TABLE IF NOT EXISTS invoices (
        invoice_id INTEGER PRIMARY KEY AUTOINCREMENT,
        reservation_id INTEGER NOT NULL,
        customer_id INTEGER NOT NULL,
        issue_date DATE NOT NULL,
        due_date DATE NOT NULL,
        total_amount REAL NOT NULL,
        status TEXT NOT NULL,
        created_at TIMESTAMP DEFAULT CURRENT_TIMESTAMP,
        FOREIGN KEY (reservation_id) REFERENCES reservations(reservation_id),
        FOREIGN KEY (customer_id) REFERENCES customers(customer_id)
    )";

/// Payments received against invoices.
pub const CREATE_PAYMENTS_TABLE: &str = r"
    CREATE TABLE IF NOT EXISTS payments (
        payment_id INTEGER PRIMARY KEY AUTOINCREMENT,
        invoice_id INTEGER NOT NULL,
        customer_id INTEGER NOT NULL,
        payment_date DATE NOT NULL,
        amount REAL NOT NULL,
        payment_method TEXT NOT NULL,
        created_at TIMESTAMP DEFAULT CURRENT_TIMESTAMP,
        FOREIGN KEY (invoice_id) REFERENCES invoices(invoice_id),
        FOREIGN KEY (customer_id) REFERENCES customers(customer_id)
    )";

/// Speeds up the availability query, which filters by site and date.
pub const CREATE_RESERVATION_SITE_INDEX: &str = r"
    CREATE INDEX IF NOT EXISTS idx_reservations_site_dates
    ON reservations(site_id, check_in_date, check_out_date)";

/// Speeds up lookups of a customer's bookings.
pub const CREATE_RESERVATION_CUSTOMER_INDEX: &str =
    "CREATE INDEX IF NOT EXISTS idx_reservations_customer ON reservations(customer_id)";

/// Speeds up invoice lookups by reservation.
pub const CREATE_INVOICE_RESERVATION_INDEX: &str =
    "CREATE INDEX IF NOT EXISTS idx_invoices_reservation ON invoices(reservation_id)";

/// SQL statement to select the schema version from the metadata table.
pub const SELECT_SCHEMA_VERSION: &str = "SELECT value FROM metadata WHERE key = 'schema_version'";

/// SQL statement to insert or update the schema version in the metadata table.
pub const INSERT_SCHEMA_VERSION: &str =
    "INSERT OR REPLACE INTO metadata (key, value) VALUES ('schema_version', ?)";

/// CRM tables in creation order; later tables reference earlier ones.
pub const CRM_TABLES: [&str; 5] = [
    CREATE_CUSTOMERS_TABLE,
    CREATE_SITES_TABLE,
    CREATE_RESERVATIONS_TABLE,
    CREATE_INVOICES_TABLE,
    CREATE_PAYMENTS_TABLE,
];

/// CRM indices.
pub const CRM_INDICES: [&str; 3] = [
    CREATE_RESERVATION_SITE_INDEX,
    CREATE_RESERVATION_CUSTOMER_INDEX,
    CREATE_INVOICE_RESERVATION_INDEX,
];
