//! Shared database test utilities.

use rvpark::Database;

/// Counts the rows of `table`.
#[allow(dead_code)]
pub fn count_rows(db: &Database, table: &str) -> i64 {
    db.with_connection(|conn| {
        Ok(conn.query_row(&format!("SELECT COUNT(*) FROM {table}"), [], |row| {
            row.get(0)
        })?)
    })
    .unwrap()
}

/// Names of every user table, sorted.
#[allow(dead_code)]
pub fn table_names(db: &Database) -> Vec<String> {
    db.with_connection(|conn| {
        let mut stmt = conn.prepare(
            "SELECT name FROM sqlite_master WHERE type = 'table' AND name NOT LIKE 'sqlite_%' ORDER BY name",
        )?;
        let names = stmt
            .query_map([], |row| row.get(0))?
            .collect::<rusqlite::Result<Vec<String>>>()?;
        Ok(names)
    })
    .unwrap()
}
