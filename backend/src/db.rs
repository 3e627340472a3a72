//! SQLite access. Each request opens its own connection; atomicity comes
//! from explicit transactions in the store modules, cascading child deletes
//! from the foreign keys declared here.

use rusqlite::Connection;

/// Opens the application database, creating the tables on first use.
pub fn open() -> rusqlite::Result<Connection> {
    let conn = Connection::open(crate::config::database_path())?;
    init_schema(&conn)?;
    Ok(conn)
}

/// Creates the tables and enables foreign-key enforcement. Also used by
/// tests against in-memory connections.
pub fn init_schema(conn: &Connection) -> rusqlite::Result<()> {
    conn.execute_batch(
        "PRAGMA foreign_keys = ON;

        CREATE TABLE IF NOT EXISTS companies (
            id TEXT PRIMARY KEY,
            name TEXT NOT NULL,
            contact_number TEXT NOT NULL,
            gst_number TEXT,
            about_company TEXT,
            work_type TEXT NOT NULL,
            unit_type TEXT NOT NULL,
            location TEXT NOT NULL,
            unit_sq_feet INTEGER NOT NULL,
            production_capacity INTEGER,
            company_logo TEXT,
            unit_images TEXT NOT NULL,
            certifications TEXT NOT NULL,
            created_at TEXT NOT NULL DEFAULT (datetime('now')),
            updated_at TEXT NOT NULL DEFAULT (datetime('now'))
        );

        CREATE TABLE IF NOT EXISTS machinery (
            id TEXT PRIMARY KEY,
            company_id TEXT NOT NULL REFERENCES companies(id) ON DELETE CASCADE,
            unit_type TEXT NOT NULL,
            machine_data TEXT NOT NULL,
            quantity INTEGER NOT NULL
        );

        CREATE TABLE IF NOT EXISTS services (
            id TEXT PRIMARY KEY,
            company_id TEXT NOT NULL REFERENCES companies(id) ON DELETE CASCADE,
            title TEXT,
            description TEXT
        );

        CREATE TABLE IF NOT EXISTS job_posts (
            id TEXT PRIMARY KEY,
            unit_type TEXT NOT NULL,
            order_quantity INTEGER NOT NULL,
            short_description TEXT NOT NULL,
            detailed_description TEXT,
            certifications TEXT NOT NULL,
            job_images TEXT NOT NULL,
            location TEXT NOT NULL,
            created_at TEXT NOT NULL DEFAULT (datetime('now'))
        );",
    )
}

#[cfg(test)]
pub fn open_in_memory() -> rusqlite::Result<Connection> {
    let conn = Connection::open_in_memory()?;
    init_schema(&conn)?;
    Ok(conn)
}
