//! SQLite schema creation and connection acquisition.
//!
//! Connections are scoped to one logical operation: open, run one statement,
//! drop. Dropping the [`rusqlite::Connection`] releases the handle on every
//! exit path, and each write autocommits — there are no multi-statement
//! transactions in this layer.

use rusqlite::Connection;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SchemaError {
    #[error("SQLite error: {0}")]
    Sqlite(#[from] rusqlite::Error),
}

/// Open or create an inventory database at the given path.
///
/// Foreign-key enforcement is enabled on the returned connection; callers
/// get a fresh connection per operation rather than sharing a process-wide
/// handle.
pub fn open_database(path: &std::path::Path) -> Result<Connection, SchemaError> {
    let conn = Connection::open(path)?;
    conn.execute_batch("PRAGMA journal_mode=WAL; PRAGMA foreign_keys=ON;")?;
    create_schema(&conn)?;
    Ok(conn)
}

/// Open an in-memory database with the full schema. Useful for testing.
pub fn open_memory() -> Result<Connection, SchemaError> {
    let conn = Connection::open_in_memory()?;
    conn.execute_batch("PRAGMA foreign_keys=ON;")?;
    create_schema(&conn)?;
    Ok(conn)
}

/// Create the four tables and their indexes if they don't exist.
///
/// This is idempotent — safe to call on an existing database.
pub fn create_schema(conn: &Connection) -> Result<(), SchemaError> {
    conn.execute_batch(SCHEMA_SQL)?;
    Ok(())
}

const SCHEMA_SQL: &str = r#"
-- Donating organizations
CREATE TABLE IF NOT EXISTS Providers (
    Provider_ID INTEGER PRIMARY KEY,
    Name TEXT NOT NULL,
    Type TEXT,
    Address TEXT,
    City TEXT,
    Contact TEXT
);

-- Organizations and individuals receiving food
CREATE TABLE IF NOT EXISTS Receivers (
    Receiver_ID INTEGER PRIMARY KEY,
    Name TEXT NOT NULL,
    Type TEXT,
    City TEXT,
    Contact TEXT
);

-- Donated food items available for claim
CREATE TABLE IF NOT EXISTS Food_Listings (
    Food_ID INTEGER PRIMARY KEY,
    Food_Name TEXT NOT NULL,
    Quantity INTEGER NOT NULL CHECK (Quantity >= 1),
    Expiry_Date TEXT NOT NULL,
    Provider_ID INTEGER NOT NULL REFERENCES Providers(Provider_ID),
    Provider_Type TEXT,
    Location TEXT,
    Food_Type TEXT,
    Meal_Type TEXT
);
CREATE INDEX IF NOT EXISTS idx_listings_expiry ON Food_Listings(Expiry_Date);
CREATE INDEX IF NOT EXISTS idx_listings_location ON Food_Listings(Location);

-- Requests by receivers against specific listings
CREATE TABLE IF NOT EXISTS Claims (
    Claim_ID INTEGER PRIMARY KEY,
    Food_ID INTEGER NOT NULL REFERENCES Food_Listings(Food_ID),
    Receiver_ID INTEGER NOT NULL REFERENCES Receivers(Receiver_ID),
    Status TEXT NOT NULL CHECK (Status IN ('Pending', 'Completed', 'Cancelled')),
    Timestamp TEXT NOT NULL
);
CREATE INDEX IF NOT EXISTS idx_claims_food ON Claims(Food_ID);
CREATE INDEX IF NOT EXISTS idx_claims_status ON Claims(Status);
"#;
