//! CRUD operations for food listings and claims.
//!
//! Providers and receivers are created by the bulk loader only; this module
//! covers the two entities the dashboard manages directly.

use chrono::NaiveDateTime;
use foodshare_model::{Claim, ClaimStatus, FoodListing, TIMESTAMP_FORMAT};
use rusqlite::{params, Connection};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum OperationError {
    #[error("SQLite error: {0}")]
    Sqlite(rusqlite::Error),
    /// A uniqueness or foreign-key constraint was violated. The attempted
    /// write had no effect.
    #[error("Integrity violation: {0}")]
    Constraint(String),
}

impl From<rusqlite::Error> for OperationError {
    fn from(e: rusqlite::Error) -> Self {
        if let rusqlite::Error::SqliteFailure(err, msg) = &e {
            if err.code == rusqlite::ErrorCode::ConstraintViolation {
                return Self::Constraint(msg.clone().unwrap_or_else(|| err.to_string()));
            }
        }
        Self::Sqlite(e)
    }
}

// ── Listing Operations ──────────────────────────────────────────────────────

/// Insert a new food listing.
///
/// Fails with [`OperationError::Constraint`] if the `Food_ID` is already in
/// use or the referenced provider does not exist.
pub fn insert_listing(conn: &Connection, listing: &FoodListing) -> Result<(), OperationError> {
    conn.execute(
        "INSERT INTO Food_Listings
             (Food_ID, Food_Name, Quantity, Expiry_Date, Provider_ID,
              Provider_Type, Location, Food_Type, Meal_Type)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)",
        params![
            listing.food_id,
            listing.food_name,
            listing.quantity,
            listing.expiry_date.to_string(),
            listing.provider_id,
            listing.provider_type,
            listing.location,
            listing.food_type,
            listing.meal_type,
        ],
    )?;
    Ok(())
}

/// Replace all mutable fields of the listing identified by `Food_ID`.
///
/// The identity itself is immutable. An unknown identity affects zero rows
/// and is not an error; the returned count lets callers report it.
pub fn update_listing(conn: &Connection, listing: &FoodListing) -> Result<usize, OperationError> {
    let changed = conn.execute(
        "UPDATE Food_Listings
         SET Food_Name = ?2, Quantity = ?3, Expiry_Date = ?4, Provider_ID = ?5,
             Provider_Type = ?6, Location = ?7, Food_Type = ?8, Meal_Type = ?9
         WHERE Food_ID = ?1",
        params![
            listing.food_id,
            listing.food_name,
            listing.quantity,
            listing.expiry_date.to_string(),
            listing.provider_id,
            listing.provider_type,
            listing.location,
            listing.food_type,
            listing.meal_type,
        ],
    )?;
    Ok(changed)
}

/// Delete a listing by identity. Returns the number of rows removed.
///
/// Fails with [`OperationError::Constraint`] while claims still reference
/// the listing. Deleting an absent identity removes zero rows and succeeds.
pub fn delete_listing(conn: &Connection, food_id: i64) -> Result<usize, OperationError> {
    let changed = conn.execute(
        "DELETE FROM Food_Listings WHERE Food_ID = ?1",
        params![food_id],
    )?;
    Ok(changed)
}

/// Fetch a single listing by identity.
pub fn get_listing(conn: &Connection, food_id: i64) -> Result<Option<FoodListing>, OperationError> {
    let mut stmt = conn.prepare(
        "SELECT Food_ID, Food_Name, Quantity, Expiry_Date, Provider_ID,
                Provider_Type, Location, Food_Type, Meal_Type
         FROM Food_Listings WHERE Food_ID = ?1",
    )?;
    let result = stmt.query_row(params![food_id], row_to_listing);
    match result {
        Ok(l) => Ok(Some(l)),
        Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
        Err(e) => Err(e.into()),
    }
}

// ── Claim Operations ────────────────────────────────────────────────────────

/// Insert a new claim.
///
/// Fails with [`OperationError::Constraint`] if the `Claim_ID` is already in
/// use, or the referenced listing or receiver does not exist.
pub fn insert_claim(conn: &Connection, claim: &Claim) -> Result<(), OperationError> {
    conn.execute(
        "INSERT INTO Claims (Claim_ID, Food_ID, Receiver_ID, Status, Timestamp)
         VALUES (?1, ?2, ?3, ?4, ?5)",
        params![
            claim.claim_id,
            claim.food_id,
            claim.receiver_id,
            claim.status.as_str(),
            claim.timestamp_str(),
        ],
    )?;
    Ok(())
}

/// Set the status of the claim identified by `Claim_ID`.
///
/// Only the status changes; the typed parameter makes undefined status
/// values unrepresentable. An unknown identity affects zero rows.
pub fn update_claim_status(
    conn: &Connection,
    claim_id: i64,
    status: ClaimStatus,
) -> Result<usize, OperationError> {
    let changed = conn.execute(
        "UPDATE Claims SET Status = ?2 WHERE Claim_ID = ?1",
        params![claim_id, status.as_str()],
    )?;
    Ok(changed)
}

/// Delete a claim by identity. Returns the number of rows removed.
///
/// Deleting an absent identity removes zero rows and succeeds.
pub fn delete_claim(conn: &Connection, claim_id: i64) -> Result<usize, OperationError> {
    let changed = conn.execute("DELETE FROM Claims WHERE Claim_ID = ?1", params![claim_id])?;
    Ok(changed)
}

/// Fetch a single claim by identity.
pub fn get_claim(conn: &Connection, claim_id: i64) -> Result<Option<Claim>, OperationError> {
    let mut stmt = conn.prepare(
        "SELECT Claim_ID, Food_ID, Receiver_ID, Status, Timestamp
         FROM Claims WHERE Claim_ID = ?1",
    )?;
    let result = stmt.query_row(params![claim_id], row_to_claim);
    match result {
        Ok(c) => Ok(Some(c)),
        Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
        Err(e) => Err(e.into()),
    }
}

// ── Row Mapping Helpers ─────────────────────────────────────────────────────

fn row_to_listing(row: &rusqlite::Row<'_>) -> rusqlite::Result<FoodListing> {
    let expiry: String = row.get(3)?;
    let expiry_date = expiry.parse().map_err(|e: chrono::ParseError| {
        rusqlite::Error::FromSqlConversionFailure(3, rusqlite::types::Type::Text, Box::new(e))
    })?;
    Ok(FoodListing {
        food_id: row.get(0)?,
        food_name: row.get(1)?,
        quantity: row.get(2)?,
        expiry_date,
        provider_id: row.get(4)?,
        provider_type: row.get(5)?,
        location: row.get(6)?,
        food_type: row.get(7)?,
        meal_type: row.get(8)?,
    })
}

fn row_to_claim(row: &rusqlite::Row<'_>) -> rusqlite::Result<Claim> {
    let status: String = row.get(3)?;
    let status = status.parse::<ClaimStatus>().map_err(|e| {
        rusqlite::Error::FromSqlConversionFailure(3, rusqlite::types::Type::Text, Box::new(e))
    })?;
    let ts: String = row.get(4)?;
    let timestamp = NaiveDateTime::parse_from_str(&ts, TIMESTAMP_FORMAT).map_err(|e| {
        rusqlite::Error::FromSqlConversionFailure(4, rusqlite::types::Type::Text, Box::new(e))
    })?;
    Ok(Claim {
        claim_id: row.get(0)?,
        food_id: row.get(1)?,
        receiver_id: row.get(2)?,
        status,
        timestamp,
    })
}
