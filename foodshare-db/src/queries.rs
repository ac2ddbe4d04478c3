//! Read queries for the inventory database.
//!
//! The listing browse query assembles its WHERE clause from optional
//! multi-valued filters: one `IN (...)` predicate per active dimension, all
//! values bound as parameters, never interpolated into the SQL text.

use chrono::NaiveDate;
use rusqlite::{params, Connection};

use foodshare_model::{Provider, Receiver};

use crate::operations::OperationError;

// ── Listing Browse ──────────────────────────────────────────────────────────

/// Optional multi-valued filters for browsing listings.
///
/// An empty list imposes no constraint on its dimension; the filter as a
/// whole is the AND of its non-empty dimensions.
#[derive(Debug, Clone, Default)]
pub struct ListingFilter {
    pub cities: Vec<String>,
    pub provider_ids: Vec<i64>,
    pub food_types: Vec<String>,
    pub meal_types: Vec<String>,
}

impl ListingFilter {
    pub fn is_empty(&self) -> bool {
        self.cities.is_empty()
            && self.provider_ids.is_empty()
            && self.food_types.is_empty()
            && self.meal_types.is_empty()
    }
}

/// A listing row with provider identity joined in for display.
///
/// Provider fields are optional: the join is a LEFT JOIN so listing rows
/// survive a dangling provider reference when enforcement is off.
#[derive(Debug, Clone)]
pub struct ListingRow {
    pub food_id: i64,
    pub food_name: String,
    pub quantity: i64,
    pub expiry_date: String,
    pub location: String,
    pub food_type: String,
    pub meal_type: String,
    pub provider_id: i64,
    pub provider_name: Option<String>,
    pub provider_contact: Option<String>,
}

const LISTING_ROW_SELECT: &str = "SELECT fl.Food_ID, fl.Food_Name, fl.Quantity, fl.Expiry_Date,
        fl.Location, fl.Food_Type, fl.Meal_Type,
        fl.Provider_ID, p.Name AS Provider_Name, p.Contact AS Provider_Contact
 FROM Food_Listings fl
 LEFT JOIN Providers p ON p.Provider_ID = fl.Provider_ID";

/// Browse listings matching the filter, soonest expiry first.
pub fn browse_listings(
    conn: &Connection,
    filter: &ListingFilter,
) -> Result<Vec<ListingRow>, OperationError> {
    let mut sql = String::from(LISTING_ROW_SELECT);
    let mut clauses: Vec<String> = Vec::new();
    let mut values: Vec<Box<dyn rusqlite::types::ToSql>> = Vec::new();

    add_in_clause(&mut clauses, &mut values, "fl.Location", &filter.cities);
    add_in_clause(&mut clauses, &mut values, "fl.Provider_ID", &filter.provider_ids);
    add_in_clause(&mut clauses, &mut values, "fl.Food_Type", &filter.food_types);
    add_in_clause(&mut clauses, &mut values, "fl.Meal_Type", &filter.meal_types);

    if !clauses.is_empty() {
        sql.push_str(" WHERE ");
        sql.push_str(&clauses.join(" AND "));
    }
    sql.push_str(" ORDER BY date(fl.Expiry_Date) ASC");

    let mut stmt = conn.prepare(&sql)?;
    let refs: Vec<&dyn rusqlite::types::ToSql> = values.iter().map(|v| v.as_ref()).collect();
    let rows = stmt.query_map(refs.as_slice(), row_to_listing_row)?;
    rows.collect::<Result<Vec<_>, _>>().map_err(Into::into)
}

/// Append `column IN (?n, ...)` with one bound parameter per value.
///
/// An empty value list contributes nothing — absence of a filter means no
/// constraint, not "match nothing".
fn add_in_clause<T>(
    clauses: &mut Vec<String>,
    values: &mut Vec<Box<dyn rusqlite::types::ToSql>>,
    column: &str,
    filter_values: &[T],
) where
    T: rusqlite::types::ToSql + Clone + 'static,
{
    if filter_values.is_empty() {
        return;
    }
    let start = values.len() + 1;
    let placeholders: Vec<String> = (0..filter_values.len())
        .map(|i| format!("?{}", start + i))
        .collect();
    clauses.push(format!("{} IN ({})", column, placeholders.join(", ")));
    for v in filter_values {
        values.push(Box::new(v.clone()));
    }
}

/// Listings expiring on or before `today` plus 3 days, soonest first.
pub fn near_expiry_listings(
    conn: &Connection,
    today: NaiveDate,
) -> Result<Vec<ListingRow>, OperationError> {
    let sql = format!(
        "{LISTING_ROW_SELECT}
         WHERE date(fl.Expiry_Date) <= date(?1, '+3 day')
         ORDER BY date(fl.Expiry_Date) ASC"
    );
    let mut stmt = conn.prepare(&sql)?;
    let rows = stmt.query_map(params![today.to_string()], row_to_listing_row)?;
    rows.collect::<Result<Vec<_>, _>>().map_err(Into::into)
}

// ── Aggregate Reports ───────────────────────────────────────────────────────

/// Claim counts grouped by calendar day of the claim timestamp, ascending.
pub fn claims_per_day(conn: &Connection) -> Result<Vec<(String, i64)>, OperationError> {
    count_pairs(
        conn,
        "SELECT date(Timestamp) AS Day, COUNT(*) FROM Claims
         GROUP BY date(Timestamp) ORDER BY Day",
    )
}

/// Claim counts grouped by status.
pub fn claims_by_status(conn: &Connection) -> Result<Vec<(String, i64)>, OperationError> {
    count_pairs(
        conn,
        "SELECT Status, COUNT(*) FROM Claims GROUP BY Status ORDER BY Status",
    )
}

/// Listing counts grouped by food type.
pub fn listings_by_food_type(conn: &Connection) -> Result<Vec<(String, i64)>, OperationError> {
    count_pairs(
        conn,
        "SELECT Food_Type, COUNT(*) FROM Food_Listings
         GROUP BY Food_Type ORDER BY Food_Type",
    )
}

fn count_pairs(conn: &Connection, sql: &str) -> Result<Vec<(String, i64)>, OperationError> {
    let mut stmt = conn.prepare(sql)?;
    let rows = stmt.query_map([], |row| Ok((row.get(0)?, row.get(1)?)))?;
    rows.collect::<Result<Vec<_>, _>>().map_err(Into::into)
}

/// Row counts for the four tables.
pub fn table_stats(conn: &Connection) -> Result<TableStats, OperationError> {
    let providers: i64 = conn.query_row("SELECT COUNT(*) FROM Providers", [], |r| r.get(0))?;
    let receivers: i64 = conn.query_row("SELECT COUNT(*) FROM Receivers", [], |r| r.get(0))?;
    let listings: i64 = conn.query_row("SELECT COUNT(*) FROM Food_Listings", [], |r| r.get(0))?;
    let claims: i64 = conn.query_row("SELECT COUNT(*) FROM Claims", [], |r| r.get(0))?;

    Ok(TableStats {
        providers,
        receivers,
        listings,
        claims,
    })
}

/// Summary counts shown on the dashboard's KPI row.
#[derive(Debug)]
pub struct TableStats {
    pub providers: i64,
    pub receivers: i64,
    pub listings: i64,
    pub claims: i64,
}

// ── Directory Views ─────────────────────────────────────────────────────────

/// List all providers, ordered by identity.
pub fn list_providers(conn: &Connection) -> Result<Vec<Provider>, OperationError> {
    let mut stmt = conn.prepare(
        "SELECT Provider_ID, Name, Type, Address, City, Contact
         FROM Providers ORDER BY Provider_ID",
    )?;
    let rows = stmt.query_map([], |row| {
        Ok(Provider {
            provider_id: row.get(0)?,
            name: row.get(1)?,
            provider_type: row.get(2)?,
            address: row.get(3)?,
            city: row.get(4)?,
            contact: row.get(5)?,
        })
    })?;
    rows.collect::<Result<Vec<_>, _>>().map_err(Into::into)
}

/// List all receivers, ordered by identity.
pub fn list_receivers(conn: &Connection) -> Result<Vec<Receiver>, OperationError> {
    let mut stmt = conn.prepare(
        "SELECT Receiver_ID, Name, Type, City, Contact
         FROM Receivers ORDER BY Receiver_ID",
    )?;
    let rows = stmt.query_map([], |row| {
        Ok(Receiver {
            receiver_id: row.get(0)?,
            name: row.get(1)?,
            receiver_type: row.get(2)?,
            city: row.get(3)?,
            contact: row.get(4)?,
        })
    })?;
    rows.collect::<Result<Vec<_>, _>>().map_err(Into::into)
}

// ── Filter Dimension Values ─────────────────────────────────────────────────

/// Distinct cities that currently have listings.
pub fn distinct_cities(conn: &Connection) -> Result<Vec<String>, OperationError> {
    distinct_strings(
        conn,
        "SELECT DISTINCT Location FROM Food_Listings
         WHERE Location IS NOT NULL ORDER BY Location",
    )
}

/// Distinct provider IDs that currently have listings.
pub fn distinct_provider_ids(conn: &Connection) -> Result<Vec<i64>, OperationError> {
    let mut stmt = conn.prepare(
        "SELECT DISTINCT Provider_ID FROM Food_Listings
         WHERE Provider_ID IS NOT NULL ORDER BY Provider_ID",
    )?;
    let rows = stmt.query_map([], |row| row.get(0))?;
    rows.collect::<Result<Vec<_>, _>>().map_err(Into::into)
}

/// Distinct food types across listings.
pub fn distinct_food_types(conn: &Connection) -> Result<Vec<String>, OperationError> {
    distinct_strings(
        conn,
        "SELECT DISTINCT Food_Type FROM Food_Listings
         WHERE Food_Type IS NOT NULL ORDER BY Food_Type",
    )
}

/// Distinct meal types across listings.
pub fn distinct_meal_types(conn: &Connection) -> Result<Vec<String>, OperationError> {
    distinct_strings(
        conn,
        "SELECT DISTINCT Meal_Type FROM Food_Listings
         WHERE Meal_Type IS NOT NULL ORDER BY Meal_Type",
    )
}

fn distinct_strings(conn: &Connection, sql: &str) -> Result<Vec<String>, OperationError> {
    let mut stmt = conn.prepare(sql)?;
    let rows = stmt.query_map([], |row| row.get(0))?;
    rows.collect::<Result<Vec<_>, _>>().map_err(Into::into)
}

// ── Row Mapping Helpers ─────────────────────────────────────────────────────

fn row_to_listing_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<ListingRow> {
    Ok(ListingRow {
        food_id: row.get(0)?,
        food_name: row.get(1)?,
        quantity: row.get(2)?,
        expiry_date: row.get(3)?,
        location: row.get(4)?,
        food_type: row.get(5)?,
        meal_type: row.get(6)?,
        provider_id: row.get(7)?,
        provider_name: row.get(8)?,
        provider_contact: row.get(9)?,
    })
}
