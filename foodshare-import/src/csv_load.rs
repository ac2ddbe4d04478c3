//! Destructive replace-all loading of the four tables from CSV.
//!
//! Table columns come from the source headers; storage affinity is inferred
//! by scanning the values. Well-known identity, reference, and status
//! columns get their constraint decorations re-attached so a freshly loaded
//! database keeps the store-level integrity guarantees.

use std::path::{Path, PathBuf};

use rusqlite::types::{Null, ToSql};
use rusqlite::Connection;
use thiserror::Error;

use crate::progress::LoadProgress;

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
    #[error("SQLite error: {0}")]
    Sqlite(#[from] rusqlite::Error),
    #[error("Source {0} has an empty header row")]
    MissingHeader(PathBuf),
}

/// Paths to the four tabular sources.
#[derive(Debug, Clone)]
pub struct DataSources {
    pub providers: PathBuf,
    pub receivers: PathBuf,
    pub listings: PathBuf,
    pub claims: PathBuf,
}

impl DataSources {
    /// Locate the four sources in a directory by their conventional names.
    pub fn from_dir(dir: &Path) -> Self {
        Self {
            providers: dir.join("providers_data.csv"),
            receivers: dir.join("receivers_data.csv"),
            listings: dir.join("food_listings_data.csv"),
            claims: dir.join("claims_data.csv"),
        }
    }
}

/// Row counts loaded per table.
#[derive(Debug, Default)]
pub struct LoadStats {
    pub providers: usize,
    pub receivers: usize,
    pub listings: usize,
    pub claims: usize,
}

/// Replace the contents of all four tables from the CSV sources.
///
/// Existing tables are dropped (children before parents, so enabled
/// foreign keys don't block the drops) and recreated from the source
/// headers. Load order is parents first so reference checks pass as rows
/// arrive.
pub fn bulk_load(
    conn: &Connection,
    sources: &DataSources,
    progress: &dyn LoadProgress,
) -> Result<LoadStats, LoadError> {
    for table in ["Claims", "Food_Listings", "Receivers", "Providers"] {
        conn.execute_batch(&format!("DROP TABLE IF EXISTS {table};"))?;
    }

    let stats = LoadStats {
        providers: load_table(conn, "Providers", &sources.providers, progress)?,
        receivers: load_table(conn, "Receivers", &sources.receivers, progress)?,
        listings: load_table(conn, "Food_Listings", &sources.listings, progress)?,
        claims: load_table(conn, "Claims", &sources.claims, progress)?,
    };

    progress.on_complete(&format!(
        "Loaded {} providers, {} receivers, {} listings, {} claims",
        stats.providers, stats.receivers, stats.listings, stats.claims
    ));
    Ok(stats)
}

fn load_table(
    conn: &Connection,
    table: &str,
    path: &Path,
    progress: &dyn LoadProgress,
) -> Result<usize, LoadError> {
    let file = std::fs::File::open(path)?;
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(file);

    let headers: Vec<String> = reader
        .headers()?
        .iter()
        .map(|h| h.trim().to_string())
        .collect();
    if headers.is_empty() || headers.iter().all(|h| h.is_empty()) {
        return Err(LoadError::MissingHeader(path.to_path_buf()));
    }

    let mut records = Vec::new();
    for result in reader.records() {
        match result {
            Ok(record) => records.push(record),
            Err(e) => {
                log::warn!("Skipping malformed row in {}: {}", path.display(), e);
            }
        }
    }

    let affinities = infer_affinities(&headers, &records);
    conn.execute_batch(&create_table_sql(table, &headers, &affinities))?;

    progress.on_table(table, records.len());

    let placeholders: Vec<String> = (1..=headers.len()).map(|i| format!("?{i}")).collect();
    let insert_sql = format!(
        "INSERT INTO {table} ({}) VALUES ({})",
        headers
            .iter()
            .map(|h| format!("\"{h}\""))
            .collect::<Vec<_>>()
            .join(", "),
        placeholders.join(", ")
    );
    let mut stmt = conn.prepare(&insert_sql)?;
    for (index, record) in records.iter().enumerate() {
        let values: Vec<Box<dyn ToSql>> = (0..headers.len())
            .map(|col| bind_value(record.get(col).unwrap_or(""), affinities[col]))
            .collect();
        let refs: Vec<&dyn ToSql> = values.iter().map(|v| v.as_ref()).collect();
        stmt.execute(refs.as_slice())?;
        progress.on_row(index + 1, records.len());
    }

    Ok(records.len())
}

// ── Column Typing ───────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Affinity {
    Integer,
    Real,
    Text,
}

impl Affinity {
    fn sql_type(self) -> &'static str {
        match self {
            Self::Integer => "INTEGER",
            Self::Real => "REAL",
            Self::Text => "TEXT",
        }
    }
}

/// Infer a storage affinity per column by scanning every value.
///
/// A column is INTEGER if every non-empty value parses as one, REAL if the
/// rest parse as floats, TEXT otherwise (and for columns with no values).
fn infer_affinities(headers: &[String], records: &[csv::StringRecord]) -> Vec<Affinity> {
    (0..headers.len())
        .map(|col| {
            let mut affinity = Affinity::Integer;
            let mut saw_value = false;
            for record in records {
                let value = record.get(col).unwrap_or("").trim();
                if value.is_empty() {
                    continue;
                }
                saw_value = true;
                if affinity == Affinity::Integer && value.parse::<i64>().is_err() {
                    affinity = Affinity::Real;
                }
                if affinity == Affinity::Real && value.parse::<f64>().is_err() {
                    affinity = Affinity::Text;
                    break;
                }
            }
            if saw_value { affinity } else { Affinity::Text }
        })
        .collect()
}

fn create_table_sql(table: &str, headers: &[String], affinities: &[Affinity]) -> String {
    let columns: Vec<String> = headers
        .iter()
        .zip(affinities)
        .map(|(name, affinity)| {
            let mut column = format!("\"{}\" {}", name, affinity.sql_type());
            if let Some(decoration) = column_decorations(table, name) {
                column.push(' ');
                column.push_str(decoration);
            }
            column
        })
        .collect();
    format!("CREATE TABLE {table} ({});", columns.join(", "))
}

/// Constraint decorations for well-known columns.
///
/// The sources carry no schema beyond their headers, but the identity and
/// reference columns must keep their uniqueness and referential guarantees
/// after a load.
fn column_decorations(table: &str, column: &str) -> Option<&'static str> {
    match (table, column) {
        ("Providers", "Provider_ID")
        | ("Receivers", "Receiver_ID")
        | ("Food_Listings", "Food_ID")
        | ("Claims", "Claim_ID") => Some("PRIMARY KEY"),
        ("Food_Listings", "Provider_ID") => Some("REFERENCES Providers(Provider_ID)"),
        ("Food_Listings", "Quantity") => Some("CHECK (Quantity >= 1)"),
        ("Claims", "Food_ID") => Some("REFERENCES Food_Listings(Food_ID)"),
        ("Claims", "Receiver_ID") => Some("REFERENCES Receivers(Receiver_ID)"),
        ("Claims", "Status") => Some("CHECK (Status IN ('Pending', 'Completed', 'Cancelled'))"),
        _ => None,
    }
}

fn bind_value(raw: &str, affinity: Affinity) -> Box<dyn ToSql> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Box::new(Null);
    }
    match affinity {
        Affinity::Integer => match trimmed.parse::<i64>() {
            Ok(v) => Box::new(v),
            Err(_) => Box::new(raw.to_string()),
        },
        Affinity::Real => match trimmed.parse::<f64>() {
            Ok(v) => Box::new(v),
            Err(_) => Box::new(raw.to_string()),
        },
        Affinity::Text => Box::new(raw.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(cells: &[&str]) -> csv::StringRecord {
        csv::StringRecord::from(cells.to_vec())
    }

    #[test]
    fn affinity_inference_by_column() {
        let headers = vec![
            "Id".to_string(),
            "Score".to_string(),
            "Name".to_string(),
            "Empty".to_string(),
        ];
        let records = vec![
            record(&["1", "0.5", "Rice", ""]),
            record(&["2", "3", "Bread", ""]),
        ];
        let affinities = infer_affinities(&headers, &records);
        assert_eq!(
            affinities,
            vec![
                Affinity::Integer,
                Affinity::Real,
                Affinity::Text,
                Affinity::Text
            ]
        );
    }

    #[test]
    fn create_table_reattaches_known_constraints() {
        let headers = vec!["Food_ID".to_string(), "Provider_ID".to_string()];
        let sql = create_table_sql(
            "Food_Listings",
            &headers,
            &[Affinity::Integer, Affinity::Integer],
        );
        assert!(sql.contains("\"Food_ID\" INTEGER PRIMARY KEY"));
        assert!(sql.contains("REFERENCES Providers(Provider_ID)"));
    }
}
