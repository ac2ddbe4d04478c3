//! Ad-hoc statement execution for the operator console.
//!
//! The console runs whatever SQL the operator submits. By default callers
//! should put the connection into read-only mode first; writes are an
//! explicit opt-in gated at the CLI boundary.

use rusqlite::types::ValueRef;
use rusqlite::Connection;

use crate::operations::OperationError;

/// Tabular result of an ad-hoc statement: column names plus rows rendered
/// as display text.
#[derive(Debug, Clone)]
pub struct QueryOutput {
    pub columns: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl QueryOutput {
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Put the connection into read-only mode for console use.
///
/// Any INSERT/UPDATE/DELETE/DDL submitted afterwards fails at execution
/// time with the store's read-only error.
pub fn set_read_only(conn: &Connection) -> Result<(), OperationError> {
    conn.execute_batch("PRAGMA query_only=ON;")?;
    Ok(())
}

/// Execute an arbitrary statement and collect the full result table.
///
/// NULL renders as the empty string. Malformed SQL and unknown
/// tables/columns surface as errors with the store's message; no partial
/// results are returned.
pub fn run_query(conn: &Connection, sql: &str) -> Result<QueryOutput, OperationError> {
    let mut stmt = conn.prepare(sql)?;
    let columns: Vec<String> = stmt.column_names().iter().map(|c| c.to_string()).collect();

    let mut out_rows = Vec::new();
    let mut rows = stmt.query([])?;
    while let Some(row) = rows.next()? {
        let mut cells = Vec::with_capacity(columns.len());
        for i in 0..columns.len() {
            cells.push(render_value(row.get_ref(i)?));
        }
        out_rows.push(cells);
    }

    Ok(QueryOutput {
        columns,
        rows: out_rows,
    })
}

fn render_value(value: ValueRef<'_>) -> String {
    match value {
        ValueRef::Null => String::new(),
        ValueRef::Integer(i) => i.to_string(),
        ValueRef::Real(f) => f.to_string(),
        ValueRef::Text(t) => String::from_utf8_lossy(t).into_owned(),
        ValueRef::Blob(b) => format!("<{} byte blob>", b.len()),
    }
}
