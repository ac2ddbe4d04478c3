use std::path::Path;

use crate::table::print_table;
use crate::CliError;

/// Run an operator-supplied statement.
///
/// The connection is read-only unless `write` is set; lifting that gate is
/// the operator's explicit choice, not a default.
pub(crate) fn run_sql(db_path: &Path, statement: &str, write: bool) -> Result<(), CliError> {
    let conn = foodshare_db::open_database(db_path)
        .map_err(|e| CliError::database(format!("Failed to open database: {}", e)))?;

    if !write {
        foodshare_db::set_read_only(&conn)
            .map_err(|e| CliError::database(format!("Failed to set read-only mode: {}", e)))?;
    } else {
        log::warn!("Write mode enabled; the statement may modify the database.");
    }

    let output = foodshare_db::run_query(&conn, statement)
        .map_err(|e| CliError::database(e.to_string()))?;

    if output.is_empty() {
        log::info!("Statement executed; no rows returned.");
    } else {
        print_table(&output.columns, &output.rows);
        log::info!("{} row(s).", output.rows.len());
    }
    Ok(())
}
