use std::path::Path;

use crate::table::print_table;
use crate::CliError;

pub(crate) fn run_receivers(db_path: &Path) -> Result<(), CliError> {
    let conn = foodshare_db::open_database(db_path)
        .map_err(|e| CliError::database(format!("Failed to open database: {}", e)))?;

    let receivers = foodshare_db::list_receivers(&conn)
        .map_err(|e| CliError::database(format!("Failed to list receivers: {}", e)))?;

    if receivers.is_empty() {
        log::info!("No receivers in the database.");
        return Ok(());
    }

    let columns: Vec<String> = ["Receiver_ID", "Name", "Type", "City", "Contact"]
        .iter()
        .map(|c| c.to_string())
        .collect();
    let rows: Vec<Vec<String>> = receivers
        .iter()
        .map(|r| {
            vec![
                r.receiver_id.to_string(),
                r.name.clone(),
                r.receiver_type.clone(),
                r.city.clone(),
                r.contact.clone(),
            ]
        })
        .collect();
    print_table(&columns, &rows);
    log::info!("{} receiver(s).", receivers.len());
    Ok(())
}
