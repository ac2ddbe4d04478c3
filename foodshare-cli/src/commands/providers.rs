use std::path::Path;

use crate::table::print_table;
use crate::CliError;

pub(crate) fn run_providers(db_path: &Path) -> Result<(), CliError> {
    let conn = foodshare_db::open_database(db_path)
        .map_err(|e| CliError::database(format!("Failed to open database: {}", e)))?;

    let providers = foodshare_db::list_providers(&conn)
        .map_err(|e| CliError::database(format!("Failed to list providers: {}", e)))?;

    if providers.is_empty() {
        log::info!("No providers in the database.");
        return Ok(());
    }

    let columns: Vec<String> = ["Provider_ID", "Name", "Type", "Address", "City", "Contact"]
        .iter()
        .map(|c| c.to_string())
        .collect();
    let rows: Vec<Vec<String>> = providers
        .iter()
        .map(|p| {
            vec![
                p.provider_id.to_string(),
                p.name.clone(),
                p.provider_type.clone(),
                p.address.clone(),
                p.city.clone(),
                p.contact.clone(),
            ]
        })
        .collect();
    print_table(&columns, &rows);
    log::info!("{} provider(s).", providers.len());
    Ok(())
}
