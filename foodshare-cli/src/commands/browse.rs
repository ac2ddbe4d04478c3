use std::path::Path;

use foodshare_db::{ListingFilter, ListingRow};

use crate::table::print_table;
use crate::CliError;

pub(crate) fn run_browse(db_path: &Path, filter: &ListingFilter) -> Result<(), CliError> {
    let conn = foodshare_db::open_database(db_path)
        .map_err(|e| CliError::database(format!("Failed to open database: {}", e)))?;

    let rows = foodshare_db::browse_listings(&conn, filter)
        .map_err(|e| CliError::database(format!("Failed to browse listings: {}", e)))?;

    if rows.is_empty() {
        if filter.is_empty() {
            log::info!("No listings in the database.");
        } else {
            log::info!("No listings match the active filters.");
        }
        return Ok(());
    }

    print_listing_table(&rows);
    log::info!("{} listing(s).", rows.len());
    Ok(())
}

pub(crate) fn print_listing_table(rows: &[ListingRow]) {
    let columns: Vec<String> = [
        "Food_ID",
        "Food_Name",
        "Qty",
        "Expiry_Date",
        "Location",
        "Food_Type",
        "Meal_Type",
        "Provider_ID",
        "Provider_Name",
        "Provider_Contact",
    ]
    .iter()
    .map(|c| c.to_string())
    .collect();

    let table_rows: Vec<Vec<String>> = rows
        .iter()
        .map(|r| {
            vec![
                r.food_id.to_string(),
                r.food_name.clone(),
                r.quantity.to_string(),
                r.expiry_date.clone(),
                r.location.clone(),
                r.food_type.clone(),
                r.meal_type.clone(),
                r.provider_id.to_string(),
                r.provider_name.clone().unwrap_or_default(),
                r.provider_contact.clone().unwrap_or_default(),
            ]
        })
        .collect();

    print_table(&columns, &table_rows);
}
