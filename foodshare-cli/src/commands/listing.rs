use std::path::Path;

use foodshare_model::FoodListing;

use crate::CliError;

pub(crate) fn run_listing_add(db_path: &Path, listing: &FoodListing) -> Result<(), CliError> {
    let conn = foodshare_db::open_database(db_path)
        .map_err(|e| CliError::database(format!("Failed to open database: {}", e)))?;

    foodshare_db::insert_listing(&conn, listing)
        .map_err(|e| CliError::database(format!("Failed to add listing: {}", e)))?;
    log::info!("Listing {} added.", listing.food_id);
    Ok(())
}

pub(crate) fn run_listing_update(db_path: &Path, listing: &FoodListing) -> Result<(), CliError> {
    let conn = foodshare_db::open_database(db_path)
        .map_err(|e| CliError::database(format!("Failed to open database: {}", e)))?;

    let changed = foodshare_db::update_listing(&conn, listing)
        .map_err(|e| CliError::database(format!("Failed to update listing: {}", e)))?;
    if changed == 0 {
        // The data layer treats an unknown identity as a no-op.
        log::warn!("No listing with Food_ID {}; nothing updated.", listing.food_id);
    } else {
        log::info!("Listing {} updated.", listing.food_id);
    }
    Ok(())
}

pub(crate) fn run_listing_delete(db_path: &Path, food_id: i64) -> Result<(), CliError> {
    let conn = foodshare_db::open_database(db_path)
        .map_err(|e| CliError::database(format!("Failed to open database: {}", e)))?;

    let removed = foodshare_db::delete_listing(&conn, food_id)
        .map_err(|e| CliError::database(format!("Failed to delete listing: {}", e)))?;
    if removed == 0 {
        log::info!("Listing {} was already absent.", food_id);
    } else {
        log::info!("Listing {} deleted.", food_id);
    }
    Ok(())
}
