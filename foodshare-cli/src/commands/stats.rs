use std::path::Path;

use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use crate::CliError;

pub(crate) fn run_stats(db_path: &Path) -> Result<(), CliError> {
    let conn = foodshare_db::open_database(db_path)
        .map_err(|e| CliError::database(format!("Failed to open database: {}", e)))?;

    let stats = foodshare_db::table_stats(&conn)
        .map_err(|e| CliError::database(format!("Failed to query table stats: {}", e)))?;

    log::info!(
        "{}",
        "Inventory Statistics".if_supports_color(Stdout, |t| t.bold()),
    );
    log::info!("  Database: {}", db_path.display());
    log::info!("  Providers: {:>8}", stats.providers);
    log::info!("  Receivers: {:>8}", stats.receivers);
    log::info!("  Listings:  {:>8}", stats.listings);
    log::info!("  Claims:    {:>8}", stats.claims);

    Ok(())
}
