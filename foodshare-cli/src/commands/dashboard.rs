use std::path::Path;

use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use crate::commands::browse::print_listing_table;
use crate::table::print_table;
use crate::CliError;

pub(crate) fn run_dashboard(db_path: &Path) -> Result<(), CliError> {
    let conn = foodshare_db::open_database(db_path)
        .map_err(|e| CliError::database(format!("Failed to open database: {}", e)))?;
    let db = |e| CliError::database(format!("Failed to query dashboard data: {}", e));

    let stats = foodshare_db::table_stats(&conn).map_err(db)?;
    log::info!(
        "{}  providers: {}  receivers: {}  listings: {}  claims: {}",
        "Overview".if_supports_color(Stdout, |t| t.bold()),
        stats.providers,
        stats.receivers,
        stats.listings,
        stats.claims,
    );

    section("Claims Over Time");
    let per_day = foodshare_db::claims_per_day(&conn).map_err(db)?;
    if per_day.is_empty() {
        log::info!("No claims recorded yet.");
    } else {
        print_count_table("Day", &per_day);
    }

    section("Claims by Status");
    let by_status = foodshare_db::claims_by_status(&conn).map_err(db)?;
    if by_status.is_empty() {
        log::info!("No claims recorded yet.");
    } else {
        print_count_table("Status", &by_status);
    }

    section("Listings by Food Type");
    let by_type = foodshare_db::listings_by_food_type(&conn).map_err(db)?;
    if by_type.is_empty() {
        log::info!("No listings recorded yet.");
    } else {
        print_count_table("Food_Type", &by_type);
    }

    section("Near-Expiry Items (next 3 days)");
    let today = chrono::Local::now().date_naive();
    let near = foodshare_db::near_expiry_listings(&conn, today).map_err(db)?;
    if near.is_empty() {
        log::info!("Nothing expiring in the next 3 days.");
    } else {
        print_listing_table(&near);
    }

    Ok(())
}

fn section(title: &str) {
    log::info!("{}", title.if_supports_color(Stdout, |t| t.bold()));
}

fn print_count_table(label: &str, pairs: &[(String, i64)]) {
    let columns = vec![label.to_string(), "Count".to_string()];
    let rows: Vec<Vec<String>> = pairs
        .iter()
        .map(|(key, count)| vec![key.clone(), count.to_string()])
        .collect();
    print_table(&columns, &rows);
}
