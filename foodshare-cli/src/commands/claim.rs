use std::path::Path;

use chrono::NaiveDateTime;

use foodshare_model::{Claim, ClaimStatus, TIMESTAMP_FORMAT};

use crate::CliError;

pub(crate) fn run_claim_add(
    db_path: &Path,
    claim_id: i64,
    food_id: i64,
    receiver_id: i64,
    status: ClaimStatus,
    timestamp: Option<String>,
) -> Result<(), CliError> {
    let timestamp = match timestamp {
        Some(ts) => NaiveDateTime::parse_from_str(&ts, TIMESTAMP_FORMAT).map_err(|e| {
            CliError::invalid_input(format!(
                "Bad timestamp '{}' (expected YYYY-MM-DD HH:MM:SS): {}",
                ts, e
            ))
        })?,
        None => chrono::Local::now().naive_local(),
    };

    let conn = foodshare_db::open_database(db_path)
        .map_err(|e| CliError::database(format!("Failed to open database: {}", e)))?;

    let claim = Claim {
        claim_id,
        food_id,
        receiver_id,
        status,
        timestamp,
    };
    foodshare_db::insert_claim(&conn, &claim)
        .map_err(|e| CliError::database(format!("Failed to add claim: {}", e)))?;
    log::info!("Claim {} added ({}).", claim_id, status);
    Ok(())
}

pub(crate) fn run_claim_set_status(
    db_path: &Path,
    claim_id: i64,
    status: ClaimStatus,
) -> Result<(), CliError> {
    let conn = foodshare_db::open_database(db_path)
        .map_err(|e| CliError::database(format!("Failed to open database: {}", e)))?;

    let changed = foodshare_db::update_claim_status(&conn, claim_id, status)
        .map_err(|e| CliError::database(format!("Failed to update claim status: {}", e)))?;
    if changed == 0 {
        log::warn!("No claim with Claim_ID {}; nothing updated.", claim_id);
    } else {
        log::info!("Claim {} is now {}.", claim_id, status);
    }
    Ok(())
}

pub(crate) fn run_claim_delete(db_path: &Path, claim_id: i64) -> Result<(), CliError> {
    let conn = foodshare_db::open_database(db_path)
        .map_err(|e| CliError::database(format!("Failed to open database: {}", e)))?;

    let removed = foodshare_db::delete_claim(&conn, claim_id)
        .map_err(|e| CliError::database(format!("Failed to delete claim: {}", e)))?;
    if removed == 0 {
        log::info!("Claim {} was already absent.", claim_id);
    } else {
        log::info!("Claim {} deleted.", claim_id);
    }
    Ok(())
}
