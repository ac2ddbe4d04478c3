use std::cell::RefCell;
use std::path::Path;

use indicatif::{ProgressBar, ProgressStyle};

use foodshare_import::{bulk_load, DataSources, LoadProgress};

use crate::CliError;

pub(crate) fn run_load(db_path: &Path, data_dir: &Path) -> Result<(), CliError> {
    let conn = foodshare_db::open_database(db_path)
        .map_err(|e| CliError::database(format!("Failed to open database: {}", e)))?;

    let sources = DataSources::from_dir(data_dir);
    log::info!(
        "Replacing all data in {} from {}",
        db_path.display(),
        data_dir.display(),
    );

    let progress = BarProgress::default();
    let stats = bulk_load(&conn, &sources, &progress)
        .map_err(|e| CliError::load(e.to_string()))?;

    log::info!(
        "Done: {} providers, {} receivers, {} listings, {} claims.",
        stats.providers,
        stats.receivers,
        stats.listings,
        stats.claims,
    );
    Ok(())
}

/// Drives one indicatif bar per table being loaded.
#[derive(Default)]
struct BarProgress {
    current: RefCell<Option<ProgressBar>>,
}

impl LoadProgress for BarProgress {
    fn on_table(&self, table: &str, rows: usize) {
        let mut current = self.current.borrow_mut();
        if let Some(prev) = current.take() {
            prev.finish_and_clear();
        }
        let bar = ProgressBar::new(rows as u64);
        bar.set_style(
            ProgressStyle::with_template("  {msg:>14} [{bar:40}] {pos}/{len}")
                .expect("static pattern")
                .progress_chars("=> "),
        );
        bar.set_message(table.to_string());
        *current = Some(bar);
    }

    fn on_row(&self, current: usize, _total: usize) {
        if let Some(bar) = self.current.borrow().as_ref() {
            bar.set_position(current as u64);
        }
    }

    fn on_complete(&self, _message: &str) {
        if let Some(bar) = self.current.borrow_mut().take() {
            bar.finish_and_clear();
        }
    }
}
