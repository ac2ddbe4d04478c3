//! Load progress reporting.

/// Trait for receiving bulk-load progress updates.
pub trait LoadProgress {
    /// Called when a table's load starts, with the number of source rows.
    fn on_table(&self, table: &str, rows: usize);

    /// Called after each row is inserted.
    fn on_row(&self, current: usize, total: usize);

    /// Called when the whole load is complete.
    fn on_complete(&self, message: &str);
}

/// A no-op progress reporter that discards all updates.
pub struct SilentProgress;

impl LoadProgress for SilentProgress {
    fn on_table(&self, _table: &str, _rows: usize) {}
    fn on_row(&self, _current: usize, _total: usize) {}
    fn on_complete(&self, _message: &str) {}
}

/// A progress reporter that logs to the `log` crate.
pub struct LogProgress;

impl LoadProgress for LogProgress {
    fn on_table(&self, table: &str, rows: usize) {
        log::info!("Loading {} ({} rows)", table, rows);
    }

    fn on_row(&self, current: usize, total: usize) {
        if current.is_multiple_of(500) || current == total {
            log::info!("  [{}/{}]", current, total);
        }
    }

    fn on_complete(&self, message: &str) {
        log::info!("{}", message);
    }
}
