//! Bulk loading of the four inventory tables from CSV sources.
//!
//! This crate owns the one-shot seeding path: reading the tabular sources,
//! deriving table columns from their headers, and destructively replacing
//! the store's contents. There are no merge or upsert semantics.

pub mod csv_load;
pub mod progress;

pub use csv_load::{bulk_load, DataSources, LoadError, LoadStats};
pub use progress::{LoadProgress, LogProgress, SilentProgress};
