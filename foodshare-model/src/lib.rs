//! Domain types for the food donation inventory.
//!
//! This crate defines the four persistent entities — providers, receivers,
//! food listings, and claims — without any database dependencies. Consumers
//! can use these types directly for display or pass them to `foodshare-db`
//! for persistence.

pub mod types;

pub use types::*;
