//! SQLite persistence layer for the food donation inventory.
//!
//! Provides schema creation, CRUD operations, filterable browse/report
//! queries, and the operator SQL console, backed by SQLite (via rusqlite
//! with the bundled feature).

pub mod console;
pub mod operations;
pub mod queries;
pub mod schema;

pub use console::{run_query, set_read_only, QueryOutput};
pub use operations::{
    delete_claim, delete_listing, get_claim, get_listing, insert_claim, insert_listing,
    update_claim_status, update_listing, OperationError,
};
pub use queries::{
    browse_listings, claims_by_status, claims_per_day, distinct_cities, distinct_food_types,
    distinct_meal_types, distinct_provider_ids, list_providers, list_receivers,
    listings_by_food_type, near_expiry_listings, table_stats, ListingFilter, ListingRow,
    TableStats,
};
pub use schema::{create_schema, open_database, open_memory, SchemaError};
