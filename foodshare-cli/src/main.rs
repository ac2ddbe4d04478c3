//! foodshare CLI
//!
//! Command-line dashboard for the food donation inventory: browse and manage
//! listings and claims, inspect providers and receivers, run aggregate
//! reports, and bulk-load the database from CSV sources.

use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand};

use foodshare_model::{ClaimStatus, FoodListing};

mod commands;
mod error;
mod table;

pub(crate) use error::CliError;

#[derive(Parser)]
#[command(name = "foodshare")]
#[command(about = "Track food donation listings, providers, receivers, and claims", long_about = None)]
struct Cli {
    /// Path to the SQLite database (created on first use)
    #[arg(long, global = true, default_value = "foodshare.db")]
    db: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Bulk-load the four CSV sources, replacing all existing data
    Load {
        /// Directory containing providers_data.csv, receivers_data.csv,
        /// food_listings_data.csv, and claims_data.csv
        #[arg(short, long, default_value = "data")]
        data_dir: PathBuf,
    },

    /// Show row counts for the four tables
    Stats,

    /// Show aggregate reports: claims over time and by status, listings by
    /// food type, and items expiring within three days
    Dashboard,

    /// Browse listings with optional multi-valued filters
    Browse {
        /// Cities to include (e.g., "Springfield,Shelbyville")
        #[arg(long, value_delimiter = ',')]
        city: Vec<String>,

        /// Provider IDs to include
        #[arg(long, value_delimiter = ',')]
        provider: Vec<i64>,

        /// Food types to include (e.g., "Vegan,Vegetarian")
        #[arg(long, value_delimiter = ',')]
        food_type: Vec<String>,

        /// Meal types to include (e.g., "Breakfast,Lunch")
        #[arg(long, value_delimiter = ',')]
        meal_type: Vec<String>,
    },

    /// List all providers
    Providers,

    /// List all receivers
    Receivers,

    /// Create, update, or delete food listings
    Listing {
        #[command(subcommand)]
        action: ListingAction,
    },

    /// Create, update, or delete claims
    Claim {
        #[command(subcommand)]
        action: ClaimAction,
    },

    /// Run an ad-hoc SQL statement (read-only unless --write)
    Sql {
        /// The statement to execute
        statement: String,

        /// Allow statements that modify the database
        #[arg(long)]
        write: bool,
    },
}

/// Field arguments shared by listing add and update.
#[derive(Args)]
struct ListingFields {
    /// Food name
    #[arg(long)]
    name: String,

    /// Number of units available (at least 1)
    #[arg(long)]
    quantity: i64,

    /// Expiry date, YYYY-MM-DD
    #[arg(long)]
    expiry: NaiveDate,

    /// Provider ID (must exist)
    #[arg(long)]
    provider: i64,

    /// Provider type (e.g., Restaurant, Grocery)
    #[arg(long, default_value = "")]
    provider_type: String,

    /// City where the food is located
    #[arg(long, default_value = "")]
    location: String,

    /// Food type (e.g., Vegetarian, Vegan)
    #[arg(long, default_value = "")]
    food_type: String,

    /// Meal type (e.g., Breakfast, Lunch, Dinner)
    #[arg(long, default_value = "")]
    meal_type: String,
}

impl ListingFields {
    fn into_listing(self, food_id: i64) -> FoodListing {
        FoodListing {
            food_id,
            food_name: self.name,
            quantity: self.quantity,
            expiry_date: self.expiry,
            provider_id: self.provider,
            provider_type: self.provider_type,
            location: self.location,
            food_type: self.food_type,
            meal_type: self.meal_type,
        }
    }
}

#[derive(Subcommand)]
enum ListingAction {
    /// Add a new listing (the Food_ID must be unused)
    Add {
        /// Caller-supplied unique listing ID
        #[arg(long)]
        food_id: i64,

        #[command(flatten)]
        fields: ListingFields,
    },

    /// Replace all mutable fields of an existing listing
    Update {
        /// ID of the listing to update
        #[arg(long)]
        food_id: i64,

        #[command(flatten)]
        fields: ListingFields,
    },

    /// Delete a listing by ID
    Delete {
        /// ID of the listing to delete
        #[arg(long)]
        food_id: i64,
    },
}

#[derive(Subcommand)]
enum ClaimAction {
    /// Add a new claim (the Claim_ID must be unused)
    Add {
        /// Caller-supplied unique claim ID
        #[arg(long)]
        claim_id: i64,

        /// Listing being claimed (must exist)
        #[arg(long)]
        food_id: i64,

        /// Receiver making the claim (must exist)
        #[arg(long)]
        receiver: i64,

        /// Initial status: Pending, Completed, or Cancelled
        #[arg(long, default_value = "Pending")]
        status: ClaimStatus,

        /// Timestamp "YYYY-MM-DD HH:MM:SS"; defaults to the current time
        #[arg(long)]
        timestamp: Option<String>,
    },

    /// Set the status of an existing claim
    SetStatus {
        /// ID of the claim to update
        #[arg(long)]
        claim_id: i64,

        /// New status: Pending, Completed, or Cancelled
        #[arg(long)]
        status: ClaimStatus,
    },

    /// Delete a claim by ID
    Delete {
        /// ID of the claim to delete
        #[arg(long)]
        claim_id: i64,
    },
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp(None)
        .format_target(false)
        .init();

    let cli = Cli::parse();
    let result = match cli.command {
        Commands::Load { data_dir } => commands::load::run_load(&cli.db, &data_dir),
        Commands::Stats => commands::stats::run_stats(&cli.db),
        Commands::Dashboard => commands::dashboard::run_dashboard(&cli.db),
        Commands::Browse {
            city,
            provider,
            food_type,
            meal_type,
        } => {
            let filter = foodshare_db::ListingFilter {
                cities: city,
                provider_ids: provider,
                food_types: food_type,
                meal_types: meal_type,
            };
            commands::browse::run_browse(&cli.db, &filter)
        }
        Commands::Providers => commands::providers::run_providers(&cli.db),
        Commands::Receivers => commands::receivers::run_receivers(&cli.db),
        Commands::Listing { action } => match action {
            ListingAction::Add { food_id, fields } => {
                commands::listing::run_listing_add(&cli.db, &fields.into_listing(food_id))
            }
            ListingAction::Update { food_id, fields } => {
                commands::listing::run_listing_update(&cli.db, &fields.into_listing(food_id))
            }
            ListingAction::Delete { food_id } => {
                commands::listing::run_listing_delete(&cli.db, food_id)
            }
        },
        Commands::Claim { action } => match action {
            ClaimAction::Add {
                claim_id,
                food_id,
                receiver,
                status,
                timestamp,
            } => commands::claim::run_claim_add(
                &cli.db, claim_id, food_id, receiver, status, timestamp,
            ),
            ClaimAction::SetStatus { claim_id, status } => {
                commands::claim::run_claim_set_status(&cli.db, claim_id, status)
            }
            ClaimAction::Delete { claim_id } => {
                commands::claim::run_claim_delete(&cli.db, claim_id)
            }
        },
        Commands::Sql { statement, write } => commands::sql::run_sql(&cli.db, &statement, write),
    };

    if let Err(e) = result {
        log::error!("{}", e);
        std::process::exit(1);
    }
}
