mod mock;
mod render;
mod results;
mod search;
mod session_store;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use farecmp_core::{SortKey, VehicleFilter};
use tracing_subscriber::EnvFilter;

use crate::session_store::FileSessionStore;

#[derive(Debug, Parser)]
#[command(name = "farecmp")]
#[command(about = "Compare ride-hailing offers across apps")]
struct Cli {
    /// Directory holding the current session (overrides FARECMP_SESSION_DIR)
    #[arg(long, global = true)]
    session_dir: Option<PathBuf>,

    /// Seed for fare adjustment and mock data (overrides FARECMP_RNG_SEED)
    #[arg(long, global = true)]
    seed: Option<u64>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Start a new search and store its offers in the session
    Search {
        /// Pickup address
        #[arg(long)]
        pickup: String,

        /// Destination address
        #[arg(long)]
        drop: Option<String>,

        #[arg(long, default_value_t = 12.9716, allow_negative_numbers = true)]
        pickup_lat: f64,

        #[arg(long, default_value_t = 77.5946, allow_negative_numbers = true)]
        pickup_lng: f64,

        #[arg(long, allow_negative_numbers = true)]
        drop_lat: Option<f64>,

        #[arg(long, allow_negative_numbers = true)]
        drop_lng: Option<f64>,

        /// JSON file with `{ "offers": [...] }`; mock offers are generated when omitted
        #[arg(long)]
        results: Option<PathBuf>,
    },
    /// Rank, filter and sort the offers of the current search
    Rank {
        /// Vehicle type to show (`all`, `bike`, `auto`, `economy`, `sedan`, `premium`, `xl`)
        #[arg(long, default_value = "all")]
        vehicle: VehicleFilter,

        /// Sort key; repeat for tie-breakers in priority order
        #[arg(long = "sort")]
        sort: Vec<SortKey>,

        /// Print the ranked offers as JSON
        #[arg(long)]
        json: bool,
    },
    /// Choose an offer and print its hand-off links
    Select {
        /// Offer id as shown by `rank`
        offer_id: String,
    },
    /// Print mock search results as JSON
    Mock,
    /// Forget the current search
    Clear,
}

fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let config = farecmp_core::load_app_config()?;
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    tracing::debug!(env = %config.env, "configuration loaded");

    let catalog = match &config.providers_path {
        Some(path) => farecmp_core::load_providers(path)?,
        None => farecmp_core::ProviderCatalog::built_in(),
    };
    let session_dir = cli
        .session_dir
        .clone()
        .unwrap_or_else(|| config.session_dir.clone());
    let mut store = FileSessionStore::new(session_dir);
    let seed = cli.seed.or(config.rng_seed);

    match cli.command {
        Some(Commands::Search {
            pickup,
            drop,
            pickup_lat,
            pickup_lng,
            drop_lat,
            drop_lng,
            results,
        }) => {
            let data = farecmp_core::SearchData {
                pickup_address: pickup,
                pickup_lat,
                pickup_lng,
                drop_address: drop,
                drop_lat,
                drop_lng,
                ride_type: None,
            };
            search::run_search(&mut store, &config.env, &data, results.as_deref(), seed)?;
        }
        Some(Commands::Rank {
            vehicle,
            sort,
            json,
        }) => results::run_rank(&store, &catalog, &config, seed, vehicle, sort, json)?,
        Some(Commands::Select { offer_id }) => {
            results::run_select(&mut store, &catalog, &config, seed, &offer_id)?;
        }
        Some(Commands::Mock) => search::run_mock(&config.env, seed)?,
        Some(Commands::Clear) => search::run_clear(&mut store)?,
        None => println!("no command given; run `farecmp --help`"),
    }

    Ok(())
}
