//! `jobmatch` command line
//!
//! | Command | Description |
//! |---------|-------------|
//! | `search` | Interactive search, prints the result page as JSON |
//! | `export` | Export-mode search (up to 1000 listings from offset 0) |
//! | `health` | Listing store and cache health as JSON |
//! | `providers` | Registered cache and listing store providers |

use std::path::PathBuf;

use anyhow::{Context, bail};
use clap::{Args, Parser, Subcommand};
use jobmatch_application::ports::registry::{
    list_cache_providers, list_listing_store_providers,
};
use jobmatch_domain::constants::{DEFAULT_SEARCH_LIMIT, MAX_EXPORT_LIMIT};
use jobmatch_domain::value_objects::SearchRequest;
use jobmatch_infrastructure::health::HealthStatus;
use jobmatch_infrastructure::logging::init_logging;
use jobmatch_infrastructure::{ConfigLoader, init_search_context};
use serde::Serialize;

/// Command line interface for Jobmatch
#[derive(Parser, Debug)]
#[command(name = "jobmatch")]
#[command(about = "Skill-based job listing search")]
#[command(version)]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Command to run
    #[command(subcommand)]
    pub command: Command,
}

/// Subcommands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Search listings and print one page
    Search {
        #[command(flatten)]
        filters: FilterArgs,

        /// Page size (clamped to 100)
        #[arg(long, default_value_t = DEFAULT_SEARCH_LIMIT)]
        limit: u32,

        /// Listings skipped before the page
        #[arg(long, default_value_t = 0)]
        offset: u32,
    },
    /// Search in export mode
    Export {
        #[command(flatten)]
        filters: FilterArgs,

        /// Maximum listings exported (clamped to 1000)
        #[arg(long, default_value_t = MAX_EXPORT_LIMIT)]
        limit: u32,
    },
    /// Check the listing store and the cache
    Health,
    /// List registered providers
    Providers,
}

/// Filters shared by `search` and `export`
#[derive(Args, Debug, Clone)]
pub struct FilterArgs {
    /// Comma-separated skills, e.g. "typescript,azure"
    #[arg(long)]
    pub skills: String,

    /// Case-insensitive location substring
    #[arg(long)]
    pub location: Option<String>,

    /// Minimum acceptable salary
    #[arg(long)]
    pub salary_min: Option<i64>,

    /// Maximum acceptable salary
    #[arg(long)]
    pub salary_max: Option<i64>,
}

impl FilterArgs {
    /// Build a request with the default page window
    pub fn to_request(&self) -> SearchRequest {
        let mut request = SearchRequest::new(SearchRequest::parse_skills(&self.skills));
        request.location.clone_from(&self.location);
        request.salary_min = self.salary_min;
        request.salary_max = self.salary_max;
        request
    }
}

#[derive(Serialize)]
struct ProviderListing {
    name: &'static str,
    description: &'static str,
}

#[derive(Serialize)]
struct ProviderReport {
    cache: Vec<ProviderListing>,
    listings: Vec<ProviderListing>,
}

fn provider_report() -> ProviderReport {
    let to_listing = |(name, description)| ProviderListing { name, description };
    ProviderReport {
        cache: list_cache_providers().into_iter().map(to_listing).collect(),
        listings: list_listing_store_providers()
            .into_iter()
            .map(to_listing)
            .collect(),
    }
}

fn print_json<T: Serialize>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Run a parsed command line
pub async fn run(cli: Cli) -> anyhow::Result<()> {
    if matches!(cli.command, Command::Providers) {
        return print_json(&provider_report());
    }

    let mut loader = ConfigLoader::new();
    if let Some(path) = &cli.config {
        loader = loader.with_config_path(path);
    }
    let config = loader.load().context("loading configuration")?;
    init_logging(&config.logging).context("initializing logging")?;

    let context = init_search_context(&config)
        .await
        .context("initializing search")?;

    let outcome = match cli.command {
        Command::Search {
            filters,
            limit,
            offset,
        } => {
            let request = filters.to_request().with_limit(limit).with_offset(offset);
            match context.search(request).await {
                Ok(result) => print_json(&result),
                Err(e) => Err(e.into()),
            }
        }
        Command::Export { filters, limit } => {
            let request = filters.to_request().with_limit(limit);
            match context.export(request).await {
                Ok(result) => print_json(&result),
                Err(e) => Err(e.into()),
            }
        }
        Command::Health => {
            let health = context.health().await;
            print_json(&health).and_then(|()| {
                if health.status == HealthStatus::Down {
                    bail!("search is unavailable");
                }
                Ok(())
            })
        }
        Command::Providers => print_json(&provider_report()),
    };

    context.shutdown().await;
    outcome
}
