//! venue-cli: typeahead and similar-venue lookups over an exported venue pool.

use clap::{Parser, Subcommand};
use owo_colors::OwoColorize;
use std::path::PathBuf;
use std::process::ExitCode;

mod commands;
mod config;
mod logging;

use config::Config;

/// Venue index CLI
#[derive(Parser)]
#[command(name = "venue-cli")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// JSON file with the venue pool (overrides the config file)
    #[arg(short, long, global = true)]
    pool: Option<PathBuf>,

    /// Configuration file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Complete a typed prefix against venue names, places, categories and services
    Suggest {
        /// Prefix to look up
        prefix: String,

        /// Maximum completions to show
        #[arg(short, long)]
        limit: Option<usize>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Find venues similar to a given venue
    Similar {
        /// Id of the venue to compare against
        venue_id: String,

        /// Maximum venues to return
        #[arg(short, long)]
        limit: Option<usize>,

        /// Output as JSON
        #[arg(long)]
        json: bool,

        /// Show similarity scores
        #[arg(short, long)]
        scores: bool,
    },

    /// Compute recommendations for every venue in the pool
    Batch {
        /// Maximum venues per recommendation
        #[arg(short, long)]
        limit: Option<usize>,

        /// Write JSON to this file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Show index statistics for the pool
    Stats {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{} {:#}", "Error:".red().bold(), e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let config = Config::load(cli.config.as_deref())?;
    logging::init(&config.schema.logging, cli.verbose)?;

    if let Some(path) = &config.path {
        tracing::debug!(path = %path.display(), "Loaded configuration");
    }

    let pool_path = cli
        .pool
        .or_else(|| config.schema.pool.path.clone())
        .ok_or_else(|| {
            anyhow::anyhow!(
                "No venue pool given; pass --pool or set [pool] path in the config file"
            )
        })?;
    let pool = commands::load_pool(&pool_path)?;

    let settings = &config.schema;
    match cli.command {
        Commands::Suggest { prefix, limit, json } => {
            commands::suggest::run(&pool, &prefix, limit.unwrap_or(settings.suggest.limit), json)
        }

        Commands::Similar { venue_id, limit, json, scores } => commands::similar::run(
            &pool,
            &venue_id,
            limit.unwrap_or(settings.recommend.limit),
            &settings.recommend.weights(),
            json,
            scores,
        ),

        Commands::Batch { limit, output } => commands::batch::run(
            &pool,
            limit.unwrap_or(settings.recommend.limit),
            &settings.recommend.weights(),
            output.as_deref(),
        ),

        Commands::Stats { json } => commands::stats::run(&pool, json),
    }
}
