//! Carbon Tracker CLI
//!
//! Estimates the CO2 of a car trip between two cities, appends it to the
//! history log and redraws the emissions chart.

#![allow(clippy::print_stdout)]

mod output;
mod prompt;

use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::Context;
use application::TripRequest;
use clap::{Parser, Subcommand};
use infrastructure::{
    AppConfig, build_history_service, build_trip_service, init_logging, log_filter_from_verbosity,
};
use tracing::debug;

/// Carbon Tracker CLI
#[derive(Parser)]
#[command(name = "carbon-tracker")]
#[command(author, version, about = "Estimate and log the CO2 emissions of car trips", long_about = None)]
struct Cli {
    /// Verbosity level
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Configuration file (defaults to ./config.toml when present)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Google Maps API key, used when the configuration has none
    #[arg(long, env = "GOOGLE_API_KEY", hide_env_values = true, global = true)]
    google_api_key: Option<String>,

    /// Climatiq API key, used when the configuration has none
    #[arg(long, env = "CLIMATIQ_API_KEY", hide_env_values = true, global = true)]
    climatiq_api_key: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Estimate a trip, append it to the history log and redraw the chart
    ///
    /// Missing cities are asked for interactively.
    /// Example: carbon-tracker trip --from "New York" --to Boston
    Trip {
        /// City where the trip started
        #[arg(long)]
        from: Option<String>,

        /// City where the trip ended
        #[arg(long)]
        to: Option<String>,

        /// Only print the estimate; leave the history log and chart untouched
        #[arg(long)]
        dry_run: bool,
    },

    /// List recorded trips and totals
    History {
        /// Print the records as JSON
        #[arg(long)]
        json: bool,
    },

    /// Redraw the chart from the history log
    Chart,
}

async fn run_trip(
    config: &AppConfig,
    from: Option<&str>,
    to: Option<&str>,
    dry_run: bool,
) -> anyhow::Result<()> {
    // Validate configuration before prompting
    let service = build_trip_service(config)?;

    let mut stdout = io::stdout();
    let mut stdin = io::stdin().lock();

    let start = prompt::place_or_prompt(
        from,
        &mut stdin,
        &mut stdout,
        prompt::START_QUESTION,
        prompt::START_EMPTY,
    )?;
    let end = prompt::place_or_prompt(
        to,
        &mut stdin,
        &mut stdout,
        prompt::END_QUESTION,
        prompt::END_EMPTY,
    )?;
    drop(stdin);

    let request = TripRequest::new(start, end);

    if dry_run {
        let estimate = service.estimate_trip(&request).await?;
        output::write_estimate(&mut stdout, &estimate)?;
        return Ok(());
    }

    let summary = service.record_trip(&request).await?;
    output::write_estimate(&mut stdout, &summary.estimate)?;
    writeln!(stdout, "Trip data saved to {}", service.history_location())?;
    debug!(chart = %service.chart_location(), trips = summary.trips_recorded, "Run complete");
    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = AppConfig::load(cli.config.as_deref())
        .context("Failed to load configuration")?
        .with_fallback_keys(cli.google_api_key, cli.climatiq_api_key);

    // Set up logging based on verbosity
    init_logging(&config.telemetry, log_filter_from_verbosity(cli.verbose))?;

    match cli.command {
        Commands::Trip { from, to, dry_run } => {
            run_trip(&config, from.as_deref(), to.as_deref(), dry_run).await?;
        },

        Commands::History { json } => {
            let history = build_history_service(&config)?.history().await?;
            if json {
                println!("{}", serde_json::to_string_pretty(history.records())?);
            } else {
                output::write_history(&mut io::stdout(), &history)?;
            }
        },

        Commands::Chart => {
            let service = build_history_service(&config)?;
            service.render_chart().await?;
            println!("Chart saved to {}", service.chart_location());
        },
    }

    Ok(())
}
