//! PlaceTypes CLI
//!
//! Ranks the place categories found around a location, either from an
//! interactive menu or as a one-shot command.

#![allow(clippy::print_stdout)]

mod menu;

use std::io;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use application::location_helper::format_location_with_link;
use application::{DeviceLocationPort, PlaceTypesService};
use clap::{Parser, Subcommand};
use domain::Coordinate;
use infrastructure::{AppConfig, ConfiguredDeviceLocation, GooglePlacesAdapter, LoggingConfig};
use tracing::info;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use crate::menu::{Menu, write_outcome};

/// PlaceTypes CLI
#[derive(Parser)]
#[command(name = "placetypes-cli")]
#[command(author, version, about = "Rank the place types around a location", long_about = None)]
struct Cli {
    /// Verbosity level
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Configuration file (default: ./config.toml if present)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Places API key
    #[arg(long, env = "PLACETYPES_API_KEY", hide_env_values = true, global = true)]
    api_key: Option<String>,

    /// Search radius in meters
    #[arg(long, global = true)]
    radius: Option<u32>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive menu (default)
    Menu,

    /// Rank the place types around a coordinate
    ///
    /// Example: placetypes-cli nearby --lat 52.52 --lon 13.405 --type cafe --type bar
    Nearby {
        /// Latitude in decimal degrees
        #[arg(long, allow_hyphen_values = true)]
        lat: String,

        /// Longitude in decimal degrees
        #[arg(long, allow_hyphen_values = true)]
        lon: String,

        /// Only include places of this type (repeatable)
        #[arg(long = "type", value_name = "TYPE")]
        types: Vec<String>,
    },

    /// Print the device location and a maps link
    Locate,
}

/// Determine log filter level from verbosity count
const fn log_filter_from_verbosity(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Pick the log filter: `-v` flags win, then `RUST_LOG`, then the config file
fn log_filter(verbose: u8, logging: &LoggingConfig) -> EnvFilter {
    if verbose > 0 {
        return EnvFilter::new(log_filter_from_verbosity(verbose));
    }
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&logging.level))
}

fn init_logging(verbose: u8, logging: &LoggingConfig) {
    let registry = tracing_subscriber::registry().with(log_filter(verbose, logging));

    // Logs go to stderr so they never interleave with results on stdout
    if logging.json {
        registry
            .with(fmt::layer().json().with_writer(io::stderr))
            .init();
    } else {
        registry.with(fmt::layer().with_writer(io::stderr)).init();
    }
}

fn load_config(cli: &Cli) -> anyhow::Result<AppConfig> {
    let mut config = match &cli.config {
        Some(path) => AppConfig::load_from(path)
            .with_context(|| format!("Failed to load configuration from {}", path.display()))?,
        None => AppConfig::load().context("Failed to load configuration")?,
    };

    if let Some(api_key) = &cli.api_key {
        config.places.set_api_key(api_key.as_str());
    }
    if let Some(radius) = cli.radius {
        config.places.radius_meters = radius;
    }

    Ok(config)
}

fn build_service(config: &AppConfig) -> anyhow::Result<PlaceTypesService> {
    config.validate().map_err(anyhow::Error::msg)?;

    let places = GooglePlacesAdapter::new(&config.places.to_places_config())?;
    let device_location = ConfiguredDeviceLocation::new(config.device_location.clone());

    Ok(
        PlaceTypesService::new(Arc::new(places), config.places.radius_meters)
            .with_default_types(config.places.included_types.clone())
            .with_device_location(Arc::new(device_location)),
    )
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = load_config(&cli)?;

    init_logging(cli.verbose, &config.logging);
    info!(config = ?config, "Configuration loaded");

    match cli.command.unwrap_or(Commands::Menu) {
        Commands::Menu => {
            let service = build_service(&config)?;
            let stdin = io::stdin();
            let stdout = io::stdout();
            Menu::new(&service, stdin.lock(), stdout.lock()).run().await?;
        },

        Commands::Nearby { lat, lon, types } => {
            let coordinate = Coordinate::parse(Some(lat.as_str()), Some(lon.as_str()))?;
            let service = build_service(&config)?;

            println!("Getting nearby place types.");
            let included_types = (!types.is_empty()).then_some(types.as_slice());
            let outcome = service
                .find_nearby_place_types(&coordinate, included_types)
                .await?;

            write_outcome(&mut io::stdout().lock(), &outcome)?;
        },

        Commands::Locate => {
            config
                .device_location
                .validate()
                .map_err(anyhow::Error::msg)?;
            let device_location = ConfiguredDeviceLocation::new(config.device_location.clone());

            println!(
                "Waiting up to {} milliseconds for the geolocator to start.",
                device_location.wait_time().as_millis()
            );
            let coordinate = device_location.current_location().await?;
            println!("{}", format_location_with_link(&coordinate));
        },
    }

    Ok(())
}
