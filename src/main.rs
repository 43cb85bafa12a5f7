//! GarudaNav - Delivery drone flight planner
//!
//! Retrieves the day's geometry, restaurants and orders from the delivery
//! data service, validates the orders, plans one round-trip flight per
//! deliverable order within the global move budget, and writes the
//! deliveries, flightpath and GeoJSON artifacts for the date.
//!
//! Usage: `garuda-nav <date> [base-url]`, with optional settings read from
//! `garuda.toml` in the working directory. The base URL argument overrides
//! the configured one.

use std::path::Path;

use chrono::NaiveDate;
use tracing::info;

use garuda_nav::config::GarudaConfig;
use garuda_nav::dispatch::Dispatcher;
use garuda_nav::error::{GarudaError, Result};
use garuda_nav::io::{write_deliveries, write_drone_geojson, write_flightpath, RestClient};
use garuda_nav::orders::{validate_orders, OrderOutcome};

/// All orders must be scheduled at or after this date.
const DATE_START: &str = "2023-01-01";

/// All orders must be scheduled at or before this date.
const DATE_END: &str = "2023-05-31";

fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("garuda_nav=info".parse().unwrap()),
        )
        .init();

    // Parse command line arguments
    let args: Vec<String> = std::env::args().collect();

    let date = validate_date(args.get(1))?;

    let mut config = if Path::new("garuda.toml").exists() {
        info!("Loading configuration from garuda.toml");
        GarudaConfig::load(Path::new("garuda.toml"))?
    } else {
        info!("Using default configuration");
        GarudaConfig::default()
    };

    // Override the service URL if provided
    if let Some(url) = args.get(2) {
        config.service.base_url = url.clone();
    }

    info!("GarudaNav v{}", env!("CARGO_PKG_VERSION"));
    info!("Planning date {}, service {}", date, config.service.base_url);

    // Retrieve the day's data
    let client = RestClient::new(config.service.base_url.clone());
    let corridor = client.central_area()?;
    let no_fly = client.no_fly_zones()?;
    let restaurants = client.restaurants()?;
    let mut orders = client.orders(&date.to_string())?;

    info!(
        "Retrieved {} corridor vertices, {} no-fly zones, {} restaurants, {} orders",
        corridor.vertices().len(),
        no_fly.len(),
        restaurants.len(),
        orders.len()
    );

    validate_orders(&mut orders, &restaurants);
    let deliverable = orders
        .iter()
        .filter(|o| o.outcome == OrderOutcome::ValidButNotDelivered)
        .count();
    info!("{} of {} orders valid and deliverable", deliverable, orders.len());

    // Plan the day's flights
    let dispatcher = Dispatcher::new(&corridor, &no_fly, config.flight.dispatch_config());
    let flights = dispatcher.plan_flights(&mut orders, &restaurants);

    // Generate the artifacts for the date
    let artifact_dir = Path::new(&config.output.artifact_dir);
    let date_name = date.to_string();
    write_deliveries(artifact_dir, &date_name, &orders)?;
    write_flightpath(artifact_dir, &date_name, &flights)?;
    write_drone_geojson(artifact_dir, &date_name, &flights)?;

    info!("GarudaNav finished");
    Ok(())
}

/// Parse and range-check the planning date argument.
fn validate_date(arg: Option<&String>) -> Result<NaiveDate> {
    let Some(raw) = arg else {
        return Err(GarudaError::Date("date has not been supplied".to_string()));
    };
    let date = NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .map_err(|_| GarudaError::Date(format!("date supplied in the wrong format: {raw}")))?;

    // the parse formats are fixed, these cannot fail
    let start = NaiveDate::parse_from_str(DATE_START, "%Y-%m-%d").unwrap();
    let end = NaiveDate::parse_from_str(DATE_END, "%Y-%m-%d").unwrap();

    if date < start || date > end {
        return Err(GarudaError::Date(format!(
            "date out of bounds: {raw} not in {DATE_START}..{DATE_END}"
        )));
    }
    Ok(date)
}
