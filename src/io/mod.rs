//! Data retrieval and artifact generation.
//!
//! - **RestClient**: typed, blocking access to the delivery data service
//! - **Artifact writers**: deliveries JSON, flightpath JSON, GeoJSON line

mod client;
mod output;

pub use client::RestClient;
pub use output::{write_deliveries, write_drone_geojson, write_flightpath};
