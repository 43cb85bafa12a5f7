//! Artifact generation: deliveries, flightpath, and GeoJSON line files.
//!
//! All three artifacts are written pretty-printed into the artifact
//! directory, named after the planning date.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Serialize;
use serde_json::json;
use tracing::info;

use crate::dispatch::PlannedFlight;
use crate::error::Result;
use crate::orders::{Order, OrderOutcome};

/// One order's outcome in the deliveries artifact.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct DeliveryRecord<'a> {
    order_no: &'a str,
    outcome: OrderOutcome,
    cost_in_pence: u32,
}

/// One move edge in the flightpath artifact.
///
/// The edge from node i to node i+1 carries node i+1's bearing angle and
/// timestamp; hover edges carry a null angle.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct MoveRecord<'a> {
    order_no: &'a str,
    from_longitude: f64,
    from_latitude: f64,
    angle: Option<f64>,
    to_longitude: f64,
    to_latitude: f64,
    ticks_since_start_of_calculation: u64,
}

/// Write `deliveries-<date>.json`: one record per order, in intake order.
pub fn write_deliveries(dir: &Path, date: &str, orders: &[Order]) -> Result<PathBuf> {
    let records: Vec<DeliveryRecord<'_>> = orders
        .iter()
        .map(|order| DeliveryRecord {
            order_no: &order.order_no,
            outcome: order.outcome,
            cost_in_pence: order.price_total_in_pence,
        })
        .collect();

    write_pretty(dir, &format!("deliveries-{date}.json"), &records)
}

/// Write `flightpath-<date>.json`: every move edge of every flight, in
/// planning order.
pub fn write_flightpath(dir: &Path, date: &str, flights: &[PlannedFlight]) -> Result<PathBuf> {
    let mut records: Vec<MoveRecord<'_>> = Vec::new();
    for flight in flights {
        for pair in flight.path.windows(2) {
            records.push(MoveRecord {
                order_no: &flight.order_no,
                from_longitude: pair[0].position.lng,
                from_latitude: pair[0].position.lat,
                angle: pair[1].bearing.map(|b| b.angle_deg()),
                to_longitude: pair[1].position.lng,
                to_latitude: pair[1].position.lat,
                ticks_since_start_of_calculation: pair[1].ticks_since_start,
            });
        }
    }

    write_pretty(dir, &format!("flightpath-{date}.json"), &records)
}

/// Write `drone-<date>.geojson`: a FeatureCollection holding one LineString
/// through every visited coordinate, in order.
pub fn write_drone_geojson(dir: &Path, date: &str, flights: &[PlannedFlight]) -> Result<PathBuf> {
    let coordinates: Vec<[f64; 2]> = flights
        .iter()
        .flat_map(|flight| {
            flight
                .path
                .iter()
                .map(|node| [node.position.lng, node.position.lat])
        })
        .collect();

    let collection = json!({
        "type": "FeatureCollection",
        "features": [{
            "type": "Feature",
            "properties": {},
            "geometry": {
                "type": "LineString",
                "coordinates": coordinates,
            },
        }],
    });

    write_pretty(dir, &format!("drone-{date}.geojson"), &collection)
}

fn write_pretty<T: Serialize>(dir: &Path, file_name: &str, value: &T) -> Result<PathBuf> {
    fs::create_dir_all(dir)?;
    let path = dir.join(file_name);
    fs::write(&path, serde_json::to_string_pretty(value)?)?;
    info!("wrote {:?}", path);
    Ok(path)
}
