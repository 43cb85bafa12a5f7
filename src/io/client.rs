//! Typed access to the remote delivery data service.
//!
//! One endpoint per dataset: `restaurants`, `orders/<date>`, `centralArea`
//! and `noFlyZones`. Retrieval failures propagate as crate errors; there is
//! no silent empty-collection fallback.

use serde::de::DeserializeOwned;
use serde::Deserialize;

use crate::core::{LngLat, Zone};
use crate::error::Result;
use crate::orders::{Order, Restaurant};

/// Wire record for one named central-area vertex.
#[derive(Debug, Deserialize)]
struct CorridorVertex {
    #[allow(dead_code)]
    name: String,
    longitude: f64,
    latitude: f64,
}

/// Wire record for one named no-fly zone polygon.
#[derive(Debug, Deserialize)]
struct NoFlyZoneRecord {
    #[allow(dead_code)]
    name: String,
    /// Vertices as `[lng, lat]` pairs.
    coordinates: Vec<[f64; 2]>,
}

/// Blocking client for the delivery data service.
pub struct RestClient {
    base_url: String,
    http: reqwest::blocking::Client,
}

impl RestClient {
    /// Create a client for `base_url`; a trailing `/` is appended if missing.
    pub fn new(base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        if !base_url.ends_with('/') {
            base_url.push('/');
        }
        Self {
            base_url,
            http: reqwest::blocking::Client::new(),
        }
    }

    fn get<T: DeserializeOwned>(&self, endpoint: &str) -> Result<T> {
        let url = format!("{}{}", self.base_url, endpoint);
        let response = self.http.get(&url).send()?.error_for_status()?;
        Ok(response.json()?)
    }

    /// All participating restaurants.
    pub fn restaurants(&self) -> Result<Vec<Restaurant>> {
        self.get("restaurants")
    }

    /// All orders placed for `date` (ISO `YYYY-MM-DD`).
    pub fn orders(&self, date: &str) -> Result<Vec<Order>> {
        self.get(&format!("orders/{date}"))
    }

    /// The protected corridor polygon.
    pub fn central_area(&self) -> Result<Zone> {
        let vertices: Vec<CorridorVertex> = self.get("centralArea")?;
        Ok(Zone::new(
            vertices
                .into_iter()
                .map(|v| LngLat::new(v.longitude, v.latitude))
                .collect(),
        ))
    }

    /// Every no-fly zone polygon.
    pub fn no_fly_zones(&self) -> Result<Vec<Zone>> {
        let zones: Vec<NoFlyZoneRecord> = self.get("noFlyZones")?;
        Ok(zones
            .into_iter()
            .map(|zone| {
                Zone::new(
                    zone.coordinates
                        .into_iter()
                        .map(|[lng, lat]| LngLat::new(lng, lat))
                        .collect(),
                )
            })
            .collect())
    }
}
