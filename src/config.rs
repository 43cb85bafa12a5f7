//! Configuration loading for GarudaNav

use std::path::Path;
use std::time::Duration;

use serde::Deserialize;

use crate::core::LngLat;
use crate::dispatch::DispatchConfig;
use crate::error::{GarudaError, Result};

/// Main configuration structure
#[derive(Clone, Debug, Deserialize)]
pub struct GarudaConfig {
    /// Remote delivery data service settings.
    #[serde(default)]
    pub service: ServiceConfig,
    /// Flight planning settings.
    #[serde(default)]
    pub flight: FlightConfig,
    /// Artifact output settings.
    #[serde(default)]
    pub output: OutputConfig,
}

/// Delivery data service settings
#[derive(Clone, Debug, Deserialize)]
pub struct ServiceConfig {
    /// Base URL of the data service (default: the public ILP REST service)
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

/// Flight planning parameters
#[derive(Clone, Debug, Deserialize)]
pub struct FlightConfig {
    /// Launch point longitude (default: Appleton Tower)
    #[serde(default = "default_launch_lng")]
    pub launch_lng: f64,

    /// Launch point latitude
    #[serde(default = "default_launch_lat")]
    pub launch_lat: f64,

    /// Total discrete moves available per run (default: 2000)
    #[serde(default = "default_move_budget")]
    pub move_budget: usize,

    /// Per-target search budget in milliseconds (default: 10000)
    #[serde(default = "default_search_timeout_ms")]
    pub search_timeout_ms: u64,
}

/// Artifact output settings
#[derive(Clone, Debug, Deserialize)]
pub struct OutputConfig {
    /// Directory the deliveries, flightpath and GeoJSON files are written to
    #[serde(default = "default_artifact_dir")]
    pub artifact_dir: String,
}

// Default value functions
fn default_base_url() -> String {
    "https://ilp-rest.azurewebsites.net/".to_string()
}
fn default_launch_lng() -> f64 {
    -3.186874
}
fn default_launch_lat() -> f64 {
    55.944494
}
fn default_move_budget() -> usize {
    2000
}
fn default_search_timeout_ms() -> u64 {
    10_000
}
fn default_artifact_dir() -> String {
    ".".to_string()
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
        }
    }
}

impl Default for FlightConfig {
    fn default() -> Self {
        Self {
            launch_lng: default_launch_lng(),
            launch_lat: default_launch_lat(),
            move_budget: default_move_budget(),
            search_timeout_ms: default_search_timeout_ms(),
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            artifact_dir: default_artifact_dir(),
        }
    }
}

impl Default for GarudaConfig {
    fn default() -> Self {
        Self {
            service: ServiceConfig::default(),
            flight: FlightConfig::default(),
            output: OutputConfig::default(),
        }
    }
}

impl GarudaConfig {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| GarudaError::Config(format!("Failed to read config file: {}", e)))?;
        let config: GarudaConfig = toml::from_str(&content)?;
        Ok(config)
    }
}

impl FlightConfig {
    /// The dispatch configuration these settings describe.
    pub fn dispatch_config(&self) -> DispatchConfig {
        DispatchConfig {
            launch: LngLat::new(self.launch_lng, self.launch_lat),
            move_budget: self.move_budget,
            search_timeout: Duration::from_millis(self.search_timeout_ms),
        }
    }
}
