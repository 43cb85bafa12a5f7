//! Geographic coordinate type and discretized stepping.

use serde::{Deserialize, Serialize};

use super::bearing::Bearing;

/// Length of a single discrete drone move, in plane units.
pub const MOVE_DISTANCE: f64 = 0.00015;

/// Two points closer than this are treated as the same position.
///
/// Numerically equal to [`MOVE_DISTANCE`]; callers must not assume any margin
/// between the two.
pub const MOVE_TOLERANCE: f64 = 0.00015;

/// A longitude/latitude pair on the flight plane.
///
/// Distances are Euclidean in plane units, not geodesic. Equality is exact;
/// use [`LngLat::close_to`] for the tolerance-based predicate.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct LngLat {
    /// Longitude coordinate
    #[serde(rename = "longitude")]
    pub lng: f64,
    /// Latitude coordinate
    #[serde(rename = "latitude")]
    pub lat: f64,
}

impl LngLat {
    /// Create a new coordinate pair.
    #[inline]
    pub fn new(lng: f64, lat: f64) -> Self {
        Self { lng, lat }
    }

    /// Euclidean distance to another point.
    #[inline]
    pub fn distance_to(&self, other: &LngLat) -> f64 {
        let dlng = self.lng - other.lng;
        let dlat = self.lat - other.lat;
        (dlng * dlng + dlat * dlat).sqrt()
    }

    /// Whether `other` lies strictly within [`MOVE_TOLERANCE`] of this point.
    #[inline]
    pub fn close_to(&self, other: &LngLat) -> bool {
        self.distance_to(other) < MOVE_TOLERANCE
    }

    /// Exact coordinate equality.
    #[inline]
    pub fn same_coordinates(&self, other: &LngLat) -> bool {
        self.lng == other.lng && self.lat == other.lat
    }

    /// The position one move away along `bearing`.
    ///
    /// A `None` bearing is a hover: the position is returned unchanged.
    #[inline]
    pub fn next_position(&self, bearing: Option<Bearing>) -> LngLat {
        match bearing {
            None => *self,
            Some(bearing) => {
                let rad = bearing.angle_deg().to_radians();
                LngLat::new(
                    self.lng + MOVE_DISTANCE * rad.cos(),
                    self.lat + MOVE_DISTANCE * rad.sin(),
                )
            }
        }
    }
}
