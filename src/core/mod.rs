//! Core geometry types for flight planning.
//!
//! Pure values and predicates with no state: coordinates and discretized
//! stepping, the 16-way compass, and polygonal zone tests.

mod bearing;
mod point;
mod zone;

pub use bearing::Bearing;
pub use point::{LngLat, MOVE_DISTANCE, MOVE_TOLERANCE};
pub use zone::{point_in_any_zone, segment_crosses_any_zone, segments_intersect, Zone};
