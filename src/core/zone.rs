//! Polygonal zones: no-fly areas and the protected flight corridor.

use super::point::LngLat;

/// Latitude nudge applied when a query point sits exactly on an edge
/// endpoint's latitude, to avoid the vertex degeneracy in the crossing test.
const EDGE_LATITUDE_NUDGE: f64 = 0.000_0015;

/// A closed polygon on the flight plane.
///
/// Vertices are stored in order; the edge from the last vertex back to the
/// first is implied.
#[derive(Clone, Debug, PartialEq)]
pub struct Zone {
    vertices: Vec<LngLat>,
}

impl Zone {
    /// Create a zone from its boundary vertices.
    pub fn new(vertices: Vec<LngLat>) -> Self {
        Self { vertices }
    }

    /// The zone's boundary vertices, in order.
    #[inline]
    pub fn vertices(&self) -> &[LngLat] {
        &self.vertices
    }

    /// Crossing-number containment test.
    ///
    /// Casts a ray from the point and toggles on each qualifying edge
    /// crossing. A query latitude that coincides with an edge endpoint is
    /// nudged up by a small fixed epsilon first.
    pub fn contains(&self, point: &LngLat) -> bool {
        let len = self.vertices.len();
        let mut inside = false;
        for i in 0..len {
            let a = &self.vertices[i];
            let b = &self.vertices[(i + 1) % len];
            if ray_crosses_edge(a, b, point.lng, point.lat) {
                inside = !inside;
            }
        }
        inside
    }
}

/// Whether a leftward ray from (`lng`, `lat`) crosses the edge `a`-`b`.
fn ray_crosses_edge(a: &LngLat, b: &LngLat, lng: f64, mut lat: f64) -> bool {
    // orient the edge by ascending latitude
    let (lo, hi) = if a.lat > b.lat { (b, a) } else { (a, b) };

    if lat == lo.lat || lat == hi.lat {
        lat += EDGE_LATITUDE_NUDGE;
    }

    if lat > hi.lat || lat < lo.lat || lng >= lo.lng.max(hi.lng) {
        return false;
    }
    if lng < lo.lng.min(hi.lng) {
        return true;
    }

    // the point is within the edge's bounding box: compare gradients to decide
    // which side of the edge it falls on
    let to_point = (lat - lo.lat) / (lng - lo.lng);
    let along_edge = (hi.lat - lo.lat) / (hi.lng - lo.lng);
    to_point >= along_edge
}

/// Whether any zone in the set contains the point.
pub fn point_in_any_zone(point: &LngLat, zones: &[Zone]) -> bool {
    zones.iter().any(|zone| zone.contains(point))
}

/// Whether the segments `a1`-`a2` and `b1`-`b2` intersect.
///
/// Solves the two-parameter line intersection in Cramer's-rule form; the
/// segments intersect iff both parameters land in [0, 1] inclusive. Parallel
/// or degenerate segments produce a NaN or infinite parameter, which compares
/// false against the interval and is reported as no intersection.
pub fn segments_intersect(a1: &LngLat, a2: &LngLat, b1: &LngLat, b2: &LngLat) -> bool {
    let denom = (a1.lng - a2.lng) * (b1.lat - b2.lat) - (a1.lat - a2.lat) * (b1.lng - b2.lng);

    let t = ((a1.lng - b1.lng) * (b1.lat - b2.lat) - (a1.lat - b1.lat) * (b1.lng - b2.lng)) / denom;
    let u = ((a1.lng - b1.lng) * (a1.lat - a2.lat) - (a1.lat - b1.lat) * (a1.lng - a2.lng)) / denom;

    (0.0..=1.0).contains(&t) && (0.0..=1.0).contains(&u)
}

/// Whether the segment `p1`-`p2` crosses any edge of any zone in the set.
pub fn segment_crosses_any_zone(p1: &LngLat, p2: &LngLat, zones: &[Zone]) -> bool {
    for zone in zones {
        let len = zone.vertices.len();
        for i in 0..len {
            let a = &zone.vertices[i];
            let b = &zone.vertices[(i + 1) % len];
            if segments_intersect(a, b, p1, p2) {
                return true;
            }
        }
    }
    false
}
