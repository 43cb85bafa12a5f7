//! Mirrors an outbound route into the inbound return leg.

use std::time::Instant;

use crate::core::{Bearing, LngLat};

use super::node::MoveNode;
use super::ticks_since;

/// Build the inbound leg for an outbound route.
///
/// The outbound sequence is deep-copied and reversed; the first node becomes
/// a hover over the target (bearing cleared), interior nodes get their
/// bearings flipped to the opposite direction, and the leg back onto the
/// launch point is recomputed by probing which bearing lands exactly on it.
/// A final synthetic hover node over `launch` is appended, so the inbound
/// sequence is one node longer than the outbound one.
///
/// When no bearing reproduces the final position bitwise (possible under
/// floating point), the last leg keeps a cleared bearing and is emitted
/// downstream as a hover edge.
pub fn mirror_return(outbound: &[MoveNode], launch: LngLat, epoch: Instant) -> Vec<MoveNode> {
    let mut inbound: Vec<MoveNode> = outbound.to_vec();
    inbound.reverse();

    let now = ticks_since(epoch);
    let len = inbound.len();

    // hover over the target before turning back
    if let Some(first) = inbound.first_mut() {
        first.bearing = None;
        first.ticks_since_start = now;
    }

    if len > 1 {
        for node in &mut inbound[1..len - 1] {
            node.bearing = node.bearing.map(Bearing::opposite);
            node.ticks_since_start = now;
        }
    }

    if len >= 2 {
        let before = inbound[len - 2].position;
        for bearing in Bearing::ALL {
            if inbound[len - 1]
                .position
                .same_coordinates(&before.next_position(Some(bearing)))
            {
                inbound[len - 1].bearing = Some(bearing);
                inbound[len - 1].ticks_since_start = now;
                break;
            }
        }
    }

    inbound.push(MoveNode {
        position: launch,
        weight: Some(0.0),
        bearing: None,
        ticks_since_start: ticks_since(epoch),
        in_corridor: true,
    });

    inbound
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::MOVE_DISTANCE;

    fn step_node(position: LngLat, bearing: Bearing) -> MoveNode {
        MoveNode {
            position,
            weight: Some(1.0),
            bearing: Some(bearing),
            ticks_since_start: 0,
            in_corridor: true,
        }
    }

    fn outbound_east(launch: LngLat, steps: usize) -> Vec<MoveNode> {
        let mut path = vec![MoveNode {
            position: launch,
            weight: Some(1.0),
            bearing: None,
            ticks_since_start: 0,
            in_corridor: true,
        }];
        for _ in 0..steps {
            let position = path.last().unwrap().position.next_position(Some(Bearing::E));
            path.push(step_node(position, Bearing::E));
        }
        path
    }

    #[test]
    fn test_inbound_is_one_longer_than_outbound() {
        let launch = LngLat::new(-3.186874, 55.944494);
        let outbound = outbound_east(launch, 4);
        let inbound = mirror_return(&outbound, launch, Instant::now());
        assert_eq!(inbound.len(), outbound.len() + 1);
    }

    #[test]
    fn test_inbound_hovers_at_both_ends() {
        let launch = LngLat::new(-3.186874, 55.944494);
        let outbound = outbound_east(launch, 4);
        let inbound = mirror_return(&outbound, launch, Instant::now());

        let first = inbound.first().unwrap();
        assert!(first.bearing.is_none());
        assert!(first
            .position
            .same_coordinates(&outbound.last().unwrap().position));

        let last = inbound.last().unwrap();
        assert!(last.bearing.is_none());
        assert!(last.position.same_coordinates(&launch));
        assert_eq!(last.weight, Some(0.0));
        assert!(last.in_corridor);
    }

    #[test]
    fn test_interior_bearings_are_flipped() {
        let launch = LngLat::new(-3.186874, 55.944494);
        let outbound = outbound_east(launch, 4);
        let inbound = mirror_return(&outbound, launch, Instant::now());

        // interior of the reversed sequence, before the appended hover
        for node in &inbound[1..inbound.len() - 2] {
            assert_eq!(node.bearing, Some(Bearing::W));
        }
    }

    #[test]
    fn test_outbound_is_not_mutated() {
        let launch = LngLat::new(-3.186874, 55.944494);
        let outbound = outbound_east(launch, 3);
        let bearings: Vec<_> = outbound.iter().map(|n| n.bearing).collect();
        let _ = mirror_return(&outbound, launch, Instant::now());
        let after: Vec<_> = outbound.iter().map(|n| n.bearing).collect();
        assert_eq!(bearings, after);
    }

    #[test]
    fn test_final_leg_bearing_probes_exact_coordinates() {
        let launch = LngLat::new(0.0, 0.0);
        // hand-built outbound whose reverse steps land exactly: go north,
        // where sin(90) is exact and the return south lands back bitwise
        let n1 = LngLat::new(0.0, MOVE_DISTANCE);
        let outbound = vec![
            MoveNode {
                position: launch,
                weight: Some(1.0),
                bearing: None,
                ticks_since_start: 0,
                in_corridor: true,
            },
            step_node(n1, Bearing::N),
        ];
        let inbound = mirror_return(&outbound, launch, Instant::now());

        assert_eq!(inbound.len(), 3);
        // the leg back onto the launch point found a matching bearing only if
        // stepping south from n1 reproduces the launch coordinate exactly
        let expected = n1.next_position(Some(Bearing::S));
        if expected.same_coordinates(&launch) {
            assert_eq!(inbound[1].bearing, Some(Bearing::S));
        } else {
            assert!(inbound[1].bearing.is_none());
        }
    }

    #[test]
    fn test_single_node_outbound() {
        let launch = LngLat::new(-3.186874, 55.944494);
        let outbound = outbound_east(launch, 0);
        let inbound = mirror_return(&outbound, launch, Instant::now());

        assert_eq!(inbound.len(), 2);
        assert!(inbound[0].bearing.is_none());
        assert!(inbound[1].bearing.is_none());
    }
}
