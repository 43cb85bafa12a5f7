//! Constrained best-first route search from the launch point to one target.
//!
//! The search expands discretized moves along the 16 compass bearings,
//! keeping a min-weight frontier. It is a pruned greedy search, not a
//! cost-optimal one: the weight biases progress toward the target and weakly
//! rewards distance already covered from the launch point.

use std::collections::BinaryHeap;
use std::time::{Duration, Instant};

use thiserror::Error;

use crate::core::{point_in_any_zone, segment_crosses_any_zone, Bearing, LngLat, Zone};

use super::node::{FrontierEntry, MoveNode, ProximityIndex};
use super::ticks_since;

/// Weight applied to the remaining distance to the target.
const TARGET_DISTANCE_BIAS: f64 = 1.6;

/// The only planning failure: the frontier emptied or the per-target search
/// budget ran out. Callers treat both identically and drop the target.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
#[error("no route to target within search limits")]
pub struct TargetUnreachable;

/// Configuration for the single-target route search.
#[derive(Clone, Debug)]
pub struct PlannerConfig {
    /// Wall-clock budget for one target before it is declared unreachable.
    pub search_timeout: Duration,
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            search_timeout: Duration::from_secs(10),
        }
    }
}

/// Single-target route planner over a fixed zone layout.
pub struct RoutePlanner<'a> {
    corridor: &'a Zone,
    no_fly: &'a [Zone],
    config: PlannerConfig,
}

impl<'a> RoutePlanner<'a> {
    /// Create a planner for the given corridor and no-fly zone set.
    pub fn new(corridor: &'a Zone, no_fly: &'a [Zone], config: PlannerConfig) -> Self {
        Self {
            corridor,
            no_fly,
            config,
        }
    }

    /// Plan a route from `launch` to within move tolerance of `target`.
    ///
    /// The returned sequence starts at the launch node and ends at the last
    /// admitted node that was within tolerance of the target; the synthetic
    /// target itself is not included. Node timestamps are milliseconds since
    /// `epoch`, the dispatch run's start.
    ///
    /// Admission rules for a candidate step `cur -> next`:
    /// - `next` must not be close to `cur`'s parent (immediate backtracking;
    ///   the launch node, having no parent, is exempt);
    /// - the segment `cur -> next` must not cross a no-fly zone edge;
    /// - `next` must not lie inside a no-fly zone;
    /// - no previously admitted node may lie within the proximity radius;
    /// - a route that has left the corridor may never re-enter it.
    pub fn plan(
        &self,
        launch: LngLat,
        target: LngLat,
        epoch: Instant,
    ) -> Result<Vec<MoveNode>, TargetUnreachable> {
        let started = Instant::now();

        let mut arena: Vec<MoveNode> = Vec::new();
        let mut parents: Vec<Option<usize>> = Vec::new();
        let mut frontier: BinaryHeap<FrontierEntry> = BinaryHeap::new();
        let mut admitted = ProximityIndex::new();
        let mut seq = 0u64;

        let launch_weight = launch.distance_to(&target);
        arena.push(MoveNode {
            position: launch,
            weight: Some(launch_weight),
            bearing: None,
            ticks_since_start: ticks_since(epoch),
            in_corridor: true,
        });
        parents.push(None);
        admitted.insert(launch);
        frontier.push(FrontierEntry {
            node: 0,
            weight: launch_weight,
            seq,
        });

        let goal_parent = loop {
            if started.elapsed() > self.config.search_timeout {
                return Err(TargetUnreachable);
            }
            let Some(entry) = frontier.pop() else {
                return Err(TargetUnreachable);
            };
            let cur = entry.node;

            if arena[cur].position.close_to(&target) {
                break cur;
            }

            for bearing in Bearing::ALL {
                let next = arena[cur].position.next_position(Some(bearing));
                let next_in_corridor = self.corridor.contains(&next);

                if let Some(parent) = parents[cur] {
                    if next.close_to(&arena[parent].position) {
                        continue;
                    }
                }
                if segment_crosses_any_zone(&arena[cur].position, &next, self.no_fly) {
                    continue;
                }
                if point_in_any_zone(&next, self.no_fly) {
                    continue;
                }
                if admitted.any_within(&next) {
                    continue;
                }
                if next_in_corridor && !arena[cur].in_corridor {
                    continue;
                }

                let weight =
                    TARGET_DISTANCE_BIAS * next.distance_to(&target) - next.distance_to(&launch);
                seq += 1;
                let idx = arena.len();
                arena.push(MoveNode {
                    position: next,
                    weight: Some(weight),
                    bearing: Some(bearing),
                    ticks_since_start: ticks_since(epoch),
                    in_corridor: next_in_corridor,
                });
                parents.push(Some(cur));
                admitted.insert(next);
                frontier.push(FrontierEntry {
                    node: idx,
                    weight,
                    seq,
                });
            }
        };

        Ok(reconstruct(&arena, &parents, goal_parent))
    }
}

/// Walk parent links from the goal's recorded parent back to the launch node
/// and reverse into launch-to-target order.
fn reconstruct(arena: &[MoveNode], parents: &[Option<usize>], from: usize) -> Vec<MoveNode> {
    let mut path = Vec::new();
    let mut cur = Some(from);
    while let Some(idx) = cur {
        path.push(arena[idx].clone());
        cur = parents[idx];
    }
    path.reverse();
    path
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{MOVE_DISTANCE, MOVE_TOLERANCE};

    /// Corridor covering the whole test plane.
    fn open_corridor() -> Zone {
        Zone::new(vec![
            LngLat::new(-180.0, -90.0),
            LngLat::new(-180.0, 90.0),
            LngLat::new(180.0, 90.0),
            LngLat::new(180.0, -90.0),
        ])
    }

    fn square_zone(center: LngLat, half_size: f64) -> Zone {
        Zone::new(vec![
            LngLat::new(center.lng - half_size, center.lat - half_size),
            LngLat::new(center.lng - half_size, center.lat + half_size),
            LngLat::new(center.lng + half_size, center.lat + half_size),
            LngLat::new(center.lng + half_size, center.lat - half_size),
        ])
    }

    #[test]
    fn test_straight_route_reaches_target() {
        let corridor = open_corridor();
        let planner = RoutePlanner::new(&corridor, &[], PlannerConfig::default());
        let launch = LngLat::new(-3.186874, 55.944494);
        let target = LngLat::new(launch.lng + 4.0 * MOVE_DISTANCE, launch.lat);

        let path = planner.plan(launch, target, Instant::now()).unwrap();

        assert!(path.len() >= 2);
        assert!(path[0].position.same_coordinates(&launch));
        assert!(path[0].bearing.is_none());
        assert!(path.last().unwrap().position.close_to(&target));
        for pair in path.windows(2) {
            let step = pair[0].position.distance_to(&pair[1].position);
            assert!((step - MOVE_DISTANCE).abs() < 1e-12);
        }
    }

    #[test]
    fn test_boxed_in_launch_is_unreachable() {
        let corridor = open_corridor();
        let launch = LngLat::new(-3.186874, 55.944494);
        // ring tighter than one move length: every candidate crosses an edge
        let zones = [square_zone(launch, MOVE_DISTANCE * 0.66)];
        let planner = RoutePlanner::new(&corridor, &zones, PlannerConfig::default());
        let target = LngLat::new(launch.lng + 0.01, launch.lat);

        let result = planner.plan(launch, target, Instant::now());
        assert!(matches!(result, Err(TargetUnreachable)));
    }

    #[test]
    fn test_enclosed_target_times_out_as_unreachable() {
        let corridor = open_corridor();
        let launch = LngLat::new(-3.186874, 55.944494);
        let target = LngLat::new(launch.lng + 6.0 * MOVE_DISTANCE, launch.lat);
        let zones = [square_zone(target, MOVE_DISTANCE * 2.0)];
        let planner = RoutePlanner::new(
            &corridor,
            &zones,
            PlannerConfig {
                search_timeout: Duration::from_millis(200),
            },
        );

        let result = planner.plan(launch, target, Instant::now());
        assert!(matches!(result, Err(TargetUnreachable)));
    }

    #[test]
    fn test_route_detours_around_zone() {
        let corridor = open_corridor();
        let launch = LngLat::new(-3.186874, 55.944494);
        let target = LngLat::new(launch.lng + 8.0 * MOVE_DISTANCE, launch.lat);
        // wall between launch and target, with room to go around
        let zones = [Zone::new(vec![
            LngLat::new(launch.lng + 4.0 * MOVE_DISTANCE, launch.lat - 3.0 * MOVE_DISTANCE),
            LngLat::new(launch.lng + 4.0 * MOVE_DISTANCE, launch.lat + 3.0 * MOVE_DISTANCE),
            LngLat::new(launch.lng + 4.5 * MOVE_DISTANCE, launch.lat + 3.0 * MOVE_DISTANCE),
            LngLat::new(launch.lng + 4.5 * MOVE_DISTANCE, launch.lat - 3.0 * MOVE_DISTANCE),
        ])];
        let planner = RoutePlanner::new(&corridor, &zones, PlannerConfig::default());

        let path = planner.plan(launch, target, Instant::now()).unwrap();

        assert!(path.last().unwrap().position.close_to(&target));
        // longer than the direct 8-move line because of the detour
        assert!(path.len() > 9);
        for node in &path {
            assert!(!point_in_any_zone(&node.position, &zones));
        }
    }

    #[test]
    fn test_route_never_reenters_corridor_after_leaving() {
        // corridor is a small square around the launch point; the target is
        // outside it, so the route must exit and stay out
        let launch = LngLat::new(-3.186874, 55.944494);
        let corridor = square_zone(launch, 3.0 * MOVE_DISTANCE);
        let target = LngLat::new(launch.lng + 9.0 * MOVE_DISTANCE, launch.lat);
        let planner = RoutePlanner::new(&corridor, &[], PlannerConfig::default());

        let path = planner.plan(launch, target, Instant::now()).unwrap();

        let mut left = false;
        for node in &path {
            if left {
                assert!(!node.in_corridor);
            }
            if !node.in_corridor {
                left = true;
            }
        }
        assert!(left);
    }

    #[test]
    fn test_target_within_tolerance_of_launch() {
        let corridor = open_corridor();
        let planner = RoutePlanner::new(&corridor, &[], PlannerConfig::default());
        let launch = LngLat::new(-3.186874, 55.944494);
        let target = LngLat::new(launch.lng + MOVE_TOLERANCE / 2.0, launch.lat);

        let path = planner.plan(launch, target, Instant::now()).unwrap();

        // the launch node alone satisfies the goal check
        assert_eq!(path.len(), 1);
        assert!(path[0].position.same_coordinates(&launch));
    }
}
