//! Fleet dispatch: orders restaurants by route cost and spends the move
//! budget on deliverable orders.

use std::time::{Duration, Instant};

use tracing::{debug, info, warn};

use crate::core::{LngLat, Zone};
use crate::orders::{Order, OrderOutcome, Restaurant};
use crate::planning::{mirror_return, MoveNode, PlannerConfig, RoutePlanner, TargetUnreachable};

/// Configuration for a dispatch run.
#[derive(Clone, Debug)]
pub struct DispatchConfig {
    /// Fixed launch point every flight starts from and returns to.
    pub launch: LngLat,
    /// Total discrete moves available across the whole run.
    pub move_budget: usize,
    /// Per-target search budget.
    pub search_timeout: Duration,
}

impl Default for DispatchConfig {
    fn default() -> Self {
        Self {
            launch: LngLat::new(-3.186874, 55.944494),
            move_budget: 2000,
            search_timeout: Duration::from_secs(10),
        }
    }
}

/// A serviced order's flight: the order number plus the full
/// outbound-then-inbound node sequence.
#[derive(Clone, Debug)]
pub struct PlannedFlight {
    /// Order this flight delivers.
    pub order_no: String,
    /// Outbound and inbound legs, concatenated.
    pub path: Vec<MoveNode>,
}

/// Plans flights for a day's orders over a fixed zone layout.
pub struct Dispatcher<'a> {
    corridor: &'a Zone,
    no_fly: &'a [Zone],
    config: DispatchConfig,
}

impl<'a> Dispatcher<'a> {
    /// Create a dispatcher for the given corridor and no-fly zones.
    pub fn new(corridor: &'a Zone, no_fly: &'a [Zone], config: DispatchConfig) -> Self {
        Self {
            corridor,
            no_fly,
            config,
        }
    }

    /// Plan flights for every deliverable order.
    ///
    /// Restaurants are ranked by a route-cost estimate first; orders are then
    /// serviced in restaurant rank order until the move budget is spent.
    /// Serviced orders are marked [`OrderOutcome::Delivered`] in place; the
    /// returned flights keep their planning order.
    pub fn plan_flights(
        &self,
        orders: &mut [Order],
        restaurants: &[Restaurant],
    ) -> Vec<PlannedFlight> {
        let epoch = Instant::now();
        let planner = RoutePlanner::new(
            self.corridor,
            self.no_fly,
            PlannerConfig {
                search_timeout: self.config.search_timeout,
            },
        );

        let ranked = self.rank_restaurants(restaurants, &planner, epoch);
        info!("{} of {} restaurants reachable", ranked.len(), restaurants.len());

        // arrange orders by restaurant rank; unmatched orders are invalid and
        // carry no restaurant name
        let mut ordered: Vec<usize> = Vec::new();
        for name in &ranked {
            ordered.extend(
                orders
                    .iter()
                    .enumerate()
                    .filter(|(_, order)| order.restaurant_name.as_deref() == Some(name.as_str()))
                    .map(|(i, _)| i),
            );
        }

        let mut flights = Vec::new();
        let mut moves_used = 0usize;

        for idx in ordered {
            if moves_used > self.config.move_budget {
                info!("move budget spent after {} moves", moves_used);
                break;
            }
            if orders[idx].outcome != OrderOutcome::ValidButNotDelivered {
                continue;
            }
            let Some(restaurant) = restaurants
                .iter()
                .find(|r| orders[idx].restaurant_name.as_deref() == Some(r.name.as_str()))
            else {
                continue;
            };

            let outbound = match planner.plan(self.config.launch, restaurant.location, epoch) {
                Ok(path) => path,
                // ranking already filtered unreachable restaurants; tolerate
                // a late failure by skipping the order
                Err(TargetUnreachable) => {
                    warn!(order_no = %orders[idx].order_no, "restaurant became unreachable, skipping");
                    continue;
                }
            };
            let inbound = mirror_return(&outbound, self.config.launch, epoch);

            let mut path = outbound;
            path.extend(inbound);

            orders[idx].outcome = OrderOutcome::Delivered;
            moves_used += path.len();
            flights.push(PlannedFlight {
                order_no: orders[idx].order_no.clone(),
                path,
            });
        }

        info!(
            "planned {} flights using {} of {} moves",
            flights.len(),
            moves_used,
            self.config.move_budget
        );
        flights
    }

    /// Rank restaurants by estimated route cost.
    ///
    /// Each restaurant gets one probe search. Unreachable restaurants are
    /// dropped. A restaurant whose cost estimate (route length doubled, plus
    /// the hover move) beats the best seen so far goes to the front of the
    /// order; everything else is appended. This is deliberately not a full
    /// sort: with a tight budget the front of the list decides which orders
    /// get served at all.
    fn rank_restaurants(
        &self,
        restaurants: &[Restaurant],
        planner: &RoutePlanner<'_>,
        epoch: Instant,
    ) -> Vec<String> {
        let mut ranked: Vec<String> = Vec::new();
        let mut shortest = usize::MAX;

        for restaurant in restaurants {
            match planner.plan(self.config.launch, restaurant.location, epoch) {
                Ok(path) => {
                    let estimate = path.len() * 2 + 1;
                    if estimate < shortest {
                        ranked.insert(0, restaurant.name.clone());
                        shortest = estimate;
                    } else {
                        ranked.push(restaurant.name.clone());
                    }
                }
                Err(TargetUnreachable) => {
                    debug!(restaurant = %restaurant.name, "unreachable, excluded from ranking");
                }
            }
        }
        ranked
    }
}
