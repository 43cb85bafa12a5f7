//! Route planning for a single delivery target.
//!
//! This module provides:
//! - Search node values and frontier bookkeeping
//! - The constrained best-first single-target planner
//! - Mirroring of an outbound route into its inbound return leg

mod node;
mod planner;
mod return_path;

pub use node::{MoveNode, NODE_PROXIMITY};
pub use planner::{PlannerConfig, RoutePlanner, TargetUnreachable};
pub use return_path::mirror_return;

use std::time::Instant;

/// Milliseconds elapsed since the dispatch run's epoch.
#[inline]
pub(crate) fn ticks_since(epoch: Instant) -> u64 {
    epoch.elapsed().as_millis() as u64
}
