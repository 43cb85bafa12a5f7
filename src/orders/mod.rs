//! Order intake: restaurants, customer orders, and validation.

mod order;
mod restaurant;

pub use order::{validate_orders, Order, OrderOutcome, DELIVERY_FEE_PENCE, MAX_ITEMS_PER_ORDER};
pub use restaurant::{MenuItem, Restaurant};
