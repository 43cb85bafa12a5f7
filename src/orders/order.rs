//! Customer orders: wire format, validation, and outcome taxonomy.

use std::collections::HashSet;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::restaurant::Restaurant;

/// Flat delivery fee added to every order, in pence.
pub const DELIVERY_FEE_PENCE: u32 = 100;

/// Maximum number of items a single order may carry.
pub const MAX_ITEMS_PER_ORDER: usize = 4;

/// Outcome of an order after validation and dispatch.
///
/// Serialized by variant name into the deliveries artifact.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub enum OrderOutcome {
    /// Valid order that the drone delivered within the move budget.
    Delivered,
    /// Valid order not yet delivered: the restaurant was unreachable or the
    /// drone ran out of moves first.
    #[default]
    ValidButNotDelivered,
    /// Card number failed validation.
    InvalidCardNumber,
    /// Card expiry date failed validation.
    InvalidExpiryDate,
    /// Card CVV failed validation.
    InvalidCvv,
    /// Declared total does not match the priced items plus delivery fee.
    InvalidTotal,
    /// An ordered item appears on no restaurant's menu.
    InvalidPizzaNotDefined,
    /// The order carries no items.
    InvalidNoPizzasInOrder,
    /// The order carries more items than a drone can take.
    InvalidPizzaCountTooMany,
    /// The ordered items do not all come from one restaurant.
    InvalidPizzaCombinationMultipleSuppliers,
    /// The order number itself is malformed.
    Invalid,
}

/// Why an order could not be priced against the restaurants' menus.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum PricingError {
    NoItems,
    TooManyItems,
    MultipleSuppliers,
    ItemNotFound,
}

/// An order as retrieved from the delivery service.
#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    /// Unique order number.
    pub order_no: String,
    /// ISO date the order was placed for.
    pub order_date: String,
    /// Customer name.
    #[serde(default)]
    pub customer: String,
    /// Payment card number.
    pub credit_card_number: String,
    /// Payment card expiry, "MM/YY".
    pub credit_card_expiry: String,
    /// Payment card verification value.
    pub cvv: String,
    /// Declared order total in pence, delivery fee included.
    pub price_total_in_pence: u32,
    /// Names of the ordered items.
    pub order_items: Vec<String>,
    /// Validation/dispatch outcome; defaults to pending delivery.
    #[serde(skip)]
    pub outcome: OrderOutcome,
    /// Supplying restaurant, learned during pricing; `None` until priced.
    #[serde(skip)]
    pub restaurant_name: Option<String>,
}

impl Order {
    /// Run the full validation sequence against the restaurant set.
    ///
    /// Checks run in a fixed order and each failing check overwrites the
    /// outcome, so the last failure wins.
    pub fn validate(&mut self, restaurants: &[Restaurant]) {
        self.check_order_number();
        self.check_total(restaurants);
        self.check_cvv();
        self.check_card_number();
        self.check_expiry();
    }

    fn check_order_number(&mut self) {
        if self.order_no.len() != 8 {
            self.outcome = OrderOutcome::Invalid;
        }
    }

    fn check_total(&mut self, restaurants: &[Restaurant]) {
        match self.delivery_cost(restaurants) {
            Ok(cost) => {
                if self.price_total_in_pence != cost {
                    self.outcome = OrderOutcome::InvalidTotal;
                }
            }
            Err(PricingError::TooManyItems) => {
                self.outcome = OrderOutcome::InvalidPizzaCountTooMany;
            }
            Err(PricingError::NoItems) => {
                self.outcome = OrderOutcome::InvalidNoPizzasInOrder;
            }
            Err(PricingError::MultipleSuppliers) => {
                self.outcome = OrderOutcome::InvalidPizzaCombinationMultipleSuppliers;
            }
            Err(PricingError::ItemNotFound) => {
                self.outcome = OrderOutcome::InvalidPizzaNotDefined;
            }
        }
    }

    fn check_cvv(&mut self) {
        if self.cvv.len() != 3 {
            self.outcome = OrderOutcome::InvalidCvv;
        }
    }

    fn check_card_number(&mut self) {
        if self.credit_card_number.len() != 16 {
            self.outcome = OrderOutcome::InvalidCardNumber;
        }
    }

    fn check_expiry(&mut self) {
        if !expiry_after_order_date(&self.credit_card_expiry, &self.order_date) {
            self.outcome = OrderOutcome::InvalidExpiryDate;
        }
    }

    /// Price the order against the menus and record the supplying restaurant.
    ///
    /// All items must come from exactly one restaurant's menu; the returned
    /// cost includes the delivery fee.
    fn delivery_cost(&mut self, restaurants: &[Restaurant]) -> Result<u32, PricingError> {
        if self.order_items.is_empty() {
            return Err(PricingError::NoItems);
        }
        if self.order_items.len() > MAX_ITEMS_PER_ORDER {
            return Err(PricingError::TooManyItems);
        }

        let mut all_available: HashSet<&str> = HashSet::new();
        let mut supplier: Option<&Restaurant> = None;

        for restaurant in restaurants {
            let menu_names: HashSet<&str> =
                restaurant.menu.iter().map(|item| item.name.as_str()).collect();
            all_available.extend(&menu_names);

            if supplier.is_none()
                && self
                    .order_items
                    .iter()
                    .all(|item| menu_names.contains(item.as_str()))
            {
                supplier = Some(restaurant);
            }
        }

        let Some(supplier) = supplier else {
            if self
                .order_items
                .iter()
                .all(|item| all_available.contains(item.as_str()))
            {
                return Err(PricingError::MultipleSuppliers);
            }
            return Err(PricingError::ItemNotFound);
        };

        let total: u32 = self
            .order_items
            .iter()
            .map(|item| supplier.item_price(item))
            .sum();

        self.restaurant_name = Some(supplier.name.clone());
        Ok(total + DELIVERY_FEE_PENCE)
    }
}

/// Validate every order in place, in retrieval order.
pub fn validate_orders(orders: &mut [Order], restaurants: &[Restaurant]) {
    for order in orders {
        order.validate(restaurants);
    }
}

/// Whether a "MM/YY" card expiry falls strictly after the order date.
///
/// A malformed expiry or order date counts as expired.
fn expiry_after_order_date(expiry: &str, order_date: &str) -> bool {
    let bytes = expiry.as_bytes();
    if bytes.len() != 5 || bytes[2] != b'/' {
        return false;
    }
    let digits = [bytes[0], bytes[1], bytes[3], bytes[4]];
    if !digits.iter().all(u8::is_ascii_digit) {
        return false;
    }
    let month = u32::from((bytes[0] - b'0') * 10 + (bytes[1] - b'0'));
    if !(1..=12).contains(&month) {
        return false;
    }
    let year = 2000 + i32::from((bytes[3] - b'0') * 10 + (bytes[4] - b'0'));

    let Ok(ordered) = NaiveDate::parse_from_str(order_date, "%Y-%m-%d") else {
        return false;
    };
    let Some(expiry_month_start) = NaiveDate::from_ymd_opt(year, month, 1) else {
        return false;
    };
    ordered < expiry_month_start
}
