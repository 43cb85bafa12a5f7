//! Participating restaurants and their menus.

use serde::Deserialize;

use crate::core::LngLat;

/// One item on a restaurant's menu.
#[derive(Clone, Debug, Deserialize)]
pub struct MenuItem {
    /// Item name as it appears in orders.
    pub name: String,
    /// Price in pence.
    #[serde(rename = "priceInPence")]
    pub price_in_pence: u32,
}

/// A participating restaurant: delivery target plus menu.
#[derive(Clone, Debug, Deserialize)]
pub struct Restaurant {
    /// Restaurant name, the key orders are matched against.
    pub name: String,
    /// Available menu items.
    pub menu: Vec<MenuItem>,
    /// Location on the flight plane, flattened from longitude/latitude.
    #[serde(flatten)]
    pub location: LngLat,
}

impl Restaurant {
    /// Price of a named menu item, or 0 when the item is not on the menu.
    pub fn item_price(&self, item: &str) -> u32 {
        self.menu
            .iter()
            .find(|menu_item| menu_item.name == item)
            .map(|menu_item| menu_item.price_in_pence)
            .unwrap_or(0)
    }
}
