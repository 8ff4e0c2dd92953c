//! Order records as captured in a reporting snapshot.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::id::{OrderId, ProductId};

/// A single order as of snapshot time.
///
/// Records arrive denormalized from the store. Fields the store could not
/// supply are `None` rather than invented; downstream consumers decide how
/// to treat the gaps.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    /// Store-assigned identity.
    pub id: OrderId,
    /// Placement instant. `None` when the store record carried no
    /// parseable timestamp.
    pub created_at: Option<DateTime<Utc>>,
    /// Order total in the store currency.
    pub total_amount: Decimal,
    /// Free-form status label as entered upstream (e.g. "Pending").
    pub status: Option<String>,
    /// Purchased items, in store order. May be empty.
    pub line_items: Vec<LineItem>,
}

/// One purchased product within an order.
///
/// The `name` is a point-of-sale snapshot of the product title, kept
/// denormalized so later catalog edits do not rewrite order history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineItem {
    /// Product referenced by this item.
    pub product_id: ProductId,
    /// Product title at order time.
    pub name: String,
    /// Price per unit in the store currency.
    pub unit_price: Decimal,
    /// Units purchased.
    pub quantity: i64,
}

impl LineItem {
    /// Revenue contributed by this item (`unit_price * quantity`).
    #[must_use]
    pub fn line_revenue(&self) -> Decimal {
        self.unit_price * Decimal::from(self.quantity)
    }
}
