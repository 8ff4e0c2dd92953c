//! Point-in-time entity snapshot handed to the analytics engine.

use serde::{Deserialize, Serialize};

use super::catalog::{Category, Product};
use super::order::Order;

/// An immutable bundle of the three entity collections the reporting
/// engine reads.
///
/// Collections are unordered; consumers impose their own ordering where
/// an output contract requires one.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    /// All orders known to the store at snapshot time.
    pub orders: Vec<Order>,
    /// All catalog products at snapshot time.
    pub products: Vec<Product>,
    /// All categories at snapshot time.
    pub categories: Vec<Category>,
}

impl Snapshot {
    /// Bundle the three entity collections into a snapshot.
    #[must_use]
    pub const fn new(
        orders: Vec<Order>,
        products: Vec<Product>,
        categories: Vec<Category>,
    ) -> Self {
        Self {
            orders,
            products,
            categories,
        }
    }
}
