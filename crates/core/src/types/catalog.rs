//! Catalog records: products and the categories they are filed under.

use serde::{Deserialize, Serialize};

use super::id::{CategoryId, ProductId};

/// A catalog product as of snapshot time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    /// Store-assigned identity.
    pub id: ProductId,
    /// Owning category, if the product has been filed under one. The
    /// referenced category may no longer exist in the same snapshot.
    pub category_id: Option<CategoryId>,
}

/// A product category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    /// Store-assigned identity.
    pub id: CategoryId,
    /// Display name. Not guaranteed unique across categories.
    pub name: String,
}
