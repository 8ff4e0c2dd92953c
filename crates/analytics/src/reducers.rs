//! Metric reducers over a filtered order set.
//!
//! Each reducer is independent and side-effect-free: it reads borrowed
//! records and returns an owned result. Malformed records degrade into
//! documented defaults instead of errors, so one bad row can never blank
//! the dashboard.

use std::collections::HashMap;

use indexmap::IndexMap;
use rust_decimal::Decimal;
use saltbox_core::{Category, CategoryId, Order, Product, ProductId};

use crate::report::{OrderTotals, ProductSales, UNKNOWN_LABEL};

// =============================================================================
// Revenue / Order Totals
// =============================================================================

/// Sum order totals and count orders.
///
/// The average divides revenue by order count; an empty set reports zero
/// rather than erroring, since an empty window is an ordinary state.
#[must_use]
pub fn compute_totals(orders: &[&Order]) -> OrderTotals {
    let total_revenue: Decimal = orders.iter().map(|order| order.total_amount).sum();
    let total_orders = orders.len() as u64;

    let average_order_value = if total_orders > 0 {
        total_revenue / Decimal::from(total_orders)
    } else {
        Decimal::ZERO
    };

    OrderTotals {
        total_revenue,
        total_orders,
        average_order_value,
    }
}

// =============================================================================
// Top Products
// =============================================================================

/// Rank products by revenue across every line item in the order set.
///
/// Grouping keys on the product id; the first-encountered line-item name
/// labels the group. Names are the denormalized point-of-sale snapshots,
/// never live catalog lookups, so a product renamed since still reports
/// under the title it was sold as. The sort is stable, keeping
/// first-encountered order for revenue ties, and the result is truncated
/// to `limit` entries.
#[must_use]
pub fn top_products(orders: &[&Order], limit: usize) -> Vec<ProductSales> {
    // product id -> (name, units_sold, revenue)
    let mut products: IndexMap<&ProductId, (&str, i64, Decimal)> = IndexMap::new();

    for order in orders {
        for item in &order.line_items {
            let entry = products
                .entry(&item.product_id)
                .or_insert((item.name.as_str(), 0, Decimal::ZERO));
            entry.1 += item.quantity;
            entry.2 += item.line_revenue();
        }
    }

    let mut ranked: Vec<ProductSales> = products
        .into_values()
        .map(|(name, units_sold, revenue)| ProductSales {
            name: name.to_owned(),
            units_sold,
            revenue,
        })
        .collect();

    ranked.sort_by(|a, b| b.revenue.cmp(&a.revenue));
    ranked.truncate(limit);

    ranked
}

// =============================================================================
// Revenue by Category
// =============================================================================

/// Accumulate line-item revenue under the owning category's display name.
///
/// Resolution walks product id -> product -> category id -> category
/// name. Any break in the chain (product missing from the snapshot,
/// product filed under no category, category since deleted) lands the
/// revenue in the "Unknown" bucket instead of failing the report.
/// Categories sharing a display name accumulate into one entry, matching
/// what the view renders.
#[must_use]
pub fn revenue_by_category(
    orders: &[&Order],
    products: &[Product],
    categories: &[Category],
) -> IndexMap<String, Decimal> {
    let products_by_id: HashMap<&ProductId, &Product> =
        products.iter().map(|product| (&product.id, product)).collect();
    let categories_by_id: HashMap<&CategoryId, &Category> =
        categories.iter().map(|category| (&category.id, category)).collect();

    let mut revenue: IndexMap<String, Decimal> = IndexMap::new();

    for order in orders {
        for item in &order.line_items {
            let name = resolve_category_name(&item.product_id, &products_by_id, &categories_by_id);
            *revenue.entry(name.to_owned()).or_insert(Decimal::ZERO) += item.line_revenue();
        }
    }

    revenue
}

/// Walk the two-hop reference chain, degrading to the unknown label.
fn resolve_category_name<'a>(
    product_id: &ProductId,
    products_by_id: &HashMap<&ProductId, &'a Product>,
    categories_by_id: &HashMap<&CategoryId, &'a Category>,
) -> &'a str {
    let Some(product) = products_by_id.get(product_id) else {
        tracing::debug!(
            product_id = %product_id,
            "line item references a product missing from the snapshot"
        );
        return UNKNOWN_LABEL;
    };
    let Some(category_id) = product.category_id.as_ref() else {
        return UNKNOWN_LABEL;
    };
    categories_by_id.get(category_id).map_or_else(
        || {
            tracing::debug!(
                category_id = %category_id,
                "product references a category missing from the snapshot"
            );
            UNKNOWN_LABEL
        },
        |category| category.name.as_str(),
    )
}

// =============================================================================
// Orders by Status
// =============================================================================

/// Count orders per literal status label.
///
/// Grouping is case-sensitive: "pending" and "Pending" are distinct
/// labels and form distinct buckets. Orders with no status at all count
/// under "Unknown".
#[must_use]
pub fn orders_by_status(orders: &[&Order]) -> IndexMap<String, u64> {
    let mut counts: IndexMap<String, u64> = IndexMap::new();

    for order in orders {
        let status = order.status.as_deref().unwrap_or(UNKNOWN_LABEL);
        *counts.entry(status.to_owned()).or_insert(0) += 1;
    }

    counts
}
