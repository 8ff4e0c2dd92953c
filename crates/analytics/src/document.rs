//! Decoding of loosely-typed store documents into snapshot records.
//!
//! The store hands back JSON documents with camelCase keys and
//! inconsistent field presence. All defaulting happens here, once: every
//! downstream reducer works against explicit `Option`s and zeroed amounts
//! instead of re-checking raw JSON.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use saltbox_core::{Category, CategoryId, LineItem, Order, OrderId, Product, ProductId, Snapshot};
use serde_json::Value;

use crate::report::UNKNOWN_LABEL;

/// Decode the three entity collections into a snapshot.
///
/// Never fails: malformed documents decode to fully defaulted records and
/// the reducers degrade from there.
#[must_use]
pub fn snapshot_from_documents(
    orders: &[Value],
    products: &[Value],
    categories: &[Value],
) -> Snapshot {
    Snapshot::new(
        orders.iter().map(order_from_document).collect(),
        products.iter().map(product_from_document).collect(),
        categories.iter().map(category_from_document).collect(),
    )
}

/// Decode one order document.
#[must_use]
pub fn order_from_document(doc: &Value) -> Order {
    let line_items = doc
        .get("lineItems")
        .and_then(Value::as_array)
        .map(|items| items.iter().map(line_item_from_document).collect())
        .unwrap_or_default();

    Order {
        id: OrderId::new(string_field(doc, "id")),
        created_at: timestamp_field(doc, "createdAt"),
        total_amount: decimal_field(doc, "totalAmount"),
        status: doc.get("status").and_then(Value::as_str).map(str::to_owned),
        line_items,
    }
}

/// Decode one line-item document.
#[must_use]
pub fn line_item_from_document(doc: &Value) -> LineItem {
    LineItem {
        product_id: ProductId::new(string_field(doc, "productId")),
        name: string_field(doc, "name"),
        unit_price: decimal_field(doc, "unitPrice"),
        quantity: doc.get("quantity").and_then(Value::as_i64).unwrap_or(0),
    }
}

/// Decode one product document.
#[must_use]
pub fn product_from_document(doc: &Value) -> Product {
    Product {
        id: ProductId::new(string_field(doc, "id")),
        category_id: doc
            .get("categoryId")
            .and_then(Value::as_str)
            .map(CategoryId::new),
    }
}

/// Decode one category document.
///
/// A nameless category still has to render somewhere, so the display
/// fallback is applied here rather than at view time.
#[must_use]
pub fn category_from_document(doc: &Value) -> Category {
    Category {
        id: CategoryId::new(string_field(doc, "id")),
        name: doc
            .get("name")
            .and_then(Value::as_str)
            .unwrap_or(UNKNOWN_LABEL)
            .to_owned(),
    }
}

/// A string field, empty when missing or not a string.
fn string_field(doc: &Value, key: &str) -> String {
    doc.get(key)
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_owned()
}

/// A monetary field. Stores serialize amounts as either JSON strings or
/// numbers; both parse, and anything else counts as zero.
fn decimal_field(doc: &Value, key: &str) -> Decimal {
    let value = doc.get(key);
    value
        .and_then(Value::as_str)
        .and_then(|s| s.parse::<Decimal>().ok())
        .or_else(|| {
            value
                .and_then(Value::as_f64)
                .and_then(|f| Decimal::try_from(f).ok())
        })
        .unwrap_or(Decimal::ZERO)
}

/// An RFC 3339 timestamp field. Unparseable values become `None`, never
/// "now": a bad date must not smuggle an order into the current window.
fn timestamp_field(doc: &Value, key: &str) -> Option<DateTime<Utc>> {
    doc.get(key)
        .and_then(Value::as_str)
        .and_then(|s| DateTime::parse_from_rfc3339(s).ok())
        .map(|t| t.with_timezone(&Utc))
}
