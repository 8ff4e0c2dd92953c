//! Integration tests for the order analytics report pipeline.
//!
//! Each test drives the path the dashboard takes: raw store documents in,
//! decoded snapshot, assembled report out.

use chrono::{DateTime, FixedOffset};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use saltbox_analytics::{
    ReportingWindow, SnapshotError, SnapshotProvider, UNKNOWN_LABEL, build_report, fetch_report,
    snapshot_from_documents,
};
use saltbox_core::Snapshot;
use serde_json::{Value, json};

// =============================================================================
// Fixtures
// =============================================================================

/// A Friday afternoon in the shop's timezone.
fn viewer_now() -> DateTime<FixedOffset> {
    "2025-06-13T15:30:00-07:00"
        .parse()
        .expect("fixture instant parses")
}

fn month_window() -> ReportingWindow {
    ReportingWindow::new(30, viewer_now())
}

fn order_doc(id: &str, created_at: &str, total: &str, status: &str, line_items: Value) -> Value {
    json!({
        "id": id,
        "createdAt": created_at,
        "totalAmount": total,
        "status": status,
        "lineItems": line_items,
    })
}

fn item_doc(product_id: &str, name: &str, unit_price: &str, quantity: i64) -> Value {
    json!({
        "productId": product_id,
        "name": name,
        "unitPrice": unit_price,
        "quantity": quantity,
    })
}

/// Two categorized products, one product filed under no category.
fn catalog_docs() -> (Vec<Value>, Vec<Value>) {
    let products = vec![
        json!({"id": "prod_shirt", "categoryId": "cat_apparel"}),
        json!({"id": "prod_mug", "categoryId": "cat_kitchen"}),
        json!({"id": "prod_poster"}),
    ];
    let categories = vec![
        json!({"id": "cat_apparel", "name": "Apparel"}),
        json!({"id": "cat_kitchen", "name": "Kitchen"}),
    ];
    (products, categories)
}

// =============================================================================
// Single Order Report
// =============================================================================

#[test]
fn test_single_order_report() {
    let orders = vec![order_doc(
        "ord_1001",
        "2025-06-12T10:00:00-07:00",
        "100.00",
        "Pending",
        json!([item_doc("prod_shirt", "Shirt", "50.00", 2)]),
    )];
    let (products, categories) = catalog_docs();

    let snapshot = snapshot_from_documents(&orders, &products, &categories);
    let report = build_report(&snapshot, &month_window());

    assert_eq!(report.total_revenue, dec!(100.00));
    assert_eq!(report.total_orders, 1);
    assert_eq!(report.average_order_value, dec!(100.00));

    let top = report.top_products.first().expect("one ranked product");
    assert_eq!(top.name, "Shirt");
    assert_eq!(top.units_sold, 2);
    assert_eq!(top.revenue, dec!(100.00));

    assert_eq!(
        report.revenue_by_category.get("Apparel"),
        Some(&dec!(100.00))
    );
    assert_eq!(report.orders_by_status.get("Pending"), Some(&1));

    let bucket = report.sales_over_time.first().expect("one daily bucket");
    assert_eq!(bucket.order_count, 1);
    assert_eq!(bucket.revenue, dec!(100.00));
}

#[test]
fn test_empty_store_builds_empty_report() {
    let snapshot = snapshot_from_documents(&[], &[], &[]);

    let report = build_report(&snapshot, &month_window());

    assert_eq!(report.total_revenue, dec!(0));
    assert_eq!(report.total_orders, 0);
    assert_eq!(report.average_order_value, dec!(0), "no division by zero");
    assert!(report.top_products.is_empty());
    assert!(report.revenue_by_category.is_empty());
    assert!(report.sales_over_time.is_empty());
    assert!(report.orders_by_status.is_empty());
}

// =============================================================================
// Category Attribution
// =============================================================================

#[test]
fn test_dangling_product_reference_lands_in_unknown() {
    let orders = vec![order_doc(
        "ord_1",
        "2025-06-12T10:00:00-07:00",
        "25.00",
        "Paid",
        json!([item_doc("prod_discontinued", "Mystery Item", "25.00", 1)]),
    )];
    let (products, categories) = catalog_docs();

    let snapshot = snapshot_from_documents(&orders, &products, &categories);
    let report = build_report(&snapshot, &month_window());

    assert_eq!(
        report.revenue_by_category.get(UNKNOWN_LABEL),
        Some(&dec!(25.00)),
        "revenue from unresolvable products goes to the fallback bucket"
    );
    let top = report.top_products.first().expect("ranked despite dangling");
    assert_eq!(top.name, "Mystery Item");
}

#[test]
fn test_uncategorized_product_lands_in_unknown() {
    let orders = vec![order_doc(
        "ord_1",
        "2025-06-12T10:00:00-07:00",
        "15.00",
        "Paid",
        json!([item_doc("prod_poster", "Poster", "15.00", 1)]),
    )];
    let (products, categories) = catalog_docs();

    let snapshot = snapshot_from_documents(&orders, &products, &categories);
    let report = build_report(&snapshot, &month_window());

    assert_eq!(
        report.revenue_by_category.get(UNKNOWN_LABEL),
        Some(&dec!(15.00))
    );
}

#[test]
fn test_category_revenue_splits_across_categories() {
    let orders = vec![order_doc(
        "ord_1",
        "2025-06-12T10:00:00-07:00",
        "110.00",
        "Paid",
        json!([
            item_doc("prod_shirt", "Shirt", "50.00", 2),
            item_doc("prod_mug", "Mug", "10.00", 1),
        ]),
    )];
    let (products, categories) = catalog_docs();

    let snapshot = snapshot_from_documents(&orders, &products, &categories);
    let report = build_report(&snapshot, &month_window());

    assert_eq!(
        report.revenue_by_category.get("Apparel"),
        Some(&dec!(100.00))
    );
    assert_eq!(report.revenue_by_category.get("Kitchen"), Some(&dec!(10.00)));
    assert_eq!(report.revenue_by_category.get(UNKNOWN_LABEL), None);
}

// =============================================================================
// Status Histogram
// =============================================================================

#[test]
fn test_statusless_orders_count_under_unknown() {
    let orders = vec![
        order_doc(
            "ord_1",
            "2025-06-12T10:00:00-07:00",
            "10.00",
            "Paid",
            json!([]),
        ),
        // No status field at all.
        json!({
            "id": "ord_2",
            "createdAt": "2025-06-12T11:00:00-07:00",
            "totalAmount": "20.00",
            "lineItems": [],
        }),
    ];

    let snapshot = snapshot_from_documents(&orders, &[], &[]);
    let report = build_report(&snapshot, &month_window());

    assert_eq!(report.orders_by_status.get("Paid"), Some(&1));
    assert_eq!(report.orders_by_status.get(UNKNOWN_LABEL), Some(&1));
}

#[test]
fn test_status_labels_are_case_sensitive() {
    let orders = vec![
        order_doc(
            "ord_1",
            "2025-06-12T10:00:00-07:00",
            "10.00",
            "Paid",
            json!([]),
        ),
        order_doc(
            "ord_2",
            "2025-06-12T11:00:00-07:00",
            "10.00",
            "paid",
            json!([]),
        ),
    ];

    let snapshot = snapshot_from_documents(&orders, &[], &[]);
    let report = build_report(&snapshot, &month_window());

    // Stores that emit inconsistent casing get separate rows, not a guess
    // at which spelling is canonical.
    assert_eq!(report.orders_by_status.get("Paid"), Some(&1));
    assert_eq!(report.orders_by_status.get("paid"), Some(&1));
}

// =============================================================================
// Reconciliation
// =============================================================================

#[test]
fn test_category_and_product_revenue_reconcile() {
    let orders = vec![
        order_doc(
            "ord_1",
            "2025-06-10T09:00:00-07:00",
            "110.00",
            "Paid",
            json!([
                item_doc("prod_shirt", "Shirt", "50.00", 2),
                item_doc("prod_mug", "Mug", "10.00", 1),
            ]),
        ),
        order_doc(
            "ord_2",
            "2025-06-11T09:00:00-07:00",
            "65.00",
            "Paid",
            json!([
                item_doc("prod_mug", "Mug", "10.00", 5),
                item_doc("prod_poster", "Poster", "15.00", 1),
            ]),
        ),
    ];
    let (products, categories) = catalog_docs();

    let snapshot = snapshot_from_documents(&orders, &products, &categories);
    let report = build_report(&snapshot, &month_window());

    // Three distinct products, well under the leaderboard cap, so both
    // breakdowns cover every line item and must agree.
    let by_category: Decimal = report.revenue_by_category.values().copied().sum();
    let by_product: Decimal = report.top_products.iter().map(|p| p.revenue).sum();
    assert_eq!(by_category, dec!(175.00));
    assert_eq!(by_product, dec!(175.00));

    // Order totals are a separate figure and need not match line items.
    assert_eq!(report.total_revenue, dec!(175.00));
    assert_eq!(report.average_order_value, dec!(87.50));
}

#[test]
fn test_report_is_identical_across_runs() {
    let orders = vec![
        order_doc(
            "ord_1",
            "2025-06-10T09:00:00-07:00",
            "110.00",
            "Paid",
            json!([item_doc("prod_shirt", "Shirt", "55.00", 2)]),
        ),
        order_doc(
            "ord_2",
            "2025-06-11T09:00:00-07:00",
            "55.00",
            "Refunded",
            json!([item_doc("prod_shirt", "Shirt", "55.00", 1)]),
        ),
    ];
    let (products, categories) = catalog_docs();
    let snapshot = snapshot_from_documents(&orders, &products, &categories);
    let window = month_window();

    let first = build_report(&snapshot, &window);
    let second = build_report(&snapshot, &window);

    assert_eq!(first, second, "same snapshot and window, same report");
}

// =============================================================================
// Malformed Documents
// =============================================================================

#[test]
fn test_report_survives_malformed_documents() {
    let orders = vec![
        // Healthy order.
        order_doc(
            "ord_1",
            "2025-06-12T10:00:00-07:00",
            "40.00",
            "Paid",
            json!([item_doc("prod_mug", "Mug", "10.00", 4)]),
        ),
        // Garbage amount, garbage timestamp, string quantity.
        json!({
            "id": "ord_2",
            "createdAt": "not a date",
            "totalAmount": "lots",
            "status": "Paid",
            "lineItems": [{"productId": "prod_mug", "name": "Mug", "unitPrice": "10.00", "quantity": "three"}],
        }),
        // Not even an object.
        json!("ord_3"),
    ];
    let (products, categories) = catalog_docs();

    let snapshot = snapshot_from_documents(&orders, &products, &categories);
    let report = build_report(&snapshot, &month_window());

    // The two broken orders decode to undated records, which fall outside
    // the window. Only the healthy order reaches the report.
    assert_eq!(report.total_orders, 1);
    assert_eq!(report.total_revenue, dec!(40.00));
    assert_eq!(report.orders_by_status.get("Paid"), Some(&1));
}

// =============================================================================
// Report Serialization
// =============================================================================

#[test]
fn test_report_serializes_for_the_dashboard() {
    let orders = vec![order_doc(
        "ord_1",
        "2025-06-12T10:00:00-07:00",
        "100.00",
        "Pending",
        json!([item_doc("prod_shirt", "Shirt", "50.00", 2)]),
    )];
    let (products, categories) = catalog_docs();

    let snapshot = snapshot_from_documents(&orders, &products, &categories);
    let report = build_report(&snapshot, &month_window());

    let value = serde_json::to_value(&report).expect("report serializes");
    assert_eq!(value.get("total_orders"), Some(&json!(1)));
    assert_eq!(value.get("total_revenue"), Some(&json!("100.00")));

    let buckets = value
        .get("sales_over_time")
        .and_then(Value::as_array)
        .expect("series serializes as an array");
    let date = buckets
        .first()
        .and_then(|b| b.get("date"))
        .and_then(Value::as_str);
    assert_eq!(date, Some("2025-06-12"), "bucket dates are plain day strings");
}

// =============================================================================
// Snapshot Providers
// =============================================================================

struct StaticProvider(Snapshot);

impl SnapshotProvider for StaticProvider {
    fn fetch(&self) -> Result<Snapshot, SnapshotError> {
        Ok(self.0.clone())
    }
}

struct OfflineProvider;

impl SnapshotProvider for OfflineProvider {
    fn fetch(&self) -> Result<Snapshot, SnapshotError> {
        Err(SnapshotError::Unavailable("store maintenance".to_owned()))
    }
}

#[test]
fn test_fetch_report_builds_from_provider_snapshot() {
    let orders = vec![order_doc(
        "ord_1",
        "2025-06-12T10:00:00-07:00",
        "30.00",
        "Paid",
        json!([item_doc("prod_mug", "Mug", "10.00", 3)]),
    )];
    let (products, categories) = catalog_docs();
    let provider = StaticProvider(snapshot_from_documents(&orders, &products, &categories));

    let report = fetch_report(&provider, &month_window()).expect("provider is healthy");

    assert_eq!(report.total_orders, 1);
    assert_eq!(report.total_revenue, dec!(30.00));
}

#[test]
fn test_fetch_report_surfaces_store_outage() {
    let result = fetch_report(&OfflineProvider, &month_window());

    let err = result.expect_err("offline provider must fail the fetch");
    assert_eq!(err.to_string(), "snapshot unavailable: store maintenance");
}
