//! Derived report types consumed by the reporting view.

use core::fmt;

use chrono::NaiveDate;
use indexmap::IndexMap;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Label for values that cannot be resolved to a real name: dangling
/// product or category references, uncategorized products, and orders
/// carrying no status.
pub const UNKNOWN_LABEL: &str = "Unknown";

// =============================================================================
// Composite Report
// =============================================================================

/// The composite result the reporting view renders.
///
/// Mapping-shaped fields iterate in the order their keys were first
/// observed, so output for a given snapshot is deterministic. All numeric
/// values are plain numbers; currency formatting belongs to the
/// presentation layer.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AnalyticsReport {
    /// Sum of order totals inside the window.
    pub total_revenue: Decimal,
    /// Number of orders inside the window.
    pub total_orders: u64,
    /// `total_revenue / total_orders`, zero when the window is empty.
    pub average_order_value: Decimal,
    /// Best-selling products, highest revenue first, up to the configured
    /// limit.
    pub top_products: Vec<ProductSales>,
    /// Line-item revenue per category name, including the "Unknown"
    /// bucket for unresolvable references.
    pub revenue_by_category: IndexMap<String, Decimal>,
    /// Daily sales buckets, oldest first, truncated to the configured
    /// trailing count.
    pub sales_over_time: Vec<SalesBucket>,
    /// Order counts per literal status label.
    pub orders_by_status: IndexMap<String, u64>,
}

// =============================================================================
// Metric Components
// =============================================================================

/// Revenue and order-count totals for a filtered order set.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct OrderTotals {
    /// Sum of order totals.
    pub total_revenue: Decimal,
    /// Number of orders.
    pub total_orders: u64,
    /// `total_revenue / total_orders`, zero when there are no orders.
    pub average_order_value: Decimal,
}

/// Sales accumulated for one product across the window.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductSales {
    /// Product title as captured on the line items at order time.
    pub name: String,
    /// Units sold across all orders.
    pub units_sold: i64,
    /// Revenue across all orders (`unit_price * quantity` summed).
    pub revenue: Decimal,
}

/// One calendar-day slot of the sales-over-time series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SalesBucket {
    /// The viewer-local calendar day, or the undated sentinel.
    pub date: BucketDate,
    /// Orders placed on this day.
    pub order_count: u64,
    /// Revenue from orders placed on this day.
    pub revenue: Decimal,
}

// =============================================================================
// Bucket Dates
// =============================================================================

/// Bucket key of the daily sales series.
///
/// Orders without a usable timestamp fall into [`BucketDate::Unknown`],
/// which orders after every real date so the sentinel lands at the recent
/// end of the series and competes in trailing truncation like any other
/// bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum BucketDate {
    /// A concrete viewer-local calendar day.
    Day(NaiveDate),
    /// Orders whose record carried no parseable timestamp.
    Unknown,
}

impl fmt::Display for BucketDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Day(date) => write!(f, "{}", date.format("%Y-%m-%d")),
            Self::Unknown => write!(f, "{UNKNOWN_LABEL}"),
        }
    }
}

impl Serialize for BucketDate {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for BucketDate {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        if s == UNKNOWN_LABEL {
            return Ok(Self::Unknown);
        }
        s.parse::<NaiveDate>()
            .map(Self::Day)
            .map_err(serde::de::Error::custom)
    }
}
