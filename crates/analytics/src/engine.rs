//! Report assembly.
//!
//! Everything here is a pure function of a snapshot and a reporting
//! window: no clock reads, no store calls. Running the same inputs twice
//! yields identical reports.

use saltbox_core::Snapshot;
use tracing::instrument;

use crate::provider::{SnapshotError, SnapshotProvider};
use crate::reducers::{compute_totals, orders_by_status, revenue_by_category, top_products};
use crate::report::AnalyticsReport;
use crate::series::sales_over_time;
use crate::window::{ReportingWindow, filter_by_window};

/// How many products the dashboard leaderboard shows.
pub const DEFAULT_TOP_PRODUCT_LIMIT: usize = 5;

/// How many daily buckets the dashboard sparkline shows.
pub const DEFAULT_SERIES_BUCKET_COUNT: usize = 14;

/// Output-size knobs for report assembly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReportOptions {
    /// Maximum entries in the product leaderboard.
    pub top_product_limit: usize,
    /// Maximum daily buckets in the sales series.
    pub series_bucket_count: usize,
}

impl Default for ReportOptions {
    fn default() -> Self {
        Self {
            top_product_limit: DEFAULT_TOP_PRODUCT_LIMIT,
            series_bucket_count: DEFAULT_SERIES_BUCKET_COUNT,
        }
    }
}

/// Build a report with the default dashboard limits.
#[must_use]
pub fn build_report(snapshot: &Snapshot, window: &ReportingWindow) -> AnalyticsReport {
    build_report_with_options(snapshot, window, ReportOptions::default())
}

/// Build a report from a snapshot, restricted to the reporting window.
///
/// Orders are filtered once; every aggregate below is computed from that
/// shared subset, so the report's sections always describe the same set
/// of orders.
#[must_use]
#[instrument(skip(snapshot, window), fields(orders = snapshot.orders.len(), days = window.days))]
pub fn build_report_with_options(
    snapshot: &Snapshot,
    window: &ReportingWindow,
    options: ReportOptions,
) -> AnalyticsReport {
    let in_window = filter_by_window(&snapshot.orders, window);
    let totals = compute_totals(&in_window);

    AnalyticsReport {
        total_revenue: totals.total_revenue,
        total_orders: totals.total_orders,
        average_order_value: totals.average_order_value,
        top_products: top_products(&in_window, options.top_product_limit),
        revenue_by_category: revenue_by_category(
            &in_window,
            &snapshot.products,
            &snapshot.categories,
        ),
        sales_over_time: sales_over_time(&in_window, window, options.series_bucket_count),
        orders_by_status: orders_by_status(&in_window),
    }
}

/// Fetch a snapshot from the provider and build a report from it.
///
/// # Errors
///
/// Returns the provider's [`SnapshotError`] unchanged when the fetch
/// fails. No report is produced from partial data.
#[instrument(skip(provider, window), fields(days = window.days))]
pub fn fetch_report<P: SnapshotProvider>(
    provider: &P,
    window: &ReportingWindow,
) -> Result<AnalyticsReport, SnapshotError> {
    let snapshot = provider.fetch()?;
    Ok(build_report(&snapshot, window))
}
