//! Daily sales-over-time bucketing.

use indexmap::IndexMap;
use rust_decimal::Decimal;
use saltbox_core::Order;

use crate::report::{BucketDate, SalesBucket};
use crate::window::ReportingWindow;

/// Group orders into viewer-local calendar-day buckets.
///
/// Dates derive through the same viewer offset the window filter uses, so
/// an order is never bucketed on a day the window would not recognize.
/// Undated orders fall into the [`BucketDate::Unknown`] sentinel, which
/// sorts after every real date. The series is ascending by day and keeps
/// only the most recent `bucket_count` buckets; fewer distinct days than
/// that returns them all.
#[must_use]
pub fn sales_over_time(
    orders: &[&Order],
    window: &ReportingWindow,
    bucket_count: usize,
) -> Vec<SalesBucket> {
    // bucket date -> (order_count, revenue)
    let mut buckets: IndexMap<BucketDate, (u64, Decimal)> = IndexMap::new();

    for order in orders {
        let date = order
            .created_at
            .map_or(BucketDate::Unknown, |instant| {
                BucketDate::Day(window.local_date(instant))
            });

        let entry = buckets.entry(date).or_insert((0, Decimal::ZERO));
        entry.0 += 1;
        entry.1 += order.total_amount;
    }

    let mut series: Vec<SalesBucket> = buckets
        .into_iter()
        .map(|(date, (order_count, revenue))| SalesBucket {
            date,
            order_count,
            revenue,
        })
        .collect();

    series.sort_by(|a, b| a.date.cmp(&b.date));

    // Keep the trailing (most recent) buckets
    if series.len() > bucket_count {
        series.drain(..series.len() - bucket_count);
    }

    series
}
