//! Saltbox Analytics - Order analytics aggregation engine.
//!
//! Turns a point-in-time snapshot of orders, products, and categories into
//! the derived metrics the reporting dashboard displays: revenue totals,
//! top products, per-category revenue, a daily sales series, and an
//! order-status histogram.
//!
//! The engine is a pure, synchronous computation: snapshot in, report out.
//! It never reads the process clock, never mutates its inputs, and holds
//! no cache between invocations. Acquiring the snapshot is the caller's
//! concern, behind the [`SnapshotProvider`] seam.
//!
//! # Example
//!
//! ```
//! use chrono::Utc;
//! use saltbox_analytics::{ReportingWindow, WindowPreset, build_report};
//! use saltbox_core::Snapshot;
//!
//! let snapshot = Snapshot::default();
//! let window = ReportingWindow::from_preset(WindowPreset::Month, Utc::now().fixed_offset());
//! let report = build_report(&snapshot, &window);
//! assert_eq!(report.total_orders, 0);
//! ```

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod document;
pub mod engine;
pub mod provider;
pub mod reducers;
pub mod report;
pub mod series;
pub mod window;

pub use document::snapshot_from_documents;
pub use engine::{ReportOptions, build_report, build_report_with_options, fetch_report};
pub use provider::{SnapshotError, SnapshotProvider};
pub use report::{
    AnalyticsReport, BucketDate, OrderTotals, ProductSales, SalesBucket, UNKNOWN_LABEL,
};
pub use window::{ReportingWindow, WindowPreset, filter_by_window};
