//! Integration tests for Saltbox.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p saltbox-integration-tests
//! ```
//!
//! # Test Categories
//!
//! - `analytics_report` - Document-to-report pipeline tests
//! - `analytics_windowing` - Reporting window and sales series tests
//!
//! The tests drive the public crate surface only: raw store documents go
//! in through [`saltbox_analytics::snapshot_from_documents`] and the
//! assertions read the assembled [`saltbox_analytics::AnalyticsReport`],
//! the same path the dashboard takes.
