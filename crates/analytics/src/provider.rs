//! Snapshot acquisition seam.
//!
//! The engine is pure: it takes a snapshot it was handed and computes. How
//! that snapshot is obtained (store API, replica, fixture) lives behind
//! [`SnapshotProvider`], so callers that already hold data skip the trait
//! entirely and call [`crate::build_report`] directly.

use saltbox_core::Snapshot;
use thiserror::Error;

/// Failure to obtain a snapshot from the backing store.
#[derive(Debug, Error)]
pub enum SnapshotError {
    /// The backing store could not be reached or refused the request.
    #[error("snapshot unavailable: {0}")]
    Unavailable(String),
}

/// Source of entity snapshots for report generation.
pub trait SnapshotProvider {
    /// Fetch the current orders, products, and categories.
    ///
    /// # Errors
    ///
    /// Returns [`SnapshotError::Unavailable`] when the backing store cannot
    /// produce a snapshot. The engine propagates this untouched; it never
    /// substitutes an empty snapshot for a failed fetch.
    fn fetch(&self) -> Result<Snapshot, SnapshotError>;
}
