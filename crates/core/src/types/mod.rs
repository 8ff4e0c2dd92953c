//! Core types for Saltbox.
//!
//! This module provides type-safe wrappers for common domain concepts.

pub mod catalog;
pub mod id;
pub mod order;
pub mod snapshot;

pub use catalog::{Category, Product};
pub use id::*;
pub use order::{LineItem, Order};
pub use snapshot::Snapshot;
