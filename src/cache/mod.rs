//! Cache module for persisting the aggregated label list to disk
//!
//! The snapshot is a single JSON file. Its presence alone decides whether the
//! remote source is consulted; there is no expiry, so the file must be removed
//! by hand to force a refresh.

mod manager;

pub use manager::{CacheError, SnapshotCache};
