//! Cache-or-fetch coordination
//!
//! [`FestivalService::get_data`] serves the snapshot file when it exists and
//! otherwise fetches, aggregates and persists a fresh result. Once written,
//! the snapshot is served as-is until it is deleted.

use thiserror::Error;

use crate::aggregate::aggregate;
use crate::cache::{CacheError, SnapshotCache};
use crate::data::{FestivalSource, RawFestival, RecordLabel};
use crate::observe::SharedObserver;

/// Transform applied to fetched festivals before caching
pub type Aggregator = fn(&[RawFestival]) -> Vec<RecordLabel>;

/// Errors surfaced to callers of the service
#[derive(Debug, Error)]
pub enum ServiceError {
    /// The snapshot exists but could not be loaded
    #[error(transparent)]
    Cache(#[from] CacheError),
}

/// Serves label-grouped festival data backed by a one-shot snapshot
pub struct FestivalService<S> {
    source: S,
    aggregator: Aggregator,
    cache: SnapshotCache,
    observer: SharedObserver,
}

impl<S: FestivalSource> FestivalService<S> {
    /// Creates a service using the standard [`aggregate`] transform
    pub fn new(source: S, cache: SnapshotCache, observer: SharedObserver) -> Self {
        Self {
            source,
            aggregator: aggregate,
            cache,
            observer,
        }
    }

    /// Replaces the transform applied to fetched data
    pub fn with_aggregator(mut self, aggregator: Aggregator) -> Self {
        self.aggregator = aggregator;
        self
    }

    /// The snapshot backing this service
    pub fn cache(&self) -> &SnapshotCache {
        &self.cache
    }

    /// The observer this service reports to
    pub fn observer(&self) -> &SharedObserver {
        &self.observer
    }

    /// Returns the label-grouped festival data
    ///
    /// # Behavior
    /// - If the snapshot file exists, it is read and returned without any
    ///   freshness or schema check beyond deserialization
    /// - Otherwise the source is fetched, the result aggregated and written
    ///   to the snapshot file, and the aggregated value returned
    /// - A failed write is reported to the observer; the aggregated value is
    ///   still returned
    ///
    /// # Returns
    /// * `Ok(Vec<RecordLabel>)` - The snapshot or freshly aggregated data
    /// * `Err(ServiceError)` - If the snapshot location cannot be checked, or
    ///   an existing snapshot cannot be read or parsed
    pub async fn get_data(&self) -> Result<Vec<RecordLabel>, ServiceError> {
        if self.cache.exists()? {
            let labels: Vec<RecordLabel> = self.cache.read()?;
            self.observer.info(&format!(
                "Served {} record labels from cache at {}",
                labels.len(),
                self.cache.path().display()
            ));
            return Ok(labels);
        }

        let festivals = self.source.fetch().await;
        let labels = (self.aggregator)(&festivals);

        match self.cache.write(&labels) {
            Ok(()) => self.observer.info(&format!(
                "Cached {} record labels at {}",
                labels.len(),
                self.cache.path().display()
            )),
            Err(e) => self.observer.error("Error saving data to cache", &e),
        }

        Ok(labels)
    }
}
