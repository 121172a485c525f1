//! Deduplicating fetch cache over the two lecture datasets.
//!
//! The memo table guarantees at most one physical fetch per dataset for the
//! process lifetime: the first caller claims the slot and every caller —
//! including same-tick concurrent ones — clones the same shared future and
//! observes the same result.

use crate::catalog::client::LectureSource;
use crate::error::CatalogError;
use crate::types::{DatasetKey, Lecture};
use dashmap::DashMap;
use futures::future::{BoxFuture, Shared};
use futures::FutureExt;
use std::sync::Arc;
use tracing::debug;

/// A cloneable handle to a pending or settled dataset fetch.
pub type SharedFetch = Shared<BoxFuture<'static, Result<Arc<Vec<Lecture>>, CatalogError>>>;

/// Memoizing fetcher wrapping a [`LectureSource`].
pub struct CachedSource {
    source: Arc<dyn LectureSource>,
    slots: DashMap<DatasetKey, SharedFetch>,
}

impl CachedSource {
    pub fn new(source: Arc<dyn LectureSource>) -> Self {
        Self {
            source,
            slots: DashMap::new(),
        }
    }

    /// Returns the shared fetch for a dataset, claiming and starting it on
    /// first call.
    ///
    /// `DashMap::entry` makes the check-and-claim indivisible: a second
    /// caller on the same key can never observe an empty slot and start a
    /// duplicate fetch. A rejected fetch stays memoized — the same error is
    /// replayed to all current and future callers until [`reset`] is called.
    ///
    /// [`reset`]: CachedSource::reset
    pub fn get(&self, dataset: DatasetKey) -> SharedFetch {
        self.slots
            .entry(dataset)
            .or_insert_with(|| {
                debug!(%dataset, "claiming fetch slot");
                let source = Arc::clone(&self.source);
                async move { source.fetch(dataset).await.map(Arc::new) }
                    .boxed()
                    .shared()
            })
            .clone()
    }

    /// Evicts a memoized slot (including a memoized failure), allowing the
    /// next `get` to re-fetch. Returns whether a slot was present.
    ///
    /// This is the only retry path; nothing evicts or retries implicitly.
    pub fn reset(&self, dataset: DatasetKey) -> bool {
        self.slots.remove(&dataset).is_some()
    }

    /// Number of claimed slots (at most one per dataset).
    pub fn claimed(&self) -> usize {
        self.slots.len()
    }
}
