//! Lecture catalog assembly.
//!
//! The repository issues a fixed batch of six logical fetches — three per
//! dataset — through [`CachedSource`], so only two physical fetches ever
//! happen. The redundancy is intentional: it exercises the deduplicating
//! cache and must not be optimized away structurally.

pub mod cache;
pub mod client;
pub mod config;

use crate::error::CatalogError;
use crate::types::{DatasetKey, Lecture};
use cache::CachedSource;
use futures::future;
use std::time::Instant;
use tracing::info;

/// The full, session-lifetime lecture catalog.
///
/// Filled exactly once by [`LectureRepository::load_all`], then read-only.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    lectures: Vec<Lecture>,
}

impl Catalog {
    pub fn new(lectures: Vec<Lecture>) -> Self {
        Self { lectures }
    }

    pub fn lectures(&self) -> &[Lecture] {
        &self.lectures
    }

    pub fn len(&self) -> usize {
        self.lectures.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lectures.is_empty()
    }
}

/// Call order of the logical fetch batch; payloads are concatenated in this
/// order.
const FETCH_BATCH: [DatasetKey; 6] = [
    DatasetKey::Majors,
    DatasetKey::LiberalArts,
    DatasetKey::Majors,
    DatasetKey::LiberalArts,
    DatasetKey::Majors,
    DatasetKey::LiberalArts,
];

/// Loads the catalog through the deduplicating cache.
pub struct LectureRepository {
    cache: CachedSource,
}

impl LectureRepository {
    pub fn new(cache: CachedSource) -> Self {
        Self { cache }
    }

    /// Access to the underlying cache (e.g. for an explicit reset).
    pub fn cache(&self) -> &CachedSource {
        &self.cache
    }

    /// Issues the six-call batch, waits for all to settle, and concatenates
    /// the payloads in call order.
    ///
    /// Any rejection fails the whole load with that error — no partial
    /// catalog, no retry. The in-flight siblings are shared futures and run
    /// to completion in the cache either way.
    pub async fn load_all(&self) -> Result<Catalog, CatalogError> {
        let started = Instant::now();
        info!(calls = FETCH_BATCH.len(), "loading lecture catalog");

        let pending: Vec<_> = FETCH_BATCH.iter().map(|&d| self.cache.get(d)).collect();
        let batches = future::try_join_all(pending).await?;

        let lectures: Vec<Lecture> = batches
            .iter()
            .flat_map(|batch| batch.iter().cloned())
            .collect();

        info!(
            count = lectures.len(),
            elapsed_ms = started.elapsed().as_millis() as u64,
            "lecture catalog loaded"
        );

        Ok(Catalog::new(lectures))
    }
}
