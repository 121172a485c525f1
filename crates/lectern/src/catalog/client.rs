//! The fetch seam and its HTTP implementation.
//!
//! [`LectureSource`] is the injected boundary the caching layer sits on top
//! of: one call equals one physical fetch, which is what the six-logical /
//! two-physical contract is asserted against in tests.

use crate::catalog::config::CatalogConfig;
use crate::error::CatalogError;
use crate::types::{DatasetKey, Lecture};
use futures::future::BoxFuture;
use futures::FutureExt;
use reqwest::Client;
use tracing::{debug, info};

/// A source of lecture datasets.
///
/// Implementations must treat every call as a fresh physical fetch;
/// deduplication belongs to [`CachedSource`], not the source.
///
/// [`CachedSource`]: crate::catalog::cache::CachedSource
pub trait LectureSource: Send + Sync {
    /// Fetches the full payload of one dataset.
    fn fetch(&self, dataset: DatasetKey) -> BoxFuture<'static, Result<Vec<Lecture>, CatalogError>>;
}

/// HTTP-backed lecture source reading the two JSON array endpoints.
pub struct HttpLectureSource {
    client: Client,
    config: CatalogConfig,
}

impl HttpLectureSource {
    /// Creates a source with the given endpoint configuration.
    pub fn new(config: CatalogConfig) -> Result<Self, CatalogError> {
        let client = Client::builder()
            .user_agent(&config.user_agent)
            .connect_timeout(config.connect_timeout)
            .timeout(config.request_timeout)
            .build()
            .map_err(|e| CatalogError::Client {
                message: e.to_string(),
            })?;

        Ok(Self { client, config })
    }

    /// Creates a source against the default endpoints.
    pub fn with_defaults() -> Result<Self, CatalogError> {
        Self::new(CatalogConfig::default())
    }
}

impl LectureSource for HttpLectureSource {
    fn fetch(&self, dataset: DatasetKey) -> BoxFuture<'static, Result<Vec<Lecture>, CatalogError>> {
        let client = self.client.clone();
        let endpoint = self.config.endpoint(dataset);

        async move {
            let endpoint = endpoint?;
            debug!(%dataset, url = %endpoint, "requesting lecture dataset");

            let response = client
                .get(endpoint)
                .send()
                .await
                .map_err(|e| CatalogError::Fetch {
                    dataset,
                    message: e.to_string(),
                })?;

            let status = response.status();
            if !status.is_success() {
                return Err(CatalogError::Status {
                    dataset,
                    status: status.as_u16(),
                });
            }

            let lectures: Vec<Lecture> =
                response.json().await.map_err(|e| CatalogError::Decode {
                    dataset,
                    message: e.to_string(),
                })?;

            info!(%dataset, count = lectures.len(), "lecture dataset fetched");
            Ok(lectures)
        }
        .boxed()
    }
}
