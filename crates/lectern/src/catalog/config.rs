//! Configuration for the lecture catalog endpoints.

use crate::error::CatalogError;
use crate::types::DatasetKey;
use std::time::Duration;
use url::Url;

const DEFAULT_BASE_URL: &str = "http://localhost:5173";
const MAJORS_PATH: &str = "/schedules-majors.json";
const LIBERAL_ARTS_PATH: &str = "/schedules-liberal-arts.json";

/// Configuration for the HTTP lecture source.
#[derive(Debug, Clone)]
pub struct CatalogConfig {
    /// Base URL the two dataset paths are resolved against
    pub base_url: String,
    /// Path of the majors dataset
    pub majors_path: String,
    /// Path of the liberal-arts dataset
    pub liberal_arts_path: String,
    /// Connect timeout for the HTTP client
    pub connect_timeout: Duration,
    /// Per-request timeout
    pub request_timeout: Duration,
    /// User agent string
    pub user_agent: String,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            majors_path: MAJORS_PATH.to_string(),
            liberal_arts_path: LIBERAL_ARTS_PATH.to_string(),
            connect_timeout: Duration::from_secs(10),
            request_timeout: Duration::from_secs(30),
            user_agent: concat!("lectern/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }
}

impl CatalogConfig {
    /// Resolves the full endpoint URL for a dataset.
    pub fn endpoint(&self, dataset: DatasetKey) -> Result<Url, CatalogError> {
        let path = match dataset {
            DatasetKey::Majors => &self.majors_path,
            DatasetKey::LiberalArts => &self.liberal_arts_path,
        };

        let base = Url::parse(&self.base_url).map_err(|e| CatalogError::Endpoint {
            dataset,
            message: e.to_string(),
        })?;

        base.join(path).map_err(|e| CatalogError::Endpoint {
            dataset,
            message: e.to_string(),
        })
    }
}
