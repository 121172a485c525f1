//! Error types for the catalog and search subsystems.

use crate::types::DatasetKey;
use thiserror::Error;

/// Errors that can occur while fetching or assembling the lecture catalog.
///
/// `Clone` is required: a failed fetch stays memoized in [`CachedSource`]
/// and the same error is replayed to every caller of the shared future.
///
/// [`CachedSource`]: crate::catalog::cache::CachedSource
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CatalogError {
    /// Network-level failure on a dataset fetch
    #[error("fetching {dataset} failed: {message}")]
    Fetch { dataset: DatasetKey, message: String },

    /// Endpoint responded with a non-success status
    #[error("{dataset} endpoint returned HTTP {status}")]
    Status { dataset: DatasetKey, status: u16 },

    /// Response body was not a JSON array of lectures
    #[error("could not decode {dataset} payload: {message}")]
    Decode { dataset: DatasetKey, message: String },

    /// Configured endpoint URL is malformed
    #[error("invalid endpoint for {dataset}: {message}")]
    Endpoint { dataset: DatasetKey, message: String },

    /// HTTP client construction failed
    #[error("failed to build HTTP client: {message}")]
    Client { message: String },
}

/// Rejections raised at the [`SearchOption`] boundary for malformed filter
/// input. The filter engine itself assumes a well-formed option and never
/// raises.
///
/// [`SearchOption`]: crate::search::option::SearchOption
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SearchOptionError {
    #[error("grade {grade} is out of range 1..={max}")]
    GradeOutOfRange { grade: u8, max: u8 },

    #[error("time slot {time} is out of range 1..={max}")]
    TimeOutOfRange { time: u32, max: u32 },

    #[error("credits filter must be a positive value")]
    ZeroCredits,
}
