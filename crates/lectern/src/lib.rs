//! Search and timetable assignment engine for a university lecture catalog.
//!
//! The pipeline, leaf to surface:
//!
//! 1. [`catalog::client::LectureSource`] fetches the two backing datasets
//!    ("majors", "liberal-arts") as JSON arrays.
//! 2. [`catalog::cache::CachedSource`] memoizes each dataset behind a shared
//!    future, collapsing duplicate requests to one physical fetch.
//! 3. [`catalog::LectureRepository`] issues a fixed six-call batch through
//!    the cache and concatenates the payloads into the frozen [`Catalog`].
//! 4. [`search::filter`] evaluates six ANDed predicates over the catalog;
//!    [`schedule::parse_schedule`] backs the day/time predicates.
//! 5. [`search::pagination`] bounds the filtered result to a visible prefix
//!    that grows as the host reports scroll-sentinel intersections.
//! 6. [`search::SearchSession`] ties the pieces together and pushes
//!    [`search::ViewState`] snapshots to subscribers.
//!
//! Rendering, dialog chrome, and the per-table schedule store are external
//! collaborators reached through the [`search::Viewport`] and
//! [`search::ScheduleSink`] seams.

pub mod catalog;
pub mod error;
pub mod logging;
pub mod schedule;
pub mod search;
pub mod types;

pub use catalog::cache::CachedSource;
pub use catalog::client::{HttpLectureSource, LectureSource};
pub use catalog::config::CatalogConfig;
pub use catalog::{Catalog, LectureRepository};
pub use error::{CatalogError, SearchOptionError};
pub use schedule::parse_schedule;
pub use search::option::SearchOption;
pub use search::pagination::{Pager, PAGE_SIZE};
pub use search::{ScheduleSink, SearchSession, ViewState, Viewport};
pub use types::{
    DatasetKey, DayCode, Lecture, PlacedSlot, ScheduleSlot, SearchContext, MAX_TIME_SLOT_ID,
    TIME_SLOTS,
};
