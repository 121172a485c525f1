//! Search session: the state container wiring filter, pagination, and the
//! host-facing seams together.
//!
//! The session owns the frozen catalog plus the mutable `SearchOption` and
//! page cursor, and re-derives the filtered sequence and visible window on
//! every state change — pure recomputation, no incremental mutation.

pub mod filter;
pub mod option;
pub mod pagination;

use crate::catalog::Catalog;
use crate::error::SearchOptionError;
use crate::schedule::parse_schedule;
use crate::types::{Lecture, PlacedSlot, SearchContext};
use option::SearchOption;
use pagination::Pager;
use tracing::{debug, warn};

/// Scroll viewport capability injected by the rendering layer; the session
/// repositions it to the origin whenever the filter criteria change.
pub trait Viewport: Send + Sync {
    fn scroll_to_origin(&self);
}

/// Per-table schedule store the selected lecture's parsed slots are
/// appended to.
pub trait ScheduleSink: Send + Sync {
    fn append(&self, table_id: &str, slots: Vec<PlacedSlot>);
}

/// Snapshot pushed to subscribers after every state change.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewState {
    pub filtered_len: usize,
    pub visible: Vec<Lecture>,
    pub all_majors: Vec<String>,
    pub cursor: usize,
    pub last_page: usize,
}

type Listener = Box<dyn Fn(&ViewState) + Send + Sync>;

/// One user-facing search over a loaded catalog.
pub struct SearchSession {
    catalog: Catalog,
    option: SearchOption,
    pager: Pager,
    filtered: Vec<Lecture>,
    all_majors: Vec<String>,
    context: Option<SearchContext>,
    viewport: Option<Box<dyn Viewport>>,
    listeners: Vec<Listener>,
}

impl SearchSession {
    /// Builds a session over a frozen catalog with no constraints active.
    pub fn new(catalog: Catalog) -> Self {
        let option = SearchOption::new();
        let filtered = filter::filter(&catalog, &option);
        let all_majors = filter::distinct_majors(&catalog);
        Self {
            catalog,
            option,
            pager: Pager::new(),
            filtered,
            all_majors,
            context: None,
            viewport: None,
            listeners: Vec::new(),
        }
    }

    /// Attaches the rendering layer's scroll viewport.
    pub fn with_viewport(mut self, viewport: Box<dyn Viewport>) -> Self {
        self.viewport = Some(viewport);
        self
    }

    /// Registers a listener receiving a [`ViewState`] after every change.
    pub fn subscribe(&mut self, listener: impl Fn(&ViewState) + Send + Sync + 'static) {
        self.listeners.push(Box::new(listener));
    }

    pub fn option(&self) -> &SearchOption {
        &self.option
    }

    pub fn context(&self) -> Option<&SearchContext> {
        self.context.as_ref()
    }

    /// The full filtered sequence, catalog order preserved.
    pub fn filtered(&self) -> &[Lecture] {
        &self.filtered
    }

    /// The bounded prefix currently materialized for rendering.
    pub fn visible(&self) -> &[Lecture] {
        pagination::visible_window(&self.filtered, self.pager.cursor())
    }

    /// Distinct majors of the unfiltered catalog.
    pub fn all_majors(&self) -> &[String] {
        &self.all_majors
    }

    pub fn cursor(&self) -> usize {
        self.pager.cursor()
    }

    pub fn last_page(&self) -> usize {
        pagination::last_page(self.filtered.len())
    }

    pub fn view_state(&self) -> ViewState {
        ViewState {
            filtered_len: self.filtered.len(),
            visible: self.visible().to_vec(),
            all_majors: self.all_majors.clone(),
            cursor: self.pager.cursor(),
            last_page: self.last_page(),
        }
    }

    /// Applies a change to the search option.
    ///
    /// The change runs against a scratch copy; a validation rejection leaves
    /// the session untouched. On success the cursor resets to 1, the
    /// viewport scrolls to its origin, and the filtered sequence is
    /// re-derived.
    pub fn update_option<F>(&mut self, change: F) -> Result<(), SearchOptionError>
    where
        F: FnOnce(&mut SearchOption) -> Result<(), SearchOptionError>,
    {
        let mut next = self.option.clone();
        change(&mut next)?;
        self.option = next;
        self.after_criteria_change();
        Ok(())
    }

    /// Seeds the day/time filters from a host-supplied search context,
    /// replacing any previous seeds, and resets pagination.
    pub fn apply_context(&mut self, context: SearchContext) {
        self.option.set_days(context.day.into_iter().collect());

        let times: Vec<u32> = context.time.into_iter().collect();
        if let Err(error) = self.option.set_times(times) {
            warn!(%error, "ignoring out-of-range time seed from search context");
            self.option.clear_times();
        }

        self.context = Some(context);
        self.after_criteria_change();
    }

    /// Entry point for the scroll-intersection signal: the trailing
    /// sentinel became visible, so materialize one more page. Safe to fire
    /// repeatedly at the last page.
    pub fn sentinel_reached(&mut self) {
        if self.pager.advance(self.filtered.len()) {
            debug!(cursor = self.pager.cursor(), "visible window advanced");
            self.notify();
        }
    }

    /// Assigns the lecture at `index` of the visible window to the active
    /// context's table: parses its schedule, tags each slot with the
    /// lecture, and appends them to the sink.
    ///
    /// Returns false (and appends nothing) without an applied context or
    /// with an out-of-window index.
    pub fn select(&self, index: usize, sink: &dyn ScheduleSink) -> bool {
        let Some(context) = &self.context else {
            return false;
        };
        let Some(lecture) = self.visible().get(index) else {
            return false;
        };

        let placed: Vec<PlacedSlot> = lecture
            .schedule
            .as_deref()
            .map(parse_schedule)
            .unwrap_or_default()
            .into_iter()
            .map(|slot| PlacedSlot {
                lecture: lecture.clone(),
                slot,
            })
            .collect();

        debug!(
            lecture = %lecture.id,
            table = %context.table_id,
            slots = placed.len(),
            "lecture assigned to table"
        );
        sink.append(&context.table_id, placed);
        true
    }

    fn after_criteria_change(&mut self) {
        self.pager.reset();
        if let Some(viewport) = &self.viewport {
            viewport.scroll_to_origin();
        }
        self.filtered = filter::filter(&self.catalog, &self.option);
        debug!(filtered = self.filtered.len(), "search criteria changed");
        self.notify();
    }

    fn notify(&self) {
        if self.listeners.is_empty() {
            return;
        }
        let state = self.view_state();
        for listener in &self.listeners {
            listener(&state);
        }
    }
}
