//! Incremental pagination over the filtered result.
//!
//! The visible window is always a prefix: `cursor` pages of 100 items,
//! clamped to the filtered length. Scroll-driven advancement saturates at
//! the last page and is idempotent once there.

/// Items materialized per page.
pub const PAGE_SIZE: usize = 100;

/// Number of the last page for a filtered length; at least 1 even when the
/// result is empty.
pub fn last_page(filtered_len: usize) -> usize {
    filtered_len.div_ceil(PAGE_SIZE).max(1)
}

/// Bounded prefix of `filtered` for a cursor: length
/// `min(cursor * PAGE_SIZE, filtered.len())`.
pub fn visible_window<T>(filtered: &[T], cursor: usize) -> &[T] {
    let end = filtered.len().min(cursor.saturating_mul(PAGE_SIZE));
    &filtered[..end]
}

/// The 1-based page cursor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pager {
    cursor: usize,
}

impl Pager {
    pub fn new() -> Self {
        Self { cursor: 1 }
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Advances one page without overshooting the last page for the given
    /// filtered length. Returns whether the cursor actually moved, so a
    /// repeated trigger at the last page stays a no-op.
    pub fn advance(&mut self, filtered_len: usize) -> bool {
        let next = (self.cursor + 1).min(last_page(filtered_len));
        let moved = next != self.cursor;
        self.cursor = next;
        moved
    }

    /// Back to page 1; invoked whenever the filter criteria change.
    pub fn reset(&mut self) {
        self.cursor = 1;
    }
}

impl Default for Pager {
    fn default() -> Self {
        Self::new()
    }
}
