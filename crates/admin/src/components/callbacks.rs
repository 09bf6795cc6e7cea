//! Optional callback bundle for list components.
//!
//! Every handler is optional. Emitting to an absent handler is a no-op.

use std::fmt::Debug;

use storeview_core::view::SortState;
use tracing::debug;

pub use storeview_core::view::Handler;

/// Intents a list component can emit to its owner.
///
/// `P` is the filter patch type and `F` the sort field type.
pub struct ListCallbacks<'a, P, F> {
    on_change_filters: Option<Handler<'a, P>>,
    on_change_page: Option<Handler<'a, u32>>,
    on_change_per_page: Option<Handler<'a, u32>>,
    on_sort_change: Option<Handler<'a, SortState<F>>>,
}

impl<P, F> Default for ListCallbacks<'_, P, F> {
    fn default() -> Self {
        Self {
            on_change_filters: None,
            on_change_page: None,
            on_change_per_page: None,
            on_sort_change: None,
        }
    }
}

impl<P, F> std::fmt::Debug for ListCallbacks<'_, P, F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ListCallbacks")
            .field("on_change_filters", &self.on_change_filters.is_some())
            .field("on_change_page", &self.on_change_page.is_some())
            .field("on_change_per_page", &self.on_change_per_page.is_some())
            .field("on_sort_change", &self.on_sort_change.is_some())
            .finish()
    }
}

impl<'a, P: Debug, F: Debug> ListCallbacks<'a, P, F> {
    /// No handlers attached.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn on_change_filters(mut self, handler: impl Fn(P) + 'a) -> Self {
        self.on_change_filters = Some(Box::new(handler));
        self
    }

    #[must_use]
    pub fn on_change_page(mut self, handler: impl Fn(u32) + 'a) -> Self {
        self.on_change_page = Some(Box::new(handler));
        self
    }

    #[must_use]
    pub fn on_change_per_page(mut self, handler: impl Fn(u32) + 'a) -> Self {
        self.on_change_per_page = Some(Box::new(handler));
        self
    }

    #[must_use]
    pub fn on_sort_change(mut self, handler: impl Fn(SortState<F>) + 'a) -> Self {
        self.on_sort_change = Some(Box::new(handler));
        self
    }

    pub fn emit_change_filters(&self, patch: P) {
        debug!(?patch, "emit change_filters");
        if let Some(handler) = &self.on_change_filters {
            handler(patch);
        }
    }

    pub fn emit_change_page(&self, page: u32) {
        debug!(page, "emit change_page");
        if let Some(handler) = &self.on_change_page {
            handler(page);
        }
    }

    pub fn emit_change_per_page(&self, per_page: u32) {
        debug!(per_page, "emit change_per_page");
        if let Some(handler) = &self.on_change_per_page {
            handler(per_page);
        }
    }

    pub fn emit_sort_change(&self, sort: SortState<F>) {
        debug!(?sort, "emit sort_change");
        if let Some(handler) = &self.on_sort_change {
            handler(sort);
        }
    }
}
