#[cfg(test)]
#[path = "routes_test.rs"]
mod routes_test;

use crate::net::types::{PageResult, RouteDetail, RouteSummary};

/// Which surface of the route browser is active.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum BrowserMode {
    #[default]
    Listing,
    Detail,
}

/// Identifies the state a request was issued for.
///
/// Every fetch is tagged when it begins; completions carrying a tag that is
/// no longer current are discarded instead of applied, so a late listing
/// response can never override the detail view.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RequestTag(u64);

/// Route browser state machine: a paginated listing with drill-down into a
/// per-route schedule detail.
#[derive(Clone, Debug, PartialEq)]
pub struct RoutesState {
    pub mode: BrowserMode,
    pub page: u32,
    pub pages: u32,
    pub items: Vec<RouteSummary>,
    pub detail: Option<RouteDetail>,
    pub detail_loading: bool,
    pub error: Option<String>,
    epoch: u64,
}

impl Default for RoutesState {
    fn default() -> Self {
        Self {
            mode: BrowserMode::Listing,
            page: 1,
            pages: 1,
            items: Vec::new(),
            detail: None,
            detail_loading: false,
            error: None,
            epoch: 0,
        }
    }
}

impl RoutesState {
    /// Move to the previous page, flooring at 1. Returns whether the page
    /// changed; a change means the listing must be refetched.
    pub fn prev_page(&mut self) -> bool {
        if self.page > 1 {
            self.page -= 1;
            true
        } else {
            false
        }
    }

    /// Move to the next page, ceiling at `pages`. Returns whether the page
    /// changed.
    pub fn next_page(&mut self) -> bool {
        if self.page < self.pages {
            self.page += 1;
            true
        } else {
            false
        }
    }

    pub fn begin_listing_fetch(&mut self) -> RequestTag {
        self.epoch += 1;
        RequestTag(self.epoch)
    }

    fn is_current(&self, tag: RequestTag) -> bool {
        tag.0 == self.epoch
    }

    /// Apply a listing response, replacing the current page wholesale.
    /// Stale tags and responses landing outside Listing are discarded.
    pub fn apply_listing(&mut self, tag: RequestTag, result: PageResult) -> bool {
        if !self.is_current(tag) || self.mode != BrowserMode::Listing {
            return false;
        }
        self.pages = result.pages.max(1);
        self.page = self.page.min(self.pages);
        self.items = result.items;
        self.error = None;
        true
    }

    /// Record a listing failure. The previously loaded page stays in place.
    pub fn fail_listing(&mut self, tag: RequestTag, message: &str) {
        if self.is_current(tag) && self.mode == BrowserMode::Listing {
            self.error = Some(message.to_owned());
        }
    }

    /// Enter Detail for a selected route. Bumping the epoch here is what
    /// suppresses an outstanding listing fetch.
    pub fn begin_detail_fetch(&mut self) -> RequestTag {
        self.mode = BrowserMode::Detail;
        self.detail = None;
        self.detail_loading = true;
        self.error = None;
        self.epoch += 1;
        RequestTag(self.epoch)
    }

    /// Replace the detail record wholesale. An empty schedule list is a
    /// valid displayed state, not an error.
    pub fn apply_detail(&mut self, tag: RequestTag, detail: RouteDetail) -> bool {
        if !self.is_current(tag) || self.mode != BrowserMode::Detail {
            return false;
        }
        self.detail = Some(detail);
        self.detail_loading = false;
        true
    }

    /// Detail fetch failed: fall back to Listing with an error and no
    /// detail record. The caller re-triggers the listing fetch.
    pub fn fail_detail(&mut self, tag: RequestTag, message: &str) {
        if !self.is_current(tag) || self.mode != BrowserMode::Detail {
            return;
        }
        self.back();
        self.error = Some(message.to_owned());
    }

    /// Leave Detail, discarding the record. Outstanding fetches issued for
    /// the old state are invalidated; the caller refetches the current page.
    pub fn back(&mut self) {
        self.mode = BrowserMode::Listing;
        self.detail = None;
        self.detail_loading = false;
        self.epoch += 1;
    }
}
