use super::*;

fn summary(id: u64, name: &str) -> RouteSummary {
    RouteSummary {
        id,
        name: name.to_owned(),
    }
}

fn page_result(items: Vec<RouteSummary>, pages: u32) -> PageResult {
    PageResult {
        items,
        page: 1,
        pages,
    }
}

fn detail(id: u64) -> RouteDetail {
    RouteDetail {
        id,
        name: "North Loop".to_owned(),
        route_number: 12,
        distance: 8.4,
        average_delay_minutes: 2.0,
        schedules: Vec::new(),
    }
}

// =============================================================
// Pagination clamping
// =============================================================

#[test]
fn starts_in_listing_on_page_one() {
    let state = RoutesState::default();
    assert_eq!(state.mode, BrowserMode::Listing);
    assert_eq!(state.page, 1);
    assert_eq!(state.pages, 1);
    assert!(state.items.is_empty());
}

#[test]
fn prev_page_floors_at_one() {
    let mut state = RoutesState::default();
    assert!(!state.prev_page());
    assert_eq!(state.page, 1);
}

#[test]
fn next_page_ceils_at_last_page() {
    let mut state = RoutesState::default();
    let tag = state.begin_listing_fetch();
    assert!(state.apply_listing(tag, page_result(vec![summary(1, "A")], 3)));

    assert!(state.next_page());
    assert!(state.next_page());
    assert_eq!(state.page, 3);
    assert!(!state.next_page());
    assert_eq!(state.page, 3);
}

#[test]
fn apply_listing_clamps_page_when_pages_shrink() {
    let mut state = RoutesState::default();
    let tag = state.begin_listing_fetch();
    assert!(state.apply_listing(tag, page_result(Vec::new(), 5)));
    state.next_page();
    state.next_page();
    assert_eq!(state.page, 3);

    let tag = state.begin_listing_fetch();
    assert!(state.apply_listing(tag, page_result(Vec::new(), 2)));
    assert_eq!(state.page, 2);
}

// =============================================================
// Listing fetch application
// =============================================================

#[test]
fn apply_listing_replaces_items_wholesale() {
    let mut state = RoutesState::default();
    let tag = state.begin_listing_fetch();
    assert!(state.apply_listing(tag, page_result(vec![summary(1, "A"), summary(2, "B")], 2)));

    let tag = state.begin_listing_fetch();
    assert!(state.apply_listing(tag, page_result(vec![summary(3, "C")], 2)));
    assert_eq!(state.items, vec![summary(3, "C")]);
}

#[test]
fn stale_listing_tag_is_discarded() {
    let mut state = RoutesState::default();
    let old = state.begin_listing_fetch();
    let fresh = state.begin_listing_fetch();

    assert!(!state.apply_listing(old, page_result(vec![summary(9, "stale")], 9)));
    assert!(state.items.is_empty());

    assert!(state.apply_listing(fresh, page_result(vec![summary(1, "A")], 2)));
    assert_eq!(state.pages, 2);
}

#[test]
fn listing_failure_keeps_previous_page_data() {
    let mut state = RoutesState::default();
    let tag = state.begin_listing_fetch();
    assert!(state.apply_listing(tag, page_result(vec![summary(1, "A")], 1)));

    let tag = state.begin_listing_fetch();
    state.fail_listing(tag, "could not load routes");
    assert_eq!(state.error.as_deref(), Some("could not load routes"));
    assert_eq!(state.items, vec![summary(1, "A")]);
}

#[test]
fn stale_listing_failure_is_ignored() {
    let mut state = RoutesState::default();
    let old = state.begin_listing_fetch();
    let _fresh = state.begin_listing_fetch();
    state.fail_listing(old, "boom");
    assert!(state.error.is_none());
}

#[test]
fn successful_listing_clears_error() {
    let mut state = RoutesState::default();
    let tag = state.begin_listing_fetch();
    state.fail_listing(tag, "boom");

    let tag = state.begin_listing_fetch();
    assert!(state.apply_listing(tag, page_result(Vec::new(), 1)));
    assert!(state.error.is_none());
}

// =============================================================
// Detail drill-down and the stale-response guard
// =============================================================

#[test]
fn drill_down_suppresses_outstanding_listing_fetch() {
    let mut state = RoutesState::default();
    let listing_tag = state.begin_listing_fetch();
    let detail_tag = state.begin_detail_fetch();
    assert!(state.detail_loading);

    // Detail data arrives first.
    assert!(state.apply_detail(detail_tag, detail(7)));
    assert!(!state.detail_loading);

    // The late listing response must not override the detail view.
    assert!(!state.apply_listing(listing_tag, page_result(vec![summary(1, "late")], 4)));
    assert_eq!(state.mode, BrowserMode::Detail);
    assert_eq!(state.detail.as_ref().map(|d| d.id), Some(7));
    assert!(state.items.is_empty());
}

#[test]
fn detail_with_empty_schedules_is_a_valid_state() {
    let mut state = RoutesState::default();
    let tag = state.begin_detail_fetch();
    assert!(state.apply_detail(tag, detail(3)));
    assert!(state.detail.as_ref().is_some_and(|d| d.schedules.is_empty()));
    assert!(state.error.is_none());
}

#[test]
fn detail_failure_returns_to_listing_with_error() {
    let mut state = RoutesState::default();
    let tag = state.begin_detail_fetch();
    state.fail_detail(tag, "could not load route details");
    assert_eq!(state.mode, BrowserMode::Listing);
    assert!(state.detail.is_none());
    assert!(!state.detail_loading);
    assert_eq!(state.error.as_deref(), Some("could not load route details"));
}

#[test]
fn back_discards_detail_and_invalidates_its_fetch() {
    let mut state = RoutesState::default();
    let tag = state.begin_detail_fetch();
    state.back();
    assert_eq!(state.mode, BrowserMode::Listing);
    assert!(state.detail.is_none());

    // A detail response for the abandoned selection is discarded.
    assert!(!state.apply_detail(tag, detail(5)));
    assert!(state.detail.is_none());
}

#[test]
fn stale_detail_failure_is_ignored_after_back() {
    let mut state = RoutesState::default();
    let tag = state.begin_detail_fetch();
    state.back();
    state.fail_detail(tag, "boom");
    assert!(state.error.is_none());
    assert_eq!(state.mode, BrowserMode::Listing);
}
