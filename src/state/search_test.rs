use super::*;
use serde_json::json;

fn trip(route_number: u32, vehicle_id: u64) -> serde_json::Value {
    json!({
        "route_name": "North Loop",
        "route_number": route_number,
        "vehicle_name": "Tram 4012",
        "vehicle_id": vehicle_id,
        "from_stop_time": "08:10",
        "to_stop_time": "08:42",
    })
}

// =============================================================
// Validation
// =============================================================

#[test]
fn missing_from_stop_fails_validation() {
    let state = SearchState {
        to: "Central".to_owned(),
        ..SearchState::default()
    };
    assert_eq!(state.validated_query(), Err(SearchInputError::MissingStop));
}

#[test]
fn missing_to_stop_fails_validation() {
    let state = SearchState {
        from: "Depot".to_owned(),
        ..SearchState::default()
    };
    assert_eq!(state.validated_query(), Err(SearchInputError::MissingStop));
}

#[test]
fn complete_query_passes_validation() {
    let state = SearchState {
        from: "Depot".to_owned(),
        to: "Central".to_owned(),
        ..SearchState::default()
    };
    assert_eq!(
        state.validated_query(),
        Ok(("Depot".to_owned(), "Central".to_owned()))
    );
}

// =============================================================
// Response classification
// =============================================================

#[test]
fn array_response_replaces_results_in_order() {
    let mut state = SearchState::default();
    state.apply_response(json!([trip(12, 7), trip(3, 9)]));
    assert_eq!(state.results.len(), 2);
    assert_eq!(state.results[0].route_number, 12);
    assert_eq!(state.results[0].vehicle_id, 7);
    assert_eq!(state.results[1].route_number, 3);
    assert!(state.error.is_none());
}

#[test]
fn non_array_response_means_no_results_not_an_error() {
    let mut state = SearchState::default();
    state.apply_response(json!([trip(12, 7)]));
    assert_eq!(state.results.len(), 1);

    state.apply_response(json!({"detail": "No departures found"}));
    assert!(state.results.is_empty());
    assert!(state.error.is_none());
}

#[test]
fn empty_array_clears_previous_results() {
    let mut state = SearchState::default();
    state.apply_response(json!([trip(12, 7)]));
    state.apply_response(json!([]));
    assert!(state.results.is_empty());
}

#[test]
fn undecodable_rows_are_dropped() {
    let mut state = SearchState::default();
    state.apply_response(json!([trip(12, 7), {"bogus": true}]));
    assert_eq!(state.results.len(), 1);
    assert_eq!(state.results[0].vehicle_id, 7);
}
