use super::*;

fn coords() -> MapCoords {
    MapCoords {
        lat: 50.45,
        lng: 30.52,
    }
}

// =============================================================
// Defaults and session restore
// =============================================================

#[test]
fn default_view_is_auth_login() {
    let shell = ShellState::default();
    assert_eq!(shell.view, View::Auth);
    assert_eq!(shell.auth_mode, AuthMode::Login);
    assert!(shell.map_coords.is_none());
}

#[test]
fn restored_session_opens_routes() {
    let shell = ShellState::for_session(&Session::authenticated("tok"));
    assert_eq!(shell.view, View::Routes);
}

#[test]
fn anonymous_session_opens_auth() {
    let shell = ShellState::for_session(&Session::default());
    assert_eq!(shell.view, View::Auth);
}

// =============================================================
// Auth transitions
// =============================================================

#[test]
fn login_success_shows_routes() {
    let mut shell = ShellState::default();
    shell.after_login();
    assert_eq!(shell.view, View::Routes);
}

#[test]
fn register_success_returns_to_login_form() {
    let mut shell = ShellState::default();
    shell.set_auth_mode(AuthMode::Register);
    shell.after_register();
    assert_eq!(shell.view, View::Auth);
    assert_eq!(shell.auth_mode, AuthMode::Login);
}

#[test]
fn logout_resets_and_is_idempotent() {
    let mut shell = ShellState::for_session(&Session::authenticated("tok"));
    shell.record_location(coords());
    shell.show_search();
    shell.logout();
    assert_eq!(shell, ShellState::default());
    shell.logout();
    assert_eq!(shell, ShellState::default());
}

// =============================================================
// Authenticated navigation
// =============================================================

#[test]
fn routes_and_search_are_blocked_while_unauthenticated() {
    let mut shell = ShellState::default();
    shell.show_routes();
    assert_eq!(shell.view, View::Auth);
    shell.show_search();
    assert_eq!(shell.view, View::Auth);
}

#[test]
fn routes_and_search_toggle_once_authenticated() {
    let mut shell = ShellState::for_session(&Session::authenticated("tok"));
    shell.show_search();
    assert_eq!(shell.view, View::Search);
    shell.show_routes();
    assert_eq!(shell.view, View::Routes);
}

#[test]
fn show_map_requires_a_recorded_position() {
    let mut shell = ShellState::for_session(&Session::authenticated("tok"));
    assert!(!shell.show_map());
    assert_eq!(shell.view, View::Routes);

    shell.record_location(coords());
    assert!(shell.show_map());
    assert_eq!(shell.view, View::Map);
}

#[test]
fn show_map_is_blocked_while_unauthenticated() {
    let mut shell = ShellState::default();
    shell.record_location(coords());
    assert!(!shell.show_map());
    assert_eq!(shell.view, View::Auth);
}
