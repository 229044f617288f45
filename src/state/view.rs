#[cfg(test)]
#[path = "view_test.rs"]
mod view_test;

use crate::net::types::MapCoords;
use crate::state::session::Session;

/// Top-level surfaces the shell can display.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum View {
    #[default]
    Auth,
    Routes,
    Search,
    Map,
}

/// Sub-modes of the authentication surface, toggled purely by user action.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AuthMode {
    #[default]
    Login,
    Register,
}

/// Shell-level state: the active view, the auth sub-mode, and the last
/// vehicle position recorded by the map handoff.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ShellState {
    pub view: View,
    pub auth_mode: AuthMode,
    pub map_coords: Option<MapCoords>,
}

impl ShellState {
    /// Initial shell state for a restored session: straight to the route
    /// list when a credential is present, the sign-in form otherwise.
    pub fn for_session(session: &Session) -> Self {
        Self {
            view: if session.is_authenticated() {
                View::Routes
            } else {
                View::Auth
            },
            ..Self::default()
        }
    }

    pub fn after_login(&mut self) {
        self.view = View::Routes;
    }

    /// Registration success returns to the sign-in form; it never logs the
    /// user in.
    pub fn after_register(&mut self) {
        self.view = View::Auth;
        self.auth_mode = AuthMode::Login;
    }

    /// Idempotent: logging out twice lands in the same state.
    pub fn logout(&mut self) {
        *self = Self::default();
    }

    pub fn set_auth_mode(&mut self, mode: AuthMode) {
        self.auth_mode = mode;
    }

    pub fn show_routes(&mut self) {
        if self.view != View::Auth {
            self.view = View::Routes;
        }
    }

    pub fn show_search(&mut self) {
        if self.view != View::Auth {
            self.view = View::Search;
        }
    }

    /// Guarded transition: the map view only opens once a vehicle position
    /// has been recorded. Returns whether the view changed.
    pub fn show_map(&mut self) -> bool {
        if self.view == View::Auth || self.map_coords.is_none() {
            return false;
        }
        self.view = View::Map;
        true
    }

    pub fn record_location(&mut self, coords: MapCoords) {
        self.map_coords = Some(coords);
    }
}
