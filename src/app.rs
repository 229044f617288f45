//! Root application shell: session wiring and top-level view routing.
//!
//! Navigation is an explicit state machine ([`ShellState`]) rather than URL
//! routing: the active view is transient, owned by the shell, and reset on
//! logout.

use leptos::prelude::*;
use leptos_meta::{Stylesheet, Title, provide_meta_context};

use crate::components::sidebar::Sidebar;
use crate::pages::{auth::AuthPage, map_view::MapPage, routes::RoutesPage, search::SearchPage};
use crate::state::session::{Session, SessionStore};
use crate::state::view::{ShellState, View};

/// Logout action shared through context.
///
/// Running it clears the persisted credential and resets the shell to the
/// sign-in view. A 401 from any protected endpoint funnels here, whichever
/// page triggered it.
#[derive(Clone, Copy)]
pub struct Logout(Callback<()>);

impl Logout {
    pub fn run(self) {
        self.0.run(());
    }
}

/// Read the current token for a protected call, forcing logout when the
/// session is absent.
pub fn token_or_logout(session: RwSignal<Session>, logout: Logout) -> Option<String> {
    let token = session.get_untracked().token().map(ToOwned::to_owned);
    if token.is_none() {
        logout.run();
    }
    token
}

/// Root application component.
///
/// Restores the persisted session, provides the shared contexts, and renders
/// the active view.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let store = SessionStore::default();
    let session = RwSignal::new(store.get());
    let shell = RwSignal::new(ShellState::for_session(&session.get_untracked()));

    let logout = Logout(Callback::new(move |()| {
        store.clear();
        session.set(Session::default());
        shell.update(ShellState::logout);
    }));

    provide_context(store);
    provide_context(session);
    provide_context(shell);
    provide_context(logout);

    view! {
        <Stylesheet id="leptos" href="/pkg/transit-browser.css"/>
        <Title text="Transit Browser"/>

        {move || match shell.get().view {
            View::Auth => view! { <AuthPage/> }.into_any(),
            View::Routes => view! { <Shell><RoutesPage/></Shell> }.into_any(),
            View::Search => view! { <Shell><SearchPage/></Shell> }.into_any(),
            View::Map => view! { <Shell><MapPage/></Shell> }.into_any(),
        }}
    }
}

/// Layout for the authenticated surfaces: sidebar plus the active page.
#[component]
fn Shell(children: Children) -> impl IntoView {
    view! {
        <div class="app">
            <Sidebar/>
            <main>{children()}</main>
        </div>
    }
}
