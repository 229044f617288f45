//! Navigation sidebar for the authenticated surfaces.

use leptos::prelude::*;

use crate::app::Logout;
use crate::state::view::{ShellState, View};

/// Sidebar with the top-level navigation and the logout button. The map
/// entry only appears once a vehicle position has been recorded.
#[component]
pub fn Sidebar() -> impl IntoView {
    let shell = expect_context::<RwSignal<ShellState>>();
    let logout = expect_context::<Logout>();

    view! {
        <aside class="sidebar">
            <button
                class:active=move || shell.get().view == View::Routes
                on:click=move |_| shell.update(ShellState::show_routes)
            >
                "All routes"
            </button>
            <button
                class:active=move || shell.get().view == View::Search
                on:click=move |_| shell.update(ShellState::show_search)
            >
                "Find a trip"
            </button>
            <Show when=move || shell.get().map_coords.is_some()>
                <button
                    class:active=move || shell.get().view == View::Map
                    on:click=move |_| {
                        shell.update(|s| {
                            s.show_map();
                        });
                    }
                >
                    "Last position"
                </button>
            </Show>
            <button class="sidebar__logout" on:click=move |_| logout.run()>
                "Log out"
            </button>
        </aside>
    }
}
