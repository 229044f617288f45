//! Inline read-back of the last located vehicle position.

use leptos::prelude::*;

use crate::state::view::ShellState;

/// Shows the coordinates recorded by the last successful map handoff. The
/// interactive map itself lives in the pop-up surface, which owns its own
/// lifecycle.
#[component]
pub fn MapPage() -> impl IntoView {
    let shell = expect_context::<RwSignal<ShellState>>();

    view! {
        <h1>"Vehicle position"</h1>
        {move || match shell.get().map_coords {
            Some(coords) => view! {
                <p>{format!("Latitude {:.5}, longitude {:.5}", coords.lat, coords.lng)}</p>
            }
                .into_any(),
            None => view! { <p>"No vehicle has been located yet."</p> }.into_any(),
        }}
    }
}
