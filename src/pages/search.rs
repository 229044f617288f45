//! Stop-to-stop trip search with the map handoff.
//!
//! Validation happens before any request; a non-array response body is the
//! "no results" state, not an error. Each result row carries a map trigger
//! keyed by the vehicle id.

use leptos::prelude::*;

use crate::app::{Logout, token_or_logout};
use crate::map::{self, MapError};
use crate::net::api;
use crate::net::error::ApiError;
use crate::state::search::SearchState;
use crate::state::session::Session;
use crate::state::view::ShellState;

#[component]
pub fn SearchPage() -> impl IntoView {
    let session = expect_context::<RwSignal<Session>>();
    let shell = expect_context::<RwSignal<ShellState>>();
    let logout = expect_context::<Logout>();
    let search = RwSignal::new(SearchState::default());

    let submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        match search.get_untracked().validated_query() {
            Err(err) => search.update(|s| s.error = Some(err.to_string())),
            Ok((from, to)) => {
                let Some(token) = token_or_logout(session, logout) else {
                    return;
                };
                leptos::task::spawn_local(async move {
                    match api::search_departures(&token, &from, &to).await {
                        Ok(body) => search.update(|s| s.apply_response(body)),
                        Err(ApiError::Unauthorized) => logout.run(),
                        Err(err) => {
                            leptos::logging::warn!("trip search failed: {err}");
                            search.update(|s| s.error = Some("Search failed".to_owned()));
                        }
                    }
                });
            }
        }
    };

    let show_on_map = move |vehicle_id: u64| {
        let Some(token) = token_or_logout(session, logout) else {
            return;
        };
        leptos::task::spawn_local(async move {
            match map::show_on_map(&token, vehicle_id).await {
                Ok(coords) => shell.update(|s| s.record_location(coords)),
                Err(MapError::Unauthorized) => logout.run(),
                Err(err) => search.update(|s| s.error = Some(err.to_string())),
            }
        });
    };

    view! {
        <h1>"Find a trip"</h1>
        <form class="search-form" on:submit=submit>
            <input
                placeholder="From stop"
                prop:value=move || search.get().from
                on:input=move |ev| search.update(|s| s.from = event_target_value(&ev))
            />
            <input
                placeholder="To stop"
                prop:value=move || search.get().to
                on:input=move |ev| search.update(|s| s.to = event_target_value(&ev))
            />
            <button type="submit">"Search"</button>
        </form>
        {move || search.get().error.map(|message| view! { <p class="error">{message}</p> })}
        <h2>"Results"</h2>
        {move || {
            let results = search.get().results;
            if results.is_empty() {
                view! { <p>"No results."</p> }.into_any()
            } else {
                view! {
                    <ul class="search-results">
                        {results
                            .into_iter()
                            .map(|result| {
                                let vehicle_id = result.vehicle_id;
                                view! {
                                    <li>
                                        <p>
                                            <strong>"Route: "</strong>
                                            {format!("{} (#{})", result.route_name, result.route_number)}
                                        </p>
                                        <p><strong>"Vehicle: "</strong>{result.vehicle_name}</p>
                                        <p><strong>"Departs: "</strong>{result.from_stop_time}</p>
                                        <p><strong>"Arrives: "</strong>{result.to_stop_time}</p>
                                        <button on:click=move |_| show_on_map(vehicle_id)>
                                            "Show on map"
                                        </button>
                                    </li>
                                }
                            })
                            .collect::<Vec<_>>()}
                    </ul>
                }
                    .into_any()
            }
        }}
    }
}
