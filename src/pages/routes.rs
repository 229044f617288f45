//! Route browser page: paginated listing with drill-down into a route's
//! schedule detail.
//!
//! The page drives the [`RoutesState`] machine; every fetch is tagged when
//! it begins and applied through the state's guards, so a response landing
//! after a view transition is discarded instead of applied.

use leptos::prelude::*;

use crate::app::{Logout, token_or_logout};
use crate::components::schedule_list::ScheduleList;
use crate::net::api;
use crate::net::error::ApiError;
use crate::state::routes::{BrowserMode, RoutesState};
use crate::state::session::Session;

#[component]
pub fn RoutesPage() -> impl IntoView {
    let session = expect_context::<RwSignal<Session>>();
    let logout = expect_context::<Logout>();
    let routes = RwSignal::new(RoutesState::default());

    // Entering the listing triggers the fetch for the current page.
    load_listing(routes, session, logout);

    let on_prev = move |_| {
        if routes.try_update(RoutesState::prev_page) == Some(true) {
            load_listing(routes, session, logout);
        }
    };
    let on_next = move |_| {
        if routes.try_update(RoutesState::next_page) == Some(true) {
            load_listing(routes, session, logout);
        }
    };
    let on_back = move |_| {
        routes.update(RoutesState::back);
        load_listing(routes, session, logout);
    };

    view! {
        {move || {
            let state = routes.get();
            if state.mode == BrowserMode::Detail {
                let loading = state.detail_loading;
                view! {
                    {state
                        .detail
                        .map(|d| {
                            view! {
                                <h1>{format!("{} (route #{})", d.name, d.route_number)}</h1>
                                <p>{format!("Distance: {} km", d.distance)}</p>
                                <p>{format!("Average delay: {} min", d.average_delay_minutes)}</p>
                                <h2>"Schedule"</h2>
                                <ScheduleList schedules=d.schedules/>
                            }
                        })}
                    <Show when=move || loading>
                        <p>"Loading..."</p>
                    </Show>
                    <button class="back" on:click=on_back>
                        "\u{2190} Back"
                    </button>
                }
                    .into_any()
            } else {
                view! {
                    <h1>"Routes"</h1>
                    {state.error.clone().map(|message| view! { <p class="error">{message}</p> })}
                    {state
                        .items
                        .clone()
                        .into_iter()
                        .map(|route| {
                            let route_id = route.id;
                            view! {
                                <div
                                    class="route"
                                    on:click=move |_| select_route(routes, session, logout, route_id)
                                >
                                    <h3>{route.name}</h3>
                                </div>
                            }
                        })
                        .collect::<Vec<_>>()}
                    <div class="pagination">
                        <button on:click=on_prev disabled=state.page == 1>
                            "Previous"
                        </button>
                        <span>{format!("Page {} of {}", state.page, state.pages)}</span>
                        <button on:click=on_next disabled=state.page == state.pages>
                            "Next"
                        </button>
                    </div>
                }
                    .into_any()
            }
        }}
    }
}

/// Fetch the current listing page and apply it through the state's guards.
fn load_listing(routes: RwSignal<RoutesState>, session: RwSignal<Session>, logout: Logout) {
    let Some(tag) = routes.try_update(RoutesState::begin_listing_fetch) else {
        return;
    };
    let page = routes.get_untracked().page;
    let Some(token) = token_or_logout(session, logout) else {
        return;
    };
    leptos::task::spawn_local(async move {
        match api::fetch_routes_page(&token, page).await {
            Ok(result) => {
                routes.update(|s| {
                    s.apply_listing(tag, result);
                });
            }
            Err(ApiError::Unauthorized) => logout.run(),
            Err(err) => {
                leptos::logging::warn!("route listing fetch failed: {err}");
                routes.update(|s| s.fail_listing(tag, "Could not load routes"));
            }
        }
    });
}

/// Drill into one route. Selecting freezes the background listing refresh
/// until back-navigation.
fn select_route(
    routes: RwSignal<RoutesState>,
    session: RwSignal<Session>,
    logout: Logout,
    route_id: u64,
) {
    let Some(tag) = routes.try_update(RoutesState::begin_detail_fetch) else {
        return;
    };
    let Some(token) = token_or_logout(session, logout) else {
        return;
    };
    leptos::task::spawn_local(async move {
        match api::fetch_route_detail(&token, route_id).await {
            Ok(detail) => {
                routes.update(|s| {
                    s.apply_detail(tag, detail);
                });
            }
            Err(ApiError::Unauthorized) => logout.run(),
            Err(err) => {
                leptos::logging::warn!("route detail fetch failed: {err}");
                routes.update(|s| s.fail_detail(tag, "Could not load route details"));
                // Falling back to the listing re-triggers its fetch.
                if routes.get_untracked().mode == BrowserMode::Listing {
                    load_listing(routes, session, logout);
                }
            }
        }
    });
}
