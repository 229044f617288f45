//! Ordered schedule list with each vehicle's static attributes.

use leptos::prelude::*;

use crate::net::types::Schedule;

/// Renders a route's schedules in server order. An empty list is a valid
/// state and shows a "no schedule" message, not an error.
#[component]
pub fn ScheduleList(schedules: Vec<Schedule>) -> impl IntoView {
    if schedules.is_empty() {
        return view! { <p class="schedules__empty">"No schedule available."</p> }.into_any();
    }

    view! {
        <ul class="schedules">
            {schedules
                .into_iter()
                .map(|schedule| {
                    view! {
                        <li>
                            {format!("{} \u{2192} {}", schedule.departure_time, schedule.arrival_time)}
                            <ul>
                                <li>{format!("Type: {}", schedule.vehicle.vehicle_type)}</li>
                                <li>{format!("Registration: {}", schedule.vehicle.registration_number)}</li>
                                <li>{format!("Brand: {}", schedule.vehicle.brand)}</li>
                                <li>{format!("Model: {}", schedule.vehicle.model)}</li>
                                <li>{format!("Capacity: {}", schedule.vehicle.capacity)}</li>
                            </ul>
                        </li>
                    }
                })
                .collect::<Vec<_>>()}
        </ul>
    }
    .into_any()
}
