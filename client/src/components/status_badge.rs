//! Colored status pills for requests and appointments.

use api_client::types::{AppointmentStatus, RequestStatus};
use leptos::prelude::*;

#[component]
pub fn RequestStatusBadge(status: RequestStatus) -> impl IntoView {
    let class = format!("badge badge--{}", status.as_str());
    view! { <span class=class>{status.label()}</span> }
}

#[component]
pub fn AppointmentStatusBadge(status: AppointmentStatus) -> impl IntoView {
    let class = format!("badge badge--{}", status.as_str());
    view! { <span class=class>{status.label()}</span> }
}
