//! Status Badges

use leptos::prelude::*;

use crate::models::{DeliverableStatus, ProjectStatus};

#[component]
pub fn ProjectStatusBadge(status: ProjectStatus) -> impl IntoView {
    view! {
        <span class=format!("status-badge status-{}", status.as_str())>
            {status.label()}
        </span>
    }
}

#[component]
pub fn DeliverableStatusBadge(status: DeliverableStatus) -> impl IntoView {
    view! {
        <span class=format!("status-badge status-{}", status.as_str())>
            {status.label()}
        </span>
    }
}
