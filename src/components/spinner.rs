//! Loading Spinner

use leptos::prelude::*;

#[component]
pub fn Spinner() -> impl IntoView {
    view! { <div class="spinner" role="status"></div> }
}
