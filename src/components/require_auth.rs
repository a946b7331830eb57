//! Route Guard
//!
//! Parent route for every authenticated page. Presence check only: a
//! held-but-rejected token is caught later by the API client's 401
//! handling, which clears it and lands on the same redirect.

use leptos::prelude::*;
use leptos_router::components::Redirect;

use crate::components::AppShell;
use crate::session::{use_session, SessionStoreFields};

#[component]
pub fn RequireAuth() -> impl IntoView {
    let session = use_session();

    view! {
        <Show
            when=move || session.token().with(|token| token.is_some())
            fallback=|| view! { <Redirect path="/login"/> }
        >
            <AppShell/>
        </Show>
    }
}
