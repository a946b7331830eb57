//! ClientPilot Frontend App
//!
//! Router wiring and app-wide context providers.

use std::sync::Arc;

use leptos::prelude::*;
use leptos_router::components::{ParentRoute, Route, Router, Routes};
use leptos_router::hooks::use_navigate;
use leptos_router::path;

use crate::api::{ApiClient, BASE_URL};
use crate::cache::QueryCache;
use crate::components::RequireAuth;
use crate::notify::{ToastHost, Toasts};
use crate::pages::{ClientDetail, Clients, Dashboard, LandingPage, Login, ProjectDetail, Signup};
use crate::session;

#[component]
pub fn App() -> impl IntoView {
    provide_context(session::init_session());
    provide_context(QueryCache::new());
    provide_context(Toasts::new());

    view! {
        <Router>
            <ApiProvider>
                <ToastHost/>
                <Routes fallback=|| view! { <p class="not-found">"Page not found."</p> }>
                    <Route path=path!("/") view=LandingPage/>
                    <Route path=path!("/login") view=Login/>
                    <Route path=path!("/signup") view=Signup/>
                    <ParentRoute path=path!("") view=RequireAuth>
                        <Route path=path!("dashboard") view=Dashboard/>
                        <Route path=path!("clients") view=Clients/>
                        <Route path=path!("clients/:id") view=ClientDetail/>
                        <Route path=path!("projects/:id") view=ProjectDetail/>
                    </ParentRoute>
                </Routes>
            </ApiProvider>
        </Router>
    }
}

/// Builds the API client once router context exists, so the
/// on-unauthorized hook can navigate instead of hard-reloading the page.
#[component]
fn ApiProvider(children: Children) -> impl IntoView {
    let session = session::use_session();
    let navigate = use_navigate();
    provide_context(ApiClient::new(
        BASE_URL,
        session,
        Arc::new(move || navigate("/login", Default::default())),
    ));
    children()
}
