//! Authenticated Layout
//!
//! Sidebar navigation plus header, with the routed page in the outlet.

use leptos::prelude::*;
use leptos_router::components::{Outlet, A};
use leptos_router::hooks::use_navigate;

use crate::session::{clear_token, use_session};

#[component]
pub fn AppShell() -> impl IntoView {
    view! {
        <div class="app-shell">
            <Sidebar/>
            <div class="app-main">
                <header class="app-header">
                    <h1 class="app-header-title">"Overview"</h1>
                    <span class="agent-pill">
                        <span class="agent-dot"></span>
                        "AI Agent Active"
                    </span>
                </header>
                <main class="app-content">
                    <Outlet/>
                </main>
            </div>
        </div>
    }
}

#[component]
fn Sidebar() -> impl IntoView {
    let session = use_session();
    let navigate = use_navigate();

    let logout = move |_| {
        clear_token(&session);
        navigate("/login", Default::default());
    };

    view! {
        <aside class="sidebar">
            <div class="sidebar-brand">"ClientPilot"</div>
            <nav class="sidebar-nav">
                <A href="/dashboard">"Dashboard"</A>
                <A href="/clients">"Clients"</A>
            </nav>
            <button class="sidebar-logout" on:click=logout>
                "Log out"
            </button>
        </aside>
    }
}
