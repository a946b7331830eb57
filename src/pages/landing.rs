//! Landing Page

use leptos::prelude::*;
use leptos_router::components::A;

#[component]
pub fn LandingPage() -> impl IntoView {
    view! {
        <div class="landing">
            <header class="landing-nav">
                <span class="landing-brand">"ClientPilot"</span>
                <nav class="landing-links">
                    <A href="/login">"Sign in"</A>
                    <A href="/signup">"Get started"</A>
                </nav>
            </header>

            <section class="landing-hero">
                <h1>"Run your freelance business on autopilot."</h1>
                <p>
                    "Track clients, projects, and deliverables in one place, and let the AI scope agent turn messy client requirements into a structured plan."
                </p>
                <div class="landing-cta">
                    <A href="/signup">
                        <span class="btn-primary">"Start for free"</span>
                    </A>
                    <A href="/dashboard">
                        <span class="btn-secondary">"Open dashboard"</span>
                    </A>
                </div>
            </section>

            <section class="landing-features">
                <div class="feature-card">
                    <h3>"Clients"</h3>
                    <p>"Keep every client and contact in one tidy list."</p>
                </div>
                <div class="feature-card">
                    <h3>"Projects"</h3>
                    <p>"Status and progress tracked per project, derived from real deliverables."</p>
                </div>
                <div class="feature-card">
                    <h3>"Scope Agent"</h3>
                    <p>"Paste raw requirements, review the structured plan, approve deliverables."</p>
                </div>
            </section>
        </div>
    }
}
