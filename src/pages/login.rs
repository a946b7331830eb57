//! Login Page

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use crate::api::use_api;
use crate::session::{store_token, use_session};

#[component]
pub fn Login() -> impl IntoView {
    let api = use_api();
    let session = use_session();
    let navigate = use_navigate();

    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (error, set_error) = signal(None::<String>);
    let (submitting, set_submitting) = signal(false);

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let email = email.get();
        let password = password.get();
        if email.trim().is_empty() || password.is_empty() {
            return;
        }
        set_submitting.set(true);
        set_error.set(None);
        let api = api.clone();
        let navigate = navigate.clone();
        spawn_local(async move {
            match api.login(&email, &password).await {
                Ok(auth) => {
                    store_token(&session, &auth.access_token);
                    navigate("/dashboard", Default::default());
                }
                Err(err) => {
                    set_error.set(Some(err.to_string()));
                    set_submitting.set(false);
                }
            }
        });
    };

    view! {
        <div class="auth-layout">
            <div class="auth-card">
                <h1>"Welcome back."</h1>
                <p class="auth-hint">"Enter your credentials to access your dashboard."</p>

                <form class="auth-form" on:submit=submit>
                    <label class="field-label">"Email"</label>
                    <input
                        type="email"
                        placeholder="name@example.com"
                        prop:value=move || email.get()
                        on:input=move |ev| set_email.set(event_target_value(&ev))
                    />
                    <label class="field-label">"Password"</label>
                    <input
                        type="password"
                        placeholder="••••••••"
                        prop:value=move || password.get()
                        on:input=move |ev| set_password.set(event_target_value(&ev))
                    />

                    {move || error.get().map(|message| view! {
                        <div class="auth-error">{message}</div>
                    })}

                    <button type="submit" class="btn-primary" disabled=move || submitting.get()>
                        {move || if submitting.get() { "Signing in..." } else { "Sign In" }}
                    </button>
                </form>

                <p class="auth-switch">
                    "Don't have an account? "
                    <A href="/signup">"Sign up for free"</A>
                </p>
            </div>
        </div>
    }
}
