//! Signup Page

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use crate::api::use_api;
use crate::session::{store_token, use_session};

#[component]
pub fn Signup() -> impl IntoView {
    let api = use_api();
    let session = use_session();
    let navigate = use_navigate();

    let (username, set_username) = signal(String::new());
    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (error, set_error) = signal(None::<String>);
    let (submitting, set_submitting) = signal(false);

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let username = username.get();
        let email = email.get();
        let password = password.get();
        if username.trim().is_empty() || email.trim().is_empty() || password.is_empty() {
            return;
        }
        set_submitting.set(true);
        set_error.set(None);
        let api = api.clone();
        let navigate = navigate.clone();
        spawn_local(async move {
            match api.signup(&username, &email, &password).await {
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
                <h1>"Create your account."</h1>
                <p class="auth-hint">"Free while in beta. No credit card required."</p>

                <form class="auth-form" on:submit=submit>
                    <label class="field-label">"Username"</label>
                    <input
                        type="text"
                        placeholder="yourname"
                        prop:value=move || username.get()
                        on:input=move |ev| set_username.set(event_target_value(&ev))
                    />
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
                        placeholder="At least 8 characters"
                        prop:value=move || password.get()
                        on:input=move |ev| set_password.set(event_target_value(&ev))
                    />

                    {move || error.get().map(|message| view! {
                        <div class="auth-error">{message}</div>
                    })}

                    <button type="submit" class="btn-primary" disabled=move || submitting.get()>
                        {move || if submitting.get() { "Creating account..." } else { "Sign Up" }}
                    </button>
                </form>

                <p class="auth-switch">
                    "Already have an account? "
                    <A href="/login">"Sign in"</A>
                </p>
            </div>
        </div>
    }
}
