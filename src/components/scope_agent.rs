//! AI Scope Agent Component
//!
//! Submits free-text client requirements to the scope endpoint and
//! renders the structured plan for review. Nothing is created until the
//! user explicitly approves; approval hands the deliverable pairs to the
//! owning page.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::use_api;
use crate::models::{ScopeDeliverable, ScopePlan};

#[component]
pub fn ScopeAgent(#[prop(into)] on_approve: Callback<Vec<ScopeDeliverable>>) -> impl IntoView {
    let api = use_api();

    let (raw_text, set_raw_text) = signal(String::new());
    let (plan, set_plan) = signal(None::<ScopePlan>);
    let (loading, set_loading) = signal(false);
    let (error, set_error) = signal(None::<String>);
    let (approved, set_approved) = signal(false);

    let can_generate = move || !loading.get() && !raw_text.get().trim().is_empty();

    let generate = move |_| {
        let text = raw_text.get();
        // Empty input performs no request.
        if text.trim().is_empty() {
            return;
        }
        set_loading.set(true);
        set_error.set(None);
        set_plan.set(None);
        set_approved.set(false);
        let api = api.clone();
        spawn_local(async move {
            match api.structure_scope(&text).await {
                Ok(result) => set_plan.set(Some(result)),
                Err(err) => set_error.set(Some(err.to_string())),
            }
            set_loading.set(false);
        });
    };

    let approve = move |_| {
        let Some(result) = plan.get() else {
            return;
        };
        on_approve.run(result.deliverables);
        set_approved.set(true);
        set_raw_text.set(String::new());
        set_plan.set(None);
    };

    view! {
        <section class="scope-agent">
            <h2 class="scope-agent-title">"AI Scope Agent"</h2>
            <p class="scope-agent-hint">
                "Paste the raw requirements from your client. The agent will structure them into deliverables for review."
            </p>

            <textarea
                rows=5
                placeholder="Paste client requirements here..."
                prop:value=move || raw_text.get()
                on:input=move |ev| set_raw_text.set(event_target_value(&ev))
            ></textarea>

            <button class="btn-primary" disabled=move || !can_generate() on:click=generate>
                {move || if loading.get() { "Agent working..." } else { "Generate Plan" }}
            </button>

            {move || error.get().map(|message| view! {
                <div class="scope-error">{message}</div>
            })}

            <Show when=move || approved.get()>
                <div class="scope-approved">"Deliverables added successfully"</div>
            </Show>

            {move || plan.get().map(|result| {
                let count = result.deliverables.len();
                view! {
                    <div class="scope-result">
                        <h3>{format!("Structured Deliverables ({count})")}</h3>
                        <ul class="scope-deliverables">
                            {result.deliverables.iter().map(|d| view! {
                                <li>
                                    <span class="scope-deliverable-title">{d.title.clone()}</span>
                                    {d.description.clone().map(|desc| view! {
                                        <span class="scope-deliverable-desc">{desc}</span>
                                    })}
                                </li>
                            }).collect_view()}
                        </ul>

                        <Show when={
                            let has = !result.ambiguities.is_empty();
                            move || has
                        }>
                            <h3 class="scope-ambiguities-title">"Ambiguities"</h3>
                        </Show>
                        <ul class="scope-ambiguities">
                            {result.ambiguities.iter().map(|a| view! {
                                <li>{a.clone()}</li>
                            }).collect_view()}
                        </ul>

                        <Show when={
                            let has = !result.suggested_questions.is_empty();
                            move || has
                        }>
                            <h3 class="scope-questions-title">"Questions for Client"</h3>
                        </Show>
                        <ul class="scope-questions">
                            {result.suggested_questions.iter().map(|q| view! {
                                <li>{q.clone()}</li>
                            }).collect_view()}
                        </ul>

                        <button class="btn-approve" on:click=approve>
                            "Approve & Add to Deliverables"
                        </button>
                    </div>
                }
            })}
        </section>
    }
}
