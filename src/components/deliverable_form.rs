//! Deliverable Form Component
//!
//! Inline form for adding a deliverable to the current project.

use leptos::prelude::*;

use crate::models::DeliverablePayload;

#[component]
pub fn DeliverableForm(#[prop(into)] on_create: Callback<DeliverablePayload>) -> impl IntoView {
    let (title, set_title) = signal(String::new());
    let (due_date, set_due_date) = signal(String::new());

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let title = title.get();
        if title.trim().is_empty() {
            return;
        }
        let due_date = due_date.get();
        on_create.run(DeliverablePayload {
            title,
            description: None,
            due_date: if due_date.is_empty() {
                None
            } else {
                Some(due_date)
            },
        });
        set_title.set(String::new());
        set_due_date.set(String::new());
    };

    view! {
        <form class="deliverable-form" on:submit=submit>
            <input
                type="text"
                placeholder="Add a deliverable..."
                prop:value=move || title.get()
                on:input=move |ev| set_title.set(event_target_value(&ev))
            />
            <input
                type="date"
                prop:value=move || due_date.get()
                on:input=move |ev| set_due_date.set(event_target_value(&ev))
            />
            <button type="submit" class="btn-primary">"Add"</button>
        </form>
    }
}
