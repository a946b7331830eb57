//! Client Modal Component
//!
//! Create/edit form for a client. Required-field presence is the only
//! validation done client-side; everything else is the backend's call.

use leptos::prelude::*;

use crate::models::{Client, ClientPayload};

#[component]
pub fn ClientModal(
    /// Existing client when editing, None when creating.
    #[prop(optional, into)]
    client: Option<Client>,
    #[prop(into)] on_save: Callback<ClientPayload>,
    #[prop(into)] on_close: Callback<()>,
) -> impl IntoView {
    let editing = client.is_some();
    let (name, set_name) = signal(client.as_ref().map(|c| c.name.clone()).unwrap_or_default());
    let (email, set_email) = signal(client.as_ref().map(|c| c.email.clone()).unwrap_or_default());
    let (company, set_company) = signal(
        client
            .as_ref()
            .and_then(|c| c.company.clone())
            .unwrap_or_default(),
    );

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let name = name.get();
        let email = email.get();
        if name.trim().is_empty() || email.trim().is_empty() {
            return;
        }
        let company = company.get();
        on_save.run(ClientPayload {
            name,
            email,
            company: if company.trim().is_empty() {
                None
            } else {
                Some(company)
            },
        });
    };

    view! {
        <div class="modal-overlay" on:click=move |_| on_close.run(())>
            <div class="modal" on:click=|ev| ev.stop_propagation()>
                <h2 class="modal-title">
                    {if editing { "Edit Client" } else { "New Client" }}
                </h2>
                <form class="modal-form" on:submit=submit>
                    <label class="field-label">"Name"</label>
                    <input
                        type="text"
                        placeholder="Client name"
                        prop:value=move || name.get()
                        on:input=move |ev| set_name.set(event_target_value(&ev))
                    />
                    <label class="field-label">"Email"</label>
                    <input
                        type="email"
                        placeholder="name@example.com"
                        prop:value=move || email.get()
                        on:input=move |ev| set_email.set(event_target_value(&ev))
                    />
                    <label class="field-label">"Company (optional)"</label>
                    <input
                        type="text"
                        placeholder="Company"
                        prop:value=move || company.get()
                        on:input=move |ev| set_company.set(event_target_value(&ev))
                    />
                    <div class="modal-actions">
                        <button type="button" class="btn-secondary" on:click=move |_| on_close.run(())>
                            "Cancel"
                        </button>
                        <button type="submit" class="btn-primary">
                            {if editing { "Save Changes" } else { "Add Client" }}
                        </button>
                    </div>
                </form>
            </div>
        </div>
    }
}
