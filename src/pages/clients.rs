//! Clients Page
//!
//! Client list with create, edit, and inline delete confirmation.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::components::{ClientModal, DeleteConfirmButton, Spinner};
use crate::models::Client;
use crate::queries::use_clients;

#[component]
pub fn Clients() -> impl IntoView {
    let clients = use_clients();

    let (show_create, set_show_create) = signal(false);
    let (editing, set_editing) = signal(None::<Client>);

    view! {
        <div class="page">
            <div class="page-header">
                <h1 class="page-title">"Clients"</h1>
                <button class="btn-primary" on:click=move |_| set_show_create.set(true)>
                    "Add Client"
                </button>
            </div>

            <Show when=move || clients.loading.get()>
                <Spinner/>
            </Show>

            {move || clients.error.get().map(|message| view! {
                <div class="page-error">{message}</div>
            })}

            <Show when=move || !clients.loading.get() && clients.clients.with(Vec::is_empty)>
                <p class="empty-hint">"No clients yet. Add your first one."</p>
            </Show>

            <ul class="entity-list">
                {move || clients.clients.get().into_iter().map(|client| {
                    let id = client.id;
                    let edit_target = client.clone();
                    view! {
                        <li class="entity-row">
                            <A href=format!("/clients/{id}")>
                                <span class="entity-name">{client.name.clone()}</span>
                            </A>
                            <span class="entity-meta">{client.email.clone()}</span>
                            <span class="entity-meta">
                                {client.company.clone().unwrap_or_default()}
                            </span>
                            <button
                                class="btn-ghost"
                                on:click=move |_| set_editing.set(Some(edit_target.clone()))
                            >
                                "Edit"
                            </button>
                            <DeleteConfirmButton
                                button_class="delete-btn"
                                on_confirm=move |_| clients.delete(id)
                            />
                        </li>
                    }
                }).collect_view()}
            </ul>

            <Show when=move || show_create.get()>
                <ClientModal
                    on_save=move |payload| {
                        clients.create(payload);
                        set_show_create.set(false);
                    }
                    on_close=move |_| set_show_create.set(false)
                />
            </Show>

            {move || editing.get().map(|client| {
                let id = client.id;
                view! {
                    <ClientModal
                        client=client
                        on_save=move |payload| {
                            clients.update(id, payload);
                            set_editing.set(None);
                        }
                        on_close=move |_| set_editing.set(None)
                    />
                }
            })}
        </div>
    }
}
