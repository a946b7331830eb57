//! Client Detail Page
//!
//! Client info plus the client's projects.

use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_params_map;

use crate::components::{DeleteConfirmButton, ProjectModal, ProjectStatusBadge, Spinner};
use crate::queries::{use_client, use_projects};

#[component]
pub fn ClientDetail() -> impl IntoView {
    let params = use_params_map();
    let client_id = Memo::new(move |_| {
        params
            .read()
            .get("id")
            .and_then(|raw| raw.parse::<u32>().ok())
    });

    let client = use_client(client_id);
    let projects = use_projects(client_id);

    let (show_create, set_show_create) = signal(false);

    view! {
        <div class="page">
            <Show when=move || client.loading.get()>
                <Spinner/>
            </Show>

            <Show when=move || client.not_found.get()>
                <div class="not-found">
                    <h1>"Client not found"</h1>
                    <A href="/clients">"Back to clients"</A>
                </div>
            </Show>

            {move || client.error.get().map(|message| view! {
                <div class="page-error">{message}</div>
            })}

            {move || client.client.get().map(|client| view! {
                <div class="page-header">
                    <div>
                        <h1 class="page-title">{client.name.clone()}</h1>
                        <p class="page-subtitle">
                            {client.email.clone()}
                            {client.company.clone().map(|company| format!(" · {company}"))}
                        </p>
                    </div>
                    <button class="btn-primary" on:click=move |_| set_show_create.set(true)>
                        "New Project"
                    </button>
                </div>
            })}

            <section class="projects-section">
                <h2>"Projects"</h2>

                <Show when=move || projects.loading.get()>
                    <Spinner/>
                </Show>

                <Show when=move || !projects.loading.get() && projects.projects.with(Vec::is_empty)>
                    <p class="empty-hint">"No projects for this client yet."</p>
                </Show>

                <ul class="entity-list">
                    {move || projects.projects.get().into_iter().map(|project| {
                        let id = project.id;
                        view! {
                            <li class="entity-row">
                                <A href=format!("/projects/{id}")>
                                    <span class="entity-name">{project.title.clone()}</span>
                                </A>
                                <ProjectStatusBadge status=project.status/>
                                <span class="entity-meta">
                                    {format!("{:.0}%", project.progress_percentage)}
                                </span>
                                <span class="entity-meta">
                                    {project.deadline.clone().unwrap_or_default()}
                                </span>
                                <DeleteConfirmButton
                                    button_class="delete-btn"
                                    on_confirm=move |_| projects.delete(id)
                                />
                            </li>
                        }
                    }).collect_view()}
                </ul>
            </section>

            {move || {
                if !show_create.get() {
                    return None;
                }
                client_id.get().map(|client_id| view! {
                    <ProjectModal
                        client_id=client_id
                        on_save=move |payload| {
                            projects.create(payload);
                            set_show_create.set(false);
                        }
                        on_close=move |_| set_show_create.set(false)
                    />
                })
            }}
        </div>
    }
}
