//! Project Detail Page
//!
//! Project info with progress and status control, the deliverable list,
//! and the AI scope agent panel.

use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_params_map;

use crate::components::{
    DeleteConfirmButton, DeliverableForm, DeliverableStatusBadge, ProjectStatusBadge, ScopeAgent,
    Spinner,
};
use crate::models::{DeliverablePayload, DeliverableStatus, ProjectStatus};
use crate::queries::{use_deliverables, use_project};

#[component]
pub fn ProjectDetail() -> impl IntoView {
    let params = use_params_map();
    let project_id = Memo::new(move |_| {
        params
            .read()
            .get("id")
            .and_then(|raw| raw.parse::<u32>().ok())
    });

    let project = use_project(project_id);
    let deliverables = use_deliverables(project_id);

    let approve_plan = move |suggested: Vec<crate::models::ScopeDeliverable>| {
        for item in suggested {
            deliverables.create_with(
                DeliverablePayload {
                    title: item.title,
                    description: item.description,
                    due_date: None,
                },
                "Deliverable added from scope plan.",
            );
        }
    };

    view! {
        <div class="page">
            <Show when=move || project.loading.get()>
                <Spinner/>
            </Show>

            <Show when=move || project.not_found.get()>
                <div class="not-found">
                    <h1>"Project not found"</h1>
                    <A href="/dashboard">"Back to dashboard"</A>
                </div>
            </Show>

            {move || project.error.get().map(|message| view! {
                <div class="page-error">{message}</div>
            })}

            {move || project.project.get().map(|current| {
                let status = current.status;
                view! {
                    <div class="page-header">
                        <div>
                            <h1 class="page-title">{current.title.clone()}</h1>
                            {current.description.clone().map(|description| view! {
                                <p class="page-subtitle">{description}</p>
                            })}
                            {current.deadline.clone().map(|deadline| view! {
                                <p class="page-subtitle">{format!("Deadline: {deadline}")}</p>
                            })}
                        </div>
                        <div class="project-status-controls">
                            <ProjectStatusBadge status=status/>
                            <select
                                prop:value=status.as_str()
                                on:change=move |ev| {
                                    if let Some(next) = ProjectStatus::parse(&event_target_value(&ev)) {
                                        if next != status {
                                            project.transition_status(next);
                                        }
                                    }
                                }
                            >
                                {ProjectStatus::ALL.iter().map(|option| view! {
                                    <option value=option.as_str() selected={*option == status}>
                                        {option.label()}
                                    </option>
                                }).collect_view()}
                            </select>
                        </div>
                    </div>

                    <div class="progress-track">
                        <div
                            class="progress-fill"
                            style=format!("width: {:.0}%", current.progress_percentage)
                        ></div>
                        <span class="progress-label">
                            {format!("{:.0}% complete", current.progress_percentage)}
                        </span>
                    </div>
                }
            })}

            <section class="deliverables-section">
                <h2>"Deliverables"</h2>

                <DeliverableForm on_create=move |payload| deliverables.create(payload)/>

                <Show when=move || deliverables.loading.get()>
                    <Spinner/>
                </Show>

                {move || deliverables.error.get().map(|message| view! {
                    <div class="page-error">{message}</div>
                })}

                <Show when=move || {
                    !deliverables.loading.get() && deliverables.deliverables.with(Vec::is_empty)
                }>
                    <p class="empty-hint">"No deliverables yet. Add one or use the scope agent."</p>
                </Show>

                <ul class="entity-list">
                    {move || deliverables.deliverables.get().into_iter().map(|deliverable| {
                        let id = deliverable.id;
                        let status = deliverable.status;
                        view! {
                            <li class="entity-row">
                                <span class="entity-name">{deliverable.title.clone()}</span>
                                <span class="entity-meta">
                                    {deliverable.due_date.clone().unwrap_or_default()}
                                </span>
                                <DeliverableStatusBadge status=status/>
                                <select
                                    prop:value=status.as_str()
                                    on:change=move |ev| {
                                        if let Some(next) =
                                            DeliverableStatus::parse(&event_target_value(&ev))
                                        {
                                            if next != status {
                                                deliverables.set_status(id, next);
                                            }
                                        }
                                    }
                                >
                                    {DeliverableStatus::ALL.iter().map(|option| view! {
                                        <option value=option.as_str() selected={*option == status}>
                                            {option.label()}
                                        </option>
                                    }).collect_view()}
                                </select>
                                <DeleteConfirmButton
                                    button_class="delete-btn"
                                    on_confirm=move |_| deliverables.delete(id)
                                />
                            </li>
                        }
                    }).collect_view()}
                </ul>
            </section>

            <ScopeAgent on_approve=approve_plan/>
        </div>
    }
}
