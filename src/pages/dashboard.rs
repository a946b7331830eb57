//! Dashboard Page
//!
//! Aggregate stats and upcoming milestones, all server-derived, plus
//! the full project list for jumping straight into a project.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::components::{ProjectStatusBadge, Spinner};
use crate::queries::{use_all_projects, use_dashboard};

#[component]
pub fn Dashboard() -> impl IntoView {
    let dashboard = use_dashboard();
    let projects = use_all_projects();

    view! {
        <div class="page">
            <h1 class="page-title">"Dashboard"</h1>

            <Show when=move || dashboard.loading.get()>
                <Spinner/>
            </Show>

            {move || dashboard.error.get().map(|message| view! {
                <div class="page-error">{message}</div>
            })}

            {move || dashboard.summary.get().map(|summary| view! {
                <div class="stat-grid">
                    <div class="stat-card">
                        <span class="stat-value">{summary.client_count}</span>
                        <span class="stat-label">"Clients"</span>
                    </div>
                    <div class="stat-card">
                        <span class="stat-value">{summary.active_project_count}</span>
                        <span class="stat-label">"Active Projects"</span>
                    </div>
                    <div class="stat-card">
                        <span class="stat-value">{summary.pending_deliverable_count}</span>
                        <span class="stat-label">"Pending Deliverables"</span>
                    </div>
                    <div class="stat-card stat-warning">
                        <span class="stat-value">{summary.overdue_deliverable_count}</span>
                        <span class="stat-label">"Overdue"</span>
                    </div>
                </div>

                <section class="milestones">
                    <h2>"Upcoming Milestones"</h2>
                    {if summary.upcoming_milestones.is_empty() {
                        view! { <p class="empty-hint">"Nothing due soon."</p> }.into_any()
                    } else {
                        view! {
                            <ul class="milestone-list">
                                {summary.upcoming_milestones.iter().map(|m| view! {
                                    <li class="milestone-row">
                                        <span class="milestone-title">{m.title.clone()}</span>
                                        {m.project_title.clone().map(|p| view! {
                                            <span class="milestone-project">{p}</span>
                                        })}
                                        <span class="milestone-due">
                                            {m.due_date.clone().unwrap_or_else(|| "No date".to_string())}
                                        </span>
                                    </li>
                                }).collect_view()}
                            </ul>
                        }.into_any()
                    }}
                </section>
            })}

            <section class="projects-overview">
                <h2>"Projects"</h2>

                <Show when=move || projects.loading.get()>
                    <Spinner/>
                </Show>

                {move || projects.error.get().map(|message| view! {
                    <div class="page-error">{message}</div>
                })}

                <Show when=move || !projects.loading.get() && projects.projects.with(Vec::is_empty)>
                    <p class="empty-hint">"No projects yet. Create one from a client page."</p>
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
                            </li>
                        }
                    }).collect_view()}
                </ul>
            </section>
        </div>
    }
}
