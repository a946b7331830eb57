//! Project Query Hooks

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::{use_api, ApiClient};
use crate::cache::{use_query_cache, Mutation, QueryCache, QueryKey};
use crate::models::{Project, ProjectPayload, ProjectStatus};
use crate::notify::{use_toasts, Toasts};

/// Projects scoped to one client, plus create/delete actions.
#[derive(Clone, Copy)]
pub struct ProjectsQuery {
    pub projects: ReadSignal<Vec<Project>>,
    pub loading: ReadSignal<bool>,
    pub error: ReadSignal<Option<String>>,
    client_id: Memo<Option<u32>>,
    api: StoredValue<ApiClient, LocalStorage>,
    cache: QueryCache,
    toasts: Toasts,
}

pub fn use_projects(client_id: Memo<Option<u32>>) -> ProjectsQuery {
    let api = use_api();
    let cache = use_query_cache();
    let toasts = use_toasts();

    let (projects, set_projects) = signal(Vec::<Project>::new());
    let (loading, set_loading) = signal(true);
    let (error, set_error) = signal(None::<String>);

    {
        let api = api.clone();
        Effect::new(move |_| {
            let Some(client_id) = client_id.get() else {
                set_loading.set(false);
                return;
            };
            let _ = cache.version(QueryKey::ClientProjects(client_id));
            let api = api.clone();
            set_loading.set(true);
            spawn_local(async move {
                match api.list_client_projects(client_id).await {
                    Ok(list) => {
                        set_projects.set(list);
                        set_error.set(None);
                    }
                    Err(err) => set_error.set(Some(err.to_string())),
                }
                set_loading.set(false);
            });
        });
    }

    ProjectsQuery {
        projects,
        loading,
        error,
        client_id,
        api: StoredValue::new_local(api),
        cache,
        toasts,
    }
}

impl ProjectsQuery {
    pub fn create(&self, payload: ProjectPayload) {
        let api = self.api.get_value();
        let cache = self.cache;
        let toasts = self.toasts;
        let client_id = payload.client_id;
        spawn_local(async move {
            match api.create_project(&payload).await {
                Ok(_) => {
                    cache.invalidate(&Mutation::ProjectCreated { client_id });
                    toasts.success("Project created.");
                }
                Err(err) => toasts.error(err.to_string()),
            }
        });
    }

    pub fn delete(&self, id: u32) {
        let Some(client_id) = self.client_id.get_untracked() else {
            return;
        };
        let api = self.api.get_value();
        let cache = self.cache;
        let toasts = self.toasts;
        spawn_local(async move {
            match api.delete_project(id).await {
                Ok(()) => {
                    cache.invalidate(&Mutation::ProjectDeleted { id, client_id });
                    toasts.success("Project deleted.");
                }
                Err(err) => toasts.error(err.to_string()),
            }
        });
    }
}

/// Read-only global project list.
#[derive(Clone, Copy)]
pub struct AllProjectsQuery {
    pub projects: ReadSignal<Vec<Project>>,
    pub loading: ReadSignal<bool>,
    pub error: ReadSignal<Option<String>>,
}

pub fn use_all_projects() -> AllProjectsQuery {
    let api = use_api();
    let cache = use_query_cache();

    let (projects, set_projects) = signal(Vec::<Project>::new());
    let (loading, set_loading) = signal(true);
    let (error, set_error) = signal(None::<String>);

    Effect::new(move |_| {
        let _ = cache.version(QueryKey::AllProjects);
        let api = api.clone();
        set_loading.set(true);
        spawn_local(async move {
            match api.list_projects().await {
                Ok(list) => {
                    set_projects.set(list);
                    set_error.set(None);
                }
                Err(err) => set_error.set(Some(err.to_string())),
            }
            set_loading.set(false);
        });
    });

    AllProjectsQuery {
        projects,
        loading,
        error,
    }
}

/// Single project detail plus status transitions and updates.
///
/// The project detail refetches when its own key is invalidated, which
/// includes every deliverable mutation underneath it (progress is
/// server-derived).
#[derive(Clone, Copy)]
pub struct ProjectQuery {
    pub project: ReadSignal<Option<Project>>,
    pub loading: ReadSignal<bool>,
    pub not_found: ReadSignal<bool>,
    pub error: ReadSignal<Option<String>>,
    api: StoredValue<ApiClient, LocalStorage>,
    cache: QueryCache,
    toasts: Toasts,
}

pub fn use_project(id: Memo<Option<u32>>) -> ProjectQuery {
    let api = use_api();
    let cache = use_query_cache();
    let toasts = use_toasts();

    let (project, set_project) = signal(None::<Project>);
    let (loading, set_loading) = signal(true);
    let (not_found, set_not_found) = signal(false);
    let (error, set_error) = signal(None::<String>);

    {
        let api = api.clone();
        Effect::new(move |_| {
            let Some(id) = id.get() else {
                set_loading.set(false);
                return;
            };
            let _ = cache.version(QueryKey::Project(id));
            let api = api.clone();
            set_loading.set(true);
            spawn_local(async move {
                match api.get_project(id).await {
                    Ok(found) => {
                        set_project.set(Some(found));
                        set_not_found.set(false);
                        set_error.set(None);
                    }
                    Err(err) if err.is_not_found() => {
                        set_project.set(None);
                        set_not_found.set(true);
                    }
                    Err(err) => set_error.set(Some(err.to_string())),
                }
                set_loading.set(false);
            });
        });
    }

    ProjectQuery {
        project,
        loading,
        not_found,
        error,
        api: StoredValue::new_local(api),
        cache,
        toasts,
    }
}

impl ProjectQuery {
    pub fn transition_status(&self, status: ProjectStatus) {
        let Some(current) = self.project.get_untracked() else {
            return;
        };
        let api = self.api.get_value();
        let cache = self.cache;
        let toasts = self.toasts;
        spawn_local(async move {
            match api.transition_project_status(current.id, status).await {
                Ok(_) => {
                    cache.invalidate(&Mutation::ProjectStatusChanged {
                        id: current.id,
                        client_id: current.client_id,
                    });
                    toasts.success("Status updated.");
                }
                Err(err) => toasts.error(err.to_string()),
            }
        });
    }

    pub fn update(&self, payload: ProjectPayload) {
        let Some(current) = self.project.get_untracked() else {
            return;
        };
        let api = self.api.get_value();
        let cache = self.cache;
        let toasts = self.toasts;
        spawn_local(async move {
            match api.update_project(current.id, &payload).await {
                Ok(_) => {
                    cache.invalidate(&Mutation::ProjectUpdated {
                        id: current.id,
                        client_id: current.client_id,
                    });
                    toasts.success("Project updated.");
                }
                Err(err) => toasts.error(err.to_string()),
            }
        });
    }
}
