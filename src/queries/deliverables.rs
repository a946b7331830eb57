//! Deliverable Query Hooks

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::{use_api, ApiClient};
use crate::cache::{use_query_cache, Mutation, QueryCache, QueryKey};
use crate::models::{Deliverable, DeliverablePayload, DeliverableStatus};
use crate::notify::{use_toasts, Toasts};

/// Deliverables scoped to one project, plus mutation actions.
///
/// Every mutation invalidates the owning project detail too, since the
/// project's progress percentage is derived from deliverable counts.
#[derive(Clone, Copy)]
pub struct DeliverablesQuery {
    pub deliverables: ReadSignal<Vec<Deliverable>>,
    pub loading: ReadSignal<bool>,
    pub error: ReadSignal<Option<String>>,
    project_id: Memo<Option<u32>>,
    api: StoredValue<ApiClient, LocalStorage>,
    cache: QueryCache,
    toasts: Toasts,
}

pub fn use_deliverables(project_id: Memo<Option<u32>>) -> DeliverablesQuery {
    let api = use_api();
    let cache = use_query_cache();
    let toasts = use_toasts();

    let (deliverables, set_deliverables) = signal(Vec::<Deliverable>::new());
    let (loading, set_loading) = signal(true);
    let (error, set_error) = signal(None::<String>);

    {
        let api = api.clone();
        Effect::new(move |_| {
            let Some(project_id) = project_id.get() else {
                set_loading.set(false);
                return;
            };
            let _ = cache.version(QueryKey::Deliverables(project_id));
            let api = api.clone();
            set_loading.set(true);
            spawn_local(async move {
                match api.list_project_deliverables(project_id).await {
                    Ok(list) => {
                        set_deliverables.set(list);
                        set_error.set(None);
                    }
                    Err(err) => set_error.set(Some(err.to_string())),
                }
                set_loading.set(false);
            });
        });
    }

    DeliverablesQuery {
        deliverables,
        loading,
        error,
        project_id,
        api: StoredValue::new_local(api),
        cache,
        toasts,
    }
}

impl DeliverablesQuery {
    pub fn create(&self, payload: DeliverablePayload) {
        self.create_with(payload, "Deliverable created.");
    }

    /// Create with a custom success message (used by the scope agent
    /// approval flow).
    pub fn create_with(&self, payload: DeliverablePayload, success_message: &'static str) {
        let Some(project_id) = self.project_id.get_untracked() else {
            return;
        };
        let api = self.api.get_value();
        let cache = self.cache;
        let toasts = self.toasts;
        spawn_local(async move {
            match api.create_deliverable(project_id, &payload).await {
                Ok(_) => {
                    cache.invalidate(&Mutation::DeliverableCreated { project_id });
                    toasts.success(success_message);
                }
                Err(err) => toasts.error(err.to_string()),
            }
        });
    }

    pub fn set_status(&self, id: u32, status: DeliverableStatus) {
        let Some(project_id) = self.project_id.get_untracked() else {
            return;
        };
        let api = self.api.get_value();
        let cache = self.cache;
        let toasts = self.toasts;
        spawn_local(async move {
            match api.update_deliverable_status(id, status).await {
                Ok(_) => {
                    cache.invalidate(&Mutation::DeliverableStatusChanged { project_id });
                    toasts.success("Status updated.");
                }
                Err(err) => toasts.error(err.to_string()),
            }
        });
    }

    pub fn delete(&self, id: u32) {
        let Some(project_id) = self.project_id.get_untracked() else {
            return;
        };
        let api = self.api.get_value();
        let cache = self.cache;
        let toasts = self.toasts;
        spawn_local(async move {
            match api.delete_deliverable(id).await {
                Ok(()) => {
                    cache.invalidate(&Mutation::DeliverableDeleted { project_id });
                    toasts.success("Deliverable deleted.");
                }
                Err(err) => toasts.error(err.to_string()),
            }
        });
    }
}
