//! Dashboard Query Hook
//!
//! The summary is recomputed server-side on each fetch, so the hook
//! simply refetches on every mount and has no invalidation entry.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::use_api;
use crate::models::DashboardSummary;

#[derive(Clone, Copy)]
pub struct DashboardQuery {
    pub summary: ReadSignal<Option<DashboardSummary>>,
    pub loading: ReadSignal<bool>,
    pub error: ReadSignal<Option<String>>,
}

pub fn use_dashboard() -> DashboardQuery {
    let api = use_api();

    let (summary, set_summary) = signal(None::<DashboardSummary>);
    let (loading, set_loading) = signal(true);
    let (error, set_error) = signal(None::<String>);

    Effect::new(move |_| {
        let api = api.clone();
        spawn_local(async move {
            match api.get_dashboard_summary().await {
                Ok(stats) => {
                    set_summary.set(Some(stats));
                    set_error.set(None);
                }
                Err(err) => set_error.set(Some(err.to_string())),
            }
            set_loading.set(false);
        });
    });

    DashboardQuery {
        summary,
        loading,
        error,
    }
}
