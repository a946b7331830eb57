//! Client Query Hooks

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::{use_api, ApiClient};
use crate::cache::{use_query_cache, Mutation, QueryCache, QueryKey};
use crate::models::{Client, ClientPayload};
use crate::notify::{use_toasts, Toasts};

/// Client list plus create/update/delete actions.
#[derive(Clone, Copy)]
pub struct ClientsQuery {
    pub clients: ReadSignal<Vec<Client>>,
    pub loading: ReadSignal<bool>,
    pub error: ReadSignal<Option<String>>,
    api: StoredValue<ApiClient, LocalStorage>,
    cache: QueryCache,
    toasts: Toasts,
}

pub fn use_clients() -> ClientsQuery {
    let api = use_api();
    let cache = use_query_cache();
    let toasts = use_toasts();

    let (clients, set_clients) = signal(Vec::<Client>::new());
    let (loading, set_loading) = signal(true);
    let (error, set_error) = signal(None::<String>);

    {
        let api = api.clone();
        Effect::new(move |_| {
            // Rerun whenever the client list is invalidated.
            let _ = cache.version(QueryKey::Clients);
            let api = api.clone();
            set_loading.set(true);
            spawn_local(async move {
                match api.list_clients().await {
                    Ok(list) => {
                        set_clients.set(list);
                        set_error.set(None);
                    }
                    Err(err) => set_error.set(Some(err.to_string())),
                }
                set_loading.set(false);
            });
        });
    }

    ClientsQuery {
        clients,
        loading,
        error,
        api: StoredValue::new_local(api),
        cache,
        toasts,
    }
}

impl ClientsQuery {
    pub fn create(&self, payload: ClientPayload) {
        let api = self.api.get_value();
        let cache = self.cache;
        let toasts = self.toasts;
        spawn_local(async move {
            match api.create_client(&payload).await {
                Ok(_) => {
                    cache.invalidate(&Mutation::ClientCreated);
                    toasts.success("Client added.");
                }
                Err(err) => toasts.error(err.to_string()),
            }
        });
    }

    pub fn update(&self, id: u32, payload: ClientPayload) {
        let api = self.api.get_value();
        let cache = self.cache;
        let toasts = self.toasts;
        spawn_local(async move {
            match api.update_client(id, &payload).await {
                Ok(_) => {
                    cache.invalidate(&Mutation::ClientUpdated { id });
                    toasts.success("Client updated.");
                }
                Err(err) => toasts.error(err.to_string()),
            }
        });
    }

    pub fn delete(&self, id: u32) {
        let api = self.api.get_value();
        let cache = self.cache;
        let toasts = self.toasts;
        spawn_local(async move {
            match api.delete_client(id).await {
                Ok(()) => {
                    cache.invalidate(&Mutation::ClientDeleted { id });
                    toasts.success("Client removed.");
                }
                Err(err) => toasts.error(err.to_string()),
            }
        });
    }
}

/// Single client detail. Not-found is a distinct state from loading.
#[derive(Clone, Copy)]
pub struct ClientQuery {
    pub client: ReadSignal<Option<Client>>,
    pub loading: ReadSignal<bool>,
    pub not_found: ReadSignal<bool>,
    pub error: ReadSignal<Option<String>>,
}

pub fn use_client(id: Memo<Option<u32>>) -> ClientQuery {
    let api = use_api();
    let cache = use_query_cache();

    let (client, set_client) = signal(None::<Client>);
    let (loading, set_loading) = signal(true);
    let (not_found, set_not_found) = signal(false);
    let (error, set_error) = signal(None::<String>);

    Effect::new(move |_| {
        // Only fetch once the route parameter is present.
        let Some(id) = id.get() else {
            set_loading.set(false);
            return;
        };
        let _ = cache.version(QueryKey::Client(id));
        let api = api.clone();
        set_loading.set(true);
        spawn_local(async move {
            match api.get_client(id).await {
                Ok(found) => {
                    set_client.set(Some(found));
                    set_not_found.set(false);
                    set_error.set(None);
                }
                Err(err) if err.is_not_found() => {
                    set_client.set(None);
                    set_not_found.set(true);
                }
                Err(err) => set_error.set(Some(err.to_string())),
            }
            set_loading.set(false);
        });
    });

    ClientQuery {
        client,
        loading,
        not_found,
        error,
    }
}
