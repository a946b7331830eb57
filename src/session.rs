//! Session State
//!
//! The bearer token is the only persisted client state. It lives in
//! browser localStorage under a fixed key and is mirrored into a
//! reactive store so route guards re-render when it changes.

use leptos::prelude::*;
use reactive_stores::Store;

/// localStorage key holding the bearer token.
pub const TOKEN_KEY: &str = "access_token";

/// Reactive session state, mirrored from localStorage.
#[derive(Clone, Debug, Default, Store)]
pub struct Session {
    pub token: Option<String>,
}

pub type SessionStore = Store<Session>;

/// Get the session store from context
pub fn use_session() -> SessionStore {
    expect_context::<SessionStore>()
}

/// Build the session store, seeding the token from localStorage.
pub fn init_session() -> SessionStore {
    Store::new(Session {
        token: read_stored_token(),
    })
}

fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok().flatten()
}

/// Read the persisted token, if any.
pub fn read_stored_token() -> Option<String> {
    local_storage()?.get_item(TOKEN_KEY).ok().flatten()
}

/// Persist a freshly issued token (login/signup success).
pub fn store_token(session: &SessionStore, token: &str) {
    if let Some(storage) = local_storage() {
        let _ = storage.set_item(TOKEN_KEY, token);
    }
    session.token().set(Some(token.to_string()));
}

/// Drop the credential (logout, or a 401 from any call).
pub fn clear_token(session: &SessionStore) {
    if let Some(storage) = local_storage() {
        let _ = storage.remove_item(TOKEN_KEY);
    }
    session.token().set(None);
}
