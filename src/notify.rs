//! Toast Notifications
//!
//! Every mutation reports success or failure here; nothing throws past
//! the query layer. Toasts auto-dismiss after a few seconds.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

const DISMISS_AFTER_MS: u32 = 4_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    pub id: u32,
    pub kind: ToastKind,
    pub message: String,
}

/// Toast queue, provided app-wide via context.
#[derive(Clone, Copy)]
pub struct Toasts {
    entries: RwSignal<Vec<Toast>>,
    next_id: RwSignal<u32>,
}

/// Get the toast queue from context
pub fn use_toasts() -> Toasts {
    expect_context::<Toasts>()
}

impl Toasts {
    pub fn new() -> Self {
        Self {
            entries: RwSignal::new(Vec::new()),
            next_id: RwSignal::new(0),
        }
    }

    pub fn success(&self, message: impl Into<String>) {
        self.push(ToastKind::Success, message.into());
    }

    pub fn error(&self, message: impl Into<String>) {
        let message = message.into();
        web_sys::console::error_1(&format!("[TOAST] {message}").into());
        self.push(ToastKind::Error, message);
    }

    fn push(&self, kind: ToastKind, message: String) {
        let id = self.next_id.get_untracked();
        self.next_id.set(id + 1);
        self.entries.update(|entries| {
            entries.push(Toast { id, kind, message });
        });

        let entries = self.entries;
        spawn_local(async move {
            TimeoutFuture::new(DISMISS_AFTER_MS).await;
            entries.update(|entries| entries.retain(|toast| toast.id != id));
        });
    }

    pub fn dismiss(&self, id: u32) {
        self.entries.update(|entries| entries.retain(|toast| toast.id != id));
    }
}

impl Default for Toasts {
    fn default() -> Self {
        Self::new()
    }
}

/// Fixed-position toast stack
#[component]
pub fn ToastHost() -> impl IntoView {
    let toasts = use_toasts();

    view! {
        <div class="toast-host">
            {move || {
                toasts
                    .entries
                    .get()
                    .into_iter()
                    .map(|toast| {
                        let class = match toast.kind {
                            ToastKind::Success => "toast toast-success",
                            ToastKind::Error => "toast toast-error",
                        };
                        let id = toast.id;
                        view! {
                            <div class=class on:click=move |_| toasts.dismiss(id)>
                                {toast.message}
                            </div>
                        }
                    })
                    .collect_view()
            }}
        </div>
    }
}
