//! UI Components
//!
//! Reusable Leptos components.

mod client_modal;
mod delete_confirm_button;
mod deliverable_form;
mod layout;
mod project_modal;
mod require_auth;
mod scope_agent;
mod spinner;
mod status_badge;

pub use client_modal::ClientModal;
pub use delete_confirm_button::DeleteConfirmButton;
pub use deliverable_form::DeliverableForm;
pub use layout::AppShell;
pub use project_modal::ProjectModal;
pub use require_auth::RequireAuth;
pub use scope_agent::ScopeAgent;
pub use spinner::Spinner;
pub use status_badge::{DeliverableStatusBadge, ProjectStatusBadge};
