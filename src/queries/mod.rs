//! Entity Query Hooks
//!
//! Per-entity facades over the API client: read signals driven by cache
//! versions, plus mutation methods that invalidate affected keys and
//! surface toasts. Failures never propagate past this layer.

mod clients;
mod dashboard;
mod deliverables;
mod projects;

pub use clients::{use_client, use_clients};
pub use dashboard::use_dashboard;
pub use deliverables::use_deliverables;
pub use projects::{use_all_projects, use_project, use_projects};
