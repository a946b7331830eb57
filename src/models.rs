//! Frontend Models
//!
//! Data structures matching the backend REST contract. Records are
//! exchanged verbatim; dates stay ISO strings and are displayed as-is.

use serde::{Deserialize, Serialize};

/// Client record (matches backend)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Client {
    pub id: u32,
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub company: Option<String>,
}

/// Project status lifecycle. Transitions are enforced server-side;
/// the UI offers every status and surfaces rejections as errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProjectStatus {
    Active,
    OnHold,
    Completed,
}

impl ProjectStatus {
    pub const ALL: [ProjectStatus; 3] = [
        ProjectStatus::Active,
        ProjectStatus::OnHold,
        ProjectStatus::Completed,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            ProjectStatus::Active => "Active",
            ProjectStatus::OnHold => "On Hold",
            ProjectStatus::Completed => "Completed",
        }
    }

    /// Wire form, also used as a CSS class suffix.
    pub fn as_str(&self) -> &'static str {
        match self {
            ProjectStatus::Active => "active",
            ProjectStatus::OnHold => "on_hold",
            ProjectStatus::Completed => "completed",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.as_str() == value)
    }
}

/// Project record (matches backend)
///
/// `progress_percentage` is derived server-side from deliverable counts
/// and is never computed locally.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub id: u32,
    pub client_id: u32,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub deadline: Option<String>,
    pub status: ProjectStatus,
    #[serde(default)]
    pub progress_percentage: f64,
}

/// Deliverable status lifecycle. The UI allows selecting any status;
/// the backend decides which transitions it accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DeliverableStatus {
    Planned,
    InProgress,
    Blocked,
    Completed,
}

impl DeliverableStatus {
    pub const ALL: [DeliverableStatus; 4] = [
        DeliverableStatus::Planned,
        DeliverableStatus::InProgress,
        DeliverableStatus::Blocked,
        DeliverableStatus::Completed,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            DeliverableStatus::Planned => "Planned",
            DeliverableStatus::InProgress => "In Progress",
            DeliverableStatus::Blocked => "Blocked",
            DeliverableStatus::Completed => "Completed",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            DeliverableStatus::Planned => "planned",
            DeliverableStatus::InProgress => "in_progress",
            DeliverableStatus::Blocked => "blocked",
            DeliverableStatus::Completed => "completed",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.as_str() == value)
    }
}

/// Deliverable record (matches backend)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Deliverable {
    pub id: u32,
    pub project_id: u32,
    pub title: String,
    #[serde(default)]
    pub due_date: Option<String>,
    pub status: DeliverableStatus,
}

/// Upcoming milestone entry on the dashboard summary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Milestone {
    #[serde(rename = "type")]
    pub kind: String,
    pub id: u32,
    pub title: String,
    #[serde(default)]
    pub project_title: Option<String>,
    #[serde(default)]
    pub due_date: Option<String>,
}

/// Aggregate dashboard statistics, recomputed server-side on each fetch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardSummary {
    pub client_count: u32,
    pub active_project_count: u32,
    #[serde(default)]
    pub pending_deliverable_count: u32,
    pub overdue_deliverable_count: u32,
    #[serde(default)]
    pub upcoming_milestones: Vec<Milestone>,
}

/// One structured deliverable suggested by the scope agent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScopeDeliverable {
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
}

/// Structured plan returned by the AI scope endpoint. Advisory arrays
/// may be absent from the payload and default to empty.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScopePlan {
    pub deliverables: Vec<ScopeDeliverable>,
    #[serde(default)]
    pub ambiguities: Vec<String>,
    #[serde(default)]
    pub suggested_questions: Vec<String>,
}

// ========================
// Request Payloads
// ========================

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClientPayload {
    pub name: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProjectPayload {
    pub client_id: u32,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deadline: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DeliverablePayload {
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub due_date: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn project_status_uses_snake_case_wire_form() {
        let json = serde_json::to_string(&ProjectStatus::OnHold).unwrap();
        assert_eq!(json, "\"on_hold\"");

        let parsed: ProjectStatus = serde_json::from_str("\"completed\"").unwrap();
        assert_eq!(parsed, ProjectStatus::Completed);
    }

    #[test]
    fn deliverable_status_round_trips() {
        for status in DeliverableStatus::ALL {
            let json = serde_json::to_string(&status).unwrap();
            assert_eq!(json, format!("\"{}\"", status.as_str()));
            let back: DeliverableStatus = serde_json::from_str(&json).unwrap();
            assert_eq!(back, status);
        }
    }

    #[test]
    fn project_parses_backend_shape() {
        let project: Project = serde_json::from_str(
            r#"{
                "id": 7,
                "client_id": 3,
                "title": "Portfolio site",
                "description": null,
                "deadline": "2026-10-01",
                "status": "active",
                "progress_percentage": 42.5
            }"#,
        )
        .unwrap();
        assert_eq!(project.id, 7);
        assert_eq!(project.status, ProjectStatus::Active);
        assert_eq!(project.deadline.as_deref(), Some("2026-10-01"));
        assert!((project.progress_percentage - 42.5).abs() < f64::EPSILON);
    }

    #[test]
    fn scope_plan_defaults_missing_advisory_arrays() {
        let plan: ScopePlan = serde_json::from_str(
            r#"{"deliverables": [{"title": "Setup"}]}"#,
        )
        .unwrap();
        assert_eq!(plan.deliverables.len(), 1);
        assert_eq!(plan.deliverables[0].title, "Setup");
        assert!(plan.deliverables[0].description.is_none());
        assert!(plan.ambiguities.is_empty());
        assert!(plan.suggested_questions.is_empty());
    }

    #[test]
    fn milestone_renames_type_field() {
        let milestone: Milestone = serde_json::from_str(
            r#"{
                "type": "deliverable",
                "id": 11,
                "title": "Wireframes",
                "project_title": "Portfolio site",
                "due_date": "2026-09-15"
            }"#,
        )
        .unwrap();
        assert_eq!(milestone.kind, "deliverable");
        assert_eq!(milestone.project_title.as_deref(), Some("Portfolio site"));
    }

    #[test]
    fn payload_omits_absent_optional_fields() {
        let payload = DeliverablePayload {
            title: "Logo".to_string(),
            description: None,
            due_date: None,
        };
        let json = serde_json::to_value(&payload).unwrap();
        assert_eq!(json, serde_json::json!({"title": "Logo"}));
    }
}
