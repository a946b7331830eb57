//! Project Endpoints

use serde::Serialize;

use super::{ApiClient, ApiError};
use crate::models::{Project, ProjectPayload, ProjectStatus};

#[derive(Serialize)]
struct StatusBody {
    status: ProjectStatus,
}

impl ApiClient {
    pub async fn list_client_projects(&self, client_id: u32) -> Result<Vec<Project>, ApiError> {
        self.get(&format!("/clients/{client_id}/projects")).await
    }

    pub async fn list_projects(&self) -> Result<Vec<Project>, ApiError> {
        self.get("/projects").await
    }

    pub async fn get_project(&self, id: u32) -> Result<Project, ApiError> {
        self.get(&format!("/projects/{id}")).await
    }

    pub async fn create_project(&self, payload: &ProjectPayload) -> Result<Project, ApiError> {
        self.post("/projects", payload).await
    }

    pub async fn update_project(
        &self,
        id: u32,
        payload: &ProjectPayload,
    ) -> Result<Project, ApiError> {
        self.put(&format!("/projects/{id}"), payload).await
    }

    pub async fn delete_project(&self, id: u32) -> Result<(), ApiError> {
        self.delete(&format!("/projects/{id}")).await
    }

    pub async fn transition_project_status(
        &self,
        id: u32,
        status: ProjectStatus,
    ) -> Result<Project, ApiError> {
        self.patch(&format!("/projects/{id}/status"), &StatusBody { status })
            .await
    }
}
