//! Deliverable Endpoints

use serde::Serialize;

use super::{ApiClient, ApiError};
use crate::models::{Deliverable, DeliverablePayload, DeliverableStatus};

#[derive(Serialize)]
struct StatusBody {
    status: DeliverableStatus,
}

impl ApiClient {
    pub async fn list_project_deliverables(
        &self,
        project_id: u32,
    ) -> Result<Vec<Deliverable>, ApiError> {
        self.get(&format!("/projects/{project_id}/deliverables"))
            .await
    }

    pub async fn create_deliverable(
        &self,
        project_id: u32,
        payload: &DeliverablePayload,
    ) -> Result<Deliverable, ApiError> {
        self.post(&format!("/projects/{project_id}/deliverables"), payload)
            .await
    }

    pub async fn update_deliverable_status(
        &self,
        id: u32,
        status: DeliverableStatus,
    ) -> Result<Deliverable, ApiError> {
        self.patch(&format!("/deliverables/{id}/status"), &StatusBody { status })
            .await
    }

    pub async fn delete_deliverable(&self, id: u32) -> Result<(), ApiError> {
        self.delete(&format!("/deliverables/{id}")).await
    }
}
