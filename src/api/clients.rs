//! Client Endpoints

use super::{ApiClient, ApiError};
use crate::models::{Client, ClientPayload};

impl ApiClient {
    pub async fn list_clients(&self) -> Result<Vec<Client>, ApiError> {
        self.get("/clients").await
    }

    pub async fn get_client(&self, id: u32) -> Result<Client, ApiError> {
        self.get(&format!("/clients/{id}")).await
    }

    pub async fn create_client(&self, payload: &ClientPayload) -> Result<Client, ApiError> {
        self.post("/clients", payload).await
    }

    pub async fn update_client(
        &self,
        id: u32,
        payload: &ClientPayload,
    ) -> Result<Client, ApiError> {
        self.put(&format!("/clients/{id}"), payload).await
    }

    pub async fn delete_client(&self, id: u32) -> Result<(), ApiError> {
        self.delete(&format!("/clients/{id}")).await
    }
}
