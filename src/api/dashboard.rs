//! Dashboard Endpoint

use super::{ApiClient, ApiError};
use crate::models::DashboardSummary;

impl ApiClient {
    pub async fn get_dashboard_summary(&self) -> Result<DashboardSummary, ApiError> {
        self.get("/dashboard").await
    }
}
