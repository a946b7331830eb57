//! AI Scope Endpoint
//!
//! The structuring engine is an opaque backend service; the client only
//! submits raw requirement text and renders the returned plan.

use serde::Serialize;

use super::{ApiClient, ApiError};
use crate::models::ScopePlan;

#[derive(Serialize)]
struct ScopeBody<'a> {
    text: &'a str,
}

impl ApiClient {
    pub async fn structure_scope(&self, text: &str) -> Result<ScopePlan, ApiError> {
        self.post("/ai/structure-scope", &ScopeBody { text }).await
    }
}
