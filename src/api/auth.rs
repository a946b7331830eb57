//! Auth Endpoints

use serde::{Deserialize, Serialize};

use super::{ApiClient, ApiError};

#[derive(Serialize)]
struct LoginBody<'a> {
    email: &'a str,
    password: &'a str,
}

#[derive(Serialize)]
struct SignupBody<'a> {
    username: &'a str,
    email: &'a str,
    password: &'a str,
}

/// Auth success body. The token sits outside the data envelope.
#[derive(Debug, Clone, Deserialize)]
pub struct AuthResponse {
    pub access_token: String,
}

impl ApiClient {
    pub async fn login(&self, email: &str, password: &str) -> Result<AuthResponse, ApiError> {
        let body = self
            .post_raw("/auth/login", &LoginBody { email, password })
            .await?;
        serde_json::from_value(body).map_err(|e| ApiError::Network(e.to_string()))
    }

    pub async fn signup(
        &self,
        username: &str,
        email: &str,
        password: &str,
    ) -> Result<AuthResponse, ApiError> {
        let body = self
            .post_raw(
                "/auth/signup",
                &SignupBody {
                    username,
                    email,
                    password,
                },
            )
            .await?;
        serde_json::from_value(body).map_err(|e| ApiError::Network(e.to_string()))
    }
}
