//! API Client
//!
//! Single chokepoint for all backend communication: attaches the bearer
//! header, decodes the JSON envelope, and converts HTTP status into
//! typed errors. A 401 from any endpoint clears the stored token and
//! fires the injected `on_unauthorized` callback before failing, so no
//! other layer ever handles authentication rejection itself.

mod auth;
mod clients;
mod dashboard;
mod deliverables;
mod projects;
mod scope;

use std::fmt;
use std::sync::Arc;

use leptos::prelude::*;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Headers, Request, RequestInit, Response};

use crate::session::{self, SessionStore, SessionStoreFields};

/// Backend base URL.
pub const BASE_URL: &str = "http://localhost:5000/api";

/// Failure raised by the API client.
#[derive(Debug, Clone, PartialEq)]
pub enum ApiError {
    /// 401, token cleared and redirect already triggered.
    Unauthorized,
    /// Non-2xx, non-401, with the server-provided message.
    Status { code: u16, message: String },
    /// Transport or decoding failure.
    Network(String),
}

impl ApiError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, ApiError::Status { code: 404, .. })
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Unauthorized => write!(f, "Unauthorized - redirecting to login"),
            ApiError::Status { message, .. } => write!(f, "{message}"),
            ApiError::Network(detail) => write!(f, "Request failed: {detail}"),
        }
    }
}

/// Message extraction for error payloads: `message`, then `error`,
/// then a generic fallback.
fn error_message(body: &Value) -> String {
    body.get("message")
        .and_then(Value::as_str)
        .or_else(|| body.get("error").and_then(Value::as_str))
        .map(str::to_owned)
        .unwrap_or_else(|| "API request failed".to_string())
}

/// Map a response status and decoded body onto the error type.
///
/// 401 maps to [`ApiError::Unauthorized`] no matter what the body says;
/// any other non-2xx carries the payload message.
fn classify_status(status: u16, body: &Value) -> Result<(), ApiError> {
    if status == 401 {
        return Err(ApiError::Unauthorized);
    }
    if !(200..300).contains(&status) {
        return Err(ApiError::Status {
            code: status,
            message: error_message(body),
        });
    }
    Ok(())
}

/// Unwrap the `{ "data": ... }` success envelope into a typed value.
fn decode_data<T: DeserializeOwned>(mut body: Value) -> Result<T, ApiError> {
    let data = match body.get_mut("data") {
        Some(data) => data.take(),
        None => body,
    };
    serde_json::from_value(data).map_err(|e| ApiError::Network(e.to_string()))
}

/// HTTP client holding the session store and the unauthorized hook.
///
/// The hook is injected at construction (the app wires it to router
/// navigation), keeping the client free of page-navigation side effects.
#[derive(Clone)]
pub struct ApiClient {
    base_url: String,
    session: SessionStore,
    on_unauthorized: Arc<dyn Fn() + Send + Sync>,
}

/// Get the API client from context
pub fn use_api() -> ApiClient {
    expect_context::<ApiClient>()
}

impl ApiClient {
    pub fn new(
        base_url: impl Into<String>,
        session: SessionStore,
        on_unauthorized: Arc<dyn Fn() + Send + Sync>,
    ) -> Self {
        Self {
            base_url: base_url.into(),
            session,
            on_unauthorized,
        }
    }

    /// Issue a request and return the raw JSON body.
    async fn send(
        &self,
        method: &str,
        path: &str,
        body: Option<Value>,
    ) -> Result<Value, ApiError> {
        let headers = Headers::new().map_err(js_error)?;
        headers
            .set("Content-Type", "application/json")
            .map_err(js_error)?;
        if let Some(token) = self.session.token().get_untracked() {
            headers
                .set("Authorization", &format!("Bearer {token}"))
                .map_err(js_error)?;
        }

        let opts = RequestInit::new();
        opts.set_method(method);
        opts.set_headers(&headers);
        if let Some(body) = body {
            let json = serde_json::to_string(&body)
                .map_err(|e| ApiError::Network(e.to_string()))?;
            opts.set_body(&wasm_bindgen::JsValue::from_str(&json));
        }

        let url = format!("{}{}", self.base_url, path);
        let request = Request::new_with_str_and_init(&url, &opts).map_err(js_error)?;

        let window = web_sys::window()
            .ok_or_else(|| ApiError::Network("no window".to_string()))?;
        let response = JsFuture::from(window.fetch_with_request(&request))
            .await
            .map_err(js_error)?;
        let response: Response = response.dyn_into().map_err(js_error)?;
        let status = response.status();

        let body = match response.json() {
            Ok(promise) => match JsFuture::from(promise).await {
                Ok(js_body) => serde_wasm_bindgen::from_value::<Value>(js_body)
                    .unwrap_or(Value::Null),
                Err(_) => Value::Null,
            },
            Err(_) => Value::Null,
        };

        match classify_status(status, &body) {
            Ok(()) => Ok(body),
            // 401 is handled here, once, for every endpoint.
            Err(ApiError::Unauthorized) => {
                session::clear_token(&self.session);
                (self.on_unauthorized)();
                Err(ApiError::Unauthorized)
            }
            Err(err) => {
                web_sys::console::warn_1(
                    &format!("[API] {method} {path} failed with {status}").into(),
                );
                Err(err)
            }
        }
    }

    pub(crate) async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        self.send("GET", path, None).await.and_then(decode_data)
    }

    pub(crate) async fn post<T: DeserializeOwned>(
        &self,
        path: &str,
        body: &impl Serialize,
    ) -> Result<T, ApiError> {
        let body = serde_json::to_value(body).map_err(|e| ApiError::Network(e.to_string()))?;
        self.send("POST", path, Some(body)).await.and_then(decode_data)
    }

    pub(crate) async fn put<T: DeserializeOwned>(
        &self,
        path: &str,
        body: &impl Serialize,
    ) -> Result<T, ApiError> {
        let body = serde_json::to_value(body).map_err(|e| ApiError::Network(e.to_string()))?;
        self.send("PUT", path, Some(body)).await.and_then(decode_data)
    }

    pub(crate) async fn patch<T: DeserializeOwned>(
        &self,
        path: &str,
        body: &impl Serialize,
    ) -> Result<T, ApiError> {
        let body = serde_json::to_value(body).map_err(|e| ApiError::Network(e.to_string()))?;
        self.send("PATCH", path, Some(body)).await.and_then(decode_data)
    }

    pub(crate) async fn delete(&self, path: &str) -> Result<(), ApiError> {
        self.send("DELETE", path, None).await.map(|_| ())
    }

    /// Raw POST returning the full body (auth responses carry the token
    /// outside the data envelope).
    pub(crate) async fn post_raw(
        &self,
        path: &str,
        body: &impl Serialize,
    ) -> Result<Value, ApiError> {
        let body = serde_json::to_value(body).map_err(|e| ApiError::Network(e.to_string()))?;
        self.send("POST", path, Some(body)).await
    }
}

fn js_error(value: wasm_bindgen::JsValue) -> ApiError {
    ApiError::Network(format!("{value:?}"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn error_message_prefers_message_field() {
        let body = json!({"message": "Title is required", "error": "bad_request"});
        assert_eq!(error_message(&body), "Title is required");
    }

    #[test]
    fn error_message_falls_back_to_error_field() {
        let body = json!({"error": "Client not found"});
        assert_eq!(error_message(&body), "Client not found");
    }

    #[test]
    fn error_message_has_generic_fallback() {
        assert_eq!(error_message(&json!({})), "API request failed");
        assert_eq!(error_message(&Value::Null), "API request failed");
    }

    #[test]
    fn decode_data_unwraps_the_envelope() {
        let body = json!({"data": [{"id": 1, "name": "Acme", "email": "ops@acme.io"}]});
        let clients: Vec<crate::models::Client> = decode_data(body).unwrap();
        assert_eq!(clients.len(), 1);
        assert_eq!(clients[0].name, "Acme");
    }

    #[test]
    fn decode_data_accepts_unwrapped_bodies() {
        let body = json!({"id": 2, "name": "Blue Co", "email": "hi@blue.co", "company": null});
        let client: crate::models::Client = decode_data(body).unwrap();
        assert_eq!(client.id, 2);
    }

    #[test]
    fn status_401_maps_to_unauthorized_for_any_body() {
        assert_eq!(
            classify_status(401, &json!({"message": "Token has expired"})),
            Err(ApiError::Unauthorized)
        );
        assert_eq!(classify_status(401, &Value::Null), Err(ApiError::Unauthorized));
    }

    #[test]
    fn failing_statuses_carry_the_payload_message() {
        assert_eq!(
            classify_status(422, &json!({"message": "Title is required"})),
            Err(ApiError::Status {
                code: 422,
                message: "Title is required".to_string(),
            })
        );
        assert_eq!(
            classify_status(500, &Value::Null),
            Err(ApiError::Status {
                code: 500,
                message: "API request failed".to_string(),
            })
        );
    }

    #[test]
    fn success_statuses_pass_through() {
        assert_eq!(classify_status(200, &Value::Null), Ok(()));
        assert_eq!(classify_status(201, &json!({"data": {"id": 1}})), Ok(()));
    }

    #[test]
    fn client_fits_in_a_local_stored_value() {
        use crate::session::Session;
        use reactive_stores::Store;

        let session = Store::new(Session::default());
        let api = ApiClient::new(BASE_URL, session, Arc::new(|| {}));
        let handle = StoredValue::new_local(api);
        let copied = handle;
        assert_eq!(copied.get_value().base_url, BASE_URL);
    }

    #[test]
    fn not_found_is_distinguishable() {
        let err = ApiError::Status {
            code: 404,
            message: "Project not found".to_string(),
        };
        assert!(err.is_not_found());
        assert_eq!(err.to_string(), "Project not found");
    }
}
