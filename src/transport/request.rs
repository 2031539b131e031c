use http::Method;
use serde::de::DeserializeOwned;
use std::collections::BTreeMap;

use crate::error::SdkError;

pub const AUTH_HEADER_KEY: &str = "Authorization";
pub const BASIC_HEADER_KEY: &str = "Basic";
pub const BEARER_HEADER_KEY: &str = "Bearer";
pub const CONTENT_TYPE_HEADER_KEY: &str = "Content-type";
pub const CONTENT_TYPE_APP_JSON: &str = "application/json";
pub const USER_AGENT_HEADER_KEY: &str = "User-Agent";

/// Body of an outgoing request.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum RequestBody {
    #[default]
    Empty,
    Json(serde_json::Value),
    Text(String),
}

/// Wire-level request produced from an api descriptor.
#[derive(Debug, Clone, PartialEq)]
pub struct SdkRequest {
    pub method: Method,
    pub url: String,
    pub headers: BTreeMap<String, String>,
    pub query_params: BTreeMap<String, String>,
    pub body: RequestBody,
}

impl SdkRequest {
    /// Sets `key` to `value`, replacing any previous value.
    pub fn add_header(&mut self, key: &str, value: String) {
        self.headers.insert(key.to_owned(), value);
    }

    pub fn with_bearer(mut self, token: &str) -> Self {
        self.add_header(AUTH_HEADER_KEY, format!("{} {}", BEARER_HEADER_KEY, token));
        self
    }

    pub fn header(&self, key: &str) -> Option<&str> {
        self.headers.get(key).map(|v| v.as_str())
    }
}

/// Response as seen by the SDK before any endpoint specific handling.
/// 4xx/5xx statuses are data here, not errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenericResponse {
    pub status: u16,
    pub status_text: String,
    pub body: String,
}

impl GenericResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        let status_text = http::StatusCode::from_u16(status)
            .ok()
            .and_then(|s| s.canonical_reason())
            .unwrap_or_default()
            .to_owned();
        Self { status, status_text, body: body.into() }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    pub fn is_unauthorized(&self) -> bool {
        self.status == 401
    }

    /// Deserialize the body of a successful response, or surface the
    /// status and body as an api error.
    pub fn json<T: DeserializeOwned>(&self) -> Result<T, SdkError> {
        if !self.is_success() {
            return Err(SdkError::Api { status: self.status, body: self.body.clone() });
        }
        serde_json::from_str(&self.body).map_err(SdkError::from)
    }
}
