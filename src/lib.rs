//! Typed schemas, an endpoint table and a thin client for the OpenAI REST API.
//!
//! Every payload the API accepts or returns is a serde type in one of the
//! resource modules. [`schema`] maps schema names to validators over untyped
//! JSON, [`endpoints`] describes every route, and [`client::OpenAiClient`]
//! exposes one typed method per route plus a generic [`client::OpenAiClient::call`]
//! driven by the endpoint table.

use derive_builder::UninitializedFieldError;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

pub mod assistants;
pub mod audio;
pub mod batches;
pub mod chat;
pub mod client;
pub mod completions;
pub mod containers;
pub mod embeddings;
pub mod endpoints;
pub mod evals;
pub mod files;
pub mod fine_tuning;
pub mod graders;
pub mod images;
pub mod models;
pub mod moderations;
pub mod organization;
pub mod realtime;
pub mod responses;
pub mod schema;
pub mod uploads;
pub mod usage;

pub use client::OpenAiClient;

pub const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";

/// Set of up to 16 key-value pairs attached to an object.
pub type Metadata = HashMap<String, String>;

/// Undeclared fields kept by passthrough records.
pub type Extra = serde_json::Map<String, serde_json::Value>;

pub type ApiResponseOrError<T> = Result<T, OpenAiError>;

#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Credentials {
    pub api_key: String,
    pub base_url: String,
    pub organization: Option<String>,
    pub project: Option<String>,
}

impl Credentials {
    pub fn new(api_key: impl Into<String>, base_url: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
            organization: None,
            project: None,
        }
    }

    /// Reads `OPENAI_KEY` and, optionally, `OPENAI_BASE_URL`, `OPENAI_ORGANIZATION`
    /// and `OPENAI_PROJECT`, loading a `.env` file first if one exists.
    pub fn from_env() -> ApiResponseOrError<Self> {
        dotenvy::dotenv().ok();

        let api_key = dotenvy::var("OPENAI_KEY").map_err(|_| {
            OpenAiError::new(
                "environment variable `OPENAI_KEY` should be defined".to_string(),
                "config".to_string(),
            )
        })?;
        let base_url =
            dotenvy::var("OPENAI_BASE_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());

        let mut credentials = Self::new(api_key, base_url);
        credentials.organization = dotenvy::var("OPENAI_ORGANIZATION").ok();
        credentials.project = dotenvy::var("OPENAI_PROJECT").ok();
        Ok(credentials)
    }

    pub fn organization(mut self, organization: impl Into<String>) -> Self {
        self.organization = Some(organization.into());
        self
    }

    pub fn project(mut self, project: impl Into<String>) -> Self {
        self.project = Some(project.into());
        self
    }
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct OpenAiError {
    pub message: String,
    #[serde(rename = "type")]
    pub error_type: String,
    pub param: Option<String>,
    pub code: Option<String>,
    /// HTTP status of the response the error was read from, if any.
    #[serde(skip)]
    pub status: Option<u16>,
}

impl OpenAiError {
    pub fn new(message: String, error_type: String) -> OpenAiError {
        OpenAiError {
            message,
            error_type,
            param: None,
            code: None,
            status: None,
        }
    }

    pub(crate) fn with_status(mut self, status: u16) -> Self {
        self.status = Some(status);
        self
    }
}

impl std::fmt::Display for OpenAiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.status {
            Some(status) => write!(f, "{} ({status})", self.message),
            None => write!(f, "{}", self.message),
        }
    }
}

impl std::error::Error for OpenAiError {}

impl From<reqwest::Error> for OpenAiError {
    fn from(value: reqwest::Error) -> Self {
        let error = OpenAiError::new(value.to_string(), "reqwest".to_string());
        match value.status() {
            Some(status) => error.with_status(status.as_u16()),
            None => error,
        }
    }
}

impl From<serde_json::Error> for OpenAiError {
    fn from(value: serde_json::Error) -> Self {
        OpenAiError::new(value.to_string(), "serde".to_string())
    }
}

impl From<std::io::Error> for OpenAiError {
    fn from(value: std::io::Error) -> Self {
        OpenAiError::new(value.to_string(), "io".to_string())
    }
}

impl From<reqwest::header::InvalidHeaderValue> for OpenAiError {
    fn from(value: reqwest::header::InvalidHeaderValue) -> Self {
        OpenAiError::new(value.to_string(), "header".to_string())
    }
}

impl From<UninitializedFieldError> for OpenAiError {
    fn from(value: UninitializedFieldError) -> Self {
        OpenAiError::new(value.to_string(), "builder".to_string())
    }
}

/// The `{"error": {...}}` envelope of non-2xx responses.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct ErrorResponse {
    pub error: OpenAiError,
}

/// A cursor-paginated list, e.g. `GET /assistants`.
///
/// Some list endpoints omit the cursors, so every field except `data` has a default.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct ListResponse<T> {
    #[serde(default = "list_object")]
    pub object: String,
    pub data: Vec<T>,
    #[serde(default)]
    pub first_id: Option<String>,
    #[serde(default)]
    pub last_id: Option<String>,
    #[serde(default)]
    pub has_more: bool,
}

fn list_object() -> String {
    "list".to_string()
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
pub struct DeletionStatus {
    pub id: String,
    pub object: String,
    pub deleted: bool,
}

#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Order {
    Asc,
    #[default]
    Desc,
}

/// Cursor parameters shared by most list endpoints.
#[derive(Serialize, Debug, Clone, Default, PartialEq)]
pub struct ListQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order: Option<Order>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub after: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub before: Option<String>,
}

impl ListQuery {
    pub fn limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }

    pub fn order(mut self, order: Order) -> Self {
        self.order = Some(order);
        self
    }

    pub fn after(mut self, after: impl Into<String>) -> Self {
        self.after = Some(after.into());
        self
    }

    pub fn before(mut self, before: impl Into<String>) -> Self {
        self.before = Some(before.into());
        self
    }
}

/// Static chunking parameters for files added to a vector store.
#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct StaticChunkingStrategy {
    /// Between 100 and 4096.
    pub max_chunk_size_tokens: u32,
    /// Must not exceed half of `max_chunk_size_tokens`.
    pub chunk_overlap_tokens: u32,
}

/// A JSON Schema function definition shared by chat, assistants and realtime tools.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct FunctionObject {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parameters: Option<serde_json::Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub strict: Option<bool>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn credentials_trim_trailing_slash() {
        let credentials = Credentials::new("sk-test", "http://localhost:8080/v1/");
        assert_eq!(credentials.base_url, "http://localhost:8080/v1");
        assert_eq!(credentials.organization, None);
    }

    #[test]
    fn error_envelope() {
        let response: ErrorResponse = serde_json::from_value(json!({
            "error": {
                "message": "No such model",
                "type": "invalid_request_error",
                "param": "model",
                "code": "model_not_found"
            }
        }))
        .unwrap();
        assert_eq!(response.error.error_type, "invalid_request_error");
        assert_eq!(response.error.code.as_deref(), Some("model_not_found"));
        assert_eq!(response.error.status, None);
        assert_eq!(
            response.error.with_status(404).to_string(),
            "No such model (404)"
        );
    }

    #[test]
    fn list_without_cursors() {
        let list: ListResponse<DeletionStatus> = serde_json::from_value(json!({
            "data": [{ "id": "file-1", "object": "file", "deleted": true }]
        }))
        .unwrap();
        assert_eq!(list.object, "list");
        assert!(!list.has_more);
        assert_eq!(list.first_id, None);
    }

    #[test]
    fn list_query_skips_unset() {
        let query = ListQuery::default().limit(20).order(Order::Asc);
        assert_eq!(
            serde_json::to_value(query).unwrap(),
            json!({ "limit": 20, "order": "asc" })
        );
    }
}
