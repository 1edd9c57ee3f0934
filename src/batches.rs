//! Create large batches of API requests for asynchronous processing.

use derive_builder::Builder;
use serde::{Deserialize, Serialize};

use crate::{
    client::OpenAiClient, endpoints, ApiResponseOrError, ListQuery, ListResponse, Metadata,
    OpenAiError,
};

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, strum_macros::Display)]
pub enum BatchEndpoint {
    #[serde(rename = "/v1/responses")]
    #[strum(serialize = "/v1/responses")]
    Responses,
    #[serde(rename = "/v1/chat/completions")]
    #[strum(serialize = "/v1/chat/completions")]
    ChatCompletions,
    #[serde(rename = "/v1/embeddings")]
    #[strum(serialize = "/v1/embeddings")]
    Embeddings,
    #[serde(rename = "/v1/completions")]
    #[strum(serialize = "/v1/completions")]
    Completions,
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
pub enum CompletionWindow {
    #[default]
    #[serde(rename = "24h")]
    Hours24,
}

#[derive(Serialize, Deserialize, Builder, Debug, Clone, PartialEq)]
#[builder(pattern = "owned")]
#[builder(name = "BatchBuilder")]
#[builder(setter(strip_option, into))]
#[builder(build_fn(error = "OpenAiError"))]
pub struct CreateBatchRequest {
    /// A JSONL file uploaded with purpose `batch`.
    pub input_file_id: String,
    pub endpoint: BatchEndpoint,
    #[builder(default)]
    pub completion_window: CompletionWindow,
    #[builder(default)]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Metadata>,
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, strum_macros::Display)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum BatchStatus {
    Validating,
    Failed,
    InProgress,
    Finalizing,
    Completed,
    Expired,
    Cancelling,
    Cancelled,
}

impl BatchStatus {
    /// Whether the batch will not change status anymore.
    pub fn is_terminal(self) -> bool {
        matches!(
            self,
            BatchStatus::Failed | BatchStatus::Completed | BatchStatus::Expired | BatchStatus::Cancelled
        )
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Batch {
    pub id: String,
    pub object: String,
    pub endpoint: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub errors: Option<BatchErrors>,
    pub input_file_id: String,
    pub completion_window: String,
    pub status: BatchStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output_file_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error_file_id: Option<String>,
    pub created_at: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub in_progress_at: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expires_at: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub finalizing_at: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completed_at: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub failed_at: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expired_at: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cancelling_at: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cancelled_at: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub request_counts: Option<BatchRequestCounts>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Metadata>,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct BatchErrors {
    pub object: String,
    pub data: Vec<BatchError>,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct BatchError {
    pub code: String,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub param: Option<String>,
    /// Line number of the input file the error originated from.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub line: Option<u32>,
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
pub struct BatchRequestCounts {
    pub total: u32,
    pub completed: u32,
    pub failed: u32,
}

/// One line of a batch input file.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct BatchRequestInput {
    /// Must be unique within the file.
    pub custom_id: String,
    /// Only `POST` is supported.
    pub method: String,
    pub url: BatchEndpoint,
    pub body: serde_json::Value,
}

impl BatchRequestInput {
    pub fn new(
        custom_id: impl Into<String>,
        url: BatchEndpoint,
        body: impl Serialize,
    ) -> ApiResponseOrError<Self> {
        Ok(BatchRequestInput {
            custom_id: custom_id.into(),
            method: "POST".to_string(),
            url,
            body: serde_json::to_value(body)?,
        })
    }
}

/// One line of a batch output or error file.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct BatchRequestOutput {
    pub id: String,
    pub custom_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub response: Option<BatchRequestOutputResponse>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<BatchRequestOutputError>,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct BatchRequestOutputResponse {
    pub status_code: u16,
    pub request_id: String,
    pub body: serde_json::Value,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct BatchRequestOutputError {
    pub code: String,
    pub message: String,
}

impl Batch {
    pub fn builder(input_file_id: &str, endpoint: BatchEndpoint) -> BatchBuilder {
        BatchBuilder::create_empty()
            .input_file_id(input_file_id)
            .endpoint(endpoint)
    }
}

impl BatchBuilder {
    pub async fn create(self, client: &OpenAiClient) -> ApiResponseOrError<Batch> {
        client.create_batch(self.build()?).await
    }
}

impl OpenAiClient {
    pub async fn create_batch(&self, request: CreateBatchRequest) -> ApiResponseOrError<Batch> {
        self.post(endpoints::CREATE_BATCH.render(&[])?, request).await
    }

    /// Only `limit` and `after` are honoured.
    pub async fn list_batches(&self, query: &ListQuery) -> ApiResponseOrError<ListResponse<Batch>> {
        self.get_with_query(endpoints::LIST_BATCHES.render(&[])?, query)
            .await
    }

    pub async fn retrieve_batch(&self, batch_id: &str) -> ApiResponseOrError<Batch> {
        self.get(endpoints::RETRIEVE_BATCH.render(&[batch_id])?).await
    }

    /// The batch stays `cancelling` for up to 10 minutes before it is `cancelled`.
    pub async fn cancel_batch(&self, batch_id: &str) -> ApiResponseOrError<Batch> {
        self.post_empty(endpoints::CANCEL_BATCH.render(&[batch_id])?)
            .await
    }
}
