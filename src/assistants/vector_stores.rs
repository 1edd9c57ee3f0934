use std::collections::HashMap;

use derive_builder::Builder;
use derive_more::From;
use serde::{Deserialize, Serialize};

use crate::{
    client::OpenAiClient,
    endpoints,
    schema::{MaxNumResults, Score},
    ApiResponseOrError, DeletionStatus, ListQuery, ListResponse, Metadata, OpenAiError, Order,
    StaticChunkingStrategy,
};

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct VectorStore {
    pub id: String,
    pub object: String,
    pub created_at: u64,
    pub name: Option<String>,
    /// Total number of bytes used by the files in the vector store.
    pub usage_bytes: u64,
    pub file_counts: FileCounts,
    pub status: VectorStoreStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expires_after: Option<ExpiresAfter>,
    #[serde(default)]
    pub expires_at: Option<u64>,
    pub last_active_at: Option<u64>,
    #[serde(default)]
    pub metadata: Option<Metadata>,
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
pub struct FileCounts {
    pub in_progress: u32,
    pub completed: u32,
    pub failed: u32,
    pub cancelled: u32,
    pub total: u32,
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, strum_macros::Display)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum VectorStoreStatus {
    Expired,
    InProgress,
    Completed,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct ExpiresAfter {
    /// Only `last_active_at` is supported.
    pub anchor: String,
    /// Between 1 and 365.
    pub days: u32,
}

impl ExpiresAfter {
    pub fn days_after_last_active(days: u32) -> Self {
        ExpiresAfter {
            anchor: "last_active_at".to_string(),
            days,
        }
    }
}

/// How files are split into chunks. `Other` is only reported for files
/// indexed before chunking strategies existed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ChunkingStrategy {
    Auto,
    Static {
        #[serde(rename = "static")]
        config: StaticChunkingStrategy,
    },
    Other,
}

/// File attribute values: strings of up to 512 characters, numbers or booleans.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, From)]
#[serde(untagged)]
pub enum AttributeValue {
    String(String),
    Number(f64),
    Boolean(bool),
}

impl From<&str> for AttributeValue {
    fn from(value: &str) -> Self {
        AttributeValue::String(value.to_string())
    }
}

/// Up to 16 key-value pairs attached to a vector store file.
pub type Attributes = HashMap<String, AttributeValue>;

#[derive(Serialize, Deserialize, Builder, Default, Debug, Clone, PartialEq)]
#[builder(pattern = "owned")]
#[builder(name = "VectorStoreBuilder")]
#[builder(setter(strip_option, into))]
#[builder(build_fn(error = "OpenAiError"))]
#[builder(default)]
pub struct CreateVectorStoreRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Files to attach, useful for tools like `file_search`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file_ids: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expires_after: Option<ExpiresAfter>,
    /// Only applicable if `file_ids` is non-empty.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub chunking_strategy: Option<ChunkingStrategy>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Metadata>,
}

#[derive(Serialize, Deserialize, Default, Debug, Clone, PartialEq)]
pub struct UpdateVectorStoreRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expires_after: Option<ExpiresAfter>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Metadata>,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq, From)]
#[serde(untagged)]
pub enum SearchQuery {
    Text(String),
    Texts(Vec<String>),
}

impl From<&str> for SearchQuery {
    fn from(value: &str) -> Self {
        SearchQuery::Text(value.to_string())
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq)]
pub struct SearchRankingOptions {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ranker: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub score_threshold: Option<Score>,
}

#[derive(Serialize, Deserialize, Builder, Debug, Clone, PartialEq)]
#[builder(pattern = "owned")]
#[builder(name = "VectorStoreSearchBuilder")]
#[builder(setter(strip_option, into))]
#[builder(build_fn(error = "OpenAiError"))]
pub struct VectorStoreSearchRequest {
    pub query: SearchQuery,
    #[builder(default)]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rewrite_query: Option<bool>,
    #[builder(default)]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_num_results: Option<MaxNumResults>,
    /// A comparison or compound filter over file attributes, passed through as-is.
    #[builder(default)]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub filters: Option<serde_json::Value>,
    #[builder(default)]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ranking_options: Option<SearchRankingOptions>,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct VectorStoreSearchResultsPage {
    pub object: String,
    pub search_query: Vec<String>,
    pub data: Vec<VectorStoreSearchResult>,
    pub has_more: bool,
    pub next_page: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct VectorStoreSearchResult {
    pub file_id: String,
    pub filename: String,
    pub score: Score,
    #[serde(default)]
    pub attributes: Option<Attributes>,
    pub content: Vec<TextChunk>,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct TextChunk {
    /// Always `text`.
    #[serde(rename = "type")]
    pub kind: String,
    pub text: String,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct VectorStoreFile {
    pub id: String,
    pub object: String,
    pub created_at: u64,
    pub vector_store_id: String,
    /// May differ from the size of the uploaded file.
    pub usage_bytes: u64,
    pub status: VectorStoreFileStatus,
    pub last_error: Option<VectorStoreFileError>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub chunking_strategy: Option<ChunkingStrategy>,
    #[serde(default)]
    pub attributes: Option<Attributes>,
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, strum_macros::Display)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum VectorStoreFileStatus {
    InProgress,
    Completed,
    Cancelled,
    Failed,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct VectorStoreFileError {
    /// `server_error`, `unsupported_file` or `invalid_file`.
    pub code: String,
    pub message: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct CreateVectorStoreFileRequest {
    pub file_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub chunking_strategy: Option<ChunkingStrategy>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attributes: Option<Attributes>,
}

impl CreateVectorStoreFileRequest {
    pub fn new(file_id: impl Into<String>) -> Self {
        CreateVectorStoreFileRequest {
            file_id: file_id.into(),
            chunking_strategy: None,
            attributes: None,
        }
    }
}

/// `attributes` is required; `None` clears them.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct UpdateVectorStoreFileAttributesRequest {
    pub attributes: Option<Attributes>,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct VectorStoreFileContent {
    pub object: String,
    pub data: Vec<TextChunk>,
    pub has_more: bool,
    pub next_page: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct CreateVectorStoreFileBatchRequest {
    pub file_ids: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub chunking_strategy: Option<ChunkingStrategy>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attributes: Option<Attributes>,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct VectorStoreFileBatch {
    pub id: String,
    pub object: String,
    pub created_at: u64,
    pub vector_store_id: String,
    pub status: VectorStoreFileStatus,
    pub file_counts: FileCounts,
}

#[derive(Serialize, Clone, Debug, Default, PartialEq)]
pub struct ListVectorStoreFilesQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order: Option<Order>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub after: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub before: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filter: Option<VectorStoreFileStatus>,
}

impl VectorStore {
    pub fn builder() -> VectorStoreBuilder {
        VectorStoreBuilder::default()
    }
}

impl VectorStoreBuilder {
    pub async fn create(self, client: &OpenAiClient) -> ApiResponseOrError<VectorStore> {
        client.create_vector_store(self.build()?).await
    }
}

impl OpenAiClient {
    pub async fn list_vector_stores(
        &self,
        query: &ListQuery,
    ) -> ApiResponseOrError<ListResponse<VectorStore>> {
        self.get_with_query(endpoints::LIST_VECTOR_STORES.render(&[])?, query)
            .await
    }

    pub async fn create_vector_store(
        &self,
        request: CreateVectorStoreRequest,
    ) -> ApiResponseOrError<VectorStore> {
        self.post(endpoints::CREATE_VECTOR_STORE.render(&[])?, request)
            .await
    }

    pub async fn get_vector_store(&self, vector_store_id: &str) -> ApiResponseOrError<VectorStore> {
        self.get(endpoints::GET_VECTOR_STORE.render(&[vector_store_id])?)
            .await
    }

    pub async fn modify_vector_store(
        &self,
        vector_store_id: &str,
        request: UpdateVectorStoreRequest,
    ) -> ApiResponseOrError<VectorStore> {
        self.post(endpoints::MODIFY_VECTOR_STORE.render(&[vector_store_id])?, request)
            .await
    }

    pub async fn delete_vector_store(
        &self,
        vector_store_id: &str,
    ) -> ApiResponseOrError<DeletionStatus> {
        self.delete(endpoints::DELETE_VECTOR_STORE.render(&[vector_store_id])?)
            .await
    }

    pub async fn search_vector_store(
        &self,
        vector_store_id: &str,
        request: VectorStoreSearchRequest,
    ) -> ApiResponseOrError<VectorStoreSearchResultsPage> {
        self.post(endpoints::SEARCH_VECTOR_STORE.render(&[vector_store_id])?, request)
            .await
    }

    pub async fn list_vector_store_files(
        &self,
        vector_store_id: &str,
        query: &ListVectorStoreFilesQuery,
    ) -> ApiResponseOrError<ListResponse<VectorStoreFile>> {
        self.get_with_query(
            endpoints::LIST_VECTOR_STORE_FILES.render(&[vector_store_id])?,
            query,
        )
        .await
    }

    pub async fn create_vector_store_file(
        &self,
        vector_store_id: &str,
        request: CreateVectorStoreFileRequest,
    ) -> ApiResponseOrError<VectorStoreFile> {
        self.post(
            endpoints::CREATE_VECTOR_STORE_FILE.render(&[vector_store_id])?,
            request,
        )
        .await
    }

    pub async fn get_vector_store_file(
        &self,
        vector_store_id: &str,
        file_id: &str,
    ) -> ApiResponseOrError<VectorStoreFile> {
        self.get(endpoints::GET_VECTOR_STORE_FILE.render(&[vector_store_id, file_id])?)
            .await
    }

    pub async fn update_vector_store_file_attributes(
        &self,
        vector_store_id: &str,
        file_id: &str,
        request: UpdateVectorStoreFileAttributesRequest,
    ) -> ApiResponseOrError<VectorStoreFile> {
        self.post(
            endpoints::UPDATE_VECTOR_STORE_FILE_ATTRIBUTES.render(&[vector_store_id, file_id])?,
            request,
        )
        .await
    }

    /// Detaches the file from the vector store. The file itself is not deleted.
    pub async fn delete_vector_store_file(
        &self,
        vector_store_id: &str,
        file_id: &str,
    ) -> ApiResponseOrError<DeletionStatus> {
        self.delete(endpoints::DELETE_VECTOR_STORE_FILE.render(&[vector_store_id, file_id])?)
            .await
    }

    pub async fn retrieve_vector_store_file_content(
        &self,
        vector_store_id: &str,
        file_id: &str,
    ) -> ApiResponseOrError<VectorStoreFileContent> {
        self.get(
            endpoints::RETRIEVE_VECTOR_STORE_FILE_CONTENT.render(&[vector_store_id, file_id])?,
        )
        .await
    }

    pub async fn create_vector_store_file_batch(
        &self,
        vector_store_id: &str,
        request: CreateVectorStoreFileBatchRequest,
    ) -> ApiResponseOrError<VectorStoreFileBatch> {
        self.post(
            endpoints::CREATE_VECTOR_STORE_FILE_BATCH.render(&[vector_store_id])?,
            request,
        )
        .await
    }

    pub async fn get_vector_store_file_batch(
        &self,
        vector_store_id: &str,
        batch_id: &str,
    ) -> ApiResponseOrError<VectorStoreFileBatch> {
        self.get(endpoints::GET_VECTOR_STORE_FILE_BATCH.render(&[vector_store_id, batch_id])?)
            .await
    }

    pub async fn cancel_vector_store_file_batch(
        &self,
        vector_store_id: &str,
        batch_id: &str,
    ) -> ApiResponseOrError<VectorStoreFileBatch> {
        self.post_empty(
            endpoints::CANCEL_VECTOR_STORE_FILE_BATCH.render(&[vector_store_id, batch_id])?,
        )
        .await
    }

    pub async fn list_files_in_vector_store_batch(
        &self,
        vector_store_id: &str,
        batch_id: &str,
        query: &ListVectorStoreFilesQuery,
    ) -> ApiResponseOrError<ListResponse<VectorStoreFile>> {
        self.get_with_query(
            endpoints::LIST_FILES_IN_VECTOR_STORE_BATCH.render(&[vector_store_id, batch_id])?,
            query,
        )
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn chunking_strategies() {
        let strategy = ChunkingStrategy::Static {
            config: StaticChunkingStrategy {
                max_chunk_size_tokens: 800,
                chunk_overlap_tokens: 400,
            },
        };
        assert_eq!(
            serde_json::to_value(strategy).unwrap(),
            json!({
                "type": "static",
                "static": { "max_chunk_size_tokens": 800, "chunk_overlap_tokens": 400 }
            })
        );
        assert_eq!(
            serde_json::from_value::<ChunkingStrategy>(json!({ "type": "other" })).unwrap(),
            ChunkingStrategy::Other
        );
        let parsed: ChunkingStrategy = serde_json::from_value(json!({
            "static": { "chunk_overlap_tokens": 400, "max_chunk_size_tokens": 800 },
            "type": "static"
        }))
        .unwrap();
        assert_eq!(parsed, strategy);
    }

    #[test]
    fn search_results_page() {
        let page: VectorStoreSearchResultsPage = serde_json::from_value(json!({
            "object": "vector_store.search_results.page",
            "search_query": ["What is the return policy?"],
            "data": [{
                "file_id": "file_123",
                "filename": "document.pdf",
                "score": 0.95,
                "attributes": { "author": "John Doe", "date": "2023-01-01", "draft": false },
                "content": [{ "type": "text", "text": "Relevant chunk" }]
            }],
            "has_more": false,
            "next_page": null
        }))
        .unwrap();
        let result = &page.data[0];
        assert_eq!(result.score.get(), 0.95);
        assert_eq!(
            result.attributes.as_ref().unwrap()["draft"],
            AttributeValue::Boolean(false)
        );
    }

    #[test]
    fn search_score_out_of_range() {
        assert!(serde_json::from_value::<VectorStoreSearchResult>(json!({
            "file_id": "file_123",
            "filename": "document.pdf",
            "score": 1.2,
            "content": []
        }))
        .is_err());
    }

    #[test]
    fn search_request() {
        let request = VectorStoreSearchBuilder::create_empty()
            .query("What is the return policy?")
            .max_num_results(MaxNumResults::new(10).unwrap())
            .build()
            .unwrap();
        assert_eq!(
            serde_json::to_value(request).unwrap(),
            json!({ "query": "What is the return policy?", "max_num_results": 10 })
        );
    }

    #[test]
    fn clearing_attributes_sends_null() {
        let request = UpdateVectorStoreFileAttributesRequest { attributes: None };
        assert_eq!(serde_json::to_value(request).unwrap(), json!({ "attributes": null }));
    }

    #[test]
    fn vector_store_object() {
        let store: VectorStore = serde_json::from_value(json!({
            "id": "vs_abc123",
            "object": "vector_store",
            "created_at": 1699061776,
            "name": "Support FAQ",
            "usage_bytes": 139920,
            "status": "completed",
            "last_active_at": null,
            "file_counts": {
                "in_progress": 0, "completed": 3, "failed": 0, "cancelled": 0, "total": 3
            }
        }))
        .unwrap();
        assert_eq!(store.status, VectorStoreStatus::Completed);
        assert_eq!(store.file_counts.total, 3);
    }
}
