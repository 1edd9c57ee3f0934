//! Organization usage and costs, aggregated in time buckets.
//!
//! These endpoints need an admin key.

use serde::{Deserialize, Serialize};

use crate::{
    client::OpenAiClient,
    endpoints::{self, Endpoint},
    ApiResponseOrError,
};

/// One page of time buckets.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct UsageResponse {
    pub object: String,
    pub data: Vec<UsageBucket>,
    pub has_more: bool,
    /// Cursor for the `page` query parameter.
    #[serde(default)]
    pub next_page: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct UsageBucket {
    pub object: String,
    pub start_time: u64,
    pub end_time: u64,
    #[serde(alias = "result")]
    pub results: Vec<UsageResult>,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(tag = "object")]
pub enum UsageResult {
    #[serde(rename = "organization.usage.completions.result")]
    Completions(CompletionsUsage),
    #[serde(rename = "organization.usage.embeddings.result")]
    Embeddings(TokenUsage),
    #[serde(rename = "organization.usage.moderations.result")]
    Moderations(TokenUsage),
    #[serde(rename = "organization.usage.images.result")]
    Images(ImagesUsage),
    #[serde(rename = "organization.usage.audio_speeches.result")]
    AudioSpeeches(AudioSpeechesUsage),
    #[serde(rename = "organization.usage.audio_transcriptions.result")]
    AudioTranscriptions(AudioTranscriptionsUsage),
    #[serde(rename = "organization.usage.vector_stores.result")]
    VectorStores(VectorStoresUsage),
    #[serde(rename = "organization.usage.code_interpreter_sessions.result")]
    CodeInterpreterSessions(CodeInterpreterSessionsUsage),
    #[serde(rename = "organization.costs.result")]
    Costs(CostsResult),
}

/// The dimensions a result was grouped by; null unless named in `group_by`.
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq, Eq)]
pub struct UsageGroup {
    #[serde(default)]
    pub project_id: Option<String>,
    #[serde(default)]
    pub user_id: Option<String>,
    #[serde(default)]
    pub api_key_id: Option<String>,
    #[serde(default)]
    pub model: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct CompletionsUsage {
    pub input_tokens: u64,
    pub output_tokens: u64,
    #[serde(default)]
    pub input_cached_tokens: Option<u64>,
    #[serde(default)]
    pub input_audio_tokens: Option<u64>,
    #[serde(default)]
    pub output_audio_tokens: Option<u64>,
    pub num_model_requests: u64,
    #[serde(default)]
    pub batch: Option<bool>,
    #[serde(flatten)]
    pub group: UsageGroup,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct TokenUsage {
    pub input_tokens: u64,
    pub num_model_requests: u64,
    #[serde(flatten)]
    pub group: UsageGroup,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct ImagesUsage {
    pub images: u64,
    pub num_model_requests: u64,
    /// `image.generation`, `image.edit` or `image.variation`.
    #[serde(default)]
    pub source: Option<String>,
    #[serde(default)]
    pub size: Option<String>,
    #[serde(flatten)]
    pub group: UsageGroup,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct AudioSpeechesUsage {
    pub characters: u64,
    pub num_model_requests: u64,
    #[serde(flatten)]
    pub group: UsageGroup,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct AudioTranscriptionsUsage {
    pub seconds: u64,
    pub num_model_requests: u64,
    #[serde(flatten)]
    pub group: UsageGroup,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct VectorStoresUsage {
    pub usage_bytes: u64,
    #[serde(default)]
    pub project_id: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct CodeInterpreterSessionsUsage {
    #[serde(alias = "sessions")]
    pub num_sessions: u64,
    #[serde(default)]
    pub project_id: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct CostsResult {
    pub amount: CostAmount,
    #[serde(default)]
    pub line_item: Option<String>,
    #[serde(default)]
    pub project_id: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct CostAmount {
    pub value: f64,
    /// Lowercase ISO-4217 code, e.g. `usd`.
    pub currency: String,
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
pub enum BucketWidth {
    #[serde(rename = "1m")]
    Minute,
    #[serde(rename = "1h")]
    Hour,
    #[default]
    #[serde(rename = "1d")]
    Day,
}

/// Query of every usage endpoint. Filters an endpoint does not know are ignored upstream.
#[derive(Serialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct UsageQuery {
    /// Inclusive start, in Unix seconds.
    pub start_time: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_time: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bucket_width: Option<BucketWidth>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub project_ids: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub user_ids: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub api_key_ids: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub models: Vec<String>,
    /// Completions only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub batch: Option<bool>,
    /// Images only.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub sources: Vec<String>,
    /// Images only.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub sizes: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub group_by: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<String>,
}

impl UsageQuery {
    pub fn new(start_time: u64) -> Self {
        UsageQuery {
            start_time,
            ..Default::default()
        }
    }

    pub fn end_time(mut self, end_time: u64) -> Self {
        self.end_time = Some(end_time);
        self
    }

    pub fn bucket_width(mut self, bucket_width: BucketWidth) -> Self {
        self.bucket_width = Some(bucket_width);
        self
    }

    pub fn group_by(mut self, field: impl Into<String>) -> Self {
        self.group_by.push(field.into());
        self
    }

    pub fn page(mut self, page: impl Into<String>) -> Self {
        self.page = Some(page.into());
        self
    }
}

impl OpenAiClient {
    async fn usage(&self, endpoint: &Endpoint, query: &UsageQuery) -> ApiResponseOrError<UsageResponse> {
        self.get_with_query(endpoint.render(&[])?, query).await
    }

    pub async fn usage_completions(&self, query: &UsageQuery) -> ApiResponseOrError<UsageResponse> {
        self.usage(&endpoints::USAGE_COMPLETIONS, query).await
    }

    pub async fn usage_embeddings(&self, query: &UsageQuery) -> ApiResponseOrError<UsageResponse> {
        self.usage(&endpoints::USAGE_EMBEDDINGS, query).await
    }

    pub async fn usage_moderations(&self, query: &UsageQuery) -> ApiResponseOrError<UsageResponse> {
        self.usage(&endpoints::USAGE_MODERATIONS, query).await
    }

    pub async fn usage_images(&self, query: &UsageQuery) -> ApiResponseOrError<UsageResponse> {
        self.usage(&endpoints::USAGE_IMAGES, query).await
    }

    pub async fn usage_audio_speeches(&self, query: &UsageQuery) -> ApiResponseOrError<UsageResponse> {
        self.usage(&endpoints::USAGE_AUDIO_SPEECHES, query).await
    }

    pub async fn usage_audio_transcriptions(
        &self,
        query: &UsageQuery,
    ) -> ApiResponseOrError<UsageResponse> {
        self.usage(&endpoints::USAGE_AUDIO_TRANSCRIPTIONS, query).await
    }

    pub async fn usage_vector_stores(&self, query: &UsageQuery) -> ApiResponseOrError<UsageResponse> {
        self.usage(&endpoints::USAGE_VECTOR_STORES, query).await
    }

    pub async fn usage_code_interpreter_sessions(
        &self,
        query: &UsageQuery,
    ) -> ApiResponseOrError<UsageResponse> {
        self.usage(&endpoints::USAGE_CODE_INTERPRETER_SESSIONS, query)
            .await
    }

    /// Costs only support daily buckets.
    pub async fn usage_costs(&self, query: &UsageQuery) -> ApiResponseOrError<UsageResponse> {
        self.usage(&endpoints::USAGE_COSTS, query).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn completions_page() {
        let page: UsageResponse = serde_json::from_value(json!({
            "object": "page",
            "data": [{
                "object": "bucket",
                "start_time": 1730419200,
                "end_time": 1730505600,
                "results": [{
                    "object": "organization.usage.completions.result",
                    "input_tokens": 1000,
                    "output_tokens": 500,
                    "input_cached_tokens": 800,
                    "input_audio_tokens": 0,
                    "output_audio_tokens": 0,
                    "num_model_requests": 5,
                    "project_id": null,
                    "user_id": null,
                    "api_key_id": null,
                    "model": "gpt-4o-mini-2024-07-18",
                    "batch": null
                }]
            }],
            "has_more": true,
            "next_page": "page_AAAAAGdGxdEiJdKOAAAAAGcqsYA="
        }))
        .unwrap();
        assert!(page.has_more);
        let UsageResult::Completions(usage) = &page.data[0].results[0] else {
            panic!("expected completions usage");
        };
        assert_eq!(usage.input_cached_tokens, Some(800));
        assert_eq!(usage.group.model.as_deref(), Some("gpt-4o-mini-2024-07-18"));
        assert_eq!(usage.group.project_id, None);
    }

    #[test]
    fn costs_page() {
        let page: UsageResponse = serde_json::from_value(json!({
            "object": "page",
            "data": [{
                "object": "bucket",
                "start_time": 1730419200,
                "end_time": 1730505600,
                "results": [{
                    "object": "organization.costs.result",
                    "amount": { "value": 0.06, "currency": "usd" },
                    "line_item": null,
                    "project_id": null
                }]
            }],
            "has_more": false,
            "next_page": null
        }))
        .unwrap();
        assert!(matches!(
            &page.data[0].results[0],
            UsageResult::Costs(CostsResult { amount, .. }) if amount.currency == "usd"
        ));
    }

    #[test]
    fn other_result_kinds() {
        let results: Vec<UsageResult> = serde_json::from_value(json!([
            {
                "object": "organization.usage.vector_stores.result",
                "usage_bytes": 1024,
                "project_id": null
            },
            {
                "object": "organization.usage.code_interpreter_sessions.result",
                "num_sessions": 1,
                "project_id": null
            },
            {
                "object": "organization.usage.audio_speeches.result",
                "characters": 45,
                "num_model_requests": 1,
                "project_id": "proj_abc"
            }
        ]))
        .unwrap();
        assert!(matches!(results[0], UsageResult::VectorStores(VectorStoresUsage { usage_bytes: 1024, .. })));
        assert!(matches!(
            &results[2],
            UsageResult::AudioSpeeches(usage) if usage.group.project_id.as_deref() == Some("proj_abc")
        ));
    }

    #[test]
    fn query_encoding() {
        let query = UsageQuery::new(1730419200)
            .bucket_width(BucketWidth::Hour)
            .group_by("model")
            .group_by("project_id");
        assert_eq!(
            serde_json::to_value(query).unwrap(),
            json!({
                "start_time": 1730419200,
                "bucket_width": "1h",
                "group_by": ["model", "project_id"]
            })
        );
    }
}
