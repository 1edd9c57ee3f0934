use derive_builder::Builder;
use serde::{Deserialize, Serialize};

use crate::{client::OpenAiClient, endpoints, ApiResponseOrError, ListQuery, ListResponse, OpenAiError};

/// Per-model limits of a project.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct ProjectRateLimit {
    pub object: String,
    pub id: String,
    pub model: String,
    pub max_requests_per_1_minute: u64,
    pub max_tokens_per_1_minute: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_images_per_1_minute: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_audio_megabytes_per_1_minute: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_requests_per_1_day: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub batch_1_day_max_input_tokens: Option<u64>,
}

/// Fields left unset keep their current value.
#[derive(Serialize, Deserialize, Builder, Debug, Clone, Default, PartialEq, Eq)]
#[builder(name = "ProjectRateLimitUpdateRequestBuilder")]
#[builder(pattern = "owned")]
#[builder(setter(strip_option, into))]
#[builder(build_fn(error = "OpenAiError"))]
pub struct ProjectRateLimitUpdateRequest {
    #[builder(default)]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_requests_per_1_minute: Option<u64>,
    #[builder(default)]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_tokens_per_1_minute: Option<u64>,
    #[builder(default)]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_images_per_1_minute: Option<u64>,
    #[builder(default)]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_audio_megabytes_per_1_minute: Option<u64>,
    #[builder(default)]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_requests_per_1_day: Option<u64>,
    #[builder(default)]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub batch_1_day_max_input_tokens: Option<u64>,
}

impl ProjectRateLimitUpdateRequest {
    pub fn builder() -> ProjectRateLimitUpdateRequestBuilder {
        ProjectRateLimitUpdateRequestBuilder::create_empty()
    }
}

impl OpenAiClient {
    pub async fn list_project_rate_limits(
        &self,
        project_id: &str,
        query: &ListQuery,
    ) -> ApiResponseOrError<ListResponse<ProjectRateLimit>> {
        self.get_with_query(endpoints::LIST_PROJECT_RATE_LIMITS.render(&[project_id])?, query)
            .await
    }

    pub async fn update_project_rate_limits(
        &self,
        project_id: &str,
        rate_limit_id: &str,
        request: ProjectRateLimitUpdateRequest,
    ) -> ApiResponseOrError<ProjectRateLimit> {
        self.post(
            endpoints::UPDATE_PROJECT_RATE_LIMITS.render(&[project_id, rate_limit_id])?,
            request,
        )
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn update_sends_only_set_limits() {
        let request = ProjectRateLimitUpdateRequest::builder()
            .max_requests_per_1_minute(500u64)
            .build()
            .unwrap();
        assert_eq!(
            serde_json::to_value(request).unwrap(),
            json!({ "max_requests_per_1_minute": 500 })
        );
    }

    #[test]
    fn chat_model_limit() {
        let limit: ProjectRateLimit = serde_json::from_value(json!({
            "object": "project.rate_limit",
            "id": "rl-ada",
            "model": "ada",
            "max_requests_per_1_minute": 600,
            "max_tokens_per_1_minute": 150000,
            "max_images_per_1_minute": 10
        }))
        .unwrap();
        assert_eq!(limit.max_images_per_1_minute, Some(10));
        assert_eq!(limit.max_requests_per_1_day, None);
    }
}
