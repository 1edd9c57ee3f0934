//! Get a vector representation of a given input that can be easily consumed by machine learning models and algorithms.

use crate::{client::OpenAiClient, endpoints, ApiResponseOrError, OpenAiError};
use derive_builder::Builder;
use derive_more::From;
use serde::{Deserialize, Serialize};

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct Embeddings {
    pub object: String,
    pub data: Vec<Embedding>,
    pub model: String,
    pub usage: EmbeddingsUsage,
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct Embedding {
    pub object: String,
    pub index: u32,
    #[serde(rename = "embedding")]
    pub vec: EmbeddingVector,
}

/// Floats by default, a base64 string with `encoding_format: base64`.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(untagged)]
pub enum EmbeddingVector {
    Float(Vec<f32>),
    Base64(String),
}

#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct EmbeddingsUsage {
    pub prompt_tokens: u32,
    pub total_tokens: u32,
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq, From)]
#[serde(untagged)]
pub enum EmbeddingInput {
    String(String),
    Strings(Vec<String>),
    Tokens(Vec<u32>),
    TokenArrays(Vec<Vec<u32>>),
}

impl From<&str> for EmbeddingInput {
    fn from(value: &str) -> Self {
        EmbeddingInput::String(value.to_string())
    }
}

#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum EncodingFormat {
    Float,
    Base64,
}

#[derive(Serialize, Deserialize, Builder, Debug, Clone, PartialEq)]
#[builder(pattern = "owned")]
#[builder(name = "EmbeddingsBuilder")]
#[builder(setter(strip_option, into))]
#[builder(build_fn(error = "OpenAiError"))]
pub struct EmbeddingRequest {
    pub model: String,
    /// Must not exceed the max input tokens for the model, and cannot be an empty string.
    pub input: EmbeddingInput,
    #[builder(default)]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub encoding_format: Option<EncodingFormat>,
    /// Only supported in `text-embedding-3` and later models.
    #[builder(default)]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dimensions: Option<u32>,
    #[builder(default)]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user: Option<String>,
}

impl Embeddings {
    pub fn builder(model: &str, input: impl Into<EmbeddingInput>) -> EmbeddingsBuilder {
        EmbeddingsBuilder::create_empty().model(model).input(input)
    }
}

impl EmbeddingsBuilder {
    pub async fn create(self, client: &OpenAiClient) -> ApiResponseOrError<Embeddings> {
        client.create_embedding(self.build()?).await
    }
}

impl OpenAiClient {
    pub async fn create_embedding(
        &self,
        request: EmbeddingRequest,
    ) -> ApiResponseOrError<Embeddings> {
        self.post(endpoints::CREATE_EMBEDDING.render(&[])?, request)
            .await
    }
}
