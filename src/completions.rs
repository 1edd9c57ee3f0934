//! Given a prompt, the model will return one or more predicted completions,
//! and can also return the probabilities of alternative tokens at each position.

use crate::{
    chat::{FinishReason, StreamOptions, Usage},
    client::OpenAiClient,
    endpoints, ApiResponseOrError, OpenAiError,
};
use derive_builder::Builder;
use derive_more::From;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct Completion {
    pub id: String,
    pub object: String,
    pub created: u64,
    pub model: String,
    pub choices: Vec<CompletionChoice>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub usage: Option<Usage>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub system_fingerprint: Option<String>,
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct CompletionChoice {
    pub text: String,
    pub index: u32,
    pub logprobs: Option<CompletionLogprobs>,
    pub finish_reason: FinishReason,
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Default)]
pub struct CompletionLogprobs {
    #[serde(default)]
    pub text_offset: Vec<u32>,
    #[serde(default)]
    pub token_logprobs: Vec<Option<f64>>,
    #[serde(default)]
    pub tokens: Vec<String>,
    #[serde(default)]
    pub top_logprobs: Vec<Option<HashMap<String, f64>>>,
}

/// A string, an array of strings, an array of tokens, or an array of token arrays.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq, From)]
#[serde(untagged)]
pub enum Prompt {
    String(String),
    Strings(Vec<String>),
    Tokens(Vec<u32>),
    TokenArrays(Vec<Vec<u32>>),
}

impl From<&str> for Prompt {
    fn from(value: &str) -> Self {
        Prompt::String(value.to_string())
    }
}

#[derive(Serialize, Deserialize, Builder, Debug, Clone, PartialEq)]
#[builder(pattern = "owned")]
#[builder(name = "CompletionBuilder")]
#[builder(setter(strip_option, into))]
#[builder(build_fn(error = "OpenAiError"))]
pub struct CompletionRequest {
    pub model: String,
    /// `<|endoftext|>` is the document separator the model sees during training.
    pub prompt: Prompt,
    #[builder(default)]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub suffix: Option<String>,
    #[builder(default)]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_tokens: Option<u32>,
    #[builder(default)]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f32>,
    #[builder(default)]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub top_p: Option<f32>,
    #[builder(default)]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub n: Option<u16>,
    #[builder(default)]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stream: Option<bool>,
    #[builder(default)]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stream_options: Option<StreamOptions>,
    /// At most 5.
    #[builder(default)]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logprobs: Option<u8>,
    #[builder(default)]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub echo: Option<bool>,
    #[builder(default)]
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub stop: Vec<String>,
    #[builder(default)]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub presence_penalty: Option<f32>,
    #[builder(default)]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub frequency_penalty: Option<f32>,
    /// Results cannot be streamed when set.
    #[builder(default)]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub best_of: Option<u16>,
    #[builder(default)]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logit_bias: Option<HashMap<String, i8>>,
    #[builder(default)]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seed: Option<i64>,
    #[builder(default)]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user: Option<String>,
}

impl Completion {
    pub fn builder(model: &str) -> CompletionBuilder {
        CompletionBuilder::create_empty().model(model)
    }
}

impl CompletionBuilder {
    pub async fn create(self, client: &OpenAiClient) -> ApiResponseOrError<Completion> {
        client.create_completion(self.build()?).await
    }
}

impl OpenAiClient {
    pub async fn create_completion(
        &self,
        request: CompletionRequest,
    ) -> ApiResponseOrError<Completion> {
        self.post(endpoints::CREATE_COMPLETION.render(&[])?, request)
            .await
    }
}
