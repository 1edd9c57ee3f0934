//! Given a chat conversation, the model will return a chat completion response.
pub mod structured_output;

use crate::{
    client::OpenAiClient, endpoints, schema::TopLogprobs, ApiResponseOrError, DeletionStatus,
    Extra, FunctionObject, ListQuery, ListResponse, Metadata, OpenAiError, Order,
};
use derive_builder::Builder;
use derive_more::From;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;
use structured_output::{JsonSchemaStyle, ResponseFormatJsonSchema};

/// A full chat completion.
pub type ChatCompletion = ChatCompletionGeneric<ChatCompletionChoice>;

/// A chunk of a streamed chat completion.
pub type ChatCompletionChunk = ChatCompletionGeneric<ChatCompletionChoiceDelta>;

#[derive(Deserialize, Serialize, Clone, Debug, PartialEq)]
pub struct ChatCompletionGeneric<C> {
    pub id: String,
    pub object: ChatCompletionObject,
    pub created: u64,
    pub model: String,
    pub choices: Vec<C>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub usage: Option<Usage>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub system_fingerprint: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub service_tier: Option<String>,
    #[serde(flatten)]
    pub extra: Extra,
}

#[derive(Deserialize, Serialize, Clone, Copy, Debug, Eq, PartialEq)]
pub enum ChatCompletionObject {
    #[serde(rename = "chat.completion")]
    ChatCompletion,
    #[serde(rename = "chat.completion.chunk")]
    ChatCompletionChunk,
}

#[derive(Deserialize, Serialize, Clone, Copy, Debug, Eq, PartialEq)]
#[serde(rename_all = "snake_case")]
pub enum FinishReason {
    Stop,
    Length,
    ToolCalls,
    ContentFilter,
    FunctionCall,
}

#[derive(Deserialize, Serialize, Clone, Debug, PartialEq)]
pub struct ChatCompletionChoice {
    pub index: u64,
    pub finish_reason: FinishReason,
    pub message: ChatCompletionResponseMessage,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logprobs: Option<ChoiceLogprobs>,
}

#[derive(Deserialize, Serialize, Clone, Debug, PartialEq)]
pub struct ChatCompletionChoiceDelta {
    pub index: u64,
    pub finish_reason: Option<FinishReason>,
    pub delta: ChatCompletionMessageDelta,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logprobs: Option<ChoiceLogprobs>,
}

#[derive(Deserialize, Serialize, Clone, Debug, PartialEq)]
pub struct ChoiceLogprobs {
    pub content: Option<Vec<TokenLogprob>>,
    #[serde(default)]
    pub refusal: Option<Vec<TokenLogprob>>,
}

#[derive(Deserialize, Serialize, Clone, Debug, PartialEq)]
pub struct TokenLogprob {
    pub token: String,
    pub logprob: f64,
    /// UTF-8 bytes of the token, `null` when the token has no byte representation.
    pub bytes: Option<Vec<u8>>,
    pub top_logprobs: Vec<TopLogprob>,
}

#[derive(Deserialize, Serialize, Clone, Debug, PartialEq)]
pub struct TopLogprob {
    pub token: String,
    pub logprob: f64,
    pub bytes: Option<Vec<u8>>,
}

#[derive(Deserialize, Serialize, Clone, Debug, Eq, PartialEq, Default)]
pub struct Usage {
    pub prompt_tokens: u32,
    pub completion_tokens: u32,
    pub total_tokens: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prompt_tokens_details: Option<PromptTokensDetails>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completion_tokens_details: Option<CompletionTokensDetails>,
}

#[derive(Deserialize, Serialize, Clone, Debug, Eq, PartialEq, Default)]
pub struct PromptTokensDetails {
    pub cached_tokens: Option<u32>,
    pub audio_tokens: Option<u32>,
}

#[derive(Deserialize, Serialize, Clone, Debug, Eq, PartialEq, Default)]
pub struct CompletionTokensDetails {
    pub reasoning_tokens: Option<u32>,
    pub audio_tokens: Option<u32>,
    pub accepted_prediction_tokens: Option<u32>,
    pub rejected_prediction_tokens: Option<u32>,
}

fn is_none_or_empty_vec<T>(opt: &Option<Vec<T>>) -> bool {
    opt.as_ref().map(|v| v.is_empty()).unwrap_or(true)
}

#[derive(Deserialize, Serialize, Debug, Clone, Eq, PartialEq, Default)]
#[serde(rename_all = "snake_case")]
pub enum ImageDetail {
    #[default]
    Auto,
    High,
    Low,
}

#[derive(Deserialize, Serialize, Debug, Clone, Eq, PartialEq)]
pub struct ImageUrl {
    /// Either a URL of the image or the base64 encoded image data.
    pub url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub detail: Option<ImageDetail>,
}

#[derive(Deserialize, Serialize, Debug, Clone, Eq, PartialEq)]
pub struct InputAudio {
    /// Base64 encoded audio data.
    pub data: String,
    /// `wav` or `mp3`.
    pub format: String,
}

#[derive(Deserialize, Serialize, Debug, Clone, Eq, PartialEq)]
pub struct FileContent {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file_id: Option<String>,
    /// Base64 encoded file data.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file_data: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filename: Option<String>,
}

#[derive(Deserialize, Serialize, Debug, Clone, Eq, PartialEq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum TextContent {
    Text { text: String },
}

#[derive(Deserialize, Serialize, Debug, Clone, Eq, PartialEq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum AssistantContent {
    Text { text: String },
    Refusal { refusal: String },
}

#[derive(Deserialize, Serialize, Debug, Clone, Eq, PartialEq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum UserContent {
    Text { text: String },
    ImageUrl { image_url: ImageUrl },
    InputAudio { input_audio: InputAudio },
    File { file: FileContent },
}

#[derive(Deserialize, Serialize, Debug, Clone, Eq, PartialEq, From)]
#[serde(untagged)]
pub enum StringOrArray<T> {
    String(String),
    Array(Vec<T>),
}

#[derive(Deserialize, Serialize, Debug, Clone, Eq, PartialEq, From)]
#[serde(tag = "role", rename_all = "snake_case")]
pub enum ChatMessage {
    #[from(skip)]
    Developer {
        content: StringOrArray<TextContent>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        name: Option<String>,
    },
    #[from(skip)]
    System {
        content: StringOrArray<TextContent>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        name: Option<String>,
    },
    #[from(skip)]
    User {
        content: StringOrArray<UserContent>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        name: Option<String>,
    },
    Assistant(ChatCompletionMessage),
    #[from(skip)]
    Tool {
        content: StringOrArray<TextContent>,
        tool_call_id: String,
    },
    /// Deprecated, use `Tool` instead.
    #[from(skip)]
    Function {
        content: Option<String>,
        name: String,
    },
}

impl ChatMessage {
    pub fn developer(content: impl Into<String>) -> Self {
        ChatMessage::Developer {
            content: StringOrArray::String(content.into()),
            name: None,
        }
    }

    pub fn system(content: impl Into<String>) -> Self {
        ChatMessage::System {
            content: StringOrArray::String(content.into()),
            name: None,
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        ChatMessage::User {
            content: StringOrArray::String(content.into()),
            name: None,
        }
    }

    pub fn tool(tool_call_id: impl Into<String>, content: impl Into<String>) -> Self {
        ChatMessage::Tool {
            content: StringOrArray::String(content.into()),
            tool_call_id: tool_call_id.into(),
        }
    }
}

/// A message stored with a chat completion, as returned by `getChatCompletionMessages`.
#[derive(Deserialize, Serialize, Debug, Clone, Eq, PartialEq)]
pub struct StoredChatMessage {
    pub id: String,
    #[serde(flatten)]
    pub message: ChatMessage,
}

#[derive(Deserialize, Serialize, Debug, Clone, Eq, PartialEq, Default)]
pub struct Audio {
    pub id: String,
    #[serde(default, skip_serializing)]
    pub expires_at: i64,
    #[serde(default, skip_serializing)]
    pub data: String,
    #[serde(default, skip_serializing)]
    pub transcript: String,
}

#[derive(Deserialize, Serialize, Debug, Clone, Eq, PartialEq)]
pub struct UrlCitation {
    pub end_index: u32,
    pub start_index: u32,
    pub url: String,
    pub title: String,
}

#[derive(Deserialize, Serialize, Debug, Clone, Eq, PartialEq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Annotation {
    UrlCitation { url_citation: UrlCitation },
}

#[derive(Deserialize, Serialize, Debug, Clone, Eq, PartialEq, Default)]
pub struct ChatCompletionMessage {
    /// The contents of the message.
    ///
    /// `None` when the assistant only calls tools.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<StringOrArray<AssistantContent>>,
    /// The refusal message generated by the model.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub refusal: Option<String>,
    /// Deprecated, use `tool_calls` instead.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub function_call: Option<ChatCompletionFunctionCall>,
    #[serde(default, skip_serializing_if = "is_none_or_empty_vec")]
    pub tool_calls: Option<Vec<ToolCall>>,
    /// Data about the audio response when the audio output modality is requested.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub audio: Option<Audio>,
    /// Web search citations.
    #[serde(default, skip_serializing_if = "is_none_or_empty_vec")]
    pub annotations: Option<Vec<Annotation>>,
}

impl ChatCompletionMessage {
    /// The text content, if the model answered with text.
    pub fn text(&self) -> Option<String> {
        match self.content.as_ref()? {
            StringOrArray::String(text) => Some(text.clone()),
            StringOrArray::Array(parts) => Some(
                parts
                    .iter()
                    .filter_map(|part| match part {
                        AssistantContent::Text { text } => Some(text.as_str()),
                        AssistantContent::Refusal { .. } => None,
                    })
                    .collect(),
            ),
        }
    }
}

#[derive(Deserialize, Serialize, Clone, Copy, Debug, Eq, PartialEq)]
#[serde(rename_all = "snake_case")]
pub enum ChatRole {
    Developer,
    System,
    User,
    Assistant,
    Tool,
}

#[derive(Deserialize, Serialize, Clone, Copy, Debug, Default, Eq, PartialEq)]
#[serde(rename_all = "snake_case")]
pub enum AssistantRole {
    #[default]
    Assistant,
}

/// The message of a completion choice: an assistant message with its `role`.
#[derive(Deserialize, Serialize, Debug, Clone, Eq, PartialEq, Default)]
pub struct ChatCompletionResponseMessage {
    pub role: AssistantRole,
    #[serde(flatten)]
    pub message: ChatCompletionMessage,
}

impl std::ops::Deref for ChatCompletionResponseMessage {
    type Target = ChatCompletionMessage;

    fn deref(&self) -> &ChatCompletionMessage {
        &self.message
    }
}

impl From<ChatCompletionResponseMessage> for ChatMessage {
    fn from(value: ChatCompletionResponseMessage) -> Self {
        ChatMessage::Assistant(value.message)
    }
}

/// Same as ChatCompletionMessage, but received during a response stream.
#[derive(Deserialize, Serialize, Clone, Debug, Eq, PartialEq, Default)]
pub struct ChatCompletionMessageDelta {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<ChatRole>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub refusal: Option<String>,
    /// Deprecated, use `tool_calls` instead.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub function_call: Option<ChatCompletionFunctionCallDelta>,
    #[serde(default, skip_serializing_if = "is_none_or_empty_vec")]
    pub tool_calls: Option<Vec<ToolCallDelta>>,
}

#[derive(Deserialize, Serialize, Clone, Debug, PartialEq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ChatCompletionTool {
    Function { function: FunctionObject },
}

impl ChatCompletionTool {
    pub fn new<T: JsonSchema>(strict: bool) -> ApiResponseOrError<Self> {
        let function = FunctionObject::from_schema::<T>(strict, JsonSchemaStyle::OpenAI)?;
        Ok(ChatCompletionTool::Function { function })
    }
}

#[derive(Deserialize, Serialize, Clone, Copy, Debug, Eq, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum ToolChoiceMode {
    None,
    Auto,
    Required,
}

#[derive(Deserialize, Serialize, Clone, Debug, Eq, PartialEq)]
pub struct FunctionChoice {
    /// The name of the function to call.
    pub name: String,
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct FunctionLiteral;
impl Serialize for FunctionLiteral {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str("function")
    }
}
impl<'de> Deserialize<'de> for FunctionLiteral {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        if s != "function" {
            return Err(serde::de::Error::custom("expected function"));
        }
        Ok(FunctionLiteral)
    }
}

#[derive(Deserialize, Serialize, Clone, Debug, Eq, PartialEq)]
#[serde(untagged)]
pub enum ToolChoice {
    /// `none` means the model will not call any tool and instead generates a message.
    /// `auto` means the model can pick between generating a message or calling one or more tools.
    /// `required` means the model must call one or more tools.
    Mode(ToolChoiceMode),
    /// The model will call the function with the given name.
    Function {
        r#type: FunctionLiteral,
        function: FunctionChoice,
    },
}

impl ToolChoice {
    pub fn mode(mode: ToolChoiceMode) -> Self {
        ToolChoice::Mode(mode)
    }

    pub fn function(name: impl Into<String>) -> Self {
        ToolChoice::Function {
            r#type: FunctionLiteral,
            function: FunctionChoice { name: name.into() },
        }
    }
}

#[derive(Deserialize, Serialize, Clone, Debug, Eq, PartialEq)]
pub struct ToolCall {
    pub id: String,
    /// Currently, only `function` is supported.
    pub r#type: FunctionLiteral,
    pub function: ToolCallFunction,
}

#[derive(Deserialize, Serialize, Clone, Debug, Eq, PartialEq)]
pub struct ToolCallDelta {
    pub index: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub r#type: Option<FunctionLiteral>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub function: Option<ChatCompletionFunctionCallDelta>,
}

#[derive(Deserialize, Serialize, Clone, Debug, Eq, PartialEq)]
pub struct ToolCallFunction {
    pub name: String,
    /// The arguments to call the function with, as generated by the model in
    /// JSON format. The model does not always generate valid JSON.
    pub arguments: String,
}

impl ToolCallFunction {
    pub fn parse_arguments<T: serde::de::DeserializeOwned>(&self) -> ApiResponseOrError<T> {
        Ok(serde_json::from_str(&self.arguments)?)
    }
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
pub struct ChatCompletionFunctionCall {
    pub name: String,
    pub arguments: String,
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
pub struct ChatCompletionFunctionCallDelta {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub arguments: Option<String>,
}

#[derive(Deserialize, Serialize, Debug, Clone, Copy, Eq, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum ReasoningEffort {
    Low,
    Medium,
    High,
}

#[derive(Deserialize, Serialize, Debug, Clone, Eq, PartialEq)]
pub struct AudioOptions {
    pub voice: String,
    /// One of `wav`, `mp3`, `flac`, `opus` or `pcm16`.
    pub format: String,
}

#[derive(Deserialize, Serialize, Debug, Clone, Eq, PartialEq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Prediction {
    /// Static content, e.g. a file being regenerated with minor changes.
    Content { content: StringOrArray<TextContent> },
}

#[derive(Deserialize, Serialize, Debug, Clone, Eq, PartialEq)]
pub struct StreamOptions {
    /// Streams a final chunk carrying the usage of the whole request.
    pub include_usage: bool,
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ChatCompletionResponseFormat {
    Text,
    JsonObject,
    JsonSchema { json_schema: ResponseFormatJsonSchema },
}

impl ChatCompletionResponseFormat {
    pub fn json_schema<T: JsonSchema>(strict: bool) -> ApiResponseOrError<Self> {
        let json_schema = ResponseFormatJsonSchema::new::<T>(strict, JsonSchemaStyle::OpenAI)?;
        Ok(ChatCompletionResponseFormat::JsonSchema { json_schema })
    }
}

#[derive(Serialize, Deserialize, Builder, Debug, Clone, PartialEq)]
#[builder(derive(Clone, Debug, PartialEq))]
#[builder(pattern = "owned")]
#[builder(name = "ChatCompletionBuilder")]
#[builder(setter(strip_option, into))]
#[builder(build_fn(error = "OpenAiError"))]
pub struct ChatCompletionRequest {
    /// Model ID used to generate the response, like `gpt-4o` or `o3`.
    pub model: String,
    pub messages: Vec<ChatMessage>,
    /// Whether to store the output for model distillation or evals.
    #[builder(default)]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub store: Option<bool>,
    #[builder(default)]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Metadata>,
    /// Constrains effort on reasoning for reasoning models.
    #[builder(default)]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reasoning_effort: Option<ReasoningEffort>,
    /// Sampling temperature between 0 and 2.
    #[builder(default)]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f32>,
    #[builder(default)]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub top_p: Option<f32>,
    /// How many chat completion choices to generate for each input message.
    #[builder(default)]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub n: Option<u8>,
    /// `["text"]` by default, `["text", "audio"]` for audio capable models.
    #[builder(default)]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub modalities: Option<Vec<String>>,
    /// Required when audio output is requested with `modalities: ["audio"]`.
    #[builder(default)]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub audio: Option<AudioOptions>,
    #[builder(default)]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prediction: Option<Prediction>,
    #[builder(default)]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stream: Option<bool>,
    #[builder(default)]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stream_options: Option<StreamOptions>,
    /// Up to 4 sequences where the API will stop generating further tokens.
    #[builder(default)]
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub stop: Vec<String>,
    #[builder(default)]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
    /// Deprecated in favor of `max_completion_tokens`, and not compatible with o-series models.
    #[builder(default)]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_tokens: Option<u64>,
    /// Upper bound for generated tokens, including reasoning tokens.
    #[builder(default)]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_completion_tokens: Option<u64>,
    #[builder(default)]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub presence_penalty: Option<f32>,
    #[builder(default)]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub frequency_penalty: Option<f32>,
    /// Maps token IDs to a bias value from -100 to 100.
    #[builder(default)]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logit_bias: Option<HashMap<String, f32>>,
    #[builder(default)]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logprobs: Option<bool>,
    /// Requires `logprobs`.
    #[builder(default)]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub top_logprobs: Option<TopLogprobs>,
    #[builder(default)]
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub user: String,
    /// A max of 128 functions are supported.
    #[builder(default)]
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tools: Vec<ChatCompletionTool>,
    /// `none` is the default when no tools are present, `auto` if tools are present.
    #[builder(default)]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tool_choice: Option<ToolChoice>,
    #[builder(default)]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parallel_tool_calls: Option<bool>,
    /// Deprecated in favor of `tools`.
    #[builder(default)]
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub functions: Vec<FunctionObject>,
    /// Deprecated in favor of `tool_choice`.
    #[builder(default)]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub function_call: Option<Value>,
    #[builder(default)]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub response_format: Option<ChatCompletionResponseFormat>,
    #[builder(default)]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub service_tier: Option<String>,
    #[builder(default)]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub web_search_options: Option<Value>,
}

impl<C> ChatCompletionGeneric<C> {
    pub fn builder(model: &str, messages: impl Into<Vec<ChatMessage>>) -> ChatCompletionBuilder {
        ChatCompletionBuilder::create_empty()
            .model(model)
            .messages(messages)
    }
}

impl ChatCompletionBuilder {
    pub async fn create(self, client: &OpenAiClient) -> ApiResponseOrError<ChatCompletion> {
        client.create_chat_completion(self.build()?).await
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
pub struct UpdateChatCompletionRequest {
    pub metadata: Metadata,
}

#[derive(Serialize, Debug, Clone, PartialEq, Default)]
pub struct ListChatCompletionsQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,
    /// Sent as `metadata[key]=value`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Metadata>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub after: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order: Option<Order>,
}

impl OpenAiClient {
    pub async fn create_chat_completion(
        &self,
        request: ChatCompletionRequest,
    ) -> ApiResponseOrError<ChatCompletion> {
        self.post(endpoints::CREATE_CHAT_COMPLETION.render(&[])?, request)
            .await
    }

    /// Lists completions created with `store: true`.
    pub async fn list_chat_completions(
        &self,
        query: &ListChatCompletionsQuery,
    ) -> ApiResponseOrError<ListResponse<ChatCompletion>> {
        self.get_with_query(endpoints::LIST_CHAT_COMPLETIONS.render(&[])?, query)
            .await
    }

    pub async fn get_chat_completion(
        &self,
        completion_id: &str,
    ) -> ApiResponseOrError<ChatCompletion> {
        self.get(endpoints::GET_CHAT_COMPLETION.render(&[completion_id])?)
            .await
    }

    /// Only the metadata of a stored completion can be modified.
    pub async fn update_chat_completion(
        &self,
        completion_id: &str,
        request: UpdateChatCompletionRequest,
    ) -> ApiResponseOrError<ChatCompletion> {
        self.post(
            endpoints::UPDATE_CHAT_COMPLETION.render(&[completion_id])?,
            request,
        )
        .await
    }

    pub async fn delete_chat_completion(
        &self,
        completion_id: &str,
    ) -> ApiResponseOrError<DeletionStatus> {
        self.delete(endpoints::DELETE_CHAT_COMPLETION.render(&[completion_id])?)
            .await
    }

    pub async fn get_chat_completion_messages(
        &self,
        completion_id: &str,
        query: &ListQuery,
    ) -> ApiResponseOrError<ListResponse<StoredChatMessage>> {
        self.get_with_query(
            endpoints::GET_CHAT_COMPLETION_MESSAGES.render(&[completion_id])?,
            query,
        )
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema;
    use serde_json::json;

    fn completion_json() -> Value {
        json!({
            "id": "chatcmpl-B9MHDbslfkBeAs8l4bebGdFOJ6PeG",
            "object": "chat.completion",
            "created": 1741570283,
            "model": "gpt-4o-2024-08-06",
            "choices": [{
                "index": 0,
                "message": {
                    "role": "assistant",
                    "content": null,
                    "tool_calls": [{
                        "id": "call_abc",
                        "type": "function",
                        "function": { "name": "get_weather", "arguments": "{\"city\":\"Paris\"}" }
                    }],
                    "refusal": null,
                    "annotations": []
                },
                "logprobs": null,
                "finish_reason": "tool_calls"
            }],
            "usage": {
                "prompt_tokens": 1117,
                "completion_tokens": 46,
                "total_tokens": 1163,
                "prompt_tokens_details": { "cached_tokens": 0, "audio_tokens": 0 },
                "completion_tokens_details": {
                    "reasoning_tokens": 0,
                    "audio_tokens": 0,
                    "accepted_prediction_tokens": 0,
                    "rejected_prediction_tokens": 0
                }
            },
            "service_tier": "default",
            "system_fingerprint": "fp_fc9f1d7035"
        })
    }

    #[derive(Deserialize, Debug, PartialEq)]
    struct WeatherArgs {
        city: String,
    }

    #[test]
    fn completion_with_tool_calls() {
        let completion: ChatCompletion = serde_json::from_value(completion_json()).unwrap();
        let choice = &completion.choices[0];
        assert_eq!(choice.finish_reason, FinishReason::ToolCalls);
        assert_eq!(choice.message.text(), None);

        let call = &choice.message.tool_calls.as_ref().unwrap()[0];
        assert_eq!(
            call.function.parse_arguments::<WeatherArgs>().unwrap(),
            WeatherArgs {
                city: "Paris".to_string()
            }
        );
        assert_eq!(completion.usage.unwrap().total_tokens, 1163);

        schema::validate("CreateChatCompletionResponse", &completion_json()).unwrap();
    }

    #[test]
    fn messages_are_tagged_by_role() {
        let messages = vec![
            ChatMessage::developer("Be terse."),
            ChatMessage::user("Hi"),
            ChatMessage::Assistant(ChatCompletionMessage {
                content: Some(StringOrArray::String("Hello".to_string())),
                ..Default::default()
            }),
            ChatMessage::tool("call_abc", "22C"),
        ];
        assert_eq!(
            serde_json::to_value(&messages).unwrap(),
            json!([
                { "role": "developer", "content": "Be terse." },
                { "role": "user", "content": "Hi" },
                { "role": "assistant", "content": "Hello" },
                { "role": "tool", "content": "22C", "tool_call_id": "call_abc" }
            ])
        );

        let parsed: ChatMessage = serde_json::from_value(json!({
            "role": "user",
            "content": [
                { "type": "text", "text": "What is this?" },
                { "type": "image_url", "image_url": { "url": "https://example.com/cat.png", "detail": "low" } }
            ]
        }))
        .unwrap();
        let ChatMessage::User { content: StringOrArray::Array(parts), .. } = parsed else {
            panic!("expected user content parts");
        };
        assert_eq!(parts.len(), 2);

        assert!(serde_json::from_value::<ChatMessage>(json!({ "role": "robot", "content": "x" })).is_err());
    }

    #[test]
    fn tool_choice_forms() {
        assert_eq!(
            serde_json::to_value(ToolChoice::mode(ToolChoiceMode::Required)).unwrap(),
            json!("required")
        );
        assert_eq!(
            serde_json::to_value(ToolChoice::function("get_weather")).unwrap(),
            json!({ "type": "function", "function": { "name": "get_weather" } })
        );
        assert!(serde_json::from_value::<ToolChoice>(json!({
            "type": "file_search",
            "function": { "name": "x" }
        }))
        .is_err());
    }

    #[test]
    fn builder_requires_model_and_messages() {
        let error = ChatCompletionBuilder::default().build().unwrap_err();
        assert_eq!(error.error_type, "builder");

        let request = ChatCompletion::builder("gpt-4o", [ChatMessage::user("Hello!")])
            .temperature(0.0)
            .top_logprobs(TopLogprobs::new(2).unwrap())
            .logprobs(true)
            .build()
            .unwrap();
        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            json!({
                "model": "gpt-4o",
                "messages": [{ "role": "user", "content": "Hello!" }],
                "temperature": 0.0,
                "logprobs": true,
                "top_logprobs": 2
            })
        );
    }

    #[test]
    fn builder_clone_and_eq() {
        let builder_a = ChatCompletion::builder("gpt-4", []).temperature(0.0).seed(65u64);
        let builder_b = builder_a.clone();
        let builder_c = builder_b.clone().temperature(1.0);
        assert_eq!(builder_a, builder_b);
        assert_ne!(builder_a, builder_c);
    }

    #[test]
    fn request_rejects_out_of_range_top_logprobs() {
        let request = json!({
            "model": "gpt-4o",
            "messages": [{ "role": "user", "content": "Hi" }],
            "top_logprobs": 25
        });
        assert!(schema::validate("CreateChatCompletionRequest", &request).is_err());
    }

    #[test]
    fn stream_chunk() {
        let chunk: ChatCompletionChunk = serde_json::from_value(json!({
            "id": "chatcmpl-123",
            "object": "chat.completion.chunk",
            "created": 1694268190,
            "model": "gpt-4o-mini",
            "system_fingerprint": "fp_44709d6fcb",
            "choices": [{
                "index": 0,
                "delta": {
                    "tool_calls": [{ "index": 0, "function": { "arguments": "{\"ci" } }]
                },
                "logprobs": null,
                "finish_reason": null
            }]
        }))
        .unwrap();
        assert_eq!(chunk.object, ChatCompletionObject::ChatCompletionChunk);
        let delta = &chunk.choices[0].delta;
        let call = &delta.tool_calls.as_ref().unwrap()[0];
        assert_eq!(call.id, None);
        assert_eq!(
            call.function.as_ref().unwrap().arguments.as_deref(),
            Some("{\"ci")
        );
    }

    #[test]
    fn chunk_literals_are_enforced() {
        let chunk = |object: &str, role: &str| {
            json!({
                "id": "chatcmpl-123",
                "object": object,
                "created": 1694268190,
                "model": "gpt-4o-mini",
                "choices": [{
                    "index": 0,
                    "delta": { "role": role, "content": "" },
                    "logprobs": null,
                    "finish_reason": null
                }]
            })
        };
        let parsed: ChatCompletionChunk =
            serde_json::from_value(chunk("chat.completion.chunk", "assistant")).unwrap();
        assert_eq!(parsed.choices[0].delta.role, Some(ChatRole::Assistant));
        schema::validate(
            "CreateChatCompletionStreamResponse",
            &chunk("chat.completion.chunk", "assistant"),
        )
        .unwrap();
        assert!(schema::validate(
            "CreateChatCompletionStreamResponse",
            &chunk("chat.completion.chunk", "narrator")
        )
        .is_err());
        assert!(schema::validate(
            "CreateChatCompletionStreamResponse",
            &chunk("text_completion", "assistant")
        )
        .is_err());
    }

    #[test]
    fn stored_messages() {
        let list: ListResponse<StoredChatMessage> = serde_json::from_value(json!({
            "object": "list",
            "data": [
                { "id": "chatcmpl-AyPNinnUqUDYo9SAdA52NobMflmj2-0", "role": "user", "content": "write a haiku about ai", "name": null, "content_parts": null }
            ],
            "first_id": "chatcmpl-AyPNinnUqUDYo9SAdA52NobMflmj2-0",
            "last_id": "chatcmpl-AyPNinnUqUDYo9SAdA52NobMflmj2-0",
            "has_more": false
        }))
        .unwrap();
        assert!(matches!(list.data[0].message, ChatMessage::User { .. }));
    }

    #[test]
    fn list_query_encodes_metadata() {
        let query = ListChatCompletionsQuery {
            model: Some("gpt-4o".to_string()),
            metadata: Some([("team".to_string(), "infra".to_string())].into()),
            ..Default::default()
        };
        let value = serde_json::to_value(query).unwrap();
        let pairs = crate::client::query_pairs(value.as_object().unwrap());
        assert!(pairs.contains(&("metadata[team]".to_string(), "infra".to_string())));
    }
}
