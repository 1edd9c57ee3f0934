//! The Responses API: stateful model responses with built-in tools.

use derive_builder::Builder;
use derive_more::From;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use crate::{
    chat::{
        structured_output::{JsonSchemaStyle, ResponseFormatJsonSchema},
        ReasoningEffort, ToolChoiceMode,
    },
    client::OpenAiClient,
    endpoints,
    schema::MaxNumResults,
    ApiResponseOrError, DeletionStatus, Extra, ListResponse, Metadata, OpenAiError, Order,
};

/// Pass as `include` to get the results of file search calls.
pub const FILE_SEARCH_CALL_RESULTS: &str = "file_search_call.results";
/// Pass as `include` to get encrypted reasoning items for stateless multi-turn use.
pub const REASONING_ENCRYPTED_CONTENT: &str = "reasoning.encrypted_content";

/// A model response.
///
/// Fields the crate does not model yet are kept in `extra`.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Response {
    pub id: String,
    pub object: String,
    pub created_at: u64,
    pub status: ResponseStatus,
    pub model: String,
    pub output: Vec<ResponseItem>,
    #[serde(default)]
    pub error: Option<ResponseError>,
    #[serde(default)]
    pub incomplete_details: Option<ResponseIncompleteDetails>,
    #[serde(default)]
    pub previous_response_id: Option<String>,
    #[serde(default)]
    pub usage: Option<ResponseUsage>,
    #[serde(default)]
    pub metadata: Option<Metadata>,
    #[serde(flatten)]
    pub extra: Extra,
}

impl Response {
    pub fn builder(model: impl Into<String>, input: impl Into<ResponseInput>) -> CreateResponseBuilder {
        CreateResponseBuilder::create_empty().model(model).input(input)
    }

    /// Concatenated text of every `output_text` part of the output messages.
    pub fn output_text(&self) -> String {
        self.output
            .iter()
            .filter_map(|item| match item {
                ResponseItem::Message(message) => Some(message),
                _ => None,
            })
            .flat_map(|message| &message.content)
            .filter_map(|part| match part {
                ContentPart::OutputText { text, .. } => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }

    /// Function calls the model asked for in this response.
    pub fn function_calls(&self) -> impl Iterator<Item = &FunctionToolCall> {
        self.output.iter().filter_map(|item| match item {
            ResponseItem::FunctionCall(call) => Some(call),
            _ => None,
        })
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ResponseStatus {
    Completed,
    Failed,
    InProgress,
    Cancelled,
    Queued,
    Incomplete,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct ResponseError {
    pub code: String,
    pub message: String,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct ResponseIncompleteDetails {
    /// `max_output_tokens` or `content_filter`.
    pub reason: String,
}

#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq, Eq)]
pub struct ResponseUsage {
    pub input_tokens: u32,
    #[serde(default)]
    pub input_tokens_details: Option<InputTokensDetails>,
    pub output_tokens: u32,
    #[serde(default)]
    pub output_tokens_details: Option<OutputTokensDetails>,
    pub total_tokens: u32,
}

#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq, Eq)]
pub struct InputTokensDetails {
    pub cached_tokens: u32,
}

#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq, Eq)]
pub struct OutputTokensDetails {
    pub reasoning_tokens: u32,
}

/// An item of a response's input or output.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ResponseItem {
    Message(ResponseMessage),
    FunctionCall(FunctionToolCall),
    FunctionCallOutput(FunctionCallOutput),
    FileSearchCall(FileSearchToolCall),
    WebSearchCall(WebSearchToolCall),
    ComputerCall(ComputerToolCall),
    ComputerCallOutput(ComputerCallOutput),
    Reasoning(ReasoningItem),
    ImageGenerationCall(ImageGenerationCall),
    CodeInterpreterCall(CodeInterpreterToolCall),
    LocalShellCall(LocalShellCall),
    LocalShellCallOutput(LocalShellCallOutput),
    McpListTools(McpListTools),
    McpApprovalRequest(McpApprovalRequest),
    McpApprovalResponse(McpApprovalResponse),
    McpCall(McpCall),
    /// An item of an earlier response, referenced by ID.
    ItemReference { id: String },
}

/// Progress of a built-in tool call.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum CallStatus {
    InProgress,
    Searching,
    Generating,
    Interpreting,
    Completed,
    Incomplete,
    Failed,
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ItemStatus {
    InProgress,
    Completed,
    Incomplete,
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ResponseRole {
    User,
    Assistant,
    System,
    Developer,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct ResponseMessage {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub role: ResponseRole,
    pub content: Vec<ContentPart>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<ItemStatus>,
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum ImageDetail {
    Low,
    High,
    #[default]
    Auto,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ContentPart {
    InputText {
        text: String,
    },
    InputImage {
        #[serde(default)]
        detail: ImageDetail,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        image_url: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        file_id: Option<String>,
    },
    InputFile {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        file_id: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        filename: Option<String>,
        /// Base64 data URL of the file.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        file_data: Option<String>,
    },
    OutputText {
        text: String,
        #[serde(default)]
        annotations: Vec<ResponseAnnotation>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        logprobs: Option<Vec<Value>>,
    },
    Refusal {
        refusal: String,
    },
}

impl ContentPart {
    pub fn input_text(text: impl Into<String>) -> Self {
        ContentPart::InputText { text: text.into() }
    }

    pub fn input_image_url(url: impl Into<String>) -> Self {
        ContentPart::InputImage {
            detail: ImageDetail::Auto,
            image_url: Some(url.into()),
            file_id: None,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ResponseAnnotation {
    FileCitation {
        file_id: String,
        index: u32,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        filename: Option<String>,
    },
    UrlCitation {
        url: String,
        title: String,
        start_index: u32,
        end_index: u32,
    },
    FilePath {
        file_id: String,
        index: u32,
    },
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct FunctionToolCall {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub call_id: String,
    pub name: String,
    /// JSON arguments as generated by the model.
    pub arguments: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<ItemStatus>,
}

impl FunctionToolCall {
    pub fn parse_arguments<T: serde::de::DeserializeOwned>(&self) -> ApiResponseOrError<T> {
        Ok(serde_json::from_str(&self.arguments)?)
    }

    /// The input item answering this call.
    pub fn output(&self, output: impl Into<String>) -> ResponseItem {
        ResponseItem::FunctionCallOutput(FunctionCallOutput {
            id: None,
            call_id: self.call_id.clone(),
            output: output.into(),
            status: None,
        })
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct FunctionCallOutput {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub call_id: String,
    pub output: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<ItemStatus>,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct FileSearchToolCall {
    pub id: String,
    pub queries: Vec<String>,
    pub status: CallStatus,
    /// Null unless requested with [`FILE_SEARCH_CALL_RESULTS`].
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub results: Option<Vec<FileSearchCallResult>>,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct FileSearchCallResult {
    #[serde(default)]
    pub file_id: Option<String>,
    #[serde(default)]
    pub filename: Option<String>,
    #[serde(default)]
    pub score: Option<crate::schema::Score>,
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attributes: Option<crate::assistants::vector_stores::Attributes>,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct WebSearchToolCall {
    pub id: String,
    pub status: CallStatus,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct SafetyCheck {
    pub id: String,
    pub code: String,
    pub message: String,
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum MouseButton {
    Left,
    Right,
    Wheel,
    Back,
    Forward,
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
pub struct Coordinate {
    pub x: i32,
    pub y: i32,
}

/// What the model wants done on the computer.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ComputerAction {
    Click { button: MouseButton, x: i32, y: i32 },
    DoubleClick { x: i32, y: i32 },
    Drag { path: Vec<Coordinate> },
    Keypress { keys: Vec<String> },
    Move { x: i32, y: i32 },
    Screenshot,
    Scroll { x: i32, y: i32, scroll_x: i32, scroll_y: i32 },
    Type { text: String },
    Wait,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct ComputerToolCall {
    pub id: String,
    pub call_id: String,
    pub action: ComputerAction,
    #[serde(default)]
    pub pending_safety_checks: Vec<SafetyCheck>,
    pub status: ItemStatus,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ComputerOutput {
    ComputerScreenshot {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        image_url: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        file_id: Option<String>,
    },
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct ComputerCallOutput {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub call_id: String,
    pub output: ComputerOutput,
    /// Checks from `pending_safety_checks` the caller has acknowledged.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub acknowledged_safety_checks: Option<Vec<SafetyCheck>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<ItemStatus>,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct ImageGenerationCall {
    pub id: String,
    pub status: CallStatus,
    /// Base64 image, null until generated.
    #[serde(default)]
    pub result: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum CodeInterpreterOutput {
    Logs { logs: String },
    Image { url: String },
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct CodeInterpreterToolCall {
    pub id: String,
    pub status: CallStatus,
    pub container_id: String,
    #[serde(default)]
    pub code: Option<String>,
    /// Null unless requested with `code_interpreter_call.outputs`.
    #[serde(default)]
    pub outputs: Option<Vec<CodeInterpreterOutput>>,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum LocalShellAction {
    Exec {
        command: Vec<String>,
        #[serde(default)]
        env: std::collections::HashMap<String, String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        timeout_ms: Option<u64>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        user: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        working_directory: Option<String>,
    },
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct LocalShellCall {
    pub id: String,
    pub call_id: String,
    pub action: LocalShellAction,
    pub status: ItemStatus,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct LocalShellCallOutput {
    pub id: String,
    /// JSON string of the command's output.
    pub output: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<ItemStatus>,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct McpToolInfo {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub input_schema: Value,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub annotations: Option<Value>,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct McpListTools {
    pub id: String,
    pub server_label: String,
    pub tools: Vec<McpToolInfo>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct McpApprovalRequest {
    pub id: String,
    pub server_label: String,
    pub name: String,
    pub arguments: String,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct McpApprovalResponse {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub approval_request_id: String,
    pub approve: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

impl McpApprovalRequest {
    /// The input item answering this request.
    pub fn respond(&self, approve: bool) -> ResponseItem {
        ResponseItem::McpApprovalResponse(McpApprovalResponse {
            id: None,
            approval_request_id: self.id.clone(),
            approve,
            reason: None,
        })
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct McpCall {
    pub id: String,
    pub server_label: String,
    pub name: String,
    pub arguments: String,
    #[serde(default)]
    pub output: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct ReasoningItem {
    pub id: String,
    #[serde(default)]
    pub summary: Vec<ReasoningSummaryPart>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub encrypted_content: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<ItemStatus>,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ReasoningSummaryPart {
    SummaryText { text: String },
}

/// A message given without the `type` field, with plain text or parts as content.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct EasyInputMessage {
    pub role: ResponseRole,
    pub content: MessageContent,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, From)]
#[serde(untagged)]
pub enum MessageContent {
    Text(String),
    Parts(Vec<ContentPart>),
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, From)]
#[serde(untagged)]
pub enum InputItem {
    Item(ResponseItem),
    Message(EasyInputMessage),
}

impl InputItem {
    pub fn message(role: ResponseRole, content: impl Into<MessageContent>) -> Self {
        InputItem::Message(EasyInputMessage {
            role,
            content: content.into(),
        })
    }
}

impl From<&str> for MessageContent {
    fn from(value: &str) -> Self {
        MessageContent::Text(value.to_string())
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, From)]
#[serde(untagged)]
pub enum ResponseInput {
    Text(String),
    Items(Vec<InputItem>),
}

impl From<&str> for ResponseInput {
    fn from(value: &str) -> Self {
        ResponseInput::Text(value.to_string())
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ResponseTool {
    Function {
        name: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        description: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        parameters: Option<Value>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        strict: Option<bool>,
    },
    FileSearch {
        vector_store_ids: Vec<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        max_num_results: Option<MaxNumResults>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        ranking_options: Option<crate::assistants::vector_stores::SearchRankingOptions>,
        /// Attribute filter, comparison or compound.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        filters: Option<Value>,
    },
    #[serde(alias = "web_search_preview_2025_03_11")]
    WebSearchPreview {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        search_context_size: Option<SearchContextSize>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        user_location: Option<Value>,
    },
    ComputerUsePreview {
        display_width: u32,
        display_height: u32,
        environment: ComputerEnvironment,
    },
    Mcp {
        server_label: String,
        server_url: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        server_description: Option<String>,
        /// Tool names, or a `{"tool_names": [...]}` filter.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        allowed_tools: Option<Value>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        headers: Option<std::collections::HashMap<String, String>>,
        /// `always`, `never`, or a per-tool filter object.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        require_approval: Option<Value>,
    },
    CodeInterpreter {
        /// A container ID, or `{"type": "auto", "file_ids": [...]}`.
        container: Value,
    },
    ImageGeneration {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        model: Option<String>,
        /// `transparent`, `opaque` or `auto`.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        background: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        input_image_mask: Option<Value>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        moderation: Option<String>,
        /// 0 to 100.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        output_compression: Option<u8>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        output_format: Option<String>,
        /// 0 to 3.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        partial_images: Option<u8>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        quality: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        size: Option<String>,
    },
    LocalShell,
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum SearchContextSize {
    Low,
    Medium,
    High,
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ComputerEnvironment {
    Windows,
    Mac,
    Linux,
    Ubuntu,
    Browser,
}

impl ResponseTool {
    /// A function tool whose parameters are the JSON Schema of `T`.
    pub fn function<T: JsonSchema>(strict: bool) -> ApiResponseOrError<Self> {
        let function = crate::FunctionObject::from_schema::<T>(strict, JsonSchemaStyle::OpenAI)?;
        Ok(ResponseTool::Function {
            name: function.name,
            description: function.description,
            parameters: function.parameters,
            strict: function.strict,
        })
    }

    pub fn file_search(vector_store_ids: Vec<String>) -> Self {
        ResponseTool::FileSearch {
            vector_store_ids,
            max_num_results: None,
            ranking_options: None,
            filters: None,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum NamedResponseTool {
    Function {
        name: String,
    },
    FileSearch,
    #[serde(alias = "web_search_preview_2025_03_11")]
    WebSearchPreview,
    ComputerUsePreview,
    CodeInterpreter,
    ImageGeneration,
    Mcp {
        server_label: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        name: Option<String>,
    },
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq, From)]
#[serde(untagged)]
pub enum ResponseToolChoice {
    Mode(ToolChoiceMode),
    Named(NamedResponseTool),
}

impl ResponseToolChoice {
    pub fn function(name: impl Into<String>) -> Self {
        ResponseToolChoice::Named(NamedResponseTool::Function { name: name.into() })
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum TextFormat {
    Text,
    JsonObject,
    /// The schema fields sit next to `type`, not under a `json_schema` key.
    JsonSchema(ResponseFormatJsonSchema),
}

impl TextFormat {
    pub fn json_schema<T: JsonSchema>(strict: bool) -> ApiResponseOrError<Self> {
        Ok(TextFormat::JsonSchema(ResponseFormatJsonSchema::new::<T>(
            strict,
            JsonSchemaStyle::OpenAI,
        )?))
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct TextConfig {
    pub format: TextFormat,
}

impl From<TextFormat> for TextConfig {
    fn from(format: TextFormat) -> Self {
        TextConfig { format }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ReasoningSummary {
    Auto,
    Concise,
    Detailed,
}

#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq, Eq)]
pub struct ReasoningConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub effort: Option<ReasoningEffort>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary: Option<ReasoningSummary>,
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Truncation {
    Auto,
    Disabled,
}

#[derive(Serialize, Deserialize, Builder, Debug, Clone, PartialEq)]
#[builder(pattern = "owned")]
#[builder(name = "CreateResponseBuilder")]
#[builder(setter(strip_option, into))]
#[builder(build_fn(error = "OpenAiError"))]
pub struct CreateResponse {
    pub model: String,
    pub input: ResponseInput,
    /// System message inserted before the input. Not carried over by `previous_response_id`.
    #[builder(default)]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub instructions: Option<String>,
    #[builder(default)]
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tools: Vec<ResponseTool>,
    #[builder(default)]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tool_choice: Option<ResponseToolChoice>,
    #[builder(default)]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parallel_tool_calls: Option<bool>,
    /// Continues the conversation of an earlier stored response.
    #[builder(default)]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub previous_response_id: Option<String>,
    #[builder(default)]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub store: Option<bool>,
    /// Run asynchronously; poll with `get_response`.
    #[builder(default)]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background: Option<bool>,
    #[builder(default)]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stream: Option<bool>,
    #[builder(default)]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Metadata>,
    #[builder(default)]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f32>,
    #[builder(default)]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub top_p: Option<f32>,
    #[builder(default)]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_output_tokens: Option<u32>,
    #[builder(default)]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<TextConfig>,
    #[builder(default)]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reasoning: Option<ReasoningConfig>,
    #[builder(default)]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub truncation: Option<Truncation>,
    #[builder(default)]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub include: Option<Vec<String>>,
    #[builder(default)]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user: Option<String>,
}

impl CreateResponseBuilder {
    pub async fn create(self, client: &OpenAiClient) -> ApiResponseOrError<Response> {
        client.create_response(self.build()?).await
    }
}

/// Payload of one server-sent event of a streamed response.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(tag = "type")]
pub enum ResponseStreamEvent {
    #[serde(rename = "response.created")]
    Created {
        response: Response,
        #[serde(default)]
        sequence_number: u64,
    },
    #[serde(rename = "response.queued")]
    Queued {
        response: Response,
        #[serde(default)]
        sequence_number: u64,
    },
    #[serde(rename = "response.in_progress")]
    InProgress {
        response: Response,
        #[serde(default)]
        sequence_number: u64,
    },
    #[serde(rename = "response.completed")]
    Completed {
        response: Response,
        #[serde(default)]
        sequence_number: u64,
    },
    #[serde(rename = "response.failed")]
    Failed {
        response: Response,
        #[serde(default)]
        sequence_number: u64,
    },
    #[serde(rename = "response.incomplete")]
    Incomplete {
        response: Response,
        #[serde(default)]
        sequence_number: u64,
    },
    #[serde(rename = "response.output_item.added")]
    OutputItemAdded {
        output_index: u32,
        item: ResponseItem,
        #[serde(default)]
        sequence_number: u64,
    },
    #[serde(rename = "response.output_item.done")]
    OutputItemDone {
        output_index: u32,
        item: ResponseItem,
        #[serde(default)]
        sequence_number: u64,
    },
    #[serde(rename = "response.content_part.added")]
    ContentPartAdded {
        item_id: String,
        output_index: u32,
        content_index: u32,
        part: ContentPart,
        #[serde(default)]
        sequence_number: u64,
    },
    #[serde(rename = "response.content_part.done")]
    ContentPartDone {
        item_id: String,
        output_index: u32,
        content_index: u32,
        part: ContentPart,
        #[serde(default)]
        sequence_number: u64,
    },
    #[serde(rename = "response.output_text.delta")]
    OutputTextDelta {
        item_id: String,
        output_index: u32,
        content_index: u32,
        delta: String,
        #[serde(default)]
        sequence_number: u64,
    },
    #[serde(rename = "response.output_text.done")]
    OutputTextDone {
        item_id: String,
        output_index: u32,
        content_index: u32,
        text: String,
        #[serde(default)]
        sequence_number: u64,
    },
    #[serde(rename = "response.output_text.annotation.added")]
    OutputTextAnnotationAdded {
        item_id: String,
        output_index: u32,
        content_index: u32,
        annotation_index: u32,
        annotation: ResponseAnnotation,
        #[serde(default)]
        sequence_number: u64,
    },
    #[serde(rename = "response.refusal.delta")]
    RefusalDelta {
        item_id: String,
        output_index: u32,
        content_index: u32,
        delta: String,
        #[serde(default)]
        sequence_number: u64,
    },
    #[serde(rename = "response.refusal.done")]
    RefusalDone {
        item_id: String,
        output_index: u32,
        content_index: u32,
        refusal: String,
        #[serde(default)]
        sequence_number: u64,
    },
    #[serde(rename = "response.function_call_arguments.delta")]
    FunctionCallArgumentsDelta {
        item_id: String,
        output_index: u32,
        delta: String,
        #[serde(default)]
        sequence_number: u64,
    },
    #[serde(rename = "response.function_call_arguments.done")]
    FunctionCallArgumentsDone {
        item_id: String,
        output_index: u32,
        arguments: String,
        #[serde(default)]
        sequence_number: u64,
    },
    #[serde(rename = "response.file_search_call.in_progress")]
    FileSearchCallInProgress {
        item_id: String,
        output_index: u32,
        #[serde(default)]
        sequence_number: u64,
    },
    #[serde(rename = "response.file_search_call.searching")]
    FileSearchCallSearching {
        item_id: String,
        output_index: u32,
        #[serde(default)]
        sequence_number: u64,
    },
    #[serde(rename = "response.file_search_call.completed")]
    FileSearchCallCompleted {
        item_id: String,
        output_index: u32,
        #[serde(default)]
        sequence_number: u64,
    },
    #[serde(rename = "response.web_search_call.in_progress")]
    WebSearchCallInProgress {
        item_id: String,
        output_index: u32,
        #[serde(default)]
        sequence_number: u64,
    },
    #[serde(rename = "response.web_search_call.searching")]
    WebSearchCallSearching {
        item_id: String,
        output_index: u32,
        #[serde(default)]
        sequence_number: u64,
    },
    #[serde(rename = "response.web_search_call.completed")]
    WebSearchCallCompleted {
        item_id: String,
        output_index: u32,
        #[serde(default)]
        sequence_number: u64,
    },
    #[serde(rename = "response.reasoning_summary_part.added")]
    ReasoningSummaryPartAdded {
        item_id: String,
        output_index: u32,
        summary_index: u32,
        part: ReasoningSummaryPart,
        #[serde(default)]
        sequence_number: u64,
    },
    #[serde(rename = "response.reasoning_summary_part.done")]
    ReasoningSummaryPartDone {
        item_id: String,
        output_index: u32,
        summary_index: u32,
        part: ReasoningSummaryPart,
        #[serde(default)]
        sequence_number: u64,
    },
    #[serde(rename = "response.reasoning_summary_text.delta")]
    ReasoningSummaryTextDelta {
        item_id: String,
        output_index: u32,
        summary_index: u32,
        delta: String,
        #[serde(default)]
        sequence_number: u64,
    },
    #[serde(rename = "response.reasoning_summary_text.done")]
    ReasoningSummaryTextDone {
        item_id: String,
        output_index: u32,
        summary_index: u32,
        text: String,
        #[serde(default)]
        sequence_number: u64,
    },
    #[serde(rename = "response.image_generation_call.in_progress")]
    ImageGenerationCallInProgress {
        item_id: String,
        output_index: u32,
        #[serde(default)]
        sequence_number: u64,
    },
    #[serde(rename = "response.image_generation_call.generating")]
    ImageGenerationCallGenerating {
        item_id: String,
        output_index: u32,
        #[serde(default)]
        sequence_number: u64,
    },
    #[serde(rename = "response.image_generation_call.partial_image")]
    ImageGenerationCallPartialImage {
        item_id: String,
        output_index: u32,
        partial_image_index: u32,
        /// Base64 encoded partial image.
        partial_image_b64: String,
        #[serde(default)]
        sequence_number: u64,
    },
    #[serde(rename = "response.image_generation_call.completed")]
    ImageGenerationCallCompleted {
        item_id: String,
        output_index: u32,
        #[serde(default)]
        sequence_number: u64,
    },
    #[serde(rename = "response.code_interpreter_call.in_progress")]
    CodeInterpreterCallInProgress {
        item_id: String,
        output_index: u32,
        #[serde(default)]
        sequence_number: u64,
    },
    #[serde(rename = "response.code_interpreter_call.interpreting")]
    CodeInterpreterCallInterpreting {
        item_id: String,
        output_index: u32,
        #[serde(default)]
        sequence_number: u64,
    },
    #[serde(rename = "response.code_interpreter_call.completed")]
    CodeInterpreterCallCompleted {
        item_id: String,
        output_index: u32,
        #[serde(default)]
        sequence_number: u64,
    },
    #[serde(rename = "response.code_interpreter_call_code.delta")]
    CodeInterpreterCallCodeDelta {
        item_id: String,
        output_index: u32,
        delta: String,
        #[serde(default)]
        sequence_number: u64,
    },
    #[serde(rename = "response.code_interpreter_call_code.done")]
    CodeInterpreterCallCodeDone {
        item_id: String,
        output_index: u32,
        code: String,
        #[serde(default)]
        sequence_number: u64,
    },
    #[serde(rename = "response.mcp_call_arguments.delta")]
    McpCallArgumentsDelta {
        item_id: String,
        output_index: u32,
        delta: String,
        #[serde(default)]
        sequence_number: u64,
    },
    #[serde(rename = "response.mcp_call_arguments.done")]
    McpCallArgumentsDone {
        item_id: String,
        output_index: u32,
        arguments: String,
        #[serde(default)]
        sequence_number: u64,
    },
    #[serde(rename = "response.mcp_call.in_progress")]
    McpCallInProgress {
        item_id: String,
        output_index: u32,
        #[serde(default)]
        sequence_number: u64,
    },
    #[serde(rename = "response.mcp_call.completed")]
    McpCallCompleted {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        item_id: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        output_index: Option<u32>,
        #[serde(default)]
        sequence_number: u64,
    },
    #[serde(rename = "response.mcp_call.failed")]
    McpCallFailed {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        item_id: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        output_index: Option<u32>,
        #[serde(default)]
        sequence_number: u64,
    },
    #[serde(rename = "response.mcp_list_tools.in_progress")]
    McpListToolsInProgress {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        item_id: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        output_index: Option<u32>,
        #[serde(default)]
        sequence_number: u64,
    },
    #[serde(rename = "response.mcp_list_tools.completed")]
    McpListToolsCompleted {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        item_id: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        output_index: Option<u32>,
        #[serde(default)]
        sequence_number: u64,
    },
    #[serde(rename = "response.mcp_list_tools.failed")]
    McpListToolsFailed {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        item_id: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        output_index: Option<u32>,
        #[serde(default)]
        sequence_number: u64,
    },
    #[serde(rename = "error")]
    Error {
        #[serde(default)]
        code: Option<String>,
        message: String,
        #[serde(default)]
        param: Option<String>,
        #[serde(default)]
        sequence_number: u64,
    },
}

impl ResponseStreamEvent {
    /// The response snapshot carried by `response.*` lifecycle events.
    pub fn response(&self) -> Option<&Response> {
        use ResponseStreamEvent::*;
        match self {
            Created { response, .. }
            | Queued { response, .. }
            | InProgress { response, .. }
            | Completed { response, .. }
            | Failed { response, .. }
            | Incomplete { response, .. } => Some(response),
            _ => None,
        }
    }
}

#[derive(Serialize, Clone, Debug, Default, PartialEq)]
pub struct ListInputItemsQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order: Option<Order>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub after: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub before: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub include: Vec<String>,
}

impl OpenAiClient {
    pub async fn create_response(&self, request: CreateResponse) -> ApiResponseOrError<Response> {
        self.post(endpoints::CREATE_RESPONSE.render(&[])?, request)
            .await
    }

    /// `include` takes values such as [`FILE_SEARCH_CALL_RESULTS`].
    pub async fn get_response(
        &self,
        response_id: &str,
        include: &[&str],
    ) -> ApiResponseOrError<Response> {
        self.get_with_query(
            endpoints::GET_RESPONSE.render(&[response_id])?,
            &json!({ "include": include }),
        )
        .await
    }

    pub async fn delete_response(&self, response_id: &str) -> ApiResponseOrError<DeletionStatus> {
        self.delete(endpoints::DELETE_RESPONSE.render(&[response_id])?)
            .await
    }

    /// Only responses created with `background: true` can be cancelled.
    pub async fn cancel_response(&self, response_id: &str) -> ApiResponseOrError<Response> {
        self.post_empty(endpoints::CANCEL_RESPONSE.render(&[response_id])?)
            .await
    }

    pub async fn list_input_items(
        &self,
        response_id: &str,
        query: &ListInputItemsQuery,
    ) -> ApiResponseOrError<ListResponse<ResponseItem>> {
        self.get_with_query(endpoints::LIST_INPUT_ITEMS.render(&[response_id])?, query)
            .await
    }
}
