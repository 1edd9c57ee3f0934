//! Realtime sessions and the events exchanged over a realtime connection.
//!
//! Only the REST half is served here: minting ephemeral session tokens. The
//! event enums describe the JSON frames of the WebSocket/WebRTC connection so
//! callers can encode and decode them with their own transport.

use derive_builder::Builder;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::{
    chat::{FunctionLiteral, ToolChoiceMode},
    client::OpenAiClient,
    endpoints, ApiResponseOrError, Extra, Metadata, OpenAiError,
};

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum RealtimeAudioFormat {
    Pcm16,
    G711Ulaw,
    G711Alaw,
}

#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq, Eq)]
pub struct InputAudioTranscription {
    /// `whisper-1`, `gpt-4o-transcribe` or `gpt-4o-mini-transcribe`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,
    /// ISO-639-1 language of the input audio.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prompt: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum TurnDetection {
    ServerVad {
        /// Activation threshold, 0.0 to 1.0.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        threshold: Option<f32>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        prefix_padding_ms: Option<u32>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        silence_duration_ms: Option<u32>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        create_response: Option<bool>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        interrupt_response: Option<bool>,
    },
    SemanticVad {
        /// `low`, `medium`, `high` or `auto`.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        eagerness: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        create_response: Option<bool>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        interrupt_response: Option<bool>,
    },
}

impl TurnDetection {
    pub fn server_vad() -> Self {
        TurnDetection::ServerVad {
            threshold: None,
            prefix_padding_ms: None,
            silence_duration_ms: None,
            create_response: None,
            interrupt_response: None,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum NoiseReductionType {
    NearField,
    FarField,
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
pub struct NoiseReduction {
    #[serde(rename = "type")]
    pub kind: NoiseReductionType,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum RealtimeTool {
    Function {
        name: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        description: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        parameters: Option<Value>,
    },
}

impl From<crate::FunctionObject> for RealtimeTool {
    fn from(function: crate::FunctionObject) -> Self {
        RealtimeTool::Function {
            name: function.name,
            description: function.description,
            parameters: function.parameters,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(untagged)]
pub enum RealtimeToolChoice {
    Mode(ToolChoiceMode),
    Function { r#type: FunctionLiteral, name: String },
}

impl RealtimeToolChoice {
    pub fn function(name: impl Into<String>) -> Self {
        RealtimeToolChoice::Function {
            r#type: FunctionLiteral,
            name: name.into(),
        }
    }
}

impl From<ToolChoiceMode> for RealtimeToolChoice {
    fn from(mode: ToolChoiceMode) -> Self {
        RealtimeToolChoice::Mode(mode)
    }
}

/// Between 1 and 4096, or `"inf"` for the model maximum.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
pub enum MaxResponseOutputTokens {
    #[serde(rename = "inf")]
    Inf,
    #[serde(untagged)]
    Num(u32),
}

impl From<u32> for MaxResponseOutputTokens {
    fn from(value: u32) -> Self {
        MaxResponseOutputTokens::Num(value)
    }
}

/// Session configuration, sent when minting a session or in `session.update`.
#[derive(Serialize, Deserialize, Builder, Debug, Clone, Default, PartialEq)]
#[builder(pattern = "owned")]
#[builder(name = "RealtimeSessionBuilder")]
#[builder(setter(strip_option, into))]
#[builder(build_fn(error = "OpenAiError"))]
#[builder(default)]
pub struct RealtimeSessionCreateRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,
    /// `["text"]` disables audio.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub modalities: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub instructions: Option<String>,
    /// Cannot change once the model has answered with audio.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub voice: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub input_audio_format: Option<RealtimeAudioFormat>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output_audio_format: Option<RealtimeAudioFormat>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub input_audio_transcription: Option<InputAudioTranscription>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub turn_detection: Option<TurnDetection>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub input_audio_noise_reduction: Option<NoiseReduction>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tools: Option<Vec<RealtimeTool>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tool_choice: Option<RealtimeToolChoice>,
    /// Limited to `[0.6, 1.2]`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_response_output_tokens: Option<MaxResponseOutputTokens>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub speed: Option<f32>,
}

impl RealtimeSessionBuilder {
    pub async fn create(self, client: &OpenAiClient) -> ApiResponseOrError<RealtimeSession> {
        client.create_realtime_session(self.build()?).await
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct ClientSecret {
    /// Ephemeral key for client environments.
    pub value: String,
    pub expires_at: u64,
}

/// A realtime session. Only freshly minted sessions carry a `client_secret`.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct RealtimeSession {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub object: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub client_secret: Option<ClientSecret>,
    #[serde(flatten)]
    pub config: RealtimeSessionCreateRequest,
}

#[derive(Serialize, Deserialize, Builder, Debug, Clone, Default, PartialEq)]
#[builder(pattern = "owned")]
#[builder(name = "RealtimeTranscriptionSessionBuilder")]
#[builder(setter(strip_option, into))]
#[builder(build_fn(error = "OpenAiError"))]
#[builder(default)]
pub struct RealtimeTranscriptionSessionCreateRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub modalities: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub input_audio_format: Option<RealtimeAudioFormat>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub input_audio_transcription: Option<InputAudioTranscription>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub turn_detection: Option<TurnDetection>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub input_audio_noise_reduction: Option<NoiseReduction>,
    /// e.g. `item.input_audio_transcription.logprobs`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub include: Option<Vec<String>>,
}

impl RealtimeTranscriptionSessionBuilder {
    pub async fn create(
        self,
        client: &OpenAiClient,
    ) -> ApiResponseOrError<RealtimeTranscriptionSession> {
        client
            .create_realtime_transcription_session(self.build()?)
            .await
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct RealtimeTranscriptionSession {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub client_secret: Option<ClientSecret>,
    #[serde(flatten)]
    pub config: RealtimeTranscriptionSessionCreateRequest,
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum RealtimeRole {
    User,
    Assistant,
    System,
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum RealtimeItemStatus {
    Completed,
    Incomplete,
    InProgress,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum RealtimeContentPart {
    InputText {
        text: String,
    },
    InputAudio {
        /// Base64-encoded audio bytes.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        audio: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        transcript: Option<String>,
    },
    Text {
        text: String,
    },
    Audio {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        audio: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        transcript: Option<String>,
    },
    ItemReference {
        id: String,
    },
}

/// An item of a realtime conversation.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum RealtimeItem {
    Message {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        id: Option<String>,
        role: RealtimeRole,
        content: Vec<RealtimeContentPart>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        status: Option<RealtimeItemStatus>,
    },
    FunctionCall {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        id: Option<String>,
        call_id: String,
        name: String,
        arguments: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        status: Option<RealtimeItemStatus>,
    },
    FunctionCallOutput {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        id: Option<String>,
        call_id: String,
        output: String,
    },
}

impl RealtimeItem {
    pub fn user_text(text: impl Into<String>) -> Self {
        RealtimeItem::Message {
            id: None,
            role: RealtimeRole::User,
            content: vec![RealtimeContentPart::InputText { text: text.into() }],
            status: None,
        }
    }

    pub fn function_output(call_id: impl Into<String>, output: impl Into<String>) -> Self {
        RealtimeItem::FunctionCallOutput {
            id: None,
            call_id: call_id.into(),
            output: output.into(),
        }
    }
}

/// Overrides for a single `response.create`.
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq)]
pub struct RealtimeResponseCreateParams {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub modalities: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub instructions: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub voice: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output_audio_format: Option<RealtimeAudioFormat>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tools: Option<Vec<RealtimeTool>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tool_choice: Option<RealtimeToolChoice>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_response_output_tokens: Option<MaxResponseOutputTokens>,
    /// `auto` or `none`; `none` keeps the response out of the default conversation.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub conversation: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Metadata>,
    /// Replaces the conversation as the response's input.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub input: Option<Vec<RealtimeItem>>,
}

/// A response produced over a realtime connection.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct RealtimeResponse {
    pub id: String,
    pub object: String,
    /// `completed`, `cancelled`, `failed`, `incomplete` or `in_progress`.
    pub status: String,
    #[serde(default)]
    pub output: Vec<RealtimeItem>,
    #[serde(flatten)]
    pub extra: Extra,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct RealtimeError {
    #[serde(rename = "type")]
    pub error_type: String,
    #[serde(default)]
    pub code: Option<String>,
    pub message: String,
    #[serde(default)]
    pub param: Option<String>,
    /// The client event that caused the error.
    #[serde(default)]
    pub event_id: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct RealtimeConversation {
    pub id: String,
    pub object: String,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct RateLimit {
    /// `requests` or `tokens`.
    pub name: String,
    pub limit: u32,
    pub remaining: u32,
    pub reset_seconds: f64,
}

/// Frames sent by the client. `event_id` is optional and echoed in errors.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(tag = "type")]
pub enum RealtimeClientEvent {
    #[serde(rename = "session.update")]
    SessionUpdate {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        event_id: Option<String>,
        session: RealtimeSessionCreateRequest,
    },
    #[serde(rename = "transcription_session.update")]
    TranscriptionSessionUpdate {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        event_id: Option<String>,
        session: RealtimeTranscriptionSessionCreateRequest,
    },
    #[serde(rename = "input_audio_buffer.append")]
    InputAudioBufferAppend {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        event_id: Option<String>,
        /// Base64-encoded audio bytes in the session's input format.
        audio: String,
    },
    #[serde(rename = "input_audio_buffer.commit")]
    InputAudioBufferCommit {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        event_id: Option<String>,
    },
    #[serde(rename = "input_audio_buffer.clear")]
    InputAudioBufferClear {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        event_id: Option<String>,
    },
    #[serde(rename = "output_audio_buffer.clear")]
    OutputAudioBufferClear {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        event_id: Option<String>,
    },
    #[serde(rename = "conversation.item.create")]
    ConversationItemCreate {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        event_id: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        previous_item_id: Option<String>,
        item: RealtimeItem,
    },
    #[serde(rename = "conversation.item.retrieve")]
    ConversationItemRetrieve {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        event_id: Option<String>,
        item_id: String,
    },
    #[serde(rename = "conversation.item.truncate")]
    ConversationItemTruncate {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        event_id: Option<String>,
        item_id: String,
        content_index: u32,
        audio_end_ms: u32,
    },
    #[serde(rename = "conversation.item.delete")]
    ConversationItemDelete {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        event_id: Option<String>,
        item_id: String,
    },
    #[serde(rename = "response.create")]
    ResponseCreate {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        event_id: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        response: Option<RealtimeResponseCreateParams>,
    },
    #[serde(rename = "response.cancel")]
    ResponseCancel {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        event_id: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        response_id: Option<String>,
    },
}

impl RealtimeClientEvent {
    pub fn append_audio(audio: impl Into<String>) -> Self {
        RealtimeClientEvent::InputAudioBufferAppend {
            event_id: None,
            audio: audio.into(),
        }
    }

    pub fn create_item(item: RealtimeItem) -> Self {
        RealtimeClientEvent::ConversationItemCreate {
            event_id: None,
            previous_item_id: None,
            item,
        }
    }

    pub fn create_response() -> Self {
        RealtimeClientEvent::ResponseCreate {
            event_id: None,
            response: None,
        }
    }
}

/// Frames sent by the server.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(tag = "type")]
pub enum RealtimeServerEvent {
    #[serde(rename = "error")]
    Error {
        event_id: String,
        error: RealtimeError,
    },
    #[serde(rename = "session.created")]
    SessionCreated {
        event_id: String,
        session: RealtimeSession,
    },
    #[serde(rename = "session.updated")]
    SessionUpdated {
        event_id: String,
        session: RealtimeSession,
    },
    #[serde(rename = "transcription_session.updated")]
    TranscriptionSessionUpdated {
        event_id: String,
        session: RealtimeTranscriptionSession,
    },
    #[serde(rename = "conversation.created")]
    ConversationCreated {
        event_id: String,
        conversation: RealtimeConversation,
    },
    #[serde(rename = "conversation.item.created")]
    ConversationItemCreated {
        event_id: String,
        #[serde(default)]
        previous_item_id: Option<String>,
        item: RealtimeItem,
    },
    #[serde(rename = "conversation.item.retrieved")]
    ConversationItemRetrieved {
        event_id: String,
        item: RealtimeItem,
    },
    #[serde(rename = "conversation.item.input_audio_transcription.delta")]
    InputAudioTranscriptionDelta {
        event_id: String,
        item_id: String,
        content_index: u32,
        delta: String,
    },
    #[serde(rename = "conversation.item.input_audio_transcription.completed")]
    InputAudioTranscriptionCompleted {
        event_id: String,
        item_id: String,
        content_index: u32,
        transcript: String,
    },
    #[serde(rename = "conversation.item.input_audio_transcription.failed")]
    InputAudioTranscriptionFailed {
        event_id: String,
        item_id: String,
        content_index: u32,
        error: RealtimeError,
    },
    #[serde(rename = "conversation.item.truncated")]
    ConversationItemTruncated {
        event_id: String,
        item_id: String,
        content_index: u32,
        audio_end_ms: u32,
    },
    #[serde(rename = "conversation.item.deleted")]
    ConversationItemDeleted { event_id: String, item_id: String },
    #[serde(rename = "input_audio_buffer.committed")]
    InputAudioBufferCommitted {
        event_id: String,
        #[serde(default)]
        previous_item_id: Option<String>,
        item_id: String,
    },
    #[serde(rename = "input_audio_buffer.cleared")]
    InputAudioBufferCleared { event_id: String },
    #[serde(rename = "input_audio_buffer.speech_started")]
    InputAudioBufferSpeechStarted {
        event_id: String,
        audio_start_ms: u32,
        item_id: String,
    },
    #[serde(rename = "input_audio_buffer.speech_stopped")]
    InputAudioBufferSpeechStopped {
        event_id: String,
        audio_end_ms: u32,
        item_id: String,
    },
    #[serde(rename = "response.created")]
    ResponseCreated {
        event_id: String,
        response: RealtimeResponse,
    },
    #[serde(rename = "response.done")]
    ResponseDone {
        event_id: String,
        response: RealtimeResponse,
    },
    #[serde(rename = "response.output_item.added")]
    ResponseOutputItemAdded {
        event_id: String,
        response_id: String,
        output_index: u32,
        item: RealtimeItem,
    },
    #[serde(rename = "response.output_item.done")]
    ResponseOutputItemDone {
        event_id: String,
        response_id: String,
        output_index: u32,
        item: RealtimeItem,
    },
    #[serde(rename = "response.content_part.added")]
    ResponseContentPartAdded {
        event_id: String,
        response_id: String,
        item_id: String,
        output_index: u32,
        content_index: u32,
        part: RealtimeContentPart,
    },
    #[serde(rename = "response.content_part.done")]
    ResponseContentPartDone {
        event_id: String,
        response_id: String,
        item_id: String,
        output_index: u32,
        content_index: u32,
        part: RealtimeContentPart,
    },
    #[serde(rename = "response.text.delta")]
    ResponseTextDelta {
        event_id: String,
        response_id: String,
        item_id: String,
        output_index: u32,
        content_index: u32,
        delta: String,
    },
    #[serde(rename = "response.text.done")]
    ResponseTextDone {
        event_id: String,
        response_id: String,
        item_id: String,
        output_index: u32,
        content_index: u32,
        text: String,
    },
    #[serde(rename = "response.audio_transcript.delta")]
    ResponseAudioTranscriptDelta {
        event_id: String,
        response_id: String,
        item_id: String,
        output_index: u32,
        content_index: u32,
        delta: String,
    },
    #[serde(rename = "response.audio_transcript.done")]
    ResponseAudioTranscriptDone {
        event_id: String,
        response_id: String,
        item_id: String,
        output_index: u32,
        content_index: u32,
        transcript: String,
    },
    #[serde(rename = "response.audio.delta")]
    ResponseAudioDelta {
        event_id: String,
        response_id: String,
        item_id: String,
        output_index: u32,
        content_index: u32,
        /// Base64-encoded audio bytes.
        delta: String,
    },
    #[serde(rename = "response.audio.done")]
    ResponseAudioDone {
        event_id: String,
        response_id: String,
        item_id: String,
        output_index: u32,
        content_index: u32,
    },
    #[serde(rename = "response.function_call_arguments.delta")]
    ResponseFunctionCallArgumentsDelta {
        event_id: String,
        response_id: String,
        item_id: String,
        output_index: u32,
        call_id: String,
        delta: String,
    },
    #[serde(rename = "response.function_call_arguments.done")]
    ResponseFunctionCallArgumentsDone {
        event_id: String,
        response_id: String,
        item_id: String,
        output_index: u32,
        call_id: String,
        arguments: String,
    },
    #[serde(rename = "rate_limits.updated")]
    RateLimitsUpdated {
        event_id: String,
        rate_limits: Vec<RateLimit>,
    },
}

impl OpenAiClient {
    pub async fn create_realtime_session(
        &self,
        request: RealtimeSessionCreateRequest,
    ) -> ApiResponseOrError<RealtimeSession> {
        self.post(endpoints::CREATE_REALTIME_SESSION.render(&[])?, request)
            .await
    }

    pub async fn create_realtime_transcription_session(
        &self,
        request: RealtimeTranscriptionSessionCreateRequest,
    ) -> ApiResponseOrError<RealtimeTranscriptionSession> {
        self.post(
            endpoints::CREATE_REALTIME_TRANSCRIPTION_SESSION.render(&[])?,
            request,
        )
        .await
    }
}
