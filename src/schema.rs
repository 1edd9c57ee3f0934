//! Named schemas and their validators.
//!
//! Every request and response shape the endpoint table refers to is registered
//! here under its upstream name. Validating a JSON value against a schema means
//! deserializing it into the matching Rust type.

use serde::{de, de::DeserializeOwned, Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::{
    assistants::{self, stream, vector_stores},
    audio, batches, chat, completions, containers, embeddings, evals, files, fine_tuning, graders,
    images, models, moderations,
    organization::{
        admin_api_keys, audit_logs, certificates, invites, project_api_keys, project_rate_limits,
        project_service_accounts, project_users, projects, users,
    },
    realtime, responses, uploads, usage, ApiResponseOrError, DeletionStatus, ErrorResponse,
    ListResponse, OpenAiError,
};

pub struct SchemaEntry {
    pub name: &'static str,
    pub validate: fn(&Value) -> Result<(), serde_json::Error>,
    /// Decodes into the Rust type and encodes back.
    pub normalize: fn(&Value) -> Result<Value, serde_json::Error>,
}

impl std::fmt::Debug for SchemaEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "SchemaEntry({})", self.name)
    }
}

fn validate_as<T: DeserializeOwned>(value: &Value) -> Result<(), serde_json::Error> {
    T::deserialize(value).map(drop)
}

fn normalize_as<T: DeserializeOwned + Serialize>(value: &Value) -> Result<Value, serde_json::Error> {
    serde_json::to_value(T::deserialize(value)?)
}

pub fn lookup(name: &str) -> Option<&'static SchemaEntry> {
    SCHEMAS.iter().find(|entry| entry.name == name)
}

pub fn names() -> impl Iterator<Item = &'static str> {
    SCHEMAS.iter().map(|entry| entry.name)
}

fn entry(name: &str) -> ApiResponseOrError<&'static SchemaEntry> {
    lookup(name).ok_or_else(|| {
        OpenAiError::new(format!("unknown schema `{name}`"), "schema".to_string())
    })
}

fn mismatch(name: &str, error: serde_json::Error) -> OpenAiError {
    let mut error = OpenAiError::new(
        format!("value does not match `{name}`: {error}"),
        "schema".to_string(),
    );
    error.param = Some(name.to_string());
    error
}

/// Checks `value` against the schema registered as `name`.
pub fn validate(name: &str, value: &Value) -> ApiResponseOrError<()> {
    (entry(name)?.validate)(value).map_err(|error| mismatch(name, error))
}

/// Re-encodes `value` through the schema's Rust type, which drops nulls of
/// optional fields and fills declared defaults.
pub fn normalize(name: &str, value: &Value) -> ApiResponseOrError<Value> {
    (entry(name)?.normalize)(value).map_err(|error| mismatch(name, error))
}

macro_rules! bounded {
    ($(#[$meta:meta])* $name:ident($inner:ty), $min:literal, $max:literal) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize)]
        #[serde(transparent)]
        pub struct $name($inner);

        impl $name {
            pub const MIN: $inner = $min;
            pub const MAX: $inner = $max;

            pub fn new(value: $inner) -> ApiResponseOrError<Self> {
                if (Self::MIN..=Self::MAX).contains(&value) {
                    Ok(Self(value))
                } else {
                    Err(OpenAiError::new(
                        format!(
                            "{} must be between {} and {}, got {}",
                            stringify!($name),
                            Self::MIN,
                            Self::MAX,
                            value
                        ),
                        "schema".to_string(),
                    ))
                }
            }

            pub fn get(self) -> $inner {
                self.0
            }
        }

        impl From<$name> for $inner {
            fn from(value: $name) -> Self {
                value.0
            }
        }

        impl<'de> Deserialize<'de> for $name {
            fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                let value = <$inner>::deserialize(deserializer)?;
                Self::new(value).map_err(|error| de::Error::custom(error.message))
            }
        }
    };
}

bounded!(
    /// A relevance score in `[0, 1]`.
    Score(f64),
    0.0,
    1.0
);
bounded!(
    /// Result cap of file search, `[1, 50]`.
    MaxNumResults(u8),
    1,
    50
);
bounded!(
    /// Number of most likely tokens returned per position, `[0, 20]`.
    TopLogprobs(u8),
    0,
    20
);

macro_rules! schema_table {
    ($($name:literal => $ty:ty),* $(,)?) => {
        /// Every registered schema.
        pub static SCHEMAS: &[SchemaEntry] = &[
            $(SchemaEntry {
                name: $name,
                validate: validate_as::<$ty>,
                normalize: normalize_as::<$ty>,
            },)*
        ];
    };
}

schema_table! {
    "ErrorResponse" => ErrorResponse,

    // Models
    "Model" => models::Model,
    "ListModelsResponse" => ListResponse<models::Model>,
    "DeleteModelResponse" => DeletionStatus,

    // Chat
    "CreateChatCompletionRequest" => chat::ChatCompletionRequest,
    "CreateChatCompletionResponse" => chat::ChatCompletion,
    "CreateChatCompletionStreamResponse" => chat::ChatCompletionChunk,
    "ChatCompletionRequestMessage" => chat::ChatMessage,
    "ChatCompletionTool" => chat::ChatCompletionTool,
    "ChatCompletionToolChoiceOption" => chat::ToolChoice,
    "ChatCompletionList" => ListResponse<chat::ChatCompletion>,
    "UpdateChatCompletionRequest" => chat::UpdateChatCompletionRequest,
    "ChatCompletionDeleted" => DeletionStatus,
    "ChatCompletionMessageList" => ListResponse<chat::StoredChatMessage>,

    // Completions, embeddings, moderations
    "CreateCompletionRequest" => completions::CompletionRequest,
    "CreateCompletionResponse" => completions::Completion,
    "CreateEmbeddingRequest" => embeddings::EmbeddingRequest,
    "CreateEmbeddingResponse" => embeddings::Embeddings,
    "CreateModerationRequest" => moderations::ModerationRequest,
    "CreateModerationResponse" => moderations::Moderation,

    // Images
    "CreateImageRequest" => images::CreateImageRequest,
    "CreateImageEditRequest" => images::CreateImageEditRequest,
    "CreateImageVariationRequest" => images::CreateImageVariationRequest,
    "ImagesResponse" => images::ImagesResponse,

    // Audio
    "CreateSpeechRequest" => audio::CreateSpeechRequest,
    "CreateTranscriptionRequest" => audio::CreateTranscriptionRequest,
    "CreateTranscriptionResponse" => audio::Transcription,
    "CreateTranslationRequest" => audio::CreateTranslationRequest,
    "CreateTranslationResponse" => audio::Translation,

    // Files and uploads
    "OpenAIFile" => files::File,
    "ListFilesResponse" => ListResponse<files::File>,
    "CreateFileRequest" => files::CreateFileRequest,
    "DeleteFileResponse" => DeletionStatus,
    "CreateUploadRequest" => uploads::CreateUploadRequest,
    "AddUploadPartRequest" => uploads::AddUploadPartRequest,
    "CompleteUploadRequest" => uploads::CompleteUploadRequest,
    "Upload" => uploads::Upload,
    "UploadPart" => uploads::UploadPart,

    // Batches
    "CreateBatchRequest" => batches::CreateBatchRequest,
    "Batch" => batches::Batch,
    "ListBatchesResponse" => ListResponse<batches::Batch>,
    "BatchRequestInput" => batches::BatchRequestInput,
    "BatchRequestOutput" => batches::BatchRequestOutput,

    // Fine-tuning
    "CreateFineTuningJobRequest" => fine_tuning::CreateFineTuningJobRequest,
    "FineTuningJob" => fine_tuning::FineTuningJob,
    "ListPaginatedFineTuningJobsResponse" => ListResponse<fine_tuning::FineTuningJob>,
    "FineTuningJobEvent" => fine_tuning::FineTuningJobEvent,
    "ListFineTuningJobEventsResponse" => ListResponse<fine_tuning::FineTuningJobEvent>,
    "FineTuningJobCheckpoint" => fine_tuning::FineTuningJobCheckpoint,
    "ListFineTuningJobCheckpointsResponse" => ListResponse<fine_tuning::FineTuningJobCheckpoint>,
    "FineTuningCheckpointPermission" => fine_tuning::FineTuningCheckpointPermission,
    "ListFineTuningCheckpointPermissionResponse" => ListResponse<fine_tuning::FineTuningCheckpointPermission>,
    "CreateFineTuningCheckpointPermissionRequest" => fine_tuning::CreateFineTuningCheckpointPermissionRequest,
    "DeleteFineTuningCheckpointPermissionResponse" => DeletionStatus,

    // Graders
    "RunGraderRequest" => graders::RunGraderRequest,
    "RunGraderResponse" => graders::RunGraderResponse,
    "ValidateGraderRequest" => graders::ValidateGraderRequest,
    "ValidateGraderResponse" => graders::ValidateGraderResponse,

    // Assistants
    "AssistantObject" => assistants::Assistant,
    "ListAssistantsResponse" => ListResponse<assistants::Assistant>,
    "CreateAssistantRequest" => assistants::CreateAssistantRequest,
    "ModifyAssistantRequest" => assistants::ModifyAssistantRequest,
    "DeleteAssistantResponse" => DeletionStatus,
    "AssistantTool" => assistants::Tool,

    // Threads
    "ThreadObject" => assistants::threads::Thread,
    "CreateThreadRequest" => assistants::threads::CreateThreadRequest,
    "ModifyThreadRequest" => assistants::threads::ModifyThreadRequest,
    "DeleteThreadResponse" => DeletionStatus,
    "CreateThreadAndRunRequest" => assistants::runs::CreateThreadAndRunRequest,

    // Messages
    "MessageObject" => assistants::messages::Message,
    "MessageDeltaObject" => assistants::messages::MessageDelta,
    "ListMessagesResponse" => ListResponse<assistants::messages::Message>,
    "CreateMessageRequest" => assistants::messages::CreateMessageRequest,
    "ModifyMessageRequest" => assistants::messages::ModifyMessageRequest,
    "DeleteMessageResponse" => DeletionStatus,

    // Runs and run steps
    "RunObject" => assistants::runs::Run,
    "ListRunsResponse" => ListResponse<assistants::runs::Run>,
    "CreateRunRequest" => assistants::runs::CreateRunRequest,
    "ModifyRunRequest" => assistants::runs::ModifyRunRequest,
    "SubmitToolOutputsRunRequest" => assistants::runs::SubmitToolOutputsRequest,
    "RunStepObject" => assistants::steps::RunStep,
    "RunStepDeltaObject" => assistants::steps::RunStepDelta,
    "ListRunStepsResponse" => ListResponse<assistants::steps::RunStep>,
    "AssistantStreamEvent" => stream::AssistantStreamEvent,

    // Vector stores
    "VectorStoreObject" => vector_stores::VectorStore,
    "ListVectorStoresResponse" => ListResponse<vector_stores::VectorStore>,
    "CreateVectorStoreRequest" => vector_stores::CreateVectorStoreRequest,
    "UpdateVectorStoreRequest" => vector_stores::UpdateVectorStoreRequest,
    "DeleteVectorStoreResponse" => DeletionStatus,
    "VectorStoreSearchRequest" => vector_stores::VectorStoreSearchRequest,
    "VectorStoreSearchResultsPage" => vector_stores::VectorStoreSearchResultsPage,
    "VectorStoreFileObject" => vector_stores::VectorStoreFile,
    "ListVectorStoreFilesResponse" => ListResponse<vector_stores::VectorStoreFile>,
    "CreateVectorStoreFileRequest" => vector_stores::CreateVectorStoreFileRequest,
    "UpdateVectorStoreFileAttributesRequest" => vector_stores::UpdateVectorStoreFileAttributesRequest,
    "DeleteVectorStoreFileResponse" => DeletionStatus,
    "VectorStoreFileContentResponse" => vector_stores::VectorStoreFileContent,
    "CreateVectorStoreFileBatchRequest" => vector_stores::CreateVectorStoreFileBatchRequest,
    "VectorStoreFileBatchObject" => vector_stores::VectorStoreFileBatch,

    // Responses
    "CreateResponse" => responses::CreateResponse,
    "Response" => responses::Response,
    "ResponseDeleted" => DeletionStatus,
    "ResponseItemList" => ListResponse<responses::ResponseItem>,
    "ResponseStreamEvent" => responses::ResponseStreamEvent,

    // Realtime
    "RealtimeSessionCreateRequest" => realtime::RealtimeSessionCreateRequest,
    "RealtimeSessionCreateResponse" => realtime::RealtimeSession,
    "RealtimeTranscriptionSessionCreateRequest" => realtime::RealtimeTranscriptionSessionCreateRequest,
    "RealtimeTranscriptionSessionCreateResponse" => realtime::RealtimeTranscriptionSession,
    "RealtimeServerEvent" => realtime::RealtimeServerEvent,
    "RealtimeClientEvent" => realtime::RealtimeClientEvent,

    // Evals
    "Eval" => evals::Eval,
    "EvalList" => ListResponse<evals::Eval>,
    "CreateEvalRequest" => evals::CreateEvalRequest,
    "UpdateEvalRequest" => evals::UpdateEvalRequest,
    "DeleteEvalResponse" => evals::EvalDeleted,
    "EvalRun" => evals::EvalRun,
    "EvalRunList" => ListResponse<evals::EvalRun>,
    "CreateEvalRunRequest" => evals::CreateEvalRunRequest,
    "DeleteEvalRunResponse" => evals::EvalRunDeleted,
    "EvalRunOutputItem" => evals::EvalRunOutputItem,
    "EvalRunOutputItemList" => ListResponse<evals::EvalRunOutputItem>,

    // Containers
    "ContainerResource" => containers::Container,
    "ContainerListResource" => ListResponse<containers::Container>,
    "CreateContainerBody" => containers::CreateContainerRequest,
    "DeleteContainerResponse" => DeletionStatus,
    "ContainerFileResource" => containers::ContainerFile,
    "ContainerFileListResource" => ListResponse<containers::ContainerFile>,
    "CreateContainerFileBody" => containers::CreateContainerFileRequest,
    "DeleteContainerFileResponse" => DeletionStatus,

    // Organization
    "AuditLog" => audit_logs::AuditLog,
    "ListAuditLogsResponse" => ListResponse<audit_logs::AuditLog>,
    "AdminApiKey" => admin_api_keys::AdminApiKey,
    "ApiKeyList" => ListResponse<admin_api_keys::AdminApiKey>,
    "CreateAdminApiKeyRequest" => admin_api_keys::CreateAdminApiKeyRequest,
    "AdminApiKeyDeleteResponse" => DeletionStatus,
    "Certificate" => certificates::Certificate,
    "ListCertificatesResponse" => ListResponse<certificates::Certificate>,
    "UploadCertificateRequest" => certificates::UploadCertificateRequest,
    "ModifyCertificateRequest" => certificates::ModifyCertificateRequest,
    "ToggleCertificatesRequest" => certificates::ToggleCertificatesRequest,
    "DeleteCertificateResponse" => certificates::DeleteCertificateResponse,
    "Invite" => invites::Invite,
    "InviteListResponse" => ListResponse<invites::Invite>,
    "InviteRequest" => invites::InviteRequest,
    "InviteDeleteResponse" => DeletionStatus,
    "User" => users::User,
    "UserListResponse" => ListResponse<users::User>,
    "UserRoleUpdateRequest" => users::UserRoleUpdateRequest,
    "UserDeleteResponse" => DeletionStatus,
    "Project" => projects::Project,
    "ProjectListResponse" => ListResponse<projects::Project>,
    "ProjectCreateRequest" => projects::ProjectRequest,
    "ProjectUpdateRequest" => projects::ProjectRequest,
    "ProjectApiKey" => project_api_keys::ProjectApiKey,
    "ProjectApiKeyListResponse" => ListResponse<project_api_keys::ProjectApiKey>,
    "ProjectApiKeyDeleteResponse" => DeletionStatus,
    "ProjectRateLimit" => project_rate_limits::ProjectRateLimit,
    "ProjectRateLimitListResponse" => ListResponse<project_rate_limits::ProjectRateLimit>,
    "ProjectRateLimitUpdateRequest" => project_rate_limits::ProjectRateLimitUpdateRequest,
    "ProjectServiceAccount" => project_service_accounts::ProjectServiceAccount,
    "ProjectServiceAccountListResponse" => ListResponse<project_service_accounts::ProjectServiceAccount>,
    "ProjectServiceAccountCreateRequest" => project_service_accounts::ProjectServiceAccountCreateRequest,
    "ProjectServiceAccountCreateResponse" => project_service_accounts::ProjectServiceAccountCreateResponse,
    "ProjectServiceAccountDeleteResponse" => DeletionStatus,
    "ProjectUser" => project_users::ProjectUser,
    "ProjectUserListResponse" => ListResponse<project_users::ProjectUser>,
    "ProjectUserCreateRequest" => project_users::ProjectUserCreateRequest,
    "ProjectUserUpdateRequest" => project_users::ProjectUserUpdateRequest,
    "ProjectUserDeleteResponse" => DeletionStatus,

    // Usage
    "UsageResponse" => usage::UsageResponse,
}
