//! The endpoint table: one descriptor per API operation.
//!
//! A descriptor names the HTTP method, the path template relative to the base
//! URL, the upstream operation id (`alias`), where each parameter goes and
//! which schema the response is validated against. Typed client methods
//! render their routes from these descriptors, and
//! [`OpenAiClient::call`](crate::client::OpenAiClient::call) drives a request
//! from nothing but the descriptor and untyped parameters.

use crate::{ApiResponseOrError, OpenAiError};
use serde_json::{Map, Value};

#[derive(Debug, Clone, Copy, PartialEq, Eq, strum_macros::Display)]
#[strum(serialize_all = "UPPERCASE")]
pub enum HttpMethod {
    Get,
    Post,
    Delete,
}

impl HttpMethod {
    pub fn as_reqwest(self) -> reqwest::Method {
        match self {
            HttpMethod::Get => reqwest::Method::GET,
            HttpMethod::Post => reqwest::Method::POST,
            HttpMethod::Delete => reqwest::Method::DELETE,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParamLocation {
    /// Substituted into a `{name}` placeholder of the path template.
    Path,
    Query,
    /// JSON request body.
    Body,
    /// `multipart/form-data` request body.
    Form,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParamKind {
    String,
    Integer,
    Boolean,
    StringArray,
    /// Encoded as `name[key]=value` pairs.
    Object,
    Enum(&'static [&'static str]),
    /// A body validated against a named entry of the schema table.
    Schema(&'static str),
}

impl ParamKind {
    /// Whether an untyped value is acceptable for this kind.
    pub fn accepts(&self, value: &Value) -> bool {
        match (self, value) {
            (ParamKind::String, Value::String(_)) => true,
            (ParamKind::Integer, Value::Number(number)) => number.is_i64() || number.is_u64(),
            (ParamKind::Boolean, Value::Bool(_)) => true,
            (ParamKind::StringArray, Value::Array(items)) => items.iter().all(Value::is_string),
            (ParamKind::Object, Value::Object(_)) => true,
            (ParamKind::Enum(literals), Value::String(s)) => literals.contains(&s.as_str()),
            (ParamKind::Schema(_), _) => true,
            _ => false,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Parameter {
    pub name: &'static str,
    pub location: ParamLocation,
    pub kind: ParamKind,
    pub required: bool,
}

impl Parameter {
    pub const fn path(name: &'static str) -> Self {
        Parameter {
            name,
            location: ParamLocation::Path,
            kind: ParamKind::String,
            required: true,
        }
    }

    pub const fn query(name: &'static str, kind: ParamKind) -> Self {
        Parameter {
            name,
            location: ParamLocation::Query,
            kind,
            required: false,
        }
    }

    pub const fn body(schema: &'static str) -> Self {
        Parameter {
            name: "body",
            location: ParamLocation::Body,
            kind: ParamKind::Schema(schema),
            required: true,
        }
    }

    pub const fn form(schema: &'static str) -> Self {
        Parameter {
            name: "body",
            location: ParamLocation::Form,
            kind: ParamKind::Schema(schema),
            required: true,
        }
    }

    pub const fn required(self) -> Self {
        Parameter {
            required: true,
            ..self
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResponseKind {
    Json(&'static str),
    Text,
    Binary,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ErrorStatus {
    pub status: u16,
    pub schema: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Endpoint {
    pub method: HttpMethod,
    pub path: &'static str,
    pub alias: &'static str,
    pub description: &'static str,
    pub parameters: &'static [Parameter],
    pub response: ResponseKind,
    pub errors: &'static [ErrorStatus],
}

fn endpoint_error(message: String) -> OpenAiError {
    OpenAiError::new(message, "endpoint".to_string())
}

impl Endpoint {
    /// Placeholder names of the path template, in order.
    pub fn path_params(&self) -> Vec<&'static str> {
        let path: &'static str = self.path;
        path.split('{')
            .skip(1)
            .filter_map(|segment| segment.split_once('}').map(|(name, _)| name))
            .collect()
    }

    pub fn parameter(&self, name: &str) -> Option<&'static Parameter> {
        let parameters: &'static [Parameter] = self.parameters;
        parameters.iter().find(|p| p.name == name)
    }

    /// The JSON or multipart body parameter, if the endpoint takes one.
    pub fn body_parameter(&self) -> Option<&'static Parameter> {
        let parameters: &'static [Parameter] = self.parameters;
        parameters
            .iter()
            .find(|p| matches!(p.location, ParamLocation::Body | ParamLocation::Form))
    }

    pub fn body_schema(&self) -> Option<&'static str> {
        match self.body_parameter()?.kind {
            ParamKind::Schema(schema) => Some(schema),
            _ => None,
        }
    }

    pub fn query_parameters(&self) -> impl Iterator<Item = &'static Parameter> {
        let parameters: &'static [Parameter] = self.parameters;
        parameters
            .iter()
            .filter(|p| p.location == ParamLocation::Query)
    }

    /// Fills the path template with positional arguments.
    pub fn render(&self, args: &[&str]) -> ApiResponseOrError<String> {
        let names = self.path_params();
        if names.len() != args.len() {
            return Err(endpoint_error(format!(
                "`{}` takes {} path parameter(s), got {}",
                self.alias,
                names.len(),
                args.len()
            )));
        }

        let mut path = self.path.to_string();
        for (name, arg) in names.iter().zip(args) {
            if arg.is_empty() {
                return Err(endpoint_error(format!(
                    "`{}`: path parameter `{name}` is empty",
                    self.alias
                )));
            }
            path = path.replace(&format!("{{{name}}}"), arg);
        }
        Ok(path)
    }

    /// Fills the path template from named values. Strings and numbers are accepted.
    pub fn render_named(&self, params: &Map<String, Value>) -> ApiResponseOrError<String> {
        if let Some(unknown) = params
            .keys()
            .find(|key| !self.path_params().contains(&key.as_str()))
        {
            return Err(endpoint_error(format!(
                "`{}` has no path parameter `{unknown}`",
                self.alias
            )));
        }

        let mut args = Vec::new();
        for name in self.path_params() {
            let arg = match params.get(name) {
                Some(Value::String(s)) => s.clone(),
                Some(Value::Number(n)) => n.to_string(),
                Some(other) => {
                    return Err(endpoint_error(format!(
                        "`{}`: path parameter `{name}` must be a string, got {other}",
                        self.alias
                    )))
                }
                None => {
                    return Err(endpoint_error(format!(
                        "`{}`: missing path parameter `{name}`",
                        self.alias
                    )))
                }
            };
            args.push(arg);
        }

        let args: Vec<&str> = args.iter().map(String::as_str).collect();
        self.render(&args)
    }

    /// Rejects unknown query parameters, values of the wrong kind and missing required ones.
    pub fn check_query(&self, query: &Map<String, Value>) -> ApiResponseOrError<()> {
        for (name, value) in query {
            let parameter = self
                .query_parameters()
                .find(|p| p.name == name)
                .ok_or_else(|| {
                    endpoint_error(format!(
                        "`{}` has no query parameter `{name}`",
                        self.alias
                    ))
                })?;
            if !value.is_null() && !parameter.kind.accepts(value) {
                return Err(endpoint_error(format!(
                    "`{}`: query parameter `{name}` does not accept {value}",
                    self.alias
                )));
            }
        }

        if let Some(missing) = self
            .query_parameters()
            .find(|p| p.required && query.get(p.name).map_or(true, Value::is_null))
        {
            return Err(endpoint_error(format!(
                "`{}`: missing query parameter `{}`",
                self.alias, missing.name
            )));
        }
        Ok(())
    }
}

/// Looks up a descriptor by its upstream operation id.
pub fn find(alias: &str) -> Option<&'static Endpoint> {
    ENDPOINTS.iter().copied().find(|e| e.alias == alias)
}

const ORDER: &[&str] = &["asc", "desc"];
const FILE_STATUS: &[&str] = &["in_progress", "completed", "failed", "cancelled"];
const BUCKET_WIDTH: &[&str] = &["1m", "1h", "1d"];

const LIMIT: Parameter = Parameter::query("limit", ParamKind::Integer);
const ORDER_PARAM: Parameter = Parameter::query("order", ParamKind::Enum(ORDER));
const AFTER: Parameter = Parameter::query("after", ParamKind::String);
const BEFORE: Parameter = Parameter::query("before", ParamKind::String);
const INCLUDE: Parameter = Parameter::query("include[]", ParamKind::StringArray);
const FILE_FILTER: Parameter = Parameter::query("filter", ParamKind::Enum(FILE_STATUS));

const NOT_FOUND: &[ErrorStatus] = &[ErrorStatus {
    status: 404,
    schema: "ErrorResponse",
}];
const BAD_REQUEST: &[ErrorStatus] = &[ErrorStatus {
    status: 400,
    schema: "ErrorResponse",
}];

macro_rules! endpoint {
    ($method:ident $path:literal as $alias:literal, $description:literal, [$($param:expr),* $(,)?] => $response:expr $(, errors = $errors:expr)?) => {
        Endpoint {
            method: HttpMethod::$method,
            path: $path,
            alias: $alias,
            description: $description,
            parameters: &[$($param),*],
            response: $response,
            errors: endpoint!(@errors $($errors)?),
        }
    };
    (@errors) => { &[] };
    (@errors $errors:expr) => { $errors };
}

use ResponseKind::{Binary, Json, Text};

// Models

pub const LIST_MODELS: Endpoint = endpoint!(Get "/models" as "listModels",
    "Lists the currently available models.",
    [] => Json("ListModelsResponse"));
pub const RETRIEVE_MODEL: Endpoint = endpoint!(Get "/models/{model}" as "retrieveModel",
    "Retrieves a model instance.",
    [Parameter::path("model")] => Json("Model"), errors = NOT_FOUND);
pub const DELETE_MODEL: Endpoint = endpoint!(Delete "/models/{model}" as "deleteModel",
    "Deletes a fine-tuned model.",
    [Parameter::path("model")] => Json("DeleteModelResponse"), errors = NOT_FOUND);

// Chat

pub const CREATE_CHAT_COMPLETION: Endpoint = endpoint!(Post "/chat/completions" as "createChatCompletion",
    "Creates a model response for the given chat conversation.",
    [Parameter::body("CreateChatCompletionRequest")] => Json("CreateChatCompletionResponse"));
pub const LIST_CHAT_COMPLETIONS: Endpoint = endpoint!(Get "/chat/completions" as "listChatCompletions",
    "Lists stored chat completions.",
    [
        Parameter::query("model", ParamKind::String),
        Parameter::query("metadata", ParamKind::Object),
        AFTER,
        LIMIT,
        ORDER_PARAM,
    ] => Json("ChatCompletionList"));
pub const GET_CHAT_COMPLETION: Endpoint = endpoint!(Get "/chat/completions/{completion_id}" as "getChatCompletion",
    "Gets a stored chat completion.",
    [Parameter::path("completion_id")] => Json("CreateChatCompletionResponse"));
pub const UPDATE_CHAT_COMPLETION: Endpoint = endpoint!(Post "/chat/completions/{completion_id}" as "updateChatCompletion",
    "Modifies the metadata of a stored chat completion.",
    [Parameter::path("completion_id"), Parameter::body("UpdateChatCompletionRequest")] => Json("CreateChatCompletionResponse"));
pub const DELETE_CHAT_COMPLETION: Endpoint = endpoint!(Delete "/chat/completions/{completion_id}" as "deleteChatCompletion",
    "Deletes a stored chat completion.",
    [Parameter::path("completion_id")] => Json("ChatCompletionDeleted"));
pub const GET_CHAT_COMPLETION_MESSAGES: Endpoint = endpoint!(Get "/chat/completions/{completion_id}/messages" as "getChatCompletionMessages",
    "Gets the messages of a stored chat completion.",
    [Parameter::path("completion_id"), AFTER, LIMIT, ORDER_PARAM] => Json("ChatCompletionMessageList"));

// Completions, embeddings, moderations

pub const CREATE_COMPLETION: Endpoint = endpoint!(Post "/completions" as "createCompletion",
    "Creates a completion for the provided prompt and parameters.",
    [Parameter::body("CreateCompletionRequest")] => Json("CreateCompletionResponse"));
pub const CREATE_EMBEDDING: Endpoint = endpoint!(Post "/embeddings" as "createEmbedding",
    "Creates an embedding vector representing the input text.",
    [Parameter::body("CreateEmbeddingRequest")] => Json("CreateEmbeddingResponse"));
pub const CREATE_MODERATION: Endpoint = endpoint!(Post "/moderations" as "createModeration",
    "Classifies if text and/or image inputs are potentially harmful.",
    [Parameter::body("CreateModerationRequest")] => Json("CreateModerationResponse"));

// Images

pub const CREATE_IMAGE: Endpoint = endpoint!(Post "/images/generations" as "createImage",
    "Creates an image given a prompt.",
    [Parameter::body("CreateImageRequest")] => Json("ImagesResponse"));
pub const CREATE_IMAGE_EDIT: Endpoint = endpoint!(Post "/images/edits" as "createImageEdit",
    "Creates an edited or extended image given one or more source images and a prompt.",
    [Parameter::form("CreateImageEditRequest")] => Json("ImagesResponse"));
pub const CREATE_IMAGE_VARIATION: Endpoint = endpoint!(Post "/images/variations" as "createImageVariation",
    "Creates a variation of a given image.",
    [Parameter::form("CreateImageVariationRequest")] => Json("ImagesResponse"));

// Audio

pub const CREATE_SPEECH: Endpoint = endpoint!(Post "/audio/speech" as "createSpeech",
    "Generates audio from the input text.",
    [Parameter::body("CreateSpeechRequest")] => Binary);
pub const CREATE_TRANSCRIPTION: Endpoint = endpoint!(Post "/audio/transcriptions" as "createTranscription",
    "Transcribes audio into the input language.",
    [Parameter::form("CreateTranscriptionRequest")] => Json("CreateTranscriptionResponse"));
pub const CREATE_TRANSLATION: Endpoint = endpoint!(Post "/audio/translations" as "createTranslation",
    "Translates audio into English.",
    [Parameter::form("CreateTranslationRequest")] => Json("CreateTranslationResponse"));

// Files

pub const LIST_FILES: Endpoint = endpoint!(Get "/files" as "listFiles",
    "Returns a list of files.",
    [Parameter::query("purpose", ParamKind::String), LIMIT, ORDER_PARAM, AFTER] => Json("ListFilesResponse"));
pub const CREATE_FILE: Endpoint = endpoint!(Post "/files" as "createFile",
    "Uploads a file that can be used across various endpoints.",
    [Parameter::form("CreateFileRequest")] => Json("OpenAIFile"));
pub const DELETE_FILE: Endpoint = endpoint!(Delete "/files/{file_id}" as "deleteFile",
    "Deletes a file.",
    [Parameter::path("file_id")] => Json("DeleteFileResponse"));
pub const RETRIEVE_FILE: Endpoint = endpoint!(Get "/files/{file_id}" as "retrieveFile",
    "Returns information about a specific file.",
    [Parameter::path("file_id")] => Json("OpenAIFile"), errors = NOT_FOUND);
pub const DOWNLOAD_FILE: Endpoint = endpoint!(Get "/files/{file_id}/content" as "downloadFile",
    "Returns the contents of the specified file.",
    [Parameter::path("file_id")] => Text, errors = NOT_FOUND);

// Uploads

pub const CREATE_UPLOAD: Endpoint = endpoint!(Post "/uploads" as "createUpload",
    "Creates an intermediate Upload object that Parts can be added to.",
    [Parameter::body("CreateUploadRequest")] => Json("Upload"));
pub const ADD_UPLOAD_PART: Endpoint = endpoint!(Post "/uploads/{upload_id}/parts" as "addUploadPart",
    "Adds a Part to an Upload object.",
    [Parameter::path("upload_id"), Parameter::form("AddUploadPartRequest")] => Json("UploadPart"));
pub const COMPLETE_UPLOAD: Endpoint = endpoint!(Post "/uploads/{upload_id}/complete" as "completeUpload",
    "Completes the Upload.",
    [Parameter::path("upload_id"), Parameter::body("CompleteUploadRequest")] => Json("Upload"));
pub const CANCEL_UPLOAD: Endpoint = endpoint!(Post "/uploads/{upload_id}/cancel" as "cancelUpload",
    "Cancels the Upload.",
    [Parameter::path("upload_id")] => Json("Upload"));

// Batches

pub const CREATE_BATCH: Endpoint = endpoint!(Post "/batches" as "createBatch",
    "Creates and executes a batch from an uploaded file of requests.",
    [Parameter::body("CreateBatchRequest")] => Json("Batch"), errors = BAD_REQUEST);
pub const LIST_BATCHES: Endpoint = endpoint!(Get "/batches" as "listBatches",
    "Lists your organization's batches.",
    [AFTER, LIMIT] => Json("ListBatchesResponse"));
pub const RETRIEVE_BATCH: Endpoint = endpoint!(Get "/batches/{batch_id}" as "retrieveBatch",
    "Retrieves a batch.",
    [Parameter::path("batch_id")] => Json("Batch"));
pub const CANCEL_BATCH: Endpoint = endpoint!(Post "/batches/{batch_id}/cancel" as "cancelBatch",
    "Cancels an in-progress batch.",
    [Parameter::path("batch_id")] => Json("Batch"));

// Fine-tuning

pub const CREATE_FINE_TUNING_JOB: Endpoint = endpoint!(Post "/fine_tuning/jobs" as "createFineTuningJob",
    "Creates a fine-tuning job which begins the process of creating a new model from a given dataset.",
    [Parameter::body("CreateFineTuningJobRequest")] => Json("FineTuningJob"));
pub const LIST_PAGINATED_FINE_TUNING_JOBS: Endpoint = endpoint!(Get "/fine_tuning/jobs" as "listPaginatedFineTuningJobs",
    "Lists your organization's fine-tuning jobs.",
    [AFTER, LIMIT, Parameter::query("metadata", ParamKind::Object)] => Json("ListPaginatedFineTuningJobsResponse"));
pub const RETRIEVE_FINE_TUNING_JOB: Endpoint = endpoint!(Get "/fine_tuning/jobs/{fine_tuning_job_id}" as "retrieveFineTuningJob",
    "Gets info about a fine-tuning job.",
    [Parameter::path("fine_tuning_job_id")] => Json("FineTuningJob"), errors = NOT_FOUND);
pub const CANCEL_FINE_TUNING_JOB: Endpoint = endpoint!(Post "/fine_tuning/jobs/{fine_tuning_job_id}/cancel" as "cancelFineTuningJob",
    "Immediately cancels a fine-tuning job.",
    [Parameter::path("fine_tuning_job_id")] => Json("FineTuningJob"));
pub const PAUSE_FINE_TUNING_JOB: Endpoint = endpoint!(Post "/fine_tuning/jobs/{fine_tuning_job_id}/pause" as "pauseFineTuningJob",
    "Pauses a running fine-tuning job.",
    [Parameter::path("fine_tuning_job_id")] => Json("FineTuningJob"));
pub const RESUME_FINE_TUNING_JOB: Endpoint = endpoint!(Post "/fine_tuning/jobs/{fine_tuning_job_id}/resume" as "resumeFineTuningJob",
    "Resumes a paused fine-tuning job.",
    [Parameter::path("fine_tuning_job_id")] => Json("FineTuningJob"));
pub const LIST_FINE_TUNING_EVENTS: Endpoint = endpoint!(Get "/fine_tuning/jobs/{fine_tuning_job_id}/events" as "listFineTuningEvents",
    "Gets status updates for a fine-tuning job.",
    [Parameter::path("fine_tuning_job_id"), AFTER, LIMIT] => Json("ListFineTuningJobEventsResponse"));
pub const LIST_FINE_TUNING_JOB_CHECKPOINTS: Endpoint = endpoint!(Get "/fine_tuning/jobs/{fine_tuning_job_id}/checkpoints" as "listFineTuningJobCheckpoints",
    "Lists checkpoints for a fine-tuning job.",
    [Parameter::path("fine_tuning_job_id"), AFTER, LIMIT] => Json("ListFineTuningJobCheckpointsResponse"));

// Assistants

pub const LIST_ASSISTANTS: Endpoint = endpoint!(Get "/assistants" as "listAssistants",
    "Returns a list of assistants.",
    [LIMIT, ORDER_PARAM, AFTER, BEFORE] => Json("ListAssistantsResponse"));
pub const CREATE_ASSISTANT: Endpoint = endpoint!(Post "/assistants" as "createAssistant",
    "Creates an assistant with a model and instructions.",
    [Parameter::body("CreateAssistantRequest")] => Json("AssistantObject"));
pub const GET_ASSISTANT: Endpoint = endpoint!(Get "/assistants/{assistant_id}" as "getAssistant",
    "Retrieves an assistant.",
    [Parameter::path("assistant_id")] => Json("AssistantObject"));
pub const MODIFY_ASSISTANT: Endpoint = endpoint!(Post "/assistants/{assistant_id}" as "modifyAssistant",
    "Modifies an assistant.",
    [Parameter::path("assistant_id"), Parameter::body("ModifyAssistantRequest")] => Json("AssistantObject"));
pub const DELETE_ASSISTANT: Endpoint = endpoint!(Delete "/assistants/{assistant_id}" as "deleteAssistant",
    "Deletes an assistant.",
    [Parameter::path("assistant_id")] => Json("DeleteAssistantResponse"));

// Threads

pub const CREATE_THREAD: Endpoint = endpoint!(Post "/threads" as "createThread",
    "Creates a thread.",
    [Parameter::body("CreateThreadRequest")] => Json("ThreadObject"));
pub const CREATE_THREAD_AND_RUN: Endpoint = endpoint!(Post "/threads/runs" as "createThreadAndRun",
    "Creates a thread and runs it in one request.",
    [Parameter::body("CreateThreadAndRunRequest")] => Json("RunObject"));
pub const GET_THREAD: Endpoint = endpoint!(Get "/threads/{thread_id}" as "getThread",
    "Retrieves a thread.",
    [Parameter::path("thread_id")] => Json("ThreadObject"));
pub const MODIFY_THREAD: Endpoint = endpoint!(Post "/threads/{thread_id}" as "modifyThread",
    "Modifies a thread.",
    [Parameter::path("thread_id"), Parameter::body("ModifyThreadRequest")] => Json("ThreadObject"));
pub const DELETE_THREAD: Endpoint = endpoint!(Delete "/threads/{thread_id}" as "deleteThread",
    "Deletes a thread.",
    [Parameter::path("thread_id")] => Json("DeleteThreadResponse"));

// Messages

pub const LIST_MESSAGES: Endpoint = endpoint!(Get "/threads/{thread_id}/messages" as "listMessages",
    "Returns a list of messages for a given thread.",
    [
        Parameter::path("thread_id"),
        LIMIT,
        ORDER_PARAM,
        AFTER,
        BEFORE,
        Parameter::query("run_id", ParamKind::String),
    ] => Json("ListMessagesResponse"));
pub const CREATE_MESSAGE: Endpoint = endpoint!(Post "/threads/{thread_id}/messages" as "createMessage",
    "Creates a message.",
    [Parameter::path("thread_id"), Parameter::body("CreateMessageRequest")] => Json("MessageObject"));
pub const GET_MESSAGE: Endpoint = endpoint!(Get "/threads/{thread_id}/messages/{message_id}" as "getMessage",
    "Retrieves a message.",
    [Parameter::path("thread_id"), Parameter::path("message_id")] => Json("MessageObject"));
pub const MODIFY_MESSAGE: Endpoint = endpoint!(Post "/threads/{thread_id}/messages/{message_id}" as "modifyMessage",
    "Modifies a message.",
    [
        Parameter::path("thread_id"),
        Parameter::path("message_id"),
        Parameter::body("ModifyMessageRequest"),
    ] => Json("MessageObject"));
pub const DELETE_MESSAGE: Endpoint = endpoint!(Delete "/threads/{thread_id}/messages/{message_id}" as "deleteMessage",
    "Deletes a message.",
    [Parameter::path("thread_id"), Parameter::path("message_id")] => Json("DeleteMessageResponse"));

// Runs

pub const LIST_RUNS: Endpoint = endpoint!(Get "/threads/{thread_id}/runs" as "listRuns",
    "Returns a list of runs belonging to a thread.",
    [Parameter::path("thread_id"), LIMIT, ORDER_PARAM, AFTER, BEFORE] => Json("ListRunsResponse"));
pub const CREATE_RUN: Endpoint = endpoint!(Post "/threads/{thread_id}/runs" as "createRun",
    "Creates a run.",
    [Parameter::path("thread_id"), INCLUDE, Parameter::body("CreateRunRequest")] => Json("RunObject"));
pub const GET_RUN: Endpoint = endpoint!(Get "/threads/{thread_id}/runs/{run_id}" as "getRun",
    "Retrieves a run.",
    [Parameter::path("thread_id"), Parameter::path("run_id")] => Json("RunObject"));
pub const MODIFY_RUN: Endpoint = endpoint!(Post "/threads/{thread_id}/runs/{run_id}" as "modifyRun",
    "Modifies a run.",
    [
        Parameter::path("thread_id"),
        Parameter::path("run_id"),
        Parameter::body("ModifyRunRequest"),
    ] => Json("RunObject"));
pub const CANCEL_RUN: Endpoint = endpoint!(Post "/threads/{thread_id}/runs/{run_id}/cancel" as "cancelRun",
    "Cancels a run that is `in_progress`.",
    [Parameter::path("thread_id"), Parameter::path("run_id")] => Json("RunObject"));
pub const SUBMIT_TOOL_OUTPUTS_TO_RUN: Endpoint = endpoint!(Post "/threads/{thread_id}/runs/{run_id}/submit_tool_outputs" as "submitToolOuputsToRun",
    "Submits the outputs of tool calls for a run that requires action.",
    [
        Parameter::path("thread_id"),
        Parameter::path("run_id"),
        Parameter::body("SubmitToolOutputsRunRequest"),
    ] => Json("RunObject"));

// Run steps

pub const LIST_RUN_STEPS: Endpoint = endpoint!(Get "/threads/{thread_id}/runs/{run_id}/steps" as "listRunSteps",
    "Returns a list of run steps belonging to a run.",
    [
        Parameter::path("thread_id"),
        Parameter::path("run_id"),
        LIMIT,
        ORDER_PARAM,
        AFTER,
        BEFORE,
        INCLUDE,
    ] => Json("ListRunStepsResponse"));
pub const GET_RUN_STEP: Endpoint = endpoint!(Get "/threads/{thread_id}/runs/{run_id}/steps/{step_id}" as "getRunStep",
    "Retrieves a run step.",
    [
        Parameter::path("thread_id"),
        Parameter::path("run_id"),
        Parameter::path("step_id"),
        INCLUDE,
    ] => Json("RunStepObject"));

// Vector stores

pub const LIST_VECTOR_STORES: Endpoint = endpoint!(Get "/vector_stores" as "listVectorStores",
    "Returns a list of vector stores.",
    [LIMIT, ORDER_PARAM, AFTER, BEFORE] => Json("ListVectorStoresResponse"));
pub const CREATE_VECTOR_STORE: Endpoint = endpoint!(Post "/vector_stores" as "createVectorStore",
    "Creates a vector store.",
    [Parameter::body("CreateVectorStoreRequest")] => Json("VectorStoreObject"));
pub const GET_VECTOR_STORE: Endpoint = endpoint!(Get "/vector_stores/{vector_store_id}" as "getVectorStore",
    "Retrieves a vector store.",
    [Parameter::path("vector_store_id")] => Json("VectorStoreObject"));
pub const MODIFY_VECTOR_STORE: Endpoint = endpoint!(Post "/vector_stores/{vector_store_id}" as "modifyVectorStore",
    "Modifies a vector store.",
    [Parameter::path("vector_store_id"), Parameter::body("UpdateVectorStoreRequest")] => Json("VectorStoreObject"));
pub const DELETE_VECTOR_STORE: Endpoint = endpoint!(Delete "/vector_stores/{vector_store_id}" as "deleteVectorStore",
    "Deletes a vector store.",
    [Parameter::path("vector_store_id")] => Json("DeleteVectorStoreResponse"));
pub const SEARCH_VECTOR_STORE: Endpoint = endpoint!(Post "/vector_stores/{vector_store_id}/search" as "searchVectorStore",
    "Searches a vector store for relevant chunks based on a query and file attributes filter.",
    [Parameter::path("vector_store_id"), Parameter::body("VectorStoreSearchRequest")] => Json("VectorStoreSearchResultsPage"));
pub const LIST_VECTOR_STORE_FILES: Endpoint = endpoint!(Get "/vector_stores/{vector_store_id}/files" as "listVectorStoreFiles",
    "Returns a list of vector store files.",
    [Parameter::path("vector_store_id"), LIMIT, ORDER_PARAM, AFTER, BEFORE, FILE_FILTER] => Json("ListVectorStoreFilesResponse"));
pub const CREATE_VECTOR_STORE_FILE: Endpoint = endpoint!(Post "/vector_stores/{vector_store_id}/files" as "createVectorStoreFile",
    "Creates a vector store file by attaching a file to a vector store.",
    [Parameter::path("vector_store_id"), Parameter::body("CreateVectorStoreFileRequest")] => Json("VectorStoreFileObject"));
pub const GET_VECTOR_STORE_FILE: Endpoint = endpoint!(Get "/vector_stores/{vector_store_id}/files/{file_id}" as "getVectorStoreFile",
    "Retrieves a vector store file.",
    [Parameter::path("vector_store_id"), Parameter::path("file_id")] => Json("VectorStoreFileObject"));
pub const UPDATE_VECTOR_STORE_FILE_ATTRIBUTES: Endpoint = endpoint!(Post "/vector_stores/{vector_store_id}/files/{file_id}" as "updateVectorStoreFileAttributes",
    "Updates attributes on a vector store file.",
    [
        Parameter::path("vector_store_id"),
        Parameter::path("file_id"),
        Parameter::body("UpdateVectorStoreFileAttributesRequest"),
    ] => Json("VectorStoreFileObject"));
pub const DELETE_VECTOR_STORE_FILE: Endpoint = endpoint!(Delete "/vector_stores/{vector_store_id}/files/{file_id}" as "deleteVectorStoreFile",
    "Removes a file from a vector store.",
    [Parameter::path("vector_store_id"), Parameter::path("file_id")] => Json("DeleteVectorStoreFileResponse"));
pub const RETRIEVE_VECTOR_STORE_FILE_CONTENT: Endpoint = endpoint!(Get "/vector_stores/{vector_store_id}/files/{file_id}/content" as "retrieveVectorStoreFileContent",
    "Retrieves the parsed contents of a vector store file.",
    [Parameter::path("vector_store_id"), Parameter::path("file_id")] => Json("VectorStoreFileContentResponse"));
pub const CREATE_VECTOR_STORE_FILE_BATCH: Endpoint = endpoint!(Post "/vector_stores/{vector_store_id}/file_batches" as "createVectorStoreFileBatch",
    "Creates a vector store file batch.",
    [Parameter::path("vector_store_id"), Parameter::body("CreateVectorStoreFileBatchRequest")] => Json("VectorStoreFileBatchObject"));
pub const GET_VECTOR_STORE_FILE_BATCH: Endpoint = endpoint!(Get "/vector_stores/{vector_store_id}/file_batches/{batch_id}" as "getVectorStoreFileBatch",
    "Retrieves a vector store file batch.",
    [Parameter::path("vector_store_id"), Parameter::path("batch_id")] => Json("VectorStoreFileBatchObject"));
pub const CANCEL_VECTOR_STORE_FILE_BATCH: Endpoint = endpoint!(Post "/vector_stores/{vector_store_id}/file_batches/{batch_id}/cancel" as "cancelVectorStoreFileBatch",
    "Cancels a vector store file batch.",
    [Parameter::path("vector_store_id"), Parameter::path("batch_id")] => Json("VectorStoreFileBatchObject"));
pub const LIST_FILES_IN_VECTOR_STORE_BATCH: Endpoint = endpoint!(Get "/vector_stores/{vector_store_id}/file_batches/{batch_id}/files" as "listFilesInVectorStoreBatch",
    "Returns a list of vector store files in a batch.",
    [
        Parameter::path("vector_store_id"),
        Parameter::path("batch_id"),
        LIMIT,
        ORDER_PARAM,
        AFTER,
        BEFORE,
        FILE_FILTER,
    ] => Json("ListVectorStoreFilesResponse"));

// Responses

pub const CREATE_RESPONSE: Endpoint = endpoint!(Post "/responses" as "createResponse",
    "Creates a model response.",
    [Parameter::body("CreateResponse")] => Json("Response"));
pub const GET_RESPONSE: Endpoint = endpoint!(Get "/responses/{response_id}" as "getResponse",
    "Retrieves a model response with the given ID.",
    [Parameter::path("response_id"), Parameter::query("include", ParamKind::StringArray)] => Json("Response"));
pub const DELETE_RESPONSE: Endpoint = endpoint!(Delete "/responses/{response_id}" as "deleteResponse",
    "Deletes a model response with the given ID.",
    [Parameter::path("response_id")] => Json("ResponseDeleted"), errors = NOT_FOUND);
pub const CANCEL_RESPONSE: Endpoint = endpoint!(Post "/responses/{response_id}/cancel" as "cancelResponse",
    "Cancels a model response created in background mode.",
    [Parameter::path("response_id")] => Json("Response"), errors = NOT_FOUND);
pub const LIST_INPUT_ITEMS: Endpoint = endpoint!(Get "/responses/{response_id}/input_items" as "listInputItems",
    "Returns a list of input items for a given response.",
    [
        Parameter::path("response_id"),
        LIMIT,
        ORDER_PARAM,
        AFTER,
        BEFORE,
        Parameter::query("include", ParamKind::StringArray),
    ] => Json("ResponseItemList"));

// Realtime

pub const CREATE_REALTIME_SESSION: Endpoint = endpoint!(Post "/realtime/sessions" as "create-realtime-session",
    "Creates an ephemeral API token for client-side use of the Realtime API.",
    [Parameter::body("RealtimeSessionCreateRequest")] => Json("RealtimeSessionCreateResponse"));
pub const CREATE_REALTIME_TRANSCRIPTION_SESSION: Endpoint = endpoint!(Post "/realtime/transcription_sessions" as "create-realtime-transcription-session",
    "Creates an ephemeral API token for realtime transcriptions.",
    [Parameter::body("RealtimeTranscriptionSessionCreateRequest")] => Json("RealtimeTranscriptionSessionCreateResponse"));

// Usage

const START_TIME: Parameter = Parameter::query("start_time", ParamKind::Integer).required();
const END_TIME: Parameter = Parameter::query("end_time", ParamKind::Integer);
const BUCKET: Parameter = Parameter::query("bucket_width", ParamKind::Enum(BUCKET_WIDTH));
const PROJECT_IDS: Parameter = Parameter::query("project_ids", ParamKind::StringArray);
const USER_IDS: Parameter = Parameter::query("user_ids", ParamKind::StringArray);
const API_KEY_IDS: Parameter = Parameter::query("api_key_ids", ParamKind::StringArray);
const MODELS: Parameter = Parameter::query("models", ParamKind::StringArray);
const GROUP_BY: Parameter = Parameter::query("group_by", ParamKind::StringArray);
const PAGE: Parameter = Parameter::query("page", ParamKind::String);

pub const USAGE_COMPLETIONS: Endpoint = endpoint!(Get "/organization/usage/completions" as "usage-completions",
    "Gets completions usage details for the organization.",
    [
        START_TIME,
        END_TIME,
        BUCKET,
        PROJECT_IDS,
        USER_IDS,
        API_KEY_IDS,
        MODELS,
        Parameter::query("batch", ParamKind::Boolean),
        GROUP_BY,
        LIMIT,
        PAGE,
    ] => Json("UsageResponse"));
pub const USAGE_EMBEDDINGS: Endpoint = endpoint!(Get "/organization/usage/embeddings" as "usage-embeddings",
    "Gets embeddings usage details for the organization.",
    [START_TIME, END_TIME, BUCKET, PROJECT_IDS, USER_IDS, API_KEY_IDS, MODELS, GROUP_BY, LIMIT, PAGE] => Json("UsageResponse"));
pub const USAGE_MODERATIONS: Endpoint = endpoint!(Get "/organization/usage/moderations" as "usage-moderations",
    "Gets moderations usage details for the organization.",
    [START_TIME, END_TIME, BUCKET, PROJECT_IDS, USER_IDS, API_KEY_IDS, MODELS, GROUP_BY, LIMIT, PAGE] => Json("UsageResponse"));
pub const USAGE_IMAGES: Endpoint = endpoint!(Get "/organization/usage/images" as "usage-images",
    "Gets images usage details for the organization.",
    [
        START_TIME,
        END_TIME,
        BUCKET,
        Parameter::query("sources", ParamKind::StringArray),
        Parameter::query("sizes", ParamKind::StringArray),
        PROJECT_IDS,
        USER_IDS,
        API_KEY_IDS,
        MODELS,
        GROUP_BY,
        LIMIT,
        PAGE,
    ] => Json("UsageResponse"));
pub const USAGE_AUDIO_SPEECHES: Endpoint = endpoint!(Get "/organization/usage/audio_speeches" as "usage-audio-speeches",
    "Gets audio speeches usage details for the organization.",
    [START_TIME, END_TIME, BUCKET, PROJECT_IDS, USER_IDS, API_KEY_IDS, MODELS, GROUP_BY, LIMIT, PAGE] => Json("UsageResponse"));
pub const USAGE_AUDIO_TRANSCRIPTIONS: Endpoint = endpoint!(Get "/organization/usage/audio_transcriptions" as "usage-audio-transcriptions",
    "Gets audio transcriptions usage details for the organization.",
    [START_TIME, END_TIME, BUCKET, PROJECT_IDS, USER_IDS, API_KEY_IDS, MODELS, GROUP_BY, LIMIT, PAGE] => Json("UsageResponse"));
pub const USAGE_VECTOR_STORES: Endpoint = endpoint!(Get "/organization/usage/vector_stores" as "usage-vector-stores",
    "Gets vector stores usage details for the organization.",
    [START_TIME, END_TIME, BUCKET, PROJECT_IDS, GROUP_BY, LIMIT, PAGE] => Json("UsageResponse"));
pub const USAGE_CODE_INTERPRETER_SESSIONS: Endpoint = endpoint!(Get "/organization/usage/code_interpreter_sessions" as "usage-code-interpreter-sessions",
    "Gets code interpreter sessions usage details for the organization.",
    [START_TIME, END_TIME, BUCKET, PROJECT_IDS, GROUP_BY, LIMIT, PAGE] => Json("UsageResponse"));
pub const USAGE_COSTS: Endpoint = endpoint!(Get "/organization/costs" as "usage-costs",
    "Gets costs details for the organization.",
    [
        START_TIME,
        END_TIME,
        Parameter::query("bucket_width", ParamKind::Enum(&["1d"])),
        PROJECT_IDS,
        GROUP_BY,
        LIMIT,
        PAGE,
    ] => Json("UsageResponse"));

// Audit logs and admin API keys

const ADMIN_ORDER: Parameter = Parameter::query("order", ParamKind::Enum(ORDER));

pub const LIST_AUDIT_LOGS: Endpoint = endpoint!(Get "/organization/audit_logs" as "list-audit-logs",
    "Lists user actions and configuration changes within this organization.",
    [
        Parameter::query("effective_at", ParamKind::Object),
        Parameter::query("project_ids[]", ParamKind::StringArray),
        Parameter::query("event_types[]", ParamKind::StringArray),
        Parameter::query("actor_ids[]", ParamKind::StringArray),
        Parameter::query("actor_emails[]", ParamKind::StringArray),
        Parameter::query("resource_ids[]", ParamKind::StringArray),
        LIMIT,
        AFTER,
        BEFORE,
    ] => Json("ListAuditLogsResponse"));
pub const ADMIN_API_KEYS_LIST: Endpoint = endpoint!(Get "/organization/admin_api_keys" as "admin-api-keys-list",
    "Lists organization admin API keys.",
    [AFTER, ADMIN_ORDER, LIMIT] => Json("ApiKeyList"));
pub const ADMIN_API_KEYS_CREATE: Endpoint = endpoint!(Post "/organization/admin_api_keys" as "admin-api-keys-create",
    "Creates an organization admin API key.",
    [Parameter::body("CreateAdminApiKeyRequest")] => Json("AdminApiKey"));
pub const ADMIN_API_KEYS_GET: Endpoint = endpoint!(Get "/organization/admin_api_keys/{key_id}" as "admin-api-keys-get",
    "Retrieves a single organization admin API key.",
    [Parameter::path("key_id")] => Json("AdminApiKey"), errors = NOT_FOUND);
pub const ADMIN_API_KEYS_DELETE: Endpoint = endpoint!(Delete "/organization/admin_api_keys/{key_id}" as "admin-api-keys-delete",
    "Deletes an organization admin API key.",
    [Parameter::path("key_id")] => Json("AdminApiKeyDeleteResponse"), errors = NOT_FOUND);

// Certificates

pub const LIST_ORGANIZATION_CERTIFICATES: Endpoint = endpoint!(Get "/organization/certificates" as "listOrganizationCertificates",
    "Lists uploaded certificates for this organization.",
    [LIMIT, AFTER, ADMIN_ORDER] => Json("ListCertificatesResponse"));
pub const UPLOAD_CERTIFICATE: Endpoint = endpoint!(Post "/organization/certificates" as "uploadCertificate",
    "Uploads a certificate to the organization without activating it.",
    [Parameter::body("UploadCertificateRequest")] => Json("Certificate"));
pub const ACTIVATE_ORGANIZATION_CERTIFICATES: Endpoint = endpoint!(Post "/organization/certificates/activate" as "activateOrganizationCertificates",
    "Activates certificates at the organization level.",
    [Parameter::body("ToggleCertificatesRequest")] => Json("ListCertificatesResponse"));
pub const DEACTIVATE_ORGANIZATION_CERTIFICATES: Endpoint = endpoint!(Post "/organization/certificates/deactivate" as "deactivateOrganizationCertificates",
    "Deactivates certificates at the organization level.",
    [Parameter::body("ToggleCertificatesRequest")] => Json("ListCertificatesResponse"));
pub const GET_CERTIFICATE: Endpoint = endpoint!(Get "/organization/certificates/{certificate_id}" as "getCertificate",
    "Gets a certificate that has been uploaded to the organization.",
    [
        Parameter::path("certificate_id"),
        Parameter::query("include[]", ParamKind::StringArray),
    ] => Json("Certificate"), errors = NOT_FOUND);
pub const MODIFY_CERTIFICATE: Endpoint = endpoint!(Post "/organization/certificates/{certificate_id}" as "modifyCertificate",
    "Renames a certificate.",
    [Parameter::path("certificate_id"), Parameter::body("ModifyCertificateRequest")] => Json("Certificate"));
pub const DELETE_CERTIFICATE: Endpoint = endpoint!(Delete "/organization/certificates/{certificate_id}" as "deleteCertificate",
    "Deletes an inactive certificate from the organization.",
    [Parameter::path("certificate_id")] => Json("DeleteCertificateResponse"), errors = NOT_FOUND);

// Invites and users

pub const LIST_INVITES: Endpoint = endpoint!(Get "/organization/invites" as "list-invites",
    "Returns a list of invites in the organization.",
    [AFTER, LIMIT] => Json("InviteListResponse"));
pub const INVITE_USER: Endpoint = endpoint!(Post "/organization/invites" as "inviteUser",
    "Creates an invite for a user to the organization.",
    [Parameter::body("InviteRequest")] => Json("Invite"));
pub const RETRIEVE_INVITE: Endpoint = endpoint!(Get "/organization/invites/{invite_id}" as "retrieve-invite",
    "Retrieves an invite.",
    [Parameter::path("invite_id")] => Json("Invite"), errors = NOT_FOUND);
pub const DELETE_INVITE: Endpoint = endpoint!(Delete "/organization/invites/{invite_id}" as "delete-invite",
    "Deletes a pending invite.",
    [Parameter::path("invite_id")] => Json("InviteDeleteResponse"), errors = NOT_FOUND);

pub const LIST_USERS: Endpoint = endpoint!(Get "/organization/users" as "list-users",
    "Lists all of the users in the organization.",
    [LIMIT, AFTER, Parameter::query("emails", ParamKind::StringArray)] => Json("UserListResponse"));
pub const RETRIEVE_USER: Endpoint = endpoint!(Get "/organization/users/{user_id}" as "retrieve-user",
    "Retrieves a user by their identifier.",
    [Parameter::path("user_id")] => Json("User"), errors = NOT_FOUND);
pub const MODIFY_USER: Endpoint = endpoint!(Post "/organization/users/{user_id}" as "modify-user",
    "Modifies a user's role in the organization.",
    [Parameter::path("user_id"), Parameter::body("UserRoleUpdateRequest")] => Json("User"));
pub const DELETE_USER: Endpoint = endpoint!(Delete "/organization/users/{user_id}" as "delete-user",
    "Deletes a user from the organization.",
    [Parameter::path("user_id")] => Json("UserDeleteResponse"), errors = NOT_FOUND);

// Projects

pub const LIST_PROJECTS: Endpoint = endpoint!(Get "/organization/projects" as "list-projects",
    "Returns a list of projects.",
    [LIMIT, AFTER, Parameter::query("include_archived", ParamKind::Boolean)] => Json("ProjectListResponse"));
pub const CREATE_PROJECT: Endpoint = endpoint!(Post "/organization/projects" as "create-project",
    "Creates a new project in the organization.",
    [Parameter::body("ProjectCreateRequest")] => Json("Project"));
pub const RETRIEVE_PROJECT: Endpoint = endpoint!(Get "/organization/projects/{project_id}" as "retrieve-project",
    "Retrieves a project.",
    [Parameter::path("project_id")] => Json("Project"), errors = NOT_FOUND);
pub const MODIFY_PROJECT: Endpoint = endpoint!(Post "/organization/projects/{project_id}" as "modify-project",
    "Modifies a project in the organization.",
    [Parameter::path("project_id"), Parameter::body("ProjectUpdateRequest")] => Json("Project"), errors = BAD_REQUEST);
pub const ARCHIVE_PROJECT: Endpoint = endpoint!(Post "/organization/projects/{project_id}/archive" as "archive-project",
    "Archives a project in the organization.",
    [Parameter::path("project_id")] => Json("Project"));

pub const LIST_PROJECT_API_KEYS: Endpoint = endpoint!(Get "/organization/projects/{project_id}/api_keys" as "list-project-api-keys",
    "Returns a list of API keys in the project.",
    [Parameter::path("project_id"), LIMIT, AFTER] => Json("ProjectApiKeyListResponse"));
pub const RETRIEVE_PROJECT_API_KEY: Endpoint = endpoint!(Get "/organization/projects/{project_id}/api_keys/{key_id}" as "retrieve-project-api-key",
    "Retrieves an API key in the project.",
    [Parameter::path("project_id"), Parameter::path("key_id")] => Json("ProjectApiKey"), errors = NOT_FOUND);
pub const DELETE_PROJECT_API_KEY: Endpoint = endpoint!(Delete "/organization/projects/{project_id}/api_keys/{key_id}" as "delete-project-api-key",
    "Deletes an API key from the project.",
    [Parameter::path("project_id"), Parameter::path("key_id")] => Json("ProjectApiKeyDeleteResponse"), errors = BAD_REQUEST);

pub const LIST_PROJECT_CERTIFICATES: Endpoint = endpoint!(Get "/organization/projects/{project_id}/certificates" as "listProjectCertificates",
    "Lists certificates for this project.",
    [Parameter::path("project_id"), LIMIT, AFTER, ADMIN_ORDER] => Json("ListCertificatesResponse"));
pub const ACTIVATE_PROJECT_CERTIFICATES: Endpoint = endpoint!(Post "/organization/projects/{project_id}/certificates/activate" as "activateProjectCertificates",
    "Activates certificates at the project level.",
    [Parameter::path("project_id"), Parameter::body("ToggleCertificatesRequest")] => Json("ListCertificatesResponse"));
pub const DEACTIVATE_PROJECT_CERTIFICATES: Endpoint = endpoint!(Post "/organization/projects/{project_id}/certificates/deactivate" as "deactivateProjectCertificates",
    "Deactivates certificates at the project level.",
    [Parameter::path("project_id"), Parameter::body("ToggleCertificatesRequest")] => Json("ListCertificatesResponse"));

pub const LIST_PROJECT_RATE_LIMITS: Endpoint = endpoint!(Get "/organization/projects/{project_id}/rate_limits" as "list-project-rate-limits",
    "Returns the rate limits per model for a project.",
    [Parameter::path("project_id"), LIMIT, AFTER, BEFORE] => Json("ProjectRateLimitListResponse"));
pub const UPDATE_PROJECT_RATE_LIMITS: Endpoint = endpoint!(Post "/organization/projects/{project_id}/rate_limits/{rate_limit_id}" as "update-project-rate-limits",
    "Updates a project rate limit.",
    [
        Parameter::path("project_id"),
        Parameter::path("rate_limit_id"),
        Parameter::body("ProjectRateLimitUpdateRequest"),
    ] => Json("ProjectRateLimit"), errors = BAD_REQUEST);

pub const LIST_PROJECT_SERVICE_ACCOUNTS: Endpoint = endpoint!(Get "/organization/projects/{project_id}/service_accounts" as "list-project-service-accounts",
    "Returns a list of service accounts in the project.",
    [Parameter::path("project_id"), LIMIT, AFTER] => Json("ProjectServiceAccountListResponse"), errors = BAD_REQUEST);
pub const CREATE_PROJECT_SERVICE_ACCOUNT: Endpoint = endpoint!(Post "/organization/projects/{project_id}/service_accounts" as "create-project-service-account",
    "Creates a new service account in the project, which also returns an unredacted API key.",
    [Parameter::path("project_id"), Parameter::body("ProjectServiceAccountCreateRequest")] => Json("ProjectServiceAccountCreateResponse"), errors = BAD_REQUEST);
pub const RETRIEVE_PROJECT_SERVICE_ACCOUNT: Endpoint = endpoint!(Get "/organization/projects/{project_id}/service_accounts/{service_account_id}" as "retrieve-project-service-account",
    "Retrieves a service account in the project.",
    [Parameter::path("project_id"), Parameter::path("service_account_id")] => Json("ProjectServiceAccount"), errors = NOT_FOUND);
pub const DELETE_PROJECT_SERVICE_ACCOUNT: Endpoint = endpoint!(Delete "/organization/projects/{project_id}/service_accounts/{service_account_id}" as "delete-project-service-account",
    "Deletes a service account from the project.",
    [Parameter::path("project_id"), Parameter::path("service_account_id")] => Json("ProjectServiceAccountDeleteResponse"), errors = NOT_FOUND);

pub const LIST_PROJECT_USERS: Endpoint = endpoint!(Get "/organization/projects/{project_id}/users" as "list-project-users",
    "Returns a list of users in the project.",
    [Parameter::path("project_id"), LIMIT, AFTER] => Json("ProjectUserListResponse"), errors = BAD_REQUEST);
pub const CREATE_PROJECT_USER: Endpoint = endpoint!(Post "/organization/projects/{project_id}/users" as "create-project-user",
    "Adds a user to the project. Users must already be members of the organization.",
    [Parameter::path("project_id"), Parameter::body("ProjectUserCreateRequest")] => Json("ProjectUser"), errors = BAD_REQUEST);
pub const RETRIEVE_PROJECT_USER: Endpoint = endpoint!(Get "/organization/projects/{project_id}/users/{user_id}" as "retrieve-project-user",
    "Retrieves a user in the project.",
    [Parameter::path("project_id"), Parameter::path("user_id")] => Json("ProjectUser"), errors = NOT_FOUND);
pub const MODIFY_PROJECT_USER: Endpoint = endpoint!(Post "/organization/projects/{project_id}/users/{user_id}" as "modify-project-user",
    "Modifies a user's role in the project.",
    [
        Parameter::path("project_id"),
        Parameter::path("user_id"),
        Parameter::body("ProjectUserUpdateRequest"),
    ] => Json("ProjectUser"), errors = BAD_REQUEST);
pub const DELETE_PROJECT_USER: Endpoint = endpoint!(Delete "/organization/projects/{project_id}/users/{user_id}" as "delete-project-user",
    "Deletes a user from the project.",
    [Parameter::path("project_id"), Parameter::path("user_id")] => Json("ProjectUserDeleteResponse"), errors = BAD_REQUEST);

// Fine-tuning checkpoint permissions and graders

const PERMISSION_ORDER: &[&str] = &["ascending", "descending"];

pub const LIST_FINE_TUNING_CHECKPOINT_PERMISSIONS: Endpoint = endpoint!(Get "/fine_tuning/checkpoints/{fine_tuned_model_checkpoint}/permissions" as "listFineTuningCheckpointPermissions",
    "Lists the permissions of a fine-tuned checkpoint.",
    [
        Parameter::path("fine_tuned_model_checkpoint"),
        Parameter::query("project_id", ParamKind::String),
        AFTER,
        LIMIT,
        Parameter::query("order", ParamKind::Enum(PERMISSION_ORDER)),
    ] => Json("ListFineTuningCheckpointPermissionResponse"));
pub const CREATE_FINE_TUNING_CHECKPOINT_PERMISSION: Endpoint = endpoint!(Post "/fine_tuning/checkpoints/{fine_tuned_model_checkpoint}/permissions" as "createFineTuningCheckpointPermission",
    "Grants projects access to a fine-tuned checkpoint.",
    [
        Parameter::path("fine_tuned_model_checkpoint"),
        Parameter::body("CreateFineTuningCheckpointPermissionRequest"),
    ] => Json("ListFineTuningCheckpointPermissionResponse"));
pub const DELETE_FINE_TUNING_CHECKPOINT_PERMISSION: Endpoint = endpoint!(Delete "/fine_tuning/checkpoints/{fine_tuned_model_checkpoint}/permissions/{permission_id}" as "deleteFineTuningCheckpointPermission",
    "Deletes a checkpoint permission.",
    [Parameter::path("fine_tuned_model_checkpoint"), Parameter::path("permission_id")] => Json("DeleteFineTuningCheckpointPermissionResponse"), errors = NOT_FOUND);
pub const RUN_GRADER: Endpoint = endpoint!(Post "/fine_tuning/alpha/graders/run" as "runGrader",
    "Runs a grader on a model sample.",
    [Parameter::body("RunGraderRequest")] => Json("RunGraderResponse"));
pub const VALIDATE_GRADER: Endpoint = endpoint!(Post "/fine_tuning/alpha/graders/validate" as "validateGrader",
    "Validates a grader definition.",
    [Parameter::body("ValidateGraderRequest")] => Json("ValidateGraderResponse"));

// Evals

const EVAL_ORDER_BY: &[&str] = &["created_at", "updated_at"];
const EVAL_RUN_STATUS: &[&str] = &["queued", "in_progress", "completed", "canceled", "failed"];
const OUTPUT_ITEM_STATUS: &[&str] = &["fail", "pass"];

pub const LIST_EVALS: Endpoint = endpoint!(Get "/evals" as "listEvals",
    "Lists evaluations for a project.",
    [AFTER, LIMIT, ORDER_PARAM, Parameter::query("order_by", ParamKind::Enum(EVAL_ORDER_BY))] => Json("EvalList"));
pub const CREATE_EVAL: Endpoint = endpoint!(Post "/evals" as "createEval",
    "Creates the structure of an evaluation that can be used to test a model's performance.",
    [Parameter::body("CreateEvalRequest")] => Json("Eval"));
pub const GET_EVAL: Endpoint = endpoint!(Get "/evals/{eval_id}" as "getEval",
    "Gets an evaluation by id.",
    [Parameter::path("eval_id")] => Json("Eval"), errors = NOT_FOUND);
pub const UPDATE_EVAL: Endpoint = endpoint!(Post "/evals/{eval_id}" as "updateEval",
    "Updates certain properties of an evaluation.",
    [Parameter::path("eval_id"), Parameter::body("UpdateEvalRequest")] => Json("Eval"));
pub const DELETE_EVAL: Endpoint = endpoint!(Delete "/evals/{eval_id}" as "deleteEval",
    "Deletes an evaluation.",
    [Parameter::path("eval_id")] => Json("DeleteEvalResponse"), errors = NOT_FOUND);
pub const GET_EVAL_RUNS: Endpoint = endpoint!(Get "/evals/{eval_id}/runs" as "getEvalRuns",
    "Gets a list of runs for an evaluation.",
    [
        Parameter::path("eval_id"),
        AFTER,
        LIMIT,
        ORDER_PARAM,
        Parameter::query("status", ParamKind::Enum(EVAL_RUN_STATUS)),
    ] => Json("EvalRunList"));
pub const CREATE_EVAL_RUN: Endpoint = endpoint!(Post "/evals/{eval_id}/runs" as "createEvalRun",
    "Kicks off a new run for a given evaluation.",
    [Parameter::path("eval_id"), Parameter::body("CreateEvalRunRequest")] => Json("EvalRun"), errors = BAD_REQUEST);
pub const GET_EVAL_RUN: Endpoint = endpoint!(Get "/evals/{eval_id}/runs/{run_id}" as "getEvalRun",
    "Gets an evaluation run by id.",
    [Parameter::path("eval_id"), Parameter::path("run_id")] => Json("EvalRun"), errors = NOT_FOUND);
pub const CANCEL_EVAL_RUN: Endpoint = endpoint!(Post "/evals/{eval_id}/runs/{run_id}" as "cancelEvalRun",
    "Cancels an ongoing evaluation run.",
    [Parameter::path("eval_id"), Parameter::path("run_id")] => Json("EvalRun"));
pub const DELETE_EVAL_RUN: Endpoint = endpoint!(Delete "/evals/{eval_id}/runs/{run_id}" as "deleteEvalRun",
    "Deletes an eval run.",
    [Parameter::path("eval_id"), Parameter::path("run_id")] => Json("DeleteEvalRunResponse"), errors = NOT_FOUND);
pub const GET_EVAL_RUN_OUTPUT_ITEMS: Endpoint = endpoint!(Get "/evals/{eval_id}/runs/{run_id}/output_items" as "getEvalRunOutputItems",
    "Gets a list of output items for an evaluation run.",
    [
        Parameter::path("eval_id"),
        Parameter::path("run_id"),
        AFTER,
        LIMIT,
        Parameter::query("status", ParamKind::Enum(OUTPUT_ITEM_STATUS)),
        ORDER_PARAM,
    ] => Json("EvalRunOutputItemList"));
pub const GET_EVAL_RUN_OUTPUT_ITEM: Endpoint = endpoint!(Get "/evals/{eval_id}/runs/{run_id}/output_items/{output_item_id}" as "getEvalRunOutputItem",
    "Gets an evaluation run output item by id.",
    [
        Parameter::path("eval_id"),
        Parameter::path("run_id"),
        Parameter::path("output_item_id"),
    ] => Json("EvalRunOutputItem"), errors = NOT_FOUND);

// Containers

pub const LIST_CONTAINERS: Endpoint = endpoint!(Get "/containers" as "ListContainers",
    "Lists containers.",
    [LIMIT, ORDER_PARAM, AFTER] => Json("ContainerListResource"));
pub const CREATE_CONTAINER: Endpoint = endpoint!(Post "/containers" as "CreateContainer",
    "Creates a container.",
    [Parameter::body("CreateContainerBody")] => Json("ContainerResource"));
pub const RETRIEVE_CONTAINER: Endpoint = endpoint!(Get "/containers/{container_id}" as "RetrieveContainer",
    "Retrieves a container.",
    [Parameter::path("container_id")] => Json("ContainerResource"), errors = NOT_FOUND);
pub const DELETE_CONTAINER: Endpoint = endpoint!(Delete "/containers/{container_id}" as "DeleteContainer",
    "Deletes a container.",
    [Parameter::path("container_id")] => Json("DeleteContainerResponse"), errors = NOT_FOUND);
pub const CREATE_CONTAINER_FILE: Endpoint = endpoint!(Post "/containers/{container_id}/files" as "CreateContainerFile",
    "Creates a container file from an upload or from an existing file id.",
    [Parameter::path("container_id"), Parameter::form("CreateContainerFileBody")] => Json("ContainerFileResource"));
pub const LIST_CONTAINER_FILES: Endpoint = endpoint!(Get "/containers/{container_id}/files" as "ListContainerFiles",
    "Lists the files of a container.",
    [Parameter::path("container_id"), LIMIT, ORDER_PARAM, AFTER] => Json("ContainerFileListResource"));
pub const RETRIEVE_CONTAINER_FILE: Endpoint = endpoint!(Get "/containers/{container_id}/files/{file_id}" as "RetrieveContainerFile",
    "Retrieves a container file.",
    [Parameter::path("container_id"), Parameter::path("file_id")] => Json("ContainerFileResource"), errors = NOT_FOUND);
pub const DELETE_CONTAINER_FILE: Endpoint = endpoint!(Delete "/containers/{container_id}/files/{file_id}" as "DeleteContainerFile",
    "Deletes a container file.",
    [Parameter::path("container_id"), Parameter::path("file_id")] => Json("DeleteContainerFileResponse"), errors = NOT_FOUND);
pub const RETRIEVE_CONTAINER_FILE_CONTENT: Endpoint = endpoint!(Get "/containers/{container_id}/files/{file_id}/content" as "RetrieveContainerFileContent",
    "Retrieves the contents of a container file.",
    [Parameter::path("container_id"), Parameter::path("file_id")] => Binary, errors = NOT_FOUND);

/// Every descriptor, in upstream document order.
pub static ENDPOINTS: &[&Endpoint] = &[
    &LIST_MODELS,
    &RETRIEVE_MODEL,
    &DELETE_MODEL,
    &CREATE_CHAT_COMPLETION,
    &LIST_CHAT_COMPLETIONS,
    &GET_CHAT_COMPLETION,
    &UPDATE_CHAT_COMPLETION,
    &DELETE_CHAT_COMPLETION,
    &GET_CHAT_COMPLETION_MESSAGES,
    &CREATE_COMPLETION,
    &CREATE_EMBEDDING,
    &CREATE_MODERATION,
    &CREATE_IMAGE,
    &CREATE_IMAGE_EDIT,
    &CREATE_IMAGE_VARIATION,
    &CREATE_SPEECH,
    &CREATE_TRANSCRIPTION,
    &CREATE_TRANSLATION,
    &LIST_FILES,
    &CREATE_FILE,
    &DELETE_FILE,
    &RETRIEVE_FILE,
    &DOWNLOAD_FILE,
    &CREATE_UPLOAD,
    &ADD_UPLOAD_PART,
    &COMPLETE_UPLOAD,
    &CANCEL_UPLOAD,
    &CREATE_BATCH,
    &LIST_BATCHES,
    &RETRIEVE_BATCH,
    &CANCEL_BATCH,
    &CREATE_FINE_TUNING_JOB,
    &LIST_PAGINATED_FINE_TUNING_JOBS,
    &RETRIEVE_FINE_TUNING_JOB,
    &CANCEL_FINE_TUNING_JOB,
    &PAUSE_FINE_TUNING_JOB,
    &RESUME_FINE_TUNING_JOB,
    &LIST_FINE_TUNING_EVENTS,
    &LIST_FINE_TUNING_JOB_CHECKPOINTS,
    &LIST_FINE_TUNING_CHECKPOINT_PERMISSIONS,
    &CREATE_FINE_TUNING_CHECKPOINT_PERMISSION,
    &DELETE_FINE_TUNING_CHECKPOINT_PERMISSION,
    &RUN_GRADER,
    &VALIDATE_GRADER,
    &LIST_ASSISTANTS,
    &CREATE_ASSISTANT,
    &GET_ASSISTANT,
    &MODIFY_ASSISTANT,
    &DELETE_ASSISTANT,
    &CREATE_THREAD,
    &CREATE_THREAD_AND_RUN,
    &GET_THREAD,
    &MODIFY_THREAD,
    &DELETE_THREAD,
    &LIST_MESSAGES,
    &CREATE_MESSAGE,
    &GET_MESSAGE,
    &MODIFY_MESSAGE,
    &DELETE_MESSAGE,
    &LIST_RUNS,
    &CREATE_RUN,
    &GET_RUN,
    &MODIFY_RUN,
    &CANCEL_RUN,
    &SUBMIT_TOOL_OUTPUTS_TO_RUN,
    &LIST_RUN_STEPS,
    &GET_RUN_STEP,
    &LIST_VECTOR_STORES,
    &CREATE_VECTOR_STORE,
    &GET_VECTOR_STORE,
    &MODIFY_VECTOR_STORE,
    &DELETE_VECTOR_STORE,
    &SEARCH_VECTOR_STORE,
    &LIST_VECTOR_STORE_FILES,
    &CREATE_VECTOR_STORE_FILE,
    &GET_VECTOR_STORE_FILE,
    &UPDATE_VECTOR_STORE_FILE_ATTRIBUTES,
    &DELETE_VECTOR_STORE_FILE,
    &RETRIEVE_VECTOR_STORE_FILE_CONTENT,
    &CREATE_VECTOR_STORE_FILE_BATCH,
    &GET_VECTOR_STORE_FILE_BATCH,
    &CANCEL_VECTOR_STORE_FILE_BATCH,
    &LIST_FILES_IN_VECTOR_STORE_BATCH,
    &CREATE_RESPONSE,
    &GET_RESPONSE,
    &DELETE_RESPONSE,
    &CANCEL_RESPONSE,
    &LIST_INPUT_ITEMS,
    &CREATE_REALTIME_SESSION,
    &CREATE_REALTIME_TRANSCRIPTION_SESSION,
    &LIST_EVALS,
    &CREATE_EVAL,
    &GET_EVAL,
    &UPDATE_EVAL,
    &DELETE_EVAL,
    &GET_EVAL_RUNS,
    &CREATE_EVAL_RUN,
    &GET_EVAL_RUN,
    &CANCEL_EVAL_RUN,
    &DELETE_EVAL_RUN,
    &GET_EVAL_RUN_OUTPUT_ITEMS,
    &GET_EVAL_RUN_OUTPUT_ITEM,
    &LIST_CONTAINERS,
    &CREATE_CONTAINER,
    &RETRIEVE_CONTAINER,
    &DELETE_CONTAINER,
    &CREATE_CONTAINER_FILE,
    &LIST_CONTAINER_FILES,
    &RETRIEVE_CONTAINER_FILE,
    &DELETE_CONTAINER_FILE,
    &RETRIEVE_CONTAINER_FILE_CONTENT,
    &LIST_AUDIT_LOGS,
    &ADMIN_API_KEYS_LIST,
    &ADMIN_API_KEYS_CREATE,
    &ADMIN_API_KEYS_GET,
    &ADMIN_API_KEYS_DELETE,
    &LIST_ORGANIZATION_CERTIFICATES,
    &UPLOAD_CERTIFICATE,
    &ACTIVATE_ORGANIZATION_CERTIFICATES,
    &DEACTIVATE_ORGANIZATION_CERTIFICATES,
    &GET_CERTIFICATE,
    &MODIFY_CERTIFICATE,
    &DELETE_CERTIFICATE,
    &LIST_INVITES,
    &INVITE_USER,
    &RETRIEVE_INVITE,
    &DELETE_INVITE,
    &LIST_PROJECTS,
    &CREATE_PROJECT,
    &RETRIEVE_PROJECT,
    &MODIFY_PROJECT,
    &ARCHIVE_PROJECT,
    &LIST_PROJECT_API_KEYS,
    &RETRIEVE_PROJECT_API_KEY,
    &DELETE_PROJECT_API_KEY,
    &LIST_PROJECT_CERTIFICATES,
    &ACTIVATE_PROJECT_CERTIFICATES,
    &DEACTIVATE_PROJECT_CERTIFICATES,
    &LIST_PROJECT_RATE_LIMITS,
    &UPDATE_PROJECT_RATE_LIMITS,
    &LIST_PROJECT_SERVICE_ACCOUNTS,
    &CREATE_PROJECT_SERVICE_ACCOUNT,
    &RETRIEVE_PROJECT_SERVICE_ACCOUNT,
    &DELETE_PROJECT_SERVICE_ACCOUNT,
    &LIST_PROJECT_USERS,
    &CREATE_PROJECT_USER,
    &RETRIEVE_PROJECT_USER,
    &MODIFY_PROJECT_USER,
    &DELETE_PROJECT_USER,
    &USAGE_COMPLETIONS,
    &USAGE_EMBEDDINGS,
    &USAGE_MODERATIONS,
    &USAGE_IMAGES,
    &USAGE_AUDIO_SPEECHES,
    &USAGE_AUDIO_TRANSCRIPTIONS,
    &USAGE_VECTOR_STORES,
    &USAGE_CODE_INTERPRETER_SESSIONS,
    &USAGE_COSTS,
    &LIST_USERS,
    &RETRIEVE_USER,
    &MODIFY_USER,
    &DELETE_USER,
];

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::collections::HashSet;

    #[test]
    fn aliases_are_unique() {
        let mut seen = HashSet::new();
        for endpoint in ENDPOINTS {
            assert!(seen.insert(endpoint.alias), "duplicate alias {}", endpoint.alias);
        }
    }

    #[test]
    fn placeholders_match_path_parameters() {
        for endpoint in ENDPOINTS {
            let placeholders = endpoint.path_params();
            let declared: Vec<&str> = endpoint
                .parameters
                .iter()
                .filter(|p| p.location == ParamLocation::Path)
                .map(|p| p.name)
                .collect();
            assert_eq!(placeholders, declared, "{}", endpoint.alias);
        }
    }

    #[test]
    fn at_most_one_body() {
        for endpoint in ENDPOINTS {
            let bodies = endpoint
                .parameters
                .iter()
                .filter(|p| matches!(p.location, ParamLocation::Body | ParamLocation::Form))
                .count();
            assert!(bodies <= 1, "{}", endpoint.alias);
            if endpoint.method != HttpMethod::Post {
                assert_eq!(bodies, 0, "{}", endpoint.alias);
            }
        }
    }

    #[test]
    fn find_by_alias() {
        let endpoint = find("submitToolOuputsToRun").unwrap();
        assert_eq!(endpoint.method, HttpMethod::Post);
        assert_eq!(
            endpoint.path,
            "/threads/{thread_id}/runs/{run_id}/submit_tool_outputs"
        );
        assert_eq!(endpoint.body_schema(), Some("SubmitToolOutputsRunRequest"));
        assert!(find("submitToolOutputsToRun").is_none());
    }

    #[test]
    fn render_positional() {
        assert_eq!(
            GET_RUN_STEP.render(&["thread_1", "run_2", "step_3"]).unwrap(),
            "/threads/thread_1/runs/run_2/steps/step_3"
        );
        assert_eq!(LIST_MODELS.render(&[]).unwrap(), "/models");

        let error = GET_RUN.render(&["thread_1"]).unwrap_err();
        assert_eq!(error.error_type, "endpoint");
        assert!(GET_THREAD.render(&[""]).is_err());
    }

    #[test]
    fn render_named() {
        let params = json!({ "vector_store_id": "vs_1", "batch_id": "vsfb_2" });
        assert_eq!(
            LIST_FILES_IN_VECTOR_STORE_BATCH
                .render_named(params.as_object().unwrap())
                .unwrap(),
            "/vector_stores/vs_1/file_batches/vsfb_2/files"
        );

        let missing = json!({ "vector_store_id": "vs_1" });
        assert!(GET_VECTOR_STORE_FILE_BATCH
            .render_named(missing.as_object().unwrap())
            .is_err());

        let unknown = json!({ "model": "gpt-4o", "other": "x" });
        assert!(RETRIEVE_MODEL
            .render_named(unknown.as_object().unwrap())
            .is_err());

        let not_scalar = json!({ "model": ["gpt-4o"] });
        assert!(RETRIEVE_MODEL
            .render_named(not_scalar.as_object().unwrap())
            .is_err());
    }

    #[test]
    fn query_checks() {
        let ok = json!({ "limit": 20, "order": "asc", "after": "asst_1" });
        LIST_ASSISTANTS.check_query(ok.as_object().unwrap()).unwrap();

        let bad_enum = json!({ "order": "sideways" });
        assert!(LIST_ASSISTANTS
            .check_query(bad_enum.as_object().unwrap())
            .is_err());

        let bad_kind = json!({ "limit": "twenty" });
        assert!(LIST_ASSISTANTS
            .check_query(bad_kind.as_object().unwrap())
            .is_err());

        let unknown = json!({ "page": "x" });
        assert!(LIST_ASSISTANTS
            .check_query(unknown.as_object().unwrap())
            .is_err());

        let missing_required = json!({ "limit": 7 });
        assert!(USAGE_COSTS
            .check_query(missing_required.as_object().unwrap())
            .is_err());

        let with_start = json!({ "start_time": 1730419200, "group_by": ["project_id"] });
        USAGE_COSTS
            .check_query(with_start.as_object().unwrap())
            .unwrap();
    }

    #[test]
    fn method_display() {
        assert_eq!(HttpMethod::Delete.to_string(), "DELETE");
        assert_eq!(HttpMethod::Get.as_reqwest(), reqwest::Method::GET);
    }
}
