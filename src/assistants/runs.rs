use derive_builder::Builder;
use either::Either;
use serde::{Deserialize, Serialize};

use crate::{
    assistants::{AssistantsResponseFormat, Tool, ToolResources},
    chat::{FunctionChoice, ReasoningEffort, ToolCall},
    client::OpenAiClient,
    endpoints, ApiResponseOrError, ListQuery, ListResponse, Metadata, OpenAiError,
};

use super::{
    messages::{CreateMessageRequest, IncompleteDetails},
    threads::CreateThreadRequest,
};

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Run {
    pub id: String,
    pub object: String,
    pub created_at: u64,
    /// The ID of the thread that was executed on as a part of this run.
    pub thread_id: String,
    pub assistant_id: String,
    pub status: RunStatus,
    /// Details on the action required to continue the run. Will be null if no action is required.
    #[serde(default)]
    pub required_action: Option<RequiredAction>,
    #[serde(default)]
    pub last_error: Option<LastError>,
    #[serde(default)]
    pub expires_at: Option<u64>,
    #[serde(default)]
    pub started_at: Option<u64>,
    #[serde(default)]
    pub cancelled_at: Option<u64>,
    #[serde(default)]
    pub failed_at: Option<u64>,
    #[serde(default)]
    pub completed_at: Option<u64>,
    #[serde(default)]
    pub incomplete_details: Option<IncompleteDetails>,
    pub model: String,
    pub instructions: String,
    pub tools: Vec<Tool>,
    #[serde(default)]
    pub metadata: Option<Metadata>,
    /// Null until the run is in a terminal state.
    #[serde(default)]
    pub usage: Option<RunUsage>,
    #[serde(default)]
    pub temperature: Option<f32>,
    #[serde(default)]
    pub top_p: Option<f32>,
    #[serde(default)]
    pub max_prompt_tokens: Option<u32>,
    #[serde(default)]
    pub max_completion_tokens: Option<u32>,
    #[serde(default)]
    pub truncation_strategy: Option<TruncationStrategy>,
    #[serde(default)]
    pub tool_choice: Option<ToolChoice>,
    #[serde(default)]
    pub parallel_tool_calls: bool,
    #[serde(default)]
    pub response_format: Option<AssistantsResponseFormat>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reasoning_effort: Option<ReasoningEffort>,
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, strum_macros::Display)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum RunStatus {
    Queued,
    InProgress,
    RequiresAction,
    Cancelling,
    Cancelled,
    Failed,
    Completed,
    Incomplete,
    Expired,
}

impl RunStatus {
    /// Whether the run will not change status anymore.
    pub fn is_terminal(self) -> bool {
        matches!(
            self,
            RunStatus::Cancelled
                | RunStatus::Failed
                | RunStatus::Completed
                | RunStatus::Incomplete
                | RunStatus::Expired
        )
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum RequiredAction {
    SubmitToolOutputs {
        submit_tool_outputs: SubmitToolOutputsAction,
    },
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct SubmitToolOutputsAction {
    pub tool_calls: Vec<ToolCall>,
}

impl RequiredAction {
    pub fn tool_calls(&self) -> &[ToolCall] {
        match self {
            RequiredAction::SubmitToolOutputs {
                submit_tool_outputs,
            } => &submit_tool_outputs.tool_calls,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct LastError {
    /// `server_error`, `rate_limit_exceeded` or `invalid_prompt`.
    pub code: String,
    pub message: String,
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
pub struct RunUsage {
    pub completion_tokens: u32,
    pub prompt_tokens: u32,
    pub total_tokens: u32,
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum TruncationType {
    Auto,
    LastMessages,
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
pub struct TruncationStrategy {
    #[serde(rename = "type")]
    pub kind: TruncationType,
    /// The number of most recent messages to keep with `last_messages`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_messages: Option<u32>,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(transparent)]
pub struct ToolChoice {
    #[serde(with = "either::serde_untagged")]
    pub inner: Either<ToolChoiceStrategy, NamedToolChoice>,
}

impl ToolChoice {
    pub fn strategy(strategy: ToolChoiceStrategy) -> Self {
        ToolChoice {
            inner: Either::Left(strategy),
        }
    }

    pub fn function(name: impl Into<String>) -> Self {
        ToolChoice {
            inner: Either::Right(NamedToolChoice::Function {
                function: FunctionChoice { name: name.into() },
            }),
        }
    }

    pub fn tool(tool: NamedToolChoice) -> Self {
        ToolChoice {
            inner: Either::Right(tool),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ToolChoiceStrategy {
    None,
    Auto,
    Required,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum NamedToolChoice {
    CodeInterpreter,
    FileSearch,
    Function { function: FunctionChoice },
}

#[derive(Serialize, Deserialize, Builder, Debug, Clone, PartialEq)]
#[builder(pattern = "owned")]
#[builder(name = "CreateRunBuilder")]
#[builder(setter(strip_option, into))]
#[builder(build_fn(error = "OpenAiError"))]
pub struct CreateRunRequest {
    pub assistant_id: String,
    /// Overrides the model of the assistant.
    #[builder(default)]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,
    /// Overrides the instructions of the assistant.
    #[builder(default)]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub instructions: Option<String>,
    /// Appended to the instructions of the assistant.
    #[builder(default)]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub additional_instructions: Option<String>,
    /// Added to the thread before creating the run.
    #[builder(default)]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub additional_messages: Option<Vec<CreateMessageRequest>>,
    #[builder(default)]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tools: Option<Vec<Tool>>,
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
    pub max_prompt_tokens: Option<u32>,
    #[builder(default)]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_completion_tokens: Option<u32>,
    #[builder(default)]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub truncation_strategy: Option<TruncationStrategy>,
    #[builder(default)]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tool_choice: Option<ToolChoice>,
    #[builder(default)]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parallel_tool_calls: Option<bool>,
    #[builder(default)]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub response_format: Option<AssistantsResponseFormat>,
    #[builder(default)]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reasoning_effort: Option<ReasoningEffort>,
}

#[derive(Serialize, Deserialize, Builder, Debug, Clone, PartialEq)]
#[builder(pattern = "owned")]
#[builder(name = "CreateThreadAndRunBuilder")]
#[builder(setter(strip_option, into))]
#[builder(build_fn(error = "OpenAiError"))]
pub struct CreateThreadAndRunRequest {
    pub assistant_id: String,
    /// The thread to create. An empty thread is created when omitted.
    #[builder(default)]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thread: Option<CreateThreadRequest>,
    #[builder(default)]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,
    #[builder(default)]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub instructions: Option<String>,
    #[builder(default)]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tools: Option<Vec<Tool>>,
    #[builder(default)]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tool_resources: Option<ToolResources>,
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
    pub max_prompt_tokens: Option<u32>,
    #[builder(default)]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_completion_tokens: Option<u32>,
    #[builder(default)]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub truncation_strategy: Option<TruncationStrategy>,
    #[builder(default)]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tool_choice: Option<ToolChoice>,
    #[builder(default)]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parallel_tool_calls: Option<bool>,
    #[builder(default)]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub response_format: Option<AssistantsResponseFormat>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct ModifyRunRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Metadata>,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct SubmitToolOutputsRequest {
    pub tool_outputs: Vec<ToolOutput>,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct ToolOutput {
    pub tool_call_id: String,
    pub output: String,
}

impl Run {
    pub fn builder(assistant_id: &str) -> CreateRunBuilder {
        CreateRunBuilder::create_empty().assistant_id(assistant_id)
    }

    pub fn thread_builder(assistant_id: &str) -> CreateThreadAndRunBuilder {
        CreateThreadAndRunBuilder::create_empty().assistant_id(assistant_id)
    }
}

impl CreateRunBuilder {
    pub async fn create(self, client: &OpenAiClient, thread_id: &str) -> ApiResponseOrError<Run> {
        client.create_run(thread_id, self.build()?).await
    }
}

impl CreateThreadAndRunBuilder {
    pub async fn create(self, client: &OpenAiClient) -> ApiResponseOrError<Run> {
        client.create_thread_and_run(self.build()?).await
    }
}

impl OpenAiClient {
    pub async fn create_thread_and_run(
        &self,
        request: CreateThreadAndRunRequest,
    ) -> ApiResponseOrError<Run> {
        self.post(endpoints::CREATE_THREAD_AND_RUN.render(&[])?, request)
            .await
    }

    pub async fn list_runs(
        &self,
        thread_id: &str,
        query: &ListQuery,
    ) -> ApiResponseOrError<ListResponse<Run>> {
        self.get_with_query(endpoints::LIST_RUNS.render(&[thread_id])?, query)
            .await
    }

    pub async fn create_run(
        &self,
        thread_id: &str,
        request: CreateRunRequest,
    ) -> ApiResponseOrError<Run> {
        self.post(endpoints::CREATE_RUN.render(&[thread_id])?, request)
            .await
    }

    pub async fn get_run(&self, thread_id: &str, run_id: &str) -> ApiResponseOrError<Run> {
        self.get(endpoints::GET_RUN.render(&[thread_id, run_id])?)
            .await
    }

    pub async fn modify_run(
        &self,
        thread_id: &str,
        run_id: &str,
        request: ModifyRunRequest,
    ) -> ApiResponseOrError<Run> {
        self.post(endpoints::MODIFY_RUN.render(&[thread_id, run_id])?, request)
            .await
    }

    pub async fn cancel_run(&self, thread_id: &str, run_id: &str) -> ApiResponseOrError<Run> {
        self.post_empty(endpoints::CANCEL_RUN.render(&[thread_id, run_id])?)
            .await
    }

    /// Submits outputs for every tool call of a run with status `requires_action`.
    pub async fn submit_tool_outputs_to_run(
        &self,
        thread_id: &str,
        run_id: &str,
        request: SubmitToolOutputsRequest,
    ) -> ApiResponseOrError<Run> {
        self.post(
            endpoints::SUBMIT_TOOL_OUTPUTS_TO_RUN.render(&[thread_id, run_id])?,
            request,
        )
        .await
    }
}
