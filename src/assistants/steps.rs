use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::{
    client::OpenAiClient, endpoints, schema::Score, ApiResponseOrError, ListResponse, Metadata,
    Order,
};

use super::runs::{LastError, RunUsage};

/// Pass as `include[]` to get the content of file search results in run steps.
pub const FILE_SEARCH_RESULT_CONTENT: &str =
    "step_details.tool_calls[*].file_search.results[*].content";

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct RunStep {
    pub id: String,
    pub object: String,
    pub created_at: u64,
    pub assistant_id: String,
    pub thread_id: String,
    pub run_id: String,
    #[serde(rename = "type")]
    pub kind: RunStepType,
    pub status: RunStepStatus,
    pub step_details: StepDetails,
    #[serde(default)]
    pub last_error: Option<LastError>,
    #[serde(default)]
    pub expired_at: Option<u64>,
    #[serde(default)]
    pub cancelled_at: Option<u64>,
    #[serde(default)]
    pub failed_at: Option<u64>,
    #[serde(default)]
    pub completed_at: Option<u64>,
    #[serde(default)]
    pub metadata: Option<Metadata>,
    /// Null while the step is `in_progress`.
    #[serde(default)]
    pub usage: Option<RunUsage>,
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum RunStepType {
    MessageCreation,
    ToolCalls,
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum RunStepStatus {
    InProgress,
    Cancelled,
    Failed,
    Completed,
    Expired,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum StepDetails {
    MessageCreation { message_creation: MessageCreation },
    ToolCalls { tool_calls: Vec<StepToolCall> },
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct MessageCreation {
    pub message_id: String,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum StepToolCall {
    CodeInterpreter {
        id: String,
        code_interpreter: CodeInterpreterCall,
    },
    FileSearch {
        id: String,
        /// Empty unless results were requested with `include[]`.
        file_search: FileSearchCall,
    },
    Function {
        id: String,
        function: FunctionCall,
    },
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct CodeInterpreterCall {
    pub input: String,
    pub outputs: Vec<CodeInterpreterOutput>,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum CodeInterpreterOutput {
    Logs { logs: String },
    Image { image: OutputImage },
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct OutputImage {
    pub file_id: String,
}

#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq)]
pub struct FileSearchCall {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ranking_options: Option<super::FileSearchRankingOptions>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub results: Option<Vec<FileSearchResult>>,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct FileSearchResult {
    pub file_id: String,
    pub file_name: String,
    pub score: Score,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<Vec<super::vector_stores::TextChunk>>,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct FunctionCall {
    pub name: String,
    pub arguments: String,
    /// Null until the outputs are submitted.
    pub output: Option<String>,
}

/// A `thread.run.step.delta` payload.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct RunStepDelta {
    pub id: String,
    pub object: String,
    pub delta: RunStepDeltaContent,
}

#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq)]
pub struct RunStepDeltaContent {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub step_details: Option<StepDetailsDelta>,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum StepDetailsDelta {
    MessageCreation {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        message_creation: Option<MessageCreationDelta>,
    },
    ToolCalls {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        tool_calls: Option<Vec<StepToolCallDelta>>,
    },
}

#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq, Eq)]
pub struct MessageCreationDelta {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message_id: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum StepToolCallDelta {
    CodeInterpreter {
        index: u32,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        id: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        code_interpreter: Option<CodeInterpreterCallDelta>,
    },
    FileSearch {
        index: u32,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        id: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        file_search: Option<serde_json::Value>,
    },
    Function {
        index: u32,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        id: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        function: Option<FunctionCallDelta>,
    },
}

#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq)]
pub struct CodeInterpreterCallDelta {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub input: Option<String>,
    /// Partial outputs carry an `index`, so they are kept untyped.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub outputs: Option<Vec<serde_json::Value>>,
}

#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq, Eq)]
pub struct FunctionCallDelta {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub arguments: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output: Option<String>,
}

#[derive(Serialize, Clone, Debug, Default, PartialEq)]
pub struct ListRunStepsQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order: Option<Order>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub after: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub before: Option<String>,
    #[serde(rename = "include[]", skip_serializing_if = "Vec::is_empty")]
    pub include: Vec<String>,
}

impl OpenAiClient {
    pub async fn list_run_steps(
        &self,
        thread_id: &str,
        run_id: &str,
        query: &ListRunStepsQuery,
    ) -> ApiResponseOrError<ListResponse<RunStep>> {
        self.get_with_query(endpoints::LIST_RUN_STEPS.render(&[thread_id, run_id])?, query)
            .await
    }

    /// `include` takes values such as [`FILE_SEARCH_RESULT_CONTENT`].
    pub async fn get_run_step(
        &self,
        thread_id: &str,
        run_id: &str,
        step_id: &str,
        include: &[&str],
    ) -> ApiResponseOrError<RunStep> {
        self.get_with_query(
            endpoints::GET_RUN_STEP.render(&[thread_id, run_id, step_id])?,
            &json!({ "include[]": include }),
        )
        .await
    }
}
