//! Evals: a data source schema plus testing criteria, run against models or
//! stored outputs to score them.

use derive_builder::Builder;
use serde::{Deserialize, Serialize};

use crate::{
    client::OpenAiClient,
    endpoints,
    graders::{EvalItem, Grader},
    ApiResponseOrError, ListResponse, Metadata, OpenAiError, Order,
};

/// The shape of the items an eval is run over, as stored on the eval.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum EvalDataSourceConfig {
    Custom {
        schema: serde_json::Value,
    },
    Logs {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        metadata: Option<serde_json::Value>,
        schema: serde_json::Value,
    },
    StoredCompletions {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        metadata: Option<serde_json::Value>,
        schema: serde_json::Value,
    },
}

/// The data source config given at creation; the server derives the full schema from it.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum CreateEvalDataSourceConfig {
    Custom {
        item_schema: serde_json::Value,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        include_sample_schema: Option<bool>,
    },
    Logs {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        metadata: Option<serde_json::Value>,
    },
    StoredCompletions {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        metadata: Option<serde_json::Value>,
    },
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Eval {
    pub object: String,
    pub id: String,
    pub name: String,
    pub data_source_config: EvalDataSourceConfig,
    pub testing_criteria: Vec<Grader>,
    pub created_at: u64,
    #[serde(default)]
    pub metadata: Option<Metadata>,
}

#[derive(Serialize, Deserialize, Builder, Debug, Clone, PartialEq)]
#[builder(name = "EvalBuilder")]
#[builder(pattern = "owned")]
#[builder(setter(strip_option, into))]
#[builder(build_fn(error = "OpenAiError"))]
pub struct CreateEvalRequest {
    #[builder(default)]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[builder(default)]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Metadata>,
    pub data_source_config: CreateEvalDataSourceConfig,
    pub testing_criteria: Vec<Grader>,
}

#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq)]
pub struct UpdateEvalRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Metadata>,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct EvalDeleted {
    pub object: String,
    pub deleted: bool,
    pub eval_id: String,
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum EvalRunStatus {
    Queued,
    InProgress,
    Completed,
    Canceled,
    Failed,
}

impl EvalRunStatus {
    pub fn is_terminal(self) -> bool {
        matches!(
            self,
            EvalRunStatus::Completed | EvalRunStatus::Canceled | EvalRunStatus::Failed
        )
    }
}

/// One line of inline JSONL content.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct EvalJsonlItem {
    pub item: serde_json::Map<String, serde_json::Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sample: Option<serde_json::Map<String, serde_json::Value>>,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum EvalRunSource {
    FileContent {
        content: Vec<EvalJsonlItem>,
    },
    FileId {
        id: String,
    },
    /// Stored chat completions matching the filters.
    StoredCompletions {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        metadata: Option<Metadata>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        model: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        created_after: Option<u64>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        created_before: Option<u64>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        limit: Option<u32>,
    },
    /// Stored responses matching the filters.
    Responses {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        metadata: Option<Metadata>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        model: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        instructions_search: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        created_after: Option<u64>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        created_before: Option<u64>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        reasoning_effort: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        temperature: Option<f64>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        top_p: Option<f64>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        users: Option<Vec<String>>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        tools: Option<Vec<String>>,
    },
}

/// Messages sent to the model under test, built from a template or taken from each item.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum EvalInputMessages {
    Template { template: Vec<EvalItem> },
    ItemReference { item_reference: String },
}

#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq)]
pub struct EvalSamplingParams {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_completion_tokens: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub top_p: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seed: Option<i64>,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum EvalRunDataSource {
    /// Items whose samples are already present.
    Jsonl { source: EvalRunSource },
    /// Samples generated with chat completions.
    Completions {
        source: EvalRunSource,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        input_messages: Option<EvalInputMessages>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        sampling_params: Option<EvalSamplingParams>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        model: Option<String>,
    },
    /// Samples generated with the Responses API.
    Responses {
        source: EvalRunSource,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        input_messages: Option<EvalInputMessages>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        sampling_params: Option<EvalSamplingParams>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        model: Option<String>,
    },
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, Default, PartialEq, Eq)]
pub struct EvalRunResultCounts {
    pub total: u64,
    pub errored: u64,
    pub failed: u64,
    pub passed: u64,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct EvalRunModelUsage {
    pub model_name: String,
    pub invocation_count: u64,
    pub prompt_tokens: u64,
    pub completion_tokens: u64,
    pub total_tokens: u64,
    pub cached_tokens: u64,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct EvalRunCriteriaResult {
    pub testing_criteria: String,
    pub passed: u64,
    pub failed: u64,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct EvalApiError {
    pub code: String,
    pub message: String,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct EvalRun {
    pub object: String,
    pub id: String,
    pub eval_id: String,
    pub status: EvalRunStatus,
    pub model: String,
    pub name: String,
    pub created_at: u64,
    pub report_url: String,
    pub result_counts: EvalRunResultCounts,
    #[serde(default)]
    pub per_model_usage: Vec<EvalRunModelUsage>,
    #[serde(default)]
    pub per_testing_criteria_results: Vec<EvalRunCriteriaResult>,
    pub data_source: EvalRunDataSource,
    #[serde(default)]
    pub metadata: Option<Metadata>,
    #[serde(default)]
    pub error: Option<EvalApiError>,
}

#[derive(Serialize, Deserialize, Builder, Debug, Clone, PartialEq)]
#[builder(name = "EvalRunBuilder")]
#[builder(pattern = "owned")]
#[builder(setter(strip_option, into))]
#[builder(build_fn(error = "OpenAiError"))]
pub struct CreateEvalRunRequest {
    #[builder(default)]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[builder(default)]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Metadata>,
    pub data_source: EvalRunDataSource,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct EvalRunDeleted {
    pub object: String,
    pub deleted: bool,
    pub run_id: String,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct EvalSampleMessage {
    pub role: String,
    pub content: String,
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, Default, PartialEq, Eq)]
pub struct EvalSampleUsage {
    pub total_tokens: u64,
    pub completion_tokens: u64,
    pub prompt_tokens: u64,
    pub cached_tokens: u64,
}

/// What the model under test produced for one item.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct EvalSample {
    #[serde(default)]
    pub input: Vec<EvalSampleMessage>,
    #[serde(default)]
    pub output: Vec<EvalSampleMessage>,
    #[serde(default)]
    pub finish_reason: Option<String>,
    #[serde(default)]
    pub model: Option<String>,
    #[serde(default)]
    pub usage: Option<EvalSampleUsage>,
    #[serde(default)]
    pub error: Option<EvalApiError>,
    #[serde(default)]
    pub temperature: Option<f64>,
    #[serde(default)]
    pub max_completion_tokens: Option<u32>,
    #[serde(default)]
    pub top_p: Option<f64>,
    #[serde(default)]
    pub seed: Option<i64>,
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum OutputItemStatus {
    Pass,
    Fail,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct EvalRunOutputItem {
    pub object: String,
    pub id: String,
    pub run_id: String,
    pub eval_id: String,
    pub created_at: u64,
    pub status: OutputItemStatus,
    pub datasource_item_id: u64,
    pub datasource_item: serde_json::Map<String, serde_json::Value>,
    /// One grader result per testing criterion.
    pub results: Vec<serde_json::Map<String, serde_json::Value>>,
    pub sample: EvalSample,
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum EvalOrderBy {
    CreatedAt,
    UpdatedAt,
}

#[derive(Serialize, Clone, Debug, Default, PartialEq)]
pub struct ListEvalsQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub after: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order: Option<Order>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_by: Option<EvalOrderBy>,
}

#[derive(Serialize, Clone, Debug, Default, PartialEq)]
pub struct ListEvalRunsQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub after: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order: Option<Order>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<EvalRunStatus>,
}

#[derive(Serialize, Clone, Debug, Default, PartialEq)]
pub struct ListOutputItemsQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub after: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order: Option<Order>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<OutputItemStatus>,
}

impl Eval {
    pub fn builder(
        data_source_config: CreateEvalDataSourceConfig,
        testing_criteria: Vec<Grader>,
    ) -> EvalBuilder {
        EvalBuilder::create_empty()
            .data_source_config(data_source_config)
            .testing_criteria(testing_criteria)
    }
}

impl EvalBuilder {
    pub async fn create(self, client: &OpenAiClient) -> ApiResponseOrError<Eval> {
        client.create_eval(self.build()?).await
    }
}

impl EvalRun {
    pub fn builder(data_source: EvalRunDataSource) -> EvalRunBuilder {
        EvalRunBuilder::create_empty().data_source(data_source)
    }
}

impl EvalRunBuilder {
    pub async fn create(self, client: &OpenAiClient, eval_id: &str) -> ApiResponseOrError<EvalRun> {
        client.create_eval_run(eval_id, self.build()?).await
    }
}

impl OpenAiClient {
    pub async fn list_evals(&self, query: &ListEvalsQuery) -> ApiResponseOrError<ListResponse<Eval>> {
        self.get_with_query(endpoints::LIST_EVALS.render(&[])?, query)
            .await
    }

    pub async fn create_eval(&self, request: CreateEvalRequest) -> ApiResponseOrError<Eval> {
        self.post(endpoints::CREATE_EVAL.render(&[])?, request).await
    }

    pub async fn get_eval(&self, eval_id: &str) -> ApiResponseOrError<Eval> {
        self.get(endpoints::GET_EVAL.render(&[eval_id])?).await
    }

    pub async fn update_eval(
        &self,
        eval_id: &str,
        request: UpdateEvalRequest,
    ) -> ApiResponseOrError<Eval> {
        self.post(endpoints::UPDATE_EVAL.render(&[eval_id])?, request)
            .await
    }

    pub async fn delete_eval(&self, eval_id: &str) -> ApiResponseOrError<EvalDeleted> {
        self.delete(endpoints::DELETE_EVAL.render(&[eval_id])?).await
    }

    pub async fn get_eval_runs(
        &self,
        eval_id: &str,
        query: &ListEvalRunsQuery,
    ) -> ApiResponseOrError<ListResponse<EvalRun>> {
        self.get_with_query(endpoints::GET_EVAL_RUNS.render(&[eval_id])?, query)
            .await
    }

    pub async fn create_eval_run(
        &self,
        eval_id: &str,
        request: CreateEvalRunRequest,
    ) -> ApiResponseOrError<EvalRun> {
        self.post(endpoints::CREATE_EVAL_RUN.render(&[eval_id])?, request)
            .await
    }

    pub async fn get_eval_run(&self, eval_id: &str, run_id: &str) -> ApiResponseOrError<EvalRun> {
        self.get(endpoints::GET_EVAL_RUN.render(&[eval_id, run_id])?)
            .await
    }

    pub async fn cancel_eval_run(&self, eval_id: &str, run_id: &str) -> ApiResponseOrError<EvalRun> {
        self.post_empty(endpoints::CANCEL_EVAL_RUN.render(&[eval_id, run_id])?)
            .await
    }

    pub async fn delete_eval_run(
        &self,
        eval_id: &str,
        run_id: &str,
    ) -> ApiResponseOrError<EvalRunDeleted> {
        self.delete(endpoints::DELETE_EVAL_RUN.render(&[eval_id, run_id])?)
            .await
    }

    pub async fn get_eval_run_output_items(
        &self,
        eval_id: &str,
        run_id: &str,
        query: &ListOutputItemsQuery,
    ) -> ApiResponseOrError<ListResponse<EvalRunOutputItem>> {
        self.get_with_query(
            endpoints::GET_EVAL_RUN_OUTPUT_ITEMS.render(&[eval_id, run_id])?,
            query,
        )
        .await
    }

    pub async fn get_eval_run_output_item(
        &self,
        eval_id: &str,
        run_id: &str,
        output_item_id: &str,
    ) -> ApiResponseOrError<EvalRunOutputItem> {
        self.get(endpoints::GET_EVAL_RUN_OUTPUT_ITEM.render(&[eval_id, run_id, output_item_id])?)
            .await
    }
}
