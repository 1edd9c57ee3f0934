use derive_builder::Builder;
use serde::{Deserialize, Serialize};

use crate::{
    chat::{ChatCompletionResponseFormat, ReasoningEffort},
    client::OpenAiClient,
    endpoints,
    schema::{MaxNumResults, Score},
    ApiResponseOrError, DeletionStatus, FunctionObject, ListQuery, ListResponse, Metadata,
    OpenAiError,
};

use super::vector_stores::ChunkingStrategy;

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Assistant {
    pub id: String,
    pub object: String,
    pub created_at: u64,
    /// The name of the assistant. The maximum length is 256 characters.
    pub name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    /// ID of the model to use.
    pub model: String,
    /// The system instructions that the assistant uses. The maximum length is 256,000 characters.
    pub instructions: Option<String>,
    pub tools: Vec<Tool>,
    /// A set of resources that are used by the assistant's tools. The resources are specific to the type of tool. For example, the code_interpreter tool requires a list of file IDs, while the file_search tool requires a list of vector store IDs.
    #[serde(default)]
    pub tool_resources: Option<ToolResources>,
    /// Set of 16 key-value pairs that can be attached to an object. Keys can be a maximum of 64 characters long and values can be a maximum of 512 characters long.
    #[serde(default)]
    pub metadata: Option<Metadata>,
    #[serde(default)]
    pub temperature: Option<f32>,
    #[serde(default)]
    pub top_p: Option<f32>,
    #[serde(default)]
    pub response_format: Option<AssistantsResponseFormat>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reasoning_effort: Option<ReasoningEffort>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Tool {
    CodeInterpreter,
    FileSearch {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        file_search: Option<FileSearch>,
    },
    Function { function: FunctionObject },
}

impl Tool {
    pub fn file_search() -> Self {
        Tool::FileSearch { file_search: None }
    }
}

impl From<FunctionObject> for Tool {
    fn from(function: FunctionObject) -> Self {
        Tool::Function { function }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq)]
pub struct FileSearch {
    /// Between 1 and 50. Defaults to 20 for `gpt-4*` models and 5 for `gpt-3.5-turbo`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_num_results: Option<MaxNumResults>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ranking_options: Option<FileSearchRankingOptions>,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct FileSearchRankingOptions {
    /// `auto` or `default_2024_08_21`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ranker: Option<String>,
    pub score_threshold: Score,
}

#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq)]
pub struct ToolResources {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code_interpreter: Option<CodeInterpreterResources>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file_search: Option<FileSearchResources>,
}

#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq, Eq)]
pub struct CodeInterpreterResources {
    /// A list of file IDs made available to the `code_interpreter` tool. There can be a maximum of 20 files associated with the tool.
    #[serde(default)]
    pub file_ids: Vec<String>,
}

#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq)]
pub struct FileSearchResources {
    /// There can be a maximum of 1 vector store attached to the assistant.
    #[serde(default)]
    pub vector_store_ids: Vec<String>,
    /// Vector stores to create from files along with the assistant or thread.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vector_stores: Option<Vec<VectorStoreSeed>>,
}

#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq)]
pub struct VectorStoreSeed {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file_ids: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub chunking_strategy: Option<ChunkingStrategy>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Metadata>,
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ResponseFormatMode {
    Auto,
}

/// `"auto"` or an explicit output format.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(untagged)]
pub enum AssistantsResponseFormat {
    Mode(ResponseFormatMode),
    Format(ChatCompletionResponseFormat),
}

impl From<ChatCompletionResponseFormat> for AssistantsResponseFormat {
    fn from(format: ChatCompletionResponseFormat) -> Self {
        AssistantsResponseFormat::Format(format)
    }
}

#[derive(Serialize, Deserialize, Builder, Default, Debug, Clone, PartialEq)]
#[builder(pattern = "owned")]
#[builder(name = "AssistantBuilder")]
#[builder(setter(strip_option, into))]
#[builder(build_fn(error = "OpenAiError"))]
pub struct CreateAssistantRequest {
    /// ID of the model to use.
    pub model: String,
    /// The name of the assistant. The maximum length is 256 characters.
    #[builder(default)]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// The description of the assistant. The maximum length is 512 characters.
    #[builder(default)]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[builder(default)]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub instructions: Option<String>,
    /// A set of tools that the assistant can use. There can be a maximum of 128 tools.
    #[builder(default)]
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tools: Vec<Tool>,
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
    pub response_format: Option<AssistantsResponseFormat>,
    #[builder(default)]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reasoning_effort: Option<ReasoningEffort>,
}

/// Fields left as `None` keep their current value.
#[derive(Serialize, Deserialize, Builder, Default, Debug, Clone, PartialEq)]
#[builder(pattern = "owned")]
#[builder(name = "ModifyAssistantBuilder")]
#[builder(setter(strip_option, into))]
#[builder(build_fn(error = "OpenAiError"))]
#[builder(default)]
pub struct ModifyAssistantRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub instructions: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tools: Option<Vec<Tool>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tool_resources: Option<ToolResources>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Metadata>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub top_p: Option<f32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub response_format: Option<AssistantsResponseFormat>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reasoning_effort: Option<ReasoningEffort>,
}

impl Assistant {
    pub fn builder(model: &str) -> AssistantBuilder {
        AssistantBuilder::create_empty().model(model)
    }
}

impl AssistantBuilder {
    pub async fn create(self, client: &OpenAiClient) -> ApiResponseOrError<Assistant> {
        client.create_assistant(self.build()?).await
    }
}

impl OpenAiClient {
    pub async fn list_assistants(
        &self,
        query: &ListQuery,
    ) -> ApiResponseOrError<ListResponse<Assistant>> {
        self.get_with_query(endpoints::LIST_ASSISTANTS.render(&[])?, query)
            .await
    }

    pub async fn create_assistant(
        &self,
        request: CreateAssistantRequest,
    ) -> ApiResponseOrError<Assistant> {
        self.post(endpoints::CREATE_ASSISTANT.render(&[])?, request)
            .await
    }

    pub async fn get_assistant(&self, assistant_id: &str) -> ApiResponseOrError<Assistant> {
        self.get(endpoints::GET_ASSISTANT.render(&[assistant_id])?)
            .await
    }

    pub async fn modify_assistant(
        &self,
        assistant_id: &str,
        request: ModifyAssistantRequest,
    ) -> ApiResponseOrError<Assistant> {
        self.post(endpoints::MODIFY_ASSISTANT.render(&[assistant_id])?, request)
            .await
    }

    pub async fn delete_assistant(&self, assistant_id: &str) -> ApiResponseOrError<DeletionStatus> {
        self.delete(endpoints::DELETE_ASSISTANT.render(&[assistant_id])?)
            .await
    }
}
