use derive_builder::Builder;
use serde::{Deserialize, Serialize};

use crate::{
    assistants::ToolResources, client::OpenAiClient, endpoints, ApiResponseOrError,
    DeletionStatus, Metadata, OpenAiError,
};

use super::messages::CreateMessageRequest;

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Thread {
    pub id: String,
    pub object: String,
    pub created_at: u64,
    /// A set of resources that are made available to the assistant's tools in this thread.
    #[serde(default)]
    pub tool_resources: Option<ToolResources>,
    #[serde(default)]
    pub metadata: Option<Metadata>,
}

#[derive(Serialize, Deserialize, Builder, Debug, Clone, Default, PartialEq)]
#[builder(pattern = "owned")]
#[builder(name = "CreateThreadBuilder")]
#[builder(setter(strip_option, into))]
#[builder(build_fn(error = "OpenAiError"))]
#[builder(default)]
pub struct CreateThreadRequest {
    /// Messages to start the thread with.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub messages: Option<Vec<CreateMessageRequest>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tool_resources: Option<ToolResources>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Metadata>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct ModifyThreadRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tool_resources: Option<ToolResources>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Metadata>,
}

impl Thread {
    pub fn builder() -> CreateThreadBuilder {
        CreateThreadBuilder::default()
    }
}

impl CreateThreadBuilder {
    pub async fn create(self, client: &OpenAiClient) -> ApiResponseOrError<Thread> {
        client.create_thread(self.build()?).await
    }
}

impl OpenAiClient {
    pub async fn create_thread(&self, request: CreateThreadRequest) -> ApiResponseOrError<Thread> {
        self.post(endpoints::CREATE_THREAD.render(&[])?, request)
            .await
    }

    pub async fn get_thread(&self, thread_id: &str) -> ApiResponseOrError<Thread> {
        self.get(endpoints::GET_THREAD.render(&[thread_id])?).await
    }

    pub async fn modify_thread(
        &self,
        thread_id: &str,
        request: ModifyThreadRequest,
    ) -> ApiResponseOrError<Thread> {
        self.post(endpoints::MODIFY_THREAD.render(&[thread_id])?, request)
            .await
    }

    pub async fn delete_thread(&self, thread_id: &str) -> ApiResponseOrError<DeletionStatus> {
        self.delete(endpoints::DELETE_THREAD.render(&[thread_id])?)
            .await
    }
}
