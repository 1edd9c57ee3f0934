use derive_builder::Builder;
use derive_more::From;
use serde::{Deserialize, Serialize};

use crate::{
    assistants::Tool, client::OpenAiClient, endpoints, ApiResponseOrError, DeletionStatus,
    ListResponse, Metadata, OpenAiError, Order,
};

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Message {
    pub id: String,
    pub object: String,
    pub created_at: u64,
    /// The thread ID that this message belongs to.
    pub thread_id: String,
    #[serde(default)]
    pub status: Option<MessageStatus>,
    /// On an incomplete message, details about why the message is incomplete.
    #[serde(default)]
    pub incomplete_details: Option<IncompleteDetails>,
    #[serde(default)]
    pub completed_at: Option<u64>,
    #[serde(default)]
    pub incomplete_at: Option<u64>,
    pub role: Role,
    pub content: Vec<Content>,
    /// The assistant that produced the message, if any.
    #[serde(default)]
    pub assistant_id: Option<String>,
    /// Null when messages are created manually using the create message or create thread endpoints.
    #[serde(default)]
    pub run_id: Option<String>,
    #[serde(default)]
    pub attachments: Option<Vec<Attachment>>,
    #[serde(default)]
    pub metadata: Option<Metadata>,
}

impl Message {
    /// Concatenated text of every text content part.
    pub fn text(&self) -> String {
        self.content
            .iter()
            .filter_map(|content| match content {
                Content::Text { text } => Some(text.value.as_str()),
                _ => None,
            })
            .collect()
    }

    pub fn builder(role: Role, content: impl Into<MessageInput>) -> CreateMessageBuilder {
        CreateMessageBuilder::create_empty()
            .role(role)
            .content(content)
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum MessageStatus {
    InProgress,
    Incomplete,
    Completed,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct IncompleteDetails {
    /// e.g. `content_filter`, `max_tokens` or `run_expired`.
    pub reason: String,
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    User,
    Assistant,
}

/// Each part repeats its `type` as the key of its payload.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Content {
    Text { text: Text },
    ImageFile { image_file: ImageFile },
    ImageUrl { image_url: ImageUrl },
    Refusal { refusal: String },
}

#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq)]
pub struct Text {
    pub value: String,
    #[serde(default)]
    pub annotations: Vec<Annotation>,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Annotation {
    /// Points to a specific quote from a file used by `file_search`.
    FileCitation {
        text: String,
        file_citation: FileReference,
        start_index: u32,
        end_index: u32,
    },
    /// Points to a file generated by `code_interpreter`.
    FilePath {
        text: String,
        file_path: FileReference,
        start_index: u32,
        end_index: u32,
    },
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct FileReference {
    pub file_id: String,
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ImageDetail {
    Auto,
    Low,
    High,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct ImageFile {
    /// A file uploaded with purpose `vision`.
    pub file_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub detail: Option<ImageDetail>,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct ImageUrl {
    pub url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub detail: Option<ImageDetail>,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Attachment {
    pub file_id: String,
    /// `code_interpreter` and/or `file_search`.
    pub tools: Vec<Tool>,
}

/// A content part of a message being created.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum InputContent {
    Text { text: String },
    ImageFile { image_file: ImageFile },
    ImageUrl { image_url: ImageUrl },
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, From)]
#[serde(untagged)]
pub enum MessageInput {
    Text(String),
    Parts(Vec<InputContent>),
}

impl From<&str> for MessageInput {
    fn from(value: &str) -> Self {
        MessageInput::Text(value.to_string())
    }
}

#[derive(Serialize, Deserialize, Builder, Debug, Clone, PartialEq)]
#[builder(pattern = "owned")]
#[builder(name = "CreateMessageBuilder")]
#[builder(setter(strip_option, into))]
#[builder(build_fn(error = "OpenAiError"))]
pub struct CreateMessageRequest {
    pub role: Role,
    pub content: MessageInput,
    #[builder(default)]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attachments: Option<Vec<Attachment>>,
    #[builder(default)]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Metadata>,
}

impl CreateMessageRequest {
    pub fn user(content: impl Into<MessageInput>) -> Self {
        CreateMessageRequest {
            role: Role::User,
            content: content.into(),
            attachments: None,
            metadata: None,
        }
    }
}

impl CreateMessageBuilder {
    pub async fn create(self, client: &OpenAiClient, thread_id: &str) -> ApiResponseOrError<Message> {
        client.create_message(thread_id, self.build()?).await
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct ModifyMessageRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Metadata>,
}

/// A `thread.message.delta` payload.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct MessageDelta {
    pub id: String,
    pub object: String,
    pub delta: MessageDeltaContent,
}

#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq)]
pub struct MessageDeltaContent {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<Role>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<Vec<ContentDelta>>,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ContentDelta {
    Text {
        index: u32,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        text: Option<TextDelta>,
    },
    ImageFile {
        index: u32,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        image_file: Option<ImageFile>,
    },
    ImageUrl {
        index: u32,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        image_url: Option<ImageUrl>,
    },
    Refusal {
        index: u32,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        refusal: Option<String>,
    },
}

#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq)]
pub struct TextDelta {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    /// Partial annotations carry an `index` and may omit fields, so they are kept untyped.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub annotations: Option<Vec<serde_json::Value>>,
}

#[derive(Serialize, Clone, Debug, Default, PartialEq)]
pub struct ListMessagesQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order: Option<Order>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub after: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub before: Option<String>,
    /// Only messages generated by this run.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub run_id: Option<String>,
}

impl OpenAiClient {
    pub async fn list_messages(
        &self,
        thread_id: &str,
        query: &ListMessagesQuery,
    ) -> ApiResponseOrError<ListResponse<Message>> {
        self.get_with_query(endpoints::LIST_MESSAGES.render(&[thread_id])?, query)
            .await
    }

    pub async fn create_message(
        &self,
        thread_id: &str,
        request: CreateMessageRequest,
    ) -> ApiResponseOrError<Message> {
        self.post(endpoints::CREATE_MESSAGE.render(&[thread_id])?, request)
            .await
    }

    pub async fn get_message(&self, thread_id: &str, message_id: &str) -> ApiResponseOrError<Message> {
        self.get(endpoints::GET_MESSAGE.render(&[thread_id, message_id])?)
            .await
    }

    pub async fn modify_message(
        &self,
        thread_id: &str,
        message_id: &str,
        request: ModifyMessageRequest,
    ) -> ApiResponseOrError<Message> {
        self.post(
            endpoints::MODIFY_MESSAGE.render(&[thread_id, message_id])?,
            request,
        )
        .await
    }

    pub async fn delete_message(
        &self,
        thread_id: &str,
        message_id: &str,
    ) -> ApiResponseOrError<DeletionStatus> {
        self.delete(endpoints::DELETE_MESSAGE.render(&[thread_id, message_id])?)
            .await
    }
}
