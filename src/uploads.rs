//! Uploads split a large file into parts that are sent separately and then
//! assembled into a single [`File`](crate::files::File).

use serde::{Deserialize, Serialize};

use crate::{
    client::OpenAiClient,
    endpoints,
    files::{File, FilePurpose, FileUpload},
    ApiResponseOrError,
};

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Upload {
    pub id: String,
    pub object: String,
    pub created_at: u64,
    pub filename: String,
    /// The intended number of bytes to be uploaded.
    pub bytes: u64,
    pub purpose: String,
    pub status: UploadStatus,
    pub expires_at: u64,
    /// The ready file once the upload is completed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file: Option<File>,
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum UploadStatus {
    Pending,
    Completed,
    Cancelled,
    Expired,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct UploadPart {
    pub id: String,
    pub object: String,
    pub created_at: u64,
    pub upload_id: String,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct CreateUploadRequest {
    pub filename: String,
    pub purpose: FilePurpose,
    pub bytes: u64,
    /// Must be one of the supported MIME types for the given purpose.
    pub mime_type: String,
}

/// The text fields of an `addUploadPart` request; the part body travels as `data`.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
pub struct AddUploadPartRequest {}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct CompleteUploadRequest {
    /// The ordered list of part IDs.
    pub part_ids: Vec<String>,
    /// Checked against the assembled file when provided.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub md5: Option<String>,
}

impl OpenAiClient {
    pub async fn create_upload(&self, request: CreateUploadRequest) -> ApiResponseOrError<Upload> {
        self.post(endpoints::CREATE_UPLOAD.render(&[])?, request)
            .await
    }

    /// Adds a part of at most 64 MB to an upload.
    pub async fn add_upload_part(
        &self,
        upload_id: &str,
        data: FileUpload,
    ) -> ApiResponseOrError<UploadPart> {
        self.post_multipart(
            endpoints::ADD_UPLOAD_PART.render(&[upload_id])?,
            &AddUploadPartRequest::default(),
            vec![("data".to_string(), data)],
        )
        .await
    }

    pub async fn complete_upload(
        &self,
        upload_id: &str,
        request: CompleteUploadRequest,
    ) -> ApiResponseOrError<Upload> {
        self.post(endpoints::COMPLETE_UPLOAD.render(&[upload_id])?, request)
            .await
    }

    pub async fn cancel_upload(&self, upload_id: &str) -> ApiResponseOrError<Upload> {
        self.post_empty(endpoints::CANCEL_UPLOAD.render(&[upload_id])?)
            .await
    }
}
