//! Files are used to upload documents that can be used with features like
//! assistants, fine-tuning and batches.

use std::path::Path;

use reqwest::multipart::Part;
use serde::{Deserialize, Serialize};

use crate::{
    client::OpenAiClient, endpoints, ApiResponseOrError, DeletionStatus, ListResponse,
    OpenAiError, Order,
};

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct File {
    pub id: String,
    pub object: String,
    /// Size of the file, in bytes.
    pub bytes: u64,
    pub created_at: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expires_at: Option<u64>,
    pub filename: String,
    pub purpose: FilePurpose,
    /// Deprecated.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<FileStatus>,
    /// Deprecated.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status_details: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, strum_macros::Display)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum FilePurpose {
    Assistants,
    AssistantsOutput,
    Batch,
    BatchOutput,
    #[serde(rename = "fine-tune")]
    #[strum(serialize = "fine-tune")]
    FineTune,
    #[serde(rename = "fine-tune-results")]
    #[strum(serialize = "fine-tune-results")]
    FineTuneResults,
    Vision,
    UserData,
    Evals,
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum FileStatus {
    Uploaded,
    Processed,
    Error,
}

/// The text fields of a `createFile` upload. The file itself travels as a [`FileUpload`].
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct CreateFileRequest {
    pub purpose: FilePurpose,
}

#[derive(Debug, Serialize, Clone, PartialEq, Default)]
pub struct ListFilesQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub purpose: Option<FilePurpose>,
    /// Between 1 and 10,000, defaults to 10,000.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order: Option<Order>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub after: Option<String>,
}

/// File content sent as one part of a multipart request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileUpload {
    pub filename: String,
    pub mime_type: String,
    pub bytes: Vec<u8>,
}

impl FileUpload {
    pub fn new(filename: impl Into<String>, bytes: impl Into<Vec<u8>>) -> Self {
        let filename = filename.into();
        let mime_type = mime_type_for(&filename).to_string();
        FileUpload {
            filename,
            mime_type,
            bytes: bytes.into(),
        }
    }

    pub fn with_mime_type(mut self, mime_type: impl Into<String>) -> Self {
        self.mime_type = mime_type.into();
        self
    }

    /// Reads a file from disk, using its file name and extension for the part.
    pub fn from_path(path: impl AsRef<Path>) -> ApiResponseOrError<Self> {
        let path = path.as_ref();
        let filename = path
            .file_name()
            .and_then(|name| name.to_str())
            .ok_or_else(|| {
                OpenAiError::new(
                    format!("{} has no file name", path.display()),
                    "io".to_string(),
                )
            })?
            .to_string();
        let bytes = std::fs::read(path)?;
        Ok(FileUpload::new(filename, bytes))
    }

    pub(crate) fn into_part(self) -> ApiResponseOrError<Part> {
        Ok(Part::bytes(self.bytes)
            .file_name(self.filename)
            .mime_str(&self.mime_type)?)
    }
}

fn mime_type_for(filename: &str) -> &'static str {
    let extension = filename
        .rsplit_once('.')
        .map(|(_, extension)| extension.to_ascii_lowercase())
        .unwrap_or_default();
    match extension.as_str() {
        "jsonl" => "application/jsonl",
        "json" => "application/json",
        "pdf" => "application/pdf",
        "txt" | "md" => "text/plain",
        "csv" => "text/csv",
        "png" => "image/png",
        "jpg" | "jpeg" => "image/jpeg",
        "webp" => "image/webp",
        "gif" => "image/gif",
        "mp3" | "mpga" | "mpeg" => "audio/mpeg",
        "m4a" => "audio/mp4",
        "mp4" => "video/mp4",
        "wav" => "audio/wav",
        "webm" => "audio/webm",
        "ogg" => "audio/ogg",
        "flac" => "audio/flac",
        _ => "application/octet-stream",
    }
}

impl OpenAiClient {
    pub async fn list_files(&self, query: &ListFilesQuery) -> ApiResponseOrError<ListResponse<File>> {
        self.get_with_query(endpoints::LIST_FILES.render(&[])?, query)
            .await
    }

    /// Uploads a file. Individual files can be up to 512 MB.
    pub async fn create_file(
        &self,
        file: FileUpload,
        request: CreateFileRequest,
    ) -> ApiResponseOrError<File> {
        self.post_multipart(
            endpoints::CREATE_FILE.render(&[])?,
            &request,
            vec![("file".to_string(), file)],
        )
        .await
    }

    pub async fn retrieve_file(&self, file_id: &str) -> ApiResponseOrError<File> {
        self.get(endpoints::RETRIEVE_FILE.render(&[file_id])?).await
    }

    pub async fn delete_file(&self, file_id: &str) -> ApiResponseOrError<DeletionStatus> {
        self.delete(endpoints::DELETE_FILE.render(&[file_id])?).await
    }

    /// Returns the raw contents of a file.
    pub async fn download_file(&self, file_id: &str) -> ApiResponseOrError<String> {
        self.get_text(endpoints::DOWNLOAD_FILE.render(&[file_id])?)
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn purpose_spelling() {
        assert_eq!(FilePurpose::FineTune.to_string(), "fine-tune");
        assert_eq!(FilePurpose::BatchOutput.to_string(), "batch_output");
        assert_eq!(serde_json::to_value(FilePurpose::FineTune).unwrap(), json!("fine-tune"));
        assert_eq!(
            serde_json::from_value::<FilePurpose>(json!("user_data")).unwrap(),
            FilePurpose::UserData
        );
        assert!(serde_json::from_value::<FilePurpose>(json!("fine_tune")).is_err());
    }

    #[test]
    fn file_object() {
        let file: File = serde_json::from_value(json!({
            "id": "file-abc123",
            "object": "file",
            "bytes": 120000,
            "created_at": 1677610602,
            "expires_at": 1680202602,
            "filename": "salesOverview.pdf",
            "purpose": "assistants"
        }))
        .unwrap();
        assert_eq!(file.purpose, FilePurpose::Assistants);
        assert_eq!(file.status, None);
    }

    #[test]
    fn upload_mime_type() {
        assert_eq!(FileUpload::new("train.JSONL", b"{}".to_vec()).mime_type, "application/jsonl");
        assert_eq!(FileUpload::new("speech.mp3", Vec::new()).mime_type, "audio/mpeg");
        assert_eq!(
            FileUpload::new("blob", Vec::new()).mime_type,
            "application/octet-stream"
        );
        assert_eq!(
            FileUpload::new("a.bin", Vec::new())
                .with_mime_type("image/png")
                .mime_type,
            "image/png"
        );
    }

    #[test]
    fn missing_file() {
        let error = FileUpload::from_path("test_data/missing_file.jsonl").unwrap_err();
        assert_eq!(error.error_type, "io");
    }
}
