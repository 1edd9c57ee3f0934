//! Containers: sandboxes the code interpreter tool runs in, and the files inside them.

use serde::{Deserialize, Serialize};

use crate::{
    client::OpenAiClient, endpoints, files::FileUpload, ApiResponseOrError, DeletionStatus,
    ListQuery, ListResponse,
};

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ExpiresAfterAnchor {
    LastActiveAt,
}

/// Idle time after which the container expires.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
pub struct ContainerExpiresAfter {
    pub anchor: ExpiresAfterAnchor,
    pub minutes: u32,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct Container {
    pub id: String,
    pub object: String,
    pub name: String,
    pub created_at: u64,
    /// `running` or `expired`.
    pub status: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expires_after: Option<ContainerExpiresAfter>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_active_at: Option<u64>,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct CreateContainerRequest {
    pub name: String,
    /// Files copied into the container.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub file_ids: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expires_after: Option<ContainerExpiresAfter>,
}

impl CreateContainerRequest {
    pub fn new(name: impl Into<String>) -> Self {
        CreateContainerRequest {
            name: name.into(),
            file_ids: Vec::new(),
            expires_after: None,
        }
    }
}

/// Multipart body of a container file upload: either new content or an existing file id.
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq, Eq)]
pub struct CreateContainerFileRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file_id: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct ContainerFile {
    pub id: String,
    pub object: String,
    pub container_id: String,
    pub created_at: u64,
    pub bytes: u64,
    /// Path inside the container, e.g. `/mnt/data/report.csv`.
    pub path: String,
    /// `user` for uploads, `assistant` for files the model wrote.
    pub source: String,
}

impl OpenAiClient {
    pub async fn list_containers(&self, query: &ListQuery) -> ApiResponseOrError<ListResponse<Container>> {
        self.get_with_query(endpoints::LIST_CONTAINERS.render(&[])?, query)
            .await
    }

    pub async fn create_container(&self, request: CreateContainerRequest) -> ApiResponseOrError<Container> {
        self.post(endpoints::CREATE_CONTAINER.render(&[])?, request)
            .await
    }

    pub async fn retrieve_container(&self, container_id: &str) -> ApiResponseOrError<Container> {
        self.get(endpoints::RETRIEVE_CONTAINER.render(&[container_id])?)
            .await
    }

    pub async fn delete_container(&self, container_id: &str) -> ApiResponseOrError<DeletionStatus> {
        self.delete(endpoints::DELETE_CONTAINER.render(&[container_id])?)
            .await
    }

    /// Uploads new content into the container.
    pub async fn create_container_file(
        &self,
        container_id: &str,
        file: FileUpload,
    ) -> ApiResponseOrError<ContainerFile> {
        self.post_multipart(
            endpoints::CREATE_CONTAINER_FILE.render(&[container_id])?,
            &CreateContainerFileRequest::default(),
            vec![("file".to_string(), file)],
        )
        .await
    }

    /// Copies an uploaded file into the container.
    pub async fn create_container_file_from_id(
        &self,
        container_id: &str,
        file_id: &str,
    ) -> ApiResponseOrError<ContainerFile> {
        let request = CreateContainerFileRequest {
            file_id: Some(file_id.to_string()),
        };
        self.post_multipart(
            endpoints::CREATE_CONTAINER_FILE.render(&[container_id])?,
            &request,
            Vec::new(),
        )
        .await
    }

    pub async fn list_container_files(
        &self,
        container_id: &str,
        query: &ListQuery,
    ) -> ApiResponseOrError<ListResponse<ContainerFile>> {
        self.get_with_query(endpoints::LIST_CONTAINER_FILES.render(&[container_id])?, query)
            .await
    }

    pub async fn retrieve_container_file(
        &self,
        container_id: &str,
        file_id: &str,
    ) -> ApiResponseOrError<ContainerFile> {
        self.get(endpoints::RETRIEVE_CONTAINER_FILE.render(&[container_id, file_id])?)
            .await
    }

    pub async fn delete_container_file(
        &self,
        container_id: &str,
        file_id: &str,
    ) -> ApiResponseOrError<DeletionStatus> {
        self.delete(endpoints::DELETE_CONTAINER_FILE.render(&[container_id, file_id])?)
            .await
    }

    pub async fn retrieve_container_file_content(
        &self,
        container_id: &str,
        file_id: &str,
    ) -> ApiResponseOrError<Vec<u8>> {
        self.get_bytes(endpoints::RETRIEVE_CONTAINER_FILE_CONTENT.render(&[container_id, file_id])?)
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn running_container() {
        let container: Container = serde_json::from_value(json!({
            "id": "cntr_682e30645a488191b6363a0cbefc0f0a025ec61b66250591",
            "object": "container",
            "created_at": 1747857508,
            "status": "running",
            "expires_after": { "anchor": "last_active_at", "minutes": 20 },
            "last_active_at": 1747857508,
            "name": "My Container"
        }))
        .unwrap();
        assert_eq!(container.expires_after.unwrap().minutes, 20);
    }

    #[test]
    fn create_request_skips_empty_files() {
        assert_eq!(
            serde_json::to_value(CreateContainerRequest::new("My Container")).unwrap(),
            json!({ "name": "My Container" })
        );
    }

    #[test]
    fn file_written_by_model() {
        let file: ContainerFile = serde_json::from_value(json!({
            "id": "cfile_682e0e8a43c88191a7978f477a09bdf5",
            "object": "container.file",
            "created_at": 1747848842,
            "bytes": 880,
            "container_id": "cntr_682e0e7318108198aa783fd921ff305e08e78805b9fdbb04",
            "path": "/mnt/data/88e12fa445d32636f190a0b33daed6cb-tsconfig.json",
            "source": "user"
        }))
        .unwrap();
        assert_eq!(file.bytes, 880);
    }
}
