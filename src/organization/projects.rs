use serde::{Deserialize, Serialize};

use crate::{client::OpenAiClient, endpoints, ApiResponseOrError, ListResponse};

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ProjectStatus {
    Active,
    Archived,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct Project {
    pub id: String,
    pub object: String,
    pub name: String,
    pub created_at: u64,
    #[serde(default)]
    pub archived_at: Option<u64>,
    pub status: ProjectStatus,
}

/// Body of both project creation and renaming.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct ProjectRequest {
    pub name: String,
}

#[derive(Serialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct ListProjectsQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub after: Option<String>,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub include_archived: bool,
}

impl OpenAiClient {
    pub async fn list_projects(
        &self,
        query: &ListProjectsQuery,
    ) -> ApiResponseOrError<ListResponse<Project>> {
        self.get_with_query(endpoints::LIST_PROJECTS.render(&[])?, query)
            .await
    }

    pub async fn create_project(&self, name: &str) -> ApiResponseOrError<Project> {
        let request = ProjectRequest {
            name: name.to_string(),
        };
        self.post(endpoints::CREATE_PROJECT.render(&[])?, request)
            .await
    }

    pub async fn retrieve_project(&self, project_id: &str) -> ApiResponseOrError<Project> {
        self.get(endpoints::RETRIEVE_PROJECT.render(&[project_id])?)
            .await
    }

    pub async fn modify_project(&self, project_id: &str, name: &str) -> ApiResponseOrError<Project> {
        let request = ProjectRequest {
            name: name.to_string(),
        };
        self.post(endpoints::MODIFY_PROJECT.render(&[project_id])?, request)
            .await
    }

    /// Archived projects cannot be used or updated.
    pub async fn archive_project(&self, project_id: &str) -> ApiResponseOrError<Project> {
        self.post_empty(endpoints::ARCHIVE_PROJECT.render(&[project_id])?)
            .await
    }
}
