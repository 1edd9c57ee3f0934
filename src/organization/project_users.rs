use serde::{Deserialize, Serialize};

use super::{AdminListQuery, ProjectRole};
use crate::{client::OpenAiClient, endpoints, ApiResponseOrError, DeletionStatus, ListResponse};

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct ProjectUser {
    pub object: String,
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: ProjectRole,
    pub added_at: u64,
}

/// Adds an organization member to a project.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct ProjectUserCreateRequest {
    pub user_id: String,
    pub role: ProjectRole,
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
pub struct ProjectUserUpdateRequest {
    pub role: ProjectRole,
}

impl OpenAiClient {
    pub async fn list_project_users(
        &self,
        project_id: &str,
        query: &AdminListQuery,
    ) -> ApiResponseOrError<ListResponse<ProjectUser>> {
        self.get_with_query(endpoints::LIST_PROJECT_USERS.render(&[project_id])?, query)
            .await
    }

    pub async fn create_project_user(
        &self,
        project_id: &str,
        request: ProjectUserCreateRequest,
    ) -> ApiResponseOrError<ProjectUser> {
        self.post(endpoints::CREATE_PROJECT_USER.render(&[project_id])?, request)
            .await
    }

    pub async fn retrieve_project_user(
        &self,
        project_id: &str,
        user_id: &str,
    ) -> ApiResponseOrError<ProjectUser> {
        self.get(endpoints::RETRIEVE_PROJECT_USER.render(&[project_id, user_id])?)
            .await
    }

    pub async fn modify_project_user(
        &self,
        project_id: &str,
        user_id: &str,
        role: ProjectRole,
    ) -> ApiResponseOrError<ProjectUser> {
        self.post(
            endpoints::MODIFY_PROJECT_USER.render(&[project_id, user_id])?,
            ProjectUserUpdateRequest { role },
        )
        .await
    }

    pub async fn delete_project_user(
        &self,
        project_id: &str,
        user_id: &str,
    ) -> ApiResponseOrError<DeletionStatus> {
        self.delete(endpoints::DELETE_PROJECT_USER.render(&[project_id, user_id])?)
            .await
    }
}
