use serde::{Deserialize, Serialize};

use super::{
    project_service_accounts::ProjectServiceAccount, project_users::ProjectUser, AdminListQuery,
};
use crate::{client::OpenAiClient, endpoints, ApiResponseOrError, DeletionStatus, ListResponse};

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ProjectApiKeyOwner {
    User { user: ProjectUser },
    ServiceAccount { service_account: ProjectServiceAccount },
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct ProjectApiKey {
    pub object: String,
    pub redacted_value: String,
    pub name: String,
    pub created_at: u64,
    #[serde(default)]
    pub last_used_at: Option<u64>,
    pub id: String,
    pub owner: ProjectApiKeyOwner,
}

impl OpenAiClient {
    pub async fn list_project_api_keys(
        &self,
        project_id: &str,
        query: &AdminListQuery,
    ) -> ApiResponseOrError<ListResponse<ProjectApiKey>> {
        self.get_with_query(endpoints::LIST_PROJECT_API_KEYS.render(&[project_id])?, query)
            .await
    }

    pub async fn retrieve_project_api_key(
        &self,
        project_id: &str,
        key_id: &str,
    ) -> ApiResponseOrError<ProjectApiKey> {
        self.get(endpoints::RETRIEVE_PROJECT_API_KEY.render(&[project_id, key_id])?)
            .await
    }

    /// Keys owned by service accounts cannot be deleted this way.
    pub async fn delete_project_api_key(
        &self,
        project_id: &str,
        key_id: &str,
    ) -> ApiResponseOrError<DeletionStatus> {
        self.delete(endpoints::DELETE_PROJECT_API_KEY.render(&[project_id, key_id])?)
            .await
    }
}
