use serde::{Deserialize, Serialize};

use super::{AdminListQuery, ProjectRole};
use crate::{client::OpenAiClient, endpoints, ApiResponseOrError, DeletionStatus, ListResponse};

/// A bot identity with no organization membership, scoped to one project.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct ProjectServiceAccount {
    pub object: String,
    pub id: String,
    pub name: String,
    pub role: ProjectRole,
    pub created_at: u64,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct ProjectServiceAccountCreateRequest {
    pub name: String,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct ProjectServiceAccountApiKey {
    pub object: String,
    pub value: String,
    pub name: String,
    pub created_at: u64,
    pub id: String,
}

/// The new account plus its unredacted key, which is never shown again.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct ProjectServiceAccountCreateResponse {
    pub object: String,
    pub id: String,
    pub name: String,
    pub role: ProjectRole,
    pub created_at: u64,
    pub api_key: ProjectServiceAccountApiKey,
}

impl OpenAiClient {
    pub async fn list_project_service_accounts(
        &self,
        project_id: &str,
        query: &AdminListQuery,
    ) -> ApiResponseOrError<ListResponse<ProjectServiceAccount>> {
        self.get_with_query(
            endpoints::LIST_PROJECT_SERVICE_ACCOUNTS.render(&[project_id])?,
            query,
        )
        .await
    }

    pub async fn create_project_service_account(
        &self,
        project_id: &str,
        name: &str,
    ) -> ApiResponseOrError<ProjectServiceAccountCreateResponse> {
        let request = ProjectServiceAccountCreateRequest {
            name: name.to_string(),
        };
        self.post(
            endpoints::CREATE_PROJECT_SERVICE_ACCOUNT.render(&[project_id])?,
            request,
        )
        .await
    }

    pub async fn retrieve_project_service_account(
        &self,
        project_id: &str,
        service_account_id: &str,
    ) -> ApiResponseOrError<ProjectServiceAccount> {
        self.get(
            endpoints::RETRIEVE_PROJECT_SERVICE_ACCOUNT.render(&[project_id, service_account_id])?,
        )
        .await
    }

    pub async fn delete_project_service_account(
        &self,
        project_id: &str,
        service_account_id: &str,
    ) -> ApiResponseOrError<DeletionStatus> {
        self.delete(
            endpoints::DELETE_PROJECT_SERVICE_ACCOUNT.render(&[project_id, service_account_id])?,
        )
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn create_response_has_key() {
        let created: ProjectServiceAccountCreateResponse = serde_json::from_value(json!({
            "object": "organization.project.service_account",
            "id": "svc_acct_abc",
            "name": "Production App",
            "role": "member",
            "created_at": 1711471533,
            "api_key": {
                "object": "organization.project.service_account.api_key",
                "value": "sk-abcdefghijklmnop123",
                "name": "Secret Key",
                "created_at": 1711471533,
                "id": "key_abc"
            }
        }))
        .unwrap();
        assert_eq!(created.api_key.value, "sk-abcdefghijklmnop123");
        assert_eq!(created.role, ProjectRole::Member);
    }
}
