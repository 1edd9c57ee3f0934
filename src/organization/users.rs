use serde::{Deserialize, Serialize};

use super::OrganizationRole;
use crate::{client::OpenAiClient, endpoints, ApiResponseOrError, DeletionStatus, ListResponse};

/// A member of the organization.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct User {
    pub object: String,
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: OrganizationRole,
    pub added_at: u64,
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
pub struct UserRoleUpdateRequest {
    pub role: OrganizationRole,
}

#[derive(Serialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct ListUsersQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub after: Option<String>,
    /// Only users with these addresses.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub emails: Vec<String>,
}

impl OpenAiClient {
    pub async fn list_users(&self, query: &ListUsersQuery) -> ApiResponseOrError<ListResponse<User>> {
        self.get_with_query(endpoints::LIST_USERS.render(&[])?, query)
            .await
    }

    pub async fn retrieve_user(&self, user_id: &str) -> ApiResponseOrError<User> {
        self.get(endpoints::RETRIEVE_USER.render(&[user_id])?).await
    }

    pub async fn modify_user(&self, user_id: &str, role: OrganizationRole) -> ApiResponseOrError<User> {
        self.post(
            endpoints::MODIFY_USER.render(&[user_id])?,
            UserRoleUpdateRequest { role },
        )
        .await
    }

    pub async fn delete_user(&self, user_id: &str) -> ApiResponseOrError<DeletionStatus> {
        self.delete(endpoints::DELETE_USER.render(&[user_id])?)
            .await
    }
}
