use serde::{Deserialize, Serialize};

use crate::{
    client::OpenAiClient, endpoints, ApiResponseOrError, DeletionStatus, ListQuery, ListResponse,
};

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct AdminApiKeyOwner {
    #[serde(rename = "type")]
    pub owner_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub object: Option<String>,
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct AdminApiKey {
    pub object: String,
    pub id: String,
    pub name: String,
    pub redacted_value: String,
    /// Only present in the response that created the key.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    pub created_at: u64,
    #[serde(default)]
    pub last_used_at: Option<u64>,
    pub owner: AdminApiKeyOwner,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct CreateAdminApiKeyRequest {
    pub name: String,
}

impl OpenAiClient {
    pub async fn admin_api_keys_list(
        &self,
        query: &ListQuery,
    ) -> ApiResponseOrError<ListResponse<AdminApiKey>> {
        self.get_with_query(endpoints::ADMIN_API_KEYS_LIST.render(&[])?, query)
            .await
    }

    pub async fn admin_api_keys_create(&self, name: &str) -> ApiResponseOrError<AdminApiKey> {
        let request = CreateAdminApiKeyRequest {
            name: name.to_string(),
        };
        self.post(endpoints::ADMIN_API_KEYS_CREATE.render(&[])?, request)
            .await
    }

    pub async fn admin_api_keys_get(&self, key_id: &str) -> ApiResponseOrError<AdminApiKey> {
        self.get(endpoints::ADMIN_API_KEYS_GET.render(&[key_id])?)
            .await
    }

    pub async fn admin_api_keys_delete(&self, key_id: &str) -> ApiResponseOrError<DeletionStatus> {
        self.delete(endpoints::ADMIN_API_KEYS_DELETE.render(&[key_id])?)
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn created_key_carries_value() {
        let key: AdminApiKey = serde_json::from_value(json!({
            "object": "organization.admin_api_key",
            "id": "key_xyz",
            "name": "New Admin Key",
            "redacted_value": "sk-admin...xyz",
            "created_at": 1711471533,
            "last_used_at": null,
            "owner": {
                "type": "user",
                "object": "organization.user",
                "id": "user_123",
                "name": "John Doe",
                "created_at": 1711471533,
                "role": "owner"
            },
            "value": "sk-admin-1234abcd"
        }))
        .unwrap();
        assert_eq!(key.value.as_deref(), Some("sk-admin-1234abcd"));
        assert_eq!(key.last_used_at, None);
        assert_eq!(key.owner.owner_type, "user");
    }
}
