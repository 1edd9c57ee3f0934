//! Audit logs: user actions and configuration changes within the organization.

use serde::{Deserialize, Serialize};

use crate::{client::OpenAiClient, endpoints, ApiResponseOrError, Extra, ListResponse};

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AuditLogEventType {
    #[serde(rename = "api_key.created")]
    ApiKeyCreated,
    #[serde(rename = "api_key.updated")]
    ApiKeyUpdated,
    #[serde(rename = "api_key.deleted")]
    ApiKeyDeleted,
    #[serde(rename = "checkpoint_permission.created")]
    CheckpointPermissionCreated,
    #[serde(rename = "checkpoint_permission.deleted")]
    CheckpointPermissionDeleted,
    #[serde(rename = "invite.sent")]
    InviteSent,
    #[serde(rename = "invite.accepted")]
    InviteAccepted,
    #[serde(rename = "invite.deleted")]
    InviteDeleted,
    #[serde(rename = "login.succeeded")]
    LoginSucceeded,
    #[serde(rename = "login.failed")]
    LoginFailed,
    #[serde(rename = "logout.succeeded")]
    LogoutSucceeded,
    #[serde(rename = "logout.failed")]
    LogoutFailed,
    #[serde(rename = "organization.updated")]
    OrganizationUpdated,
    #[serde(rename = "project.created")]
    ProjectCreated,
    #[serde(rename = "project.updated")]
    ProjectUpdated,
    #[serde(rename = "project.archived")]
    ProjectArchived,
    #[serde(rename = "rate_limit.updated")]
    RateLimitUpdated,
    #[serde(rename = "rate_limit.deleted")]
    RateLimitDeleted,
    #[serde(rename = "service_account.created")]
    ServiceAccountCreated,
    #[serde(rename = "service_account.updated")]
    ServiceAccountUpdated,
    #[serde(rename = "service_account.deleted")]
    ServiceAccountDeleted,
    #[serde(rename = "user.added")]
    UserAdded,
    #[serde(rename = "user.updated")]
    UserUpdated,
    #[serde(rename = "user.deleted")]
    UserDeleted,
    #[serde(rename = "certificate.created")]
    CertificateCreated,
    #[serde(rename = "certificate.updated")]
    CertificateUpdated,
    #[serde(rename = "certificate.deleted")]
    CertificateDeleted,
    #[serde(rename = "certificates.activated")]
    CertificatesActivated,
    #[serde(rename = "certificates.deactivated")]
    CertificatesDeactivated,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct AuditLogProject {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct AuditLogActorUser {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct AuditLogActorSession {
    pub user: AuditLogActorUser,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ip_address: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct AuditLogActorServiceAccount {
    pub id: String,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum AuditLogActorApiKey {
    User {
        id: String,
        user: AuditLogActorUser,
    },
    ServiceAccount {
        id: String,
        service_account: AuditLogActorServiceAccount,
    },
}

/// Who performed the action: a dashboard session or an API key.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum AuditLogActor {
    Session { session: AuditLogActorSession },
    ApiKey { api_key: AuditLogActorApiKey },
}

/// One audit log entry.
///
/// The event payload sits under a key named after the event type, e.g.
/// `"project.created": {...}`; it is kept in `extra` and read with [`AuditLog::details`].
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct AuditLog {
    pub id: String,
    #[serde(rename = "type")]
    pub event_type: AuditLogEventType,
    pub effective_at: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub project: Option<AuditLogProject>,
    pub actor: AuditLogActor,
    #[serde(flatten)]
    pub extra: Extra,
}

impl AuditLog {
    pub fn details(&self) -> Option<&serde_json::Value> {
        let key = serde_json::to_value(self.event_type).ok()?;
        self.extra.get(key.as_str()?)
    }
}

/// Unix-second bounds on `effective_at`.
#[derive(Serialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct EffectiveAt {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gt: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gte: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lt: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lte: Option<u64>,
}

#[derive(Serialize, Clone, Debug, Default, PartialEq)]
pub struct ListAuditLogsQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub effective_at: Option<EffectiveAt>,
    #[serde(rename = "project_ids[]", skip_serializing_if = "Vec::is_empty")]
    pub project_ids: Vec<String>,
    #[serde(rename = "event_types[]", skip_serializing_if = "Vec::is_empty")]
    pub event_types: Vec<AuditLogEventType>,
    #[serde(rename = "actor_ids[]", skip_serializing_if = "Vec::is_empty")]
    pub actor_ids: Vec<String>,
    #[serde(rename = "actor_emails[]", skip_serializing_if = "Vec::is_empty")]
    pub actor_emails: Vec<String>,
    #[serde(rename = "resource_ids[]", skip_serializing_if = "Vec::is_empty")]
    pub resource_ids: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub after: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub before: Option<String>,
}

impl ListAuditLogsQuery {
    pub fn event_type(mut self, event_type: AuditLogEventType) -> Self {
        self.event_types.push(event_type);
        self
    }

    pub fn project_id(mut self, project_id: impl Into<String>) -> Self {
        self.project_ids.push(project_id.into());
        self
    }

    pub fn effective_at(mut self, effective_at: EffectiveAt) -> Self {
        self.effective_at = Some(effective_at);
        self
    }
}

impl OpenAiClient {
    pub async fn list_audit_logs(
        &self,
        query: &ListAuditLogsQuery,
    ) -> ApiResponseOrError<ListResponse<AuditLog>> {
        self.get_with_query(endpoints::LIST_AUDIT_LOGS.render(&[])?, query)
            .await
    }
}
