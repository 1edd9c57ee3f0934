use serde::{Deserialize, Serialize};

use super::{AdminListQuery, OrganizationRole, ProjectRole};
use crate::{client::OpenAiClient, endpoints, ApiResponseOrError, DeletionStatus, ListResponse};

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum InviteStatus {
    Accepted,
    Expired,
    Pending,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct InviteProject {
    pub id: String,
    pub role: ProjectRole,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct Invite {
    pub object: String,
    pub id: String,
    pub email: String,
    pub role: OrganizationRole,
    pub status: InviteStatus,
    pub invited_at: u64,
    pub expires_at: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub accepted_at: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub projects: Option<Vec<InviteProject>>,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct InviteRequest {
    pub email: String,
    pub role: OrganizationRole,
    /// Projects the invitee joins on acceptance.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub projects: Vec<InviteProject>,
}

impl InviteRequest {
    pub fn new(email: impl Into<String>, role: OrganizationRole) -> Self {
        InviteRequest {
            email: email.into(),
            role,
            projects: Vec::new(),
        }
    }

    pub fn project(mut self, id: impl Into<String>, role: ProjectRole) -> Self {
        self.projects.push(InviteProject { id: id.into(), role });
        self
    }
}

impl OpenAiClient {
    pub async fn list_invites(
        &self,
        query: &AdminListQuery,
    ) -> ApiResponseOrError<ListResponse<Invite>> {
        self.get_with_query(endpoints::LIST_INVITES.render(&[])?, query)
            .await
    }

    pub async fn invite_user(&self, request: InviteRequest) -> ApiResponseOrError<Invite> {
        self.post(endpoints::INVITE_USER.render(&[])?, request).await
    }

    pub async fn retrieve_invite(&self, invite_id: &str) -> ApiResponseOrError<Invite> {
        self.get(endpoints::RETRIEVE_INVITE.render(&[invite_id])?)
            .await
    }

    /// Only pending invites can be deleted.
    pub async fn delete_invite(&self, invite_id: &str) -> ApiResponseOrError<DeletionStatus> {
        self.delete(endpoints::DELETE_INVITE.render(&[invite_id])?)
            .await
    }
}
