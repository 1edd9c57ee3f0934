//! Organization administration: audit logs, admin keys, invites, users, projects
//! and mutual-TLS certificates.
//!
//! These endpoints need an admin key.

use serde::{Deserialize, Serialize};

pub mod admin_api_keys;
pub mod audit_logs;
pub mod certificates;
pub mod invites;
pub mod project_api_keys;
pub mod project_rate_limits;
pub mod project_service_accounts;
pub mod project_users;
pub mod projects;
pub mod users;

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum OrganizationRole {
    Owner,
    Reader,
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ProjectRole {
    Owner,
    Member,
}

/// `limit` and `after`, the only cursors the administration lists take.
#[derive(Serialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct AdminListQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub after: Option<String>,
}

impl AdminListQuery {
    pub fn limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }

    pub fn after(mut self, after: impl Into<String>) -> Self {
        self.after = Some(after.into());
        self
    }
}
