//! Project members.

use serde::{Deserialize, Serialize};

use super::AnyValue;
use crate::Error;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectMember {
    pub id: u64,
    pub username: String,
    pub full_name: Option<String>,
    pub role: Option<String>,
    pub avatar_url: Option<String>,
    /// Per-language permissions; an object, `[]` or `null` depending on role.
    #[serde(default)]
    pub permissions: AnyValue,
}

/// Body of `POST /api/v2/projects/{projectId}/members`. At least one of
/// `user_ids`, `usernames` or `emails` must be non-empty.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MembersAddRequest {
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub user_ids: Vec<u64>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub usernames: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub emails: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub manager_access: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub developer_access: Option<bool>,
}

/// Body of `PUT /api/v2/projects/{projectId}/members/{memberId}`. Replaces
/// the member's access wholesale; omitted fields are reset by the server.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MemberPermissionsRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub manager_access: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub developer_access: Option<bool>,
    /// Per-language roles, e.g. `{"uk": {"workflowStepId": "all"}}`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub permissions: Option<serde_json::Value>,
}

impl MembersAddRequest {
    pub fn validate(&self) -> Result<(), Error> {
        if self.user_ids.is_empty() && self.usernames.is_empty() && self.emails.is_empty() {
            return Err(Error::InvalidRequest(
                "one of userIds, usernames or emails is required".to_string(),
            ));
        }
        Ok(())
    }
}
