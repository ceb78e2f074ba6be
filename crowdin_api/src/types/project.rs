//! Project resources: the top-level container of files, strings and translations.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::AnyValue;
use crate::Error;

/// Numeric identifier of a project.
pub type ProjectID = u64;

/// Files-based project.
pub const PROJECT_TYPE_FILES: i64 = 0;
/// Strings-based project.
pub const PROJECT_TYPE_STRINGS: i64 = 1;

/// A project as returned by `/api/v2/projects`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: ProjectID,
    #[serde(rename = "type", default)]
    pub project_type: i64,
    pub user_id: u64,
    pub source_language_id: String,
    #[serde(default)]
    pub target_language_ids: Vec<String>,
    pub language_access_policy: Option<String>,
    pub name: String,
    pub identifier: Option<String>,
    pub description: Option<String>,
    pub visibility: Option<String>,
    pub logo: Option<String>,
    pub public_downloads: Option<bool>,
    pub web_url: Option<String>,
    /// Custom fields. Object when set, `[]` or `null` otherwise.
    #[serde(default)]
    pub fields: AnyValue,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
    pub last_activity: Option<DateTime<Utc>>,
}

/// Body of `POST /api/v2/projects`.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectsAddRequest {
    pub name: String,
    pub source_language_id: String,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub project_type: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub identifier: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_language_ids: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub visibility: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group_id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub public_downloads: Option<bool>,
}

impl ProjectsAddRequest {
    pub fn new(name: &str, source_language_id: &str) -> Self {
        Self {
            name: name.to_string(),
            source_language_id: source_language_id.to_string(),
            ..Default::default()
        }
    }

    pub fn validate(&self) -> Result<(), Error> {
        if self.name.trim().is_empty() {
            return Err(Error::InvalidRequest("name is required".to_string()));
        }
        if self.source_language_id.trim().is_empty() {
            return Err(Error::InvalidRequest(
                "sourceLanguageId is required".to_string(),
            ));
        }
        if let Some(project_type) = self.project_type {
            if ![PROJECT_TYPE_FILES, PROJECT_TYPE_STRINGS].contains(&project_type) {
                return Err(Error::InvalidRequest(format!(
                    "type must be 0 or 1, got {}",
                    project_type
                )));
            }
        }
        Ok(())
    }
}
