//! Version branches and branch merges.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::AnyValue;
use crate::Error;

/// Numeric identifier of a branch.
pub type BranchID = u64;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Branch {
    pub id: BranchID,
    pub project_id: u64,
    pub name: String,
    pub title: Option<String>,
    pub export_pattern: Option<String>,
    pub priority: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
}

/// Body of `POST /api/v2/projects/{projectId}/branches`.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BranchesAddRequest {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub export_pattern: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<String>,
}

impl BranchesAddRequest {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            ..Default::default()
        }
    }

    pub fn validate(&self) -> Result<(), Error> {
        if self.name.trim().is_empty() {
            return Err(Error::InvalidRequest("name is required".to_string()));
        }
        if let Some(priority) = &self.priority {
            if !["low", "normal", "high"].contains(&priority.as_str()) {
                return Err(Error::InvalidRequest(format!(
                    "priority must be one of low, normal, high, got {:?}",
                    priority
                )));
            }
        }
        Ok(())
    }
}

/// Body of `POST /api/v2/projects/{projectId}/branches/{branchId}/merges`.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BranchMergeRequest {
    pub source_branch_id: BranchID,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delete_after_merge: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dry_run: Option<bool>,
}

impl BranchMergeRequest {
    pub fn validate(&self) -> Result<(), Error> {
        if self.source_branch_id == 0 {
            return Err(Error::InvalidRequest(
                "sourceBranchId is required".to_string(),
            ));
        }
        Ok(())
    }
}

/// Status of an asynchronous branch merge.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BranchMerge {
    pub identifier: String,
    pub status: String,
    pub progress: u8,
    #[serde(default)]
    pub attributes: AnyValue,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
    pub started_at: Option<DateTime<Utc>>,
    pub finished_at: Option<DateTime<Utc>>,
}
