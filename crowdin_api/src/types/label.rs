//! Labels and the strings they are attached to.

use serde::{Deserialize, Serialize};

use super::AnyValue;
use crate::Error;

/// Numeric identifier of a label.
pub type LabelID = u64;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Label {
    pub id: LabelID,
    pub title: String,
    #[serde(default)]
    pub is_system: bool,
}

/// Body of `POST /api/v2/projects/{projectId}/labels`.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LabelAddRequest {
    pub title: String,
}

impl LabelAddRequest {
    pub fn new(title: &str) -> Self {
        Self {
            title: title.to_string(),
        }
    }

    pub fn validate(&self) -> Result<(), Error> {
        if self.title.trim().is_empty() {
            return Err(Error::InvalidRequest("title is required".to_string()));
        }
        Ok(())
    }
}

/// Body of `POST /api/v2/projects/{projectId}/labels/{labelId}/strings`.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AssignLabelRequest {
    pub string_ids: Vec<u64>,
}

/// A source string, as echoed by label assignment endpoints.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SourceString {
    pub id: u64,
    pub project_id: u64,
    pub identifier: Option<String>,
    /// Plain text, or an object of plural forms.
    #[serde(default)]
    pub text: AnyValue,
    #[serde(default)]
    pub label_ids: Vec<LabelID>,
}
