//! Translation builds and their download links.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::AnyValue;
use crate::Error;

/// Numeric identifier of a project build.
pub type BuildID = u64;

/// Body of `POST /api/v2/projects/{projectId}/translations/builds`.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BuildProjectRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub branch_id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_language_ids: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub skip_untranslated_strings: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub skip_untranslated_files: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub export_approved_only: Option<bool>,
}

impl BuildProjectRequest {
    pub fn validate(&self) -> Result<(), Error> {
        if self.skip_untranslated_strings == Some(true)
            && self.skip_untranslated_files == Some(true)
        {
            return Err(Error::InvalidRequest(
                "skipUntranslatedStrings and skipUntranslatedFiles cannot both be set".to_string(),
            ));
        }
        Ok(())
    }
}

/// Body of `POST /api/v2/projects/{projectId}/translations/builds/files/{fileId}`.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BuildFileRequest {
    pub target_language_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub skip_untranslated_strings: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub export_approved_only: Option<bool>,
}

impl BuildFileRequest {
    pub fn new(target_language_id: &str) -> Self {
        Self {
            target_language_id: target_language_id.to_string(),
            ..Default::default()
        }
    }

    pub fn validate(&self) -> Result<(), Error> {
        if self.target_language_id.trim().is_empty() {
            return Err(Error::InvalidRequest(
                "targetLanguageId is required".to_string(),
            ));
        }
        Ok(())
    }
}

/// Status of an asynchronous project build.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TranslationBuild {
    pub id: BuildID,
    pub project_id: u64,
    pub status: String,
    pub progress: u8,
    #[serde(default)]
    pub attributes: AnyValue,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
    pub finished_at: Option<DateTime<Utc>>,
}

impl TranslationBuild {
    pub fn is_finished(&self) -> bool {
        self.status == "finished"
    }
}

/// Short-lived URL to download a build or a file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DownloadLink {
    pub url: String,
    pub expire_in: DateTime<Utc>,
}
