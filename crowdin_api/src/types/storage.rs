//! Temporary storages holding uploaded files until they are attached.

use serde::{Deserialize, Serialize};

/// Numeric identifier of a storage.
pub type StorageID = u64;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Storage {
    pub id: StorageID,
    pub file_name: String,
}
