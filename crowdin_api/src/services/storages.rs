use std::path::Path;

use reqwest::header::HeaderMap;

use crate::{
    query::{ListOptions, Query},
    types::{Envelope, ListEnvelope, Storage, StorageID},
    Client, Error, Response,
};

/// `/api/v2/storages`.
pub struct StoragesService<'a> {
    client: &'a Client,
}

impl<'a> StoragesService<'a> {
    pub(crate) fn new(client: &'a Client) -> Self {
        Self { client }
    }

    /// Lists uploaded storages.
    pub async fn list(&self, options: Option<&ListOptions>) -> Result<(Vec<Storage>, Response), Error> {
        self.client
            .get::<ListEnvelope<Storage>>("/api/v2/storages", options.map(|o| o as &dyn Query))
            .await
    }

    /// Fetches a single storage by ID.
    pub async fn get(&self, storage_id: StorageID) -> Result<(Storage, Response), Error> {
        self.client
            .get::<Envelope<Storage>>(&format!("/api/v2/storages/{}", storage_id), None)
            .await
    }

    /// Uploads a file to a new storage. Zip archives are refused.
    pub async fn add(&self, file: &Path) -> Result<(Storage, Response), Error> {
        let is_zip = file
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case("zip"));
        if is_zip {
            return Err(Error::InvalidRequest(
                "zip archives are not supported".to_string(),
            ));
        }
        self.client
            .upload::<Envelope<Storage>>("/api/v2/storages", file, HeaderMap::new())
            .await
    }

    /// Deletes a storage.
    pub async fn delete(&self, storage_id: StorageID) -> Result<Response, Error> {
        self.client
            .delete(&format!("/api/v2/storages/{}", storage_id))
            .await
    }
}
