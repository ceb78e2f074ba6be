//! Envelope and pagination types shared by every endpoint.

use serde::{Deserialize, Serialize};

use super::AnyValue;

/// Page metadata attached to every list reply.
///
/// `offset` and `limit` echo the request (the server may clamp `limit`);
/// `total`, when present, counts every matching item server side.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Pagination {
    pub offset: u64,
    pub limit: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total: Option<u64>,
}

/// `{"data": T}`, the wrapping of every resource.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Envelope<T> {
    pub data: T,
}

/// `{"data": [{"data": T}, ...], "pagination": {...}}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListEnvelope<T> {
    pub data: Vec<Envelope<T>>,
    #[serde(default)]
    pub pagination: Pagination,
}

/// `{"data": <any JSON>}` for endpoints whose payload shape depends on server state.
pub type RawEnvelope = Envelope<AnyValue>;

/// `{"skipped": [{"data": T}], "added": [{"data": T}]}`, returned by bulk
/// additions that partially succeed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BulkEnvelope<T> {
    #[serde(default = "Vec::new")]
    pub skipped: Vec<Envelope<T>>,
    #[serde(default = "Vec::new")]
    pub added: Vec<Envelope<T>>,
    #[serde(default)]
    pub pagination: Option<Pagination>,
}

/// Both partitions of a bulk reply, unwrapped.
#[derive(Debug, Clone, PartialEq)]
pub struct BulkResult<T> {
    /// Items the server left untouched (e.g. already members).
    pub skipped: Vec<T>,
    /// Items the server created.
    pub added: Vec<T>,
}

impl<T> Default for BulkResult<T> {
    fn default() -> Self {
        Self {
            skipped: Vec::new(),
            added: Vec::new(),
        }
    }
}
