//! Envelope decoding: from a raw body to the typed payload it wraps.

use serde::de::DeserializeOwned;
use serde::Deserialize;

use crate::{
    types::{BulkEnvelope, BulkResult, Envelope, ListEnvelope, Pagination},
    Error, Response,
};

/// A response envelope that can be unwrapped into its payload.
///
/// Implemented once per envelope shape, so the single and double `data`
/// unwrapping is shared by every resource type.
pub trait IntoData: DeserializeOwned {
    /// The payload handed back to callers.
    type Output;

    /// Pagination carried by the envelope, if it is a list.
    fn pagination(&self) -> Option<Pagination> {
        None
    }

    /// Strips the envelope.
    fn into_data(self) -> Self::Output;
}

impl<T: DeserializeOwned> IntoData for Envelope<T> {
    type Output = T;

    fn into_data(self) -> T {
        self.data
    }
}

impl<T: DeserializeOwned> IntoData for ListEnvelope<T> {
    type Output = Vec<T>;

    fn pagination(&self) -> Option<Pagination> {
        Some(self.pagination)
    }

    fn into_data(self) -> Vec<T> {
        self.data.into_iter().map(|item| item.data).collect()
    }
}

impl<T: DeserializeOwned> IntoData for BulkEnvelope<T> {
    type Output = BulkResult<T>;

    fn pagination(&self) -> Option<Pagination> {
        self.pagination
    }

    fn into_data(self) -> BulkResult<T> {
        BulkResult {
            skipped: self.skipped.into_iter().map(|item| item.data).collect(),
            added: self.added.into_iter().map(|item| item.data).collect(),
        }
    }
}

/// Decodes `body` as the envelope `E` and returns its payload.
///
/// List pagination is copied into `response`. Anything that is not the
/// expected JSON, an empty body included, is an [`Error::Decode`].
pub fn decode<E: IntoData>(body: &[u8], response: &mut Response) -> Result<E::Output, Error> {
    let envelope = serde_json::from_slice::<E>(body).map_err(Error::Decode)?;
    if let Some(pagination) = envelope.pagination() {
        response.pagination = pagination;
    }
    Ok(envelope.into_data())
}

/// True when there is nothing to parse (204 replies and friends).
pub(crate) fn is_empty_body(body: &[u8]) -> bool {
    body.iter().all(u8::is_ascii_whitespace)
}

#[derive(Deserialize)]
struct PaginationProbe {
    pagination: Pagination,
}

/// Best-effort pagination read used on error paths. Never fails.
pub(crate) fn probe_pagination(body: &[u8]) -> Pagination {
    if is_empty_body(body) {
        return Pagination::default();
    }
    serde_json::from_slice::<PaginationProbe>(body)
        .map(|probe| probe.pagination)
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use reqwest::{header::HeaderMap, StatusCode};
    use serde::Deserialize;

    use super::*;
    use crate::types::{AnyValue, RawEnvelope};

    #[derive(Debug, Deserialize, PartialEq)]
    struct Item {
        id: u64,
    }

    fn response() -> Response {
        Response::new(StatusCode::OK, HeaderMap::new())
    }

    #[test]
    fn list_is_unwrapped_twice_in_order() {
        let body = br#"{"data":[{"data":{"id":1}},{"data":{"id":2}}],"pagination":{"offset":10,"limit":25}}"#;
        let mut resp = response();
        let items = decode::<ListEnvelope<Item>>(body, &mut resp).unwrap();
        assert_eq!(items, vec![Item { id: 1 }, Item { id: 2 }]);
        assert_eq!(
            resp.pagination,
            Pagination {
                offset: 10,
                limit: 25,
                total: None
            }
        );
    }

    #[test]
    fn single_envelope_leaves_pagination_untouched() {
        let mut resp = response();
        let item = decode::<Envelope<Item>>(br#"{"data":{"id":7}}"#, &mut resp).unwrap();
        assert_eq!(item, Item { id: 7 });
        assert_eq!(resp.pagination, Pagination::default());
    }

    #[test]
    fn invalid_json_is_an_error_not_a_panic() {
        let mut resp = response();
        let result = decode::<Envelope<Item>>(b"invalid json", &mut resp);
        assert!(matches!(result, Err(Error::Decode(_))));
    }

    #[test]
    fn empty_body_is_a_decode_error() {
        let mut resp = response();
        assert!(decode::<Envelope<Item>>(b"", &mut resp).is_err());
        assert!(is_empty_body(b" \n"));
    }

    #[test]
    fn raw_envelope_keeps_dynamic_shape() {
        let mut resp = response();
        let value = decode::<RawEnvelope>(br#"{"data":[]}"#, &mut resp).unwrap();
        assert_eq!(value, AnyValue::Array(vec![]));
        let value = decode::<RawEnvelope>(br#"{"data":null}"#, &mut resp).unwrap();
        assert!(value.is_null());
    }

    #[test]
    fn bulk_envelope_splits_skipped_and_added() {
        let body = br#"{"skipped":[{"data":{"id":1}}],"added":[{"data":{"id":2}},{"data":{"id":3}}],"pagination":{"offset":0,"limit":3}}"#;
        let mut resp = response();
        let result = decode::<BulkEnvelope<Item>>(body, &mut resp).unwrap();
        assert_eq!(result.skipped, vec![Item { id: 1 }]);
        assert_eq!(result.added, vec![Item { id: 2 }, Item { id: 3 }]);
        assert_eq!(resp.pagination.limit, 3);
    }

    #[test]
    fn probe_reads_pagination_from_partial_bodies() {
        let probed = probe_pagination(br#"{"error":{},"pagination":{"offset":5,"limit":1,"total":9}}"#);
        assert_eq!(probed.total, Some(9));
        assert_eq!(probe_pagination(b"not json"), Pagination::default());
    }
}
