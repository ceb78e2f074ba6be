//! Error types for the API client and the mapping of failed responses.

use std::fmt;

use reqwest::StatusCode;
use serde::Deserialize;

use crate::Response;

/// Result alias used by every fallible operation in the crate.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Errors that can occur when building or executing API requests.
///
/// Three kinds exist. Construction errors (`InvalidRequest`, `EmptyPatch`,
/// `InvalidPatchOp`, `Config`, `Io`, `Encode`, `Url`) are returned before any
/// network interaction. Transport errors (`Request`, `Decode`) cover network
/// failures and bodies that are not the expected JSON. API errors (`Api`,
/// `Validation`, `Status`) carry the [`Response`] of a non-success reply.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// The request was rejected locally, e.g. a required field is missing.
    #[error("invalid request: {0}")]
    InvalidRequest(String),
    /// A partial update was attempted without any operation.
    #[error("patch body cannot be empty")]
    EmptyPatch,
    /// A patch operation name is not one of the accepted literals.
    #[error("invalid patch op {op:?}, allowed operations are: add, replace, remove, test")]
    InvalidPatchOp { op: String },
    /// The client configuration is unusable.
    #[error("configuration error: {0}")]
    Config(String),
    /// The request body could not be serialized.
    #[error("failed to encode request body: {0}")]
    Encode(#[source] serde_json::Error),
    /// The request URL could not be built.
    #[error("invalid url: {0}")]
    Url(#[from] url::ParseError),
    /// A file to upload could not be opened.
    #[error("failed to open upload: {0}")]
    Io(#[from] std::io::Error),
    /// Network failure, timeout, or a body that could not be read.
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),
    /// A body that should have been a JSON envelope could not be decoded.
    #[error("failed to decode response: {0}")]
    Decode(#[from] serde_json::Error),
    /// The API answered with `{"error": {"code", "message"}}`.
    #[error(transparent)]
    Api(ErrorResponse),
    /// The API rejected the payload field by field.
    #[error(transparent)]
    Validation(ValidationErrorResponse),
    /// Non-success status whose body did not match a known error shape.
    #[error("client: server returned {} status code", .response.status.as_u16())]
    Status { response: Box<Response> },
}

impl Error {
    /// True for errors detected before anything was sent.
    pub fn is_construction(&self) -> bool {
        matches!(
            self,
            Error::InvalidRequest(_)
                | Error::EmptyPatch
                | Error::InvalidPatchOp { .. }
                | Error::Config(_)
                | Error::Encode(_)
                | Error::Url(_)
                | Error::Io(_)
        )
    }

    /// The response of a failed call, when the server answered at all.
    pub fn response(&self) -> Option<&Response> {
        match self {
            Error::Api(e) => Some(&*e.response),
            Error::Validation(e) => Some(&*e.response),
            Error::Status { response } => Some(&**response),
            _ => None,
        }
    }

    /// HTTP status of the failed call, if one was received.
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            Error::Request(e) => e.status(),
            _ => self.response().map(|r| r.status),
        }
    }

    /// True when the server replied `404 Not Found`.
    pub fn is_not_found(&self) -> bool {
        self.status() == Some(StatusCode::NOT_FOUND)
    }

    /// The structured `{"error": ...}` payload, if that is what failed.
    pub fn as_api(&self) -> Option<&ErrorResponse> {
        match self {
            Error::Api(e) => Some(e),
            _ => None,
        }
    }
}

/// A single API error: `{"error": {"code": 404, "message": "Branch Not Found"}}`.
///
/// Renders as `"<code> <message>"`.
#[derive(Debug, Clone)]
pub struct ErrorResponse {
    /// The reply that carried the error.
    pub response: Box<Response>,
    /// Machine error code reported by the API.
    pub code: i64,
    /// Human readable message.
    pub message: String,
}

impl fmt::Display for ErrorResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.code, self.message)
    }
}

impl std::error::Error for ErrorResponse {}

/// One rejected field of a validation error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    /// Name of the offending request field.
    pub key: String,
    /// Machine code, e.g. `isEmpty`.
    pub code: String,
    /// Human readable message.
    pub message: String,
}

/// Field-level validation failure, usually with status 400.
///
/// Renders as `"<status> <key>: <message>; <key>: <message>"`.
#[derive(Debug, Clone)]
pub struct ValidationErrorResponse {
    /// The reply that carried the errors.
    pub response: Box<Response>,
    /// Every rejected field in wire order.
    pub errors: Vec<FieldError>,
}

impl fmt::Display for ValidationErrorResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.response.status.as_u16())?;
        for (i, error) in self.errors.iter().enumerate() {
            let sep = if i == 0 { " " } else { "; " };
            write!(f, "{}{}: {}", sep, error.key, error.message)?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationErrorResponse {}

#[derive(Deserialize)]
struct WireError {
    error: WireErrorDetail,
}

#[derive(Deserialize)]
struct WireErrorDetail {
    code: i64,
    message: String,
}

#[derive(Deserialize)]
struct WireValidation {
    errors: Vec<WireValidationItem>,
}

#[derive(Deserialize)]
struct WireValidationItem {
    error: WireFieldErrors,
}

#[derive(Deserialize)]
struct WireFieldErrors {
    key: String,
    #[serde(default)]
    errors: Vec<WireFieldError>,
}

#[derive(Deserialize)]
struct WireFieldError {
    code: String,
    message: String,
}

/// Turns a non-success reply into an [`Error`].
///
/// Tries the single-error envelope, then the validation envelope, and falls
/// back to [`Error::Status`] for empty or unrecognized bodies.
pub(crate) fn map_error(response: Response, body: &[u8]) -> Error {
    let response = Box::new(response);
    if let Ok(wire) = serde_json::from_slice::<WireError>(body) {
        return Error::Api(ErrorResponse {
            response,
            code: wire.error.code,
            message: wire.error.message,
        });
    }
    if let Ok(wire) = serde_json::from_slice::<WireValidation>(body) {
        let errors: Vec<FieldError> = wire
            .errors
            .into_iter()
            .flat_map(|item| {
                let key = item.error.key;
                item.error.errors.into_iter().map(move |e| FieldError {
                    key: key.clone(),
                    code: e.code,
                    message: e.message,
                })
            })
            .collect();
        if !errors.is_empty() {
            return Error::Validation(ValidationErrorResponse { response, errors });
        }
    }
    Error::Status { response }
}

#[cfg(test)]
mod tests {
    use reqwest::header::HeaderMap;

    use super::*;

    fn response(status: u16) -> Response {
        Response::new(StatusCode::from_u16(status).unwrap(), HeaderMap::new())
    }

    #[test]
    fn single_error_envelope_renders_code_and_message() {
        let body = br#"{"error":{"code":404,"message":"Branch Not Found"}}"#;
        let err = map_error(response(404), body);
        assert_eq!(err.to_string(), "404 Branch Not Found");
        assert!(err.is_not_found());
        let api = err.as_api().expect("api error");
        assert_eq!(api.code, 404);
        assert_eq!(api.message, "Branch Not Found");
    }

    #[test]
    fn empty_body_falls_back_to_status_error() {
        let err = map_error(response(500), b"");
        assert_eq!(err.to_string(), "client: server returned 500 status code");
        assert_eq!(err.status(), Some(StatusCode::INTERNAL_SERVER_ERROR));
        assert!(err.as_api().is_none());
    }

    #[test]
    fn html_error_page_falls_back_to_status_error() {
        let err = map_error(response(502), b"<html>Bad Gateway</html>");
        assert!(matches!(err, Error::Status { .. }));
        assert_eq!(err.to_string(), "client: server returned 502 status code");
    }

    #[test]
    fn validation_envelope_lists_every_field() {
        let body = br#"{"errors":[
            {"error":{"key":"name","errors":[{"code":"isEmpty","message":"Value is required"}]}},
            {"error":{"key":"sourceLanguageId","errors":[{"code":"notInArray","message":"Unknown language"}]}}
        ]}"#;
        let err = map_error(response(400), body);
        let Error::Validation(validation) = &err else {
            panic!("expected validation error, got {err:?}");
        };
        assert_eq!(validation.errors.len(), 2);
        assert_eq!(validation.errors[0].code, "isEmpty");
        assert_eq!(
            err.to_string(),
            "400 name: Value is required; sourceLanguageId: Unknown language"
        );
    }

    #[test]
    fn empty_validation_list_is_a_status_error() {
        let err = map_error(response(400), br#"{"errors":[]}"#);
        assert!(matches!(err, Error::Status { .. }));
    }

    #[test]
    fn construction_errors_are_distinguishable() {
        assert!(Error::EmptyPatch.is_construction());
        assert!(Error::InvalidRequest("name is required".into()).is_construction());
        assert!(!map_error(response(404), b"").is_construction());
        assert!(Error::EmptyPatch.response().is_none());
    }
}
