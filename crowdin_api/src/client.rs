//! HTTP transport shared by every Crowdin service.

use std::path::Path;
use std::sync::Arc;

use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, CONTENT_TYPE, ETAG, IF_NONE_MATCH};
use reqwest::{Method, StatusCode};
use serde::Serialize;
use url::Url;

use crate::{
    envelope::{self, IntoData},
    errors::map_error,
    patch::build_patch_body,
    query::Query,
    types::Pagination,
    upload::{content_type_for, file_name_header, file_name_of, FILE_NAME_HEADER},
    ClientConfig, Error,
};

/// Metadata of one completed call.
///
/// Returned next to the decoded payload on success and embedded in
/// [`Error`] on API failures, so the status is inspectable either way.
#[derive(Debug, Clone)]
pub struct Response {
    /// HTTP status code.
    pub status: StatusCode,
    /// Raw response headers.
    pub headers: HeaderMap,
    /// Pagination of list replies; zero for everything else.
    pub pagination: Pagination,
}

impl Response {
    pub fn new(status: StatusCode, headers: HeaderMap) -> Self {
        Self {
            status,
            headers,
            pagination: Pagination::default(),
        }
    }

    /// A header value, if present and valid UTF-8.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).and_then(|v| v.to_str().ok())
    }

    /// The `ETag` header, used for conditional builds.
    pub fn etag(&self) -> Option<&str> {
        self.headers.get(ETAG).and_then(|v| v.to_str().ok())
    }
}

enum RequestBody {
    Empty,
    Json(Vec<u8>),
    Stream(reqwest::Body),
}

/// HTTP client for the Crowdin API v2.
///
/// Cheap to clone and safe to share between tasks: the only state is the
/// immutable configuration and reqwest's connection pool. Calls are never
/// retried. Dropping a call's future aborts the in-flight request.
#[derive(Clone, Debug)]
pub struct Client {
    http: reqwest::Client,
    config: Arc<ClientConfig>,
    base_url: String,
}

impl Client {
    /// Creates a client for crowdin.com authenticated with `token`.
    pub fn new(token: &str) -> Result<Self, Error> {
        Self::from_config(ClientConfig::new(token))
    }

    /// Creates a client with a custom base URL. Used for testing with wiremock.
    pub fn with_base_url(base_url: &str, token: &str) -> Result<Self, Error> {
        Self::from_config(ClientConfig::new(token).with_base_url(base_url))
    }

    /// Creates a client from a prepared configuration.
    pub fn from_config(config: ClientConfig) -> Result<Self, Error> {
        config.validate()?;
        let mut builder = reqwest::Client::builder().user_agent(config.user_agent());
        if let Some(timeout) = config.timeout() {
            builder = builder.timeout(timeout);
        }
        let http = builder.build().map_err(|e| {
            tracing::error!("Failed to build HTTP client: {}", e);
            Error::Request(e)
        })?;
        let base_url = config.base_url();
        Ok(Self {
            http,
            config: Arc::new(config),
            base_url,
        })
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn get_url(&self, path: &str, query: Option<&dyn Query>) -> Result<Url, Error> {
        let mut raw = format!("{}{}", self.base_url, path);
        if let Some(query) = query {
            let encoded = query.encode();
            if !encoded.is_empty() {
                raw.push(if path.contains('?') { '&' } else { '?' });
                raw.push_str(&encoded);
            }
        }
        Url::parse(&raw).map_err(|e| {
            tracing::error!("Invalid URL constructed: {}", e);
            Error::Url(e)
        })
    }

    async fn execute(
        &self,
        method: Method,
        url: Url,
        body: RequestBody,
        headers: HeaderMap,
    ) -> Result<(Response, Vec<u8>), Error> {
        let conditional = headers.contains_key(IF_NONE_MATCH);
        let mut request = self
            .http
            .request(method.clone(), url.clone())
            .bearer_auth(self.config.token())
            .header(ACCEPT, "application/json");
        request = match body {
            RequestBody::Empty => request,
            RequestBody::Json(bytes) => request
                .header(CONTENT_TYPE, "application/json")
                .body(bytes),
            RequestBody::Stream(stream) => request.body(stream),
        };
        request = request.headers(headers);

        tracing::debug!(%method, %url, "sending request");
        let resp = request.send().await.map_err(|e| {
            tracing::error!("Failed to send {} {}: {}", method, url, e);
            Error::Request(e)
        })?;

        let status = resp.status();
        let headers = resp.headers().clone();
        let body = resp
            .bytes()
            .await
            .map_err(|e| {
                tracing::error!("Failed to read response body: {}", e);
                Error::Request(e)
            })?
            .to_vec();
        tracing::debug!(%method, %url, status = status.as_u16(), "received response");

        let mut response = Response::new(status, headers);
        if status.is_success() || (conditional && status == StatusCode::NOT_MODIFIED) {
            return Ok((response, body));
        }

        response.pagination = envelope::probe_pagination(&body);
        tracing::error!(
            "Request failed with status {}: {}",
            status,
            truncate_body(&body)
        );
        Err(map_error(response, &body))
    }

    async fn send_decoded<E: IntoData>(
        &self,
        method: Method,
        url: Url,
        body: RequestBody,
        headers: HeaderMap,
    ) -> Result<(E::Output, Response), Error> {
        let (mut response, body) = self.execute(method, url, body, headers).await?;
        let data = decode_logged::<E>(&body, &mut response)?;
        Ok((data, response))
    }

    async fn send_optional<E: IntoData>(
        &self,
        method: Method,
        url: Url,
        body: RequestBody,
    ) -> Result<(Option<E::Output>, Response), Error> {
        let (mut response, body) = self.execute(method, url, body, HeaderMap::new()).await?;
        if envelope::is_empty_body(&body) {
            return Ok((None, response));
        }
        let data = decode_logged::<E>(&body, &mut response)?;
        Ok((Some(data), response))
    }

    /// `GET path[?query]`. `None` options send no query string.
    pub async fn get<E: IntoData>(
        &self,
        path: &str,
        options: Option<&dyn Query>,
    ) -> Result<(E::Output, Response), Error> {
        let url = self.get_url(path, options)?;
        self.send_decoded::<E>(Method::GET, url, RequestBody::Empty, HeaderMap::new())
            .await
    }

    /// `POST path` with a JSON body.
    pub async fn post<E: IntoData, B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<(E::Output, Response), Error> {
        let url = self.get_url(path, None)?;
        let body = json_body(body)?;
        self.send_decoded::<E>(Method::POST, url, body, HeaderMap::new())
            .await
    }

    /// `POST path` with `If-None-Match: <etag>` when an ETag is given.
    ///
    /// A `304 Not Modified` reply yields `None` with the status in the response.
    pub async fn post_conditional<E: IntoData, B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
        etag: Option<&str>,
    ) -> Result<(Option<E::Output>, Response), Error> {
        let url = self.get_url(path, None)?;
        let body = json_body(body)?;
        let mut headers = HeaderMap::new();
        if let Some(etag) = etag {
            let value = HeaderValue::from_str(etag)
                .map_err(|e| Error::InvalidRequest(format!("invalid etag: {}", e)))?;
            headers.insert(IF_NONE_MATCH, value);
        }
        let (mut response, body) = self.execute(Method::POST, url, body, headers).await?;
        if response.status == StatusCode::NOT_MODIFIED {
            return Ok((None, response));
        }
        let data = decode_logged::<E>(&body, &mut response)?;
        Ok((Some(data), response))
    }

    /// `PUT path` with a JSON body.
    pub async fn put<E: IntoData, B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<(E::Output, Response), Error> {
        let url = self.get_url(path, None)?;
        let body = json_body(body)?;
        self.send_decoded::<E>(Method::PUT, url, body, HeaderMap::new())
            .await
    }

    /// `PATCH path` with an ordered list of patch operations.
    ///
    /// An empty list fails before anything is sent.
    pub async fn patch<E: IntoData>(
        &self,
        path: &str,
        operations: &[crate::PatchOperation],
    ) -> Result<(E::Output, Response), Error> {
        let body = RequestBody::Json(build_patch_body(operations)?);
        let url = self.get_url(path, None)?;
        self.send_decoded::<E>(Method::PATCH, url, body, HeaderMap::new())
            .await
    }

    /// `DELETE path`, expecting no content.
    pub async fn delete(&self, path: &str) -> Result<Response, Error> {
        let url = self.get_url(path, None)?;
        let (response, _) = self
            .execute(Method::DELETE, url, RequestBody::Empty, HeaderMap::new())
            .await?;
        Ok(response)
    }

    /// `DELETE path` with a JSON body, for bulk deletions that may echo an
    /// envelope. A `204` or empty reply yields `None`.
    pub async fn delete_with_body<E: IntoData, B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<(Option<E::Output>, Response), Error> {
        let url = self.get_url(path, None)?;
        let body = json_body(body)?;
        self.send_optional::<E>(Method::DELETE, url, body).await
    }

    /// `DELETE path[?query]`, for delete-by-filter endpoints that may echo an
    /// envelope. A `204` or empty reply yields `None`.
    pub async fn delete_with_options<E: IntoData>(
        &self,
        path: &str,
        options: Option<&dyn Query>,
    ) -> Result<(Option<E::Output>, Response), Error> {
        let url = self.get_url(path, options)?;
        self.send_optional::<E>(Method::DELETE, url, RequestBody::Empty)
            .await
    }

    /// `POST path` streaming the file at `file` as the raw body.
    ///
    /// Sets `Content-Type` from the file extension and the file name header;
    /// `extra_headers` are added last and may override both.
    pub async fn upload<E: IntoData>(
        &self,
        path: &str,
        file: &Path,
        extra_headers: HeaderMap,
    ) -> Result<(E::Output, Response), Error> {
        let file_name = file_name_of(file)?;
        let content_type = HeaderValue::from_str(content_type_for(file).as_ref())
            .map_err(|e| Error::InvalidRequest(format!("invalid content type: {}", e)))?;
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, content_type);
        headers.insert(FILE_NAME_HEADER, file_name_header(file_name)?);
        headers.extend(extra_headers);

        let url = self.get_url(path, None)?;
        let handle = tokio::fs::File::open(file).await.map_err(|e| {
            tracing::error!("Failed to open {}: {}", file.display(), e);
            Error::Io(e)
        })?;
        let body = RequestBody::Stream(reqwest::Body::from(handle));
        self.send_decoded::<E>(Method::POST, url, body, headers)
            .await
    }
}

fn decode_logged<E: IntoData>(body: &[u8], response: &mut Response) -> Result<E::Output, Error> {
    envelope::decode::<E>(body, response).map_err(|e| {
        tracing::error!("Failed to parse envelope: {}. Body: {}", e, truncate_body(body));
        e
    })
}

fn json_body<B: Serialize + ?Sized>(body: &B) -> Result<RequestBody, Error> {
    serde_json::to_vec(body)
        .map(RequestBody::Json)
        .map_err(Error::Encode)
}

fn truncate_body(body: &[u8]) -> String {
    const MAX: usize = 2000;
    let text = String::from_utf8_lossy(body);
    if text.len() <= MAX {
        return text.into_owned();
    }
    let mut end = MAX;
    while !text.is_char_boundary(end) {
        end -= 1;
    }
    format!("{}...[truncated]", &text[..end])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::query::{ListOptions, Paginate};

    fn client() -> Client {
        Client::with_base_url("https://example.com/", "token").unwrap()
    }

    #[test]
    fn url_without_options_has_no_query() {
        let url = client().get_url("/api/v2/projects", None).unwrap();
        assert_eq!(url.as_str(), "https://example.com/api/v2/projects");
        assert_eq!(url.query(), None);
    }

    #[test]
    fn empty_options_do_not_add_question_mark() {
        let options = ListOptions::default();
        let url = client()
            .get_url("/api/v2/projects", Some(&options as &dyn Query))
            .unwrap();
        assert_eq!(url.as_str(), "https://example.com/api/v2/projects");
    }

    #[test]
    fn options_are_appended_after_existing_query() {
        let options = ListOptions::default().with_limit(5);
        let url = client()
            .get_url("/api/v2/storages?force=true", Some(&options as &dyn Query))
            .unwrap();
        assert_eq!(url.query(), Some("force=true&limit=5"));
    }

    #[test]
    fn truncate_body_respects_char_boundaries() {
        let body = "é".repeat(1500);
        let truncated = truncate_body(body.as_bytes());
        assert!(truncated.ends_with("...[truncated]"));
        assert!(truncated.len() <= 2000 + "...[truncated]".len());
        assert_eq!(truncate_body(b"short"), "short");
    }

    #[test]
    fn response_exposes_etag_and_headers() {
        let mut headers = HeaderMap::new();
        headers.insert(ETAG, HeaderValue::from_static("\"abc\""));
        let response = Response::new(StatusCode::OK, headers);
        assert_eq!(response.etag(), Some("\"abc\""));
        assert_eq!(response.header("etag"), Some("\"abc\""));
        assert_eq!(response.pagination, Pagination::default());
    }

    #[test]
    fn client_is_shareable_across_tasks() {
        fn assert_send_sync<T: Send + Sync + Clone>() {}
        assert_send_sync::<Client>();
    }
}
