//! Client configuration: credentials, target host and transport settings.

use std::fmt;
use std::time::Duration;

use crate::Error;

/// Host used when neither an organization nor a custom base URL is configured.
pub const DEFAULT_BASE_URL: &str = "https://api.crowdin.com";

/// Environment variable holding the personal access token.
pub const TOKEN_ENV: &str = "CROWDIN_API_TOKEN";
/// Environment variable holding the Enterprise organization name.
pub const ORGANIZATION_ENV: &str = "CROWDIN_ORGANIZATION";
/// Environment variable overriding the base URL.
pub const BASE_URL_ENV: &str = "CROWDIN_BASE_URL";

/// Immutable settings shared by every request a [`crate::Client`] sends.
///
/// Built once, then handed to [`crate::Client::from_config`]. No request
/// timeout is applied unless [`ClientConfig::with_timeout`] is called; callers
/// bound individual calls by dropping the future (e.g. `tokio::time::timeout`).
#[derive(Clone)]
pub struct ClientConfig {
    token: String,
    organization: Option<String>,
    base_url: Option<String>,
    user_agent: String,
    timeout: Option<Duration>,
}

impl ClientConfig {
    /// Creates a configuration for crowdin.com authenticated with `token`.
    pub fn new(token: &str) -> Self {
        Self {
            token: token.to_string(),
            organization: None,
            base_url: None,
            user_agent: default_user_agent(),
            timeout: None,
        }
    }

    /// Reads the configuration from `CROWDIN_API_TOKEN`, `CROWDIN_ORGANIZATION`
    /// and `CROWDIN_BASE_URL`. Only the token is required.
    pub fn from_env() -> Result<Self, Error> {
        let token = env_non_empty(TOKEN_ENV)
            .ok_or_else(|| Error::Config(format!("{} is not set", TOKEN_ENV)))?;
        let mut config = Self::new(&token);
        if let Some(organization) = env_non_empty(ORGANIZATION_ENV) {
            config = config.with_organization(&organization);
        }
        if let Some(base_url) = env_non_empty(BASE_URL_ENV) {
            config = config.with_base_url(&base_url);
        }
        Ok(config)
    }

    /// Targets a Crowdin Enterprise organization (`https://<org>.api.crowdin.com`).
    pub fn with_organization(mut self, organization: &str) -> Self {
        self.organization = Some(organization.to_string());
        self
    }

    /// Overrides the base URL. Takes precedence over the organization.
    /// Used for testing with wiremock.
    pub fn with_base_url(mut self, base_url: &str) -> Self {
        self.base_url = Some(base_url.to_string());
        self
    }

    /// Replaces the default `User-Agent` header value.
    pub fn with_user_agent(mut self, user_agent: &str) -> Self {
        self.user_agent = user_agent.to_string();
        self
    }

    /// Applies a whole-request timeout to every call.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// The bearer token sent in the `Authorization` header.
    pub fn token(&self) -> &str {
        &self.token
    }

    /// The Enterprise organization, if any.
    pub fn organization(&self) -> Option<&str> {
        self.organization.as_deref()
    }

    /// The `User-Agent` header value.
    pub fn user_agent(&self) -> &str {
        &self.user_agent
    }

    /// The optional per-request timeout.
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout
    }

    /// Resolves the base URL, without a trailing slash.
    pub fn base_url(&self) -> String {
        let base = match (&self.base_url, &self.organization) {
            (Some(base_url), _) => base_url.clone(),
            (None, Some(organization)) => format!("https://{}.api.crowdin.com", organization),
            (None, None) => DEFAULT_BASE_URL.to_string(),
        };
        base.trim_end_matches('/').to_string()
    }

    pub(crate) fn validate(&self) -> Result<(), Error> {
        if self.token.trim().is_empty() {
            return Err(Error::Config("token cannot be empty".to_string()));
        }
        Ok(())
    }
}

impl fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientConfig")
            .field("token", &"<redacted>")
            .field("organization", &self.organization)
            .field("base_url", &self.base_url)
            .field("user_agent", &self.user_agent)
            .field("timeout", &self.timeout)
            .finish()
    }
}

fn default_user_agent() -> String {
    format!("crowdin-api-rust/{}", env!("CARGO_PKG_VERSION"))
}

fn env_non_empty(key: &str) -> Option<String> {
    std::env::var(key)
        .ok()
        .map(|val| val.trim().to_string())
        .filter(|val| !val.is_empty())
}
