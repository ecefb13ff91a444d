//! Low-level HTTP client: `ScxHttp`.
//!
//! A thin session bound to one API server. It knows nothing about endpoints or
//! credentials: callers pass a resource path, optional extra headers and query
//! parameters, and get the decoded JSON body back. Non-2xx responses are errors.

use crate::error::HttpError;

use reqwest::header::{HeaderMap, HeaderName, HeaderValue, ACCEPT, CONTENT_TYPE, USER_AGENT};
use reqwest::Client;
use serde_json::Value;
use std::time::Duration;

/// Default request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Client identifier sent with every request.
pub const DEFAULT_USER_AGENT: &str = concat!(
    "stalcraft-sdk/",
    env!("CARGO_PKG_VERSION"),
    " (+",
    env!("CARGO_PKG_REPOSITORY"),
    ")"
);

/// Transport options applied when the session is created.
#[derive(Debug, Clone)]
pub struct HttpOptions {
    pub timeout: Duration,
    pub user_agent: String,
    /// Extra default headers, sent with every request.
    pub headers: Vec<(String, String)>,
}

impl Default for HttpOptions {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            headers: Vec::new(),
        }
    }
}

/// Low-level HTTP session for the STALCRAFT: X REST API.
#[derive(Debug, Clone)]
pub struct ScxHttp {
    base_url: String,
    client: Client,
}

impl ScxHttp {
    pub fn new(base_url: &str) -> Result<Self, HttpError> {
        Self::with_options(base_url, HttpOptions::default())
    }

    pub fn with_options(base_url: &str, options: HttpOptions) -> Result<Self, HttpError> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        headers.insert(
            USER_AGENT,
            HeaderValue::from_str(&options.user_agent).map_err(|e| {
                HttpError::InvalidHeader(format!("Invalid user agent '{}': {}", options.user_agent, e))
            })?,
        );

        for (name, value) in &options.headers {
            let header_name = HeaderName::try_from(name.as_str()).map_err(|e| {
                HttpError::InvalidHeader(format!("Invalid header name '{}': {}", name, e))
            })?;
            let header_value = HeaderValue::from_str(value).map_err(|e| {
                HttpError::InvalidHeader(format!("Invalid header value for '{}': {}", name, e))
            })?;
            headers.insert(header_name, header_value);
        }

        let client = Client::builder()
            .timeout(options.timeout)
            .pool_max_idle_per_host(10)
            .default_headers(headers)
            .build()?;

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Join a resource path onto the base URL, normalizing slashes.
    pub fn url_for(&self, path: &str) -> String {
        let path = path.trim_matches('/');
        if path.is_empty() {
            self.base_url.clone()
        } else {
            format!("{}/{}", self.base_url, path)
        }
    }

    /// `GET {base_url}/{path}` and decode the JSON body.
    pub async fn get(
        &self,
        path: &str,
        headers: Option<HeaderMap>,
        query: &[(String, String)],
    ) -> Result<Value, HttpError> {
        let url = self.url_for(path);
        let mut req = self.client.get(&url);

        if let Some(h) = headers {
            req = req.headers(h);
        }
        if !query.is_empty() {
            req = req.query(query);
        }

        tracing::debug!(url = %url, params = query.len(), "GET");

        let resp = req.send().await?;
        let status = resp.status();

        if status.is_success() {
            tracing::debug!(url = %url, status = status.as_u16(), "Response received");
            return Ok(resp.json::<Value>().await?);
        }

        let body = resp.text().await.unwrap_or_default();
        tracing::warn!(url = %url, status = status.as_u16(), "Request failed");

        Err(HttpError::Status {
            status: status.as_u16(),
            body,
        })
    }
}
