//! Endpoint descriptors and credential routing.
//!
//! Every API method is described by a const [`Endpoint`]: the credential kind
//! it needs and the envelope key its payload is wrapped in, if any. The shared
//! dispatch path calls [`Endpoint::resolve_token`] before any network I/O, so a
//! missing credential never turns into an unauthenticated request.

use serde_json::Value;

use crate::auth::{Credentials, TokenKind};
use crate::error::SdkError;
use crate::shared::type_name;

// ─── Endpoint ────────────────────────────────────────────────────────────────

/// Static description of one API method.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Endpoint {
    /// `group.method`, used in logs and errors.
    pub name: &'static str,
    /// Credential kind the endpoint needs. `None` means public: no
    /// `Authorization` header is ever sent.
    pub requires: Option<TokenKind>,
    /// Envelope key holding the payload.
    pub unwrap: Option<&'static str>,
}

impl Endpoint {
    pub const fn new(name: &'static str) -> Self {
        Self {
            name,
            requires: None,
            unwrap: None,
        }
    }

    pub const fn requires(self, kind: TokenKind) -> Self {
        Self {
            requires: Some(kind),
            ..self
        }
    }

    pub const fn unwrap_key(self, key: &'static str) -> Self {
        Self {
            unwrap: Some(key),
            ..self
        }
    }

    /// Pick the bearer token for a call: explicit override, then the stored
    /// credential of the required kind, else `MissingCredential`.
    ///
    /// Public endpoints resolve to `None` regardless of the override.
    pub fn resolve_token<'a>(
        &self,
        token_override: Option<&'a str>,
        credentials: &'a Credentials,
    ) -> Result<Option<&'a str>, SdkError> {
        let Some(kind) = self.requires else {
            return Ok(None);
        };

        if let Some(token) = token_override {
            tracing::debug!(endpoint = self.name, kind = %kind, "Using token override");
            return Ok(Some(token));
        }

        match credentials.require(kind) {
            Ok(token) => Ok(Some(token)),
            Err(e) => {
                tracing::debug!(endpoint = self.name, kind = %kind, "Required token missing");
                Err(e)
            }
        }
    }

    /// Extract the payload from the response envelope.
    pub fn unwrap_payload(&self, body: Value) -> Result<Value, SdkError> {
        let Some(key) = self.unwrap else {
            return Ok(body);
        };

        match body {
            Value::Object(mut map) => map.remove(key).ok_or_else(|| {
                SdkError::Validation(format!("{}: response has no '{}' field", self.name, key))
            }),
            other => Err(SdkError::Validation(format!(
                "{}: expected an object with '{}', got {}",
                self.name,
                key,
                type_name(&other)
            ))),
        }
    }
}

/// Build a request path: `/{region}/{resource}` or `/{resource}`.
///
/// Surrounding slashes are trimmed and the region is percent-encoded, so
/// `"E U"` becomes `E%20U`. `resource` is taken as-is: callers encode their
/// own path parameters. An empty region is a `Validation` error.
pub fn resource_path(region: Option<&str>, resource: &str) -> Result<String, SdkError> {
    let resource = resource.trim_matches('/');
    match region.map(|r| r.trim_matches('/')) {
        Some("") => Err(SdkError::Validation(format!(
            "region is required for '{}'",
            resource
        ))),
        Some(r) => Ok(format!("/{}/{}", urlencoding::encode(r), resource)),
        None => Ok(format!("/{}", resource)),
    }
}

// ─── RequestParams ───────────────────────────────────────────────────────────

/// Per-call options: a token override and free-form query parameters.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct RequestParams {
    pub(crate) token: Option<String>,
    pub(crate) query: Vec<(String, String)>,
}

impl RequestParams {
    pub fn new() -> Self {
        Self::default()
    }

    /// Send this token instead of the stored one.
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    /// Add a query parameter.
    pub fn with_query(mut self, name: impl Into<String>, value: impl ToString) -> Self {
        self.query.push((name.into(), value.to_string()));
        self
    }

    pub fn with_limit(self, limit: u32) -> Self {
        self.with_query("limit", limit)
    }

    pub fn with_offset(self, offset: u32) -> Self {
        self.with_query("offset", offset)
    }

    /// Include the `additional` item data in auction responses.
    pub fn with_additional(self, additional: bool) -> Self {
        self.with_query("additional", additional)
    }

    /// Sort field for auction lots (e.g. `buyout_price`).
    pub fn with_sort(self, sort: impl Into<String>) -> Self {
        let sort: String = sort.into();
        self.with_query("sort", sort)
    }

    /// Sort order for auction lots (`asc` / `desc`).
    pub fn with_order(self, order: impl Into<String>) -> Self {
        let order: String = order.into();
        self.with_query("order", order)
    }

    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    pub fn query(&self) -> &[(String, String)] {
        &self.query
    }
}

impl std::fmt::Debug for RequestParams {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RequestParams")
            .field("token", &self.token.as_ref().map(|_| "<redacted>"))
            .field("query", &self.query)
            .finish()
    }
}
