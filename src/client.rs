//! High-level client: `ScxClient` with region-bound method group accessors.
//!
//! Each API area has its own method group in `domain/<name>/client.rs`.
//! This module keeps the builder, the credential set, the shared dispatch path
//! and the accessor methods.

use crate::auth::{Credentials, Token, TokenKind};
use crate::domain::auction::client::Auction;
use crate::domain::character::client::Characters;
use crate::domain::clan::client::Clans;
use crate::domain::emission::client::Emissions;
use crate::domain::friend::client::Friends;
use crate::domain::region::client::Regions;
use crate::endpoint::{Endpoint, RequestParams};
use crate::error::{HttpError, SdkError};
use crate::http::{HttpOptions, ScxHttp};
use crate::network::Server;

use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION};
use serde_json::Value;
use std::fmt;
use std::str::FromStr;
use std::time::Duration;

// Re-export method group types for convenience.
pub use crate::domain::auction::client::Auction as AuctionGroup;
pub use crate::domain::character::client::Characters as CharactersGroup;
pub use crate::domain::clan::client::Clans as ClansGroup;
pub use crate::domain::emission::client::Emissions as EmissionsGroup;
pub use crate::domain::friend::client::Friends as FriendsGroup;
pub use crate::domain::region::client::Regions as RegionsGroup;

/// The primary entry point for the STALCRAFT: X API.
///
/// Method groups are created per call and bound to a region:
/// `client.clans("EU").get_all(..)`, `client.auction("RU").get_item_lots(..)`.
#[derive(Debug, Clone)]
pub struct ScxClient {
    pub(crate) http: ScxHttp,
    pub(crate) credentials: Credentials,
    server: Server,
}

impl ScxClient {
    pub fn builder() -> ScxClientBuilder {
        ScxClientBuilder::default()
    }

    /// Client for `server` with the given tokens and default settings.
    pub fn new<I>(server: Server, tokens: I) -> Result<Self, SdkError>
    where
        I: IntoIterator<Item = Token>,
    {
        Self::builder().server(server).tokens(tokens).build()
    }

    pub fn server(&self) -> Server {
        self.server
    }

    pub fn base_url(&self) -> &str {
        self.http.base_url()
    }

    pub fn credentials(&self) -> &Credentials {
        &self.credentials
    }

    /// Stored token of the given kind.
    pub fn get_token(&self, kind: TokenKind) -> Result<&str, SdkError> {
        self.credentials.require(kind)
    }

    // ── Method group accessors ───────────────────────────────────────────

    pub fn regions(&self) -> Regions<'_> {
        Regions { client: self }
    }

    pub fn emissions(&self, region: impl Into<String>) -> Emissions<'_> {
        Emissions {
            client: self,
            region: region.into(),
        }
    }

    pub fn friends(&self, region: impl Into<String>) -> Friends<'_> {
        Friends {
            client: self,
            region: region.into(),
        }
    }

    pub fn auction(&self, region: impl Into<String>) -> Auction<'_> {
        Auction {
            client: self,
            region: region.into(),
        }
    }

    pub fn characters(&self, region: impl Into<String>) -> Characters<'_> {
        Characters {
            client: self,
            region: region.into(),
        }
    }

    pub fn clans(&self, region: impl Into<String>) -> Clans<'_> {
        Clans {
            client: self,
            region: region.into(),
        }
    }

    /// Look up a method group by name (`"clans"`, `"auction"`, ...).
    ///
    /// `region` is ignored by `regions`. Every other group binds it and fails
    /// with `Validation` when it is `None` or empty.
    pub fn method_group(&self, name: &str, region: Option<&str>) -> Result<MethodGroup<'_>, SdkError> {
        let group = GroupName::from_str(name)?;
        if group == GroupName::Regions {
            return Ok(MethodGroup::Regions(self.regions()));
        }

        let region = match region.map(str::trim) {
            Some(r) if !r.is_empty() => r,
            _ => {
                return Err(SdkError::Validation(format!(
                    "method group '{}' needs a region",
                    group
                )))
            }
        };

        Ok(match group {
            GroupName::Regions => MethodGroup::Regions(self.regions()),
            GroupName::Emissions => MethodGroup::Emissions(self.emissions(region)),
            GroupName::Friends => MethodGroup::Friends(self.friends(region)),
            GroupName::Auction => MethodGroup::Auction(self.auction(region)),
            GroupName::Characters => MethodGroup::Characters(self.characters(region)),
            GroupName::Clans => MethodGroup::Clans(self.clans(region)),
        })
    }

    // ── Dispatch ─────────────────────────────────────────────────────────

    /// Resolve the token, GET `path`, unwrap the envelope.
    ///
    /// Fails with `MissingCredential` before touching the network.
    pub(crate) async fn dispatch(
        &self,
        endpoint: &Endpoint,
        path: &str,
        params: RequestParams,
    ) -> Result<Value, SdkError> {
        let token = endpoint.resolve_token(params.token(), &self.credentials)?;
        let headers = token.map(bearer_headers).transpose()?;

        tracing::debug!(endpoint = endpoint.name, path, authorized = headers.is_some(), "Dispatching");

        let body = self.http.get(path, headers, params.query()).await?;
        endpoint.unwrap_payload(body)
    }
}

fn bearer_headers(token: &str) -> Result<HeaderMap, HttpError> {
    let mut value = HeaderValue::from_str(&format!("Bearer {}", token))
        .map_err(|e| HttpError::InvalidHeader(format!("Invalid bearer token: {}", e)))?;
    value.set_sensitive(true);

    let mut headers = HeaderMap::new();
    headers.insert(AUTHORIZATION, value);
    Ok(headers)
}

// ═════════════════════════════════════════════════════════════════════════════
// Name-based group lookup
// ═════════════════════════════════════════════════════════════════════════════

/// Names of the available method groups.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GroupName {
    Regions,
    Emissions,
    Friends,
    Auction,
    Characters,
    Clans,
}

impl GroupName {
    pub const ALL: [GroupName; 6] = [
        Self::Regions,
        Self::Emissions,
        Self::Friends,
        Self::Auction,
        Self::Characters,
        Self::Clans,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Regions => "regions",
            Self::Emissions => "emissions",
            Self::Friends => "friends",
            Self::Auction => "auction",
            Self::Characters => "characters",
            Self::Clans => "clans",
        }
    }
}

impl fmt::Display for GroupName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for GroupName {
    type Err = SdkError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|g| g.as_str() == s)
            .ok_or_else(|| SdkError::InvalidMethodGroup(s.to_string()))
    }
}

/// A method group obtained through [`ScxClient::method_group`].
pub enum MethodGroup<'a> {
    Regions(Regions<'a>),
    Emissions(Emissions<'a>),
    Friends(Friends<'a>),
    Auction(Auction<'a>),
    Characters(Characters<'a>),
    Clans(Clans<'a>),
}

impl MethodGroup<'_> {
    pub fn name(&self) -> GroupName {
        match self {
            Self::Regions(_) => GroupName::Regions,
            Self::Emissions(_) => GroupName::Emissions,
            Self::Friends(_) => GroupName::Friends,
            Self::Auction(_) => GroupName::Auction,
            Self::Characters(_) => GroupName::Characters,
            Self::Clans(_) => GroupName::Clans,
        }
    }
}

// ═════════════════════════════════════════════════════════════════════════════
// Builder
// ═════════════════════════════════════════════════════════════════════════════

pub struct ScxClientBuilder {
    server: Result<Server, SdkError>,
    base_url: Option<String>,
    options: HttpOptions,
    credentials: Credentials,
}

impl Default for ScxClientBuilder {
    fn default() -> Self {
        Self {
            server: Ok(Server::default()),
            base_url: None,
            options: HttpOptions::default(),
            credentials: Credentials::default(),
        }
    }
}

impl ScxClientBuilder {
    pub fn server(mut self, server: Server) -> Self {
        self.server = Ok(server);
        self
    }

    /// Select the server by name (`demo`, `production`, `dapi`, `eapi`).
    /// An unknown name makes [`build`](Self::build) fail with `InvalidServer`.
    pub fn server_name(mut self, name: &str) -> Self {
        self.server = name.parse();
        self
    }

    /// Override the server URL (proxies, mock servers).
    pub fn base_url(mut self, url: &str) -> Self {
        self.base_url = Some(url.to_string());
        self
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.options.timeout = timeout;
        self
    }

    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.options.user_agent = user_agent.into();
        self
    }

    /// Add a default header to all requests.
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.options.headers.push((name.into(), value.into()));
        self
    }

    /// Store a token. A later token of the same kind replaces it.
    pub fn token(mut self, token: Token) -> Self {
        self.credentials.insert(token);
        self
    }

    pub fn tokens<I>(mut self, tokens: I) -> Self
    where
        I: IntoIterator<Item = Token>,
    {
        for token in tokens {
            self.credentials.insert(token);
        }
        self
    }

    pub fn build(self) -> Result<ScxClient, SdkError> {
        let server = self.server?;
        let base_url = self.base_url.unwrap_or_else(|| server.base_url());

        tracing::debug!(
            server = %server,
            base_url = %base_url,
            user_token = self.credentials.contains(TokenKind::User),
            application_token = self.credentials.contains(TokenKind::Application),
            "Building API client"
        );

        Ok(ScxClient {
            http: ScxHttp::with_options(&base_url, self.options)?,
            credentials: self.credentials,
            server,
        })
    }
}
