//! Authentication: access tokens and the per-client credential set.
//!
//! ## Credential Model
//!
//! - The API issues two kinds of bearer tokens: **user** tokens (OAuth on behalf of a
//!   player) and **application** tokens (client credentials of a registered app).
//! - Every endpoint declares which kind it needs. The client stores at most one token
//!   per kind; a token passed explicitly to a call always wins over the stored one.
//! - Token values are never printed by `Debug`.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::SdkError;

// ============================================================================
// Token kinds
// ============================================================================

/// Kind of access token accepted by the API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TokenKind {
    User,
    Application,
}

impl TokenKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::User => "user",
            Self::Application => "application",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// Token
// ============================================================================

/// An access token tagged with its kind.
#[derive(Clone, PartialEq, Eq)]
pub struct Token {
    value: String,
    kind: TokenKind,
}

impl Token {
    pub fn new(value: impl Into<String>, kind: TokenKind) -> Self {
        Self {
            value: value.into(),
            kind,
        }
    }

    pub fn user(value: impl Into<String>) -> Self {
        Self::new(value, TokenKind::User)
    }

    pub fn application(value: impl Into<String>) -> Self {
        Self::new(value, TokenKind::Application)
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn kind(&self) -> TokenKind {
        self.kind
    }
}

impl fmt::Debug for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Token")
            .field("value", &"<redacted>")
            .field("kind", &self.kind)
            .finish()
    }
}

// ============================================================================
// Credential set
// ============================================================================

/// One slot per [`TokenKind`].
///
/// Built once from the tokens handed to the client builder. When several tokens
/// of the same kind are supplied the last one wins.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct Credentials {
    user: Option<String>,
    application: Option<String>,
}

impl Credentials {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reduce a sequence of tokens into a credential set (last write wins).
    pub fn from_tokens<I>(tokens: I) -> Self
    where
        I: IntoIterator<Item = Token>,
    {
        let mut credentials = Self::default();
        for token in tokens {
            credentials.insert(token);
        }
        credentials
    }

    pub(crate) fn insert(&mut self, token: Token) {
        let slot = match token.kind {
            TokenKind::User => &mut self.user,
            TokenKind::Application => &mut self.application,
        };
        *slot = Some(token.value);
    }

    pub fn get(&self, kind: TokenKind) -> Option<&str> {
        match kind {
            TokenKind::User => self.user.as_deref(),
            TokenKind::Application => self.application.as_deref(),
        }
    }

    /// Like [`get`](Self::get) but fails with [`SdkError::MissingCredential`].
    pub fn require(&self, kind: TokenKind) -> Result<&str, SdkError> {
        self.get(kind).ok_or(SdkError::MissingCredential(kind))
    }

    pub fn contains(&self, kind: TokenKind) -> bool {
        self.get(kind).is_some()
    }

    pub fn is_empty(&self) -> bool {
        self.user.is_none() && self.application.is_none()
    }
}

impl From<Token> for Credentials {
    fn from(token: Token) -> Self {
        Self::from_tokens([token])
    }
}

impl FromIterator<Token> for Credentials {
    fn from_iter<I: IntoIterator<Item = Token>>(iter: I) -> Self {
        Self::from_tokens(iter)
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("user", &self.user.is_some())
            .field("application", &self.application.is_some())
            .finish()
    }
}
