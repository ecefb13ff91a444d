//! Unified SDK error types.

use thiserror::Error;

use crate::auth::TokenKind;

/// Top-level SDK error.
#[derive(Error, Debug)]
pub enum SdkError {
    #[error("HTTP error: {0}")]
    Http(#[from] HttpError),

    #[error("The token of type '{0}' is missing from the API client")]
    MissingCredential(TokenKind),

    #[error("Unknown API method group: '{0}'")]
    InvalidMethodGroup(String),

    #[error("Invalid server value: '{0}'")]
    InvalidServer(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
}

/// HTTP-layer errors.
#[derive(Error, Debug)]
pub enum HttpError {
    #[cfg(feature = "http")]
    #[error("Request failed: {0}")]
    Reqwest(#[from] reqwest::Error),

    #[error("Server responded {status}: {body}")]
    Status { status: u16, body: String },

    #[error("Invalid header: {0}")]
    InvalidHeader(String),
}

impl HttpError {
    /// HTTP status code, when the server answered at all.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            #[cfg(feature = "http")]
            Self::Reqwest(e) => e.status().map(|s| s.as_u16()),
            Self::InvalidHeader(_) => None,
        }
    }
}
