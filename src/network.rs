//! Server selection and URL constants for the STALCRAFT: X API.

use std::fmt;
use std::str::FromStr;

use crate::error::SdkError;

/// Domain shared by all API servers.
pub const API_DOMAIN: &str = "stalcraft.net";

/// Available API servers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Server {
    /// Demo server with fixed sample data and public demo tokens.
    #[default]
    Demo,
    Production,
}

impl Server {
    /// Subdomain of the server (`dapi` / `eapi`).
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Demo => "dapi",
            Self::Production => "eapi",
        }
    }

    pub fn base_url(&self) -> String {
        format!("https://{}.{}", self.as_str(), API_DOMAIN)
    }
}

impl fmt::Display for Server {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Server {
    type Err = SdkError;

    /// Accepts the selector names (`demo`, `production`) or the raw subdomains.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "demo" | "dapi" => Ok(Self::Demo),
            "production" | "eapi" => Ok(Self::Production),
            _ => Err(SdkError::InvalidServer(s.to_string())),
        }
    }
}
