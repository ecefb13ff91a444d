//! # STALCRAFT: X API SDK
//!
//! A typed Rust client for the STALCRAFT: X REST API.
//!
//! ## Architecture
//!
//! The SDK is organized in layers:
//!
//! 1. **Core**: Tokens, credential set, typed API records, endpoint descriptors
//! 2. **HTTP**: `ScxHttp`, a session bound to one API server
//! 3. **High-Level Client**: `ScxClient` with region-bound method groups
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use stalcraft_sdk::prelude::*;
//!
//! let client = ScxClient::builder()
//!     .server(Server::Demo)
//!     .tokens([Token::user(user_token), Token::application(app_token)])
//!     .build()?;
//!
//! let regions = client.regions().get_all(RequestParams::new()).await?;
//! let lots = client
//!     .auction("EU")
//!     .get_item_lots("1kv2", RequestParams::new().with_limit(20))
//!     .await?;
//!
//! // Per-call token override
//! let friends = client
//!     .friends("EU")
//!     .get_all("Test-1", RequestParams::new().with_token(other_user_token))
//!     .await?;
//! ```

// ── Layer 1: Core ────────────────────────────────────────────────────────────

/// Shared record trait and helpers.
pub mod shared;

/// Domain modules (vertical slices): records and method groups.
pub mod domain;

/// Endpoint descriptors, credential routing, per-call parameters.
pub mod endpoint;

/// Access tokens and the credential set.
pub mod auth;

/// Unified SDK error types.
pub mod error;

/// Server selection and URL constants.
pub mod network;

// ── Layer 2: HTTP ────────────────────────────────────────────────────────────

/// HTTP session bound to one API server.
#[cfg(feature = "http")]
pub mod http;

// ── Layer 3: High-Level Client ───────────────────────────────────────────────

/// `ScxClient`: the primary entry point.
#[cfg(feature = "http")]
pub mod client;

// ── Prelude ──────────────────────────────────────────────────────────────────

pub mod prelude {
    // Records
    pub use crate::domain::auction::{AuctionLot, AuctionRedeemedLot};
    pub use crate::domain::character::{
        CharacterClan, CharacterInfo, CharacterMeta, CharacterStat, CharacterStatType,
        FullCharacterInfo,
    };
    pub use crate::domain::clan::{Clan, ClanMember, ClanMemberRank};
    pub use crate::domain::emission::Emission;
    pub use crate::domain::region::Region;
    pub use crate::shared::ApiObject;

    // Auth
    pub use crate::auth::{Credentials, Token, TokenKind};

    // Endpoints
    pub use crate::endpoint::RequestParams;

    // Errors
    pub use crate::error::{HttpError, SdkError};

    // Network
    pub use crate::network::{Server, API_DOMAIN};

    // HTTP client + method groups
    #[cfg(feature = "http")]
    pub use crate::client::{
        AuctionGroup, CharactersGroup, ClansGroup, EmissionsGroup, FriendsGroup, GroupName,
        MethodGroup, RegionsGroup, ScxClient, ScxClientBuilder,
    };
}
