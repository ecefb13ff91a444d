//! Domain modules organized as vertical slices.
//!
//! Each sub-module contains:
//! - `mod.rs`: Typed records exactly as the API sends them (camelCase aliases)
//! - `client.rs`: Region-bound method group with one method per endpoint

pub mod auction;
pub mod character;
pub mod clan;
pub mod emission;
pub mod friend;
pub mod region;
