//! Friends domain. The API returns plain character names, so there is no record type.

#[cfg(feature = "http")]
pub mod client;
