//! HTTP client layer: `ScxHttp` session bound to one API server.

pub mod client;

pub use client::{HttpOptions, ScxHttp, DEFAULT_TIMEOUT_SECS, DEFAULT_USER_AGENT};
