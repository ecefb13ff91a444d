//! Region domain: game server regions.

#[cfg(feature = "http")]
pub mod client;

use serde::{Deserialize, Serialize};

use crate::shared::ApiObject;

/// A region where game servers are located.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Region {
    pub id: String,
    pub name: String,
}

impl ApiObject for Region {
    const NAME: &'static str = "Region";
}
