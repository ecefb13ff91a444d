//! Character domain: account characters and public profiles.

#[cfg(feature = "http")]
pub mod client;

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::domain::clan::{Clan, ClanMember};
use crate::shared::ApiObject;

// ─── Stats ───────────────────────────────────────────────────────────────────

/// Value type of a profile statistic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CharacterStatType {
    Integer,
    Decimal,
    Date,
    Duration,
}

/// One profile statistic. The shape of `value` depends on `stat_type`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CharacterStat {
    pub id: String,
    #[serde(rename = "type")]
    pub stat_type: CharacterStatType,
    pub value: Map<String, Value>,
}

impl ApiObject for CharacterStat {
    const NAME: &'static str = "CharacterStat";
}

// ─── Characters ──────────────────────────────────────────────────────────────

/// Basic identity of a character.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CharacterMeta {
    pub id: String,
    pub name: String,
    pub creation_time: DateTime<FixedOffset>,
}

impl ApiObject for CharacterMeta {
    const NAME: &'static str = "CharacterMeta";
}

/// The clan a character belongs to, and the character's membership in it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CharacterClan {
    pub info: Clan,
    pub member: ClanMember,
}

impl ApiObject for CharacterClan {
    const NAME: &'static str = "CharacterClan";
}

/// A character on the authorized user's account.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CharacterInfo {
    pub information: CharacterMeta,
    pub clan: CharacterClan,
}

impl ApiObject for CharacterInfo {
    const NAME: &'static str = "CharacterInfo";
}

/// Public profile of a character.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct FullCharacterInfo {
    pub uuid: String,
    #[serde(rename = "username")]
    pub name: String,
    /// Online status (`online` / `offline`).
    pub status: String,
    pub alliance: String,
    pub last_login: DateTime<FixedOffset>,
    /// Ids of the stats pinned to the profile.
    pub displayed_achievements: Vec<String>,
    pub clan: CharacterClan,
    pub stats: Vec<CharacterStat>,
}

impl FullCharacterInfo {
    pub fn stat(&self, id: &str) -> Option<&CharacterStat> {
        self.stats.iter().find(|s| s.id == id)
    }
}

impl ApiObject for FullCharacterInfo {
    const NAME: &'static str = "FullCharacterInfo";
}
