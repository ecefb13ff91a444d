//! Clan domain: clans (in-game units) and their members.

#[cfg(feature = "http")]
pub mod client;

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::shared::ApiObject;

/// A clan.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Clan {
    pub id: String,
    pub name: String,
    pub tag: String,
    pub level: i64,
    pub level_points: i64,
    pub registration_time: DateTime<FixedOffset>,
    pub alliance: String,
    pub description: String,
    /// In-game name of the clan leader.
    pub leader: String,
    pub member_count: i64,
}

impl ApiObject for Clan {
    const NAME: &'static str = "Clan";
}

/// Rank of a member inside a clan, lowest first.
///
/// `Soldier` and `Sergeant` travel as `"SOLIDER"` and `"SERGANT"`: that is how
/// the API spells them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ClanMemberRank {
    Recruit,
    Commoner,
    #[serde(rename = "SOLIDER")]
    Soldier,
    #[serde(rename = "SERGANT")]
    Sergeant,
    Officer,
    Colonel,
    Leader,
}

impl ClanMemberRank {
    /// Wire value of the rank.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Recruit => "RECRUIT",
            Self::Commoner => "COMMONER",
            Self::Soldier => "SOLIDER",
            Self::Sergeant => "SERGANT",
            Self::Officer => "OFFICER",
            Self::Colonel => "COLONEL",
            Self::Leader => "LEADER",
        }
    }
}

impl fmt::Display for ClanMemberRank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Recruit => "Recruit",
            Self::Commoner => "Commoner",
            Self::Soldier => "Soldier",
            Self::Sergeant => "Sergeant",
            Self::Officer => "Officer",
            Self::Colonel => "Colonel",
            Self::Leader => "Leader",
        };
        f.write_str(name)
    }
}

/// A clan member.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ClanMember {
    pub name: String,
    pub rank: ClanMemberRank,
    pub join_time: DateTime<FixedOffset>,
}

impl ApiObject for ClanMember {
    const NAME: &'static str = "ClanMember";
}
