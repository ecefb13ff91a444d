//! Clans method group.

use crate::auth::TokenKind;
use crate::client::ScxClient;
use crate::domain::clan::{Clan, ClanMember};
use crate::endpoint::{resource_path, Endpoint, RequestParams};
use crate::error::SdkError;
use crate::shared::{from_raw_list, ApiObject};

pub(crate) const GET_INFO: Endpoint =
    Endpoint::new("clans.get_info").requires(TokenKind::Application);

pub(crate) const GET_MEMBERS: Endpoint =
    Endpoint::new("clans.get_members").requires(TokenKind::User);

pub(crate) const GET_ALL: Endpoint = Endpoint::new("clans.get_all")
    .requires(TokenKind::Application)
    .unwrap_key("data");

pub struct Clans<'a> {
    pub(crate) client: &'a ScxClient,
    pub(crate) region: String,
}

impl<'a> Clans<'a> {
    /// `GET /{region}/clan/{clan_id}/info`
    pub async fn get_info(&self, clan_id: &str, params: RequestParams) -> Result<Clan, SdkError> {
        let resource = format!("clan/{}/info", urlencoding::encode(clan_id));
        let path = resource_path(Some(&self.region), &resource)?;
        let body = self.client.dispatch(&GET_INFO, &path, params).await?;
        Clan::from_raw(body)
    }

    /// `GET /{region}/clan/{clan_id}/members`: needs a user token of a clan member.
    pub async fn get_members(
        &self,
        clan_id: &str,
        params: RequestParams,
    ) -> Result<Vec<ClanMember>, SdkError> {
        let resource = format!("clan/{}/members", urlencoding::encode(clan_id));
        let path = resource_path(Some(&self.region), &resource)?;
        let body = self.client.dispatch(&GET_MEMBERS, &path, params).await?;
        from_raw_list(body)
    }

    /// `GET /{region}/clans`: all clans in the region. Supports `limit` and `offset`.
    pub async fn get_all(&self, params: RequestParams) -> Result<Vec<Clan>, SdkError> {
        let path = resource_path(Some(&self.region), "clans")?;
        let body = self.client.dispatch(&GET_ALL, &path, params).await?;
        from_raw_list(body)
    }
}
