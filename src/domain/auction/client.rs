//! Auction method group: price history and active lots of an item.

use crate::auth::TokenKind;
use crate::client::ScxClient;
use crate::domain::auction::{AuctionLot, AuctionRedeemedLot};
use crate::endpoint::{resource_path, Endpoint, RequestParams};
use crate::error::SdkError;
use crate::shared::from_raw_list;

pub(crate) const GET_ITEM_HISTORY: Endpoint = Endpoint::new("auction.get_item_history")
    .requires(TokenKind::Application)
    .unwrap_key("prices");

pub(crate) const GET_ITEM_LOTS: Endpoint = Endpoint::new("auction.get_item_lots")
    .requires(TokenKind::Application)
    .unwrap_key("lots");

pub struct Auction<'a> {
    pub(crate) client: &'a ScxClient,
    pub(crate) region: String,
}

impl<'a> Auction<'a> {
    /// `GET /{region}/auction/{item_id}/history`: recent sales, newest first.
    ///
    /// Supports `limit`, `offset` and `additional` query parameters.
    pub async fn get_item_history(
        &self,
        item_id: &str,
        params: RequestParams,
    ) -> Result<Vec<AuctionRedeemedLot>, SdkError> {
        let resource = format!("auction/{}/history", urlencoding::encode(item_id));
        let path = resource_path(Some(&self.region), &resource)?;
        let body = self.client.dispatch(&GET_ITEM_HISTORY, &path, params).await?;
        from_raw_list(body)
    }

    /// `GET /{region}/auction/{item_id}/lots`: currently listed lots.
    ///
    /// Supports `limit`, `offset`, `sort`, `order` and `additional`.
    pub async fn get_item_lots(
        &self,
        item_id: &str,
        params: RequestParams,
    ) -> Result<Vec<AuctionLot>, SdkError> {
        let resource = format!("auction/{}/lots", urlencoding::encode(item_id));
        let path = resource_path(Some(&self.region), &resource)?;
        let body = self.client.dispatch(&GET_ITEM_LOTS, &path, params).await?;
        from_raw_list(body)
    }
}
