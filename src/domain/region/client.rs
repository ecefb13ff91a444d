//! Regions method group: list of game regions.

use crate::client::ScxClient;
use crate::domain::region::Region;
use crate::endpoint::{resource_path, Endpoint, RequestParams};
use crate::error::SdkError;
use crate::shared::from_raw_list;

pub(crate) const GET_ALL: Endpoint = Endpoint::new("regions.get_all");

/// Method group for region listing. Public, region-independent.
pub struct Regions<'a> {
    pub(crate) client: &'a ScxClient,
}

impl<'a> Regions<'a> {
    /// `GET /regions`: never sends a token.
    pub async fn get_all(&self, params: RequestParams) -> Result<Vec<Region>, SdkError> {
        let path = resource_path(None, "regions")?;
        let body = self.client.dispatch(&GET_ALL, &path, params).await?;
        from_raw_list(body)
    }
}
