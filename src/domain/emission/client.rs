//! Emissions method group.

use crate::auth::TokenKind;
use crate::client::ScxClient;
use crate::domain::emission::Emission;
use crate::endpoint::{resource_path, Endpoint, RequestParams};
use crate::error::SdkError;
use crate::shared::ApiObject;

pub(crate) const GET_INFO: Endpoint =
    Endpoint::new("emissions.get_info").requires(TokenKind::Application);

pub struct Emissions<'a> {
    pub(crate) client: &'a ScxClient,
    pub(crate) region: String,
}

impl<'a> Emissions<'a> {
    /// `GET /{region}/emission`
    pub async fn get_info(&self, params: RequestParams) -> Result<Emission, SdkError> {
        let path = resource_path(Some(&self.region), "emission")?;
        let body = self.client.dispatch(&GET_INFO, &path, params).await?;
        Emission::from_raw(body)
    }
}
