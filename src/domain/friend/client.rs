//! Friends method group.

use serde_json::Value;

use crate::auth::TokenKind;
use crate::client::ScxClient;
use crate::endpoint::{resource_path, Endpoint, RequestParams};
use crate::error::SdkError;

pub(crate) const GET_ALL: Endpoint = Endpoint::new("friends.get_all").requires(TokenKind::User);

pub struct Friends<'a> {
    pub(crate) client: &'a ScxClient,
    pub(crate) region: String,
}

impl<'a> Friends<'a> {
    /// `GET /{region}/friends/{character_name}`: names of the character's friends.
    pub async fn get_all(
        &self,
        character_name: &str,
        params: RequestParams,
    ) -> Result<Vec<String>, SdkError> {
        let resource = format!("friends/{}", urlencoding::encode(character_name));
        let path = resource_path(Some(&self.region), &resource)?;
        let body: Value = self.client.dispatch(&GET_ALL, &path, params).await?;
        serde_json::from_value(body)
            .map_err(|e| SdkError::Validation(format!("{}: {}", GET_ALL.name, e)))
    }
}
