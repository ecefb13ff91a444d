//! Characters method group.

use crate::auth::TokenKind;
use crate::client::ScxClient;
use crate::domain::character::{CharacterInfo, FullCharacterInfo};
use crate::endpoint::{resource_path, Endpoint, RequestParams};
use crate::error::SdkError;
use crate::shared::{from_raw_list, ApiObject};

pub(crate) const GET_ALL: Endpoint =
    Endpoint::new("characters.get_all").requires(TokenKind::User);

pub(crate) const GET_PROFILE: Endpoint =
    Endpoint::new("characters.get_profile").requires(TokenKind::Application);

pub struct Characters<'a> {
    pub(crate) client: &'a ScxClient,
    pub(crate) region: String,
}

impl<'a> Characters<'a> {
    /// `GET /{region}/characters`: characters of the user owning the token.
    pub async fn get_all(&self, params: RequestParams) -> Result<Vec<CharacterInfo>, SdkError> {
        let path = resource_path(Some(&self.region), "characters")?;
        let body = self.client.dispatch(&GET_ALL, &path, params).await?;
        from_raw_list(body)
    }

    /// `GET /{region}/character/by-name/{character_name}/profile`
    pub async fn get_profile(
        &self,
        character_name: &str,
        params: RequestParams,
    ) -> Result<FullCharacterInfo, SdkError> {
        let resource = format!(
            "character/by-name/{}/profile",
            urlencoding::encode(character_name)
        );
        let path = resource_path(Some(&self.region), &resource)?;
        let body = self.client.dispatch(&GET_PROFILE, &path, params).await?;
        FullCharacterInfo::from_raw(body)
    }
}
