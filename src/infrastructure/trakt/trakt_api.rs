use async_trait::async_trait;

use crate::domain::trakt::{CollectionPayload, RefreshResult, TestOutcome, TraktError, TraktSettings};
use crate::infrastructure::http::HttpRequest;

/// Operations exposed by the Trakt client.
///
/// Each operation has its own failure policy:
/// - `get_user_name` and `refresh_auth_token` log and return `None`
/// - `add_to_collection` logs and returns a wrapped [`TraktError`]
/// - `test` never fails; it reports a [`TestOutcome`]
#[async_trait]
pub trait TraktApi: Send + Sync {
    /// Slug of the user owning `access_token`
    async fn get_user_name(&self, access_token: &str) -> Option<String>;

    /// Authorization request to send the user's browser to. `callback` is
    /// round-tripped as the OAuth `state` parameter.
    fn get_oauth_request(&self, callback: &str) -> HttpRequest;

    /// Exchange a refresh token for a new token pair through the relay
    async fn refresh_auth_token(&self, refresh_token: &str) -> Option<RefreshResult>;

    /// Add the payload's items to the user's collection
    async fn add_to_collection(
        &self,
        payload: &CollectionPayload,
        access_token: &str,
    ) -> Result<(), TraktError>;

    /// Check that the settings' access token is accepted by Trakt
    async fn test(&self, settings: &TraktSettings) -> TestOutcome;
}
