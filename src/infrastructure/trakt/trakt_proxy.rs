use async_trait::async_trait;
use reqwest::Method;
use std::sync::Arc;

use super::trakt_api::TraktApi;
use crate::domain::trakt::{
    CollectionPayload, RefreshResult, TestOutcome, TraktError, TraktSettings, UserSettingsResponse,
    ValidationFailure,
};
use crate::infrastructure::http::{get_json, HttpError, HttpRequest, HttpRequestBuilder, HttpTransport};

pub const TRAKT_API_URL: &str = "https://api.trakt.tv";
pub const TRAKT_OAUTH_URL: &str = "https://api.trakt.tv/oauth/authorize";
pub const TRAKT_REDIRECT_URI: &str = "https://auth.servarr.com/v1/trakt/auth";
pub const TRAKT_RENEW_URL: &str = "https://auth.servarr.com/v1/trakt/renew";
pub const TRAKT_CLIENT_ID: &str = "64508a8bf370cee550dde4806469922fd7cd70afb2d5690e3ee7f75ae784b70e";
pub const TRAKT_API_VERSION: &str = "2";

const USER_SETTINGS_RESOURCE: &str = "users/settings";
const SYNC_COLLECTION_RESOURCE: &str = "sync/collection";

const TOKEN_FIELD: &str = "Token";
const INVALID_TOKEN_MESSAGE: &str = "Access Token is invalid";
const TEST_FAILED_MESSAGE: &str = "Unable to send test message";

pub struct TraktProxy {
    http_client: Arc<dyn HttpTransport>,
}

impl TraktProxy {
    pub fn new(http_client: Arc<dyn HttpTransport>) -> Self {
        Self { http_client }
    }

    /// Request against the Trakt API with the version and client id headers.
    /// `Authorization` is only added for a non-blank token.
    pub fn build_request(resource: &str, method: Method, access_token: Option<&str>) -> HttpRequest {
        let mut builder = HttpRequestBuilder::new(TRAKT_API_URL)
            .resource(resource)
            .method(method)
            .accept_json()
            .header("trakt-api-version", TRAKT_API_VERSION)
            .header("trakt-api-key", TRAKT_CLIENT_ID);

        if let Some(token) = access_token.filter(|token| !token.trim().is_empty()) {
            builder = builder.header("Authorization", format!("Bearer {}", token));
        }

        builder.build()
    }

    async fn fetch_user_settings(&self, access_token: &str) -> Result<UserSettingsResponse, HttpError> {
        let request = Self::build_request(USER_SETTINGS_RESOURCE, Method::GET, Some(access_token));
        get_json(self.http_client.as_ref(), &request).await
    }
}

#[async_trait]
impl TraktApi for TraktProxy {
    async fn get_user_name(&self, access_token: &str) -> Option<String> {
        match self.fetch_user_settings(access_token).await {
            Ok(settings) => Some(settings.user.ids.slug),
            Err(e) => {
                tracing::warn!(
                    error = %e,
                    status = ?e.status().map(|s| s.as_u16()),
                    "Error fetching Trakt user settings"
                );
                None
            }
        }
    }

    fn get_oauth_request(&self, callback: &str) -> HttpRequest {
        HttpRequestBuilder::new(TRAKT_OAUTH_URL)
            .query_param("client_id", TRAKT_CLIENT_ID)
            .query_param("response_type", "code")
            .query_param("redirect_uri", TRAKT_REDIRECT_URI)
            .query_param("state", callback)
            .build()
    }

    async fn refresh_auth_token(&self, refresh_token: &str) -> Option<RefreshResult> {
        let request = HttpRequestBuilder::new(TRAKT_RENEW_URL)
            .accept_json()
            .query_param("refresh_token", refresh_token)
            .build();

        match get_json::<RefreshResult>(self.http_client.as_ref(), &request).await {
            Ok(refreshed) if refreshed.access_token.trim().is_empty() => {
                tracing::warn!("Trakt token renewal returned an empty access token");
                None
            }
            Ok(refreshed) => Some(refreshed),
            Err(e) => {
                tracing::warn!(
                    error = %e,
                    status = ?e.status().map(|s| s.as_u16()),
                    "Error refreshing Trakt access token"
                );
                None
            }
        }
    }

    async fn add_to_collection(
        &self,
        payload: &CollectionPayload,
        access_token: &str,
    ) -> Result<(), TraktError> {
        let mut request = Self::build_request(SYNC_COLLECTION_RESOURCE, Method::POST, Some(access_token));

        let result = match request.set_json_body(payload) {
            Ok(()) => self.http_client.execute(&request).await.map(|_| ()),
            Err(e) => Err(e),
        };

        result.map_err(|e| {
            tracing::error!(
                error = %e,
                status = ?e.status().map(|s| s.as_u16()),
                payload = %payload.summary(),
                "Unable to post payload"
            );
            TraktError::PostPayload(e)
        })
    }

    async fn test(&self, settings: &TraktSettings) -> TestOutcome {
        match self.fetch_user_settings(&settings.access_token).await {
            Ok(_) => TestOutcome::Passed,
            Err(e) if e.is_unauthorized() => {
                tracing::error!(error = %e, "Access Token is invalid: {}", e);
                TestOutcome::Failed(ValidationFailure::new(TOKEN_FIELD, INVALID_TOKEN_MESSAGE))
            }
            Err(e @ (HttpError::Status { .. } | HttpError::Network(_))) => {
                tracing::error!(error = %e, "Unable to send test message: {}", e);
                TestOutcome::Failed(ValidationFailure::new(TOKEN_FIELD, TEST_FAILED_MESSAGE))
            }
            Err(e) => {
                tracing::error!(error = %e, "Unable to send test message: {}", e);
                TestOutcome::Failed(ValidationFailure::new("", TEST_FAILED_MESSAGE))
            }
        }
    }
}
