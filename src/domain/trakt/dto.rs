use serde::{Deserialize, Serialize};

/// Access/refresh token pair owned by the caller
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthTokenPair {
    pub access_token: String,
    pub refresh_token: String,
}

/// Response from the token renewal relay
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RefreshResult {
    #[serde(alias = "accessToken")]
    pub access_token: String,
    #[serde(alias = "refreshToken")]
    pub refresh_token: String,
    #[serde(default, alias = "expiresIn", skip_serializing_if = "Option::is_none")]
    pub expires_in: Option<i64>,
    #[serde(default, alias = "tokenType", skip_serializing_if = "Option::is_none")]
    pub token_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scope: Option<String>,
}

impl RefreshResult {
    pub fn token_pair(&self) -> AuthTokenPair {
        AuthTokenPair {
            access_token: self.access_token.clone(),
            refresh_token: self.refresh_token.clone(),
        }
    }
}

/// `GET /users/settings`
#[derive(Debug, Clone, Deserialize)]
pub struct UserSettingsResponse {
    pub user: TraktUser,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TraktUser {
    pub username: Option<String>,
    pub name: Option<String>,
    pub ids: TraktUserIds,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TraktUserIds {
    pub slug: String,
}
