use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use super::dto::{AuthTokenPair, RefreshResult};

/// Tokens are renewed this long before they actually expire
const REFRESH_MARGIN_MINUTES: i64 = 5;

/// Trakt access tokens live for three months when the relay omits `expires_in`
const DEFAULT_TOKEN_LIFETIME_SECS: i64 = 90 * 24 * 60 * 60;

/// Connection settings for one Trakt account
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct TraktSettings {
    pub access_token: String,
    pub refresh_token: String,
    pub expires: Option<DateTime<Utc>>,
    pub auth_user: Option<String>,
}

impl TraktSettings {
    pub fn new(access_token: impl Into<String>) -> Self {
        Self {
            access_token: access_token.into(),
            ..Self::default()
        }
    }

    pub fn has_access_token(&self) -> bool {
        !self.access_token.trim().is_empty()
    }

    /// True when the access token is missing, has no known expiry, or
    /// expires within the refresh margin.
    pub fn needs_refresh(&self, now: DateTime<Utc>) -> bool {
        if !self.has_access_token() {
            return true;
        }

        match self.expires {
            Some(expires) => expires <= now + Duration::minutes(REFRESH_MARGIN_MINUTES),
            None => true,
        }
    }

    /// Settings carrying the renewed tokens. The caller decides whether to
    /// persist them.
    pub fn apply_refresh(&self, refreshed: &RefreshResult, now: DateTime<Utc>) -> Self {
        let lifetime = refreshed.expires_in.unwrap_or(DEFAULT_TOKEN_LIFETIME_SECS);
        let AuthTokenPair {
            access_token,
            refresh_token,
        } = refreshed.token_pair();

        Self {
            access_token,
            refresh_token,
            expires: Some(now + Duration::seconds(lifetime)),
            auth_user: self.auth_user.clone(),
        }
    }
}

/// Why a settings check failed, addressed to a configuration form field
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationFailure {
    pub field: String,
    pub message: String,
}

impl ValidationFailure {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

impl std::fmt::Display for ValidationFailure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.field.is_empty() {
            write!(f, "{}", self.message)
        } else {
            write!(f, "{}: {}", self.field, self.message)
        }
    }
}

/// Result of a settings test
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TestOutcome {
    Passed,
    Failed(ValidationFailure),
}

impl TestOutcome {
    pub fn is_passed(&self) -> bool {
        matches!(self, Self::Passed)
    }

    pub fn failure(&self) -> Option<&ValidationFailure> {
        match self {
            Self::Passed => None,
            Self::Failed(failure) => Some(failure),
        }
    }

    pub fn into_failure(self) -> Option<ValidationFailure> {
        match self {
            Self::Passed => None,
            Self::Failed(failure) => Some(failure),
        }
    }
}
