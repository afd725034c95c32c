pub mod trakt_api;
pub mod trakt_proxy;

pub use trakt_api::TraktApi;
pub use trakt_proxy::{
    TraktProxy, TRAKT_API_URL, TRAKT_API_VERSION, TRAKT_CLIENT_ID, TRAKT_OAUTH_URL,
    TRAKT_REDIRECT_URI, TRAKT_RENEW_URL,
};
