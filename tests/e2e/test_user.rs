use crate::e2e::helpers;

use helpers::fixtures::{user_settings_body, ACCESS_TOKEN};
use helpers::TestContext;
use pretty_assertions::assert_eq;
use reqwest::{Method, StatusCode};
use trakt_proxy::infrastructure::http::HttpError;
use trakt_proxy::infrastructure::trakt::TraktApi;

#[tokio::test]
async fn it_should_return_user_slug() {
    let ctx = TestContext::new();
    ctx.transport.respond_json(user_settings_body("test-user"));

    let user_name = ctx.proxy.get_user_name(ACCESS_TOKEN).await;

    assert_eq!(user_name.as_deref(), Some("test-user"));

    let request = ctx.transport.single_request();
    assert_eq!(request.method, Method::GET);
    assert_eq!(request.url(), "https://api.trakt.tv/users/settings");
    helpers::assertions::assert_trakt_headers(&request);
    helpers::assertions::assert_bearer(&request, ACCESS_TOKEN);
}

#[tokio::test]
async fn it_should_return_none_and_warn_on_unauthorized() {
    let ctx = TestContext::new();
    ctx.transport.fail_with_status(StatusCode::UNAUTHORIZED);

    let user_name = ctx.proxy.get_user_name("expired-token").await;

    assert_eq!(user_name, None);
    assert!(
        ctx.logs.contains("WARN", "Error fetching Trakt user settings"),
        "Expected a warning, got: {}",
        ctx.logs.contents()
    );
}

#[tokio::test]
async fn it_should_return_none_on_network_error() {
    let ctx = TestContext::new();
    ctx.transport
        .fail_with(HttpError::Network("connection reset".to_string()));

    assert_eq!(ctx.proxy.get_user_name(ACCESS_TOKEN).await, None);
}

#[tokio::test]
async fn it_should_return_none_on_unexpected_body() {
    let ctx = TestContext::new();
    ctx.transport.respond_raw(StatusCode::OK, r#"{"user":{}}"#);

    assert_eq!(ctx.proxy.get_user_name(ACCESS_TOKEN).await, None);
}

#[tokio::test]
async fn it_should_send_no_authorization_for_blank_token() {
    let ctx = TestContext::new();
    ctx.transport.fail_with_status(StatusCode::UNAUTHORIZED);

    ctx.proxy.get_user_name("   ").await;

    let request = ctx.transport.single_request();
    helpers::assertions::assert_trakt_headers(&request);
    assert_eq!(request.header("Authorization"), None);
}
