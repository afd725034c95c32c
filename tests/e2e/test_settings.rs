use crate::e2e::helpers;

use helpers::fixtures::{user_settings_body, ACCESS_TOKEN};
use helpers::TestContext;
use pretty_assertions::assert_eq;
use reqwest::StatusCode;
use trakt_proxy::domain::trakt::{TestOutcome, TraktSettings, ValidationFailure};
use trakt_proxy::infrastructure::http::HttpError;
use trakt_proxy::infrastructure::trakt::TraktApi;

#[tokio::test]
async fn it_should_pass_with_valid_token() {
    let ctx = TestContext::new();
    ctx.transport.respond_json(user_settings_body("test-user"));

    let outcome = ctx.proxy.test(&TraktSettings::new(ACCESS_TOKEN)).await;

    assert_eq!(outcome, TestOutcome::Passed);
    helpers::assertions::assert_bearer(&ctx.transport.single_request(), ACCESS_TOKEN);
}

#[tokio::test]
async fn it_should_report_invalid_token_on_unauthorized() {
    let ctx = TestContext::new();
    ctx.transport.fail_with_status(StatusCode::UNAUTHORIZED);

    let outcome = ctx.proxy.test(&TraktSettings::new("expired-token")).await;

    assert_eq!(
        outcome.into_failure(),
        Some(ValidationFailure::new("Token", "Access Token is invalid"))
    );
    assert!(
        ctx.logs.contains("ERROR", "Access Token is invalid"),
        "Expected an error log, got: {}",
        ctx.logs.contents()
    );
}

#[tokio::test]
async fn it_should_report_generic_failure_on_server_error() {
    let ctx = TestContext::new();
    ctx.transport.fail_with_status(StatusCode::INTERNAL_SERVER_ERROR);

    let outcome = ctx.proxy.test(&TraktSettings::new(ACCESS_TOKEN)).await;

    assert_eq!(
        outcome.into_failure(),
        Some(ValidationFailure::new("Token", "Unable to send test message"))
    );
    assert!(ctx.logs.contains("ERROR", "Unable to send test message"));
}

#[tokio::test]
async fn it_should_report_generic_failure_on_network_error() {
    let ctx = TestContext::new();
    ctx.transport
        .fail_with(HttpError::Network("operation timed out".to_string()));

    let outcome = ctx.proxy.test(&TraktSettings::new(ACCESS_TOKEN)).await;

    assert_eq!(
        outcome.into_failure(),
        Some(ValidationFailure::new("Token", "Unable to send test message"))
    );
}

#[tokio::test]
async fn it_should_report_unexpected_error_without_field() {
    let ctx = TestContext::new();
    ctx.transport.respond_raw(StatusCode::OK, "<html>maintenance</html>");

    let outcome = ctx.proxy.test(&TraktSettings::new(ACCESS_TOKEN)).await;

    assert_eq!(
        outcome.into_failure(),
        Some(ValidationFailure::new("", "Unable to send test message"))
    );
    assert!(ctx.logs.contains("ERROR", "Unable to send test message"));
}
