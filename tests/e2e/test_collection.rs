use crate::e2e::helpers;

use helpers::fixtures::{collection_payload, ACCESS_TOKEN};
use helpers::TestContext;
use pretty_assertions::assert_eq;
use reqwest::{Method, StatusCode};
use std::error::Error;
use tokio_test::{assert_err, assert_ok};
use trakt_proxy::infrastructure::http::HttpError;
use trakt_proxy::infrastructure::trakt::TraktApi;

#[tokio::test]
async fn it_should_post_payload_as_json() {
    let ctx = TestContext::new();
    ctx.transport
        .respond_raw(StatusCode::CREATED, r#"{"added":{"movies":2}}"#);
    let payload = collection_payload();

    assert_ok!(ctx.proxy.add_to_collection(&payload, ACCESS_TOKEN).await);

    let request = ctx.transport.single_request();
    assert_eq!(request.method, Method::POST);
    assert_eq!(request.url(), "https://api.trakt.tv/sync/collection");
    assert_eq!(request.header("Content-Type"), Some("application/json"));
    helpers::assertions::assert_trakt_headers(&request);
    helpers::assertions::assert_bearer(&request, ACCESS_TOKEN);

    let body: serde_json::Value = serde_json::from_str(request.body().unwrap()).unwrap();
    assert_eq!(body, serde_json::to_value(&payload).unwrap());
    assert_eq!(body["movies"][0]["resolution"], "hd_1080p");
    assert_eq!(body["movies"][0]["audio_channels"], "5.1");
}

#[tokio::test]
async fn it_should_wrap_transport_error() {
    let ctx = TestContext::new();
    ctx.transport.fail_with_status(StatusCode::INTERNAL_SERVER_ERROR);

    let err = assert_err!(
        ctx.proxy
            .add_to_collection(&collection_payload(), ACCESS_TOKEN)
            .await
    );

    assert_eq!(err.to_string(), "Unable to post payload");
    let source = err
        .source()
        .and_then(|source| source.downcast_ref::<HttpError>())
        .expect("source should be the transport error");
    assert_eq!(source.status(), Some(StatusCode::INTERNAL_SERVER_ERROR));
}

#[tokio::test]
async fn it_should_wrap_network_error() {
    let ctx = TestContext::new();
    ctx.transport
        .fail_with(HttpError::Network("dns failure".to_string()));

    let err = assert_err!(
        ctx.proxy
            .add_to_collection(&collection_payload(), ACCESS_TOKEN)
            .await
    );

    assert_eq!(err.to_string(), "Unable to post payload");
    assert!(matches!(err.http_error(), HttpError::Network(_)));
}

#[tokio::test]
async fn it_should_log_identifiers_but_not_titles() {
    let ctx = TestContext::new();
    ctx.transport.fail_with_status(StatusCode::UNAUTHORIZED);

    let _ = ctx
        .proxy
        .add_to_collection(&collection_payload(), ACCESS_TOKEN)
        .await;

    assert!(ctx.logs.contains("ERROR", "Unable to post payload"));
    assert!(ctx.logs.contains("ERROR", "tmdb:11236"));
    assert!(!ctx.logs.contents().contains("Secret Garden"));
}
