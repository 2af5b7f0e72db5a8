use crate::e2e::helpers;

use helpers::{StubContext, TestContext};
use hyper::StatusCode;
use test_context::test_context;

#[test_context(StubContext)]
#[tokio::test]
async fn it_should_return_ok_for_health_check(ctx: &StubContext) {
    let response = ctx.client.get("/health").await.unwrap();

    response.assert_status(StatusCode::OK);
    assert_eq!(String::from_utf8(response.body_bytes.clone()).unwrap(), "OK");
}

#[test_context(StubContext)]
#[tokio::test]
async fn it_should_include_request_id_in_responses(ctx: &StubContext) {
    let first = ctx.client.get("/health").await.unwrap();
    let second = ctx.client.get("/health").await.unwrap();

    first.assert_header_exists("x-request-id");
    second.assert_header_exists("x-request-id");
    assert_ne!(first.header("x-request-id"), second.header("x-request-id"));
}

#[test_context(StubContext)]
#[tokio::test]
async fn it_should_report_not_ready_without_database(ctx: &StubContext) {
    let response = ctx.client.get("/health/ready").await.unwrap();

    response.assert_status(StatusCode::SERVICE_UNAVAILABLE);
    let body = response.body.as_ref().unwrap();
    assert_eq!(body.get("status").and_then(|v| v.as_str()), Some("not_ready"));
    assert_eq!(body.get("database").and_then(|v| v.as_str()), Some("disconnected"));
}

#[test_context(StubContext)]
#[tokio::test]
async fn it_should_allow_configured_cors_origin(ctx: &StubContext) {
    let response = ctx
        .client
        .options(
            "/word/languages",
            &[
                ("Origin", "http://localhost:3000"),
                ("Access-Control-Request-Method", "GET"),
            ],
        )
        .await
        .unwrap();

    response.assert_header("access-control-allow-origin", "http://localhost:3000");
}

#[test_context(StubContext)]
#[tokio::test]
async fn it_should_not_allow_unlisted_cors_origin(ctx: &StubContext) {
    let response = ctx
        .client
        .get_with_headers("/health", &[("Origin", "http://evil.example")])
        .await
        .unwrap();

    response.assert_status(StatusCode::OK);
    assert!(response.header("access-control-allow-origin").is_none());
}

#[test_context(StubContext)]
#[tokio::test]
async fn it_should_handle_concurrent_health_checks(ctx: &StubContext) {
    let requests = (0..10).map(|_| {
        let client = ctx.client.clone();
        async move { client.get("/health").await }
    });

    for result in futures::future::join_all(requests).await {
        result.unwrap().assert_status(StatusCode::OK);
    }
}

#[test_context(TestContext)]
#[tokio::test]
#[ignore = "requires a docker daemon"]
async fn it_should_report_ready_with_database(ctx: &TestContext) {
    let response = ctx.client.get("/health/ready").await.unwrap();

    response.assert_status(StatusCode::OK);
    let body = response.body.as_ref().unwrap();
    assert_eq!(body.get("status").and_then(|v| v.as_str()), Some("ready"));
    assert_eq!(body.get("database").and_then(|v| v.as_str()), Some("connected"));
}
