use std::time::Duration;

use flourish_engine::{LookupClient, LookupFailureKind, LookupSettings, ReqwestLookupClient};
use pretty_assertions::assert_eq;
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client_for(server: &MockServer) -> ReqwestLookupClient {
    ReqwestLookupClient::new(LookupSettings {
        endpoint: server.uri(),
        ..LookupSettings::default()
    })
}

#[tokio::test]
async fn check_posts_json_and_decodes_the_reply() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/check_as"))
        .and(body_json(serde_json::json!({ "asn": "64500" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "affected": true,
            "message": "Your AS is affected by routing loops!",
            "asn": 64500,
        })))
        .mount(&server)
        .await;

    let reply = client_for(&server).check("64500").await.expect("check ok");
    assert!(reply.affected);
    assert_eq!(reply.asn, Some(64500));
}

#[tokio::test]
async fn reply_without_optional_fields_still_decodes() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/check_as"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(serde_json::json!({ "affected": false })),
        )
        .mount(&server)
        .await;

    let reply = client_for(&server).check("64501").await.expect("check ok");
    assert!(!reply.affected);
    assert_eq!(reply.message, None);
    assert_eq!(reply.asn, None);
}

#[tokio::test]
async fn non_success_status_maps_to_http_failure() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/check_as"))
        .respond_with(ResponseTemplate::new(400).set_body_json(serde_json::json!({
            "error": "Please enter a valid AS number.",
        })))
        .mount(&server)
        .await;

    let err = client_for(&server).check("99999999999").await.unwrap_err();
    assert_eq!(err.kind, LookupFailureKind::HttpStatus(400));
}

#[tokio::test]
async fn malformed_body_maps_to_decode_failure() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/check_as"))
        .respond_with(ResponseTemplate::new(200).set_body_raw("not json", "application/json"))
        .mount(&server)
        .await;

    let err = client_for(&server).check("64500").await.unwrap_err();
    assert_eq!(err.kind, LookupFailureKind::Decode);
}

#[tokio::test]
async fn slow_backend_times_out() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/check_as"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_delay(Duration::from_millis(250))
                .set_body_json(serde_json::json!({ "affected": false })),
        )
        .mount(&server)
        .await;

    let client = ReqwestLookupClient::new(LookupSettings {
        endpoint: server.uri(),
        request_timeout: Duration::from_millis(50),
        ..LookupSettings::default()
    });

    let err = client.check("64500").await.unwrap_err();
    assert_eq!(err.kind, LookupFailureKind::Timeout);
}

#[tokio::test]
async fn unparsable_endpoint_is_an_invalid_url() {
    let client = ReqwestLookupClient::new(LookupSettings {
        endpoint: "not a base url".to_string(),
        ..LookupSettings::default()
    });

    let err = client.check("64500").await.unwrap_err();
    assert_eq!(err.kind, LookupFailureKind::InvalidUrl);
}
