//! End-to-end tests against a stub identity server.

use gracenote_client::{GracenoteError, IdentityClient};
use std::time::Duration;
use wiremock::matchers::{body_string, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const API_PATH: &str = "/webapi/xml/1.0";

const REGISTER_BODY: &str =
    r#"<QUERIES><QUERY CMD="REGISTER"><CLIENT>client_id_string</CLIENT></QUERY></QUERIES>"#;

/// Run a blocking registration off the async runtime and report the outcome
/// together with the identity the client ended up holding.
async fn register(
    endpoint: String,
    client_id: &'static str,
) -> (Result<String, GracenoteError>, Option<(String, String)>) {
    tokio::task::spawn_blocking(move || {
        let mut client = IdentityClient::builder()
            .endpoint(endpoint)
            .timeout(Duration::from_secs(5))
            .build()
            .unwrap();
        let result = client.register(client_id, "tag");
        let identity = client
            .identity()
            .map(|id| (id.client_id.clone(), id.user_id.clone()));
        (result, identity)
    })
    .await
    .unwrap()
}

#[tokio::test]
async fn register_round_trip() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(API_PATH))
        .and(header("content-type", "application/xml"))
        .and(body_string(REGISTER_BODY))
        .respond_with(ResponseTemplate::new(200).set_body_string(
            r#"<RESPONSES><RESPONSE STATUS="OK"><USER>user_id_string</USER></RESPONSE></RESPONSES>"#,
        ))
        .expect(1)
        .mount(&server)
        .await;

    let (result, identity) = register(format!("{}{API_PATH}", server.uri()), "client_id_string").await;

    assert_eq!(result.unwrap(), "user_id_string");
    assert_eq!(
        identity,
        Some((
            "client_id_string-tag".to_string(),
            "user_id_string".to_string()
        ))
    );
}

#[tokio::test]
async fn register_service_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_string(
            r#"<RESPONSES><MESSAGE>Some error message</MESSAGE><RESPONSE STATUS="ERROR"></RESPONSE></RESPONSES>"#,
        ))
        .mount(&server)
        .await;

    let (result, identity) = register(format!("{}{API_PATH}", server.uri()), "0").await;

    let err = result.unwrap_err();
    assert!(matches!(err, GracenoteError::Service(_)));
    assert_eq!(err.to_string(), "Some error message");
    assert!(identity.is_none());
}

#[tokio::test]
async fn register_non_200_status() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(503).set_body_string("<RESPONSES>"))
        .mount(&server)
        .await;

    let (result, identity) = register(format!("{}{API_PATH}", server.uri()), "0").await;

    let err = result.unwrap_err();
    assert_eq!(err.status_code(), Some(503));
    assert!(identity.is_none());
}

#[tokio::test]
async fn register_malformed_body() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<RESPONSES><MESSAGE></RESPONSES>"))
        .mount(&server)
        .await;

    let (result, _) = register(format!("{}{API_PATH}", server.uri()), "0").await;

    let err = result.unwrap_err();
    assert!(matches!(err, GracenoteError::Decode { .. }));
    assert_eq!(err.raw_body(), Some(&b"<RESPONSES><MESSAGE></RESPONSES>"[..]));
}

#[tokio::test]
async fn register_no_response_entries() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<RESPONSES></RESPONSES>"))
        .mount(&server)
        .await;

    let (result, _) = register(format!("{}{API_PATH}", server.uri()), "0").await;

    assert!(matches!(result, Err(GracenoteError::NoResponse)));
}

#[tokio::test]
async fn register_times_out() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_delay(Duration::from_secs(2)))
        .mount(&server)
        .await;
    let endpoint = format!("{}{API_PATH}", server.uri());

    let result = tokio::task::spawn_blocking(move || {
        let mut client = IdentityClient::builder()
            .endpoint(endpoint)
            .timeout(Duration::from_millis(200))
            .build()
            .unwrap();
        client.register("0", "0")
    })
    .await
    .unwrap();

    assert!(matches!(result, Err(GracenoteError::Transport(_))));
}

#[test]
fn register_connection_refused() {
    let mut client = IdentityClient::builder()
        .endpoint("http://127.0.0.1:1/webapi/xml/1.0")
        .timeout(Duration::from_secs(5))
        .build()
        .unwrap();

    let err = client.register("0", "0").unwrap_err();

    assert!(matches!(err, GracenoteError::Transport(_)));
    assert!(err.is_retryable());
    assert!(!client.is_authenticated());
}

#[tokio::test]
async fn register_html_body_is_decode_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(
            ResponseTemplate::new(200).set_body_string("<HTML><BODY>maintenance</BODY></HTML>"),
        )
        .mount(&server)
        .await;

    let (result, identity) = register(format!("{}{API_PATH}", server.uri()), "0").await;

    let err = result.unwrap_err();
    assert!(matches!(err, GracenoteError::Decode { .. }));
    assert_eq!(
        err.raw_body(),
        Some(&b"<HTML><BODY>maintenance</BODY></HTML>"[..])
    );
    assert!(identity.is_none());
}
