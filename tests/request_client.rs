//! Integration tests for the request client over a real HTTP transport.

use pluginforge_client::client::{HttpTransport, RequestClient, RequestConfig};
use pluginforge_client::RequestError;
use std::sync::Arc;

fn init_tracing() {
    let _ = tracing_subscriber::fmt().with_test_writer().try_init();
}

/// Client with a 1 ms backoff base so retry tests stay fast.
fn fast_client() -> RequestClient {
    RequestClient::with_transport(Arc::new(HttpTransport::new()), 1)
}

#[tokio::test]
async fn parses_json_success_response() {
    init_tracing();
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/api/generate")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"success": true, "plugin_id": "abc123"}"#)
        .create_async()
        .await;

    let config = RequestConfig::post(format!("{}/api/generate", server.url()))
        .with_json(serde_json::json!({"pluginName": "CoolPlugin"}))
        .with_max_retries(0);
    let response = fast_client().request(config).await.unwrap();

    assert_eq!(response.status, 200);
    assert_eq!(response.body["plugin_id"], "abc123");
    mock.assert_async().await;
}

#[tokio::test]
async fn retries_server_errors_up_to_the_budget() {
    init_tracing();
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/api/generate")
        .with_status(500)
        .expect(3)
        .create_async()
        .await;

    let config = RequestConfig::post(format!("{}/api/generate", server.url()))
        .with_timeout_ms(1_000)
        .with_max_retries(2);
    let result = fast_client().request(config).await;

    match result {
        Err(RequestError::HttpStatus(code)) => assert_eq!(code, 500),
        other => panic!("expected HttpStatus(500), got {other:?}"),
    }
    mock.assert_async().await;
}

#[tokio::test]
async fn stops_retrying_after_first_success() {
    init_tracing();
    let mut server = mockito::Server::new_async().await;
    let failing = server
        .mock("GET", "/api/health")
        .with_status(503)
        .expect(1)
        .create_async()
        .await;
    let succeeding = server
        .mock("GET", "/api/health")
        .with_status(200)
        .with_body(r#"{"ok": true}"#)
        .expect(1)
        .create_async()
        .await;

    let config = RequestConfig::get(format!("{}/api/health", server.url()))
        .with_timeout_ms(1_000)
        .with_max_retries(5);
    let response = fast_client().request(config).await.unwrap();

    assert_eq!(response.body["ok"], serde_json::json!(true));
    failing.assert_async().await;
    succeeding.assert_async().await;
}

#[tokio::test]
async fn unparseable_success_body_is_a_terminal_parse_error() {
    init_tracing();
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/api/health")
        .with_status(200)
        .with_body("<html>definitely not json</html>")
        .expect(1)
        .create_async()
        .await;

    let config = RequestConfig::get(format!("{}/api/health", server.url())).with_max_retries(3);
    let result = fast_client().request(config).await;

    assert!(matches!(result, Err(RequestError::Parse(_))));
    // Exactly one request: parse failures never consume the retry budget.
    mock.assert_async().await;
}

#[tokio::test]
async fn connection_refused_surfaces_as_network_error() {
    init_tracing();
    // Port 9 (discard) is closed in the test environment.
    let config = RequestConfig::get("http://127.0.0.1:9/api/health")
        .with_timeout_ms(2_000)
        .with_max_retries(1);
    let result = fast_client().request(config).await;

    match result {
        Err(e) => assert!(e.is_retryable(), "expected a retryable transport error, got {e:?}"),
        Ok(_) => panic!("expected an error"),
    }
}
