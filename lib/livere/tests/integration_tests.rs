//! Integration tests for `HyperTransport` using wiremock.

use bytes::Bytes;
use livere::{ClientConfig, HttpClient, HyperTransport, Method, Request};
use serde::{Deserialize, Serialize};
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{body_json, header, method, path, query_param},
};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
struct Comment {
    seq: u64,
    content: String,
}

#[tokio::test]
async fn test_get_request() {
    // Start mock server
    let mock_server = MockServer::start().await;

    let comment = Comment {
        seq: 1,
        content: "first".to_string(),
    };

    Mock::given(method("GET"))
        .and(path("/comments/1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&comment))
        .mount(&mock_server)
        .await;

    // Create transport and execute request
    let client = HyperTransport::new();
    let url = url::Url::parse(&format!("{}/comments/1", mock_server.uri())).expect("url");
    let request = Request::builder(Method::Get, url)
        .header("Accept", "application/json")
        .build();

    let response = client.execute(request).await.expect("response");

    assert!(response.is_success());
    assert_eq!(response.status(), 200);

    let body: Comment = response.json().expect("json");
    assert_eq!(body, comment);
}

#[tokio::test]
async fn test_post_request_with_json_body() {
    let mock_server = MockServer::start().await;

    let input = Comment {
        seq: 0,
        content: "hello".to_string(),
    };
    let output = Comment {
        seq: 42,
        content: "hello".to_string(),
    };

    Mock::given(method("POST"))
        .and(path("/comments"))
        .and(header("content-type", "application/json; charset=UTF-8"))
        .and(body_json(&input))
        .respond_with(ResponseTemplate::new(201).set_body_json(&output))
        .mount(&mock_server)
        .await;

    let client = HyperTransport::new();
    let url = url::Url::parse(&format!("{}/comments", mock_server.uri())).expect("url");
    let request = Request::<Bytes>::builder(Method::Post, url)
        .json_body(serde_json::to_string(&input).expect("json"))
        .build();

    let response = client.execute(request).await.expect("response");

    assert!(response.is_success());
    assert_eq!(response.status(), 201);

    let body: Comment = response.json().expect("json");
    assert_eq!(body, output);
}

#[tokio::test]
async fn test_http_error_status() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/not-found"))
        .respond_with(ResponseTemplate::new(404).set_body_string("Not Found"))
        .mount(&mock_server)
        .await;

    let client = HyperTransport::new();
    let url = url::Url::parse(&format!("{}/not-found", mock_server.uri())).expect("url");
    let request = Request::builder(Method::Get, url).build();

    let response = client.execute(request).await.expect("response");

    assert!(response.is_client_error());
    assert_eq!(response.status(), 404);
}

#[tokio::test]
async fn test_query_parameters() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/count/page"))
        .and(query_param("refer", "www.bloter.net/archives/244922"))
        .and(query_param("id", "my-id"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "count": 3
        })))
        .mount(&mock_server)
        .await;

    let client = HyperTransport::new();
    let url = url::Url::parse(&format!("{}/v1/count/page", mock_server.uri())).expect("url");
    let request = Request::builder(Method::Get, url)
        .query("refer", "www.bloter.net/archives/244922")
        .query("id", "my-id")
        .build();

    let response = client.execute(request).await.expect("response");

    assert!(response.is_success());
}

#[tokio::test]
async fn test_user_agent_header() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/agent"))
        .and(header("user-agent", "livere-test/1.0"))
        .respond_with(ResponseTemplate::new(200))
        .mount(&mock_server)
        .await;

    let config = ClientConfig::builder()
        .user_agent("livere-test/1.0")
        .build()
        .expect("config");
    let client = HyperTransport::with_config(config);

    let url = url::Url::parse(&format!("{}/agent", mock_server.uri())).expect("url");
    let request = Request::builder(Method::Get, url).build();

    let response = client.execute(request).await.expect("response");

    assert!(response.is_success());
}

#[tokio::test]
async fn test_timeout() {
    let mock_server = MockServer::start().await;

    // Delay longer than client timeout
    Mock::given(method("GET"))
        .and(path("/slow"))
        .respond_with(ResponseTemplate::new(200).set_delay(std::time::Duration::from_secs(5)))
        .mount(&mock_server)
        .await;

    let client = HyperTransport::builder()
        .timeout(std::time::Duration::from_millis(100))
        .build();

    let url = url::Url::parse(&format!("{}/slow", mock_server.uri())).expect("url");
    let request = Request::builder(Method::Get, url).build();

    let result = client.execute(request).await;

    let err = result.expect_err("expected timeout error");
    assert!(err.is_timeout(), "Expected timeout error, got: {err}");
}

#[tokio::test]
async fn test_connection_error() {
    let client = HyperTransport::new();

    // Try to connect to a non-existent server
    let url = url::Url::parse("http://127.0.0.1:1").expect("url");
    let request = Request::builder(Method::Get, url).build();

    let result = client.execute(request).await;

    let err = result.expect_err("expected connection error");
    assert!(err.is_connection(), "Expected connection error, got: {err}");
}

#[tokio::test]
async fn test_response_headers() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/with-headers"))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("X-Request-Id", "abc123")
                .insert_header("Content-Type", "application/json")
                .set_body_json(serde_json::json!({"ok": true})),
        )
        .mount(&mock_server)
        .await;

    let client = HyperTransport::new();
    let url = url::Url::parse(&format!("{}/with-headers", mock_server.uri())).expect("url");
    let request = Request::builder(Method::Get, url).build();

    let response = client.execute(request).await.expect("response");

    assert_eq!(response.header("x-request-id"), Some("abc123"));
    assert_eq!(response.content_type(), Some("application/json"));
}

#[tokio::test]
async fn test_delete_request() {
    let mock_server = MockServer::start().await;

    Mock::given(method("DELETE"))
        .and(path("/comments/1"))
        .respond_with(ResponseTemplate::new(204))
        .mount(&mock_server)
        .await;

    let client = HyperTransport::new();
    let url = url::Url::parse(&format!("{}/comments/1", mock_server.uri())).expect("url");
    let request = Request::builder(Method::Delete, url).build();

    let response = client.execute(request).await.expect("response");

    assert!(response.is_success());
    assert_eq!(response.status(), 204);
}
