//! Integration tests for transport middleware.

use bytes::Bytes;
use livere::{CallInfo, HttpClient, HyperTransport, Method, Request};
use tower::util::MapRequestLayer;
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{header, method, path, query_param},
};

fn append_trace(request: Request<Bytes>, mark: &str) -> Request<Bytes> {
    let (method, url, mut headers, body, extensions) = request.into_parts();
    let previous = headers.get("x-trace").cloned().unwrap_or_default();
    headers.insert("x-trace".to_string(), format!("{previous}{mark}"));
    Request::from_parts(method, url, headers, body, extensions)
}

fn trace_a(request: Request<Bytes>) -> Request<Bytes> {
    append_trace(request, "a")
}

fn trace_b(request: Request<Bytes>) -> Request<Bytes> {
    append_trace(request, "b")
}

/// Test that logging middleware doesn't break request/response flow.
#[tokio::test]
async fn test_logging_middleware() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/count/page"))
        .and(query_param("token", "s3cret"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({"count": 1})))
        .mount(&mock_server)
        .await;

    let client = HyperTransport::builder().with_logging().build();

    let url = url::Url::parse(&format!(
        "{}/v1/count/page?refer=x&id=me&token=s3cret",
        mock_server.uri()
    ))
    .expect("url");
    let request = Request::builder(Method::Get, url)
        .extension(CallInfo::new("count", "page", "get", "page"))
        .build();

    let response = client.execute(request).await.expect("response");

    assert!(response.is_success());
}

/// Test debug logging level.
#[tokio::test]
async fn test_debug_logging() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/debug"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&mock_server)
        .await;

    let client = HyperTransport::builder().with_debug_logging().build();

    let url = url::Url::parse(&format!("{}/debug", mock_server.uri())).expect("url");
    let request = Request::<Bytes>::builder(Method::Post, url)
        .json_body(r#"{"title":"t"}"#.to_string())
        .build();

    let response = client.execute(request).await.expect("response");

    // HTTP errors are still responses at the transport level
    assert!(response.is_server_error());
}

/// Test generic layer API with custom middleware.
#[tokio::test]
async fn test_generic_layer_api() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/custom-layer"))
        .and(header("x-trace", "a"))
        .respond_with(ResponseTemplate::new(200))
        .mount(&mock_server)
        .await;

    let client = HyperTransport::builder()
        .layer(MapRequestLayer::new(trace_a))
        .build();

    let url = url::Url::parse(&format!("{}/custom-layer", mock_server.uri())).expect("url");
    let request = Request::builder(Method::Get, url).build();

    let response = client.execute(request).await.expect("response");

    assert!(response.is_success());
}

/// The first layer added sees the request first.
#[tokio::test]
async fn test_middleware_composition_order() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/ordered"))
        .and(header("x-trace", "ab"))
        .respond_with(ResponseTemplate::new(200))
        .mount(&mock_server)
        .await;

    let client = HyperTransport::builder()
        .with_logging()
        .layer(MapRequestLayer::new(trace_a))
        .layer(MapRequestLayer::new(trace_b))
        .build();

    let url = url::Url::parse(&format!("{}/ordered", mock_server.uri())).expect("url");
    let request = Request::builder(Method::Get, url).build();

    let response = client.execute(request).await.expect("response");

    assert_eq!(response.status(), 200);
}
