use std::net::SocketAddr;

use axum::Router;
use axum::body::Body;
use axum::extract::connect_info::MockConnectInfo;
use axum::http::{HeaderMap, Request, StatusCode};
use http_body_util::BodyExt;
use tower::ServiceExt;

/// Peer address the test app reports for every request.
pub const PEER: ([u8; 4], u16) = ([10, 1, 2, 3], 54_321);

/// Build the app with a fixed transport peer address.
pub fn test_app() -> Router {
    ip_reverser::server::build_app().layer(MockConnectInfo(SocketAddr::from(PEER)))
}

/// Test helper: send a request to the app and return (status, headers, body).
pub async fn send(app: &Router, request: Request<Body>) -> (StatusCode, HeaderMap, String) {
    let response = app.clone().oneshot(request).await.unwrap_or_default();

    let status = response.status();
    let response_headers = response.headers().clone();
    let body = response
        .into_body()
        .collect()
        .await
        .map(http_body_util::Collected::to_bytes)
        .unwrap_or_default();
    let body_str = String::from_utf8(body.to_vec()).unwrap_or_default();

    (status, response_headers, body_str)
}

/// Test helper: send a GET request with extra headers and return (status, headers, body).
pub async fn get_with_headers(
    app: &Router,
    uri: &str,
    headers: &[(&str, &str)],
) -> (StatusCode, HeaderMap, String) {
    let mut builder = Request::builder().method("GET").uri(uri);
    for (name, value) in headers {
        builder = builder.header(*name, *value);
    }
    let request = builder.body(Body::empty()).unwrap_or_default();

    send(app, request).await
}

/// Test helper: send a plain GET request and return (status, body).
pub async fn get(app: &Router, uri: &str) -> (StatusCode, String) {
    let (status, _headers, body) = get_with_headers(app, uri, &[]).await;
    (status, body)
}
