use axum::body::Body;
use axum::http::{Request, StatusCode};
use tower::ServiceExt;

use super::*;

#[tokio::test]
async fn healthz_returns_ok() {
    let response = base_routes()
        .oneshot(Request::builder().uri("/healthz").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn unknown_path_is_not_found() {
    let response = base_routes()
        .oneshot(Request::builder().uri("/upload").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[test]
fn api_config_carries_backend_base() {
    let config = ServerConfig { api_base: "https://api.poseguard.test".into(), port: 3000 };
    let api = api_config(&config);
    assert_eq!(api.base_url(), "https://api.poseguard.test");
    assert_eq!(api.ws_endpoint("/ws/camera"), "wss://api.poseguard.test/ws/camera");
}
