mod common;

use axum_test::TestServer;
use serde_json::{Value, json};

#[tokio::test]
async fn test_hello() {
    let server = TestServer::new(common::create_test_app()).unwrap();

    let response = server.get("/api/hello").await;

    response.assert_status_ok();
    assert_eq!(response.json::<Value>(), json!({ "greeting": "hello API" }));
}

#[tokio::test]
async fn test_index_page() {
    let server = TestServer::new(common::create_test_app()).unwrap();

    let response = server.get("/").await;

    response.assert_status_ok();
    let html = response.text();
    assert!(html.contains("action=\"/api/shorturl/new\""));
    assert!(html.contains(env!("CARGO_PKG_VERSION")));
}

#[tokio::test]
async fn test_static_asset() {
    let server = TestServer::new(common::create_test_app()).unwrap();

    let response = server.get("/public/style.css").await;

    response.assert_status_ok();
}

#[tokio::test]
async fn test_health_empty_store() {
    let server = TestServer::new(common::create_test_app()).unwrap();

    let response = server.get("/health").await;

    response.assert_status_ok();
    let json = response.json::<Value>();
    assert_eq!(json["status"], "healthy");
    assert_eq!(json["checks"]["database"]["status"], "ok");
    assert_eq!(
        json["checks"]["database"]["message"],
        "Connected, no short URLs yet"
    );
    assert!(json["last_short_url"].is_null());
}

#[tokio::test]
async fn test_health_reports_last_code() {
    let server = TestServer::new(common::create_test_app()).unwrap();
    server
        .post("/api/shorturl/new")
        .form(&[("url", "https://example.com")])
        .await;

    let response = server.get("/health").await;

    let json = response.json::<Value>();
    assert_eq!(
        json["checks"]["database"]["message"],
        "Connected, last short URL: 1"
    );
    assert_eq!(json["last_short_url"], 1);
}

#[tokio::test]
async fn test_health_degraded() {
    let server = TestServer::new(common::create_unavailable_app()).unwrap();

    let response = server.get("/health").await;

    response.assert_status_service_unavailable();
    let json = response.json::<Value>();
    assert_eq!(json["status"], "degraded");
    assert_eq!(json["checks"]["database"]["status"], "error");
}

#[tokio::test]
async fn test_cors_headers() {
    let server = TestServer::new(common::create_test_app()).unwrap();

    let response = server
        .get("/api/hello")
        .add_header("Origin", "https://other.example")
        .await;

    assert_eq!(response.header("access-control-allow-origin"), "*");
}
