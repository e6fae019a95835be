mod common;

use axum_test::TestServer;
use serde_json::{Value, json};

fn server() -> TestServer {
    TestServer::new(common::create_test_app()).unwrap()
}

async fn shorten(server: &TestServer, url: &str) -> Value {
    let response = server
        .post("/api/shorturl/new")
        .form(&[("url", url)])
        .await;

    response.assert_status_ok();
    response.json::<Value>()
}

#[tokio::test]
async fn test_shorten_fresh_counter_starts_at_one() {
    let server = server();

    let json = shorten(&server, "https://www.freecodecamp.org/").await;

    assert_eq!(
        json,
        json!({ "original_url": "https://www.freecodecamp.org/", "short_url": 1 })
    );
}

#[tokio::test]
async fn test_shorten_assigns_sequential_codes() {
    let server = server();

    for expected in 1..=3 {
        let json = shorten(&server, &format!("https://example.com/page/{expected}")).await;
        assert_eq!(json["short_url"], expected);
    }
}

#[tokio::test]
async fn test_shorten_same_url_twice_gets_distinct_codes() {
    let server = server();

    let first = shorten(&server, "https://www.rust-lang.org/").await;
    let second = shorten(&server, "https://www.rust-lang.org/").await;

    assert_eq!(first["short_url"], 1);
    assert_eq!(second["short_url"], 2);
    assert_eq!(first["original_url"], second["original_url"]);
}

#[tokio::test]
async fn test_shorten_keeps_original_unmodified() {
    let url = "https://example.com/Some/Path?b=2&a=1#Frag";

    let json = shorten(&server(), url).await;

    assert_eq!(json["original_url"], url);
}

#[tokio::test]
async fn test_shorten_rejects_other_scheme() {
    let json = shorten(&server(), "ftp://example.com").await;

    assert_eq!(json, json!({ "error": "invalid URL" }));
}

#[tokio::test]
async fn test_shorten_rejects_malformed_url() {
    let server = server();

    for url in ["http://", "https://exa mple.com", "not a url", "http://example"] {
        let json = shorten(&server, url).await;
        assert_eq!(json, json!({ "error": "invalid URL" }), "url: {url}");
    }
}

#[tokio::test]
async fn test_shorten_rejects_unresolvable_host() {
    let json = shorten(&server(), "http://this-host-does-not-exist.invalid").await;

    assert_eq!(json, json!({ "error": "invalid URL" }));
}

#[tokio::test]
async fn test_shorten_host_with_port_is_looked_up_verbatim() {
    let json = shorten(&server(), "http://example.com:8080/").await;

    assert_eq!(json, json!({ "error": "invalid URL" }));
}

#[tokio::test]
async fn test_shorten_rejections_do_not_consume_codes() {
    let server = server();

    shorten(&server, "ftp://example.com").await;
    shorten(&server, "http://this-host-does-not-exist.invalid").await;

    let json = shorten(&server, "https://example.com").await;
    assert_eq!(json["short_url"], 1);
}

#[tokio::test]
async fn test_shorten_missing_field() {
    let response = server()
        .post("/api/shorturl/new")
        .form(&[("link", "https://example.com")])
        .await;

    response.assert_status_ok();
    assert_eq!(response.json::<Value>(), json!({ "error": "invalid URL" }));
}

#[tokio::test]
async fn test_shorten_non_form_body() {
    let response = server()
        .post("/api/shorturl/new")
        .text("https://example.com")
        .await;

    response.assert_status_ok();
    assert_eq!(response.json::<Value>(), json!({ "error": "invalid URL" }));
}

#[tokio::test]
async fn test_shorten_empty_body() {
    let response = server().post("/api/shorturl/new").await;

    response.assert_status_ok();
    assert_eq!(response.json::<Value>(), json!({ "error": "invalid URL" }));
}

#[tokio::test]
async fn test_shorten_storage_failure_responds_with_error() {
    let server = TestServer::new(common::create_unavailable_app()).unwrap();

    let response = server
        .post("/api/shorturl/new")
        .form(&[("url", "https://example.com")])
        .await;

    response.assert_status_internal_server_error();
    assert_eq!(
        response.json::<Value>(),
        json!({ "error": "failed to save short URL" })
    );
}

#[tokio::test]
async fn test_shorten_save_failure_responds_with_error() {
    let server = TestServer::new(common::create_failing_save_app()).unwrap();

    let response = server
        .post("/api/shorturl/new")
        .form(&[("url", "https://example.com")])
        .await;

    response.assert_status_internal_server_error();
}
