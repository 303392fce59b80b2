mod common;

use axum::{Router, routing::get};
use axum_test::TestServer;
use chrono::DateTime;
use command_center::api::handlers::ping_handler;
use command_center::routes;

#[tokio::test]
async fn test_ping_reports_operational() {
    let app = Router::new().route("/api/ping", get(ping_handler));

    let server = TestServer::new(app).unwrap();

    let response = server.get("/api/ping").await;

    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["ok"], true);

    let t = json["t"].as_str().unwrap();
    assert!(t.ends_with('Z'));
    assert!(DateTime::parse_from_rfc3339(t).is_ok());
}

#[tokio::test]
async fn test_ping_needs_no_token() {
    let app = common::create_test_app(common::StubChat::reply("unused")).await;

    let server = TestServer::new(app).unwrap();

    server.get("/api/ping").await.assert_status_ok();
}

#[tokio::test]
async fn test_index_page_has_dashboard_slots() {
    let app = common::create_test_app(common::StubChat::reply("unused")).await;

    let server = TestServer::new(app).unwrap();

    let response = server.get("/").await;

    response.assert_status_ok();

    let html = response.text();
    for id in ["login-container", "dashboard-container", "status", "response"] {
        assert!(html.contains(&format!("id=\"{id}\"")), "missing #{id}");
    }
}

#[tokio::test]
async fn test_static_client_is_served() {
    let state = common::create_test_state(common::StubChat::reply("unused")).await;
    let app = routes::router(state, concat!(env!("CARGO_MANIFEST_DIR"), "/static"));

    let server = TestServer::new(app).unwrap();

    let response = server.get("/static/app.js").await;

    response.assert_status_ok();
    let script = response.text();
    assert!(script.contains("preventDefault"));
    assert!(script.contains("/api/auth/login"));

    server.get("/static/style.css").await.assert_status_ok();
}
