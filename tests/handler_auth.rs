mod common;

use axum::{Router, routing::post};
use axum_test::TestServer;
use serde_json::json;
use command_center::api::handlers::login_handler;

async fn login_server() -> (TestServer, command_center::AppState) {
    let state = common::create_test_state(common::StubChat::reply("unused")).await;
    let app = Router::new()
        .route("/api/auth/login", post(login_handler))
        .with_state(state.clone());

    (TestServer::new(app).unwrap(), state)
}

#[tokio::test]
async fn test_login_success_returns_bearer_token() {
    let (server, state) = login_server().await;

    let response = server
        .post("/api/auth/login")
        .json(&json!({
            "email": common::ADMIN_EMAIL,
            "password": common::ADMIN_PASSWORD
        }))
        .await;

    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["token_type"], "bearer");

    let token = json["access_token"].as_str().unwrap();
    let claims = state.auth_service.verify_token(token).unwrap();
    assert_eq!(claims.sub, common::ADMIN_EMAIL);
}

#[tokio::test]
async fn test_login_wrong_password() {
    let (server, _) = login_server().await;

    let response = server
        .post("/api/auth/login")
        .json(&json!({
            "email": common::ADMIN_EMAIL,
            "password": "wrong"
        }))
        .await;

    response.assert_status_unauthorized();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["error"]["code"], "unauthorized");
    assert_eq!(json["error"]["message"], "Invalid credentials");
}

#[tokio::test]
async fn test_login_unknown_email_is_indistinguishable() {
    let (server, _) = login_server().await;

    let response = server
        .post("/api/auth/login")
        .json(&json!({
            "email": "nobody@example.com",
            "password": common::ADMIN_PASSWORD
        }))
        .await;

    response.assert_status_unauthorized();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["error"]["message"], "Invalid credentials");
}

#[tokio::test]
async fn test_login_missing_fields() {
    let (server, _) = login_server().await;

    for body in [
        json!({}),
        json!({ "email": common::ADMIN_EMAIL }),
        json!({ "email": "", "password": common::ADMIN_PASSWORD }),
    ] {
        let response = server.post("/api/auth/login").json(&body).await;

        response.assert_status_bad_request();

        let json = response.json::<serde_json::Value>();
        assert_eq!(json["error"]["code"], "validation_error");
        assert_eq!(json["error"]["message"], "email and password required");
    }
}
