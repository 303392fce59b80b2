#![allow(dead_code)]

use async_trait::async_trait;
use axum::Router;
use chrono::Duration;
use command_center::application::services::{AssistantService, AuthService};
use command_center::infrastructure::llm::{ChatBackend, ChatError, ChatResult};
use command_center::infrastructure::persistence::InMemoryUserRepository;
use command_center::routes;
use command_center::state::AppState;
use std::sync::Arc;
use url::Url;

pub const ADMIN_EMAIL: &str = "admin@example.com";
pub const ADMIN_PASSWORD: &str = "ChangeMeNow123!";
pub const SIGNING_SECRET: &str = "integration-test-signing-secret";

/// Chat backend with a canned outcome.
pub enum StubChat {
    Reply(String),
    Fail,
}

impl StubChat {
    pub fn reply(text: &str) -> Self {
        StubChat::Reply(text.to_string())
    }
}

#[async_trait]
impl ChatBackend for StubChat {
    async fn complete(&self, _prompt: &str) -> ChatResult<String> {
        match self {
            StubChat::Reply(text) => Ok(text.clone()),
            StubChat::Fail => Err(ChatError::Status {
                status: 503,
                body: "overloaded".to_string(),
            }),
        }
    }
}

pub fn create_auth_service(ttl: Duration) -> Arc<AuthService<InMemoryUserRepository>> {
    Arc::new(AuthService::new(
        Arc::new(InMemoryUserRepository::new()),
        SIGNING_SECRET.to_string(),
        ttl,
    )
    .with_hash_cost(4))
}

/// State with the admin account seeded and `chat` answering prompts.
pub async fn create_test_state(chat: StubChat) -> AppState {
    let auth_service = create_auth_service(Duration::minutes(60));
    auth_service
        .ensure_admin(ADMIN_EMAIL, ADMIN_PASSWORD)
        .await
        .unwrap();

    let assistant_service = Arc::new(AssistantService::new(Arc::new(chat)));

    AppState::new(auth_service, assistant_service)
}

/// Full application router; the static directory does not exist in tests.
pub async fn create_test_app(chat: StubChat) -> Router {
    routes::router(create_test_state(chat).await, "tests/no-static")
}

/// Issues a valid token for the seeded admin.
pub fn admin_token(state: &AppState) -> String {
    state.auth_service.issue_token(ADMIN_EMAIL).unwrap()
}

/// Serves `app` on a loopback port and returns its base URL.
pub async fn spawn(app: Router) -> Url {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    Url::parse(&format!("http://{addr}")).unwrap()
}
