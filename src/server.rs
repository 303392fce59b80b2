//! HTTP server initialization and runtime setup.
//!
//! Builds services from configuration, seeds the admin account and runs the
//! Axum server until Ctrl-C.

use crate::application::services::{AssistantService, AuthService};
use crate::config::Config;
use crate::infrastructure::llm::{ChatBackend, NullChat, OpenAiChat};
use crate::infrastructure::persistence::InMemoryUserRepository;
use crate::routes::app_router;
use crate::state::AppState;

use anyhow::{Context, Result};
use axum::ServiceExt;
use axum::extract::Request;
use chrono::Duration;
use std::net::SocketAddr;
use std::sync::Arc;

/// Builds the application state from configuration.
///
/// Initializes:
/// - In-memory user directory, seeded with the admin account when configured
/// - Auth service with the configured signing secret and token lifetime
/// - Assistant service backed by OpenAI (or [`NullChat`] without an API key)
///
/// # Errors
///
/// Returns an error if the chat client cannot be built or seeding fails.
pub async fn build_state(config: &Config) -> Result<AppState> {
    let users = Arc::new(InMemoryUserRepository::new());
    let auth_service = Arc::new(AuthService::new(
        users,
        config.token_signing_secret.clone(),
        Duration::minutes(config.token_ttl_minutes),
    ));

    if config.should_seed_admin() {
        auth_service
            .ensure_admin(&config.admin_email, &config.admin_password)
            .await
            .context("Failed to seed admin account")?;
    }

    let backend: Arc<dyn ChatBackend> = match &config.openai_api_key {
        Some(key) => {
            tracing::info!("Assistant enabled ({})", config.openai_model);
            Arc::new(
                OpenAiChat::new(&config.openai_url, key, &config.openai_model)
                    .context("Failed to build chat client")?,
            )
        }
        None => {
            tracing::warn!("OPENAI_API_KEY not set, assistant replies with a notice");
            Arc::new(NullChat::new())
        }
    };
    let assistant_service = Arc::new(AssistantService::new(backend));

    Ok(AppState::new(auth_service, assistant_service))
}

/// Runs the HTTP server with the given configuration.
///
/// # Errors
///
/// Returns an error if:
/// - State construction fails
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let state = build_state(&config).await?;

    let app = app_router(state, &config.static_dir);

    let addr: SocketAddr = config.listen_addr.parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(listener, ServiceExt::<Request>::into_make_service(app))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
