//! Shared application state injected into every handler.

use std::sync::Arc;

use crate::application::services::{AssistantService, AuthService};
use crate::infrastructure::persistence::InMemoryUserRepository;

#[derive(Clone)]
pub struct AppState {
    pub auth_service: Arc<AuthService<InMemoryUserRepository>>,
    pub assistant_service: Arc<AssistantService>,
}

impl AppState {
    pub fn new(
        auth_service: Arc<AuthService<InMemoryUserRepository>>,
        assistant_service: Arc<AssistantService>,
    ) -> Self {
        Self {
            auth_service,
            assistant_service,
        }
    }
}
