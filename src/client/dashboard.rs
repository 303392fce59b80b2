//! Dashboard controller: bootstrap plus the four user flows.
//!
//! Every flow catches its own failure and renders it into the view; none of
//! them return an error. The controller owns the view, so flows run one at a
//! time and a response can never land on a view another flow has moved on from.

use chrono::{DateTime, TimeZone};
use std::fmt::Display;
use std::sync::Arc;

use crate::api::dto::ServerTime;
use crate::client::api::{ApiClient, ClientError};
use crate::client::session::SessionStore;
use crate::client::view::{DashboardView, Tone};

pub const STATUS_OPERATIONAL: &str = "✓ System Status: Operational";
pub const STATUS_UNAVAILABLE: &str = "System status unavailable";
pub const PROCESSING: &str = "Processing...";
pub const INVALID_DATE: &str = "Invalid Date";

/// Formats a timestamp like an en-US `toLocaleString`: `1/15/2024, 1:05:09 PM`.
pub fn locale_string<Tz: TimeZone>(dt: &DateTime<Tz>) -> String
where
    Tz::Offset: Display,
{
    dt.format("%-m/%-d/%Y, %-I:%M:%S %p").to_string()
}

/// Local-time rendering of the ping timestamp, or [`INVALID_DATE`].
pub fn format_server_time(t: Option<&ServerTime>) -> String {
    t.and_then(ServerTime::to_local)
        .map(|dt| locale_string(&dt))
        .unwrap_or_else(|| INVALID_DATE.to_string())
}

/// Drives a [`DashboardView`] against the backend.
pub struct Dashboard<V: DashboardView> {
    api: ApiClient,
    session: Arc<dyn SessionStore>,
    view: V,
}

impl<V: DashboardView> Dashboard<V> {
    pub fn new(api: ApiClient, session: Arc<dyn SessionStore>, view: V) -> Self {
        Self { api, session, view }
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn view_mut(&mut self) -> &mut V {
        &mut self.view
    }

    pub fn into_view(self) -> V {
        self.view
    }

    pub fn session(&self) -> &Arc<dyn SessionStore> {
        &self.session
    }

    /// Initial load: dashboard plus a status refresh when a token is stored,
    /// login otherwise. Token validity is not checked here.
    pub async fn bootstrap(&mut self) {
        if self.session.get().is_some() {
            self.view.show_dashboard();
            self.load_system_status().await;
        } else {
            self.view.show_login();
        }
    }

    /// Submits the login form.
    ///
    /// On success the token is stored, the error slot hidden, the dashboard shown
    /// and the status refreshed. On failure the error slot shows the message and
    /// the form keeps its values.
    pub async fn handle_login(&mut self) {
        let result = self.login().await;

        match result {
            Ok(()) => {
                self.view.login_error_mut().hide();
                self.view.show_dashboard();
                self.load_system_status().await;
            }
            Err(e) => {
                tracing::info!(error = %e, status = ?e.status(), "Login failed");
                let error = self.view.login_error_mut();
                error.render(e.to_string(), Tone::Error);
                error.show();
            }
        }
    }

    async fn login(&mut self) -> Result<(), ClientError> {
        let response = self
            .api
            .login(self.view.email(), self.view.password())
            .await?;
        self.session.set(&response.access_token)?;
        Ok(())
    }

    /// Clears the token, empties the login form and shows the login view.
    ///
    /// Nothing is sent to the backend.
    pub fn handle_logout(&mut self) {
        if let Err(e) = self.session.clear() {
            tracing::warn!(error = %e, "Failed to clear session token");
        }
        self.view.reset_login_form();
        self.view.show_login();
    }

    /// Refreshes the status slot from `GET /api/ping`.
    pub async fn load_system_status(&mut self) {
        let result = self.api.ping().await;
        let status = self.view.status_mut();

        match result {
            Ok(ping) if ping.ok => {
                let server_time = format_server_time(ping.t.as_ref());
                status.render(
                    format!("{STATUS_OPERATIONAL}\nServer Time: {server_time}"),
                    Tone::Success,
                );
            }
            Ok(_) => status.render(STATUS_UNAVAILABLE, Tone::Neutral),
            Err(e) => {
                tracing::warn!(error = %e, "Status check failed");
                status.render(format!("Error checking system status: {e}"), Tone::Error);
            }
        }
    }

    /// Sends the prompt field to the assistant and renders the reply.
    ///
    /// The response slot shows [`PROCESSING`] while the request is in flight.
    /// The prompt field is emptied only on success.
    pub async fn handle_assistant(&mut self) {
        let prompt = self.view.prompt().to_string();
        let token = self.session.get().unwrap_or_default();

        let response = self.view.response_mut();
        response.set_loading(true);
        response.show();
        response.render(PROCESSING, Tone::Neutral);

        let result = self.api.assistant(&token, &prompt).await;

        let response = self.view.response_mut();
        response.set_loading(false);
        match result {
            Ok(reply) => {
                response.render(reply.text, Tone::Neutral);
                self.view.clear_prompt();
            }
            Err(e) => {
                tracing::info!(error = %e, status = ?e.status(), "Assistant request failed");
                response.render(format!("Error: {e}"), Tone::Error);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::session::{MockSessionStore, SessionError};
    use crate::client::view::{View, ViewState};
    use chrono::Utc;
    use std::io;
    use url::Url;

    /// Client pointed at a port nothing listens on; every request fails fast.
    fn unreachable_api() -> ApiClient {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        ApiClient::new(Url::parse(&format!("http://{addr}")).unwrap(), None).unwrap()
    }

    #[test]
    fn test_locale_string_shape() {
        let dt = Utc.with_ymd_and_hms(2024, 1, 15, 13, 5, 9).unwrap();
        assert_eq!(locale_string(&dt), "1/15/2024, 1:05:09 PM");

        let midnight = Utc.with_ymd_and_hms(2024, 11, 3, 0, 0, 0).unwrap();
        assert_eq!(locale_string(&midnight), "11/3/2024, 12:00:00 AM");
    }

    #[test]
    fn test_format_server_time_invalid() {
        assert_eq!(format_server_time(None), INVALID_DATE);
        assert_eq!(
            format_server_time(Some(&ServerTime::Text("soon".to_string()))),
            INVALID_DATE
        );
    }

    #[tokio::test]
    async fn test_bootstrap_without_token_shows_login() {
        let mut session = MockSessionStore::new();
        session.expect_get().times(1).returning(|| None);

        let mut dashboard = Dashboard::new(unreachable_api(), Arc::new(session), ViewState::new());
        dashboard.bootstrap().await;

        assert_eq!(dashboard.view().visible_view(), View::Login);
        assert_eq!(dashboard.view().status().content(), "");
    }

    #[tokio::test]
    async fn test_logout_clears_token_and_form() {
        let mut session = MockSessionStore::new();
        session.expect_clear().times(1).returning(|| Ok(()));

        let mut view = ViewState::new();
        view.set_email("a@b.c");
        view.set_password("pw");
        view.show_dashboard();

        let mut dashboard = Dashboard::new(unreachable_api(), Arc::new(session), view);
        dashboard.handle_logout();

        let view = dashboard.view();
        assert_eq!(view.visible_view(), View::Login);
        assert_eq!(view.email(), "");
        assert_eq!(view.password(), "");
    }

    #[tokio::test]
    async fn test_logout_survives_storage_failure() {
        let mut session = MockSessionStore::new();
        session
            .expect_clear()
            .times(1)
            .returning(|| Err(SessionError::Io(io::Error::other("read-only"))));

        let mut view = ViewState::new();
        view.show_dashboard();

        let mut dashboard = Dashboard::new(unreachable_api(), Arc::new(session), view);
        dashboard.handle_logout();

        assert_eq!(dashboard.view().visible_view(), View::Login);
    }

    #[tokio::test]
    async fn test_status_network_failure_renders_error() {
        let mut dashboard = Dashboard::new(
            unreachable_api(),
            Arc::new(MockSessionStore::new()),
            ViewState::new(),
        );

        dashboard.load_system_status().await;

        let status = dashboard.view().status();
        assert!(status.content().starts_with("Error checking system status: "));
        assert!(status.content().len() > "Error checking system status: ".len());
        assert_eq!(status.tone(), Tone::Error);
    }

    #[tokio::test]
    async fn test_login_network_failure_keeps_form() {
        let mut session = MockSessionStore::new();
        session.expect_set().times(0);

        let mut view = ViewState::new();
        view.set_email("a@b.c");
        view.set_password("pw");

        let mut dashboard = Dashboard::new(unreachable_api(), Arc::new(session), view);
        dashboard.handle_login().await;

        let view = dashboard.view();
        assert_eq!(view.visible_view(), View::Login);
        assert!(view.login_error().is_visible());
        assert_eq!(view.email(), "a@b.c");
        assert_eq!(view.password(), "pw");
    }

    #[tokio::test]
    async fn test_assistant_network_failure_clears_loading() {
        let mut session = MockSessionStore::new();
        session.expect_get().times(1).returning(|| None);

        let mut view = ViewState::new();
        view.set_prompt("hello");

        let mut dashboard = Dashboard::new(unreachable_api(), Arc::new(session), view);
        dashboard.handle_assistant().await;

        let view = dashboard.view();
        let response = view.response();
        assert!(!response.is_loading());
        assert!(response.is_visible());
        assert!(response.content().starts_with("Error: "));
        assert_eq!(response.tone(), Tone::Error);
        assert_eq!(view.prompt(), "hello");
    }
}
