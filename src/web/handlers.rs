//! Dashboard shell page handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::response::IntoResponse;

/// Template for the dashboard shell.
///
/// Renders `templates/index.html` with both panels; the login panel is visible
/// and the dashboard panel hidden until the client switches views.
#[derive(Template, WebTemplate)]
#[template(path = "index.html")]
pub struct IndexTemplate {
    pub title: &'static str,
    pub version: &'static str,
}

/// Renders the dashboard shell page.
///
/// # Endpoint
///
/// `GET /`
pub async fn index_handler() -> impl IntoResponse {
    IndexTemplate {
        title: "Command Center",
        version: env!("CARGO_PKG_VERSION"),
    }
}
