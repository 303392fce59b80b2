//! Dashboard client configuration loaded from environment variables.
//!
//! ## Optional Variables
//!
//! - `DASHBOARD_BASE_URL` - Backend origin (default: `http://127.0.0.1:8000`)
//! - `DASHBOARD_SESSION_DIR` - Root for per-origin token files
//!   (default: platform data dir + `command-center`)
//! - `DASHBOARD_REQUEST_TIMEOUT_SECS` - Per-request timeout (default: none)
//! - `RUST_LOG` - Log level (default: `warn`)
//! - `LOG_FORMAT` - Log format: `text` or `json` (default: `text`)

use anyhow::{Context, Result};
use std::env;
use std::path::PathBuf;
use std::time::Duration;
use url::Url;

use crate::client::api::ApiClient;
use crate::client::session::FileSessionStore;

pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:8000";

#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub base_url: Url,
    pub session_dir: PathBuf,
    pub request_timeout: Option<Duration>,
    pub log_level: String,
    pub log_format: String,
}

impl ClientConfig {
    /// Loads configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if `DASHBOARD_BASE_URL` is not a URL or the timeout is
    /// not a whole number of seconds.
    pub fn from_env() -> Result<Self> {
        let base_url = env::var("DASHBOARD_BASE_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
        let base_url = Url::parse(&base_url)
            .with_context(|| format!("DASHBOARD_BASE_URL is not a valid URL: '{base_url}'"))?;

        let session_dir = env::var("DASHBOARD_SESSION_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| default_session_dir());

        let request_timeout = match env::var("DASHBOARD_REQUEST_TIMEOUT_SECS") {
            Ok(v) if !v.is_empty() => Some(Duration::from_secs(v.parse::<u64>().with_context(|| {
                format!("DASHBOARD_REQUEST_TIMEOUT_SECS must be a number, got '{v}'")
            })?)),
            _ => None,
        };

        let log_level = env::var("RUST_LOG").unwrap_or_else(|_| "warn".to_string());
        let log_format = env::var("LOG_FORMAT").unwrap_or_else(|_| "text".to_string());

        Ok(Self {
            base_url,
            session_dir,
            request_timeout,
            log_level,
            log_format,
        })
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - the base URL is not `http` or `https`, or has no host
    /// - the timeout is zero
    /// - `log_format` is not `text` or `json`
    pub fn validate(&self) -> Result<()> {
        if !matches!(self.base_url.scheme(), "http" | "https") {
            anyhow::bail!(
                "DASHBOARD_BASE_URL must use http or https, got '{}'",
                self.base_url
            );
        }

        if self.base_url.host_str().is_none() {
            anyhow::bail!("DASHBOARD_BASE_URL must have a host, got '{}'", self.base_url);
        }

        if self.request_timeout == Some(Duration::ZERO) {
            anyhow::bail!("DASHBOARD_REQUEST_TIMEOUT_SECS must be greater than 0");
        }

        if self.log_format != "text" && self.log_format != "json" {
            anyhow::bail!(
                "LOG_FORMAT must be 'text' or 'json', got '{}'",
                self.log_format
            );
        }

        Ok(())
    }

    /// File-backed session store for this configuration's origin.
    pub fn session_store(&self) -> FileSessionStore {
        FileSessionStore::for_origin(&self.session_dir, &self.base_url)
    }

    /// HTTP client for this configuration's backend.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built.
    pub fn api_client(&self) -> Result<ApiClient> {
        ApiClient::new(self.base_url.clone(), self.request_timeout)
            .context("Failed to build HTTP client")
    }
}

fn default_session_dir() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("command-center")
}

/// Loads and validates client configuration from environment variables.
///
/// # Errors
///
/// Returns an error if a variable is malformed or validation fails.
pub fn load_from_env() -> Result<ClientConfig> {
    let config = ClientConfig::from_env()?;
    config.validate()?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    fn config(base_url: &str) -> ClientConfig {
        ClientConfig {
            base_url: Url::parse(base_url).unwrap(),
            session_dir: PathBuf::from("/tmp/command-center-test"),
            request_timeout: None,
            log_level: "warn".to_string(),
            log_format: "text".to_string(),
        }
    }

    #[test]
    fn test_validation() {
        assert!(config("http://127.0.0.1:8000").validate().is_ok());
        assert!(config("https://dash.example.com").validate().is_ok());
        assert!(config("ftp://example.com").validate().is_err());

        let mut c = config("http://127.0.0.1:8000");
        c.request_timeout = Some(Duration::ZERO);
        assert!(c.validate().is_err());

        c.request_timeout = Some(Duration::from_secs(5));
        c.log_format = "xml".to_string();
        assert!(c.validate().is_err());
    }

    #[test]
    fn test_session_store_is_scoped_to_origin() {
        let store = config("http://127.0.0.1:8000/ignored/path").session_store();

        assert_eq!(
            store.path(),
            PathBuf::from("/tmp/command-center-test")
                .join("http___127.0.0.1_8000")
                .join("auth_token")
        );
    }

    #[test]
    #[serial]
    fn test_from_env() {
        // SAFETY: Tests are run serially due to #[serial], so no concurrent access
        unsafe {
            env::set_var("DASHBOARD_BASE_URL", "http://dash.local:9000");
            env::set_var("DASHBOARD_SESSION_DIR", "/var/lib/cc");
            env::set_var("DASHBOARD_REQUEST_TIMEOUT_SECS", "15");
        }

        let config = ClientConfig::from_env().unwrap();

        assert_eq!(config.base_url.as_str(), "http://dash.local:9000/");
        assert_eq!(config.session_dir, PathBuf::from("/var/lib/cc"));
        assert_eq!(config.request_timeout, Some(Duration::from_secs(15)));

        // Cleanup
        unsafe {
            env::remove_var("DASHBOARD_BASE_URL");
            env::remove_var("DASHBOARD_SESSION_DIR");
            env::remove_var("DASHBOARD_REQUEST_TIMEOUT_SECS");
        }
    }

    #[test]
    #[serial]
    fn test_from_env_rejects_bad_values() {
        // SAFETY: Tests are run serially
        unsafe {
            env::set_var("DASHBOARD_BASE_URL", "not a url");
        }
        assert!(ClientConfig::from_env().is_err());

        unsafe {
            env::remove_var("DASHBOARD_BASE_URL");
            env::set_var("DASHBOARD_REQUEST_TIMEOUT_SECS", "soon");
        }
        assert!(ClientConfig::from_env().is_err());

        unsafe {
            env::remove_var("DASHBOARD_REQUEST_TIMEOUT_SECS");
        }
    }
}
