//! Backend configuration loaded from environment variables.
//!
//! Configuration is loaded once at startup and validated before the server starts.
//!
//! ## Required Variables
//!
//! - `TOKEN_SIGNING_SECRET` - HS256 key used to sign and verify bearer tokens
//!
//! ## Optional Variables
//!
//! - `LISTEN` - Bind address (default: `0.0.0.0:8000`)
//! - `TOKEN_TTL_MINUTES` - Bearer token lifetime (default: 10080, one week)
//! - `ADMIN_EMAIL` / `ADMIN_PASSWORD` - Seeded admin account (empty disables seeding)
//! - `OPENAI_API_KEY` - Enables the assistant backend (empty means unset)
//! - `OPENAI_MODEL` - Chat model (default: `gpt-4o-mini`)
//! - `OPENAI_URL` - Chat completions endpoint
//! - `STATIC_DIR` - Directory served under `/static` when it exists (default: `static`)
//! - `RUST_LOG` - Log level (default: `info`)
//! - `LOG_FORMAT` - Log format: `text` or `json` (default: `text`)

use anyhow::{Context, Result};
use std::env;

pub const DEFAULT_OPENAI_URL: &str = "https://api.openai.com/v1/chat/completions";

/// Longest accepted token lifetime: ten years.
pub const MAX_TOKEN_TTL_MINUTES: i64 = 60 * 24 * 365 * 10;

/// Service configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub listen_addr: String,
    pub log_level: String,
    pub log_format: String,
    /// HS256 key for bearer tokens. Loaded from `TOKEN_SIGNING_SECRET`. Must be non-empty.
    pub token_signing_secret: String,
    pub token_ttl_minutes: i64,
    pub admin_email: String,
    pub admin_password: String,
    pub openai_api_key: Option<String>,
    pub openai_model: String,
    pub openai_url: String,
    pub static_dir: String,
}

impl Config {
    /// Loads configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if `TOKEN_SIGNING_SECRET` is missing or `TOKEN_TTL_MINUTES`
    /// is not a number.
    pub fn from_env() -> Result<Self> {
        let listen_addr = env::var("LISTEN").unwrap_or_else(|_| "0.0.0.0:8000".to_string());
        let log_level = env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
        let log_format = env::var("LOG_FORMAT").unwrap_or_else(|_| "text".to_string());

        let token_signing_secret =
            env::var("TOKEN_SIGNING_SECRET").context("TOKEN_SIGNING_SECRET must be set")?;

        let token_ttl_minutes = match env::var("TOKEN_TTL_MINUTES") {
            Ok(v) if !v.is_empty() => v.parse::<i64>().with_context(|| {
                format!("TOKEN_TTL_MINUTES must be a whole number of minutes, got '{v}'")
            })?,
            _ => 60 * 24 * 7,
        };

        let admin_email =
            env::var("ADMIN_EMAIL").unwrap_or_else(|_| "admin@example.com".to_string());
        let admin_password =
            env::var("ADMIN_PASSWORD").unwrap_or_else(|_| "ChangeMeNow123!".to_string());

        // Empty means unset.
        let openai_api_key = env::var("OPENAI_API_KEY").ok().filter(|k| !k.is_empty());
        let openai_model = env::var("OPENAI_MODEL").unwrap_or_else(|_| "gpt-4o-mini".to_string());
        let openai_url = env::var("OPENAI_URL").unwrap_or_else(|_| DEFAULT_OPENAI_URL.to_string());

        let static_dir = env::var("STATIC_DIR").unwrap_or_else(|_| "static".to_string());

        Ok(Self {
            listen_addr,
            log_level,
            log_format,
            token_signing_secret,
            token_ttl_minutes,
            admin_email,
            admin_password,
            openai_api_key,
            openai_model,
            openai_url,
            static_dir,
        })
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `log_format` is not `text` or `json`
    /// - `listen_addr` is invalid
    /// - the signing secret is empty
    /// - the token lifetime is not between 1 minute and [`MAX_TOKEN_TTL_MINUTES`]
    /// - `openai_url` is not an http(s) URL
    pub fn validate(&self) -> Result<()> {
        if self.log_format != "text" && self.log_format != "json" {
            anyhow::bail!(
                "LOG_FORMAT must be 'text' or 'json', got '{}'",
                self.log_format
            );
        }

        if !self.listen_addr.contains(':') {
            anyhow::bail!(
                "LISTEN must be in format 'host:port', got '{}'",
                self.listen_addr
            );
        }

        if self.token_signing_secret.is_empty() {
            anyhow::bail!("TOKEN_SIGNING_SECRET must not be empty");
        }

        if self.token_ttl_minutes <= 0 || self.token_ttl_minutes > MAX_TOKEN_TTL_MINUTES {
            anyhow::bail!(
                "TOKEN_TTL_MINUTES must be between 1 and {}, got {}",
                MAX_TOKEN_TTL_MINUTES,
                self.token_ttl_minutes
            );
        }

        if !self.openai_url.starts_with("http://") && !self.openai_url.starts_with("https://") {
            anyhow::bail!(
                "OPENAI_URL must start with 'http://' or 'https://', got '{}'",
                self.openai_url
            );
        }

        if self.openai_model.trim().is_empty() {
            anyhow::bail!("OPENAI_MODEL must not be empty");
        }

        Ok(())
    }

    /// Returns whether the assistant has a real chat backend.
    pub fn is_assistant_enabled(&self) -> bool {
        self.openai_api_key.is_some()
    }

    /// Returns whether an admin account should be seeded at startup.
    pub fn should_seed_admin(&self) -> bool {
        !self.admin_email.is_empty() && !self.admin_password.is_empty()
    }

    /// Prints configuration summary (without sensitive data).
    pub fn print_summary(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Listen address: {}", self.listen_addr);
        tracing::info!("  Token lifetime: {} min", self.token_ttl_minutes);

        if self.should_seed_admin() {
            tracing::info!("  Admin account: {}", self.admin_email);
        } else {
            tracing::info!("  Admin account: not seeded");
        }

        match self.openai_api_key {
            Some(ref key) => tracing::info!(
                "  Assistant: {} via {} (key {})",
                self.openai_model,
                self.openai_url,
                mask_secret(key)
            ),
            None => tracing::info!("  Assistant: disabled (OPENAI_API_KEY not set)"),
        }

        tracing::info!("  Static dir: {}", self.static_dir);
        tracing::info!("  Log level: {}", self.log_level);
        tracing::info!("  Log format: {}", self.log_format);
    }
}

/// Masks a secret for logging, keeping only the last four characters.
///
/// Secrets of four characters or fewer are fully masked.
fn mask_secret(secret: &str) -> String {
    let chars: Vec<char> = secret.chars().collect();
    if chars.len() <= 4 {
        return "***".to_string();
    }
    let tail: String = chars[chars.len() - 4..].iter().collect();
    format!("***{}", tail)
}

/// Loads and validates configuration from environment variables.
///
/// # Errors
///
/// Returns an error if required variables are missing or validation fails.
///
/// # Note
///
/// This function expects environment variables to be already loaded
/// (e.g., via `dotenvy::dotenv()` in `main.rs`).
pub fn load_from_env() -> Result<Config> {
    let config = Config::from_env()?;
    config.validate()?;
    Ok(config)
}
