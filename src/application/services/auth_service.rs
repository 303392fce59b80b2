//! Authentication service: password checks and signed bearer tokens.
//!
//! Passwords are stored as bcrypt hashes of their SHA-256 digest, so passwords
//! longer than bcrypt's 72-byte input limit are not truncated. Tokens are HS256
//! JWTs carrying [`TokenClaims`]. They are stateless: nothing is stored
//! server-side, so logout is purely a client concern.

use chrono::{Duration, Utc};
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde_json::json;
use sha2::{Digest, Sha256};
use std::sync::Arc;

use crate::domain::entities::{NewUser, TokenClaims, User};
use crate::domain::repositories::UserRepository;
use crate::error::AppError;

pub use bcrypt::DEFAULT_COST;

fn prehash(password: &str) -> String {
    hex::encode(Sha256::digest(password.as_bytes()))
}

/// Hashes a password with bcrypt at the given work factor.
///
/// # Errors
///
/// Returns [`AppError::Internal`] if `cost` is outside bcrypt's range (4..=31).
pub fn hash_password(password: &str, cost: u32) -> Result<String, AppError> {
    bcrypt::hash(prehash(password), cost).map_err(|e| {
        tracing::error!(error = %e, cost, "Password hashing failed");
        AppError::internal("Failed to hash password", json!({}))
    })
}

/// Checks `password` against a hash produced by [`hash_password`].
///
/// Malformed hashes never verify.
pub fn verify_password(password: &str, stored: &str) -> bool {
    bcrypt::verify(prehash(password), stored).unwrap_or(false)
}

/// Service for logging users in and authenticating their bearer tokens.
pub struct AuthService<R: UserRepository> {
    repository: Arc<R>,
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
    token_ttl: Duration,
    hash_cost: u32,
}

impl<R: UserRepository> AuthService<R> {
    /// Creates a new authentication service.
    ///
    /// # Arguments
    ///
    /// - `repository` - user directory
    /// - `signing_secret` - HS256 key for issued tokens
    /// - `token_ttl` - lifetime of issued tokens
    pub fn new(repository: Arc<R>, signing_secret: String, token_ttl: Duration) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = 0;
        validation.set_required_spec_claims(&["exp", "sub"]);

        Self {
            repository,
            encoding_key: EncodingKey::from_secret(signing_secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(signing_secret.as_bytes()),
            validation,
            token_ttl,
            hash_cost: DEFAULT_COST,
        }
    }

    /// Overrides the bcrypt work factor used for new password hashes.
    pub fn with_hash_cost(mut self, cost: u32) -> Self {
        self.hash_cost = cost;
        self
    }

    /// Creates the admin account unless an account with that email already exists.
    ///
    /// Returns `true` when a new account was created.
    ///
    /// # Errors
    ///
    /// Propagates repository and hashing errors.
    pub async fn ensure_admin(&self, email: &str, password: &str) -> Result<bool, AppError> {
        if self.repository.find_by_email(email).await?.is_some() {
            return Ok(false);
        }

        self.repository
            .create(NewUser {
                email: email.to_string(),
                password_hash: hash_password(password, self.hash_cost)?,
                is_admin: true,
            })
            .await?;

        tracing::info!(%email, "Seeded admin account");
        Ok(true)
    }

    /// Verifies credentials and issues a bearer token.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Unauthorized`] with "Invalid credentials" for an unknown
    /// email or a wrong password; the two cases are indistinguishable to callers.
    pub async fn login(&self, email: &str, password: &str) -> Result<String, AppError> {
        let user = self.repository.find_by_email(email).await?;

        match user {
            Some(user) if verify_password(password, &user.password_hash) => {
                tracing::info!(email = %user.email, "Login succeeded");
                self.issue_token(&user.email)
            }
            _ => {
                tracing::warn!(%email, "Login rejected");
                Err(AppError::unauthorized("Invalid credentials", json!({})))
            }
        }
    }

    /// Issues a JWT for `subject` valid for the configured lifetime.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] if the expiry is out of range or encoding fails.
    pub fn issue_token(&self, subject: &str) -> Result<String, AppError> {
        let claims = TokenClaims::issue(subject, Utc::now(), self.token_ttl).ok_or_else(|| {
            tracing::error!(ttl_minutes = self.token_ttl.num_minutes(), "Token lifetime out of range");
            AppError::internal("Token lifetime out of range", json!({}))
        })?;

        jsonwebtoken::encode(&Header::default(), &claims, &self.encoding_key).map_err(|e| {
            tracing::error!(error = %e, "Token encoding failed");
            AppError::internal("Failed to issue token", json!({}))
        })
    }

    /// Checks a token's signature and expiry and returns its claims.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Unauthorized`] with "Invalid token" for malformed, tampered
    /// or expired tokens. `details.reason` says which.
    pub fn verify_token(&self, token: &str) -> Result<TokenClaims, AppError> {
        let invalid = |reason: &str| AppError::unauthorized("Invalid token", json!({ "reason": reason }));

        let data = jsonwebtoken::decode::<TokenClaims>(token, &self.decoding_key, &self.validation)
            .map_err(|e| match e.kind() {
                ErrorKind::ExpiredSignature => invalid("expired"),
                ErrorKind::InvalidSignature => invalid("bad signature"),
                ErrorKind::MissingRequiredClaim(_) => invalid("missing claim"),
                _ => invalid("malformed"),
            })?;

        if data.claims.sub.is_empty() {
            return Err(invalid("missing subject"));
        }

        Ok(data.claims)
    }

    /// Authenticates a raw bearer token and resolves its user.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Unauthorized`] if the token is invalid or its user no
    /// longer exists.
    pub async fn authenticate(&self, token: &str) -> Result<User, AppError> {
        let claims = self.verify_token(token)?;

        self.repository
            .find_by_email(&claims.sub)
            .await?
            .ok_or_else(|| AppError::unauthorized("User not found", json!({})))
    }
}
