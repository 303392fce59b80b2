//! Claims carried by a signed bearer token.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

/// JWT payload: subject (user email), issued-at and expiry as unix seconds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenClaims {
    pub sub: String,
    pub iat: i64,
    pub exp: i64,
}

impl TokenClaims {
    /// Builds claims for `subject` issued at `now`, valid for `ttl`.
    ///
    /// Returns `None` when the expiry falls outside the representable date range.
    pub fn issue(subject: impl Into<String>, now: DateTime<Utc>, ttl: Duration) -> Option<Self> {
        let expires_at = now.checked_add_signed(ttl)?;

        Some(Self {
            sub: subject.into(),
            iat: now.timestamp(),
            exp: expires_at.timestamp(),
        })
    }
}
