use chrono::Duration;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;

/// Claims payload carried inside a signed session token.
///
/// The token is self-contained: identity, role and expiry travel with the
/// signature, so verification needs no server-side session state.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SessionClaims {
    /// Subject: the username the session was issued to
    pub sub: String,

    /// Role label granted at registration (e.g. "seller", "buyer")
    pub role: String,

    /// Issued at (Unix timestamp)
    pub iat: i64,

    /// Expiration time (Unix timestamp); always set
    pub exp: i64,
}

impl SessionClaims {
    /// Create claims for a fresh session expiring `ttl_hours` from now.
    pub fn new(username: impl Into<String>, role: impl Into<String>, ttl_hours: i64) -> Self {
        let now = Utc::now();
        let expiration = now + Duration::hours(ttl_hours);

        Self {
            sub: username.into(),
            role: role.into(),
            iat: now.timestamp(),
            exp: expiration.timestamp(),
        }
    }

    /// Check whether the session is expired at `current_timestamp`.
    pub fn is_expired(&self, current_timestamp: i64) -> bool {
        self.exp < current_timestamp
    }
}
