use serde::Deserialize;
use serde::Serialize;

/// Claim set embedded in a session token.
///
/// Carries the authenticated identity (subject id, email, role) plus the
/// standard bookkeeping claims: a unique token id (`jti`), issued-at and
/// absolute expiry timestamps.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SessionClaims {
    /// Subject (identity id as UUID string)
    pub sub: String,

    /// Email address of the authenticated identity
    pub email: String,

    /// Role name
    pub role: String,

    /// Unique token identifier, fresh per issuance
    pub jti: String,

    /// Issued at (Unix timestamp)
    pub iat: i64,

    /// Expiration time (Unix timestamp)
    pub exp: i64,
}

impl SessionClaims {
    /// Check whether the token is expired at the given timestamp.
    pub fn is_expired(&self, current_timestamp: i64) -> bool {
        self.exp < current_timestamp
    }
}
