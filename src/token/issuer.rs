use chrono::Duration;
use chrono::Utc;
use jsonwebtoken::decode;
use jsonwebtoken::encode;
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::Algorithm;
use jsonwebtoken::DecodingKey;
use jsonwebtoken::EncodingKey;
use jsonwebtoken::Header;
use jsonwebtoken::Validation;
use uuid::Uuid;

use super::claims::SessionClaims;
use super::errors::TokenError;
use crate::config::JwtSettings;
use crate::models::StoredIdentity;

/// Minimum signing-secret length for HS256 (256 bits).
const MIN_SECRET_BYTES: usize = 32;

/// Session token issuer.
///
/// Signs a [`SessionClaims`] set with HS256 and a process-wide secret.
/// The secret and token lifetime come from [`JwtSettings`], read once at
/// startup; an undersized secret is rejected at construction so it can
/// never surface as a per-issuance failure.
pub struct TokenIssuer {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    algorithm: Algorithm,
    lifetime: Duration,
}

impl TokenIssuer {
    /// Create a token issuer from process configuration.
    ///
    /// # Arguments
    /// * `settings` - Signing secret and token lifetime
    ///
    /// # Returns
    /// Configured TokenIssuer instance
    ///
    /// # Errors
    /// * `WeakSecret` - Secret is shorter than 32 bytes
    pub fn new(settings: &JwtSettings) -> Result<Self, TokenError> {
        let secret = settings.secret.as_bytes();
        if secret.len() < MIN_SECRET_BYTES {
            return Err(TokenError::WeakSecret {
                min: MIN_SECRET_BYTES,
                actual: secret.len(),
            });
        }

        Ok(Self {
            encoding_key: EncodingKey::from_secret(secret),
            decoding_key: DecodingKey::from_secret(secret),
            algorithm: Algorithm::HS256,
            lifetime: Duration::minutes(settings.token_lifetime_minutes),
        })
    }

    /// Issue a signed session token for an identity.
    ///
    /// The claim set carries the identity's id, email, and role name, a
    /// fresh UUID as the unique token id, and an expiry of now plus the
    /// configured lifetime. Two calls for the same identity always
    /// produce different tokens.
    ///
    /// # Arguments
    /// * `identity` - Persisted identity to assert
    ///
    /// # Returns
    /// Serialized JWT string
    ///
    /// # Errors
    /// * `EncodingFailed` - Token encoding failed
    pub fn issue(&self, identity: &StoredIdentity) -> Result<String, TokenError> {
        let now = Utc::now();

        let claims = SessionClaims {
            sub: identity.id.to_string(),
            email: identity.email.clone(),
            role: identity.role.name.clone(),
            jti: Uuid::new_v4().to_string(),
            iat: now.timestamp(),
            exp: (now + self.lifetime).timestamp(),
        };

        let header = Header::new(self.algorithm);

        encode(&header, &claims, &self.encoding_key)
            .map_err(|e| TokenError::EncodingFailed(e.to_string()))
    }

    /// Decode and validate a session token.
    ///
    /// Signature and expiry are checked. This is the primitive the
    /// request-handling layer's validation middleware builds on; within
    /// this crate it mainly backs tests.
    ///
    /// # Arguments
    /// * `token` - Serialized JWT string
    ///
    /// # Returns
    /// Decoded claim set
    ///
    /// # Errors
    /// * `TokenExpired` - Token expiry has passed
    /// * `DecodingFailed` - Signature is invalid or token is malformed
    pub fn decode(&self, token: &str) -> Result<SessionClaims, TokenError> {
        let validation = Validation::new(self.algorithm);

        let token_data =
            decode::<SessionClaims>(token, &self.decoding_key, &validation).map_err(|e| {
                match e.kind() {
                    ErrorKind::ExpiredSignature => TokenError::TokenExpired,
                    _ => TokenError::DecodingFailed(e.to_string()),
                }
            })?;

        Ok(token_data.claims)
    }

    /// Configured token lifetime.
    pub fn lifetime(&self) -> Duration {
        self.lifetime
    }
}
