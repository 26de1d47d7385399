use std::sync::Arc;

use crate::config::JwtSettings;
use crate::errors::AuthError;
use crate::models::AuthResponse;
use crate::models::Credentials;
use crate::models::StoredIdentity;
use crate::password::PasswordHasher;
use crate::ports::IdentityRepository;
use crate::token::TokenError;
use crate::token::TokenIssuer;

/// Rejection message shared by unknown-email and wrong-password logins.
///
/// Both causes deliberately surface the same string so responses do not
/// reveal which email addresses are registered.
pub const MSG_INVALID_CREDENTIALS: &str = "Username / password incorrect";

/// Rejection message for registering an email already on file.
pub const MSG_DUPLICATE_ACCOUNT: &str = "User with this user id already exists";

/// Rejection message when identity creation takes no effect.
pub const MSG_CREATE_FAILED: &str = "Unable to create user";

/// Authentication coordinator over an injected persistence port.
///
/// Orchestrates login and registration: identity lookup through the
/// repository, password verification or hashing, and session-token
/// issuance. Business rejections come back as unsuccessful
/// [`AuthResponse`] values; only infrastructure failures surface as
/// [`AuthError`], so the request-handling layer can map them to a
/// different HTTP status.
///
/// Stateless per request; a single instance is safe to share across
/// concurrent tasks.
pub struct AuthService<R>
where
    R: IdentityRepository,
{
    repository: Arc<R>,
    password_hasher: PasswordHasher,
    token_issuer: TokenIssuer,
}

impl<R> AuthService<R>
where
    R: IdentityRepository,
{
    /// Create a new authentication service.
    ///
    /// # Arguments
    /// * `repository` - Identity persistence implementation
    /// * `settings` - Signing secret and token lifetime
    ///
    /// # Errors
    /// * `WeakSecret` - Signing secret is below the HS256 minimum;
    ///   callers should treat this as a startup failure
    pub fn new(repository: Arc<R>, settings: &JwtSettings) -> Result<Self, TokenError> {
        Ok(Self {
            repository,
            password_hasher: PasswordHasher::new(),
            token_issuer: TokenIssuer::new(settings)?,
        })
    }

    /// Authenticate existing credentials and issue a session token.
    ///
    /// # Arguments
    /// * `credentials` - Email and plaintext password
    ///
    /// # Returns
    /// Successful response with a token, or a rejected response with
    /// the generic credentials message
    ///
    /// # Errors
    /// * `AuthError` - Repository or token-issuance infrastructure failure
    pub async fn login(&self, credentials: Credentials) -> Result<AuthResponse, AuthError> {
        let Some(identity) = self.repository.find_by_email(&credentials.email).await? else {
            tracing::debug!("Login rejected: unknown email");
            return Ok(AuthResponse::rejected(MSG_INVALID_CREDENTIALS));
        };

        let verified = self.password_hasher.verify(
            &identity.password_hash,
            &identity.salt,
            &credentials.password,
        );

        if !verified {
            tracing::debug!(identity_id = %identity.id, "Login rejected: password mismatch");
            return Ok(AuthResponse::rejected(MSG_INVALID_CREDENTIALS));
        }

        self.respond_with_token(&identity)
    }

    /// Register a new identity and issue a session token.
    ///
    /// Checks for an existing account before any hashing work, stages
    /// the new identity with the seeded default role, and only issues a
    /// token once the insert and commit both took effect.
    ///
    /// # Arguments
    /// * `email` - Email address for the new account
    /// * `password` - Plaintext password
    ///
    /// # Returns
    /// Successful response with a token, or a rejected response naming
    /// the duplicate-account or creation-failure condition
    ///
    /// # Errors
    /// * `AuthError` - Repository, hashing, or token-issuance failure
    pub async fn register(
        &self,
        email: String,
        password: String,
    ) -> Result<AuthResponse, AuthError> {
        if self.repository.find_by_email(&email).await?.is_some() {
            tracing::debug!("Registration rejected: email already on file");
            return Ok(AuthResponse::rejected(MSG_DUPLICATE_ACCOUNT));
        }

        let (password_hash, salt) = self.password_hasher.generate(&password)?;
        let role = self.repository.find_default_role().await?;

        let identity = StoredIdentity::new(email, password_hash, salt, role);
        let identity_id = identity.id;

        if !self.repository.create(identity).await? {
            return Ok(AuthResponse::rejected(MSG_CREATE_FAILED));
        }

        // Re-fetch so the token reflects what was actually persisted,
        // not the object handed to the repository.
        let Some(persisted) = self.repository.find_by_id(&identity_id).await? else {
            return Ok(AuthResponse::rejected(MSG_CREATE_FAILED));
        };

        if self.repository.commit().await? == 0 {
            return Ok(AuthResponse::rejected(MSG_CREATE_FAILED));
        }

        tracing::info!(identity_id = %identity_id, "Identity registered");
        self.respond_with_token(&persisted)
    }

    /// Token issuer backing this service.
    ///
    /// Exposed so the request-handling layer can wire its validation
    /// middleware to the same secret and lifetime.
    pub fn token_issuer(&self) -> &TokenIssuer {
        &self.token_issuer
    }

    fn respond_with_token(&self, identity: &StoredIdentity) -> Result<AuthResponse, AuthError> {
        let token = self.token_issuer.issue(identity)?;
        Ok(AuthResponse::authenticated(token))
    }
}
