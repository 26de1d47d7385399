use chrono::DateTime;
use chrono::Utc;
use uuid::Uuid;

/// Login credentials.
///
/// Request-scoped; the plaintext password lives only for the duration of
/// the authentication call and is never persisted.
#[derive(Debug, Clone)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

/// Role record referenced by an identity.
///
/// Roles are a small seeded set; registration assigns the default role
/// looked up through the repository.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Role {
    pub id: Uuid,
    pub name: String,
}

/// Persisted user identity.
///
/// Owned by the persistence layer. The authentication core reads it at
/// login and requests its creation at registration; it never mutates an
/// existing record. `password_hash` and `salt` are the pair produced by
/// [`crate::password::PasswordHasher::generate`].
#[derive(Debug, Clone)]
pub struct StoredIdentity {
    pub id: Uuid,
    pub email: String,
    pub password_hash: String,
    pub salt: String,
    pub role: Role,
    pub first_name: String,
    pub last_name: String,
    pub phone_number: String,
    pub created_at: DateTime<Utc>,
}

impl StoredIdentity {
    /// Build a new identity for registration.
    ///
    /// Generates a fresh id, stamps the creation time, and leaves the
    /// optional profile fields empty; they are filled in later through
    /// the profile-editing surface, not at registration.
    pub fn new(email: String, password_hash: String, salt: String, role: Role) -> Self {
        Self {
            id: Uuid::new_v4(),
            email,
            password_hash,
            salt,
            role,
            first_name: String::new(),
            last_name: String::new(),
            phone_number: String::new(),
            created_at: Utc::now(),
        }
    }
}

/// Outcome of a login or registration attempt.
///
/// Exactly one of `token` or a non-empty `errors` list is populated;
/// the constructors below are the only way the core builds one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthResponse {
    pub success: bool,
    pub token: Option<String>,
    pub errors: Vec<String>,
}

impl AuthResponse {
    /// Successful outcome carrying a session token.
    pub fn authenticated(token: String) -> Self {
        Self {
            success: true,
            token: Some(token),
            errors: Vec::new(),
        }
    }

    /// Rejected outcome carrying a user-facing error message.
    pub fn rejected(message: impl Into<String>) -> Self {
        Self {
            success: false,
            token: None,
            errors: vec![message.into()],
        }
    }
}
