//! Authentication core for the DICOM documentation service
//!
//! Provides the credential-verification and session-token subsystem:
//! - Password hashing with per-credential salts (Argon2id)
//! - Signed session tokens with bounded lifetime (HS256 JWT)
//! - Login and registration coordination over an injected persistence port
//!
//! The HTTP layer and the storage engine stay outside this crate; storage
//! is reached only through the [`IdentityRepository`] trait, which keeps
//! the core testable against an in-memory fake.
//!
//! # Examples
//!
//! ## Password Hashing
//! ```
//! use dicom_auth::PasswordHasher;
//!
//! let hasher = PasswordHasher::new();
//! let (hash, salt) = hasher.generate("my_password").unwrap();
//! assert!(hasher.verify(&hash, &salt, "my_password"));
//! assert!(!hasher.verify(&hash, &salt, "not_my_password"));
//! ```
//!
//! ## Session Tokens
//! ```
//! use dicom_auth::config::JwtSettings;
//! use dicom_auth::models::{Role, StoredIdentity};
//! use dicom_auth::TokenIssuer;
//!
//! let settings = JwtSettings {
//!     secret: "secret_key_at_least_32_bytes_long!".to_string(),
//!     token_lifetime_minutes: 45,
//! };
//! let issuer = TokenIssuer::new(&settings).unwrap();
//!
//! let identity = StoredIdentity::new(
//!     "radiologist@clinic.example".to_string(),
//!     "hash".to_string(),
//!     "salt".to_string(),
//!     Role { id: uuid::Uuid::new_v4(), name: "User".to_string() },
//! );
//!
//! let token = issuer.issue(&identity).unwrap();
//! let claims = issuer.decode(&token).unwrap();
//! assert_eq!(claims.sub, identity.id.to_string());
//! ```

pub mod config;
pub mod errors;
pub mod models;
pub mod password;
pub mod ports;
pub mod service;
pub mod token;

// Re-export commonly used items
pub use config::Config;
pub use config::JwtSettings;
pub use errors::AuthError;
pub use errors::RepositoryError;
pub use models::AuthResponse;
pub use models::Credentials;
pub use models::Role;
pub use models::StoredIdentity;
pub use password::PasswordError;
pub use password::PasswordHasher;
pub use ports::IdentityRepository;
pub use service::AuthService;
pub use token::SessionClaims;
pub use token::TokenError;
pub use token::TokenIssuer;
