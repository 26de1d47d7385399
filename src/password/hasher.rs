use argon2::password_hash::rand_core::OsRng;
use argon2::password_hash::Output;
use argon2::password_hash::PasswordHasher as Argon2PasswordHasher;
use argon2::password_hash::SaltString;
use argon2::Argon2;

use super::errors::PasswordError;

/// Password hashing implementation.
///
/// Derives a salted Argon2id digest from a plaintext password and verifies
/// candidates against a stored `(hash, salt)` pair. Hash and salt are kept
/// as separate B64 strings because identity storage holds them in separate
/// columns.
pub struct PasswordHasher;

impl PasswordHasher {
    pub fn new() -> Self {
        Self
    }

    /// Hash a plaintext password with a freshly generated random salt.
    ///
    /// # Arguments
    /// * `password` - Plaintext password to hash
    ///
    /// # Returns
    /// `(hash, salt)` pair, both B64-encoded. Repeated calls with the same
    /// password produce different salts and therefore different hashes.
    ///
    /// # Errors
    /// * `HashingFailed` - Password hashing operation failed
    pub fn generate(&self, password: &str) -> Result<(String, String), PasswordError> {
        let salt = SaltString::generate(&mut OsRng);
        let argon2 = Argon2::default();

        let hash = argon2
            .hash_password(password.as_bytes(), &salt)
            .map_err(|e| PasswordError::HashingFailed(e.to_string()))?;

        let digest = hash
            .hash
            .ok_or_else(|| PasswordError::HashingFailed("empty digest".to_string()))?;

        Ok((digest.to_string(), salt.as_str().to_string()))
    }

    /// Verify a candidate password against a stored hash and salt.
    ///
    /// Recomputes the digest for the candidate under the stored salt and
    /// compares it to the stored hash. The comparison goes through
    /// `password_hash::Output`, which compares in constant time.
    ///
    /// # Arguments
    /// * `stored_hash` - B64 digest produced by a prior `generate` call
    /// * `salt` - B64 salt produced by the same `generate` call
    /// * `candidate` - Plaintext password to check
    ///
    /// # Returns
    /// True iff the candidate matches. Malformed hash or salt input fails
    /// to match rather than erroring.
    pub fn verify(&self, stored_hash: &str, salt: &str, candidate: &str) -> bool {
        let Ok(salt) = SaltString::from_b64(salt) else {
            return false;
        };
        let Ok(expected) = Output::b64_decode(stored_hash) else {
            return false;
        };

        let argon2 = Argon2::default();
        let Ok(recomputed) = argon2.hash_password(candidate.as_bytes(), &salt) else {
            return false;
        };

        match recomputed.hash {
            Some(digest) => digest == expected,
            None => false,
        }
    }
}

impl Default for PasswordHasher {
    fn default() -> Self {
        Self::new()
    }
}
