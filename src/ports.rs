use async_trait::async_trait;
use uuid::Uuid;

use crate::errors::RepositoryError;
use crate::models::Role;
use crate::models::StoredIdentity;

/// Persistence port for identities and roles.
///
/// The authentication core is injected with an implementation of this
/// trait and never touches a storage engine directly; production wires in
/// the SQL-backed repository, tests wire in a mock or an in-memory fake.
#[async_trait]
pub trait IdentityRepository: Send + Sync + 'static {
    /// Retrieve an identity by email address.
    ///
    /// # Arguments
    /// * `email` - Email address to search for
    ///
    /// # Returns
    /// Optional identity (None if not found)
    ///
    /// # Errors
    /// * `RepositoryError` - Storage operation failed
    async fn find_by_email(&self, email: &str) -> Result<Option<StoredIdentity>, RepositoryError>;

    /// Retrieve an identity by id.
    ///
    /// # Arguments
    /// * `id` - Identity id
    ///
    /// # Returns
    /// Optional identity (None if not found)
    ///
    /// # Errors
    /// * `RepositoryError` - Storage operation failed
    async fn find_by_id(&self, id: &Uuid) -> Result<Option<StoredIdentity>, RepositoryError>;

    /// Retrieve the default role assigned at registration.
    ///
    /// The role table is seeded at system setup, so this lookup is
    /// expected to succeed; a missing seed surfaces as a repository
    /// error rather than an Option.
    ///
    /// # Errors
    /// * `RepositoryError` - Storage operation failed or seed missing
    async fn find_default_role(&self) -> Result<Role, RepositoryError>;

    /// Stage a new identity for insertion.
    ///
    /// # Arguments
    /// * `identity` - Identity to create
    ///
    /// # Returns
    /// True if the insert was accepted, false if no row was created
    ///
    /// # Errors
    /// * `RepositoryError` - Storage operation failed
    async fn create(&self, identity: StoredIdentity) -> Result<bool, RepositoryError>;

    /// Commit staged changes.
    ///
    /// # Returns
    /// Number of rows affected
    ///
    /// # Errors
    /// * `RepositoryError` - Commit failed
    async fn commit(&self) -> Result<u64, RepositoryError>;
}
