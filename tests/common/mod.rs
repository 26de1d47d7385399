use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;
use dicom_auth::config::JwtSettings;
use dicom_auth::models::Role;
use dicom_auth::models::StoredIdentity;
use dicom_auth::ports::IdentityRepository;
use dicom_auth::RepositoryError;
use uuid::Uuid;

/// Test settings shared by service and assertions.
pub fn test_settings() -> JwtSettings {
    JwtSettings {
        secret: "integration_secret_at_least_32_bytes!".to_string(),
        token_lifetime_minutes: 45,
    }
}

/// In-memory identity store standing in for the SQL repository.
///
/// Keyed by email; `create` stages the identity and `commit` reports how
/// many staged rows were flushed.
pub struct InMemoryIdentityRepository {
    state: Mutex<State>,
    default_role: Role,
}

struct State {
    identities: HashMap<String, StoredIdentity>,
    pending: u64,
}

impl InMemoryIdentityRepository {
    pub fn new() -> Self {
        Self {
            state: Mutex::new(State {
                identities: HashMap::new(),
                pending: 0,
            }),
            default_role: Role {
                id: Uuid::new_v4(),
                name: "User".to_string(),
            },
        }
    }
}

#[async_trait]
impl IdentityRepository for InMemoryIdentityRepository {
    async fn find_by_email(&self, email: &str) -> Result<Option<StoredIdentity>, RepositoryError> {
        let state = self.state.lock().expect("repository lock poisoned");
        Ok(state.identities.get(email).cloned())
    }

    async fn find_by_id(&self, id: &Uuid) -> Result<Option<StoredIdentity>, RepositoryError> {
        let state = self.state.lock().expect("repository lock poisoned");
        Ok(state.identities.values().find(|i| i.id == *id).cloned())
    }

    async fn find_default_role(&self) -> Result<Role, RepositoryError> {
        Ok(self.default_role.clone())
    }

    async fn create(&self, identity: StoredIdentity) -> Result<bool, RepositoryError> {
        let mut state = self.state.lock().expect("repository lock poisoned");
        if state.identities.contains_key(&identity.email) {
            return Ok(false);
        }
        state.identities.insert(identity.email.clone(), identity);
        state.pending += 1;
        Ok(true)
    }

    async fn commit(&self) -> Result<u64, RepositoryError> {
        let mut state = self.state.lock().expect("repository lock poisoned");
        let flushed = state.pending;
        state.pending = 0;
        Ok(flushed)
    }
}
