use std::collections::HashMap;
use std::sync::RwLock;

use async_trait::async_trait;

use crate::domain::identity::models::Identity;
use crate::domain::identity::ports::CredentialStore;
use crate::identity::errors::StoreError;

/// In-memory credential store for development and tests.
///
/// A map behind a lock, keyed by email. Enforces the same email uniqueness
/// on save that the Postgres store gets from its unique constraint.
pub struct InMemoryCredentialStore {
    identities: RwLock<HashMap<String, Identity>>,
}

impl InMemoryCredentialStore {
    pub fn new() -> Self {
        Self {
            identities: RwLock::new(HashMap::new()),
        }
    }
}

impl Default for InMemoryCredentialStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CredentialStore for InMemoryCredentialStore {
    async fn find_by_email(&self, email: &str) -> Result<Option<Identity>, StoreError> {
        let identities = self
            .identities
            .read()
            .map_err(|_| StoreError::Database("identity map lock poisoned".to_string()))?;

        Ok(identities.get(email).cloned())
    }

    async fn exists_by_email(&self, email: &str) -> Result<bool, StoreError> {
        let identities = self
            .identities
            .read()
            .map_err(|_| StoreError::Database("identity map lock poisoned".to_string()))?;

        Ok(identities.contains_key(email))
    }

    async fn save(&self, identity: Identity) -> Result<Identity, StoreError> {
        let mut identities = self
            .identities
            .write()
            .map_err(|_| StoreError::Database("identity map lock poisoned".to_string()))?;

        let email = identity.email.as_str().to_string();
        if identities.contains_key(&email) {
            return Err(StoreError::DuplicateEmail(email));
        }

        identities.insert(email, identity.clone());
        Ok(identity)
    }
}
